use std::{fs, path::PathBuf};

use anyhow::{Context, Result};
use chrono::{DateTime, FixedOffset};
use chrono_tz::Tz;
use clap::Parser;
use coffice_hours::{
    Clock, Config, FixedClock, OpeningHoursEvaluator, OpeningStatus, ScheduleDecoder, SystemClock,
};
use log::info;
use serde::Serialize;

#[derive(Debug, Clone, Parser)]
#[command(
    name = "coffice-hours",
    version,
    about = "Evaluate a cafe's opening hours from a backend payload"
)]
struct Cli {
    /// Cafe payload as returned by the backend.
    venue: PathBuf,
    #[arg(long)]
    config: Option<PathBuf>,
    /// Evaluate at this RFC 3339 instant instead of the current time.
    #[arg(long)]
    now: Option<DateTime<FixedOffset>>,
}

#[derive(Serialize)]
struct Report {
    name: String,
    evaluated_at: String,
    #[serde(flatten)]
    status: OpeningStatus,
    detail: String,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let report = build_report(&Cli::parse())?;
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

/// `--now` is moved into the venue's timezone before anything reads its weekday.
fn clock_for(now: Option<DateTime<FixedOffset>>, timezone: Tz) -> Box<dyn Clock> {
    match now {
        Some(now) => Box::new(FixedClock::new(now.with_timezone(&timezone))),
        None => Box::new(SystemClock::new(timezone)),
    }
}

fn build_report(cli: &Cli) -> Result<Report> {
    let config = match &cli.config {
        Some(path) => Config::from_file(path)?,
        None => Config::default(),
    };
    let clock = clock_for(cli.now, config.timezone);

    let source = fs::read_to_string(&cli.venue)
        .with_context(|| format!("Failed to read venue from {}", cli.venue.display()))?;
    let cafe = ScheduleDecoder::new()
        .decode_cafe(&source)
        .with_context(|| format!("Invalid venue payload in {}", cli.venue.display()))?;
    info!(
        "Loaded '{}' with {} opening rules",
        cafe.name,
        cafe.schedule.rules().len()
    );

    let evaluator = OpeningHoursEvaluator::new(config);
    let now = clock.now();
    Ok(Report {
        name: cafe.name,
        evaluated_at: now.to_rfc3339(),
        status: evaluator.evaluate(&cafe.schedule, now),
        detail: evaluator.detail_summary(&cafe.schedule),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike, Weekday};

    #[test]
    fn now_is_read_in_the_configured_timezone() {
        // Sunday 23:30 UTC is Monday 08:30 in Seoul.
        let cli = Cli::try_parse_from([
            "coffice-hours",
            "cafe.json",
            "--now",
            "2026-10-18T23:30:00+00:00",
        ])
        .unwrap();
        let now = clock_for(cli.now, chrono_tz::Asia::Seoul).now();
        assert_eq!(now.weekday(), Weekday::Mon);
        assert_eq!((now.hour(), now.minute()), (8, 30));
    }

    #[test]
    fn demo_venue_is_open_after_midnight_on_friday_night() {
        // Saturday 01:30 in Seoul, inside Friday's 22:00 to 02:00 window.
        let cli = Cli::try_parse_from([
            "coffice-hours",
            concat!(env!("CARGO_MANIFEST_DIR"), "/demos/cafe.json"),
            "--config",
            concat!(env!("CARGO_MANIFEST_DIR"), "/demos/config.json"),
            "--now",
            "2026-10-23T16:30:00+00:00",
        ])
        .unwrap();
        let report = build_report(&cli).unwrap();
        assert_eq!(report.name, "Coffice Seongsu");
        assert_eq!(report.evaluated_at, "2026-10-24T01:30:00+09:00");
        assert!(report.status.is_open_now);
        assert_eq!(report.status.summary, "금 22:00 ~ 2:00");
    }

    #[test]
    fn missing_venue_file_is_an_error() {
        let venue = concat!(env!("CARGO_MANIFEST_DIR"), "/demos/missing.json");
        let cli = Cli::try_parse_from(["coffice-hours", venue]).unwrap();
        assert!(build_report(&cli).is_err());
    }
}

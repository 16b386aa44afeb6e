use std::{fs, path::Path};

use anyhow::{Context, Result};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

/// How closely evaluation follows the existing client.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Compatibility {
    /// Same output as the shipped app, including its unpadded summary,
    /// the 24 hour report for days without a rule and no overnight windows.
    #[default]
    Legacy,
    /// Padded summaries, overnight windows, days without a rule are never 24 hours.
    Corrected,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Labels {
    pub open_24_hours: String,
    pub closed: String,
    pub open_now: String,
    pub day_off: String,
}

impl Default for Labels {
    fn default() -> Self {
        Self {
            open_24_hours: "24시간".into(),
            closed: "영업종료".into(),
            open_now: "영업중".into(),
            day_off: "휴무".into(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    pub timezone: Tz,
    pub compatibility: Compatibility,
    pub labels: Labels,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            timezone: chrono_tz::Asia::Seoul,
            compatibility: Compatibility::default(),
            labels: Labels::default(),
        }
    }
}

impl Config {
    pub fn from_config(config: &str) -> Result<Self> {
        serde_json::from_str(config).context("Could not deserialize config")
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;
        Self::from_config(&contents)
            .with_context(|| format!("Invalid config in {}", path.display()))
    }
}

use log::warn;
use serde::Serialize;

use super::{daily::DayOpeningRule, week_day::WeekDay};

/// Opening rules of one venue for a whole week.
///
/// Holds at most one rule per day. Missing days are closed.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct WeeklySchedule {
    rules: Vec<DayOpeningRule>,
}

impl WeeklySchedule {
    pub fn new() -> Self {
        Self {
            rules: Vec::with_capacity(7),
        }
    }

    /// Builds a schedule from decoded rules. When a day repeats, the first rule wins.
    pub fn from_rules(rules: impl IntoIterator<Item = DayOpeningRule>) -> Self {
        let mut schedule = Self::new();
        for rule in rules {
            if let Err(rule) = schedule.add_rule(rule) {
                warn!("Duplicate opening rule for {:?}, dropping {:?}", rule.day(), rule);
            }
        }
        schedule
    }

    /// Hands the rule back when its day already has one.
    pub fn add_rule(&mut self, rule: DayOpeningRule) -> Result<(), DayOpeningRule> {
        if self.rule_for(rule.day()).is_some() {
            return Err(rule);
        }
        self.rules.push(rule);
        Ok(())
    }

    pub fn rule_for(&self, day: WeekDay) -> Option<&DayOpeningRule> {
        self.rules.iter().find(|rule| rule.day() == day)
    }

    pub fn rules(&self) -> &[DayOpeningRule] {
        &self.rules
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

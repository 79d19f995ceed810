//! Plan assembly: classify each goal, pick its templates, and pack them
//! starting from a per-goal staggered instant.

use chrono::{DateTime, FixedOffset, Local, NaiveDate, NaiveDateTime};
use tracing::debug;

use crate::error::PlanError;
use crate::goal::classify;
use crate::scheduler::{Packer, ScheduledTask, SchedulerConfig};
use crate::templates::templates_for;

const NAIVE_FORMATS: [&str; 6] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
];

/// Current wall-clock time in the local offset.
pub fn now() -> DateTime<FixedOffset> {
    Local::now().fixed_offset()
}

/// Parse a caller-supplied start timestamp.
///
/// Accepts RFC 3339 (`Z` or a numeric offset). Values without an offset,
/// either a date-time or a bare date, are read as UTC.
pub fn parse_start_date(input: &str) -> Result<DateTime<FixedOffset>, PlanError> {
    let trimmed = input.trim();
    let rfc_err = match DateTime::parse_from_rfc3339(trimmed) {
        Ok(instant) => return Ok(instant),
        Err(e) => e,
    };

    let naive = NAIVE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(trimmed, fmt).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
                .ok()
                .and_then(|date| date.and_hms_opt(0, 0, 0))
        });

    match naive {
        Some(naive) => Ok(naive.and_utc().fixed_offset()),
        None => Err(PlanError::InvalidStartDate {
            input: input.to_string(),
            message: rfc_err.to_string(),
        }),
    }
}

/// Builds plans from goal lists.
#[derive(Debug, Clone, Default)]
pub struct PlanGenerator {
    packer: Packer,
}

impl PlanGenerator {
    /// Create a generator with default config
    pub fn new() -> Self {
        Self::default()
    }

    /// Create with custom config
    pub fn with_config(config: SchedulerConfig) -> Self {
        Self {
            packer: Packer::with_config(config),
        }
    }

    pub fn config(&self) -> &SchedulerConfig {
        self.packer.config()
    }

    /// Generate a plan for `goals`, starting at `start` (now if `None`).
    ///
    /// Goal `i` starts `i * stagger_days` after `start`, regardless of how far
    /// the previous goal's tasks spilled. Output keeps goal order, then
    /// template order within each goal.
    ///
    /// # Errors
    ///
    /// `PlanError::InvalidInput` if `goals` is empty.
    pub fn generate<S: AsRef<str>>(
        &self,
        goals: &[S],
        start: Option<DateTime<FixedOffset>>,
    ) -> Result<Vec<ScheduledTask>, PlanError> {
        if goals.is_empty() {
            return Err(PlanError::InvalidInput("No goals provided".to_string()));
        }

        let start = start.unwrap_or_else(now);
        let stagger = self.config().stagger();
        let mut plan = Vec::with_capacity(goals.len() * crate::templates::TEMPLATES_PER_CATEGORY);

        for (index, goal) in goals.iter().enumerate() {
            let goal = goal.as_ref();
            let category = classify(goal);
            let goal_start = start + stagger * index as i32;
            debug!(goal, %category, start = %goal_start, "planning goal");

            plan.extend(self.packer.pack(goal_start, templates_for(category), goal));
        }

        Ok(plan)
    }
}

/// Generate a plan with the default configuration.
pub fn generate_plan<S: AsRef<str>>(
    goals: &[S],
    start: Option<DateTime<FixedOffset>>,
) -> Result<Vec<ScheduledTask>, PlanError> {
    PlanGenerator::new().generate(goals, start)
}

//! Time-slot packer for template sequences.
//!
//! Places an ordered list of task templates onto the calendar:
//! - Two slots per day: the morning slot (09:00) and the afternoon slot (14:00)
//! - A task never starts before the cursor; a cursor already past its slot
//!   start begins at the next whole hour
//! - A task that would end at or after 18:00 of the cursor's day (including
//!   one pushed past midnight) moves to the next morning, once; it is not
//!   re-checked after the move
//! - One hour of buffer after every task
//! - A cursor at or after 18:00 rolls over to the next morning

use chrono::{DateTime, Duration, FixedOffset, Timelike};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::datetime::{at_hour, ceil_hour, iso8601};
use crate::error::ConfigError;
use crate::templates::{Priority, TaskTemplate};

/// A task placed on the calendar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduledTask {
    pub title: String,
    pub description: String,
    #[serde(rename = "startDate", with = "iso8601")]
    pub start: DateTime<FixedOffset>,
    #[serde(rename = "endDate", with = "iso8601")]
    pub end: DateTime<FixedOffset>,
    pub priority: Priority,
}

impl ScheduledTask {
    fn from_template(
        template: &TaskTemplate,
        goal_label: &str,
        start: DateTime<FixedOffset>,
        end: DateTime<FixedOffset>,
    ) -> Self {
        let title = format!("{} - {}", template.title, goal_label);
        let description = format!(
            "Complete {} for your goal ({} priority, {} to {})",
            title,
            template.priority,
            start.format("%Y-%m-%d %H:%M"),
            end.format("%Y-%m-%d %H:%M"),
        );
        Self {
            title,
            description,
            start,
            end,
            priority: template.priority,
        }
    }

    /// Get total duration
    pub fn duration(&self) -> Duration {
        self.end - self.start
    }
}

/// Largest accepted gap between successive goals.
pub const MAX_STAGGER_DAYS: u32 = 365;

/// Scheduler configuration
///
/// Hours are local hours in the offset of the start instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchedulerConfig {
    /// Start of the morning slot
    pub morning_start: u32,
    /// Cursors before this hour use the morning slot
    pub noon_cutoff: u32,
    /// Start of the afternoon slot
    pub afternoon_start: u32,
    /// Tasks may not end at or after this hour
    pub day_end: u32,
    /// Gap after each task (hours)
    pub buffer_hours: u32,
    /// Offset between successive goals (days)
    pub stagger_days: u32,
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            morning_start: 9,
            noon_cutoff: 12,
            afternoon_start: 14,
            day_end: 18,
            buffer_hours: 1,
            stagger_days: 2,
        }
    }
}

impl SchedulerConfig {
    /// Check that the working window is well formed
    /// (`morning_start < noon_cutoff <= afternoon_start < day_end < 24`),
    /// `buffer_hours < 24` and `stagger_days <= 365`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let invalid = |key: &str, message: String| ConfigError::InvalidValue {
            key: key.to_string(),
            message,
        };

        if self.day_end >= 24 {
            return Err(invalid("hours.day_end", format!("{} is not an hour of the day", self.day_end)));
        }
        if self.morning_start >= self.noon_cutoff {
            return Err(invalid(
                "hours.morning_start",
                format!("must be before noon_cutoff ({})", self.noon_cutoff),
            ));
        }
        if self.noon_cutoff > self.afternoon_start {
            return Err(invalid(
                "hours.noon_cutoff",
                format!("must not be after afternoon_start ({})", self.afternoon_start),
            ));
        }
        if self.afternoon_start >= self.day_end {
            return Err(invalid(
                "hours.afternoon_start",
                format!("must be before day_end ({})", self.day_end),
            ));
        }
        if self.buffer_hours >= 24 {
            return Err(invalid("plan.buffer_hours", "must be less than 24".to_string()));
        }
        if self.stagger_days > MAX_STAGGER_DAYS {
            return Err(invalid(
                "plan.stagger_days",
                format!("must be at most {MAX_STAGGER_DAYS}"),
            ));
        }
        Ok(())
    }

    pub fn buffer(&self) -> Duration {
        Duration::hours(i64::from(self.buffer_hours))
    }

    pub fn stagger(&self) -> Duration {
        Duration::days(i64::from(self.stagger_days))
    }
}

/// Packs template sequences into morning/afternoon slots.
#[derive(Debug, Clone, Default)]
pub struct Packer {
    config: SchedulerConfig,
}

impl Packer {
    /// Create a new packer with default config
    pub fn new() -> Self {
        Self::default()
    }

    /// Create with custom config
    pub fn with_config(config: SchedulerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SchedulerConfig {
        &self.config
    }

    /// Assign start/end times to `templates`, in order.
    ///
    /// # Arguments
    /// * `start` - Initial cursor; no task starts before it
    /// * `templates` - Task stubs in packing order
    /// * `goal_label` - Appended to every title
    ///
    /// # Returns
    /// One scheduled task per template, same order
    pub fn pack(
        &self,
        start: DateTime<FixedOffset>,
        templates: &[TaskTemplate],
        goal_label: &str,
    ) -> Vec<ScheduledTask> {
        let cfg = &self.config;
        let mut cursor = start;
        let mut scheduled = Vec::with_capacity(templates.len());

        for template in templates {
            let slot_hour = if cursor.hour() < cfg.noon_cutoff {
                cfg.morning_start
            } else {
                cfg.afternoon_start
            };
            let slot = at_hour(cursor, slot_hour);
            let mut task_start = if slot >= cursor { slot } else { ceil_hour(cursor) };
            let mut task_end = task_start + template.duration();

            // Single retry on the next morning; a task longer than the whole
            // window still ends past day_end.
            if task_end >= at_hour(cursor, cfg.day_end) {
                cursor += Duration::days(1);
                task_start = at_hour(cursor, cfg.morning_start);
                task_end = task_start + template.duration();
            }

            debug!(
                title = template.title,
                goal = goal_label,
                start = %task_start,
                end = %task_end,
                "packed task"
            );
            scheduled.push(ScheduledTask::from_template(
                template, goal_label, task_start, task_end,
            ));

            cursor = task_end + cfg.buffer();
            if cursor.hour() >= cfg.day_end {
                cursor = at_hour(cursor + Duration::days(1), cfg.morning_start);
            }
        }

        scheduled
    }
}

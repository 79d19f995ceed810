//! External task sources.
//!
//! A task source turns goals into an undated task list (for example a
//! hosted language model). The plan layer dates those tasks sequentially:
//! task `i` lands on the start date plus `2 * i` days. Source failures are
//! reported as [`PlanError::UpstreamService`] and never fall back to the
//! template scheduler.

use chrono::{DateTime, Duration, FixedOffset, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::PlanError;
use crate::goal::classify;
use crate::templates::{templates_for, Priority};

/// Days between consecutive externally generated tasks.
pub const SEQUENTIAL_SPACING_DAYS: i64 = 2;

/// A task as returned by a source, without dates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedTask {
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub duration_hours: u32,
    pub priority: Priority,
    #[serde(default)]
    pub dependencies: Vec<String>,
}

/// A generated task with its assigned day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatedTask {
    #[serde(flatten)]
    pub task: GeneratedTask,
    pub start_date: NaiveDate,
}

/// Every task generator implements this trait.
/// Sources hold their own configuration (endpoints, keys); nothing is
/// read from process-wide state.
pub trait TaskSource: Send + Sync {
    /// Identifier used in error reports (e.g. "groq", "templates").
    fn name(&self) -> &str;

    /// Produce tasks for `goals`.
    fn generate(
        &self,
        goals: &[String],
    ) -> Result<Vec<GeneratedTask>, Box<dyn std::error::Error + Send + Sync>>;
}

/// Offline source backed by the built-in templates.
#[derive(Debug, Clone, Copy, Default)]
pub struct TemplateSource;

impl TaskSource for TemplateSource {
    fn name(&self) -> &str {
        "templates"
    }

    fn generate(
        &self,
        goals: &[String],
    ) -> Result<Vec<GeneratedTask>, Box<dyn std::error::Error + Send + Sync>> {
        let tasks = goals
            .iter()
            .flat_map(|goal| {
                templates_for(classify(goal)).iter().map(move |t| {
                    let title = format!("{} - {}", t.title, goal);
                    GeneratedTask {
                        description: format!("Complete {title} for your goal"),
                        title,
                        duration_hours: t.duration_hours,
                        priority: t.priority,
                        dependencies: Vec::new(),
                    }
                })
            })
            .collect();
        Ok(tasks)
    }
}

/// Date tasks on `start`'s calendar day plus `2 * i` days.
pub fn assign_sequential_dates(
    tasks: Vec<GeneratedTask>,
    start: DateTime<FixedOffset>,
) -> Vec<DatedTask> {
    let first_day = start.date_naive();
    tasks
        .into_iter()
        .enumerate()
        .map(|(i, task)| DatedTask {
            task,
            start_date: first_day + Duration::days(SEQUENTIAL_SPACING_DAYS * i as i64),
        })
        .collect()
}

/// Ask `source` for tasks and date them from `start`.
///
/// # Errors
///
/// - `InvalidInput` if `goals` is empty (the source is not called)
/// - `UpstreamService` if the source fails or returns no tasks
pub fn plan_from_source(
    source: &dyn TaskSource,
    goals: &[String],
    start: DateTime<FixedOffset>,
) -> Result<Vec<DatedTask>, PlanError> {
    if goals.is_empty() {
        return Err(PlanError::InvalidInput("No goals provided".to_string()));
    }

    let upstream = |message: String| PlanError::UpstreamService {
        service: source.name().to_string(),
        message,
    };

    let tasks = source.generate(goals).map_err(|e| {
        tracing::warn!(source = source.name(), error = %e, "task source failed");
        upstream(e.to_string())
    })?;
    if tasks.is_empty() {
        return Err(upstream("No tasks found in response".to_string()));
    }

    Ok(assign_sequential_dates(tasks, start))
}

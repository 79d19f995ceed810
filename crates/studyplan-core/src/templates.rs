//! Built-in task templates per goal category.
//!
//! Each category maps to exactly five ordered task stubs. Order matters: it is
//! the order in which the packer places them on the calendar. The data is
//! `'static` and never mutated; per-goal titles are built fresh by the packer.

use chrono::Duration;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::goal::Category;

/// Importance of a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::High => "high",
            Priority::Medium => "medium",
            Priority::Low => "low",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A fixed task stub belonging to a category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TaskTemplate {
    pub title: &'static str,
    /// Whole hours, always positive
    pub duration_hours: u32,
    pub priority: Priority,
}

impl TaskTemplate {
    pub const fn new(title: &'static str, duration_hours: u32, priority: Priority) -> Self {
        Self {
            title,
            duration_hours,
            priority,
        }
    }

    pub fn duration(&self) -> Duration {
        Duration::hours(i64::from(self.duration_hours))
    }
}

/// Number of templates every category carries.
pub const TEMPLATES_PER_CATEGORY: usize = 5;

static EXAM_TEMPLATES: [TaskTemplate; TEMPLATES_PER_CATEGORY] = [
    TaskTemplate::new("Initial Review", 2, Priority::High),
    TaskTemplate::new("Detailed Study", 3, Priority::High),
    TaskTemplate::new("Practice Questions", 2, Priority::Medium),
    TaskTemplate::new("Mock Exam", 2, Priority::High),
    TaskTemplate::new("Review Weak Areas", 2, Priority::Medium),
];

static PROJECT_TEMPLATES: [TaskTemplate; TEMPLATES_PER_CATEGORY] = [
    TaskTemplate::new("Research", 3, Priority::High),
    TaskTemplate::new("Planning", 2, Priority::High),
    TaskTemplate::new("Initial Draft", 4, Priority::Medium),
    TaskTemplate::new("Review & Revise", 3, Priority::Medium),
    TaskTemplate::new("Final Submission", 2, Priority::High),
];

static SKILL_TEMPLATES: [TaskTemplate; TEMPLATES_PER_CATEGORY] = [
    TaskTemplate::new("Fundamentals", 2, Priority::High),
    TaskTemplate::new("Practice Session 1", 2, Priority::Medium),
    TaskTemplate::new("Advanced Concepts", 3, Priority::Medium),
    TaskTemplate::new("Practice Session 2", 2, Priority::Medium),
    TaskTemplate::new("Skill Integration", 3, Priority::High),
];

/// Ordered template sequence for a category.
pub fn templates_for(category: Category) -> &'static [TaskTemplate] {
    match category {
        Category::Exam => &EXAM_TEMPLATES,
        Category::Project => &PROJECT_TEMPLATES,
        Category::Skill => &SKILL_TEMPLATES,
    }
}

impl Category {
    /// Shorthand for [`templates_for`].
    pub fn templates(&self) -> &'static [TaskTemplate] {
        templates_for(*self)
    }
}

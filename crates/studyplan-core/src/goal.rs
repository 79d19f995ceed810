//! Keyword-based goal classification.
//!
//! A goal is free text. Its category is picked by the first keyword group
//! that appears anywhere in the lowercased text; groups are checked in
//! [`Category::ALL`] order and `Skill` is the fallback.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Classification bucket that selects a template sequence.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// Exams, tests, quizzes
    Exam,
    /// Projects, assignments, papers
    Project,
    /// Anything else
    #[default]
    Skill,
}

impl Category {
    /// All categories in keyword precedence order.
    pub const ALL: [Category; 3] = [Category::Exam, Category::Project, Category::Skill];

    /// Keywords that select this category. `Skill` has none; it is the default.
    pub fn keywords(&self) -> &'static [&'static str] {
        match self {
            Category::Exam => &["exam", "test", "quiz"],
            Category::Project => &["project", "assignment", "paper"],
            Category::Skill => &[],
        }
    }

    /// Lowercase name, as used on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Exam => "exam",
            Category::Project => "project",
            Category::Skill => "skill",
        }
    }

    /// Resolve a category name. Unknown names fall back to `Skill`.
    pub fn from_name(name: &str) -> Category {
        match name.trim().to_lowercase().as_str() {
            "exam" => Category::Exam,
            "project" => Category::Project,
            _ => Category::Skill,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classify a goal by keyword presence. Total over all strings.
pub fn classify(goal: &str) -> Category {
    let lowered = goal.to_lowercase();
    Category::ALL
        .into_iter()
        .find(|category| category.keywords().iter().any(|kw| lowered.contains(kw)))
        .unwrap_or_default()
}

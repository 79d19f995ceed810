//! # Studyplan Core Library
//!
//! Turns a list of free-text study or work goals into a dated task plan.
//! All operations are available through the standalone CLI binary, which is
//! a thin layer over this library.
//!
//! ## Architecture
//!
//! - **Goal Classifier**: keyword match from goal text to a [`Category`]
//! - **Template Library**: five fixed task stubs per category
//! - **Packer**: places stubs into morning/afternoon slots of a working day
//! - **Plan Generator**: staggers goals and concatenates their packed tasks
//!
//! ## Key Components
//!
//! - [`generate_plan`] / [`PlanGenerator`]: plan assembly entry points
//! - [`Packer`]: the time-slot packing algorithm
//! - [`Config`]: TOML configuration for the working window
//! - [`TaskSource`]: seam for external task generators

pub mod api;
pub mod config;
pub mod datetime;
pub mod error;
pub mod goal;
pub mod plan;
pub mod scheduler;
pub mod source;
pub mod templates;

pub use api::{
    handle_request, read_request, respond, ErrorResponse, PlanRequest, PlanResponse,
};
pub use config::Config;
pub use error::{ConfigError, CoreError, PlanError};
pub use goal::{classify, Category};
pub use plan::{generate_plan, parse_start_date, PlanGenerator};
pub use scheduler::{Packer, ScheduledTask, SchedulerConfig};
pub use source::{
    assign_sequential_dates, plan_from_source, DatedTask, GeneratedTask, TaskSource,
    TemplateSource,
};
pub use templates::{templates_for, Priority, TaskTemplate};

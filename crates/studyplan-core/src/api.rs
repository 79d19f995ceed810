//! JSON request/response shapes for plan generation.
//!
//! These mirror the HTTP contract callers already rely on:
//! `{ "goals": [...], "startDate"?: "<ISO-8601>" }` in,
//! `{ "tasks": [...] }` or `{ "error": "..." }` out.

use serde::{Deserialize, Serialize};
use std::io::Read;

use crate::error::{PlanError, Result};
use crate::plan::{parse_start_date, PlanGenerator};
use crate::scheduler::ScheduledTask;

/// Incoming plan request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanRequest {
    #[serde(default)]
    pub goals: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
}

/// Successful response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanResponse {
    pub tasks: Vec<ScheduledTask>,
}

/// Error response body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl From<&PlanError> for ErrorResponse {
    fn from(err: &PlanError) -> Self {
        Self {
            error: err.public_message(),
        }
    }
}

/// Read a JSON request body from `reader`.
///
/// # Errors
///
/// `CoreError::Io` if the reader fails, `CoreError::Json` if the body is not
/// a request object.
pub fn read_request<R: Read>(mut reader: R) -> Result<PlanRequest> {
    let mut raw = String::new();
    reader.read_to_string(&mut raw)?;
    Ok(serde_json::from_str(&raw)?)
}

/// Validate a request and run it through `generator`.
///
/// Goals are checked before the start date, and both before any scheduling.
pub fn handle_request(
    generator: &PlanGenerator,
    request: &PlanRequest,
) -> Result<PlanResponse, PlanError> {
    let goals = match request.goals.as_deref() {
        Some(goals) if !goals.is_empty() => goals,
        _ => return Err(PlanError::InvalidInput("No goals provided".to_string())),
    };

    let start = request
        .start_date
        .as_deref()
        .filter(|raw| !raw.is_empty())
        .map(parse_start_date)
        .transpose()?;

    let tasks = generator.generate(goals, start)?;
    Ok(PlanResponse { tasks })
}

/// Status code and JSON body for `request`, as an HTTP shim would answer.
pub fn respond(generator: &PlanGenerator, request: &PlanRequest) -> (u16, serde_json::Value) {
    let outcome = handle_request(generator, request).map(serde_json::to_value);
    match outcome {
        Ok(Ok(body)) => (200, body),
        Ok(Err(e)) => (500, serde_json::json!({ "error": e.to_string() })),
        Err(err) => (
            err.status_code(),
            serde_json::json!({ "error": err.public_message() }),
        ),
    }
}

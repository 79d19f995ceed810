//! JSON request command for CLI.
//!
//! Reads a `{"goals": [...], "startDate": "..."}` request and answers with the
//! same body an HTTP endpoint would return.

use clap::Args;
use std::path::{Path, PathBuf};
use studyplan_core::{handle_request, read_request, Config, ErrorResponse, PlanGenerator};

#[derive(Args)]
pub struct RequestArgs {
    /// Request file; reads stdin if omitted or "-"
    file: Option<PathBuf>,
}

pub fn run(args: RequestArgs, config_path: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let request = match args.file {
        Some(path) if path.as_os_str() != "-" => read_request(std::fs::File::open(path)?)?,
        _ => read_request(std::io::stdin())?,
    };

    let config = Config::load_from(config_path)?;
    let generator = PlanGenerator::with_config(config.scheduler_config());

    match handle_request(&generator, &request) {
        Ok(response) => {
            println!("{}", serde_json::to_string_pretty(&response)?);
            Ok(())
        }
        Err(err) => {
            tracing::warn!(status = err.status_code(), error = %err, "request rejected");
            println!("{}", serde_json::to_string_pretty(&ErrorResponse::from(&err))?);
            std::process::exit(1);
        }
    }
}

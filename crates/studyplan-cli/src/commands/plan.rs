//! Plan generation command for CLI.

use clap::Args;
use std::path::Path;
use studyplan_core::{parse_start_date, Config, PlanGenerator, PlanResponse};

#[derive(Args)]
pub struct PlanArgs {
    /// Goals, one per argument
    #[arg(required = true)]
    goals: Vec<String>,
    /// Start time (ISO-8601); defaults to now
    #[arg(long)]
    start: Option<String>,
    /// Print `{"tasks": [...]}` JSON instead of a table
    #[arg(long)]
    json: bool,
}

pub fn run(args: PlanArgs, config_path: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load_from(config_path)?;
    let generator = PlanGenerator::with_config(config.scheduler_config());

    let start = args.start.as_deref().map(parse_start_date).transpose()?;
    let tasks = generator.generate(&args.goals, start)?;

    if args.json {
        let response = PlanResponse { tasks };
        println!("{}", serde_json::to_string_pretty(&response)?);
        return Ok(());
    }

    for task in &tasks {
        println!(
            "{} - {} ({}h)  [{:<6}]  {}",
            task.start.format("%a %Y-%m-%d %H:%M"),
            task.end.format("%H:%M"),
            task.duration().num_hours(),
            task.priority.as_str(),
            task.title
        );
    }
    Ok(())
}

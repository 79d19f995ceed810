//! Goal classification command for CLI.

use studyplan_core::classify;

pub fn run(goal: &str) -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", classify(goal));
    Ok(())
}

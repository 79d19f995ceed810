use clap::{Parser, Subcommand};
use std::path::PathBuf;
use studyplan_core::Config;

mod commands;

#[derive(Parser)]
#[command(name = "studyplan-cli", version, about = "Studyplan CLI")]
struct Cli {
    /// Config file (default: ~/.config/studyplan/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a plan from goals
    Plan(commands::plan::PlanArgs),
    /// Answer a JSON plan request (file or stdin)
    Request(commands::request::RequestArgs),
    /// Show the category a goal falls into
    Classify {
        /// Goal text
        goal: String,
    },
    /// List task templates
    Templates {
        /// Category (exam, project, skill); all if omitted
        category: Option<String>,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    init_tracing();

    let cli = Cli::parse();
    let config_path = cli.config.unwrap_or_else(Config::default_path);
    tracing::debug!(path = %config_path.display(), "using config");

    let result = match cli.command {
        Commands::Plan(args) => commands::plan::run(args, &config_path),
        Commands::Request(args) => commands::request::run(args, &config_path),
        Commands::Classify { goal } => commands::classify::run(&goal),
        Commands::Templates { category } => commands::templates::run(category.as_deref()),
        Commands::Config { action } => commands::config::run(action, &config_path),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

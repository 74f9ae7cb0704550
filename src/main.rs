mod render;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use insight_analytics::quality::{ConversationQuery, QualityFilter};
use insight_analytics::reports::{ReportGenerator, ReportOptions};
use insight_core::config::AppConfig;
use insight_core::records::load_records;
use insight_core::types::Interaction;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "support-insight",
    about = "Analytics for customer-support bot interactions",
    version,
    author
)]
struct Cli {
    /// Path to a JSON file of interaction records
    #[arg(short, long, global = true)]
    records: Option<PathBuf>,

    /// Path to config file (default: ~/.config/support-insight/config.toml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the dashboard overview (default)
    Overview {
        /// Print metrics as JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Show per-agent performance
    Agents {
        /// Print performance data as JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// List conversations with quality scores
    Conversations {
        /// Quality subset: all, good, or poor
        #[arg(long, default_value = "all")]
        quality: String,

        /// Case-insensitive search over customer message and agent name
        #[arg(long)]
        search: Option<String>,
    },

    /// Show one conversation transcript by interaction id
    Show { id: String },

    /// Generate the full markdown report
    Report {
        /// Write to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show or manage configuration
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Show current configuration
    Show,
    /// Initialize default configuration file
    Init,
    /// Show config file path
    Path,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set up tracing.
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "support_insight=info,warn".into()),
        )
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    // Load config.
    let config = match &cli.config {
        Some(path) => AppConfig::load_from(path)?,
        None => AppConfig::load()?,
    };

    match cli.command {
        Some(Commands::Config { action }) => {
            handle_config_command(action, &config)?;
        }
        Some(Commands::Overview { json }) => {
            let records = load_input(&cli.records, &config)?;
            if json {
                let metrics = insight_analytics::aggregations::dashboard_metrics(&records);
                println!("{}", serde_json::to_string_pretty(&metrics)?);
            } else {
                render::overview(&records);
            }
        }
        Some(Commands::Agents { json }) => {
            let records = load_input(&cli.records, &config)?;
            if json {
                let performance = insight_analytics::aggregations::agent_performance(&records);
                println!("{}", serde_json::to_string_pretty(&performance)?);
            } else {
                render::agents(&records);
            }
        }
        Some(Commands::Conversations { quality, search }) => {
            let records = load_input(&cli.records, &config)?;
            let query = ConversationQuery {
                quality: parse_quality_filter(&quality)?,
                search,
            };
            render::conversations(&records, &query);
        }
        Some(Commands::Show { id }) => {
            let records = load_input(&cli.records, &config)?;
            render::transcript(&records, &id)?;
        }
        Some(Commands::Report { output }) => {
            let records = load_input(&cli.records, &config)?;
            let options = ReportOptions {
                feedback_highlights: config.display.feedback_highlights,
                handoff_reasons: config.display.handoff_reasons,
            };
            let report = ReportGenerator::dashboard_report(&records, &options);
            match output {
                Some(path) => {
                    std::fs::write(&path, &report)?;
                    println!("Wrote report to {}", path.display());
                }
                None => print!("{report}"),
            }
        }
        None => {
            let records = load_input(&cli.records, &config)?;
            render::overview(&records);
        }
    }

    Ok(())
}

/// Resolve the records path from the CLI flag or config, then load it.
fn load_input(flag: &Option<PathBuf>, config: &AppConfig) -> Result<Vec<Interaction>> {
    let path = flag
        .clone()
        .or_else(|| config.data.records_path.clone())
        .context("no records file given; pass --records or set data.records_path in config")?;
    let records = load_records(&path)?;
    tracing::info!(
        "Loaded {} interactions from {}",
        records.len(),
        path.display()
    );
    Ok(records)
}

fn parse_quality_filter(value: &str) -> Result<QualityFilter> {
    match value {
        "all" => Ok(QualityFilter::All),
        "good" => Ok(QualityFilter::Good),
        "poor" => Ok(QualityFilter::Poor),
        other => bail!("unknown quality filter: {other} (expected all, good, or poor)"),
    }
}

fn handle_config_command(action: Option<ConfigAction>, config: &AppConfig) -> Result<()> {
    match action {
        Some(ConfigAction::Show) | None => {
            let toml_str = toml::to_string_pretty(config)?;
            println!("{}", toml_str);
        }
        Some(ConfigAction::Init) => {
            let path = AppConfig::default_path();
            if path.exists() {
                println!("Config already exists at: {}", path.display());
            } else {
                config.save()?;
                println!("Created default config at: {}", path.display());
            }
        }
        Some(ConfigAction::Path) => {
            println!("{}", AppConfig::default_path().display());
        }
    }
    Ok(())
}

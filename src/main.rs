use anyhow::Result;
use clap::{Parser, Subcommand};
use clocktally::OutputFormat;
use clocktally::commands;
use clocktally::commands::time::Mode;
use clocktally::config;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "ctally")]
#[command(about = "Clock-duration arithmetic for HH:MM and HH:MM:SS values")]
#[command(version)]
struct Cli {
    #[arg(long, global = true, value_enum, help = "Output format (overrides config)")]
    format: Option<OutputFormat>,
    #[arg(long, global = true, help = "Print default values instead of failing on bad input")]
    lenient: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Add up H:MM durations
    Sum {
        #[arg(help = "Durations as H:MM (empty values are skipped)")]
        durations: Vec<String>,
    },
    /// Percentage of TOTAL taken by USED
    Percent {
        #[arg(help = "Total time (HH:MM:SS)")]
        total: String,
        #[arg(help = "Used time (HH:MM:SS)")]
        used: String,
    },
    /// Split a duration into equal parts
    Divide {
        #[arg(help = "Time to split (HH:MM:SS)")]
        time: String,
        #[arg(help = "Number of parts")]
        count: u64,
    },
    /// Convert HH:MM:SS to seconds
    Seconds {
        #[arg(help = "Time (HH:MM:SS)")]
        time: String,
    },
    /// Convert HH:MM:SS to whole minutes
    Minutes {
        #[arg(help = "Time (HH:MM:SS)")]
        time: String,
    },
    /// Hours between two date-times (0 if START is after END)
    HoursBetween {
        #[arg(help = "Start (YYYY-MM-DD[ HH:MM:SS])")]
        start: String,
        #[arg(help = "End (YYYY-MM-DD[ HH:MM:SS])")]
        end: String,
    },
    /// Whole days between two dates
    DaysBetween {
        #[arg(help = "First date (YYYY-MM-DD)")]
        from: String,
        #[arg(help = "Second date (YYYY-MM-DD)")]
        to: String,
    },
    /// Show or change configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    List,
    Set { key: String, value: String },
    Get { key: String },
}

fn init_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_config() -> config::Config {
    let exists = config::config_path().map(|p| p.exists()).unwrap_or(false);
    if !exists {
        return config::Config::default();
    }

    config::load().unwrap_or_else(|e| {
        eprintln!("Warning: Ignoring invalid config: {:#}", e);
        config::Config::default()
    })
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = load_config();

    init_logging(&config.logging.level);

    let mode = Mode {
        format: cli.format.unwrap_or(config.output.format),
        lenient: cli.lenient || config.output.lenient,
    };

    match &cli.command {
        Commands::Sum { durations } => commands::time::sum(durations, mode)?,
        Commands::Percent { total, used } => commands::time::percent(total, used, mode)?,
        Commands::Divide { time, count } => commands::time::divide(time, *count, mode)?,
        Commands::Seconds { time } => commands::time::seconds(time, mode)?,
        Commands::Minutes { time } => commands::time::minutes(time, mode)?,
        Commands::HoursBetween { start, end } => {
            commands::time::hours_between(start, end, mode)?
        }
        Commands::DaysBetween { from, to } => commands::time::days_between(from, to, mode)?,
        Commands::Config { action } => match action {
            ConfigAction::List => commands::config::list(&config)?,
            ConfigAction::Set { key, value } => commands::config::set(key, value)?,
            ConfigAction::Get { key } => commands::config::get(key, &config)?,
        },
    }

    Ok(())
}

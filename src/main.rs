//! FitLog - Body Metrics and Workout Consistency Tracking
//!
//! Command-line entry point.
//!
//! ```bash
//! fitlog metrics list
//! fitlog metrics add weight 79.4
//! fitlog workouts add 45 --type Strength
//! fitlog stats
//! ```

use anyhow::{bail, Context, Result};
use chrono::{DateTime, Local, NaiveDate, NaiveTime, Utc};
use clap::{Parser, Subcommand};
use fitlog::metrics::MetricType;
use fitlog::storage::config::{self, AppConfig};
use fitlog::workouts::NewWorkoutSession;
use fitlog::FitnessState;
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser)]
#[command(
    name = "fitlog",
    version,
    about = "Body metrics journal and workout consistency tracker"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Configuration file (defaults to the platform data directory)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Data directory override
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Body metric commands
    Metrics {
        #[command(subcommand)]
        action: MetricsCommand,
    },
    /// Workout session commands
    Workouts {
        #[command(subcommand)]
        action: WorkoutsCommand,
    },
    /// Show training statistics
    Stats,
    /// Configuration commands
    Config {
        #[command(subcommand)]
        action: ConfigCommand,
    },
}

#[derive(Subcommand)]
enum MetricsCommand {
    /// List every metric with its current value
    List,
    /// Show the entry history of a metric
    Show {
        /// Metric type (e.g. weight, bodyFat, waterIntake)
        metric: MetricType,
        /// Number of entries to show
        #[arg(long, default_value_t = 10)]
        limit: usize,
    },
    /// Record a new value
    Add {
        /// Metric type (e.g. weight, bodyFat, waterIntake)
        metric: MetricType,
        /// Observed value in the metric's unit
        value: f64,
        /// Observation date (YYYY-MM-DD), defaults to today
        #[arg(long)]
        date: Option<NaiveDate>,
        /// Observation time (HH:MM), defaults to now
        #[arg(long)]
        time: Option<String>,
    },
}

#[derive(Subcommand)]
enum WorkoutsCommand {
    /// Log a session
    Add {
        /// Duration in minutes
        minutes: u32,
        /// Session label
        #[arg(long = "type", default_value = "Workout")]
        session_type: String,
        /// Mark the session as not finished
        #[arg(long)]
        incomplete: bool,
        /// Session start (RFC 3339), defaults to now
        #[arg(long)]
        date: Option<DateTime<Utc>>,
    },
    /// List recent sessions
    List {
        /// Number of sessions to show
        #[arg(long, default_value_t = 10)]
        limit: usize,
    },
}

#[derive(Subcommand)]
enum ConfigCommand {
    /// Print the effective configuration
    Show,
    /// Write the configuration file with current values
    Init,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config_path = cli.config.clone().unwrap_or_else(config::get_config_path);
    let mut app_config = config::load_config_from(&config_path)
        .with_context(|| format!("loading {}", config_path.display()))?;
    if let Some(data_dir) = &cli.data_dir {
        app_config.data_dir = data_dir.clone();
    }

    init_logging(&app_config, cli.verbose);
    tracing::debug!("Starting FitLog v{}", env!("CARGO_PKG_VERSION"));

    match cli.command {
        Command::Config { action } => run_config(action, &app_config, &config_path),
        Command::Metrics { action } => run_metrics(action, &mut open_state(&app_config)?),
        Command::Workouts { action } => run_workouts(action, &mut open_state(&app_config)?),
        Command::Stats => {
            print_stats(&open_state(&app_config)?);
            Ok(())
        }
    }
}

fn open_state(app_config: &AppConfig) -> Result<FitnessState> {
    FitnessState::open(app_config)
        .with_context(|| format!("opening {}", app_config.database_path().display()))
}

fn init_logging(app_config: &AppConfig, verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(&app_config.logging.level))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn run_metrics(action: MetricsCommand, state: &mut FitnessState) -> Result<()> {
    let units = state.units();

    match action {
        MetricsCommand::List => {
            for (_, metric) in state.metrics().get_all().iter() {
                match (metric.current_value, metric.last_updated) {
                    (Some(value), Some(date)) => {
                        let (value, unit) = units.convert(value, &metric.unit);
                        println!("{:<14} {:>10.1} {:<6} {}", metric.name, value, unit, date);
                    }
                    _ => println!("{:<14} {:>10}", metric.name, "-"),
                }
            }
        }
        MetricsCommand::Show { metric, limit } => {
            let Some(found) = state.metrics().get_one(metric) else {
                bail!("metric '{}' is not tracked", metric);
            };
            println!("{} ({})", found.name, found.unit);
            for entry in found.entries.iter().take(limit) {
                let (value, unit) = units.convert(entry.value, &entry.unit);
                println!("  {} {}  {:.1} {}", entry.date, entry.time, value, unit);
            }
        }
        MetricsCommand::Add {
            metric,
            value,
            date,
            time,
        } => {
            let now = Local::now();
            let date = date.unwrap_or_else(|| now.date_naive());
            let time = match time {
                Some(time) => {
                    NaiveTime::parse_from_str(&time, "%H:%M")
                        .with_context(|| format!("invalid time '{}', expected HH:MM", time))?;
                    time
                }
                None => now.format("%H:%M").to_string(),
            };

            // A failed save must be reported, not swallowed
            let entry = state
                .metrics_mut()
                .append_entry(metric, value, date, &time)
                .context("saving metric entry")?;

            match entry {
                Some(entry) => println!("Recorded {} {} on {} {}", entry.value, entry.unit, date, time),
                None => bail!("metric '{}' is not tracked", metric),
            }
        }
    }

    Ok(())
}

fn run_workouts(action: WorkoutsCommand, state: &mut FitnessState) -> Result<()> {
    match action {
        WorkoutsCommand::Add {
            minutes,
            session_type,
            incomplete,
            date,
        } => {
            let date = date.unwrap_or_else(Utc::now);
            let session = if incomplete {
                NewWorkoutSession::incomplete(date, minutes, session_type)
            } else {
                NewWorkoutSession::completed(date, minutes, session_type)
            };

            let session = state.workouts_mut().add_session(session);
            println!(
                "Logged {} min {} ({})",
                session.duration,
                session.session_type,
                if session.completed { "completed" } else { "incomplete" }
            );
            println!("Current streak: {} day(s)", state.workouts().cached_streak());
        }
        WorkoutsCommand::List { limit } => {
            for session in state.workouts().recent_sessions(limit) {
                println!(
                    "{}  {:>4} min  {:<12} {}",
                    session.local_date(),
                    session.duration,
                    session.session_type,
                    if session.completed { "done" } else { "not finished" }
                );
            }
        }
    }

    Ok(())
}

fn print_stats(state: &FitnessState) {
    let summary = state.workouts().summary();

    println!("Sessions:        {} ({} completed)", summary.total_sessions, summary.completed_sessions);
    println!("Total minutes:   {}", summary.total_minutes);
    println!("Last 7 days:     {}", summary.weekly_minutes);
    println!("Last month:      {}", summary.monthly_minutes);
    println!("Current streak:  {} day(s)", summary.current_streak);
    println!("Longest streak:  {} day(s)", summary.longest_streak);
}

fn run_config(action: ConfigCommand, app_config: &AppConfig, path: &Path) -> Result<()> {
    match action {
        ConfigCommand::Show => {
            println!("# {}", path.display());
            println!("# data_dir = {}", app_config.data_dir.display());
            print!("{}", toml::to_string_pretty(app_config).context("rendering config")?);
        }
        ConfigCommand::Init => {
            config::save_config_to(app_config, path)
                .with_context(|| format!("writing {}", path.display()))?;
            println!("Wrote {}", path.display());
        }
    }

    Ok(())
}

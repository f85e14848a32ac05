use std::fmt::Display;
use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use dbd_tracker::calculate::{aggregate, filter_records};
use dbd_tracker::config::AppConfig;
use dbd_tracker::models::{AggregateBucket, AnalysisOptions, Killer, Period, Stage, Stats};
use dbd_tracker::storage::load_records;
use dbd_tracker::{analyze, MatchRecord};

#[derive(Parser)]
#[command(name = "dbd-tracker")]
#[command(about = "Dead by Daylight survivor match statistics and insights")]
#[command(version)]
struct Cli {
    /// Path to configuration file
    #[arg(long, default_value = "./config.toml")]
    config: PathBuf,

    /// Log level (trace, debug, info, warn, error); overrides the config file
    #[arg(long)]
    log_level: Option<String>,

    /// Output logs as JSON
    #[arg(long)]
    json_logs: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Record source and filters shared by the analysis commands.
#[derive(Args)]
struct FilterArgs {
    /// JSON Lines file of match records, most recent first
    #[arg(long)]
    records: Option<PathBuf>,

    /// Period to analyze (today, week, all)
    #[arg(long)]
    period: Option<Period>,

    /// Only analyze matches against this killer
    #[arg(long)]
    killer: Option<Killer>,

    /// Reference date for period filtering (YYYY-MM-DD); defaults to the local date
    #[arg(long)]
    today: Option<NaiveDate>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the insight report
    Analyze {
        #[command(flatten)]
        filter: FilterArgs,

        /// Print the full report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the aggregated tables
    Stats {
        #[command(flatten)]
        filter: FilterArgs,
    },

    /// List known killers
    Killers,

    /// List known stages
    Stages,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("Failed to load config from {:?}", cli.config))?;

    // Initialize tracing
    let log_level = cli.log_level.as_deref().unwrap_or(&config.log_level);
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level));

    let registry = tracing_subscriber::registry().with(filter);
    if cli.json_logs {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr),
            )
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }

    tracing::debug!("Starting dbd-tracker v{}", env!("CARGO_PKG_VERSION"));

    match cli.command {
        Commands::Analyze { filter, json } => {
            let (records, options) = prepare(&config, filter)?;
            let report = analyze(&records, &options)?;

            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                for line in &report.lines {
                    println!("{}", line);
                }
            }
        }

        Commands::Stats { filter } => {
            let (records, options) = prepare(&config, filter)?;
            let stats = aggregate(&filter_records(&records, &options));
            print_stats(&stats);
        }

        Commands::Killers => {
            for killer in Killer::ALL {
                println!("{}", killer);
            }
        }

        Commands::Stages => {
            for stage in Stage::ALL {
                println!("{}", stage);
            }
        }
    }

    Ok(())
}

/// Load the records and build analysis options from config and flags.
fn prepare(config: &AppConfig, args: FilterArgs) -> Result<(Vec<MatchRecord>, AnalysisOptions)> {
    let path = args
        .records
        .or_else(|| config.records_path.clone())
        .context("No records file given; pass --records or set records_path in the config")?;

    let records =
        load_records(&path).with_context(|| format!("Failed to load records from {:?}", path))?;
    tracing::info!("Loaded {} match records from {:?}", records.len(), path);

    let mut options = config.analysis.to_options();
    if let Some(period) = args.period {
        options = options.with_period(period);
    }
    if let Some(killer) = args.killer {
        options = options.with_killer(killer);
    }
    if let Some(today) = args.today {
        options = options.with_reference_date(today);
    }

    Ok((records, options))
}

fn print_buckets<K: Display>(title: &str, buckets: &[AggregateBucket<K>]) {
    println!("\n=== {} ===", title);
    if buckets.is_empty() {
        println!("(no games)");
        return;
    }
    println!(
        "{:<28} {:>6} {:>8} {:>9} {:>8}",
        "", "Games", "Escape%", "Team%", "Rating"
    );
    for b in buckets {
        let rating = b
            .average_rating
            .map(|r| format!("{:.1}", r))
            .unwrap_or_else(|| "-".to_string());
        println!(
            "{:<28} {:>6} {:>8.1} {:>9.1} {:>8}",
            b.key.to_string(),
            b.games,
            b.escape_rate,
            b.team_escape_rate,
            rating
        );
    }
}

fn print_stats(stats: &Stats) {
    println!("=== Overview ===");
    println!("Games:            {}", stats.total_games);
    println!("Escapes:          {}", stats.total_escapes);
    println!("Escape rate:      {:.1}%", stats.escape_rate);
    println!("Team escape rate: {:.1}%", stats.team_escape_rate);
    println!("Average rating:   {:.1}", stats.average_rating);
    println!("Skill level:      {}", stats.skill_level());

    print_buckets("Killers", &stats.killer_buckets);
    print_buckets("Stages", &stats.stage_buckets);
    print_buckets("Opponent levels", &stats.opponent_level_buckets);
    print_buckets("Dates", &stats.date_buckets);

    println!("\n=== Companions ===");
    if stats.companions.is_empty() {
        println!("(no games)");
    }
    for c in &stats.companions {
        println!(
            "{:<28} {:>6} {:>8.1}",
            c.label, c.games, c.escape_rate
        );
    }
}

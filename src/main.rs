use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use kinch_rank::config::Config;
use kinch_rank::events::{Event, SourceKind};
use kinch_rank::scoring::BaselineMode;
use kinch_rank::KinchError;

const EXIT_SUCCESS: i32 = 0;
const EXIT_SOURCE: i32 = 2;
const EXIT_CONFIG: i32 = 4;

#[derive(Subcommand, Debug)]
enum Commands {
    /// Rank the competitors listed in a file (one WCA ID per line)
    Rank {
        /// File with one WCA ID per line
        ids: PathBuf,

        /// Score against world records
        #[arg(long, conflicts_with = "relative")]
        absolute: bool,

        /// Score against the best result among the listed competitors
        #[arg(long)]
        relative: bool,

        /// Output CSV path (defaults to ./kinch.csv)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Show a competitor's raw results, scanning the exports directly
    Lookup {
        /// WCA ID
        person: String,
        /// Event code (e.g. 333, 333mbf); all events if omitted
        event: Option<String>,
    },
    /// Show the current world record values found in the exports
    Records {
        /// Event code; all events if omitted
        event: Option<String>,
    },
}

#[derive(Parser, Debug)]
#[command(name = "kinch-rank")]
#[command(about = "Rank speedcubers across all WCA events with KinchRanks", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to config file (defaults to ~/.config/kinch-rank/config.yaml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Directory containing the unzipped WCA ranks exports
    #[arg(short, long, global = true)]
    exports: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

fn main() {
    let cli = Cli::parse();
    kinch_rank::logging::init_tracing(cli.verbose);

    let mut config = match kinch_rank::config::load_config(cli.config) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Config error: {:#}", e);
            std::process::exit(EXIT_CONFIG);
        }
    };
    if let Some(exports) = cli.exports {
        config.exports_dir = exports;
    }

    let result = match cli.command {
        Commands::Rank {
            ids,
            absolute,
            relative,
            output,
        } => {
            if absolute {
                config.mode = BaselineMode::Absolute;
            } else if relative {
                config.mode = BaselineMode::Relative;
            }
            if let Some(output) = output {
                config.output = output;
            }
            rank(&config, &ids, cli.verbose)
        }
        Commands::Lookup { person, event } => lookup(&config, &person, event.as_deref()),
        Commands::Records { event } => records(&config, event.as_deref()),
    };

    if let Err(e) = result {
        eprintln!("Error: {:#}", e);
        std::process::exit(exit_code(&e));
    }

    std::process::exit(EXIT_SUCCESS);
}

fn exit_code(err: &anyhow::Error) -> i32 {
    match err.downcast_ref::<KinchError>() {
        Some(KinchError::OutputDestinationInvalid(_)) | Some(KinchError::UnknownEvent(_)) => {
            EXIT_CONFIG
        }
        Some(_) => EXIT_SOURCE,
        None => EXIT_CONFIG,
    }
}

fn validate(config: &Config) -> Result<()> {
    if let Err(errors) = kinch_rank::config::validate_config(config) {
        eprintln!("Config errors:");
        for error in &errors {
            eprintln!("  - {}", error);
        }
        anyhow::bail!("{} config error(s)", errors.len());
    }
    Ok(())
}

fn rank(config: &Config, ids: &Path, verbose: bool) -> Result<()> {
    let start_time = Instant::now();

    validate(config)?;
    // Checked before any work so a bad path never costs a full run
    kinch_rank::output::check_destination(&config.output)?;

    tracing::info!("Reading competitors from {}", ids.display());
    let competitors = kinch_rank::competitors::read_competitors(ids)?;

    tracing::info!("Indexing exports in {}", config.exports_dir.display());
    let exports = kinch_rank::records::Exports::load_for(
        &config.averages_path(),
        &config.singles_path(),
        &competitors,
    )
    .context("Failed to load WCA exports")?;

    tracing::info!("Finding results ({} mode)", config.mode);
    let table = kinch_rank::scoring::compute_rankings(
        &competitors,
        &exports,
        config.mode,
        |person, progress| {
            tracing::info!(
                "Found results for {}, {} / {} found, {:.0}% done",
                person,
                progress.processed,
                progress.total,
                progress.percent()
            );
        },
    );

    let ranked = kinch_rank::output::rank_rows(&table.rows);
    kinch_rank::output::write_ranked_file(&config.output, &ranked)?;
    tracing::info!("Wrote {} rows to {}", ranked.len(), config.output.display());

    let use_colors = kinch_rank::output::should_use_colors();
    if verbose {
        eprintln!("Baselines ({}):", table.mode);
        eprintln!("{}", kinch_rank::output::format_baselines(&table.baselines));
        eprintln!();
        for row in &ranked {
            println!(
                "{}",
                kinch_rank::output::format_competitor_detail(row, use_colors)
            );
            println!();
        }
    } else {
        println!(
            "{}",
            kinch_rank::output::format_ranked_table(&ranked, use_colors)
        );
    }

    let elapsed = Duration::from_millis(start_time.elapsed().as_millis() as u64);
    tracing::info!("Done in {}", humantime::format_duration(elapsed));
    Ok(())
}

fn selected_events(event: Option<&str>) -> Result<Vec<Event>> {
    match event {
        Some(code) => Ok(vec![code.parse::<Event>()?]),
        None => Ok(Event::ALL.to_vec()),
    }
}

fn source_path(config: &Config, event: Event) -> PathBuf {
    match event.source() {
        SourceKind::Average => config.averages_path(),
        SourceKind::Single => config.singles_path(),
    }
}

fn lookup(config: &Config, person: &str, event: Option<&str>) -> Result<()> {
    for event in selected_events(event)? {
        let raw = kinch_rank::records::lookup_result(&source_path(config, event), event, person)?;
        println!("{}", format_raw(event, raw));
    }
    Ok(())
}

fn records(config: &Config, event: Option<&str>) -> Result<()> {
    for event in selected_events(event)? {
        let raw = kinch_rank::records::lookup_record_holder(&source_path(config, event), event)?;
        println!("{}", format_raw(event, raw));
    }
    Ok(())
}

fn format_raw(event: Event, raw: i64) -> String {
    if raw == 0 {
        format!("{:<7}{:>12}", event.code(), "-")
    } else if event.is_multi_blind() {
        format!(
            "{:<7}{:>12}  ({:.4})",
            event.code(),
            raw,
            kinch_rank::scoring::decode_multi_blind(raw)
        )
    } else {
        format!("{:<7}{:>12}", event.code(), raw)
    }
}

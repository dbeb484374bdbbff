//! CLI entry point for the tickerdeck panel.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

use tickerdeck_panel::app::{self, PanelClock};
use tickerdeck_panel::config::Config;

#[derive(Parser)]
#[command(name = "panel")]
#[command(about = "Portfolio display panel: ledger, live profit and market hours")]
#[command(version)]
struct Cli {
    /// Path to panel.toml (built-in ledger and defaults if omitted)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Pretend the current time is this RFC 3339 instant
    #[arg(long)]
    at: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Render the display frame from a quote snapshot
    Show {
        /// Path to the quotes JSON file
        #[arg(long)]
        quotes: PathBuf,
    },

    /// Show 1D/1W/3M percentage changes per quoted ticker
    Changes {
        /// Path to the quotes JSON file
        #[arg(long)]
        quotes: PathBuf,
    },

    /// List owners and the tickers they hold
    Owners,

    /// Show greeting, market status, awake flag and clock
    Status,

    /// Check whether an owner holds a ticker (exit code 0 = yes, 1 = no)
    Owns { owner: String, ticker: String },
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_secs()
        .init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => match Config::load(path) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("Error loading config: {e}");
                process::exit(1);
            }
        },
        None => {
            log::info!("No config given, using built-in ledger");
            Config::default()
        }
    };

    let clock = match PanelClock::from_arg(cli.at.as_deref()) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(1);
        }
    };

    match cli.command {
        Command::Show { quotes } => match app::show(&config, clock, &quotes) {
            Ok(frame) if frame.is_blank() => println!("(screen asleep)"),
            Ok(frame) => print!("{frame}"),
            Err(e) => {
                eprintln!("Error: {e}");
                process::exit(1);
            }
        },
        Command::Changes { quotes } => match app::changes(&quotes) {
            Ok(lines) => {
                for line in lines {
                    println!("{line}");
                }
            }
            Err(e) => {
                eprintln!("Error: {e}");
                process::exit(1);
            }
        },
        Command::Owners => {
            for line in app::owners(&config) {
                println!("{line}");
            }
        }
        Command::Status => match app::status(&config, clock) {
            Ok((state, abbr)) => {
                println!("{}", state.greeting);
                match abbr {
                    Some(abbr) => println!("{} {abbr}", state.clock),
                    None => println!("{}", state.clock),
                }
                println!("{}", state.market);
                println!("Screen {}", if state.awake { "awake" } else { "asleep" });
            }
            Err(e) => {
                eprintln!("Error: {e}");
                process::exit(1);
            }
        },
        Command::Owns { owner, ticker } => {
            let held = app::owns(&config, &owner, &ticker);
            println!("{}", if held { "yes" } else { "no" });
            if !held {
                process::exit(1);
            }
        }
    }
}

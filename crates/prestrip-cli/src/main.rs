// SPDX-License-Identifier: MIT

use anyhow::Result;
use clap::{Parser, Subcommand};
use log::info;
use prestrip_core::provider::JsonFeed;
use prestrip_core::sink::{ProcessSink, SpoolSink, StdoutSink, StripSink};
use prestrip_core::PrefileTracker;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Parser)]
#[command(name = "prestrip", version, about, long_about = None)]
struct Cli {
    /// JSON feed of flight plan snapshots (array, re-read every poll)
    #[arg(short, long, env = "PRESTRIP_FEED")]
    feed: PathBuf,

    /// External printer command, invoked as `<cmd> --file <path>` per strip
    #[arg(long, env = "PRESTRIP_PRINTER")]
    printer: Option<String>,

    /// Spool directory to drop strip files into instead of printing
    #[arg(long, env = "PRESTRIP_SPOOL")]
    spool: Option<PathBuf>,

    /// Log at debug level
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a single scan over the feed
    Scan,
    /// Poll the feed on an interval until interrupted
    Watch {
        /// Poll interval in milliseconds
        #[arg(long, default_value_t = 1000)]
        interval_ms: u64,
    },
}

fn build_sink(cli: &Cli) -> Box<dyn StripSink> {
    if let Some(cmd) = &cli.printer {
        Box::new(ProcessSink::new(cmd.clone()))
    } else if let Some(dir) = &cli.spool {
        Box::new(SpoolSink::new(dir.clone()))
    } else {
        Box::new(StdoutSink)
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        simplelog::LevelFilter::Debug
    } else {
        simplelog::LevelFilter::Info
    };
    simplelog::SimpleLogger::init(level, simplelog::Config::default())?;

    let feed = JsonFeed::new(&cli.feed);
    let mut tracker = PrefileTracker::new(build_sink(&cli));

    match cli.command {
        Commands::Scan => {
            tracker.on_scan_tick(&feed);
            info!(
                "Scan complete — feed={} printed={}",
                cli.feed.display(),
                tracker.seen_count()
            );
        }
        Commands::Watch { interval_ms } => {
            info!(
                "Watching feed — feed={} interval_ms={}",
                cli.feed.display(),
                interval_ms
            );
            loop {
                tracker.on_scan_tick(&feed);
                std::thread::sleep(Duration::from_millis(interval_ms));
            }
        }
    }

    Ok(())
}

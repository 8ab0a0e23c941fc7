//! ordset-bench - throughput benchmark for lock strategies over an ordered set
//!
//! Runs a fixed mix of member/insert/delete operations against one shared
//! ordered integer set across worker threads and prints the elapsed seconds
//! of the concurrent phase.

use anyhow::Result;
use clap::error::ErrorKind;
use clap::Parser;
use tracing::{error, info, Level};
use tracing_subscriber::FmtSubscriber;

use ordset_bench::benchmark::BenchmarkRunner;
use ordset_bench::config::{BenchmarkConfig, CliArgs};

fn setup_logging(verbose: bool, quiet: bool) {
    let level = if quiet {
        Level::ERROR
    } else if verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber).expect("Failed to set tracing subscriber");
}

fn print_banner(config: &BenchmarkConfig) {
    if config.quiet {
        return;
    }

    info!("ordset-bench v{}", env!("CARGO_PKG_VERSION"));
    info!(
        "Threads: {}, Policy: {:?}, Distribution: {:?}",
        config.threads, config.policy, config.distribution
    );
    info!(
        "Initial nodes: {}, Operations: {} (member {:.3} / insert {:.3} / delete {:.3})",
        config.initial_nodes,
        config.total_operations,
        config.member_frac,
        config.insert_frac,
        config.delete_frac
    );
    info!("Seed: {}", config.seed);
}

/// Parse arguments, mapping clap's usage errors to exit code 1.
fn parse_args() -> CliArgs {
    match CliArgs::try_parse() {
        Ok(args) => args,
        Err(e) => {
            let code = match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => 0,
                _ => 1,
            };
            let _ = e.print();
            std::process::exit(code);
        }
    }
}

fn run() -> Result<()> {
    let args = parse_args();

    setup_logging(args.verbose, args.quiet);

    let config = BenchmarkConfig::from_cli(&args)?;

    print_banner(&config);

    let runner = BenchmarkRunner::new(config.clone());
    let summary = runner.run()?;

    if !config.quiet {
        info!(
            "Applied {} operations ({:.0} ops/sec), {} member hits",
            summary.ops_applied, summary.throughput, summary.member_hits
        );
    }

    // The one machine-readable line: elapsed seconds of the concurrent phase.
    println!("{:.6}", summary.elapsed_secs);

    Ok(())
}

fn main() {
    if let Err(e) = run() {
        error!("Error: {:#}", e);
        std::process::exit(1);
    }
}

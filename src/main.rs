use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Parser;
use mazecarve::{
    MazeConfig, Solver,
    generators::{GENERATORS, Generator},
};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

/// Creates an NxN maze using the specified algorithm and finds a path through it.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Maze dimension
    #[arg(short = 'n', default_value_t = 10)]
    size: u16,

    /// Maze generation algorithm, optionally followed by `:mode` (e.g. `growing-tree:oldest`)
    #[arg(short, long, default_value = "backtracking")]
    algorithm: Generator,

    /// List supported maze generation algorithms and exit
    #[arg(long)]
    algs: bool,

    /// Maze solving algorithm: dfs or bfs
    #[arg(short, long, default_value = "dfs")]
    solver: Solver,

    /// Maze entrance coordinates
    #[arg(long, num_args = 2, value_names = ["ROW", "COL"], default_values_t = [0, 0])]
    start: Vec<u16>,

    /// Maze exit coordinates, the bottom-right cell by default
    #[arg(long, num_args = 2, value_names = ["ROW", "COL"])]
    finish: Option<Vec<u16>>,

    /// Seed for reproducible mazes
    #[arg(long)]
    seed: Option<u64>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace). RUST_LOG takes precedence.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Write logs to this file instead of stderr
    #[arg(long)]
    log_file: Option<PathBuf>,
}

/// Install the tracing subscriber. Logs go through a non-blocking writer, flushed when
/// the returned guard is dropped.
fn init_tracing(verbose: u8, log_file: Option<&Path>) -> anyhow::Result<WorkerGuard> {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    let (writer, guard) = match log_file {
        Some(path) => {
            let file = std::fs::File::create(path)
                .with_context(|| format!("cannot create log file {}", path.display()))?;
            tracing_appender::non_blocking(file)
        }
        None => tracing_appender::non_blocking(std::io::stderr()),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(log_file.is_none())
        .init();
    Ok(guard)
}

fn pair(values: &[u16]) -> (u16, u16) {
    // clap enforces exactly two values
    (values[0], values[1])
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let _guard = init_tracing(args.verbose, args.log_file.as_deref())?;

    if args.algs {
        println!("List of supported maze generation algorithms:\n");
        for generator in GENERATORS {
            println!("\t{:<16}{}", generator.name(), generator);
        }
        return Ok(());
    }

    let config = MazeConfig {
        size: args.size,
        generator: args.algorithm,
        solver: args.solver,
        start: pair(&args.start),
        finish: args.finish.as_deref().map(pair),
        seed: args.seed,
    };
    tracing::info!("running with {:?}", config);

    let report = config.run()?;
    println!("Generated the maze: {}", config.generator);
    println!(
        "  {} walls removed, {} walls added",
        report.stats.walls_removed, report.stats.walls_added
    );
    println!(
        "Solved with {}: {} steps, {} cells explored",
        config.solver,
        report.solution.len(),
        report.solution.visited
    );
    let path = report
        .solution
        .path
        .iter()
        .map(|(row, col)| format!("({},{})", row, col))
        .collect::<Vec<_>>()
        .join(" ");
    println!("  {}", path);
    Ok(())
}

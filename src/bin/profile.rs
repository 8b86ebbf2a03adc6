use mazecarve::{MazeConfig, generators::GENERATORS, solvers::SOLVERS};

/// Runs every generator and solver combination on a large maze, for use under a profiler.
fn main() -> anyhow::Result<()> {
    let mut args = std::env::args();
    args.next(); // Skip executable name
    let num_iters = args.next().and_then(|s| s.parse::<usize>().ok()).unwrap_or(1);
    let size = args.next().and_then(|s| s.parse::<u16>().ok()).unwrap_or(255);

    for iter in 0..num_iters {
        for generator in GENERATORS {
            for solver in SOLVERS {
                let config = MazeConfig {
                    size,
                    generator,
                    solver,
                    seed: Some(iter as u64),
                    ..Default::default()
                };
                let start = std::time::Instant::now();
                let report = config.run()?;
                println!(
                    "{:<32} {:<28} {:>8} steps {:>10.2?}",
                    generator.to_string(),
                    solver.to_string(),
                    report.solution.len(),
                    start.elapsed()
                );
            }
        }
    }
    Ok(())
}

mod cli;
mod logging;

use clap::Parser;
use eyre::Result;
use log::{debug, info, warn};

use cli::{Args, BoardArgs, Command, PathfindingAlgorithm};
use grid_solver::{GridConfig, Solution, Strategy, random::RandomBoard, render, solve};
use logging::Logger;

fn main() -> Result<()> {
    let args = Args::parse();
    Logger::init(args.verbosity);

    info!("plotting a course through the trees.");

    let base = load_base_config(&args)?;

    match &args.command {
        Command::Solve { algorithm, board } => {
            let config = board_config(&args, base, board);
            run_solver(&config, *algorithm)?;
        }
        Command::Benchmark { board } => {
            let config = board_config(&args, base, board);
            run_benchmark(&config);
        }
        Command::Random {
            algorithm,
            count,
            density,
            min_size,
            max_size,
            seed,
        } => {
            let generator = RandomBoard {
                min_size: *min_size,
                max_size: *max_size,
                density: *density,
                seed: *seed,
            };
            run_random(&args, &generator, *count, *algorithm)?;
        }
    }

    Ok(())
}

fn load_base_config(args: &Args) -> Result<GridConfig> {
    match &args.config {
        Some(path) => {
            info!("loading board: {}", path.display());
            Ok(GridConfig::load(path)?)
        }
        None => {
            debug!("using the default ridge board");
            Ok(GridConfig::default())
        }
    }
}

/// file or preset values, then board flags, then global flags
fn board_config(args: &Args, base: GridConfig, board: &BoardArgs) -> GridConfig {
    apply_globals(args, board.apply(base))
}

fn apply_globals(args: &Args, mut config: GridConfig) -> GridConfig {
    if let Some(cap) = args.iteration_cap {
        config.iteration_cap = cap;
    }
    if args.show_iterations {
        config.show_iterations = true;
    }
    config
}

// ========== Runners ==========

fn run_solver(config: &GridConfig, algorithm: PathfindingAlgorithm) -> Result<()> {
    let strategy = algorithm.strategy();
    info!("solving with {}", strategy);

    let solution = solve(config, strategy)?;
    print_solution(&solution);
    Ok(())
}

fn run_benchmark(config: &GridConfig) {
    info!("benchmarking all algorithms");

    let mut completed = Vec::new();

    for strategy in Strategy::all() {
        info!("testing {}", strategy);

        match solve(config, strategy) {
            Ok(solution) => {
                print_solution(&solution);
                completed.push(solution);
            }
            Err(e) => {
                log::error!("{} failed: {}", strategy, e);
            }
        }
    }

    print_benchmark_summary(&completed);
}

fn run_random(
    args: &Args,
    generator: &RandomBoard,
    count: usize,
    algorithm: PathfindingAlgorithm,
) -> Result<()> {
    let strategy = algorithm.strategy();
    info!("solving {} random boards with {}", count, strategy);

    let mut solved = 0;
    for (i, config) in generator.generate(count).into_iter().enumerate() {
        let config = apply_globals(args, config);
        info!(
            "board {}/{}: {}x{} with {} trees",
            i + 1,
            count,
            config.rows,
            config.cols,
            config.obstacles.len()
        );

        let solution = solve(&config, strategy)?;
        print_solution(&solution);
        if solution.path.is_some() {
            solved += 1;
        }
    }

    info!("reached the goal on {}/{} boards", solved, count);
    Ok(())
}

// ========== Utilities ==========

fn print_solution(solution: &Solution) {
    let report = &solution.report;

    match &solution.path {
        Some(path) => {
            println!("\n{}", render::render_board(&solution.grid, &[]));
            println!("shortest path:\n{}", render::format_path(path));
            println!("\n{}", render::render_board(&solution.grid, path));
            info!(
                "{}: {} tiles in {} iterations ({:?})",
                report.strategy,
                path.len(),
                report.iterations,
                report.planning_time
            );
        }
        None => {
            println!("\n{}", render::render_board(&solution.grid, &[]));
            warn!(
                "{}: {} after {} iterations",
                report.strategy, report.termination, report.iterations
            );
        }
    }

    debug!("relaxations: {}", report.relaxations);
    debug!("costs:\n{}", render::render_costs(&solution.grid));
}

fn print_benchmark_summary(results: &[Solution]) {
    info!("\nbenchmark results:");
    info!(
        "{:<12} {:>10}  {:>6}  {:>12}  {:>12}",
        "algorithm", "iterations", "tiles", "cost", "plan"
    );
    info!("{:-<60}", "");

    for solution in results {
        let report = &solution.report;
        let tiles = solution.path.as_ref().map_or(0, Vec::len);
        let cost = solution.grid[solution.grid.goal()].cost;
        info!(
            "{:<12} {:>10}  {:>6}  {:>12.3}  {:>12?}",
            report.strategy.name(),
            report.iterations,
            tiles,
            cost,
            report.planning_time,
        );
    }

    let reached = || results.iter().filter(|s| s.path.is_some());

    if let Some(best) = reached().min_by_key(|s| s.path.as_ref().map_or(usize::MAX, Vec::len)) {
        info!("\nshortest: {}", best.report.strategy);
    }

    if let Some(fastest) = reached().min_by_key(|s| s.report.iterations) {
        info!(
            "fewest iterations: {} ({})",
            fastest.report.strategy, fastest.report.iterations
        );
    }
}

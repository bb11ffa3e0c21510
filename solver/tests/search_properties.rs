use grid_solver::{
    Dijkstra, Error, Grid, GridConfig, Position, SearchEngine, Step, Strategy, Termination,
    reconstruct, search, solve,
};

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn assert_well_formed(grid: &Grid, path: &[Position]) {
    assert_eq!(path.first(), Some(&grid.start()));
    assert_eq!(path.last(), Some(&grid.goal()));

    for pair in path.windows(2) {
        assert_eq!(
            pair[0].chebyshev_distance(pair[1]),
            1,
            "{} and {} are not adjacent",
            pair[0],
            pair[1]
        );
    }

    for (i, pos) in path.iter().enumerate() {
        assert!(!grid[*pos].is_obstacle(), "path crosses obstacle {pos}");
        assert!(!path[i + 1..].contains(pos), "path repeats {pos}");
    }
}

#[test]
fn open_grids_give_chebyshev_length_paths() {
    init_logger();

    let cases = [
        (11, 11, Position::new(0, 0), Position::new(10, 10)),
        (11, 11, Position::new(0, 0), Position::new(10, 3)),
        (11, 11, Position::new(7, 2), Position::new(1, 9)),
        (7, 13, Position::new(6, 12), Position::new(2, 0)),
        (1, 6, Position::new(0, 5), Position::new(0, 0)),
    ];

    for (rows, cols, start, goal) in cases {
        let config = GridConfig::open(rows, cols).with_endpoints(start, goal);
        for strategy in Strategy::all() {
            let solution = solve(&config, strategy).unwrap();
            assert_eq!(
                solution.report.termination,
                Termination::GoalReached,
                "{strategy} on {rows}x{cols} {start} -> {goal}"
            );

            let path = solution.path.unwrap();
            assert_eq!(path.len(), start.chebyshev_distance(goal) + 1);
            assert_well_formed(&solution.grid, &path);
        }
    }
}

#[test]
fn dijkstra_costs_only_fall_and_freeze_once_settled() {
    init_logger();

    let mut grid = Grid::new(&GridConfig::cluster()).unwrap();
    let mut engine = SearchEngine::new(Dijkstra::new(&grid), &grid, 10_000);

    loop {
        let before: Vec<(f64, bool)> = grid.tiles().map(|t| (t.cost, t.visited)).collect();
        let step = engine.step(&mut grid).unwrap();

        for (tile, &(old_cost, was_visited)) in grid.tiles().zip(&before) {
            assert!(tile.cost <= old_cost, "cost of {} rose", tile.position);
            if was_visited {
                assert_eq!(tile.cost, old_cost, "settled {} changed", tile.position);
                assert!(tile.visited);
            }
        }

        if let Step::Finished(termination) = step {
            assert_eq!(termination, Termination::GoalReached);
            break;
        }

        assert_eq!(grid.tiles().filter(|t| t.is_frontier).count(), 1);
    }

    assert!(grid.tiles().all(|t| !t.is_frontier));
}

#[test]
fn paths_on_preset_boards_are_well_formed() {
    init_logger();

    for config in [GridConfig::ridge(), GridConfig::cluster()] {
        for strategy in Strategy::all() {
            let solution = solve(&config, strategy).unwrap();
            assert_eq!(solution.report.termination, Termination::GoalReached);
            assert_well_formed(&solution.grid, &solution.path.unwrap());
        }
    }
}

#[test]
fn default_board_paths_never_move_away_from_the_goal() {
    init_logger();

    let config = GridConfig::default();
    for strategy in Strategy::all() {
        let solution = solve(&config, strategy).unwrap();
        assert_eq!(solution.report.termination, Termination::GoalReached);
        assert!(solution.report.iterations <= config.iteration_cap);

        let path = solution.path.unwrap();
        assert_eq!(path.len(), 12, "{strategy}");

        let goal = config.goal;
        for pair in path.windows(2) {
            assert!(
                pair[1].chebyshev_distance(goal) <= pair[0].chebyshev_distance(goal),
                "{strategy} moves away from the goal at {}",
                pair[1]
            );
        }
    }
}

#[test]
fn dijkstra_goal_cost_is_the_octile_distance_around_the_ridge() {
    let solution = solve(&GridConfig::ridge(), Strategy::Dijkstra).unwrap();
    let expected = 2.0 + 9.0 * std::f64::consts::SQRT_2;
    let goal_cost = solution.grid[solution.grid.goal()].cost;
    assert!((goal_cost - expected).abs() < 1e-9, "goal cost {goal_cost}");
    assert_eq!(solution.report.iterations, 111);
}

#[test]
fn enclosed_start_is_stuck_after_one_iteration() {
    init_logger();

    let start = Position::new(5, 5);
    let walls = start.neighbors((11, 11));
    let config = GridConfig::open(11, 11)
        .with_endpoints(start, Position::new(10, 10))
        .with_obstacles(walls);

    for strategy in Strategy::all() {
        let mut grid = Grid::new(&config).unwrap();
        let report = search(&mut grid, strategy, config.iteration_cap).unwrap();

        assert_eq!(report.termination, Termination::Stuck, "{strategy}");
        assert_eq!(report.iterations, 1);
        assert_eq!(report.relaxations, 0);
        assert!(grid.tiles().filter(|t| t.is_reached()).count() == 1);
        assert!(matches!(reconstruct(&grid), Err(Error::NoPathFound { .. })));
    }
}

#[test]
fn unreachable_goal_fails_reconstruction() {
    init_logger();

    let goal = Position::new(10, 10);
    let config = GridConfig::open(11, 11).with_obstacles(goal.neighbors((11, 11)));

    for strategy in Strategy::all() {
        let mut grid = Grid::new(&config).unwrap();
        let report = search(&mut grid, strategy, config.iteration_cap).unwrap();

        assert!(
            matches!(
                report.termination,
                Termination::Stuck | Termination::IterationLimitExceeded
            ),
            "{strategy} ended with {:?}",
            report.termination
        );

        match reconstruct(&grid) {
            Err(Error::NoPathFound { broken_at, .. }) => assert_eq!(broken_at, goal),
            other => panic!("{strategy}: expected NoPathFound, got {other:?}"),
        }

        let solution = solve(&config, strategy).unwrap();
        assert!(solution.path.is_none());
    }
}

#[test]
fn unreachable_pockets_do_not_hide_a_reached_goal() {
    // (0, 10) is walled off, but the goal is still reachable
    let config = GridConfig::open(11, 11).with_obstacles([
        Position::new(1, 10),
        Position::new(1, 9),
        Position::new(0, 9),
    ]);

    let solution = solve(&config, Strategy::Dijkstra).unwrap();
    assert_eq!(solution.report.termination, Termination::GoalReached);
    assert_eq!(solution.path.unwrap().len(), 11);
    assert!(!solution.grid[Position::new(0, 10)].visited);
}

#[test]
fn identical_boards_give_identical_runs() {
    let config = GridConfig::cluster();

    for strategy in Strategy::all() {
        let first = solve(&config, strategy).unwrap();
        let second = solve(&config, strategy).unwrap();

        assert_eq!(first.path, second.path);
        assert_eq!(first.report.iterations, second.report.iterations);
        assert_eq!(first.report.relaxations, second.report.relaxations);
        assert_eq!(first.report.termination, second.report.termination);
    }
}

#[test]
fn iteration_cap_is_reported_without_a_path() {
    let config = GridConfig::cluster().with_iteration_cap(4);

    for strategy in Strategy::all() {
        let solution = solve(&config, strategy).unwrap();
        assert_eq!(
            solution.report.termination,
            Termination::IterationLimitExceeded
        );
        assert_eq!(solution.report.iterations, 4);
        assert!(solution.path.is_none());
        assert!(solution.grid.tiles().all(|t| !t.is_frontier));
    }
}

#[test]
fn invalid_boards_are_rejected_before_searching() {
    let config = GridConfig::open(5, 5).with_obstacles([Position::new(2, 5)]);
    assert!(matches!(
        solve(&config, Strategy::AStar),
        Err(Error::Configuration(_))
    ));
}

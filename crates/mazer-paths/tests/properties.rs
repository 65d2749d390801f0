use mazer_core::{Cell, Maze};
use mazer_paths::{
    CostModel, SolverConfig, Status, StepResult, StrategyKind, Terrain, create_strategy,
    run_to_end, steps,
};
use proptest::prelude::*;

/// Random rectangular mazes of walls and open cells with distinct start and
/// goal, between 3×3 and 7×7.
fn maze_text() -> impl Strategy<Value = String> {
    (3usize..8, 3usize..8)
        .prop_flat_map(|(h, w)| {
            (
                Just(w),
                prop::collection::vec(prop::bool::weighted(0.3), h * w),
                0..h * w,
                0..h * w,
            )
        })
        .prop_filter("start and goal must differ", |(_, _, a, b)| a != b)
        .prop_map(|(w, walls, a, b)| {
            let glyphs: Vec<char> = walls
                .iter()
                .enumerate()
                .map(|(i, &wall)| match i {
                    _ if i == a => 'A',
                    _ if i == b => 'B',
                    _ if wall => '#',
                    _ => ' ',
                })
                .collect();
            glyphs
                .chunks(w)
                .map(|row| row.iter().collect::<String>())
                .collect::<Vec<_>>()
                .join("\n")
        })
}

/// Like [`maze_text`], but open cells may also be hints, penalties,
/// rewards, keys, checkpoints or teleports.
fn tiled_maze_text() -> impl Strategy<Value = String> {
    const GLYPHS: [char; 13] = [
        '#', '#', '#', ' ', ' ', ' ', 'H', 'P', 'N', 'K', 'C', 'T', 'T',
    ];
    (3usize..8, 3usize..8)
        .prop_flat_map(|(h, w)| {
            (
                Just(w),
                prop::collection::vec(prop::sample::select(GLYPHS.to_vec()), h * w),
                0..h * w,
                0..h * w,
            )
        })
        .prop_filter("start and goal must differ", |(_, _, a, b)| a != b)
        .prop_map(|(w, mut glyphs, a, b)| {
            glyphs[a] = 'A';
            glyphs[b] = 'B';
            glyphs
                .chunks(w)
                .map(|row| row.iter().collect::<String>())
                .collect::<Vec<_>>()
                .join("\n")
        })
}

fn all_steps(kind: StrategyKind, maze: &Maze, config: &SolverConfig) -> Vec<StepResult> {
    let mut s = create_strategy(kind, maze, config).unwrap();
    steps(s.as_mut()).collect()
}

fn terminal(kind: StrategyKind, maze: &Maze, config: &SolverConfig) -> StepResult {
    let mut s = create_strategy(kind, maze, config).unwrap();
    run_to_end(s.as_mut()).unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn bfs_and_dijkstra_agree_on_length(text in maze_text()) {
        let maze = Maze::parse(&text).unwrap();
        let config = SolverConfig::default();
        let bfs = terminal(StrategyKind::Bfs, &maze, &config);
        let dijkstra = terminal(StrategyKind::Dijkstra, &maze, &config);
        prop_assert_eq!(bfs.status, dijkstra.status);
        prop_assert_eq!(
            bfs.path.map(|p| p.len()),
            dijkstra.path.map(|p| p.len())
        );
    }

    #[test]
    fn explored_grows_and_ends_with_start(text in maze_text()) {
        let maze = Maze::parse(&text).unwrap();
        for kind in StrategyKind::ALL {
            let run = all_steps(kind, &maze, &SolverConfig::default());
            let last = run.last().unwrap();
            prop_assert!(last.is_terminal(), "{}", kind);
            prop_assert!(last.explored.contains(&maze.start()), "{}", kind);
            for pair in run.windows(2) {
                prop_assert!(pair[0].explored.len() <= pair[1].explored.len(), "{}", kind);
                prop_assert!(pair[0].explored.is_subset(&pair[1].explored), "{}", kind);
                if pair[1].status == Status::Exploring {
                    let current = pair[1].current.unwrap();
                    prop_assert!(!pair[0].explored.contains(&current), "{} re-expanded {}", kind, current);
                }
            }
            prop_assert!(run.iter().filter(|s| s.is_terminal()).count() == 1);
        }
    }

    #[test]
    fn astar_never_costs_more_than_dijkstra(text in maze_text(), penalty in 0.5f64..6.0) {
        let maze = Maze::parse(&text).unwrap();
        let config = SolverConfig { penalty_cost: Some(penalty), ..Default::default() };
        let costs = config.cost_model(CostModel::DIJKSTRA_PENALTY);
        let astar = terminal(StrategyKind::Astar, &maze, &config);
        let dijkstra = terminal(StrategyKind::Dijkstra, &maze, &config);
        prop_assert_eq!(astar.status, dijkstra.status);
        if let (Some(a), Some(d)) = (astar.path, dijkstra.path) {
            prop_assert!(a.cost(&maze, &costs) <= d.cost(&maze, &costs) + 1e-9);
        }
    }

    #[test]
    fn replaying_actions_reproduces_the_path(text in maze_text()) {
        let maze = Maze::parse(&text).unwrap();
        for kind in StrategyKind::ALL {
            let end = terminal(kind, &maze, &SolverConfig::default());
            let Some(path) = end.path else { continue };
            prop_assert_eq!(end.status, Status::Done);
            prop_assert_eq!(path.replay(&maze), Some(path.cells.clone()));
            prop_assert_eq!(path.end(), Some(maze.goal()));
            prop_assert!(path.cells.iter().all(|&c| maze.is_open(c)));
        }
    }

    #[test]
    fn runs_are_deterministic(text in maze_text()) {
        let maze = Maze::parse(&text).unwrap();
        for kind in StrategyKind::ALL {
            let first = terminal(kind, &maze, &SolverConfig::default());
            let second = terminal(kind, &maze, &SolverConfig::default());
            prop_assert_eq!(first.steps, second.steps);
            prop_assert_eq!(first.path, second.path);
            prop_assert_eq!(first.explored, second.explored);
        }
    }

    #[test]
    fn dead_end_fill_keeps_every_solution(text in maze_text()) {
        let maze = Maze::parse(&text).unwrap();
        let bfs = terminal(StrategyKind::Bfs, &maze, &SolverConfig::default());
        let def = terminal(StrategyKind::DeadEndFill, &maze, &SolverConfig::default());
        prop_assert_eq!(bfs.status, def.status);
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(512))]

    #[test]
    fn astar_never_costs_more_than_dijkstra_on_tiles(
        text in tiled_maze_text(),
        penalty in 0.5f64..6.0,
    ) {
        let maze = Maze::parse(&text).unwrap();
        let config = SolverConfig { penalty_cost: Some(penalty), ..Default::default() };
        let costs = config.cost_model(CostModel::DIJKSTRA_PENALTY);
        let astar = terminal(StrategyKind::Astar, &maze, &config);
        let dijkstra = terminal(StrategyKind::Dijkstra, &maze, &config);
        prop_assert_eq!(astar.status, dijkstra.status);
        if let (Some(a), Some(d)) = (astar.path, dijkstra.path) {
            prop_assert!(a.cost(&maze, &costs) <= d.cost(&maze, &costs) + 1e-9);
        }
    }

    #[test]
    fn replay_on_tiles(text in tiled_maze_text()) {
        let maze = Maze::parse(&text).unwrap();
        // Unlocking only opens cells, so every path is valid in the
        // unlocked view.
        let view = Terrain::new(&maze, CostModel::default(), true);
        for kind in StrategyKind::ALL {
            let end = terminal(kind, &maze, &SolverConfig::default());
            let Some(path) = end.path else { continue };
            prop_assert_eq!(path.replay(view.maze()), Some(path.cells.clone()), "{}", kind);
            prop_assert_eq!(path.end(), Some(maze.goal()));
            prop_assert!(path.cells.iter().all(|&c| view.maze().is_open(c)), "{}", kind);
        }
    }

    #[test]
    fn deterministic_and_monotone_on_tiles(text in tiled_maze_text()) {
        let maze = Maze::parse(&text).unwrap();
        for kind in StrategyKind::ALL {
            let run = all_steps(kind, &maze, &SolverConfig::default());
            let again = all_steps(kind, &maze, &SolverConfig::default());
            prop_assert_eq!(run.len(), again.len(), "{}", kind);
            for (a, b) in run.iter().zip(&again) {
                prop_assert_eq!(a.status, b.status);
                prop_assert_eq!(a.current, b.current);
                prop_assert_eq!(&a.path, &b.path);
            }
            for pair in run.windows(2) {
                prop_assert!(pair[0].explored.is_subset(&pair[1].explored), "{}", kind);
            }
            prop_assert!(run.last().unwrap().is_terminal(), "{}", kind);
        }
    }

    #[test]
    fn dead_end_fill_keeps_every_solution_on_tiles(text in tiled_maze_text()) {
        let maze = Maze::parse(&text).unwrap();
        let bfs = terminal(StrategyKind::Bfs, &maze, &SolverConfig::default());
        let def = terminal(StrategyKind::DeadEndFill, &maze, &SolverConfig::default());
        prop_assert_eq!(bfs.status, def.status);
    }
}

#[test]
fn sealed_regions_fail_with_nonzero_steps() {
    let maze = Maze::parse("A  #   \n   #  B\n   #   ").unwrap();
    for kind in StrategyKind::ALL {
        let end = terminal(kind, &maze, &SolverConfig::default());
        assert_eq!(end.status, Status::Failed, "{kind}");
        assert!(end.steps > 0, "{kind}");
        assert!(end.path.is_none(), "{kind}");
        assert!(end.explored.contains(&maze.start()), "{kind}");
    }
}

#[test]
fn straight_corridor_two_moves() {
    let maze = Maze::parse("#####\n#A B#\n#####\n#####\n#####").unwrap();
    for kind in [
        StrategyKind::Bfs,
        StrategyKind::Dfs,
        StrategyKind::Dijkstra,
        StrategyKind::Astar,
    ] {
        let end = terminal(kind, &maze, &SolverConfig::default());
        assert_eq!(
            end.path.unwrap().cells,
            vec![Cell::new(1, 2), Cell::new(1, 3)],
            "{kind}"
        );
    }
}

#[test]
fn teleport_beats_manhattan_distance() {
    let maze = Maze::parse("#######\n#TA   #\n#     #\n#  TB #\n#######").unwrap();
    let end = terminal(StrategyKind::Astar, &maze, &SolverConfig::default());
    let path = end.path.unwrap();
    assert_eq!(path.len(), 3);
    assert!((path.len() as i32) < maze.start().manhattan(maze.goal()));
}

#[test]
fn shared_maze_is_untouched_by_solving() {
    let maze = Maze::parse("AH \n###\n B \n ## \n  P").unwrap();
    let before = maze.clone();
    for kind in StrategyKind::ALL {
        terminal(kind, &maze, &SolverConfig::default());
    }
    assert_eq!(maze, before);
}

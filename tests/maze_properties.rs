use std::sync::mpsc;

use mazecarve::{
    Direction, GridEvent, Maze, MazeError, Solver,
    generators::{Bias, GENERATORS, Generator, Policy, SplitMode, generate_maze},
    solve_maze,
};

fn all_generators() -> Vec<Generator> {
    let mut generators = GENERATORS.to_vec();
    generators.extend([
        Generator::RecurDiv(SplitMode::Random),
        Generator::BinaryTree(Bias::NorthWest),
        Generator::BinaryTree(Bias::NorthEast),
        Generator::BinaryTree(Bias::SouthWest),
        Generator::GrowingTree(Policy::Newest),
        Generator::GrowingTree(Policy::Oldest),
        Generator::GrowingTree(Policy::Middle),
    ]);
    generators
}

fn generated(size: u16, generator: Generator, seed: u64) -> Maze {
    let mut maze = Maze::new(size, generator.initial_walls()).unwrap();
    generate_maze(&mut maze, generator, Some(seed));
    maze.reset_states();
    maze
}

fn wall_events(size: u16, generator: Generator, seed: u64) -> Vec<GridEvent> {
    let (tx, rx) = mpsc::channel();
    let mut maze = Maze::with_observer(size, generator.initial_walls(), tx).unwrap();
    generate_maze(&mut maze, generator, Some(seed));
    drop(maze);
    rx.iter()
        .filter(|event| matches!(event, GridEvent::Wall { .. }))
        .collect()
}

#[test]
fn carving_generators_remove_one_wall_less_than_cells() {
    for generator in all_generators() {
        if !generator.initial_walls() {
            continue;
        }
        for size in [2, 3, 7, 16] {
            let mut maze = Maze::new(size, true).unwrap();
            let stats = generate_maze(&mut maze, generator, Some(size as u64));
            let cells = size as usize * size as usize;
            assert_eq!(stats.walls_removed, cells - 1, "{} size {}", generator, size);
            assert_eq!(stats.walls_added, 0);
            assert!(maze.is_perfect(), "{} size {}", generator, size);
        }
    }
}

#[test]
fn division_connects_every_cell() {
    for mode in [SplitMode::Halves, SplitMode::Random] {
        for size in [2, 5, 13] {
            let maze = generated(size, Generator::RecurDiv(mode), 3);
            assert!(maze.is_perfect(), "{:?} size {}", mode, size);
        }
    }
}

#[test]
fn mirrored_walls_agree() {
    for generator in all_generators() {
        let maze = generated(6, generator, 21);
        for (row, col) in maze.cells() {
            if col + 1 < maze.size() {
                assert_eq!(
                    maze.has_wall((row, col), Direction::East),
                    maze.has_wall((row, col + 1), Direction::East.opposite())
                );
            }
            if row + 1 < maze.size() {
                assert_eq!(
                    maze.has_wall((row, col), Direction::South),
                    maze.has_wall((row + 1, col), Direction::North)
                );
            }
        }
    }
}

#[test]
fn same_seed_same_wall_events() {
    for generator in all_generators() {
        let first = wall_events(8, generator, 77);
        assert!(!first.is_empty(), "{}", generator);
        assert_eq!(first, wall_events(8, generator, 77), "{}", generator);
    }
}

#[test]
fn backtracking_seeds_differ() {
    let layout = |seed| {
        let maze = generated(4, Generator::RecurBacktrack, seed);
        maze.cells()
            .map(|c| {
                (
                    maze.has_wall(c, Direction::East),
                    maze.has_wall(c, Direction::South),
                )
            })
            .collect::<Vec<_>>()
    };
    assert_eq!(layout(1), layout(1));
    let distinct = (1..=10)
        .map(layout)
        .collect::<std::collections::HashSet<_>>();
    assert!(distinct.len() > 1);
}

#[test]
fn kruskal_on_five_by_five() {
    let mut maze = Maze::new(5, true).unwrap();
    let stats = generate_maze(&mut maze, Generator::Kruskal, Some(1));
    assert_eq!(stats.walls_removed, 24);
    assert!(maze.is_perfect());
}

#[test]
fn solvers_agree_on_the_unique_path() {
    for generator in all_generators() {
        let mut maze = generated(9, generator, 5);
        for (start, end) in [((0, 0), (8, 8)), ((4, 2), (0, 7)), ((8, 0), (8, 0))] {
            maze.reset_states();
            let bfs = solve_maze(&mut maze, Solver::Bfs, start, end, None).unwrap();
            maze.reset_states();
            let dfs = solve_maze(&mut maze, Solver::Dfs, start, end, Some(5)).unwrap();

            // A perfect maze has exactly one simple path between two cells
            assert_eq!(bfs.path, dfs.path, "{}", generator);
            assert_eq!(bfs.path.first(), Some(&start));
            assert_eq!(bfs.path.last(), Some(&end));
            for pair in bfs.path.windows(2) {
                assert!(maze.open_neighbors(pair[0]).contains(&pair[1]));
            }
        }
    }
}

#[test]
fn solving_leaves_walls_alone() {
    let mut maze = generated(7, Generator::HuntKill, 2);
    let before = maze.count_passages();
    solve_maze(&mut maze, Solver::Dfs, (0, 0), (6, 6), Some(2)).unwrap();
    solve_maze(&mut maze, Solver::Bfs, (6, 6), (0, 0), None).unwrap();
    assert_eq!(maze.count_passages(), before);
    assert!(maze.is_perfect());
}

#[test]
fn single_cell_maze() {
    for generator in all_generators() {
        let mut maze = Maze::new(1, generator.initial_walls()).unwrap();
        let stats = generate_maze(&mut maze, generator, Some(0));
        assert_eq!(stats.walls_removed, 0);
        assert_eq!(maze.count_passages(), 0);
        let solution = solve_maze(&mut maze, Solver::Dfs, (0, 0), (0, 0), None).unwrap();
        assert_eq!(solution.path, vec![(0, 0)]);
    }
}

#[test]
fn invalid_configuration_is_rejected_up_front() {
    assert!(matches!(
        "binary-tree:up".parse::<Generator>(),
        Err(MazeError::InvalidMode { .. })
    ));
    let mut maze = Maze::new(3, true).unwrap();
    assert!(matches!(
        solve_maze(&mut maze, Solver::Bfs, (0, 0), (3, 3), None),
        Err(MazeError::OutOfBounds { what: "end", .. })
    ));
}

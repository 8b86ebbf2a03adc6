use std::str::FromStr;

mod bfs;
mod dfs;

use bfs::solve_bfs;
use dfs::solve_dfs;

use crate::{
    error::MazeError,
    generators::get_rng,
    maze::{Coord, Maze, TileState},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Solver {
    Dfs,
    Bfs,
}

/// Available maze solvers
pub const SOLVERS: [Solver; 2] = [Solver::Dfs, Solver::Bfs];

impl std::fmt::Display for Solver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Solver::Dfs => write!(f, "Depth-First Search (DFS)"),
            Solver::Bfs => write!(f, "Breadth-First Search (BFS)"),
        }
    }
}

impl FromStr for Solver {
    type Err = MazeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "dfs" => Ok(Solver::Dfs),
            "bfs" => Ok(Solver::Bfs),
            _ => Err(MazeError::UnknownSolver(s.to_string())),
        }
    }
}

/// A path found through a maze.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    /// Cells from start to end, both included.
    pub path: Vec<Coord>,
    /// Number of cells the solver explored.
    pub visited: usize,
}

impl Solution {
    /// Number of steps along the path.
    pub fn len(&self) -> usize {
        self.path.len().saturating_sub(1)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Marks the entrance and the exit of the maze.
pub fn mark_exits(maze: &mut Maze, start: Coord, end: Coord) {
    maze.add_tile_state(start, TileState::START);
    maze.add_tile_state(end, TileState::END);
    maze.repaint();
}

fn check_position(maze: &Maze, what: &'static str, coord: Coord) -> Result<(), MazeError> {
    if maze.is_in_bounds(coord) {
        Ok(())
    } else {
        Err(MazeError::OutOfBounds {
            what,
            coord,
            size: maze.size(),
        })
    }
}

/// Finds a path from `start` to `end` through the open passages of `maze`.
/// Only cell states are touched; walls are left as they are.
pub fn solve_maze(
    maze: &mut Maze,
    solver: Solver,
    start: Coord,
    end: Coord,
    seed: Option<u64>,
) -> Result<Solution, MazeError> {
    check_position(maze, "start", start)?;
    check_position(maze, "end", end)?;

    tracing::debug!("[solve] {} from {:?} to {:?}", solver, start, end);
    mark_exits(maze, start, end);

    let solution = match solver {
        Solver::Dfs => solve_dfs(maze, start, end, &mut get_rng(seed)),
        Solver::Bfs => solve_bfs(maze, start, end),
    };
    match &solution {
        Ok(solution) => tracing::debug!(
            "[solve] path of {} steps, {} cells explored",
            solution.len(),
            solution.visited
        ),
        Err(err) => tracing::warn!("[solve] {}", err),
    }
    solution
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generators::{Generator, generate_maze};

    #[test]
    fn test_rejects_positions_outside_maze() {
        let mut maze = Maze::new(3, true).unwrap();
        let err = solve_maze(&mut maze, Solver::Bfs, (0, 3), (0, 0), None);
        assert_eq!(
            err,
            Err(MazeError::OutOfBounds {
                what: "start",
                coord: (0, 3),
                size: 3
            })
        );
        // Nothing was marked
        assert!(maze.cells().all(|c| maze.tile_state(c).is_empty()));
    }

    #[test]
    fn test_single_cell_maze() {
        for solver in SOLVERS {
            let mut maze = Maze::new(1, true).unwrap();
            let solution = solve_maze(&mut maze, solver, (0, 0), (0, 0), Some(0)).unwrap();
            assert_eq!(solution.path, vec![(0, 0)]);
            assert!(solution.is_empty());
        }
    }

    #[test]
    fn test_exits_are_marked() {
        let mut maze = Maze::new(4, true).unwrap();
        generate_maze(&mut maze, Generator::Kruskal, Some(8));
        maze.reset_states();
        solve_maze(&mut maze, Solver::Bfs, (0, 0), (3, 3), None).unwrap();
        assert!(maze.tile_state((0, 0)).contains(TileState::START));
        assert!(maze.tile_state((3, 3)).contains(TileState::END));
    }

    #[test]
    fn test_parse_solver() {
        assert_eq!("BFS".parse::<Solver>(), Ok(Solver::Bfs));
        assert_eq!("dfs".parse::<Solver>(), Ok(Solver::Dfs));
        assert!("astar".parse::<Solver>().is_err());
    }
}

//! Perfect maze generation and solving over an N x N grid.
//!
//! A [`Maze`] owns the walls and per-cell progress flags. One of the
//! [`generators`] carves (or, for recursive division, builds) a spanning tree into
//! it, then one of the [`solvers`] finds a path between two cells. Every mutation can
//! be reported to a [`GridObserver`], so a renderer can follow along without the core
//! knowing anything about drawing.

pub mod config;
pub mod error;
pub mod generators;
pub mod maze;
pub mod solvers;
pub mod union_find;

pub use config::{MazeConfig, RunReport};
pub use error::MazeError;
pub use generators::{GenerationStats, Generator, generate_maze};
pub use maze::{Coord, Direction, GridEvent, GridObserver, Maze, TileState};
pub use solvers::{Solution, Solver, solve_maze};

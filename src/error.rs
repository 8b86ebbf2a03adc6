use thiserror::Error;

/// Errors surfaced by maze construction, generation and solving.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MazeError {
    #[error("maze size must be at least 1, got {0}")]
    InvalidSize(u16),
    #[error("unknown mode '{mode}' for {generator}")]
    InvalidMode { generator: &'static str, mode: String },
    #[error("unknown maze generation algorithm '{0}'")]
    UnknownGenerator(String),
    #[error("unknown maze solving algorithm '{0}'")]
    UnknownSolver(String),
    #[error("{what} position {coord:?} is outside a maze of size {size}")]
    OutOfBounds {
        what: &'static str,
        coord: (u16, u16),
        size: u16,
    },
    #[error("no path from {start:?} to {end:?}")]
    Unreachable { start: (u16, u16), end: (u16, u16) },
}

use std::fmt;
use std::ops::{BitAnd, BitOr, BitOrAssign, Not};

/// Progress flags attached to a maze cell.
///
/// The flags are orthogonal to the walls: they record what a generator or solver
/// has done with a cell, never the topology of the maze.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TileState(u8);

impl TileState {
    pub const EMPTY: TileState = TileState(0);
    pub const VISITED: TileState = TileState(1 << 0);
    pub const PATH: TileState = TileState(1 << 1);
    pub const DEADEND: TileState = TileState(1 << 2);
    pub const CURRENT: TileState = TileState(1 << 3);
    pub const START: TileState = TileState(1 << 4);
    pub const END: TileState = TileState(1 << 5);
    pub const CORRECT_PATH: TileState = TileState(1 << 6);

    pub const fn bits(self) -> u8 {
        self.0
    }

    pub const fn from_bits(bits: u8) -> Self {
        TileState(bits)
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Returns true if every flag of `other` is set in `self`.
    pub const fn contains(self, other: TileState) -> bool {
        self.0 & other.0 == other.0
    }

    pub fn insert(&mut self, other: TileState) {
        self.0 |= other.0;
    }

    pub fn remove(&mut self, other: TileState) {
        self.0 &= !other.0;
    }
}

impl BitOr for TileState {
    type Output = TileState;

    fn bitor(self, rhs: Self) -> Self::Output {
        TileState(self.0 | rhs.0)
    }
}

impl BitOrAssign for TileState {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl BitAnd for TileState {
    type Output = TileState;

    fn bitand(self, rhs: Self) -> Self::Output {
        TileState(self.0 & rhs.0)
    }
}

impl Not for TileState {
    type Output = TileState;

    fn not(self) -> Self::Output {
        TileState(!self.0)
    }
}

impl fmt::Display for TileState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const NAMES: [(TileState, &str); 7] = [
            (TileState::VISITED, "visited"),
            (TileState::PATH, "path"),
            (TileState::DEADEND, "deadend"),
            (TileState::CURRENT, "current"),
            (TileState::START, "start"),
            (TileState::END, "end"),
            (TileState::CORRECT_PATH, "correct-path"),
        ];
        if self.is_empty() {
            return write!(f, "empty");
        }
        let mut first = true;
        for (flag, name) in NAMES {
            if self.contains(flag) {
                if !first {
                    write!(f, "|")?;
                }
                write!(f, "{}", name)?;
                first = false;
            }
        }
        Ok(())
    }
}

/// One entry of the maze lattice.
///
/// Cells sit at odd lattice coordinates; everything between them is either a wall or
/// an open passage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridCell {
    /// A maze cell with its progress flags.
    Tile(TileState),
    Wall,
    Passage,
}

impl GridCell {
    pub const TILE: GridCell = GridCell::Tile(TileState::EMPTY);

    pub fn is_wall(&self) -> bool {
        matches!(self, GridCell::Wall)
    }
}

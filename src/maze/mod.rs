pub mod cell;
pub mod grid;

use std::collections::VecDeque;

pub use cell::{GridCell, TileState};
pub use grid::{GridEvent, GridObserver};
use grid::Grid;

use crate::error::MazeError;

/// A cell position as (row, col). Row 0 is the top row.
pub type Coord = (u16, u16);

/// Compass side of a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    North,
    South,
    East,
    West,
}

impl Direction {
    /// Canonical enumeration order. Every neighbor list is built in this order before
    /// any shuffle, so seeded runs are reproducible.
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::South,
        Direction::West,
        Direction::East,
    ];

    pub fn opposite(self) -> Direction {
        match self {
            Direction::North => Direction::South,
            Direction::South => Direction::North,
            Direction::East => Direction::West,
            Direction::West => Direction::East,
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Direction::North => write!(f, "north"),
            Direction::South => write!(f, "south"),
            Direction::East => write!(f, "east"),
            Direction::West => write!(f, "west"),
        }
    }
}

/// Direction of the unit step from `from` to `to`.
///
/// # Panics
/// If the two cells are not orthogonally adjacent.
pub fn heading(from: Coord, to: Coord) -> Direction {
    let dr = to.0 as i32 - from.0 as i32;
    let dc = to.1 as i32 - from.1 as i32;
    match (dr, dc) {
        (1, 0) => Direction::South,
        (-1, 0) => Direction::North,
        (0, 1) => Direction::East,
        (0, -1) => Direction::West,
        _ => panic!("{:?} and {:?} are not adjacent cells", from, to),
    }
}

/// The cell one step from `coord` towards `direction`, or `None` if that leaves the
/// coordinate space. Bounds against a particular maze are the caller's concern.
pub fn step(coord: Coord, direction: Direction) -> Option<Coord> {
    let (row, col) = coord;
    match direction {
        Direction::North => row.checked_sub(1).map(|r| (r, col)),
        Direction::South => row.checked_add(1).map(|r| (r, col)),
        Direction::West => col.checked_sub(1).map(|c| (row, c)),
        Direction::East => col.checked_add(1).map(|c| (row, c)),
    }
}

/// Get neighbors of a cell in a `size` x `size` maze, in North, South, West, East order.
/// A neighbor is considered a cell that is one step away in the cardinal directions.
pub fn get_neighbors(coord: Coord, size: u16) -> impl Iterator<Item = Coord> {
    let (row, col) = coord;
    let in_maze = row < size && col < size;
    [
        // NOTE: This way of handling underflow/overflow is overflow-safe.
        // When row or col is 0, wrap the decrement to u16::MAX so it is filtered out
        // by the bounds check. Increments saturate at u16::MAX, which is never a valid
        // index as the largest possible size is u16::MAX itself.
        (row.wrapping_sub(1), col),
        (row.saturating_add(1), col),
        (row, col.wrapping_sub(1)),
        (row, col.saturating_add(1)),
    ]
    .into_iter()
    .filter(move |&(r, c)| in_maze && r < size && c < size)
}

pub struct Maze {
    grid: Grid,
    size: u16,
}

impl Maze {
    /// Creates a new `size` x `size` maze.
    /// With `walls` set, every wall is present; otherwise only the outer border is walled.
    pub fn new(size: u16, walls: bool) -> Result<Self, MazeError> {
        Maze::build(size, walls, None)
    }

    /// Same as [`Maze::new`], reporting every change to `observer`.
    pub fn with_observer(
        size: u16,
        walls: bool,
        observer: impl GridObserver + 'static,
    ) -> Result<Self, MazeError> {
        Maze::build(size, walls, Some(Box::new(observer)))
    }

    fn build(
        size: u16,
        walls: bool,
        observer: Option<Box<dyn GridObserver>>,
    ) -> Result<Self, MazeError> {
        if size == 0 {
            return Err(MazeError::InvalidSize(size));
        }
        // n cells in each dimension -> n + 1 walls -> 2n + 1 total
        let lattice = size as u32 * 2 + 1;
        let fill = if walls {
            GridCell::Wall
        } else {
            GridCell::Passage
        };
        let mut grid = Grid::new(lattice, lattice, fill, observer);
        for row in 0..lattice {
            for col in 0..lattice {
                let cell = if row % 2 == 1 && col % 2 == 1 {
                    GridCell::TILE
                } else if grid.is_boundary(row, col) || (row % 2 == 0 && col % 2 == 0) {
                    // Border walls and the posts between walls are fixed
                    GridCell::Wall
                } else {
                    continue;
                };
                grid.replace((row, col), cell);
            }
        }
        grid.emit(GridEvent::Initial { size, walls });
        Ok(Maze { grid, size })
    }

    /// Returns the number of rows (and columns) of the maze.
    pub fn size(&self) -> u16 {
        self.size
    }

    /// Checks if the given coordinate is within the bounds of the maze.
    pub fn is_in_bounds(&self, coord: Coord) -> bool {
        coord.0 < self.size && coord.1 < self.size
    }

    /// Row-major index of a cell, in `0..size * size`.
    pub fn cell_index(&self, coord: Coord) -> usize {
        self.check_bounds(coord);
        coord.0 as usize * self.size as usize + coord.1 as usize
    }

    /// All cell coordinates in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = Coord> + use<> {
        let size = self.size;
        (0..size).flat_map(move |row| (0..size).map(move |col| (row, col)))
    }

    pub fn neighbors(&self, coord: Coord) -> impl Iterator<Item = Coord> + use<> {
        get_neighbors(coord, self.size)
    }

    /// Neighbors reachable from `coord` without crossing a wall, in canonical order.
    pub fn open_neighbors(&self, coord: Coord) -> Vec<Coord> {
        Direction::ALL
            .into_iter()
            .filter(|&side| !self.has_wall(coord, side))
            .filter_map(|side| step(coord, side))
            .filter(|&c| self.is_in_bounds(c))
            .collect()
    }

    fn check_bounds(&self, coord: Coord) {
        if !self.is_in_bounds(coord) {
            panic!(
                "cell {:?} is out of bounds for a maze of size {}",
                coord, self.size
            );
        }
    }

    fn tile_coord(&self, coord: Coord) -> (u32, u32) {
        self.check_bounds(coord);
        (coord.0 as u32 * 2 + 1, coord.1 as u32 * 2 + 1)
    }

    /// Lattice position of the wall on `side` of `coord`. Both cells sharing a wall map
    /// to the same position, which keeps the two views of one wall in agreement.
    fn wall_coord(&self, coord: Coord, side: Direction) -> (u32, u32) {
        let (row, col) = self.tile_coord(coord);
        match side {
            Direction::North => (row - 1, col),
            Direction::South => (row + 1, col),
            Direction::West => (row, col - 1),
            Direction::East => (row, col + 1),
        }
    }

    /// Checks if there is a wall on `side` of the cell.
    ///
    /// # Panics
    /// If `coord` is out of bounds.
    pub fn has_wall(&self, coord: Coord, side: Direction) -> bool {
        self.grid[self.wall_coord(coord, side)].is_wall()
    }

    fn set_wall(&mut self, coord: Coord, side: Direction, present: bool) -> bool {
        let wall = self.wall_coord(coord, side);
        let cell = if present {
            GridCell::Wall
        } else {
            GridCell::Passage
        };
        let old = self.grid.replace(wall, cell);
        if old == cell {
            return false;
        }
        self.grid.emit(GridEvent::Wall {
            coord,
            side,
            present,
        });
        true
    }

    /// Adds the wall on `side` of the cell, which is also the opposite wall of the
    /// neighbor on that side. Returns `true` if the wall was not there before.
    pub fn add_wall(&mut self, coord: Coord, side: Direction) -> bool {
        self.set_wall(coord, side, true)
    }

    /// Removes the wall on `side` of the cell, opening a passage to the neighbor.
    /// Returns `true` if a wall was removed, `false` if none existed.
    pub fn remove_wall(&mut self, coord: Coord, side: Direction) -> bool {
        self.set_wall(coord, side, false)
    }

    pub fn tile_state(&self, coord: Coord) -> TileState {
        match self.grid[self.tile_coord(coord)] {
            GridCell::Tile(state) => state,
            other => unreachable!("lattice entry of cell {:?} is {:?}", coord, other),
        }
    }

    pub fn set_tile_state(&mut self, coord: Coord, state: TileState) {
        let tile = self.tile_coord(coord);
        if let GridCell::Tile(old) = self.grid.replace(tile, GridCell::Tile(state)) {
            if old != state {
                self.grid.emit(GridEvent::State {
                    coord,
                    old,
                    new: state,
                });
            }
        }
    }

    pub fn add_tile_state(&mut self, coord: Coord, flags: TileState) {
        let state = self.tile_state(coord) | flags;
        self.set_tile_state(coord, state);
    }

    pub fn clear_tile_state(&mut self, coord: Coord, flags: TileState) {
        let state = self.tile_state(coord) & !flags;
        self.set_tile_state(coord, state);
    }

    /// Clears the state of every cell. Walls are untouched.
    pub fn reset_states(&mut self) {
        for coord in self.cells() {
            self.set_tile_state(coord, TileState::EMPTY);
        }
    }

    /// Whether anyone is listening to grid events.
    pub fn is_observed(&self) -> bool {
        self.grid.has_observer()
    }

    /// Tells the observer that a logical step is complete.
    pub fn repaint(&mut self) {
        if self.grid.has_observer() {
            self.grid.emit(GridEvent::Repaint);
        }
    }

    /// Number of open walls between two cells. Openings in the outer border are not counted.
    pub fn count_passages(&self) -> usize {
        self.cells()
            .map(|(row, col)| {
                let east = col + 1 < self.size && !self.has_wall((row, col), Direction::East);
                let south = row + 1 < self.size && !self.has_wall((row, col), Direction::South);
                east as usize + south as usize
            })
            .sum()
    }

    /// Checks that the open passages form a spanning tree: every cell reachable from
    /// (0, 0) and exactly one passage fewer than there are cells.
    pub fn is_perfect(&self) -> bool {
        let total = self.size as usize * self.size as usize;
        if self.count_passages() != total - 1 {
            return false;
        }
        let mut seen = vec![false; total];
        let mut queue = VecDeque::from([(0, 0)]);
        seen[0] = true;
        let mut reached = 1;
        while let Some(cell) = queue.pop_front() {
            for next in self.open_neighbors(cell) {
                let idx = self.cell_index(next);
                if !seen[idx] {
                    seen[idx] = true;
                    reached += 1;
                    queue.push_back(next);
                }
            }
        }
        reached == total
    }
}

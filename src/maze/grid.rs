use std::sync::mpsc::{Sender, SyncSender};

use super::Direction;
use super::cell::{GridCell, TileState};

/// Change notifications emitted while a maze is being mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridEvent {
    /// A fresh grid of `size` x `size` cells, with every wall present or only the border.
    Initial { size: u16, walls: bool },
    /// The wall on `side` of the cell at `coord` was added or removed.
    Wall {
        coord: (u16, u16),
        side: Direction,
        present: bool,
    },
    /// The state of the cell at `coord` changed.
    State {
        coord: (u16, u16),
        old: TileState,
        new: TileState,
    },
    /// A logical step finished; a good moment for a renderer to repaint.
    Repaint,
}

/// Receives grid events. A renderer, a recorder, or nothing at all.
pub trait GridObserver {
    fn notify(&mut self, event: GridEvent);
}

impl GridObserver for Sender<GridEvent> {
    fn notify(&mut self, event: GridEvent) {
        // A dropped receiver only means nobody is watching anymore
        let _ = self.send(event);
    }
}

impl GridObserver for SyncSender<GridEvent> {
    fn notify(&mut self, event: GridEvent) {
        let _ = self.send(event);
    }
}

/// Row-major lattice storage. Indexed by (row, col) in lattice coordinates.
pub struct Grid {
    data: Box<[GridCell]>,
    width: u32,
    height: u32,
    observer: Option<Box<dyn GridObserver>>,
}

impl Grid {
    pub fn new(width: u32, height: u32, cell: GridCell, observer: Option<Box<dyn GridObserver>>) -> Self {
        let data = vec![cell; width as usize * height as usize].into_boxed_slice();
        Grid {
            data,
            width,
            height,
            observer,
        }
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn is_boundary(&self, row: u32, col: u32) -> bool {
        row == 0 || col == 0 || row == self.height - 1 || col == self.width - 1
    }

    fn ravel_index(&self, row: u32, col: u32) -> usize {
        assert!(
            row < self.height && col < self.width,
            "lattice coordinate ({}, {}) is out of bounds",
            row,
            col
        );
        row as usize * self.width as usize + col as usize
    }

    /// Overwrites an entry without notifying the observer. Returns the previous value.
    pub fn replace(&mut self, coord: (u32, u32), cell: GridCell) -> GridCell {
        let idx = self.ravel_index(coord.0, coord.1);
        std::mem::replace(&mut self.data[idx], cell)
    }

    pub fn emit(&mut self, event: GridEvent) {
        if let Some(observer) = self.observer.as_mut() {
            observer.notify(event);
        }
    }

    pub fn has_observer(&self) -> bool {
        self.observer.is_some()
    }
}

impl std::ops::Index<(u32, u32)> for Grid {
    type Output = GridCell;

    fn index(&self, index: (u32, u32)) -> &Self::Output {
        &self.data[self.ravel_index(index.0, index.1)]
    }
}

use rand::{rngs::StdRng, seq::SliceRandom};

use super::GenerationStats;
use crate::maze::{Coord, Maze, TileState, heading};

struct HuntAndKill<'a> {
    maze: &'a mut Maze,
    rng: &'a mut StdRng,
    visited: Vec<bool>,
    /// Rows above this one hold no unvisited cells and are never scanned again
    scan_line_start: u16,
    stats: GenerationStats,
}

impl HuntAndKill<'_> {
    fn is_visited(&self, coord: Coord) -> bool {
        self.visited[self.maze.cell_index(coord)]
    }

    fn shuffled_neighbors(&mut self, cell: Coord) -> Vec<Coord> {
        let mut neighbors = self.maze.neighbors(cell).collect::<Vec<_>>();
        neighbors.shuffle(&mut *self.rng);
        neighbors
    }

    fn carve(&mut self, from: Coord, to: Coord) {
        if self.maze.remove_wall(from, heading(from, to)) {
            self.stats.walls_removed += 1;
        }
    }

    /// Visits `cell` and carves into a random unvisited neighbor.
    /// Returns that neighbor, or `None` at a dead end.
    fn walk(&mut self, cell: Coord) -> Option<Coord> {
        let idx = self.maze.cell_index(cell);
        self.visited[idx] = true;

        self.maze
            .add_tile_state(cell, TileState::CURRENT | TileState::VISITED);
        self.maze.repaint();
        self.maze.clear_tile_state(cell, TileState::CURRENT);

        let mut neighbors = self.shuffled_neighbors(cell);
        while let Some(next) = neighbors.pop() {
            if self.is_visited(next) {
                continue;
            }
            self.carve(cell, next);
            return Some(next);
        }
        None
    }

    fn flash_scan_line(&mut self, row: u16) {
        // Only a watching renderer cares; the flags are cleared again right away
        if !self.maze.is_observed() {
            return;
        }
        let size = self.maze.size();
        (0..size).for_each(|col| self.maze.add_tile_state((row, col), TileState::CORRECT_PATH));
        self.maze.repaint();
        (0..size).for_each(|col| self.maze.clear_tile_state((row, col), TileState::CORRECT_PATH));
    }

    /// Finds the first unvisited cell next to a visited one, connects the two and
    /// returns the unvisited cell. `None` once every cell is visited.
    fn hunt(&mut self) -> Option<Coord> {
        let size = self.maze.size();
        while self.scan_line_start < size {
            let row = self.scan_line_start;
            tracing::trace!("[hunt-and-kill] scanning row {}", row);
            self.flash_scan_line(row);
            for col in 0..size {
                let cell = (row, col);
                if self.is_visited(cell) {
                    continue;
                }
                let mut neighbors = self.shuffled_neighbors(cell);
                while let Some(next) = neighbors.pop() {
                    if !self.is_visited(next) {
                        continue;
                    }
                    self.carve(cell, next);
                    return Some(cell);
                }
            }
            // This row had nothing left to connect, so skip re-scanning it
            self.scan_line_start += 1;
        }
        None
    }
}

/// Alternates random walks with row scans for a place to restart from.
pub fn hunt_and_kill(maze: &mut Maze, rng: &mut StdRng) -> GenerationStats {
    let cells = maze.size() as usize * maze.size() as usize;
    let mut hunter = HuntAndKill {
        maze,
        rng,
        visited: vec![false; cells],
        scan_line_start: 0,
        stats: GenerationStats::default(),
    };

    let mut current = (0, 0);
    loop {
        current = match hunter.walk(current) {
            Some(next) => next,
            None => match hunter.hunt() {
                Some(found) => found,
                None => break,
            },
        };
    }

    hunter.stats
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generators::get_rng;

    #[test]
    fn test_hunt_and_kill_is_perfect() {
        for seed in 0..10 {
            let mut maze = Maze::new(10, true).unwrap();
            let stats = hunt_and_kill(&mut maze, &mut get_rng(Some(seed)));
            assert_eq!(stats.walls_removed, 99);
            assert!(maze.is_perfect());
            assert!(
                maze.cells()
                    .all(|c| maze.tile_state(c) == TileState::VISITED)
            );
        }
    }

    #[test]
    fn test_scan_line_flash_leaves_no_trace() {
        let (tx, rx) = std::sync::mpsc::channel();
        let mut maze = Maze::with_observer(6, true, tx).unwrap();
        hunt_and_kill(&mut maze, &mut get_rng(Some(7)));
        assert!(
            maze.cells()
                .all(|c| !maze.tile_state(c).contains(TileState::CORRECT_PATH))
        );
        assert!(rx.try_iter().count() > 0);
    }

    #[test]
    fn test_single_cell() {
        let mut maze = Maze::new(1, true).unwrap();
        let stats = hunt_and_kill(&mut maze, &mut get_rng(Some(0)));
        assert_eq!(stats.walls_removed, 0);
        assert!(maze.is_perfect());
    }
}

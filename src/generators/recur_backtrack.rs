use rand::{rngs::StdRng, seq::SliceRandom};

use super::GenerationStats;
use crate::maze::{Coord, Maze, TileState, heading};

/// A cell being carved from, with the neighbors it has yet to try.
struct Frame {
    cell: Coord,
    neighbors: Vec<Coord>,
}

fn enter(maze: &mut Maze, cell: Coord, rng: &mut StdRng) -> Frame {
    maze.add_tile_state(cell, TileState::CURRENT | TileState::PATH);
    maze.repaint();
    maze.clear_tile_state(cell, TileState::CURRENT);

    let mut neighbors = maze.neighbors(cell).collect::<Vec<_>>();
    neighbors.shuffle(rng);
    Frame { cell, neighbors }
}

/// Depth-first carving from the top-left cell. Each cell tries its neighbors in a
/// shuffled order, carving into every one that is still unvisited.
pub fn recursive_backtrack(maze: &mut Maze, rng: &mut StdRng) -> GenerationStats {
    let mut stats = GenerationStats::default();
    let mut visited = vec![false; maze.size() as usize * maze.size() as usize];

    let start = (0, 0);
    visited[maze.cell_index(start)] = true;
    let mut stack = vec![enter(maze, start, rng)];

    while let Some(frame) = stack.last_mut() {
        let cell = frame.cell;
        match frame.neighbors.pop() {
            Some(next) => {
                let idx = maze.cell_index(next);
                if visited[idx] {
                    continue;
                }
                if maze.remove_wall(cell, heading(cell, next)) {
                    stats.walls_removed += 1;
                }
                visited[idx] = true;
                let frame = enter(maze, next, rng);
                stack.push(frame);
            }
            None => {
                // Backtrack
                maze.set_tile_state(cell, TileState::VISITED);
                stack.pop();
                if let Some(parent) = stack.last() {
                    let parent = parent.cell;
                    maze.add_tile_state(parent, TileState::CURRENT | TileState::PATH);
                    maze.repaint();
                    maze.clear_tile_state(parent, TileState::CURRENT);
                }
            }
        }
    }

    stats
}

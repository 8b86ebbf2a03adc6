use rand::{rngs::StdRng, seq::SliceRandom};

use super::Solution;
use crate::{
    error::MazeError,
    maze::{Coord, Maze, TileState},
};

struct Frame {
    cell: Coord,
    /// Open neighbors not tried yet, in the order they will be popped from the back
    neighbors: Vec<Coord>,
}

fn touch(maze: &mut Maze, cell: Coord) {
    maze.add_tile_state(cell, TileState::CURRENT | TileState::CORRECT_PATH);
    maze.repaint();
    maze.clear_tile_state(cell, TileState::CURRENT);
}

/// Depth-first search through open passages, trying neighbors in random order.
/// Branches that do not lead to `end` are marked as dead ends; the cells still on the
/// search stack when `end` is found form the path.
pub fn solve_dfs(
    maze: &mut Maze,
    start: Coord,
    end: Coord,
    rng: &mut StdRng,
) -> Result<Solution, MazeError> {
    let mut visited = vec![false; maze.size() as usize * maze.size() as usize];
    let mut count = 1;

    visited[maze.cell_index(start)] = true;
    touch(maze, start);
    if start == end {
        return Ok(Solution {
            path: vec![start],
            visited: count,
        });
    }

    let mut neighbors = maze.open_neighbors(start);
    neighbors.shuffle(rng);
    let mut stack = vec![Frame {
        cell: start,
        neighbors,
    }];

    while let Some(frame) = stack.last_mut() {
        let cell = frame.cell;
        match frame.neighbors.pop() {
            Some(next) => {
                let idx = maze.cell_index(next);
                if visited[idx] {
                    continue;
                }
                visited[idx] = true;
                count += 1;
                touch(maze, next);

                if next == end {
                    // Solved: the stack is the path, nothing gets backtracked anymore
                    let mut path = stack.iter().map(|f| f.cell).collect::<Vec<_>>();
                    path.push(next);
                    return Ok(Solution {
                        path,
                        visited: count,
                    });
                }

                let mut neighbors = maze.open_neighbors(next);
                neighbors.shuffle(rng);
                stack.push(Frame {
                    cell: next,
                    neighbors,
                });
            }
            None => {
                // No way forward from here
                maze.clear_tile_state(cell, TileState::CORRECT_PATH);
                maze.add_tile_state(cell, TileState::DEADEND);
                stack.pop();
                if let Some(parent) = stack.last() {
                    touch(maze, parent.cell);
                }
            }
        }
    }

    Err(MazeError::Unreachable { start, end })
}

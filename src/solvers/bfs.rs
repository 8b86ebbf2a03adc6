use std::collections::VecDeque;

use super::Solution;
use crate::{
    error::MazeError,
    maze::{Coord, Maze, TileState},
};

/// Breadth-first search through open passages. Explored cells are marked as dead
/// ends; once `end` is dequeued the path is traced back through the predecessors
/// and marked from the end towards the start.
pub fn solve_bfs(maze: &mut Maze, start: Coord, end: Coord) -> Result<Solution, MazeError> {
    let cells = maze.size() as usize * maze.size() as usize;
    let mut visited = vec![false; cells];
    let mut came_from: Vec<Option<Coord>> = vec![None; cells];
    let mut count = 1;

    let mut queue = VecDeque::from([start]);
    visited[maze.cell_index(start)] = true;
    maze.add_tile_state(start, TileState::DEADEND);

    let mut solved = false;
    while let Some(cell) = queue.pop_front() {
        if cell == end {
            solved = true;
            break;
        }

        for next in maze.open_neighbors(cell) {
            let idx = maze.cell_index(next);
            if visited[idx] {
                continue;
            }
            visited[idx] = true;
            came_from[idx] = Some(cell);
            count += 1;
            maze.add_tile_state(next, TileState::DEADEND);
            queue.push_back(next);
        }
        maze.repaint();
    }

    if !solved {
        return Err(MazeError::Unreachable { start, end });
    }

    // Backtrack from the end to mark the path
    let mut path = vec![end];
    let mut cell = end;
    maze.add_tile_state(cell, TileState::CORRECT_PATH);
    maze.repaint();
    while let Some(parent) = came_from[maze.cell_index(cell)] {
        cell = parent;
        maze.add_tile_state(cell, TileState::CORRECT_PATH);
        maze.repaint();
        path.push(cell);
    }
    path.reverse();

    Ok(Solution {
        path,
        visited: count,
    })
}

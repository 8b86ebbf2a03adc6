use rand::{rngs::StdRng, seq::SliceRandom};

use super::GenerationStats;
use crate::{
    maze::{Coord, Direction, Maze, TileState, step},
    union_find::UnionFind,
};

/// Wall between a cell and its neighbor on `direction`
#[derive(Clone, Copy)]
struct Edge {
    cell: Coord,
    direction: Direction,
}

/// Every interior wall exactly once: the east then the south wall of each cell, row-major.
fn interior_edges(maze: &Maze) -> Vec<Edge> {
    let size = maze.size();
    maze.cells()
        .flat_map(|(row, col)| {
            [
                (col + 1 < size).then_some(Edge {
                    cell: (row, col),
                    direction: Direction::East,
                }),
                (row + 1 < size).then_some(Edge {
                    cell: (row, col),
                    direction: Direction::South,
                }),
            ]
        })
        .flatten()
        .collect()
}

fn carve_spanning_tree(maze: &mut Maze, rng: &mut StdRng) -> (GenerationStats, UnionFind) {
    let mut stats = GenerationStats::default();
    let mut sets = UnionFind::new(maze.size() as usize * maze.size() as usize);

    // Shuffle edges randomly
    let mut edges = interior_edges(maze);
    edges.shuffle(rng);

    for Edge { cell, direction } in edges {
        let Some(neighbor) = step(cell, direction) else {
            continue;
        };
        // Only join cells that are not connected yet, which rules out cycles
        if !sets.union(maze.cell_index(cell), maze.cell_index(neighbor)) {
            continue;
        }
        if maze.remove_wall(cell, direction) {
            stats.walls_removed += 1;
        }
        maze.add_tile_state(cell, TileState::VISITED);
        maze.add_tile_state(neighbor, TileState::VISITED);
        maze.repaint();
    }

    (stats, sets)
}

/// Removes walls in random order whenever they separate two distinct components.
pub fn randomized_kruskal(maze: &mut Maze, rng: &mut StdRng) -> GenerationStats {
    let (stats, sets) = carve_spanning_tree(maze, rng);
    tracing::debug!("[kruskal] {} component(s) left", sets.count());
    stats
}

use rand::{Rng, rngs::StdRng, seq::IndexedRandom};

use super::{GenerationStats, Policy};
use crate::maze::{Coord, Maze, TileState, heading};

impl Policy {
    /// Index of the next frontier cell to grow from. `len` is never zero.
    fn pick(self, len: usize, rng: &mut StdRng) -> usize {
        match self {
            Policy::Random => rng.random_range(0..len),
            Policy::Newest => len - 1,
            Policy::Oldest => 0,
            Policy::Middle => len / 2,
        }
    }
}

/// Grows a tree from a random cell. The frontier keeps cells in the order they were
/// added; `policy` decides which one is extended next.
pub fn growing_tree(maze: &mut Maze, policy: Policy, rng: &mut StdRng) -> GenerationStats {
    let mut stats = GenerationStats::default();
    let size = maze.size();
    let mut visited = vec![false; size as usize * size as usize];

    // Start at a random position
    let start: Coord = (rng.random_range(0..size), rng.random_range(0..size));
    visited[maze.cell_index(start)] = true;
    maze.set_tile_state(start, TileState::PATH | TileState::VISITED);
    maze.repaint();

    let mut frontier = vec![start];
    while !frontier.is_empty() {
        let idx = policy.pick(frontier.len(), rng);
        let cell = frontier[idx];

        let unvisited = maze
            .neighbors(cell)
            .filter(|&c| !visited[maze.cell_index(c)])
            .collect::<Vec<_>>();

        let Some(&next) = unvisited.choose(rng) else {
            // Nothing left to grow into from here
            frontier.remove(idx);
            maze.clear_tile_state(cell, TileState::PATH);
            maze.repaint();
            continue;
        };

        if maze.remove_wall(cell, heading(cell, next)) {
            stats.walls_removed += 1;
        }
        visited[maze.cell_index(next)] = true;
        maze.set_tile_state(next, TileState::PATH | TileState::VISITED);
        maze.repaint();

        // Only visited cells ever join the frontier, so `next` is not in it yet
        frontier.push(next);
    }

    stats
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generators::get_rng;

    const POLICIES: [Policy; 4] = [Policy::Random, Policy::Newest, Policy::Oldest, Policy::Middle];

    #[test]
    fn test_pick() {
        let mut rng = get_rng(Some(0));
        assert_eq!(Policy::Newest.pick(5, &mut rng), 4);
        assert_eq!(Policy::Oldest.pick(5, &mut rng), 0);
        assert_eq!(Policy::Middle.pick(5, &mut rng), 2);
        assert_eq!(Policy::Middle.pick(1, &mut rng), 0);
        assert!(Policy::Random.pick(5, &mut rng) < 5);
    }

    #[test]
    fn test_every_policy_is_perfect() {
        for policy in POLICIES {
            for seed in 0..5 {
                let mut maze = Maze::new(9, true).unwrap();
                let stats = growing_tree(&mut maze, policy, &mut get_rng(Some(seed)));
                assert_eq!(stats.walls_removed, 80, "{:?}", policy);
                assert!(maze.is_perfect(), "{:?} seed {}", policy, seed);
                // Cells drop their path mark once they leave the frontier
                assert!(
                    maze.cells()
                        .all(|c| maze.tile_state(c) == TileState::VISITED)
                );
            }
        }
    }

    #[test]
    fn test_single_cell() {
        let mut maze = Maze::new(1, true).unwrap();
        let stats = growing_tree(&mut maze, Policy::Oldest, &mut get_rng(Some(3)));
        assert_eq!(stats.walls_removed, 0);
        assert_eq!(maze.tile_state((0, 0)), TileState::VISITED);
    }
}

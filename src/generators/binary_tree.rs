use rand::{rngs::StdRng, seq::SliceRandom};

use super::{Bias, GenerationStats};
use crate::maze::{Direction, Maze, TileState, step};

impl Bias {
    /// The two sides a cell may open, vertical side first.
    fn sides(self) -> [Direction; 2] {
        match self {
            Bias::NorthWest => [Direction::North, Direction::West],
            Bias::NorthEast => [Direction::North, Direction::East],
            Bias::SouthWest => [Direction::South, Direction::West],
            Bias::SouthEast => [Direction::South, Direction::East],
        }
    }
}

/// Opens one wall per cell towards the bias corner, choosing at random when both
/// sides lead to a neighbor. A single pass, no visited bookkeeping.
pub fn binary_tree(maze: &mut Maze, bias: Bias, rng: &mut StdRng) -> GenerationStats {
    let mut stats = GenerationStats::default();

    for cell in maze.cells() {
        let mut sides = bias
            .sides()
            .into_iter()
            .filter(|&side| step(cell, side).is_some_and(|next| maze.is_in_bounds(next)))
            .collect::<Vec<_>>();
        sides.shuffle(rng);

        if let Some(side) = sides.pop() {
            if maze.remove_wall(cell, side) {
                stats.walls_removed += 1;
            }
        }

        maze.add_tile_state(cell, TileState::VISITED | TileState::CURRENT);
        maze.repaint();
        maze.clear_tile_state(cell, TileState::CURRENT);
    }

    stats
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generators::get_rng;

    #[test]
    fn test_all_biases_are_perfect() {
        for bias in [
            Bias::NorthWest,
            Bias::NorthEast,
            Bias::SouthWest,
            Bias::SouthEast,
        ] {
            let mut maze = Maze::new(8, true).unwrap();
            let stats = binary_tree(&mut maze, bias, &mut get_rng(Some(5)));
            assert_eq!(stats.walls_removed, 63, "{:?}", bias);
            assert!(maze.is_perfect(), "{:?}", bias);
        }
    }

    #[test]
    fn test_south_east_bias_opens_far_edges() {
        let mut maze = Maze::new(6, true).unwrap();
        binary_tree(&mut maze, Bias::SouthEast, &mut get_rng(Some(11)));
        // Cells on the last row can only open east, cells on the last column only south
        for i in 0..5 {
            assert!(!maze.has_wall((5, i), Direction::East));
            assert!(!maze.has_wall((i, 5), Direction::South));
        }
    }
}

use rand::{Rng, rngs::StdRng};

use super::{GenerationStats, SplitMode};
use crate::maze::{Direction, Maze};

/// A rectangle of cells, inclusive on both ends, waiting to be split.
struct Region {
    top: u16,
    left: u16,
    bottom: u16,
    right: u16,
    vertical: bool,
}

/// Builds walls into an open maze by splitting it into ever smaller rooms, each split
/// leaving exactly one door. Splits alternate between vertical and horizontal, starting
/// with a vertical one.
pub fn recursive_division(maze: &mut Maze, mode: SplitMode, rng: &mut StdRng) -> GenerationStats {
    let mut stats = GenerationStats::default();
    let last = maze.size() - 1;

    // Explicit stack in place of recursion; deep mazes would otherwise exhaust the call stack
    let mut stack = vec![Region {
        top: 0,
        left: 0,
        bottom: last,
        right: last,
        vertical: true,
    }];

    while let Some(region) = stack.pop() {
        let Region {
            top,
            left,
            bottom,
            right,
            vertical,
        } = region;
        // A single row or column cannot be split any further
        if top == bottom || left == right {
            continue;
        }

        if vertical {
            // Pick a column to put the wall after
            let col = match mode {
                SplitMode::Halves => left + (right - left) / 2,
                SplitMode::Random => left + rng.random_range(0..right - left),
            };
            for row in top..=bottom {
                if maze.add_wall((row, col), Direction::East) {
                    stats.walls_added += 1;
                }
            }
            maze.repaint();

            let door = rng.random_range(top..=bottom);
            if maze.remove_wall((door, col), Direction::East) {
                stats.walls_removed += 1;
            }
            maze.repaint();

            // Pushed in reverse so the left part is split first
            stack.push(Region {
                top,
                left: col + 1,
                bottom,
                right,
                vertical: false,
            });
            stack.push(Region {
                top,
                left,
                bottom,
                right: col,
                vertical: false,
            });
        } else {
            // Pick a row to put the wall below
            let row = match mode {
                SplitMode::Halves => top + (bottom - top) / 2,
                SplitMode::Random => top + rng.random_range(0..bottom - top),
            };
            for col in left..=right {
                if maze.add_wall((row, col), Direction::South) {
                    stats.walls_added += 1;
                }
            }
            maze.repaint();

            let door = rng.random_range(left..=right);
            if maze.remove_wall((row, door), Direction::South) {
                stats.walls_removed += 1;
            }
            maze.repaint();

            stack.push(Region {
                top: row + 1,
                left,
                bottom,
                right,
                vertical: true,
            });
            stack.push(Region {
                top,
                left,
                bottom: row,
                right,
                vertical: true,
            });
        }
    }

    stats
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generators::get_rng;

    #[test]
    fn test_halves_split_at_midpoint() {
        let mut maze = Maze::new(4, false).unwrap();
        recursive_division(&mut maze, SplitMode::Halves, &mut get_rng(Some(3)));
        // The first wall runs after column 1 with exactly one door through it
        let doors = (0..4)
            .filter(|&row| !maze.has_wall((row, 1), Direction::East))
            .count();
        assert_eq!(doors, 1);
    }

    #[test]
    fn test_division_yields_perfect_maze() {
        for seed in 0..20 {
            for mode in [SplitMode::Halves, SplitMode::Random] {
                let mut maze = Maze::new(9, false).unwrap();
                let stats = recursive_division(&mut maze, mode, &mut get_rng(Some(seed)));
                assert!(maze.is_perfect(), "seed {} mode {:?}", seed, mode);
                // Every door punched through a fresh wall
                assert_eq!(stats.walls_added - stats.walls_removed, 2 * 9 * 8 - 80);
            }
        }
    }

    #[test]
    fn test_single_cell_is_untouched() {
        let mut maze = Maze::new(1, false).unwrap();
        let stats = recursive_division(&mut maze, SplitMode::Random, &mut get_rng(Some(0)));
        assert_eq!(stats, GenerationStats::default());
    }
}

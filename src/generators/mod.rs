use std::str::FromStr;

use rand::{SeedableRng, rngs::StdRng};

mod binary_tree;
mod growing_tree;
mod hunt_kill;
mod kruskal;
mod recur_backtrack;
mod recur_div;

use binary_tree::binary_tree;
use growing_tree::growing_tree;
use hunt_kill::hunt_and_kill;
use kruskal::randomized_kruskal;
use recur_backtrack::recursive_backtrack;
use recur_div::recursive_division;

use crate::{error::MazeError, maze::Maze};

/// Get a random number generator, optionally seeded for reproducibility.
pub(crate) fn get_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_os_rng(),
    }
}

/// Where recursive division places its walls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SplitMode {
    /// Always split at the midpoint of the region.
    Halves,
    /// Split at a uniformly random offset.
    Random,
}

impl FromStr for SplitMode {
    type Err = MazeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "halves" => Ok(SplitMode::Halves),
            "random" => Ok(SplitMode::Random),
            _ => Err(MazeError::InvalidMode {
                generator: "recursive division",
                mode: s.to_string(),
            }),
        }
    }
}

/// The corner a binary tree maze leans towards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bias {
    NorthWest,
    NorthEast,
    SouthWest,
    SouthEast,
}

impl FromStr for Bias {
    type Err = MazeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "NW" => Ok(Bias::NorthWest),
            "NE" => Ok(Bias::NorthEast),
            "SW" => Ok(Bias::SouthWest),
            "SE" => Ok(Bias::SouthEast),
            _ => Err(MazeError::InvalidMode {
                generator: "binary tree",
                mode: s.to_string(),
            }),
        }
    }
}

/// How the growing tree picks the next cell out of its frontier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Policy {
    Random,
    Newest,
    Oldest,
    Middle,
}

impl FromStr for Policy {
    type Err = MazeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "r" | "random" => Ok(Policy::Random),
            "n" | "new" | "newest" => Ok(Policy::Newest),
            "o" | "old" | "oldest" => Ok(Policy::Oldest),
            "m" | "mid" | "middle" => Ok(Policy::Middle),
            _ => Err(MazeError::InvalidMode {
                generator: "growing tree",
                mode: s.to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Generator {
    RecurDiv(SplitMode),
    RecurBacktrack,
    HuntKill,
    Kruskal,
    BinaryTree(Bias),
    GrowingTree(Policy),
}

/// Available maze generators, in the order they are listed to users
pub const GENERATORS: [Generator; 6] = [
    Generator::RecurDiv(SplitMode::Halves),
    Generator::RecurBacktrack,
    Generator::HuntKill,
    Generator::Kruskal,
    Generator::BinaryTree(Bias::SouthEast),
    Generator::GrowingTree(Policy::Random),
];

impl Generator {
    /// Builds a generator from its name and optional mode string.
    pub fn from_parts(name: &str, mode: Option<&str>) -> Result<Self, MazeError> {
        let generator = match name {
            "division" | "recursive-division" => {
                Generator::RecurDiv(mode.unwrap_or("halves").parse()?)
            }
            "backtracking" | "recursive-backtracking" => Generator::RecurBacktrack,
            "hunt-and-kill" => Generator::HuntKill,
            "kruskal" => Generator::Kruskal,
            "binary-tree" => Generator::BinaryTree(mode.unwrap_or("SE").parse()?),
            "growing-tree" => Generator::GrowingTree(mode.unwrap_or("random").parse()?),
            _ => return Err(MazeError::UnknownGenerator(name.to_string())),
        };
        if mode.is_some() && !generator.takes_mode() {
            return Err(MazeError::InvalidMode {
                generator: generator.name(),
                mode: mode.unwrap_or_default().to_string(),
            });
        }
        Ok(generator)
    }

    fn takes_mode(&self) -> bool {
        matches!(
            self,
            Generator::RecurDiv(_) | Generator::BinaryTree(_) | Generator::GrowingTree(_)
        )
    }

    /// Short name accepted by [`Generator::from_parts`].
    pub fn name(&self) -> &'static str {
        match self {
            Generator::RecurDiv(_) => "division",
            Generator::RecurBacktrack => "backtracking",
            Generator::HuntKill => "hunt-and-kill",
            Generator::Kruskal => "kruskal",
            Generator::BinaryTree(_) => "binary-tree",
            Generator::GrowingTree(_) => "growing-tree",
        }
    }

    /// Whether the maze handed to this generator should start with every wall present.
    /// Recursive division builds walls into an open maze; everything else carves.
    pub fn initial_walls(&self) -> bool {
        !matches!(self, Generator::RecurDiv(_))
    }
}

impl FromStr for Generator {
    type Err = MazeError;

    /// Parses `name` or `name:mode`, e.g. `growing-tree:oldest`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.split_once(':') {
            Some((name, mode)) => Generator::from_parts(name, Some(mode)),
            None => Generator::from_parts(s, None),
        }
    }
}

impl std::fmt::Display for Generator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Generator::RecurDiv(SplitMode::Halves) => write!(f, "Recursive Division (halves)"),
            Generator::RecurDiv(SplitMode::Random) => write!(f, "Recursive Division (random)"),
            Generator::RecurBacktrack => write!(f, "Recursive Backtracking"),
            Generator::HuntKill => write!(f, "Hunt-and-Kill"),
            Generator::Kruskal => write!(f, "Kruskal's Algorithm"),
            Generator::BinaryTree(bias) => write!(f, "Binary Tree ({:?} bias)", bias),
            Generator::GrowingTree(policy) => write!(f, "Growing Tree ({:?})", policy),
        }
    }
}

/// Wall changes made by one generator run.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationStats {
    pub walls_removed: usize,
    pub walls_added: usize,
}

/// Generates a maze in place. Draws from an RNG seeded with `seed`, or from OS entropy.
///
/// The maze should start in the wall state given by [`Generator::initial_walls`].
pub fn generate_maze(maze: &mut Maze, generator: Generator, seed: Option<u64>) -> GenerationStats {
    tracing::debug!(
        "[generate] {} on a {}x{} maze, seed {:?}",
        generator,
        maze.size(),
        maze.size(),
        seed
    );
    let mut rng = get_rng(seed);
    let stats = match generator {
        Generator::RecurDiv(mode) => recursive_division(maze, mode, &mut rng),
        Generator::RecurBacktrack => recursive_backtrack(maze, &mut rng),
        Generator::HuntKill => hunt_and_kill(maze, &mut rng),
        Generator::Kruskal => randomized_kruskal(maze, &mut rng),
        Generator::BinaryTree(bias) => binary_tree(maze, bias, &mut rng),
        Generator::GrowingTree(policy) => growing_tree(maze, policy, &mut rng),
    };
    maze.repaint();
    tracing::debug!(
        "[generate] done: {} walls removed, {} walls added",
        stats.walls_removed,
        stats.walls_added
    );
    stats
}

use crate::{
    error::MazeError,
    generators::{GenerationStats, Generator, generate_maze},
    maze::{Coord, GridObserver, Maze},
    solvers::{Solution, Solver, solve_maze},
};

/// Everything needed for one generate-then-solve run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MazeConfig {
    /// Number of rows and columns
    pub size: u16,
    pub generator: Generator,
    pub solver: Solver,
    pub start: Coord,
    /// Defaults to the bottom-right cell
    pub finish: Option<Coord>,
    /// Seed for every random draw; OS entropy when unset
    pub seed: Option<u64>,
}

impl Default for MazeConfig {
    fn default() -> Self {
        Self {
            size: 10,
            generator: Generator::RecurBacktrack,
            solver: Solver::Dfs,
            start: (0, 0),
            finish: None,
            seed: None,
        }
    }
}

/// Outcome of [`MazeConfig::run`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReport {
    pub stats: GenerationStats,
    pub solution: Solution,
}

impl MazeConfig {
    pub fn finish(&self) -> Coord {
        self.finish.unwrap_or((
            self.size.saturating_sub(1),
            self.size.saturating_sub(1),
        ))
    }

    /// Checks the size and both positions before any maze is built.
    pub fn validate(&self) -> Result<(), MazeError> {
        if self.size == 0 {
            return Err(MazeError::InvalidSize(self.size));
        }
        for (what, coord) in [("starting", self.start), ("finishing", self.finish())] {
            if coord.0 >= self.size || coord.1 >= self.size {
                return Err(MazeError::OutOfBounds {
                    what,
                    coord,
                    size: self.size,
                });
            }
        }
        Ok(())
    }

    /// Generates a maze, clears the generation marks and solves it.
    pub fn run(&self) -> Result<RunReport, MazeError> {
        self.validate()?;
        let maze = Maze::new(self.size, self.generator.initial_walls())?;
        self.run_on(maze)
    }

    /// Same as [`MazeConfig::run`], reporting every grid change to `observer`.
    pub fn run_with_observer(
        &self,
        observer: impl GridObserver + 'static,
    ) -> Result<RunReport, MazeError> {
        self.validate()?;
        let maze = Maze::with_observer(self.size, self.generator.initial_walls(), observer)?;
        self.run_on(maze)
    }

    fn run_on(&self, mut maze: Maze) -> Result<RunReport, MazeError> {
        let stats = generate_maze(&mut maze, self.generator, self.seed);
        maze.reset_states();
        let solution = solve_maze(&mut maze, self.solver, self.start, self.finish(), self.seed)?;
        Ok(RunReport { stats, solution })
    }
}

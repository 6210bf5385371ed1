//! The generation engine.

use crate::{
    error::Error,
    grid::{Grid, ALIVE, DEAD},
    pattern::{Placement, SeedRequest},
    render::RenderSink,
    seed,
    signal::CancelSignal,
};
use log::info;
use rand::Rng;
use std::{
    fmt::{self, Display, Formatter},
    thread,
    time::Duration,
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Status of the engine.
///
/// A run goes from `Seeded` to `Running`, and ends in one of the other four.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Status {
    /// The grid has just been seeded.
    Seeded,
    /// Still running.
    Running,
    /// A generation is identical to the one before it.
    Stable,
    /// The generations alternate between two states.
    Oscillating,
    /// The maximal number of generations is reached.
    MaxGenerations,
    /// The cancel signal is asserted.
    Cancelled,
}

impl Status {
    /// Whether a run ends with this status.
    pub fn is_terminal(self) -> bool {
        !matches!(self, Status::Seeded | Status::Running)
    }
}

impl Display for Status {
    fn fmt(&self, f: &mut Formatter) -> Result<(), fmt::Error> {
        let s = match self {
            Status::Seeded => "seeded",
            Status::Running => "running",
            Status::Stable => "stable",
            Status::Oscillating => "oscillating",
            Status::MaxGenerations => "max generations reached",
            Status::Cancelled => "cancelled",
        };
        write!(f, "{}", s)?;
        Ok(())
    }
}

/// Evolves a grid by the rule of Conway's Game of Life.
///
/// Besides the current grid, the engine keeps the two generations before
/// it. Each step reads only the frozen previous generation and writes the
/// current one, so cells are never updated from a half-finished step.
#[derive(Clone, Debug)]
pub struct Engine {
    /// The current generation.
    grid: Grid,

    /// One generation ago.
    previous: Grid,

    /// Two generations ago.
    before_previous: Grid,

    /// How many consecutive 2-cycle matches count as oscillating.
    oscillation_threshold: u32,

    /// Consecutive steps whose result equals the generation two steps back.
    repeats: u32,

    /// Steps since the last seeding.
    generation: u64,

    status: Status,
}

impl Engine {
    /// Creates an engine around an empty grid.
    ///
    /// Returns an error if the threshold is zero.
    pub fn new(grid: Grid, oscillation_threshold: u32) -> Result<Self, Error> {
        if oscillation_threshold == 0 {
            return Err(Error::NonPositiveError);
        }
        Ok(Engine {
            previous: grid.clone(),
            before_previous: grid.clone(),
            grid,
            oscillation_threshold,
            repeats: 0,
            generation: 0,
            status: Status::Seeded,
        })
    }

    /// The current generation.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Mutable access to the current generation, e.g., to draw a pattern
    /// by hand. Call [`reset`](Self::reset) afterwards.
    pub fn grid_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }

    /// Steps since the last seeding.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn status(&self) -> Status {
        self.status
    }

    /// Number of living cells in the current generation.
    pub fn population(&self) -> usize {
        self.grid.population()
    }

    /// Forgets the history and treats the current grid as freshly seeded.
    pub fn reset(&mut self) {
        self.previous.copy_from(&self.grid);
        self.before_previous.copy_from(&self.grid);
        self.repeats = 0;
        self.generation = 0;
        self.status = Status::Seeded;
    }

    /// Clears the grid and seeds it. See [`seed::seed`].
    pub fn seed<R: Rng + ?Sized>(
        &mut self,
        requests: &[SeedRequest],
        placement: Placement,
        rng: &mut R,
    ) {
        seed::seed(&mut self.grid, requests, placement, rng);
        self.reset();
    }

    /// Computes the next generation.
    ///
    /// The two previous generations are shifted back first.
    /// Returns whether the new generation equals the previous one.
    pub fn step(&mut self) -> bool {
        self.before_previous.copy_from(&self.previous);
        self.previous.copy_from(&self.grid);

        let row_length = self.grid.row_length();
        for row in 0..self.grid.rows() {
            let row_start = (row + 1) * row_length + 1;
            for index in row_start..row_start + self.grid.columns() {
                // A census of 2 leaves the cell as it is.
                match self.previous.neighbor_census(index) {
                    2 => (),
                    3 => self.grid.set_index(index, ALIVE),
                    _ => self.grid.set_index(index, DEAD),
                }
            }
        }

        self.generation += 1;
        self.grid == self.previous
    }

    /// Checks whether the run should end after a step.
    ///
    /// Returns `Running` if not.
    fn check(&mut self, unchanged: bool) -> Status {
        if unchanged {
            return Status::Stable;
        }
        if self.grid == self.before_previous {
            self.repeats += 1;
            if self.repeats >= self.oscillation_threshold {
                return Status::Oscillating;
            }
        } else {
            self.repeats = 0;
        }
        Status::Running
    }

    /// Runs until the grid stops changing, oscillates with period 2,
    /// the cancel signal is asserted, or `max_generations` steps are done.
    ///
    /// Every generation is rendered before it is stepped. `delay` is slept
    /// between generations, never after the last one.
    pub fn run<S, C>(
        &mut self,
        max_generations: u64,
        delay: Duration,
        sink: &mut S,
        cancel: &mut C,
    ) -> Result<Status, Error>
    where
        S: RenderSink + ?Sized,
        C: CancelSignal + ?Sized,
    {
        self.status = Status::Running;
        for done in 1..=max_generations {
            sink.render(&self.grid)?;
            let unchanged = self.step();
            let mut status = self.check(unchanged);
            if status == Status::Running && cancel.is_asserted() {
                status = Status::Cancelled;
            }
            if status != Status::Running {
                return Ok(self.finish(status));
            }
            if done < max_generations && !delay.is_zero() {
                thread::sleep(delay);
            }
        }
        Ok(self.finish(Status::MaxGenerations))
    }

    fn finish(&mut self, status: Status) -> Status {
        info!(
            "Run ended after {} generations: {}, population {}",
            self.generation,
            status,
            self.population()
        );
        self.status = status;
        status
    }
}

//! Simulation configuration.

use crate::{
    driver::Simulation,
    engine::Engine,
    error::Error,
    grid::{Grid, MAX_SIDE},
    pattern::{Placement, SeedRequest},
};
use educe::Educe;
use rand::{rngs::ThreadRng, thread_rng, Rng};
use std::time::Duration;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Simulation configuration.
///
/// The simulation will be generated from this configuration.
/// Nothing in it can be changed once the simulation is running.
#[derive(Clone, Debug, Educe, PartialEq)]
#[educe(Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Config {
    /// Width of the grid, in cells.
    ///
    /// Should be a multiple of 8 when driving a panel of 8×8 LED modules.
    #[educe(Default = 16)]
    pub width: isize,

    /// Height of the grid, in cells.
    #[educe(Default = 8)]
    pub height: isize,

    /// Seconds to wait between two generations.
    #[educe(Default = 0.1)]
    pub generation_delay: f64,

    /// Maximal number of generations in one run.
    #[educe(Default = 50)]
    pub max_generations: u64,

    /// Seconds to wait between two runs.
    #[educe(Default = 1.0)]
    pub timeline_pause: f64,

    /// How many consecutive steps have to return to the generation two
    /// steps back before the run is considered oscillating.
    #[educe(Default = 10)]
    pub oscillation_threshold: u32,

    /// Names of the seed patterns, applied in order.
    ///
    /// Besides the stored patterns, `random` fills the grid by coin flips
    /// and `carousel` picks one entry at random. Unknown names are ignored.
    #[educe(Default(expression = "vec![String::from(\"random\")]"))]
    pub seed: Vec<String>,

    /// Where patterns are placed.
    pub placement: Placement,

    /// Whether to transpose every 8×8 block on the pixel display.
    pub rotate_blocks: bool,

    /// Brightness of the pixel display, from 0 to 15.
    pub brightness: u8,

    /// Stops after this many runs.
    ///
    /// `None` means running forever.
    pub max_runs: Option<u64>,
}

impl Config {
    /// Sets up a new configuration with given size.
    pub fn new(width: isize, height: isize) -> Self {
        Config {
            width,
            height,
            ..Config::default()
        }
    }

    /// Sets the delay between generations, in seconds.
    pub fn set_generation_delay(mut self, generation_delay: f64) -> Self {
        self.generation_delay = generation_delay;
        self
    }

    /// Sets the maximal number of generations in one run.
    pub fn set_max_generations(mut self, max_generations: u64) -> Self {
        self.max_generations = max_generations;
        self
    }

    /// Sets the pause between runs, in seconds.
    pub fn set_timeline_pause(mut self, timeline_pause: f64) -> Self {
        self.timeline_pause = timeline_pause;
        self
    }

    /// Sets the oscillation threshold.
    pub fn set_oscillation_threshold(mut self, oscillation_threshold: u32) -> Self {
        self.oscillation_threshold = oscillation_threshold;
        self
    }

    /// Sets the seed patterns.
    pub fn set_seed<I, S>(mut self, seed: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: ToString,
    {
        self.seed = seed.into_iter().map(|s| s.to_string()).collect();
        self
    }

    /// Sets the placement of patterns.
    pub fn set_placement(mut self, placement: Placement) -> Self {
        self.placement = placement;
        self
    }

    /// Sets whether to transpose every 8×8 block on the pixel display.
    pub fn set_rotate_blocks(mut self, rotate_blocks: bool) -> Self {
        self.rotate_blocks = rotate_blocks;
        self
    }

    /// Sets the brightness of the pixel display.
    pub fn set_brightness(mut self, brightness: u8) -> Self {
        self.brightness = brightness;
        self
    }

    /// Sets the maximal number of runs.
    pub fn set_max_runs<T: Into<Option<u64>>>(mut self, max_runs: T) -> Self {
        self.max_runs = max_runs.into();
        self
    }

    /// The seed patterns as requests.
    pub fn seed_requests(&self) -> Vec<SeedRequest> {
        self.seed.iter().map(|name| SeedRequest::from(name.as_str())).collect()
    }

    /// The delay between generations.
    pub fn generation_delay(&self) -> Result<Duration, Error> {
        seconds(self.generation_delay)
    }

    /// The pause between runs.
    pub fn timeline_pause(&self) -> Result<Duration, Error> {
        seconds(self.timeline_pause)
    }

    /// Checks every value that has a limited range.
    pub fn validate(&self) -> Result<(), Error> {
        if self.width <= 0 || self.height <= 0 || self.oscillation_threshold == 0 {
            return Err(Error::NonPositiveError);
        }
        if self.width > MAX_SIDE || self.height > MAX_SIDE {
            return Err(Error::SizeError);
        }
        if self.brightness > 15 {
            return Err(Error::BrightnessError(self.brightness));
        }
        self.generation_delay()?;
        self.timeline_pause()?;
        Ok(())
    }

    /// Creates an empty grid of the configured size.
    pub fn grid(&self) -> Result<Grid, Error> {
        Grid::new(self.height, self.width)
    }

    /// Creates an engine around an empty grid.
    pub fn engine(&self) -> Result<Engine, Error> {
        Engine::new(self.grid()?, self.oscillation_threshold)
    }

    /// Creates a new simulation from the configuration.
    pub fn simulation(&self) -> Result<Simulation<ThreadRng>, Error> {
        self.simulation_with_rng(thread_rng())
    }

    /// Creates a new simulation that draws its randomness from `rng`.
    pub fn simulation_with_rng<R: Rng>(&self, rng: R) -> Result<Simulation<R>, Error> {
        self.validate()?;
        Simulation::new(self.clone(), rng)
    }
}

fn seconds(secs: f64) -> Result<Duration, Error> {
    Duration::try_from_secs_f64(secs).map_err(|_| Error::DurationError)
}

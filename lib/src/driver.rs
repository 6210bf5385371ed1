//! The simulation driver.

use crate::{
    config::Config,
    engine::{Engine, Status},
    error::Error,
    pattern::SeedRequest,
    render::RenderSink,
    signal::CancelSignal,
};
use log::{debug, info, warn};
use rand::Rng;
use std::{thread, time::Duration};

/// Seeds a grid, runs it until it settles, pauses, and starts over.
pub struct Simulation<R: Rng> {
    config: Config,
    engine: Engine,
    requests: Vec<SeedRequest>,
    generation_delay: Duration,
    timeline_pause: Duration,
    rng: R,

    /// Number of finished runs.
    runs: u64,
}

impl<R: Rng> Simulation<R> {
    /// Creates a simulation from a configuration.
    ///
    /// See also [`Config::simulation`].
    pub fn new(config: Config, rng: R) -> Result<Self, Error> {
        let engine = config.engine()?;
        let requests = config.seed_requests();
        for request in &requests {
            if let SeedRequest::Unknown(name) = request {
                debug!("Unknown seed pattern {:?} will be ignored", name);
            }
        }
        Ok(Simulation {
            generation_delay: config.generation_delay()?,
            timeline_pause: config.timeline_pause()?,
            config,
            engine,
            requests,
            rng,
            runs: 0,
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    /// Number of finished runs.
    pub fn runs(&self) -> u64 {
        self.runs
    }

    /// Seeds the grid from the configured requests.
    pub fn seed(&mut self) {
        self.engine
            .seed(&self.requests, self.config.placement, &mut self.rng);
        debug!(
            "Run {} seeded with population {}",
            self.runs + 1,
            self.engine.population()
        );
    }

    /// Seeds the grid and runs it once.
    pub fn run_once<S, C>(&mut self, sink: &mut S, cancel: &mut C) -> Result<Status, Error>
    where
        S: RenderSink + ?Sized,
        C: CancelSignal + ?Sized,
    {
        self.seed();
        let status = self.engine.run(
            self.config.max_generations,
            self.generation_delay,
            sink,
            cancel,
        )?;
        self.runs += 1;
        Ok(status)
    }

    /// Runs again and again, pausing between runs.
    ///
    /// Stops when `shutdown` is asserted (it is sampled before every run),
    /// when [`max_runs`](Config::max_runs) runs are done, or when the sink
    /// fails. Returns the number of runs done by this call.
    pub fn run<S, C, D>(
        &mut self,
        sink: &mut S,
        cancel: &mut C,
        shutdown: &mut D,
    ) -> Result<u64, Error>
    where
        S: RenderSink + ?Sized,
        C: CancelSignal + ?Sized,
        D: CancelSignal + ?Sized,
    {
        let start = self.runs;
        let max_runs = self.config.max_runs;
        let done = move |runs: u64| max_runs.map_or(false, |max| runs - start >= max);
        loop {
            if done(self.runs) {
                break;
            }
            if shutdown.is_asserted() {
                info!("Shutting down after {} runs", self.runs - start);
                break;
            }
            if let Err(e) = self.run_once(sink, cancel) {
                warn!("Stopping: {}", e);
                return Err(e);
            }
            if !done(self.runs) && !self.timeline_pause.is_zero() {
                thread::sleep(self.timeline_pause);
            }
        }
        Ok(self.runs - start)
    }
}

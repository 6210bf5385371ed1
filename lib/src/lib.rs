//! __Conway's Game of Life__ on a fixed-size grid, for text consoles and LED matrix panels.
//!
//! A [`Simulation`] seeds a [`Grid`] with named patterns, evolves it with an
//! [`Engine`] until it becomes stable, oscillates with period 2, or reaches
//! the maximal number of generations, and then starts over.
//! Every generation is handed to a [`RenderSink`].
//!
//! # Example
//!
//! ```rust
//! use ledlife_lib::{Config, Never, Status, TextRenderer};
//!
//! let config = Config::new(8, 8)
//!     .set_seed(["void"])
//!     .set_generation_delay(0.0)
//!     .set_timeline_pause(0.0);
//! let mut simulation = config.simulation().unwrap();
//! let mut sink = TextRenderer::new(Vec::new());
//!
//! let status = simulation.run_once(&mut sink, &mut Never).unwrap();
//! assert_eq!(status, Status::Stable);
//! ```

mod config;
mod driver;
mod engine;
mod error;
mod grid;
pub mod pattern;
mod render;
mod seed;
mod signal;

pub use config::Config;
pub use driver::Simulation;
pub use engine::{Engine, Status};
pub use error::Error;
pub use grid::{Grid, ALIVE, DEAD, MAX_SIDE};
pub use pattern::{lookup, Orientation, Pattern, Placement, SeedRequest};
pub use render::{PixelDisplay, PixelRenderer, RenderSink, TextRenderer};
pub use seed::seed;
pub use signal::{CancelSignal, Never};

//! Seeding the grid.

use crate::{
    grid::{Grid, ALIVE, DEAD},
    pattern::{Orientation, Placement, SeedRequest, CAROUSEL},
};
use log::debug;
use rand::{seq::SliceRandom, Rng};

/// Clears the grid and seeds it from a list of requests.
///
/// Requests are applied in order, so a later request overwrites an earlier
/// one where their footprints overlap. Unknown names write nothing.
pub fn seed<R: Rng + ?Sized>(
    grid: &mut Grid,
    requests: &[SeedRequest],
    placement: Placement,
    rng: &mut R,
) {
    grid.clear();
    for request in requests {
        match request {
            SeedRequest::Carousel => {
                let name = CAROUSEL.choose(rng).copied().unwrap_or("random");
                debug!("Carousel chose {}", name);
                seed_one(grid, &SeedRequest::from(name), placement, rng);
            }
            request => seed_one(grid, request, placement, rng),
        }
    }
}

/// Applies a single request that is not a carousel.
fn seed_one<R: Rng + ?Sized>(
    grid: &mut Grid,
    request: &SeedRequest,
    placement: Placement,
    rng: &mut R,
) {
    match request {
        SeedRequest::Random => {
            for row in 0..grid.rows() {
                for col in 0..grid.columns() {
                    let state = if rng.gen_bool(0.5) { ALIVE } else { DEAD };
                    grid.set(row, col, state);
                }
            }
        }
        SeedRequest::Pattern(pattern) => {
            let orientation: Orientation = rng.gen();
            let (row, col) = placement.origin(grid);
            debug!(
                "Placing {} at ({}, {}) with orientation {}",
                pattern.name, row, col, orientation
            );
            pattern.apply(grid, orientation, row, col);
        }
        SeedRequest::Unknown(name) => debug!("Ignoring unknown seed pattern {:?}", name),
        SeedRequest::Carousel => unreachable!("carousel never chooses itself"),
    }
}

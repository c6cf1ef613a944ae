// src/transport/seeding.rs

use nalgebra::DVector;

use crate::error::{AdvectionError, AdvectionResult};
use crate::input::input_deck::Seeding;
use crate::transport::grid::Grid;

/// Builds the initial concentration: `seeding.concentration` on every node
/// inside `[band_start, band_end]`, zero elsewhere.
pub fn initial_concentration(grid: &Grid, seeding: &Seeding) -> AdvectionResult<DVector<f64>> {
    if !(seeding.band_start <= seeding.band_end) {
        return Err(AdvectionError::configuration(format!(
            "seeding band [{}, {}] is empty",
            seeding.band_start, seeding.band_end
        )));
    }
    if !(seeding.concentration.is_finite() && seeding.concentration >= 0.0) {
        return Err(AdvectionError::configuration(format!(
            "seeding concentration must be non-negative, got {}",
            seeding.concentration
        )));
    }

    Ok(grid.positions().map(|x| {
        if x >= seeding.band_start && x <= seeding.band_end {
            seeding.concentration
        } else {
            0.0
        }
    }))
}

// src/transport/stability.rs

use nalgebra::DVector;

use crate::error::{AdvectionError, AdvectionResult};

/// Rounding slack on the Courant bound. `dx / max(u)` multiplied back by
/// `max(u) / dx` may land one ulp above 1.
pub const COURANT_TOLERANCE: f64 = 1e-12;

/// Largest time step keeping the explicit upwind scheme stable at every node.
///
/// The Courant number `u * dt / dx` is linear in `dt`, so sizing `dt` on the
/// fastest node bounds every other node as well.
///
/// # Arguments
///
/// * `dx` - Node spacing [m].
/// * `velocity` - Wind speed at each node [m/s].
///
/// # Returns
///
/// * `dt = dx / max(velocity)` [s].
pub fn stable_time_step(dx: f64, velocity: &DVector<f64>) -> AdvectionResult<f64> {
    if velocity.is_empty() {
        return Err(AdvectionError::DimensionMismatch {
            what: "velocity field",
            expected: 1,
            found: 0,
        });
    }
    if !(dx.is_finite() && dx > 0.0) {
        return Err(AdvectionError::configuration(format!(
            "grid spacing must be positive, got {dx}"
        )));
    }

    let max_velocity = velocity.max();
    if !(max_velocity.is_finite() && max_velocity > 0.0) {
        return Err(AdvectionError::configuration(format!(
            "maximum velocity must be positive to derive a time step, got {max_velocity}"
        )));
    }

    Ok(dx / max_velocity)
}

/// Courant number `velocity[i] * dt / dx` at each node.
pub fn courant_numbers(velocity: &DVector<f64>, dt: f64, dx: f64) -> DVector<f64> {
    velocity.map(|u| dt * u / dx)
}

/// Checks that every Courant number lies in `[0, 1]`.
///
/// Values above 1 make the explicit update unstable; negative values mean
/// flow towards the lower-index neighbor, which the left-biased update
/// cannot carry.
pub fn check_courant(courant: &DVector<f64>) -> AdvectionResult<()> {
    match courant
        .iter()
        .position(|&c| !(c >= -COURANT_TOLERANCE && c <= 1.0 + COURANT_TOLERANCE))
    {
        Some(node) => Err(AdvectionError::StabilityViolation {
            node,
            courant: courant[node],
        }),
        None => Ok(()),
    }
}

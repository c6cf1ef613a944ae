// src/transport/wind.rs

use nalgebra::DVector;
use serde::{Deserialize, Serialize};

use crate::error::{AdvectionError, AdvectionResult};
use crate::transport::grid::Grid;

/// Shape of the wind speed along the domain.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum WindProfile {
    /// `amplitude * sin(x / length_scale + phase) + mean`
    Sinusoidal {
        amplitude: f64,    // [m/s]
        length_scale: f64, // [m]
        phase: f64,        // [rad]
        mean: f64,         // [m/s]
    },
    /// Same speed at every node.
    Uniform { speed: f64 }, // [m/s]
}

impl Default for WindProfile {
    // Colorado Springs winds sit around 4.5 m/s; this oscillates between 4 and 6.
    fn default() -> Self {
        WindProfile::Sinusoidal {
            amplitude: 1.0,
            length_scale: 100.0,
            phase: 80.0,
            mean: 5.0,
        }
    }
}

impl WindProfile {
    /// Wind speed at a single position [m/s].
    pub fn speed_at(&self, x: f64) -> f64 {
        match *self {
            WindProfile::Sinusoidal {
                amplitude,
                length_scale,
                phase,
                mean,
            } => amplitude * (x / length_scale + phase).sin() + mean,
            WindProfile::Uniform { speed } => speed,
        }
    }

    /// Evaluates the profile at every grid node.
    pub fn velocity_field(&self, grid: &Grid) -> AdvectionResult<DVector<f64>> {
        if let WindProfile::Sinusoidal { length_scale, .. } = *self {
            if !(length_scale.is_finite() && length_scale > 0.0) {
                return Err(AdvectionError::configuration(format!(
                    "wind length scale must be positive, got {length_scale}"
                )));
            }
        }
        Ok(grid.positions().map(|x| self.speed_at(x)))
    }
}

// src/transport/grid.rs

use nalgebra::DVector;

use crate::error::{AdvectionError, AdvectionResult};

/// Slack allowed when deciding whether the domain end falls on a node.
const EXTENT_TOLERANCE: f64 = 1e-9;

/// Largest node count a grid may have. The transition operator is a dense
/// `N x N` matrix, so this caps it at 800 MB.
pub const MAX_NODES: usize = 10_000;

/// Uniformly spaced nodes starting at 0.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    dx: f64,
    positions: DVector<f64>,
}

impl Grid {
    /// Creates a grid covering `[0, domain_length]` with spacing `dx`.
    ///
    /// The last node is the largest multiple of `dx` not exceeding
    /// `domain_length`, so a domain that is a whole multiple of `dx` includes
    /// its end point.
    ///
    /// # Arguments
    ///
    /// * `dx` - Node spacing [m].
    /// * `domain_length` - Domain extent [m].
    pub fn uniform(dx: f64, domain_length: f64) -> AdvectionResult<Self> {
        if !(dx.is_finite() && dx > 0.0) {
            return Err(AdvectionError::configuration(format!(
                "grid spacing must be positive, got {dx}"
            )));
        }
        if !domain_length.is_finite() || domain_length < dx {
            return Err(AdvectionError::configuration(format!(
                "domain length {domain_length} is smaller than grid spacing {dx}"
            )));
        }

        let intervals = (domain_length / dx + EXTENT_TOLERANCE).floor();
        if !(intervals < MAX_NODES as f64) {
            return Err(AdvectionError::configuration(format!(
                "domain length {domain_length} with spacing {dx} needs more than {MAX_NODES} nodes"
            )));
        }
        let node_count = intervals as usize + 1;
        let positions = DVector::from_fn(node_count, |i, _| i as f64 * dx);
        Ok(Grid { dx, positions })
    }

    pub fn dx(&self) -> f64 {
        self.dx
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn positions(&self) -> &DVector<f64> {
        &self.positions
    }
}

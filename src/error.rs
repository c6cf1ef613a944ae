// src/error.rs

//! Error types for setting up and running an advection simulation.

use thiserror::Error;

/// Errors detected while loading a deck or assembling a simulation.
///
/// Everything here is raised before the first time step; the stepping loop
/// itself cannot fail.
#[derive(Error, Debug)]
pub enum AdvectionError {
    #[error("Configuration error: {what}")]
    Configuration { what: String },

    #[error("Stability violation at node {node}: Courant number {courant} outside [0, 1]")]
    StabilityViolation { node: usize, courant: f64 },

    #[error("Dimension mismatch for {what}: expected {expected}, found {found}")]
    DimensionMismatch {
        what: &'static str,
        expected: usize,
        found: usize,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Input deck error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

pub type AdvectionResult<T> = Result<T, AdvectionError>;

impl AdvectionError {
    pub(crate) fn configuration(what: impl Into<String>) -> Self {
        AdvectionError::Configuration { what: what.into() }
    }
}

// src/lib.rs

//! One-dimensional upwind advection of a cloud-seeding tracer under a
//! spatially varying wind, with periodic re-injection at fixed nodes.

pub mod error;
pub mod input;
pub mod transport;
pub mod utils;

pub use error::{AdvectionError, AdvectionResult};
pub use input::{parse_input_deck, InputDeck};
pub use transport::{Simulation, SimulationResult, Snapshot};

// src/transport/mod.rs

pub mod clock;
pub mod grid;
pub mod injection;
pub mod seeding;
pub mod stability;
pub mod stepper;
pub mod wind;

pub use grid::Grid;
pub use injection::{Injector, IntervalDetection};
pub use stepper::{Simulation, SimulationResult, Snapshot, StepEvent};
pub use wind::WindProfile;

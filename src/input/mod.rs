// src/input/mod.rs

//! YAML input deck describing the seeding scenario: grid, wind, initial
//! band, re-injection schedule and run length.

pub mod input_deck;
pub mod parser;

pub use input_deck::{Geometry, InjectionSettings, InputDeck, Seeding, SimulationSettings, Wind};
pub use parser::parse_input_deck;

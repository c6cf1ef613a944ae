// src/utils/mod.rs

pub mod linear_algebra;

pub use linear_algebra::build_upwind_transition_operator;

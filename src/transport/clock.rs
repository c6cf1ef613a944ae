// src/transport/clock.rs

/// Elapsed simulated time, advanced by a fixed step.
///
/// The step is accumulated by repeated addition, so after `k` steps the clock
/// reads the rounded sum rather than `k * dt`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimulationClock {
    elapsed: f64, // [s]
    dt: f64,      // [s]
}

impl SimulationClock {
    pub fn new(dt: f64) -> Self {
        SimulationClock { elapsed: 0.0, dt }
    }

    pub fn advance(&mut self) {
        self.elapsed += self.dt;
    }

    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    pub fn dt(&self) -> f64 {
        self.dt
    }
}

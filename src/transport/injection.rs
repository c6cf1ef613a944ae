// src/transport/injection.rs

use nalgebra::DVector;
use serde::{Deserialize, Serialize};

use crate::error::{AdvectionError, AdvectionResult};
use crate::input::input_deck::InjectionSettings;

/// How the injector decides that an interval boundary has been reached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IntervalDetection {
    /// Fires whenever the clock, truncated to whole seconds, is a multiple of
    /// the interval. With a non-integer step the firing instant drifts past
    /// the true boundary, and steps shorter than a second can fire repeatedly
    /// within the same second.
    #[default]
    Truncated,
    /// Counts completed intervals and fires once per boundary crossed.
    Counted,
}

/// Periodic re-seeding of a fixed node range.
#[derive(Debug, Clone)]
pub struct Injector {
    interval: f64,
    magnitude: f64,
    first_node: usize,
    last_node: usize,
    detection: IntervalDetection,
    completed_intervals: u64,
}

impl Injector {
    /// Creates an injector for a grid of `node_count` nodes.
    pub fn new(
        settings: &InjectionSettings,
        detection: IntervalDetection,
        node_count: usize,
    ) -> AdvectionResult<Self> {
        if !(settings.interval.is_finite() && settings.interval > 0.0) {
            return Err(AdvectionError::configuration(format!(
                "injection interval must be positive, got {}",
                settings.interval
            )));
        }
        if !(settings.magnitude.is_finite() && settings.magnitude >= 0.0) {
            return Err(AdvectionError::configuration(format!(
                "injection magnitude must be non-negative, got {}",
                settings.magnitude
            )));
        }
        if settings.first_node > settings.last_node {
            return Err(AdvectionError::configuration(format!(
                "injection node range {}..={} is empty",
                settings.first_node, settings.last_node
            )));
        }
        if settings.last_node >= node_count {
            return Err(AdvectionError::DimensionMismatch {
                what: "injection node range",
                expected: node_count,
                found: settings.last_node + 1,
            });
        }

        Ok(Injector {
            interval: settings.interval,
            magnitude: settings.magnitude,
            first_node: settings.first_node,
            last_node: settings.last_node,
            detection,
            completed_intervals: 0,
        })
    }

    /// Whether an injection is due at `elapsed` seconds.
    ///
    /// Never due at `elapsed <= 0`. In `Counted` mode a positive answer
    /// consumes the boundary, so call this once per step.
    pub fn is_due(&mut self, elapsed: f64) -> bool {
        if elapsed <= 0.0 {
            return false;
        }
        match self.detection {
            IntervalDetection::Truncated => elapsed.trunc() % self.interval == 0.0,
            IntervalDetection::Counted => {
                let next_boundary = (self.completed_intervals + 1) as f64 * self.interval;
                if elapsed >= next_boundary {
                    self.completed_intervals = (elapsed / self.interval).floor() as u64;
                    true
                } else {
                    false
                }
            }
        }
    }

    /// Adds the injection magnitude to every node in the range and returns the
    /// total concentration added.
    pub fn inject(&self, concentration: &mut DVector<f64>) -> f64 {
        for i in self.first_node..=self.last_node {
            concentration[i] += self.magnitude;
        }
        self.total_per_event()
    }

    /// Concentration added by one injection event, summed over the nodes.
    pub fn total_per_event(&self) -> f64 {
        self.node_count() as f64 * self.magnitude
    }

    pub fn node_count(&self) -> usize {
        self.last_node - self.first_node + 1
    }
}

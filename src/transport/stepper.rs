// src/transport/stepper.rs

use nalgebra::{DMatrix, DVector};
use serde::Serialize;
use tracing::{debug, info, trace};

use crate::error::{AdvectionError, AdvectionResult};
use crate::input::input_deck::{InjectionSettings, InputDeck};
use crate::transport::clock::SimulationClock;
use crate::transport::grid::Grid;
use crate::transport::injection::{Injector, IntervalDetection};
use crate::transport::seeding::initial_concentration;
use crate::transport::stability::{check_courant, courant_numbers, stable_time_step};
use crate::utils::build_upwind_transition_operator;

/// Largest number of steps a run may take. Keeps the accumulated clock far
/// from the range where adding `dt` no longer changes it.
pub const MAX_STEPS: f64 = 1e8;

/// Concentration profile captured at a point in simulated time.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Snapshot {
    pub time: f64,               // [s]
    pub concentration: Vec<f64>, // [kg/m^3] per node
}

impl Snapshot {
    fn capture(time: f64, concentration: &DVector<f64>) -> Self {
        Snapshot {
            time,
            concentration: concentration.as_slice().to_vec(),
        }
    }

    pub fn minutes(&self) -> f64 {
        self.time / 60.0
    }

    pub fn total(&self) -> f64 {
        self.concentration.iter().sum()
    }
}

/// What happened during a single call to [`Simulation::step`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepEvent {
    /// Clock reading at which the step was taken, before advancing.
    pub time: f64,
    /// Total concentration added if an injection fired on this step.
    pub injected: Option<f64>,
}

/// Arrays handed to a presentation layer once the run is over.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimulationResult {
    pub positions: Vec<f64>,
    pub velocity: Vec<f64>,
    pub courant: Vec<f64>,
    pub dt: f64,
    pub steps: usize,
    pub injections: usize,
    /// Initial state, the state just before every injection, and the final state.
    pub snapshots: Vec<Snapshot>,
    pub final_concentration: Vec<f64>,
}

/// Explicit upwind advection of a tracer with periodic re-injection.
///
/// Owns the concentration and the clock. The operator and time step are fixed
/// at construction, so stepping cannot fail.
#[derive(Debug, Clone)]
pub struct Simulation {
    grid: Grid,
    velocity: DVector<f64>,
    courant: DVector<f64>,
    operator: DMatrix<f64>,
    concentration: DVector<f64>,
    scratch: DVector<f64>,
    clock: SimulationClock,
    end_time: f64,
    injector: Injector,
    steps: usize,
    injections: usize,
    snapshots: Vec<Snapshot>,
}

impl Simulation {
    /// Builds grid, wind, seeding and injector from an input deck.
    pub fn from_deck(deck: &InputDeck) -> AdvectionResult<Self> {
        let grid = Grid::uniform(deck.geometry.dx, deck.geometry.domain_length)?;
        let velocity = deck.wind.profile.velocity_field(&grid)?;
        let initial = initial_concentration(&grid, &deck.seeding)?;
        Simulation::new(
            grid,
            velocity,
            initial,
            deck.simulation.end_time,
            &deck.injection,
            deck.simulation.interval_detection,
        )
    }

    /// Derives the time step, checks stability and builds the transition
    /// operator. Nothing runs until [`Simulation::step`] or [`Simulation::run`].
    ///
    /// # Arguments
    ///
    /// * `grid` - Spatial nodes.
    /// * `velocity` - Wind speed at each node [m/s].
    /// * `initial` - Initial concentration at each node [kg/m^3].
    /// * `end_time` - Stepping continues while the clock is at or below this [s].
    /// * `injection` - Re-seeding interval, magnitude and node range.
    /// * `detection` - How injection boundaries are detected.
    pub fn new(
        grid: Grid,
        velocity: DVector<f64>,
        initial: DVector<f64>,
        end_time: f64,
        injection: &InjectionSettings,
        detection: IntervalDetection,
    ) -> AdvectionResult<Self> {
        let n = grid.len();
        if velocity.len() != n {
            return Err(AdvectionError::DimensionMismatch {
                what: "velocity field",
                expected: n,
                found: velocity.len(),
            });
        }
        if initial.len() != n {
            return Err(AdvectionError::DimensionMismatch {
                what: "initial concentration",
                expected: n,
                found: initial.len(),
            });
        }
        if !(end_time.is_finite() && end_time >= 0.0) {
            return Err(AdvectionError::configuration(format!(
                "end time must be a non-negative number of seconds, got {end_time}"
            )));
        }

        let dt = stable_time_step(grid.dx(), &velocity)?;
        if end_time / dt > MAX_STEPS {
            return Err(AdvectionError::configuration(format!(
                "end time {end_time} s at dt = {dt} s needs more than {MAX_STEPS} steps"
            )));
        }
        let courant = courant_numbers(&velocity, dt, grid.dx());
        check_courant(&courant)?;

        let operator = build_upwind_transition_operator(&courant);
        if operator.nrows() != n || operator.ncols() != n {
            return Err(AdvectionError::DimensionMismatch {
                what: "transition operator",
                expected: n,
                found: operator.nrows().max(operator.ncols()),
            });
        }

        let injector = Injector::new(injection, detection, n)?;

        info!(
            nodes = n,
            dx = grid.dx(),
            dt,
            max_courant = courant.max(),
            end_time,
            detection = ?detection,
            "advection simulation initialized"
        );

        let snapshots = vec![Snapshot::capture(0.0, &initial)];
        Ok(Simulation {
            grid,
            velocity,
            courant,
            operator,
            scratch: DVector::zeros(n),
            concentration: initial,
            clock: SimulationClock::new(dt),
            end_time,
            injector,
            steps: 0,
            injections: 0,
            snapshots,
        })
    }

    /// True while the clock has not passed the end time.
    pub fn is_running(&self) -> bool {
        self.clock.elapsed() <= self.end_time
    }

    /// Advances the state by one time step.
    ///
    /// Applies the operator, injects mass if an interval boundary is due
    /// (recording the pre-injection profile), then advances the clock.
    /// Returns `None` once the simulation is done.
    pub fn step(&mut self) -> Option<StepEvent> {
        if !self.is_running() {
            return None;
        }

        self.operator.mul_to(&self.concentration, &mut self.scratch);
        std::mem::swap(&mut self.concentration, &mut self.scratch);

        let time = self.clock.elapsed();
        let injected = if self.injector.is_due(time) {
            self.snapshots.push(Snapshot::capture(time, &self.concentration));
            let added = self.injector.inject(&mut self.concentration);
            self.injections += 1;
            debug!(time, minutes = time / 60.0, added, "tracer injected");
            Some(added)
        } else {
            None
        };

        self.clock.advance();
        self.steps += 1;
        trace!(step = self.steps, time, "advection step");

        Some(StepEvent { time, injected })
    }

    /// Steps until the end time and returns the recorded arrays.
    pub fn run(mut self) -> SimulationResult {
        while self.step().is_some() {}

        let final_time = self.clock.elapsed();
        self.snapshots.push(Snapshot::capture(final_time, &self.concentration));
        info!(
            steps = self.steps,
            injections = self.injections,
            final_time,
            total = self.concentration.sum(),
            "advection simulation finished"
        );

        SimulationResult {
            positions: self.grid.positions().as_slice().to_vec(),
            velocity: self.velocity.as_slice().to_vec(),
            courant: self.courant.as_slice().to_vec(),
            dt: self.clock.dt(),
            steps: self.steps,
            injections: self.injections,
            snapshots: self.snapshots,
            final_concentration: self.concentration.as_slice().to_vec(),
        }
    }

    pub fn concentration(&self) -> &DVector<f64> {
        &self.concentration
    }

    pub fn velocity(&self) -> &DVector<f64> {
        &self.velocity
    }

    pub fn courant(&self) -> &DVector<f64> {
        &self.courant
    }

    pub fn operator(&self) -> &DMatrix<f64> {
        &self.operator
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn dt(&self) -> f64 {
        self.clock.dt()
    }

    pub fn elapsed(&self) -> f64 {
        self.clock.elapsed()
    }

    pub fn steps(&self) -> usize {
        self.steps
    }

    pub fn snapshots(&self) -> &[Snapshot] {
        &self.snapshots
    }
}

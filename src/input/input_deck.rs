// src/input/input_deck.rs
use serde::{Deserialize, Serialize};

use crate::transport::injection::IntervalDetection;
use crate::transport::wind::WindProfile;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SimulationSettings {
    pub end_time: f64,                         // [s] Simulation horizon
    #[serde(default)]
    pub interval_detection: IntervalDetection, // How injection boundaries are detected
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Geometry {
    pub dx: f64,            // [m] Node spacing
    pub domain_length: f64, // [m] Domain extent, starting at 0
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Seeding {
    pub concentration: f64, // [kg/m^3] Initial concentration inside the band
    pub band_start: f64,    // [m] First position of the seeded band (inclusive)
    pub band_end: f64,      // [m] Last position of the seeded band (inclusive)
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Wind {
    pub profile: WindProfile,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct InjectionSettings {
    pub interval: f64,     // [s] Time between re-injections
    pub magnitude: f64,    // [kg/m^3] Concentration added per node and event
    pub first_node: usize, // First node receiving mass (inclusive)
    pub last_node: usize,  // Last node receiving mass (inclusive)
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct InputDeck {
    pub simulation: SimulationSettings,
    pub geometry: Geometry,
    pub seeding: Seeding,
    pub wind: Wind,
    pub injection: InjectionSettings,
}

impl Default for SimulationSettings {
    fn default() -> Self {
        SimulationSettings {
            end_time: 600.0,
            interval_detection: IntervalDetection::default(),
        }
    }
}

impl Default for Geometry {
    fn default() -> Self {
        Geometry {
            dx: 20.0,
            domain_length: 5000.0,
        }
    }
}

impl Default for Seeding {
    // Typical seeding concentrations stay below 0.1 micrograms per liter.
    fn default() -> Self {
        Seeding {
            concentration: 1e-6,
            band_start: 40.0,
            band_end: 100.0,
        }
    }
}

impl Default for Wind {
    fn default() -> Self {
        Wind {
            profile: WindProfile::default(),
        }
    }
}

impl Default for InjectionSettings {
    fn default() -> Self {
        InjectionSettings {
            interval: 60.0,
            magnitude: 1e-6,
            first_node: 2,
            last_node: 5,
        }
    }
}

/// The reference scenario: ten minutes of seeding over a 5 km line with a
/// re-injection every minute.
impl Default for InputDeck {
    fn default() -> Self {
        InputDeck {
            simulation: SimulationSettings::default(),
            geometry: Geometry::default(),
            seeding: Seeding::default(),
            wind: Wind::default(),
            injection: InjectionSettings::default(),
        }
    }
}

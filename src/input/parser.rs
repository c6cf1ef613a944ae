// src/input/parser.rs

use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::error::AdvectionResult;
use crate::input::InputDeck;

/// Loads a seeding scenario deck.
///
/// Every section must be present; only `simulation.interval_detection` may be
/// omitted, in which case truncated detection is used. Values are not range
/// checked here: that happens when a [`crate::Simulation`] is built from the
/// deck.
pub fn parse_input_deck(file_path: impl AsRef<Path>) -> AdvectionResult<InputDeck> {
    let mut file = File::open(file_path.as_ref())?;
    let mut contents = String::new();
    file.read_to_string(&mut contents)?;
    let input_deck: InputDeck = serde_yaml::from_str(&contents)?;
    tracing::debug!(path = %file_path.as_ref().display(), "parsed input deck");
    Ok(input_deck)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AdvectionError;
    use crate::transport::injection::IntervalDetection;
    use crate::transport::wind::WindProfile;
    use std::io::Write;

    const DECK: &str = r#"
simulation:
  end_time: 300.0
  interval_detection: counted
geometry:
  dx: 10.0
  domain_length: 1000.0
seeding:
  concentration: 2.0e-6
  band_start: 20.0
  band_end: 50.0
wind:
  profile:
    kind: sinusoidal
    amplitude: 1.0
    length_scale: 100.0
    phase: 80.0
    mean: 5.0
injection:
  interval: 30.0
  magnitude: 1.0e-6
  first_node: 1
  last_node: 3
"#;

    #[test]
    fn test_parse_full_deck() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(DECK.as_bytes()).unwrap();

        let deck = parse_input_deck(file.path()).unwrap();
        assert_eq!(deck.simulation.end_time, 300.0);
        assert_eq!(deck.simulation.interval_detection, IntervalDetection::Counted);
        assert_eq!(deck.geometry.dx, 10.0);
        assert_eq!(deck.seeding.band_end, 50.0);
        assert_eq!(deck.injection.last_node, 3);
        match deck.wind.profile {
            WindProfile::Sinusoidal { length_scale, mean, .. } => {
                assert_eq!(length_scale, 100.0);
                assert_eq!(mean, 5.0);
            }
            other => panic!("unexpected profile {:?}", other),
        }
    }

    #[test]
    fn test_detection_defaults_to_truncated() {
        let deck_text = DECK.replace("  interval_detection: counted\n", "");
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(deck_text.as_bytes()).unwrap();

        let deck = parse_input_deck(file.path()).unwrap();
        assert_eq!(deck.simulation.interval_detection, IntervalDetection::Truncated);
    }

    #[test]
    fn test_uniform_wind_profile() {
        let deck_text = DECK.replace(
            "    kind: sinusoidal\n    amplitude: 1.0\n    length_scale: 100.0\n    phase: 80.0\n    mean: 5.0\n",
            "    kind: uniform\n    speed: 4.5\n",
        );
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(deck_text.as_bytes()).unwrap();

        let deck = parse_input_deck(file.path()).unwrap();
        assert!(matches!(deck.wind.profile, WindProfile::Uniform { speed } if speed == 4.5));
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = parse_input_deck(dir.path().join("nope.yaml")).unwrap_err();
        assert!(matches!(err, AdvectionError::Io(_)));
    }

    #[test]
    fn test_malformed_deck() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"geometry:\n  dx: twenty\n").unwrap();
        let err = parse_input_deck(file.path()).unwrap_err();
        assert!(matches!(err, AdvectionError::Yaml(_)));
    }
}

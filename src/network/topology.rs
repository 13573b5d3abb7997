use serde::{Serialize, Deserialize};

use crate::error::{NetworkError, Result};

/// Shape and step size of a three-layer network.
///
/// Fields:
/// - `input_size`    — number of input features
/// - `hidden_size`   — width of the single hidden layer
/// - `output_size`   — number of sigmoid outputs
/// - `learning_rate` — gradient-descent step size, fixed for the network's lifetime
///
/// A `Topology` can be stored as JSON on its own, so a run's shape can be
/// configured before any weights exist.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Topology {
    pub input_size: usize,
    pub hidden_size: usize,
    pub output_size: usize,
    pub learning_rate: f64,
}

impl Topology {
    pub fn new(input_size: usize, hidden_size: usize, output_size: usize, learning_rate: f64) -> Topology {
        Topology { input_size, hidden_size, output_size, learning_rate }
    }

    /// Rejects zero sizes and non-positive or non-finite learning rates.
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("input_size", self.input_size),
            ("hidden_size", self.hidden_size),
            ("output_size", self.output_size),
        ] {
            if value == 0 {
                return Err(NetworkError::InvalidDimension { name, value });
            }
        }
        if !(self.learning_rate > 0.0 && self.learning_rate.is_finite()) {
            return Err(NetworkError::InvalidLearningRate(self.learning_rate));
        }
        Ok(())
    }

    /// Number of learnable scalars (both weight tables plus both bias vectors).
    pub fn parameter_count(&self) -> usize {
        self.input_size * self.hidden_size
            + self.hidden_size * self.output_size
            + self.hidden_size
            + self.output_size
    }

    /// Serializes the topology to a pretty-printed JSON file.
    pub fn save_json(&self, path: &str) -> Result<()> {
        let file = std::fs::File::create(path)?;
        let writer = std::io::BufWriter::new(file);
        serde_json::to_writer_pretty(writer, self)?;
        Ok(())
    }

    /// Deserializes and validates a topology from a JSON file.
    pub fn load_json(path: &str) -> Result<Topology> {
        let file = std::fs::File::open(path)?;
        let reader = std::io::BufReader::new(file);
        let topology: Topology = serde_json::from_reader(reader)?;
        topology.validate()?;
        Ok(topology)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_sizes_are_rejected_by_name() {
        let err = Topology::new(2, 0, 1, 0.1).validate().unwrap_err();
        assert!(matches!(err, NetworkError::InvalidDimension { name: "hidden_size", value: 0 }));
    }

    #[test]
    fn learning_rate_must_be_positive_and_finite() {
        for lr in [0.0, -0.5, f64::NAN, f64::INFINITY] {
            let err = Topology::new(2, 3, 1, lr).validate().unwrap_err();
            assert!(matches!(err, NetworkError::InvalidLearningRate(_)));
        }
    }

    #[test]
    fn parameter_count_covers_weights_and_biases() {
        assert_eq!(Topology::new(2, 3, 1, 0.1).parameter_count(), 6 + 3 + 3 + 1);
    }

    #[test]
    fn json_file_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("topology.json");
        let path = path.to_str().unwrap();

        let topology = Topology::new(2, 10, 1, 0.4);
        topology.save_json(path).unwrap();
        assert_eq!(Topology::load_json(path).unwrap(), topology);
    }

    #[test]
    fn load_json_validates() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.json");
        std::fs::write(&path, r#"{"input_size":0,"hidden_size":3,"output_size":1,"learning_rate":0.1}"#).unwrap();
        let err = Topology::load_json(path.to_str().unwrap()).unwrap_err();
        assert!(matches!(err, NetworkError::InvalidDimension { name: "input_size", .. }));
    }
}

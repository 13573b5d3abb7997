use serde::{Serialize, Deserialize};

use crate::error::{NetworkError, Result};
use crate::math::matrix::Matrix;
use crate::network::network::Network;
use crate::network::topology::Topology;

/// Current on-disk format version written by `Network::to_snapshot`.
pub const SNAPSHOT_FORMAT_VERSION: u32 = 1;

/// Persisted form of a trained network.
///
/// This is an explicit schema, independent of how `Network` lays out its
/// fields in memory. Weight tables are flattened row-major:
/// `weights_input_hidden[i * hidden_size + h]` and
/// `weights_hidden_output[h * output_size + o]`.
///
/// Activation buffers are not part of the snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetworkSnapshot {
    pub format_version: u32,
    pub topology: Topology,
    pub weights_input_hidden: Vec<f64>,
    pub weights_hidden_output: Vec<f64>,
    pub bias_hidden: Vec<f64>,
    pub bias_output: Vec<f64>,
}

impl NetworkSnapshot {
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(json: &str) -> Result<NetworkSnapshot> {
        Ok(serde_json::from_str(json)?)
    }
}

impl Network {
    /// Encodes every parameter and the topology into a `NetworkSnapshot`.
    pub fn to_snapshot(&self) -> NetworkSnapshot {
        NetworkSnapshot {
            format_version: SNAPSHOT_FORMAT_VERSION,
            topology: *self.topology(),
            weights_input_hidden: self.weights_input_hidden().as_slice().to_vec(),
            weights_hidden_output: self.weights_hidden_output().as_slice().to_vec(),
            bias_hidden: self.bias_hidden().to_vec(),
            bias_output: self.bias_output().to_vec(),
        }
    }

    /// Rebuilds a network from a snapshot, checking the format version, the
    /// topology and the length of every parameter array.
    pub fn from_snapshot(snapshot: NetworkSnapshot) -> Result<Network> {
        if snapshot.format_version != SNAPSHOT_FORMAT_VERSION {
            return Err(NetworkError::UnsupportedFormat(snapshot.format_version));
        }
        let t = snapshot.topology;
        t.validate()?;

        NetworkError::check_len("snapshot bias_hidden", t.hidden_size, snapshot.bias_hidden.len())?;
        NetworkError::check_len("snapshot bias_output", t.output_size, snapshot.bias_output.len())?;
        let weights_ih = Matrix::from_vec(t.input_size, t.hidden_size, snapshot.weights_input_hidden)?;
        let weights_ho = Matrix::from_vec(t.hidden_size, t.output_size, snapshot.weights_hidden_output)?;

        Ok(Network::from_parts(t, weights_ih, weights_ho, snapshot.bias_hidden, snapshot.bias_output))
    }

    /// Serializes the network's snapshot to a pretty-printed JSON file.
    pub fn save_json(&self, path: &str) -> Result<()> {
        let file = std::fs::File::create(path)?;
        let writer = std::io::BufWriter::new(file);
        serde_json::to_writer_pretty(writer, &self.to_snapshot())?;
        tracing::info!(path, "saved network");
        Ok(())
    }

    /// Deserializes a network from a JSON file previously written by `save_json`.
    pub fn load_json(path: &str) -> Result<Network> {
        let file = std::fs::File::open(path)?;
        let reader = std::io::BufReader::new(file);
        let snapshot: NetworkSnapshot = serde_json::from_reader(reader)?;
        let network = Network::from_snapshot(snapshot)?;
        tracing::info!(path, "loaded network");
        Ok(network)
    }
}

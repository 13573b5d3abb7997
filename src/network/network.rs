use rand::Rng;

use crate::activation::sigmoid::{sigmoid, sigmoid_derivative};
use crate::error::{NetworkError, Result};
use crate::loss::mse::MseLoss;
use crate::math::matrix::{uniform_unit, Matrix};
use crate::network::topology::Topology;
use crate::train::{loop_fn::train_loop, train_config::TrainConfig};

/// Fixed input → hidden → output perceptron with sigmoid units.
///
/// Besides the learnable parameters, the network keeps one buffer per layer
/// (plus two error-signal buffers) that every `forward` / `train` call
/// overwrites. Those buffers are working memory only and are not persisted.
#[derive(Debug, Clone)]
pub struct Network {
    topology: Topology,
    weights_ih: Matrix, // input_size x hidden_size
    weights_ho: Matrix, // hidden_size x output_size
    bias_h: Vec<f64>,
    bias_o: Vec<f64>,

    input_layer: Vec<f64>,
    hidden_layer: Vec<f64>,
    output_layer: Vec<f64>,
    output_errors: Vec<f64>,
    hidden_errors: Vec<f64>,
}

impl Network {
    /// Builds a network whose weights and biases are independent draws from
    /// U[-1, 1] taken from `rng`.
    ///
    /// Draw order is `weights_ih`, `weights_ho` (both row-major), then the
    /// hidden biases and the output biases, so a seeded RNG always yields the
    /// same network.
    ///
    /// # Errors
    /// `InvalidDimension` if any size is zero, `InvalidLearningRate` if the
    /// rate is not positive and finite.
    pub fn new<R: Rng + ?Sized>(
        input_size: usize,
        hidden_size: usize,
        output_size: usize,
        learning_rate: f64,
        rng: &mut R,
    ) -> Result<Network> {
        Network::from_topology(
            &Topology::new(input_size, hidden_size, output_size, learning_rate),
            rng,
        )
    }

    pub fn from_topology<R: Rng + ?Sized>(topology: &Topology, rng: &mut R) -> Result<Network> {
        topology.validate()?;

        let weights_ih = Matrix::random(topology.input_size, topology.hidden_size, rng);
        let weights_ho = Matrix::random(topology.hidden_size, topology.output_size, rng);
        let bias_h = (0..topology.hidden_size).map(|_| uniform_unit(rng)).collect();
        let bias_o = (0..topology.output_size).map(|_| uniform_unit(rng)).collect();

        tracing::debug!(
            input = topology.input_size,
            hidden = topology.hidden_size,
            output = topology.output_size,
            learning_rate = topology.learning_rate,
            parameters = topology.parameter_count(),
            "initialised network"
        );

        Ok(Network::from_parts(*topology, weights_ih, weights_ho, bias_h, bias_o))
    }

    /// Assembles a network from already-validated parameters and allocates
    /// fresh working buffers.
    pub(crate) fn from_parts(
        topology: Topology,
        weights_ih: Matrix,
        weights_ho: Matrix,
        bias_h: Vec<f64>,
        bias_o: Vec<f64>,
    ) -> Network {
        Network {
            input_layer: vec![0.0; topology.input_size],
            hidden_layer: vec![0.0; topology.hidden_size],
            output_layer: vec![0.0; topology.output_size],
            output_errors: vec![0.0; topology.output_size],
            hidden_errors: vec![0.0; topology.hidden_size],
            topology,
            weights_ih,
            weights_ho,
            bias_h,
            bias_o,
        }
    }

    /// Forward pass. The returned slice borrows the network's output buffer
    /// and is only valid until the next `forward` / `train` call; copy it
    /// with `.to_vec()` (or use `predict`) to keep it.
    pub fn forward(&mut self, inputs: &[f64]) -> Result<&[f64]> {
        NetworkError::check_len("forward inputs", self.topology.input_size, inputs.len())?;
        self.input_layer.copy_from_slice(inputs);
        self.feed();
        Ok(self.output_layer.as_slice())
    }

    /// Forward pass returning an owned copy of the outputs.
    pub fn predict(&mut self, inputs: &[f64]) -> Result<Vec<f64>> {
        self.forward(inputs).map(<[f64]>::to_vec)
    }

    /// One online gradient-descent step on a single sample.
    ///
    /// Both slices are checked before anything is written, so a rejected
    /// call leaves parameters and buffers untouched.
    pub fn train(&mut self, inputs: &[f64], targets: &[f64]) -> Result<()> {
        self.train_with_loss(inputs, targets).map(|_| ())
    }

    /// Same as `train`, but also returns the sample's mean squared error as
    /// measured by the forward pass that preceded the update.
    pub fn train_with_loss(&mut self, inputs: &[f64], targets: &[f64]) -> Result<f64> {
        NetworkError::check_len("train inputs", self.topology.input_size, inputs.len())?;
        NetworkError::check_len("train targets", self.topology.output_size, targets.len())?;

        self.input_layer.copy_from_slice(inputs);
        self.feed();
        let loss = MseLoss::loss(&self.output_layer, targets);
        self.backpropagate(targets);
        Ok(loss)
    }

    /// Runs `epochs` passes over the dataset in order, one `train` per sample.
    /// Returns the mean squared error of the last epoch (`None` only if no
    /// epoch ran, which cannot happen without a stop flag).
    ///
    /// Per-epoch losses are reported through `tracing`; use
    /// [`train_loop`](crate::train::train_loop) directly to also receive them
    /// on a channel or to stop early.
    pub fn train_epochs(
        &mut self,
        inputs: &[Vec<f64>],
        targets: &[Vec<f64>],
        epochs: usize,
    ) -> Result<Option<f64>> {
        train_loop(self, inputs, targets, &TrainConfig::new(epochs))
    }

    pub fn topology(&self) -> &Topology {
        &self.topology
    }

    pub fn input_size(&self) -> usize {
        self.topology.input_size
    }

    pub fn hidden_size(&self) -> usize {
        self.topology.hidden_size
    }

    pub fn output_size(&self) -> usize {
        self.topology.output_size
    }

    pub fn learning_rate(&self) -> f64 {
        self.topology.learning_rate
    }

    pub fn weights_input_hidden(&self) -> &Matrix {
        &self.weights_ih
    }

    pub fn weights_hidden_output(&self) -> &Matrix {
        &self.weights_ho
    }

    pub fn bias_hidden(&self) -> &[f64] {
        &self.bias_h
    }

    pub fn bias_output(&self) -> &[f64] {
        &self.bias_o
    }

    /// Computes hidden and output activations from `input_layer`.
    fn feed(&mut self) {
        for h in 0..self.topology.hidden_size {
            let sum: f64 = self.input_layer.iter()
                .enumerate()
                .map(|(i, x)| x * self.weights_ih[(i, h)])
                .sum();
            self.hidden_layer[h] = sigmoid(sum + self.bias_h[h]);
        }

        for o in 0..self.topology.output_size {
            let sum: f64 = self.hidden_layer.iter()
                .enumerate()
                .map(|(h, a)| a * self.weights_ho[(h, o)])
                .sum();
            self.output_layer[o] = sigmoid(sum + self.bias_o[o]);
        }
    }

    /// Backward pass for the activations left by the last `feed`.
    ///
    /// Both error signals are computed before any weight moves; the hidden
    /// signal therefore sees the pre-update `weights_ho`.
    fn backpropagate(&mut self, targets: &[f64]) {
        let lr = self.topology.learning_rate;

        for (o, err) in self.output_errors.iter_mut().enumerate() {
            let y = self.output_layer[o];
            *err = (targets[o] - y) * sigmoid_derivative(y);
        }

        for h in 0..self.topology.hidden_size {
            let sum: f64 = self.weights_ho.row(h).iter()
                .zip(&self.output_errors)
                .map(|(w, e)| w * e)
                .sum();
            self.hidden_errors[h] = sum * sigmoid_derivative(self.hidden_layer[h]);
        }

        // hidden -> output
        for (h, &a) in self.hidden_layer.iter().enumerate() {
            for (w, e) in self.weights_ho.row_mut(h).iter_mut().zip(&self.output_errors) {
                *w += lr * e * a;
            }
        }
        for (b, e) in self.bias_o.iter_mut().zip(&self.output_errors) {
            *b += lr * e;
        }

        // input -> hidden
        for (i, &x) in self.input_layer.iter().enumerate() {
            for (w, e) in self.weights_ih.row_mut(i).iter_mut().zip(&self.hidden_errors) {
                *w += lr * e * x;
            }
        }
        for (b, e) in self.bias_h.iter_mut().zip(&self.hidden_errors) {
            *b += lr * e;
        }
    }
}

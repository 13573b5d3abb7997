use crate::error::{NetworkError, Result};

/// Parallel lists of sample inputs and targets, always of equal length.
///
/// The fields are private so the only ways in are `Dataset::new`, which checks
/// the lengths, and the crate's own generators:
///
/// ```compile_fail
/// let ds = ferrite_mlp::Dataset { inputs: vec![vec![0.0]; 10], targets: vec![vec![0.0]; 5] };
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Dataset {
    inputs: Vec<Vec<f64>>,
    targets: Vec<Vec<f64>>,
}

impl Dataset {
    /// Pairs `inputs[i]` with `targets[i]`; both lists must be the same length.
    pub fn new(inputs: Vec<Vec<f64>>, targets: Vec<Vec<f64>>) -> Result<Dataset> {
        NetworkError::check_len("dataset targets", inputs.len(), targets.len())?;
        Ok(Dataset { inputs, targets })
    }

    /// Appends one sample; used by the generators, which build pairs together.
    pub(crate) fn push(&mut self, input: Vec<f64>, target: Vec<f64>) {
        self.inputs.push(input);
        self.targets.push(target);
    }

    pub fn inputs(&self) -> &[Vec<f64>] {
        &self.inputs
    }

    pub fn targets(&self) -> &[Vec<f64>] {
        &self.targets
    }

    pub fn len(&self) -> usize {
        self.inputs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inputs.is_empty()
    }

    /// Splits off the last `floor(len * test_fraction)` samples as a test set,
    /// keeping sample order. Returns `(train, test)`.
    ///
    /// `test_fraction` is clamped to [0, 1].
    pub fn split(mut self, test_fraction: f64) -> (Dataset, Dataset) {
        let fraction = if test_fraction.is_nan() { 0.0 } else { test_fraction.clamp(0.0, 1.0) };
        let test_n = (self.len() as f64 * fraction).floor() as usize;
        let train_n = self.len() - test_n;

        let test = Dataset {
            inputs: self.inputs.split_off(train_n),
            targets: self.targets.split_off(train_n),
        };
        (self, test)
    }
}

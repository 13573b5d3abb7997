use std::sync::atomic::Ordering;
use std::time::Instant;

use crate::error::{NetworkError, Result};
use crate::network::network::Network;
use crate::train::epoch_stats::EpochStats;
use crate::train::train_config::TrainConfig;

// ---------------------------------------------------------------------------
// Public entry point
// ---------------------------------------------------------------------------

/// Trains `network` for `config.epochs` epochs and returns the mean squared
/// error of the **last completed epoch**, or `None` if the stop flag was
/// already set and no epoch ran.
///
/// Samples are visited in dataset order every epoch (no shuffling), with one
/// online `train` step per sample.
///
/// # Arguments
/// - `network` — mutable reference to the network; modified in place
/// - `inputs`  — training samples, each of length `input_size`
/// - `targets` — corresponding targets, each of length `output_size`
/// - `config`  — epoch count, log interval, optional progress channel and stop flag
///
/// # Early termination
/// The loop breaks early if:
/// - the `progress_tx` receiver has been dropped, **or**
/// - `config.stop_flag` is set to `true`.
///
/// # Errors
/// `EmptyDataset`, `DimensionMismatch` or `InvalidEpochCount`. Every sample
/// is checked before the first update, so on error the network is untouched.
pub fn train_loop(
    network: &mut Network,
    inputs: &[Vec<f64>],
    targets: &[Vec<f64>],
    config: &TrainConfig,
) -> Result<Option<f64>> {
    validate_dataset(network, inputs, targets)?;
    if config.epochs == 0 {
        return Err(NetworkError::InvalidEpochCount);
    }

    let mut last_loss = None;

    for epoch in 1..=config.epochs {
        if stop_requested(config) {
            tracing::warn!(epoch, "stop flag set, ending training early");
            break;
        }

        let t_start = Instant::now();
        let loss = run_one_epoch(network, inputs, targets)?;
        last_loss = Some(loss);
        let elapsed_ms = t_start.elapsed().as_millis() as u64;

        tracing::debug!(epoch, mse = loss, elapsed_ms, "epoch complete");
        if config.log_every > 0 && (epoch % config.log_every == 0 || epoch == config.epochs) {
            tracing::info!(
                "Epoch {}/{}: mse={:.6}",
                epoch, config.epochs, loss
            );
        }

        if let Some(ref tx) = config.progress_tx {
            let stats = EpochStats {
                epoch,
                total_epochs: config.epochs,
                mean_squared_error: loss,
                elapsed_ms,
            };
            // If the receiver has been dropped, stop training.
            if tx.send(stats).is_err() {
                tracing::warn!(epoch, "progress receiver dropped, ending training early");
                break;
            }
        }
    }

    Ok(last_loss)
}

// ---------------------------------------------------------------------------
// Crate helpers
// ---------------------------------------------------------------------------

/// Checks that `inputs` and `targets` are non-empty, parallel, and that every
/// sample matches the network's input and output widths.
pub(crate) fn validate_dataset(
    network: &Network,
    inputs: &[Vec<f64>],
    targets: &[Vec<f64>],
) -> Result<()> {
    if inputs.is_empty() {
        return Err(NetworkError::EmptyDataset);
    }
    NetworkError::check_len("dataset targets", inputs.len(), targets.len())?;
    for (input, target) in inputs.iter().zip(targets) {
        NetworkError::check_len("sample inputs", network.input_size(), input.len())?;
        NetworkError::check_len("sample targets", network.output_size(), target.len())?;
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Private helpers
// ---------------------------------------------------------------------------

/// One ordered pass over the data. Returns the mean per-sample MSE.
fn run_one_epoch(network: &mut Network, inputs: &[Vec<f64>], targets: &[Vec<f64>]) -> Result<f64> {
    let mut total_loss = 0.0;
    for (input, target) in inputs.iter().zip(targets) {
        total_loss += network.train_with_loss(input, target)?;
    }
    Ok(total_loss / inputs.len() as f64)
}

fn stop_requested(config: &TrainConfig) -> bool {
    config.stop_flag
        .as_ref()
        .map_or(false, |flag| flag.load(Ordering::Relaxed))
}

use crate::error::Result;
use crate::network::network::Network;
use crate::train::loop_fn::validate_dataset;

/// Mean over samples of the mean absolute difference between the network's
/// outputs and the targets.
pub fn mean_absolute_error(
    network: &mut Network,
    inputs: &[Vec<f64>],
    targets: &[Vec<f64>],
) -> Result<f64> {
    validate_dataset(network, inputs, targets)?;

    let mut total = 0.0;
    for (input, target) in inputs.iter().zip(targets) {
        let output = network.forward(input)?;
        let n = output.len() as f64;
        total += output.iter().zip(target)
            .map(|(p, y)| (p - y).abs())
            .sum::<f64>() / n;
    }
    Ok(total / inputs.len() as f64)
}

/// Fraction of samples whose thresholded outputs all match the thresholded
/// targets (`value >= threshold` is class 1).
pub fn threshold_accuracy(
    network: &mut Network,
    inputs: &[Vec<f64>],
    targets: &[Vec<f64>],
    threshold: f64,
) -> Result<f64> {
    validate_dataset(network, inputs, targets)?;

    let mut correct = 0usize;
    for (input, target) in inputs.iter().zip(targets) {
        let output = network.forward(input)?;
        let hit = output.iter().zip(target)
            .all(|(p, y)| (*p >= threshold) == (*y >= threshold));
        if hit {
            correct += 1;
        }
    }
    Ok(correct as f64 / inputs.len() as f64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::NetworkError;
    use crate::math::matrix::Matrix;
    use crate::network::topology::Topology;

    /// 1 -> 1 -> 1 network whose output rises with its input.
    fn monotone() -> Network {
        Network::from_parts(
            Topology::new(1, 1, 1, 0.1),
            Matrix::from_vec(1, 1, vec![8.0]).unwrap(),
            Matrix::from_vec(1, 1, vec![8.0]).unwrap(),
            vec![0.0],
            vec![-4.0],
        )
    }

    #[test]
    fn accuracy_counts_threshold_agreement() {
        let mut net = monotone();
        let low = net.predict(&[-1.0]).unwrap()[0];
        let high = net.predict(&[1.0]).unwrap()[0];
        assert!(low < 0.5 && high > 0.5);

        let inputs = vec![vec![-1.0], vec![1.0], vec![1.0], vec![-1.0]];
        let targets = vec![vec![0.0], vec![1.0], vec![0.0], vec![0.0]];
        assert_eq!(threshold_accuracy(&mut net, &inputs, &targets, 0.5).unwrap(), 0.75);
    }

    #[test]
    fn mae_of_exact_targets_is_zero() {
        let mut net = monotone();
        let inputs = vec![vec![0.2], vec![-0.7]];
        let targets: Vec<Vec<f64>> = inputs.iter()
            .map(|x| net.predict(x).unwrap())
            .collect();
        assert_eq!(mean_absolute_error(&mut net, &inputs, &targets).unwrap(), 0.0);
    }

    #[test]
    fn metrics_reject_empty_sets() {
        let mut net = monotone();
        assert!(matches!(mean_absolute_error(&mut net, &[], &[]), Err(NetworkError::EmptyDataset)));
        assert!(matches!(threshold_accuracy(&mut net, &[], &[], 0.5), Err(NetworkError::EmptyDataset)));
    }
}

//! End-to-end training scenarios on the toy datasets.

use ferrite_mlp::data::synthetic;
use ferrite_mlp::train::{mean_absolute_error, threshold_accuracy};
use ferrite_mlp::{train_loop, Network, TrainConfig};
use rand::rngs::StdRng;
use rand::SeedableRng;

const SAMPLES: usize = 1000;
const TEST_FRACTION: f64 = 0.2;
const EPOCHS: usize = 5000;

#[test]
fn learns_multiplication() {
    let mut rng = StdRng::seed_from_u64(2024);
    let (train, test) = synthetic::multiplication(SAMPLES, &mut rng).split(TEST_FRACTION);
    assert_eq!((train.len(), test.len()), (800, 200));

    let mut network = Network::new(2, 10, 1, 0.4, &mut rng).unwrap();
    let config = TrainConfig::new(EPOCHS).with_log_every(0);
    let loss = train_loop(&mut network, train.inputs(), train.targets(), &config).unwrap();

    let mae = mean_absolute_error(&mut network, test.inputs(), test.targets()).unwrap();
    assert!(mae < 0.05, "held-out MAE {mae} (final training mse {loss:?})");

    let product = network.forward(&[0.13, 0.3]).unwrap()[0];
    assert!((product - 0.039).abs() < 0.05, "0.13 * 0.3 predicted as {product}");
}

#[test]
fn classifies_points_by_radius() {
    let mut rng = StdRng::seed_from_u64(7);
    let (train, test) = synthetic::circle(SAMPLES, &mut rng).split(TEST_FRACTION);

    let mut network = Network::new(2, 10, 1, 0.1, &mut rng).unwrap();
    let loss = network.train_epochs(train.inputs(), train.targets(), EPOCHS).unwrap();

    let accuracy = threshold_accuracy(&mut network, test.inputs(), test.targets(), 0.5).unwrap();
    assert!(accuracy > 0.8, "held-out accuracy {accuracy} (final training mse {loss:?})");
}

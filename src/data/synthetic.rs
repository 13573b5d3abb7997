//! Toy datasets used by the demos, the CLI and the convergence tests.

use rand::Rng;
use std::f64::consts::PI;

use crate::data::dataset::Dataset;

/// Radius separating class 0 (inside) from class 1 (outside) in `circle`.
pub const CIRCLE_INNER_RADIUS: f64 = 1.0;
/// Outer edge of the class-1 ring in `circle`.
pub const CIRCLE_OUTER_RADIUS: f64 = 2.0;

/// `n` samples of `[x, y] -> [x * y]` with `x, y ~ U[0, 1)`.
pub fn multiplication<R: Rng + ?Sized>(n: usize, rng: &mut R) -> Dataset {
    let mut dataset = Dataset::default();
    for _ in 0..n {
        let x: f64 = rng.gen();
        let y: f64 = rng.gen();
        dataset.push(vec![x, y], vec![x * y]);
    }
    dataset
}

/// `n` points labelled 0 inside the unit circle and 1 in the ring out to radius 2.
///
/// Each sample picks a uniform angle, then with equal odds either a distance in
/// `[0, 1)` (label 0) or in `[1, 2)` (label 1).
pub fn circle<R: Rng + ?Sized>(n: usize, rng: &mut R) -> Dataset {
    let mut dataset = Dataset::default();
    for _ in 0..n {
        let angle = 2.0 * PI * rng.gen::<f64>();
        let (distance, label) = if rng.gen::<bool>() {
            (CIRCLE_INNER_RADIUS * rng.gen::<f64>(), 0.0)
        } else {
            let span = CIRCLE_OUTER_RADIUS - CIRCLE_INNER_RADIUS;
            (CIRCLE_INNER_RADIUS + span * rng.gen::<f64>(), 1.0)
        };
        dataset.push(vec![distance * angle.cos(), distance * angle.sin()], vec![label]);
    }
    dataset
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn multiplication_targets_are_products() {
        let ds = multiplication(50, &mut StdRng::seed_from_u64(1));
        assert_eq!(ds.len(), 50);
        for (input, target) in ds.inputs().iter().zip(ds.targets()) {
            assert!(input.iter().all(|v| (0.0..1.0).contains(v)));
            assert_relative_eq!(target[0], input[0] * input[1]);
        }
    }

    #[test]
    fn circle_labels_follow_radius() {
        let ds = circle(500, &mut StdRng::seed_from_u64(2));
        let mut seen = [0usize; 2];
        for (input, target) in ds.inputs().iter().zip(ds.targets()) {
            let r = input[0].hypot(input[1]);
            if target[0] == 0.0 {
                assert!(r < CIRCLE_INNER_RADIUS + 1e-12);
                seen[0] += 1;
            } else {
                assert!(r >= CIRCLE_INNER_RADIUS - 1e-12 && r < CIRCLE_OUTER_RADIUS + 1e-12);
                seen[1] += 1;
            }
        }
        assert!(seen[0] > 0 && seen[1] > 0);
    }
}

pub struct MseLoss;

impl MseLoss {
    /// Scalar MSE: mean((expected - predicted)²)
    pub fn loss(predicted: &[f64], expected: &[f64]) -> f64 {
        let n = predicted.len() as f64;
        predicted.iter().zip(expected.iter())
            .map(|(p, y)| (y - p).powi(2))
            .sum::<f64>() / n
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn averages_over_outputs() {
        assert_eq!(MseLoss::loss(&[0.0, 1.0], &[1.0, 1.0]), 0.5);
        assert_eq!(MseLoss::loss(&[0.25], &[0.25]), 0.0);
    }
}

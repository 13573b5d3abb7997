use std::f64::consts::E;

/// Logistic activation `1 / (1 + e^-x)`. Saturates to 0 or 1 for large |x|.
pub fn sigmoid(x: f64) -> f64 {
    1.0 / (1.0 + E.powf(-x))
}

/// Derivative of the sigmoid expressed in terms of its output `y = sigmoid(z)`.
///
/// Backprop already holds the activation, so this takes `y`, not `z`.
pub fn sigmoid_derivative(y: f64) -> f64 {
    y * (1.0 - y)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn sigmoid_of_zero_is_half() {
        assert_eq!(sigmoid(0.0), 0.5);
    }

    #[test]
    fn sigmoid_saturates() {
        assert_eq!(sigmoid(1000.0), 1.0);
        assert_eq!(sigmoid(-1000.0), 0.0);
    }

    #[test]
    fn derivative_matches_finite_difference() {
        let z = 0.37;
        let h = 1e-6;
        let numeric = (sigmoid(z + h) - sigmoid(z - h)) / (2.0 * h);
        assert_relative_eq!(sigmoid_derivative(sigmoid(z)), numeric, epsilon = 1e-8);
    }
}

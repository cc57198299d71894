pub struct SquaredErrorLoss;

impl SquaredErrorLoss {
    /// Scalar squared error: (predicted - expected)²
    pub fn loss(predicted: f64, expected: f64) -> f64 {
        (predicted - expected).powi(2)
    }

    /// Slope of the squared error with respect to its first argument:
    /// 2 · (predicted - expected)
    pub fn derivative(predicted: f64, expected: f64) -> f64 {
        2.0 * (predicted - expected)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loss_is_squared_difference() {
        assert!((SquaredErrorLoss::loss(0.8, 1.0) - 0.04).abs() < 1e-12);
        assert_eq!(SquaredErrorLoss::loss(0.25, 0.0), 0.0625);
    }

    #[test]
    fn loss_of_perfect_prediction_is_zero() {
        assert_eq!(SquaredErrorLoss::loss(1.0, 1.0), 0.0);
        assert_eq!(SquaredErrorLoss::loss(0.0, 0.0), 0.0);
        assert_eq!(SquaredErrorLoss::loss(0.37, 0.37), 0.0);
    }

    #[test]
    fn derivative_is_twice_the_difference() {
        assert_eq!(SquaredErrorLoss::derivative(0.75, 1.0), -0.5);
        assert_eq!(SquaredErrorLoss::derivative(0.5, 0.0), 1.0);
    }
}

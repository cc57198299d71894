use std::f64::consts::E;

/// Logistic sigmoid: squashes any real `z` into (0, 1).
///
/// No explicit clamp is needed: for every finite `f64` input the expression
/// below stays in [0, 1] and never produces NaN (`exp` saturates to 0.0 or
/// infinity first).
pub fn sigmoid(z: f64) -> f64 {
    1.0 / (1.0 + E.powf(-z))
}

/// Derivative of the sigmoid: σ'(z) = σ(z) · (1 - σ(z)).
pub fn sigmoid_derivative(z: f64) -> f64 {
    let s = sigmoid(z);
    s * (1.0 - s)
}

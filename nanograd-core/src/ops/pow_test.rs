use super::*;
use crate::graph::Graph;
use approx::assert_relative_eq;

#[test]
fn test_pow_forward() {
    let graph = Graph::new();
    for (x, exponent, expected) in [(2.0, 3.0, 8.0), (5.0, 2.0, 25.0)] {
        let b = graph.leaf(x).pow(exponent);
        assert_eq!(b.data(), expected);
        assert_eq!(b.op(), Op::Pow(exponent));
    }
}

#[test]
fn test_pow_backward() {
    let graph = Graph::new();
    let a = graph.leaf(2.0);
    let b = a.pow(3.0);
    b.backward();
    // 3x^2 at x = 2
    assert_relative_eq!(a.grad(), 12.0);
}

#[test]
fn test_negative_exponent_backward() {
    let graph = Graph::new();
    let a = graph.leaf(4.0);
    let b = a.pow(-1.0);
    assert_relative_eq!(b.data(), 0.25);
    b.backward();
    assert_relative_eq!(a.grad(), -1.0 / 16.0);
}

#[test]
fn test_try_pow_accepts_numbers() -> Result<(), NanogradError> {
    let graph = Graph::new();
    let a = graph.leaf(3.0);
    assert_eq!(a.try_pow(2)?.data(), 9.0);
    assert_eq!(a.try_pow(2.0f32)?.data(), 9.0);
    assert_relative_eq!(a.try_pow(0.5)?.data(), 3.0f64.sqrt());
    Ok(())
}

#[test]
fn test_try_pow_rejects_node_exponent() {
    let graph = Graph::new();
    let a = graph.leaf(3.0);
    let exponent = graph.leaf(2.0);
    let before = graph.len();

    let err = a.try_pow(&exponent).unwrap_err();
    assert_eq!(
        err,
        NanogradError::UnsupportedExponentType {
            found: "Value(data=2)".to_string()
        }
    );
    // nothing was recorded
    assert_eq!(graph.len(), before);
    assert!(matches!(
        try_pow_op(&a, exponent),
        Err(NanogradError::UnsupportedExponentType { .. })
    ));
}

#[test]
fn test_sqrt_gradient_at_zero_is_not_clamped() {
    let graph = Graph::new();
    let a = graph.leaf(0.0);
    let b = a.pow(0.5);
    assert_eq!(b.data(), 0.0);
    b.backward();
    assert!(a.grad().is_infinite());
}

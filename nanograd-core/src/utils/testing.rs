use crate::value::Value;

/// Asserts that each value's gradient is within `tolerance` of `expected`.
/// Panics with the offending index otherwise.
pub fn check_grads_near(values: &[&Value], expected: &[f64], tolerance: f64) {
    assert_eq!(values.len(), expected.len(), "Gradient count mismatch");
    for (i, (value, e)) in values.iter().zip(expected.iter()).enumerate() {
        let actual = value.grad();
        let diff = (actual - e).abs();
        if !(diff <= tolerance) {
            panic!(
                "Gradient mismatch at index {}: actual={:?}, expected={:?}, diff={:?}, tolerance={:?}",
                i, actual, e, diff, tolerance
            );
        }
    }
}

/// Asserts that `value.data()` is within `tolerance` of `expected`.
pub fn check_data_near(value: &Value, expected: f64, tolerance: f64) {
    let diff = (value.data() - expected).abs();
    if !(diff <= tolerance) {
        panic!(
            "Data mismatch: actual={:?}, expected={:?}, diff={:?}, tolerance={:?}",
            value.data(),
            expected,
            diff,
            tolerance
        );
    }
}

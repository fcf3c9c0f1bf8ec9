// Shared helpers for the integration tests.

/// Installs a test logger once per binary. Safe to call from every test.
#[allow(dead_code)]
pub(crate) fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Absolute tolerance used when comparing against reference autodiff results.
#[allow(dead_code)]
pub(crate) const REFERENCE_TOLERANCE: f64 = 1e-6;

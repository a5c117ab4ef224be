//! Tracing/logging setup shared by anything embedding the ledger.

/// Process-wide logging initialization.
pub mod tracing;

/// Initialize observability for the process.
///
/// Safe to call more than once; later calls are no-ops.
pub fn init() {
    tracing::init();
}

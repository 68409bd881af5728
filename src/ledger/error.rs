//! Error types for ledger storage.

use thiserror::Error;

/// Storage could not be expanded: doubling failed and so did the fixed
/// fallback increment. Fatal — record-keeping cannot continue without
/// ledger storage, and the failed call leaves the ledger untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("transaction storage exhausted: cannot grow beyond {capacity} records")]
pub struct StorageExhausted {
    pub capacity: usize,
}

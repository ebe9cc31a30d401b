//! Benchmark setup error type.

use mst_repair_core::MstError;

use crate::source::SyntheticError;

/// Errors that may occur while preparing benchmark inputs.
#[derive(Debug, thiserror::Error)]
pub enum BenchSetupError {
    /// Synthetic graph generation failed.
    #[error("synthetic graph generation failed: {0}")]
    Synthetic(#[from] SyntheticError),
    /// Tree construction or repair failed.
    #[error("MST operation failed: {0}")]
    Mst(#[from] MstError),
}

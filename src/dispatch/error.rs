//! Errors raised by the dispatcher.

use thiserror::Error;

/// Reasons a dispatch request cannot be served.
///
/// None of these are transient: retrying the same request yields the same
/// error. No partial allocation accompanies them.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DispatchError {
    /// The fleet description itself is inconsistent.
    #[error("invalid plant \"{plant}\": {reason}")]
    InvalidInput { plant: String, reason: String },

    /// The fleet cannot produce exactly the requested load.
    #[error("infeasible load: {reason}")]
    InfeasibleLoad { reason: String },
}

impl DispatchError {
    pub(crate) fn invalid(plant: &str, reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            plant: plant.to_string(),
            reason: reason.into(),
        }
    }

    pub(crate) fn infeasible(reason: impl Into<String>) -> Self {
        Self::InfeasibleLoad {
            reason: reason.into(),
        }
    }
}

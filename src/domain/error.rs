//! Domain error type shared by the service and the stores' callers.

/// Failure of an order operation.
#[derive(Debug, thiserror::Error)]
pub enum OrderError {
    /// Client-correctable input problems. Every violation is listed.
    #[error("{}", .0.join(", "))]
    Validation(Vec<String>),

    /// Unexpected persistence failure. Details are for logs only.
    #[error("storage failure: {0:#}")]
    Storage(#[from] anyhow::Error),
}

impl OrderError {
    pub fn is_validation(&self) -> bool {
        matches!(self, OrderError::Validation(_))
    }

    /// Validation messages, empty for storage failures.
    pub fn messages(&self) -> &[String] {
        match self {
            OrderError::Validation(errors) => errors,
            OrderError::Storage(_) => &[],
        }
    }
}

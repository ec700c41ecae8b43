/// Convenience result type used across tilefit.
pub type TilefitResult<T> = Result<T, TilefitError>;

/// Top-level error taxonomy used by engine APIs.
#[derive(thiserror::Error, Debug)]
pub enum TilefitError {
    /// Invalid caller-provided tiles, viewport, row count or configuration.
    #[error("validation error: {0}")]
    Validation(String),

    /// No row count yields a layout with positive usable space.
    #[error("infeasible layout: {0}")]
    Infeasible(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl TilefitError {
    /// Build a [`TilefitError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`TilefitError::Infeasible`] value.
    pub fn infeasible(msg: impl Into<String>) -> Self {
        Self::Infeasible(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;

/// Convenience result type used across the crate.
pub type EpicycleResult<T> = Result<T, EpicycleError>;

/// Top-level error taxonomy used by engine APIs.
#[derive(thiserror::Error, Debug)]
pub enum EpicycleError {
    /// Invalid caller-provided data (empty chains, bad parameters, mismatched buffers).
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors raised by a display surface while drawing or presenting.
    #[error("render error: {0}")]
    Render(String),

    /// Errors when serializing or deserializing scene configuration.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl EpicycleError {
    /// Build an [`EpicycleError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build an [`EpicycleError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Build an [`EpicycleError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;

/// Convenience result type used across pinned-hero.
pub type HeroResult<T> = Result<T, HeroError>;

#[derive(thiserror::Error, Debug)]
/// Top-level error type for pinned-hero APIs.
pub enum HeroError {
    /// Input data failed structural or semantic validation.
    #[error("validation error: {0}")]
    Validation(String),

    /// Configuration could not be read or parsed.
    #[error("config error: {0}")]
    Config(String),

    /// The render surface is missing a required element.
    #[error("surface error: {0}")]
    Surface(String),

    /// Runtime registration or teardown was used out of order.
    #[error("lifecycle error: {0}")]
    Lifecycle(String),

    /// Serialization or deserialization failed.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Text output could not be formatted.
    #[error("format error: {0}")]
    Fmt(#[from] std::fmt::Error),

    /// Wrapped lower-level error.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl HeroError {
    /// Build a [`HeroError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`HeroError::Config`] value.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Build a [`HeroError::Surface`] value.
    pub fn surface(msg: impl Into<String>) -> Self {
        Self::Surface(msg.into())
    }

    /// Build a [`HeroError::Lifecycle`] value.
    pub fn lifecycle(msg: impl Into<String>) -> Self {
        Self::Lifecycle(msg.into())
    }

    /// Build a [`HeroError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;

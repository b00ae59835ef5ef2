use thiserror::Error;

/// Errors raised by geometric construction and queries.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GeometryError {
    /// A defining value failed validation: a direction or normal shorter than
    /// [`EPS`](crate::math::EPS), a non-positive size, coincident endpoints, or an
    /// out-of-range coordinate index.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The operands are individually valid, but their relationship has no unique
    /// answer (e.g. a line parallel to a plane).
    #[error("degenerate case: {0}")]
    Degenerate(String),
}

impl GeometryError {
    /// Returns whether this error is a [`Degenerate`](GeometryError::Degenerate) case.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        matches!(self, Self::Degenerate(_))
    }
}

/// Convenience type alias for results using [`GeometryError`].
pub type Result<T> = std::result::Result<T, GeometryError>;

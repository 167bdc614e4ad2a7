use thiserror::Error;

use crate::Shape;

/// The top-level error type for this crate.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// Roots of degree zero are undefined
    #[error("the degree of a root must be non-zero")]
    ZeroDegree,

    #[error("`{op}` does not accept {shape} input")]
    UnsupportedShape { op: &'static str, shape: Shape },

    #[error("cannot compute `{0}` of an empty collection")]
    EmptyCollection(&'static str),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub(crate) const fn unsupported_shape(op: &'static str, shape: Shape) -> Self {
        Self::UnsupportedShape { op, shape }
    }
}

use std::fmt;

use itertools::Itertools;
use num::Complex;

use crate::RealScalar;

/// The nesting depth of a [`Complexes`] value, without its contents.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Shape {
    Scalar,
    Flat,
    Nested,
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Scalar => f.write_str("scalar"),
            Self::Flat => f.write_str("flat"),
            Self::Nested => f.write_str("nested"),
        }
    }
}

/// A single complex number, a list of them, or a list of lists.
///
/// At most two levels of nesting are representable. Inner lists of a
/// [`Complexes::Nested`] value may have different lengths.
#[derive(Clone, Debug, PartialEq)]
pub enum Complexes<T> {
    Scalar(Complex<T>),
    Flat(Vec<Complex<T>>),
    Nested(Vec<Vec<Complex<T>>>),
}

impl<T> Complexes<T> {
    #[must_use]
    pub const fn shape(&self) -> Shape {
        match self {
            Self::Scalar(_) => Shape::Scalar,
            Self::Flat(_) => Shape::Flat,
            Self::Nested(_) => Shape::Nested,
        }
    }

    /// Number of elements at the outermost level, 1 for scalars.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Scalar(_) => 1,
            Self::Flat(v) => v.len(),
            Self::Nested(v) => v.len(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The contents of a flat collection, `None` for any other shape.
    #[must_use]
    pub fn as_flat(&self) -> Option<&[Complex<T>]> {
        match self {
            Self::Flat(v) => Some(v.as_slice()),
            _ => None,
        }
    }
}

impl<T: RealScalar> Complexes<T> {
    /// Iterate over every complex number, depth first.
    pub fn leaves(&self) -> Box<dyn Iterator<Item = &Complex<T>> + '_> {
        match self {
            Self::Scalar(z) => Box::new(std::iter::once(z)),
            Self::Flat(v) => Box::new(v.iter()),
            Self::Nested(v) => Box::new(v.iter().flatten()),
        }
    }

    /// Apply `f` to every complex number, keeping the shape.
    #[must_use]
    pub fn map_leaves(&self, mut f: impl FnMut(Complex<T>) -> Complex<T>) -> Self {
        match self {
            Self::Scalar(z) => Self::Scalar(f(*z)),
            Self::Flat(v) => Self::Flat(v.iter().copied().map(&mut f).collect_vec()),
            Self::Nested(v) => Self::Nested(
                v.iter()
                    .map(|inner| inner.iter().copied().map(&mut f).collect_vec())
                    .collect_vec(),
            ),
        }
    }
}

impl<T> From<Complex<T>> for Complexes<T> {
    fn from(value: Complex<T>) -> Self {
        Self::Scalar(value)
    }
}

impl<T> From<Vec<Complex<T>>> for Complexes<T> {
    fn from(value: Vec<Complex<T>>) -> Self {
        Self::Flat(value)
    }
}

impl<T: Clone> From<&[Complex<T>]> for Complexes<T> {
    fn from(value: &[Complex<T>]) -> Self {
        Self::Flat(value.to_vec())
    }
}

impl<T> From<Vec<Vec<Complex<T>>>> for Complexes<T> {
    fn from(value: Vec<Vec<Complex<T>>>) -> Self {
        Self::Nested(value)
    }
}

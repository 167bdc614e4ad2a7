use itertools::Itertools;
use num::Complex;

use crate::{
    util::doc_macros::{errors_empty_collection, errors_nested_shape},
    Complexes, Error, RealScalar, Result, Shape,
};

/// Magnitudes of a scalar or of a flat collection, see [`norm`].
#[derive(Clone, Debug, PartialEq)]
pub enum Norms<T> {
    Scalar(T),
    Flat(Vec<T>),
}

impl<T: RealScalar> Norms<T> {
    /// All magnitudes as a list, a scalar becomes a list of one.
    #[must_use]
    pub fn into_vec(self) -> Vec<T> {
        match self {
            Self::Scalar(x) => vec![x],
            Self::Flat(v) => v,
        }
    }
}

/// Result of [`min_norm`] and [`max_norm`].
///
/// A collection yields the extreme magnitude, but a bare complex number is
/// handed back untouched rather than replaced by its magnitude. Use
/// [`Extremum::norm`] to get a magnitude in both cases.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Extremum<T> {
    Norm(T),
    Passthrough(Complex<T>),
}

impl<T: RealScalar> Extremum<T> {
    #[must_use]
    pub fn norm(self) -> T {
        match self {
            Self::Norm(x) => x,
            Self::Passthrough(z) => z.norm(),
        }
    }
}

/// Replace every complex number by `|re| + |im|·i`, keeping the shape of the
/// input.
///
/// # Examples
/// ```
/// use rust_cplx::{abs_components, complex, Complexes};
///
/// let c = Complexes::from(vec![complex!(-1.0, 2.0), complex!(3.0, -4.0)]);
/// assert_eq!(
///     abs_components(&c),
///     Complexes::Flat(vec![complex!(1.0, 2.0), complex!(3.0, 4.0)])
/// );
/// ```
#[must_use]
pub fn abs_components<T: RealScalar>(value: &Complexes<T>) -> Complexes<T> {
    value.map_leaves(|z| Complex::new(z.re.abs(), z.im.abs()))
}

/// Euclidean magnitude `√(re²+im²)` of a complex number, or of every element
/// of a flat collection in input order.
///
/// # Examples
/// ```
/// use rust_cplx::{complex, norm, Complexes, Norms};
///
/// let c = Complexes::from(vec![complex!(3.0, 4.0), complex!(0.0, 0.0)]);
/// assert_eq!(norm(&c).unwrap(), Norms::Flat(vec![5.0, 0.0]));
/// ```
///
/// # Errors
#[doc = errors_nested_shape!()]
pub fn norm<T: RealScalar>(value: &Complexes<T>) -> Result<Norms<T>> {
    match value {
        Complexes::Scalar(z) => Ok(Norms::Scalar(z.norm())),
        Complexes::Flat(v) => Ok(Norms::Flat(v.iter().map(|z| z.norm()).collect_vec())),
        Complexes::Nested(_) => Err(Error::unsupported_shape("norm", Shape::Nested)),
    }
}

/// Reduce the magnitudes of a collection with `pick`. NaNs only win if
/// there is nothing else.
fn fold_norms<T: RealScalar>(
    values: &[Complex<T>],
    op: &'static str,
    pick: impl Fn(T, T) -> T,
) -> Result<T> {
    values
        .iter()
        .map(|z| z.norm())
        .reduce(pick)
        .ok_or(Error::EmptyCollection(op))
}

/// Smallest magnitude in a collection.
///
/// # Errors
#[doc = errors_empty_collection!()]
pub fn min_norm_of_collection<T: RealScalar>(values: &[Complex<T>]) -> Result<T> {
    fold_norms(values, "min_norm", T::min)
}

/// Largest magnitude in a collection.
///
/// # Errors
#[doc = errors_empty_collection!()]
pub fn max_norm_of_collection<T: RealScalar>(values: &[Complex<T>]) -> Result<T> {
    fold_norms(values, "max_norm", T::max)
}

/// Smallest magnitude among the elements of a flat collection.
///
/// A scalar input is returned unchanged as [`Extremum::Passthrough`], not as
/// its magnitude.
///
/// # Examples
/// ```
/// use rust_cplx::{complex, min_norm, Complexes, Extremum};
///
/// let c = Complexes::from(vec![complex!(3.0, 4.0), complex!(0.0, -1.0)]);
/// assert_eq!(min_norm(&c).unwrap(), Extremum::Norm(1.0));
///
/// let z = complex!(3.0, 4.0);
/// assert_eq!(min_norm(&Complexes::from(z)).unwrap(), Extremum::Passthrough(z));
/// ```
///
/// # Errors
#[doc = errors_empty_collection!()]
#[doc = errors_nested_shape!()]
pub fn min_norm<T: RealScalar>(value: &Complexes<T>) -> Result<Extremum<T>> {
    match value {
        Complexes::Scalar(z) => Ok(Extremum::Passthrough(*z)),
        Complexes::Flat(v) => min_norm_of_collection(v).map(Extremum::Norm),
        Complexes::Nested(_) => Err(Error::unsupported_shape("min_norm", Shape::Nested)),
    }
}

/// Largest magnitude among the elements of a flat collection.
///
/// A scalar input is returned unchanged as [`Extremum::Passthrough`], not as
/// its magnitude.
///
/// # Errors
#[doc = errors_empty_collection!()]
#[doc = errors_nested_shape!()]
pub fn max_norm<T: RealScalar>(value: &Complexes<T>) -> Result<Extremum<T>> {
    match value {
        Complexes::Scalar(z) => Ok(Extremum::Passthrough(*z)),
        Complexes::Flat(v) => max_norm_of_collection(v).map(Extremum::Norm),
        Complexes::Nested(_) => Err(Error::unsupported_shape("max_norm", Shape::Nested)),
    }
}

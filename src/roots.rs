use itertools::Itertools;
use num::Complex;

use crate::{
    util::{casting::i32_to_scalar, doc_macros::errors_nested_shape},
    Complexes, Error, RealScalar, Result, Shape,
};

/// The `n` n-th roots of `z`, by increasing angle offset from the principal
/// root.
///
/// With `z = r·e^(iθ)` and `θ` the principal argument in `(-π, π]`, the
/// `k`-th root is `r^(1/n)·e^(i(θ/n + 2πk/n))`.
///
/// # Examples
/// ```
/// use rust_cplx::{complex, roots_of};
///
/// let roots = roots_of(complex!(-1.0, 0.0), 2).unwrap();
/// assert!((roots[0] - complex!(0.0, 1.0)).norm() < 1E-15);
/// assert!((roots[1] - complex!(0.0, -1.0)).norm() < 1E-15);
/// ```
///
///
/// A negative `n` has no `k` in `[0, n)` and yields no roots.
///
/// # Errors
/// - `ZeroDegree`: `n` is zero.
pub fn roots_of<T: RealScalar>(z: Complex<T>, n: i32) -> Result<Vec<Complex<T>>> {
    if n == 0 {
        return Err(Error::ZeroDegree);
    }
    let n_t = i32_to_scalar::<T>(n);
    let two = T::one() + T::one();
    let (r, theta) = z.to_polar();
    let r_n = r.powf(n_t.recip());
    Ok((0..n)
        .map(|k| {
            let k = i32_to_scalar::<T>(k);
            Complex::from_polar(r_n, theta / n_t + two * k * T::PI() / n_t)
        })
        .collect_vec())
}

/// Compute the `n`-th roots of a single complex number or of every element of
/// a flat collection.
///
/// For `n == 1` the input is returned as is, whatever its shape. Otherwise a
/// scalar becomes a flat list of its `n` roots (see [`roots_of`]) and a flat
/// list becomes a nested list holding the roots of each element, in input
/// order. A negative `n` yields no roots, so an empty flat list for a scalar
/// and a list of empty lists for a flat collection.
///
/// # Examples
/// ```
/// use rust_cplx::{complex, nth_roots, Complexes};
///
/// let roots = nth_roots(&Complexes::from(complex!(1.0, 0.0)), 2).unwrap();
/// let Complexes::Flat(roots) = roots else { unreachable!() };
/// assert!((roots[0] - complex!(1.0, 0.0)).norm() < 1E-15);
/// assert!((roots[1] - complex!(-1.0, 0.0)).norm() < 1E-15);
/// ```
///
/// # Errors
/// - `ZeroDegree`: `n` is zero.
#[doc = errors_nested_shape!()]
pub fn nth_roots<T: RealScalar>(value: &Complexes<T>, n: i32) -> Result<Complexes<T>> {
    log::trace!("computing roots {{n: {n}, shape: {}}}", value.shape());
    if n == 0 {
        return Err(Error::ZeroDegree);
    }
    if n == 1 {
        return Ok(value.clone());
    }
    match value {
        Complexes::Scalar(z) => roots_of(*z, n).map(Complexes::Flat),
        Complexes::Flat(v) => v
            .iter()
            .map(|z| roots_of(*z, n))
            .collect::<Result<Vec<_>>>()
            .map(Complexes::Nested),
        Complexes::Nested(_) => Err(Error::unsupported_shape("nth_roots", Shape::Nested)),
    }
}

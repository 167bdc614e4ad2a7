use num::{Complex, Num};

use crate::{util::casting::usize_to_scalar, Complexes, RealScalar};

/// Number of decimals kept by [`round_complex`] when the caller has no
/// preference.
pub const DEFAULT_DIGITS: i32 = 10;

/// Round to the nearest integer, ties go to the even neighbour
fn round_half_even<T: RealScalar>(x: T) -> T {
    let two = T::one() + T::one();
    let rounded = x.round();
    if (rounded - x).abs() == two.recip() {
        two * (x / two).round()
    } else {
        rounded
    }
}

/// Past this many decimals every finite `f64` is already exact.
const EXACT_DIGITS: i32 = 1100;

/// Round a single real number to `digits` decimals. Negative `digits` round
/// to the left of the decimal point.
///
/// Positive `digits` go through the exact decimal expansion of `x`, so a value
/// stored just above or below a decimal tie rounds the way its stored value
/// says, not the way `x·10^digits` happens to round.
fn round_component<T: RealScalar>(x: T, digits: i32) -> T {
    if !x.is_finite() {
        return x;
    }
    if digits >= 0 {
        let Ok(precision) = usize::try_from(digits) else {
            return x;
        };
        if digits > EXACT_DIGITS {
            return x;
        }
        let decimal = format!("{x:.precision$}");
        return <T as Num>::from_str_radix(&decimal, 10).unwrap_or(x);
    }
    let scale = usize_to_scalar::<T>(10).powi(digits.saturating_abs());
    if !scale.is_finite() {
        return x * T::zero();
    }
    round_half_even(x / scale) * scale
}

/// Round the real and imaginary parts of `z` independently to `digits`
/// decimals.
///
/// # Examples
/// ```
/// use rust_cplx::{complex, round_scalar};
///
/// assert_eq!(round_scalar(complex!(0.125, -2.5), 2), complex!(0.12, -2.5));
/// assert_eq!(round_scalar(complex!(0.125, -2.5), 0), complex!(0.0, -2.0));
/// ```
#[must_use]
pub fn round_scalar<T: RealScalar>(z: Complex<T>, digits: i32) -> Complex<T> {
    Complex::new(round_component(z.re, digits), round_component(z.im, digits))
}

/// Round every complex number in `value` to `digits` decimals, keeping the
/// shape of the input.
///
/// Each component is rounded by its exact stored value and exact ties go to
/// the even neighbour, so `0.45` (stored just above the tie) becomes `0.5`
/// and `2.675` (stored just below) becomes `2.67`. Use [`DEFAULT_DIGITS`] if
/// you don't have a preference.
///
/// # Examples
/// ```
/// use rust_cplx::{complex, round_complex, Complexes};
///
/// let c = Complexes::from(complex!(1.23456789012, 3.98765432109));
/// assert_eq!(round_complex(&c, 3), Complexes::Scalar(complex!(1.235, 3.988)));
/// ```
#[must_use]
pub fn round_complex<T: RealScalar>(value: &Complexes<T>, digits: i32) -> Complexes<T> {
    log::trace!("rounding {} input to {digits} digits", value.shape());
    value.map_leaves(|z| round_scalar(z, digits))
}

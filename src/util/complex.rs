// internal utilities for dealing with Complex annoyiances

use std::cmp::Ordering;

use num::{Complex, Zero};

use crate::RealScalar;

// neg operator that keeps zero components positive, unlike std::ops::Neg
pub(crate) fn c_neg<T: RealScalar>(x: Complex<T>) -> Complex<T> {
    Complex::<T>::zero() - x
}

// sort a vector of complex numbers lexicographically, using their real part first
pub(crate) fn complex_sort_mut<T: RealScalar>(v: &mut [Complex<T>]) {
    v.sort_by(|a, b| {
        let re_ord = a.re.partial_cmp(&b.re).unwrap_or(Ordering::Equal);
        if re_ord != Ordering::Equal {
            return re_ord;
        }
        a.im.partial_cmp(&b.im).unwrap_or(Ordering::Equal)
    });
}

/// True if the imaginary part is zero (of either sign)
pub(crate) fn is_real<T: RealScalar>(c: &Complex<T>) -> bool {
    c.im.is_zero()
}

/// formatting for Complex coefficients, `(re + im*I)` the way computer algebra
/// systems print them, because the `Display` impl of `Complex` is not meant
/// for expressions
pub(crate) fn complex_fmt<T: RealScalar>(c: &Complex<T>) -> String {
    let r = c.re;
    let i = c.im;
    let sign = if i.is_sign_negative() { '-' } else { '+' };
    let i = i.abs();
    let im = if i.is_one() {
        "I".to_string()
    } else {
        format!("{i}*I")
    };
    if r.is_zero() {
        if sign == '-' {
            format!("-{im}")
        } else {
            im
        }
    } else {
        format!("({r} {sign} {im})")
    }
}

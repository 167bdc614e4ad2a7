//! floating point utilities

/// Makes a degenerate float normal again by either clamping it or replacing
/// NaN with zero.
pub fn f64_make_normal(x: f64) -> f64 {
    if x.is_nan() {
        return 0.0;
    }

    if x.is_infinite() && x.is_sign_positive() {
        return f64::MAX;
    }

    if x.is_infinite() && x.is_sign_negative() {
        return f64::MIN;
    }

    if x.is_subnormal() {
        return 0.0;
    }

    x
}

/// If a float is subnormal or zero, bump it to the nearest normal number or
/// `MIN_POSITIVE` if it's zero.
pub fn f64_make_nonzero(x: f64) -> f64 {
    let x = f64_make_normal(x);
    if x.abs() < f64::MIN_POSITIVE {
        f64::MIN_POSITIVE.copysign(x)
    } else {
        x
    }
}

#[cfg(test)]
mod test {
    use super::{f64_make_nonzero, f64_make_normal};

    #[test]
    fn normal() {
        assert_eq!(f64_make_normal(f64::NAN), 0.0);
        assert_eq!(f64_make_normal(f64::NEG_INFINITY), f64::MIN);
        assert_eq!(f64_make_normal(1.5), 1.5);
    }

    #[test]
    fn nonzero() {
        assert_eq!(f64_make_nonzero(0.0), f64::MIN_POSITIVE);
        assert_eq!(f64_make_nonzero(-2.0), -2.0);
    }
}

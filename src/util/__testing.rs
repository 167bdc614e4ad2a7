//! Testing utilities, do not depend on any of these in production!

use fastrand::Rng;
use num::{complex::Complex64, Complex};

use crate::util::float::{f64_make_nonzero, f64_make_normal};

struct RandStreamF64 {
    state: Rng,
}

impl RandStreamF64 {
    fn new(seed: u64) -> Self {
        Self {
            state: Rng::with_seed(seed),
        }
    }
}

impl Iterator for RandStreamF64 {
    type Item = f64;

    fn next(&mut self) -> Option<Self::Item> {
        // NOTE: I think fastrand::f64 does not emit subnormals, but just in case
        Some(f64_make_nonzero(self.state.f64()))
    }
}

/// Infinite stream of complex numbers uniformly distributed in a rectangle
pub struct RandStreamC64Cartesian {
    real_stream: RandStreamF64,
    min_re: f64,
    max_re: f64,
    min_im: f64,
    max_im: f64,
}

impl RandStreamC64Cartesian {
    #[must_use]
    pub fn new(seed: u64, min_re: f64, max_re: f64, min_im: f64, max_im: f64) -> Self {
        assert!(
            min_re <= max_re && min_im <= max_im,
            "minimum should be smaller or equal to maximum"
        );
        let real_stream = RandStreamF64::new(seed);
        Self {
            real_stream,
            min_re,
            max_re,
            min_im,
            max_im,
        }
    }
}

impl Iterator for RandStreamC64Cartesian {
    type Item = Complex64;

    fn next(&mut self) -> Option<Self::Item> {
        let re = (self.real_stream.next()?).mul_add(self.max_re - self.min_re, self.min_re);
        let im = (self.real_stream.next()?).mul_add(self.max_im - self.min_im, self.min_im);
        Some(Complex::new(f64_make_normal(re), f64_make_normal(im)))
    }
}

/// Infinite stream of complex numbers in an annulus sector. Angles are given
/// as fractions of a full turn.
pub struct RandStreamC64Polar {
    real_stream: RandStreamF64,
    min_radius: f64,
    max_radius: f64,
    min_angle: f64,
    max_angle: f64,
}

impl RandStreamC64Polar {
    #[must_use]
    pub fn new(
        seed: u64,
        min_radius: f64,
        max_radius: f64,
        min_angle: f64,
        max_angle: f64,
    ) -> Self {
        assert!(
            0.0 <= min_angle && max_angle <= 1.0,
            "angles should be specified in the range [0,1]"
        );
        assert!(
            min_angle <= max_angle,
            "min_angle should be smaller or equal to max_angle"
        );
        assert!(0.0 <= min_radius, "radius should be non-negative");
        assert!(
            min_radius <= max_radius,
            "min_radius should be smaller or equal to max_radius"
        );
        Self {
            real_stream: RandStreamF64::new(seed),
            min_radius,
            max_radius,
            min_angle,
            max_angle,
        }
    }
}

impl Iterator for RandStreamC64Polar {
    type Item = Complex64;

    fn next(&mut self) -> Option<Self::Item> {
        let r =
            (self.real_stream.next()?).mul_add(self.max_radius - self.min_radius, self.min_radius);
        let a = (self.real_stream.next()?).mul_add(self.max_angle - self.min_angle, self.min_angle);
        debug_assert!(r >= 0.0);
        debug_assert!((0.0..=1.0).contains(&a));
        let c = Complex::from_polar(r, a * std::f64::consts::TAU);
        Some(Complex::new(f64_make_normal(c.re), f64_make_normal(c.im)))
    }
}

/// Check that two lists contain the same complex numbers up to `tol`, in any
/// order
#[must_use]
pub fn check_roots(roots1: Vec<Complex64>, mut roots2: Vec<Complex64>, tol: f64) -> bool {
    if roots1.len() != roots2.len() {
        return false;
    }

    for r1 in roots1 {
        let mut best_idx = 0;
        let mut best_d = f64::MAX;
        for (i, r2) in roots2.iter().enumerate() {
            let d = (r1 - r2).norm();
            if d < best_d {
                best_idx = i;
                best_d = d;
            }
        }
        if best_d > tol {
            return false;
        }
        roots2.remove(best_idx);
    }
    true
}

/// Check that two lists contain the same complex numbers up to `tol`, in the
/// same order
#[must_use]
pub fn check_almost_eq(lhs: &[Complex64], rhs: &[Complex64], tol: f64) -> bool {
    lhs.len() == rhs.len() && lhs.iter().zip(rhs).all(|(a, b)| (a - b).norm() <= tol)
}

#[cfg(test)]
mod test {
    use super::{check_almost_eq, check_roots, RandStreamC64Cartesian, RandStreamC64Polar};

    #[test]
    fn polar_stays_in_annulus() {
        for z in RandStreamC64Polar::new(1, 0.5, 2.0, 0.0, 1.0).take(100) {
            let r = z.norm();
            assert!((0.5 - 1E-12..=2.0 + 1E-12).contains(&r), "{r}");
        }
    }

    #[test]
    fn cartesian_stays_in_rectangle() {
        for z in RandStreamC64Cartesian::new(2, -1.0, 1.0, 3.0, 4.0).take(100) {
            assert!((-1.0..=1.0).contains(&z.re));
            assert!((3.0..=4.0).contains(&z.im));
        }
    }

    #[test]
    fn roots_in_any_order() {
        let a = vec![complex!(1.0, 0.0), complex!(-1.0, 0.0)];
        let b = vec![complex!(-1.0, 1E-16), complex!(1.0, 0.0)];
        assert!(check_roots(a.clone(), b.clone(), 1E-12));
        assert!(!check_almost_eq(&a, &b, 1E-12));
    }
}

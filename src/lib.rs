//! Helpers for manipulating collections of complex numbers.
//!
//! Every operation accepts a [`Complexes`] value, which is either a single
//! complex number, a flat list of them, or a list of lists. Shape-preserving
//! operations ([`round_complex`], [`abs_components`]) return the same shape,
//! shape-reducing ones ([`norm`], [`min_norm`], [`max_norm`]) collapse it.
//!
//! ```
//! use rust_cplx::{complex, polynomial_from_roots, Complexes};
//!
//! let roots = Complexes::from(vec![complex!(1.0, 0.0), complex!(-1.0, 0.0)]);
//! let p = polynomial_from_roots(&roots).unwrap();
//! assert_eq!(p.to_string(), "x**2 - 1");
//! ```
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

/// Build a [`Complex`] from one (real) or two (real, imaginary) components.
///
/// ```
/// use rust_cplx::{complex, Complex};
///
/// assert_eq!(complex!(1.0, 2.0), Complex::new(1.0, 2.0));
/// assert_eq!(complex!(3.0), Complex::new(3.0, 0.0));
/// ```
#[macro_export]
macro_rules! complex {
    ($re:expr, $im:expr) => {
        $crate::Complex::new($re, $im)
    };
    ($re:expr) => {
        $crate::Complex::from($re)
    };
}

pub use num;
pub use num::Complex;

mod scalar;
pub use scalar::RealScalar;

mod error;
pub use error::{Error, Result};

mod shape;
pub use shape::{Complexes, Shape};

mod round;
pub use round::{round_complex, round_scalar, DEFAULT_DIGITS};

mod roots;
pub use roots::{nth_roots, roots_of};

mod norm;
pub use norm::{
    abs_components, max_norm, max_norm_of_collection, min_norm, min_norm_of_collection, norm,
    Extremum, Norms,
};

pub mod plot;
pub use plot::{plot_vectors, VectorSink};

mod poly;
pub use poly::{polynomial_from_roots, Poly};

mod util;

// re-exported for integration tests and benches, not part of the API
#[doc(hidden)]
pub use util::__testing;

pub type Poly32 = Poly<f32>;
pub type Poly64 = Poly<f64>;

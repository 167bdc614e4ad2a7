use std::{
    fmt::{self, Display},
    ops::{Add, Mul},
};

use itertools::Itertools;
use num::{Complex, One, Zero};

use crate::{
    util::{
        complex::{c_neg, complex_fmt, complex_sort_mut, is_real},
        doc_macros::errors_nested_shape,
        linalg::convolve_1d,
    },
    Complexes, Error, RealScalar, Result, Shape,
};

/// Univariate polynomial in `x` with complex coefficients, stored from the
/// least significant term upwards.
///
/// Polynomials are always normalized: there are no trailing zero
/// coefficients, and the zero polynomial is the single coefficient `0`.
#[derive(Clone, Debug, PartialEq)]
pub struct Poly<T: RealScalar>(Vec<Complex<T>>);

impl<T: RealScalar> Poly<T> {
    /// Create a polynomial from coefficients in ascending order of degree
    ///
    /// # Examples
    /// ```
    /// use rust_cplx::{complex, Poly};
    ///
    /// let p = Poly::new(&[complex!(-1.0), complex!(0.0), complex!(1.0), complex!(0.0)]);
    /// assert_eq!(p.degree(), 2);
    /// assert_eq!(p.to_string(), "x**2 - 1");
    /// ```
    #[must_use]
    pub fn new(coeffs: &[Complex<T>]) -> Self {
        Self(coeffs.to_owned()).normalize()
    }

    /// The monic linear factor `x - root`
    #[must_use]
    pub fn linear_factor(root: Complex<T>) -> Self {
        Self::new(&[c_neg(root), Complex::one()])
    }

    /// Monic polynomial from its complex roots, expanded into a sum of
    /// monomials.
    ///
    /// # Examples
    /// ```
    /// use rust_cplx::{complex, Poly};
    ///
    /// let p = Poly::from_roots(&[complex!(-1.0, 0.0), complex!(0.0, 0.0), complex!(1.0, 0.0)]);
    /// assert_eq!(
    ///     p,
    ///     Poly::new(&[complex!(0.0), complex!(-1.0), complex!(0.0), complex!(1.0)])
    /// );
    /// ```
    #[must_use]
    pub fn from_roots(roots: &[Complex<T>]) -> Self {
        if roots.is_empty() {
            return Self::one();
        }

        let mut roots = roots.to_owned();
        complex_sort_mut(roots.as_mut_slice());

        roots
            .into_iter()
            .map(Self::linear_factor)
            .fold(Self::one(), |acc, x| acc * x)
    }

    /// The degree of the polynomial. The zero polynomial has degree `-1` by
    /// convention.
    #[must_use]
    pub fn degree(&self) -> i64 {
        if self.is_zero() {
            return -1;
        }
        i64::try_from(self.degree_raw()).unwrap_or(i64::MAX)
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Complex<T>] {
        self.0.as_slice()
    }

    /// Iterate over coefficients, from the least significant
    pub fn iter(&self) -> std::slice::Iter<'_, Complex<T>> {
        self.0.iter()
    }

    #[must_use]
    pub fn to_vec(&self) -> Vec<Complex<T>> {
        self.0.clone()
    }

    /// The coefficient of the highest degree term
    #[must_use]
    pub fn leading_coeff(&self) -> Complex<T> {
        self.0[self.0.len() - 1]
    }

    #[must_use]
    pub fn is_monic(&self) -> bool {
        self.leading_coeff().is_one()
    }

    /// Evaluate the polynomial at a single value of `x`.
    ///
    /// ```
    /// use rust_cplx::{complex, Poly};
    ///
    /// let p = Poly::new(&[complex!(1.0), complex!(2.0), complex!(3.0)]);
    /// assert_eq!(p.eval(complex!(1.0)), complex!(6.0));
    /// ```
    #[must_use]
    pub fn eval(&self, x: Complex<T>) -> Complex<T> {
        // Horner's method
        self.0
            .iter()
            .rev()
            .fold(Complex::zero(), |acc, c| acc * x + c)
    }

    fn degree_raw(&self) -> usize {
        self.0.len() - 1
    }

    fn is_normalized(&self) -> bool {
        match self.0.len() {
            0 => false,
            // a constant is always normalized, as it may be just a constant zero
            1 => true,
            n => !self.0[n - 1].is_zero(),
        }
    }

    fn normalize(mut self) -> Self {
        if self.is_normalized() {
            return self;
        }
        while self.0.last().is_some_and(Zero::is_zero) {
            self.0.pop();
        }
        if self.0.is_empty() {
            self.0.push(Complex::zero());
        }

        // post-condition: polynomial is now normalized
        debug_assert!(self.is_normalized());
        self
    }
}

/// Build the monic polynomial whose roots are the given complex numbers.
///
/// A flat collection yields the expanded product `∏(x - rootᵢ)`, of degree
/// equal to the number of roots; an empty one yields the constant `1`. A
/// single complex number yields the linear factor `x - value`.
///
/// # Examples
/// ```
/// use rust_cplx::{complex, polynomial_from_roots, Complexes};
///
/// let p = polynomial_from_roots(&Complexes::from(complex!(2.0, 0.0))).unwrap();
/// assert_eq!(p.to_string(), "x - 2");
///
/// let roots = Complexes::from(vec![complex!(2.0, 0.0), complex!(3.0, 0.0)]);
/// let p = polynomial_from_roots(&roots).unwrap();
/// assert_eq!(p.to_string(), "x**2 - 5*x + 6");
/// ```
///
/// # Errors
#[doc = errors_nested_shape!()]
pub fn polynomial_from_roots<T: RealScalar>(value: &Complexes<T>) -> Result<Poly<T>> {
    log::trace!("expanding polynomial from {} roots", value.shape());
    match value {
        Complexes::Scalar(z) => Ok(Poly::linear_factor(*z)),
        Complexes::Flat(v) => Ok(Poly::from_roots(v)),
        Complexes::Nested(_) => Err(Error::unsupported_shape(
            "polynomial_from_roots",
            Shape::Nested,
        )),
    }
}

impl<T: RealScalar> Add<Self> for Poly<T> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        let (mut longest, shortest) = if self.0.len() >= rhs.0.len() {
            (self.0, rhs.0)
        } else {
            (rhs.0, self.0)
        };
        longest
            .iter_mut()
            .zip(shortest.iter())
            .for_each(|(l, r)| *l = *l + r);
        Self(longest).normalize()
    }
}

impl<T: RealScalar> Mul<Self> for Poly<T> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        if self.is_zero() || rhs.is_zero() {
            return Self::zero();
        }
        if self.is_one() {
            return rhs;
        }
        if rhs.is_one() {
            return self;
        }
        Self(convolve_1d(&self.0, &rhs.0)).normalize()
    }
}

impl<T: RealScalar> Mul<Complex<T>> for Poly<T> {
    type Output = Self;

    fn mul(mut self, rhs: Complex<T>) -> Self::Output {
        self.0.iter_mut().for_each(|c| *c = *c * rhs);
        self.normalize()
    }
}

impl<T: RealScalar> Zero for Poly<T> {
    fn zero() -> Self {
        Self(vec![Complex::zero()])
    }

    fn is_zero(&self) -> bool {
        self.0.len() == 1 && self.0[0].is_zero()
    }
}

impl<T: RealScalar> One for Poly<T> {
    fn one() -> Self {
        Self(vec![Complex::one()])
    }

    fn is_one(&self) -> bool {
        self.0.len() == 1 && self.0[0].is_one()
    }
}

impl<'a, T: RealScalar> IntoIterator for &'a Poly<T> {
    type IntoIter = std::slice::Iter<'a, Complex<T>>;
    type Item = &'a Complex<T>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// A single term, without its sign. Returns whether the coefficient is
/// negative along with the text.
fn term_fmt<T: RealScalar>(c: &Complex<T>, degree: usize) -> (bool, String) {
    let monomial = match degree {
        0 => String::new(),
        1 => "x".to_string(),
        k => format!("x**{k}"),
    };
    let (negative, coeff) = if is_real(c) {
        (c.re.is_sign_negative(), format!("{}", c.re.abs()))
    } else if c.re.is_zero() {
        (
            c.im.is_sign_negative(),
            complex_fmt(&Complex::new(T::zero(), c.im.abs())),
        )
    } else {
        (false, complex_fmt(c))
    };
    let text = if monomial.is_empty() {
        coeff
    } else if coeff == "1" {
        monomial
    } else {
        format!("{coeff}*{monomial}")
    };
    (negative, text)
}

/// Expanded canonical form, highest degree first, e.g. `x**2 - 2*x + 1`.
impl<T: RealScalar> Display for Poly<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_zero() {
            return write!(f, "0");
        }
        let terms = self
            .iter()
            .enumerate()
            .rev()
            .filter(|(_, c)| !c.is_zero())
            .map(|(k, c)| term_fmt(c, k))
            .collect_vec();
        for (i, (negative, text)) in terms.into_iter().enumerate() {
            match (i, negative) {
                (0, false) => write!(f, "{text}")?,
                (0, true) => write!(f, "-{text}")?,
                (_, false) => write!(f, " + {text}")?,
                (_, true) => write!(f, " - {text}")?,
            }
        }
        Ok(())
    }
}

//! Polynomials with prescribed roots are the starting point of many filter
//! design recipes. Here we place the poles of a 4th order Butterworth filter
//! on the left half of the unit circle, round away the floating point noise
//! and print the expanded denominator.

use rust_cplx::{nth_roots, polynomial_from_roots, round_complex, Complex, Complexes};

fn main() -> anyhow::Result<()> {
    // the 8th roots of -1, the left half of which are the Butterworth poles
    let Complexes::Flat(roots) = nth_roots(&Complexes::from(Complex::new(-1.0, 0.0)), 8)? else {
        unreachable!("roots of a scalar are a flat list");
    };
    let poles: Vec<Complex<f64>> = roots.into_iter().filter(|z| z.re < 0.0).collect();

    let poly = polynomial_from_roots(&Complexes::from(poles))?;
    let coeffs = round_complex(&Complexes::from(poly.to_vec()), 6);
    println!("raw:     {poly}");
    if let Complexes::Flat(coeffs) = coeffs {
        println!("rounded: {}", rust_cplx::Poly::new(&coeffs));
    }
    Ok(())
}

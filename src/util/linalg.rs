use num::{Complex, Zero};

use crate::RealScalar;

/// Full discrete convolution, i.e. the coefficients of the product of two
/// polynomials given their coefficients
pub(crate) fn convolve_1d<T: RealScalar>(
    input: &[Complex<T>],
    kernel: &[Complex<T>],
) -> Vec<Complex<T>> {
    let input_len = input.len();
    let kernel_len = kernel.len();

    if input_len == 0 || kernel_len == 0 {
        return vec![];
    }
    let output_len = input_len + kernel_len - 1;

    let mut output = vec![Complex::zero(); output_len];
    for (i, a) in input.iter().enumerate() {
        for (j, b) in kernel.iter().enumerate() {
            output[i + j] = output[i + j] + a * b;
        }
    }
    output
}

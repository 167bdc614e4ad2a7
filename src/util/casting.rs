use num::cast;

use crate::RealScalar;

/// Cast with loss of precision, explicitly clamping out of bounds values instead
/// of panicking (also shuts up clippy 📎)
pub(crate) fn usize_to_scalar<T: RealScalar>(x: usize) -> T {
    cast(x).unwrap_or_else(T::infinity)
}

/// Lossless for every degree a root can reasonably have
pub(crate) fn i32_to_scalar<T: RealScalar>(x: i32) -> T {
    cast(x).unwrap_or_else(T::infinity)
}

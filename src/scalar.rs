use std::fmt::{Debug, Display};

use num::{traits::FloatConst, Float, FromPrimitive};

/// The real component type of the complex numbers handled by this crate.
///
/// Implemented for every floating point type that can be built from
/// primitives and printed, which in practice means `f32` and `f64`.
pub trait RealScalar:
    Float + FloatConst + FromPrimitive + Debug + Display + Default + Send + Sync + 'static
{
}

impl<T: Float + FloatConst + FromPrimitive + Debug + Display + Default + Send + Sync + 'static>
    RealScalar for T
{
}

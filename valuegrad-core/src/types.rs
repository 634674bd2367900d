use crate::error::ValueGradError;
use num_traits::{Float, FromPrimitive, NumAssign};
use std::fmt::{Debug, Display, LowerExp};

/// Numeric types a computation graph can hold.
///
/// Blanket-implemented for every floating-point type satisfying the bounds,
/// which in practice means `f32` and `f64`. `f64` is the reference type used
/// throughout the tests and examples.
pub trait Scalar:
    Float // Num + Copy + NumCast + comparisons + transcendental functions
    + NumAssign // +=, -=, ... used during gradient accumulation
    + FromPrimitive
    + Debug
    + Display
    + LowerExp
    + Default
    + Send
    + Sync
    + 'static
{
}

impl<T> Scalar for T where
    T: Float + NumAssign + FromPrimitive + Debug + Display + LowerExp + Default + Send + Sync + 'static
{
}

/// Converts an `f64` hyperparameter or constant into the graph's scalar type.
pub(crate) fn scalar_from_f64<T: Scalar>(value: f64, what: &str) -> Result<T, ValueGradError> {
    T::from_f64(value).ok_or_else(|| {
        ValueGradError::ConversionError(format!(
            "{} = {} is not representable in the graph scalar type",
            what, value
        ))
    })
}

/// Converts a count into the graph's scalar type.
pub(crate) fn scalar_from_usize<T: Scalar>(count: usize, what: &str) -> Result<T, ValueGradError> {
    T::from_usize(count).ok_or_else(|| {
        ValueGradError::ConversionError(format!(
            "{} = {} is not representable in the graph scalar type",
            what, count
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn requires_scalar<T: Scalar>(value: T) -> T {
        value
    }

    #[test]
    fn test_scalar_is_implemented_for_floats() {
        assert_eq!(requires_scalar(1.5f32), 1.5f32);
        assert_eq!(requires_scalar(2.5f64), 2.5f64);
    }

    #[test]
    fn test_scalar_conversions() {
        let lr: f32 = scalar_from_f64(0.5, "lr").unwrap();
        assert_eq!(lr, 0.5f32);
        let n: f64 = scalar_from_usize(4, "count").unwrap();
        assert_eq!(n, 4.0);
    }
}

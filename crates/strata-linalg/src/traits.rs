use std::ops;

/// Types that have a "zero" value (an additive identity).
pub trait Zero {
    /// The *0* value of this type.
    const ZERO: Self;
}

/// Types that have a "one" value (a multiplicative identity).
pub trait One {
    /// The *1* value of this type.
    const ONE: Self;
}

/// Arithmetic with a result that does not depend on the build profile.
///
/// Integer implementations wrap around at the boundary of the type (two's complement), in debug
/// and release builds alike. Floating point implementations are the plain IEEE 754 operators.
/// Integer division by zero still panics.
///
/// Every container operation computes through these methods.
pub trait WrappingOps: Copy {
    fn wrapping_add(self, rhs: Self) -> Self;
    fn wrapping_sub(self, rhs: Self) -> Self;
    fn wrapping_mul(self, rhs: Self) -> Self;
    fn wrapping_div(self, rhs: Self) -> Self;
    fn wrapping_neg(self) -> Self;
}

/// A trait for numeric types that support basic arithmetic operations.
///
/// This is the minimal set of operations every container element needs. The [`Scalar`] trait
/// narrows it down to the three element kinds this crate supports.
///
/// [`Scalar`]: crate::Scalar
pub trait Number:
    Zero
    + One
    + WrappingOps
    + ops::Neg<Output = Self>
    + ops::Add<Output = Self>
    + ops::Sub<Output = Self>
    + ops::Mul<Output = Self>
    + ops::Div<Output = Self>
    + PartialEq
    + Copy
{
}
impl<T> Number for T where
    T: Zero
        + One
        + WrappingOps
        + ops::Neg<Output = Self>
        + ops::Add<Output = Self>
        + ops::Sub<Output = Self>
        + ops::Mul<Output = Self>
        + ops::Div<Output = Self>
        + PartialEq
        + Copy
{
}

macro_rules! zero_one {
    ($($ty:ty => $zero:literal, $one:literal;)+) => {
        $(
            impl Zero for $ty {
                const ZERO: Self = $zero;
            }

            impl One for $ty {
                const ONE: Self = $one;
            }
        )+
    };
}

zero_one! {
    i32 => 0, 1;
    f32 => 0.0, 1.0;
    f64 => 0.0, 1.0;
}

impl WrappingOps for i32 {
    #[inline]
    fn wrapping_add(self, rhs: Self) -> Self {
        i32::wrapping_add(self, rhs)
    }

    #[inline]
    fn wrapping_sub(self, rhs: Self) -> Self {
        i32::wrapping_sub(self, rhs)
    }

    #[inline]
    fn wrapping_mul(self, rhs: Self) -> Self {
        i32::wrapping_mul(self, rhs)
    }

    #[inline]
    fn wrapping_div(self, rhs: Self) -> Self {
        i32::wrapping_div(self, rhs)
    }

    #[inline]
    fn wrapping_neg(self) -> Self {
        i32::wrapping_neg(self)
    }
}

macro_rules! float_ops {
    ($($ty:ty),+) => {
        $(
            impl WrappingOps for $ty {
                #[inline]
                fn wrapping_add(self, rhs: Self) -> Self {
                    self + rhs
                }

                #[inline]
                fn wrapping_sub(self, rhs: Self) -> Self {
                    self - rhs
                }

                #[inline]
                fn wrapping_mul(self, rhs: Self) -> Self {
                    self * rhs
                }

                #[inline]
                fn wrapping_div(self, rhs: Self) -> Self {
                    self / rhs
                }

                #[inline]
                fn wrapping_neg(self) -> Self {
                    -self
                }
            }
        )+
    };
}

float_ops!(f32, f64);

/// Sums the pairwise products of two equally long element sequences.
///
/// Callers are responsible for checking that both sequences have the same length. Integer sums
/// wrap on overflow.
pub(crate) fn sum_of_products<T: Number>(
    lhs: impl IntoIterator<Item = T>,
    rhs: impl IntoIterator<Item = T>,
) -> T {
    lhs.into_iter()
        .zip(rhs)
        .fold(T::ZERO, |acc, (a, b)| acc.wrapping_add(a.wrapping_mul(b)))
}

//! The numeric promotion tower.
//!
//! Every container in this crate stores elements of exactly one [`ElementKind`]. When two
//! operands of different kinds are combined, the result uses the wider of the two kinds, following
//! the total order `Integer < Single < Double`.
//!
//! At the type level this is expressed by the [`Promote`] trait: `A: Promote<B>` names the element
//! type that results from combining an `A` with a `B`, and provides the conversions of both
//! operands into it. [`Promoted<A, B>`] is a shorthand for that type.

use std::fmt;

use crate::traits::{sum_of_products, Number};

/// The element kinds supported by the containers in this crate, ordered by precision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ElementKind {
    /// 32-bit signed integers ([`i32`]).
    Integer,
    /// Single-precision floating point numbers ([`f32`]).
    Single,
    /// Double-precision floating point numbers ([`f64`]).
    Double,
}

impl ElementKind {
    /// All element kinds, from narrowest to widest.
    pub const ALL: [Self; 3] = [Self::Integer, Self::Single, Self::Double];

    /// Returns the kind of the result of combining operands of kinds `self` and `other`.
    ///
    /// This is the wider of the two kinds. Combining a kind with itself yields that same kind.
    ///
    /// # Examples
    ///
    /// ```
    /// # use strata_linalg::*;
    /// assert_eq!(ElementKind::Integer.combine(ElementKind::Single), ElementKind::Single);
    /// assert_eq!(ElementKind::Double.combine(ElementKind::Single), ElementKind::Double);
    /// assert_eq!(ElementKind::Integer.combine(ElementKind::Integer), ElementKind::Integer);
    /// ```
    pub const fn combine(self, other: Self) -> Self {
        if (other as u8) > (self as u8) {
            other
        } else {
            self
        }
    }

    /// Returns the kind of the element type `T`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use strata_linalg::*;
    /// assert_eq!(ElementKind::of::<f32>(), ElementKind::Single);
    /// ```
    pub const fn of<T: Scalar>() -> Self {
        T::KIND
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Integer => "integer",
            Self::Single => "single",
            Self::Double => "double",
        })
    }
}

mod sealed {
    pub trait Sealed {}
    impl Sealed for i32 {}
    impl Sealed for f32 {}
    impl Sealed for f64 {}
}

/// An element type of one of the supported [`ElementKind`]s.
///
/// This trait is sealed; it is implemented for [`i32`], [`f32`] and [`f64`].
///
/// The conversion methods behave like `as` casts: widening is exact for the values the narrower
/// kind can represent (integers above 2<sup>24</sup> lose precision as [`f32`]), and narrowing to
/// [`i32`] truncates toward zero and saturates, mapping NaN to 0. None of them ever fail.
pub trait Scalar:
    Number + PartialOrd + Default + fmt::Debug + fmt::Display + Send + Sync + 'static + sealed::Sealed
{
    /// The element kind of this type.
    const KIND: ElementKind;

    fn to_i32(self) -> i32;
    fn to_f32(self) -> f32;
    fn to_f64(self) -> f64;
}

/// Element types that can be combined with elements of type `Rhs`.
///
/// [`Promote::Output`] is the wider of `Self` and `Rhs`; [`Promote::promote`] and
/// [`Promote::promote_rhs`] convert either operand into it.
pub trait Promote<Rhs: Scalar>: Scalar {
    /// The element type of the result.
    type Output: Scalar;

    /// Converts the left-hand operand to the result type.
    fn promote(self) -> <Self as Promote<Rhs>>::Output;

    /// Converts the right-hand operand to the result type.
    fn promote_rhs(rhs: Rhs) -> <Self as Promote<Rhs>>::Output;
}

/// The element type resulting from combining an `A` with a `B`.
pub type Promoted<A, B> = <A as Promote<B>>::Output;

macro_rules! scalar {
    ($($ty:ty => $kind:ident;)+) => {
        $(
            impl Scalar for $ty {
                const KIND: ElementKind = ElementKind::$kind;

                #[inline]
                fn to_i32(self) -> i32 {
                    self as i32
                }

                #[inline]
                fn to_f32(self) -> f32 {
                    self as f32
                }

                #[inline]
                fn to_f64(self) -> f64 {
                    self as f64
                }
            }
        )+
    };
}

scalar! {
    i32 => Integer;
    f32 => Single;
    f64 => Double;
}

macro_rules! promote {
    ($($lhs:ty, $rhs:ty => $out:ty;)+) => {
        $(
            impl Promote<$rhs> for $lhs {
                type Output = $out;

                #[inline]
                fn promote(self) -> $out {
                    self as $out
                }

                #[inline]
                fn promote_rhs(rhs: $rhs) -> $out {
                    rhs as $out
                }
            }
        )+
    };
}

promote! {
    i32, i32 => i32;
    i32, f32 => f32;
    i32, f64 => f64;
    f32, i32 => f32;
    f32, f32 => f32;
    f32, f64 => f64;
    f64, i32 => f64;
    f64, f32 => f64;
    f64, f64 => f64;
}

/// Applies `op` to a pair of operands after promoting both to their common type.
#[inline]
pub(crate) fn promoted<T, U>(
    lhs: T,
    rhs: U,
    op: impl Fn(Promoted<T, U>, Promoted<T, U>) -> Promoted<T, U>,
) -> Promoted<T, U>
where
    T: Promote<U>,
    U: Scalar,
{
    op(lhs.promote(), T::promote_rhs(rhs))
}

/// Dot product of two equally long element sequences of possibly different kinds.
pub(crate) fn promoted_dot<T, U>(
    lhs: impl IntoIterator<Item = T>,
    rhs: impl IntoIterator<Item = U>,
) -> Promoted<T, U>
where
    T: Promote<U>,
    U: Scalar,
{
    sum_of_products(
        lhs.into_iter().map(T::promote),
        rhs.into_iter().map(T::promote_rhs),
    )
}

//! Implementations of `std::ops` and comparison traits.

use std::ops::{Add, Div, Index, Mul, Neg, Sub};

use approx::{AbsDiffEq, RelativeEq, UlpsEq};

use super::Vector;
use crate::traits::Number;

impl<T, const N: usize> Index<usize> for Vector<T, N> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

// More general impl than what the derive generates.
impl<T, U, const N: usize> PartialEq<Vector<U, N>> for Vector<T, N>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &Vector<U, N>) -> bool {
        self.0 == other.0
    }
}

impl<T, const N: usize> Eq for Vector<T, N> where T: Eq {}

impl<T, U, const N: usize> PartialEq<[U; N]> for Vector<T, N>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &[U; N]) -> bool {
        self.0.eq(other)
    }
}

impl<T, U, const N: usize> PartialEq<Vector<U, N>> for [T; N]
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &Vector<U, N>) -> bool {
        *self == other.0
    }
}

impl<T, const N: usize> AbsDiffEq for Vector<T, N>
where
    T: AbsDiffEq,
    T::Epsilon: Copy,
{
    type Epsilon = T::Epsilon;

    fn default_epsilon() -> Self::Epsilon {
        T::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.iter()
            .zip(other)
            .all(|(a, b)| a.abs_diff_eq(b, epsilon))
    }
}

impl<T, const N: usize> RelativeEq for Vector<T, N>
where
    T: RelativeEq,
    T::Epsilon: Copy,
{
    fn default_max_relative() -> Self::Epsilon {
        T::default_max_relative()
    }

    fn relative_eq(
        &self,
        other: &Self,
        epsilon: Self::Epsilon,
        max_relative: Self::Epsilon,
    ) -> bool {
        self.iter()
            .zip(other)
            .all(|(a, b)| a.relative_eq(b, epsilon, max_relative))
    }
}

impl<T, const N: usize> UlpsEq for Vector<T, N>
where
    T: UlpsEq,
    T::Epsilon: Copy,
{
    fn default_max_ulps() -> u32 {
        T::default_max_ulps()
    }

    fn ulps_eq(&self, other: &Self, epsilon: Self::Epsilon, max_ulps: u32) -> bool {
        self.iter()
            .zip(other)
            .all(|(a, b)| a.ulps_eq(b, epsilon, max_ulps))
    }
}

// The operators below only combine operands of the same element kind. Mixed-kind arithmetic goes
// through the named methods (`plus`, `multiplied_by`, ...), which promote their result.

/// Element-wise negation.
impl<T: Number, const N: usize> Neg for Vector<T, N> {
    type Output = Self;

    fn neg(self) -> Self {
        self.map(T::wrapping_neg)
    }
}

/// Element-wise addition.
impl<T: Number, const N: usize> Add<Vector<T, N>> for Vector<T, N> {
    type Output = Self;

    fn add(self, rhs: Vector<T, N>) -> Self {
        self.zip(rhs).map(|(l, r)| l.wrapping_add(r))
    }
}

/// Element-wise subtraction.
impl<T: Number, const N: usize> Sub<Vector<T, N>> for Vector<T, N> {
    type Output = Self;

    fn sub(self, rhs: Vector<T, N>) -> Self {
        self.zip(rhs).map(|(l, r)| l.wrapping_sub(r))
    }
}

/// Vector-Scalar multiplication (scaling).
impl<T: Number, const N: usize> Mul<T> for Vector<T, N> {
    type Output = Self;

    fn mul(self, rhs: T) -> Self {
        self.map(|elem| elem.wrapping_mul(rhs))
    }
}

/// Vector-Scalar division (scaling).
impl<T: Number, const N: usize> Div<T> for Vector<T, N> {
    type Output = Self;

    fn div(self, rhs: T) -> Self {
        self.map(|elem| elem.wrapping_div(rhs))
    }
}

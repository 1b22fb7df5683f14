use std::ops::{Add, Div, Index, Mul, Neg, Sub};

use approx::{AbsDiffEq, RelativeEq, UlpsEq};

use crate::{
    traits::{sum_of_products, Number},
    Matrix, Vector,
};

impl<T, const N: usize> Index<(usize, usize)> for Matrix<T, N> {
    type Output = T;

    #[inline]
    fn index(&self, (row, col): (usize, usize)) -> &Self::Output {
        &self.0[col][row]
    }
}

// More general `PartialEq` impl than what the derive generates.
impl<T, U, const N: usize> PartialEq<Matrix<U, N>> for Matrix<T, N>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &Matrix<U, N>) -> bool {
        self.0.eq(&other.0)
    }
}

impl<T, const N: usize> Eq for Matrix<T, N> where T: Eq {}

impl<T, const N: usize> AbsDiffEq for Matrix<T, N>
where
    T: AbsDiffEq,
    T::Epsilon: Copy,
{
    type Epsilon = T::Epsilon;

    fn default_epsilon() -> Self::Epsilon {
        T::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.0
            .iter()
            .flatten()
            .zip(other.0.iter().flatten())
            .all(|(a, b)| a.abs_diff_eq(b, epsilon))
    }
}

impl<T, const N: usize> RelativeEq for Matrix<T, N>
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
        self.0
            .iter()
            .flatten()
            .zip(other.0.iter().flatten())
            .all(|(a, b)| a.relative_eq(b, epsilon, max_relative))
    }
}

impl<T, const N: usize> UlpsEq for Matrix<T, N>
where
    T: UlpsEq,
    T::Epsilon: Copy,
{
    fn default_max_ulps() -> u32 {
        T::default_max_ulps()
    }

    fn ulps_eq(&self, other: &Self, epsilon: Self::Epsilon, max_ulps: u32) -> bool {
        self.0
            .iter()
            .flatten()
            .zip(other.0.iter().flatten())
            .all(|(a, b)| a.ulps_eq(b, epsilon, max_ulps))
    }
}

// Like the vector operators, these only combine operands of the same element kind.

/// Element-wise negation.
impl<T: Number, const N: usize> Neg for Matrix<T, N> {
    type Output = Self;

    fn neg(self) -> Self::Output {
        self.map(|elem| elem.wrapping_neg())
    }
}

/// Element-wise addition.
impl<T: Number, const N: usize> Add for Matrix<T, N> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Matrix::from_fn(|r, c| self[(r, c)].wrapping_add(rhs[(r, c)]))
    }
}

/// Element-wise subtraction.
impl<T: Number, const N: usize> Sub for Matrix<T, N> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Matrix::from_fn(|r, c| self[(r, c)].wrapping_sub(rhs[(r, c)]))
    }
}

/// Matrix * Matrix.
impl<T: Number, const N: usize> Mul<Matrix<T, N>> for Matrix<T, N> {
    type Output = Matrix<T, N>;

    fn mul(self, rhs: Matrix<T, N>) -> Self::Output {
        Matrix::from_fn(|i, j| sum_of_products(self.row_unchecked(i).into_array(), rhs.0[j]))
    }
}

/// Matrix * Column Vector.
impl<T: Number, const N: usize> Mul<Vector<T, N>> for Matrix<T, N> {
    type Output = Vector<T, N>;

    fn mul(self, rhs: Vector<T, N>) -> Self::Output {
        Vector::from_fn(|i| sum_of_products(self.row_unchecked(i).into_array(), rhs.into_array()))
    }
}

/// Matrix * Scalar.
impl<T: Number, const N: usize> Mul<T> for Matrix<T, N> {
    type Output = Matrix<T, N>;

    fn mul(self, rhs: T) -> Self::Output {
        self.map(|elem| elem.wrapping_mul(rhs))
    }
}

/// Matrix / Scalar.
impl<T: Number, const N: usize> Div<T> for Matrix<T, N> {
    type Output = Matrix<T, N>;

    fn div(self, rhs: T) -> Self::Output {
        self.map(|elem| elem.wrapping_div(rhs))
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use crate::*;

    #[test]
    fn operators() {
        let a = Mat3i::from_fn(|r, c| (r * 3 + c) as i32);
        let b = Mat3i::from_diagonal([1, 2, 3]);
        assert_eq!(a + b, a.plus(b));
        assert_eq!(a - b, a.minus(b));
        assert_eq!(-a, a.negated());
        assert_eq!(a * b, a.multiply_matrix(b));
        assert_eq!(a * vec3(1, -1, 2), a.multiply_vector(vec3(1, -1, 2)));
        assert_eq!(a * 4, a.multiplied_by(4));
        assert_eq!(a / 2, a.divided_by(2));
    }

    #[test]
    fn approx() {
        let m = Mat3d::identity().divided_by(3.0f64).multiplied_by(3.0f64);
        assert_relative_eq!(m, Mat3d::identity());
        assert_ne!(Mat3f::identity(), Mat3f::ZERO);
    }
}

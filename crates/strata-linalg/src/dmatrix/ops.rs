use std::ops::Index;

use approx::{AbsDiffEq, RelativeEq, UlpsEq};

use super::DMatrix;

impl<T> Index<(usize, usize)> for DMatrix<T> {
    type Output = T;

    #[inline]
    fn index(&self, (row, col): (usize, usize)) -> &Self::Output {
        assert!(
            row < self.rows && col < self.columns,
            "index ({row}, {col}) out of bounds for {}x{} matrix",
            self.rows,
            self.columns,
        );
        &self.elems[col * self.rows + row]
    }
}

impl<T, U> PartialEq<DMatrix<U>> for DMatrix<T>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &DMatrix<U>) -> bool {
        self.rows == other.rows && self.columns == other.columns && self.elems[..] == other.elems[..]
    }
}

impl<T> Eq for DMatrix<T> where T: Eq {}

impl<T> AbsDiffEq for DMatrix<T>
where
    T: AbsDiffEq,
    T::Epsilon: Copy,
{
    type Epsilon = T::Epsilon;

    fn default_epsilon() -> Self::Epsilon {
        T::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.shape() == other.shape()
            && self
                .elems
                .iter()
                .zip(other.elems.iter())
                .all(|(a, b)| a.abs_diff_eq(b, epsilon))
    }
}

impl<T> RelativeEq for DMatrix<T>
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
        self.shape() == other.shape()
            && self
                .elems
                .iter()
                .zip(other.elems.iter())
                .all(|(a, b)| a.relative_eq(b, epsilon, max_relative))
    }
}

impl<T> UlpsEq for DMatrix<T>
where
    T: UlpsEq,
    T::Epsilon: Copy,
{
    fn default_max_ulps() -> u32 {
        T::default_max_ulps()
    }

    fn ulps_eq(&self, other: &Self, epsilon: Self::Epsilon, max_ulps: u32) -> bool {
        self.shape() == other.shape()
            && self
                .elems
                .iter()
                .zip(other.elems.iter())
                .all(|(a, b)| a.ulps_eq(b, epsilon, max_ulps))
    }
}

use std::ops::Index;

use approx::{AbsDiffEq, RelativeEq, UlpsEq};

use super::DVector;

impl<T> Index<usize> for DVector<T> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

// Vectors of different lengths compare unequal.
impl<T, U> PartialEq<DVector<U>> for DVector<T>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &DVector<U>) -> bool {
        self.0[..] == other.0[..]
    }
}

impl<T> Eq for DVector<T> where T: Eq {}

impl<T> AbsDiffEq for DVector<T>
where
    T: AbsDiffEq,
    T::Epsilon: Copy,
{
    type Epsilon = T::Epsilon;

    fn default_epsilon() -> Self::Epsilon {
        T::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.len() == other.len()
            && self
                .iter()
                .zip(other)
                .all(|(a, b)| a.abs_diff_eq(b, epsilon))
    }
}

impl<T> RelativeEq for DVector<T>
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
        self.len() == other.len()
            && self
                .iter()
                .zip(other)
                .all(|(a, b)| a.relative_eq(b, epsilon, max_relative))
    }
}

impl<T> UlpsEq for DVector<T>
where
    T: UlpsEq,
    T::Epsilon: Copy,
{
    fn default_max_ulps() -> u32 {
        T::default_max_ulps()
    }

    fn ulps_eq(&self, other: &Self, epsilon: Self::Epsilon, max_ulps: u32) -> bool {
        self.len() == other.len()
            && self
                .iter()
                .zip(other)
                .all(|(a, b)| a.ulps_eq(b, epsilon, max_ulps))
    }
}

#[cfg(test)]
mod tests {
    use approx::{assert_abs_diff_eq, assert_relative_ne};

    use crate::DVector;

    #[test]
    fn equality() {
        let a = DVector::new(vec![1, 2, 3]).unwrap();
        let b = DVector::new(vec![1, 2]).unwrap();
        assert_ne!(a, b);
        assert_eq!(a, a.clone());
        assert_eq!(a.as_double(), DVector::new(vec![1.0, 2.0, 3.0]).unwrap());
    }

    #[test]
    fn approx() {
        let a = DVector::new(vec![0.1f64 + 0.2, 1.0]).unwrap();
        assert_abs_diff_eq!(a, DVector::new(vec![0.3, 1.0]).unwrap(), epsilon = 1e-15);
        assert_relative_ne!(
            DVector::new(vec![1.0f64]).unwrap(),
            DVector::new(vec![1.0, 1.0]).unwrap()
        );
    }
}

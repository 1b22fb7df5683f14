use std::{fmt, slice};

use itertools::Itertools;

use crate::{
    error::{check_index, Axis, LinalgError, Malformed, Operation, Result, Shape},
    promote::{promoted, promoted_dot, Promote, Promoted, Scalar},
    traits::{sum_of_products, WrappingOps},
    Vector,
};

mod ops;

/// An immutable vector whose number of components is chosen at run time.
///
/// A [`DVector`] always has at least one component, and its length never changes after
/// construction. It supports the same operations as [`Vector`] (except for the cross product), but
/// since the lengths of two operands are only known at run time, every binary operation checks
/// them first and returns a [`LinalgError::ShapeMismatch`] error if they differ.
///
/// Unlike for [`Vector`], a missing (`None`) second operand is not treated as a zero vector (its
/// length would be unknown). Binary operations return [`LinalgError::MissingOperand`] instead.
///
/// # Examples
///
/// ```
/// # use strata_linalg::*;
/// let a = DVector::new(vec![1i32, 2, 3])?;
/// let b = DVector::new(vec![0.5f64, 0.5, 0.5])?;
/// assert_eq!(a.plus(&b)?, DVector::new(vec![1.5, 2.5, 3.5])?);
///
/// let c = DVector::new(vec![1, 2])?;
/// assert!(a.plus(&c).is_err());
/// assert!(a.plus(None::<&DVector<i32>>).is_err());
/// # Ok::<_, LinalgError>(())
/// ```
#[derive(Clone, Hash)]
pub struct DVector<T>(Box<[T]>);

impl<T> DVector<T> {
    /// Creates a vector from its components.
    ///
    /// Returns [`Malformed::Empty`] if `elems` is empty.
    pub fn new(elems: Vec<T>) -> Result<Self> {
        if elems.is_empty() {
            return Err(LinalgError::Malformed(Malformed::Empty));
        }
        Ok(Self(elems.into_boxed_slice()))
    }

    /// Creates a vector of length `len` by invoking `cb` with the index of each component.
    ///
    /// # Examples
    ///
    /// ```
    /// # use strata_linalg::*;
    /// let v = DVector::from_fn(4, |i| i as i32 * 2)?;
    /// assert_eq!(v.as_slice(), &[0, 2, 4, 6]);
    /// # Ok::<_, LinalgError>(())
    /// ```
    pub fn from_fn<F>(len: usize, cb: F) -> Result<Self>
    where
        F: FnMut(usize) -> T,
    {
        Self::new((0..len).map(cb).collect())
    }

    /// Collects components whose count the caller has already validated.
    pub(crate) fn from_iter_unchecked(iter: impl IntoIterator<Item = T>) -> Self {
        let elems: Box<[T]> = iter.into_iter().collect();
        debug_assert!(!elems.is_empty());
        Self(elems)
    }

    /// Returns the number of components.
    ///
    /// This is never zero.
    #[allow(clippy::len_without_is_empty)]
    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn shape(&self) -> Shape {
        Shape::Vector(self.len())
    }

    /// Returns a reference to the component at `index`, or [`None`] if out of bounds.
    pub fn get(&self, index: usize) -> Option<&T> {
        self.0.get(index)
    }

    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.0
    }

    /// Returns an iterator over references to the components of this vector.
    #[inline]
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.0.iter()
    }

    pub fn into_vec(self) -> Vec<T> {
        self.0.into_vec()
    }
}

impl<T: Clone> DVector<T> {
    /// Creates a vector by copying the components out of `elems`.
    pub fn from_slice(elems: &[T]) -> Result<Self> {
        Self::new(elems.to_vec())
    }
}

impl<T: Copy> DVector<T> {
    /// Returns the component at `index`.
    pub fn component(&self, index: usize) -> Result<T> {
        check_index(Axis::Component, index, self.len())?;
        Ok(self.0[index])
    }

    /// Applies a closure to each component, returning a new vector of the same length.
    pub fn map<F, U>(&self, f: F) -> DVector<U>
    where
        F: FnMut(T) -> U,
    {
        DVector::from_iter_unchecked(self.iter().copied().map(f))
    }

    fn zip_with<U, R, F>(&self, other: &DVector<U>, mut f: F) -> DVector<R>
    where
        U: Copy,
        F: FnMut(T, U) -> R,
    {
        DVector::from_iter_unchecked(
            self.iter()
                .copied()
                .zip_eq(other.iter().copied())
                .map(|(a, b)| f(a, b)),
        )
    }

    /// Resolves the second operand of a binary operation, checking that it is present and has the
    /// same length as `self`.
    fn conformable<'a, U>(
        &self,
        other: Option<&'a DVector<U>>,
        operation: Operation,
    ) -> Result<&'a DVector<U>> {
        let other = other.ok_or(LinalgError::MissingOperand(operation))?;
        if self.len() != other.len() {
            return Err(LinalgError::ShapeMismatch {
                operation,
                lhs: self.shape(),
                rhs: other.shape(),
            });
        }
        Ok(other)
    }
}

impl<T: Scalar> DVector<T> {
    /// Creates a vector of length `len` with every component set to 0.
    pub fn zeros(len: usize) -> Result<Self> {
        Self::from_fn(len, |_| T::ZERO)
    }

    /// Component-wise sum of `self` and `other`, promoting to the wider element kind.
    pub fn plus<'a, U, O>(&self, other: O) -> Result<DVector<Promoted<T, U>>>
    where
        T: Promote<U>,
        U: Scalar,
        O: Into<Option<&'a DVector<U>>>,
    {
        let other = self.conformable(other.into(), Operation::Add)?;
        Ok(self.zip_with(other, |a, b| promoted(a, b, WrappingOps::wrapping_add)))
    }

    /// Component-wise difference of `self` and `other`, promoting to the wider element kind.
    pub fn minus<'a, U, O>(&self, other: O) -> Result<DVector<Promoted<T, U>>>
    where
        T: Promote<U>,
        U: Scalar,
        O: Into<Option<&'a DVector<U>>>,
    {
        let other = self.conformable(other.into(), Operation::Subtract)?;
        Ok(self.zip_with(other, |a, b| promoted(a, b, WrappingOps::wrapping_sub)))
    }

    /// Flips the sign of every component.
    pub fn negated(&self) -> Self {
        self.map(WrappingOps::wrapping_neg)
    }

    /// Multiplies every component by `scalar`, promoting to the wider element kind.
    pub fn multiplied_by<S>(&self, scalar: S) -> DVector<Promoted<T, S>>
    where
        T: Promote<S>,
        S: Scalar,
    {
        self.map(|elem| promoted(elem, scalar, WrappingOps::wrapping_mul))
    }

    /// Divides every component by `scalar`, promoting to the wider element kind.
    ///
    /// Integer division by zero panics.
    pub fn divided_by<S>(&self, scalar: S) -> DVector<Promoted<T, S>>
    where
        T: Promote<S>,
        S: Scalar,
    {
        self.map(|elem| promoted(elem, scalar, WrappingOps::wrapping_div))
    }

    /// Computes the dot product of `self` and `other`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use strata_linalg::*;
    /// let a = DVector::new(vec![1, 2, 3, 4])?;
    /// let b = DVector::new(vec![1, 0, 1, 0])?;
    /// assert_eq!(a.dot(&b)?, 4);
    /// # Ok::<_, LinalgError>(())
    /// ```
    pub fn dot<'a, U, O>(&self, other: O) -> Result<Promoted<T, U>>
    where
        T: Promote<U>,
        U: Scalar,
        O: Into<Option<&'a DVector<U>>>,
    {
        let other = self.conformable(other.into(), Operation::Dot)?;
        Ok(promoted_dot(self.iter().copied(), other.iter().copied()))
    }

    /// Returns the squared length of this vector, in its own element kind.
    pub fn length_squared(&self) -> T {
        sum_of_products(self.iter().copied(), self.iter().copied())
    }

    /// Returns the length of this vector, computed in double precision.
    pub fn length(&self) -> f64 {
        self.length_squared().to_f64().sqrt()
    }

    /// Divides this vector by its length, resulting in a unit vector with [`f64`] components.
    ///
    /// Normalizing a zero vector yields NaN components.
    pub fn normalized(&self) -> DVector<f64>
    where
        T: Promote<f64, Output = f64>,
    {
        self.divided_by(self.length())
    }

    /// Computes the angle between `self` and `other`, in radians.
    ///
    /// If either vector has zero length, the result is NaN.
    pub fn angle<'a, U, O>(&self, other: O) -> Result<f64>
    where
        T: Promote<U>,
        U: Scalar,
        O: Into<Option<&'a DVector<U>>>,
    {
        let other = self.conformable(other.into(), Operation::Angle)?;
        let dot = promoted_dot(self.iter().copied(), other.iter().copied()).to_f64();
        Ok((dot / (self.length() * other.length())).acos())
    }

    /// Converts every component to [`f32`].
    pub fn as_float(&self) -> DVector<f32> {
        self.map(T::to_f32)
    }

    /// Converts every component to [`f64`].
    pub fn as_double(&self) -> DVector<f64> {
        self.map(T::to_f64)
    }

    /// Converts every component to [`i32`], truncating toward zero (saturating, NaN becomes 0).
    pub fn cast_to_int(&self) -> DVector<i32> {
        self.map(T::to_i32)
    }
}

/// Compile-time guard for conversions from fixed-size containers.
///
/// Naming [`NonEmpty::ASSERT`] in a function body makes every instantiation with `N == 0` fail to
/// build, which keeps the "never empty" invariant of [`DVector`] and [`DMatrix`] intact.
///
/// [`DMatrix`]: crate::DMatrix
pub(crate) struct NonEmpty<const N: usize>;

impl<const N: usize> NonEmpty<N> {
    pub(crate) const ASSERT: () = assert!(N > 0, "containers must have at least one element");
}

/// Converts a fixed-size vector into an arbitrary-size one.
///
/// Zero-length vectors are rejected at compile time:
///
/// ```compile_fail
/// # use strata_linalg::*;
/// let empty = DVector::from(Vector::<i32, 0>::from([]));
/// ```
impl<T, const N: usize> From<Vector<T, N>> for DVector<T> {
    fn from(vector: Vector<T, N>) -> Self {
        let () = NonEmpty::<N>::ASSERT;
        Self(Box::new(vector.into_array()))
    }
}

impl<T: Copy, const N: usize> TryFrom<&DVector<T>> for Vector<T, N> {
    type Error = LinalgError;

    fn try_from(vector: &DVector<T>) -> Result<Self> {
        <[T; N]>::try_from(vector.as_slice())
            .map(Vector::from)
            .map_err(|_| LinalgError::ShapeMismatch {
                operation: Operation::Convert,
                lhs: vector.shape(),
                rhs: Shape::Vector(N),
            })
    }
}

impl<'a, T> IntoIterator for &'a DVector<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl<T> AsRef<[T]> for DVector<T> {
    #[inline]
    fn as_ref(&self) -> &[T] {
        &self.0
    }
}

impl<T: fmt::Debug> fmt::Debug for DVector<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("DVector").field(&self.0).finish()
    }
}

/// Formats the vector with its length as a prefix, eg. `Vector3[1, 2, 3]`.
impl<T: fmt::Display> fmt::Display for DVector<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Vector{}[{}]", self.len(), self.iter().format(", "))
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use crate::{vec3, Vec3i};

    use super::*;

    fn dvec<T>(elems: &[T]) -> DVector<T>
    where
        T: Clone,
    {
        DVector::from_slice(elems).unwrap()
    }

    #[test]
    fn construction() {
        assert_eq!(
            DVector::<i32>::new(Vec::new()).unwrap_err(),
            LinalgError::Malformed(Malformed::Empty)
        );
        assert!(DVector::<f32>::zeros(0).is_err());
        assert_eq!(DVector::<f64>::zeros(3).unwrap().as_slice(), &[0.0; 3]);
        assert_eq!(dvec(&[1, 2, 3]).len(), 3);
        assert_eq!(dvec(&[1, 2, 3]).shape(), Shape::Vector(3));
    }

    #[test]
    fn access() {
        let v = dvec(&[4, 5, 6]);
        assert_eq!(v[1], 5);
        assert_eq!(v.get(2), Some(&6));
        assert_eq!(v.get(3), None);
        assert_eq!(v.component(0), Ok(4));
        assert_eq!(
            v.component(3),
            Err(LinalgError::IndexOutOfBounds {
                axis: Axis::Component,
                index: 3,
                len: 3
            })
        );
        assert_eq!(v.iter().sum::<i32>(), 15);
        assert_eq!(v.clone().into_vec(), vec![4, 5, 6]);
    }

    #[test]
    fn fmt() {
        let v = dvec(&[1, 2, 3]);
        assert_eq!(v.to_string(), "Vector3[1, 2, 3]");
        assert_eq!(format!("{:?}", v), "DVector([1, 2, 3])");
        assert_eq!(dvec(&[0.5f32]).to_string(), "Vector1[0.5]");
    }

    #[test]
    fn elementwise() {
        let a = dvec(&[1, 2, 3]);
        let b = dvec(&[0.5f32, 0.5, 0.5]);

        assert_eq!(a.plus(&b).unwrap(), dvec(&[1.5f32, 2.5, 3.5]));
        assert_eq!(a.minus(&a).unwrap(), DVector::<i32>::zeros(3).unwrap());
        assert_eq!(a.negated(), dvec(&[-1, -2, -3]));
        assert_eq!(a.multiplied_by(2), dvec(&[2, 4, 6]));
        assert_eq!(a.multiplied_by(0.5f64), dvec(&[0.5f64, 1.0, 1.5]));
        assert_eq!(a.divided_by(2), dvec(&[0, 1, 1]));
    }

    #[test]
    fn shape_checks() {
        let a = dvec(&[1, 2, 3]);
        let b = dvec(&[1, 2, 3, 4, 5]);

        let mismatch = |operation| LinalgError::ShapeMismatch {
            operation,
            lhs: Shape::Vector(3),
            rhs: Shape::Vector(5),
        };
        assert_eq!(a.plus(&b), Err(mismatch(Operation::Add)));
        assert_eq!(a.minus(&b), Err(mismatch(Operation::Subtract)));
        assert_eq!(a.dot(&b), Err(mismatch(Operation::Dot)));
        assert_eq!(a.angle(&b), Err(mismatch(Operation::Angle)));
    }

    #[test]
    fn missing_operand() {
        let a = dvec(&[1, 2, 3]);
        assert_eq!(
            a.plus(None::<&DVector<i32>>),
            Err(LinalgError::MissingOperand(Operation::Add))
        );
        assert_eq!(
            a.dot(None::<&DVector<f64>>),
            Err(LinalgError::MissingOperand(Operation::Dot))
        );
        assert!(a.angle(None::<&DVector<f32>>).is_err());
    }

    #[test]
    fn metric() {
        let a = dvec(&[1, 3, -5]);
        let b = dvec(&[4, -2, -1]);
        assert_eq!(a.dot(&b), Ok(3));
        assert_eq!(a.dot(&b.as_double()), Ok(3.0));

        let v = dvec(&[3, 4]);
        assert_eq!(v.length_squared(), 25);
        assert_eq!(v.length(), 5.0);
        assert_relative_eq!(v.normalized(), dvec(&[0.6, 0.8]));

        let x = dvec(&[1, 0]);
        let y = dvec(&[0.0f32, 2.0]);
        assert_relative_eq!(x.angle(&y).unwrap(), std::f64::consts::FRAC_PI_2);
        assert!(x.angle(&DVector::<i32>::zeros(2).unwrap()).unwrap().is_nan());
    }

    #[test]
    fn casts() {
        let v = dvec(&[1.9f64, -1.9, f64::NAN]);
        assert_eq!(v.cast_to_int(), dvec(&[1, -1, 0]));
        assert_eq!(dvec(&[1, 2]).as_float(), dvec(&[1.0f32, 2.0]));
        assert_eq!(dvec(&[0.25f32]).as_double(), dvec(&[0.25f64]));
    }

    #[test]
    fn conversions() {
        let fixed = vec3(1, 2, 3);
        let dynamic = DVector::from(fixed);
        assert_eq!(dynamic, dvec(&[1, 2, 3]));
        assert_eq!(Vec3i::try_from(&dynamic), Ok(fixed));

        let err = crate::Vec2i::try_from(&dynamic).unwrap_err();
        assert_eq!(
            err,
            LinalgError::ShapeMismatch {
                operation: Operation::Convert,
                lhs: Shape::Vector(3),
                rhs: Shape::Vector(2),
            }
        );
    }

    #[test]
    fn single_element_conversion() {
        let dynamic = DVector::from(Vector::from([7i32]));
        assert_eq!(dynamic.len(), 1);
        assert_eq!(dynamic.shape(), Shape::Vector(1));
        assert_eq!(Vector::<i32, 1>::try_from(&dynamic), Ok(Vector::from([7])));
    }

    #[test]
    fn integer_overflow_wraps() {
        let max = dvec(&[i32::MAX]);
        assert_eq!(max.plus(&max), Ok(dvec(&[-2])));
        assert_eq!(dvec(&[i32::MIN]).minus(&dvec(&[1i32])), Ok(dvec(&[i32::MAX])));
        assert_eq!(dvec(&[i32::MIN, 3]).negated(), dvec(&[i32::MIN, -3]));
        assert_eq!(max.multiplied_by(2), dvec(&[-2]));

        let big = dvec(&[50_000i32, 0]);
        assert_eq!(big.dot(&big), Ok(50_000i32.wrapping_mul(50_000)));
    }
}

use std::{array, fmt, slice};

use crate::{
    promote::{promoted, promoted_dot, Promote, Promoted, Scalar},
    traits::{sum_of_products, One, WrappingOps, Zero},
};

mod ops;
mod view;

pub use view::{XY, XYZ, XYZW};

/// A 2-dimensional vector.
pub type Vec2<T> = Vector<T, 2>;
/// A 2-dimensional vector with [`i32`] elements.
pub type Vec2i = Vec2<i32>;
/// A 2-dimensional vector with [`f32`] elements.
pub type Vec2f = Vec2<f32>;
/// A 2-dimensional vector with [`f64`] elements.
pub type Vec2d = Vec2<f64>;
/// A 3-dimensional vector.
pub type Vec3<T> = Vector<T, 3>;
/// A 3-dimensional vector with [`i32`] elements.
pub type Vec3i = Vec3<i32>;
/// A 3-dimensional vector with [`f32`] elements.
pub type Vec3f = Vec3<f32>;
/// A 3-dimensional vector with [`f64`] elements.
pub type Vec3d = Vec3<f64>;
/// A 4-dimensional vector.
pub type Vec4<T> = Vector<T, 4>;
/// A 4-dimensional vector with [`i32`] elements.
pub type Vec4i = Vec4<i32>;
/// A 4-dimensional vector with [`f32`] elements.
pub type Vec4f = Vec4<f32>;
/// A 4-dimensional vector with [`f64`] elements.
pub type Vec4d = Vec4<f64>;

/// An immutable `N`-element vector storing elements of type `T`.
///
/// The size is part of the type, so operations combining two vectors never need a run-time shape
/// check. The vector families used throughout the crate are the 2, 3 and 4-dimensional ones
/// ([`Vec2`], [`Vec3`], [`Vec4`]) over [`i32`], [`f32`] and [`f64`].
///
/// # Construction
///
/// - The freestanding [`vec2`], [`vec3`] and [`vec4`] functions directly create vectors from
///   provided values.
/// - [`Vector::splat`] creates a vector by copying the given value into each element.
/// - [`Vector::from_fn`] creates a vector by invoking a closure with the index of each element.
/// - Vectors can be created from arrays using their [`From`] implementation.
/// - [`Vector::ZERO`] is a vector containing all-zeroes, and `Vector::X`, `Vector::Y`, `Vector::Z`
///   and `Vector::W` are unit vectors pointing in the given direction.
///
/// # Arithmetic and promotion
///
/// The named arithmetic methods ([`Vector::plus`], [`Vector::dot`], [`Vector::multiplied_by`], ...)
/// accept operands of any element kind and return a result of the wider kind (see [`Promote`]).
/// Binary methods take their second operand as `impl Into<Option<Vector<U, N>>>`; passing [`None`]
/// treats the operand as the zero vector instead of failing:
///
/// ```
/// # use strata_linalg::*;
/// let v = vec2(1i32, 3);
/// assert_eq!(v.plus(vec2(2.5f32, 2.0)), vec2(3.5, 5.0));
/// assert_eq!(v.plus(None::<Vec2i>), v);
/// assert_eq!(v.dot(None::<Vec2f>), 0.0);
/// ```
///
/// The [`std::ops`] operators are implemented for same-kind operands only.
///
/// # Element Access
///
/// - Elements can be accessed as fields `x`, `y`, `z`, or `w`.
/// - The [`Index`] impl can be used just like on arrays.
/// - [`Vector::as_array`], [`Vector::as_slice`], [`Vector::iter`] and [`Vector::into_array`]
///   expose the underlying elements.
/// - [`bytemuck::Zeroable`] and [`bytemuck::Pod`] are implemented to allow safe transmutation when
///   the element type `T` also allows this.
///
/// Vectors are never mutated in place: every operation returns a new vector.
///
/// [`Index`]: std::ops::Index
#[derive(Clone, Copy, Hash)]
#[repr(transparent)]
pub struct Vector<T, const N: usize>([T; N]);

unsafe impl<T: bytemuck::Zeroable, const N: usize> bytemuck::Zeroable for Vector<T, N> {}
unsafe impl<T: bytemuck::Pod, const N: usize> bytemuck::Pod for Vector<T, N> {}

impl<T: Zero, const N: usize> Vector<T, N> {
    /// A vector with each element initialized to 0.
    ///
    /// This uses [`T::ZERO`][Zero::ZERO] as the value for all elements.
    pub const ZERO: Self = Self([T::ZERO; N]);
}

impl<T: Zero + One> Vector<T, 2> {
    /// A unit vector pointing in the X direction.
    pub const X: Self = Self([T::ONE, T::ZERO]);
    /// A unit vector pointing in the Y direction.
    pub const Y: Self = Self([T::ZERO, T::ONE]);
}

impl<T: Zero + One> Vector<T, 3> {
    /// A unit vector pointing in the X direction.
    pub const X: Self = Self([T::ONE, T::ZERO, T::ZERO]);
    /// A unit vector pointing in the Y direction.
    pub const Y: Self = Self([T::ZERO, T::ONE, T::ZERO]);
    /// A unit vector pointing in the Z direction.
    pub const Z: Self = Self([T::ZERO, T::ZERO, T::ONE]);
}

impl<T: Zero + One> Vector<T, 4> {
    /// A unit vector pointing in the X direction.
    pub const X: Self = Self([T::ONE, T::ZERO, T::ZERO, T::ZERO]);
    /// A unit vector pointing in the Y direction.
    pub const Y: Self = Self([T::ZERO, T::ONE, T::ZERO, T::ZERO]);
    /// A unit vector pointing in the Z direction.
    pub const Z: Self = Self([T::ZERO, T::ZERO, T::ONE, T::ZERO]);
    /// A unit vector pointing in the W direction.
    pub const W: Self = Self([T::ZERO, T::ZERO, T::ZERO, T::ONE]);
}

impl<T, const N: usize> Vector<T, N> {
    /// Creates a vector with each element initialized to `elem`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use strata_linalg::*;
    /// let v = Vector::splat(2);
    /// assert_eq!(v, vec3(2, 2, 2));
    /// ```
    #[inline]
    pub fn splat(elem: T) -> Self
    where
        T: Copy,
    {
        Self([elem; N])
    }

    /// Creates a vector where each element is initialized by invoking a closure with its index.
    ///
    /// Analogous to [`array::from_fn`].
    ///
    /// # Examples
    ///
    /// ```
    /// # use strata_linalg::*;
    /// let v = Vector::from_fn(|i| i as i32 * 10);
    /// assert_eq!(v, vec3(0, 10, 20));
    /// ```
    pub fn from_fn<F>(cb: F) -> Self
    where
        F: FnMut(usize) -> T,
    {
        Self(array::from_fn(cb))
    }

    /// Applies a closure to each element, returning a new vector.
    ///
    /// # Examples
    ///
    /// ```
    /// # use strata_linalg::*;
    /// let v = vec3(1, 2, 3).map(|i| i * 10);
    /// assert_eq!(v, vec3(10, 20, 30));
    /// ```
    pub fn map<F, U>(self, f: F) -> Vector<U, N>
    where
        F: FnMut(T) -> U,
    {
        Vector(self.0.map(f))
    }

    /// Merges two [`Vector`]s into one that contains tuples of the original elements.
    pub fn zip<U>(self, other: Vector<U, N>) -> Vector<(T, U), N> {
        let mut iter = self.0.into_iter().zip(other.0);
        Vector::from_fn(|_| match iter.next() {
            Some(pair) => pair,
            None => unreachable!("both vectors have `N` elements"),
        })
    }

    /// Returns a reference to the underlying elements as an array of length `N`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use strata_linalg::*;
    /// assert_eq!(vec3(1, 2, 3).as_array(), &[1, 2, 3]);
    /// ```
    #[inline]
    pub const fn as_array(&self) -> &[T; N] {
        &self.0
    }

    /// Returns a reference to the underlying elements as a slice.
    #[inline]
    pub const fn as_slice(&self) -> &[T] {
        &self.0
    }

    /// Returns an iterator over the elements of this vector.
    #[inline]
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.0.iter()
    }

    /// Converts this [`Vector`] into an `N`-element array.
    ///
    /// # Examples
    ///
    /// ```
    /// # use strata_linalg::*;
    /// assert_eq!(vec3(1, 2, 3).into_array(), [1, 2, 3]);
    /// ```
    #[inline]
    pub fn into_array(self) -> [T; N] {
        self.0
    }

    /// Returns a reference to the element at `index`, or [`None`] if out of bounds.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.0.get(index)
    }
}

impl<T: Scalar, const N: usize> Vector<T, N> {
    /// Component-wise sum of `self` and `other`.
    ///
    /// The result has the wider element kind of the two operands. Passing [`None`] as `other`
    /// treats it as the zero vector.
    ///
    /// # Examples
    ///
    /// ```
    /// # use strata_linalg::*;
    /// let sum: Vec2f = vec2(1i32, 3).plus(vec2(2.5f32, 2.0));
    /// assert_eq!(sum, vec2(3.5, 5.0));
    /// ```
    pub fn plus<U, O>(self, other: O) -> Vector<Promoted<T, U>, N>
    where
        T: Promote<U>,
        U: Scalar,
        O: Into<Option<Vector<U, N>>>,
    {
        match other.into() {
            Some(other) => self.zip(other).map(|(a, b)| promoted(a, b, WrappingOps::wrapping_add)),
            None => self.map(<T as Promote<U>>::promote),
        }
    }

    /// Component-wise difference of `self` and `other`.
    ///
    /// Promotes like [`Vector::plus`]; [`None`] is treated as the zero vector.
    ///
    /// # Examples
    ///
    /// ```
    /// # use strata_linalg::*;
    /// assert_eq!(vec3(1.0f64, 2.0, 3.0).minus(vec3(1i32, 1, 1)), vec3(0.0, 1.0, 2.0));
    /// ```
    pub fn minus<U, O>(self, other: O) -> Vector<Promoted<T, U>, N>
    where
        T: Promote<U>,
        U: Scalar,
        O: Into<Option<Vector<U, N>>>,
    {
        match other.into() {
            Some(other) => self.zip(other).map(|(a, b)| promoted(a, b, WrappingOps::wrapping_sub)),
            None => self.map(<T as Promote<U>>::promote),
        }
    }

    /// Flips the sign of every component. Integer negation wraps, so `i32::MIN` stays `i32::MIN`.
    pub fn negated(self) -> Self {
        self.map(WrappingOps::wrapping_neg)
    }

    /// Multiplies every component by `scalar`, promoting to the wider kind.
    ///
    /// # Examples
    ///
    /// ```
    /// # use strata_linalg::*;
    /// assert_eq!(vec2(1, 2).multiplied_by(3), vec2(3, 6));
    /// assert_eq!(vec2(1i32, 2).multiplied_by(0.5f64), vec2(0.5, 1.0));
    /// ```
    pub fn multiplied_by<S>(self, scalar: S) -> Vector<Promoted<T, S>, N>
    where
        T: Promote<S>,
        S: Scalar,
    {
        self.map(|elem| promoted(elem, scalar, WrappingOps::wrapping_mul))
    }

    /// Divides every component by `scalar`, promoting to the wider kind.
    ///
    /// Integer division truncates toward zero and panics on division by zero, like the `/`
    /// operator does. Floating point division by zero produces infinities or NaN.
    ///
    /// # Examples
    ///
    /// ```
    /// # use strata_linalg::*;
    /// assert_eq!(vec2(7, -7).divided_by(2), vec2(3, -3));
    /// assert_eq!(vec2(7i32, -7).divided_by(2.0f64), vec2(3.5, -3.5));
    /// ```
    pub fn divided_by<S>(self, scalar: S) -> Vector<Promoted<T, S>, N>
    where
        T: Promote<S>,
        S: Scalar,
    {
        self.map(|elem| promoted(elem, scalar, WrappingOps::wrapping_div))
    }

    /// Computes the dot product between `self` and `other`.
    ///
    /// Geometrically, the dot product provides information about the relative
    /// angle of the two vectors:
    /// - If the dot product is greater than zero, the angle between the vectors
    ///   is less than 90°.
    /// - If the dot product is equal to zero, their angle is exactly 90°.
    /// - If the dot product is negative, the angle is greater than 90°.
    ///
    /// Passing [`None`] yields zero.
    ///
    /// # Examples
    ///
    /// ```
    /// # use strata_linalg::*;
    /// let a = vec3(1i32, 3, -5);
    /// let b = vec3(4, -2, -1);
    /// assert_eq!(a.dot(b), 3);
    /// assert_eq!(a.dot(vec3(0.5f64, 0.0, 0.0)), 0.5);
    /// ```
    pub fn dot<U, O>(self, other: O) -> Promoted<T, U>
    where
        T: Promote<U>,
        U: Scalar,
        O: Into<Option<Vector<U, N>>>,
    {
        match other.into() {
            Some(other) => promoted_dot(self.0, other.0),
            None => Zero::ZERO,
        }
    }

    /// Returns the squared length of this [`Vector`], in its own element kind.
    ///
    /// # Examples
    ///
    /// ```
    /// # use strata_linalg::*;
    /// assert_eq!(vec2(4, 0).length_squared(), 16);
    /// ```
    pub fn length_squared(&self) -> T {
        sum_of_products(self.0, self.0)
    }

    /// Returns the length of this [`Vector`].
    ///
    /// The length is always computed in double precision, regardless of the element kind.
    ///
    /// # Examples
    ///
    /// ```
    /// # use strata_linalg::*;
    /// assert_eq!(vec2(3, 4).length(), 5.0);
    /// ```
    pub fn length(&self) -> f64 {
        self.length_squared().to_f64().sqrt()
    }

    /// Divides this vector by its length, resulting in a unit vector.
    ///
    /// Since [`Vector::length`] is a double precision value, the result always has [`f64`]
    /// elements. Normalizing a zero vector yields NaN components.
    ///
    /// # Examples
    ///
    /// ```
    /// # use strata_linalg::*;
    /// let z = vec3(0, 0, 4).normalized();
    /// assert_eq!(z, vec3(0.0, 0.0, 1.0));
    /// ```
    pub fn normalized(self) -> Vector<f64, N>
    where
        T: Promote<f64, Output = f64>,
    {
        self.divided_by(self.length())
    }

    /// Computes the angle between `self` and `other`, in radians.
    ///
    /// Both `self` and `other` must have non-zero length for the result to be meaningful; if
    /// either is zero (or [`None`]), the result is NaN.
    ///
    /// # Examples
    ///
    /// ```
    /// # use strata_linalg::*;
    /// use std::f64::consts::FRAC_PI_2;
    ///
    /// assert_eq!(Vec3i::X.angle(Vec3f::Y), FRAC_PI_2);
    /// assert!(Vec3i::X.angle(Vec3i::ZERO).is_nan());
    /// ```
    pub fn angle<U, O>(self, other: O) -> f64
    where
        T: Promote<U>,
        U: Scalar,
        O: Into<Option<Vector<U, N>>>,
    {
        let Some(other) = other.into() else {
            return f64::NAN;
        };
        let dot = promoted_dot(self.0, other.0).to_f64();
        (dot / (self.length() * other.length())).acos()
    }

    /// Converts every component to [`f32`].
    pub fn as_float(self) -> Vector<f32, N> {
        self.map(T::to_f32)
    }

    /// Converts every component to [`f64`].
    pub fn as_double(self) -> Vector<f64, N> {
        self.map(T::to_f64)
    }

    /// Converts every component to [`i32`], truncating toward zero.
    ///
    /// Out-of-range values saturate and NaN becomes 0; this conversion never fails.
    ///
    /// # Examples
    ///
    /// ```
    /// # use strata_linalg::*;
    /// assert_eq!(vec2(2.9, -2.9).cast_to_int(), vec2(2, -2));
    /// ```
    pub fn cast_to_int(self) -> Vector<i32, N> {
        self.map(T::to_i32)
    }
}

impl<T: Scalar> Vector<T, 3> {
    /// Computes the cross product of `self` and `other`.
    ///
    /// The result is a vector that is perpendicular to both `self` and `other`. Its direction
    /// depends on the order of the arguments: swapping them will invert the direction of the
    /// resulting vector. Passing [`None`] yields the zero vector.
    ///
    /// # Examples
    ///
    /// ```
    /// # use strata_linalg::*;
    /// let x = Vec3f::X;
    /// let y = Vec3f::Y;
    /// let z = Vec3f::Z;
    /// assert_eq!(x.cross(y), z);
    /// assert_eq!(y.cross(x), -z);
    /// assert_eq!(Vec3i::X.cross(Vec3i::Z), vec3(0, -1, 0));
    /// ```
    pub fn cross<U, O>(self, other: O) -> Vector<Promoted<T, U>, 3>
    where
        T: Promote<U>,
        U: Scalar,
        O: Into<Option<Vector<U, 3>>>,
    {
        let Some(other) = other.into() else {
            return Vector::ZERO;
        };
        let [a1, a2, a3] = self.map(<T as Promote<U>>::promote).into_array();
        let [b1, b2, b3] = other.map(T::promote_rhs).into_array();

        #[rustfmt::skip]
        let cross = vec3(
            a2.wrapping_mul(b3).wrapping_sub(a3.wrapping_mul(b2)),
            a3.wrapping_mul(b1).wrapping_sub(a1.wrapping_mul(b3)),
            a1.wrapping_mul(b2).wrapping_sub(a2.wrapping_mul(b1)),
        );
        cross
    }
}

impl<T, const N: usize> Default for Vector<T, N>
where
    T: Default,
{
    #[inline]
    fn default() -> Self {
        Self::from_fn(|_| T::default())
    }
}

impl<T, const N: usize> From<[T; N]> for Vector<T, N> {
    #[inline]
    fn from(value: [T; N]) -> Self {
        Self(value)
    }
}

impl<T, const N: usize> From<Vector<T, N>> for [T; N] {
    #[inline]
    fn from(value: Vector<T, N>) -> Self {
        value.0
    }
}

impl<'a, T, const N: usize> IntoIterator for &'a Vector<T, N> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl<T, const N: usize> fmt::Debug for Vector<T, N>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut tup = f.debug_tuple("");
        for elem in &self.0 {
            tup.field(elem);
        }
        tup.finish()
    }
}

/// Formats the vector as a parenthesized, comma-separated list of its components.
impl<T, const N: usize> fmt::Display for Vector<T, N>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("(")?;
        for (i, elem) in self.0.iter().enumerate() {
            if i != 0 {
                f.write_str(", ")?;
            }
            elem.fmt(f)?;
        }
        f.write_str(")")
    }
}

impl<T, const N: usize> AsRef<[T]> for Vector<T, N> {
    #[inline]
    fn as_ref(&self) -> &[T] {
        &self.0
    }
}

impl<T, const N: usize> AsRef<[T; N]> for Vector<T, N> {
    #[inline]
    fn as_ref(&self) -> &[T; N] {
        &self.0
    }
}

/// Constructs a [`Vec2`] from its two elements.
#[inline]
pub const fn vec2<T>(x: T, y: T) -> Vec2<T> {
    Vector([x, y])
}

/// Constructs a [`Vec3`] from its three elements.
#[inline]
pub const fn vec3<T>(x: T, y: T, z: T) -> Vec3<T> {
    Vector([x, y, z])
}

/// Constructs a [`Vec4`] from its four elements.
#[inline]
pub const fn vec4<T>(x: T, y: T, z: T, w: T) -> Vec4<T> {
    Vector([x, y, z, w])
}

#[cfg(test)]
mod tests {
    use std::f64::consts::{FRAC_PI_2, PI};

    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn access() {
        assert_eq!(Vec3f::X.x, 1.0);
        assert_eq!(Vec3f::X[0], 1.0);
        assert_eq!(Vec3f::X[1], 0.0);
        assert_eq!(Vec3f::X[2], 0.0);
        assert_eq!(Vec3f::X.y, 0.0);
        assert_eq!(Vec3f::Y.y, 1.0);
        assert_eq!(Vec3f::Y.z, 0.0);
        assert_eq!(Vec4d::W.w, 1.0);

        let v = vec2(0, 1);
        assert_eq!(v.x, 0);
        assert_eq!(v.y, 1);
        assert_eq!(v.get(1), Some(&1));
        assert_eq!(v.get(2), None);
    }

    #[test]
    fn fmt() {
        assert_eq!(format!("{}", Vec4f::W), "(0, 0, 0, 1)");
        assert_eq!(format!("{:?}", Vec4f::W), "(0.0, 0.0, 0.0, 1.0)");
        assert_eq!(vec3(1, -2, 3).to_string(), "(1, -2, 3)");
    }

    #[test]
    fn plus_minus_promote() {
        let sum = vec2(1i32, 3).plus(vec2(2.5f32, 2.1));
        assert_relative_eq!(sum, vec2(3.5f32, 5.1));

        let sum: Vec2d = vec2(1.0f32, 2.0).plus(vec2(1.0f64, 1.0));
        assert_eq!(sum, vec2(2.0, 3.0));

        let diff: Vec3f = vec3(1i32, 2, 3).minus(vec3(0.5f32, 0.5, 0.5));
        assert_eq!(diff, vec3(0.5, 1.5, 2.5));

        // Same kind never promotes.
        let same: Vec3i = vec3(1, 2, 3).plus(vec3(1, 1, 1));
        assert_eq!(same, vec3(2, 3, 4));
    }

    #[test]
    fn none_is_zero() {
        let v = vec3(1i32, 2, 3);
        assert_eq!(v.plus(None::<Vec3i>), v);
        assert_eq!(v.minus(None::<Vec3i>), v);
        assert_eq!(v.dot(None::<Vec3i>), 0);
        assert_eq!(v.cross(None::<Vec3i>), Vec3i::ZERO);
        assert_eq!(v.plus(None::<Vec3d>), vec3(1.0, 2.0, 3.0));
    }

    #[test]
    fn negation() {
        let v = vec4(1.5, -2.0, 0.0, 4.0);
        assert_eq!(v.negated(), vec4(-1.5, 2.0, -0.0, -4.0));
        assert_eq!(v.plus(v.negated()), Vec4d::ZERO);
    }

    #[test]
    fn scaling() {
        assert_eq!(vec3(1, 2, 3).multiplied_by(2), vec3(2, 4, 6));
        assert_eq!(vec3(1i32, 2, 3).multiplied_by(0.5f32), vec3(0.5f32, 1.0, 1.5));
        assert_eq!(vec2(-7, 7).divided_by(2), vec2(-3, 3));
        assert_eq!(vec2(1.0f32, 2.0).divided_by(4.0f64), vec2(0.25f64, 0.5));

        let inf = vec2(1.0f64, -1.0).divided_by(0.0f64);
        assert_eq!(inf, vec2(f64::INFINITY, f64::NEG_INFINITY));
        assert!(vec2(0.0f32, 0.0).divided_by(0.0f32).x.is_nan());
    }

    #[test]
    #[should_panic]
    fn integer_division_by_zero() {
        let _ = vec2(1, 2).divided_by(0);
    }

    #[test]
    fn integer_overflow_wraps() {
        let big = vec2(50_000i32, 0);
        assert_eq!(big.dot(big), 50_000i32.wrapping_mul(50_000));
        assert_eq!(big.length_squared(), 50_000i32.wrapping_mul(50_000));

        assert_eq!(vec2(i32::MAX, 1).plus(vec2(1i32, 0)), vec2(i32::MIN, 1));
        assert_eq!(vec2(i32::MIN, 0).minus(vec2(1i32, 0)), vec2(i32::MAX, 0));
        assert_eq!(vec2(i32::MIN, 1).negated(), vec2(i32::MIN, -1));
        assert_eq!(vec2(i32::MAX, 2).multiplied_by(2), vec2(-2, 4));
        assert_eq!(vec2(i32::MIN, 4).divided_by(-1), vec2(i32::MIN, -4));
        assert_eq!(vec3(i32::MAX, 0, 0).cross(vec3(0, 2, 0)), vec3(0, 0, -2));

        // Operators agree with the named methods.
        assert_eq!(vec2(i32::MAX, 0) + vec2(1, 0), vec2(i32::MIN, 0));
        assert_eq!(-vec2(i32::MIN, 0), vec2(i32::MIN, 0));
        assert_eq!(vec2(i32::MAX, 0) * 2, vec2(-2, 0));
    }

    #[test]
    fn dot() {
        assert_eq!(vec2(1, 2).dot(vec2(3, 4)), 11);
        assert_eq!(vec3(1, 3, -5).dot(vec3(4, -2, -1)), 3);
        assert_eq!(vec3(1, 3, -5).dot(vec3(1, 3, -5)), 35);
        assert_eq!(vec2(1i32, 2).dot(vec2(0.5f32, 0.25)), 1.0f32);

        assert_eq!(Vec2f::X.dot(Vec2f::X), 1.0);
        assert_eq!(Vec2f::X.dot(Vec2f::Y), 0.0);
    }

    #[test]
    fn cross() {
        assert_eq!(vec3(1, 0, 0).cross(vec3(0, 0, 1)), vec3(0, -1, 0));
        assert_eq!(Vec3i::X.cross(Vec3i::Y), Vec3i::Z);
        assert_eq!(Vec3i::X.cross(Vec3d::Y), Vec3d::Z);
        assert_eq!(vec3(2, 3, 4).cross(vec3(2, 3, 4)), Vec3i::ZERO);
    }

    #[test]
    fn length() {
        assert_eq!(vec2(3, 4).length_squared(), 25);
        assert_eq!(vec2(3, 4).length(), 5.0);
        assert_eq!(vec2(3.0f32, 4.0).length_squared(), 25.0f32);
        assert_eq!(Vec4i::ZERO.length(), 0.0);
    }

    #[test]
    fn normalized() {
        assert_eq!(vec2(0, -3).normalized(), vec2(0.0, -1.0));
        assert_relative_eq!(vec3(1.0f32, 1.0, 1.0).normalized().length(), 1.0);
        assert!(Vec2i::ZERO.normalized().x.is_nan());
    }

    #[test]
    fn angle() {
        assert_relative_eq!(Vec3f::Y.angle(Vec3f::X), FRAC_PI_2);
        assert_relative_eq!(Vec3i::X.angle(Vec3d::Y), FRAC_PI_2);
        assert_relative_eq!(Vec3f::Y.angle(-Vec3f::Y), PI);
        assert_relative_eq!(vec2(0.0f64, 2.0).angle(vec2(-3.0f64, 0.0)), FRAC_PI_2);
        assert_relative_eq!(vec2(1i32, 1).angle(vec2(1i32, -1)), FRAC_PI_2);

        assert!(Vec2i::ZERO.angle(Vec2i::X).is_nan());
        assert!(Vec2i::X.angle(None::<Vec2i>).is_nan());
    }

    #[test]
    fn casts() {
        assert_eq!(vec3(1, 2, 3).as_float(), vec3(1.0f32, 2.0, 3.0));
        assert_eq!(vec3(1.5f32, 2.0, 3.0).as_double(), vec3(1.5f64, 2.0, 3.0));
        assert_eq!(vec4(1.9, -1.9, f64::NAN, 1e20).cast_to_int(), vec4(1, -1, 0, i32::MAX));
    }

    #[test]
    fn pod() {
        let v = vec3(1.0f32, 2.0, 3.0);
        let raw: [f32; 3] = bytemuck::cast(v);
        assert_eq!(raw, [1.0, 2.0, 3.0]);
        let vs = [Vec2i::X, Vec2i::Y];
        assert_eq!(bytemuck::cast_slice::<Vec2i, i32>(&vs), &[1, 0, 0, 1]);
    }
}

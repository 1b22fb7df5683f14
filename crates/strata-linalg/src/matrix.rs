use std::{array, fmt};

use itertools::Itertools;

use crate::{
    error::{check_index, Axis, Result},
    inverse::invert,
    promote::{promoted, promoted_dot, Promote, Promoted, Scalar},
    traits::{sum_of_products, WrappingOps, Zero},
    Vector,
};

mod ops;

/// A 3x3 matrix.
pub type Mat3<T> = Matrix<T, 3>;
/// A 3x3 matrix with [`i32`] elements.
pub type Mat3i = Mat3<i32>;
/// A 3x3 matrix with [`f32`] elements.
pub type Mat3f = Mat3<f32>;
/// A 3x3 matrix with [`f64`] elements.
pub type Mat3d = Mat3<f64>;
/// A 4x4 matrix.
pub type Mat4<T> = Matrix<T, 4>;
/// A 4x4 matrix with [`i32`] elements.
pub type Mat4i = Mat4<i32>;
/// A 4x4 matrix with [`f32`] elements.
pub type Mat4f = Mat4<f32>;
/// A 4x4 matrix with [`f64`] elements.
pub type Mat4d = Mat4<f64>;

/// An immutable, column-major, square matrix with `N` rows and `N` columns, and element type `T`.
///
/// The matrix families used throughout the crate are [`Mat3`] and [`Mat4`] over [`i32`], [`f32`]
/// and [`f64`]. Since both operands of every binary operation have the same statically known size,
/// no operation on [`Matrix`] performs a run-time shape check. For matrices whose size is only
/// known at run time, see [`DMatrix`][crate::DMatrix].
///
/// # Construction
///
/// - [`Matrix::from_rows`] and [`Matrix::from_columns`] allow filling a matrix with raw elements,
///   as well as creating them from an array of row or column vectors.
/// - [`Matrix::from_fn`] will create each element by invoking a closure with its row and column.
/// - [`Matrix::from_diagonal`] creates a matrix with a specified diagonal and zero outside of it.
/// - [`Matrix::ZERO`] (or [`Matrix::zero`]) is a matrix with every element set to 0, and
///   [`Matrix::identity`] has 1 on its diagonal and 0 everywhere else.
///
/// # Element Access
///
/// [`Matrix`] implements the [`Index`] trait for tuples of `(usize, usize)`. The first element of
/// the tuple is the *row*, the second is the *column*, matching common mathematical notation.
/// Indices are 0-based.
///
/// ```
/// # use strata_linalg::*;
/// let mat = Matrix::from_rows([
///     [0, 1],
///     [2, 3],
/// ]);
/// assert_eq!(mat[(0, 1)], 1);
/// assert_eq!(mat[(1, 0)], 2);
/// ```
///
/// Indexing out of bounds will result in a panic, just like it does for slices. [`Matrix::get`]
/// returns an [`Option`] instead, and [`Matrix::row`] and [`Matrix::column`] return an
/// [`IndexOutOfBounds`] error for invalid indices.
///
/// [`Index`]: std::ops::Index
/// [`IndexOutOfBounds`]: crate::LinalgError::IndexOutOfBounds
#[derive(Clone, Copy, Hash)]
#[repr(transparent)]
pub struct Matrix<T, const N: usize>([[T; N]; N]);

unsafe impl<T: bytemuck::Zeroable, const N: usize> bytemuck::Zeroable for Matrix<T, N> {}
unsafe impl<T: bytemuck::Pod, const N: usize> bytemuck::Pod for Matrix<T, N> {}

impl<T: Zero + Copy, const N: usize> Matrix<T, N> {
    /// A matrix with every element set to 0.
    pub const ZERO: Self = Self([[T::ZERO; N]; N]);
}

impl<T, const N: usize> Matrix<T, N> {
    /// Creates a [`Matrix`] from an array of column vectors.
    ///
    /// # Examples
    ///
    /// ```
    /// # use strata_linalg::*;
    /// let rows = Matrix::from_rows([
    ///     [0, 1],
    ///     [2, 3],
    /// ]);
    /// let columns = Matrix::from_columns([
    ///     [0, 2],
    ///     [1, 3],
    /// ]);
    /// assert_eq!(rows, columns);
    /// ```
    pub fn from_columns<U: Into<Vector<T, N>>>(columns: [U; N]) -> Self {
        Self(columns.map(|col| col.into().into_array()))
    }

    /// Creates a [`Matrix`] by invoking a closure with the position (row and column) of each element.
    ///
    /// This mirrors [`array::from_fn`].
    ///
    /// # Examples
    ///
    /// ```
    /// # use strata_linalg::*;
    /// let mat = Matrix::from_fn(|row, col| row * 10 + col);
    /// assert_eq!(mat, Matrix::from_rows([
    ///     [ 0,  1,  2],
    ///     [10, 11, 12],
    ///     [20, 21, 22],
    /// ]));
    /// ```
    pub fn from_fn<F>(mut cb: F) -> Self
    where
        F: FnMut(usize, usize) -> T,
    {
        Self(array::from_fn(|col| array::from_fn(|row| cb(row, col))))
    }

    /// Applies a closure to each element, returning a new matrix.
    pub fn map<F, U>(self, mut f: F) -> Matrix<U, N>
    where
        F: FnMut(T) -> U,
    {
        Matrix(self.0.map(|column| column.map(&mut f)))
    }

    /// Returns a reference to the element at `(row, col)`, or [`None`] if out of bounds.
    ///
    /// # Examples
    ///
    /// ```
    /// # use strata_linalg::*;
    /// let mat = Mat3i::identity();
    /// assert_eq!(mat.get(1, 1), Some(&1));
    /// assert_eq!(mat.get(3, 0), None);
    /// ```
    pub fn get(&self, row: usize, col: usize) -> Option<&T> {
        self.0.get(col).and_then(|col| col.get(row))
    }
}

impl<T: Copy, const N: usize> Matrix<T, N> {
    /// Creates a [`Matrix`] from an array of row vectors.
    ///
    /// # Examples
    ///
    /// ```
    /// # use strata_linalg::*;
    /// let mat = Matrix::from_rows([
    ///     [1, 2],
    ///     [3, 4],
    /// ]);
    /// assert_eq!(mat.row(1), Ok(vec2(3, 4)));
    /// ```
    pub fn from_rows<U: Into<Vector<T, N>>>(rows: [U; N]) -> Self {
        Matrix::from_columns(rows).transposed()
    }

    /// Swaps the rows and columns of this matrix.
    ///
    /// # Examples
    ///
    /// ```
    /// # use strata_linalg::*;
    /// let mat = Matrix::from_rows([
    ///     [1, 2],
    ///     [3, 4],
    /// ]).transposed();
    /// assert_eq!(mat, Matrix::from_rows([
    ///     [1, 3],
    ///     [2, 4],
    /// ]));
    /// ```
    pub fn transposed(&self) -> Self {
        Self::from_fn(|row, col| self[(col, row)])
    }

    /// Returns row `index` of this matrix as a [`Vector`].
    pub fn row(&self, index: usize) -> Result<Vector<T, N>> {
        check_index(Axis::Row, index, N)?;
        Ok(self.row_unchecked(index))
    }

    /// Returns column `index` of this matrix as a [`Vector`].
    pub fn column(&self, index: usize) -> Result<Vector<T, N>> {
        check_index(Axis::Column, index, N)?;
        Ok(self.column_unchecked(index))
    }

    /// Returns all rows of this matrix.
    pub fn rows(&self) -> [Vector<T, N>; N] {
        array::from_fn(|i| self.row_unchecked(i))
    }

    /// Returns all columns of this matrix.
    pub fn columns(&self) -> [Vector<T, N>; N] {
        self.0.map(Vector::from)
    }

    /// Returns a [`Vector`] holding the diagonal elements of this matrix.
    ///
    /// # Examples
    ///
    /// ```
    /// # use strata_linalg::*;
    /// let mat = Matrix::from_rows([
    ///     [1, 2],
    ///     [3, 4],
    /// ]);
    /// assert_eq!(mat.diagonal(), [1, 4]);
    /// ```
    pub fn diagonal(&self) -> Vector<T, N> {
        Vector::from_fn(|i| self[(i, i)])
    }

    fn row_unchecked(&self, index: usize) -> Vector<T, N> {
        Vector::from_fn(|col| self.0[col][index])
    }

    fn column_unchecked(&self, index: usize) -> Vector<T, N> {
        Vector::from(self.0[index])
    }
}

impl<T: Scalar, const N: usize> Matrix<T, N> {
    /// Returns a matrix with every element set to 0.
    ///
    /// This is the same as [`Matrix::ZERO`].
    #[inline]
    pub fn zero() -> Self {
        Self::ZERO
    }

    /// Returns the identity matrix.
    ///
    /// The matrix has the value 1 on its diagonal and 0 everywhere else.
    ///
    /// Multiplying any vector with this matrix returns the vector unchanged.
    pub fn identity() -> Self {
        Self::from_fn(|row, col| if row == col { T::ONE } else { T::ZERO })
    }

    /// Creates a square matrix from its diagonal.
    ///
    /// Elements outside the diagonal will be initialized with zero.
    ///
    /// # Examples
    ///
    /// ```
    /// # use strata_linalg::*;
    /// let diag = Matrix::from_diagonal([1, 2, 3]);
    /// assert_eq!(diag, Matrix::from_rows([
    ///     [1, 0, 0],
    ///     [0, 2, 0],
    ///     [0, 0, 3],
    /// ]));
    /// ```
    pub fn from_diagonal<D: Into<Vector<T, N>>>(diag: D) -> Self {
        let diag = diag.into();
        Self::from_fn(|row, col| if row == col { diag[row] } else { T::ZERO })
    }

    /// Returns the *trace* of the matrix (the sum of all elements on the diagonal).
    ///
    /// # Examples
    ///
    /// ```
    /// # use strata_linalg::*;
    /// let diag = Matrix::from_diagonal([1, 2, 3]);
    /// assert_eq!(diag.trace(), 1 + 2 + 3);
    ///
    /// assert_eq!(Mat3f::identity().trace(), 3.0);
    /// ```
    pub fn trace(&self) -> T {
        (0..N).fold(T::ZERO, |acc, i| acc.wrapping_add(self[(i, i)]))
    }

    /// Element-wise sum of `self` and `other`, promoting to the wider element kind.
    ///
    /// Passing [`None`] as `other` treats it as the zero matrix.
    ///
    /// # Examples
    ///
    /// ```
    /// # use strata_linalg::*;
    /// let sum = Mat3i::identity().plus(Mat3d::identity());
    /// assert_eq!(sum, Mat3d::from_diagonal([2.0, 2.0, 2.0]));
    /// assert_eq!(Mat3i::identity().plus(None::<Mat3i>), Mat3i::identity());
    /// ```
    pub fn plus<U, O>(self, other: O) -> Matrix<Promoted<T, U>, N>
    where
        T: Promote<U>,
        U: Scalar,
        O: Into<Option<Matrix<U, N>>>,
    {
        match other.into() {
            Some(other) => {
                Matrix::from_fn(|r, c| promoted(self[(r, c)], other[(r, c)], WrappingOps::wrapping_add))
            }
            None => self.map(<T as Promote<U>>::promote),
        }
    }

    /// Element-wise difference of `self` and `other`, promoting to the wider element kind.
    ///
    /// Passing [`None`] as `other` treats it as the zero matrix.
    pub fn minus<U, O>(self, other: O) -> Matrix<Promoted<T, U>, N>
    where
        T: Promote<U>,
        U: Scalar,
        O: Into<Option<Matrix<U, N>>>,
    {
        match other.into() {
            Some(other) => {
                Matrix::from_fn(|r, c| promoted(self[(r, c)], other[(r, c)], WrappingOps::wrapping_sub))
            }
            None => self.map(<T as Promote<U>>::promote),
        }
    }

    /// Flips the sign of every element.
    pub fn negated(self) -> Self {
        self.map(WrappingOps::wrapping_neg)
    }

    /// Multiplies every element by `scalar`, promoting to the wider element kind.
    pub fn multiplied_by<S>(self, scalar: S) -> Matrix<Promoted<T, S>, N>
    where
        T: Promote<S>,
        S: Scalar,
    {
        self.map(|elem| promoted(elem, scalar, WrappingOps::wrapping_mul))
    }

    /// Divides every element by `scalar`, promoting to the wider element kind.
    ///
    /// Division follows the semantics of the result kind: integer division truncates toward zero
    /// (and panics on division by zero), floating point division follows IEEE 754.
    pub fn divided_by<S>(self, scalar: S) -> Matrix<Promoted<T, S>, N>
    where
        T: Promote<S>,
        S: Scalar,
    {
        self.map(|elem| promoted(elem, scalar, WrappingOps::wrapping_div))
    }

    /// Multiplies this matrix with a column vector.
    ///
    /// Component `i` of the result is the dot product of row `i` of `self` with `vector`. Passing
    /// [`None`] yields the zero vector.
    ///
    /// # Examples
    ///
    /// ```
    /// # use strata_linalg::*;
    /// let mat = Matrix::from_rows([
    ///     [1i32, 2, 0],
    ///     [0, 1, 0],
    ///     [0, 0, 2],
    /// ]);
    /// assert_eq!(mat.multiply_vector(vec3(1, 1, 1)), vec3(3, 1, 2));
    /// assert_eq!(mat.multiply_vector(vec3(0.5f32, 0.0, 0.0)), vec3(0.5, 0.0, 0.0));
    /// ```
    pub fn multiply_vector<U, O>(self, vector: O) -> Vector<Promoted<T, U>, N>
    where
        T: Promote<U>,
        U: Scalar,
        O: Into<Option<Vector<U, N>>>,
    {
        match vector.into() {
            Some(vector) => Vector::from_fn(|row| {
                promoted_dot(self.row_unchecked(row).into_array(), vector.into_array())
            }),
            None => Vector::ZERO,
        }
    }

    /// Computes the matrix product of `self` and `other`.
    ///
    /// Element `(i, j)` of the result is the dot product of row `i` of `self` with column `j` of
    /// `other`. Passing [`None`] yields the zero matrix.
    ///
    /// # Examples
    ///
    /// ```
    /// # use strata_linalg::*;
    /// let a = Mat3i::from_diagonal([1, 2, 3]);
    /// let b = Mat3f::from_diagonal([0.5, 0.5, 0.5]);
    /// assert_eq!(a.multiply_matrix(b), Mat3f::from_diagonal([0.5, 1.0, 1.5]));
    /// ```
    pub fn multiply_matrix<U, O>(self, other: O) -> Matrix<Promoted<T, U>, N>
    where
        T: Promote<U>,
        U: Scalar,
        O: Into<Option<Matrix<U, N>>>,
    {
        match other.into() {
            Some(other) => Matrix::from_fn(|i, j| {
                promoted_dot(
                    self.row_unchecked(i).into_array(),
                    other.column_unchecked(j).into_array(),
                )
            }),
            None => Matrix::ZERO,
        }
    }

    /// Returns whether this matrix is equal to its transpose.
    ///
    /// Elements are compared exactly, without any tolerance.
    pub fn is_symmetric(&self) -> bool {
        (0..N)
            .tuple_combinations()
            .all(|(i, j)| self[(i, j)] == self[(j, i)])
    }

    /// Returns whether every off-diagonal element is the negation of its mirrored element.
    ///
    /// *Note*: the diagonal is not checked, so a matrix with non-zero diagonal elements can be
    /// reported as skew-symmetric. Use [`Matrix::is_strictly_skew_symmetric`] to also require a
    /// zero diagonal.
    ///
    /// # Examples
    ///
    /// ```
    /// # use strata_linalg::*;
    /// let mat = Matrix::from_rows([
    ///     [ 5, 2, 0],
    ///     [-2, 0, 1],
    ///     [ 0,-1, 0],
    /// ]);
    /// assert!(mat.is_skew_symmetric());
    /// assert!(!mat.is_strictly_skew_symmetric());
    /// ```
    pub fn is_skew_symmetric(&self) -> bool {
        (0..N)
            .tuple_combinations()
            .all(|(i, j)| self[(i, j)] == self[(j, i)].wrapping_neg())
    }

    /// Returns whether this matrix is equal to the negation of its transpose.
    ///
    /// Unlike [`Matrix::is_skew_symmetric`], this also requires every diagonal element to be zero.
    pub fn is_strictly_skew_symmetric(&self) -> bool {
        self.is_skew_symmetric() && (0..N).all(|i| self[(i, i)] == T::ZERO)
    }

    /// Raises this matrix to the power `exponent` by repeated multiplication.
    ///
    /// - An `exponent` of 0 yields the identity matrix.
    /// - A positive `exponent` multiplies the matrix with itself `exponent` times, performing
    ///   `exponent` matrix multiplications.
    /// - A negative `exponent` raises the *transpose* of the matrix to `-exponent`.
    ///
    /// *Note*: the transpose is only the inverse for orthogonal matrices, so a negative exponent
    /// does not generally compute a true inverse power. [`Matrix::power_with_inverse`] does.
    ///
    /// # Examples
    ///
    /// ```
    /// # use strata_linalg::*;
    /// let shear = Matrix::from_rows([
    ///     [1, 1, 0],
    ///     [0, 1, 0],
    ///     [0, 0, 1],
    /// ]);
    /// assert_eq!(shear.power(0), Mat3i::identity());
    /// assert_eq!(shear.power(3)[(0, 1)], 3);
    /// assert_eq!(shear.power(-2), shear.transposed().power(2));
    /// ```
    pub fn power(self, exponent: i32) -> Self {
        if exponent < 0 {
            log::trace!("raising transpose of {n}x{n} matrix to {}", exponent.unsigned_abs(), n = N);
            self.transposed().repeated_product(exponent.unsigned_abs())
        } else {
            self.repeated_product(exponent.unsigned_abs())
        }
    }

    /// Raises this matrix to the power `exponent`, using the true inverse for negative exponents.
    ///
    /// The result is always computed in double precision. Returns [`LinalgError::Singular`] if
    /// `exponent` is negative and the matrix is not invertible.
    ///
    /// [`LinalgError::Singular`]: crate::LinalgError::Singular
    ///
    /// # Examples
    ///
    /// ```
    /// # use strata_linalg::*;
    /// let mat = Mat3i::from_diagonal([2, 4, 1]);
    /// assert_eq!(mat.power_with_inverse(-1), Ok(Mat3d::from_diagonal([0.5, 0.25, 1.0])));
    /// assert_eq!(mat.power_with_inverse(2), Ok(Mat3d::from_diagonal([4.0, 16.0, 1.0])));
    /// assert!(Mat3i::ZERO.power_with_inverse(-1).is_err());
    /// ```
    pub fn power_with_inverse(self, exponent: i32) -> Result<Matrix<f64, N>> {
        let base = if exponent < 0 {
            self.try_inverse()?
        } else {
            self.as_double()
        };
        Ok(base.repeated_product(exponent.unsigned_abs()))
    }

    /// Computes the inverse of this matrix in double precision.
    ///
    /// Returns [`LinalgError::Singular`] if the matrix has no inverse.
    ///
    /// [`LinalgError::Singular`]: crate::LinalgError::Singular
    pub fn try_inverse(&self) -> Result<Matrix<f64, N>> {
        let row_major = (0..N)
            .flat_map(|row| (0..N).map(move |col| (row, col)))
            .map(|pos| self[pos].to_f64())
            .collect();
        let inverse = invert(N, row_major)?;
        Ok(Matrix::from_fn(|row, col| inverse[row * N + col]))
    }

    /// Converts every element to [`f32`].
    pub fn as_float(self) -> Matrix<f32, N> {
        self.map(T::to_f32)
    }

    /// Converts every element to [`f64`].
    pub fn as_double(self) -> Matrix<f64, N> {
        self.map(T::to_f64)
    }

    /// Converts every element to [`i32`], truncating toward zero.
    ///
    /// Out-of-range values saturate and NaN becomes 0; this conversion never fails.
    pub fn cast_to_int(self) -> Matrix<i32, N> {
        self.map(T::to_i32)
    }

    /// Same-kind matrix product.
    fn product(&self, rhs: &Self) -> Self {
        Self::from_fn(|i, j| {
            sum_of_products(self.row_unchecked(i).into_array(), rhs.0[j])
        })
    }

    fn repeated_product(self, exponent: u32) -> Self {
        log::trace!(
            "computing power {exponent} of {n}x{n} matrix by repeated multiplication",
            n = N
        );
        (0..exponent).fold(Self::identity(), |acc, _| acc.product(&self))
    }
}

impl<T: Scalar> Matrix<T, 3> {
    /// Returns the [determinant] of the matrix.
    ///
    /// [determinant]: https://en.wikipedia.org/wiki/Determinant
    pub fn determinant(&self) -> T {
        let [[a, d, g], [b, e, h], [c, f, i]] = self.0;
        let term = |x: T, y: T, z: T| x.wrapping_mul(y).wrapping_mul(z);
        term(a, e, i)
            .wrapping_add(term(b, f, g))
            .wrapping_add(term(c, d, h))
            .wrapping_sub(term(c, e, g))
            .wrapping_sub(term(b, d, i))
            .wrapping_sub(term(a, f, h))
    }
}

impl<T: Scalar> Matrix<T, 4> {
    /// Returns the [determinant] of the matrix.
    ///
    /// Computed by cofactor expansion along the first row.
    ///
    /// [determinant]: https://en.wikipedia.org/wiki/Determinant
    pub fn determinant(&self) -> T {
        (0..4).fold(T::ZERO, |acc, j| {
            let minor =
                Mat3::from_fn(|row, col| self[(row + 1, if col < j { col } else { col + 1 })]);
            let term = self[(0, j)].wrapping_mul(minor.determinant());
            if j % 2 == 0 {
                acc.wrapping_add(term)
            } else {
                acc.wrapping_sub(term)
            }
        })
    }
}

impl<T: fmt::Debug, const N: usize> fmt::Debug for Matrix<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        struct FormatRow<'a, T: fmt::Debug, const N: usize>(&'a Matrix<T, N>, usize);
        impl<'a, T: fmt::Debug, const N: usize> fmt::Debug for FormatRow<'a, T, N> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "[")?;
                for col in 0..N {
                    if col != 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{:?}", self.0 .0[col][self.1])?;
                }
                write!(f, "]")
            }
        }

        let mut list = f.debug_list();
        for row in 0..N {
            list.entry(&FormatRow(self, row));
        }
        list.finish()
    }
}

/// Formats the matrix row by row, eg. `[[1, 0], [0, 1]]`.
impl<T: fmt::Display, const N: usize> fmt::Display for Matrix<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for row in 0..N {
            if row != 0 {
                f.write_str(", ")?;
            }
            f.write_str("[")?;
            for col in 0..N {
                if col != 0 {
                    f.write_str(", ")?;
                }
                self.0[col][row].fmt(f)?;
            }
            f.write_str("]")?;
        }
        f.write_str("]")
    }
}

impl<T, const N: usize> Default for Matrix<T, N>
where
    T: Default,
{
    fn default() -> Self {
        Self::from_fn(|_, _| T::default())
    }
}

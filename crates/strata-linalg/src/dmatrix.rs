use std::fmt;

use itertools::Itertools;

use crate::{
    dvector::NonEmpty,
    error::{check_index, Axis, LinalgError, Malformed, Operation, Result, Shape},
    inverse::invert,
    promote::{promoted, promoted_dot, Promote, Promoted, Scalar},
    traits::{sum_of_products, WrappingOps},
    DVector, Matrix,
};

mod ops;

/// An immutable, column-major matrix whose number of rows and columns is chosen at run time.
///
/// A [`DMatrix`] always has at least one row and one column. It supports the same operations as
/// [`Matrix`], generalized to rectangular shapes, with run-time shape checks:
///
/// - [`DMatrix::plus`] and [`DMatrix::minus`] require both operands to have the same shape.
/// - [`DMatrix::multiply_vector`] requires the vector length to equal the number of columns.
/// - [`DMatrix::multiply_matrix`] requires the number of columns of `self` to equal the number of
///   rows of the other matrix.
/// - [`DMatrix::power`] requires a square matrix.
///
/// Violations are reported as [`LinalgError::ShapeMismatch`] or [`LinalgError::NotSquare`]. As
/// with [`DVector`], a missing (`None`) operand is an error, not a zero matrix.
///
/// # Examples
///
/// ```
/// # use strata_linalg::*;
/// let mat = DMatrix::from_rows(&[[1, 2], [3, 4]])?;
/// let v = DVector::new(vec![1, 1])?;
/// assert_eq!(mat.multiply_vector(&v)?, DVector::new(vec![3, 7])?);
///
/// let ragged = DMatrix::from_rows(&[vec![1, 2, 3], vec![4, 5]]);
/// assert!(matches!(ragged, Err(LinalgError::Malformed(_))));
/// # Ok::<_, LinalgError>(())
/// ```
#[derive(Clone, Hash)]
pub struct DMatrix<T> {
    rows: usize,
    columns: usize,
    /// Column-major elements, `rows * columns` of them.
    elems: Box<[T]>,
}

/// Checks that `lines` is a non-empty, rectangular grid and returns the common line length.
fn validate_grid<T, L: AsRef<[T]>>(lines: &[L]) -> Result<usize> {
    let first = lines
        .first()
        .ok_or(LinalgError::Malformed(Malformed::Empty))?
        .as_ref()
        .len();
    for (row, line) in lines.iter().enumerate() {
        let found = line.as_ref().len();
        if found == 0 {
            return Err(LinalgError::Malformed(Malformed::EmptyRow { row }));
        }
        if found != first {
            return Err(LinalgError::Malformed(Malformed::Ragged {
                row,
                expected: first,
                found,
            }));
        }
    }
    Ok(first)
}

impl<T> DMatrix<T> {
    /// Creates a matrix by invoking `cb` with the position (row and column) of each element.
    ///
    /// Returns [`Malformed::Empty`] if `rows` or `columns` is zero.
    pub fn from_fn<F>(rows: usize, columns: usize, cb: F) -> Result<Self>
    where
        F: FnMut(usize, usize) -> T,
    {
        if rows == 0 || columns == 0 {
            return Err(LinalgError::Malformed(Malformed::Empty));
        }
        Ok(Self::from_fn_unchecked(rows, columns, cb))
    }

    fn from_fn_unchecked<F>(rows: usize, columns: usize, mut cb: F) -> Self
    where
        F: FnMut(usize, usize) -> T,
    {
        let elems = (0..columns)
            .flat_map(|col| (0..rows).map(move |row| (row, col)))
            .map(|(row, col)| cb(row, col))
            .collect();
        Self {
            rows,
            columns,
            elems,
        }
    }

    /// Returns the number of rows.
    #[inline]
    pub fn nrows(&self) -> usize {
        self.rows
    }

    /// Returns the number of columns.
    #[inline]
    pub fn ncols(&self) -> usize {
        self.columns
    }

    #[inline]
    pub fn shape(&self) -> Shape {
        Shape::Matrix {
            rows: self.rows,
            columns: self.columns,
        }
    }

    #[inline]
    pub fn is_square(&self) -> bool {
        self.rows == self.columns
    }

    /// Returns a reference to the element at `(row, col)`, or [`None`] if out of bounds.
    pub fn get(&self, row: usize, col: usize) -> Option<&T> {
        if row < self.rows && col < self.columns {
            Some(&self.elems[col * self.rows + row])
        } else {
            None
        }
    }

    fn column_slice(&self, col: usize) -> &[T] {
        &self.elems[col * self.rows..(col + 1) * self.rows]
    }
}

impl<T: Copy> DMatrix<T> {
    /// Creates a matrix from a list of rows.
    ///
    /// Every row must have the same, non-zero length, and there must be at least one row.
    ///
    /// # Examples
    ///
    /// ```
    /// # use strata_linalg::*;
    /// let mat = DMatrix::from_rows(&[[1, 2, 3], [4, 5, 6]])?;
    /// assert_eq!(mat.shape(), Shape::Matrix { rows: 2, columns: 3 });
    /// assert_eq!(mat[(1, 0)], 4);
    ///
    /// assert_eq!(
    ///     DMatrix::from_rows(&[vec![1, 2, 3], vec![4, 5]]),
    ///     Err(LinalgError::Malformed(Malformed::Ragged { row: 1, expected: 3, found: 2 })),
    /// );
    /// # Ok::<_, LinalgError>(())
    /// ```
    pub fn from_rows<R: AsRef<[T]>>(rows: &[R]) -> Result<Self> {
        let columns = validate_grid::<T, _>(rows)?;
        Ok(Self::from_fn_unchecked(rows.len(), columns, |row, col| {
            rows[row].as_ref()[col]
        }))
    }

    /// Creates a matrix from a list of columns.
    ///
    /// Every column must have the same, non-zero length, and there must be at least one column.
    pub fn from_columns<C: AsRef<[T]>>(columns: &[C]) -> Result<Self> {
        let rows = validate_grid::<T, _>(columns)?;
        Ok(Self {
            rows,
            columns: columns.len(),
            elems: columns
                .iter()
                .flat_map(|col| col.as_ref().iter().copied())
                .collect(),
        })
    }

    /// Returns row `index` as a [`DVector`].
    pub fn row(&self, index: usize) -> Result<DVector<T>> {
        check_index(Axis::Row, index, self.rows)?;
        Ok(DVector::from_iter_unchecked(self.row_iter(index)))
    }

    /// Returns column `index` as a [`DVector`].
    pub fn column(&self, index: usize) -> Result<DVector<T>> {
        check_index(Axis::Column, index, self.columns)?;
        Ok(DVector::from_iter_unchecked(
            self.column_slice(index).iter().copied(),
        ))
    }

    /// Returns an iterator over the rows of this matrix.
    pub fn rows(&self) -> impl Iterator<Item = DVector<T>> + '_ {
        (0..self.rows).map(move |row| DVector::from_iter_unchecked(self.row_iter(row)))
    }

    /// Returns an iterator over the columns of this matrix.
    pub fn columns(&self) -> impl Iterator<Item = DVector<T>> + '_ {
        self.elems
            .chunks_exact(self.rows)
            .map(|col| DVector::from_iter_unchecked(col.iter().copied()))
    }

    /// Applies a closure to each element, returning a new matrix of the same shape.
    pub fn map<F, U>(&self, f: F) -> DMatrix<U>
    where
        F: FnMut(T) -> U,
    {
        DMatrix {
            rows: self.rows,
            columns: self.columns,
            elems: self.elems.iter().copied().map(f).collect(),
        }
    }

    /// Swaps the rows and columns of this matrix.
    pub fn transposed(&self) -> Self {
        Self::from_fn_unchecked(self.columns, self.rows, |row, col| self[(col, row)])
    }

    fn row_iter(&self, row: usize) -> impl Iterator<Item = T> + '_ {
        (0..self.columns).map(move |col| self.elems[col * self.rows + row])
    }

    fn zip_with<U, R, F>(&self, other: &DMatrix<U>, mut f: F) -> DMatrix<R>
    where
        U: Copy,
        F: FnMut(T, U) -> R,
    {
        DMatrix {
            rows: self.rows,
            columns: self.columns,
            elems: self
                .elems
                .iter()
                .copied()
                .zip_eq(other.elems.iter().copied())
                .map(|(a, b)| f(a, b))
                .collect(),
        }
    }

    /// Resolves the second operand of an element-wise operation, checking that it is present and
    /// has the same shape as `self`.
    fn same_shape<'a, U>(
        &self,
        other: Option<&'a DMatrix<U>>,
        operation: Operation,
    ) -> Result<&'a DMatrix<U>> {
        let other = other.ok_or(LinalgError::MissingOperand(operation))?;
        if self.shape() != other.shape() {
            return Err(LinalgError::ShapeMismatch {
                operation,
                lhs: self.shape(),
                rhs: other.shape(),
            });
        }
        Ok(other)
    }

    fn require_square(&self) -> Result<()> {
        if self.is_square() {
            Ok(())
        } else {
            Err(LinalgError::NotSquare(self.shape()))
        }
    }
}

impl<T: Scalar> DMatrix<T> {
    /// Creates a `rows`x`columns` matrix with every element set to 0.
    pub fn zeros(rows: usize, columns: usize) -> Result<Self> {
        Self::from_fn(rows, columns, |_, _| T::ZERO)
    }

    /// Creates the `size`x`size` identity matrix.
    pub fn identity(size: usize) -> Result<Self> {
        Self::from_fn(size, size, |row, col| if row == col { T::ONE } else { T::ZERO })
    }

    /// Element-wise sum of `self` and `other`, promoting to the wider element kind.
    pub fn plus<'a, U, O>(&self, other: O) -> Result<DMatrix<Promoted<T, U>>>
    where
        T: Promote<U>,
        U: Scalar,
        O: Into<Option<&'a DMatrix<U>>>,
    {
        let other = self.same_shape(other.into(), Operation::Add)?;
        Ok(self.zip_with(other, |a, b| promoted(a, b, WrappingOps::wrapping_add)))
    }

    /// Element-wise difference of `self` and `other`, promoting to the wider element kind.
    pub fn minus<'a, U, O>(&self, other: O) -> Result<DMatrix<Promoted<T, U>>>
    where
        T: Promote<U>,
        U: Scalar,
        O: Into<Option<&'a DMatrix<U>>>,
    {
        let other = self.same_shape(other.into(), Operation::Subtract)?;
        Ok(self.zip_with(other, |a, b| promoted(a, b, WrappingOps::wrapping_sub)))
    }

    /// Flips the sign of every element.
    pub fn negated(&self) -> Self {
        self.map(WrappingOps::wrapping_neg)
    }

    /// Multiplies every element by `scalar`, promoting to the wider element kind.
    pub fn multiplied_by<S>(&self, scalar: S) -> DMatrix<Promoted<T, S>>
    where
        T: Promote<S>,
        S: Scalar,
    {
        self.map(|elem| promoted(elem, scalar, WrappingOps::wrapping_mul))
    }

    /// Divides every element by `scalar`, promoting to the wider element kind.
    ///
    /// Integer division by zero panics.
    pub fn divided_by<S>(&self, scalar: S) -> DMatrix<Promoted<T, S>>
    where
        T: Promote<S>,
        S: Scalar,
    {
        self.map(|elem| promoted(elem, scalar, WrappingOps::wrapping_div))
    }

    /// Multiplies this matrix with a column vector.
    ///
    /// The length of `vector` must equal the number of columns of `self`; the result has one
    /// component per row.
    pub fn multiply_vector<'a, U, O>(&self, vector: O) -> Result<DVector<Promoted<T, U>>>
    where
        T: Promote<U>,
        U: Scalar,
        O: Into<Option<&'a DVector<U>>>,
    {
        let vector = vector
            .into()
            .ok_or(LinalgError::MissingOperand(Operation::MultiplyVector))?;
        if vector.len() != self.columns {
            return Err(LinalgError::ShapeMismatch {
                operation: Operation::MultiplyVector,
                lhs: self.shape(),
                rhs: vector.shape(),
            });
        }
        Ok(DVector::from_iter_unchecked((0..self.rows).map(|row| {
            promoted_dot(self.row_iter(row), vector.iter().copied())
        })))
    }

    /// Computes the matrix product of `self` and `other`.
    ///
    /// The number of columns of `self` must equal the number of rows of `other`. The result has
    /// as many rows as `self` and as many columns as `other`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use strata_linalg::*;
    /// let a = DMatrix::from_rows(&[[1, 2, 3], [4, 5, 6]])?;
    /// let b = a.transposed();
    /// assert_eq!(a.multiply_matrix(&b)?, DMatrix::from_rows(&[[14, 32], [32, 77]])?);
    /// assert!(a.multiply_matrix(&a).is_err());
    /// # Ok::<_, LinalgError>(())
    /// ```
    pub fn multiply_matrix<'a, U, O>(&self, other: O) -> Result<DMatrix<Promoted<T, U>>>
    where
        T: Promote<U>,
        U: Scalar,
        O: Into<Option<&'a DMatrix<U>>>,
    {
        let other = other
            .into()
            .ok_or(LinalgError::MissingOperand(Operation::MultiplyMatrix))?;
        if self.columns != other.rows {
            return Err(LinalgError::ShapeMismatch {
                operation: Operation::MultiplyMatrix,
                lhs: self.shape(),
                rhs: other.shape(),
            });
        }
        Ok(DMatrix::from_fn_unchecked(self.rows, other.columns, |i, j| {
            promoted_dot(self.row_iter(i), other.column_slice(j).iter().copied())
        }))
    }

    /// Returns whether this matrix is square and equal to its transpose.
    ///
    /// Non-square matrices are never symmetric.
    pub fn is_symmetric(&self) -> bool {
        self.is_square()
            && (0..self.rows)
                .tuple_combinations()
                .all(|(i, j)| self[(i, j)] == self[(j, i)])
    }

    /// Returns whether this matrix is square and every off-diagonal element is the negation of its
    /// mirrored element.
    ///
    /// Like [`Matrix::is_skew_symmetric`], the diagonal is not checked.
    pub fn is_skew_symmetric(&self) -> bool {
        self.is_square()
            && (0..self.rows)
                .tuple_combinations()
                .all(|(i, j)| self[(i, j)] == self[(j, i)].wrapping_neg())
    }

    /// Returns whether this matrix is square and equal to the negation of its transpose.
    pub fn is_strictly_skew_symmetric(&self) -> bool {
        self.is_skew_symmetric() && (0..self.rows).all(|i| self[(i, i)] == T::ZERO)
    }

    /// Raises this square matrix to the power `exponent` by repeated multiplication.
    ///
    /// Follows the same rules as [`Matrix::power`], including raising the *transpose* for negative
    /// exponents. Returns [`LinalgError::NotSquare`] for non-square matrices.
    pub fn power(&self, exponent: i32) -> Result<Self> {
        self.require_square()?;
        if exponent < 0 {
            log::trace!(
                "raising transpose of {}x{} matrix to {}",
                self.rows,
                self.columns,
                exponent.unsigned_abs()
            );
            Ok(self.transposed().repeated_product(exponent.unsigned_abs()))
        } else {
            Ok(self.repeated_product(exponent.unsigned_abs()))
        }
    }

    /// Raises this square matrix to the power `exponent` in double precision, using the true
    /// inverse for negative exponents.
    pub fn power_with_inverse(&self, exponent: i32) -> Result<DMatrix<f64>> {
        let base = if exponent < 0 {
            self.try_inverse()?
        } else {
            self.require_square()?;
            self.as_double()
        };
        Ok(base.repeated_product(exponent.unsigned_abs()))
    }

    /// Computes the inverse of this square matrix in double precision.
    ///
    /// Returns [`LinalgError::NotSquare`] for non-square and [`LinalgError::Singular`] for
    /// non-invertible matrices.
    pub fn try_inverse(&self) -> Result<DMatrix<f64>> {
        self.require_square()?;
        let n = self.rows;
        let row_major = (0..n)
            .flat_map(|row| self.row_iter(row))
            .map(T::to_f64)
            .collect();
        let inverse = invert(n, row_major)?;
        Ok(DMatrix::from_fn_unchecked(n, n, |row, col| {
            inverse[row * n + col]
        }))
    }

    /// Converts every element to [`f32`].
    pub fn as_float(&self) -> DMatrix<f32> {
        self.map(T::to_f32)
    }

    /// Converts every element to [`f64`].
    pub fn as_double(&self) -> DMatrix<f64> {
        self.map(T::to_f64)
    }

    /// Converts every element to [`i32`], truncating toward zero (saturating, NaN becomes 0).
    pub fn cast_to_int(&self) -> DMatrix<i32> {
        self.map(T::to_i32)
    }

    fn repeated_product(&self, exponent: u32) -> Self {
        log::trace!(
            "computing power {exponent} of {}x{} matrix by repeated multiplication",
            self.rows,
            self.columns
        );
        let n = self.rows;
        let identity = Self::from_fn_unchecked(n, n, |row, col| {
            if row == col {
                T::ONE
            } else {
                T::ZERO
            }
        });
        (0..exponent).fold(identity, |acc, _| {
            Self::from_fn_unchecked(n, n, |i, j| {
                sum_of_products(acc.row_iter(i), self.column_slice(j).iter().copied())
            })
        })
    }
}

/// Converts a fixed-size matrix into an arbitrary-size one.
///
/// A `0x0` matrix is rejected at compile time:
///
/// ```compile_fail
/// # use strata_linalg::*;
/// let empty = DMatrix::from(Matrix::<f64, 0>::ZERO);
/// ```
impl<T: Copy, const N: usize> From<Matrix<T, N>> for DMatrix<T> {
    fn from(matrix: Matrix<T, N>) -> Self {
        let () = NonEmpty::<N>::ASSERT;
        Self {
            rows: N,
            columns: N,
            elems: matrix
                .columns()
                .into_iter()
                .flat_map(|col| col.into_array())
                .collect(),
        }
    }
}

impl<T: Copy, const N: usize> TryFrom<&DMatrix<T>> for Matrix<T, N> {
    type Error = LinalgError;

    fn try_from(matrix: &DMatrix<T>) -> Result<Self> {
        if matrix.rows != N || matrix.columns != N {
            return Err(LinalgError::ShapeMismatch {
                operation: Operation::Convert,
                lhs: matrix.shape(),
                rhs: Shape::Matrix {
                    rows: N,
                    columns: N,
                },
            });
        }
        Ok(Matrix::from_fn(|row, col| matrix[(row, col)]))
    }
}

impl<T: fmt::Debug> fmt::Debug for DMatrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        struct FormatRow<'a, T>(&'a DMatrix<T>, usize);
        impl<'a, T: fmt::Debug> fmt::Debug for FormatRow<'a, T> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                let (matrix, row) = (self.0, self.1);
                write!(f, "[")?;
                for col in 0..matrix.columns {
                    if col != 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{:?}", matrix[(row, col)])?;
                }
                write!(f, "]")
            }
        }

        let mut list = f.debug_list();
        for row in 0..self.rows {
            list.entry(&FormatRow(self, row));
        }
        list.finish()
    }
}

/// Formats the matrix row by row, with its shape as a prefix, eg. `Matrix2x2[[1, 2], [3, 4]]`.
impl<T: fmt::Display> fmt::Display for DMatrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rows = (0..self.rows).format_with(", ", |row, g| {
            let elems = (0..self.columns).map(|col| &self[(row, col)]);
            g(&format_args!("[{}]", elems.format(", ")))
        });
        write!(f, "Matrix{}x{}[{}]", self.rows, self.columns, rows)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use crate::{Mat3i, Vec3i};

    use super::*;

    fn dmat<T: Copy, const C: usize>(rows: &[[T; C]]) -> DMatrix<T> {
        DMatrix::from_rows(rows).unwrap()
    }

    fn dvec<T: Copy>(elems: &[T]) -> DVector<T> {
        DVector::from_slice(elems).unwrap()
    }

    #[test]
    fn construction() {
        let mat = dmat(&[[1, 2, 3], [4, 5, 6]]);
        assert_eq!(mat.nrows(), 2);
        assert_eq!(mat.ncols(), 3);
        assert!(!mat.is_square());
        assert_eq!(mat, DMatrix::from_columns(&[[1, 4], [2, 5], [3, 6]]).unwrap());
        assert_eq!(
            mat,
            DMatrix::from_fn(2, 3, |row, col| (row * 3 + col + 1) as i32).unwrap()
        );

        assert_eq!(
            DMatrix::<f32>::zeros(2, 2).unwrap(),
            DMatrix::from_rows(&[[0.0f32, 0.0], [0.0, 0.0]]).unwrap()
        );
        assert_eq!(
            DMatrix::<i32>::identity(2).unwrap(),
            dmat(&[[1, 0], [0, 1]])
        );
    }

    #[test]
    fn malformed() {
        let empty: &[[i32; 2]] = &[];
        assert_eq!(
            DMatrix::from_rows(empty),
            Err(LinalgError::Malformed(Malformed::Empty))
        );
        assert_eq!(
            DMatrix::from_rows(&[vec![], vec![1]]),
            Err(LinalgError::Malformed(Malformed::EmptyRow { row: 0 }))
        );
        assert_eq!(
            DMatrix::from_rows(&[vec![1, 2, 3], vec![4, 5]]),
            Err(LinalgError::Malformed(Malformed::Ragged {
                row: 1,
                expected: 3,
                found: 2
            }))
        );
        assert_eq!(
            DMatrix::from_columns(&[vec![1.0], vec![2.0, 3.0]]),
            Err(LinalgError::Malformed(Malformed::Ragged {
                row: 1,
                expected: 1,
                found: 2
            }))
        );
        assert!(DMatrix::<f64>::zeros(0, 3).is_err());
        assert!(DMatrix::<f64>::identity(0).is_err());
    }

    #[test]
    fn access() {
        let mat = dmat(&[[1, 2, 3], [4, 5, 6]]);
        assert_eq!(mat[(1, 2)], 6);
        assert_eq!(mat.get(0, 1), Some(&2));
        assert_eq!(mat.get(2, 0), None);
        assert_eq!(mat.get(0, 3), None);
        assert_eq!(mat.row(1), Ok(dvec(&[4, 5, 6])));
        assert_eq!(mat.column(2), Ok(dvec(&[3, 6])));
        assert_eq!(
            mat.column(3),
            Err(LinalgError::IndexOutOfBounds {
                axis: Axis::Column,
                index: 3,
                len: 3
            })
        );
        assert!(mat.row(2).is_err());
        assert_eq!(mat.rows().count(), 2);
        assert_eq!(mat.columns().nth(1), Some(dvec(&[2, 5])));
    }

    #[test]
    #[should_panic]
    fn index_out_of_bounds() {
        // Would alias element (0, 1) with naive column-major indexing.
        let mat = dmat(&[[1, 2], [3, 4]]);
        let _ = mat[(2, 0)];
    }

    #[test]
    fn fmt() {
        let mat = dmat(&[[1, 2, 3], [4, 5, 6]]);
        assert_eq!(mat.to_string(), "Matrix2x3[[1, 2, 3], [4, 5, 6]]");
        assert_eq!(format!("{:?}", mat), "[[1, 2, 3], [4, 5, 6]]");
        assert_eq!(dmat(&[[0.5f64]]).to_string(), "Matrix1x1[[0.5]]");
    }

    #[test]
    fn elementwise() {
        let a = dmat(&[[1, 2, 3], [4, 5, 6]]);
        let b = dmat(&[[0.5f64, 0.5, 0.5], [0.5, 0.5, 0.5]]);
        assert_eq!(
            a.plus(&b).unwrap(),
            dmat(&[[1.5, 2.5, 3.5], [4.5, 5.5, 6.5]])
        );
        assert_eq!(a.minus(&a).unwrap(), DMatrix::<i32>::zeros(2, 3).unwrap());
        assert_eq!(a.negated().plus(&a).unwrap(), DMatrix::<i32>::zeros(2, 3).unwrap());
        assert_eq!(a.multiplied_by(2)[(1, 2)], 12);
        assert_eq!(a.divided_by(4.0f32)[(0, 0)], 0.25);

        let square = dmat(&[[1, 2], [3, 4]]);
        assert_eq!(
            a.plus(&square),
            Err(LinalgError::ShapeMismatch {
                operation: Operation::Add,
                lhs: Shape::Matrix {
                    rows: 2,
                    columns: 3
                },
                rhs: Shape::Matrix {
                    rows: 2,
                    columns: 2
                },
            })
        );
        assert_eq!(
            a.minus(None::<&DMatrix<i32>>),
            Err(LinalgError::MissingOperand(Operation::Subtract))
        );
    }

    #[test]
    fn mat_vec_mul() {
        let mat = dmat(&[[1, 2, 3], [4, 5, 6]]);
        assert_eq!(mat.multiply_vector(&dvec(&[1, 0, -1])), Ok(dvec(&[-2, -2])));
        assert_eq!(
            mat.multiply_vector(&dvec(&[0.5f32, 0.0, 0.0])),
            Ok(dvec(&[0.5f32, 2.0]))
        );
        assert_eq!(
            mat.multiply_vector(&dvec(&[1, 1])),
            Err(LinalgError::ShapeMismatch {
                operation: Operation::MultiplyVector,
                lhs: Shape::Matrix {
                    rows: 2,
                    columns: 3
                },
                rhs: Shape::Vector(2),
            })
        );
        assert_eq!(
            mat.multiply_vector(None::<&DVector<i32>>),
            Err(LinalgError::MissingOperand(Operation::MultiplyVector))
        );
    }

    #[test]
    fn mat_mat_mul() {
        let a = dmat(&[[1, 2, 3], [4, 5, 6]]);
        let b = dmat(&[[1, 0], [0, 1], [1, 1]]);
        assert_eq!(a.multiply_matrix(&b), Ok(dmat(&[[4, 5], [10, 11]])));
        assert_eq!(
            b.multiply_matrix(&a),
            Ok(dmat(&[[1, 2, 3], [4, 5, 6], [5, 7, 9]]))
        );
        assert_eq!(
            a.multiply_matrix(&a),
            Err(LinalgError::ShapeMismatch {
                operation: Operation::MultiplyMatrix,
                lhs: a.shape(),
                rhs: a.shape(),
            })
        );
        assert!(a.multiply_matrix(None::<&DMatrix<f64>>).is_err());
    }

    #[test]
    fn transpose() {
        let a = dmat(&[[1, 2, 3], [4, 5, 6]]);
        let t = a.transposed();
        assert_eq!(t, dmat(&[[1, 4], [2, 5], [3, 6]]));
        assert_eq!(t.transposed(), a);
    }

    #[test]
    fn symmetry() {
        let a = dmat(&[[1, 2, 3], [4, 5, 6]]);
        assert!(!a.is_symmetric());
        assert!(!a.is_skew_symmetric());
        assert!(!a.is_strictly_skew_symmetric());

        let sym = dmat(&[[1, 7], [7, 2]]);
        assert!(sym.is_symmetric());
        assert!(!sym.is_skew_symmetric());

        let skew = dmat(&[[3, -1], [1, 0]]);
        assert!(skew.is_skew_symmetric());
        assert!(!skew.is_strictly_skew_symmetric());
        assert!(dmat(&[[0, -1], [1, 0]]).is_strictly_skew_symmetric());
    }

    #[test]
    fn power() {
        let a = dmat(&[[1, 1], [0, 1]]);
        assert_eq!(a.power(0), DMatrix::identity(2));
        assert_eq!(a.power(1), Ok(a.clone()));
        assert_eq!(a.power(4), Ok(dmat(&[[1, 4], [0, 1]])));
        assert_eq!(a.power(-4), Ok(dmat(&[[1, 0], [4, 1]])));

        let rect = dmat(&[[1, 2, 3], [4, 5, 6]]);
        assert_eq!(
            rect.power(2),
            Err(LinalgError::NotSquare(Shape::Matrix {
                rows: 2,
                columns: 3
            }))
        );
        assert!(rect.power(0).is_err());
        assert!(rect.try_inverse().is_err());
        assert!(rect.power_with_inverse(1).is_err());
    }

    #[test]
    fn inverse() {
        let a = dmat(&[[1, 1], [0, 1]]);
        assert_eq!(a.try_inverse(), Ok(dmat(&[[1.0, -1.0], [0.0, 1.0]])));
        assert_eq!(a.power_with_inverse(-3), Ok(dmat(&[[1.0, -3.0], [0.0, 1.0]])));
        assert_eq!(a.power_with_inverse(3), Ok(dmat(&[[1.0, 3.0], [0.0, 1.0]])));

        let b = dmat(&[[4.0, 7.0], [2.0, 6.0]]);
        let product = b.multiply_matrix(&b.try_inverse().unwrap()).unwrap();
        assert_relative_eq!(product, DMatrix::identity(2).unwrap(), epsilon = 1e-12);

        assert_eq!(
            dmat(&[[1, 2], [2, 4]]).try_inverse(),
            Err(LinalgError::Singular)
        );
    }

    #[test]
    fn inverse_of_non_finite() {
        assert_eq!(
            dmat(&[[1.0, f64::NAN], [0.0, 1.0]]).try_inverse(),
            Err(LinalgError::Singular)
        );
        assert_eq!(
            dmat(&[[f32::NEG_INFINITY, 0.0], [0.0, 1.0]]).try_inverse(),
            Err(LinalgError::Singular)
        );
    }

    #[test]
    fn integer_overflow_wraps() {
        let max = dmat(&[[i32::MAX, 0], [0, 1]]);
        assert_eq!(max.plus(&max), Ok(dmat(&[[-2, 0], [0, 2]])));
        assert_eq!(max.multiplied_by(2), dmat(&[[-2, 0], [0, 2]]));

        let big = dmat(&[[50_000, 0], [0, 1]]);
        let square = 50_000i32.wrapping_mul(50_000);
        assert_eq!(big.multiply_matrix(&big), Ok(dmat(&[[square, 0], [0, 1]])));
        assert_eq!(big.power(2), Ok(dmat(&[[square, 0], [0, 1]])));
        assert_eq!(big.multiply_vector(&dvec(&[50_000, 0])), Ok(dvec(&[square, 0])));

        let min = dmat(&[[0, i32::MIN], [i32::MIN, 0]]);
        assert!(min.is_strictly_skew_symmetric());
        assert_eq!(min.negated(), min);
    }

    #[test]
    fn casts() {
        let a = dmat(&[[1.5f32, -0.5]]);
        assert_eq!(a.cast_to_int(), dmat(&[[1, 0]]));
        assert_eq!(a.as_double(), dmat(&[[1.5f64, -0.5]]));
        assert_eq!(dmat(&[[1, 2]]).as_float(), dmat(&[[1.0f32, 2.0]]));
    }

    #[test]
    fn conversions() {
        let fixed = Mat3i::from_fn(|row, col| (row * 3 + col) as i32);
        let dynamic = DMatrix::from(fixed);
        assert_eq!(dynamic.row(1), Ok(dvec(&[3, 4, 5])));
        assert_eq!(Mat3i::try_from(&dynamic), Ok(fixed));
        assert!(crate::Mat4i::try_from(&dynamic).is_err());

        let v: Vec3i = fixed.multiply_vector(Vec3i::X);
        let dv = dynamic.multiply_vector(&DVector::from(Vec3i::X)).unwrap();
        assert_eq!(DVector::from(v), dv);
    }

    #[test]
    fn single_element_conversion() {
        let dynamic = DMatrix::from(Matrix::from_rows([[5i32]]));
        assert_eq!(dynamic.shape(), Shape::Matrix { rows: 1, columns: 1 });
        assert_eq!(dynamic.columns().collect::<Vec<_>>(), vec![dvec(&[5])]);
        assert_eq!(dynamic.rows().collect::<Vec<_>>(), vec![dvec(&[5])]);
        assert_eq!(Matrix::<i32, 1>::try_from(&dynamic), Ok(Matrix::from_rows([[5]])));
    }
}

//! Errors reported by fallible container operations.

use std::fmt;

use thiserror::Error;

/// Result type alias for fallible container operations.
pub type Result<T> = std::result::Result<T, LinalgError>;

/// The errors that can be returned by container operations.
///
/// Shape and operand errors are only produced by [`DVector`] and [`DMatrix`]. The fixed-size
/// containers only report out-of-bounds rows or columns and singular matrices.
///
/// None of these are transient: the operation produces no partial result, and retrying it with the
/// same operands fails the same way.
///
/// [`DVector`]: crate::DVector
/// [`DMatrix`]: crate::DMatrix
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum LinalgError {
    /// The operands of a binary operation do not have conformable shapes.
    #[error("cannot {operation}: shapes {lhs} and {rhs} are not conformable")]
    ShapeMismatch {
        operation: Operation,
        lhs: Shape,
        rhs: Shape,
    },

    /// The operation requires a square matrix.
    #[error("operation requires a square matrix, but got a {0} matrix")]
    NotSquare(Shape),

    /// The backing data of a container was rejected at construction time.
    #[error("malformed container: {0}")]
    Malformed(Malformed),

    /// The second operand of a binary operation was absent.
    #[error("cannot {0}: missing second operand")]
    MissingOperand(Operation),

    /// An index was outside of the valid range.
    #[error("{axis} index {index} is out of bounds (length {len})")]
    IndexOutOfBounds { axis: Axis, index: usize, len: usize },

    /// The matrix has no inverse.
    #[error("matrix is singular")]
    Singular,
}

/// The shape of a container, as reported in errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shape {
    /// A vector with the given number of components.
    Vector(usize),
    /// A matrix with the given number of rows and columns.
    Matrix { rows: usize, columns: usize },
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Shape::Vector(len) => write!(f, "{len}"),
            Shape::Matrix { rows, columns } => write!(f, "{rows}x{columns}"),
        }
    }
}

/// A binary operation that can fail due to its operands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Add,
    Subtract,
    Dot,
    Angle,
    MultiplyVector,
    MultiplyMatrix,
    Convert,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Operation::Add => "add",
            Operation::Subtract => "subtract",
            Operation::Dot => "compute dot product",
            Operation::Angle => "compute angle",
            Operation::MultiplyVector => "multiply matrix by vector",
            Operation::MultiplyMatrix => "multiply matrices",
            Operation::Convert => "convert",
        })
    }
}

/// Why a container could not be constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Malformed {
    /// No elements (or no rows) were provided.
    Empty,
    /// A row (or column) of a matrix has no elements.
    EmptyRow { row: usize },
    /// A row (or column) of a matrix has a different length than the first one.
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },
}

impl fmt::Display for Malformed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Malformed::Empty => f.write_str("no elements"),
            Malformed::EmptyRow { row } => write!(f, "row {row} is empty"),
            Malformed::Ragged {
                row,
                expected,
                found,
            } => write!(f, "row {row} has {found} elements, expected {expected}"),
        }
    }
}

/// The axis an out-of-bounds index refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    Component,
    Row,
    Column,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Axis::Component => "component",
            Axis::Row => "row",
            Axis::Column => "column",
        })
    }
}

/// Returns an [`LinalgError::IndexOutOfBounds`] error unless `index < len`.
pub(crate) fn check_index(axis: Axis, index: usize, len: usize) -> Result<()> {
    if index < len {
        Ok(())
    } else {
        Err(LinalgError::IndexOutOfBounds { axis, index, len })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages() {
        let err = LinalgError::ShapeMismatch {
            operation: Operation::Add,
            lhs: Shape::Vector(3),
            rhs: Shape::Vector(5),
        };
        assert_eq!(err.to_string(), "cannot add: shapes 3 and 5 are not conformable");

        let err = LinalgError::ShapeMismatch {
            operation: Operation::MultiplyMatrix,
            lhs: Shape::Matrix {
                rows: 2,
                columns: 3,
            },
            rhs: Shape::Matrix {
                rows: 2,
                columns: 3,
            },
        };
        assert_eq!(
            err.to_string(),
            "cannot multiply matrices: shapes 2x3 and 2x3 are not conformable"
        );

        let err = LinalgError::MissingOperand(Operation::Dot);
        assert_eq!(err.to_string(), "cannot compute dot product: missing second operand");

        let err = LinalgError::Malformed(Malformed::Ragged {
            row: 1,
            expected: 3,
            found: 2,
        });
        assert_eq!(
            err.to_string(),
            "malformed container: row 1 has 2 elements, expected 3"
        );

        let err = LinalgError::IndexOutOfBounds {
            axis: Axis::Row,
            index: 4,
            len: 2,
        };
        assert_eq!(err.to_string(), "row index 4 is out of bounds (length 2)");
    }

    #[test]
    fn index_check() {
        assert!(check_index(Axis::Column, 1, 2).is_ok());
        assert_eq!(
            check_index(Axis::Column, 2, 2),
            Err(LinalgError::IndexOutOfBounds {
                axis: Axis::Column,
                index: 2,
                len: 2
            })
        );
    }
}

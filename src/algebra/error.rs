/* ************************************************************************ **
** This file is part of lina, and is licensed under EITHER the MIT license  **
** or the Apache 2.0 license, at your option.                               **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

pub type Result<T> = std::result::Result<T, Error>;

use std::fmt;

/// `(rows, cols)` of a `Matrix`.
pub type Shape = (usize, usize);

/// Size of an operand, as reported in a `DimensionMismatch`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Dims {
    Vector(usize),
    Matrix(Shape),
}

impl fmt::Display for Dims {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Dims::Vector(n) => write!(f, "{}", n),
            Dims::Matrix((r, c)) => write!(f, "{}x{}", r, c),
        }
    }
}

/// Every way that constructing or operating on a `Vector` or `Matrix` can fail.
///
/// Nothing in this crate recovers from these; they are always handed
/// straight back to the caller.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    #[error("{at} is not numeric (found {found})")]
    TypeMismatch { at: String, found: String },

    #[error("{op}: incompatible dimensions {left} and {right}")]
    DimensionMismatch { op: &'static str, left: Dims, right: Dims },

    #[error("{what} cannot be empty")]
    Empty { what: &'static str },

    #[error("matrix rows must all have the same length (row {row} has {found}, expected {expected})")]
    Ragged { row: usize, expected: usize, found: usize },

    #[error("matrix shape {shape:?} has more elements than can be addressed")]
    TooLarge { shape: Shape },

    #[error("cannot divide by zero")]
    DivisionByZero,

    #[error("{op} is defined only for square matrices (got shape {shape:?})")]
    NotSquare { op: &'static str, shape: Shape },

    #[error("matrix is singular and cannot be inverted")]
    Singular,

    #[error("{op} is not implemented for {size}x{size} matrices")]
    Unsupported { op: &'static str, size: usize },
}

/// The category of an [`Error`], with none of the details.
///
/// [`Error`]: enum.Error.html
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    TypeMismatch,
    DimensionMismatch,
    /// Empty, oversized, or non-rectangular input to a constructor.
    ValueError,
    DivisionByZero,
    NotSquare,
    Singular,
    Unsupported,
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match *self {
            Error::TypeMismatch { .. } => ErrorKind::TypeMismatch,
            Error::DimensionMismatch { .. } => ErrorKind::DimensionMismatch,
            Error::Empty { .. } |
            Error::Ragged { .. } |
            Error::TooLarge { .. } => ErrorKind::ValueError,
            Error::DivisionByZero => ErrorKind::DivisionByZero,
            Error::NotSquare { .. } => ErrorKind::NotSquare,
            Error::Singular => ErrorKind::Singular,
            Error::Unsupported { .. } => ErrorKind::Unsupported,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds() {
        assert_eq!(Error::Empty { what: "vector" }.kind(), ErrorKind::ValueError);
        assert_eq!(Error::Ragged { row: 1, expected: 2, found: 1 }.kind(), ErrorKind::ValueError);
        assert_eq!(Error::TooLarge { shape: (usize::MAX, 2) }.kind(), ErrorKind::ValueError);
        assert_eq!(Error::Singular.kind(), ErrorKind::Singular);
    }

    #[test]
    fn messages() {
        let e = Error::DimensionMismatch {
            op: "matrix product",
            left: Dims::Matrix((2, 3)),
            right: Dims::Matrix((2, 3)),
        };
        assert_eq!(e.to_string(), "matrix product: incompatible dimensions 2x3 and 2x3");

        let e = Error::DimensionMismatch { op: "dot", left: Dims::Vector(2), right: Dims::Vector(3) };
        assert_eq!(e.to_string(), "dot: incompatible dimensions 2 and 3");

        let e = Error::Unsupported { op: "determinant", size: 4 };
        assert_eq!(e.to_string(), "determinant is not implemented for 4x4 matrices");

        let e = Error::NotSquare { op: "inverse", shape: (2, 3) };
        assert_eq!(e.to_string(), "inverse is defined only for square matrices (got shape (2, 3))");
    }
}

/* ************************************************************************ **
** This file is part of lina, and is licensed under EITHER the MIT license  **
** or the Apache 2.0 license, at your option.                               **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! Owned dense matrices of any (nonzero) shape.
//!
//! Determinants and inverses are closed-form and only cover the small
//! sizes they are implemented for; anything else is reported as
//! `Unsupported` rather than attempted some other way.

use std::convert::TryFrom;
use std::fmt;
use std::ops::Index;

use crate::error::{Error, Result, Dims, Shape};
use crate::validate;

/// Owned matrix type with C layout.
#[derive(Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "crate::serde_impls::RawMatrix", into = "Vec<Vec<f64>>"))]
pub struct Matrix {
    // c-contiguous, row-contiguous data
    data: Vec<f64>,
    // invariant: height * width == data.len(), and neither is zero
    height: usize,
    width: usize,
}

pub type ContiguousRows<'a> = std::slice::Chunks<'a, f64>;

impl Matrix {
    /// Construct from a sequence of rows, which must be nonempty and
    /// all have the same nonzero length.
    ///
    /// The rows are copied.
    ///
    /// ```
    /// use lina_algebra::Matrix;
    ///
    /// let m = Matrix::new(&[[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]]).unwrap();
    /// assert_eq!(m.shape(), (2, 3));
    /// assert!(Matrix::new(vec![vec![1.0, 2.0], vec![3.0]]).is_err());
    /// ```
    pub fn new<I>(rows: I) -> Result<Matrix>
    where
        I: IntoIterator,
        I::Item: AsRef<[f64]>,
    {
        let ((height, width), data) = validate::rectangular::<f64, _>(rows)?;
        Ok(Matrix { data, height, width })
    }

    /// Construct from an iterator of rows, e.g. `Matrix::from_rows(rows.into_iter())`.
    ///
    /// Same as [`Matrix::new`].
    pub fn from_rows<I>(rows: I) -> Result<Matrix>
    where
        I: IntoIterator,
        I::Item: AsRef<[f64]>,
    { Matrix::new(rows) }

    pub fn from_row_major_data((height, width): Shape, data: Vec<f64>) -> Result<Matrix>
    {
        validate::row_major((height, width), data.len())?;
        Ok(Matrix { data, height, width })
    }

    /// Construct the `n x n` identity matrix.
    pub fn eye(n: usize) -> Result<Matrix>
    {
        validate::element_count((n, n))?;
        Ok(Matrix::from_fn((n, n), |r, c| match r == c {
            true => 1.0,
            false => 0.0,
        }))
    }

    #[inline] pub fn num_rows(&self) -> usize { self.height }
    #[inline] pub fn num_cols(&self) -> usize { self.width }
    #[inline] pub fn shape(&self) -> Shape { (self.height, self.width) }
    #[inline] pub fn is_square(&self) -> bool { self.height == self.width }

    pub fn row_major_data(&self) -> &[f64] { &self.data }
    pub fn rows(&self) -> ContiguousRows<'_> { self.data.chunks(self.width) }
    pub fn to_rows(&self) -> Vec<Vec<f64>> { self.rows().map(|row| row.to_vec()).collect() }

    pub fn add(&self, other: &Matrix) -> Result<Matrix>
    { self.zip_with("matrix addition", other, |a, b| a + b) }

    pub fn subtract(&self, other: &Matrix) -> Result<Matrix>
    { self.zip_with("matrix subtraction", other, |a, b| a - b) }

    /// Multiply each element by a scalar.
    pub fn scale(&self, scalar: f64) -> Matrix
    { self.map(|a| a * scalar) }

    /// Matrix product.  Requires `self.num_cols() == other.num_rows()`.
    pub fn multiply(&self, other: &Matrix) -> Result<Matrix>
    {
        if self.width != other.height {
            return Err(Error::DimensionMismatch {
                op: "matrix product",
                left: self.dims(),
                right: other.dims(),
            });
        }
        trace!("matrix product: {:?} x {:?}", self.shape(), other.shape());

        let other_t = other.transpose();
        let mut data = Vec::with_capacity(self.height * other.width);
        for a_row in self.rows() {
            for b_col in other_t.rows() {
                data.push(a_row.iter().zip(b_col).fold(0.0, |acc, (x, y)| acc + x * y));
            }
        }
        Ok(Matrix { data, height: self.height, width: other.width })
    }

    /// Matrix transpose.
    pub fn transpose(&self) -> Matrix
    { Matrix::from_fn((self.width, self.height), |r, c| self[(c, r)]) }

    /// Matrix determinant.  Implemented for 2x2 and 3x3 matrices.
    pub fn determinant(&self) -> Result<f64>
    {
        self.require_square("determinant")?;
        match self.data[..] {
            [a, b,
             c, d] => Ok(a * d - b * c),

            // cofactor expansion along the first row
            [a, b, c,
             d, e, f,
             g, h, i] => Ok(a * (e * i - f * h) - b * (d * i - f * g) + c * (d * h - e * g)),

            _ => Err(self.unsupported("determinant")),
        }
    }

    /// Matrix inverse.  Implemented for 2x2 and 3x3 matrices.
    pub fn inverse(&self) -> Result<Matrix>
    {
        self.require_square("inverse")?;
        let det = self.determinant()?;
        if det == 0.0 {
            debug!("refusing to invert a singular matrix: {:?}", self);
            return Err(Error::Singular);
        }
        let rdet = 1.0 / det;

        match self.data[..] {
            [a, b,
             c, d] => {
                let adjugate = Matrix { data: vec![d, -b, -c, a], height: 2, width: 2 };
                Ok(adjugate.scale(rdet))
            },
            [_, _, _,
             _, _, _,
             _, _, _] => {
                // cofactors of a 3x3 can be written cyclically without any signs
                let cofactors = Matrix::from_fn((3, 3), |r, c| {
                    0.0
                    + self[((r+1) % 3, (c+1) % 3)] * self[((r+2) % 3, (c+2) % 3)]
                    - self[((r+1) % 3, (c+2) % 3)] * self[((r+2) % 3, (c+1) % 3)]
                });
                Ok(cofactors.transpose().scale(rdet))
            },
            _ => Err(self.unsupported("inverse")),
        }
    }

    fn dims(&self) -> Dims
    { Dims::Matrix(self.shape()) }

    fn require_square(&self, op: &'static str) -> Result<()>
    {
        match self.is_square() {
            true => Ok(()),
            false => Err(Error::NotSquare { op, shape: self.shape() }),
        }
    }

    fn unsupported(&self, op: &'static str) -> Error
    {
        debug!("no {} implementation for {}x{} matrices", op, self.height, self.width);
        Error::Unsupported { op, size: self.height }
    }

    // Callers are responsible for choosing a valid shape.
    fn from_fn<F>((height, width): Shape, mut f: F) -> Matrix
    where F: FnMut(usize, usize) -> f64,
    {
        let mut data = Vec::with_capacity(height * width);
        for r in 0..height {
            for c in 0..width {
                data.push(f(r, c));
            }
        }
        Matrix { data, height, width }
    }

    fn map<F>(&self, f: F) -> Matrix
    where F: FnMut(f64) -> f64,
    {
        let data = self.data.iter().cloned().map(f).collect();
        Matrix { data, height: self.height, width: self.width }
    }

    fn zip_with<F>(&self, op: &'static str, other: &Matrix, mut f: F) -> Result<Matrix>
    where F: FnMut(f64, f64) -> f64,
    {
        validate::same_dims(op, self.dims(), other.dims())?;
        let data = self.data.iter().zip(&other.data).map(|(&a, &b)| f(a, b)).collect();
        Ok(Matrix { data, height: self.height, width: self.width })
    }
}

impl Index<(usize, usize)> for Matrix {
    type Output = f64;

    #[inline(always)] // inlining should often remove bounds checks
    fn index(&self, (r, c): (usize, usize)) -> &f64
    {
        assert!(c < self.width, "column {} out of range for {} columns", c, self.width);
        &self.data[r * self.width + c]
    }
}

impl TryFrom<Vec<Vec<f64>>> for Matrix {
    type Error = Error;

    fn try_from(rows: Vec<Vec<f64>>) -> Result<Matrix>
    { Matrix::new(rows) }
}

impl From<Matrix> for Vec<Vec<f64>> {
    fn from(m: Matrix) -> Vec<Vec<f64>>
    { m.to_rows() }
}

impl fmt::Debug for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    { f.debug_list().entries(self.rows()).finish() }
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    { write!(f, "Matrix({:?})", self) }
}

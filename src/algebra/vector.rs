/* ************************************************************************ **
** This file is part of lina, and is licensed under EITHER the MIT license  **
** or the Apache 2.0 license, at your option.                               **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

use std::convert::TryFrom;
use std::fmt;
use std::ops::Index;

use crate::error::{Error, Result, Dims};
use crate::validate;

/// A vector of any (nonzero) dimension, fixed at construction.
///
/// There are no methods that modify a `Vector`; every operation
/// produces a new one.
#[derive(Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "crate::serde_impls::RawVector", into = "Vec<f64>"))]
pub struct Vector {
    // invariant: nonempty
    data: Vec<f64>,
}

impl Vector {
    /// Construct from the elements, which must not be empty.
    pub fn new<D: Into<Vec<f64>>>(data: D) -> Result<Vector>
    { Ok(Vector { data: validate::nonempty("vector", data.into())? }) }

    /// Get a zero vector.
    pub fn zero(dimension: usize) -> Result<Vector>
    { Vector::new(vec![0.0; dimension]) }

    #[inline]
    pub fn dimension(&self) -> usize { self.data.len() }

    #[inline]
    pub fn as_slice(&self) -> &[f64] { &self.data }

    pub fn to_vec(&self) -> Vec<f64> { self.data.clone() }

    pub fn iter(&self) -> std::slice::Iter<'_, f64> { self.data.iter() }

    pub fn add(&self, other: &Vector) -> Result<Vector>
    { self.zip_with("vector addition", other, |a, b| a + b) }

    pub fn subtract(&self, other: &Vector) -> Result<Vector>
    { self.zip_with("vector subtraction", other, |a, b| a - b) }

    /// Multiply each element by a scalar.
    pub fn scale(&self, scalar: f64) -> Vector
    { self.map(|a| a * scalar) }

    /// Divide each element by a scalar, which must be nonzero.
    pub fn divide(&self, scalar: f64) -> Result<Vector>
    {
        if scalar == 0.0 {
            return Err(Error::DivisionByZero);
        }
        Ok(self.map(|a| a / scalar))
    }

    /// Get the inner product of two vectors.
    pub fn dot(&self, other: &Vector) -> Result<f64>
    {
        self.check_same_dimension("dot product", other)?;
        Ok(self.iter().zip(other).fold(0.0, |acc, (a, b)| acc + a * b))
    }

    /// Cross-product. Only defined on 3-dimensional vectors.
    pub fn cross(&self, other: &Vector) -> Result<Vector>
    {
        match (&self.data[..], &other.data[..]) {
            (&[a1, a2, a3], &[b1, b2, b3]) => Ok(Vector {
                data: vec![
                    a2 * b3 - a3 * b2,
                    a3 * b1 - a1 * b3,
                    a1 * b2 - a2 * b1,
                ],
            }),
            _ => Err(Error::DimensionMismatch {
                op: "cross product (3d only)",
                left: self.dims(),
                right: other.dims(),
            }),
        }
    }

    /// Get the vector's magnitude.
    pub fn norm(&self) -> f64
    { self.sqnorm().sqrt() }

    /// Get the vector's squared magnitude.
    pub fn sqnorm(&self) -> f64
    { self.iter().fold(0.0, |acc, a| acc + a * a) }

    fn dims(&self) -> Dims
    { Dims::Vector(self.dimension()) }

    fn check_same_dimension(&self, op: &'static str, other: &Vector) -> Result<()>
    { validate::same_dims(op, self.dims(), other.dims()) }

    // The output has the same dimension as `self`, so it needs no validation.
    fn map<F>(&self, f: F) -> Vector
    where F: FnMut(f64) -> f64,
    { Vector { data: self.iter().cloned().map(f).collect() } }

    fn zip_with<F>(&self, op: &'static str, other: &Vector, mut f: F) -> Result<Vector>
    where F: FnMut(f64, f64) -> f64,
    {
        self.check_same_dimension(op, other)?;
        let data = self.iter().zip(other).map(|(&a, &b)| f(a, b)).collect();
        Ok(Vector { data })
    }
}

impl Index<usize> for Vector {
    type Output = f64;

    #[inline(always)]
    fn index(&self, index: usize) -> &f64
    { &self.data[index] }
}

impl<'a> IntoIterator for &'a Vector {
    type Item = &'a f64;
    type IntoIter = std::slice::Iter<'a, f64>;

    #[inline(always)]
    fn into_iter(self) -> Self::IntoIter
    { self.data.iter() }
}

impl TryFrom<Vec<f64>> for Vector {
    type Error = Error;

    fn try_from(data: Vec<f64>) -> Result<Vector>
    { Vector::new(data) }
}

impl<'a> TryFrom<&'a [f64]> for Vector {
    type Error = Error;

    fn try_from(data: &'a [f64]) -> Result<Vector>
    { Vector::new(data) }
}

impl From<Vector> for Vec<f64> {
    fn from(v: Vector) -> Vec<f64>
    { v.data }
}

// Debug shows only the elements, so that debug output can be pasted
// as JSON or Python.
impl fmt::Debug for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    { fmt::Debug::fmt(&self.data, f) }
}

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    { write!(f, "Vector({:?})", self.data) }
}

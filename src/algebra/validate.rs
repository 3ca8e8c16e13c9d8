/* ************************************************************************ **
** This file is part of lina, and is licensed under EITHER the MIT license  **
** or the Apache 2.0 license, at your option.                               **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! Checks shared by the `Vector` and `Matrix` constructors and operations.

use crate::error::{Error, Result, Dims, Shape};

pub(crate) fn nonempty<T>(what: &'static str, data: Vec<T>) -> Result<Vec<T>>
{
    match data.is_empty() {
        true => Err(Error::Empty { what }),
        false => Ok(data),
    }
}

/// Copy a grid of rows into row-major storage, verifying that it is
/// nonempty and rectangular.
///
/// The output never shares storage with the input.
pub(crate) fn rectangular<T, I>(rows: I) -> Result<(Shape, Vec<T>)>
where
    T: Clone,
    I: IntoIterator,
    I::Item: AsRef<[T]>,
{
    let mut rows = rows.into_iter();
    let first = match rows.next() {
        Some(row) => row,
        None => return Err(Error::Empty { what: "matrix" }),
    };

    let width = first.as_ref().len();
    if width == 0 {
        return Err(Error::Empty { what: "matrix" });
    }

    let mut data = first.as_ref().to_vec();
    let mut height = 1;
    for row in rows {
        let row = row.as_ref();
        if row.len() != width {
            return Err(Error::Ragged { row: height, expected: width, found: row.len() });
        }
        data.extend_from_slice(row);
        height += 1;
    }
    Ok(((height, width), data))
}

/// Number of elements in a matrix of this shape.
pub(crate) fn element_count((height, width): Shape) -> Result<usize>
{
    if height == 0 || width == 0 {
        return Err(Error::Empty { what: "matrix" });
    }
    height.checked_mul(width).ok_or(Error::TooLarge { shape: (height, width) })
}

/// Validate the dimensions claimed for row-major data.
pub(crate) fn row_major((height, width): Shape, len: usize) -> Result<()>
{
    if element_count((height, width))? != len {
        return Err(Error::DimensionMismatch {
            op: "row-major construction",
            left: Dims::Matrix((height, width)),
            right: Dims::Vector(len),
        });
    }
    Ok(())
}

pub(crate) fn same_dims(op: &'static str, left: Dims, right: Dims) -> Result<()>
{
    match left == right {
        true => Ok(()),
        false => Err(Error::DimensionMismatch { op, left, right }),
    }
}

/// An element of untyped input, before it is known to be a number.
#[cfg(feature = "serde")]
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Element {
    Number(f64),
    /// Description of the non-numeric value.
    Other(String),
}

/// Require every element to be a number.
///
/// `at` describes the position of an element in error messages.
#[cfg(feature = "serde")]
pub(crate) fn numeric<F>(elements: Vec<Element>, at: F) -> Result<Vec<f64>>
where F: Fn(usize) -> String,
{
    elements.into_iter().enumerate()
        .map(|(index, element)| match element {
            Element::Number(x) => Ok(x),
            Element::Other(found) => Err(Error::TypeMismatch { at: at(index), found }),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rectangular_copies_rows() {
        let rows = vec![vec![1.0, 2.0], vec![3.0, 4.0], vec![5.0, 6.0]];
        let (shape, data) = rectangular::<f64, _>(&rows).unwrap();
        assert_eq!(shape, (3, 2));
        assert_eq!(data, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
    }

    #[test]
    fn rectangular_errors() {
        let empty: Vec<Vec<f64>> = vec![];
        assert_eq!(rectangular::<f64, _>(&empty), Err(Error::Empty { what: "matrix" }));
        assert_eq!(rectangular::<f64, _>(&[Vec::<f64>::new()]), Err(Error::Empty { what: "matrix" }));
        assert_eq!(
            rectangular::<f64, _>(&[vec![1.0, 2.0], vec![3.0, 4.0], vec![5.0]]),
            Err(Error::Ragged { row: 2, expected: 2, found: 1 }),
        );
    }

    #[test]
    fn row_major_lengths() {
        assert_eq!(row_major((2, 3), 6), Ok(()));
        assert_eq!(row_major((0, 3), 0), Err(Error::Empty { what: "matrix" }));
        assert_eq!(row_major((2, 3), 5).unwrap_err().kind(), crate::ErrorKind::DimensionMismatch);
        assert_eq!(row_major((usize::MAX, 2), 1), Err(Error::TooLarge { shape: (usize::MAX, 2) }));
        assert_eq!(element_count((1 << 33, 1 << 33)), Err(Error::TooLarge { shape: (1 << 33, 1 << 33) }));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn numeric_reports_first_offender() {
        let elements = vec![
            Element::Number(1.0),
            Element::Other("string \"a\"".into()),
            Element::Other("null".into()),
        ];
        let err = numeric(elements, |i| format!("element {}", i)).unwrap_err();
        assert_eq!(err, Error::TypeMismatch { at: "element 1".into(), found: "string \"a\"".into() });
    }
}

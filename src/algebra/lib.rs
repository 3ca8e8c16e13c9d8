/* ************************************************************************ **
** This file is part of lina, and is licensed under EITHER the MIT license  **
** or the Apache 2.0 license, at your option.                               **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! Small dense vectors and matrices.
//!
//! Every operation checks that its operands are compatible, and returns a
//! new value (or an `Error`) instead of modifying anything.
//!
//! ```
//! use lina_algebra::{Matrix, Vector};
//!
//! let a = Vector::new(vec![1.0, 0.0, 0.0]).unwrap();
//! let b = Vector::new(vec![0.0, 1.0, 0.0]).unwrap();
//! assert_eq!(a.cross(&b).unwrap(), Vector::new(vec![0.0, 0.0, 1.0]).unwrap());
//!
//! let m = Matrix::new(&[[1.0, 2.0], [3.0, 4.0]]).unwrap();
//! assert_eq!(m.determinant().unwrap(), -2.0);
//! ```

#[macro_use] extern crate log;
#[cfg(test)]
#[macro_use] extern crate lina_assert_close;

pub use crate::error::{Error, ErrorKind, Result, Dims, Shape};
pub use crate::vector::Vector;
pub use crate::matrix::{Matrix, ContiguousRows};

mod error;
mod validate;
mod vector;
mod matrix;
mod ops;
#[cfg(feature = "serde")]
mod serde_impls;

/* ************************************************************************ **
** This file is part of lina, and is licensed under EITHER the MIT license  **
** or the Apache 2.0 license, at your option.                               **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! `use lina::{Matrix, Vector};`
//!
//! This crate re-exports `lina-algebra` with serialization enabled.

pub use lina_algebra::{Vector, Matrix};
pub use lina_algebra::{Error, ErrorKind, Result, Dims, Shape};

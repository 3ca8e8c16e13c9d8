/* ************************************************************************ **
** This file is part of lina, and is licensed under EITHER the MIT license  **
** or the Apache 2.0 license, at your option.                               **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! `assert_close!`, for comparing floating point results in tests.
//!
//! ```
//! #[macro_use] extern crate lina_assert_close;
//! # fn main() {
//! assert_close!(0.1 + 0.2, 0.3);
//! assert_close!(abs=1e-12, [1.0, 1e-14], [1.0, 0.0]);
//! assert_close!(rel=1e-3, abs=0.0, vec![1000.0], vec![1000.5], "{}", "with context");
//! # }
//! ```

/// Relative tolerance used when none is given.
pub const DEFAULT_NONZERO_TOL: f64 = 1e-9;

/// Assert that two values are close, according to [`CheckClose`].
///
/// Accepts `rel=` and/or `abs=` before the operands (in either order), and
/// optionally a format string and arguments after them.  The default
/// tolerances are `rel=DEFAULT_NONZERO_TOL, abs=0.0`.
///
/// [`CheckClose`]: trait.CheckClose.html
#[macro_export]
macro_rules! assert_close {
    (rel=$rel:expr, abs=$abs:expr, $($rest:tt)+) => {
        $crate::__assert_close!([$crate::Tolerances { rel: $rel, abs: $abs }] $($rest)+)
    };
    (abs=$abs:expr, rel=$rel:expr, $($rest:tt)+) => {
        $crate::__assert_close!([$crate::Tolerances { rel: $rel, abs: $abs }] $($rest)+)
    };
    (rel=$rel:expr, $($rest:tt)+) => {
        $crate::__assert_close!([$crate::Tolerances { rel: $rel, abs: 0.0 }] $($rest)+)
    };
    (abs=$abs:expr, $($rest:tt)+) => {
        $crate::__assert_close!([$crate::Tolerances { rel: $crate::DEFAULT_NONZERO_TOL, abs: $abs }] $($rest)+)
    };
    ($($rest:tt)+) => {
        $crate::__assert_close!([$crate::Tolerances::default()] $($rest)+)
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __assert_close {
    ([$tol:expr] $a:expr, $b:expr $(,)?) => {
        $crate::__assert_close!([$tol] $a, $b, "not nearly equal!")
    };
    ([$tol:expr] $a:expr, $b:expr, $($fmt:tt)+) => {{
        let tol: $crate::Tolerances = $tol;
        match (&$a, &$b) {
            (a, b) => {
                if let Err(e) = $crate::CheckClose::check_close(a, b, tol) {
                    panic!(
                        "{} (tolerances: rel={}, abs={})\n left: {:?}\nright: {:?}\n{}",
                        format!($($fmt)+), tol.rel, tol.abs, a, b, e,
                    );
                }
            },
        }
    }};
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Tolerances {
    pub abs: f64,
    pub rel: f64,
}

impl Default for Tolerances {
    fn default() -> Self
    { Tolerances { abs: 0.0, rel: DEFAULT_NONZERO_TOL } }
}

impl Tolerances {
    /// The same test as Python's `math.isclose`.
    pub fn is_close(&self, a: f64, b: f64) -> bool
    {
        assert!(self.rel >= 0.0 && self.abs >= 0.0, "negative tolerance: {:?}", self);

        // equal infinities (and exact matches in general)
        if a == b {
            return true;
        }
        // unequal infinities would otherwise pass any relative tolerance
        if a.is_infinite() || b.is_infinite() {
            return false;
        }
        // NaN fails this comparison, as it should
        (a - b).abs() <= self.abs.max(self.rel * a.abs()).max(self.rel * b.abs())
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CheckCloseError {
    #[error("failed at:\n  left: {left:?}\n right: {right:?}\n   tol: {tol:?}")]
    NotClose { left: f64, right: f64, tol: Tolerances },

    #[error("lengths differ: {left} vs {right}")]
    LengthMismatch { left: usize, right: usize },
}

pub trait CheckClose<Rhs: ?Sized = Self> {
    /// Test that all values of self and other are close.
    fn check_close(&self, other: &Rhs, tol: Tolerances) -> Result<(), CheckCloseError>;
}

impl CheckClose for f64 {
    #[inline]
    fn check_close(&self, other: &f64, tol: Tolerances) -> Result<(), CheckCloseError>
    {
        match tol.is_close(*self, *other) {
            true => Ok(()),
            false => Err(CheckCloseError::NotClose { left: *self, right: *other, tol }),
        }
    }
}

impl<'a, T: ?Sized + CheckClose> CheckClose for &'a T {
    #[inline]
    fn check_close(&self, other: &Self, tol: Tolerances) -> Result<(), CheckCloseError>
    { CheckClose::check_close(*self, *other, tol) }
}

impl<T: CheckClose> CheckClose for [T] {
    fn check_close(&self, other: &[T], tol: Tolerances) -> Result<(), CheckCloseError>
    {
        if self.len() != other.len() {
            return Err(CheckCloseError::LengthMismatch { left: self.len(), right: other.len() });
        }
        self.iter().zip(other)
            .map(|(a, b)| a.check_close(b, tol))
            .collect()
    }
}

impl<T: CheckClose> CheckClose for Vec<T> {
    fn check_close(&self, other: &Vec<T>, tol: Tolerances) -> Result<(), CheckCloseError>
    { self[..].check_close(&other[..], tol) }
}

impl<T: CheckClose> CheckClose<[T]> for Vec<T> {
    fn check_close(&self, other: &[T], tol: Tolerances) -> Result<(), CheckCloseError>
    { self[..].check_close(other, tol) }
}

impl<T: CheckClose, const N: usize> CheckClose for [T; N] {
    fn check_close(&self, other: &[T; N], tol: Tolerances) -> Result<(), CheckCloseError>
    { self[..].check_close(&other[..], tol) }
}

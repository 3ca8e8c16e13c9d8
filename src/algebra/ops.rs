/* ************************************************************************ **
** This file is part of lina, and is licensed under EITHER the MIT license  **
** or the Apache 2.0 license, at your option.                               **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

// Operator sugar over the named methods.
//
// NOTE: Operators that can fail produce a `Result`, same as the method they
//       forward to.  Impls are only provided for references, so that e.g.
//       `a.add(&b)` on an owned `a` always resolves to the inherent method
//       rather than a by-value `Add::add`.

use std::ops::{Add, Sub, Mul, Div, Neg};

use crate::{Vector, Matrix, Result};

macro_rules! impl_binop {
    ($Trait:ident::$method:ident for $T:ident => $inherent:ident -> $Output:ty) => {
        impl<'a, 'b> $Trait<&'b $T> for &'a $T {
            type Output = $Output;

            #[inline(always)]
            fn $method(self, other: &'b $T) -> Self::Output
            { $T::$inherent(self, other) }
        }
    };
}

macro_rules! impl_scalar_ops {
    ($T:ident) => {
        // x * scalar
        impl<'a> Mul<f64> for &'a $T {
            type Output = $T;

            #[inline(always)]
            fn mul(self, scalar: f64) -> $T
            { self.scale(scalar) }
        }

        // scalar * x
        impl<'a> Mul<&'a $T> for f64 {
            type Output = $T;

            #[inline(always)]
            fn mul(self, x: &'a $T) -> $T
            { x.scale(self) }
        }

        // -x
        impl<'a> Neg for &'a $T {
            type Output = $T;

            #[inline(always)]
            fn neg(self) -> $T
            { self.scale(-1.0) }
        }
    };
}

impl_binop!(Add::add for Vector => add -> Result<Vector>);
impl_binop!(Sub::sub for Vector => subtract -> Result<Vector>);
impl_binop!(Mul::mul for Vector => dot -> Result<f64>);
impl_binop!(Add::add for Matrix => add -> Result<Matrix>);
impl_binop!(Sub::sub for Matrix => subtract -> Result<Matrix>);
impl_binop!(Mul::mul for Matrix => multiply -> Result<Matrix>);

impl_scalar_ops!(Vector);
impl_scalar_ops!(Matrix);

// vector / scalar
impl<'a> Div<f64> for &'a Vector {
    type Output = Result<Vector>;

    #[inline(always)]
    fn div(self, scalar: f64) -> Result<Vector>
    { self.divide(scalar) }
}

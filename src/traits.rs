// SPDX-License-Identifier: LGPL-2.1-or-later
// See Notices.txt for copyright information
use num_traits::{FromPrimitive, One, Zero};
use std::fmt;
use std::ops::{AddAssign, Div, DivAssign, MulAssign, Neg, Sub, SubAssign};

/// The minimal scalar contract for polynomial coefficients.
///
/// Everything a ring element offers: addition, subtraction, negation and
/// multiplication, plus conversion from small machine integers for the
/// integer scale factors that show up in calculus and in the Hermite
/// linearization weights.
///
/// Implemented for the usual suspects (`i32`, `i64`, `f32`, `f64`,
/// `BigInt`, `Ratio<_>`, ...) through the blanket impl.
pub trait Coefficient:
    Clone
    + fmt::Debug
    + PartialEq
    + Zero
    + One
    + Neg<Output = Self>
    + Sub<Output = Self>
    + AddAssign
    + SubAssign
    + MulAssign
    + FromPrimitive
{
    /// The scalar representation of a nonnegative index-sized integer.
    fn from_index(v: usize) -> Self {
        Self::from_usize(v).expect("index not representable in coefficient type")
    }
}

impl<T> Coefficient for T where
    T: Clone
        + fmt::Debug
        + PartialEq
        + Zero
        + One
        + Neg<Output = T>
        + Sub<Output = T>
        + AddAssign
        + SubAssign
        + MulAssign
        + FromPrimitive
{
}

/// Scalars that additionally support exact division.
///
/// Strictly stronger than [`Coefficient`]; required only by long division,
/// antiderivatives, the explicit closed-form generators and everything that
/// expresses `x` in the Hermite basis (`x = H1/2`). Integer types qualify
/// with their native truncating division; callers wanting exactness use
/// `Ratio` or a float.
pub trait DivisibleCoefficient: Coefficient + Div<Output = Self> + DivAssign {}

impl<T> DivisibleCoefficient for T where T: Coefficient + Div<Output = T> + DivAssign {}

/// Evaluation of `self` at a point of type `T`.
///
/// Separate from the inherent strategy-selecting methods so that an integer
/// polynomial can be evaluated exactly at a rational point without being
/// converted first.
pub trait PolynomialEval<T> {
    fn eval(self, x: &T) -> T;
}

/// First derivative of `self`.
pub trait Derivative<Output = Self> {
    fn derivative(self) -> Output;
}

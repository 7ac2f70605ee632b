// SPDX-License-Identifier: LGPL-2.1-or-later
// See Notices.txt for copyright information
use crate::traits::Coefficient;
use num_integer::Integer;
use num_rational::Ratio;
use num_traits::{Signed, Zero};
use rand::distributions::{Distribution, Standard};
use rand::Rng;
use std::fmt;
use std::iter::FromIterator;
use std::slice;
use std::vec;

mod add_sub;
mod calculus;
mod div_rem;
mod eval;
mod mul;
mod pow;

pub use div_rem::DivisorIsZero;
pub use eval::{scalar_powers, EvalStrategy, ScalarPowers};
pub use mul::MulStrategy;
pub use pow::{PowStrategy, Powers};

/// A single-variable polynomial in the standard monomial basis.
///
/// The term at index `n` is `self.coefficients()[n] * pow(x, n)`.
///
/// # Invariants
///
/// `self.coefficients().last()` is either `None` or `Some(v)` where
/// `!v.is_zero()`. The canonical zero polynomial is the empty sequence and
/// has degree `-1`.
#[derive(Clone, PartialEq, Eq, Debug, Hash)]
pub struct Polynomial<T> {
    coefficients: Vec<T>,
}

impl<T> Default for Polynomial<T> {
    fn default() -> Self {
        Self {
            coefficients: Vec::default(),
        }
    }
}

impl<T: Zero> From<Vec<T>> for Polynomial<T> {
    fn from(coefficients: Vec<T>) -> Self {
        let mut retval = Self { coefficients };
        retval.normalize();
        retval
    }
}

impl<T: Zero + Clone + Integer> From<Vec<T>> for Polynomial<Ratio<T>> {
    fn from(coefficients: Vec<T>) -> Self {
        let coefficients = coefficients.into_iter().map(Into::into).collect();
        let mut retval = Self { coefficients };
        retval.normalize();
        retval
    }
}

impl<T: Zero + Clone + Integer> From<Polynomial<T>> for Polynomial<Ratio<T>> {
    fn from(src: Polynomial<T>) -> Self {
        let coefficients = src.into_iter().map(Into::into).collect();
        Self { coefficients }
    }
}

impl<T: Zero> FromIterator<T> for Polynomial<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Vec::from_iter(iter).into()
    }
}

impl<T> Polynomial<T> {
    pub fn coefficients(&self) -> &[T] {
        &self.coefficients
    }
    pub fn into_coefficients(self) -> Vec<T> {
        self.coefficients
    }
    pub fn iter(&self) -> slice::Iter<T> {
        self.coefficients.iter()
    }
    pub fn len(&self) -> usize {
        self.coefficients.len()
    }
    pub fn is_empty(&self) -> bool {
        self.coefficients.is_empty()
    }
    /// The degree of the polynomial; `-1` for the zero polynomial.
    ///
    /// `-1` rather than the textbook `-inf` keeps the return type an integer.
    pub fn degree(&self) -> isize {
        self.coefficients.len() as isize - 1
    }
    /// The coefficient of the highest-degree term, if any.
    pub fn leading_coefficient(&self) -> Option<&T> {
        self.coefficients.last()
    }
    fn normalize(&mut self)
    where
        T: Zero,
    {
        while let Some(tail) = self.coefficients.last() {
            if tail.is_zero() {
                self.coefficients.pop();
            } else {
                break;
            }
        }
    }
}

impl<T: Coefficient> Polynomial<T> {
    /// The monomial `c * x^n`.
    pub fn monomial(n: usize, c: T) -> Self {
        let mut coefficients = Vec::with_capacity(n + 1);
        coefficients.resize_with(n, T::zero);
        coefficients.push(c);
        coefficients.into()
    }
    /// The identity polynomial `x`.
    pub fn x() -> Self {
        Self::monomial(1, T::one())
    }
    /// The monic polynomial with the given roots, `prod_k (x - r_k)`.
    ///
    /// Built up one root at a time via `p <- x*p - r_k*p`.
    pub fn from_roots(roots: &[T]) -> Self {
        let mut retval = Self::monomial(0, T::one());
        for root in roots {
            retval = retval.mul_xpow(1) - retval.scalar_mul(root);
        }
        retval
    }
    /// Removes high-degree coefficients whose absolute value is at most
    /// `tol`; never touches interior or low-degree entries.
    ///
    /// Exact coefficient types should pass a zero tolerance, which is a no-op
    /// on canonical values.
    pub fn trimmed(&self, tol: &T) -> Self
    where
        T: Signed + PartialOrd,
    {
        let mut coefficients = self.coefficients.clone();
        while let Some(tail) = coefficients.last() {
            if tail.abs() <= *tol {
                coefficients.pop();
            } else {
                break;
            }
        }
        Self { coefficients }
    }
}

impl<T: Coefficient> Polynomial<T>
where
    Standard: Distribution<T>,
{
    /// A polynomial of degree at most `degree` with coefficients sampled
    /// from the standard distribution of `T`.
    pub fn random<R: Rng + ?Sized>(degree: usize, rng: &mut R) -> Self {
        (0..=degree).map(|_| rng.gen::<T>()).collect()
    }
}

impl<T> IntoIterator for Polynomial<T> {
    type Item = T;
    type IntoIter = vec::IntoIter<T>;
    fn into_iter(self) -> Self::IntoIter {
        self.coefficients.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Polynomial<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: fmt::Display> fmt::Display for Polynomial<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.coefficients.is_empty() {
            write!(f, "0")
        } else {
            for (power, coefficient) in self.coefficients.iter().enumerate() {
                match power {
                    0 => write!(f, "{}", coefficient)?,
                    1 => write!(f, " + {}*x", coefficient)?,
                    _ => write!(f, " + {}*x^{}", coefficient, power)?,
                }
            }
            Ok(())
        }
    }
}

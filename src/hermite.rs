// SPDX-License-Identifier: LGPL-2.1-or-later
// See Notices.txt for copyright information
use crate::traits::{Coefficient, DivisibleCoefficient};
use num_integer::Integer;
use num_rational::Ratio;
use num_traits::{Signed, Zero};
use rand::distributions::{Distribution, Standard};
use rand::Rng;
use std::fmt;
use std::iter::FromIterator;
use std::slice;
use std::vec;

mod arith;
mod calculus;
mod convert;
mod eval;
mod generate;

pub use arith::HermitePowers;
pub use convert::{HermToPolyStrategy, PolyToHermStrategy};
pub use eval::{hermite_values, HermEvalStrategy, HermiteValues};
pub use generate::{
    hermite_cached, hermite_monomial, hermite_monomial_with, hermite_monomials,
    hermite_polynomial, hermite_polynomial_with, hermite_polynomials, HermiteMonomials,
    HermitePolynomials, HermiteStrategy, MonomialStrategy,
};

/// A single-variable polynomial in the physicists' Hermite basis.
///
/// The term at index `n` is `self.coefficients()[n] * H_n(x)`, where
/// `H_0 = 1`, `H_1 = 2x` and `H_{n+1} = 2x*H_n - 2n*H_{n-1}`.
///
/// A distinct type from [`Polynomial`] so that mixing up the two coefficient
/// conventions is a type error rather than silently wrong numbers; moving
/// between the bases goes through the explicit conversions in
/// [`to_polynomial`] and [`Polynomial::to_hermite`].
///
/// # Invariants
///
/// `self.coefficients().last()` is either `None` or `Some(v)` where
/// `!v.is_zero()`. The canonical zero series is the empty sequence and has
/// degree `-1`.
///
/// [`Polynomial`]: crate::polynomial::Polynomial
/// [`to_polynomial`]: Self::to_polynomial
/// [`Polynomial::to_hermite`]: crate::polynomial::Polynomial::to_hermite
#[derive(Clone, PartialEq, Eq, Debug, Hash)]
pub struct HermiteSeries<T> {
    coefficients: Vec<T>,
}

impl<T> Default for HermiteSeries<T> {
    fn default() -> Self {
        Self {
            coefficients: Vec::default(),
        }
    }
}

impl<T: Zero> From<Vec<T>> for HermiteSeries<T> {
    fn from(coefficients: Vec<T>) -> Self {
        let mut retval = Self { coefficients };
        retval.normalize();
        retval
    }
}

impl<T: Zero + Clone + Integer> From<Vec<T>> for HermiteSeries<Ratio<T>> {
    fn from(coefficients: Vec<T>) -> Self {
        let coefficients = coefficients.into_iter().map(Into::into).collect();
        let mut retval = Self { coefficients };
        retval.normalize();
        retval
    }
}

impl<T: Zero + Clone + Integer> From<HermiteSeries<T>> for HermiteSeries<Ratio<T>> {
    fn from(src: HermiteSeries<T>) -> Self {
        let coefficients = src.into_iter().map(Into::into).collect();
        Self { coefficients }
    }
}

impl<T: Zero> FromIterator<T> for HermiteSeries<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Vec::from_iter(iter).into()
    }
}

impl<T> HermiteSeries<T> {
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
    /// The degree of the represented polynomial (the index of the highest
    /// basis function); `-1` for the zero series.
    pub fn degree(&self) -> isize {
        self.coefficients.len() as isize - 1
    }
    /// The coefficient of the highest basis function, if any.
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

impl<T: Coefficient> HermiteSeries<T> {
    /// The single-term series `c * H_n`.
    pub fn term(n: usize, c: T) -> Self {
        let mut coefficients = Vec::with_capacity(n + 1);
        coefficients.resize_with(n, T::zero);
        coefficients.push(c);
        coefficients.into()
    }
    /// Removes high-index coefficients whose absolute value is at most
    /// `tol`; never touches interior or low-index entries.
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

impl<T: DivisibleCoefficient> HermiteSeries<T> {
    /// The identity polynomial `x`, which is `H_1 / 2` in this basis.
    ///
    /// The half is why everything expressing `x` here requires division.
    pub fn x() -> Self {
        Self::term(1, T::one() / T::from_index(2))
    }
    /// The monic polynomial with the given roots, `prod_k (x - r_k)`.
    ///
    /// Each factor `x - r_k` is the series `(-r_k, 1/2)`; the factors are
    /// combined with the linearization product. Integer coefficients cannot
    /// carry the `2^-n` leading term, so exact callers use `Ratio`.
    pub fn from_roots(roots: &[T]) -> Self {
        let half = T::one() / T::from_index(2);
        roots
            .iter()
            .map(|root| Self::from(vec![-root.clone(), half.clone()]))
            .product()
    }
}

impl<T: Coefficient> HermiteSeries<T>
where
    Standard: Distribution<T>,
{
    /// A series of degree at most `degree` with coefficients sampled from
    /// the standard distribution of `T`.
    pub fn random<R: Rng + ?Sized>(degree: usize, rng: &mut R) -> Self {
        (0..=degree).map(|_| rng.gen::<T>()).collect()
    }
}

impl<T> IntoIterator for HermiteSeries<T> {
    type Item = T;
    type IntoIter = vec::IntoIter<T>;
    fn into_iter(self) -> Self::IntoIter {
        self.coefficients.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a HermiteSeries<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: fmt::Display> fmt::Display for HermiteSeries<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.coefficients.is_empty() {
            write!(f, "0")
        } else {
            for (index, coefficient) in self.coefficients.iter().enumerate() {
                match index {
                    0 => write!(f, "{}", coefficient)?,
                    _ => write!(f, " + {}*H{}", coefficient, index)?,
                }
            }
            Ok(())
        }
    }
}

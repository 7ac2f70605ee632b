// SPDX-License-Identifier: LGPL-2.1-or-later
// See Notices.txt for copyright information
use crate::polynomial::{Polynomial, PowStrategy};
use crate::traits::{Coefficient, PolynomialEval};
use num_rational::Ratio;
use num_traits::{zero, Zero};
use std::ops::{AddAssign, MulAssign};

/// How a polynomial is evaluated, or composed with another polynomial.
///
/// All three produce the same value; they differ in the number of
/// multiplications performed. `Horner` is the default everywhere a strategy
/// is not asked for.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum EvalStrategy {
    /// Each power of the point is computed from scratch.
    Naive,
    /// Powers of the point are carried along, one multiplication per term.
    Iterative,
    /// Horner's rule, folding from the leading coefficient down.
    Horner,
}

impl Default for EvalStrategy {
    fn default() -> Self {
        EvalStrategy::Horner
    }
}

/// An infinite iterator over `1, x, x^2, ...`.
pub fn scalar_powers<T: Coefficient>(x: T) -> ScalarPowers<T> {
    ScalarPowers { x, next: T::one() }
}

/// See [`scalar_powers`].
#[derive(Clone, Debug)]
pub struct ScalarPowers<T> {
    x: T,
    next: T,
}

impl<T: Coefficient> Iterator for ScalarPowers<T> {
    type Item = T;
    fn next(&mut self) -> Option<T> {
        let retval = self.next.clone();
        self.next *= self.x.clone();
        Some(retval)
    }
}

impl<T: Coefficient> Polynomial<T> {
    pub fn eval_with(&self, x: &T, strategy: EvalStrategy) -> T {
        match strategy {
            EvalStrategy::Naive => self.eval_naive(x),
            EvalStrategy::Iterative => self.eval_iterative(x),
            EvalStrategy::Horner => self.eval_horner(x),
        }
    }
    fn eval_naive(&self, x: &T) -> T {
        let mut retval = T::zero();
        for (index, coefficient) in self.iter().enumerate() {
            let mut term = coefficient.clone();
            for _ in 0..index {
                term *= x.clone();
            }
            retval += term;
        }
        retval
    }
    fn eval_iterative(&self, x: &T) -> T {
        let mut retval = T::zero();
        for (coefficient, power) in self.iter().zip(scalar_powers(x.clone())) {
            let mut term = coefficient.clone();
            term *= power;
            retval += term;
        }
        retval
    }
    fn eval_horner(&self, x: &T) -> T {
        let mut iter = self.iter().rev();
        if let Some(last) = iter.next() {
            let mut retval = last.clone();
            for coefficient in iter {
                retval *= x.clone();
                retval += coefficient.clone();
            }
            retval
        } else {
            T::zero()
        }
    }
    /// The constant term, without any arithmetic.
    pub fn eval_at_zero(&self) -> T {
        self.coefficients().first().cloned().unwrap_or_else(T::zero)
    }
    /// The composition `self(inner)`, substituting `inner` for the variable.
    ///
    /// The strategies are the same three shapes as in [`eval_with`], lifted
    /// from scalar arithmetic to polynomial arithmetic.
    ///
    /// [`eval_with`]: Self::eval_with
    pub fn compose_with(&self, inner: &Self, strategy: EvalStrategy) -> Self {
        match strategy {
            EvalStrategy::Naive => self
                .iter()
                .enumerate()
                .map(|(index, coefficient)| {
                    inner.pow_with(index, PowStrategy::Naive).scalar_mul(coefficient)
                })
                .sum(),
            EvalStrategy::Iterative => self
                .iter()
                .zip(inner.powers())
                .map(|(coefficient, power)| power.scalar_mul(coefficient))
                .sum(),
            EvalStrategy::Horner => {
                let mut iter = self.iter().rev();
                if let Some(last) = iter.next() {
                    let mut retval = Self::monomial(0, last.clone());
                    for coefficient in iter {
                        retval = (retval * inner).add_term(coefficient.clone(), 0);
                    }
                    retval
                } else {
                    Self::zero()
                }
            }
        }
    }
    pub fn compose(&self, inner: &Self) -> Self {
        self.compose_with(inner, EvalStrategy::default())
    }
    /// The polynomial `self(x - s)`, with all roots moved up by `s`.
    pub fn shifted(&self, s: &T) -> Self {
        let inner = Self::from(vec![-s.clone(), T::one()]);
        self.compose(&inner)
    }
    /// The polynomial `self(a * x)`.
    pub fn scaled(&self, a: &T) -> Self {
        self.iter()
            .zip(scalar_powers(a.clone()))
            .map(|(coefficient, power)| {
                let mut term = coefficient.clone();
                term *= power;
                term
            })
            .collect()
    }
}

impl<T> PolynomialEval<T> for Polynomial<T>
where
    T: Zero + AddAssign,
    for<'a> T: MulAssign<&'a T>,
{
    fn eval(self, x: &T) -> T {
        let mut iter = self.into_iter().rev();
        if let Some(last) = iter.next() {
            let mut retval = last;
            for coefficient in iter {
                retval *= x;
                retval += coefficient;
            }
            retval
        } else {
            zero()
        }
    }
}

impl<'a, T> PolynomialEval<T> for &'a Polynomial<T>
where
    T: Zero + AddAssign<&'a T> + Clone,
    for<'b> T: MulAssign<&'b T>,
{
    fn eval(self, x: &T) -> T {
        let mut iter = self.iter().rev();
        if let Some(last) = iter.next() {
            let mut retval = last.clone();
            for coefficient in iter {
                retval *= x;
                retval += coefficient;
            }
            retval
        } else {
            zero()
        }
    }
}

impl<'a, T> PolynomialEval<Ratio<T>> for &'a Polynomial<T>
where
    for<'b> Ratio<T>: MulAssign<&'b Ratio<T>> + AddAssign<&'b T>,
    T: Clone + Into<Ratio<T>>,
    Ratio<T>: Zero,
{
    fn eval(self, x: &Ratio<T>) -> Ratio<T> {
        let mut iter = self.iter().rev();
        if let Some(last) = iter.next() {
            let mut retval = last.clone().into();
            for coefficient in iter {
                retval *= x;
                retval += coefficient;
            }
            retval
        } else {
            zero()
        }
    }
}

impl<T> PolynomialEval<Ratio<T>> for Polynomial<T>
where
    for<'b> Ratio<T>: MulAssign<&'b Ratio<T>>,
    T: Into<Ratio<T>>,
    Ratio<T>: Zero + AddAssign<T>,
{
    fn eval(self, x: &Ratio<T>) -> Ratio<T> {
        let mut iter = self.into_iter().rev();
        if let Some(last) = iter.next() {
            let mut retval = last.into();
            for coefficient in iter {
                retval *= x;
                retval += coefficient;
            }
            retval
        } else {
            zero()
        }
    }
}

impl<'a, T, U> PolynomialEval<U> for &'a mut Polynomial<T>
where
    &'a Polynomial<T>: PolynomialEval<U>,
{
    fn eval(self, x: &U) -> U {
        PolynomialEval::eval(&*self, x)
    }
}

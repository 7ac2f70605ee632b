// SPDX-License-Identifier: LGPL-2.1-or-later
// See Notices.txt for copyright information
use crate::hermite::{HermEvalStrategy, HermiteSeries};
use crate::traits::{Coefficient, Derivative, DivisibleCoefficient};
use num_traits::Zero;

impl<T: Coefficient> HermiteSeries<T> {
    /// The `order`-th derivative, natively in the basis.
    ///
    /// `d/dx H_n = 2n*H_{n-1}`, so the scale factor for each term is a
    /// product of `2v` factors, built up in `T` with no conversion out of
    /// the basis.
    pub fn derivative_n(&self, order: usize) -> Self {
        if order == 0 {
            return self.clone();
        }
        if self.len() <= order {
            return Self::zero();
        }
        let mut coefficients = Vec::with_capacity(self.len() - order);
        for index in order..self.len() {
            let mut factor = T::one();
            for v in index - order + 1..=index {
                factor *= T::from_index(2 * v);
            }
            let mut coefficient = self.coefficients[index].clone();
            coefficient *= factor;
            coefficients.push(coefficient);
        }
        coefficients.into()
    }
}

impl<T: Coefficient> Derivative for HermiteSeries<T> {
    fn derivative(self) -> Self {
        self.derivative_n(1)
    }
}

impl<'a, T: Coefficient> Derivative<HermiteSeries<T>> for &'a HermiteSeries<T> {
    fn derivative(self) -> HermiteSeries<T> {
        self.derivative_n(1)
    }
}

impl<T: DivisibleCoefficient> HermiteSeries<T> {
    /// The antiderivative with a zero `H_0` coefficient.
    ///
    /// `int H_k = H_{k+1} / (2(k+1))`; the division is what keeps this
    /// behind the stronger scalar bound.
    pub fn antiderivative(&self) -> Self {
        if self.is_empty() {
            return Self::zero();
        }
        let mut coefficients = Vec::with_capacity(self.len() + 1);
        coefficients.push(T::zero());
        for (index, coefficient) in self.iter().enumerate() {
            coefficients.push(coefficient.clone() / T::from_index(2 * (index + 1)));
        }
        coefficients.into()
    }
    /// The antiderivative `F` with `F(lower_bound) == constant`.
    ///
    /// Unlike the monomial basis, pinning the value costs an evaluation
    /// even at zero, because every even basis function contributes there.
    pub fn antiderivative_from(&self, lower_bound: &T, constant: T) -> Self {
        let retval = self.antiderivative();
        let at_bound = retval.eval_with(lower_bound, HermEvalStrategy::Clenshaw);
        retval.add_term(constant - at_bound, 0)
    }
}

// SPDX-License-Identifier: LGPL-2.1-or-later
// See Notices.txt for copyright information
use crate::hermite::HermiteSeries;
use crate::traits::{Coefficient, PolynomialEval};

/// Selects how a Hermite series is evaluated at a scalar point.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub enum HermEvalStrategy {
    /// Each basis value `H_n(x)` recomputed from scratch.
    Naive,
    /// Basis values carried along the recurrence, one step per term.
    Iterative,
    /// Clenshaw's backward recurrence, no basis values materialized.
    Clenshaw,
}

/// An infinite iterator over the basis values `H_0(x), H_1(x), ...`, one
/// recurrence step per item.
pub fn hermite_values<T: Coefficient>(x: T) -> HermiteValues<T> {
    HermiteValues {
        x,
        index: 0,
        current: T::one(),
        previous: T::zero(),
    }
}

/// See [`hermite_values`].
#[derive(Clone, Debug)]
pub struct HermiteValues<T> {
    x: T,
    index: usize,
    current: T,
    previous: T,
}

impl<T: Coefficient> Iterator for HermiteValues<T> {
    type Item = T;
    fn next(&mut self) -> Option<T> {
        let retval = self.current.clone();
        // H_{k+1}(x) = 2x*H_k(x) - 2k*H_{k-1}(x)
        let mut next = self.current.clone();
        next *= self.x.clone();
        next *= T::from_index(2);
        let mut low = self.previous.clone();
        low *= T::from_index(2 * self.index);
        next -= low;
        self.previous = std::mem::replace(&mut self.current, next);
        self.index += 1;
        Some(retval)
    }
}

impl<T: Coefficient> HermiteSeries<T> {
    pub fn eval_with(&self, x: &T, strategy: HermEvalStrategy) -> T {
        match strategy {
            HermEvalStrategy::Naive => {
                let mut retval = T::zero();
                for (index, coefficient) in self.iter().enumerate() {
                    let basis = hermite_values(x.clone())
                        .nth(index)
                        .expect("iterator is infinite");
                    let mut term = coefficient.clone();
                    term *= basis;
                    retval += term;
                }
                retval
            }
            HermEvalStrategy::Iterative => {
                let mut retval = T::zero();
                for (coefficient, basis) in self.iter().zip(hermite_values(x.clone())) {
                    let mut term = coefficient.clone();
                    term *= basis;
                    retval += term;
                }
                retval
            }
            HermEvalStrategy::Clenshaw => self.eval_clenshaw(x),
        }
    }
    fn eval_clenshaw(&self, x: &T) -> T {
        if self.is_empty() {
            return T::zero();
        }
        let two_x = {
            let mut v = x.clone();
            v *= T::from_index(2);
            v
        };
        // a = b_{k+1}, b = b_{k+2} of the backward recurrence
        // b_k = h_k + 2x*b_{k+1} - 2(k+1)*b_{k+2}
        let mut a = T::zero();
        let mut b = T::zero();
        for k in (1..self.len()).rev() {
            let mut next = a.clone();
            next *= two_x.clone();
            let mut low = b;
            low *= T::from_index(2 * (k + 1));
            next -= low;
            next += self.coefficients[k].clone();
            b = std::mem::replace(&mut a, next);
        }
        let mut retval = a;
        retval *= two_x;
        b *= T::from_index(2);
        retval -= b;
        retval += self.coefficients[0].clone();
        retval
    }
    /// The value at zero from the closed form `H_{2m}(0) = -2(2m-1) *
    /// H_{2m-2}(0)`; odd-index terms never contribute.
    pub fn eval_at_zero(&self) -> T {
        let mut retval = T::zero();
        let mut value = T::one();
        for (index, coefficient) in self.iter().enumerate() {
            if index % 2 == 0 {
                if index > 0 {
                    value *= -T::from_index(2 * (index - 1));
                }
                let mut term = coefficient.clone();
                term *= value.clone();
                retval += term;
            }
        }
        retval
    }
}

impl<T: Coefficient> PolynomialEval<T> for &'_ HermiteSeries<T> {
    fn eval(self, x: &T) -> T {
        self.eval_clenshaw(x)
    }
}

impl<T: Coefficient> PolynomialEval<T> for HermiteSeries<T> {
    fn eval(self, x: &T) -> T {
        self.eval_clenshaw(x)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hermite::generate::hermite_polynomial;
    use crate::polynomial::EvalStrategy;
    use num_rational::Ratio;
    use num_traits::Zero;

    const STRATEGIES: &[HermEvalStrategy] = &[
        HermEvalStrategy::Naive,
        HermEvalStrategy::Iterative,
        HermEvalStrategy::Clenshaw,
    ];

    #[test]
    fn test_hermite_values() {
        let values: Vec<i64> = hermite_values(2i64).take(6).collect();
        for (n, value) in values.iter().enumerate() {
            assert_eq!(
                *value,
                hermite_polynomial::<i64>(n).eval_with(&2, EvalStrategy::Horner),
                "H_{}(2)",
                n
            );
        }
        assert_eq!(values[..3], [1, 4, 14]);
    }

    #[test]
    fn test_eval() {
        // 1 + 2*H1 + 3*H2 at 2: 1 + 2*4 + 3*14
        let series = HermiteSeries::<i64>::from(vec![1, 2, 3]);
        for &strategy in STRATEGIES {
            assert_eq!(series.eval_with(&2, strategy), 51, "{:?}", strategy);
            assert_eq!(series.eval_with(&0, strategy), -5);
            assert_eq!(HermiteSeries::<i64>::zero().eval_with(&3, strategy), 0);
        }
        assert_eq!((&series).eval(&2), 51);
    }

    #[test]
    fn test_eval_matches_monomial_basis() {
        let series: HermiteSeries<Ratio<i64>> = vec![3, -1, 4, 1].into();
        let poly = series.to_polynomial();
        for point in -3..=3 {
            let x = Ratio::new(point, 2);
            for &strategy in STRATEGIES {
                assert_eq!(
                    series.eval_with(&x, strategy),
                    poly.eval_with(&x, EvalStrategy::Horner)
                );
            }
        }
    }

    #[test]
    fn test_eval_at_zero() {
        let series = HermiteSeries::<i64>::from(vec![1, 2, 3, 4, 5]);
        // 1 - 2*3 + 12*5
        assert_eq!(series.eval_at_zero(), 55);
        for &strategy in STRATEGIES {
            assert_eq!(series.eval_with(&0, strategy), 55);
        }
        assert_eq!(HermiteSeries::<i64>::zero().eval_at_zero(), 0);
    }
}

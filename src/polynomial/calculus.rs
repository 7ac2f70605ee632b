// SPDX-License-Identifier: LGPL-2.1-or-later
// See Notices.txt for copyright information
use crate::polynomial::{EvalStrategy, Polynomial};
use crate::traits::{Coefficient, Derivative, DivisibleCoefficient};
use num_traits::Zero;

impl<T: Coefficient> Polynomial<T> {
    /// The `order`-th derivative.
    ///
    /// The coefficient scale factors are falling factorials, built up by
    /// repeated multiplication in `T` so that no intermediate overflows a
    /// fixed-width integer before conversion.
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
                factor *= T::from_index(v);
            }
            let mut coefficient = self.coefficients[index].clone();
            coefficient *= factor;
            coefficients.push(coefficient);
        }
        coefficients.into()
    }
}

impl<T: Coefficient> Derivative for Polynomial<T> {
    fn derivative(self) -> Self {
        self.derivative_n(1)
    }
}

impl<'a, T: Coefficient> Derivative<Polynomial<T>> for &'a Polynomial<T> {
    fn derivative(self) -> Polynomial<T> {
        self.derivative_n(1)
    }
}

impl<T: DivisibleCoefficient> Polynomial<T> {
    /// The antiderivative whose constant term is `constant`.
    ///
    /// Exact over `Ratio` and floats; over plain integers the division
    /// truncates whenever a coefficient is not divisible by its new power.
    pub fn antiderivative(&self, constant: T) -> Self {
        let mut coefficients = Vec::with_capacity(self.len() + 1);
        coefficients.push(constant);
        for (index, coefficient) in self.iter().enumerate() {
            coefficients.push(coefficient.clone() / T::from_index(index + 1));
        }
        coefficients.into()
    }
    /// The antiderivative `F` with `F(lower_bound) == constant`.
    pub fn antiderivative_from(&self, lower_bound: &T, constant: T) -> Self {
        let retval = self.antiderivative(T::zero());
        let at_bound = retval.eval_with(lower_bound, EvalStrategy::Horner);
        retval.add_term(constant - at_bound, 0)
    }
    /// Integrates `order` times.
    ///
    /// `constants` holds either a single constant reused at every step or
    /// one constant per step, the first consumed by the first integration.
    pub fn antiderivative_n(&self, order: usize, constants: &[T]) -> Self {
        assert!(
            constants.len() == order || constants.len() == 1,
            "expected one integration constant in total or one per integration"
        );
        let mut retval = self.clone();
        for index in 0..order {
            let constant = if constants.len() == 1 {
                constants[0].clone()
            } else {
                constants[index].clone()
            };
            retval = retval.antiderivative(constant);
        }
        retval
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_rational::Ratio;

    #[test]
    fn test_derivative() {
        let poly = Polynomial::<i32>::from(vec![1, 2, 3]);
        assert_eq!(poly.clone().derivative(), vec![2, 6].into());
        assert_eq!((&poly).derivative(), vec![2, 6].into());
        assert_eq!(poly.derivative_n(0), poly);
        assert_eq!(poly.derivative_n(2), vec![6].into());
        assert_eq!(poly.derivative_n(3), Polynomial::zero());
        assert_eq!(poly.derivative_n(100), Polynomial::zero());
        assert_eq!(Polynomial::<i32>::zero().derivative(), Polynomial::zero());
    }

    #[test]
    fn test_derivative_n_matches_repeated() {
        let poly = Polynomial::<i32>::from(vec![5, -3, 0, 2, 7, 1]);
        let mut repeated = poly.clone();
        for order in 0..7 {
            assert_eq!(poly.derivative_n(order), repeated);
            repeated = repeated.derivative();
        }
    }

    #[test]
    fn test_antiderivative() {
        let poly = Polynomial::<Ratio<i64>>::from(vec![2, 6]);
        assert_eq!(poly.antiderivative(Ratio::from(1)), vec![1, 2, 3].into());
        assert_eq!(
            Polynomial::<Ratio<i64>>::zero().antiderivative(Ratio::from(4)),
            vec![4].into()
        );
    }

    #[test]
    fn test_derivative_antiderivative_round_trip() {
        let poly = Polynomial::<Ratio<i64>>::from(vec![3, 1, 4, 1, 5, 9]);
        for constant in 0..3 {
            assert_eq!(
                poly.antiderivative(Ratio::from(constant)).derivative(),
                poly
            );
        }
    }

    #[test]
    fn test_antiderivative_from() {
        let poly = Polynomial::<Ratio<i64>>::from(vec![0, 2]);
        let integral = poly.antiderivative_from(&Ratio::from(1), Ratio::from(5));
        assert_eq!(integral, vec![4, 0, 1].into());
        assert_eq!(
            integral.eval_with(&Ratio::from(1), EvalStrategy::Horner),
            Ratio::from(5)
        );
    }

    #[test]
    fn test_antiderivative_n() {
        let poly = Polynomial::<Ratio<i64>>::from(vec![6]);
        // twice, with constants 2 then 1: 6 -> (2, 6) -> (1, 2, 3)
        assert_eq!(
            poly.antiderivative_n(2, &[Ratio::from(2), Ratio::from(1)]),
            vec![1, 2, 3].into()
        );
        // a single constant is reused at every step
        assert_eq!(
            poly.antiderivative_n(2, &[Ratio::from(0)]),
            vec![0, 0, 3].into()
        );
    }

    #[test]
    #[should_panic(expected = "integration constant")]
    fn test_antiderivative_n_bad_constants() {
        let poly = Polynomial::<Ratio<i64>>::from(vec![1]);
        poly.antiderivative_n(3, &[Ratio::from(0), Ratio::from(0)]);
    }
}

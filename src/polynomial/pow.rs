// SPDX-License-Identifier: LGPL-2.1-or-later
// See Notices.txt for copyright information
use crate::polynomial::Polynomial;
use crate::traits::Coefficient;
use num_traits::{One, Pow};

/// Selects the exponentiation algorithm.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub enum PowStrategy {
    /// Repeated multiplication, one product per unit of the exponent.
    Naive,
    /// Exponentiation by squaring.
    Binary,
}

impl<T: Coefficient> Polynomial<T> {
    /// `self` raised to a nonnegative power with the selected strategy.
    ///
    /// `pow_with(0)` is the constant one polynomial, even for the zero
    /// polynomial, without performing any multiplication.
    pub fn pow_with(&self, exponent: usize, strategy: PowStrategy) -> Self {
        match strategy {
            PowStrategy::Naive => self.pow_naive(exponent),
            PowStrategy::Binary => self.pow_binary(exponent),
        }
    }
    fn pow_naive(&self, exponent: usize) -> Self {
        let mut retval = Self::one();
        for _ in 0..exponent {
            retval = &retval * self;
        }
        retval
    }
    fn pow_binary(&self, mut exponent: usize) -> Self {
        let mut base = self.clone();
        let mut retval: Option<Self> = None;
        while exponent != 0 {
            if exponent % 2 == 1 {
                retval = Some(match retval {
                    None => base.clone(),
                    Some(retval) => &retval * &base,
                });
            }
            base = &base * &base;
            exponent /= 2;
        }
        retval.unwrap_or_else(Self::one)
    }
    /// An infinite iterator over `1, self, self^2, ...`, advancing by one
    /// multiplication per step. Callers limit it with `take`.
    pub fn powers(&self) -> Powers<T> {
        Powers {
            base: self,
            next: Self::one(),
        }
    }
}

/// See [`Polynomial::powers`].
#[derive(Clone, Debug)]
pub struct Powers<'a, T> {
    base: &'a Polynomial<T>,
    next: Polynomial<T>,
}

impl<'a, T: Coefficient> Iterator for Powers<'a, T> {
    type Item = Polynomial<T>;
    fn next(&mut self) -> Option<Polynomial<T>> {
        let retval = self.next.clone();
        self.next = &self.next * self.base;
        Some(retval)
    }
}

impl<T: Coefficient> Pow<usize> for &'_ Polynomial<T> {
    type Output = Polynomial<T>;
    fn pow(self, exponent: usize) -> Polynomial<T> {
        self.pow_binary(exponent)
    }
}

impl<T: Coefficient> Pow<usize> for Polynomial<T> {
    type Output = Polynomial<T>;
    fn pow(self, exponent: usize) -> Polynomial<T> {
        self.pow_binary(exponent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_traits::Zero;

    #[test]
    fn test_pow_identities() {
        let poly = Polynomial::<i32>::from(vec![2, 0, 1]);
        assert!(poly.pow_with(0, PowStrategy::Naive).is_one());
        assert!(poly.pow_with(0, PowStrategy::Binary).is_one());
        assert!(Polynomial::<i64>::zero().pow_with(0, PowStrategy::Binary).is_one());
        assert_eq!(poly.pow_with(1, PowStrategy::Naive), poly);
        assert_eq!(poly.pow_with(1, PowStrategy::Binary), poly);
    }

    #[test]
    fn test_pow_strategies_agree() {
        let poly = Polynomial::<i32>::from(vec![1, -2, 3]);
        for exponent in 0..8 {
            assert_eq!(
                poly.pow_with(exponent, PowStrategy::Naive),
                poly.pow_with(exponent, PowStrategy::Binary),
                "exponent {}",
                exponent
            );
        }
        assert_eq!(
            Polynomial::<i32>::from(vec![1, 1]).pow_with(2, PowStrategy::Binary),
            vec![1, 2, 1].into()
        );
    }

    #[test]
    fn test_powers_iterator() {
        let poly = Polynomial::from(vec![0, 1]);
        let powers: Vec<_> = poly.powers().take(4).collect();
        assert!(powers[0].is_one());
        assert_eq!(powers[1], poly);
        assert_eq!(powers[3], Polynomial::monomial(3, 1));
        assert_eq!(
            poly.powers().nth(5),
            Some(poly.pow_with(5, PowStrategy::Naive))
        );
    }
}

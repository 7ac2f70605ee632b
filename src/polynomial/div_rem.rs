// SPDX-License-Identifier: LGPL-2.1-or-later
// See Notices.txt for copyright information
use crate::polynomial::Polynomial;
use crate::traits::DivisibleCoefficient;
use num_traits::Zero;
use std::error::Error;
use std::fmt;
use std::ops::{Div, Rem};

/// Division by the canonical zero polynomial is undefined.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct DivisorIsZero;

impl fmt::Display for DivisorIsZero {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "division by the zero polynomial")
    }
}

impl Error for DivisorIsZero {}

impl From<DivisorIsZero> for std::io::Error {
    fn from(err: DivisorIsZero) -> Self {
        Self::new(std::io::ErrorKind::InvalidInput, err)
    }
}

impl<T: DivisibleCoefficient> Polynomial<T> {
    /// Long division: returns `(quotient, remainder)` with
    /// `self == quotient * divisor + remainder` and
    /// `remainder.degree() < divisor.degree()`.
    ///
    /// Returns `None` for a zero divisor. Terminates because the working
    /// remainder's degree strictly decreases each step.
    pub fn checked_div_rem(&self, divisor: &Self) -> Option<(Self, Self)> {
        if divisor.is_empty() {
            return None;
        }
        if self.len() < divisor.len() {
            return Some((Self::zero(), self.clone()));
        }
        let divisor_lead = divisor
            .coefficients
            .last()
            .expect("divisor length already checked");
        let quotient_len = self.len() - divisor.len() + 1;
        let mut remainder = self.coefficients.clone();
        let mut quotient = vec![T::zero(); quotient_len];
        for quotient_index in (0..quotient_len).rev() {
            let lead = remainder.pop().expect("remainder length already checked");
            let term = lead / divisor_lead.clone();
            for (divisor_index, divisor_coefficient) in
                divisor.coefficients[..divisor.len() - 1].iter().enumerate()
            {
                remainder[quotient_index + divisor_index] -=
                    term.clone() * divisor_coefficient.clone();
            }
            quotient[quotient_index] = term;
        }
        Some((quotient.into(), remainder.into()))
    }
    /// Long division, panicking on a zero divisor.
    pub fn div_rem(&self, divisor: &Self) -> (Self, Self) {
        self.checked_div_rem(divisor)
            .expect("polynomial division by zero")
    }
    /// Long division with the zero divisor reported as an error value.
    pub fn try_div_rem(&self, divisor: &Self) -> Result<(Self, Self), DivisorIsZero> {
        self.checked_div_rem(divisor).ok_or(DivisorIsZero)
    }
}

impl<'a, T: DivisibleCoefficient> Div for &'a Polynomial<T> {
    type Output = Polynomial<T>;
    fn div(self, rhs: &Polynomial<T>) -> Polynomial<T> {
        self.div_rem(rhs).0
    }
}

impl<'a, T: DivisibleCoefficient> Div<Polynomial<T>> for &'a Polynomial<T> {
    type Output = Polynomial<T>;
    fn div(self, rhs: Polynomial<T>) -> Polynomial<T> {
        self / &rhs
    }
}

impl<'a, T: DivisibleCoefficient> Div<&'a Polynomial<T>> for Polynomial<T> {
    type Output = Polynomial<T>;
    fn div(self, rhs: &Polynomial<T>) -> Polynomial<T> {
        &self / rhs
    }
}

impl<T: DivisibleCoefficient> Div for Polynomial<T> {
    type Output = Polynomial<T>;
    fn div(self, rhs: Polynomial<T>) -> Polynomial<T> {
        &self / &rhs
    }
}

impl<'a, T: DivisibleCoefficient> Rem for &'a Polynomial<T> {
    type Output = Polynomial<T>;
    fn rem(self, rhs: &Polynomial<T>) -> Polynomial<T> {
        self.div_rem(rhs).1
    }
}

impl<'a, T: DivisibleCoefficient> Rem<Polynomial<T>> for &'a Polynomial<T> {
    type Output = Polynomial<T>;
    fn rem(self, rhs: Polynomial<T>) -> Polynomial<T> {
        self % &rhs
    }
}

impl<'a, T: DivisibleCoefficient> Rem<&'a Polynomial<T>> for Polynomial<T> {
    type Output = Polynomial<T>;
    fn rem(self, rhs: &Polynomial<T>) -> Polynomial<T> {
        &self % rhs
    }
}

impl<T: DivisibleCoefficient> Rem for Polynomial<T> {
    type Output = Polynomial<T>;
    fn rem(self, rhs: Polynomial<T>) -> Polynomial<T> {
        &self % &rhs
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_rational::Ratio;

    #[test]
    fn test_div_rem_exact() {
        // x^2 - 1 = (x + 1)(x - 1) + 0
        let numerator = Polynomial::<Ratio<i64>>::from(vec![1, 0, -1]);
        let divisor = Polynomial::<Ratio<i64>>::from(vec![1, -1]);
        let (quotient, remainder) = numerator.div_rem(&divisor);
        assert_eq!(quotient, vec![1, 1].into());
        assert!(remainder.is_zero());
    }

    #[test]
    fn test_div_rem_law() {
        let cases: &[(Vec<i64>, Vec<i64>)] = &[
            (vec![1, 0, -1], vec![-1, 1]),
            (vec![3, 1, 4, 1, 5], vec![2, 7]),
            (vec![1, 2], vec![5, 0, 3]),
            (vec![], vec![1, 1]),
            (vec![7, 0, 0, 0, 0, 1], vec![1, 0, 1]),
        ];
        for (n, d) in cases {
            let numerator: Polynomial<Ratio<i64>> = n.clone().into();
            let divisor: Polynomial<Ratio<i64>> = d.clone().into();
            let (quotient, remainder) = numerator.div_rem(&divisor);
            assert_eq!(&quotient * &divisor + &remainder, numerator);
            assert!(remainder.degree() < divisor.degree());
        }
    }

    #[test]
    fn test_div_rem_short_dividend() {
        let numerator = Polynomial::<Ratio<i64>>::from(vec![1, 2]);
        let divisor = Polynomial::<Ratio<i64>>::from(vec![1, 2, 3]);
        let (quotient, remainder) = numerator.div_rem(&divisor);
        assert!(quotient.is_zero());
        assert_eq!(remainder, numerator);
    }

    #[test]
    fn test_div_by_zero() {
        let numerator = Polynomial::<Ratio<i64>>::from(vec![1, 2]);
        assert_eq!(numerator.checked_div_rem(&Polynomial::zero()), None);
        assert_eq!(
            numerator.try_div_rem(&Polynomial::zero()),
            Err(DivisorIsZero)
        );
    }

    #[test]
    fn test_div_rem_float() {
        let numerator = Polynomial::from(vec![2.0, -3.0, 1.0]);
        let divisor = Polynomial::from(vec![-1.0, 1.0]);
        let (quotient, remainder) = numerator.div_rem(&divisor);
        assert_eq!(quotient, vec![-2.0, 1.0].into());
        assert!(remainder.is_zero());
    }
}

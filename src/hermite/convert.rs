// SPDX-License-Identifier: LGPL-2.1-or-later
// See Notices.txt for copyright information
use crate::hermite::generate::{
    hermite_monomial, hermite_monomials, hermite_polynomial, hermite_polynomials,
};
use crate::hermite::HermiteSeries;
use crate::polynomial::Polynomial;
use crate::traits::{Coefficient, DivisibleCoefficient};
use num_traits::Zero;

/// Selects how a Hermite series is rewritten in the monomial basis.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub enum HermToPolyStrategy {
    /// Regenerates each basis polynomial independently.
    Naive,
    /// All basis polynomials from one shared recurrence pass.
    Iterative,
    /// Clenshaw's backward recurrence over polynomial accumulators.
    Clenshaw,
}

/// Selects how a monomial-basis polynomial is rewritten as a Hermite
/// series.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub enum PolyToHermStrategy {
    /// Expresses each power of `x` independently.
    Naive,
    /// All powers of `x` from one shared `mul_x` chain.
    Iterative,
    /// Horner's rule with a Hermite-series accumulator.
    Horner,
}

impl<T: Coefficient> HermiteSeries<T> {
    /// The same polynomial in the monomial basis.
    pub fn to_polynomial(&self) -> Polynomial<T> {
        self.to_polynomial_with(HermToPolyStrategy::Clenshaw)
    }
    /// The same polynomial in the monomial basis, with the selected
    /// strategy.
    ///
    /// No division is involved in this direction, so integer series convert
    /// to integer polynomials.
    pub fn to_polynomial_with(&self, strategy: HermToPolyStrategy) -> Polynomial<T> {
        match strategy {
            HermToPolyStrategy::Naive => self
                .iter()
                .enumerate()
                .map(|(index, coefficient)| hermite_polynomial::<T>(index).scalar_mul(coefficient))
                .sum(),
            HermToPolyStrategy::Iterative => self
                .iter()
                .zip(hermite_polynomials())
                .map(|(coefficient, basis)| basis.scalar_mul(coefficient))
                .sum(),
            HermToPolyStrategy::Clenshaw => self.to_polynomial_clenshaw(),
        }
    }
    fn to_polynomial_clenshaw(&self) -> Polynomial<T> {
        if self.is_empty() {
            return Polynomial::zero();
        }
        let two = T::from_index(2);
        // a = b_{k+1}, b = b_{k+2} of the backward recurrence
        // b_k = h_k + 2x*b_{k+1} - 2(k+1)*b_{k+2}
        let mut a = Polynomial::<T>::zero();
        let mut b = Polynomial::<T>::zero();
        for k in (1..self.len()).rev() {
            let next = (a.mul_xpow(1).scalar_mul(&two)
                - b.scalar_mul(&T::from_index(2 * (k + 1))))
            .add_term(self.coefficients[k].clone(), 0);
            b = std::mem::replace(&mut a, next);
        }
        (a.mul_xpow(1).scalar_mul(&two) - b.scalar_mul(&two))
            .add_term(self.coefficients[0].clone(), 0)
    }
}

impl<T: DivisibleCoefficient> Polynomial<T> {
    /// The same polynomial as a Hermite series.
    pub fn to_hermite(&self) -> HermiteSeries<T> {
        self.to_hermite_with(PolyToHermStrategy::Horner)
    }
    /// The same polynomial as a Hermite series, with the selected strategy.
    ///
    /// This direction expresses powers of `x`, so it requires division;
    /// exact integer callers convert through `Ratio`.
    pub fn to_hermite_with(&self, strategy: PolyToHermStrategy) -> HermiteSeries<T> {
        match strategy {
            PolyToHermStrategy::Naive => self
                .iter()
                .enumerate()
                .map(|(index, coefficient)| hermite_monomial::<T>(index).scalar_mul(coefficient))
                .sum(),
            PolyToHermStrategy::Iterative => self
                .iter()
                .zip(hermite_monomials())
                .map(|(coefficient, monomial)| monomial.scalar_mul(coefficient))
                .sum(),
            PolyToHermStrategy::Horner => {
                let mut retval = HermiteSeries::zero();
                for coefficient in self.iter().rev() {
                    retval = retval.mul_x().add_term(coefficient.clone(), 0);
                }
                retval
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_rational::Ratio;

    const TO_POLY: &[HermToPolyStrategy] = &[
        HermToPolyStrategy::Naive,
        HermToPolyStrategy::Iterative,
        HermToPolyStrategy::Clenshaw,
    ];

    const TO_HERM: &[PolyToHermStrategy] = &[
        PolyToHermStrategy::Naive,
        PolyToHermStrategy::Iterative,
        PolyToHermStrategy::Horner,
    ];

    #[test]
    fn test_to_polynomial() {
        for &strategy in TO_POLY {
            // the basis polynomials themselves
            assert_eq!(
                HermiteSeries::<i64>::term(2, 1).to_polynomial_with(strategy),
                vec![-2, 0, 4].into()
            );
            // 1 + 2*H1 + 3*H2 = -5 + 4x + 12x^2
            assert_eq!(
                HermiteSeries::<i64>::from(vec![1, 2, 3]).to_polynomial_with(strategy),
                vec![-5, 4, 12].into()
            );
            assert_eq!(
                HermiteSeries::<i64>::zero().to_polynomial_with(strategy),
                Polynomial::zero()
            );
            assert_eq!(
                HermiteSeries::<i64>::from(vec![7]).to_polynomial_with(strategy),
                vec![7].into()
            );
        }
    }

    #[test]
    fn test_to_hermite() {
        let r = |n: i64, d: i64| Ratio::new(n, d);
        for &strategy in TO_HERM {
            // x^2 = H0/2 + H2/4
            assert_eq!(
                Polynomial::<Ratio<i64>>::from(vec![0, 0, 1]).to_hermite_with(strategy),
                vec![r(1, 2), r(0, 1), r(1, 4)].into_iter().collect()
            );
            assert_eq!(
                Polynomial::<Ratio<i64>>::zero().to_hermite_with(strategy),
                HermiteSeries::zero()
            );
        }
    }

    #[test]
    fn test_round_trips() {
        let series: HermiteSeries<Ratio<i64>> = vec![3, -1, 4, 1, -5].into();
        for &strategy in TO_POLY {
            assert_eq!(
                series.to_polynomial_with(strategy).to_hermite(),
                series,
                "{:?}",
                strategy
            );
        }
        let poly: Polynomial<Ratio<i64>> = vec![2, 7, 1, -8, 2].into();
        for &strategy in TO_HERM {
            assert_eq!(
                poly.to_hermite_with(strategy).to_polynomial(),
                poly,
                "{:?}",
                strategy
            );
        }
    }

    #[test]
    fn test_x_squared_in_both_bases() {
        // x as a series, squared by linearization, matches converting x^2
        let x = HermiteSeries::<Ratio<i64>>::x();
        let squared = &x * &x;
        assert_eq!(
            squared,
            Polynomial::<Ratio<i64>>::from(vec![0, 0, 1]).to_hermite()
        );
        assert_eq!(squared.to_polynomial(), vec![0, 0, 1].into());
    }
}

// SPDX-License-Identifier: LGPL-2.1-or-later
// See Notices.txt for copyright information
use crate::hermite::HermiteSeries;
use crate::polynomial::Polynomial;
use crate::traits::{Coefficient, DivisibleCoefficient};
use lazy_static::lazy_static;
use num_bigint::BigInt;
use num_traits::{One, Zero};
use std::sync::Mutex;

/// Selects how a Hermite basis polynomial is generated. All strategies
/// produce the same coefficients for exact scalar types; under floats the
/// explicit form accumulates rounding differently from the recurrences at
/// large `n`.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub enum HermiteStrategy {
    /// The three-term recurrence, unwound by recursion.
    Recursive,
    /// The three-term recurrence as a rolling-pair loop.
    Iterative,
    /// The closed form, stepping down from the leading `2^n` term.
    Explicit,
}

/// Selects how `x^n` is expressed in the Hermite basis.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub enum MonomialStrategy {
    /// `x * (x^(n-1) in the basis)`, unwound by recursion.
    Recursive,
    /// The same product as a loop.
    Iterative,
    /// The closed form, stepping down from the leading `2^-n` term.
    Explicit,
}

/// One step of `H_{k+1} = 2x*H_k - 2k*H_{k-1}`.
fn recurrence_step<T: Coefficient>(
    k: usize,
    h_k: &Polynomial<T>,
    h_k_minus_1: &Polynomial<T>,
) -> Polynomial<T> {
    h_k.mul_xpow(1).scalar_mul(&T::from_index(2)) - h_k_minus_1.scalar_mul(&T::from_index(2 * k))
}

/// The physicists' Hermite polynomial `H_n` in the monomial basis,
/// generated by the three-term recurrence.
pub fn hermite_polynomial<T: Coefficient>(n: usize) -> Polynomial<T> {
    hermite_iterative(n)
}

/// The physicists' Hermite polynomial `H_n`, generated with the selected
/// strategy.
pub fn hermite_polynomial_with<T: DivisibleCoefficient>(
    n: usize,
    strategy: HermiteStrategy,
) -> Polynomial<T> {
    match strategy {
        HermiteStrategy::Recursive => hermite_recursive(n),
        HermiteStrategy::Iterative => hermite_iterative(n),
        HermiteStrategy::Explicit => hermite_explicit(n),
    }
}

fn hermite_recursive<T: Coefficient>(n: usize) -> Polynomial<T> {
    // recursion on the pair (H_n, H_{n-1}) keeps the depth linear
    fn pair<T: Coefficient>(n: usize) -> (Polynomial<T>, Polynomial<T>) {
        if n == 1 {
            (Polynomial::monomial(1, T::from_index(2)), Polynomial::one())
        } else {
            let (h, h_prev) = pair::<T>(n - 1);
            (recurrence_step(n - 1, &h, &h_prev), h)
        }
    }
    if n == 0 {
        Polynomial::one()
    } else {
        pair(n).0
    }
}

pub(crate) fn hermite_iterative<T: Coefficient>(n: usize) -> Polynomial<T> {
    hermite_polynomials().nth(n).expect("iterator is infinite")
}

fn hermite_explicit<T: DivisibleCoefficient>(n: usize) -> Polynomial<T> {
    let mut lead = T::one();
    for _ in 0..n {
        lead *= T::from_index(2);
    }
    let mut coefficients = vec![T::zero(); n + 1];
    coefficients[n] = lead;
    // coefficient ratio between consecutive populated slots; the division
    // is exact for integer types at every step
    for m in 1..=n / 2 {
        let mut term = -coefficients[n - 2 * (m - 1)].clone();
        term *= T::from_index(n - 2 * m + 1);
        term *= T::from_index(n - 2 * m + 2);
        coefficients[n - 2 * m] = term / T::from_index(4 * m);
    }
    coefficients.into()
}

/// A restartable infinite iterator over `H_0, H_1, H_2, ...`, one
/// recurrence step per item.
pub fn hermite_polynomials<T: Coefficient>() -> HermitePolynomials<T> {
    HermitePolynomials {
        index: 0,
        current: Polynomial::one(),
        previous: Polynomial::zero(),
    }
}

/// See [`hermite_polynomials`].
#[derive(Clone, Debug)]
pub struct HermitePolynomials<T> {
    index: usize,
    current: Polynomial<T>,
    previous: Polynomial<T>,
}

impl<T: Coefficient> Iterator for HermitePolynomials<T> {
    type Item = Polynomial<T>;
    fn next(&mut self) -> Option<Polynomial<T>> {
        let retval = self.current.clone();
        let next = recurrence_step(self.index, &self.current, &self.previous);
        self.previous = std::mem::replace(&mut self.current, next);
        self.index += 1;
        Some(retval)
    }
}

lazy_static! {
    static ref HERMITE_CACHE: Mutex<Vec<Polynomial<BigInt>>> =
        Mutex::new(vec![Polynomial::one()]);
}

/// `H_n` as exact `BigInt` data from a process-wide append-only cache.
///
/// The cache is grown under a mutex to the highest index requested so far
/// and never shrinks; repeated lookups are a lock plus a clone.
pub fn hermite_cached(n: usize) -> Polynomial<BigInt> {
    let mut cache = HERMITE_CACHE.lock().expect("hermite cache mutex poisoned");
    while cache.len() <= n {
        let k = cache.len() - 1;
        let next = if k == 0 {
            recurrence_step(0, &cache[0], &Polynomial::zero())
        } else {
            recurrence_step(k, &cache[k], &cache[k - 1])
        };
        cache.push(next);
    }
    cache[n].clone()
}

/// The monomial `x^n` expressed in the Hermite basis.
///
/// Needs division however it is computed, because `x` itself is `H_1 / 2`.
pub fn hermite_monomial<T: DivisibleCoefficient>(n: usize) -> HermiteSeries<T> {
    hermite_monomial_with(n, MonomialStrategy::Iterative)
}

/// The monomial `x^n` in the Hermite basis, with the selected strategy.
pub fn hermite_monomial_with<T: DivisibleCoefficient>(
    n: usize,
    strategy: MonomialStrategy,
) -> HermiteSeries<T> {
    match strategy {
        MonomialStrategy::Recursive => {
            if n == 0 {
                HermiteSeries::one()
            } else {
                hermite_monomial_with(n - 1, MonomialStrategy::Recursive).mul_x()
            }
        }
        MonomialStrategy::Iterative => {
            let mut retval = HermiteSeries::one();
            for _ in 0..n {
                retval = retval.mul_x();
            }
            retval
        }
        MonomialStrategy::Explicit => {
            let mut lead = T::one();
            for _ in 0..n {
                lead /= T::from_index(2);
            }
            let mut coefficients = vec![T::zero(); n + 1];
            coefficients[n] = lead;
            for m in 1..=n / 2 {
                let mut term = coefficients[n - 2 * (m - 1)].clone();
                term *= T::from_index(n - 2 * m + 1);
                term *= T::from_index(n - 2 * m + 2);
                coefficients[n - 2 * m] = term / T::from_index(m);
            }
            coefficients.into()
        }
    }
}

/// An infinite iterator over `x^0, x^1, x^2, ...` in the Hermite basis,
/// one `mul_x` per item.
pub fn hermite_monomials<T: DivisibleCoefficient>() -> HermiteMonomials<T> {
    HermiteMonomials {
        next: HermiteSeries::one(),
    }
}

/// See [`hermite_monomials`].
#[derive(Clone, Debug)]
pub struct HermiteMonomials<T> {
    next: HermiteSeries<T>,
}

impl<T: DivisibleCoefficient> Iterator for HermiteMonomials<T> {
    type Item = HermiteSeries<T>;
    fn next(&mut self) -> Option<HermiteSeries<T>> {
        let retval = self.next.clone();
        self.next = self.next.mul_x();
        Some(retval)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_rational::Ratio;

    const STRATEGIES: &[HermiteStrategy] = &[
        HermiteStrategy::Recursive,
        HermiteStrategy::Iterative,
        HermiteStrategy::Explicit,
    ];

    const MONOMIAL_STRATEGIES: &[MonomialStrategy] = &[
        MonomialStrategy::Recursive,
        MonomialStrategy::Iterative,
        MonomialStrategy::Explicit,
    ];

    #[test]
    fn test_small_hermite_polynomials() {
        let expected: &[Polynomial<i64>] = &[
            vec![1].into(),
            vec![0, 2].into(),
            vec![-2, 0, 4].into(),
            vec![0, -12, 0, 8].into(),
            vec![12, 0, -48, 0, 16].into(),
        ];
        for &strategy in STRATEGIES {
            for (n, h) in expected.iter().enumerate() {
                assert_eq!(
                    &hermite_polynomial_with::<i64>(n, strategy),
                    h,
                    "H_{} via {:?}",
                    n,
                    strategy
                );
            }
        }
    }

    #[test]
    fn test_hermite_polynomials_iterator() {
        let from_iterator: Vec<Polynomial<i64>> = hermite_polynomials().take(8).collect();
        for (n, h) in from_iterator.iter().enumerate() {
            assert_eq!(h, &hermite_polynomial::<i64>(n));
        }
        // restartable: a fresh iterator starts over at H_0
        assert!(hermite_polynomials::<i64>().next().unwrap().is_one());
    }

    #[test]
    fn test_hermite_cached() {
        for n in 0..12 {
            assert_eq!(
                hermite_cached(n),
                hermite_polynomial::<BigInt>(n),
                "H_{}",
                n
            );
        }
        // repeated lookups serve the same data
        assert_eq!(hermite_cached(7), hermite_cached(7));
    }

    #[test]
    fn test_hermite_bigint_exactness() {
        // far past the i64 overflow point; all strategies agree exactly
        let h = hermite_cached(40);
        assert_eq!(
            h,
            hermite_polynomial_with::<BigInt>(40, HermiteStrategy::Explicit)
        );
        assert_eq!(
            h,
            hermite_polynomial_with::<BigInt>(40, HermiteStrategy::Recursive)
        );
        // leading coefficient of H_n is 2^n
        assert_eq!(h.leading_coefficient(), Some(&(BigInt::one() << 40)));
    }

    #[test]
    fn test_hermite_monomial() {
        let r = |n: i64, d: i64| Ratio::new(n, d);
        for &strategy in MONOMIAL_STRATEGIES {
            assert!(hermite_monomial_with::<Ratio<i64>>(0, strategy).is_one());
            assert_eq!(
                hermite_monomial_with::<Ratio<i64>>(1, strategy),
                HermiteSeries::x()
            );
            // x^2 = H0/2 + H2/4
            assert_eq!(
                hermite_monomial_with::<Ratio<i64>>(2, strategy),
                vec![r(1, 2), r(0, 1), r(1, 4)].into_iter().collect()
            );
            // x^3 = 3*H1/4 + H3/8
            assert_eq!(
                hermite_monomial_with::<Ratio<i64>>(3, strategy),
                vec![r(0, 1), r(3, 4), r(0, 1), r(1, 8)].into_iter().collect()
            );
        }
    }

    #[test]
    fn test_hermite_monomials_iterator() {
        let monomials: Vec<HermiteSeries<Ratio<i64>>> = hermite_monomials().take(6).collect();
        for (n, monomial) in monomials.iter().enumerate() {
            assert_eq!(monomial, &hermite_monomial::<Ratio<i64>>(n), "x^{}", n);
        }
    }
}

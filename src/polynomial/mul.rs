// SPDX-License-Identifier: LGPL-2.1-or-later
// See Notices.txt for copyright information
use crate::polynomial::Polynomial;
use crate::traits::{Coefficient, DivisibleCoefficient};
use num_integer::Integer;
use num_traits::{CheckedMul, One, Zero};
use std::iter::Product;
use std::ops::{Div, Mul, MulAssign};

/// Selects the multiplication algorithm. All strategies produce the same
/// product; they differ in complexity.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub enum MulStrategy {
    /// Full convolution, `O(n*m)` coefficient multiplications.
    Naive,
    /// Divide-and-conquer on the shorter operand, `O(n^1.58)` for balanced
    /// operands.
    Karatsuba,
}

fn add_slices<T: Coefficient>(lhs: &[T], rhs: &[T]) -> Vec<T> {
    let (longer, shorter) = if lhs.len() >= rhs.len() {
        (lhs, rhs)
    } else {
        (rhs, lhs)
    };
    let mut retval = longer.to_vec();
    for (index, coefficient) in shorter.iter().enumerate() {
        retval[index] += coefficient.clone();
    }
    retval
}

pub(crate) fn mul_naive_slices<T: Coefficient>(lhs: &[T], rhs: &[T]) -> Vec<T> {
    if lhs.is_empty() || rhs.is_empty() {
        return Vec::new();
    }
    let mut product = vec![T::zero(); lhs.len() + rhs.len() - 1];
    for (l_index, l_coefficient) in lhs.iter().enumerate() {
        for (r_index, r_coefficient) in rhs.iter().enumerate() {
            product[l_index + r_index] += l_coefficient.clone() * r_coefficient.clone();
        }
    }
    product
}

/// Karatsuba on equal-length slices.
fn karatsuba_rec<T: Coefficient>(lhs: &[T], rhs: &[T]) -> Vec<T> {
    debug_assert_eq!(lhs.len(), rhs.len());
    let len = lhs.len();
    if len == 1 {
        return vec![lhs[0].clone() * rhs[0].clone()];
    }
    let mid = len / 2;
    let z0 = karatsuba_rec(&lhs[..mid], &rhs[..mid]);
    let z2 = karatsuba_rec(&lhs[mid..], &rhs[mid..]);
    let z1 = karatsuba_rec(
        &add_slices(&lhs[..mid], &lhs[mid..]),
        &add_slices(&rhs[..mid], &rhs[mid..]),
    );
    // cross term z1 - z0 - z2; z1 is at least as long as z0 and z2
    let mut cross = z1;
    for (index, coefficient) in z0.iter().enumerate() {
        cross[index] -= coefficient.clone();
    }
    for (index, coefficient) in z2.iter().enumerate() {
        cross[index] -= coefficient.clone();
    }
    let mut product = vec![T::zero(); 2 * len - 1];
    for (index, coefficient) in z0.into_iter().enumerate() {
        product[index] += coefficient;
    }
    for (index, coefficient) in cross.into_iter().enumerate() {
        product[index + mid] += coefficient;
    }
    for (index, coefficient) in z2.into_iter().enumerate() {
        product[index + 2 * mid] += coefficient;
    }
    product
}

/// Splits at the shorter operand's length: the aligned low part runs through
/// [`karatsuba_rec`], the overhang is a plain convolution added at an offset.
fn mul_karatsuba_slices<T: Coefficient>(lhs: &[T], rhs: &[T]) -> Vec<T> {
    if lhs.is_empty() || rhs.is_empty() {
        return Vec::new();
    }
    let (shorter, longer) = if lhs.len() <= rhs.len() {
        (lhs, rhs)
    } else {
        (rhs, lhs)
    };
    let (low, high) = longer.split_at(shorter.len());
    let mut product = karatsuba_rec(shorter, low);
    if !high.is_empty() {
        product.resize_with(shorter.len() + longer.len() - 1, T::zero);
        for (index, coefficient) in mul_naive_slices(shorter, high).into_iter().enumerate() {
            product[index + shorter.len()] += coefficient;
        }
    }
    product
}

impl<T: Coefficient> Polynomial<T> {
    /// The product `self * rhs` computed with the selected strategy.
    pub fn mul_with(&self, rhs: &Self, strategy: MulStrategy) -> Self {
        match strategy {
            MulStrategy::Naive => mul_naive_slices(&self.coefficients, &rhs.coefficients).into(),
            MulStrategy::Karatsuba => {
                mul_karatsuba_slices(&self.coefficients, &rhs.coefficients).into()
            }
        }
    }
    /// The product `self * x^n`: prepends `n` zero coefficients, no
    /// arithmetic.
    pub fn mul_xpow(&self, n: usize) -> Self {
        if self.is_empty() {
            return Self::zero();
        }
        let mut coefficients = Vec::with_capacity(self.len() + n);
        coefficients.resize_with(n, T::zero);
        coefficients.extend(self.iter().cloned());
        Polynomial { coefficients }
    }
    /// The product of all factors, computed with the selected strategy; the
    /// empty product is the constant one polynomial.
    pub fn product_with<I: IntoIterator<Item = Polynomial<T>>>(
        factors: I,
        strategy: MulStrategy,
    ) -> Self {
        let mut retval = Self::one();
        for factor in factors {
            retval = retval.mul_with(&factor, strategy);
        }
        retval
    }
    /// Elementwise multiplication by a scalar.
    pub fn scalar_mul(&self, a: &T) -> Self {
        self.iter().map(|c| c.clone() * a.clone()).collect()
    }
}

impl<T: DivisibleCoefficient> Polynomial<T> {
    /// Elementwise division by a scalar.
    pub fn scalar_div(&self, a: &T) -> Self {
        self.iter().map(|c| c.clone() / a.clone()).collect()
    }
}

impl<T: Coefficient + Integer> Polynomial<T> {
    /// Elementwise floor division by a scalar.
    pub fn scalar_div_floor(&self, a: &T) -> Self {
        self.iter().map(|c| c.div_floor(a)).collect()
    }
    /// Elementwise floored remainder by a scalar.
    pub fn scalar_mod(&self, a: &T) -> Self {
        self.iter().map(|c| c.mod_floor(a)).collect()
    }
    /// Elementwise floor division and remainder in one pass.
    pub fn scalar_div_mod(&self, a: &T) -> (Self, Self) {
        let mut quotients = Vec::with_capacity(self.len());
        let mut remainders = Vec::with_capacity(self.len());
        for coefficient in self.iter() {
            let (quotient, remainder) = coefficient.div_mod_floor(a);
            quotients.push(quotient);
            remainders.push(remainder);
        }
        (quotients.into(), remainders.into())
    }
}

impl<'a, T: Coefficient> Mul for &'a Polynomial<T> {
    type Output = Polynomial<T>;
    fn mul(self, rhs: &Polynomial<T>) -> Polynomial<T> {
        mul_naive_slices(&self.coefficients, &rhs.coefficients).into()
    }
}

impl<'a, T: Coefficient> Mul<Polynomial<T>> for &'a Polynomial<T> {
    type Output = Polynomial<T>;
    fn mul(self, rhs: Polynomial<T>) -> Polynomial<T> {
        self * &rhs
    }
}

impl<'a, T: Coefficient> Mul<&'a Polynomial<T>> for Polynomial<T> {
    type Output = Polynomial<T>;
    fn mul(self, rhs: &Polynomial<T>) -> Polynomial<T> {
        &self * rhs
    }
}

impl<T: Coefficient> Mul for Polynomial<T> {
    type Output = Polynomial<T>;
    fn mul(self, rhs: Polynomial<T>) -> Polynomial<T> {
        &self * &rhs
    }
}

impl<T: Coefficient> MulAssign for Polynomial<T> {
    fn mul_assign(&mut self, rhs: Polynomial<T>) {
        *self = &*self * &rhs;
    }
}

impl<'a, T: Coefficient> MulAssign<&'a Polynomial<T>> for Polynomial<T> {
    fn mul_assign(&mut self, rhs: &Polynomial<T>) {
        *self = &*self * rhs;
    }
}

impl<T: Coefficient> CheckedMul for Polynomial<T> {
    fn checked_mul(&self, rhs: &Self) -> Option<Self> {
        Some(self * rhs)
    }
}

impl<T: Coefficient> Mul<T> for Polynomial<T> {
    type Output = Polynomial<T>;
    fn mul(self, rhs: T) -> Polynomial<T> {
        self.scalar_mul(&rhs)
    }
}

impl<T: Coefficient> Mul<T> for &'_ Polynomial<T> {
    type Output = Polynomial<T>;
    fn mul(self, rhs: T) -> Polynomial<T> {
        self.scalar_mul(&rhs)
    }
}

impl<T: DivisibleCoefficient> Div<T> for Polynomial<T> {
    type Output = Polynomial<T>;
    fn div(self, rhs: T) -> Polynomial<T> {
        self.scalar_div(&rhs)
    }
}

impl<T: DivisibleCoefficient> Div<T> for &'_ Polynomial<T> {
    type Output = Polynomial<T>;
    fn div(self, rhs: T) -> Polynomial<T> {
        self.scalar_div(&rhs)
    }
}

impl<T: Coefficient> One for Polynomial<T> {
    fn one() -> Self {
        Polynomial {
            coefficients: vec![T::one()],
        }
    }
}

/// The empty product is the multiplicative identity `(1)`.
impl<T: Coefficient> Product for Polynomial<T> {
    fn product<I: Iterator<Item = Polynomial<T>>>(iter: I) -> Self {
        Polynomial::product_with(iter, MulStrategy::Naive)
    }
}

impl<'a, T: Coefficient> Product<&'a Polynomial<T>> for Polynomial<T> {
    fn product<I: Iterator<Item = &'a Polynomial<T>>>(iter: I) -> Self {
        Polynomial::product_with(iter.cloned(), MulStrategy::Naive)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::tests::test_op_helper;
    use rand::{Rng, SeedableRng};
    use rand_pcg::Pcg64Mcg;

    #[test]
    fn test_mul() {
        let test = |l: Polynomial<i64>, r: Polynomial<i64>, expected: &Polynomial<i64>| {
            test_op_helper(
                l,
                r,
                expected,
                |l, r| *l *= r,
                |l, r| *l *= r,
                |l, r| l * r,
                |l, r| l * r,
                |l, r| l * r,
                |l, r| l * r,
            );
        };
        test(
            vec![1, 1].into(),
            vec![1, -1].into(),
            &vec![1, 0, -1].into(),
        );
        test(
            vec![1, 2, 3].into(),
            vec![4, 5].into(),
            &vec![4, 13, 22, 15].into(),
        );
        test(vec![1, 2, 3].into(), vec![].into(), &vec![].into());
    }

    #[test]
    fn test_mul_identities() {
        let poly = Polynomial::<i32>::from(vec![3, 0, -2, 7]);
        assert_eq!(&poly * &Polynomial::one(), poly);
        assert!((&poly * &Polynomial::zero()).is_zero());
        assert!(Polynomial::<i32>::one().is_one());
    }

    #[test]
    fn test_karatsuba_matches_naive() {
        let cases: &[(Vec<i64>, Vec<i64>)] = &[
            (vec![], vec![1, 2]),
            (vec![5], vec![1, 2, 3]),
            (vec![1, 1], vec![1, -1]),
            (vec![1, 2, 3, 4], vec![5, 6, 7, 8]),
            (vec![1, 2, 3, 4, 5, 6, 7], vec![2, -1]),
            (vec![1, 0, 0, 0, -1], vec![3, 1, 4, 1, 5, 9, 2, 6]),
        ];
        for (l, r) in cases {
            let l = Polynomial::<i64>::from(l.clone());
            let r = Polynomial::<i64>::from(r.clone());
            assert_eq!(
                l.mul_with(&r, MulStrategy::Karatsuba),
                l.mul_with(&r, MulStrategy::Naive),
                "operands {} and {}",
                l,
                r
            );
        }
    }

    #[test]
    fn test_karatsuba_matches_naive_random() {
        let mut rng = Pcg64Mcg::seed_from_u64(0x202208);
        for _ in 0..100 {
            let l_len = rng.gen_range(0..24);
            let r_len = rng.gen_range(0..24);
            let l: Polynomial<i64> = (0..l_len).map(|_| rng.gen_range(-50..=50)).collect();
            let r: Polynomial<i64> = (0..r_len).map(|_| rng.gen_range(-50..=50)).collect();
            assert_eq!(
                l.mul_with(&r, MulStrategy::Karatsuba),
                l.mul_with(&r, MulStrategy::Naive)
            );
        }
    }

    #[test]
    fn test_mul_xpow() {
        assert_eq!(
            Polynomial::<i32>::from(vec![1, 2]).mul_xpow(2),
            vec![0, 0, 1, 2].into()
        );
        assert_eq!(
            Polynomial::<i32>::from(vec![1, 2]).mul_xpow(0),
            vec![1, 2].into()
        );
        assert!(Polynomial::<i32>::zero().mul_xpow(3).is_zero());
    }

    #[test]
    fn test_product() {
        let factors: Vec<Polynomial<i64>> =
            vec![vec![1, 1].into(), vec![1, -1].into(), vec![2].into()];
        assert_eq!(
            factors.iter().product::<Polynomial<i64>>(),
            vec![2, 0, -2].into()
        );
        assert!(Vec::<Polynomial<i64>>::new()
            .into_iter()
            .product::<Polynomial<i64>>()
            .is_one());
    }

    #[test]
    fn test_scalar_ops() {
        let poly = Polynomial::from(vec![2, -4, 6]);
        assert_eq!(poly.scalar_mul(&3), vec![6, -12, 18].into());
        assert_eq!(poly.clone() * 0, Polynomial::zero());
        assert_eq!(poly.scalar_div(&2), vec![1, -2, 3].into());
        assert_eq!(poly.scalar_div_floor(&4), vec![0, -1, 1].into());
        assert_eq!(poly.scalar_mod(&4), vec![2, 0, 2].into());
        let (quotient, remainder) = poly.scalar_div_mod(&4);
        assert_eq!(quotient, poly.scalar_div_floor(&4));
        assert_eq!(remainder, poly.scalar_mod(&4));
    }
}

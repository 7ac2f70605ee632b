// SPDX-License-Identifier: LGPL-2.1-or-later
// See Notices.txt for copyright information
use crate::hermite::HermiteSeries;
use crate::polynomial::PowStrategy;
use crate::traits::{Coefficient, DivisibleCoefficient};
use num_integer::Integer;
use num_traits::{CheckedAdd, CheckedMul, CheckedSub, One, Pow, Zero};
use std::iter::{Product, Sum};
use std::ops::{Add, AddAssign, Div, Mul, MulAssign, Neg, Sub, SubAssign};

fn add_sub_assign<T: Coefficient, AddSubAssign: Fn(&mut T, T)>(
    lhs: &mut HermiteSeries<T>,
    rhs: &HermiteSeries<T>,
    add_sub_assign: AddSubAssign,
) {
    while lhs.len() < rhs.len() {
        lhs.coefficients.push(T::zero());
    }
    for (index, rhs_coefficient) in rhs.iter().enumerate() {
        add_sub_assign(&mut lhs.coefficients[index], rhs_coefficient.clone());
    }
    lhs.normalize();
}

/// Pascal's triangle up to row `rows - 1`, built with pure additions in `T`.
///
/// Addition instead of the factorial quotient keeps the binomials exact for
/// every `T` and avoids overflowing a fixed-width intermediate before the
/// conversion into wide types such as `BigInt`.
fn pascal_rows<T: Coefficient>(rows: usize) -> Vec<Vec<T>> {
    let mut retval: Vec<Vec<T>> = Vec::with_capacity(rows);
    for n in 0..rows {
        let mut row = Vec::with_capacity(n + 1);
        row.push(T::one());
        for k in 1..n {
            let mut v = retval[n - 1][k - 1].clone();
            v += retval[n - 1][k].clone();
            row.push(v);
        }
        if n > 0 {
            row.push(T::one());
        }
        retval.push(row);
    }
    retval
}

/// The linearization product.
///
/// `H_i * H_j = sum_k 2^k k! C(i,k) C(j,k) H_{i+j-2k}`, `k` up to
/// `min(i, j)`. The weight `2^k k!` is carried multiplicatively across the
/// inner loop, so the whole product is division-free.
fn mul_linearized<T: Coefficient>(lhs: &[T], rhs: &[T]) -> Vec<T> {
    if lhs.is_empty() || rhs.is_empty() {
        return Vec::new();
    }
    let binomials = pascal_rows::<T>(lhs.len().max(rhs.len()));
    let mut product = vec![T::zero(); lhs.len() + rhs.len() - 1];
    for (i, lhs_coefficient) in lhs.iter().enumerate() {
        for (j, rhs_coefficient) in rhs.iter().enumerate() {
            let mut weight = T::one();
            for k in 0..=i.min(j) {
                if k > 0 {
                    weight *= T::from_index(2 * k);
                }
                let mut term = lhs_coefficient.clone() * rhs_coefficient.clone();
                term *= weight.clone();
                term *= binomials[i][k].clone();
                term *= binomials[j][k].clone();
                product[i + j - 2 * k] += term;
            }
        }
    }
    product
}

impl<T: Coefficient> HermiteSeries<T> {
    /// The sum `self + c*H_n` as a single-element update.
    pub fn add_term(mut self, c: T, n: usize) -> Self {
        if n >= self.len() {
            self.coefficients.resize_with(n + 1, T::zero);
        }
        self.coefficients[n] += c;
        self.normalize();
        self
    }
    /// The difference `self - c*H_n` as a single-element update.
    pub fn sub_term(mut self, c: T, n: usize) -> Self {
        if n >= self.len() {
            self.coefficients.resize_with(n + 1, T::zero);
        }
        self.coefficients[n] -= c;
        self.normalize();
        self
    }
    /// The product with the single basis function `H_n`.
    ///
    /// One row of the linearization: `O(len * n)` instead of the full
    /// double loop.
    pub fn mul_hn(&self, n: usize) -> Self {
        if self.is_empty() {
            return Self::zero();
        }
        let binomials = pascal_rows::<T>(self.len().max(n + 1));
        let mut product = vec![T::zero(); self.len() + n];
        for (i, coefficient) in self.iter().enumerate() {
            let mut weight = T::one();
            for k in 0..=i.min(n) {
                if k > 0 {
                    weight *= T::from_index(2 * k);
                }
                let mut term = coefficient.clone() * weight.clone();
                term *= binomials[i][k].clone();
                term *= binomials[n][k].clone();
                product[i + n - 2 * k] += term;
            }
        }
        product.into()
    }
    /// Elementwise multiplication by a scalar.
    pub fn scalar_mul(&self, a: &T) -> Self {
        self.iter().map(|c| c.clone() * a.clone()).collect()
    }
    /// `self` raised to a nonnegative power with the selected strategy.
    ///
    /// `pow_with(0)` is the constant one series, even for the zero series.
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
    /// linearization product per step. Callers limit it with `take`.
    pub fn powers(&self) -> HermitePowers<T> {
        HermitePowers {
            base: self,
            next: Self::one(),
        }
    }
}

/// See [`HermiteSeries::powers`].
#[derive(Clone, Debug)]
pub struct HermitePowers<'a, T> {
    base: &'a HermiteSeries<T>,
    next: HermiteSeries<T>,
}

impl<'a, T: Coefficient> Iterator for HermitePowers<'a, T> {
    type Item = HermiteSeries<T>;
    fn next(&mut self) -> Option<HermiteSeries<T>> {
        let retval = self.next.clone();
        self.next = &self.next * self.base;
        Some(retval)
    }
}

impl<T: DivisibleCoefficient> HermiteSeries<T> {
    /// The product `x * self` via the identity
    /// `x*H_k = H_{k+1}/2 + k*H_{k-1}`, in `O(len)`.
    pub fn mul_x(&self) -> Self {
        if self.is_empty() {
            return Self::zero();
        }
        let two = T::from_index(2);
        let mut coefficients = vec![T::zero(); self.len() + 1];
        for (k, coefficient) in self.iter().enumerate() {
            coefficients[k + 1] += coefficient.clone() / two.clone();
            if k > 0 {
                let mut low = coefficient.clone();
                low *= T::from_index(k);
                coefficients[k - 1] += low;
            }
        }
        coefficients.into()
    }
    /// Elementwise division by a scalar.
    pub fn scalar_div(&self, a: &T) -> Self {
        self.iter().map(|c| c.clone() / a.clone()).collect()
    }
}

impl<T: Coefficient + Integer> HermiteSeries<T> {
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

impl<T: Coefficient> AddAssign for HermiteSeries<T> {
    fn add_assign(&mut self, rhs: HermiteSeries<T>) {
        add_sub_assign(self, &rhs, |l, r| *l += r);
    }
}

impl<'a, T: Coefficient> AddAssign<&'a HermiteSeries<T>> for HermiteSeries<T> {
    fn add_assign(&mut self, rhs: &HermiteSeries<T>) {
        add_sub_assign(self, rhs, |l, r| *l += r);
    }
}

impl<T: Coefficient> Add for HermiteSeries<T> {
    type Output = HermiteSeries<T>;
    fn add(mut self, rhs: HermiteSeries<T>) -> Self::Output {
        self += rhs;
        self
    }
}

impl<'a, T: Coefficient> Add<&'a HermiteSeries<T>> for HermiteSeries<T> {
    type Output = HermiteSeries<T>;
    fn add(mut self, rhs: &HermiteSeries<T>) -> Self::Output {
        self += rhs;
        self
    }
}

impl<'a, T: Coefficient> Add<HermiteSeries<T>> for &'a HermiteSeries<T> {
    type Output = HermiteSeries<T>;
    fn add(self, mut rhs: HermiteSeries<T>) -> Self::Output {
        rhs += self;
        rhs
    }
}

impl<'a, T: Coefficient> Add for &'a HermiteSeries<T> {
    type Output = HermiteSeries<T>;
    fn add(self, rhs: Self) -> Self::Output {
        let mut retval = self.clone();
        retval += rhs;
        retval
    }
}

impl<T: Coefficient> CheckedAdd for HermiteSeries<T> {
    fn checked_add(&self, rhs: &Self) -> Option<Self> {
        Some(self + rhs)
    }
}

impl<T: Coefficient> SubAssign for HermiteSeries<T> {
    fn sub_assign(&mut self, rhs: HermiteSeries<T>) {
        add_sub_assign(self, &rhs, |l, r| *l -= r);
    }
}

impl<'a, T: Coefficient> SubAssign<&'a HermiteSeries<T>> for HermiteSeries<T> {
    fn sub_assign(&mut self, rhs: &HermiteSeries<T>) {
        add_sub_assign(self, rhs, |l, r| *l -= r);
    }
}

impl<T: Coefficient> Sub for HermiteSeries<T> {
    type Output = HermiteSeries<T>;
    fn sub(mut self, rhs: HermiteSeries<T>) -> Self::Output {
        self -= rhs;
        self
    }
}

impl<'a, T: Coefficient> Sub<&'a HermiteSeries<T>> for HermiteSeries<T> {
    type Output = HermiteSeries<T>;
    fn sub(mut self, rhs: &HermiteSeries<T>) -> Self::Output {
        self -= rhs;
        self
    }
}

impl<'a, T: Coefficient> Sub<HermiteSeries<T>> for &'a HermiteSeries<T> {
    type Output = HermiteSeries<T>;
    fn sub(self, rhs: HermiteSeries<T>) -> Self::Output {
        let mut lhs = self.clone();
        lhs -= rhs;
        lhs
    }
}

impl<'a, T: Coefficient> Sub for &'a HermiteSeries<T> {
    type Output = HermiteSeries<T>;
    fn sub(self, rhs: Self) -> Self::Output {
        let mut lhs = self.clone();
        lhs -= rhs;
        lhs
    }
}

impl<T: Coefficient> CheckedSub for HermiteSeries<T> {
    fn checked_sub(&self, rhs: &Self) -> Option<Self> {
        Some(self - rhs)
    }
}

impl<T: Coefficient> Neg for HermiteSeries<T> {
    type Output = HermiteSeries<T>;
    fn neg(self) -> HermiteSeries<T> {
        self.into_iter().map(Neg::neg).collect::<Vec<T>>().into()
    }
}

impl<T: Coefficient> Neg for &'_ HermiteSeries<T> {
    type Output = HermiteSeries<T>;
    fn neg(self) -> HermiteSeries<T> {
        self.iter().cloned().map(Neg::neg).collect::<Vec<T>>().into()
    }
}

impl<'a, T: Coefficient> Mul for &'a HermiteSeries<T> {
    type Output = HermiteSeries<T>;
    fn mul(self, rhs: &HermiteSeries<T>) -> HermiteSeries<T> {
        mul_linearized(&self.coefficients, &rhs.coefficients).into()
    }
}

impl<'a, T: Coefficient> Mul<HermiteSeries<T>> for &'a HermiteSeries<T> {
    type Output = HermiteSeries<T>;
    fn mul(self, rhs: HermiteSeries<T>) -> HermiteSeries<T> {
        self * &rhs
    }
}

impl<'a, T: Coefficient> Mul<&'a HermiteSeries<T>> for HermiteSeries<T> {
    type Output = HermiteSeries<T>;
    fn mul(self, rhs: &HermiteSeries<T>) -> HermiteSeries<T> {
        &self * rhs
    }
}

impl<T: Coefficient> Mul for HermiteSeries<T> {
    type Output = HermiteSeries<T>;
    fn mul(self, rhs: HermiteSeries<T>) -> HermiteSeries<T> {
        &self * &rhs
    }
}

impl<T: Coefficient> MulAssign for HermiteSeries<T> {
    fn mul_assign(&mut self, rhs: HermiteSeries<T>) {
        *self = &*self * &rhs;
    }
}

impl<'a, T: Coefficient> MulAssign<&'a HermiteSeries<T>> for HermiteSeries<T> {
    fn mul_assign(&mut self, rhs: &HermiteSeries<T>) {
        *self = &*self * rhs;
    }
}

impl<T: Coefficient> CheckedMul for HermiteSeries<T> {
    fn checked_mul(&self, rhs: &Self) -> Option<Self> {
        Some(self * rhs)
    }
}

impl<T: Coefficient> Mul<T> for HermiteSeries<T> {
    type Output = HermiteSeries<T>;
    fn mul(self, rhs: T) -> HermiteSeries<T> {
        self.scalar_mul(&rhs)
    }
}

impl<T: Coefficient> Mul<T> for &'_ HermiteSeries<T> {
    type Output = HermiteSeries<T>;
    fn mul(self, rhs: T) -> HermiteSeries<T> {
        self.scalar_mul(&rhs)
    }
}

impl<T: DivisibleCoefficient> Div<T> for HermiteSeries<T> {
    type Output = HermiteSeries<T>;
    fn div(self, rhs: T) -> HermiteSeries<T> {
        self.scalar_div(&rhs)
    }
}

impl<T: DivisibleCoefficient> Div<T> for &'_ HermiteSeries<T> {
    type Output = HermiteSeries<T>;
    fn div(self, rhs: T) -> HermiteSeries<T> {
        self.scalar_div(&rhs)
    }
}

impl<T: Coefficient> Pow<usize> for &'_ HermiteSeries<T> {
    type Output = HermiteSeries<T>;
    fn pow(self, exponent: usize) -> HermiteSeries<T> {
        self.pow_binary(exponent)
    }
}

impl<T: Coefficient> Pow<usize> for HermiteSeries<T> {
    type Output = HermiteSeries<T>;
    fn pow(self, exponent: usize) -> HermiteSeries<T> {
        self.pow_binary(exponent)
    }
}

impl<T: Coefficient> Zero for HermiteSeries<T> {
    fn zero() -> Self {
        Default::default()
    }
    fn set_zero(&mut self) {
        self.coefficients.clear();
    }
    fn is_zero(&self) -> bool {
        self.is_empty()
    }
}

impl<T: Coefficient> One for HermiteSeries<T> {
    fn one() -> Self {
        Self::term(0, T::one())
    }
    fn is_one(&self) -> bool {
        self.len() == 1 && self.coefficients[0].is_one()
    }
}

/// Folds all summands into one growing accumulator; the empty sum is the
/// zero series.
impl<T: Coefficient> Sum for HermiteSeries<T> {
    fn sum<I: Iterator<Item = HermiteSeries<T>>>(iter: I) -> Self {
        let mut retval = HermiteSeries::zero();
        for term in iter {
            retval += term;
        }
        retval
    }
}

impl<'a, T: Coefficient> Sum<&'a HermiteSeries<T>> for HermiteSeries<T> {
    fn sum<I: Iterator<Item = &'a HermiteSeries<T>>>(iter: I) -> Self {
        let mut retval = HermiteSeries::zero();
        for term in iter {
            retval += term;
        }
        retval
    }
}

impl<T: Coefficient> Product for HermiteSeries<T> {
    fn product<I: Iterator<Item = HermiteSeries<T>>>(iter: I) -> Self {
        let mut retval = HermiteSeries::one();
        for factor in iter {
            retval *= factor;
        }
        retval
    }
}

impl<'a, T: Coefficient> Product<&'a HermiteSeries<T>> for HermiteSeries<T> {
    fn product<I: Iterator<Item = &'a HermiteSeries<T>>>(iter: I) -> Self {
        let mut retval = HermiteSeries::one();
        for factor in iter {
            retval *= factor;
        }
        retval
    }
}

// SPDX-License-Identifier: LGPL-2.1-or-later
// See Notices.txt for copyright information
use crate::polynomial::Polynomial;
use crate::traits::Coefficient;
use num_traits::{CheckedAdd, CheckedSub, Zero};
use std::iter::Sum;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

fn add_sub_assign<T: Coefficient, AddSubAssign: Fn(&mut T, T)>(
    lhs: &mut Polynomial<T>,
    rhs: &Polynomial<T>,
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

impl<T: Coefficient> Polynomial<T> {
    /// The sum `self + c*x^n` as a single-element update.
    ///
    /// Cheaper than constructing the monomial and adding; still extends the
    /// coefficient sequence when `n` exceeds the current degree.
    pub fn add_term(mut self, c: T, n: usize) -> Self {
        if n >= self.len() {
            self.coefficients.resize_with(n + 1, T::zero);
        }
        self.coefficients[n] += c;
        self.normalize();
        self
    }
    /// The difference `self - c*x^n` as a single-element update.
    pub fn sub_term(mut self, c: T, n: usize) -> Self {
        if n >= self.len() {
            self.coefficients.resize_with(n + 1, T::zero);
        }
        self.coefficients[n] -= c;
        self.normalize();
        self
    }
}

impl<T: Coefficient> AddAssign for Polynomial<T> {
    fn add_assign(&mut self, rhs: Polynomial<T>) {
        add_sub_assign(self, &rhs, |l, r| *l += r);
    }
}

impl<'a, T: Coefficient> AddAssign<&'a Polynomial<T>> for Polynomial<T> {
    fn add_assign(&mut self, rhs: &Polynomial<T>) {
        add_sub_assign(self, rhs, |l, r| *l += r);
    }
}

impl<T: Coefficient> Add for Polynomial<T> {
    type Output = Polynomial<T>;
    fn add(mut self, rhs: Polynomial<T>) -> Self::Output {
        self += rhs;
        self
    }
}

impl<'a, T: Coefficient> Add<&'a Polynomial<T>> for Polynomial<T> {
    type Output = Polynomial<T>;
    fn add(mut self, rhs: &Polynomial<T>) -> Self::Output {
        self += rhs;
        self
    }
}

impl<'a, T: Coefficient> Add<Polynomial<T>> for &'a Polynomial<T> {
    type Output = Polynomial<T>;
    fn add(self, mut rhs: Polynomial<T>) -> Self::Output {
        rhs += self;
        rhs
    }
}

impl<'a, T: Coefficient> Add for &'a Polynomial<T> {
    type Output = Polynomial<T>;
    fn add(self, rhs: Self) -> Self::Output {
        let mut retval = self.clone();
        retval += rhs;
        retval
    }
}

impl<T: Coefficient> CheckedAdd for Polynomial<T> {
    fn checked_add(&self, rhs: &Self) -> Option<Self> {
        Some(self + rhs)
    }
}

impl<T: Coefficient> SubAssign for Polynomial<T> {
    fn sub_assign(&mut self, rhs: Polynomial<T>) {
        add_sub_assign(self, &rhs, |l, r| *l -= r);
    }
}

impl<'a, T: Coefficient> SubAssign<&'a Polynomial<T>> for Polynomial<T> {
    fn sub_assign(&mut self, rhs: &Polynomial<T>) {
        add_sub_assign(self, rhs, |l, r| *l -= r);
    }
}

impl<T: Coefficient> Sub for Polynomial<T> {
    type Output = Polynomial<T>;
    fn sub(mut self, rhs: Polynomial<T>) -> Self::Output {
        self -= rhs;
        self
    }
}

impl<'a, T: Coefficient> Sub<&'a Polynomial<T>> for Polynomial<T> {
    type Output = Polynomial<T>;
    fn sub(mut self, rhs: &Polynomial<T>) -> Self::Output {
        self -= rhs;
        self
    }
}

impl<'a, T: Coefficient> Sub<Polynomial<T>> for &'a Polynomial<T> {
    type Output = Polynomial<T>;
    fn sub(self, rhs: Polynomial<T>) -> Self::Output {
        let mut lhs = self.clone();
        lhs -= rhs;
        lhs
    }
}

impl<'a, T: Coefficient> Sub for &'a Polynomial<T> {
    type Output = Polynomial<T>;
    fn sub(self, rhs: Self) -> Self::Output {
        let mut lhs = self.clone();
        lhs -= rhs;
        lhs
    }
}

impl<T: Coefficient> CheckedSub for Polynomial<T> {
    fn checked_sub(&self, rhs: &Self) -> Option<Self> {
        Some(self - rhs)
    }
}

impl<T: Coefficient> Neg for Polynomial<T> {
    type Output = Polynomial<T>;
    fn neg(self) -> Polynomial<T> {
        self.into_iter().map(Neg::neg).collect::<Vec<T>>().into()
    }
}

impl<T: Coefficient> Neg for &'_ Polynomial<T> {
    type Output = Polynomial<T>;
    fn neg(self) -> Polynomial<T> {
        self.iter().cloned().map(Neg::neg).collect::<Vec<T>>().into()
    }
}

impl<T: Coefficient> Zero for Polynomial<T> {
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

/// Folds all summands into one growing accumulator; the empty sum is the
/// zero polynomial.
impl<T: Coefficient> Sum for Polynomial<T> {
    fn sum<I: Iterator<Item = Polynomial<T>>>(iter: I) -> Self {
        let mut retval = Polynomial::zero();
        for term in iter {
            retval += term;
        }
        retval
    }
}

impl<'a, T: Coefficient> Sum<&'a Polynomial<T>> for Polynomial<T> {
    fn sum<I: Iterator<Item = &'a Polynomial<T>>>(iter: I) -> Self {
        let mut retval = Polynomial::zero();
        for term in iter {
            retval += term;
        }
        retval
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::tests::test_op_helper;
    use num_rational::Ratio;

    #[test]
    fn test_add() {
        let test = |l: Polynomial<i32>, r: Polynomial<i32>, expected: &Polynomial<i32>| {
            test_op_helper(
                l,
                r,
                expected,
                |l, r| *l += r,
                |l, r| *l += r,
                |l, r| l + r,
                |l, r| l + r,
                |l, r| l + r,
                |l, r| l + r,
            );
        };
        test(
            vec![1, 2, 3, 4].into(),
            vec![5, 6, 7, 8].into(),
            &vec![6, 8, 10, 12].into(),
        );
        // cancellation of the leading terms renormalizes
        test(
            vec![1, 2, 3, 4, -1].into(),
            vec![5, 6, 7, 8, 1].into(),
            &vec![6, 8, 10, 12].into(),
        );
        // shorter operand is implicitly zero-extended
        test(
            vec![1].into(),
            vec![0, 0, 2].into(),
            &vec![1, 0, 2].into(),
        );
    }

    #[test]
    fn test_add_ratio() {
        let r = |n: i64, d: i64| Ratio::new(n, d);
        let test = |l: Polynomial<Ratio<i64>>,
                    r: Polynomial<Ratio<i64>>,
                    expected: &Polynomial<Ratio<i64>>| {
            test_op_helper(
                l,
                r,
                expected,
                |l, r| *l += r,
                |l, r| *l += r,
                |l, r| l + r,
                |l, r| l + r,
                |l, r| l + r,
                |l, r| l + r,
            );
        };
        test(
            vec![r(1, 3), r(2, 3)].into(),
            vec![r(8, 5), r(7, 5)].into(),
            &vec![r(29, 15), r(31, 15)].into(),
        );
    }

    #[test]
    fn test_sub() {
        let test = |l: Polynomial<i32>, r: Polynomial<i32>, expected: &Polynomial<i32>| {
            test_op_helper(
                l,
                r,
                expected,
                |l, r| *l -= r,
                |l, r| *l -= r,
                |l, r| l - r,
                |l, r| l - r,
                |l, r| l - r,
                |l, r| l - r,
            );
        };
        test(
            vec![1, 2, 3, 4].into(),
            vec![8, 7, 6, 5].into(),
            &vec![-7, -5, -3, -1].into(),
        );
        test(
            vec![1, 2, 3, 4, 10].into(),
            vec![8, 7, 6, 5, 10].into(),
            &vec![-7, -5, -3, -1].into(),
        );
    }

    #[test]
    fn test_add_term() {
        let poly = Polynomial::from(vec![1, 2]);
        assert_eq!(poly.clone().add_term(5, 0), vec![6, 2].into());
        assert_eq!(poly.clone().add_term(5, 4), vec![1, 2, 0, 0, 5].into());
        assert_eq!(poly.clone().sub_term(2, 1), vec![1].into());
        assert_eq!(Polynomial::default().add_term(3, 2), vec![0, 0, 3].into());
    }

    #[test]
    fn test_sum() {
        let polys: Vec<Polynomial<i32>> = vec![
            vec![1, 2, 3].into(),
            vec![1].into(),
            vec![0, 0, 0, 4].into(),
        ];
        assert_eq!(
            polys.iter().sum::<Polynomial<i32>>(),
            vec![2, 2, 3, 4].into()
        );
        assert!(Vec::<Polynomial<i32>>::new()
            .into_iter()
            .sum::<Polynomial<i32>>()
            .is_zero());
    }
}

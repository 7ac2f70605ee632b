// SPDX-License-Identifier: LGPL-2.1-or-later
// See Notices.txt for copyright information
pub use crate::{
    hermite::{
        HermEvalStrategy, HermToPolyStrategy, HermiteSeries, HermiteStrategy, MonomialStrategy,
        PolyToHermStrategy,
    },
    polynomial::{EvalStrategy, MulStrategy, Polynomial, PowStrategy},
    traits::{Derivative as _, PolynomialEval as _},
};
pub use num_traits::{
    CheckedAdd as _, CheckedMul as _, CheckedSub as _, One as _, Pow as _, Signed as _, Zero as _,
};

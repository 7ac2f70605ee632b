// SPDX-License-Identifier: LGPL-2.1-or-later
// See Notices.txt for copyright information

//! Dense polynomial algebra over generic scalar coefficients.
//!
//! A polynomial is an ordered sequence of coefficients, lowest degree first;
//! the canonical zero polynomial is the empty sequence. Next to the standard
//! monomial basis ([`polynomial::Polynomial`]) the crate carries a physicists'
//! Hermite basis ([`hermite::HermiteSeries`]) with basis-native arithmetic,
//! conversion and calculus. Most operations come in several algorithmic
//! variants selected by a strategy enum; all variants of one operation agree.

pub mod hermite;
pub mod polynomial;
pub mod prelude;
pub mod traits;
pub mod util;

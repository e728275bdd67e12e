// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The term algebra behind the compiler's expression simplifier.
//!
//! The optimizer breaks an arithmetic expression into [`Term`]s: bare
//! numbers, a coefficient times a variable raised to some order,
//! products of several variables, and opaque subexpressions it could
//! not analyze. It then asks this crate to combine pairs of terms. Each
//! combination either produces one fully reduced term or `None`, in
//! which case the optimizer keeps both terms as separate operands.
//!
//! Combinations are only folded when the result is exact. Integer
//! division that leaves a remainder, division by zero and machine
//! overflow are all left alone for later stages to deal with.
//!
//! ## Example
//!
//! ```rust
//! use termfold_core::{Folder, Operator, Term, Variable};
//!
//! let folder = Folder::default();
//! let x = Variable::declare("x");
//!
//! // 3x + 4x = 7x
//! let three_x: Term<String> = Term::variable(&x).multiply(&Term::literal(3)).unwrap();
//! let four_x = Term::variable(&x).multiply(&Term::literal(4)).unwrap();
//! let sum = folder.combine(Operator::Add, &three_x, &four_x).unwrap();
//! assert_eq!(sum.to_string(), "7 x");
//!
//! // 10 / 4 has no exact integer result, so it stays as written.
//! let ten: Term<String> = Term::literal(10);
//! assert_eq!(folder.combine(Operator::Divide, &ten, &Term::literal(4)), None);
//! ```

// False positives, or make code harder to understand.
#![allow(clippy::match_like_matches_macro)]
#![allow(clippy::needless_lifetimes)]

pub mod config;
pub mod error;
pub mod folder;
pub mod terms;
pub mod types;

pub(crate) mod algorithms;

pub use crate::config::Config;
pub use crate::error::{Error, Result};
pub use crate::folder::{Folder, Operator};
pub use crate::terms::{LiteralTerm, Node, OpaqueTerm, ProductTerm, Term, VariableTerm};
pub use crate::types::{Factors, Format, Identity, NumberType, Numbers, Scalar, Variable};

// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use super::{Node, Term};
use crate::error::Error;
use crate::types::Scalar;
use serde_derive::Serialize;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// A bare number.
#[derive(Clone, Copy, PartialEq, Hash, Debug, Serialize)]
pub struct LiteralTerm {
    pub value: Scalar,
}

impl LiteralTerm {
    pub fn new(value: impl Into<Scalar>) -> LiteralTerm {
        LiteralTerm {
            value: value.into(),
        }
    }

    pub fn zero() -> LiteralTerm {
        LiteralTerm::new(Scalar::zero())
    }

    pub fn negate(&self) -> LiteralTerm {
        LiteralTerm::new(-&self.value)
    }

    pub fn add<N: Node>(&self, other: &Term<N>) -> Option<Term<N>> {
        match *other {
            Term::Literal(ref other) => (&self.value + &other.value).map(Term::literal),
            _ => None,
        }
    }

    pub fn subtract<N: Node>(&self, other: &Term<N>) -> Option<Term<N>> {
        match *other {
            Term::Literal(ref other) => (&self.value - &other.value).map(Term::literal),
            _ => None,
        }
    }

    pub fn multiply<N: Node>(&self, other: &Term<N>) -> Option<Term<N>> {
        match *other {
            Term::Literal(ref other) => (&self.value * &other.value).map(Term::literal),
            Term::Variable(ref var) => var.scale(&self.value),
            Term::Product(ref product) => product.scale(&self.value),
            Term::Opaque(_) => None,
        }
    }

    /// Only divides by another literal, and only exactly. There is no
    /// reciprocal of a variable.
    pub fn divide<N: Node>(&self, other: &Term<N>) -> Option<Term<N>> {
        match *other {
            Term::Literal(ref other) => self.value.exact_div(&other.value).map(Term::literal),
            _ => None,
        }
    }

    fn bitwise<N: Node>(&self, other: &Term<N>, op: fn(i64, i64) -> i64) -> Option<Term<N>> {
        match (self.value, other) {
            (Scalar::Int(left), &Term::Literal(LiteralTerm { value: Scalar::Int(right) })) => {
                Some(Term::literal(op(left, right)))
            }
            _ => None,
        }
    }

    pub fn bit_and<N: Node>(&self, other: &Term<N>) -> Option<Term<N>> {
        self.bitwise(other, |a, b| a & b)
    }

    pub fn bit_or<N: Node>(&self, other: &Term<N>) -> Option<Term<N>> {
        self.bitwise(other, |a, b| a | b)
    }

    pub fn bit_xor<N: Node>(&self, other: &Term<N>) -> Option<Term<N>> {
        self.bitwise(other, |a, b| a ^ b)
    }

    pub fn compare<N: Node>(&self, other: &Term<N>) -> Option<Ordering> {
        match *other {
            Term::Literal(ref other) => self.value.partial_cmp(&other.value),
            _ => None,
        }
    }
}

impl From<Scalar> for LiteralTerm {
    fn from(value: Scalar) -> LiteralTerm {
        LiteralTerm { value }
    }
}

impl FromStr for LiteralTerm {
    type Err = Error;

    fn from_str(text: &str) -> Result<LiteralTerm, Error> {
        text.parse::<Scalar>().map(LiteralTerm::from)
    }
}

impl fmt::Display for LiteralTerm {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.value, fmt)
    }
}

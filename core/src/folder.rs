// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::config::Config;
use crate::terms::{Node, Term};
use crate::types::{NumberType, Numbers};
use serde_derive::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, trace};

/// Binary operators the algebra knows how to fold.
#[derive(Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[serde(rename_all = "camelCase")]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
    BitAnd,
    BitOr,
    BitXor,
}

impl Operator {
    pub fn symbol(self) -> &'static str {
        match self {
            Operator::Add => "+",
            Operator::Subtract => "-",
            Operator::Multiply => "*",
            Operator::Divide => "/",
            Operator::BitAnd => "&",
            Operator::BitOr => "|",
            Operator::BitXor => "^",
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(fmt, "{}", self.symbol())
    }
}

/// What the optimizer talks to. Owns the folding options and the number
/// type table for one compilation; create it once and pass it around.
#[derive(Clone, Debug)]
pub struct Folder {
    config: Config,
    numbers: Numbers,
}

impl Default for Folder {
    fn default() -> Self {
        Folder::new(Config::default())
    }
}

impl Folder {
    pub fn new(config: Config) -> Folder {
        Folder {
            config,
            numbers: Numbers::new(),
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn numbers(&self) -> &Numbers {
        &self.numbers
    }

    /// Combines `lhs op rhs` into one term. `None` means the two must stay
    /// separate operands.
    pub fn combine<N: Node>(
        &self,
        op: Operator,
        lhs: &Term<N>,
        rhs: &Term<N>,
    ) -> Option<Term<N>> {
        if !self.config.enabled {
            return None;
        }
        if !self.config.fold_floats && (lhs.has_float() || rhs.has_float()) {
            debug!(%op, "decimal operand, folding of decimals is disabled");
            return None;
        }
        trace!(%op, ?lhs, ?rhs, "combining");
        let result = match op {
            Operator::Add => lhs.add(rhs),
            Operator::Subtract => lhs.subtract(rhs),
            Operator::Multiply => lhs.multiply(rhs),
            Operator::Divide => lhs.divide(rhs),
            Operator::BitAnd => lhs.bit_and(rhs),
            Operator::BitOr => lhs.bit_or(rhs),
            Operator::BitXor => lhs.bit_xor(rhs),
        };
        match result {
            Some(ref term) if !self.config.fold_floats && term.has_float() => {
                debug!(%op, "result is a decimal, folding of decimals is disabled");
                None
            }
            Some(term) => {
                trace!(%op, result = ?term, "combined");
                Some(term)
            }
            None => {
                debug!(%op, ?lhs, ?rhs, "no rule applies");
                None
            }
        }
    }

    pub fn negate<N: Node>(&self, term: &Term<N>) -> Term<N> {
        term.negate()
    }

    /// The number type a literal, or the coefficient of a variable or
    /// product, is lowered to. Opaque terms have none.
    pub fn lowered_type<N: Node>(&self, term: &Term<N>) -> Option<&NumberType> {
        let value = term.scalar()?;
        Some(
            self.numbers
                .coefficient_type(value, self.config.integer_format),
        )
    }
}

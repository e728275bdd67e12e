// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use super::{Node, Term, VariableTerm};
use crate::error::{Error, Result};
use crate::types::{Factors, Scalar};
use serde_derive::Serialize;
use std::fmt;

/// `coefficient * x1^o1 * x2^o2 * ...` over distinct variables.
///
/// The coefficient is the only place a scale is stored; the factors are
/// bare variables with their orders.
#[derive(Clone, PartialEq, Hash, Debug, Serialize)]
pub struct ProductTerm {
    coefficient: Scalar,
    factors: Factors,
}

impl ProductTerm {
    /// Needs at least two factors: a single variable is a
    /// [`VariableTerm`] and no variables at all is a literal.
    pub fn new(coefficient: impl Into<Scalar>, factors: Factors) -> Result<ProductTerm> {
        if factors.len() < 2 {
            return Err(Error::InvalidArgument(format!(
                "a product needs at least two factors, got {}",
                factors.len()
            )));
        }
        if let Some((var, order)) = factors.iter().find(|&(_, &order)| order < 1) {
            return Err(Error::InvalidArgument(format!(
                "factor `{}` raised to order {}, orders start at 1",
                var, order
            )));
        }
        Ok(ProductTerm::from_parts(coefficient.into(), factors))
    }

    pub(crate) fn from_parts(coefficient: Scalar, factors: Factors) -> ProductTerm {
        ProductTerm {
            coefficient,
            factors,
        }
    }

    pub fn coefficient(&self) -> &Scalar {
        &self.coefficient
    }

    pub fn factors(&self) -> &Factors {
        &self.factors
    }

    /// Two products are like terms when their factor sets match.
    pub fn is_like(&self, other: &ProductTerm) -> bool {
        self.factors == other.factors
    }

    fn with_coefficient<N: Node>(&self, coefficient: Scalar) -> Term<N> {
        Term::Product(ProductTerm {
            coefficient,
            factors: self.factors.clone(),
        })
    }

    /// Builds the product `coefficient * factors` as a new term. The
    /// factors are computed by the caller on its own copy; neither operand
    /// is touched.
    fn product<N: Node>(coefficient: Scalar, factors: Factors) -> Term<N> {
        Term::Product(ProductTerm {
            coefficient,
            factors,
        })
    }

    pub fn negate(&self) -> ProductTerm {
        ProductTerm {
            coefficient: -&self.coefficient,
            factors: self.factors.clone(),
        }
    }

    pub(crate) fn scale<N: Node>(&self, factor: &Scalar) -> Option<Term<N>> {
        Some(self.with_coefficient((&self.coefficient * factor)?))
    }

    pub(crate) fn multiply_variable<N: Node>(&self, var: &VariableTerm) -> Option<Term<N>> {
        let coefficient = (&self.coefficient * var.coefficient())?;
        let factors = self.factors.multiply(&var.factors())?;
        Some(ProductTerm::product(coefficient, factors))
    }

    pub fn add<N: Node>(&self, other: &Term<N>) -> Option<Term<N>> {
        match *other {
            Term::Product(ref other) if self.is_like(other) => {
                Some(self.with_coefficient((&self.coefficient + &other.coefficient)?))
            }
            _ => None,
        }
    }

    pub fn subtract<N: Node>(&self, other: &Term<N>) -> Option<Term<N>> {
        match *other {
            Term::Product(ref other) if self.is_like(other) => {
                Some(self.with_coefficient((&self.coefficient - &other.coefficient)?))
            }
            _ => None,
        }
    }

    pub fn multiply<N: Node>(&self, other: &Term<N>) -> Option<Term<N>> {
        match *other {
            Term::Literal(ref literal) => self.scale(&literal.value),
            Term::Variable(ref var) => self.multiply_variable(var),
            Term::Product(ref other) => {
                let coefficient = (&self.coefficient * &other.coefficient)?;
                let factors = self.factors.multiply(&other.factors)?;
                Some(ProductTerm::product(coefficient, factors))
            }
            Term::Opaque(_) => None,
        }
    }

    /// Only literal divisors are supported, under the same exactness rule
    /// as everywhere else.
    pub fn divide<N: Node>(&self, other: &Term<N>) -> Option<Term<N>> {
        match *other {
            Term::Literal(ref literal) => {
                Some(self.with_coefficient(self.coefficient.exact_div(&literal.value)?))
            }
            _ => None,
        }
    }
}

impl fmt::Display for ProductTerm {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        if self.coefficient.equals_int(-1) && self.coefficient.is_integer() {
            write!(fmt, "-")?;
        } else if !(self.coefficient.is_one() && self.coefficient.is_integer()) {
            write!(fmt, "{}", self.coefficient)?;
            first = false;
        }
        for (var, order) in self.factors.sorted_by_name() {
            if !first {
                write!(fmt, " ")?;
            }
            first = false;
            write!(fmt, "{}", var)?;
            if order != 1 {
                write!(fmt, "^{}", order)?;
            }
        }
        Ok(())
    }
}

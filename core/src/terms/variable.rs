// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use super::{Node, ProductTerm, Term};
use crate::error::{Error, Result};
use crate::types::{Factors, Scalar, Variable};
use serde_derive::Serialize;
use std::fmt;

/// `coefficient * variable^order`, with `order >= 1`.
#[derive(Clone, PartialEq, Hash, Debug, Serialize)]
pub struct VariableTerm {
    coefficient: Scalar,
    variable: Variable,
    order: i64,
}

impl VariableTerm {
    /// A bare reference to the variable: coefficient 1, order 1.
    pub fn new(variable: Variable) -> VariableTerm {
        VariableTerm {
            coefficient: Scalar::one(),
            variable,
            order: 1,
        }
    }

    pub fn with(
        variable: Variable,
        coefficient: impl Into<Scalar>,
        order: i64,
    ) -> Result<VariableTerm> {
        if order < 1 {
            return Err(Error::InvalidArgument(format!(
                "variable `{}` raised to order {}, orders start at 1",
                variable, order
            )));
        }
        Ok(VariableTerm {
            coefficient: coefficient.into(),
            variable,
            order,
        })
    }

    pub(crate) fn from_parts(
        coefficient: Scalar,
        variable: Variable,
        order: i64,
    ) -> VariableTerm {
        VariableTerm {
            coefficient,
            variable,
            order,
        }
    }

    pub fn coefficient(&self) -> &Scalar {
        &self.coefficient
    }

    pub fn variable(&self) -> &Variable {
        &self.variable
    }

    pub fn order(&self) -> i64 {
        self.order
    }

    /// Same variable raised to the same order, so only the coefficients
    /// differ.
    pub fn is_like(&self, other: &VariableTerm) -> bool {
        self.variable == other.variable && self.order == other.order
    }

    fn with_coefficient<N: Node>(&self, coefficient: Scalar) -> Term<N> {
        Term::Variable(VariableTerm {
            coefficient,
            variable: self.variable.clone(),
            order: self.order,
        })
    }

    /// Factor set of the bare variable, coefficient left out.
    pub(crate) fn factors(&self) -> Factors {
        let mut factors = Factors::new();
        factors.insert(self.variable.clone(), self.order);
        factors
    }

    pub fn negate(&self) -> VariableTerm {
        VariableTerm {
            coefficient: -&self.coefficient,
            ..self.clone()
        }
    }

    pub(crate) fn scale<N: Node>(&self, factor: &Scalar) -> Option<Term<N>> {
        Some(self.with_coefficient((&self.coefficient * factor)?))
    }

    pub fn add<N: Node>(&self, other: &Term<N>) -> Option<Term<N>> {
        match *other {
            Term::Variable(ref other) if self.is_like(other) => {
                Some(self.with_coefficient((&self.coefficient + &other.coefficient)?))
            }
            _ => None,
        }
    }

    pub fn subtract<N: Node>(&self, other: &Term<N>) -> Option<Term<N>> {
        match *other {
            Term::Variable(ref other) if self.is_like(other) => {
                Some(self.with_coefficient((&self.coefficient - &other.coefficient)?))
            }
            _ => None,
        }
    }

    pub fn multiply<N: Node>(&self, other: &Term<N>) -> Option<Term<N>> {
        match *other {
            Term::Variable(ref other) if self.variable == other.variable => {
                Some(Term::Variable(VariableTerm {
                    coefficient: (&self.coefficient * &other.coefficient)?,
                    variable: self.variable.clone(),
                    order: self.order.checked_add(other.order)?,
                }))
            }
            Term::Variable(ref other) => {
                let coefficient = (&self.coefficient * &other.coefficient)?;
                let factors = self.factors().multiply(&other.factors())?;
                Some(Term::Product(ProductTerm::from_parts(coefficient, factors)))
            }
            Term::Literal(ref literal) => self.scale(&literal.value),
            Term::Product(ref product) => product.multiply_variable(self),
            Term::Opaque(_) => None,
        }
    }

    pub fn divide<N: Node>(&self, other: &Term<N>) -> Option<Term<N>> {
        match *other {
            Term::Variable(ref other) if self.variable == other.variable => {
                let coefficient = self.coefficient.exact_div(&other.coefficient)?;
                match self.order.checked_sub(other.order)? {
                    0 => Some(Term::literal(coefficient)),
                    order if order < 0 => None,
                    order => Some(Term::Variable(VariableTerm {
                        coefficient,
                        variable: self.variable.clone(),
                        order,
                    })),
                }
            }
            Term::Literal(ref literal) => {
                Some(self.with_coefficient(self.coefficient.exact_div(&literal.value)?))
            }
            _ => None,
        }
    }
}

impl fmt::Display for VariableTerm {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.coefficient.equals_int(-1) && self.coefficient.is_integer() {
            write!(fmt, "-")?;
        } else if !(self.coefficient.is_one() && self.coefficient.is_integer()) {
            write!(fmt, "{} ", self.coefficient)?;
        }
        write!(fmt, "{}", self.variable)?;
        if self.order != 1 {
            write!(fmt, "^{}", self.order)?;
        }
        Ok(())
    }
}

// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The four kinds of term and the rules for combining them.
//!
//! Every operation borrows both operands and builds a new term, or
//! returns `None` when no exact rule applies. `None` is not an error:
//! the caller keeps the two terms apart in the tree.
//!
//! The identity shortcuts (adding zero, multiplying by zero or one,
//! dividing by one) are checked here before any kind-specific rule, so
//! they work the same for every pair of kinds.

use crate::types::{Identity, Scalar, Variable};
use serde_derive::Serialize;
use std::cmp::Ordering;
use std::fmt;
use std::hash::Hash;
use std::ops::{Add, BitAnd, BitOr, BitXor, Div, Mul, Neg, Sub};

mod literal;
mod opaque;
mod product;
mod variable;

pub use literal::LiteralTerm;
pub use opaque::OpaqueTerm;
pub use product::ProductTerm;
pub use variable::VariableTerm;

/// Requirements on the subexpression type wrapped by [`OpaqueTerm`].
/// The algebra never looks inside; it only clones, compares and hashes.
pub trait Node: Clone + PartialEq + Hash + fmt::Debug {}

impl<T: Clone + PartialEq + Hash + fmt::Debug> Node for T {}

#[derive(Clone, PartialEq, Hash, Debug, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Term<N> {
    Literal(LiteralTerm),
    Variable(VariableTerm),
    Product(ProductTerm),
    Opaque(OpaqueTerm<N>),
}

impl<N: Node> Term<N> {
    pub fn literal(value: impl Into<Scalar>) -> Term<N> {
        Term::Literal(LiteralTerm::new(value))
    }

    pub fn zero() -> Term<N> {
        Term::Literal(LiteralTerm::zero())
    }

    /// A plain reference to `variable`.
    pub fn variable(variable: &Variable) -> Term<N> {
        Term::Variable(VariableTerm::new(variable.clone()))
    }

    pub fn opaque(node: N) -> Term<N> {
        Term::Opaque(OpaqueTerm::new(node))
    }

    /// The value of a literal or the coefficient of a variable or product.
    pub fn scalar(&self) -> Option<&Scalar> {
        match *self {
            Term::Literal(ref literal) => Some(&literal.value),
            Term::Variable(ref var) => Some(var.coefficient()),
            Term::Product(ref product) => Some(product.coefficient()),
            Term::Opaque(_) => None,
        }
    }

    pub fn has_float(&self) -> bool {
        self.scalar().map_or(false, Scalar::is_float)
    }

    pub fn negate(&self) -> Term<N> {
        match *self {
            Term::Literal(ref literal) => Term::Literal(literal.negate()),
            Term::Variable(ref var) => Term::Variable(var.negate()),
            Term::Product(ref product) => Term::Product(product.negate()),
            Term::Opaque(ref opaque) => Term::Opaque(opaque.negate()),
        }
    }

    pub fn add(&self, other: &Term<N>) -> Option<Term<N>> {
        if other.is_zero() {
            return Some(self.clone());
        }
        if self.is_zero() {
            return Some(other.clone());
        }
        let result = match *self {
            Term::Literal(ref literal) => literal.add(other),
            Term::Variable(ref var) => var.add(other),
            Term::Product(ref product) => product.add(other),
            Term::Opaque(_) => None,
        };
        result.map(Term::canonical)
    }

    pub fn subtract(&self, other: &Term<N>) -> Option<Term<N>> {
        if other.is_zero() {
            return Some(self.clone());
        }
        if self.is_zero() {
            return Some(other.negate());
        }
        let result = match *self {
            Term::Literal(ref literal) => literal.subtract(other),
            Term::Variable(ref var) => var.subtract(other),
            Term::Product(ref product) => product.subtract(other),
            Term::Opaque(_) => None,
        };
        result.map(Term::canonical)
    }

    pub fn multiply(&self, other: &Term<N>) -> Option<Term<N>> {
        if self.is_zero() || other.is_zero() {
            return Some(Term::zero());
        }
        if other.is_one() {
            return Some(self.clone());
        }
        if self.is_one() {
            return Some(other.clone());
        }
        let result = match *self {
            Term::Literal(ref literal) => literal.multiply(other),
            Term::Variable(ref var) => var.multiply(other),
            Term::Product(ref product) => product.multiply(other),
            Term::Opaque(_) => None,
        };
        result.map(Term::canonical)
    }

    /// Division by zero is never folded, so it survives to be reported
    /// by later stages.
    pub fn divide(&self, other: &Term<N>) -> Option<Term<N>> {
        if other.is_one() {
            return Some(self.clone());
        }
        if other.is_zero() {
            return None;
        }
        let result = match *self {
            Term::Literal(ref literal) => literal.divide(other),
            Term::Variable(ref var) => var.divide(other),
            Term::Product(ref product) => product.divide(other),
            Term::Opaque(_) => None,
        };
        result.map(Term::canonical)
    }

    pub fn bit_and(&self, other: &Term<N>) -> Option<Term<N>> {
        match *self {
            Term::Literal(ref literal) => literal.bit_and(other),
            _ => None,
        }
    }

    pub fn bit_or(&self, other: &Term<N>) -> Option<Term<N>> {
        match *self {
            Term::Literal(ref literal) => literal.bit_or(other),
            _ => None,
        }
    }

    pub fn bit_xor(&self, other: &Term<N>) -> Option<Term<N>> {
        match *self {
            Term::Literal(ref literal) => literal.bit_xor(other),
            _ => None,
        }
    }

    /// Orders two literals. Any other pair is unknown unless the terms
    /// are identical.
    pub fn compare(&self, other: &Term<N>) -> Option<Ordering> {
        match *self {
            Term::Literal(ref literal) => literal.compare(other),
            _ if self == other => Some(Ordering::Equal),
            _ => None,
        }
    }

    /// Brings a freshly combined term into its canonical shape: zero
    /// coefficients become the zero literal, products without factors
    /// become literals and products with one factor become variables.
    fn canonical(self) -> Term<N> {
        match self {
            Term::Variable(ref var) if var.coefficient().is_zero() => Term::zero(),
            Term::Product(ref product) if product.coefficient().is_zero() => Term::zero(),
            Term::Product(product) => {
                if product.factors().len() > 1 {
                    return Term::Product(product);
                }
                let coefficient = *product.coefficient();
                match product.factors().iter().next() {
                    None => Term::literal(coefficient),
                    Some((var, &order)) => Term::Variable(VariableTerm::from_parts(
                        coefficient,
                        var.clone(),
                        order,
                    )),
                }
            }
            other => other,
        }
    }
}

impl<N: Node> Identity for Term<N> {
    fn is_zero(&self) -> bool {
        match *self {
            Term::Literal(ref literal) => literal.value.is_zero(),
            _ => false,
        }
    }

    fn is_one(&self) -> bool {
        match *self {
            Term::Literal(ref literal) => literal.value.is_one(),
            _ => false,
        }
    }
}

impl<N> From<LiteralTerm> for Term<N> {
    fn from(literal: LiteralTerm) -> Term<N> {
        Term::Literal(literal)
    }
}

impl<N> From<VariableTerm> for Term<N> {
    fn from(var: VariableTerm) -> Term<N> {
        Term::Variable(var)
    }
}

impl<N> From<ProductTerm> for Term<N> {
    fn from(product: ProductTerm) -> Term<N> {
        Term::Product(product)
    }
}

impl<N: Node + fmt::Display> fmt::Display for Term<N> {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Term::Literal(ref literal) => fmt::Display::fmt(literal, fmt),
            Term::Variable(ref var) => fmt::Display::fmt(var, fmt),
            Term::Product(ref product) => fmt::Display::fmt(product, fmt),
            Term::Opaque(ref opaque) => fmt::Display::fmt(opaque, fmt),
        }
    }
}

macro_rules! term_binop {
    ($what:ident, $func:ident, $method:ident) => {
        impl<'a, 'b, N: Node> $what<&'b Term<N>> for &'a Term<N> {
            type Output = Option<Term<N>>;

            fn $func(self, other: &'b Term<N>) -> Option<Term<N>> {
                self.$method(other)
            }
        }
    };
}

term_binop!(Add, add, add);
term_binop!(Sub, sub, subtract);
term_binop!(Mul, mul, multiply);
term_binop!(Div, div, divide);
term_binop!(BitAnd, bitand, bit_and);
term_binop!(BitOr, bitor, bit_or);
term_binop!(BitXor, bitxor, bit_xor);

impl<'a, N: Node> Neg for &'a Term<N> {
    type Output = Term<N>;

    fn neg(self) -> Term<N> {
        self.negate()
    }
}

// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Drives the algebra the way the optimizer does: the addends of a sum
//! are folded pairwise until no pair combines any more.

use similar_asserts::assert_eq;
use termfold_core::{Folder, Operator, Term, Variable};

type T = Term<String>;

/// Folds every pair of terms that combines, in list order.
fn fold(folder: &Folder, op: Operator, mut terms: Vec<T>) -> Vec<T> {
    let mut i = 0;
    while i < terms.len() {
        let mut j = i + 1;
        while j < terms.len() {
            match folder.combine(op, &terms[i], &terms[j]) {
                Some(result) => {
                    terms.remove(j);
                    terms[i] = result;
                }
                None => j += 1,
            }
        }
        i += 1;
    }
    terms
}

fn show(terms: &[T]) -> Vec<String> {
    terms.iter().map(|t| t.to_string()).collect()
}

#[test]
fn collects_like_terms() {
    let folder = Folder::default();
    let x = Variable::declare("x");
    let y = Variable::declare("y");
    let terms = vec![
        T::literal(1),
        T::variable(&x),
        T::variable(&y),
        T::literal(2),
        T::variable(&x).multiply(&T::literal(3)).unwrap(),
        T::opaque("f(z)".to_owned()),
        T::literal(-3),
    ];
    let folded = fold(&folder, Operator::Add, terms);
    assert_eq!(show(&folded), vec!["0", "4 x", "y", "(f(z))"]);
}

#[test]
fn order_does_not_matter() {
    let folder = Folder::default();
    let x = Variable::declare("x");
    let y = Variable::declare("y");
    let xy = T::variable(&x).multiply(&T::variable(&y)).unwrap();
    let yx = T::variable(&y).multiply(&T::variable(&x)).unwrap();
    let forward = fold(
        &folder,
        Operator::Add,
        vec![xy.clone(), T::literal(2), yx.clone(), T::variable(&x)],
    );
    let backward = fold(
        &folder,
        Operator::Add,
        vec![T::variable(&x), yx, T::literal(2), xy],
    );
    assert_eq!(forward.len(), 3);
    assert_eq!(backward.len(), 3);
    for term in &forward {
        assert!(backward.contains(term), "{} missing", term);
    }
}

#[test]
fn multiplies_monomials() {
    let folder = Folder::default();
    let x = Variable::declare("x");
    let y = Variable::declare("y");
    let terms = vec![
        T::literal(2),
        T::variable(&x),
        T::variable(&y),
        T::variable(&x),
        T::literal(1.5),
    ];
    let folded = fold(&folder, Operator::Multiply, terms);
    assert_eq!(show(&folded), vec!["3.0 x^2 y"]);
}

#[test]
fn keeps_inexact_division() {
    let folder = Folder::default();
    let x = Variable::declare("x");
    let six_x_cubed = T::variable(&x)
        .multiply(&T::variable(&x))
        .and_then(|t| t.multiply(&T::variable(&x)))
        .and_then(|t| t.multiply(&T::literal(6)))
        .unwrap();
    let two_x_cubed = six_x_cubed.divide(&T::literal(3)).unwrap();

    assert_eq!(
        folder.combine(Operator::Divide, &six_x_cubed, &two_x_cubed),
        Some(T::literal(3))
    );
    assert_eq!(
        folder.combine(Operator::Divide, &T::literal(10), &T::literal(4)),
        None
    );
    assert_eq!(
        folder.combine(Operator::Divide, &T::literal(10.0), &T::literal(4)),
        Some(T::literal(2.5))
    );
    assert_eq!(
        folder.combine(Operator::Divide, &six_x_cubed, &T::literal(0)),
        None
    );
}

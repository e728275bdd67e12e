// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use super::Variable;
use crate::algorithms::btree_merge;
use serde::{Serialize, Serializer};
use std::{
    collections::{
        btree_map::{IntoIter, Iter},
        BTreeMap,
    },
    iter::FromIterator,
    ops,
};

type Map = BTreeMap<Variable, i64>;
type Factor = (Variable, i64);

/// The variables of a monomial with the power each one is raised to.
/// Keyed by variable, so comparing two sets never depends on the order
/// the factors were multiplied in.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct Factors {
    factors: Map,
}

impl Default for Factors {
    fn default() -> Self {
        Factors::new()
    }
}

impl Factors {
    pub fn new() -> Factors {
        Factors {
            factors: BTreeMap::new(),
        }
    }

    pub fn iter<'a>(&'a self) -> Iter<'a, Variable, i64> {
        self.factors.iter()
    }

    /// Factors sorted by variable name, for output.
    pub fn sorted_by_name(&self) -> Vec<(&Variable, i64)> {
        let mut factors = self
            .factors
            .iter()
            .map(|(var, &order)| (var, order))
            .collect::<Vec<_>>();
        factors.sort_by(|a, b| a.0.name().cmp(b.0.name()));
        factors
    }

    /// Multiplies two monomials by adding the orders of shared variables.
    /// Variables whose orders cancel are dropped. `None` if an order
    /// overflows.
    pub fn multiply(&self, other: &Factors) -> Option<Factors> {
        let factors = btree_merge(&self.factors, &other.factors, |a, b| {
            match a.checked_add(*b) {
                Some(0) => Ok(None),
                Some(sum) => Ok(Some(sum)),
                None => Err(()),
            }
        })
        .ok()?;
        Some(Factors { factors })
    }
}

/////////////////////////////////////////
// Compatiblity with BTreeMap interface

impl Factors {
    pub(crate) fn insert(&mut self, var: Variable, order: i64) {
        self.factors.insert(var, order);
    }

    pub fn len(&self) -> usize {
        self.factors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.factors.is_empty()
    }
}

impl ops::Deref for Factors {
    type Target = Map;

    fn deref(&self) -> &Self::Target {
        &self.factors
    }
}

impl FromIterator<Factor> for Factors {
    fn from_iter<T: IntoIterator<Item = Factor>>(iter: T) -> Self {
        let factors = Map::from_iter(iter);
        Factors { factors }
    }
}

impl IntoIterator for Factors {
    type Item = Factor;
    type IntoIter = IntoIter<Variable, i64>;

    fn into_iter(self) -> Self::IntoIter {
        self.factors.into_iter()
    }
}

/// A list of `[name, order]` pairs. Distinct variables may share a name,
/// so the names cannot be used as map keys.
impl Serialize for Factors {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(
            self.sorted_by_name()
                .into_iter()
                .map(|(var, order)| (var.name(), order)),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::Factors;
    use crate::types::Variable;

    #[test]
    fn test_order_independent() {
        let x = Variable::declare("x");
        let y = Variable::declare("y");
        let a: Factors = vec![(x.clone(), 1), (y.clone(), 2)].into_iter().collect();
        let b: Factors = vec![(y, 2), (x, 1)].into_iter().collect();
        assert_eq!(a, b);
    }

    #[test]
    fn test_multiply() {
        let x = Variable::declare("x");
        let y = Variable::declare("y");
        let z = Variable::declare("z");
        let a: Factors = vec![(x.clone(), 1), (y.clone(), 2)].into_iter().collect();
        let b: Factors = vec![(y.clone(), 3), (z.clone(), 1)].into_iter().collect();
        let expected: Factors = vec![(x.clone(), 1), (y.clone(), 5), (z, 1)]
            .into_iter()
            .collect();
        assert_eq!(a.multiply(&b), Some(expected));

        let cancel: Factors = vec![(y, -2)].into_iter().collect();
        let only_x: Factors = vec![(x.clone(), 1)].into_iter().collect();
        assert_eq!(a.multiply(&cancel), Some(only_x));

        let huge: Factors = vec![(x, i64::MAX)].into_iter().collect();
        assert_eq!(a.multiply(&huge), None);
    }

    #[test]
    fn test_sorted_by_name() {
        let y = Variable::declare("y");
        let x = Variable::declare("x");
        let f: Factors = vec![(y, 2), (x, 1)].into_iter().collect();
        let names = f
            .sorted_by_name()
            .into_iter()
            .map(|(var, order)| (var.name().to_owned(), order))
            .collect::<Vec<_>>();
        assert_eq!(names, vec![("x".to_owned(), 1), ("y".to_owned(), 2)]);
    }
}

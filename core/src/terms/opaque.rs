// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use super::Node;
use serde_derive::Serialize;
use std::fmt;

/// A subexpression the algebra cannot look into. It only takes part in
/// the identity shortcuts; negating it flips a flag instead of rewriting
/// the node.
#[derive(Clone, PartialEq, Hash, Debug, Serialize)]
pub struct OpaqueTerm<N> {
    pub node: N,
    pub negated: bool,
}

impl<N: Node> OpaqueTerm<N> {
    pub fn new(node: N) -> OpaqueTerm<N> {
        OpaqueTerm {
            node,
            negated: false,
        }
    }

    pub fn negate(&self) -> OpaqueTerm<N> {
        OpaqueTerm {
            node: self.node.clone(),
            negated: !self.negated,
        }
    }
}

impl<N: Node + fmt::Display> fmt::Display for OpaqueTerm<N> {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.negated {
            write!(fmt, "-")?;
        }
        write!(fmt, "({})", self.node)
    }
}

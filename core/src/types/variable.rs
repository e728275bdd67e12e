// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use serde::{Serialize, Serializer};
use std::cmp::Ordering;
use std::hash::{Hash, Hasher};
use std::{fmt, sync::Arc};

#[derive(Debug)]
struct Declaration {
    name: String,
}

/// Handle to a declared symbolic variable.
///
/// Handles compare by identity: two handles are the same variable only
/// if they come from the same call to [`Variable::declare`], even when
/// the names match. Clones share the declaration.
#[derive(Clone)]
pub struct Variable {
    decl: Arc<Declaration>,
}

impl Variable {
    pub fn declare(name: &str) -> Variable {
        Variable {
            decl: Arc::new(Declaration {
                name: name.to_owned(),
            }),
        }
    }

    pub fn name(&self) -> &str {
        &self.decl.name[..]
    }

    fn address(&self) -> usize {
        Arc::as_ptr(&self.decl) as usize
    }
}

impl PartialEq for Variable {
    fn eq(&self, other: &Variable) -> bool {
        Arc::ptr_eq(&self.decl, &other.decl)
    }
}

impl Eq for Variable {}

impl PartialOrd for Variable {
    fn partial_cmp(&self, other: &Variable) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Only meaningful within one run; use [`Variable::name`] for anything
/// shown to a user.
impl Ord for Variable {
    fn cmp(&self, other: &Variable) -> Ordering {
        self.address().cmp(&other.address())
    }
}

impl Hash for Variable {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.address().hash(state);
    }
}

impl fmt::Debug for Variable {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(fmt, "{}@{:x}", self.name(), self.address())
    }
}

impl fmt::Display for Variable {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt.write_str(self.name())
    }
}

impl Serialize for Variable {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

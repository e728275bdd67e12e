// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::error::Result;
use crate::types::Format;
use serde_derive::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, PartialEq, Debug)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Master switch for mathematical optimization. When off, nothing is
    /// ever combined.
    pub enabled: bool,
    /// Set to false to leave every expression involving a decimal value
    /// as written.
    pub fold_floats: bool,
    /// Format integer literals and coefficients are lowered to.
    pub integer_format: Format,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            enabled: true,
            fold_floats: true,
            integer_format: Format::Int64,
        }
    }
}

impl Config {
    pub fn from_toml_str(text: &str) -> Result<Config> {
        Ok(toml::from_str(text)?)
    }
}

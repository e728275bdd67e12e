// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

/// Hard failures. A combination that simply has no applicable rule is
/// reported as `None` by the term operations and never shows up here.
#[derive(thiserror::Error, Clone, PartialEq, Eq, Debug)]
pub enum Error {
    /// A caller tried to build a term from a value the algebra cannot
    /// represent, such as an integer wider than 64 bits or a variable
    /// raised to the zeroth power.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("failed to load folding config: {0}")]
    Config(String),
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Error {
        Error::Config(err.to_string())
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

mod factors;
mod numbers;
mod scalar;
mod variable;

pub use factors::Factors;
pub use numbers::{Format, NumberType, Numbers};
pub use scalar::{Identity, Scalar};
pub use variable::Variable;

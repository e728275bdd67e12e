// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use super::Scalar;
use serde_derive::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Machine representation a folded number is lowered to.
#[derive(Serialize, Deserialize, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    Int8,
    Int16,
    Int32,
    Int64,
    UInt8,
    UInt16,
    UInt32,
    UInt64,
    Decimal,
}

impl Format {
    pub fn bits(self) -> u32 {
        match self {
            Format::Int8 | Format::UInt8 => 8,
            Format::Int16 | Format::UInt16 => 16,
            Format::Int32 | Format::UInt32 => 32,
            Format::Int64 | Format::UInt64 | Format::Decimal => 64,
        }
    }

    pub fn is_unsigned(self) -> bool {
        match self {
            Format::UInt8 | Format::UInt16 | Format::UInt32 | Format::UInt64 => true,
            _ => false,
        }
    }

    pub fn is_decimal(self) -> bool {
        self == Format::Decimal
    }
}

/// A primitive number type of the source language.
#[derive(Serialize, Clone, PartialEq, Eq, Debug)]
pub struct NumberType {
    pub format: Format,
    /// Name the source language uses for the type.
    pub name: &'static str,
    /// Short identifier used when mangling symbols.
    pub identifier: &'static str,
    pub bits: u32,
    pub unsigned: bool,
}

impl NumberType {
    fn new(format: Format, name: &'static str, identifier: &'static str) -> NumberType {
        NumberType {
            format,
            name,
            identifier,
            bits: format.bits(),
            unsigned: format.is_unsigned(),
        }
    }

    /// Whether the scalar can be stored in this type without losing
    /// anything. Floats only fit the decimal type; integers must be in
    /// range.
    pub fn fits(&self, value: &Scalar) -> bool {
        match *value {
            Scalar::Float(_) => self.format.is_decimal(),
            Scalar::Int(_) if self.format.is_decimal() => true,
            Scalar::Int(i) => {
                let (min, max) = if self.unsigned {
                    (0i128, (1i128 << self.bits) - 1)
                } else {
                    (-(1i128 << (self.bits - 1)), (1i128 << (self.bits - 1)) - 1)
                };
                let i = i128::from(i);
                min <= i && i <= max
            }
        }
    }
}

/// Table of the primitive number types, keyed by format. Built once and
/// then only read, so it is passed around by reference.
#[derive(Clone, Debug)]
pub struct Numbers {
    types: BTreeMap<Format, NumberType>,
}

impl Default for Numbers {
    fn default() -> Self {
        Numbers::new()
    }
}

impl Numbers {
    pub fn new() -> Numbers {
        let types = vec![
            NumberType::new(Format::Int8, "tiny", "c"),
            NumberType::new(Format::Int16, "small", "s"),
            NumberType::new(Format::Int32, "normal", "i"),
            NumberType::new(Format::Int64, "large", "x"),
            NumberType::new(Format::UInt8, "u8", "h"),
            NumberType::new(Format::UInt16, "u16", "t"),
            NumberType::new(Format::UInt32, "u32", "j"),
            NumberType::new(Format::UInt64, "u64", "y"),
            NumberType::new(Format::Decimal, "decimal", "d"),
        ]
        .into_iter()
        .map(|ty| (ty.format, ty))
        .collect();
        Numbers { types }
    }

    pub fn get(&self, format: Format) -> &NumberType {
        // Every format is inserted by `new`.
        &self.types[&format]
    }

    pub fn iter(&self) -> impl Iterator<Item = &NumberType> {
        self.types.values()
    }

    /// Float coefficients are lowered as decimals, integers with the
    /// given default integer format.
    pub fn coefficient_type(&self, value: &Scalar, integer_format: Format) -> &NumberType {
        match *value {
            Scalar::Float(_) => self.get(Format::Decimal),
            Scalar::Int(_) => self.get(integer_format),
        }
    }
}

// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use assert_json_diff::assert_json_eq;
use serde_json::{json, to_value};
use termfold_core::{Config, Format, Scalar, Term, Variable};

type T = Term<String>;

#[test]
fn check_literals() {
    assert_json_eq!(
        to_value(T::literal(3)).unwrap(),
        json!({ "type": "literal", "value": 3 })
    );
    assert_json_eq!(
        to_value(T::literal(2.5)).unwrap(),
        json!({ "type": "literal", "value": 2.5 })
    );
}

#[test]
fn check_variables_and_products() {
    let x = Variable::declare("x");
    let y = Variable::declare("y");
    let three_x_squared = T::variable(&x)
        .multiply(&T::variable(&x))
        .and_then(|t| t.multiply(&T::literal(3)))
        .unwrap();
    assert_json_eq!(
        to_value(&three_x_squared).unwrap(),
        json!({
            "type": "variable",
            "coefficient": 3,
            "variable": "x",
            "order": 2
        })
    );

    let product = T::variable(&y).multiply(&three_x_squared).unwrap();
    assert_json_eq!(
        to_value(&product).unwrap(),
        json!({
            "type": "product",
            "coefficient": 3,
            "factors": [["x", 2], ["y", 1]]
        })
    );
}

#[test]
fn check_opaque() {
    let node = T::opaque("call(f)".to_owned()).negate();
    assert_json_eq!(
        to_value(node).unwrap(),
        json!({ "type": "opaque", "node": "call(f)", "negated": true })
    );
}

#[test]
fn check_scalar_validation() {
    assert_eq!(serde_json::from_str::<Scalar>("4").unwrap(), Scalar::Int(4));
    assert_eq!(
        serde_json::from_str::<Scalar>("4.5").unwrap(),
        Scalar::Float(4.5)
    );
    assert!(serde_json::from_str::<Scalar>("\"4\"").is_err());
    assert!(serde_json::from_str::<Scalar>("true").is_err());
    assert!(serde_json::from_str::<Scalar>("null").is_err());
    assert!(serde_json::from_str::<Scalar>("18446744073709551615").is_err());
    assert!(serde_json::from_str::<Scalar>("9223372036854775808").is_err());
    assert_eq!(
        serde_json::from_str::<Scalar>("9223372036854775807").unwrap(),
        Scalar::Int(i64::MAX)
    );
    assert_eq!(
        serde_json::from_str::<Scalar>("-9223372036854775808").unwrap(),
        Scalar::Int(i64::MIN)
    );
}

#[test]
fn check_shared_names() {
    let a = Variable::declare("x");
    let b = Variable::declare("x");
    let term = T::variable(&a).multiply(&T::variable(&b)).unwrap();
    assert_json_eq!(
        to_value(&term).unwrap(),
        json!({
            "type": "product",
            "coefficient": 1,
            "factors": [["x", 1], ["x", 1]]
        })
    );
}

#[test]
fn check_config() {
    assert_json_eq!(
        to_value(Config::default()).unwrap(),
        json!({
            "enabled": true,
            "fold_floats": true,
            "integer_format": "int64"
        })
    );
    let config: Config = serde_json::from_value(json!({ "integer_format": "uint8" })).unwrap();
    assert_eq!(config.integer_format, Format::UInt8);
}

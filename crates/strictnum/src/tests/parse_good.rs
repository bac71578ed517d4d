use alloc::format;

use crate::{parse_decimal, parse_decimal_with_exponent, parse_integer};

use super::corpus::{
    POSITIVE_DECIMALS, POSITIVE_EXPONENT_DECIMALS, POSITIVE_INTEGERS, ZERO_DECIMALS,
    ZERO_EXPONENT_DECIMALS, ZERO_INTEGERS,
};

#[test]
fn accepts_canonical_integers() {
    for &(text, expected) in POSITIVE_INTEGERS {
        assert_eq!(parse_integer(text), Ok(expected), "input {text:?}");
        let negated = format!("-{text}");
        assert_eq!(parse_integer(&negated), Ok(-expected), "input {negated:?}");
    }
    for &(text, expected) in ZERO_INTEGERS {
        assert_eq!(parse_integer(text), Ok(expected), "input {text:?}");
    }
}

#[test]
fn accepts_canonical_decimals() {
    for &(text, expected) in POSITIVE_DECIMALS {
        assert_eq!(parse_decimal(text), Ok(expected), "input {text:?}");
        let negated = format!("-{text}");
        assert_eq!(parse_decimal(&negated), Ok(-expected), "input {negated:?}");
    }
    for &(text, expected) in ZERO_DECIMALS {
        assert_eq!(parse_decimal(text), Ok(expected), "input {text:?}");
    }
}

#[test]
fn accepts_canonical_exponent_decimals() {
    for &(text, expected) in POSITIVE_EXPONENT_DECIMALS {
        assert_eq!(parse_decimal_with_exponent(text), Ok(expected), "input {text:?}");
        let negated = format!("-{text}");
        assert_eq!(
            parse_decimal_with_exponent(&negated),
            Ok(-expected),
            "input {negated:?}"
        );
    }
    for &(text, expected) in ZERO_EXPONENT_DECIMALS {
        assert_eq!(parse_decimal_with_exponent(text), Ok(expected), "input {text:?}");
    }
}

// Integer ⊂ decimal ⊂ decimal-with-exponent, with the same numeric value.
#[test]
fn accepted_integers_are_accepted_decimals() {
    for &(text, expected) in POSITIVE_INTEGERS {
        #[allow(clippy::cast_precision_loss)]
        let as_float = expected as f64;
        assert_eq!(parse_decimal(text), Ok(as_float), "input {text:?}");
        assert_eq!(parse_decimal_with_exponent(text), Ok(as_float), "input {text:?}");
    }
}

#[test]
fn accepted_decimals_are_accepted_exponent_decimals() {
    for &(text, expected) in POSITIVE_DECIMALS {
        assert_eq!(parse_decimal_with_exponent(text), Ok(expected), "input {text:?}");
    }
    for &(text, expected) in ZERO_DECIMALS {
        assert_eq!(parse_decimal_with_exponent(text), Ok(expected), "input {text:?}");
    }
}

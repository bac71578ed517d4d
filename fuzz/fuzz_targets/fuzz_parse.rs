#![no_main]

use libfuzzer_sys::fuzz_target;
use strictnum::{
    NumberError, is_canonical_decimal, is_canonical_decimal_with_exponent, is_canonical_integer,
    parse_decimal, parse_decimal_with_exponent, parse_integer,
};

// No panics on arbitrary input, and the acceptance lattice holds:
// integer ⊂ decimal ⊂ decimal-with-exponent, predicates agreeing with
// their parsers.
fuzz_target!(|data: &[u8]| {
    let Ok(text) = core::str::from_utf8(data) else {
        return;
    };

    let integer = parse_integer(text);
    let decimal = parse_decimal(text);
    let with_exponent = parse_decimal_with_exponent(text);

    if let Ok(n) = integer {
        assert_eq!(decimal, Ok(n as f64));
        assert_eq!(with_exponent, Ok(n as f64));
    }
    if let Ok(v) = decimal {
        assert_eq!(with_exponent, Ok(v));
    }

    let grammar_accepts_integer = !matches!(integer, Err(NumberError::InvalidFormat { .. }));
    assert_eq!(is_canonical_integer(text), grammar_accepts_integer);
    assert_eq!(is_canonical_decimal(text), decimal.is_ok());
    assert_eq!(is_canonical_decimal_with_exponent(text), with_exponent.is_ok());
});

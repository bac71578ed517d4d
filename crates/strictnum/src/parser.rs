//! The three number grammars and their entry points.
//!
//! Everything composes one primitive, the canonical digit sequence: `0`, or
//! a nonzero digit followed by any digits.
//!
//! ```text
//! integer          = "-"? digits
//! decimal          = "-"? (digits? ".")? digits
//! decimal-with-exp = decimal (("e" | "E") ("+" | "-")? digits)?
//! ```
//!
//! A match is syntactic first and semantic second: after the grammar has
//! matched, an input whose sign is `-` and whose mantissa denotes zero is
//! rejected. The zero test inspects the mantissa digits only; no exponent
//! turns a zero mantissa into a nonzero value, so the exponent part never
//! participates.

use crate::{
    error::{NumberError, NumberKind},
    scanner::Scanner,
};

/// Outcome of a successful syntactic match, input to the semantic check.
#[derive(Debug, Clone, Copy)]
struct Shape {
    negative: bool,
    mantissa_is_zero: bool,
}

impl Shape {
    fn is_negative_zero(self) -> bool {
        self.negative && self.mantissa_is_zero
    }
}

/// A matched canonical digit sequence. It denotes zero iff it is the single
/// digit `0`; every other canonical sequence starts with a nonzero digit.
#[derive(Debug, Clone, Copy)]
struct DigitSequence {
    is_zero: bool,
}

/// Matches `0` or a nonzero digit followed by any digits.
fn scan_digit_sequence(scanner: &mut Scanner<'_>) -> Option<DigitSequence> {
    match scanner.peek()? {
        b'0' => {
            scanner.consume();
            // A further digit would make the leading zero redundant.
            match scanner.peek() {
                Some(b) if b.is_ascii_digit() => None,
                _ => Some(DigitSequence { is_zero: true }),
            }
        }
        b'1'..=b'9' => {
            scanner.consume();
            scanner.consume_while(|b| b.is_ascii_digit());
            Some(DigitSequence { is_zero: false })
        }
        _ => None,
    }
}

/// The unsigned digits of a float, before any exponent marker.
#[derive(Debug, Clone, Copy)]
struct Mantissa {
    is_zero: bool,
}

/// Matches the unsigned mantissa: `(digits? ".")? digits`.
///
/// The integer part may be omitted entirely (`.5`), but digits after the
/// point are mandatory (`5.` does not match). An omitted integer part
/// contributes zero, and a canonical fractional part denotes zero only as
/// the single digit `0`.
fn scan_mantissa(scanner: &mut Scanner<'_>) -> Option<Mantissa> {
    let integer_part = match scanner.peek() {
        Some(b'.') => None,
        _ => Some(scan_digit_sequence(scanner)?),
    };
    if scanner.eat(b'.') {
        let fraction = scan_digit_sequence(scanner)?;
        Some(Mantissa {
            is_zero: integer_part.is_none_or(|d| d.is_zero) && fraction.is_zero,
        })
    } else {
        integer_part.map(|digits| Mantissa {
            is_zero: digits.is_zero,
        })
    }
}

/// Matches the exponent tail after the marker: `("+" | "-")? digits`.
///
/// Both signs are admitted here, unlike the mantissa, and the digits are a
/// canonical sequence like everywhere else (`1e01` does not match).
fn scan_exponent(scanner: &mut Scanner<'_>) -> Option<()> {
    if matches!(scanner.peek(), Some(b'+' | b'-')) {
        scanner.consume();
    }
    scan_digit_sequence(scanner).map(|_| ())
}

fn integer_shape(text: &str) -> Option<Shape> {
    let mut scanner = Scanner::new(text);
    let negative = scanner.eat(b'-');
    let digits = scan_digit_sequence(&mut scanner)?;
    scanner.at_end().then_some(Shape {
        negative,
        mantissa_is_zero: digits.is_zero,
    })
}

fn float_shape(text: &str, allow_exponent: bool) -> Option<Shape> {
    let mut scanner = Scanner::new(text);
    let negative = scanner.eat(b'-');
    let mantissa = scan_mantissa(&mut scanner)?;
    if allow_exponent && matches!(scanner.peek(), Some(b'e' | b'E')) {
        scanner.consume();
        scan_exponent(&mut scanner)?;
    }
    scanner.at_end().then_some(Shape {
        negative,
        mantissa_is_zero: mantissa.is_zero,
    })
}

fn convert_decimal(text: &str, shape: Option<Shape>) -> Result<f64, NumberError> {
    let shape = shape.ok_or_else(|| NumberError::invalid_format(text, NumberKind::Float))?;
    if shape.is_negative_zero() {
        return Err(NumberError::invalid_format(text, NumberKind::Float));
    }
    // The float grammars are strict subsets of what `f64::from_str` accepts,
    // so conversion cannot fail once the shape check has passed.
    text.parse()
        .map_err(|_| NumberError::invalid_format(text, NumberKind::Float))
}

/// Parses a canonical integer string into an `i64`.
///
/// Accepts `-`? followed by a canonical digit sequence, anchored at both
/// ends. `-0` is rejected.
///
/// ```
/// use strictnum::parse_integer;
///
/// assert_eq!(parse_integer("1234567890"), Ok(1_234_567_890));
/// assert_eq!(parse_integer("-1"), Ok(-1));
/// assert!(parse_integer("01").is_err());
/// ```
///
/// # Errors
///
/// [`NumberError::InvalidFormat`] if `text` is not a canonical integer or
/// denotes negative zero; [`NumberError::OutOfRange`] if it is canonical but
/// exceeds the `i64` range.
pub fn parse_integer(text: &str) -> Result<i64, NumberError> {
    let shape =
        integer_shape(text).ok_or_else(|| NumberError::invalid_format(text, NumberKind::Integer))?;
    if shape.is_negative_zero() {
        return Err(NumberError::invalid_format(text, NumberKind::Integer));
    }
    text.parse().map_err(|_| NumberError::out_of_range(text))
}

/// Parses a canonical decimal string (no exponent) into an `f64`.
///
/// The integer part may be omitted (`.5`); fractional digits after the point
/// are mandatory (`5.` is rejected). Negative-zero spellings are rejected.
///
/// ```
/// use strictnum::parse_decimal;
///
/// assert_eq!(parse_decimal(".432"), Ok(0.432));
/// assert_eq!(parse_decimal("-12345.4"), Ok(-12345.4));
/// assert!(parse_decimal("1e2").is_err());
/// ```
///
/// # Errors
///
/// [`NumberError::InvalidFormat`] if `text` is not a canonical decimal or
/// denotes negative zero.
pub fn parse_decimal(text: &str) -> Result<f64, NumberError> {
    convert_decimal(text, float_shape(text, false))
}

/// Parses a canonical decimal string, optionally carrying an exponent, into
/// an `f64`.
///
/// Everything [`parse_decimal`] accepts, plus an `e`/`E` marker followed by
/// an optionally signed canonical digit sequence. A zero mantissa with a `-`
/// sign is rejected regardless of the exponent.
///
/// ```
/// use strictnum::parse_decimal_with_exponent;
///
/// assert_eq!(parse_decimal_with_exponent("1e-2"), Ok(0.01));
/// assert_eq!(parse_decimal_with_exponent("0.1e2"), Ok(10.0));
/// assert!(parse_decimal_with_exponent("1e").is_err());
/// ```
///
/// # Errors
///
/// [`NumberError::InvalidFormat`] if `text` is not a canonical
/// decimal-with-exponent or denotes negative zero. The error labels the
/// grammar `float`, the same as [`parse_decimal`].
pub fn parse_decimal_with_exponent(text: &str) -> Result<f64, NumberError> {
    convert_decimal(text, float_shape(text, true))
}

/// Whether `text` is a canonical integer.
///
/// Pure grammar acceptance: unlike [`parse_integer`] this does not involve
/// the `i64` range, so a canonical integer of any magnitude reports `true`.
#[must_use]
pub fn is_canonical_integer(text: &str) -> bool {
    integer_shape(text).is_some_and(|shape| !shape.is_negative_zero())
}

/// Whether `text` is a canonical decimal without exponent.
#[must_use]
pub fn is_canonical_decimal(text: &str) -> bool {
    float_shape(text, false).is_some_and(|shape| !shape.is_negative_zero())
}

/// Whether `text` is a canonical decimal, optionally with an exponent.
#[must_use]
pub fn is_canonical_decimal_with_exponent(text: &str) -> bool {
    float_shape(text, true).is_some_and(|shape| !shape.is_negative_zero())
}

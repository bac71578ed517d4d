//! Strict validation and conversion of canonical decimal number text.
//!
//! A string can be numerically interpretable without being a number *written
//! the way numbers are written*: `"01"`, `"+5"`, `"5."`, `" 1"` and `"-0"`
//! all survive a lenient `str::parse`, but in a data-ingestion pipeline they
//! usually mean something upstream is corrupt. This crate accepts exactly the
//! canonical renderings of three grammars (integer, decimal, and
//! decimal-with-exponent) and converts only those.
//!
//! A canonical digit sequence is `0`, or a nonzero digit followed by any
//! digits; the mantissa sign is an optional `-` (never `+`); a fractional
//! part is introduced by `.` and its digits are mandatory; the exponent
//! marker is `e` or `E` with an optional `+`/`-` and mandatory digits.
//! Matching is anchored at both ends and tolerates no whitespace. Negative
//! zero in any spelling (`-0`, `-0.0`, `-.0e-5`, ...) is rejected even though
//! it fits the character pattern.
//!
//! ```
//! use strictnum::{parse_decimal, parse_decimal_with_exponent, parse_integer};
//!
//! assert_eq!(parse_integer("-17"), Ok(-17));
//! assert_eq!(parse_decimal(".432"), Ok(0.432));
//! assert_eq!(parse_decimal_with_exponent("1e-2"), Ok(0.01));
//!
//! assert!(parse_integer("017").is_err());
//! assert!(parse_decimal("5.").is_err());
//! assert!(parse_decimal_with_exponent("-0e0").is_err());
//! ```
//!
//! Every string accepted by [`parse_integer`] is accepted by
//! [`parse_decimal`], and every string accepted by [`parse_decimal`] is
//! accepted by [`parse_decimal_with_exponent`], with the same numeric value.
//! All functions are pure and stateless; only the error path allocates.

#![no_std]
extern crate alloc;

#[cfg(test)]
extern crate std;

mod error;
mod parser;
mod scanner;

#[cfg(test)]
mod tests;

pub use error::{NumberError, NumberKind};
pub use parser::{
    is_canonical_decimal, is_canonical_decimal_with_exponent, is_canonical_integer, parse_decimal,
    parse_decimal_with_exponent, parse_integer,
};

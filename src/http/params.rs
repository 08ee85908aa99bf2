//! Lenient integer parameters.
//!
//! Path segments are parsed the way a lax integer validator reads text:
//! - surrounding whitespace is ignored
//! - an optional `+` or `-` sign
//! - decimal digits, with single `_` separators between digits
//! - an optional fractional part made only of zeros (`5.0`, `5.000`)
//!
//! There is no width limit; the value is kept as canonical decimal text
//! and serialized as a JSON number.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// An integer of any magnitude, serialized as a JSON number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Integer(serde_json::Number);

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Input should be a valid integer, unable to parse string as an integer")]
pub struct ParseIntegerError;

impl Integer {
    /// Canonical decimal form: no sign for non-negative values, no leading zeros.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl From<i64> for Integer {
    fn from(value: i64) -> Self {
        Self(value.into())
    }
}

impl fmt::Display for Integer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Integer {
    type Err = ParseIntegerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (negative, rest) = match s.as_bytes().first() {
            Some(b'-') => (true, &s[1..]),
            Some(b'+') => (false, &s[1..]),
            _ => (false, s),
        };

        let (whole, fraction) = match rest.split_once('.') {
            Some((whole, fraction)) => (whole, Some(fraction)),
            None => (rest, None),
        };
        if let Some(fraction) = fraction {
            if fraction.is_empty() || fraction.bytes().any(|b| b != b'0') {
                return Err(ParseIntegerError);
            }
        }

        let digits = strip_separators(whole).ok_or(ParseIntegerError)?;
        let digits = digits.trim_start_matches('0');

        let canonical = match (digits.is_empty(), negative) {
            (true, _) => "0".to_string(),
            (false, true) => format!("-{digits}"),
            (false, false) => digits.to_string(),
        };

        canonical
            .parse::<serde_json::Number>()
            .map(Self)
            .map_err(|_| ParseIntegerError)
    }
}

/// Digits with `_` allowed only between two digits.
fn strip_separators(s: &str) -> Option<String> {
    let bytes = s.as_bytes();
    if bytes.is_empty() || !bytes[0].is_ascii_digit() || !bytes[bytes.len() - 1].is_ascii_digit() {
        return None;
    }

    let mut digits = String::with_capacity(bytes.len());
    let mut previous_separator = false;
    for &b in bytes {
        match b {
            b'0'..=b'9' => {
                digits.push(b as char);
                previous_separator = false;
            }
            b'_' if !previous_separator => previous_separator = true,
            _ => return None,
        }
    }
    Some(digits)
}

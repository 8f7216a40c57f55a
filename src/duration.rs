//! Compound duration grammar
//!
//! Parses delay tokens like `90s`, `1h30m`, `.5s` or `2h45m10s` into a
//! signed, nanosecond-precision [`chrono::Duration`].
//!
//! - **Version**: 1.1.0
//! - **Since**: 1.0.0
//!
//! ## Changelog
//! - 1.1.0: Accept `µs`/`μs` spellings and report overflow as out-of-range
//! - 1.0.0: Initial grammar with ns/us/ms/s/m/h units

use chrono::Duration;
use std::error::Error;
use std::fmt;

/// Failure modes of the duration grammar
///
/// The `Display` text of these variants is surfaced verbatim to the user
/// inside the `Bloop.` parse-failure reply, so keep the wording stable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DurationParseError {
    /// Input is empty, a bare sign, or a pair with no digits at all
    Invalid(String),
    /// A number was given without a trailing unit (e.g. `90`)
    Malformed { input: String },
    /// A unit suffix that is not one of ns/us/ms/s/m/h
    UnknownUnit { unit: String, input: String },
    /// Value does not fit in a signed nanosecond count
    OutOfRange(String),
}

impl fmt::Display for DurationParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Invalid(input) => write!(f, "invalid duration \"{input}\""),
            Self::Malformed { input } => write!(f, "missing unit in duration \"{input}\""),
            Self::UnknownUnit { unit, input } => {
                write!(f, "unknown unit \"{unit}\" in duration \"{input}\"")
            }
            Self::OutOfRange(input) => write!(f, "duration \"{input}\" out of range"),
        }
    }
}

impl Error for DurationParseError {}

/// Nanoseconds per unit suffix, or None for an unrecognized suffix
fn unit_nanos(unit: &str) -> Option<i64> {
    match unit {
        "ns" => Some(1),
        "us" | "µs" | "μs" => Some(1_000),
        "ms" => Some(1_000_000),
        "s" => Some(1_000_000_000),
        "m" => Some(60 * 1_000_000_000),
        "h" => Some(3_600 * 1_000_000_000),
        _ => None,
    }
}

/// Parse a compound duration token into a signed duration
///
/// Grammar: optional sign, then one or more `<decimal><unit>` pairs where
/// the decimal may be fractional (`1.5h`) or start with a bare dot (`.5s`).
/// `"0"` on its own is the zero duration; every other number requires a
/// unit. Fractional components carry into finer units exactly, so `1.5h`
/// equals `1h30m`.
pub fn parse_duration(input: &str) -> Result<Duration, DurationParseError> {
    let mut s = input;
    let mut negative = false;
    if let Some(rest) = s.strip_prefix('-') {
        negative = true;
        s = rest;
    } else if let Some(rest) = s.strip_prefix('+') {
        s = rest;
    }

    // Special case: a bare zero needs no unit
    if s == "0" {
        return Ok(Duration::zero());
    }
    if s.is_empty() {
        return Err(DurationParseError::Invalid(input.to_string()));
    }

    let mut total_nanos: i64 = 0;
    while !s.is_empty() {
        let int_len = s
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(s.len());
        let (int_part, mut rest) = s.split_at(int_len);

        let mut frac_part = "";
        if let Some(after_dot) = rest.strip_prefix('.') {
            let frac_len = after_dot
                .find(|c: char| !c.is_ascii_digit())
                .unwrap_or(after_dot.len());
            let (frac, after_frac) = after_dot.split_at(frac_len);
            frac_part = frac;
            rest = after_frac;
        }

        if int_part.is_empty() && frac_part.is_empty() {
            return Err(DurationParseError::Invalid(input.to_string()));
        }

        let unit_len = rest
            .find(|c: char| c.is_ascii_digit() || c == '.')
            .unwrap_or(rest.len());
        let (unit_str, remainder) = rest.split_at(unit_len);
        s = remainder;

        if unit_str.is_empty() {
            return Err(DurationParseError::Malformed {
                input: input.to_string(),
            });
        }
        let unit = unit_nanos(unit_str).ok_or_else(|| DurationParseError::UnknownUnit {
            unit: unit_str.to_string(),
            input: input.to_string(),
        })?;

        let whole: i64 = if int_part.is_empty() {
            0
        } else {
            int_part
                .parse()
                .map_err(|_| DurationParseError::OutOfRange(input.to_string()))?
        };
        let mut pair_nanos = whole
            .checked_mul(unit)
            .ok_or_else(|| DurationParseError::OutOfRange(input.to_string()))?;

        if !frac_part.is_empty() {
            let mut frac = 0f64;
            let mut scale = 1f64;
            for digit in frac_part.bytes() {
                frac = frac * 10.0 + f64::from(digit - b'0');
                scale *= 10.0;
            }
            let frac_nanos = (frac * (unit as f64 / scale)) as i64;
            pair_nanos = pair_nanos
                .checked_add(frac_nanos)
                .ok_or_else(|| DurationParseError::OutOfRange(input.to_string()))?;
        }

        total_nanos = total_nanos
            .checked_add(pair_nanos)
            .ok_or_else(|| DurationParseError::OutOfRange(input.to_string()))?;
    }

    if negative {
        total_nanos = -total_nanos;
    }
    Ok(Duration::nanoseconds(total_nanos))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_units() {
        assert_eq!(parse_duration("90s").unwrap(), Duration::seconds(90));
        assert_eq!(parse_duration("30m").unwrap(), Duration::minutes(30));
        assert_eq!(parse_duration("2h").unwrap(), Duration::hours(2));
        assert_eq!(parse_duration("500ms").unwrap(), Duration::milliseconds(500));
        assert_eq!(parse_duration("250us").unwrap(), Duration::microseconds(250));
        assert_eq!(parse_duration("7ns").unwrap(), Duration::nanoseconds(7));
    }

    #[test]
    fn test_compound_pairs() {
        assert_eq!(parse_duration("1h30m").unwrap(), Duration::minutes(90));
        assert_eq!(
            parse_duration("2h45m10s").unwrap(),
            Duration::hours(2) + Duration::minutes(45) + Duration::seconds(10)
        );
        assert_eq!(
            parse_duration("168h0m0.001s").unwrap(),
            Duration::hours(168) + Duration::milliseconds(1)
        );
    }

    #[test]
    fn test_fractional_components() {
        assert_eq!(parse_duration(".5s").unwrap(), Duration::milliseconds(500));
        assert_eq!(parse_duration("1.5h").unwrap(), Duration::minutes(90));
        assert_eq!(parse_duration("1.999s").unwrap(), Duration::milliseconds(1_999));
    }

    #[test]
    fn test_signed_and_zero() {
        assert_eq!(parse_duration("-1s").unwrap(), Duration::seconds(-1));
        assert_eq!(parse_duration("+5m").unwrap(), Duration::minutes(5));
        assert_eq!(parse_duration("0").unwrap(), Duration::zero());
        assert_eq!(parse_duration("-0").unwrap(), Duration::zero());
    }

    #[test]
    fn test_invalid_inputs() {
        assert_eq!(
            parse_duration(""),
            Err(DurationParseError::Invalid("".to_string()))
        );
        assert_eq!(
            parse_duration("-"),
            Err(DurationParseError::Invalid("-".to_string()))
        );
        assert_eq!(
            parse_duration(".s"),
            Err(DurationParseError::Invalid(".s".to_string()))
        );
    }

    #[test]
    fn test_missing_unit() {
        assert_eq!(
            parse_duration("90"),
            Err(DurationParseError::Malformed {
                input: "90".to_string()
            })
        );
        assert_eq!(
            parse_duration("1h30"),
            Err(DurationParseError::Malformed {
                input: "1h30".to_string()
            })
        );
    }

    #[test]
    fn test_unknown_unit() {
        assert_eq!(
            parse_duration("5y"),
            Err(DurationParseError::UnknownUnit {
                unit: "y".to_string(),
                input: "5y".to_string()
            })
        );
    }

    #[test]
    fn test_overflow_is_out_of_range() {
        assert_eq!(
            parse_duration("99999999999999999999h"),
            Err(DurationParseError::OutOfRange(
                "99999999999999999999h".to_string()
            ))
        );
    }

    #[test]
    fn test_error_display() {
        let err = parse_duration("5y").unwrap_err();
        assert_eq!(err.to_string(), "unknown unit \"y\" in duration \"5y\"");
        let err = parse_duration("90").unwrap_err();
        assert_eq!(err.to_string(), "missing unit in duration \"90\"");
    }
}

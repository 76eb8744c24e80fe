//! `Name|Symbol|Supply` parsing and fixed-precision supply conversion.

use std::str::FromStr;

use alloy::primitives::U256;

use crate::error::ParseError;
use crate::types::LaunchRequest;

/// Field separator in launch commands.
pub const SEPARATOR: char = '|';

/// Token decimals: supplies are scaled by 10^18 on-chain.
pub const SUPPLY_DECIMALS: usize = 18;

fn scale() -> U256 {
    U256::from(10u64).pow(U256::from(SUPPLY_DECIMALS))
}

fn is_digits(s: &str) -> bool {
    s.bytes().all(|b| b.is_ascii_digit())
}

/// Parses `Name|Symbol|Supply` into a [`LaunchRequest`].
///
/// The input is trimmed, split on `|` into exactly three segments, and each segment is trimmed.
/// Pure: no I/O, no logging.
pub fn parse_launch_request(raw: &str) -> Result<LaunchRequest, ParseError> {
    let text = raw.trim();
    if !text.contains(SEPARATOR) {
        return Err(ParseError::MissingSeparator);
    }

    let segments: Vec<&str> = text.split(SEPARATOR).map(str::trim).collect();
    let [name, symbol, supply_text] = segments.as_slice() else {
        return Err(ParseError::SegmentCount(segments.len()));
    };

    for (field, value) in [("name", name), ("symbol", symbol), ("supply", supply_text)] {
        if value.is_empty() {
            return Err(ParseError::EmptySegment(field));
        }
    }

    let supply = parse_supply(supply_text)?;

    Ok(LaunchRequest {
        name: name.to_string(),
        symbol: symbol.to_string(),
        supply,
        supply_text: supply_text.to_string(),
    })
}

/// Converts a non-negative decimal numeral into its 18-decimal integer representation.
///
/// Accepts `123`, `123.45`, `.5` and `5.`; rejects signs, exponents, separators and anything
/// with more than 18 fractional digits.
pub fn parse_supply(text: &str) -> Result<U256, ParseError> {
    let (int_part, frac_part) = text.split_once('.').unwrap_or((text, ""));

    if (int_part.is_empty() && frac_part.is_empty()) || !is_digits(int_part) || !is_digits(frac_part)
    {
        return Err(ParseError::InvalidSupply(text.to_string()));
    }
    if frac_part.len() > SUPPLY_DECIMALS {
        return Err(ParseError::TooManyDecimals {
            max: SUPPLY_DECIMALS,
        });
    }

    // Only digits remain, so a parse failure means the value exceeds 256 bits.
    let int_value = if int_part.is_empty() {
        U256::ZERO
    } else {
        U256::from_str_radix(int_part, 10).map_err(|_| ParseError::SupplyOverflow)?
    };
    let frac_value = if frac_part.is_empty() {
        U256::ZERO
    } else {
        let digits =
            U256::from_str_radix(frac_part, 10).map_err(|_| ParseError::SupplyOverflow)?;
        digits * U256::from(10u64).pow(U256::from(SUPPLY_DECIMALS - frac_part.len()))
    };

    int_value
        .checked_mul(scale())
        .and_then(|v| v.checked_add(frac_value))
        .ok_or(ParseError::SupplyOverflow)
}

/// Renders an 18-decimal integer back as a decimal numeral, dropping trailing fractional zeros.
pub fn format_supply(value: U256) -> String {
    let scale = scale();
    let whole = value / scale;
    let frac = value % scale;
    if frac.is_zero() {
        return whole.to_string();
    }
    let frac = format!("{:0>width$}", frac.to_string(), width = SUPPLY_DECIMALS);
    format!("{}.{}", whole, frac.trim_end_matches('0'))
}

impl FromStr for LaunchRequest {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_launch_request(s)
    }
}

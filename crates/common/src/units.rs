//! Exact conversion between decimal amount strings and integer base units.
//!
//! Amounts typed by a user (`"1.5"`) are converted into the contract's base-unit integer
//! representation before submission, and base-unit values returned by reads are converted
//! back into decimal strings before display. No floating point is involved at any step, so
//! `format_amount(parse_amount(d)?)` reproduces `d` for every canonical decimal string.

use alloy_primitives::{
    U256,
    utils::{ParseUnits, Unit},
};

/// Decimals of the native currency (wei -> ether).
pub const DEFAULT_DECIMALS: u8 = 18;

/// Errors produced while converting amounts.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum UnitsError {
    /// The amount string was empty.
    #[error("amount is empty")]
    Empty,
    /// A negative amount was supplied.
    #[error("amount must not be negative: `{0}`")]
    Negative(String),
    /// The amount has more fractional digits than the unit can represent.
    #[error("amount `{amount}` has more than {decimals} decimal places")]
    TooPrecise {
        /// The rejected amount.
        amount: String,
        /// The number of decimals of the unit.
        decimals: u8,
    },
    /// The number of decimals is not supported.
    #[error("unsupported number of decimals: {0}")]
    InvalidDecimals(u8),
    /// The amount is not a decimal number.
    #[error("invalid amount `{amount}`: {reason}")]
    Invalid {
        /// The rejected amount.
        amount: String,
        /// Why it was rejected.
        reason: String,
    },
}

/// Converts a decimal amount string into base units with the given number of decimals.
///
/// # Example
///
/// ```
/// use alloy_primitives::U256;
/// use dapp_common::parse_amount;
///
/// assert_eq!(parse_amount("2.5", 18)?, U256::from(2_500_000_000_000_000_000u128));
/// assert_eq!(parse_amount("100", 6)?, U256::from(100_000_000u64));
/// # Ok::<_, dapp_common::UnitsError>(())
/// ```
pub fn parse_amount(amount: &str, decimals: u8) -> Result<U256, UnitsError> {
    let amount = amount.trim();
    if amount.is_empty() {
        return Err(UnitsError::Empty);
    }
    if amount.starts_with('-') {
        return Err(UnitsError::Negative(amount.to_string()));
    }
    let unit = unit(decimals)?;

    let invalid = |reason: &str| UnitsError::Invalid {
        amount: amount.to_string(),
        reason: reason.to_string(),
    };
    let (integer, fraction) = amount.split_once('.').unwrap_or((amount, ""));
    if integer.is_empty() && fraction.is_empty() {
        return Err(invalid("no digits"));
    }
    if !integer.bytes().chain(fraction.bytes()).all(|b| b.is_ascii_digit()) {
        return Err(invalid("expected decimal digits with an optional `.`"));
    }
    // `parse_units` silently truncates excess precision; reject it instead.
    if fraction.len() > decimals as usize {
        return Err(UnitsError::TooPrecise { amount: amount.to_string(), decimals });
    }

    match ParseUnits::parse_units(amount, unit) {
        Ok(ParseUnits::U256(value)) => Ok(value),
        Ok(ParseUnits::I256(_)) => Err(UnitsError::Negative(amount.to_string())),
        Err(err) => Err(invalid(&err.to_string())),
    }
}

/// Converts a base-unit value into a decimal string with the given number of decimals.
///
/// Trailing zeros of the fractional part are dropped, keeping at least one digit after the
/// point, so one ether is rendered as `"1.0"` and 2.5 ether as `"2.5"`.
///
/// The output is the canonical form of the amount. `format_amount(parse_amount(d)?)` gives
/// back `d` only when `d` is canonical itself: no leading zeros in the integer part, at
/// least one fractional digit and no trailing zeros after the first one. Other spellings
/// are normalized, e.g. `"1"` becomes `"1.0"` and `"00.10"` becomes `"0.1"`.
///
/// # Example
///
/// ```
/// use alloy_primitives::U256;
/// use dapp_common::format_amount;
///
/// assert_eq!(format_amount(U256::from(2_500_000_000_000_000_000u128), 18)?, "2.5");
/// assert_eq!(format_amount(U256::ZERO, 18)?, "0.0");
/// assert_eq!(format_amount(U256::from(42), 0)?, "42");
/// # Ok::<_, dapp_common::UnitsError>(())
/// ```
pub fn format_amount(value: U256, decimals: u8) -> Result<String, UnitsError> {
    if decimals == 0 {
        return Ok(value.to_string());
    }
    let formatted = ParseUnits::U256(value).format_units(unit(decimals)?);
    Ok(trim_fraction(formatted))
}

fn unit(decimals: u8) -> Result<Unit, UnitsError> {
    Unit::new(decimals).ok_or(UnitsError::InvalidDecimals(decimals))
}

fn trim_fraction(mut formatted: String) -> String {
    if formatted.contains('.') {
        let trimmed = formatted.trim_end_matches('0').len();
        formatted.truncate(trimmed);
    } else {
        formatted.push('.');
    }
    if formatted.ends_with('.') {
        formatted.push('0');
    }
    formatted
}

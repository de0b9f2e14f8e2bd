//! Monetary helpers.
//!
//! Amounts are kept as `f64` at full precision in the ledger. Rounding to
//! two decimals only happens when a value is handed to a presentation layer
//! (see [`round_cents`]).

use serde::{Deserialize, Serialize};

use crate::{EngineError, ResultEngine};

/// A monetary value as it arrives from a caller: either a JSON number or a
/// decimal string typed into a form.
///
/// # Examples
///
/// ```rust
/// use engine::AmountInput;
///
/// assert_eq!(AmountInput::from(12.5).coerce("client_charge").unwrap(), 12.5);
/// assert_eq!(AmountInput::from("10,50").coerce("client_charge").unwrap(), 10.5);
/// assert!(AmountInput::from("ten").coerce("client_charge").is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AmountInput {
    Number(f64),
    Text(String),
}

impl AmountInput {
    /// Coerces the input into a non-negative, finite amount.
    ///
    /// `field` is only used to label the error.
    pub fn coerce(&self, field: &str) -> ResultEngine<f64> {
        match self {
            Self::Number(value) => check_amount(field, *value),
            Self::Text(text) => parse_amount(field, text),
        }
    }
}

impl From<f64> for AmountInput {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for AmountInput {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for AmountInput {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

/// Parses a decimal string into an amount.
///
/// Accepts `.` or `,` as decimal separator, an optional leading `+` and an
/// exponent (`1e3`, `2.5E-1`).
///
/// Validation rules:
/// - rejects empty/invalid strings
/// - rejects negative values
/// - no limit on fractional digits (the ledger keeps full precision)
pub fn parse_amount(field: &str, text: &str) -> ResultEngine<f64> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(EngineError::InvalidAmount(format!("{field} is empty")));
    }
    if trimmed.starts_with('-') {
        return Err(EngineError::InvalidAmount(format!(
            "{field} must not be negative"
        )));
    }
    let rest = trimmed.strip_prefix('+').unwrap_or(trimmed).replace(',', ".");

    let (mantissa, exponent) = match rest.find(['e', 'E']) {
        Some(at) => (&rest[..at], Some(&rest[at + 1..])),
        None => (rest.as_str(), None),
    };
    if let Some(exponent) = exponent {
        let exp_digits = exponent
            .strip_prefix(['+', '-'])
            .unwrap_or(exponent);
        if exp_digits.is_empty() || !exp_digits.chars().all(|c| c.is_ascii_digit()) {
            return Err(invalid(field, text));
        }
    }

    let mut parts = mantissa.split('.');
    let whole = parts.next().unwrap_or_default();
    let frac = parts.next();
    if parts.next().is_some() {
        return Err(invalid(field, text));
    }
    if whole.is_empty() && frac.is_none_or(str::is_empty) {
        return Err(invalid(field, text));
    }
    let digits = |s: &str| s.chars().all(|c| c.is_ascii_digit());
    if !digits(whole) || !frac.is_none_or(digits) {
        return Err(invalid(field, text));
    }

    let value: f64 = rest.parse().map_err(|_| invalid(field, text))?;
    check_amount(field, value)
}

fn check_amount(field: &str, value: f64) -> ResultEngine<f64> {
    if !value.is_finite() {
        return Err(EngineError::InvalidAmount(format!(
            "{field} must be a finite number"
        )));
    }
    if value < 0.0 {
        return Err(EngineError::InvalidAmount(format!(
            "{field} must not be negative"
        )));
    }
    Ok(value)
}

fn invalid(field: &str, text: &str) -> EngineError {
    EngineError::InvalidAmount(format!("{field} is not a number: \"{text}\""))
}

/// Rounds to 2 decimal places, half away from zero.
#[must_use]
pub fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Formats an amount for display with exactly two decimals.
#[must_use]
pub fn format_amount(value: f64) -> String {
    format!("{:.2}", round_cents(value))
}

//! pt-BR currency formatting and lenient amount parsing.
//!
//! The dashboard renders every amount the way `Intl.NumberFormat('pt-BR')`
//! does: dot as the thousands separator, comma as the decimal separator and
//! always two decimals. Parsing is the inverse, tolerant of the shapes users
//! actually type into a form.

use rust_decimal::{Decimal, RoundingStrategy};
use std::str::FromStr;

/// Placeholder shown in place of an amount when balances are hidden.
pub const MASKED_VALUE: &str = "••••••";

/// Formats an amount in Brazilian Reais, e.g. `R$ 1.234,56`.
///
/// ```rust
/// use hubfin_core::format::format_brl;
/// use rust_decimal_macros::dec;
///
/// assert_eq!(format_brl(dec!(1234.5)), "R$ 1.234,50");
/// assert_eq!(format_brl(dec!(-0.5)), "-R$ 0,50");
/// ```
#[must_use]
pub fn format_brl(amount: Decimal) -> String {
    format_amount(amount, "R$")
}

/// Formats an amount with pt-BR separators and the given symbol.
#[must_use]
pub fn format_amount(amount: Decimal, symbol: &str) -> String {
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let negative = rounded < Decimal::ZERO;
    let digits = format!("{:.2}", rounded.abs());
    let (integer, fraction) = digits.split_once('.').unwrap_or((digits.as_str(), "00"));

    let sign = if negative { "-" } else { "" };
    format!("{sign}{symbol} {},{fraction}", group_thousands(integer))
}

/// Formats an amount, or returns [`MASKED_VALUE`] when `visible` is false.
#[must_use]
pub fn format_masked(amount: Decimal, visible: bool) -> String {
    if visible {
        format_brl(amount)
    } else {
        MASKED_VALUE.to_string()
    }
}

/// Parses user-entered amount text into a decimal.
///
/// Accepts `R$ 1.234,56`, `1234,56`, `1234.56`, `R$ 1.500` and `1.234.567`.
/// When a comma is present it is the decimal separator and dots before it
/// are thousands separators; a dot after the comma is rejected. Without a
/// comma, a dot followed by exactly three digits groups thousands, any other
/// single dot is the decimal point. Returns `None` when no number can be
/// recovered.
///
/// ```rust
/// use hubfin_core::format::parse_amount;
/// use rust_decimal_macros::dec;
///
/// assert_eq!(parse_amount("R$ 1.234,56"), Some(dec!(1234.56)));
/// assert_eq!(parse_amount("R$ 1.500"), Some(dec!(1500)));
/// assert_eq!(parse_amount("1500.5"), Some(dec!(1500.5)));
/// assert_eq!(parse_amount("1,234.56"), None);
/// assert_eq!(parse_amount("abc"), None);
/// ```
#[must_use]
pub fn parse_amount(text: &str) -> Option<Decimal> {
    let cleaned: String = text
        .chars()
        .filter(|c| c.is_ascii_digit() || matches!(c, ',' | '.' | '-'))
        .collect();

    if !cleaned.chars().any(|c| c.is_ascii_digit()) {
        return None;
    }

    let normalized = match cleaned.split_once(',') {
        Some((_, fraction)) if fraction.contains('.') => return None,
        Some(_) => cleaned.replace('.', "").replacen(',', ".", 1),
        None if groups_thousands(&cleaned) => cleaned.replace('.', ""),
        None => cleaned,
    };

    Decimal::from_str(&normalized).ok()
}

/// True when every dot in comma-free text separates a group of three digits.
fn groups_thousands(text: &str) -> bool {
    let mut parts = text.split('.');
    let head = parts.next().unwrap_or_default();
    let groups: Vec<&str> = parts.collect();
    !groups.is_empty()
        && !head.trim_start_matches('-').is_empty()
        && groups
            .iter()
            .all(|g| g.len() == 3 && g.chars().all(|c| c.is_ascii_digit()))
}

fn group_thousands(integer: &str) -> String {
    let len = integer.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in integer.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push('.');
        }
        out.push(ch);
    }
    out
}

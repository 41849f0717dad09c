//! Stake and payout arithmetic for the bet forms.
//!
//! Everything here degrades silently: text that does not parse becomes a zero
//! stake and nothing returns an error.

use chrono::DateTime;

pub const CURRENCY_SUFFIX: &str = " ₽";

/// Parses the leading decimal number of `s` the way a browser's `parseFloat`
/// does (`"25abc"` is 25). Anything unparseable is 0.
pub fn parse_amount(s: &str) -> f64 {
    leading_number(s).filter(|v| v.is_finite()).unwrap_or(0.0)
}

pub fn potential_payout(amount: f64, odds: f64) -> f64 {
    round2(amount * odds)
}

/// Payouts above twice the stake get highlighted.
pub fn is_emphasized(amount: f64, payout: f64) -> bool {
    payout > amount * 2.0
}

pub fn format_money(v: f64) -> String { format!("{:.2}{}", v, CURRENCY_SUFFIX) }

/// ru-RU currency rendering: `1234.5` becomes `"1 234,50 ₽"` with
/// non-breaking spaces.
pub fn format_currency(v: f64) -> String {
    let cents = (v.abs() * 100.0).round() as u64;
    let (whole, frac) = (cents / 100, cents % 100);
    let digits = whole.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('\u{a0}');
        }
        grouped.push(ch);
    }
    let sign = if v < 0.0 && cents > 0 { "-" } else { "" };
    format!("{}{},{:02}\u{a0}₽", sign, grouped, frac)
}

/// `dd.mm.yyyy HH:MM` in the timestamp's own offset; unparseable input is
/// echoed back unchanged.
pub fn format_timestamp(raw: &str) -> String {
    match DateTime::parse_from_rfc3339(raw.trim()) {
        Ok(ts) => ts.format("%d.%m.%Y %H:%M").to_string(),
        Err(_) => raw.to_string(),
    }
}

fn round2(v: f64) -> f64 { (v * 100.0).round() / 100.0 }

fn leading_number(s: &str) -> Option<f64> {
    let s = s.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;
    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end += 1;
    }
    let mut seen_digit = false;
    let mut seen_dot = false;
    while let Some(&b) = bytes.get(end) {
        match b {
            b'0'..=b'9' => seen_digit = true,
            b'.' if !seen_dot => seen_dot = true,
            _ => break,
        }
        end += 1;
    }
    if !seen_digit {
        return None;
    }
    let mantissa = s[..end].trim_end_matches('.');
    let exponent = exponent_len(&bytes[end..]).map_or("", |len| &s[end..end + len]);
    format!("{}{}", mantissa, exponent).parse::<f64>().ok()
}

/// Length of an `e[+-]digits` suffix, only when at least one digit follows.
fn exponent_len(rest: &[u8]) -> Option<usize> {
    if !matches!(rest.first(), Some(b'e') | Some(b'E')) {
        return None;
    }
    let sign = usize::from(matches!(rest.get(1), Some(b'+') | Some(b'-')));
    let digits = rest[1 + sign..].iter().take_while(|b| b.is_ascii_digit()).count();
    (digits > 0).then_some(1 + sign + digits)
}

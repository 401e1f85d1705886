//! Ugandan shilling formatting.
//!
//! Matches `en-UG` number formatting for `UGX` with zero fraction digits:
//! `USh` symbol, a no-break space, comma thousands grouping. Implemented in
//! plain Rust so server-rendered and hydrated markup agree byte for byte.

#[cfg(test)]
#[path = "currency_test.rs"]
mod currency_test;

/// Currency symbol for UGX in the `en-UG` locale.
pub const UGX_SYMBOL: &str = "USh";

const NO_BREAK_SPACE: char = '\u{a0}';

/// Format `amount` as whole Ugandan shillings, e.g. `USh 1,000`.
///
/// Rounds half away from zero. Negative amounts (including `-0`) carry a
/// leading minus sign before the symbol.
pub fn format_ugx(amount: f64) -> String {
    if amount.is_nan() {
        return format!("{UGX_SYMBOL}{NO_BREAK_SPACE}NaN");
    }
    let sign = if amount.is_sign_negative() { "-" } else { "" };
    if amount.is_infinite() {
        return format!("{sign}{UGX_SYMBOL}{NO_BREAK_SPACE}∞");
    }
    let whole = format!("{:.0}", amount.abs().round());
    format!("{sign}{UGX_SYMBOL}{NO_BREAK_SPACE}{}", group_thousands(&whole))
}

fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

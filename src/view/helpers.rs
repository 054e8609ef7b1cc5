//! Formatting helpers for rendered pages.

use serde::Serialize;

/// Formats a ruble amount the way `ru-RU` locales do: digit groups separated
/// by non-breaking spaces, followed by the ruble sign.
///
/// Example: `4100000` renders as `"4 100 000 ₽"`.
pub fn format_rub(amount: u64) -> String {
    let digits = amount.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 * 2 + 4);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push('\u{a0}');
        }
        out.push(ch);
    }
    out.push_str(" ₽");
    out
}

/// Serializes `value` for embedding inside an inline `<script>` element.
pub fn script_json<T: Serialize>(value: &T) -> serde_json::Result<String> {
    Ok(serde_json::to_string(value)?
        .replace('<', "\\u003c")
        .replace('>', "\\u003e")
        .replace('&', "\\u0026"))
}

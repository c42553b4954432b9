//! Display formatting shared by every storefront surface.
//!
//! Catalog prices are in upstream units; the storefront shows them in
//! Indonesian Rupiah at a fixed conversion rate.

/// Rupiah per catalog price unit.
pub const IDR_PER_UNIT: f64 = 15_000.0;

/// Formats a catalog price as whole Rupiah, e.g. `10.0` → `"Rp 150.000"`.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn format_price(price: f64) -> String {
    let rupiah = (price * IDR_PER_UNIT).round() as i64;
    format_rupiah(rupiah)
}

/// Formats an amount already in Rupiah with `.` thousands separators.
#[must_use]
pub fn format_rupiah(amount: i64) -> String {
    let digits = amount.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }

    if amount < 0 {
        format!("-Rp {grouped}")
    } else {
        format!("Rp {grouped}")
    }
}

#[must_use]
pub fn format_rating(rate: f64) -> String {
    format!("{rate:.1}")
}

/// Cuts `text` to `max_chars` characters and appends `…` when it was longer.
#[must_use]
pub fn truncate(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => format!("{}…", &text[..byte_idx]),
        None => text.to_owned(),
    }
}

//! Money presentation helpers.
//!
//! Amounts are kept as unrounded `f64` throughout the domain. Rounding to two
//! decimals only happens when an amount is turned into text.

/// Round an amount to two decimal places (half away from zero).
pub fn round_cents(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}

/// Format an amount with exactly two decimals, e.g. `24.48`.
pub fn format_amount(amount: f64) -> String {
    format!("{:.2}", round_cents(amount))
}

/// Format an amount as a dollar price, e.g. `$24.48`.
pub fn format_price(amount: f64) -> String {
    format!("${}", format_amount(amount))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_two_decimals() {
        assert_eq!(format_amount(0.0), "0.00");
        assert_eq!(format_amount(4.5), "4.50");
        assert_eq!(format_amount(9.99 * 2.0 + 4.50), "24.48");
        assert_eq!(format_price(19.98), "$19.98");
    }

    #[test]
    fn rounds_half_cents_up() {
        assert_eq!(format_amount(0.125), "0.13");
        assert_eq!(round_cents(19.980_000_000_1), 19.98);
    }
}

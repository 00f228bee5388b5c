//! Integer-cent money helpers.
//!
//! All prices and totals are stored and computed as `i64` cents; the
//! restaurant's currency symbol is attached only at the rendering edge.

/// Format a cent amount with a currency symbol, e.g. `€12.50`.
pub fn format_cents(cents: i64, symbol: &str) -> String {
    let sign = if cents < 0 { "-" } else { "" };
    let abs = cents.abs();
    format!("{sign}{symbol}{}.{:02}", abs / 100, abs % 100)
}

/// Line total for a quantity of a product.
pub fn line_total(unit_price_cents: i64, quantity: i32) -> i64 {
    unit_price_cents.saturating_mul(quantity as i64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_cents_with_symbol() {
        assert_eq!(format_cents(0, "$"), "$0.00");
        assert_eq!(format_cents(1250, "€"), "€12.50");
        assert_eq!(format_cents(905, "$"), "$9.05");
        assert_eq!(format_cents(-350, "$"), "-$3.50");
    }

    #[test]
    fn line_total_multiplies_quantity() {
        assert_eq!(line_total(800, 3), 2400);
    }
}

//! Quantities and monetary amounts
//!
//! Prices are plain floating-point unit prices and quantities are signed
//! integers. Neither is validated: negative values flow through unchanged.

/// Number of units of an item
pub type Quantity = i32;

/// Unit price, line total or grand total
pub type Amount = f64;

/// Returns `quantity * unit_price`
pub fn line_total(quantity: Quantity, unit_price: Amount) -> Amount {
    f64::from(quantity) * unit_price
}

/// Renders an amount for console output
///
/// Whole values keep one fractional digit (`25.0`, not `25`) and other values
/// use the shortest representation that round-trips. This matches the
/// original console output only for ordinary prices, below `1e7` and not
/// smaller than `1e-3`: larger values print in full (`10000000.0`, not
/// `1.0E7`).
pub fn format_amount(amount: Amount) -> String {
    format!("{:?}", amount)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_whole_amount_keeps_fraction_digit() {
        assert_eq!(format_amount(25.0), "25.0");
        assert_eq!(format_amount(75.0), "75.0");
        assert_eq!(format_amount(0.0), "0.0");
    }

    #[test]
    fn test_fractional_amount() {
        assert_eq!(format_amount(12.5), "12.5");
        assert_eq!(format_amount(-3.25), "-3.25");
    }

    #[test]
    fn test_large_amount_is_not_exponential() {
        assert_eq!(format_amount(9_999_999.5), "9999999.5");
        assert_eq!(format_amount(10_000_000.0), "10000000.0");
    }

    #[test]
    fn test_line_total_accepts_negative_inputs() {
        assert_eq!(line_total(-2, 10.0), -20.0);
        assert_eq!(line_total(3, -1.5), -4.5);
        assert_eq!(line_total(0, 99.0), 0.0);
    }

    proptest! {
        #[test]
        fn prop_formatted_amount_parses_back(cents in -1_000_000i64..1_000_000i64) {
            let amount = cents as f64 / 100.0;
            let rendered = format_amount(amount);
            prop_assert_eq!(rendered.parse::<f64>().unwrap(), amount);
            prop_assert!(rendered.contains('.'));
        }
    }
}

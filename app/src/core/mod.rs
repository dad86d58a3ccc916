pub mod unit;

/// Renders a monetary amount with exactly two fractional digits.
///
/// Rounding happens only here, at the output boundary. Intermediate
/// results of the derivation pipeline keep full precision.
pub fn format_amount(value: f64) -> String {
    format!("{value:.2}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(835.338), "835.34");
        assert_eq!(format_amount(835.334), "835.33");
        assert_eq!(format_amount(0.0), "0.00");
        assert_eq!(format_amount(-1.005), "-1.00");
        assert_eq!(format_amount(2439193.2), "2439193.20");
    }
}

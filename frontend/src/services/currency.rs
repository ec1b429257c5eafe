/// Turkish lira sign prefixed to every amount
pub const CURRENCY_SYMBOL: &str = "₺";

const MAX_FRACTION_DIGITS: usize = 3;

/// en-US number grouping: comma thousands separator, at most three fraction
/// digits, trailing zeros dropped. `1234567.5` -> `1,234,567.5`
pub fn format_amount(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "∞" } else { "-∞" }.to_string();
    }

    let fixed = round_fraction(value.abs());
    let (integer, fraction) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
    let fraction = fraction.trim_end_matches('0');

    let mut out = String::with_capacity(fixed.len() + integer.len() / 3 + 1);
    if value < 0.0 && fixed.chars().any(|c| c.is_ascii_digit() && c != '0') {
        out.push('-');
    }
    for (i, digit) in integer.chars().enumerate() {
        if i > 0 && (integer.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(digit);
    }
    if !fraction.is_empty() {
        out.push('.');
        out.push_str(fraction);
    }
    out
}

/// Fixed-point text with exact halves rounded away from zero.
/// `{:.3}` alone would round `0.0625` down to `0.062`.
fn round_fraction(abs: f64) -> String {
    let value = if is_fraction_tie(abs) {
        f64::from_bits(abs.to_bits() + 1)
    } else {
        abs
    };
    format!("{:.*}", MAX_FRACTION_DIGITS, value)
}

/// True when the exact binary value sits halfway between two
/// `MAX_FRACTION_DIGITS` decimals, i.e. `value * 2 * 10^digits` is an odd integer
fn is_fraction_tie(value: f64) -> bool {
    let bits = value.to_bits();
    let biased_exponent = ((bits >> 52) & 0x7ff) as i32;
    let fraction = bits & ((1u64 << 52) - 1);
    let (mantissa, exponent) = if biased_exponent == 0 {
        (fraction, -1074)
    } else {
        (fraction | (1u64 << 52), biased_exponent - 1075)
    };
    if mantissa == 0 || exponent >= 0 {
        return false;
    }
    // 2 * 10^digits carries 2^(digits + 1); the 5^digits factor is odd
    mantissa.trailing_zeros() as i32 + MAX_FRACTION_DIGITS as i32 + 1 == -exponent
}

/// `₺1,234,567`
pub fn format_currency(value: f64) -> String {
    format!("{}{}", CURRENCY_SYMBOL, format_amount(value))
}

/// Currency with a missing value shown as `₺0`
pub fn format_optional_currency(value: Option<f64>) -> String {
    format_currency(value.unwrap_or(0.0))
}

/// Plain count without grouping; missing counts show `0`
pub fn format_count(value: Option<f64>) -> String {
    match value {
        Some(v) if v.is_finite() && v.fract() == 0.0 && v.abs() < 1e15 => format!("{}", v as i64),
        Some(v) => format!("{}", v),
        None => "0".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_currency_grouping() {
        assert_eq!(format_currency(1234567.0), "₺1,234,567");
        assert_eq!(format_currency(999.0), "₺999");
        assert_eq!(format_currency(1000.0), "₺1,000");
        assert_eq!(format_currency(0.0), "₺0");
    }

    #[test]
    fn test_fraction_digits() {
        assert_eq!(format_amount(1234.5), "1,234.5");
        assert_eq!(format_amount(12.3456), "12.346");
        assert_eq!(format_amount(0.1 + 0.2), "0.3");
        assert_eq!(format_amount(2.0004), "2");
    }

    #[test]
    fn test_exact_halves_round_away_from_zero() {
        assert_eq!(format_currency(0.0625), "₺0.063");
        assert_eq!(format_currency(1.3125), "₺1.313");
        assert_eq!(format_amount(1234.0625), "1,234.063");
        assert_eq!(format_amount(-1.3125), "-1.313");
    }

    #[test]
    fn test_values_without_a_tie_are_unchanged() {
        assert!(!is_fraction_tie(0.125));
        assert!(!is_fraction_tie(0.5));
        assert!(!is_fraction_tie(2.0005));
        assert!(!is_fraction_tie(1500.0));
        assert!(is_fraction_tie(0.0625));
    }

    #[test]
    fn test_negative_amounts() {
        assert_eq!(format_amount(-1500.25), "-1,500.25");
        assert_eq!(format_amount(-0.0001), "0");
    }

    #[test]
    fn test_missing_values_default_to_zero() {
        assert_eq!(format_optional_currency(None), "₺0");
        assert_eq!(format_optional_currency(Some(250.0)), "₺250");
        assert_eq!(format_count(None), "0");
        assert_eq!(format_count(Some(1234.0)), "1234");
        assert_eq!(format_count(Some(2.5)), "2.5");
    }
}

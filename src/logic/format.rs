//! Conversions between operand text and `f64`.
//!
//! Operands are edited as text and only become numbers at compute time. Parsing
//! accepts the longest numeric prefix (so `"3."` is `3` and `"1e+"` is `1`), and
//! results are printed with the shortest round-trip digits, switching to exponent
//! form outside `[1e-6, 1e21)`.

/// What: Parse the longest numeric prefix of an operand.
///
/// Inputs:
/// - `text`: Operand text as typed or as left by a previous result.
///
/// Output:
/// - `Some(value)` when a finite or infinite number could be read; `None` for empty text,
///   a lone `.`/sign, or `NaN`.
///
/// Details:
/// - Leading whitespace is skipped; trailing garbage after the prefix is ignored.
/// - `Infinity` (optionally signed) is accepted because results can print that way.
#[must_use]
pub fn parse_operand(text: &str) -> Option<f64> {
    let s = text.trim_start();
    let bytes = s.as_bytes();
    let mut end = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));

    if s[end..].starts_with("Infinity") {
        return s[..end + "Infinity".len()].parse::<f64>().ok();
    }

    let int_start = end;
    while bytes.get(end).is_some_and(u8::is_ascii_digit) {
        end += 1;
    }
    let mut digits = end - int_start;
    if bytes.get(end) == Some(&b'.') {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while bytes.get(frac_end).is_some_and(u8::is_ascii_digit) {
            frac_end += 1;
        }
        digits += frac_end - frac_start;
        end = frac_end;
    }
    if digits == 0 {
        return None;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits = exp_end;
        while bytes.get(exp_end).is_some_and(u8::is_ascii_digit) {
            exp_end += 1;
        }
        if exp_end > exp_digits {
            end = exp_end;
        }
    }

    s[..end].parse::<f64>().ok().filter(|v| !v.is_nan())
}

/// What: Render a number the way a browser's default number-to-string does.
///
/// Inputs:
/// - `value`: Any `f64`.
///
/// Output:
/// - Shortest round-trip decimal text; exponent form (`1e+21`, `1.5e-7`) outside
///   `[1e-6, 1e21)`; `NaN`, `Infinity`, `-Infinity` for non-finite values; `0` for `-0`.
#[must_use]
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }
    let abs = value.abs();
    if (1e-6..1e21).contains(&abs) {
        return format!("{value}");
    }
    let s = format!("{value:e}");
    match s.split_once('e') {
        Some((mantissa, exp)) if !exp.starts_with('-') => format!("{mantissa}e+{exp}"),
        _ => s,
    }
}

/// What: Render a result, optionally rounded to a fixed number of decimal places.
///
/// Inputs:
/// - `value`: Computed result.
/// - `precision`: `None` keeps [`format_number`] output; `Some(n)` rounds to `n` places
///   and trims trailing zeros.
///
/// Output:
/// - Display text for the result.
///
/// Details:
/// - Values outside the plain-decimal range fall back to [`format_number`].
#[must_use]
pub fn format_result(value: f64, precision: Option<u8>) -> String {
    let Some(places) = precision else {
        return format_number(value);
    };
    if !value.is_finite() || value.abs() >= 1e21 {
        return format_number(value);
    }
    let fixed = format!("{:.*}", usize::from(places), value);
    let trimmed = if fixed.contains('.') {
        fixed.trim_end_matches('0').trim_end_matches('.')
    } else {
        fixed.as_str()
    };
    match trimmed {
        "-0" | "" => "0".to_string(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// What: Operand parsing reads the longest numeric prefix.
    ///
    /// Inputs:
    /// - Typed operands, partial operands left by backspace, and result strings.
    ///
    /// Output:
    /// - Numbers for readable prefixes, `None` for empty/lone-dot/NaN text.
    fn parse_operand_reads_numeric_prefix() {
        assert_eq!(parse_operand("12"), Some(12.0));
        assert_eq!(parse_operand("3."), Some(3.0));
        assert_eq!(parse_operand(".5"), Some(0.5));
        assert_eq!(parse_operand("-5"), Some(-5.0));
        assert_eq!(parse_operand("1e+21"), Some(1e21));
        assert_eq!(parse_operand("1e+"), Some(1.0));
        assert_eq!(parse_operand("2.5e-7"), Some(2.5e-7));
        assert_eq!(parse_operand("Infinity"), Some(f64::INFINITY));
        assert_eq!(parse_operand("-Infinity"), Some(f64::NEG_INFINITY));
        assert_eq!(parse_operand(""), None);
        assert_eq!(parse_operand("."), None);
        assert_eq!(parse_operand("-"), None);
        assert_eq!(parse_operand("NaN"), None);
        assert_eq!(parse_operand("Infinit"), None);
    }

    #[test]
    /// What: Number formatting keeps raw shortest digits and exponent thresholds.
    ///
    /// Inputs:
    /// - Integers, the classic `0.1 + 0.2` tail, large/small magnitudes, non-finite values.
    ///
    /// Output:
    /// - Strings matching default browser number formatting.
    fn format_number_matches_default_conversion() {
        assert_eq!(format_number(7.0), "7");
        assert_eq!(format_number(-2.0), "-2");
        assert_eq!(format_number(0.1 + 0.2), "0.30000000000000004");
        assert_eq!(format_number(1.0 / 3.0), "0.3333333333333333");
        assert_eq!(format_number(0.000_001), "0.000001");
        assert_eq!(format_number(1.5e-7), "1.5e-7");
        assert_eq!(format_number(1e21), "1e+21");
        assert_eq!(format_number(-2.5e22), "-2.5e+22");
        assert_eq!(format_number(-0.0), "0");
        assert_eq!(format_number(f64::INFINITY), "Infinity");
        assert_eq!(format_number(f64::NAN), "NaN");
    }

    #[test]
    /// What: Fixed precision rounds and trims trailing zeros.
    ///
    /// Inputs:
    /// - `0.1 + 0.2` and `2/3` under several precisions, plus `None`.
    ///
    /// Output:
    /// - Rounded text without trailing zeros; `None` falls through to raw formatting.
    fn format_result_applies_optional_precision() {
        assert_eq!(format_result(0.1 + 0.2, Some(10)), "0.3");
        assert_eq!(format_result(2.0 / 3.0, Some(4)), "0.6667");
        assert_eq!(format_result(12.0, Some(3)), "12");
        assert_eq!(format_result(-0.000_01, Some(2)), "0");
        assert_eq!(format_result(0.1 + 0.2, None), "0.30000000000000004");
        assert_eq!(format_result(1e22, Some(2)), "1e+22");
    }
}

//! Numeric coercion helpers matching how the browser reads numbers out of page text.
//!
//! Every value is an `f64`; malformed input becomes `NaN` instead of an error so
//! it can flow through arithmetic and land in the page verbatim.

use num_traits::cast::cast;

/// Whitespace skipped around numeric text (ECMAScript `StrWhiteSpaceChar`).
fn is_js_whitespace(c: char) -> bool {
    c == '\u{FEFF}' || (c.is_whitespace() && c != '\u{85}')
}

/// Parse the leading integer of `text`, discarding fractional or trailing content.
///
/// Leading whitespace and a single sign are accepted, as is a `0x`/`0X` hexadecimal
/// prefix. Returns `NaN` when no digit follows.
#[must_use]
pub fn parse_int(text: &str) -> f64 {
    let trimmed = text.trim_start_matches(is_js_whitespace);
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let magnitude = if let Some(hex) = rest
        .strip_prefix("0x")
        .or_else(|| rest.strip_prefix("0X"))
    {
        accumulate_digits(hex, 16)
    } else {
        let end = rest
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(rest.len());
        if end == 0 {
            None
        } else {
            rest[..end].parse::<f64>().ok()
        }
    };

    match magnitude {
        Some(value) if negative => -value,
        Some(value) => value,
        None => f64::NAN,
    }
}

/// Convert the whole of `text` to a number.
///
/// Surrounding whitespace is ignored and blank text is zero. Decimal literals
/// (sign, fraction, exponent), signed `Infinity` and unsigned `0x`/`0o`/`0b`
/// literals are accepted; anything else is `NaN`.
#[must_use]
pub fn to_number(text: &str) -> f64 {
    let trimmed = text.trim_matches(is_js_whitespace);
    if trimmed.is_empty() {
        return 0.0;
    }

    match trimmed {
        "Infinity" | "+Infinity" => return f64::INFINITY,
        "-Infinity" => return f64::NEG_INFINITY,
        _ => {}
    }

    if let Some(value) = parse_prefixed_literal(trimmed) {
        return value;
    }

    if is_decimal_literal(trimmed) {
        trimmed.parse::<f64>().unwrap_or(f64::NAN)
    } else {
        f64::NAN
    }
}

/// Render a number the way the page displays it.
#[must_use]
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if value == 0.0 {
        // Covers negative zero.
        return "0".to_string();
    }

    let magnitude = value.abs();
    if (1e-6..1e21).contains(&magnitude) {
        return format!("{value}");
    }

    let formatted = format!("{value:e}");
    match formatted.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            format!("{mantissa}e+{exponent}")
        }
        _ => formatted,
    }
}

/// Convert i64 to f64 while allowing precision loss in a single location.
#[must_use]
pub fn i64_to_f64(value: i64) -> f64 {
    cast::<i64, f64>(value).unwrap_or(0.0)
}

fn accumulate_digits(digits: &str, radix: u32) -> Option<f64> {
    let base = f64::from(radix);
    let mut value: Option<f64> = None;
    for c in digits.chars() {
        let Some(digit) = c.to_digit(radix) else {
            break;
        };
        value = Some(value.unwrap_or(0.0).mul_add(base, f64::from(digit)));
    }
    value
}

fn parse_prefixed_literal(text: &str) -> Option<f64> {
    let (radix, digits) = match text.get(..2)? {
        "0x" | "0X" => (16, &text[2..]),
        "0o" | "0O" => (8, &text[2..]),
        "0b" | "0B" => (2, &text[2..]),
        _ => return None,
    };
    if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
        return Some(f64::NAN);
    }
    accumulate_digits(digits, radix)
}

fn is_decimal_literal(text: &str) -> bool {
    let bytes = text.as_bytes();
    let mut idx = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        idx += 1;
    }

    let int_start = idx;
    while idx < bytes.len() && bytes[idx].is_ascii_digit() {
        idx += 1;
    }
    let mut digit_count = idx - int_start;

    if idx < bytes.len() && bytes[idx] == b'.' {
        idx += 1;
        let frac_start = idx;
        while idx < bytes.len() && bytes[idx].is_ascii_digit() {
            idx += 1;
        }
        digit_count += idx - frac_start;
    }
    if digit_count == 0 {
        return false;
    }

    if idx < bytes.len() && matches!(bytes[idx], b'e' | b'E') {
        idx += 1;
        if idx < bytes.len() && matches!(bytes[idx], b'+' | b'-') {
            idx += 1;
        }
        let exp_start = idx;
        while idx < bytes.len() && bytes[idx].is_ascii_digit() {
            idx += 1;
        }
        if idx == exp_start {
            return false;
        }
    }

    idx == bytes.len()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_int_reads_leading_integer() {
        assert!((parse_int("5") - 5.0).abs() < f64::EPSILON);
        assert!((parse_int("  42px") - 42.0).abs() < f64::EPSILON);
        assert!((parse_int("3.9") - 3.0).abs() < f64::EPSILON);
        assert!((parse_int("-7") + 7.0).abs() < f64::EPSILON);
        assert!((parse_int("+8") - 8.0).abs() < f64::EPSILON);
        assert!((parse_int("0x1F") - 31.0).abs() < f64::EPSILON);
    }

    #[test]
    fn parse_int_without_digits_is_nan() {
        assert!(parse_int("").is_nan());
        assert!(parse_int("abc").is_nan());
        assert!(parse_int("-").is_nan());
        assert!(parse_int(".5").is_nan());
        assert!(parse_int("0x").is_nan());
    }

    #[test]
    fn to_number_requires_whole_text() {
        assert!((to_number(" 20 ") - 20.0).abs() < f64::EPSILON);
        assert!((to_number("19.99") - 19.99).abs() < f64::EPSILON);
        assert!((to_number("1e3") - 1000.0).abs() < f64::EPSILON);
        assert!((to_number(".5") - 0.5).abs() < f64::EPSILON);
        assert!((to_number("0b101") - 5.0).abs() < f64::EPSILON);
        assert!(to_number("").abs() < f64::EPSILON);
        assert!(to_number("\n\t").abs() < f64::EPSILON);
        assert!(to_number("$20").is_nan());
        assert!(to_number("20 USD").is_nan());
        assert!(to_number("inf").is_nan());
        assert!(to_number("-0x10").is_nan());
        assert!(to_number("1e").is_nan());
        assert_eq!(to_number("-Infinity"), f64::NEG_INFINITY);
    }

    #[test]
    fn format_number_matches_page_rendering() {
        assert_eq!(format_number(60.0), "60");
        assert_eq!(format_number(-1.0), "-1");
        assert_eq!(format_number(-0.0), "0");
        assert_eq!(format_number(0.5), "0.5");
        assert_eq!(format_number(0.1 + 0.2), "0.30000000000000004");
        assert_eq!(format_number(f64::NAN), "NaN");
        assert_eq!(format_number(f64::INFINITY), "Infinity");
        assert_eq!(format_number(1e21), "1e+21");
        assert_eq!(format_number(1.5e-7), "1.5e-7");
        assert_eq!(format_number(1e20), "100000000000000000000");
    }

    #[test]
    fn i64_conversion_is_exact_for_small_values() {
        assert!((i64_to_f64(-3) + 3.0).abs() < f64::EPSILON);
    }
}

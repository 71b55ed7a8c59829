//! Lenient number parsing and currency formatting.
//!
//! Upstream sends every number as a string, sometimes with trailing junk.
//! Parsing takes the longest numeric prefix and never fails: a string
//! without one is treated as absent and the caller picks the default.

/// Integer prefix of `s`: `"1234.56"` -> 1234, `"12abc"` -> 12, `"abc"` -> None.
///
/// Returned as `f64` so prefixes beyond `i64` keep their magnitude
/// instead of collapsing to absent.
pub fn parse_int_prefix(s: &str) -> Option<f64> {
    let s = s.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;
    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end = 1;
    }
    let digits_start = end;
    while bytes.get(end).is_some_and(u8::is_ascii_digit) {
        end += 1;
    }
    if end == digits_start {
        return None;
    }
    s[..end].parse::<f64>().ok()
}

/// Decimal prefix of `s`, including fraction and exponent
pub fn parse_float_prefix(s: &str) -> Option<f64> {
    let s = s.trim_start();
    let bytes = s.as_bytes();
    let is_digit = |i: usize| bytes.get(i).is_some_and(u8::is_ascii_digit);

    let mut end = 0;
    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end = 1;
    }
    let mut mantissa_digits = 0;
    while is_digit(end) {
        end += 1;
        mantissa_digits += 1;
    }
    if bytes.get(end) == Some(&b'.') {
        let mut frac_end = end + 1;
        while is_digit(frac_end) {
            frac_end += 1;
            mantissa_digits += 1;
        }
        end = frac_end;
    }
    if mantissa_digits == 0 {
        return None;
    }
    if matches!(bytes.get(end), Some(b'e') | Some(b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+') | Some(b'-')) {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while is_digit(exp_end) {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }
    s[..end].parse().ok()
}

/// Groups the integer part with commas and keeps at most three fraction
/// digits, trailing zeros dropped: 12340.0 -> "12,340", 1234.5678 -> "1,234.568"
pub fn format_grouped(value: f64) -> String {
    if !value.is_finite() {
        return "0".to_string();
    }

    let formatted = format!("{:.3}", value);
    let (integer_part, fraction_part) = match formatted.split_once('.') {
        Some((i, f)) => (i, f.trim_end_matches('0')),
        None => (formatted.as_str(), ""),
    };
    let (sign, digits) = match integer_part.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", integer_part),
    };

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    // -0.0001 rounds to "-0"
    let sign = if grouped == "0" && fraction_part.is_empty() { "" } else { sign };

    if fraction_part.is_empty() {
        format!("{}{}", sign, grouped)
    } else {
        format!("{}{}.{}", sign, grouped, fraction_part)
    }
}

/// `$` + [`format_grouped`]
pub fn format_currency(value: f64) -> String {
    format!("${}", format_grouped(value))
}

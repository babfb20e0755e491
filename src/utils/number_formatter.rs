/// Maximum number of fraction digits kept when formatting a label value.
const MAX_FRACTION_DIGITS: usize = 3;

/// Formats a number with `,` thousands separators and at most three fraction
/// digits, trailing zeros trimmed (`1234567.5` -> `1,234,567.5`).
pub fn format_with_separators(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    let text = format!("{:.*}", MAX_FRACTION_DIGITS, value.abs());
    let (int_part, frac_part) = text.split_once('.').unwrap_or((text.as_str(), ""));
    let frac_part = frac_part.trim_end_matches('0');
    let negative = value < 0.0 && (int_part != "0" || !frac_part.is_empty());

    let mut out = String::with_capacity(int_part.len() + int_part.len() / 3 + frac_part.len() + 2);
    if negative {
        out.push('-');
    }
    let len = int_part.len();
    for (i, c) in int_part.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    if !frac_part.is_empty() {
        out.push('.');
        out.push_str(frac_part);
    }
    out
}

//! Report number format: thousands grouped with `,`, at most one fractional
//! digit, fractional part dropped when it rounds to zero (`,##0.#`).

/// Format a metric value for report lines.
///
/// Rounding is half-to-even on the exact binary value. Negative values keep
/// their sign even when they round to zero (`-0.04` prints `-0`); non-finite
/// values print as `NaN`, `∞`, `-∞`.
///
/// ```
/// use cyclemeter_core::format_metric;
///
/// assert_eq!(format_metric(1234.56), "1,234.6");
/// assert_eq!(format_metric(5.0), "5");
/// ```
pub fn format_metric(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "∞" } else { "-∞" }.to_string();
    }

    let fixed = format!("{:.1}", value.abs());
    let (int_part, frac) = fixed.split_once('.').unwrap_or((fixed.as_str(), "0"));

    let mut out = String::with_capacity(fixed.len() + int_part.len() / 3 + 1);
    if value.is_sign_negative() {
        out.push('-');
    }
    push_grouped(&mut out, int_part);
    if frac != "0" {
        out.push('.');
        out.push_str(frac);
    }
    out
}

fn push_grouped(out: &mut String, digits: &str) {
    let len = digits.len();
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
}

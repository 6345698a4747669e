use super::round::round_display;

/// Formats a measurement for display using Indonesian number conventions.
///
/// Thousands are grouped with `.`, the decimal separator is `,`, and at most
/// two fraction digits are shown with trailing zeros dropped:
/// `1234.5` becomes `"1.234,5"` and `27.0` becomes `"27"`.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_owned();
    }
    if value.is_infinite() {
        return if value < 0.0 { "-∞" } else { "∞" }.to_owned();
    }

    let rounded = round_display(value);
    let hundredths = (rounded.abs() * 100.0).round() as u64;
    let whole = hundredths / 100;
    let fraction = hundredths % 100;

    let mut out = String::new();
    if rounded < 0.0 && hundredths != 0 {
        out.push('-');
    }
    out.push_str(&group_thousands(whole));
    if fraction != 0 {
        out.push(',');
        if fraction % 10 == 0 {
            out.push_str(&(fraction / 10).to_string());
        } else {
            out.push_str(&format!("{fraction:02}"));
        }
    }
    out
}

fn group_thousands(whole: u64) -> String {
    let digits = whole.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push('.');
        }
        out.push(ch);
    }
    out
}

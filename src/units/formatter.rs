// Display form of results.
// Plain decimal between 1e-3 and 1e7, computerized scientific notation
// outside it; always at least one fractional digit.

const PLAIN_LOWER: f64 = 1e-3;
const PLAIN_UPPER: f64 = 1e7;

/// Format a value in canonical double notation ("100.0", "1.61", "1.0E7")
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if value == 0.0 {
        return if value.is_sign_negative() { "-0.0" } else { "0.0" }.to_string();
    }

    let sign = if value < 0.0 { "-" } else { "" };
    let abs = value.abs();
    let (digits, exponent) = shortest_digits(abs);

    let body = if (PLAIN_LOWER..PLAIN_UPPER).contains(&abs) {
        plain_notation(&digits, exponent)
    } else {
        scientific_notation(&digits, exponent)
    };

    format!("{}{}", sign, body)
}

/// Shortest round-trip significant digits and decimal exponent of a
/// positive finite value: 273.15 -> ("27315", 2)
fn shortest_digits(abs: f64) -> (String, i32) {
    let sci = format!("{:e}", abs);
    let (mantissa, exponent) = sci.split_once('e').unwrap_or((sci.as_str(), "0"));
    let digits: String = mantissa.chars().filter(char::is_ascii_digit).collect();
    (digits, exponent.parse().unwrap_or(0))
}

fn plain_notation(digits: &str, exponent: i32) -> String {
    if exponent < 0 {
        let leading_zeros = "0".repeat((-exponent - 1) as usize);
        return format!("0.{}{}", leading_zeros, digits);
    }

    let int_len = exponent as usize + 1;
    if digits.len() <= int_len {
        let padding = "0".repeat(int_len - digits.len());
        format!("{}{}.0", digits, padding)
    } else {
        format!("{}.{}", &digits[..int_len], &digits[int_len..])
    }
}

fn scientific_notation(digits: &str, exponent: i32) -> String {
    let (first, rest) = digits.split_at(1);
    let rest = if rest.is_empty() { "0" } else { rest };
    format!("{}.{}E{}", first, rest, exponent)
}

use crate::units::error::UnitError;
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Decimal literal with optional sign, exponent and type suffix.
    /// Examples: "1", "-2.5", "1.", ".5", "1e3", "2.5E-4", "10d", "3f"
    static ref NUMBER_PATTERN: Regex = Regex::new(
        r"^[+-]?([0-9]+\.?[0-9]*|\.[0-9]+)([eE][+-]?[0-9]+)?[fFdD]?$"
    ).unwrap();
}

/// Check if text would parse as an input value
pub fn looks_like_number(s: &str) -> bool {
    parse_value(s).is_ok()
}

/// Parse input text into a finite value.
///
/// Leading and trailing spaces and control characters are ignored.
pub fn parse_value(s: &str) -> Result<f64, UnitError> {
    let trimmed = trim_controls(s);
    if !NUMBER_PATTERN.is_match(trimmed) {
        return Err(UnitError::InvalidNumber(s.to_string()));
    }

    let literal = trimmed.trim_end_matches(['f', 'F', 'd', 'D']);
    match literal.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(UnitError::InvalidNumber(s.to_string())),
    }
}

fn trim_controls(s: &str) -> &str {
    s.trim_matches(|c: char| c <= ' ')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_number_detection() {
        assert!(looks_like_number("1"));
        assert!(looks_like_number("-2.5"));
        assert!(looks_like_number("+3"));
        assert!(looks_like_number("1."));
        assert!(looks_like_number(".5"));
        assert!(looks_like_number("1e3"));
        assert!(looks_like_number("2.5E-4"));
        assert!(looks_like_number(" 42 "));
        assert!(looks_like_number("10d"));

        assert!(!looks_like_number(""));
        assert!(!looks_like_number("abc"));
        assert!(!looks_like_number("-"));
        assert!(!looks_like_number("."));
        assert!(!looks_like_number("1,5"));
        assert!(!looks_like_number("0x10"));
        assert!(!looks_like_number("1e"));
        assert!(!looks_like_number("NaN"));
        assert!(!looks_like_number("Infinity"));
        assert!(!looks_like_number("1e999"));
        assert!(!looks_like_number("١٢"));
    }

    #[test]
    fn test_parse_value() {
        assert_eq!(parse_value("1").unwrap(), 1.0);
        assert_eq!(parse_value("-2.5").unwrap(), -2.5);
        assert_eq!(parse_value("1.").unwrap(), 1.0);
        assert_eq!(parse_value(".5").unwrap(), 0.5);
        assert_eq!(parse_value("1e3").unwrap(), 1000.0);
        assert_eq!(parse_value("\t7\n").unwrap(), 7.0);
        assert_eq!(parse_value("3f").unwrap(), 3.0);
    }

    #[test]
    fn test_parse_value_rejects() {
        assert_eq!(
            parse_value("abc"),
            Err(UnitError::InvalidNumber("abc".to_string()))
        );
        assert!(parse_value("").is_err());
        assert!(parse_value("   ").is_err());
        assert!(parse_value("1 2").is_err());
        assert!(parse_value("1e999").is_err());
        assert!(parse_value("١٢").is_err());
        assert!(parse_value("１２").is_err());
    }
}

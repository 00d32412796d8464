use crate::units::catalog::factor_or_neutral;
use crate::units::detector::parse_value;
use crate::units::formatter::format_number;
use crate::units::temperature::convert_temperature;
use crate::units::types::{Category, ConversionRequest, ConversionResult};

/// Fractional digits kept in every rounded result
pub const RESULT_DECIMALS: u32 = 2;

/// Convert numeric text between two units of a category.
///
/// Never fails. Unparseable text gives [`ConversionResult::Empty`], an
/// unknown linear unit counts as factor 1.0, and a temperature pair
/// without a formula passes the input through unrounded.
pub fn convert(
    category: Category,
    from_unit: &str,
    to_unit: &str,
    input: &str,
) -> ConversionResult {
    let value = match parse_value(input) {
        Ok(value) => value,
        Err(e) => {
            tracing::trace!("{}", e);
            return ConversionResult::Empty;
        }
    };

    match category {
        Category::Temperature => match convert_temperature(value, from_unit, to_unit) {
            Some(converted) => ConversionResult::Value(round_to(converted, RESULT_DECIMALS)),
            None => {
                tracing::debug!(
                    from = from_unit,
                    to = to_unit,
                    "no temperature formula for pair, passing input through"
                );
                ConversionResult::Value(value)
            }
        },
        Category::Length | Category::Weight => {
            let converted = convert_linear(category, value, from_unit, to_unit);
            ConversionResult::Value(round_to(converted, RESULT_DECIMALS))
        }
    }
}

/// String-level contract: category, units and input as text, display
/// string out (empty when the input does not parse).
///
/// A category name outside the catalog is not rejected: it takes the
/// linear path with no known units, so both factors are 1.0.
pub fn convert_str(category: &str, from_unit: &str, to_unit: &str, input: &str) -> String {
    match category.parse::<Category>() {
        Ok(category) => convert(category, from_unit, to_unit, input).to_string(),
        Err(e) => {
            tracing::debug!("{}, converting with neutral factors", e);
            match parse_value(input) {
                Ok(value) => format_number(round_to(value, RESULT_DECIMALS)),
                Err(_) => String::new(),
            }
        }
    }
}

impl ConversionRequest {
    pub fn convert(&self) -> ConversionResult {
        convert(self.category, &self.from_unit, &self.to_unit, &self.input)
    }
}

/// `value * factor(from) / factor(to)` through the category's base unit
pub fn convert_linear(category: Category, value: f64, from_unit: &str, to_unit: &str) -> f64 {
    let from_factor = factor_or_neutral(category, from_unit);
    let to_factor = factor_or_neutral(category, to_unit);
    value * from_factor / to_factor
}

/// Above this magnitude a scaled value has no fractional part left
const EXACT_INTEGER_LIMIT: f64 = 4_503_599_627_370_496.0; // 2^52

/// Round half up at the given number of fractional digits
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    let scaled = value * factor;
    if !scaled.is_finite() || scaled.abs() >= EXACT_INTEGER_LIMIT {
        return value;
    }

    // scaled - floor is exact, so ties are decided without a second rounding
    let floor = scaled.floor();
    let rounded = if scaled - floor >= 0.5 {
        floor + 1.0
    } else {
        floor
    };
    rounded / factor
}

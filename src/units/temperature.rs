use serde::Serialize;

const KELVIN_OFFSET: f64 = 273.15;
const FAHRENHEIT_OFFSET: f64 = 32.0;

/// Temperature scales known to the catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum TemperatureScale {
    Celsius,
    Fahrenheit,
    Kelvin,
}

impl TemperatureScale {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "Celsius" => Some(TemperatureScale::Celsius),
            "Fahrenheit" => Some(TemperatureScale::Fahrenheit),
            "Kelvin" => Some(TemperatureScale::Kelvin),
            _ => None,
        }
    }
}

/// Apply one of the six directed formulas.
/// Returns None when the pair has no formula (same scale, or unknown name).
pub fn convert_temperature(value: f64, from: &str, to: &str) -> Option<f64> {
    use TemperatureScale::*;

    let from = TemperatureScale::from_name(from)?;
    let to = TemperatureScale::from_name(to)?;

    match (from, to) {
        (Celsius, Fahrenheit) => Some(value * 9.0 / 5.0 + FAHRENHEIT_OFFSET),
        (Celsius, Kelvin) => Some(value + KELVIN_OFFSET),
        (Fahrenheit, Celsius) => Some((value - FAHRENHEIT_OFFSET) * 5.0 / 9.0),
        (Fahrenheit, Kelvin) => Some((value - FAHRENHEIT_OFFSET) * 5.0 / 9.0 + KELVIN_OFFSET),
        (Kelvin, Celsius) => Some(value - KELVIN_OFFSET),
        (Kelvin, Fahrenheit) => Some((value - KELVIN_OFFSET) * 9.0 / 5.0 + FAHRENHEIT_OFFSET),
        (Celsius, Celsius) | (Fahrenheit, Fahrenheit) | (Kelvin, Kelvin) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: Option<f64>, expected: f64) {
        let actual = actual.expect("expected a formula to apply");
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {}, got {}",
            expected,
            actual
        );
    }

    #[test]
    fn test_six_directed_formulas() {
        assert_close(convert_temperature(100.0, "Celsius", "Fahrenheit"), 212.0);
        assert_close(convert_temperature(0.0, "Celsius", "Kelvin"), 273.15);
        assert_close(convert_temperature(212.0, "Fahrenheit", "Celsius"), 100.0);
        assert_close(convert_temperature(32.0, "Fahrenheit", "Kelvin"), 273.15);
        assert_close(convert_temperature(273.15, "Kelvin", "Celsius"), 0.0);
        assert_close(convert_temperature(373.15, "Kelvin", "Fahrenheit"), 212.0);
    }

    #[test]
    fn test_minus_forty_is_shared() {
        assert_close(convert_temperature(-40.0, "Celsius", "Fahrenheit"), -40.0);
        assert_close(convert_temperature(-40.0, "Fahrenheit", "Celsius"), -40.0);
    }

    #[test]
    fn test_unmatched_pairs() {
        assert_eq!(convert_temperature(10.0, "Celsius", "Celsius"), None);
        assert_eq!(convert_temperature(10.0, "Kelvin", "Kelvin"), None);
        assert_eq!(convert_temperature(10.0, "Rankine", "Celsius"), None);
        assert_eq!(convert_temperature(10.0, "Celsius", "celsius"), None);
    }
}

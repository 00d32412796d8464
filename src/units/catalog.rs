use crate::units::temperature::TemperatureScale;
use crate::units::types::{Category, Scale, Unit};
use lazy_static::lazy_static;
use std::collections::HashMap;

macro_rules! linear {
    ($category:expr, $name:expr, $factor:expr) => {
        Unit {
            name: $name,
            category: $category,
            scale: Scale::Linear($factor),
        }
    };
}

// Base unit: Meters
const LENGTH_UNITS: &[Unit] = &[
    linear!(Category::Length, "Millimeters", 0.001),
    linear!(Category::Length, "Centimeters", 0.01),
    linear!(Category::Length, "Meters", 1.0),
    linear!(Category::Length, "Kilometers", 1000.0),
    linear!(Category::Length, "Inches", 0.0254),
    linear!(Category::Length, "Feet", 0.3048),
    linear!(Category::Length, "Yards", 0.9144),
    linear!(Category::Length, "Miles", 1609.34),
];

// Base unit: Grams
const WEIGHT_UNITS: &[Unit] = &[
    linear!(Category::Weight, "Grams", 1.0),
    linear!(Category::Weight, "Kilograms", 1000.0),
    linear!(Category::Weight, "Pounds", 453.592),
    linear!(Category::Weight, "Ounces", 28.3495),
];

const TEMPERATURE_UNITS: &[Unit] = &[
    Unit {
        name: "Celsius",
        category: Category::Temperature,
        scale: Scale::Temperature(TemperatureScale::Celsius),
    },
    Unit {
        name: "Fahrenheit",
        category: Category::Temperature,
        scale: Scale::Temperature(TemperatureScale::Fahrenheit),
    },
    Unit {
        name: "Kelvin",
        category: Category::Temperature,
        scale: Scale::Temperature(TemperatureScale::Kelvin),
    },
];

lazy_static! {
    /// Name lookup built once per process. The declared tables stay the
    /// source of ordering.
    static ref UNIT_INDEX: HashMap<Category, HashMap<&'static str, &'static Unit>> = {
        Category::ALL
            .into_iter()
            .map(|category| {
                let by_name = units(category).iter().map(|u| (u.name, u)).collect();
                (category, by_name)
            })
            .collect()
    };
}

/// Units of a category in declaration order
pub fn units(category: Category) -> &'static [Unit] {
    match category {
        Category::Length => LENGTH_UNITS,
        Category::Weight => WEIGHT_UNITS,
        Category::Temperature => TEMPERATURE_UNITS,
    }
}

pub fn unit_names(category: Category) -> Vec<&'static str> {
    units(category).iter().map(|u| u.name).collect()
}

pub fn find_unit(category: Category, name: &str) -> Option<&'static Unit> {
    UNIT_INDEX
        .get(&category)
        .and_then(|by_name| by_name.get(name))
        .copied()
}

pub fn contains_unit(category: Category, name: &str) -> bool {
    find_unit(category, name).is_some()
}

/// First declared unit; selecting a category resets both selections to it
pub fn first_unit(category: Category) -> &'static Unit {
    // Every table is non-empty
    &units(category)[0]
}

/// Scale factor of a linear unit, falling back to 1.0 when the unit is
/// not in the category
pub fn factor_or_neutral(category: Category, name: &str) -> f64 {
    match find_unit(category, name).and_then(Unit::factor) {
        Some(factor) => factor,
        None => {
            tracing::debug!(%category, unit = name, "unit not found, using factor 1.0");
            1.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_declaration_order() {
        assert_eq!(
            unit_names(Category::Length),
            vec![
                "Millimeters",
                "Centimeters",
                "Meters",
                "Kilometers",
                "Inches",
                "Feet",
                "Yards",
                "Miles"
            ]
        );
        assert_eq!(
            unit_names(Category::Weight),
            vec!["Grams", "Kilograms", "Pounds", "Ounces"]
        );
        assert_eq!(
            unit_names(Category::Temperature),
            vec!["Celsius", "Fahrenheit", "Kelvin"]
        );
    }

    #[test]
    fn test_first_unit() {
        assert_eq!(first_unit(Category::Length).name, "Millimeters");
        assert_eq!(first_unit(Category::Weight).name, "Grams");
        assert_eq!(first_unit(Category::Temperature).name, "Celsius");
    }

    #[test]
    fn test_names_unique_and_scoped() {
        for category in Category::ALL {
            let names: HashSet<_> = units(category).iter().map(|u| u.name).collect();
            assert_eq!(names.len(), units(category).len());
            for unit in units(category) {
                assert_eq!(unit.category, category);
            }
        }
        assert!(contains_unit(Category::Length, "Meters"));
        assert!(!contains_unit(Category::Weight, "Meters"));
    }

    #[test]
    fn test_linear_factors_positive_with_base_unit() {
        for category in Category::ALL.into_iter().filter(Category::is_linear) {
            for unit in units(category) {
                let factor = unit.factor().expect("linear unit has a factor");
                assert!(factor > 0.0, "{} has factor {}", unit.name, factor);
            }
            assert!(units(category).iter().any(|u| u.factor() == Some(1.0)));
        }
    }

    #[test]
    fn test_temperature_units_have_no_factor() {
        for unit in units(Category::Temperature) {
            assert_eq!(unit.factor(), None);
        }
    }

    #[test]
    fn test_factor_fallback() {
        assert_eq!(factor_or_neutral(Category::Length, "Kilometers"), 1000.0);
        assert_eq!(factor_or_neutral(Category::Length, "Furlongs"), 1.0);
        assert_eq!(factor_or_neutral(Category::Weight, "Meters"), 1.0);
    }
}

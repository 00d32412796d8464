use crate::units::error::UnitError;
use crate::units::temperature::TemperatureScale;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Unit family. Each category has its own conversion rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub enum Category {
    Length,
    Weight,
    Temperature,
}

impl Category {
    /// All categories in declaration order
    pub const ALL: [Category; 3] = [Category::Length, Category::Weight, Category::Temperature];

    pub fn name(&self) -> &'static str {
        match self {
            Category::Length => "Length",
            Category::Weight => "Weight",
            Category::Temperature => "Temperature",
        }
    }

    /// Linear categories convert through a base unit by scale factors
    pub fn is_linear(&self) -> bool {
        !matches!(self, Category::Temperature)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Category {
    type Err = UnitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.name() == s)
            .ok_or_else(|| UnitError::UnknownCategory(s.to_string()))
    }
}

/// How a unit relates to the rest of its category
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Scale {
    /// Multiplier into the category's base unit (strictly positive)
    Linear(f64),
    /// Temperature units convert through named formulas
    Temperature(TemperatureScale),
}

/// A named unit scoped to one category
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Unit {
    pub name: &'static str,
    pub category: Category,
    pub scale: Scale,
}

impl Unit {
    pub fn factor(&self) -> Option<f64> {
        match self.scale {
            Scale::Linear(factor) => Some(factor),
            Scale::Temperature(_) => None,
        }
    }
}

/// One conversion, built anew on every edit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionRequest {
    pub category: Category,
    pub from_unit: String,
    pub to_unit: String,
    pub input: String,
}

impl ConversionRequest {
    pub fn new(
        category: Category,
        from_unit: impl Into<String>,
        to_unit: impl Into<String>,
        input: impl Into<String>,
    ) -> Self {
        Self {
            category,
            from_unit: from_unit.into(),
            to_unit: to_unit.into(),
            input: input.into(),
        }
    }
}

/// Outcome of a conversion
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum ConversionResult {
    /// Input did not parse; the presentation layer shows a placeholder
    #[default]
    Empty,
    Value(f64),
}

impl ConversionResult {
    pub fn is_empty(&self) -> bool {
        matches!(self, ConversionResult::Empty)
    }

    pub fn value(&self) -> Option<f64> {
        match self {
            ConversionResult::Empty => None,
            ConversionResult::Value(v) => Some(*v),
        }
    }

    /// Display string, or the placeholder when empty
    pub fn display_or(&self, placeholder: &str) -> String {
        match self {
            ConversionResult::Empty => placeholder.to_string(),
            ConversionResult::Value(v) => crate::units::formatter::format_number(*v),
        }
    }
}

impl fmt::Display for ConversionResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConversionResult::Empty => Ok(()),
            ConversionResult::Value(v) => {
                f.write_str(&crate::units::formatter::format_number(*v))
            }
        }
    }
}

impl Serialize for ConversionResult {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            ConversionResult::Empty => serializer.serialize_none(),
            ConversionResult::Value(_) => serializer.serialize_some(&self.to_string()),
        }
    }
}

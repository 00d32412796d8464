// Unit catalog and the value plumbing around it:
// numeric text screening, display formatting and temperature formulas.

pub mod catalog;
pub mod detector;
pub mod error;
pub mod formatter;
pub mod temperature;
pub mod types;

pub use catalog::{find_unit, first_unit, unit_names, units};
pub use detector::{looks_like_number, parse_value};
pub use error::UnitError;
pub use formatter::format_number;
pub use temperature::{convert_temperature, TemperatureScale};
pub use types::{Category, ConversionRequest, ConversionResult, Scale, Unit};

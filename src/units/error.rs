use crate::units::types::Category;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum UnitError {
    #[error("Unknown category: {0}")]
    UnknownCategory(String),
    #[error("Unknown unit '{unit}' for category {category}")]
    UnknownUnit { category: Category, unit: String },
    #[error("Invalid number: {0:?}")]
    InvalidNumber(String),
}

use crate::convert::engine::convert;
use crate::session::config::{DefaultsConfig, DisplayConfig};
use crate::units::catalog::{contains_unit, first_unit};
use crate::units::error::UnitError;
use crate::units::types::{Category, ConversionResult};
use std::fmt;

/// One user edit. Every edit triggers a recomputation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Edit {
    Input(String),
    Category(Category),
    FromUnit(String),
    ToUnit(String),
    Clear,
}

impl Edit {
    /// Parse a line of live input: `:category X`, `:from X`, `:to X` and
    /// `:clear` are commands, anything else is new input text.
    pub fn parse_line(line: &str) -> Result<Self, UnitError> {
        let Some(command) = line.strip_prefix(':') else {
            return Ok(Edit::Input(line.to_string()));
        };

        let (name, arg) = match command.split_once(char::is_whitespace) {
            Some((name, arg)) => (name, arg.trim()),
            None => (command.trim(), ""),
        };

        match name {
            "category" => Ok(Edit::Category(arg.parse()?)),
            "from" => Ok(Edit::FromUnit(arg.to_string())),
            "to" => Ok(Edit::ToUnit(arg.to_string())),
            "clear" => Ok(Edit::Clear),
            _ => Ok(Edit::Input(line.to_string())),
        }
    }
}

type Listener = Box<dyn FnMut(&ConversionResult)>;

/// Current selections, input text and latest result.
///
/// Selections always belong to the selected category. The result is
/// recomputed after every edit and handed to the registered listeners;
/// the latest edit wins.
pub struct ConverterState {
    category: Category,
    input: String,
    from_unit: String,
    to_unit: String,
    result: ConversionResult,
    listeners: Vec<Listener>,
}

impl Default for ConverterState {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ConverterState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConverterState")
            .field("category", &self.category)
            .field("input", &self.input)
            .field("from_unit", &self.from_unit)
            .field("to_unit", &self.to_unit)
            .field("result", &self.result)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl ConverterState {
    /// Length, Meters to Meters, no input
    pub fn new() -> Self {
        Self {
            category: Category::Length,
            input: String::new(),
            from_unit: "Meters".to_string(),
            to_unit: "Meters".to_string(),
            result: ConversionResult::Empty,
            listeners: Vec::new(),
        }
    }

    pub fn with_defaults(defaults: &DefaultsConfig) -> Result<Self, UnitError> {
        let category = defaults.category;
        for unit in [&defaults.from, &defaults.to] {
            if !contains_unit(category, unit) {
                return Err(UnitError::UnknownUnit {
                    category,
                    unit: unit.clone(),
                });
            }
        }

        Ok(Self {
            category,
            from_unit: defaults.from.clone(),
            to_unit: defaults.to.clone(),
            ..Self::new()
        })
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn from_unit(&self) -> &str {
        &self.from_unit
    }

    pub fn to_unit(&self) -> &str {
        &self.to_unit
    }

    pub fn result(&self) -> ConversionResult {
        self.result
    }

    /// Register a callback run with every new result
    pub fn subscribe(&mut self, listener: impl FnMut(&ConversionResult) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    pub fn set_input(&mut self, text: impl Into<String>) -> ConversionResult {
        self.input = text.into();
        self.recompute()
    }

    /// Switch category; both selections reset to its first declared unit
    pub fn select_category(&mut self, category: Category) -> ConversionResult {
        let first = first_unit(category).name;
        self.category = category;
        self.from_unit = first.to_string();
        self.to_unit = first.to_string();
        self.recompute()
    }

    pub fn select_from_unit(&mut self, name: &str) -> Result<ConversionResult, UnitError> {
        self.check_unit(name)?;
        self.from_unit = name.to_string();
        Ok(self.recompute())
    }

    pub fn select_to_unit(&mut self, name: &str) -> Result<ConversionResult, UnitError> {
        self.check_unit(name)?;
        self.to_unit = name.to_string();
        Ok(self.recompute())
    }

    /// Empty the input and the result
    pub fn clear(&mut self) -> ConversionResult {
        self.input.clear();
        self.result = ConversionResult::Empty;
        self.notify();
        self.result
    }

    pub fn apply(&mut self, edit: Edit) -> Result<ConversionResult, UnitError> {
        match edit {
            Edit::Input(text) => Ok(self.set_input(text)),
            Edit::Category(category) => Ok(self.select_category(category)),
            Edit::FromUnit(name) => self.select_from_unit(&name),
            Edit::ToUnit(name) => self.select_to_unit(&name),
            Edit::Clear => Ok(self.clear()),
        }
    }

    /// `"<value> <unit>"`, or the placeholder when there is no value
    pub fn display(&self, placeholder: &str) -> String {
        match self.result {
            ConversionResult::Empty => placeholder.to_string(),
            ConversionResult::Value(_) => format!("{} {}", self.result, self.to_unit),
        }
    }

    pub fn display_with(&self, config: &DisplayConfig) -> String {
        if config.show_unit {
            self.display(&config.placeholder)
        } else {
            self.result.display_or(&config.placeholder)
        }
    }

    fn check_unit(&self, name: &str) -> Result<(), UnitError> {
        if contains_unit(self.category, name) {
            Ok(())
        } else {
            Err(UnitError::UnknownUnit {
                category: self.category,
                unit: name.to_string(),
            })
        }
    }

    fn recompute(&mut self) -> ConversionResult {
        self.result = convert(self.category, &self.from_unit, &self.to_unit, &self.input);
        tracing::trace!(
            category = %self.category,
            from = %self.from_unit,
            to = %self.to_unit,
            input = %self.input,
            result = %self.result,
            "recomputed"
        );
        self.notify();
        self.result
    }

    fn notify(&mut self) {
        let result = self.result;
        for listener in &mut self.listeners {
            listener(&result);
        }
    }
}

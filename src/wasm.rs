// WebAssembly bindings for the converter
use crate::convert;
use crate::session::{Config, ConverterState};
use crate::units::{self, Category, UnitError};
use js_sys::Array;
use wasm_bindgen::prelude::*;

fn to_js_error(e: UnitError) -> JsValue {
    JsValue::from_str(&e.to_string())
}

#[wasm_bindgen]
pub struct ConverterWasm {
    state: ConverterState,
    config: Config,
}

impl Default for ConverterWasm {
    fn default() -> Self {
        Self::new()
    }
}

#[wasm_bindgen]
impl ConverterWasm {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            state: ConverterState::new(),
            config: Config::empty(),
        }
    }

    /// Build a session from TOML configuration content
    #[wasm_bindgen]
    pub fn with_config(config_content: &str) -> Result<ConverterWasm, JsValue> {
        let config = Config::load_from_str(config_content)
            .map_err(|e| JsValue::from_str(&format!("Failed to load config: {}", e)))?;
        let state = config
            .initial_state()
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(Self { state, config })
    }

    /// Stateless conversion; returns "" when the input does not parse
    #[wasm_bindgen]
    pub fn convert(&self, category: &str, from_unit: &str, to_unit: &str, input: &str) -> String {
        convert::convert_str(category, from_unit, to_unit, input)
    }

    /// Category names in declaration order
    #[wasm_bindgen]
    pub fn categories(&self) -> Array {
        Category::ALL
            .iter()
            .map(|c| JsValue::from_str(c.name()))
            .collect()
    }

    /// Unit names of a category in declaration order
    #[wasm_bindgen]
    pub fn units(&self, category: &str) -> Result<Array, JsValue> {
        let category: Category = category.parse().map_err(to_js_error)?;
        Ok(units::unit_names(category)
            .into_iter()
            .map(JsValue::from_str)
            .collect())
    }

    /// Whole catalog as JSON: {"Length": [{"name": ..., "scale": ...}], ...}
    #[wasm_bindgen]
    pub fn catalog_json(&self) -> Result<String, JsValue> {
        let mut catalog = serde_json::Map::new();
        for category in Category::ALL {
            let units = serde_json::to_value(units::units(category))
                .map_err(|e| JsValue::from_str(&format!("Failed to serialize units: {}", e)))?;
            catalog.insert(category.name().to_string(), units);
        }

        serde_json::to_string(&catalog)
            .map_err(|e| JsValue::from_str(&format!("Failed to serialize catalog: {}", e)))
    }

    #[wasm_bindgen]
    pub fn set_input(&mut self, text: &str) -> String {
        self.state.set_input(text).to_string()
    }

    #[wasm_bindgen]
    pub fn select_category(&mut self, category: &str) -> Result<String, JsValue> {
        let category: Category = category.parse().map_err(to_js_error)?;
        Ok(self.state.select_category(category).to_string())
    }

    #[wasm_bindgen]
    pub fn select_from_unit(&mut self, name: &str) -> Result<String, JsValue> {
        self.state
            .select_from_unit(name)
            .map(|r| r.to_string())
            .map_err(to_js_error)
    }

    #[wasm_bindgen]
    pub fn select_to_unit(&mut self, name: &str) -> Result<String, JsValue> {
        self.state
            .select_to_unit(name)
            .map(|r| r.to_string())
            .map_err(to_js_error)
    }

    #[wasm_bindgen]
    pub fn clear(&mut self) {
        self.state.clear();
    }

    #[wasm_bindgen]
    pub fn category(&self) -> String {
        self.state.category().to_string()
    }

    #[wasm_bindgen]
    pub fn from_unit(&self) -> String {
        self.state.from_unit().to_string()
    }

    #[wasm_bindgen]
    pub fn to_unit(&self) -> String {
        self.state.to_unit().to_string()
    }

    /// Result line for the screen, or the placeholder
    #[wasm_bindgen]
    pub fn display(&self) -> String {
        self.state.display_with(&self.config.display)
    }
}

use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("A full-page scroll needs at least one section")]
    NoSections,
    #[error("Initial section {initial} is out of range for {total} sections")]
    InitialSectionOutOfRange { initial: usize, total: usize },
    #[error("Failed to parse config overrides: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum RegistryError {
    #[error("Section identifier '{id}' is already registered at index {existing}, not {attempted}")]
    DuplicateIdentifier {
        id: String,
        existing: usize,
        attempted: usize,
    },
    #[error("Section identifier is empty")]
    EmptyIdentifier,
}

#[derive(Error, Debug)]
pub enum DomError {
    #[error("No global window")]
    NoWindow,
    #[error("Window has no document")]
    NoDocument,
    #[error("Document has no body")]
    NoBody,
    #[error("DOM call failed: {0}")]
    Js(String),
}

impl From<JsValue> for DomError {
    fn from(value: JsValue) -> Self {
        DomError::Js(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }
}

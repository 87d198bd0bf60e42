/// Errors raised while wiring the scene to a browser canvas
use dice_core::GeometryError;
use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Debug, Error)]
pub enum WebError {
    #[error("no global window")]
    MissingWindow,
    #[error("window has no document")]
    MissingDocument,
    #[error("no element with id {0:?}")]
    MissingCanvas(String),
    #[error("element {0:?} is not a canvas")]
    NotACanvas(String),
    #[error("WebGL2 is not available on this canvas")]
    ContextUnavailable,
    #[error("failed to create {0}")]
    Resource(&'static str),
    #[error("linked program has no active attribute {0}")]
    MissingAttribute(&'static str),
    #[error("shader compilation failed: {0}")]
    Shader(String),
    #[error("program link failed: {0}")]
    Link(String),
    #[error(transparent)]
    Geometry(#[from] GeometryError),
    #[error("browser call failed: {0}")]
    Js(String),
}

impl From<JsValue> for WebError {
    fn from(value: JsValue) -> Self {
        WebError::Js(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}

impl From<WebError> for JsValue {
    fn from(error: WebError) -> Self {
        JsValue::from_str(&error.to_string())
    }
}

//! Client Errors

use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ClientError {
    #[error("Browser window unavailable")]
    NoWindow,

    #[error("Network error: {0}")]
    Network(String),

    #[error("Erro ao buscar clientes: {0}")]
    Status(u16),

    #[error("Malformed response: {0}")]
    Decode(String),

    #[error("Cadastro recusado: {0}")]
    Rejected(String),
}

impl ClientError {
    /// Wrap a JS exception raised by fetch or one of its promises
    pub fn network(err: JsValue) -> Self {
        let text = err
            .as_string()
            .or_else(|| err.dyn_ref::<js_sys::Error>().map(|e| String::from(e.message())))
            .unwrap_or_else(|| format!("{:?}", err));
        Self::Network(text)
    }
}

impl From<serde_json::Error> for ClientError {
    fn from(err: serde_json::Error) -> Self {
        Self::Decode(err.to_string())
    }
}

/// Form input rejected before any request is made
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("E-mail inválido")]
    InvalidEmail,
}

//! Intake Backend API
//!
//! Frontend bindings to the backend's HTTP routes, organized by route.

mod cadastro;
mod clientes;

use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, Response};

use crate::error::ClientError;

/// Status and body text of a completed request
#[derive(Debug, Clone, PartialEq)]
pub struct HttpReply {
    pub status: u16,
    pub body: String,
}

impl HttpReply {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Run a request through `window.fetch` and read the whole body as text
async fn send(request: &Request) -> Result<HttpReply, ClientError> {
    let window = web_sys::window().ok_or(ClientError::NoWindow)?;

    let value = JsFuture::from(window.fetch_with_request(request))
        .await
        .map_err(ClientError::network)?;
    let response: Response = value.dyn_into().map_err(ClientError::network)?;

    let text = JsFuture::from(response.text().map_err(ClientError::network)?)
        .await
        .map_err(ClientError::network)?;

    Ok(HttpReply {
        status: response.status(),
        body: text.as_string().unwrap_or_default(),
    })
}

// Re-export all public items
pub use cadastro::*;
pub use clientes::*;

//! Client Listing
//!
//! `GET /clientes`

use web_sys::Request;

use super::{send, HttpReply};
use crate::config::AppConfig;
use crate::error::ClientError;
use crate::models::ClientRecord;

pub async fn list_clientes(config: &AppConfig) -> Result<Vec<ClientRecord>, ClientError> {
    let url = config.endpoint("clientes");
    log::debug!("GET {}", url);

    let request = Request::new_with_str(&url).map_err(ClientError::network)?;
    let reply = send(&request).await?;
    decode_client_list(&reply)
}

/// Non-2xx replies are failures; otherwise the body must be a record array
pub fn decode_client_list(reply: &HttpReply) -> Result<Vec<ClientRecord>, ClientError> {
    if !reply.is_success() {
        return Err(ClientError::Status(reply.status));
    }
    Ok(serde_json::from_str(&reply.body)?)
}

//! Client Registration
//!
//! `POST /cadastrar_cliente` with a multipart body.

use web_sys::{File, FormData, Request, RequestInit};

use super::{send, HttpReply};
use crate::config::AppConfig;
use crate::error::ClientError;
use crate::models::RegistrationReply;
use crate::validation::NewClient;

/// Submit a validated form; returns the backend's confirmation message
pub async fn cadastrar_cliente(
    config: &AppConfig,
    client: &NewClient,
    referencia: Option<File>,
) -> Result<String, ClientError> {
    let url = config.endpoint("cadastrar_cliente");

    let form = FormData::new().map_err(ClientError::network)?;
    for (name, value) in client.form_fields() {
        form.append_with_str(name, value).map_err(ClientError::network)?;
    }
    if let Some(file) = referencia {
        form.append_with_blob_and_filename("referencia", &file, &file.name())
            .map_err(ClientError::network)?;
    }

    let init = RequestInit::new();
    init.set_method("POST");
    init.set_body(&form);
    let request = Request::new_with_str_and_init(&url, &init).map_err(ClientError::network)?;

    log::debug!("POST {}", url);
    let reply = send(&request).await?;
    decode_registration(&reply)
}

/// Success is signalled by a `message` field, whatever the status code
pub fn decode_registration(reply: &HttpReply) -> Result<String, ClientError> {
    let parsed: RegistrationReply = serde_json::from_str(&reply.body)?;
    match parsed.message {
        Some(message) => Ok(message),
        None => Err(ClientError::Rejected(
            parsed.error.unwrap_or_else(|| format!("HTTP {}", reply.status)),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reply(status: u16, body: &str) -> HttpReply {
        HttpReply { status, body: body.to_string() }
    }

    #[test]
    fn test_message_means_success() {
        assert_eq!(decode_registration(&reply(201, r#"{"message":"ok"}"#)).unwrap(), "ok");
    }

    #[test]
    fn test_backend_error_text() {
        let err = decode_registration(&reply(500, r#"{"error":"Erro ao cadastrar o cliente"}"#)).unwrap_err();
        assert_eq!(err, ClientError::Rejected("Erro ao cadastrar o cliente".to_string()));
    }

    #[test]
    fn test_reply_without_marker() {
        let err = decode_registration(&reply(200, "{}")).unwrap_err();
        assert_eq!(err, ClientError::Rejected("HTTP 200".to_string()));
    }

    #[test]
    fn test_non_json_reply() {
        let err = decode_registration(&reply(502, "Bad Gateway")).unwrap_err();
        assert!(matches!(err, ClientError::Decode(_)));
    }
}

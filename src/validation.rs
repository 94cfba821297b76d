//! Registration Form Validation

use regex::Regex;
use std::sync::OnceLock;

use crate::error::ValidationError;

static EMAIL_PATTERN: OnceLock<Regex> = OnceLock::new();

fn email_pattern() -> &'static Regex {
    EMAIL_PATTERN.get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email pattern"))
}

/// Basic `local@domain.tld` check on the trimmed address
pub fn is_valid_email(email: &str) -> bool {
    email_pattern().is_match(email.trim())
}

/// Values typed into the registration form
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewClient {
    pub nome: String,
    pub tipo_projeto: String,
    pub urgencia: String,
    pub email: String,
    pub descricao: String,
}

impl NewClient {
    /// Check the form and normalize it for submission
    pub fn validate(&self) -> Result<NewClient, ValidationError> {
        if !is_valid_email(&self.email) {
            return Err(ValidationError::InvalidEmail);
        }
        Ok(NewClient {
            nome: self.nome.trim().to_string(),
            email: self.email.trim().to_string(),
            ..self.clone()
        })
    }

    /// Multipart text fields in submission order
    pub fn form_fields(&self) -> [(&'static str, &str); 5] {
        [
            ("nome", self.nome.as_str()),
            ("tipo_projeto", self.tipo_projeto.as_str()),
            ("urgencia", self.urgencia.as_str()),
            ("email", self.email.as_str()),
            ("descricao", self.descricao.as_str()),
        ]
    }
}

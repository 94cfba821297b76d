//! Frontend Models
//!
//! Data structures matching the intake backend's JSON.

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use serde::{Deserialize, Serialize};

/// Characters escaped in the reference file segment of an upload link
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// Client record as listed by `GET /clientes`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientRecord {
    pub id: i64,
    pub nome: String,
    pub email: String,
    #[serde(default)]
    pub tipo_projeto: Option<String>,
    #[serde(default)]
    pub urgencia: Option<String>,
    pub descricao: String,
    #[serde(default)]
    pub referencia: Option<String>,
}

impl ClientRecord {
    /// Stored reference file name, if the record has one
    pub fn reference(&self) -> Option<&str> {
        self.referencia.as_deref().filter(|r| !r.is_empty())
    }
}

/// Reply of `POST /cadastrar_cliente`
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RegistrationReply {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

/// Presentation model for one client card
#[derive(Debug, Clone, PartialEq)]
pub struct ClientCard {
    pub id: i64,
    pub title: String,
    /// Labeled lines in display order
    pub lines: Vec<String>,
    pub reference_href: Option<String>,
}

impl ClientCard {
    pub fn from_record(record: &ClientRecord, uploads_base: &str) -> Self {
        let lines = vec![
            format!("ID: {}", record.id),
            format!("e-mail: {}", record.email),
            format!("Tipo de Projeto: {}", record.tipo_projeto.as_deref().unwrap_or_default()),
            format!("Urgência: {}", record.urgencia.as_deref().unwrap_or_default()),
            format!("Descrição: {}", record.descricao),
        ];

        Self {
            id: record.id,
            title: record.nome.clone(),
            lines,
            reference_href: record.reference().map(|r| upload_href(uploads_base, r)),
        }
    }
}

/// Link to a previously uploaded reference file
pub fn upload_href(uploads_base: &str, referencia: &str) -> String {
    let segment = utf8_percent_encode(referencia, PATH_SEGMENT);
    let base = uploads_base.trim_end_matches('/');
    if base.is_empty() {
        segment.to_string()
    } else {
        format!("{}/{}", base, segment)
    }
}

/// Project type options (value, label)
pub const PROJECT_TYPES: &[(&str, &str)] = &[
    ("site", "Site institucional"),
    ("ecommerce", "E-commerce"),
    ("aplicativo", "Aplicativo"),
    ("sistema", "Sistema web"),
    ("outro", "Outro"),
];

/// Urgency options (value, label)
pub const URGENCY_LEVELS: &[(&str, &str)] = &[
    ("baixa", "Baixa"),
    ("media", "Média"),
    ("alta", "Alta"),
];

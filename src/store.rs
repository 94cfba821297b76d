//! Intake Page State Store
//!
//! Visibility flags and data for the list and the form, held in a
//! reactive_stores `Store` so each panel re-renders on its own.

use reactive_stores::Store;

use crate::error::ClientError;
use crate::models::ClientRecord;

/// List section state
#[derive(Clone, Debug, PartialEq)]
pub struct ListPanel {
    /// `#lista-oportunidades`
    pub section_visible: bool,
    /// `#lista-clientes`
    pub container_visible: bool,
    /// `#loading-indicator`
    pub loading_visible: bool,
    /// `#lista-error`
    pub error_visible: bool,
    /// Records currently rendered, in backend order
    pub records: Vec<ClientRecord>,
    /// Ticket of the latest refresh; older completions are dropped
    latest_ticket: u64,
}

impl Default for ListPanel {
    fn default() -> Self {
        Self {
            section_visible: true,
            container_visible: true,
            loading_visible: false,
            error_visible: false,
            records: Vec::new(),
            latest_ticket: 0,
        }
    }
}

impl ListPanel {
    /// Start a refresh and return its ticket
    pub fn begin(&mut self) -> u64 {
        self.latest_ticket += 1;
        self.section_visible = true;
        self.error_visible = false;
        self.container_visible = true;
        self.loading_visible = true;
        self.latest_ticket
    }

    /// Apply a refresh result. Returns false when a newer refresh superseded it.
    pub fn finish(&mut self, ticket: u64, outcome: Result<Vec<ClientRecord>, ClientError>) -> bool {
        if ticket != self.latest_ticket {
            return false;
        }

        match outcome {
            Ok(records) => {
                self.section_visible = !records.is_empty();
                self.records = records;
            }
            Err(_) => {
                self.section_visible = true;
                self.error_visible = true;
                self.container_visible = false;
                self.records.clear();
            }
        }
        self.loading_visible = false;
        true
    }
}

/// Registration form state
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FormPanel {
    /// `error-border` on `#email` and `#email-error` shown
    pub email_error: bool,
    /// `#mensagem-sucesso`
    pub success_visible: bool,
    /// `#mensagem-erro` text
    pub submit_error: Option<String>,
    pub submitting: bool,
}

impl FormPanel {
    pub fn reject_email(&mut self) {
        self.email_error = true;
    }

    pub fn begin_submit(&mut self) {
        self.email_error = false;
        self.success_visible = false;
        self.submit_error = None;
        self.submitting = true;
    }

    /// Returns true when the form should be cleared and the list refreshed
    pub fn finish_submit(&mut self, outcome: &Result<String, ClientError>) -> bool {
        self.submitting = false;
        match outcome {
            Ok(_) => {
                self.success_visible = true;
                true
            }
            Err(err) => {
                self.submit_error = Some(err.to_string());
                false
            }
        }
    }
}

/// Whole page state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct IntakeState {
    pub list: ListPanel,
    pub form: FormPanel,
}

/// Type alias for the store
pub type IntakeStore = Store<IntakeState>;

#[cfg(test)]
mod tests {
    use super::*;

    fn make_record(id: i64) -> ClientRecord {
        ClientRecord {
            id,
            nome: format!("Cliente {}", id),
            email: format!("c{}@x.io", id),
            tipo_projeto: Some("site".to_string()),
            urgencia: Some("media".to_string()),
            descricao: format!("Projeto {}", id),
            referencia: None,
        }
    }

    #[test]
    fn test_refresh_renders_records_in_order() {
        let mut panel = ListPanel::default();
        let ticket = panel.begin();
        assert!(panel.loading_visible);

        assert!(panel.finish(ticket, Ok(vec![make_record(3), make_record(1), make_record(2)])));
        let ids: Vec<i64> = panel.records.iter().map(|r| r.id).collect();
        assert_eq!(ids, [3, 1, 2]);
        assert!(panel.section_visible);
        assert!(!panel.loading_visible);
        assert!(!panel.error_visible);
    }

    #[test]
    fn test_empty_list_hides_section() {
        let mut panel = ListPanel::default();
        let ticket = panel.begin();
        panel.finish(ticket, Ok(Vec::new()));
        assert!(!panel.section_visible);
        assert!(panel.records.is_empty());
        assert!(!panel.loading_visible);
    }

    #[test]
    fn test_error_after_empty_list_is_visible() {
        let mut panel = ListPanel::default();
        let first = panel.begin();
        panel.finish(first, Ok(Vec::new()));
        let second = panel.begin();
        assert!(panel.section_visible);
        panel.finish(second, Err(ClientError::Decode("expected value".to_string())));
        assert!(panel.section_visible);
        assert!(panel.error_visible);
    }

    #[test]
    fn test_error_status_shows_error_panel() {
        let mut panel = ListPanel::default();
        let first = panel.begin();
        panel.finish(first, Ok(vec![make_record(1)]));

        let second = panel.begin();
        panel.finish(second, Err(ClientError::Status(500)));
        assert!(panel.error_visible);
        assert!(!panel.container_visible);
        assert!(panel.records.is_empty());
        assert!(!panel.loading_visible);
    }

    #[test]
    fn test_network_failure_hides_loading() {
        let mut panel = ListPanel::default();
        let ticket = panel.begin();
        panel.finish(ticket, Err(ClientError::Network("TypeError: Failed to fetch".to_string())));
        assert!(!panel.loading_visible);
        assert!(panel.error_visible);
    }

    #[test]
    fn test_refresh_replaces_previous_cards() {
        let mut panel = ListPanel::default();
        let first = panel.begin();
        panel.finish(first, Ok(vec![make_record(1), make_record(2)]));
        let second = panel.begin();
        panel.finish(second, Ok(vec![make_record(3), make_record(1), make_record(2)]));
        assert_eq!(panel.records.len(), 3);
    }

    #[test]
    fn test_retry_after_error_clears_error_panel() {
        let mut panel = ListPanel::default();
        let first = panel.begin();
        panel.finish(first, Err(ClientError::Status(503)));
        let second = panel.begin();
        assert!(!panel.error_visible);
        assert!(panel.container_visible);
        panel.finish(second, Ok(vec![make_record(1)]));
        assert_eq!(panel.records.len(), 1);
    }

    #[test]
    fn test_superseded_refresh_is_dropped() {
        let mut panel = ListPanel::default();
        let older = panel.begin();
        let newer = panel.begin();

        assert!(panel.finish(newer, Ok(vec![make_record(2), make_record(1)])));
        assert!(!panel.finish(older, Ok(vec![make_record(1)])));
        assert_eq!(panel.records.len(), 2);
        assert!(!panel.loading_visible);
    }

    #[test]
    fn test_superseded_refresh_keeps_loading_until_latest() {
        let mut panel = ListPanel::default();
        let older = panel.begin();
        let newer = panel.begin();
        panel.finish(older, Err(ClientError::Status(500)));
        assert!(panel.loading_visible);
        assert!(!panel.error_visible);
        panel.finish(newer, Ok(vec![make_record(1)]));
        assert!(!panel.loading_visible);
    }

    #[test]
    fn test_submit_success() {
        let mut form = FormPanel::default();
        form.reject_email();
        form.begin_submit();
        assert!(!form.email_error);
        assert!(form.submitting);

        assert!(form.finish_submit(&Ok("ok".to_string())));
        assert!(form.success_visible);
        assert!(!form.submitting);
        assert_eq!(form.submit_error, None);
    }

    #[test]
    fn test_submit_failure_is_visible() {
        let mut form = FormPanel::default();
        form.begin_submit();
        let reset = form.finish_submit(&Err(ClientError::Rejected("Erro ao cadastrar o cliente".to_string())));
        assert!(!reset);
        assert!(!form.success_visible);
        assert_eq!(form.submit_error.as_deref(), Some("Cadastro recusado: Erro ao cadastrar o cliente"));
    }

    #[test]
    fn test_new_submission_hides_previous_outcome() {
        let mut form = FormPanel::default();
        form.begin_submit();
        form.finish_submit(&Err(ClientError::Network("offline".to_string())));
        form.begin_submit();
        assert_eq!(form.submit_error, None);
        assert!(!form.success_visible);
    }
}

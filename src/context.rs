//! Application Context
//!
//! Handles built once in `App` and shared with components via the Leptos
//! Context API, in place of ad hoc `getElementById` lookups.

use leptos::html;
use leptos::prelude::*;
use leptos::task::spawn_local;
use web_sys::{ScrollBehavior, ScrollIntoViewOptions};

use crate::api;
use crate::config::AppConfig;
use crate::store::{IntakeStateStoreFields, IntakeStore};

#[derive(Clone, Copy)]
pub struct IntakeContext {
    pub store: IntakeStore,
    /// `#lista-oportunidades`, scroll target after a registration
    pub list_section: NodeRef<html::Section>,
    config: StoredValue<AppConfig>,
}

impl IntakeContext {
    pub fn new(store: IntakeStore, config: AppConfig) -> Self {
        Self {
            store,
            list_section: NodeRef::new(),
            config: StoredValue::new(config),
        }
    }

    pub fn config(&self) -> AppConfig {
        self.config.get_value()
    }

    /// Reload the client list. Never fails: errors end up in the list panel.
    pub fn refresh_list(&self, should_scroll: bool) {
        let store = self.store;
        let ticket = store.list().write().begin();

        if should_scroll {
            self.scroll_to_list();
        }

        let config = self.config();
        spawn_local(async move {
            let outcome = api::list_clientes(&config).await;
            match &outcome {
                Ok(records) => log::info!("Loaded {} clientes", records.len()),
                Err(e) => log::error!("Erro ao chamar a API: {}", e),
            }
            if !store.list().write().finish(ticket, outcome) {
                log::debug!("Dropped superseded list refresh #{}", ticket);
            }
        });
    }

    fn scroll_to_list(&self) {
        if let Some(section) = self.list_section.get_untracked() {
            let options = ScrollIntoViewOptions::new();
            options.set_behavior(ScrollBehavior::Smooth);
            section.scroll_into_view_with_scroll_into_view_options(&options);
        }
    }
}

/// Get the intake context provided by `App`
pub fn use_intake() -> IntakeContext {
    expect_context::<IntakeContext>()
}

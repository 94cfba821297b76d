//! Intake Frontend App
//!
//! Registration form above the list of registered clients.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{CadastroForm, ClientList};
use crate::config::AppConfig;
use crate::context::IntakeContext;
use crate::store::IntakeState;

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    let store = Store::new(IntakeState::default());
    let ctx = IntakeContext::new(store, config);

    // Provide context to all children
    provide_context(ctx);

    // Load the list once on mount
    Effect::new(move |_| ctx.refresh_list(false));

    view! {
        <main class="intake-layout">
            <h1>"Cadastro de Clientes"</h1>
            <CadastroForm />
            <ClientList />
        </main>
    }
}

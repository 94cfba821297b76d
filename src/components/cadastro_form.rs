//! Registration Form Component
//!
//! `#form-cadastro`: validates the e-mail, posts the multipart form and
//! refreshes the list once the backend confirms.

use leptos::html;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::hidden_unless;
use crate::api;
use crate::context::use_intake;
use crate::models::{PROJECT_TYPES, URGENCY_LEVELS};
use crate::store::IntakeStateStoreFields;
use crate::validation::NewClient;

/// `<select>` with a blank placeholder followed by (value, label) options
#[component]
fn OptionSelect(
    id: &'static str,
    placeholder: &'static str,
    options: &'static [(&'static str, &'static str)],
    value: RwSignal<String>,
) -> impl IntoView {
    view! {
        <select
            id=id
            name=id
            prop:value=move || value.get()
            on:change=move |ev| value.set(event_target_value(&ev))
        >
            <option value="">{placeholder}</option>
            {options.iter().map(|(val, label)| view! {
                <option value={*val}>{*label}</option>
            }).collect_view()}
        </select>
    }
}

#[component]
pub fn CadastroForm() -> impl IntoView {
    let ctx = use_intake();
    let store = ctx.store;

    let nome = RwSignal::new(String::new());
    let tipo_projeto = RwSignal::new(String::new());
    let urgencia = RwSignal::new(String::new());
    let descricao = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let form_ref = NodeRef::<html::Form>::new();
    let referencia_ref = NodeRef::<html::Input>::new();

    let clear_fields = move || {
        for field in [nome, tipo_projeto, urgencia, descricao, email] {
            field.set(String::new());
        }
        // Also drops the selected file
        if let Some(form) = form_ref.get_untracked() {
            form.reset();
        }
    };

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if store.form().read_untracked().submitting {
            return;
        }

        let draft = NewClient {
            nome: nome.get_untracked(),
            tipo_projeto: tipo_projeto.get_untracked(),
            urgencia: urgencia.get_untracked(),
            email: email.get_untracked(),
            descricao: descricao.get_untracked(),
        };
        let client = match draft.validate() {
            Ok(client) => client,
            Err(e) => {
                log::warn!("{}: {:?}", e, draft.email);
                store.form().write().reject_email();
                return;
            }
        };

        let file = referencia_ref
            .get_untracked()
            .and_then(|input| input.files())
            .and_then(|files| files.get(0));

        store.form().write().begin_submit();
        let config = ctx.config();
        spawn_local(async move {
            let outcome = api::cadastrar_cliente(&config, &client, file).await;
            match &outcome {
                Ok(message) => log::info!("{}", message),
                Err(e) => log::error!("Erro ao enviar os dados: {}", e),
            }
            if store.form().write().finish_submit(&outcome) {
                clear_fields();
                ctx.refresh_list(true);
            }
        });
    };

    let form_state = move || store.form().read().clone();

    view! {
        <form id="form-cadastro" class="form-cadastro" node_ref=form_ref on:submit=on_submit>
            <label for="nome">"Nome"</label>
            <input
                type="text"
                id="nome"
                name="nome"
                prop:value=move || nome.get()
                on:input=move |ev| nome.set(event_target_value(&ev))
            />

            <label for="tipo_projeto">"Tipo de Projeto"</label>
            <OptionSelect id="tipo_projeto" placeholder="Selecione..." options=PROJECT_TYPES value=tipo_projeto />

            <label for="urgencia">"Urgência"</label>
            <OptionSelect id="urgencia" placeholder="Selecione..." options=URGENCY_LEVELS value=urgencia />

            <label for="descricao">"Descrição"</label>
            <textarea
                id="descricao"
                name="descricao"
                prop:value=move || descricao.get()
                on:input=move |ev| descricao.set(event_target_value(&ev))
            />

            <label for="email">"E-mail"</label>
            <input
                type="text"
                id="email"
                name="email"
                class=move || if form_state().email_error { "error-border" } else { "" }
                prop:value=move || email.get()
                on:input=move |ev| email.set(event_target_value(&ev))
            />
            <p id="email-error" class=move || hidden_unless("field-error", form_state().email_error)>
                "Por favor, insira um e-mail válido."
            </p>

            <label for="referencia">"Referência"</label>
            <input type="file" id="referencia" name="referencia" node_ref=referencia_ref />

            <button type="submit" prop:disabled=move || form_state().submitting>
                "Cadastrar"
            </button>

            <p id="mensagem-sucesso" class=move || hidden_unless("mensagem-sucesso", form_state().success_visible)>
                "Cliente cadastrado com sucesso!"
            </p>
            <p id="mensagem-erro" class=move || hidden_unless("mensagem-erro", form_state().submit_error.is_some())>
                {move || form_state().submit_error.unwrap_or_default()}
            </p>
        </form>
    }
}

//! Client List Component
//!
//! The `#lista-oportunidades` section: loading indicator, error panel and
//! one card per client record.

use leptos::prelude::*;

use super::hidden_unless;
use crate::context::use_intake;
use crate::models::ClientCard;
use crate::store::IntakeStateStoreFields;

/// Read-only card for one client record
#[component]
fn ClientCardView(card: ClientCard) -> impl IntoView {
    view! {
        <div class="cliente">
            <h2>{card.title}</h2>
            {card.lines.into_iter().map(|line| view! { <p>{line}</p> }).collect_view()}
            {card.reference_href.map(|href| view! {
                <a href=href target="_blank" rel="noopener">"Referência"</a>
            })}
        </div>
    }
}

#[component]
pub fn ClientList() -> impl IntoView {
    let ctx = use_intake();
    let store = ctx.store;
    let uploads_base = ctx.config().uploads_base;

    let cards = move || {
        store
            .list()
            .read()
            .records
            .iter()
            .map(|record| ClientCard::from_record(record, &uploads_base))
            .collect::<Vec<_>>()
    };

    view! {
        <section
            id="lista-oportunidades"
            node_ref=ctx.list_section
            class=move || hidden_unless("lista-oportunidades", store.list().read().section_visible)
        >
            <h2>"Oportunidades"</h2>

            <div
                id="loading-indicator"
                class=move || hidden_unless("loading", store.list().read().loading_visible)
            >
                "Carregando..."
            </div>

            <div
                id="lista-error"
                class=move || hidden_unless("lista-error", store.list().read().error_visible)
            >
                <p>"Não foi possível carregar a lista de clientes."</p>
                <button type="button" on:click=move |_| ctx.refresh_list(false)>
                    "Tentar novamente"
                </button>
            </div>

            <div
                id="lista-clientes"
                class=move || hidden_unless("lista-clientes", store.list().read().container_visible)
            >
                <For
                    each=cards
                    key=|card| card.id
                    children=move |card| view! { <ClientCardView card=card /> }
                />
            </div>
        </section>
    }
}

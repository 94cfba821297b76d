//! UI Components
//!
//! Leptos components for the intake page.

mod cadastro_form;
mod client_list;

pub use cadastro_form::CadastroForm;
pub use client_list::ClientList;

/// Class list with `hidden` appended when the region is not visible
fn hidden_unless(base: &str, visible: bool) -> String {
    if visible { base.to_string() } else { format!("{} hidden", base) }
}

//! Notes page: list, create/edit form and transient notifications

use dioxus::prelude::*;

pub mod actions;
mod components;
pub mod notifier;
pub mod render;
mod shell;
pub mod state;
mod styles;

pub use shell::NotesShell;

#[component]
pub fn Notes() -> Element {
    rsx! {
        NotesShell {}
    }
}

//! Demo page wiring the alert and confirm hooks to their dialogs.

use leptos::prelude::*;

use crate::components::alert_dialog::AlertDialog;
use crate::components::confirm_dialog::ConfirmDialog;
use crate::components::language_toggle::LanguageToggle;
use crate::state::alert::use_alert;
use crate::state::confirm::{ConfirmOptions, ConfirmSeverity, use_confirm};

#[component]
pub fn HomePage() -> impl IntoView {
    let alert = use_alert();
    let confirm = use_confirm();
    let items = RwSignal::new(3_u32);

    let on_delete = move |_| {
        let reply = confirm.show(
            "Delete item",
            "The last item will be removed.",
            move || items.update(|n| *n = n.saturating_sub(1)),
            ConfirmOptions::default()
                .confirm_label("Delete")
                .severity(ConfirmSeverity::Danger),
        );
        leptos::task::spawn_local(async move {
            if reply.await {
                alert.show_success("Deleted", "The item was removed.");
            } else {
                alert.show_info("Kept", "Nothing was deleted.");
            }
        });
    };

    view! {
        <div class="home">
            <header class="home__header">
                <LanguageToggle/>
            </header>

            <p class="home__count">{move || format!("Items: {}", items.get())}</p>

            <div class="home__actions">
                <button class="btn" on:click=move |_| alert.show_success("Saved", "Your changes were stored.")>
                    "Success"
                </button>
                <button class="btn" on:click=move |_| alert.show_error("Failed", "The request could not be completed.")>
                    "Error"
                </button>
                <button class="btn" on:click=move |_| alert.show_warning("Careful", "This action affects every member.")>
                    "Warning"
                </button>
                <button class="btn btn--danger" on:click=on_delete>
                    "Delete item"
                </button>
            </div>

            <AlertDialog
                is_open=Signal::derive(move || alert.is_open())
                title=Signal::derive(move || alert.state.with(|s| s.title.clone()))
                message=Signal::derive(move || alert.state.with(|s| s.message.clone()))
                severity=Signal::derive(move || alert.state.with(|s| s.severity))
                on_close=Callback::new(move |()| alert.hide())
                auto_close=true
            />
            <ConfirmDialog confirm=confirm/>
        </div>
    }
}

//! Modal confirmation rendering a `ConfirmHandle`.

use leptos::prelude::*;

use crate::i18n::t;
use crate::state::confirm::ConfirmHandle;
use crate::state::language::Language;
use crate::util::scroll_lock::use_scroll_lock;

/// Confirm dialog. Backdrop click and Escape cancel.
#[component]
pub fn ConfirmDialog(confirm: ConfirmHandle) -> impl IntoView {
    let language = use_context::<RwSignal<Language>>();
    let lang = move || language.map_or_else(Language::default, |l| l.get());
    let is_open = Signal::derive(move || confirm.is_open());
    let view_state = Memo::new(move |_| confirm.view());

    use_scroll_lock(is_open);

    let confirm_label = move || {
        view_state
            .with(|v| v.confirm_label.clone())
            .unwrap_or_else(|| t(lang(), "common.confirm").to_owned())
    };
    let cancel_label = move || {
        view_state
            .with(|v| v.cancel_label.clone())
            .unwrap_or_else(|| t(lang(), "common.cancel").to_owned())
    };
    let confirm_class = move || view_state.with(|v| v.severity.button_class());
    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Escape" {
            ev.prevent_default();
            confirm.cancel();
        }
    };

    view! {
        <Show when=move || is_open.get()>
            <div class="dialog-backdrop" on:click=move |_| confirm.cancel()>
                <div
                    class=move || format!("dialog dialog--confirm dialog--{}", view_state.with(|v| v.severity.as_str()))
                    role="alertdialog"
                    aria-modal="true"
                    on:click=move |ev| ev.stop_propagation()
                    on:keydown=on_keydown
                    tabindex="0"
                >
                    <h3 class="dialog__title">{move || view_state.with(|v| v.title.clone())}</h3>
                    <p class="dialog__message">{move || view_state.with(|v| v.message.clone())}</p>
                    <div class="dialog__actions">
                        <button class="btn" on:click=move |_| confirm.cancel()>
                            {cancel_label}
                        </button>
                        <button class=confirm_class on:click=move |_| confirm.confirm()>
                            {confirm_label}
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
}

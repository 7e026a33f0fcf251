//! Modal alert with severity badge and optional auto-dismiss.
//!
//! SYSTEM CONTEXT
//! ==============
//! Renders an `AlertState` owned by the caller (usually via `use_alert`).
//! While open it holds a page scroll lock; with `auto_close` it arms a
//! one-shot timer that runs the same close path as the buttons.

use leptos::prelude::*;

use crate::i18n::t;
use crate::state::alert::{AlertSeverity, severity_display};
use crate::state::dialog::{AutoClose, DEFAULT_AUTO_CLOSE_DELAY_MS, DialogLifecycle};
use crate::state::language::Language;
use crate::util::auto_close::use_auto_close;
use crate::util::scroll_lock::use_scroll_lock;

/// Alert dialog. `on_close` is expected to hide the alert.
#[component]
pub fn AlertDialog(
    #[prop(into)] is_open: Signal<bool>,
    #[prop(into)] title: Signal<String>,
    #[prop(into)] message: Signal<String>,
    #[prop(into)] severity: Signal<AlertSeverity>,
    on_close: Callback<()>,
    #[prop(optional)] auto_close: bool,
    #[prop(default = DEFAULT_AUTO_CLOSE_DELAY_MS)] auto_close_delay: u32,
) -> impl IntoView {
    let language = use_context::<RwSignal<Language>>();
    let lang = move || language.map_or_else(Language::default, |l| l.get());
    let auto = AutoClose {
        enabled: auto_close,
        delay_ms: auto_close_delay,
    };
    let lifecycle = StoredValue::new(DialogLifecycle::default());

    use_scroll_lock(is_open);

    #[cfg(feature = "hydrate")]
    use_auto_close(is_open, auto, lifecycle, on_close, |delay_ms, fire| {
        gloo_timers::callback::Timeout::new(delay_ms, fire)
    });
    #[cfg(not(feature = "hydrate"))]
    use_auto_close(is_open, auto, lifecycle, on_close, |_, _| ());

    // User close always reaches `on_close`; it also disarms a pending timer.
    let close = move || {
        lifecycle.update_value(|l| {
            l.close();
        });
        on_close.run(());
    };
    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Escape" {
            ev.prevent_default();
            close();
        }
    };
    let display = move || severity_display(severity.get());

    view! {
        <Show when=move || is_open.get()>
            <div class="dialog-backdrop">
                <div
                    class="dialog dialog--alert"
                    role="alertdialog"
                    aria-modal="true"
                    on:keydown=on_keydown
                    tabindex="0"
                >
                    <div class="dialog__header">
                        <span class=move || format!("dialog__badge {}", display().class)>{move || display().icon}</span>
                        <h3 class="dialog__title">{move || title.get()}</h3>
                        <button class="dialog__close" on:click=move |_| close() title=move || t(lang(), "common.close")>
                            "✕"
                        </button>
                    </div>
                    <p class="dialog__message">{move || message.get()}</p>
                    <div class="dialog__actions">
                        <button class="btn" on:click=move |_| close()>
                            {move || t(lang(), "common.close")}
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
}

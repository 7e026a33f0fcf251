//! Arabic/English switch bound to the shared language signal.

use leptos::prelude::*;

use crate::state::language::{Language, use_language};

/// Two-button language toggle with the active language highlighted.
#[component]
pub fn LanguageToggle() -> impl IntoView {
    let language = use_language();

    view! {
        <div class="language-toggle">
            <span class="language-toggle__icon" aria-hidden="true">"🌐"</span>
            {Language::ALL
                .into_iter()
                .map(|lang| {
                    let class = move || {
                        if language.get() == lang {
                            "language-toggle__option language-toggle__option--active"
                        } else {
                            "language-toggle__option"
                        }
                    };
                    view! {
                        <button
                            class=class
                            lang=lang.code()
                            on:click=move |_| language.set(crate::util::language::select(lang))
                        >
                            {lang.native_name()}
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}

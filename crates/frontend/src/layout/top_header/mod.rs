//! Top bar: sidebar toggle, application title and the language switch.

use leptos::prelude::*;

use crate::layout::global_context::AppGlobalContext;
use crate::shared::i18n::{use_i18n, Locale};
use crate::shared::icons::icon;
use crate::shared::storage;

/// Mirrors the locale onto `<html lang dir>`
pub fn apply_document_locale(locale: Locale) {
    let root = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element());
    if let Some(root) = root {
        let _ = root.set_attribute("lang", locale.code());
        let _ = root.set_attribute("dir", locale.dir());
    }
}

#[component]
pub fn TopHeader() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let i18n = use_i18n();

    let switch_locale = move |locale: Locale| {
        i18n.set_locale(locale);
        storage::save_locale(locale);
    };

    view! {
        <header class="top-header">
            <div class="top-header__brand">
                <button
                    class="top-header__icon-btn"
                    on:click=move |_| ctx.toggle_sidebar()
                    title=move || i18n.t("menu")
                >
                    {icon("menu")}
                </button>
                <span class="top-header__title">{move || i18n.t("appTitle")}</span>
            </div>

            <div class="top-header__actions" title=move || i18n.t("language")>
                {icon("globe")}
                {Locale::all()
                    .iter()
                    .map(|locale| {
                        let locale = *locale;
                        view! {
                            <button
                                class="top-header__locale"
                                class:top-header__locale--active=move || i18n.locale.get() == locale
                                on:click=move |_| switch_locale(locale)
                            >
                                {locale.code().to_uppercase()}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
        </header>
    }
}

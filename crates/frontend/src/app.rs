use leptos::prelude::*;

use crate::layout::global_context::AppGlobalContext;
use crate::layout::top_header::apply_document_locale;
use crate::layout::Shell;
use crate::shared::config::config;
use crate::shared::i18n::I18n;
use crate::shared::storage;
use crate::store::CrmStore;

#[component]
pub fn App() -> impl IntoView {
    let ctx = AppGlobalContext::new();
    provide_context(ctx);
    ctx.init_router_integration();

    let i18n = I18n::new(storage::load_locale().unwrap_or(config().default_locale));
    provide_context(i18n);
    Effect::new(move |_| apply_document_locale(i18n.locale.get()));

    provide_context(CrmStore::new());

    view! { <Shell /> }
}

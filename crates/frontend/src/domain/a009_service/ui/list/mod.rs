use contracts::domain::a009_service::aggregate::Service;
use contracts::shared::validation::format_decimal;
use leptos::prelude::*;

use crate::domain::a009_service::ServiceDraft;
use crate::shared::components::list_page::{EntityListPage, ListColumns};
use crate::shared::form::DraftForm;
use crate::shared::i18n::I18n;
use crate::store::{use_store, CrmStore};

impl ListColumns for Service {
    fn columns() -> Vec<&'static str> {
        vec!["name", "price", "durationMinutes", "provider", "isActive"]
    }

    fn cells(&self, _store: &CrmStore, i18n: &I18n) -> Vec<String> {
        vec![
            self.name.clone(),
            format_decimal(self.price),
            self.duration_minutes.map(|m| m.to_string()).unwrap_or_default(),
            self.provider.clone().unwrap_or_default(),
            i18n.yes_no(self.is_active),
        ]
    }
}

#[component]
pub fn ServiceList() -> impl IntoView {
    let store = use_store();
    let form = RwSignal::new(DraftForm::<ServiceDraft>::closed());
    view! { <EntityListPage form=form collection=store.services page_id="a009_service--list" /> }
}

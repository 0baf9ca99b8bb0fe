use contracts::domain::a011_service_provider::aggregate::ServiceProvider;
use leptos::prelude::*;

use crate::domain::a011_service_provider::ServiceProviderDraft;
use crate::shared::components::list_page::{EntityListPage, ListColumns};
use crate::shared::form::DraftForm;
use crate::shared::i18n::I18n;
use crate::store::{use_store, CrmStore};

impl ListColumns for ServiceProvider {
    fn columns() -> Vec<&'static str> {
        vec!["name", "contactPerson", "phone", "email", "specialty"]
    }

    fn cells(&self, _store: &CrmStore, _i18n: &I18n) -> Vec<String> {
        vec![
            self.name.clone(),
            self.contact_person.clone(),
            self.phone.clone(),
            self.email.clone(),
            self.specialty.clone(),
        ]
    }
}

#[component]
pub fn ServiceProviderList() -> impl IntoView {
    let store = use_store();
    let form = RwSignal::new(DraftForm::<ServiceProviderDraft>::closed());
    view! {
        <EntityListPage
            form=form
            collection=store.service_providers
            page_id="a011_service_provider--list"
        />
    }
}

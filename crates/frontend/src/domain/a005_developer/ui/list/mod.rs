use contracts::domain::a005_developer::aggregate::Developer;
use leptos::prelude::*;

use crate::domain::a005_developer::DeveloperDraft;
use crate::shared::components::list_page::{EntityListPage, ListColumns};
use crate::shared::form::DraftForm;
use crate::shared::i18n::I18n;
use crate::store::{use_store, CrmStore};

impl ListColumns for Developer {
    fn columns() -> Vec<&'static str> {
        vec!["name", "contactPerson", "phone", "email", "website", "establishedYear"]
    }

    fn cells(&self, _store: &CrmStore, _i18n: &I18n) -> Vec<String> {
        vec![
            self.name.clone(),
            self.contact_person.clone(),
            self.phone.clone(),
            self.email.clone(),
            self.website.clone(),
            self.established_year.map(|y| y.to_string()).unwrap_or_default(),
        ]
    }
}

#[component]
pub fn DeveloperList() -> impl IntoView {
    let store = use_store();
    let form = RwSignal::new(DraftForm::<DeveloperDraft>::closed());
    view! { <EntityListPage form=form collection=store.developers page_id="a005_developer--list" /> }
}

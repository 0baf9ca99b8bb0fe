use contracts::domain::a006_owner::aggregate::Owner;
use leptos::prelude::*;

use crate::domain::a006_owner::OwnerDraft;
use crate::shared::components::list_page::{EntityListPage, ListColumns};
use crate::shared::form::DraftForm;
use crate::shared::i18n::I18n;
use crate::store::{use_store, CrmStore};

impl ListColumns for Owner {
    fn columns() -> Vec<&'static str> {
        vec!["name", "phone", "email", "nationalId", "address"]
    }

    fn cells(&self, _store: &CrmStore, _i18n: &I18n) -> Vec<String> {
        vec![
            self.name.clone(),
            self.phone.clone(),
            self.email.clone(),
            self.national_id.clone(),
            self.address.clone(),
        ]
    }
}

#[component]
pub fn OwnerList() -> impl IntoView {
    let store = use_store();
    let form = RwSignal::new(DraftForm::<OwnerDraft>::closed());
    view! { <EntityListPage form=form collection=store.owners page_id="a006_owner--list" /> }
}

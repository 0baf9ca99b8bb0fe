use contracts::domain::a012_supplier::aggregate::Supplier;
use leptos::prelude::*;

use crate::domain::a012_supplier::SupplierDraft;
use crate::shared::components::list_page::{EntityListPage, ListColumns};
use crate::shared::form::DraftForm;
use crate::shared::i18n::I18n;
use crate::store::{use_store, CrmStore};

impl ListColumns for Supplier {
    fn columns() -> Vec<&'static str> {
        vec!["name", "contactPerson", "phone", "email", "address"]
    }

    fn cells(&self, _store: &CrmStore, _i18n: &I18n) -> Vec<String> {
        vec![
            self.name.clone(),
            self.contact_person.clone(),
            self.phone.clone(),
            self.email.clone(),
            self.address.clone(),
        ]
    }
}

#[component]
pub fn SupplierList() -> impl IntoView {
    let store = use_store();
    let form = RwSignal::new(DraftForm::<SupplierDraft>::closed());
    view! { <EntityListPage form=form collection=store.suppliers page_id="a012_supplier--list" /> }
}

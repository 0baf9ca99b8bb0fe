use contracts::domain::a007_product::aggregate::Product;
use contracts::shared::validation::format_decimal;
use leptos::prelude::*;

use crate::domain::a007_product::ProductDraft;
use crate::shared::components::list_page::{EntityListPage, ListColumns};
use crate::shared::form::DraftForm;
use crate::shared::i18n::I18n;
use crate::store::{use_store, CrmStore};

impl ListColumns for Product {
    fn columns() -> Vec<&'static str> {
        vec!["name", "sku", "category", "supplier", "price", "stock", "isActive"]
    }

    fn cells(&self, _store: &CrmStore, i18n: &I18n) -> Vec<String> {
        vec![
            self.name.clone(),
            self.sku.clone(),
            self.category.clone(),
            self.supplier.clone().unwrap_or_default(),
            format_decimal(self.price),
            self.stock.map(|s| s.to_string()).unwrap_or_default(),
            i18n.yes_no(self.is_active),
        ]
    }
}

#[component]
pub fn ProductList() -> impl IntoView {
    let store = use_store();
    let form = RwSignal::new(DraftForm::<ProductDraft>::closed());
    view! { <EntityListPage form=form collection=store.products page_id="a007_product--list" /> }
}

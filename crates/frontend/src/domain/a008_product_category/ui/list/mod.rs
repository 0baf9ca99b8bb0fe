use contracts::domain::a008_product_category::aggregate::ProductCategory;
use leptos::prelude::*;

use crate::domain::a008_product_category::ProductCategoryDraft;
use crate::shared::components::list_page::{EntityListPage, ListColumns};
use crate::shared::form::DraftForm;
use crate::shared::i18n::I18n;
use crate::store::{use_store, CrmStore};

impl ListColumns for ProductCategory {
    fn columns() -> Vec<&'static str> {
        vec!["name", "description"]
    }

    fn cells(&self, _store: &CrmStore, _i18n: &I18n) -> Vec<String> {
        vec![self.name.clone(), self.description.clone()]
    }
}

#[component]
pub fn ProductCategoryList() -> impl IntoView {
    let store = use_store();
    let form = RwSignal::new(DraftForm::<ProductCategoryDraft>::closed());
    view! {
        <EntityListPage
            form=form
            collection=store.product_categories
            page_id="a008_product_category--list"
        />
    }
}

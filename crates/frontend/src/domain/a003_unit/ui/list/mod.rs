use contracts::domain::a003_unit::aggregate::Unit;
use contracts::shared::validation::{format_decimal, format_optional_decimal};
use leptos::prelude::*;

use crate::domain::a003_unit::{UnitDraft, UnitFilterDraft};
use crate::shared::components::filter_drawer::{FilterDrawer, FilterToggle};
use crate::shared::components::list_page::{EntityListPage, ListColumns};
use crate::shared::form::DraftForm;
use crate::shared::i18n::I18n;
use crate::store::{use_store, CrmStore, FilterCriteria};

impl ListColumns for Unit {
    fn columns() -> Vec<&'static str> {
        vec!["code", "project", "unitType", "status", "area", "bedrooms", "price", "owner"]
    }

    fn cells(&self, store: &CrmStore, i18n: &I18n) -> Vec<String> {
        vec![
            self.code.clone(),
            store.projects.name_of(&self.project_id),
            i18n.enum_label(self.unit_type.code()),
            i18n.enum_label(self.status.code()),
            format_optional_decimal(self.area),
            self.bedrooms.map(|b| b.to_string()).unwrap_or_default(),
            format_decimal(self.price),
            self.owner_id
                .as_deref()
                .map(|id| store.owners.name_of(id))
                .unwrap_or_default(),
        ]
    }
}

fn toolbar() -> AnyView {
    let store = use_store();
    let active = Signal::derive(move || store.unit_filter.applied.with(|f| f.active_count()));
    view! { <FilterToggle open=store.unit_filter.open active_count=active /> }.into_any()
}

fn extras() -> AnyView {
    let store = use_store();
    let form = RwSignal::new(DraftForm::<UnitFilterDraft>::closed());
    view! { <FilterDrawer form=form filter_slot=store.unit_filter /> }.into_any()
}

#[component]
pub fn UnitList() -> impl IntoView {
    let store = use_store();
    store.projects.ensure_loaded();
    store.owners.ensure_loaded();

    let row_filter = Callback::new(move |unit: Unit| store.unit_filter.applied.with(|f| f.matches(&unit)));

    let form = RwSignal::new(DraftForm::<UnitDraft>::closed());
    view! {
        <EntityListPage
            form=form
            collection=store.units
            page_id="a003_unit--list"
            row_filter=row_filter
            toolbar=toolbar
            extras=extras
        />
    }
}

use contracts::domain::a002_deal::aggregate::Deal;
use contracts::shared::validation::{format_decimal, format_optional_date};
use leptos::prelude::*;

use crate::domain::a002_deal::{DealDraft, DealFilterDraft};
use crate::shared::components::filter_drawer::{FilterDrawer, FilterToggle};
use crate::shared::components::list_page::{EntityListPage, ListColumns};
use crate::shared::form::DraftForm;
use crate::shared::i18n::I18n;
use crate::store::{use_store, CrmStore, FilterCriteria};

impl ListColumns for Deal {
    fn columns() -> Vec<&'static str> {
        vec!["title", "lead", "unit", "amount", "stage", "expectedCloseDate", "assignedTo"]
    }

    fn cells(&self, store: &CrmStore, i18n: &I18n) -> Vec<String> {
        vec![
            self.title.clone(),
            self.lead_id.as_deref().map(|id| store.leads.name_of(id)).unwrap_or_default(),
            self.unit_id.as_deref().map(|id| store.units.name_of(id)).unwrap_or_default(),
            format_decimal(self.amount),
            i18n.enum_label(self.stage.code()),
            format_optional_date(self.expected_close_date),
            self.assigned_to
                .as_deref()
                .map(|id| store.users.name_of(id))
                .unwrap_or_default(),
        ]
    }
}

fn toolbar() -> AnyView {
    let store = use_store();
    let active = Signal::derive(move || store.deal_filter.applied.with(|f| f.active_count()));
    view! { <FilterToggle open=store.deal_filter.open active_count=active /> }.into_any()
}

fn extras() -> AnyView {
    let store = use_store();
    let form = RwSignal::new(DraftForm::<DealFilterDraft>::closed());
    view! { <FilterDrawer form=form filter_slot=store.deal_filter /> }.into_any()
}

#[component]
pub fn DealList() -> impl IntoView {
    let store = use_store();
    // Reference columns resolve names through these
    store.leads.ensure_loaded();
    store.units.ensure_loaded();
    store.users.ensure_loaded();

    let row_filter = Callback::new(move |deal: Deal| store.deal_filter.applied.with(|f| f.matches(&deal)));

    let form = RwSignal::new(DraftForm::<DealDraft>::closed());
    view! {
        <EntityListPage
            form=form
            collection=store.deals
            page_id="a002_deal--list"
            row_filter=row_filter
            toolbar=toolbar
            extras=extras
        />
    }
}

use contracts::domain::a004_project::aggregate::Project;
use contracts::shared::validation::format_optional_date;
use leptos::prelude::*;

use crate::domain::a004_project::{ProjectDraft, ProjectFilterDraft};
use crate::shared::components::filter_drawer::{FilterDrawer, FilterToggle};
use crate::shared::components::list_page::{EntityListPage, ListColumns};
use crate::shared::form::DraftForm;
use crate::shared::i18n::I18n;
use crate::store::{use_store, CrmStore, FilterCriteria};

impl ListColumns for Project {
    fn columns() -> Vec<&'static str> {
        vec!["name", "developer", "location", "status", "totalUnits", "launchDate"]
    }

    fn cells(&self, store: &CrmStore, i18n: &I18n) -> Vec<String> {
        vec![
            self.name.clone(),
            store.developers.name_of(&self.developer_id),
            self.location.clone(),
            i18n.enum_label(self.status.code()),
            self.total_units.map(|n| n.to_string()).unwrap_or_default(),
            format_optional_date(self.launch_date),
        ]
    }
}

fn toolbar() -> AnyView {
    let store = use_store();
    let active = Signal::derive(move || store.project_filter.applied.with(|f| f.active_count()));
    view! { <FilterToggle open=store.project_filter.open active_count=active /> }.into_any()
}

fn extras() -> AnyView {
    let store = use_store();
    let form = RwSignal::new(DraftForm::<ProjectFilterDraft>::closed());
    view! { <FilterDrawer form=form filter_slot=store.project_filter /> }.into_any()
}

#[component]
pub fn ProjectList() -> impl IntoView {
    let store = use_store();
    store.developers.ensure_loaded();

    let row_filter = Callback::new(move |project: Project| {
        store.project_filter.applied.with(|f| f.matches(&project))
    });

    let form = RwSignal::new(DraftForm::<ProjectDraft>::closed());
    view! {
        <EntityListPage
            form=form
            collection=store.projects
            page_id="a004_project--list"
            row_filter=row_filter
            toolbar=toolbar
            extras=extras
        />
    }
}

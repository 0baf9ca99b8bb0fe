use contracts::domain::a001_lead::aggregate::Lead;
use contracts::shared::validation::format_optional_decimal;
use leptos::prelude::*;
use thaw::{Button, ButtonAppearance};

use crate::domain::a001_lead::ui::{AddClientTaskModal, AssignLeadsModal};
use crate::domain::a001_lead::{LeadDraft, LeadFilterDraft};
use crate::shared::components::filter_drawer::{FilterDrawer, FilterToggle};
use crate::shared::components::list_page::{EntityListPage, ListColumns};
use crate::shared::form::DraftForm;
use crate::shared::i18n::{use_i18n, I18n};
use crate::shared::icons::icon;
use crate::store::{use_store, CrmStore, FilterCriteria};

impl ListColumns for Lead {
    fn columns() -> Vec<&'static str> {
        vec!["name", "phone", "status", "source", "assignedTo", "campaign", "budget"]
    }

    fn cells(&self, store: &CrmStore, i18n: &I18n) -> Vec<String> {
        vec![
            self.name.clone(),
            self.phone.clone(),
            i18n.enum_label(self.status.code()),
            i18n.enum_label(self.source.code()),
            self.assigned_to
                .as_deref()
                .map(|id| store.users.name_of(id))
                .unwrap_or_default(),
            self.campaign.clone().unwrap_or_default(),
            format_optional_decimal(self.budget),
        ]
    }
}

fn toolbar() -> AnyView {
    let store = use_store();
    let i18n = use_i18n();
    let active = Signal::derive(move || store.lead_filter.applied.with(|f| f.active_count()));

    view! {
        <FilterToggle open=store.lead_filter.open active_count=active />
        <Button appearance=ButtonAppearance::Secondary on_click=move |_| store.assign_open.set(true)>
            {icon("users")}
            {move || i18n.t("assignLeads")}
        </Button>
    }
    .into_any()
}

fn row_actions(lead: Lead) -> AnyView {
    let store = use_store();
    view! {
        <Button
            appearance=ButtonAppearance::Subtle
            on_click=move |_| store.task_for.set(Some(lead.clone()))
        >
            {icon("calendar")}
        </Button>
    }
    .into_any()
}

fn extras() -> AnyView {
    let store = use_store();
    let form = RwSignal::new(DraftForm::<LeadFilterDraft>::closed());
    view! {
        <FilterDrawer form=form filter_slot=store.lead_filter />
        <AssignLeadsModal />
        <AddClientTaskModal />
    }
    .into_any()
}

#[component]
pub fn LeadList() -> impl IntoView {
    let store = use_store();
    let row_filter = Callback::new(move |lead: Lead| {
        store.lead_filter.applied.with(|f| f.matches(&lead))
    });

    let form = RwSignal::new(DraftForm::<LeadDraft>::closed());
    view! {
        <EntityListPage
            form=form
            collection=store.leads
            page_id="a001_lead--list"
            row_filter=row_filter
            toolbar=toolbar
            row_actions=row_actions
            extras=extras
        />
    }
}

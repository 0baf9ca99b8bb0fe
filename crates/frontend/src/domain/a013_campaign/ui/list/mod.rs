use contracts::domain::a013_campaign::aggregate::Campaign;
use contracts::shared::validation::{format_decimal, format_optional_date};
use leptos::prelude::*;

use crate::domain::a013_campaign::CampaignDraft;
use crate::shared::components::list_page::{EntityListPage, ListColumns};
use crate::shared::form::DraftForm;
use crate::shared::i18n::I18n;
use crate::store::{use_store, CrmStore};

impl ListColumns for Campaign {
    fn columns() -> Vec<&'static str> {
        vec!["name", "channel", "status", "budget", "startDate", "endDate", "project"]
    }

    fn cells(&self, store: &CrmStore, i18n: &I18n) -> Vec<String> {
        vec![
            self.name.clone(),
            i18n.enum_label(self.channel.code()),
            i18n.enum_label(self.status.code()),
            format_decimal(self.budget),
            format_optional_date(self.start_date),
            format_optional_date(self.end_date),
            self.project_id
                .as_deref()
                .map(|id| store.projects.name_of(id))
                .unwrap_or_default(),
        ]
    }
}

#[component]
pub fn CampaignList() -> impl IntoView {
    let store = use_store();
    store.projects.ensure_loaded();
    let form = RwSignal::new(DraftForm::<CampaignDraft>::closed());
    view! { <EntityListPage form=form collection=store.campaigns page_id="a013_campaign--list" /> }
}

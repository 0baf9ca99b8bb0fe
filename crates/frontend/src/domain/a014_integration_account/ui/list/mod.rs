use contracts::domain::a014_integration_account::aggregate::IntegrationAccount;
use leptos::prelude::*;

use crate::domain::a014_integration_account::IntegrationAccountDraft;
use crate::shared::components::list_page::{EntityListPage, ListColumns};
use crate::shared::form::DraftForm;
use crate::shared::i18n::I18n;
use crate::store::{use_store, CrmStore};

impl ListColumns for IntegrationAccount {
    fn columns() -> Vec<&'static str> {
        vec!["name", "platform", "accountId", "isActive"]
    }

    fn cells(&self, _store: &CrmStore, i18n: &I18n) -> Vec<String> {
        vec![
            self.name.clone(),
            i18n.enum_label(self.platform.code()),
            self.account_id.clone(),
            i18n.yes_no(self.is_active),
        ]
    }
}

#[component]
pub fn IntegrationAccountList() -> impl IntoView {
    let store = use_store();
    let form = RwSignal::new(DraftForm::<IntegrationAccountDraft>::closed());
    view! {
        <EntityListPage
            form=form
            collection=store.integration_accounts
            page_id="a014_integration_account--list"
        />
    }
}

use contracts::system::users::User;
use leptos::prelude::*;

use crate::shared::components::list_page::{EntityListPage, ListColumns};
use crate::shared::form::DraftForm;
use crate::shared::i18n::I18n;
use crate::store::{use_store, CrmStore};
use crate::system::users::UserDraft;

impl ListColumns for User {
    fn columns() -> Vec<&'static str> {
        vec!["name", "email", "phone", "role", "isActive"]
    }

    fn cells(&self, _store: &CrmStore, i18n: &I18n) -> Vec<String> {
        vec![
            self.name.clone(),
            self.email.clone(),
            self.phone.clone(),
            i18n.enum_label(self.role.code()),
            i18n.yes_no(self.is_active),
        ]
    }
}

#[component]
pub fn UsersList() -> impl IntoView {
    let store = use_store();
    let form = RwSignal::new(DraftForm::<UserDraft>::closed());
    view! { <EntityListPage form=form collection=store.users page_id="sys_users--list" /> }
}

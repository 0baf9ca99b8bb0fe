use contracts::domain::a010_service_package::aggregate::ServicePackage;
use contracts::domain::common::CrmEntity;
use contracts::shared::validation::format_decimal;
use leptos::prelude::*;

use crate::domain::a010_service_package::ServicePackageDraft;
use crate::shared::components::list_page::{EntityListPage, ListColumns};
use crate::shared::form::DraftForm;
use crate::shared::i18n::I18n;
use crate::store::{use_store, CrmStore};

impl ListColumns for ServicePackage {
    fn columns() -> Vec<&'static str> {
        vec!["name", "services", "price", "description"]
    }

    fn cells(&self, store: &CrmStore, i18n: &I18n) -> Vec<String> {
        // Renamed or deleted services keep their old name here; mark them
        let dangling = store.services.items.with(|services| {
            let known: Vec<&str> = services.iter().map(|s| s.display_name()).collect();
            self.dangling_services(&known)
                .into_iter()
                .map(str::to_string)
                .collect::<Vec<_>>()
        });
        let services = self
            .services
            .iter()
            .map(|name| {
                if dangling.contains(name) {
                    format!("{} ({})", name, i18n.t("missing"))
                } else {
                    name.clone()
                }
            })
            .collect::<Vec<_>>()
            .join(", ");
        vec![
            self.name.clone(),
            services,
            format_decimal(self.price),
            self.description.clone(),
        ]
    }
}

#[component]
pub fn ServicePackageList() -> impl IntoView {
    let store = use_store();
    store.services.ensure_loaded();
    let form = RwSignal::new(DraftForm::<ServicePackageDraft>::closed());
    view! {
        <EntityListPage
            form=form
            collection=store.service_packages
            page_id="a010_service_package--list"
        />
    }
}

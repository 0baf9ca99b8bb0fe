//! Application store: entity collections, modal and drawer slots, lookup
//! options and the lead-specific mutations. Provided once through context.

pub mod collection;
pub mod filters;

pub use collection::EntityCollection;
pub use filters::{filter_items, FilterCriteria, FilterSlot};

use contracts::domain::a001_lead::aggregate::{AssignLeadsRequest, Lead};
use contracts::domain::a001_lead::task::{ClientTask, ClientTaskDto};
use contracts::domain::a002_deal::aggregate::Deal;
use contracts::domain::a003_unit::aggregate::Unit;
use contracts::domain::a004_project::aggregate::Project;
use contracts::domain::a005_developer::aggregate::Developer;
use contracts::domain::a006_owner::aggregate::Owner;
use contracts::domain::a007_product::aggregate::Product;
use contracts::domain::a008_product_category::aggregate::ProductCategory;
use contracts::domain::a009_service::aggregate::Service;
use contracts::domain::a010_service_package::aggregate::ServicePackage;
use contracts::domain::a011_service_provider::aggregate::ServiceProvider;
use contracts::domain::a012_supplier::aggregate::Supplier;
use contracts::domain::a013_campaign::aggregate::Campaign;
use contracts::domain::a014_integration_account::aggregate::IntegrationAccount;
use contracts::domain::common::CrmEntity;
use contracts::system::users::User;
use leptos::prelude::*;

use crate::domain::a001_lead::filter::LeadFilter;
use crate::domain::a002_deal::filter::DealFilter;
use crate::domain::a003_unit::filter::UnitFilter;
use crate::domain::a004_project::filter::ProjectFilter;
use crate::shared::api_client;
use crate::shared::api_utils::item_path;
use crate::shared::error::ApiError;
use crate::shared::form::OptionsSource;
use crate::shared::i18n::I18n;

#[derive(Clone, Copy)]
pub struct CrmStore {
    pub leads: EntityCollection<Lead>,
    pub deals: EntityCollection<Deal>,
    pub units: EntityCollection<Unit>,
    pub projects: EntityCollection<Project>,
    pub developers: EntityCollection<Developer>,
    pub owners: EntityCollection<Owner>,
    pub products: EntityCollection<Product>,
    pub product_categories: EntityCollection<ProductCategory>,
    pub services: EntityCollection<Service>,
    pub service_packages: EntityCollection<ServicePackage>,
    pub service_providers: EntityCollection<ServiceProvider>,
    pub suppliers: EntityCollection<Supplier>,
    pub users: EntityCollection<User>,
    pub campaigns: EntityCollection<Campaign>,
    pub integration_accounts: EntityCollection<IntegrationAccount>,

    pub lead_filter: FilterSlot<LeadFilter>,
    pub deal_filter: FilterSlot<DealFilter>,
    pub unit_filter: FilterSlot<UnitFilter>,
    pub project_filter: FilterSlot<ProjectFilter>,

    /// AssignLeads modal flag
    pub assign_open: RwSignal<bool>,
    /// Lead the AddClientTask modal is open for
    pub task_for: RwSignal<Option<Lead>>,
}

impl CrmStore {
    pub fn new() -> Self {
        Self {
            leads: EntityCollection::new(),
            deals: EntityCollection::new(),
            units: EntityCollection::new(),
            projects: EntityCollection::new(),
            developers: EntityCollection::new(),
            owners: EntityCollection::new(),
            products: EntityCollection::new(),
            product_categories: EntityCollection::new(),
            services: EntityCollection::new(),
            service_packages: EntityCollection::new(),
            service_providers: EntityCollection::new(),
            suppliers: EntityCollection::new(),
            users: EntityCollection::new(),
            campaigns: EntityCollection::new(),
            integration_accounts: EntityCollection::new(),
            lead_filter: FilterSlot::default(),
            deal_filter: FilterSlot::default(),
            unit_filter: FilterSlot::default(),
            project_filter: FilterSlot::default(),
            assign_open: RwSignal::new(false),
            task_for: RwSignal::new(None),
        }
    }

    /// Loads the collection a select reads its options from
    pub fn ensure_source_loaded(&self, source: OptionsSource) {
        match source {
            OptionsSource::Static(_) => {}
            OptionsSource::Users => self.users.ensure_loaded(),
            OptionsSource::Leads => self.leads.ensure_loaded(),
            OptionsSource::Units => self.units.ensure_loaded(),
            OptionsSource::Projects | OptionsSource::ProjectNames => {
                self.projects.ensure_loaded()
            }
            OptionsSource::Developers => self.developers.ensure_loaded(),
            OptionsSource::Owners => self.owners.ensure_loaded(),
            OptionsSource::CampaignNames => self.campaigns.ensure_loaded(),
            OptionsSource::ProductCategoryNames => self.product_categories.ensure_loaded(),
            OptionsSource::SupplierNames => self.suppliers.ensure_loaded(),
            OptionsSource::ServiceNames => self.services.ensure_loaded(),
            OptionsSource::ServiceProviderNames => self.service_providers.ensure_loaded(),
        }
    }

    /// `(value, label)` pairs for a select. Tracked.
    pub fn options(&self, source: OptionsSource, i18n: &I18n) -> Vec<(String, String)> {
        match source {
            OptionsSource::Static(codes) => codes
                .iter()
                .map(|code| (code.to_string(), i18n.enum_label(code)))
                .collect(),
            OptionsSource::Users => by_id(self.users),
            OptionsSource::Leads => by_id(self.leads),
            OptionsSource::Units => by_id(self.units),
            OptionsSource::Projects => by_id(self.projects),
            OptionsSource::ProjectNames => by_name(self.projects),
            OptionsSource::Developers => by_id(self.developers),
            OptionsSource::Owners => by_id(self.owners),
            OptionsSource::CampaignNames => by_name(self.campaigns),
            OptionsSource::ProductCategoryNames => by_name(self.product_categories),
            OptionsSource::SupplierNames => by_name(self.suppliers),
            OptionsSource::ServiceNames => by_name(self.services),
            OptionsSource::ServiceProviderNames => by_name(self.service_providers),
        }
    }

    pub async fn assign_leads(self, lead_ids: Vec<String>, user_id: String) -> Result<(), ApiError> {
        let request = AssignLeadsRequest { lead_ids, user_id };
        api_client::post_no_content("/api/leads/assign", &request).await?;
        log::debug!(
            "assigned {} leads to {}",
            request.lead_ids.len(),
            request.user_id
        );
        self.leads
            .items
            .update(|items| apply_assignment(items, &request.lead_ids, &request.user_id));
        Ok(())
    }

    pub async fn add_client_task(self, lead_id: String, dto: ClientTaskDto) -> Result<ClientTask, ApiError> {
        let path = format!("{}/tasks", item_path("leads", &lead_id));
        let task: ClientTask = api_client::post_json(&path, &dto).await?;
        log::debug!("added task {} to lead {}", task.id, lead_id);
        Ok(task)
    }
}

impl Default for CrmStore {
    fn default() -> Self {
        Self::new()
    }
}

fn by_id<E: CrmEntity>(collection: EntityCollection<E>) -> Vec<(String, String)> {
    collection.items.with(|items| {
        items
            .iter()
            .map(|e| (e.id().to_string(), e.display_name().to_string()))
            .collect()
    })
}

fn by_name<E: CrmEntity>(collection: EntityCollection<E>) -> Vec<(String, String)> {
    collection.items.with(|items| {
        items
            .iter()
            .map(|e| (e.display_name().to_string(), e.display_name().to_string()))
            .collect()
    })
}

pub fn apply_assignment(items: &mut [Lead], lead_ids: &[String], user_id: &str) {
    for lead in items.iter_mut().filter(|l| lead_ids.contains(&l.id)) {
        lead.assigned_to = Some(user_id.to_string());
    }
}

pub fn use_store() -> CrmStore {
    use_context::<CrmStore>().expect("CrmStore not provided in context")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assignment_touches_only_selected_leads() {
        let mut leads = vec![
            Lead {
                id: "l1".into(),
                name: "Omar".into(),
                ..Default::default()
            },
            Lead {
                id: "l2".into(),
                name: "Huda".into(),
                assigned_to: Some("u9".into()),
                ..Default::default()
            },
        ];
        apply_assignment(&mut leads, &["l1".to_string()], "u1");
        assert_eq!(leads[0].assigned_to.as_deref(), Some("u1"));
        assert_eq!(leads[1].assigned_to.as_deref(), Some("u9"));
    }
}

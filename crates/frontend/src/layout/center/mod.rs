use leptos::prelude::*;

use crate::domain::a001_lead::ui::LeadList;
use crate::domain::a002_deal::ui::DealList;
use crate::domain::a003_unit::ui::UnitList;
use crate::domain::a004_project::ui::ProjectList;
use crate::domain::a005_developer::ui::DeveloperList;
use crate::domain::a006_owner::ui::OwnerList;
use crate::domain::a007_product::ui::ProductList;
use crate::domain::a008_product_category::ui::ProductCategoryList;
use crate::domain::a009_service::ui::ServiceList;
use crate::domain::a010_service_package::ui::ServicePackageList;
use crate::domain::a011_service_provider::ui::ServiceProviderList;
use crate::domain::a012_supplier::ui::SupplierList;
use crate::domain::a013_campaign::ui::CampaignList;
use crate::domain::a014_integration_account::ui::IntegrationAccountList;
use crate::layout::global_context::AppGlobalContext;
use crate::system::users::ui::UsersList;

/// View of a sidebar page
pub fn page_view(name: &str) -> Option<fn() -> AnyView> {
    let view: fn() -> AnyView = match name {
        "leads" => || view! { <LeadList /> }.into_any(),
        "deals" => || view! { <DealList /> }.into_any(),
        "units" => || view! { <UnitList /> }.into_any(),
        "projects" => || view! { <ProjectList /> }.into_any(),
        "developers" => || view! { <DeveloperList /> }.into_any(),
        "owners" => || view! { <OwnerList /> }.into_any(),
        "products" => || view! { <ProductList /> }.into_any(),
        "productCategories" => || view! { <ProductCategoryList /> }.into_any(),
        "services" => || view! { <ServiceList /> }.into_any(),
        "servicePackages" => || view! { <ServicePackageList /> }.into_any(),
        "serviceProviders" => || view! { <ServiceProviderList /> }.into_any(),
        "suppliers" => || view! { <SupplierList /> }.into_any(),
        "campaigns" => || view! { <CampaignList /> }.into_any(),
        "integrationAccounts" => || view! { <IntegrationAccountList /> }.into_any(),
        "users" => || view! { <UsersList /> }.into_any(),
        _ => return None,
    };
    Some(view)
}

#[component]
pub fn Center() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    view! {
        <main data-zone="center" class="app-main">
            {move || {
                let page = ctx.current_page.get();
                match page_view(&page) {
                    Some(render) => render(),
                    None => {
                        log::warn!("no view for page {}", page);
                        view! { <div class="page-missing">{page}</div> }.into_any()
                    }
                }
            }}
        </main>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::left::nav_config::page_names;

    #[test]
    fn test_every_nav_page_has_a_view() {
        for page in page_names() {
            assert!(page_view(page).is_some(), "no view for {}", page);
        }
        assert!(page_view("inventory").is_none());
    }
}

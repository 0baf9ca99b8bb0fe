use crate::domain::common::CrmEntity;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ServiceProvider {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub contact_person: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub specialty: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ServiceProviderDto {
    pub name: String,
    pub contact_person: String,
    pub phone: String,
    pub email: String,
    pub specialty: String,
}

impl CrmEntity for ServiceProvider {
    type Payload = ServiceProviderDto;

    fn id(&self) -> &str {
        &self.id
    }

    fn display_name(&self) -> &str {
        &self.name
    }

    fn collection_name() -> &'static str {
        "service_providers"
    }

    fn element_name() -> &'static str {
        "serviceProvider"
    }

    fn list_name() -> &'static str {
        "serviceProviders"
    }
}

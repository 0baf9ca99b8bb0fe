use crate::domain::common::CrmEntity;
use serde::{Deserialize, Serialize};

/// Услуга (уборка, ремонт, управление арендой и т.п.)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Service {
    pub id: String,
    pub name: String,
    pub price: f64,
    #[serde(default)]
    pub duration_minutes: Option<u32>,
    /// Имя поставщика услуги
    #[serde(default)]
    pub provider: Option<String>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub is_active: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ServiceDto {
    pub name: String,
    pub price: f64,
    pub duration_minutes: Option<u32>,
    pub provider: Option<String>,
    pub description: String,
    pub is_active: bool,
}

impl CrmEntity for Service {
    type Payload = ServiceDto;

    fn id(&self) -> &str {
        &self.id
    }

    fn display_name(&self) -> &str {
        &self.name
    }

    fn collection_name() -> &'static str {
        "services"
    }

    fn element_name() -> &'static str {
        "service"
    }

    fn list_name() -> &'static str {
        "services"
    }
}

use crate::domain::common::CrmEntity;
use serde::{Deserialize, Serialize};

/// Собственник юнита
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Owner {
    pub id: String,
    pub name: String,
    pub phone: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub national_id: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub notes: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct OwnerDto {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub national_id: String,
    pub address: String,
    pub notes: String,
}

impl CrmEntity for Owner {
    type Payload = OwnerDto;

    fn id(&self) -> &str {
        &self.id
    }

    fn display_name(&self) -> &str {
        &self.name
    }

    fn collection_name() -> &'static str {
        "owners"
    }

    fn element_name() -> &'static str {
        "owner"
    }

    fn list_name() -> &'static str {
        "owners"
    }
}

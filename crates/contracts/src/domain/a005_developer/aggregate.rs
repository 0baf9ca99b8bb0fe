use crate::domain::common::CrmEntity;
use serde::{Deserialize, Serialize};

/// Застройщик
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Developer {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub contact_person: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub website: String,
    #[serde(default)]
    pub established_year: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct DeveloperDto {
    pub name: String,
    pub contact_person: String,
    pub phone: String,
    pub email: String,
    pub website: String,
    pub established_year: Option<u32>,
}

impl CrmEntity for Developer {
    type Payload = DeveloperDto;

    fn id(&self) -> &str {
        &self.id
    }

    fn display_name(&self) -> &str {
        &self.name
    }

    fn collection_name() -> &'static str {
        "developers"
    }

    fn element_name() -> &'static str {
        "developer"
    }

    fn list_name() -> &'static str {
        "developers"
    }
}

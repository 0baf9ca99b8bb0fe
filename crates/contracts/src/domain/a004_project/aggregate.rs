use crate::domain::common::CrmEntity;
use crate::enums::ProjectStatus;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Проект застройщика (жилой комплекс, башня, посёлок)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub name: String,
    pub developer_id: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub status: ProjectStatus,
    #[serde(default)]
    pub total_units: Option<u32>,
    #[serde(default)]
    pub launch_date: Option<NaiveDate>,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ProjectDto {
    pub name: String,
    pub developer_id: String,
    pub location: String,
    pub status: ProjectStatus,
    pub total_units: Option<u32>,
    pub launch_date: Option<NaiveDate>,
    pub description: String,
}

impl CrmEntity for Project {
    type Payload = ProjectDto;

    fn id(&self) -> &str {
        &self.id
    }

    fn display_name(&self) -> &str {
        &self.name
    }

    fn collection_name() -> &'static str {
        "projects"
    }

    fn element_name() -> &'static str {
        "project"
    }

    fn list_name() -> &'static str {
        "projects"
    }
}

use crate::domain::common::CrmEntity;
use crate::enums::{UnitStatus, UnitType};
use serde::{Deserialize, Serialize};

/// Юнит — отдельный объект недвижимости внутри проекта
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Unit {
    pub id: String,
    /// Номер юнита внутри проекта, например "A-1203"
    pub code: String,
    pub project_id: String,
    #[serde(default)]
    pub unit_type: UnitType,
    #[serde(default)]
    pub status: UnitStatus,
    #[serde(default)]
    pub area: Option<f64>,
    #[serde(default)]
    pub bedrooms: Option<u32>,
    pub price: f64,
    #[serde(default)]
    pub floor: Option<i32>,
    #[serde(default)]
    pub owner_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct UnitDto {
    pub code: String,
    pub project_id: String,
    pub unit_type: UnitType,
    pub status: UnitStatus,
    pub area: Option<f64>,
    pub bedrooms: Option<u32>,
    pub price: f64,
    pub floor: Option<i32>,
    pub owner_id: Option<String>,
}

impl CrmEntity for Unit {
    type Payload = UnitDto;

    fn id(&self) -> &str {
        &self.id
    }

    fn display_name(&self) -> &str {
        &self.code
    }

    fn collection_name() -> &'static str {
        "units"
    }

    fn element_name() -> &'static str {
        "unit"
    }

    fn list_name() -> &'static str {
        "units"
    }
}

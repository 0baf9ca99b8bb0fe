use crate::domain::common::CrmEntity;
use crate::enums::DealStage;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Сделка по продаже/аренде юнита
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Deal {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub lead_id: Option<String>,
    #[serde(default)]
    pub unit_id: Option<String>,
    pub amount: f64,
    #[serde(default)]
    pub stage: DealStage,
    #[serde(default)]
    pub expected_close_date: Option<NaiveDate>,
    #[serde(default)]
    pub assigned_to: Option<String>,
    #[serde(default)]
    pub notes: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct DealDto {
    pub title: String,
    pub lead_id: Option<String>,
    pub unit_id: Option<String>,
    pub amount: f64,
    pub stage: DealStage,
    pub expected_close_date: Option<NaiveDate>,
    pub assigned_to: Option<String>,
    pub notes: String,
}

impl CrmEntity for Deal {
    type Payload = DealDto;

    fn id(&self) -> &str {
        &self.id
    }

    fn display_name(&self) -> &str {
        &self.title
    }

    fn collection_name() -> &'static str {
        "deals"
    }

    fn element_name() -> &'static str {
        "deal"
    }

    fn list_name() -> &'static str {
        "deals"
    }
}

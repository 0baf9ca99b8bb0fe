use crate::domain::common::CrmEntity;
use crate::enums::{CampaignChannel, CampaignStatus};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Маркетинговая кампания
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Campaign {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub channel: CampaignChannel,
    #[serde(default)]
    pub status: CampaignStatus,
    pub budget: f64,
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
    #[serde(default)]
    pub project_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct CampaignDto {
    pub name: String,
    pub channel: CampaignChannel,
    pub status: CampaignStatus,
    pub budget: f64,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub project_id: Option<String>,
}

impl CrmEntity for Campaign {
    type Payload = CampaignDto;

    fn id(&self) -> &str {
        &self.id
    }

    fn display_name(&self) -> &str {
        &self.name
    }

    fn collection_name() -> &'static str {
        "campaigns"
    }

    fn element_name() -> &'static str {
        "campaign"
    }

    fn list_name() -> &'static str {
        "campaigns"
    }
}

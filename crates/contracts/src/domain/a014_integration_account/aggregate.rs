use crate::domain::common::CrmEntity;
use crate::enums::IntegrationPlatform;
use serde::{Deserialize, Serialize};

/// Подключённый аккаунт рекламной площадки или мессенджера
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct IntegrationAccount {
    pub id: String,
    pub name: String,
    pub platform: IntegrationPlatform,
    pub account_id: String,
    #[serde(default)]
    pub access_token: String,
    #[serde(default)]
    pub is_active: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct IntegrationAccountDto {
    pub name: String,
    pub platform: IntegrationPlatform,
    pub account_id: String,
    pub access_token: String,
    pub is_active: bool,
}

impl CrmEntity for IntegrationAccount {
    type Payload = IntegrationAccountDto;

    fn id(&self) -> &str {
        &self.id
    }

    fn display_name(&self) -> &str {
        &self.name
    }

    fn collection_name() -> &'static str {
        "integration_accounts"
    }

    fn element_name() -> &'static str {
        "integrationAccount"
    }

    fn list_name() -> &'static str {
        "integrationAccounts"
    }
}

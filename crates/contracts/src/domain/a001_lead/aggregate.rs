use crate::domain::common::CrmEntity;
use crate::enums::{LeadSource, LeadStatus};
use serde::{Deserialize, Serialize};

/// Лид — потенциальный покупатель, ещё не ставший сделкой
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Lead {
    pub id: String,
    pub name: String,
    pub phone: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub source: LeadSource,
    #[serde(default)]
    pub status: LeadStatus,
    /// id пользователя-ответственного
    #[serde(default)]
    pub assigned_to: Option<String>,
    /// Имя кампании (ссылка по имени, не по id)
    #[serde(default)]
    pub campaign: Option<String>,
    #[serde(default)]
    pub budget: Option<f64>,
    /// Имя проекта, которым интересуется клиент
    #[serde(default)]
    pub interested_in: Option<String>,
    #[serde(default)]
    pub notes: String,
}

/// DTO для создания/обновления лида
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct LeadDto {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub source: LeadSource,
    pub status: LeadStatus,
    pub assigned_to: Option<String>,
    pub campaign: Option<String>,
    pub budget: Option<f64>,
    pub interested_in: Option<String>,
    pub notes: String,
}

impl CrmEntity for Lead {
    type Payload = LeadDto;

    fn id(&self) -> &str {
        &self.id
    }

    fn display_name(&self) -> &str {
        &self.name
    }

    fn collection_name() -> &'static str {
        "leads"
    }

    fn element_name() -> &'static str {
        "lead"
    }

    fn list_name() -> &'static str {
        "leads"
    }
}

/// Запрос на массовое назначение лидов пользователю
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignLeadsRequest {
    pub lead_ids: Vec<String>,
    pub user_id: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lead_deserializes_with_defaults() {
        let lead: Lead =
            serde_json::from_str(r#"{"id":"l1","name":"Sara","phone":"+971500000000"}"#).unwrap();
        assert_eq!(lead.status, LeadStatus::New);
        assert_eq!(lead.assigned_to, None);
        assert!(lead.email.is_empty());
    }

    #[test]
    fn test_assign_request_wire_names() {
        let req = AssignLeadsRequest {
            lead_ids: vec!["l1".into()],
            user_id: "u1".into(),
        };
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["leadIds"][0], "l1");
        assert_eq!(json["userId"], "u1");
    }
}

use contracts::domain::a013_campaign::aggregate::{Campaign, CampaignDto};
use contracts::enums::{CampaignChannel, CampaignStatus};
use contracts::shared::validation::{format_decimal, format_optional_date, FieldErrors};

use crate::shared::form::{
    draft_accessors, non_empty, EntityDraft, FieldKind, FieldSpec, FormDraft, FormMode,
    OptionsSource,
};

#[derive(Debug, Clone, PartialEq)]
pub struct CampaignDraft {
    pub name: String,
    pub channel: String,
    pub status: String,
    pub budget: String,
    pub start_date: String,
    pub end_date: String,
    pub project_id: String,
}

impl Default for CampaignDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            channel: CampaignChannel::default().code().to_string(),
            status: CampaignStatus::default().code().to_string(),
            budget: String::new(),
            start_date: String::new(),
            end_date: String::new(),
            project_id: String::new(),
        }
    }
}

impl FormDraft for CampaignDraft {
    type Payload = CampaignDto;

    fn fields(_mode: &FormMode) -> Vec<FieldSpec> {
        vec![
            FieldSpec::text("name", "name").required(),
            FieldSpec::select("channel", "channel", OptionsSource::Static(CampaignChannel::CODES)),
            FieldSpec::select("status", "status", OptionsSource::Static(CampaignStatus::CODES)),
            FieldSpec::number("budget", "budget").required(),
            FieldSpec::new("start_date", "startDate", FieldKind::Date),
            FieldSpec::new("end_date", "endDate", FieldKind::Date),
            FieldSpec::select("project_id", "project", OptionsSource::Projects),
        ]
    }

    draft_accessors! {
        text: [name, channel, status, budget, start_date, end_date, project_id],
    }

    fn to_payload(&self, _mode: &FormMode) -> Result<CampaignDto, FieldErrors> {
        let mut errors = FieldErrors::new();
        let budget = errors.required_decimal("budget", &self.budget);
        let start_date = errors.date("start_date", &self.start_date);
        let end_date = errors.date("end_date", &self.end_date);
        errors.into_result(CampaignDto {
            name: self.name.trim().to_string(),
            channel: CampaignChannel::from_code(&self.channel).unwrap_or_default(),
            status: CampaignStatus::from_code(&self.status).unwrap_or_default(),
            budget,
            start_date,
            end_date,
            project_id: non_empty(&self.project_id),
        })
    }
}

impl EntityDraft for CampaignDraft {
    type Entity = Campaign;

    fn from_entity(campaign: &Campaign) -> Self {
        Self {
            name: campaign.name.clone(),
            channel: campaign.channel.code().to_string(),
            status: campaign.status.code().to_string(),
            budget: format_decimal(campaign.budget),
            start_date: format_optional_date(campaign.start_date),
            end_date: format_optional_date(campaign.end_date),
            project_id: campaign.project_id.clone().unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_defaults_are_first_codes() {
        let draft = CampaignDraft::default();
        assert_eq!(draft.channel, "facebook");
        assert_eq!(draft.status, "draft");
    }

    #[test]
    fn test_dates_parse() {
        let draft = CampaignDraft {
            name: "Spring Launch".into(),
            budget: "25000".into(),
            start_date: "2026-03-01".into(),
            end_date: "2026-04-30".into(),
            ..Default::default()
        };
        let payload = draft.validate(&FormMode::Create).unwrap();
        assert_eq!(payload.start_date, NaiveDate::from_ymd_opt(2026, 3, 1));
        assert_eq!(payload.end_date, NaiveDate::from_ymd_opt(2026, 4, 30));
        assert_eq!(payload.project_id, None);
    }

    #[test]
    fn test_edit_seeds_enums() {
        let campaign = Campaign {
            id: "c1".into(),
            name: "Spring Launch".into(),
            channel: CampaignChannel::Instagram,
            status: CampaignStatus::Paused,
            budget: 25000.0,
            project_id: Some("p1".into()),
            ..Default::default()
        };
        let draft = CampaignDraft::from_entity(&campaign);
        assert_eq!(draft.channel, "instagram");
        assert_eq!(draft.status, "paused");
        assert_eq!(draft.budget, "25000");
        assert_eq!(draft.project_id, "p1");
    }
}

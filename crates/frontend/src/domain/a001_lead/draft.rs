use contracts::domain::a001_lead::aggregate::{Lead, LeadDto};
use contracts::enums::{LeadSource, LeadStatus};
use contracts::shared::validation::{format_optional_decimal, FieldErrors};

use crate::shared::form::{
    draft_accessors, non_empty, EntityDraft, FieldKind, FieldSpec, FormDraft, FormMode,
    OptionsSource,
};

#[derive(Debug, Clone, PartialEq)]
pub struct LeadDraft {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub source: String,
    pub status: String,
    pub assigned_to: String,
    pub campaign: String,
    pub budget: String,
    pub interested_in: String,
    pub notes: String,
}

impl Default for LeadDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            phone: String::new(),
            email: String::new(),
            source: LeadSource::default().code().to_string(),
            status: LeadStatus::default().code().to_string(),
            assigned_to: String::new(),
            campaign: String::new(),
            budget: String::new(),
            interested_in: String::new(),
            notes: String::new(),
        }
    }
}

impl FormDraft for LeadDraft {
    type Payload = LeadDto;

    fn fields(_mode: &FormMode) -> Vec<FieldSpec> {
        vec![
            FieldSpec::text("name", "name").required(),
            FieldSpec::new("phone", "phone", FieldKind::Phone).required(),
            FieldSpec::new("email", "email", FieldKind::Email),
            FieldSpec::select("source", "source", OptionsSource::Static(LeadSource::CODES)),
            FieldSpec::select("status", "status", OptionsSource::Static(LeadStatus::CODES)),
            FieldSpec::select("assigned_to", "assignedTo", OptionsSource::Users),
            FieldSpec::select("campaign", "campaign", OptionsSource::CampaignNames),
            FieldSpec::number("budget", "budget"),
            FieldSpec::select("interested_in", "interestedIn", OptionsSource::ProjectNames),
            FieldSpec::new("notes", "notes", FieldKind::TextArea),
        ]
    }

    draft_accessors! {
        text: [name, phone, email, source, status, assigned_to, campaign, budget, interested_in, notes],
    }

    fn to_payload(&self, _mode: &FormMode) -> Result<LeadDto, FieldErrors> {
        let mut errors = FieldErrors::new();
        errors.optional_email("email", &self.email);
        let budget = errors.decimal("budget", &self.budget);
        errors.into_result(LeadDto {
            name: self.name.trim().to_string(),
            phone: self.phone.trim().to_string(),
            email: self.email.trim().to_string(),
            source: LeadSource::from_code(&self.source).unwrap_or_default(),
            status: LeadStatus::from_code(&self.status).unwrap_or_default(),
            assigned_to: non_empty(&self.assigned_to),
            campaign: non_empty(&self.campaign),
            budget,
            interested_in: non_empty(&self.interested_in),
            notes: self.notes.clone(),
        })
    }
}

impl EntityDraft for LeadDraft {
    type Entity = Lead;

    fn from_entity(lead: &Lead) -> Self {
        Self {
            name: lead.name.clone(),
            phone: lead.phone.clone(),
            email: lead.email.clone(),
            source: lead.source.code().to_string(),
            status: lead.status.code().to_string(),
            assigned_to: lead.assigned_to.clone().unwrap_or_default(),
            campaign: lead.campaign.clone().unwrap_or_default(),
            budget: format_optional_decimal(lead.budget),
            interested_in: lead.interested_in.clone().unwrap_or_default(),
            notes: lead.notes.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::form::FieldValue;
    use contracts::shared::validation::messages;

    #[test]
    fn test_create_defaults() {
        let draft = LeadDraft::default();
        assert_eq!(draft.source, "website");
        assert_eq!(draft.status, "new");
    }

    #[test]
    fn test_required_name_and_phone() {
        let errors = LeadDraft::default().validate(&FormMode::Create).unwrap_err();
        assert_eq!(errors.get("name"), Some(messages::FIELD_REQUIRED));
        assert_eq!(errors.get("phone"), Some(messages::FIELD_REQUIRED));
        assert!(!errors.contains("email"));
    }

    #[test]
    fn test_edit_seeds_every_field() {
        let lead = Lead {
            id: "l1".into(),
            name: "Omar".into(),
            phone: "+971501112233".into(),
            source: LeadSource::Referral,
            status: LeadStatus::Qualified,
            assigned_to: Some("u1".into()),
            campaign: Some("Spring Launch".into()),
            budget: Some(1500000.0),
            ..Default::default()
        };
        let draft = LeadDraft::from_entity(&lead);
        assert_eq!(draft.value("source"), FieldValue::from("referral"));
        assert_eq!(draft.value("status"), FieldValue::from("qualified"));
        assert_eq!(draft.budget, "1500000");
        assert_eq!(draft.campaign, "Spring Launch");

        let payload = draft.validate(&FormMode::Edit { id: "l1".into() }).unwrap();
        assert_eq!(payload.budget, Some(1500000.0));
        assert_eq!(payload.assigned_to.as_deref(), Some("u1"));
        assert_eq!(payload.interested_in, None);
    }

    #[test]
    fn test_bad_budget_is_rejected() {
        let mut draft = LeadDraft::default();
        draft.set_value("name", "Omar".into());
        draft.set_value("phone", "050".into());
        draft.set_value("budget", "lots".into());
        let errors = draft.validate(&FormMode::Create).unwrap_err();
        assert_eq!(errors.get("budget"), Some(messages::INVALID_NUMBER));
    }
}

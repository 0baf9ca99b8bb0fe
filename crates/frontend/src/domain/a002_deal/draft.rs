use contracts::domain::a002_deal::aggregate::{Deal, DealDto};
use contracts::enums::DealStage;
use contracts::shared::validation::{format_decimal, format_optional_date, FieldErrors};

use crate::shared::form::{
    draft_accessors, non_empty, EntityDraft, FieldKind, FieldSpec, FormDraft, FormMode,
    OptionsSource,
};

#[derive(Debug, Clone, PartialEq)]
pub struct DealDraft {
    pub title: String,
    pub lead_id: String,
    pub unit_id: String,
    pub amount: String,
    pub stage: String,
    pub expected_close_date: String,
    pub assigned_to: String,
    pub notes: String,
}

impl Default for DealDraft {
    fn default() -> Self {
        Self {
            title: String::new(),
            lead_id: String::new(),
            unit_id: String::new(),
            amount: String::new(),
            stage: DealStage::default().code().to_string(),
            expected_close_date: String::new(),
            assigned_to: String::new(),
            notes: String::new(),
        }
    }
}

impl FormDraft for DealDraft {
    type Payload = DealDto;

    fn fields(_mode: &FormMode) -> Vec<FieldSpec> {
        vec![
            FieldSpec::text("title", "title").required(),
            FieldSpec::select("lead_id", "lead", OptionsSource::Leads),
            FieldSpec::select("unit_id", "unit", OptionsSource::Units),
            FieldSpec::number("amount", "amount").required(),
            FieldSpec::select("stage", "stage", OptionsSource::Static(DealStage::CODES)),
            FieldSpec::new("expected_close_date", "expectedCloseDate", FieldKind::Date),
            FieldSpec::select("assigned_to", "assignedTo", OptionsSource::Users),
            FieldSpec::new("notes", "notes", FieldKind::TextArea),
        ]
    }

    draft_accessors! {
        text: [title, lead_id, unit_id, amount, stage, expected_close_date, assigned_to, notes],
    }

    fn to_payload(&self, _mode: &FormMode) -> Result<DealDto, FieldErrors> {
        let mut errors = FieldErrors::new();
        let amount = errors.required_decimal("amount", &self.amount);
        let expected_close_date = errors.date("expected_close_date", &self.expected_close_date);
        errors.into_result(DealDto {
            title: self.title.trim().to_string(),
            lead_id: non_empty(&self.lead_id),
            unit_id: non_empty(&self.unit_id),
            amount,
            stage: DealStage::from_code(&self.stage).unwrap_or_default(),
            expected_close_date,
            assigned_to: non_empty(&self.assigned_to),
            notes: self.notes.clone(),
        })
    }
}

impl EntityDraft for DealDraft {
    type Entity = Deal;

    fn from_entity(deal: &Deal) -> Self {
        Self {
            title: deal.title.clone(),
            lead_id: deal.lead_id.clone().unwrap_or_default(),
            unit_id: deal.unit_id.clone().unwrap_or_default(),
            amount: format_decimal(deal.amount),
            stage: deal.stage.code().to_string(),
            expected_close_date: format_optional_date(deal.expected_close_date),
            assigned_to: deal.assigned_to.clone().unwrap_or_default(),
            notes: deal.notes.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use contracts::shared::validation::messages;

    #[test]
    fn test_amount_required() {
        let draft = DealDraft {
            title: "Villa 12".into(),
            ..Default::default()
        };
        let errors = draft.validate(&FormMode::Create).unwrap_err();
        assert_eq!(errors.get("amount"), Some(messages::FIELD_REQUIRED));
    }

    #[test]
    fn test_edit_seeds_date_and_stage() {
        let deal = Deal {
            id: "d1".into(),
            title: "Villa 12".into(),
            amount: 2750000.0,
            stage: DealStage::Negotiation,
            expected_close_date: NaiveDate::from_ymd_opt(2026, 12, 1),
            ..Default::default()
        };
        let draft = DealDraft::from_entity(&deal);
        assert_eq!(draft.amount, "2750000");
        assert_eq!(draft.stage, "negotiation");
        assert_eq!(draft.expected_close_date, "2026-12-01");

        let payload = draft.validate(&FormMode::Edit { id: "d1".into() }).unwrap();
        assert_eq!(payload.expected_close_date, deal.expected_close_date);
        assert_eq!(payload.stage, DealStage::Negotiation);
    }
}

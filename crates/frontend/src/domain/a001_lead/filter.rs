use contracts::domain::a001_lead::aggregate::Lead;
use contracts::enums::{LeadSource, LeadStatus};
use contracts::shared::validation::{format_optional_decimal, FieldErrors};

use crate::shared::form::{
    draft_accessors, non_empty, section_fields, FieldSpec, FilterDraft, FilterSection, FormDraft,
    FormMode, OptionsSource,
};
use crate::store::FilterCriteria;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct LeadFilter {
    pub status: Option<LeadStatus>,
    pub source: Option<LeadSource>,
    pub assigned_to: Option<String>,
    pub campaign: Option<String>,
    pub min_budget: Option<f64>,
}

impl FilterCriteria<Lead> for LeadFilter {
    fn matches(&self, lead: &Lead) -> bool {
        self.status.map_or(true, |s| lead.status == s)
            && self.source.map_or(true, |s| lead.source == s)
            && self
                .assigned_to
                .as_ref()
                .map_or(true, |u| lead.assigned_to.as_ref() == Some(u))
            && self
                .campaign
                .as_ref()
                .map_or(true, |c| lead.campaign.as_ref() == Some(c))
            && self
                .min_budget
                .map_or(true, |min| lead.budget.is_some_and(|b| b >= min))
    }

    fn active_count(&self) -> usize {
        [
            self.status.is_some(),
            self.source.is_some(),
            self.assigned_to.is_some(),
            self.campaign.is_some(),
            self.min_budget.is_some(),
        ]
        .iter()
        .filter(|set| **set)
        .count()
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct LeadFilterDraft {
    pub status: String,
    pub source: String,
    pub assigned_to: String,
    pub campaign: String,
    pub min_budget: String,
}

impl FormDraft for LeadFilterDraft {
    type Payload = LeadFilter;
    const INLINE_ERRORS: bool = true;

    fn fields(_mode: &FormMode) -> Vec<FieldSpec> {
        section_fields(Self::sections())
    }

    draft_accessors! {
        text: [status, source, assigned_to, campaign, min_budget],
    }

    fn to_payload(&self, _mode: &FormMode) -> Result<LeadFilter, FieldErrors> {
        let mut errors = FieldErrors::new();
        let min_budget = errors.decimal("min_budget", &self.min_budget);
        errors.into_result(LeadFilter {
            status: LeadStatus::from_code(&self.status),
            source: LeadSource::from_code(&self.source),
            assigned_to: non_empty(&self.assigned_to),
            campaign: non_empty(&self.campaign),
            min_budget,
        })
    }
}

impl FilterDraft for LeadFilterDraft {
    fn sections() -> Vec<FilterSection> {
        vec![
            FilterSection {
                title: "pipeline",
                fields: vec![
                    FieldSpec::select("status", "status", OptionsSource::Static(LeadStatus::CODES)),
                    FieldSpec::select("source", "source", OptionsSource::Static(LeadSource::CODES)),
                ],
            },
            FilterSection {
                title: "ownership",
                fields: vec![
                    FieldSpec::select("assigned_to", "assignedTo", OptionsSource::Users),
                    FieldSpec::select("campaign", "campaign", OptionsSource::CampaignNames),
                ],
            },
            FilterSection {
                title: "budget",
                fields: vec![FieldSpec::number("min_budget", "minBudget")],
            },
        ]
    }

    fn from_criteria(criteria: &LeadFilter) -> Self {
        Self {
            status: criteria.status.map(|s| s.code().to_string()).unwrap_or_default(),
            source: criteria.source.map(|s| s.code().to_string()).unwrap_or_default(),
            assigned_to: criteria.assigned_to.clone().unwrap_or_default(),
            campaign: criteria.campaign.clone().unwrap_or_default(),
            min_budget: format_optional_decimal(criteria.min_budget),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::filter_items;

    fn lead(id: &str, status: LeadStatus, budget: Option<f64>) -> Lead {
        Lead {
            id: id.into(),
            name: id.into(),
            status,
            budget,
            ..Default::default()
        }
    }

    #[test]
    fn test_default_matches_everything() {
        let leads = vec![
            lead("a", LeadStatus::New, None),
            lead("b", LeadStatus::Won, Some(10.0)),
        ];
        assert_eq!(filter_items(&leads, &LeadFilter::default()).len(), 2);
        assert_eq!(LeadFilter::default().active_count(), 0);
    }

    #[test]
    fn test_status_filter() {
        let leads = vec![
            lead("a", LeadStatus::New, None),
            lead("b", LeadStatus::Qualified, None),
            lead("c", LeadStatus::Qualified, None),
        ];
        let draft = LeadFilterDraft {
            status: "qualified".into(),
            ..Default::default()
        };
        let criteria = draft.criteria().unwrap();
        let visible = filter_items(&leads, &criteria);
        assert_eq!(visible.iter().map(|l| l.id.as_str()).collect::<Vec<_>>(), vec!["b", "c"]);
        assert_eq!(criteria.active_count(), 1);
    }

    #[test]
    fn test_min_budget_excludes_unknown_budgets() {
        let criteria = LeadFilter {
            min_budget: Some(100.0),
            ..Default::default()
        };
        assert!(criteria.matches(&lead("a", LeadStatus::New, Some(150.0))));
        assert!(!criteria.matches(&lead("b", LeadStatus::New, Some(50.0))));
        assert!(!criteria.matches(&lead("c", LeadStatus::New, None)));
    }

    #[test]
    fn test_drawer_round_trips_applied_criteria() {
        let criteria = LeadFilter {
            source: Some(LeadSource::WalkIn),
            min_budget: Some(2500.5),
            ..Default::default()
        };
        assert_eq!(LeadFilterDraft::from_criteria(&criteria).criteria().unwrap(), criteria);
    }
}

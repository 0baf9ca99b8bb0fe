use contracts::domain::a002_deal::aggregate::Deal;
use contracts::enums::DealStage;
use contracts::shared::validation::{format_optional_decimal, FieldErrors};

use crate::shared::form::{
    draft_accessors, non_empty, section_fields, FieldSpec, FilterDraft, FilterSection, FormDraft,
    FormMode, OptionsSource,
};
use crate::store::FilterCriteria;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DealFilter {
    pub stage: Option<DealStage>,
    pub assigned_to: Option<String>,
    pub min_amount: Option<f64>,
    pub max_amount: Option<f64>,
}

impl FilterCriteria<Deal> for DealFilter {
    fn matches(&self, deal: &Deal) -> bool {
        self.stage.map_or(true, |s| deal.stage == s)
            && self
                .assigned_to
                .as_ref()
                .map_or(true, |u| deal.assigned_to.as_ref() == Some(u))
            && self.min_amount.map_or(true, |min| deal.amount >= min)
            && self.max_amount.map_or(true, |max| deal.amount <= max)
    }

    fn active_count(&self) -> usize {
        usize::from(self.stage.is_some())
            + usize::from(self.assigned_to.is_some())
            + usize::from(self.min_amount.is_some())
            + usize::from(self.max_amount.is_some())
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DealFilterDraft {
    pub stage: String,
    pub assigned_to: String,
    pub min_amount: String,
    pub max_amount: String,
}

impl FormDraft for DealFilterDraft {
    type Payload = DealFilter;
    const INLINE_ERRORS: bool = true;

    fn fields(_mode: &FormMode) -> Vec<FieldSpec> {
        section_fields(Self::sections())
    }

    draft_accessors! {
        text: [stage, assigned_to, min_amount, max_amount],
    }

    fn to_payload(&self, _mode: &FormMode) -> Result<DealFilter, FieldErrors> {
        let mut errors = FieldErrors::new();
        let min_amount = errors.decimal("min_amount", &self.min_amount);
        let max_amount = errors.decimal("max_amount", &self.max_amount);
        errors.into_result(DealFilter {
            stage: DealStage::from_code(&self.stage),
            assigned_to: non_empty(&self.assigned_to),
            min_amount,
            max_amount,
        })
    }
}

impl FilterDraft for DealFilterDraft {
    fn sections() -> Vec<FilterSection> {
        vec![
            FilterSection {
                title: "pipeline",
                fields: vec![
                    FieldSpec::select("stage", "stage", OptionsSource::Static(DealStage::CODES)),
                    FieldSpec::select("assigned_to", "assignedTo", OptionsSource::Users),
                ],
            },
            FilterSection {
                title: "amount",
                fields: vec![
                    FieldSpec::number("min_amount", "minAmount"),
                    FieldSpec::number("max_amount", "maxAmount"),
                ],
            },
        ]
    }

    fn from_criteria(criteria: &DealFilter) -> Self {
        Self {
            stage: criteria.stage.map(|s| s.code().to_string()).unwrap_or_default(),
            assigned_to: criteria.assigned_to.clone().unwrap_or_default(),
            min_amount: format_optional_decimal(criteria.min_amount),
            max_amount: format_optional_decimal(criteria.max_amount),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::filter_items;

    fn deal(id: &str, stage: DealStage, amount: f64) -> Deal {
        Deal {
            id: id.into(),
            title: id.into(),
            stage,
            amount,
            ..Default::default()
        }
    }

    #[test]
    fn test_amount_range() {
        let deals = vec![
            deal("a", DealStage::Proposal, 100.0),
            deal("b", DealStage::Proposal, 500.0),
            deal("c", DealStage::ClosedWon, 900.0),
        ];
        let criteria = DealFilter {
            min_amount: Some(200.0),
            max_amount: Some(900.0),
            ..Default::default()
        };
        let ids: Vec<_> = filter_items(&deals, &criteria).into_iter().map(|d| d.id).collect();
        assert_eq!(ids, vec!["b", "c"]);
        assert_eq!(criteria.active_count(), 2);
    }

    #[test]
    fn test_stage_filter() {
        let deals = vec![deal("a", DealStage::Proposal, 1.0), deal("b", DealStage::ClosedLost, 1.0)];
        let criteria = DealFilter {
            stage: Some(DealStage::ClosedLost),
            ..Default::default()
        };
        assert_eq!(filter_items(&deals, &criteria).len(), 1);
        assert_eq!(filter_items(&deals, &DealFilter::default()).len(), 2);
    }
}

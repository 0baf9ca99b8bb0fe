use contracts::domain::a003_unit::aggregate::Unit;
use contracts::enums::{UnitStatus, UnitType};
use contracts::shared::validation::{format_optional_decimal, FieldErrors};

use crate::shared::form::{
    draft_accessors, non_empty, section_fields, FieldSpec, FilterDraft, FilterSection, FormDraft,
    FormMode, OptionsSource,
};
use crate::store::FilterCriteria;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct UnitFilter {
    pub status: Option<UnitStatus>,
    pub unit_type: Option<UnitType>,
    pub project_id: Option<String>,
    pub max_price: Option<f64>,
}

impl FilterCriteria<Unit> for UnitFilter {
    fn matches(&self, unit: &Unit) -> bool {
        self.status.map_or(true, |s| unit.status == s)
            && self.unit_type.map_or(true, |t| unit.unit_type == t)
            && self.project_id.as_ref().map_or(true, |p| &unit.project_id == p)
            && self.max_price.map_or(true, |max| unit.price <= max)
    }

    fn active_count(&self) -> usize {
        usize::from(self.status.is_some())
            + usize::from(self.unit_type.is_some())
            + usize::from(self.project_id.is_some())
            + usize::from(self.max_price.is_some())
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct UnitFilterDraft {
    pub status: String,
    pub unit_type: String,
    pub project_id: String,
    pub max_price: String,
}

impl FormDraft for UnitFilterDraft {
    type Payload = UnitFilter;
    const INLINE_ERRORS: bool = true;

    fn fields(_mode: &FormMode) -> Vec<FieldSpec> {
        section_fields(Self::sections())
    }

    draft_accessors! {
        text: [status, unit_type, project_id, max_price],
    }

    fn to_payload(&self, _mode: &FormMode) -> Result<UnitFilter, FieldErrors> {
        let mut errors = FieldErrors::new();
        let max_price = errors.decimal("max_price", &self.max_price);
        errors.into_result(UnitFilter {
            status: UnitStatus::from_code(&self.status),
            unit_type: UnitType::from_code(&self.unit_type),
            project_id: non_empty(&self.project_id),
            max_price,
        })
    }
}

impl FilterDraft for UnitFilterDraft {
    fn sections() -> Vec<FilterSection> {
        vec![
            FilterSection {
                title: "availability",
                fields: vec![
                    FieldSpec::select("status", "status", OptionsSource::Static(UnitStatus::CODES)),
                    FieldSpec::select(
                        "unit_type",
                        "unitType",
                        OptionsSource::Static(UnitType::CODES),
                    ),
                ],
            },
            FilterSection {
                title: "location",
                fields: vec![FieldSpec::select("project_id", "project", OptionsSource::Projects)],
            },
            FilterSection {
                title: "price",
                fields: vec![FieldSpec::number("max_price", "maxPrice")],
            },
        ]
    }

    fn from_criteria(criteria: &UnitFilter) -> Self {
        Self {
            status: criteria.status.map(|s| s.code().to_string()).unwrap_or_default(),
            unit_type: criteria.unit_type.map(|t| t.code().to_string()).unwrap_or_default(),
            project_id: criteria.project_id.clone().unwrap_or_default(),
            max_price: format_optional_decimal(criteria.max_price),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::filter_items;
    use contracts::shared::validation::messages;

    #[test]
    fn test_status_and_type() {
        let units = vec![
            Unit {
                id: "1".into(),
                unit_type: UnitType::Villa,
                status: UnitStatus::Available,
                ..Default::default()
            },
            Unit {
                id: "2".into(),
                unit_type: UnitType::Villa,
                status: UnitStatus::Sold,
                ..Default::default()
            },
            Unit {
                id: "3".into(),
                unit_type: UnitType::Office,
                status: UnitStatus::Available,
                ..Default::default()
            },
        ];
        let criteria = UnitFilter {
            status: Some(UnitStatus::Available),
            unit_type: Some(UnitType::Villa),
            ..Default::default()
        };
        let kept = filter_items(&units, &criteria);
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].id, "1");
    }

    #[test]
    fn test_bad_price_blocks_apply() {
        let draft = UnitFilterDraft {
            max_price: "cheap".into(),
            ..Default::default()
        };
        let errors = draft.criteria().unwrap_err();
        assert_eq!(errors.get("max_price"), Some(messages::INVALID_NUMBER));
    }

    #[test]
    fn test_draft_roundtrips_applied_criteria() {
        let criteria = UnitFilter {
            project_id: Some("p1".into()),
            max_price: Some(900000.0),
            ..Default::default()
        };
        let draft = UnitFilterDraft::from_criteria(&criteria);
        assert_eq!(draft.max_price, "900000");
        assert_eq!(draft.criteria().unwrap(), criteria);
    }
}

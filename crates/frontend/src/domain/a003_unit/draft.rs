use contracts::domain::a003_unit::aggregate::{Unit, UnitDto};
use contracts::enums::{UnitStatus, UnitType};
use contracts::shared::validation::{format_decimal, format_optional_decimal, FieldErrors};

use crate::shared::form::{
    draft_accessors, non_empty, EntityDraft, FieldSpec, FormDraft, FormMode, OptionsSource,
};

#[derive(Debug, Clone, PartialEq)]
pub struct UnitDraft {
    pub code: String,
    pub project_id: String,
    pub unit_type: String,
    pub status: String,
    pub area: String,
    pub bedrooms: String,
    pub price: String,
    pub floor: String,
    pub owner_id: String,
}

impl Default for UnitDraft {
    fn default() -> Self {
        Self {
            code: String::new(),
            project_id: String::new(),
            unit_type: UnitType::default().code().to_string(),
            status: UnitStatus::default().code().to_string(),
            area: String::new(),
            bedrooms: String::new(),
            price: String::new(),
            floor: String::new(),
            owner_id: String::new(),
        }
    }
}

impl FormDraft for UnitDraft {
    type Payload = UnitDto;

    fn fields(_mode: &FormMode) -> Vec<FieldSpec> {
        vec![
            FieldSpec::text("code", "code").required(),
            FieldSpec::select("project_id", "project", OptionsSource::Projects).required(),
            FieldSpec::select("unit_type", "unitType", OptionsSource::Static(UnitType::CODES)),
            FieldSpec::select("status", "status", OptionsSource::Static(UnitStatus::CODES)),
            FieldSpec::number("area", "area"),
            FieldSpec::number("bedrooms", "bedrooms"),
            FieldSpec::number("price", "price").required(),
            FieldSpec::number("floor", "floor"),
            FieldSpec::select("owner_id", "owner", OptionsSource::Owners),
        ]
    }

    draft_accessors! {
        text: [code, project_id, unit_type, status, area, bedrooms, price, floor, owner_id],
    }

    fn to_payload(&self, _mode: &FormMode) -> Result<UnitDto, FieldErrors> {
        let mut errors = FieldErrors::new();
        let area = errors.decimal("area", &self.area);
        let bedrooms = errors.integer("bedrooms", &self.bedrooms);
        let price = errors.required_decimal("price", &self.price);
        let floor = errors.integer("floor", &self.floor);
        errors.into_result(UnitDto {
            code: self.code.trim().to_string(),
            project_id: self.project_id.trim().to_string(),
            unit_type: UnitType::from_code(&self.unit_type).unwrap_or_default(),
            status: UnitStatus::from_code(&self.status).unwrap_or_default(),
            area,
            bedrooms,
            price,
            floor,
            owner_id: non_empty(&self.owner_id),
        })
    }
}

impl EntityDraft for UnitDraft {
    type Entity = Unit;

    fn from_entity(unit: &Unit) -> Self {
        Self {
            code: unit.code.clone(),
            project_id: unit.project_id.clone(),
            unit_type: unit.unit_type.code().to_string(),
            status: unit.status.code().to_string(),
            area: format_optional_decimal(unit.area),
            bedrooms: unit.bedrooms.map(|b| b.to_string()).unwrap_or_default(),
            price: format_decimal(unit.price),
            floor: unit.floor.map(|f| f.to_string()).unwrap_or_default(),
            owner_id: unit.owner_id.clone().unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::shared::validation::messages;

    fn filled() -> UnitDraft {
        UnitDraft {
            code: "A-1203".into(),
            project_id: "p1".into(),
            price: "1850000".into(),
            ..Default::default()
        }
    }

    #[test]
    fn test_project_is_required() {
        let draft = UnitDraft {
            project_id: String::new(),
            ..filled()
        };
        let errors = draft.validate(&FormMode::Create).unwrap_err();
        assert_eq!(errors.get("project_id"), Some(messages::FIELD_REQUIRED));
    }

    #[test]
    fn test_integers_parse() {
        let draft = UnitDraft {
            bedrooms: "3".into(),
            floor: "-1".into(),
            ..filled()
        };
        let payload = draft.validate(&FormMode::Create).unwrap();
        assert_eq!(payload.bedrooms, Some(3));
        assert_eq!(payload.floor, Some(-1));
        assert_eq!(payload.unit_type, UnitType::Apartment);
    }

    #[test]
    fn test_fractional_bedrooms_rejected() {
        let draft = UnitDraft {
            bedrooms: "2.5".into(),
            ..filled()
        };
        let errors = draft.validate(&FormMode::Create).unwrap_err();
        assert_eq!(errors.get("bedrooms"), Some(messages::INVALID_NUMBER));
    }

    #[test]
    fn test_edit_seeds_from_unit() {
        let unit = Unit {
            id: "u1".into(),
            code: "B-07".into(),
            project_id: "p2".into(),
            unit_type: UnitType::Villa,
            status: UnitStatus::Reserved,
            area: Some(320.5),
            price: 4200000.0,
            owner_id: Some("o1".into()),
            ..Default::default()
        };
        let draft = UnitDraft::from_entity(&unit);
        assert_eq!(draft.unit_type, "villa");
        assert_eq!(draft.status, "reserved");
        assert_eq!(draft.area, "320.5");
        assert_eq!(draft.price, "4200000");
        assert_eq!(draft.bedrooms, "");
        assert_eq!(draft.owner_id, "o1");
    }
}

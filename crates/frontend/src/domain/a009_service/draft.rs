use contracts::domain::a009_service::aggregate::{Service, ServiceDto};
use contracts::shared::validation::{format_decimal, FieldErrors};

use crate::shared::form::{
    draft_accessors, non_empty, EntityDraft, FieldKind, FieldSpec, FormDraft, FormMode,
    OptionsSource,
};

#[derive(Debug, Clone, PartialEq)]
pub struct ServiceDraft {
    pub name: String,
    pub price: String,
    pub duration_minutes: String,
    /// Provider name
    pub provider: String,
    pub description: String,
    pub is_active: bool,
}

impl Default for ServiceDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            price: String::new(),
            duration_minutes: String::new(),
            provider: String::new(),
            description: String::new(),
            is_active: true,
        }
    }
}

impl FormDraft for ServiceDraft {
    type Payload = ServiceDto;

    fn fields(_mode: &FormMode) -> Vec<FieldSpec> {
        vec![
            FieldSpec::text("name", "name").required(),
            FieldSpec::number("price", "price").required(),
            FieldSpec::number("duration_minutes", "durationMinutes"),
            FieldSpec::select("provider", "provider", OptionsSource::ServiceProviderNames),
            FieldSpec::new("description", "description", FieldKind::TextArea),
            FieldSpec::new("is_active", "isActive", FieldKind::Checkbox),
        ]
    }

    draft_accessors! {
        text: [name, price, duration_minutes, provider, description],
        flag: [is_active],
    }

    fn to_payload(&self, _mode: &FormMode) -> Result<ServiceDto, FieldErrors> {
        let mut errors = FieldErrors::new();
        let price = errors.required_decimal("price", &self.price);
        let duration_minutes = errors.integer("duration_minutes", &self.duration_minutes);
        errors.into_result(ServiceDto {
            name: self.name.trim().to_string(),
            price,
            duration_minutes,
            provider: non_empty(&self.provider),
            description: self.description.clone(),
            is_active: self.is_active,
        })
    }
}

impl EntityDraft for ServiceDraft {
    type Entity = Service;

    fn from_entity(service: &Service) -> Self {
        Self {
            name: service.name.clone(),
            price: format_decimal(service.price),
            duration_minutes: service
                .duration_minutes
                .map(|m| m.to_string())
                .unwrap_or_default(),
            provider: service.provider.clone().unwrap_or_default(),
            description: service.description.clone(),
            is_active: service.is_active,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::shared::validation::messages;

    #[test]
    fn test_price_accepts_decimal_comma() {
        let draft = ServiceDraft {
            name: "Deep cleaning".into(),
            price: "349,50".into(),
            duration_minutes: "180".into(),
            ..Default::default()
        };
        let payload = draft.validate(&FormMode::Create).unwrap();
        assert_eq!(payload.price, 349.5);
        assert_eq!(payload.duration_minutes, Some(180));
        assert!(payload.is_active);
    }

    #[test]
    fn test_missing_price() {
        let draft = ServiceDraft {
            name: "Deep cleaning".into(),
            ..Default::default()
        };
        let errors = draft.validate(&FormMode::Create).unwrap_err();
        assert_eq!(errors.get("price"), Some(messages::FIELD_REQUIRED));
    }

    #[test]
    fn test_edit_seeds_every_field() {
        let service = Service {
            id: "s1".into(),
            name: "Deep cleaning".into(),
            price: 349.5,
            duration_minutes: Some(180),
            provider: Some("CleanCo".into()),
            description: "Whole apartment".into(),
            is_active: false,
        };
        let draft = ServiceDraft::from_entity(&service);
        assert_eq!(draft.price, "349.5");
        assert!(!draft.is_active);
        assert_eq!(
            draft.validate(&FormMode::Edit { id: "s1".into() }).unwrap(),
            ServiceDto {
                name: "Deep cleaning".into(),
                price: 349.5,
                duration_minutes: Some(180),
                provider: Some("CleanCo".into()),
                description: "Whole apartment".into(),
                is_active: false,
            }
        );
    }
}

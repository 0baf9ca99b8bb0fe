use contracts::domain::a014_integration_account::aggregate::{
    IntegrationAccount, IntegrationAccountDto,
};
use contracts::enums::IntegrationPlatform;
use contracts::shared::validation::{messages, FieldErrors};

use crate::shared::form::{
    draft_accessors, EntityDraft, FieldKind, FieldSpec, FormDraft, FormMode, OptionsSource,
};

#[derive(Debug, Clone, PartialEq)]
pub struct IntegrationAccountDraft {
    pub name: String,
    pub platform: String,
    pub account_id: String,
    pub access_token: String,
    pub is_active: bool,
}

impl Default for IntegrationAccountDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            platform: IntegrationPlatform::default().code().to_string(),
            account_id: String::new(),
            access_token: String::new(),
            is_active: true,
        }
    }
}

impl FormDraft for IntegrationAccountDraft {
    type Payload = IntegrationAccountDto;

    fn fields(_mode: &FormMode) -> Vec<FieldSpec> {
        vec![
            FieldSpec::text("name", "name").required(),
            FieldSpec::select(
                "platform",
                "platform",
                OptionsSource::Static(IntegrationPlatform::CODES),
            )
            .required(),
            FieldSpec::text("account_id", "accountId").required(),
            FieldSpec::new("access_token", "accessToken", FieldKind::Password),
            FieldSpec::new("is_active", "isActive", FieldKind::Checkbox),
        ]
    }

    draft_accessors! {
        text: [name, platform, account_id, access_token],
        flag: [is_active],
    }

    fn to_payload(&self, _mode: &FormMode) -> Result<IntegrationAccountDto, FieldErrors> {
        let mut errors = FieldErrors::new();
        let platform = IntegrationPlatform::from_code(&self.platform);
        if platform.is_none() && !self.platform.trim().is_empty() {
            errors.insert("platform", messages::FIELD_REQUIRED);
        }
        errors.into_result(IntegrationAccountDto {
            name: self.name.trim().to_string(),
            platform: platform.unwrap_or_default(),
            account_id: self.account_id.trim().to_string(),
            access_token: self.access_token.clone(),
            is_active: self.is_active,
        })
    }
}

impl EntityDraft for IntegrationAccountDraft {
    type Entity = IntegrationAccount;

    fn from_entity(account: &IntegrationAccount) -> Self {
        Self {
            name: account.name.clone(),
            platform: account.platform.code().to_string(),
            account_id: account.account_id.clone(),
            access_token: account.access_token.clone(),
            is_active: account.is_active,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_platform_cleared_is_rejected() {
        let draft = IntegrationAccountDraft {
            name: "Meta ads".into(),
            platform: String::new(),
            account_id: "act_1029".into(),
            ..Default::default()
        };
        let errors = draft.validate(&FormMode::Create).unwrap_err();
        assert_eq!(errors.get("platform"), Some(messages::FIELD_REQUIRED));
    }

    #[test]
    fn test_account_payload() {
        let draft = IntegrationAccountDraft {
            name: "WhatsApp line".into(),
            platform: "whatsapp".into(),
            account_id: "9715000".into(),
            access_token: "secret".into(),
            ..Default::default()
        };
        let payload = draft.validate(&FormMode::Create).unwrap();
        assert_eq!(payload.platform, IntegrationPlatform::Whatsapp);
        assert!(payload.is_active);
    }

    #[test]
    fn test_edit_seeds_every_field() {
        let account = IntegrationAccount {
            id: "ia1".into(),
            name: "WhatsApp line".into(),
            platform: IntegrationPlatform::Whatsapp,
            account_id: "9715000".into(),
            access_token: "secret".into(),
            is_active: false,
        };
        let draft = IntegrationAccountDraft::from_entity(&account);
        assert_eq!(draft.platform, "whatsapp");
        assert_eq!(
            draft.validate(&FormMode::Edit { id: "ia1".into() }).unwrap(),
            IntegrationAccountDto {
                name: "WhatsApp line".into(),
                platform: IntegrationPlatform::Whatsapp,
                account_id: "9715000".into(),
                access_token: "secret".into(),
                is_active: false,
            }
        );
    }
}

//! User form. Unlike the entity modals it renders validation messages under
//! each input, and the password exists only when creating.

use contracts::enums::UserRole;
use contracts::shared::validation::FieldErrors;
use contracts::system::users::{User, UserDto};

use crate::shared::form::{
    draft_accessors, EntityDraft, FieldKind, FieldSpec, FormDraft, FormMode, OptionsSource,
};

#[derive(Debug, Clone, PartialEq)]
pub struct UserDraft {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub role: String,
    pub is_active: bool,
    pub password: String,
}

impl Default for UserDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            phone: String::new(),
            role: UserRole::default().code().to_string(),
            is_active: true,
            password: String::new(),
        }
    }
}

impl FormDraft for UserDraft {
    type Payload = UserDto;
    const INLINE_ERRORS: bool = true;

    fn fields(mode: &FormMode) -> Vec<FieldSpec> {
        let mut fields = vec![
            FieldSpec::text("name", "name").required(),
            FieldSpec::new("email", "email", FieldKind::Email).required(),
            FieldSpec::new("phone", "phone", FieldKind::Phone),
            FieldSpec::select("role", "role", OptionsSource::Static(UserRole::CODES)).required(),
            FieldSpec::new("is_active", "isActive", FieldKind::Checkbox),
        ];
        if !mode.is_edit() {
            fields.push(FieldSpec::new("password", "password", FieldKind::Password).required());
        }
        fields
    }

    draft_accessors! {
        text: [name, email, phone, role, password],
        flag: [is_active],
    }

    fn to_payload(&self, mode: &FormMode) -> Result<UserDto, FieldErrors> {
        let mut errors = FieldErrors::new();
        errors.email("email", &self.email);
        let role = UserRole::from_code(&self.role).unwrap_or_default();
        let password = if mode.is_edit() {
            None
        } else {
            errors.password("password", &self.password);
            Some(self.password.clone())
        };
        errors.into_result(UserDto {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            phone: self.phone.trim().to_string(),
            role,
            is_active: self.is_active,
            password,
        })
    }
}

impl EntityDraft for UserDraft {
    type Entity = User;

    fn from_entity(user: &User) -> Self {
        Self {
            name: user.name.clone(),
            email: user.email.clone(),
            phone: user.phone.clone(),
            role: user.role.code().to_string(),
            is_active: user.is_active,
            password: String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::form::{submit_draft, DraftForm, FieldValue, SubmitOutcome};
    use contracts::shared::validation::messages;
    use std::cell::{Cell, RefCell};

    fn valid() -> UserDraft {
        UserDraft {
            name: "Sara".into(),
            email: "sara@crm.ae".into(),
            password: "secret1".into(),
            ..Default::default()
        }
    }

    #[test]
    fn test_password_only_when_creating() {
        let create: Vec<_> = UserDraft::fields(&FormMode::Create).iter().map(|f| f.key).collect();
        let edit: Vec<_> = UserDraft::fields(&FormMode::Edit { id: "u1".into() })
            .iter()
            .map(|f| f.key)
            .collect();
        assert!(create.contains(&"password"));
        assert!(!edit.contains(&"password"));

        let payload = valid().validate(&FormMode::Edit { id: "u1".into() }).unwrap();
        assert_eq!(payload.password, None);
    }

    #[test]
    fn test_short_password() {
        let draft = UserDraft {
            password: "12345".into(),
            ..valid()
        };
        let errors = draft.validate(&FormMode::Create).unwrap_err();
        assert_eq!(errors.get("password"), Some(messages::PASSWORD_TOO_SHORT));
    }

    #[test]
    fn test_empty_email_message() {
        let draft = UserDraft {
            email: String::new(),
            ..valid()
        };
        let errors = draft.validate(&FormMode::Create).unwrap_err();
        assert_eq!(errors.get("email"), Some(messages::EMAIL_REQUIRED));
    }

    #[test]
    fn test_edit_seeds_every_field() {
        let user = User {
            id: "u1".into(),
            name: "Sara".into(),
            email: "sara@crm.ae".into(),
            phone: "+971500000002".into(),
            role: UserRole::Manager,
            is_active: false,
        };
        let draft = UserDraft::from_entity(&user);
        assert_eq!(draft.role, UserRole::Manager.code());
        assert_eq!(
            draft.validate(&FormMode::Edit { id: "u1".into() }).unwrap(),
            UserDto {
                name: "Sara".into(),
                email: "sara@crm.ae".into(),
                phone: "+971500000002".into(),
                role: UserRole::Manager,
                is_active: false,
                password: None,
            }
        );
    }

    #[tokio::test]
    async fn invalid_email_is_shown_and_user_not_added() {
        let mut form = DraftForm::<UserDraft>::closed();
        form.open_create();
        form.set_field("name", FieldValue::from("Sara"));
        form.set_field("email", FieldValue::from("not-an-email"));
        form.set_field("password", FieldValue::from("secret1"));
        let cell = RefCell::new(form);
        let calls = Cell::new(0);

        let outcome = submit_draft(&cell, |_, _| {
            calls.set(calls.get() + 1);
            async { Ok(()) }
        })
        .await;

        assert_eq!(calls.get(), 0);
        assert!(matches!(outcome, SubmitOutcome::Invalid(_)));
        let form = cell.borrow();
        assert_eq!(form.errors.get("email"), Some(messages::INVALID_EMAIL));
        assert!(form.is_open());
    }
}

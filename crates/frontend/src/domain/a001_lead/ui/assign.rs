use contracts::domain::a001_lead::aggregate::AssignLeadsRequest;
use contracts::shared::validation::FieldErrors;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::shared::components::entity_form_modal::{settle_submit, DraftModal};
use crate::shared::form::{
    draft_accessors, FieldKind, FieldSpec, FormDraft, FormMode, OptionsSource, DraftForm,
    submit_draft,
};
use crate::shared::i18n::use_i18n;
use crate::store::use_store;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AssignLeadsDraft {
    pub lead_ids: Vec<String>,
    pub user_id: String,
}

impl FormDraft for AssignLeadsDraft {
    type Payload = AssignLeadsRequest;

    fn fields(_mode: &FormMode) -> Vec<FieldSpec> {
        vec![
            FieldSpec::new("lead_ids", "leads", FieldKind::MultiSelect(OptionsSource::Leads)).required(),
            FieldSpec::select("user_id", "assignTo", OptionsSource::Users).required(),
        ]
    }

    draft_accessors! {
        text: [user_id],
        list: [lead_ids],
    }

    fn to_payload(&self, _mode: &FormMode) -> Result<AssignLeadsRequest, FieldErrors> {
        Ok(AssignLeadsRequest {
            lead_ids: self
                .lead_ids
                .iter()
                .filter(|id| !id.trim().is_empty())
                .cloned()
                .collect(),
            user_id: self.user_id.trim().to_string(),
        })
    }
}

/// Bulk assignment of leads to one user, driven by `store.assign_open`
#[component]
pub fn AssignLeadsModal() -> impl IntoView {
    let store = use_store();
    let i18n = use_i18n();
    let form = RwSignal::new(DraftForm::<AssignLeadsDraft>::closed());

    Effect::new(move |_| {
        if store.assign_open.get() {
            form.update(|f| f.open_create());
        } else {
            form.update(|f| f.close());
        }
    });

    let on_close = Callback::new(move |_| store.assign_open.set(false));

    let on_submit = Callback::new(move |_| {
        spawn_local(async move {
            let outcome = submit_draft(&form, |_, request: AssignLeadsRequest| {
                store.assign_leads(request.lead_ids, request.user_id)
            })
            .await;
            if settle_submit::<AssignLeadsDraft>(outcome, &FormMode::Create, "assigning leads", &i18n) {
                store.assign_open.set(false);
            }
        });
    });

    view! {
        <DraftModal
            form=form
            title=Signal::derive(move || i18n.t("assignLeads"))
            on_close=on_close
            on_submit=on_submit
        />
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::shared::validation::messages;

    #[test]
    fn test_both_fields_required() {
        let errors = AssignLeadsDraft::default().validate(&FormMode::Create).unwrap_err();
        assert_eq!(errors.get("lead_ids"), Some(messages::SELECT_AT_LEAST_ONE));
        assert_eq!(errors.get("user_id"), Some(messages::FIELD_REQUIRED));
    }

    #[test]
    fn test_payload_keeps_selected_leads() {
        let draft = AssignLeadsDraft {
            lead_ids: vec!["l1".into(), "l3".into()],
            user_id: "u2".into(),
        };
        let request = draft.validate(&FormMode::Create).unwrap();
        assert_eq!(request.lead_ids, vec!["l1".to_string(), "l3".to_string()]);
        assert_eq!(request.user_id, "u2");
    }
}

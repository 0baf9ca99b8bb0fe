use contracts::domain::a001_lead::task::ClientTaskDto;
use contracts::shared::validation::FieldErrors;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::shared::components::entity_form_modal::{settle_submit, DraftModal};
use crate::shared::form::{draft_accessors, submit_draft, DraftForm, FieldKind, FieldSpec, FormDraft, FormMode};
use crate::shared::i18n::use_i18n;
use crate::store::use_store;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ClientTaskDraft {
    pub title: String,
    pub due_date: String,
    pub notes: String,
}

impl FormDraft for ClientTaskDraft {
    type Payload = ClientTaskDto;

    fn fields(_mode: &FormMode) -> Vec<FieldSpec> {
        vec![
            FieldSpec::text("title", "title").required(),
            FieldSpec::new("due_date", "dueDate", FieldKind::Date),
            FieldSpec::new("notes", "notes", FieldKind::TextArea),
        ]
    }

    draft_accessors! {
        text: [title, due_date, notes],
    }

    fn to_payload(&self, _mode: &FormMode) -> Result<ClientTaskDto, FieldErrors> {
        let mut errors = FieldErrors::new();
        let due_date = errors.date("due_date", &self.due_date);
        errors.into_result(ClientTaskDto {
            title: self.title.trim().to_string(),
            due_date,
            notes: self.notes.clone(),
        })
    }
}

/// Adds a follow-up task to `store.task_for`
#[component]
pub fn AddClientTaskModal() -> impl IntoView {
    let store = use_store();
    let i18n = use_i18n();
    let form = RwSignal::new(DraftForm::<ClientTaskDraft>::closed());

    Effect::new(move |_| {
        let open = store.task_for.with(|lead| lead.is_some());
        form.update(|f| if open { f.open_create() } else { f.close() });
    });

    let title = Signal::derive(move || {
        let lead_name = store
            .task_for
            .with(|lead| lead.as_ref().map(|l| l.name.clone()))
            .unwrap_or_default();
        format!("{}: {}", i18n.t("addTask"), lead_name)
    });

    let on_close = Callback::new(move |_| store.task_for.set(None));

    let on_submit = Callback::new(move |_| {
        let Some(lead_id) = store.task_for.with_untracked(|lead| lead.as_ref().map(|l| l.id.clone())) else {
            return;
        };
        spawn_local(async move {
            let outcome = submit_draft(&form, |_, dto: ClientTaskDto| async move {
                store.add_client_task(lead_id, dto).await.map(|_| ())
            })
            .await;
            if settle_submit::<ClientTaskDraft>(outcome, &FormMode::Create, "adding client task", &i18n) {
                store.task_for.set(None);
            }
        });
    });

    view! {
        <DraftModal form=form title=title on_close=on_close on_submit=on_submit />
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use contracts::shared::validation::messages;

    #[test]
    fn test_due_date_parsing() {
        let draft = ClientTaskDraft {
            title: "Site visit".into(),
            due_date: "2026-11-03".into(),
            notes: String::new(),
        };
        let dto = draft.validate(&FormMode::Create).unwrap();
        assert_eq!(dto.due_date, NaiveDate::from_ymd_opt(2026, 11, 3));

        let bad = ClientTaskDraft {
            due_date: "03/11/2026".into(),
            ..draft
        };
        let errors = bad.validate(&FormMode::Create).unwrap_err();
        assert_eq!(errors.get("due_date"), Some(messages::INVALID_DATE));
    }

    #[test]
    fn test_title_required() {
        let errors = ClientTaskDraft::default().validate(&FormMode::Create).unwrap_err();
        assert!(errors.contains("title"));
    }
}

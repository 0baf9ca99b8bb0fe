//! Create/edit modal shared by every entity.

use contracts::domain::common::CrmEntity;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::{Button, ButtonAppearance};

use crate::shared::components::form_fields::FormFields;
use crate::shared::form::{submit_draft, DraftForm, EntityDraft, FormDraft, FormMode, SubmitOutcome};
use crate::shared::i18n::{use_i18n, I18n};
use crate::shared::modal::Modal;
use crate::shared::notify;
use crate::store::EntityCollection;

/// Follows `collection.add_open` / `collection.editing`, mirrors them into
/// `form` and submits the draft through the collection's `create`/`update`.
#[component]
pub fn EntityFormModal<D: EntityDraft>(
    form: RwSignal<DraftForm<D>>,
    collection: EntityCollection<D::Entity>,
) -> impl IntoView {
    let i18n = use_i18n();

    Effect::new(move |_| {
        let add_open = collection.add_open.get();
        let editing = collection.editing.get();
        form.update(|f| f.sync(add_open, editing.as_ref()));
    });

    let mode = Memo::new(move |_| form.with(|f| f.mode.clone()));
    let loading = Signal::derive(move || form.with(|f| f.loading));

    let title = Signal::derive(move || {
        let action = match mode.get() {
            Some(FormMode::Edit { .. }) => i18n.t("edit"),
            _ => i18n.t("add"),
        };
        format!("{} {}", action, i18n.t(<D::Entity as CrmEntity>::element_name()))
    });

    let close = Callback::new(move |_| {
        if form.with_untracked(|f| f.can_close()) {
            collection.close_form();
        }
    });

    let submit = move |_| {
        spawn_local(async move {
            let outcome = submit_draft(&form, |mode, payload| async move {
                match mode {
                    FormMode::Create => collection.create(payload).await.map(|_| ()),
                    FormMode::Edit { id } => collection.update(id, payload).await.map(|_| ()),
                }
            })
            .await;

            let mode = mode.get_untracked().unwrap_or(FormMode::Create);
            let context = format!("saving {}", <D::Entity as CrmEntity>::element_name());
            if settle_submit::<D>(outcome, &mode, &context, &i18n) {
                collection.close_form();
            }
        });
    };

    view! {
        <Modal
            is_open=Signal::derive(move || mode.get().is_some())
            on_close=close
            title=title
        >
            {move || mode.get().map(|m| view! { <FormFields form=form mode=m /> })}
            <div class="modal-footer">
                <Button
                    appearance=ButtonAppearance::Secondary
                    disabled=loading
                    on_click=move |_| close.run(())
                >
                    {move || i18n.t("cancel")}
                </Button>
                <Button appearance=ButtonAppearance::Primary disabled=loading on_click=submit>
                    {move || if loading.get() { i18n.t("saving") } else { i18n.t("save") }}
                </Button>
            </div>
        </Modal>
    }
}

/// Draft modal whose mode is fixed to create and which is driven by one flag
#[component]
pub fn DraftModal<D: FormDraft>(
    form: RwSignal<DraftForm<D>>,
    #[prop(into)]
    title: Signal<String>,
    on_close: Callback<()>,
    on_submit: Callback<()>,
) -> impl IntoView {
    let i18n = use_i18n();
    let loading = Signal::derive(move || form.with(|f| f.loading));
    let close = Callback::new(move |_| {
        if form.with_untracked(|f| f.can_close()) {
            on_close.run(());
        }
    });

    view! {
        <Modal
            is_open=Signal::derive(move || form.with(|f| f.is_open()))
            on_close=close
            title=title
        >
            <FormFields form=form mode=FormMode::Create />
            <div class="modal-footer">
                <Button
                    appearance=ButtonAppearance::Secondary
                    disabled=loading
                    on_click=move |_| close.run(())
                >
                    {move || i18n.t("cancel")}
                </Button>
                <Button
                    appearance=ButtonAppearance::Primary
                    disabled=loading
                    on_click=move |_| on_submit.run(())
                >
                    {move || if loading.get() { i18n.t("saving") } else { i18n.t("save") }}
                </Button>
            </div>
        </Modal>
    }
}

/// Alerts or logs a settled submit. Returns `true` when the draft was saved.
pub fn settle_submit<D: FormDraft>(outcome: SubmitOutcome, mode: &FormMode, context: &str, i18n: &I18n) -> bool {
    match outcome {
        SubmitOutcome::Saved => true,
        SubmitOutcome::Invalid(errors) => {
            if !D::INLINE_ERRORS {
                let fields = D::fields(mode);
                let label_of = |key: &str| {
                    fields
                        .iter()
                        .find(|s| s.key == key)
                        .map(|s| i18n.t_untracked(s.label))
                        .unwrap_or_else(|| key.to_string())
                };
                notify::alert(&notify::validation_message(&errors, label_of, i18n));
            }
            false
        }
        SubmitOutcome::Failed(err) => {
            notify::report_failure(context, &err, i18n);
            false
        }
        SubmitOutcome::Busy | SubmitOutcome::Closed | SubmitOutcome::Superseded => false,
    }
}

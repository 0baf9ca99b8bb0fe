use contracts::domain::common::CrmEntity;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::{Button, ButtonAppearance};

use crate::shared::form::{confirm_delete, DeleteOutcome};
use crate::shared::i18n::use_i18n;
use crate::shared::modal::Modal;
use crate::shared::notify;
use crate::store::EntityCollection;

/// Confirmation for `collection.deleting`. Closes on success, stays open
/// on failure.
#[component]
pub fn DeleteConfirmModal<E: CrmEntity>(collection: EntityCollection<E>) -> impl IntoView {
    let i18n = use_i18n();
    let pending = RwSignal::new(false);

    let title = Signal::derive(move || format!("{} {}", i18n.t("delete"), i18n.t(E::element_name())));
    let description = move || {
        collection
            .deleting
            .with(|d| d.as_ref().map(|e| e.display_name().to_string()))
            .unwrap_or_default()
    };

    let close = Callback::new(move |_| {
        if !pending.get_untracked() {
            collection.close_delete();
        }
    });

    let confirm = move |_| {
        let Some(id) = collection
            .deleting
            .with_untracked(|d| d.as_ref().map(|e| e.id().to_string()))
        else {
            return;
        };
        spawn_local(async move {
            let outcome = confirm_delete(&pending, || collection.remove(id.clone())).await;
            match outcome {
                DeleteOutcome::Deleted => collection.close_delete(),
                DeleteOutcome::Failed(err) => {
                    notify::report_failure(&format!("deleting {} {}", E::element_name(), id), &err, &i18n);
                }
                DeleteOutcome::Busy => {}
            }
        });
    };

    view! {
        <Modal
            is_open=Signal::derive(move || collection.deleting.with(|d| d.is_some()))
            on_close=close
            title=title
            modal_class="modal--confirm"
        >
            <div class="warning-box">
                <span class="warning-box__icon">"⚠"</span>
                <span class="warning-box__text">
                    {move || i18n.t("deleteWarning")}
                    " "
                    <strong>{description}</strong>
                </span>
            </div>
            <div class="modal-footer">
                <Button
                    appearance=ButtonAppearance::Secondary
                    disabled=pending
                    on_click=move |_| close.run(())
                >
                    {move || i18n.t("cancel")}
                </Button>
                <Button appearance=ButtonAppearance::Primary disabled=pending on_click=confirm>
                    {move || if pending.get() { i18n.t("deleting") } else { i18n.t("delete") }}
                </Button>
            </div>
        </Modal>
    }
}

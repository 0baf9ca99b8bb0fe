use leptos::prelude::*;
use thaw::{Button, ButtonAppearance};

use crate::shared::components::form_fields::draft_field_views;
use crate::shared::form::{DraftForm, FilterDraft};
use crate::shared::i18n::use_i18n;
use crate::shared::icons::icon;
use crate::store::FilterSlot;

/// Side panel of filter controls grouped in sections.
///
/// Opening seeds the controls from the applied criteria. Apply publishes the
/// parsed criteria to the slot and closes; reset only clears the controls.
#[component]
pub fn FilterDrawer<D: FilterDraft>(
    /// Holds the controls' state; owned by the list page
    form: RwSignal<DraftForm<D>>,
    filter_slot: FilterSlot<D::Payload>,
) -> impl IntoView {
    let i18n = use_i18n();

    Effect::new(move |_| {
        if filter_slot.open.get() {
            let applied = filter_slot.applied.get_untracked();
            form.update(|f| {
                f.open_create();
                f.draft = D::from_criteria(&applied);
            });
        } else {
            form.update(|f| f.close());
        }
    });

    let reset = move |_| form.update(|f| f.reset_draft());

    let apply = move |_| match form.with_untracked(|f| f.draft.criteria()) {
        Ok(criteria) => {
            log::debug!("filters applied");
            filter_slot.apply(criteria);
        }
        Err(errors) => form.update(|f| f.errors = errors),
    };

    view! {
        <Show when=move || filter_slot.open.get()>
            <aside class="filter-drawer">
                <div class="filter-drawer__header">
                    {icon("filter")}
                    <span class="filter-drawer__title">{move || i18n.t("filters")}</span>
                    <button class="button button--icon" on:click=move |_| filter_slot.close()>
                        {icon("x")}
                    </button>
                </div>
                <div class="filter-drawer__content">
                    {D::sections()
                        .into_iter()
                        .map(|section| {
                            view! {
                                <section class="filter-drawer__section">
                                    <h3 class="filter-drawer__section-title">
                                        {move || i18n.t(section.title)}
                                    </h3>
                                    {draft_field_views(form, section.fields)}
                                </section>
                            }
                        })
                        .collect_view()}
                </div>
                <div class="filter-drawer__footer">
                    <Button appearance=ButtonAppearance::Secondary on_click=reset>
                        {move || i18n.t("reset")}
                    </Button>
                    <Button appearance=ButtonAppearance::Primary on_click=apply>
                        {move || i18n.t("apply")}
                    </Button>
                </div>
            </aside>
        </Show>
    }
}

/// Toolbar button toggling a drawer, with the number of active criteria
#[component]
pub fn FilterToggle(
    open: RwSignal<bool>,
    #[prop(into)]
    active_count: Signal<usize>,
) -> impl IntoView {
    let i18n = use_i18n();

    view! {
        <Button
            appearance=ButtonAppearance::Secondary
            on_click=move |_| open.update(|o| *o = !*o)
        >
            {icon("filter")}
            {move || i18n.t("filters")}
            {move || {
                let count = active_count.get();
                (count > 0).then(|| view! { <span class="badge badge--primary">{count}</span> })
            }}
        </Button>
    }
}

//! Standard list page: toolbar, search, table, and the entity's modals.

use contracts::domain::common::CrmEntity;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::{
    Button, ButtonAppearance, Input, Table, TableBody, TableCell, TableCellLayout, TableHeader,
    TableHeaderCell, TableRow,
};

use crate::shared::components::delete_modal::DeleteConfirmModal;
use crate::shared::components::entity_form_modal::EntityFormModal;
use crate::shared::form::{DraftForm, EntityDraft};
use crate::shared::i18n::{use_i18n, I18n};
use crate::shared::icons::icon;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_LIST};
use crate::store::{use_store, CrmStore, EntityCollection};

/// Table layout of an entity
pub trait ListColumns: CrmEntity {
    /// i18n keys of the column headers
    fn columns() -> Vec<&'static str>;

    /// Cell texts, same order as `columns`. Tracked: may resolve references
    /// through the store.
    fn cells(&self, store: &CrmStore, i18n: &I18n) -> Vec<String>;
}

/// Case-insensitive substring match; an empty query matches everything
pub fn matches_search(name: &str, query: &str) -> bool {
    let query = query.trim();
    query.is_empty() || name.to_lowercase().contains(&query.to_lowercase())
}

#[component]
pub fn EntityListPage<D>(
    /// Draft of the create/edit modal
    form: RwSignal<DraftForm<D>>,
    collection: EntityCollection<D::Entity>,
    /// Page id for `PageFrame`, e.g. `"a001_lead--list"`
    page_id: &'static str,
    /// Extra predicate (applied drawer criteria)
    #[prop(optional)]
    row_filter: Option<Callback<D::Entity, bool>>,
    /// Extra toolbar content (filter toggle, bulk actions)
    #[prop(optional)]
    toolbar: Option<fn() -> AnyView>,
    /// Extra per-row actions
    #[prop(optional)]
    row_actions: Option<fn(D::Entity) -> AnyView>,
    /// Drawers and modals owned by the page
    #[prop(optional)]
    extras: Option<fn() -> AnyView>,
) -> impl IntoView
where
    D: EntityDraft,
    D::Entity: ListColumns,
{
    let store = use_store();
    let i18n = use_i18n();
    let search_query = RwSignal::new(String::new());

    collection.ensure_loaded();

    let rows = Memo::new(move |_| {
        let query = search_query.get();
        collection.items.with(|items| {
            items
                .iter()
                .filter(|e| matches_search(e.display_name(), &query))
                .filter(|e| row_filter.map(|f| f.run((*e).clone())).unwrap_or(true))
                .cloned()
                .collect::<Vec<_>>()
        })
    });

    let refresh = move |_| {
        spawn_local(async move {
            collection.reload().await;
        });
    };

    view! {
        <PageFrame page_id=page_id category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">
                        {move || i18n.t(<D::Entity as CrmEntity>::list_name())}
                    </h1>
                </div>
                <div class="page__header-right">
                    <div style="width: 280px;">
                        <Input value=search_query placeholder=Signal::derive(move || Some(i18n.t("search"))) />
                    </div>
                    {toolbar.map(|t| t())}
                    <Button appearance=ButtonAppearance::Secondary on_click=refresh>
                        {icon("refresh")}
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| collection.open_create()
                    >
                        {icon("plus")}
                        {move || i18n.t("add")}
                    </Button>
                </div>
            </div>

            <div class="page__content">
                {move || {
                    collection.load_error.get().map(|err| view! {
                        <div class="warning-box warning-box--error">
                            <span class="warning-box__icon">"⚠"</span>
                            <span class="warning-box__text">
                                {i18n.t("loadFailed")} ": " {err.to_string()}
                            </span>
                        </div>
                    })
                }}
                <Show
                    when=move || collection.loaded.get() || !collection.loading.get()
                    fallback=move || view! { <p class="page__placeholder">{i18n.t("loading")}</p> }
                >
                    <Show
                        when=move || !rows.get().is_empty()
                        fallback=move || view! { <p class="page__placeholder">{i18n.t("noRecords")}</p> }
                    >
                        <Table>
                            <TableHeader>
                                <TableRow>
                                    {<D::Entity as ListColumns>::columns()
                                        .into_iter()
                                        .map(|key| view! {
                                            <TableHeaderCell>{move || i18n.t(key)}</TableHeaderCell>
                                        })
                                        .collect_view()}
                                    <TableHeaderCell min_width=140.0>{move || i18n.t("actions")}</TableHeaderCell>
                                </TableRow>
                            </TableHeader>
                            <TableBody>
                                <For
                                    each=move || rows.get()
                                    key=|e| (e.id().to_string(), format!("{:?}", e))
                                    children=move |entity| {
                                        let cells = {
                                            let entity = entity.clone();
                                            move || entity.cells(&store, &i18n)
                                        };
                                        let for_edit = entity.clone();
                                        let for_delete = entity.clone();
                                        let extra = row_actions.map(|f| f(entity.clone()));
                                        view! {
                                            <TableRow>
                                                {move || cells()
                                                    .into_iter()
                                                    .map(|text| view! {
                                                        <TableCell>
                                                            <TableCellLayout truncate=true>{text}</TableCellLayout>
                                                        </TableCell>
                                                    })
                                                    .collect_view()}
                                                <TableCell>
                                                    <TableCellLayout>
                                                        <div class="table__actions">
                                                            {extra}
                                                            <Button
                                                                appearance=ButtonAppearance::Subtle
                                                                on_click=move |_| collection.open_edit(for_edit.clone())
                                                            >
                                                                {icon("edit")}
                                                            </Button>
                                                            <Button
                                                                appearance=ButtonAppearance::Subtle
                                                                on_click=move |_| collection.open_delete(for_delete.clone())
                                                            >
                                                                {icon("trash")}
                                                            </Button>
                                                        </div>
                                                    </TableCellLayout>
                                                </TableCell>
                                            </TableRow>
                                        }
                                    }
                                />
                            </TableBody>
                        </Table>
                    </Show>
                </Show>
            </div>

            <EntityFormModal form=form collection=collection />
            <DeleteConfirmModal collection=collection />
            {extras.map(|e| e())}
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_is_case_insensitive() {
        assert!(matches_search("Marina Heights", "heights"));
        assert!(matches_search("Marina Heights", "  "));
        assert!(!matches_search("Marina Heights", "palm"));
    }
}

//! Renders `FieldSpec`s against a draft.

use contracts::shared::validation::FieldErrors;
use leptos::prelude::*;

use crate::shared::components::ui::multi_select::with_unlisted_selected;
use crate::shared::components::ui::{Checkbox, Input, MultiSelect, Select, Textarea};
use crate::shared::form::{DraftForm, FieldKind, FieldSpec, FieldValue, FormDraft, FormMode};
use crate::shared::i18n::use_i18n;
use crate::store::use_store;

/// One labelled widget chosen by `spec.kind`
#[component]
pub fn FormFieldView(
    spec: FieldSpec,
    #[prop(into)]
    value: Signal<FieldValue>,
    on_change: Callback<FieldValue>,
    /// Translated message shown under the widget
    #[prop(into)]
    error: Signal<Option<String>>,
    #[prop(into)]
    disabled: Signal<bool>,
) -> impl IntoView {
    let i18n = use_i18n();
    let store = use_store();
    let label = Signal::derive(move || Some(i18n.t(spec.label)));
    let text = Signal::derive(move || value.get().into_text());
    let on_text = Callback::new(move |s: String| on_change.run(FieldValue::Text(s)));
    let id = format!("field-{}", spec.key);

    match spec.kind {
        FieldKind::TextArea => view! {
            <Textarea
                id=id
                label=label
                value=text
                on_input=on_text
                required=spec.required
                disabled=disabled
                error=error
            />
        }
        .into_any(),
        FieldKind::Select(source) => {
            store.ensure_source_loaded(source);
            let options = Signal::derive(move || store.options(source, &i18n));
            view! {
                <Select
                    id=id
                    label=label
                    value=text
                    on_change=on_text
                    options=options
                    placeholder=Signal::derive(move || Some(i18n.t("selectPlaceholder")))
                    required=spec.required
                    disabled=disabled
                    error=error
                />
            }
            .into_any()
        }
        FieldKind::MultiSelect(source) => {
            store.ensure_source_loaded(source);
            let selected = Signal::derive(move || value.get().into_list());
            let options = Signal::derive(move || {
                let missing = i18n.t("missing");
                selected.with(|items| with_unlisted_selected(store.options(source, &i18n), items, &missing))
            });
            view! {
                <MultiSelect
                    label=label
                    value=selected
                    on_change=Callback::new(move |items: Vec<String>| on_change.run(FieldValue::List(items)))
                    options=options
                    required=spec.required
                    disabled=disabled
                    error=error
                />
            }
            .into_any()
        }
        FieldKind::Checkbox => view! {
            <Checkbox
                id=id
                label=Signal::derive(move || i18n.t(spec.label))
                checked=Signal::derive(move || value.get().as_flag())
                on_change=Callback::new(move |checked: bool| on_change.run(FieldValue::Flag(checked)))
                disabled=disabled
            />
        }
        .into_any(),
        kind => view! {
            <Input
                id=id
                label=label
                value=text
                on_input=on_text
                input_type=kind.input_type().to_string()
                required=spec.required
                disabled=disabled
                error=error
            />
        }
        .into_any(),
    }
}

/// Message key shown under a field; drafts reporting through an alert show none
pub fn inline_error<'a, D: FormDraft>(errors: &'a FieldErrors, key: &str) -> Option<&'a str> {
    if D::INLINE_ERRORS {
        errors.get(key)
    } else {
        None
    }
}

/// Widgets for `specs`, bound to the draft's fields
pub fn draft_field_views<D: FormDraft>(form: RwSignal<DraftForm<D>>, specs: Vec<FieldSpec>) -> impl IntoView {
    let i18n = use_i18n();
    let disabled = Signal::derive(move || form.with(|f| f.loading));

    specs
        .into_iter()
        .map(|spec| {
            let key = spec.key;
            let value = Signal::derive(move || form.with(|f| f.draft.value(key)));
            let on_change = Callback::new(move |v: FieldValue| {
                form.update(|f| f.set_field(key, v));
            });
            let error = Signal::derive(move || {
                form.with(|f| inline_error::<D>(&f.errors, key).map(|message| i18n.t(message)))
            });
            view! {
                <FormFieldView
                    spec=spec
                    value=value
                    on_change=on_change
                    error=error
                    disabled=disabled
                />
            }
        })
        .collect_view()
}

/// Every field of the draft for the given mode
#[component]
pub fn FormFields<D: FormDraft>(form: RwSignal<DraftForm<D>>, mode: FormMode) -> impl IntoView {
    view! {
        <div class="form">
            {draft_field_views(form, D::fields(&mode))}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a005_developer::DeveloperDraft;
    use crate::system::users::UserDraft;
    use contracts::shared::validation::messages;

    #[test]
    fn test_only_inline_drafts_show_field_errors() {
        let mut errors = FieldErrors::new();
        errors.insert("name", messages::FIELD_REQUIRED);
        assert_eq!(inline_error::<UserDraft>(&errors, "name"), Some(messages::FIELD_REQUIRED));
        assert_eq!(inline_error::<DeveloperDraft>(&errors, "name"), None);
        assert_eq!(inline_error::<UserDraft>(&errors, "email"), None);
    }
}

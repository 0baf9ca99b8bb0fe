use leptos::prelude::*;

/// Appends selected values that no option offers, labelled with
/// `missing_label`, so they stay visible and can be unchecked.
pub fn with_unlisted_selected(
    mut options: Vec<(String, String)>,
    selected: &[String],
    missing_label: &str,
) -> Vec<(String, String)> {
    let unlisted: Vec<String> = selected
        .iter()
        .filter(|v| !v.trim().is_empty() && !options.iter().any(|(o, _)| o == *v))
        .cloned()
        .collect();
    for value in unlisted {
        let label = format!("{} ({})", value, missing_label);
        options.push((value, label));
    }
    options
}

/// Checkbox list for picking several values
#[component]
pub fn MultiSelect(
    #[prop(optional, into)]
    label: MaybeProp<String>,
    /// Selected values
    #[prop(into)]
    value: Signal<Vec<String>>,
    on_change: Callback<Vec<String>>,
    /// Options: Vec of (value, label) tuples
    #[prop(into)]
    options: Signal<Vec<(String, String)>>,
    #[prop(into)]
    disabled: Signal<bool>,
    #[prop(optional)]
    required: bool,
    #[prop(optional, into)]
    error: MaybeProp<String>,
) -> impl IntoView {
    let toggle = move |option: String, checked: bool| {
        let mut selected = value.get_untracked();
        selected.retain(|v| v != &option);
        if checked {
            selected.push(option);
        }
        on_change.run(selected);
    };

    view! {
        <div class="form__group">
            {move || label.get().map(|l| view! {
                <label class="form__label">
                    {l}
                    {required.then(|| view! { <span class="form__required">" *"</span> })}
                </label>
            })}
            <div class="form__multi-select">
                <For
                    each=move || options.get()
                    key=|(val, _)| val.clone()
                    children=move |(val, label)| {
                        let val_checked = val.clone();
                        let is_checked = move || value.get().contains(&val_checked);
                        view! {
                            <label class="form__checkbox-wrapper">
                                <input
                                    type="checkbox"
                                    class="form__checkbox"
                                    prop:checked=is_checked
                                    disabled=move || disabled.get()
                                    on:change=move |ev| toggle(val.clone(), event_target_checked(&ev))
                                />
                                <span class="form__checkbox-label">{label}</span>
                            </label>
                        }
                    }
                />
            </div>
            {move || error.get().map(|e| view! { <span class="form__error">{e}</span> })}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_selected_values_are_listed() {
        let options = vec![("Deep cleaning".to_string(), "Deep cleaning".to_string())];
        let selected = vec!["Deep cleaning".to_string(), "Window washing".to_string()];
        let merged = with_unlisted_selected(options, &selected, "missing");
        assert_eq!(merged.len(), 2);
        assert_eq!(merged[1], ("Window washing".to_string(), "Window washing (missing)".to_string()));
    }

    #[test]
    fn test_known_values_left_alone() {
        let options = vec![("a".to_string(), "A".to_string()), ("b".to_string(), "B".to_string())];
        let merged = with_unlisted_selected(options.clone(), &["b".to_string()], "missing");
        assert_eq!(merged, options);
    }
}

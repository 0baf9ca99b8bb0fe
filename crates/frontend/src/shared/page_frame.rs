//! PageFrame — root wrapper for every page in the center area.
//!
//! Sets `id="{entity}--{category}"` (e.g. `"a001_lead--list"`) and
//! `data-page-category` on the root element so a page can be found from the
//! DOM inspector.

use leptos::prelude::*;

pub const PAGE_CAT_LIST: &str = "list";

/// `{entity}--{category}` with both parts non-empty
pub fn is_valid_page_id(id: &str) -> bool {
    matches!(id.split_once("--"), Some((entity, category)) if !entity.is_empty() && !category.is_empty())
}

#[component]
pub fn PageFrame(
    /// HTML id in format `{entity}--{category}`
    page_id: &'static str,
    category: &'static str,
    children: Children,
) -> impl IntoView {
    debug_assert!(is_valid_page_id(page_id), "bad page id {page_id}");

    view! {
        <div id=page_id class="page" data-page-category=category>
            {children()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_id_format() {
        assert!(is_valid_page_id("a001_lead--list"));
        assert!(!is_valid_page_id("a001_lead"));
        assert!(!is_valid_page_id("--list"));
    }
}

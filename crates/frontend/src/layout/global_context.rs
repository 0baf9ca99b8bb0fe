use leptos::prelude::Effect;
use leptos::prelude::*;
use std::collections::HashMap;
use web_sys::window;

use crate::layout::left::nav_config::{is_known_page, DEFAULT_PAGE};

#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    /// Name of the page shown in the center area
    pub current_page: RwSignal<String>,
    pub sidebar_open: RwSignal<bool>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            current_page: RwSignal::new(DEFAULT_PAGE.to_string()),
            sidebar_open: RwSignal::new(true),
        }
    }

    pub fn navigate(&self, page: &str) {
        log::debug!("navigate -> {}", page);
        self.current_page.set(page.to_string());
    }

    pub fn toggle_sidebar(&self) {
        self.sidebar_open.update(|open| *open = !*open);
    }

    /// Restores the page from `?page=` and mirrors later changes back into
    /// the URL without adding history entries.
    pub fn init_router_integration(&self) {
        let search = window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        if let Some(page) = page_from_query(&search) {
            self.current_page.set(page);
        }

        let this = *self;
        Effect::new(move |_| {
            let page = this.current_page.get();
            let new_url = format!("?{}", page_query(&page));
            let current_search = window()
                .and_then(|w| w.location().search().ok())
                .unwrap_or_default();
            if current_search != new_url {
                if let Some(w) = window() {
                    if let Ok(history) = w.history() {
                        let _ = history.replace_state_with_url(
                            &wasm_bindgen::JsValue::NULL,
                            "",
                            Some(&new_url),
                        );
                    }
                }
            }
        });
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Known page named by `?page=`, if any
pub fn page_from_query(search: &str) -> Option<String> {
    let params: HashMap<String, String> =
        serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default();
    params.get("page").filter(|p| is_known_page(p)).cloned()
}

pub fn page_query(page: &str) -> String {
    serde_qs::to_string(&HashMap::from([("page".to_string(), page.to_string())]))
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_query_roundtrip() {
        let query = page_query("servicePackages");
        assert_eq!(query, "page=servicePackages");
        assert_eq!(page_from_query(&format!("?{}", query)).as_deref(), Some("servicePackages"));
    }

    #[test]
    fn test_unknown_page_is_ignored() {
        assert_eq!(page_from_query("?page=dashboards"), None);
        assert_eq!(page_from_query(""), None);
        assert_eq!(page_from_query("?active=leads"), None);
    }
}

use web_sys::window;

use crate::shared::i18n::Locale;

const LOCALE_KEY: &str = "crm_locale";

fn get_local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

/// Save the chosen locale to localStorage
pub fn save_locale(locale: Locale) {
    if let Some(storage) = get_local_storage() {
        let _ = storage.set_item(LOCALE_KEY, locale.code());
    }
}

/// Locale saved by a previous session, if any
pub fn load_locale() -> Option<Locale> {
    let code = get_local_storage()?.get_item(LOCALE_KEY).ok()??;
    Locale::from_code(&code)
}

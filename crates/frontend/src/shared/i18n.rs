//! Translations.
//!
//! `t(key)` looks the key up in the current locale, then in English, and
//! finally returns the key itself so a missing entry is visible but harmless.

use leptos::prelude::*;
use once_cell::sync::Lazy;
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Locale {
    #[default]
    En,
    Ar,
}

impl Locale {
    pub fn code(&self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Ar => "ar",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_ascii_lowercase().as_str() {
            "en" => Some(Locale::En),
            "ar" => Some(Locale::Ar),
            _ => None,
        }
    }

    /// Text direction for the `dir` attribute of the document
    pub fn dir(&self) -> &'static str {
        match self {
            Locale::En => "ltr",
            Locale::Ar => "rtl",
        }
    }

    pub fn all() -> &'static [Locale] {
        &[Locale::En, Locale::Ar]
    }
}

/// `"under_construction"` / `"Under Construction"` -> `"underConstruction"`
pub fn to_camel_case(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut upper_next = false;
    for ch in raw.trim().chars() {
        if ch == '_' || ch == '-' || ch.is_whitespace() {
            upper_next = !out.is_empty();
            continue;
        }
        if out.is_empty() {
            out.extend(ch.to_lowercase());
        } else if upper_next {
            out.extend(ch.to_uppercase());
        } else {
            out.push(ch);
        }
        upper_next = false;
    }
    out
}

/// Label key of an enum value, from its wire code
pub fn enum_label_key(code: &str) -> String {
    to_camel_case(code)
}

static EN: Lazy<HashMap<&'static str, &'static str>> =
    Lazy::new(|| super::i18n_dict::EN.iter().copied().collect());
static AR: Lazy<HashMap<&'static str, &'static str>> =
    Lazy::new(|| super::i18n_dict::AR.iter().copied().collect());

fn dictionary(locale: Locale) -> &'static HashMap<&'static str, &'static str> {
    match locale {
        Locale::En => &EN,
        Locale::Ar => &AR,
    }
}

pub fn translate(locale: Locale, key: &str) -> String {
    dictionary(locale)
        .get(key)
        .or_else(|| EN.get(key))
        .map(|s| s.to_string())
        .unwrap_or_else(|| key.to_string())
}

/// Reactive translation handle provided through context
#[derive(Clone, Copy)]
pub struct I18n {
    pub locale: RwSignal<Locale>,
}

impl I18n {
    pub fn new(locale: Locale) -> Self {
        Self {
            locale: RwSignal::new(locale),
        }
    }

    /// Tracked: re-runs the enclosing reactive closure when the locale changes
    pub fn t(&self, key: &str) -> String {
        translate(self.locale.get(), key)
    }

    pub fn t_untracked(&self, key: &str) -> String {
        translate(self.locale.get_untracked(), key)
    }

    pub fn enum_label(&self, code: &str) -> String {
        self.t(&enum_label_key(code))
    }

    pub fn yes_no(&self, value: bool) -> String {
        self.t(if value { "yes" } else { "no" })
    }

    pub fn set_locale(&self, locale: Locale) {
        log::info!("locale -> {}", locale.code());
        self.locale.set(locale);
    }
}

pub fn use_i18n() -> I18n {
    use_context::<I18n>().expect("I18n not provided in context")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_camel_case() {
        assert_eq!(to_camel_case("under_construction"), "underConstruction");
        assert_eq!(to_camel_case("Under Construction"), "underConstruction");
        assert_eq!(to_camel_case("social_media"), "socialMedia");
        assert_eq!(to_camel_case("new"), "new");
        assert_eq!(to_camel_case(""), "");
    }

    #[test]
    fn test_fallbacks() {
        assert_eq!(translate(Locale::En, "save"), "Save");
        assert_eq!(translate(Locale::Ar, "save"), "حفظ");
        assert_eq!(translate(Locale::Ar, "no.such.key"), "no.such.key");
    }

    #[test]
    fn test_every_enum_code_has_an_english_label() {
        use contracts::enums::*;
        let codes = [
            LeadSource::CODES,
            LeadStatus::CODES,
            DealStage::CODES,
            UnitType::CODES,
            UnitStatus::CODES,
            ProjectStatus::CODES,
            UserRole::CODES,
            CampaignChannel::CODES,
            CampaignStatus::CODES,
            IntegrationPlatform::CODES,
        ];
        for code in codes.iter().flat_map(|c| c.iter()) {
            let key = enum_label_key(code);
            assert_ne!(translate(Locale::En, &key), key, "missing label for {}", code);
        }
    }

    #[test]
    fn test_arabic_keys_exist_in_english() {
        for (key, _) in super::super::i18n_dict::AR {
            assert!(EN.contains_key(key), "{} has no English entry", key);
        }
    }

    #[test]
    fn test_locale_codes() {
        assert_eq!(Locale::from_code("AR"), Some(Locale::Ar));
        assert_eq!(Locale::from_code("de"), None);
        assert_eq!(Locale::Ar.dir(), "rtl");
    }
}

//! One parameterised form-field description used by every modal.

/// Where a select gets its options from.
///
/// Variants ending in `Names` use the record's name as option value (the
/// referencing entity stores names); the others use the record id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionsSource {
    /// Fixed enum codes, labels come from `enum_label_key`
    Static(&'static [&'static str]),
    Users,
    Leads,
    Units,
    Projects,
    ProjectNames,
    Developers,
    Owners,
    CampaignNames,
    ProductCategoryNames,
    SupplierNames,
    ServiceNames,
    ServiceProviderNames,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Email,
    Phone,
    Password,
    /// Decimal or integer typed as text
    Number,
    Date,
    TextArea,
    Select(OptionsSource),
    MultiSelect(OptionsSource),
    Checkbox,
}

impl FieldKind {
    /// `type` attribute for `<input>` based kinds
    pub fn input_type(&self) -> &'static str {
        match self {
            FieldKind::Email => "email",
            FieldKind::Phone => "tel",
            FieldKind::Password => "password",
            FieldKind::Number => "number",
            FieldKind::Date => "date",
            _ => "text",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    /// Draft field key, also the key of `FieldErrors`
    pub key: &'static str,
    /// i18n key of the label
    pub label: &'static str,
    pub kind: FieldKind,
    pub required: bool,
}

impl FieldSpec {
    pub const fn new(key: &'static str, label: &'static str, kind: FieldKind) -> Self {
        Self {
            key,
            label,
            kind,
            required: false,
        }
    }

    pub const fn text(key: &'static str, label: &'static str) -> Self {
        Self::new(key, label, FieldKind::Text)
    }

    pub const fn number(key: &'static str, label: &'static str) -> Self {
        Self::new(key, label, FieldKind::Number)
    }

    pub const fn select(key: &'static str, label: &'static str, source: OptionsSource) -> Self {
        Self::new(key, label, FieldKind::Select(source))
    }

    pub const fn required(mut self) -> Self {
        self.required = true;
        self
    }
}

/// Value of one draft field as the widgets see it
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    Flag(bool),
    List(Vec<String>),
}

impl FieldValue {
    pub fn is_blank(&self) -> bool {
        match self {
            FieldValue::Text(s) => s.trim().is_empty(),
            FieldValue::Flag(_) => false,
            FieldValue::List(items) => items.iter().all(|s| s.trim().is_empty()),
        }
    }

    pub fn into_text(self) -> String {
        match self {
            FieldValue::Text(s) => s,
            FieldValue::Flag(b) => b.to_string(),
            FieldValue::List(items) => items.join(", "),
        }
    }

    pub fn as_flag(&self) -> bool {
        match self {
            FieldValue::Flag(b) => *b,
            FieldValue::Text(s) => s == "true",
            FieldValue::List(items) => !items.is_empty(),
        }
    }

    pub fn into_list(self) -> Vec<String> {
        match self {
            FieldValue::List(items) => items,
            FieldValue::Text(s) if s.trim().is_empty() => Vec::new(),
            FieldValue::Text(s) => vec![s],
            FieldValue::Flag(_) => Vec::new(),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        FieldValue::Flag(value)
    }
}

impl From<Vec<String>> for FieldValue {
    fn from(value: Vec<String>) -> Self {
        FieldValue::List(value)
    }
}

/// Empty select value means "not set"
pub fn non_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blankness() {
        assert!(FieldValue::from("  ").is_blank());
        assert!(!FieldValue::from("x").is_blank());
        assert!(!FieldValue::Flag(false).is_blank());
        assert!(FieldValue::List(vec![]).is_blank());
        assert!(FieldValue::List(vec![" ".into()]).is_blank());
    }

    #[test]
    fn test_into_list() {
        assert_eq!(FieldValue::from("").into_list(), Vec::<String>::new());
        assert_eq!(FieldValue::from("a").into_list(), vec!["a".to_string()]);
    }

    #[test]
    fn test_non_empty() {
        assert_eq!(non_empty("  "), None);
        assert_eq!(non_empty(" u1 "), Some("u1".to_string()));
    }
}

/// Implements `FormDraft::value` / `FormDraft::set_value` for a draft whose
/// field keys are its struct field names.
///
/// ```ignore
/// draft_accessors! {
///     text: [name, price],
///     flag: [is_active],
///     list: [services],
/// }
/// ```
macro_rules! draft_accessors {
    (
        text: [$($text:ident),* $(,)?]
        $(, flag: [$($flag:ident),* $(,)?])?
        $(, list: [$($list:ident),* $(,)?])?
        $(,)?
    ) => {
        fn value(&self, key: &str) -> $crate::shared::form::FieldValue {
            use $crate::shared::form::FieldValue;
            match key {
                $(stringify!($text) => FieldValue::Text(self.$text.clone()),)*
                $($(stringify!($flag) => FieldValue::Flag(self.$flag),)*)?
                $($(stringify!($list) => FieldValue::List(self.$list.clone()),)*)?
                _ => FieldValue::Text(String::new()),
            }
        }

        fn set_value(&mut self, key: &str, value: $crate::shared::form::FieldValue) {
            match key {
                $(stringify!($text) => self.$text = value.into_text(),)*
                $($(stringify!($flag) => self.$flag = value.as_flag(),)*)?
                $($(stringify!($list) => self.$list = value.into_list(),)*)?
                other => log::warn!("unknown draft field {}", other),
            }
        }
    };
}

pub(crate) use draft_accessors;

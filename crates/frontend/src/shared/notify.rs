//! Blocking browser alerts used by the modals.

use contracts::shared::validation::FieldErrors;

use crate::shared::error::ApiError;
use crate::shared::i18n::I18n;

pub fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}

/// Text of the alert shown for a rejected draft: the first error, with the
/// field label when there is one
pub fn validation_message(errors: &FieldErrors, label_of: impl Fn(&str) -> String, i18n: &I18n) -> String {
    match errors.first() {
        Some((field, message)) => format!("{}: {}", label_of(field), i18n.t_untracked(message)),
        None => i18n.t_untracked("fillRequiredFields"),
    }
}

/// Logs the failure and shows the generic message
pub fn report_failure(context: &str, err: &ApiError, i18n: &I18n) {
    log::error!("{} failed: {}", context, err);
    alert(&i18n.t_untracked("operationFailed"));
}

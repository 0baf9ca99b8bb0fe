use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt::Debug;

/// Трейт для записи CRM, хранимой на бэкенде
///
/// Экземпляр знает свой id и отображаемое имя; статические методы дают
/// имя REST-коллекции и i18n-ключи для заголовков.
pub trait CrmEntity:
    Debug + Clone + PartialEq + Serialize + DeserializeOwned + Send + Sync + 'static
{
    /// Тело запроса на создание/обновление
    type Payload: Debug + Clone + PartialEq + Serialize + Send + Sync + 'static;

    /// Идентификатор записи, выданный сервером
    fn id(&self) -> &str;

    /// Имя записи для списков, селектов и диалога удаления
    fn display_name(&self) -> &str;

    /// Сегмент REST-пути, например `"leads"` для `/api/leads`
    fn collection_name() -> &'static str;

    /// i18n-ключ элемента (единственное число), например `"lead"`
    fn element_name() -> &'static str;

    /// i18n-ключ списка (множественное число), например `"leads"`
    fn list_name() -> &'static str;
}

//! One reactive collection per entity type plus its modal slots.

use contracts::domain::common::CrmEntity;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::shared::api_client;
use crate::shared::error::ApiError;

pub struct EntityCollection<E: CrmEntity> {
    pub items: RwSignal<Vec<E>>,
    pub loaded: RwSignal<bool>,
    pub loading: RwSignal<bool>,
    pub load_error: RwSignal<Option<ApiError>>,
    /// Create modal flag
    pub add_open: RwSignal<bool>,
    /// Entity shown in the edit modal
    pub editing: RwSignal<Option<E>>,
    /// Entity shown in the delete confirmation
    pub deleting: RwSignal<Option<E>>,
}

impl<E: CrmEntity> Clone for EntityCollection<E> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<E: CrmEntity> Copy for EntityCollection<E> {}

impl<E: CrmEntity> Default for EntityCollection<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: CrmEntity> EntityCollection<E> {
    pub fn new() -> Self {
        Self {
            items: RwSignal::new(Vec::new()),
            loaded: RwSignal::new(false),
            loading: RwSignal::new(false),
            load_error: RwSignal::new(None),
            add_open: RwSignal::new(false),
            editing: RwSignal::new(None),
            deleting: RwSignal::new(None),
        }
    }

    /// Starts the first load; later calls are no-ops
    pub fn ensure_loaded(&self) {
        if self.loaded.get_untracked() || self.loading.get_untracked() {
            return;
        }
        let this = *self;
        spawn_local(async move {
            this.reload().await;
        });
    }

    pub async fn reload(self) {
        self.loading.set(true);
        match api_client::fetch_all::<E>().await {
            Ok(items) => {
                log::debug!("loaded {} {}", items.len(), E::collection_name());
                self.items.set(items);
                self.load_error.set(None);
                self.loaded.set(true);
            }
            Err(err) => {
                log::error!("failed to load {}: {}", E::collection_name(), err);
                self.load_error.set(Some(err));
            }
        }
        self.loading.set(false);
    }

    /// Display name of a referenced record, the raw id if it is unknown
    pub fn name_of(&self, id: &str) -> String {
        self.items.with(|items| {
            items
                .iter()
                .find(|e| e.id() == id)
                .map(|e| e.display_name().to_string())
                .unwrap_or_else(|| id.to_string())
        })
    }

    pub fn open_create(&self) {
        self.editing.set(None);
        self.add_open.set(true);
    }

    pub fn open_edit(&self, entity: E) {
        self.add_open.set(false);
        self.editing.set(Some(entity));
    }

    pub fn close_form(&self) {
        self.add_open.set(false);
        self.editing.set(None);
    }

    pub fn open_delete(&self, entity: E) {
        self.deleting.set(Some(entity));
    }

    pub fn close_delete(&self) {
        self.deleting.set(None);
    }

    pub async fn create(self, payload: E::Payload) -> Result<E, ApiError> {
        let created = api_client::create::<E>(&payload).await?;
        log::debug!("created {} {}", E::element_name(), created.id());
        self.items.update(|items| apply_created(items, created.clone()));
        Ok(created)
    }

    pub async fn update(self, id: String, payload: E::Payload) -> Result<E, ApiError> {
        let updated = api_client::update::<E>(&id, &payload).await?;
        log::debug!("updated {} {}", E::element_name(), id);
        self.items.update(|items| apply_updated(items, updated.clone()));
        Ok(updated)
    }

    pub async fn remove(self, id: String) -> Result<(), ApiError> {
        api_client::delete::<E>(&id).await?;
        log::debug!("deleted {} {}", E::element_name(), id);
        self.items.update(|items| apply_removed(items, &id));
        Ok(())
    }
}

pub fn apply_created<E: CrmEntity>(items: &mut Vec<E>, created: E) {
    if let Some(existing) = items.iter_mut().find(|e| e.id() == created.id()) {
        *existing = created;
    } else {
        items.push(created);
    }
}

pub fn apply_updated<E: CrmEntity>(items: &mut Vec<E>, updated: E) {
    match items.iter_mut().find(|e| e.id() == updated.id()) {
        Some(existing) => *existing = updated,
        None => items.push(updated),
    }
}

pub fn apply_removed<E: CrmEntity>(items: &mut Vec<E>, id: &str) {
    items.retain(|e| e.id() != id);
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a006_owner::aggregate::Owner;

    fn owner(id: &str, name: &str) -> Owner {
        Owner {
            id: id.into(),
            name: name.into(),
            phone: "+971500000000".into(),
            ..Default::default()
        }
    }

    #[test]
    fn test_created_is_appended() {
        let mut items = vec![owner("o1", "Ali")];
        apply_created(&mut items, owner("o2", "Sara"));
        assert_eq!(items.len(), 2);
        assert_eq!(items[1].name, "Sara");
    }

    #[test]
    fn test_updated_replaces_by_id() {
        let mut items = vec![owner("o1", "Ali"), owner("o2", "Sara")];
        apply_updated(&mut items, owner("o1", "Ali Hassan"));
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].name, "Ali Hassan");
        assert_eq!(items[1].name, "Sara");
    }

    #[test]
    fn test_removed_by_id() {
        let mut items = vec![owner("o1", "Ali"), owner("o2", "Sara")];
        apply_removed(&mut items, "o1");
        assert_eq!(items, vec![owner("o2", "Sara")]);
        apply_removed(&mut items, "missing");
        assert_eq!(items.len(), 1);
    }
}

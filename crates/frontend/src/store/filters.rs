//! Filter drawer slots: open flag and the criteria last applied.

use leptos::prelude::*;

/// Typed criteria a list page filters its rows with
pub trait FilterCriteria<E>: Clone + Default + PartialEq + Send + Sync + 'static {
    fn matches(&self, item: &E) -> bool;

    /// Number of criteria that restrict the list (badge on the filter button)
    fn active_count(&self) -> usize;
}

pub struct FilterSlot<F: Send + Sync + 'static> {
    pub open: RwSignal<bool>,
    pub applied: RwSignal<F>,
}

impl<F: Send + Sync + 'static> Clone for FilterSlot<F> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<F: Send + Sync + 'static> Copy for FilterSlot<F> {}

impl<F: Default + Send + Sync + 'static> Default for FilterSlot<F> {
    fn default() -> Self {
        Self {
            open: RwSignal::new(false),
            applied: RwSignal::new(F::default()),
        }
    }
}

impl<F: Send + Sync + 'static> FilterSlot<F> {
    pub fn toggle(&self) {
        self.open.update(|open| *open = !*open);
    }

    pub fn close(&self) {
        self.open.set(false);
    }

    /// Publishes the criteria and closes the drawer
    pub fn apply(&self, criteria: F) {
        self.applied.set(criteria);
        self.open.set(false);
    }
}

pub fn filter_items<E: Clone, F: FilterCriteria<E>>(items: &[E], criteria: &F) -> Vec<E> {
    items
        .iter()
        .filter(|item| criteria.matches(item))
        .cloned()
        .collect()
}

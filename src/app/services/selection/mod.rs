//! Module and event-type selection
//!
//! Holds which module codes and event types the user wants to see, persists
//! every change to a [`KeyValueStore`] immediately, and derives the visible
//! event set from the module list.

pub mod store;

pub use store::{JsonFileStore, KeyValueStore, MemoryStore};

use crate::Result;
use crate::app::models::{Module, ScheduleItem};
use crate::app::services::module_aggregator::ModuleCatalog;
use crate::constants::storage_keys;
use std::collections::BTreeSet;
use tracing::{debug, warn};

/// Every item of a selected module whose type is selected, in module order
pub fn filter_events<'a>(
    modules: &'a [Module],
    selected_modules: &BTreeSet<String>,
    selected_types: &BTreeSet<String>,
) -> Vec<&'a ScheduleItem> {
    modules
        .iter()
        .filter(|module| selected_modules.contains(&module.code))
        .flat_map(|module| module.schedule.iter())
        .filter(|item| selected_types.contains(&item.event_type))
        .collect()
}

/// Current selection of module codes and event types
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionState {
    modules: BTreeSet<String>,
    event_types: BTreeSet<String>,
}

impl SelectionState {
    pub fn new(
        modules: impl IntoIterator<Item = String>,
        event_types: impl IntoIterator<Item = String>,
    ) -> Self {
        Self {
            modules: modules.into_iter().collect(),
            event_types: event_types.into_iter().collect(),
        }
    }

    /// Load the persisted selection
    ///
    /// Absent keys default to every module in the catalog and every event
    /// type it contains. Values that are not JSON string arrays are treated
    /// as absent.
    pub fn load<S: KeyValueStore + ?Sized>(store: &S, catalog: &ModuleCatalog) -> Result<Self> {
        let modules = match read_set(store, storage_keys::SELECTED_MODULES)? {
            Some(saved) => saved,
            None => catalog.codes().map(str::to_string).collect(),
        };

        let event_types = match read_set(store, storage_keys::SELECTED_EVENT_TYPES)? {
            Some(saved) => saved,
            None => catalog.event_types().into_iter().collect(),
        };

        debug!(
            "Selection loaded: {} modules, {} event types",
            modules.len(),
            event_types.len()
        );

        Ok(Self {
            modules,
            event_types,
        })
    }

    pub fn modules(&self) -> &BTreeSet<String> {
        &self.modules
    }

    pub fn event_types(&self) -> &BTreeSet<String> {
        &self.event_types
    }

    pub fn is_module_selected(&self, code: &str) -> bool {
        self.modules.contains(code)
    }

    pub fn is_type_selected(&self, event_type: &str) -> bool {
        self.event_types.contains(event_type)
    }

    /// Flip a module's membership and persist; returns whether it is now selected
    pub fn toggle_module<S: KeyValueStore + ?Sized>(
        &mut self,
        code: &str,
        store: &mut S,
    ) -> Result<bool> {
        let selected = toggle(&mut self.modules, code);
        self.save_modules(store)?;
        Ok(selected)
    }

    /// Flip an event type's membership and persist; returns whether it is now selected
    pub fn toggle_event_type<S: KeyValueStore + ?Sized>(
        &mut self,
        event_type: &str,
        store: &mut S,
    ) -> Result<bool> {
        let selected = toggle(&mut self.event_types, event_type);
        self.save_event_types(store)?;
        Ok(selected)
    }

    /// Add every given module code to the selection and persist
    pub fn select_modules<'a, S: KeyValueStore + ?Sized>(
        &mut self,
        codes: impl IntoIterator<Item = &'a str>,
        store: &mut S,
    ) -> Result<()> {
        self.modules.extend(codes.into_iter().map(str::to_string));
        self.save_modules(store)
    }

    /// Clear the module selection and persist
    pub fn deselect_all_modules<S: KeyValueStore + ?Sized>(&mut self, store: &mut S) -> Result<()> {
        self.modules.clear();
        self.save_modules(store)
    }

    pub fn save_modules<S: KeyValueStore + ?Sized>(&self, store: &mut S) -> Result<()> {
        write_set(store, storage_keys::SELECTED_MODULES, &self.modules)
    }

    pub fn save_event_types<S: KeyValueStore + ?Sized>(&self, store: &mut S) -> Result<()> {
        write_set(store, storage_keys::SELECTED_EVENT_TYPES, &self.event_types)
    }

    /// Events visible under this selection
    pub fn visible_events<'a>(&self, modules: &'a [Module]) -> Vec<&'a ScheduleItem> {
        filter_events(modules, &self.modules, &self.event_types)
    }
}

fn toggle(set: &mut BTreeSet<String>, value: &str) -> bool {
    if set.remove(value) {
        false
    } else {
        set.insert(value.to_string());
        true
    }
}

fn read_set<S: KeyValueStore + ?Sized>(store: &S, key: &str) -> Result<Option<BTreeSet<String>>> {
    let Some(raw) = store.get(key)? else {
        return Ok(None);
    };

    match serde_json::from_str::<Vec<String>>(&raw) {
        Ok(values) => Ok(Some(values.into_iter().collect())),
        Err(e) => {
            warn!("Ignoring unreadable '{}' value: {}", key, e);
            Ok(None)
        }
    }
}

fn write_set<S: KeyValueStore + ?Sized>(
    store: &mut S,
    key: &str,
    values: &BTreeSet<String>,
) -> Result<()> {
    let json = serde_json::to_string(values)?;
    store.set(key, &json)
}

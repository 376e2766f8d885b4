//! Module aggregation and catalog queries
//!
//! Groups schedule items into [`Module`] records keyed by module code,
//! keeping first-seen order for both modules and their schedules, and
//! answers the listing queries of the module picker (level filter, sort,
//! available event types).

use crate::app::models::{Module, ScheduleItem};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap};
use std::str::FromStr;

/// Modules keyed by code, iterated in first-seen order
#[derive(Debug, Clone, Default)]
pub struct ModuleCatalog {
    modules: Vec<Module>,
    index: HashMap<String, usize>,
}

/// Group schedule items by module code
///
/// Input order is preserved: a module appears where its code is first seen,
/// and each schedule lists its items in encounter order. The first item of
/// a module names it.
pub fn aggregate<I>(items: I) -> ModuleCatalog
where
    I: IntoIterator<Item = ScheduleItem>,
{
    let mut catalog = ModuleCatalog::default();

    for item in items {
        let position = match catalog.index.get(&item.module_code) {
            Some(&position) => position,
            None => {
                catalog.modules.push(Module::from_first_occurrence(&item));
                let position = catalog.modules.len() - 1;
                catalog.index.insert(item.module_code.clone(), position);
                position
            }
        };
        catalog.modules[position].schedule.push(item);
    }

    catalog
}

impl ModuleCatalog {
    /// Look up a module by code
    pub fn get(&self, code: &str) -> Option<&Module> {
        self.index.get(code).map(|&position| &self.modules[position])
    }

    pub fn contains(&self, code: &str) -> bool {
        self.index.contains_key(code)
    }

    /// Modules in first-seen order
    pub fn modules(&self) -> &[Module] {
        &self.modules
    }

    pub fn into_modules(self) -> Vec<Module> {
        self.modules
    }

    pub fn len(&self) -> usize {
        self.modules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }

    /// Module codes in first-seen order
    pub fn codes(&self) -> impl Iterator<Item = &str> {
        self.modules.iter().map(|module| module.code.as_str())
    }

    /// Total number of schedule items across all modules
    pub fn item_count(&self) -> usize {
        self.modules.iter().map(Module::event_count).sum()
    }

    /// Every non-empty event type, deduplicated and sorted
    pub fn event_types(&self) -> Vec<String> {
        self.modules
            .iter()
            .flat_map(|module| module.schedule.iter())
            .filter(|item| !item.event_type.is_empty())
            .map(|item| item.event_type.clone())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Modules shown for a level filter, ordered by the requested sort
    pub fn listing(&self, level: &LevelFilter, sort: ModuleSort) -> Vec<&Module> {
        let mut shown: Vec<&Module> = self
            .modules
            .iter()
            .filter(|module| level.matches(&module.code))
            .collect();

        match sort {
            ModuleSort::Name => {
                shown.sort_by_cached_key(|module| module.name.to_lowercase());
            }
            ModuleSort::Events => {
                shown.sort_by(|a, b| b.event_count().cmp(&a.event_count()));
            }
        }

        shown
    }
}

/// Level filter over module codes
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum LevelFilter {
    #[default]
    All,
    /// Modules whose code starts with the prefix, e.g. "CI5"
    Prefix(String),
}

impl LevelFilter {
    pub fn matches(&self, code: &str) -> bool {
        match self {
            LevelFilter::All => true,
            LevelFilter::Prefix(prefix) => code.starts_with(prefix.as_str()),
        }
    }
}

impl FromStr for LevelFilter {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err("Level filter must not be empty".to_string());
        }

        if trimmed.eq_ignore_ascii_case("all") {
            Ok(LevelFilter::All)
        } else {
            Ok(LevelFilter::Prefix(trimmed.to_uppercase()))
        }
    }
}

/// Sort order for module listings
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ModuleSort {
    /// Name A-Z
    #[default]
    Name,
    /// Most events first
    Events,
}

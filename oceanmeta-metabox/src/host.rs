//! Host integration traits.
//!
//! The metabox consumes three host services: read-only site data queries
//! feeding dynamic choice lists, the per-content metadata store values are
//! persisted to, and the capability check gating registration. All three are
//! injected at registry construction rather than reached through globals.

use std::collections::HashMap;

use thiserror::Error;

/// A host data source was unavailable. Lookups degrade to the sentinel-only
/// choice list; this error never propagates out of the registry.
#[derive(Debug, Error)]
#[error("host data source unavailable: {0}")]
pub struct HostError(pub String);

/// Read-only queries against the host site, plus the capability check.
///
/// Each item list is `(value, label)` in the host's natural order: menus as
/// `(term_id, name)`, library templates as `(post_id, title)`, widget areas
/// as `(sidebar_id, name)`.
pub trait SiteData {
    fn menus(&self) -> Result<Vec<(String, String)>, HostError>;

    /// Published library-template items.
    fn library_templates(&self) -> Result<Vec<(String, String)>, HostError>;

    /// Registered widget areas.
    fn widget_areas(&self) -> Result<Vec<(String, String)>, HostError>;

    fn current_user_can(&self, capability: &str) -> bool;
}

/// The host's generic per-content-item metadata store.
///
/// Values live under the field's storage key. `remove` exists because an
/// empty sanitized value deletes the row rather than storing an empty
/// string.
pub trait MetaStore {
    fn get(&self, content_id: &str, key: &str) -> Option<String>;
    fn set(&mut self, content_id: &str, key: &str, value: &str);
    fn remove(&mut self, content_id: &str, key: &str);
}

/// In-memory [`MetaStore`] for tests and embedding outside a CMS.
#[derive(Debug, Default)]
pub struct MemoryMetaStore {
    items: HashMap<String, HashMap<String, String>>,
}

impl MemoryMetaStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl MetaStore for MemoryMetaStore {
    fn get(&self, content_id: &str, key: &str) -> Option<String> {
        self.items.get(content_id)?.get(key).cloned()
    }

    fn set(&mut self, content_id: &str, key: &str, value: &str) {
        self.items
            .entry(content_id.to_string())
            .or_default()
            .insert(key.to_string(), value.to_string());
    }

    fn remove(&mut self, content_id: &str, key: &str) {
        if let Some(meta) = self.items.get_mut(content_id) {
            meta.remove(key);
        }
    }
}

//! Registration table for control kinds.

use indexmap::IndexMap;
use serde::Serialize;
use tracing::debug;

/// A registered control kind: the implementation the rendering framework
/// instantiates and the template it loads instead of its default.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ControlType {
    pub kind: String,
    pub renderer: String,
    pub template: String,
}

/// Where a control kind's template comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateSource {
    /// Path registered in the table.
    Registered(String),
    /// Fall through to the rendering framework's own template.
    FrameworkDefault,
}

/// Control kind registry. Registration is idempotent by kind name,
/// last registration wins.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ControlTable {
    kinds: IndexMap<String, ControlType>,
}

impl ControlTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(
        &mut self,
        kind: impl Into<String>,
        renderer: impl Into<String>,
        template: impl Into<String>,
    ) {
        let kind = kind.into();
        let control = ControlType {
            kind: kind.clone(),
            renderer: renderer.into(),
            template: template.into(),
        };
        if self.kinds.insert(kind.clone(), control).is_some() {
            debug!(%kind, "control kind re-registered, last registration wins");
        }
    }

    pub fn contains(&self, kind: &str) -> bool {
        self.kinds.contains_key(kind)
    }

    pub fn get(&self, kind: &str) -> Option<&ControlType> {
        self.kinds.get(kind)
    }

    /// Resolve the template for a kind; unregistered kinds use the
    /// framework default.
    pub fn resolve_template(&self, kind: &str) -> TemplateSource {
        match self.kinds.get(kind) {
            Some(control) => TemplateSource::Registered(control.template.clone()),
            None => TemplateSource::FrameworkDefault,
        }
    }

    /// Registered kind names in registration order.
    pub fn kinds(&self) -> impl Iterator<Item = &str> {
        self.kinds.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.kinds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.kinds.is_empty()
    }
}

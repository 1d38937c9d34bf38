//! Core schema types for the settings metabox.
//!
//! All types serialize via serde for the rendering-framework boundary. Field
//! definitions describe named, typed settings grouped into sections; each
//! field owns one or more storage slots ([`SettingDef`]) that carry the
//! sanitizer applied on save.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::sanitize::Sanitizer;

/// A single `(value, label)` pair in a choice list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Choice {
    pub value: String,
    pub label: String,
}

impl Choice {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

/// Where a field's choice list comes from.
///
/// Static lists are fixed at declaration time; dynamic lists name a host
/// lookup that the registry resolves at request time.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum Choices {
    Static { options: Vec<Choice> },
    Dynamic { lookup: LookupKind },
}

impl Choices {
    /// Build a static list from `(value, label)` pairs.
    ///
    /// Duplicate values collapse with last-write-wins, keeping the first
    /// occurrence's position.
    pub fn from_pairs<'a, I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut map: IndexMap<&str, &str> = IndexMap::new();
        for (value, label) in pairs {
            map.insert(value, label);
        }
        Choices::Static {
            options: map
                .into_iter()
                .map(|(value, label)| Choice::new(value, label))
                .collect(),
        }
    }

    pub fn lookup(kind: LookupKind) -> Self {
        Choices::Dynamic { lookup: kind }
    }
}

/// Host data sources a dynamic choice list can draw from.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum LookupKind {
    Menus,
    LibraryTemplates,
    WidgetAreas,
}

/// The UI widget type used to edit a field's value.
///
/// The first six kinds are built into the rendering framework; the rest must
/// be registered in a control table before a field may reference them.
/// `Custom` covers third-party registrations.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(from = "String", into = "String")]
pub enum ControlKind {
    Select,
    Color,
    Image,
    Text,
    Number,
    Textarea,
    Buttonset,
    Range,
    Media,
    RgbaColor,
    MultipleSelect,
    Editor,
    Typography,
    Custom(String),
}

impl ControlKind {
    /// The kebab-case name the rendering framework dispatches on.
    pub fn name(&self) -> &str {
        match self {
            Self::Select => "select",
            Self::Color => "color",
            Self::Image => "image",
            Self::Text => "text",
            Self::Number => "number",
            Self::Textarea => "textarea",
            Self::Buttonset => "buttonset",
            Self::Range => "range",
            Self::Media => "media",
            Self::RgbaColor => "rgba-color",
            Self::MultipleSelect => "multiple-select",
            Self::Editor => "editor",
            Self::Typography => "typography",
            Self::Custom(name) => name,
        }
    }

    /// Whether the framework renders this kind without a registered control
    /// type.
    pub fn is_builtin(&self) -> bool {
        matches!(
            self,
            Self::Select | Self::Color | Self::Image | Self::Text | Self::Number | Self::Textarea
        )
    }
}

impl From<String> for ControlKind {
    fn from(s: String) -> Self {
        match s.as_str() {
            "select" => Self::Select,
            "color" => Self::Color,
            "image" => Self::Image,
            "text" => Self::Text,
            "number" => Self::Number,
            "textarea" => Self::Textarea,
            "buttonset" => Self::Buttonset,
            "range" => Self::Range,
            "media" => Self::Media,
            "rgba-color" => Self::RgbaColor,
            "multiple-select" => Self::MultipleSelect,
            "editor" => Self::Editor,
            "typography" => Self::Typography,
            _ => Self::Custom(s),
        }
    }
}

impl From<ControlKind> for String {
    fn from(kind: ControlKind) -> String {
        kind.name().to_string()
    }
}

/// Numeric input constraints for number and range controls.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default)]
pub struct NumberAttrs {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub step: Option<f64>,
}

impl NumberAttrs {
    pub fn min_step(min: f64, step: f64) -> Self {
        Self {
            min: Some(min),
            max: None,
            step: Some(step),
        }
    }
}

/// One persisted storage slot.
///
/// Most fields own exactly one, keyed like the field itself. Composite
/// controls (typography) own several, each with its own key and sanitizer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SettingDef {
    pub key: String,
    pub sanitizer: Sanitizer,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<String>,
}

impl SettingDef {
    pub fn new(key: impl Into<String>, sanitizer: Sanitizer) -> Self {
        Self {
            key: key.into(),
            sanitizer,
            default: None,
        }
    }
}

/// A field definition — the complete schema for one editable setting.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FieldDef {
    /// Unique, stable identifier; doubles as the storage key for
    /// single-setting fields.
    pub key: String,
    /// Id of the containing section.
    pub section: String,
    pub control: ControlKind,
    pub label: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub choices: Option<Choices>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attrs: Option<NumberAttrs>,
    #[serde(default)]
    pub settings: Vec<SettingDef>,
}

impl FieldDef {
    pub fn new(
        key: impl Into<String>,
        section: impl Into<String>,
        control: ControlKind,
        label: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            key: key.into(),
            section: section.into(),
            control,
            label: label.into(),
            description: description.into(),
            choices: None,
            attrs: None,
            settings: Vec::new(),
        }
    }

    pub fn with_choices(mut self, choices: Choices) -> Self {
        self.choices = Some(choices);
        self
    }

    pub fn with_attrs(mut self, attrs: NumberAttrs) -> Self {
        self.attrs = Some(attrs);
        self
    }

    /// Set the sanitizer of the field's primary setting, creating the
    /// setting if it does not exist yet.
    pub fn sanitized_by(mut self, sanitizer: Sanitizer) -> Self {
        let idx = self.ensure_primary();
        self.settings[idx].sanitizer = sanitizer;
        self
    }

    /// Set the default value of the field's primary setting.
    pub fn with_default(mut self, default: impl Into<String>) -> Self {
        let idx = self.ensure_primary();
        self.settings[idx].default = Some(default.into());
        self
    }

    /// Add an extra storage slot (composite controls).
    pub fn with_setting(mut self, setting: SettingDef) -> Self {
        self.settings.push(setting);
        self
    }

    /// The setting stored under the field's own key, if any.
    pub fn primary_setting(&self) -> Option<&SettingDef> {
        self.settings.iter().find(|s| s.key == self.key)
    }

    /// Sanitizer of the primary setting.
    pub fn sanitizer(&self) -> Option<Sanitizer> {
        self.primary_setting().map(|s| s.sanitizer)
    }

    /// Default value of the primary setting.
    pub fn default_value(&self) -> Option<&str> {
        self.primary_setting().and_then(|s| s.default.as_deref())
    }

    fn ensure_primary(&mut self) -> usize {
        if let Some(idx) = self.settings.iter().position(|s| s.key == self.key) {
            return idx;
        }
        self.settings
            .insert(0, SettingDef::new(self.key.clone(), Sanitizer::Raw));
        0
    }
}

/// A named grouping of fields, shown as a tab in the admin editor.
/// Ordering among sections is registration order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SectionDef {
    pub id: String,
    pub label: String,
    pub icon: String,
}

impl SectionDef {
    pub fn new(id: impl Into<String>, label: impl Into<String>, icon: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            icon: icon.into(),
        }
    }
}

/// The metabox container the framework renders the sections into.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ManagerDef {
    pub id: String,
    pub label: String,
    pub context: String,
    pub priority: String,
}

impl ManagerDef {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            context: "normal".into(),
            priority: "high".into(),
        }
    }
}

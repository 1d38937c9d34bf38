//! Metabox registry — assembles and exposes the per-content-type schema.
//!
//! Construction runs the capability gate and validates every catalog field
//! against the control table; `schema_for` builds the request-time schema
//! with dynamic choice lists resolved against the host.

use indexmap::IndexMap;
use tracing::{debug, error, warn};

use oceanmeta_controls::ControlTable;
use oceanmeta_fields::{Choice, Choices, FieldDef, LookupKind, Schema, SectionDef};

use crate::assets::{self, Asset, ScreenContext};
use crate::catalog;
use crate::config::MetaboxConfig;
use crate::host::{MetaStore, SiteData};

/// The registered metabox for one request.
#[derive(Debug)]
pub struct MetaboxRegistry {
    config: MetaboxConfig,
    controls: ControlTable,
    sections: Vec<SectionDef>,
    fields: Vec<FieldDef>,
    post_section: SectionDef,
    post_fields: Vec<FieldDef>,
    editable: bool,
}

impl MetaboxRegistry {
    /// Register the metabox. Fields referencing a control kind the table
    /// does not know are dropped with a warning; a user without the
    /// configured capability gets no editable schema at all.
    pub fn register(config: MetaboxConfig, controls: ControlTable, site: &dyn SiteData) -> Self {
        let editable = site.current_user_can(&config.capability);

        let (sections, fields, post_section, post_fields) = if editable {
            (
                catalog::ocean_sections(),
                validate_controls(catalog::ocean_fields(), &controls),
                catalog::post_section(),
                validate_controls(catalog::post_fields(), &controls),
            )
        } else {
            debug!(
                capability = %config.capability,
                "user lacks capability, skipping field registration"
            );
            (Vec::new(), Vec::new(), catalog::post_section(), Vec::new())
        };

        debug!(
            sections = sections.len(),
            fields = fields.len(),
            post_fields = post_fields.len(),
            editable,
            "metabox registered"
        );

        Self {
            config,
            controls,
            sections,
            fields,
            post_section,
            post_fields,
            editable,
        }
    }

    /// Register with the default configuration and control table.
    pub fn with_defaults(site: &dyn SiteData) -> Self {
        Self::register(
            MetaboxConfig::default(),
            catalog::ocean_control_table(),
            site,
        )
    }

    pub fn config(&self) -> &MetaboxConfig {
        &self.config
    }

    pub fn post_types(&self) -> &[String] {
        &self.config.post_types
    }

    /// The control table; available even when the schema is not editable.
    pub fn controls(&self) -> &ControlTable {
        &self.controls
    }

    pub fn is_editable(&self) -> bool {
        self.editable
    }

    /// The schema for a content type's edit screen, with dynamic choice
    /// lists resolved against the host. `None` for unsupported content
    /// types and for users without the capability.
    pub fn schema_for(&self, content_type: &str, site: &dyn SiteData) -> Option<Schema> {
        if !self.editable || !self.config.supports(content_type) {
            return None;
        }

        let mut builder = Schema::builder(catalog::ocean_manager(&self.config.brand))
            .sections(self.sections.iter().cloned())
            .fields(self.fields.iter().map(|f| resolve_field(f, site)));

        if content_type == "post" {
            builder = builder
                .section(self.post_section.clone())
                .fields(self.post_fields.iter().map(|f| resolve_field(f, site)));
        }

        match builder.build() {
            Ok(schema) => Some(schema),
            Err(e) => {
                error!(%content_type, %e, "schema assembly failed");
                None
            }
        }
    }

    /// Assets for an admin screen, or `None` when the gate rejects it.
    pub fn assets_for(&self, screen: &ScreenContext) -> Option<Vec<Asset>> {
        if !self.editable || !assets::should_load_assets(screen, &self.config) {
            return None;
        }
        Some(assets::edit_screen_assets(&self.config))
    }
}

/// Drop fields whose custom control kind is not registered.
fn validate_controls(fields: Vec<FieldDef>, controls: &ControlTable) -> Vec<FieldDef> {
    fields
        .into_iter()
        .filter(|field| {
            let known = field.control.is_builtin() || controls.contains(field.control.name());
            if !known {
                warn!(
                    field = %field.key,
                    control = %field.control.name(),
                    "control kind not registered, skipping field"
                );
            }
            known
        })
        .collect()
}

/// Replace a dynamic choice list with its resolved static list.
fn resolve_field(field: &FieldDef, site: &dyn SiteData) -> FieldDef {
    let mut field = field.clone();
    if let Some(Choices::Dynamic { lookup }) = field.choices {
        field.choices = Some(Choices::Static {
            options: resolve_lookup(lookup, site),
        });
    }
    field
}

/// Resolve a host lookup into an ordered choice list: the sentinel first,
/// then the host items in their natural order. An unavailable host source
/// degrades to the sentinel-only list.
pub fn resolve_lookup(kind: LookupKind, site: &dyn SiteData) -> Vec<Choice> {
    let (sentinel, items) = match kind {
        LookupKind::Menus => ("Default", site.menus()),
        LookupKind::LibraryTemplates => ("Select a Template", site.library_templates()),
        LookupKind::WidgetAreas => ("Default", site.widget_areas()),
    };

    let mut choices = vec![Choice::new("", sentinel)];
    match items {
        Ok(items) => {
            choices.extend(
                items
                    .into_iter()
                    .map(|(value, label)| Choice::new(value, label)),
            );
        }
        Err(e) => {
            warn!(lookup = ?kind, %e, "host lookup failed, sentinel-only choices");
        }
    }
    choices
}

/// Sanitize a form submission and persist it.
///
/// Keys that match a schema setting are cleaned by that setting's sanitizer;
/// a non-empty result is stored, an empty result deletes the stored value.
/// Unknown keys are ignored. Returns the sanitized values, in submission
/// order (last value wins for duplicated keys).
pub fn save_submission(
    schema: &Schema,
    store: &mut dyn MetaStore,
    content_id: &str,
    submission: &[(&str, &str)],
) -> IndexMap<String, String> {
    let mut sanitized = IndexMap::new();
    for &(key, raw) in submission {
        let Some((_, setting)) = schema.setting(key) else {
            continue;
        };
        let value = setting.sanitizer.apply(raw);
        if value.is_empty() {
            store.remove(content_id, key);
        } else {
            store.set(content_id, key, &value);
        }
        sanitized.insert(key.to_string(), value);
    }
    sanitized
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::HostError;

    /// Site double: fixed lookup data, switchable capability.
    struct TestSite {
        can_manage: bool,
        fail_lookups: bool,
    }

    impl TestSite {
        fn admin() -> Self {
            Self {
                can_manage: true,
                fail_lookups: false,
            }
        }
    }

    impl SiteData for TestSite {
        fn menus(&self) -> Result<Vec<(String, String)>, HostError> {
            if self.fail_lookups {
                return Err(HostError("menus unavailable".into()));
            }
            Ok(vec![
                ("3".into(), "Primary".into()),
                ("7".into(), "Footer Links".into()),
            ])
        }

        fn library_templates(&self) -> Result<Vec<(String, String)>, HostError> {
            if self.fail_lookups {
                return Err(HostError("library unavailable".into()));
            }
            Ok(vec![("101".into(), "Hero Header".into())])
        }

        fn widget_areas(&self) -> Result<Vec<(String, String)>, HostError> {
            if self.fail_lookups {
                return Err(HostError("sidebars unavailable".into()));
            }
            Ok(vec![
                ("sidebar".into(), "Default Sidebar".into()),
                ("footer-1".into(), "Footer 1".into()),
            ])
        }

        fn current_user_can(&self, capability: &str) -> bool {
            self.can_manage && capability == "manage_options"
        }
    }

    #[test]
    fn lookup_puts_sentinel_first() {
        let site = TestSite::admin();
        let choices = resolve_lookup(LookupKind::Menus, &site);
        assert_eq!(choices[0], Choice::new("", "Default"));
        assert_eq!(choices[1], Choice::new("3", "Primary"));
        assert_eq!(choices.len(), 3);
    }

    #[test]
    fn library_lookup_uses_template_sentinel() {
        let site = TestSite::admin();
        let choices = resolve_lookup(LookupKind::LibraryTemplates, &site);
        assert_eq!(choices[0], Choice::new("", "Select a Template"));
    }

    #[test]
    fn failed_lookup_degrades_to_sentinel_only() {
        let site = TestSite {
            can_manage: true,
            fail_lookups: true,
        };
        let choices = resolve_lookup(LookupKind::WidgetAreas, &site);
        assert_eq!(choices, vec![Choice::new("", "Default")]);
    }

    #[test]
    fn unregistered_custom_control_drops_only_that_field() {
        let site = TestSite::admin();
        // Empty table: every custom-control field is dropped, builtins stay.
        let registry = MetaboxRegistry::register(MetaboxConfig::default(), ControlTable::new(), &site);
        let schema = registry.schema_for("page", &site).unwrap();

        assert!(schema.field("ocean_disable_margins").is_none());
        assert!(schema.field("ocean_menu_typo").is_none());
        assert!(schema.field("ocean_post_layout").is_some());
        assert!(schema.field("ocean_add_body_class").is_some());
    }

    #[test]
    fn capability_denied_means_no_schema() {
        let site = TestSite {
            can_manage: false,
            fail_lookups: false,
        };
        let registry = MetaboxRegistry::with_defaults(&site);
        assert!(!registry.is_editable());
        assert!(registry.schema_for("post", &site).is_none());
        // The control table is still registered.
        assert!(registry.controls().contains("typography"));
    }

    #[test]
    fn unsupported_content_type_has_no_schema() {
        let site = TestSite::admin();
        let registry = MetaboxRegistry::with_defaults(&site);
        assert!(registry.schema_for("attachment", &site).is_none());
    }

    #[test]
    fn schema_resolves_dynamic_choices() {
        let site = TestSite::admin();
        let registry = MetaboxRegistry::with_defaults(&site);
        let schema = registry.schema_for("page", &site).unwrap();

        let sidebar = schema.field("ocean_sidebar").unwrap();
        let Some(Choices::Static { options }) = &sidebar.choices else {
            panic!("expected resolved static choices");
        };
        assert_eq!(options[0], Choice::new("", "Default"));
        assert_eq!(options[1], Choice::new("sidebar", "Default Sidebar"));
        assert_eq!(options[2], Choice::new("footer-1", "Footer 1"));
    }

    #[test]
    fn save_submission_sanitizes_and_stores() {
        let site = TestSite::admin();
        let registry = MetaboxRegistry::with_defaults(&site);
        let schema = registry.schema_for("page", &site).unwrap();
        let mut store = crate::host::MemoryMetaStore::new();

        let sanitized = save_submission(
            &schema,
            &mut store,
            "42",
            &[
                ("ocean_post_layout", "Full-Width"),
                ("ocean_both_sidebars_content_width", "60.5"),
                ("ocean_menu_link_color", "13aff0"),
                ("unknown_key", "whatever"),
            ],
        );

        assert_eq!(store.get("42", "ocean_post_layout").as_deref(), Some("full-width"));
        assert_eq!(
            store.get("42", "ocean_both_sidebars_content_width").as_deref(),
            Some("60")
        );
        assert_eq!(
            store.get("42", "ocean_menu_link_color").as_deref(),
            Some("#13aff0")
        );
        assert!(store.get("42", "unknown_key").is_none());
        assert_eq!(sanitized.len(), 3);
    }

    #[test]
    fn save_submission_empty_result_removes_value() {
        let site = TestSite::admin();
        let registry = MetaboxRegistry::with_defaults(&site);
        let schema = registry.schema_for("page", &site).unwrap();
        let mut store = crate::host::MemoryMetaStore::new();

        store.set("42", "ocean_post_title_height", "400");
        save_submission(
            &schema,
            &mut store,
            "42",
            &[("ocean_post_title_height", "not-a-number")],
        );
        assert!(store.get("42", "ocean_post_title_height").is_none());
    }

    #[test]
    fn save_submission_reaches_typography_slots() {
        let site = TestSite::admin();
        let registry = MetaboxRegistry::with_defaults(&site);
        let schema = registry.schema_for("page", &site).unwrap();
        let mut store = crate::host::MemoryMetaStore::new();

        save_submission(
            &schema,
            &mut store,
            "7",
            &[
                ("ocean_menu_typo_font_family", "Open Sans"),
                ("ocean_menu_typo_font_weight", "Semi-Bold 600"),
            ],
        );
        assert_eq!(
            store.get("7", "ocean_menu_typo_font_family").as_deref(),
            Some("Open Sans")
        );
        // Key-sanitized slot.
        assert_eq!(
            store.get("7", "ocean_menu_typo_font_weight").as_deref(),
            Some("semi-bold600")
        );
    }
}

//! End-to-end tests for metabox registration and the edit-screen gate.

use std::collections::HashSet;

use oceanmeta_controls::TemplateSource;
use oceanmeta_fields::{Choice, Choices, LookupKind, Sanitizer};
use oceanmeta_metabox::{
    ocean_control_table, resolve_lookup, save_submission, HostError, MemoryMetaStore,
    MetaStore, MetaboxConfig, MetaboxRegistry, ScreenContext, SiteData,
};

/// A host with no menus, no templates, no widget areas.
struct BareSite {
    can_manage: bool,
}

impl SiteData for BareSite {
    fn menus(&self) -> Result<Vec<(String, String)>, HostError> {
        Ok(Vec::new())
    }

    fn library_templates(&self) -> Result<Vec<(String, String)>, HostError> {
        Ok(Vec::new())
    }

    fn widget_areas(&self) -> Result<Vec<(String, String)>, HostError> {
        Ok(Vec::new())
    }

    fn current_user_can(&self, capability: &str) -> bool {
        self.can_manage && capability == "manage_options"
    }
}

fn admin_site() -> BareSite {
    BareSite { can_manage: true }
}

#[test_log::test]
fn post_schema_contains_link_format_target() {
    let site = admin_site();
    let registry = MetaboxRegistry::with_defaults(&site);
    let schema = registry.schema_for("post", &site).unwrap();

    let section = schema.section("oceanwp_mb_post").unwrap();
    assert_eq!(section.label, "Post");

    let field = schema.field("ocean_link_format_target").unwrap();
    assert_eq!(field.section, "oceanwp_mb_post");
    let Some(Choices::Static { options }) = &field.choices else {
        panic!("expected static choices");
    };
    assert_eq!(
        options,
        &vec![Choice::new("self", "Self"), Choice::new("blank", "Blank")]
    );
    assert_eq!(field.default_value(), Some("self"));
    assert_eq!(field.sanitizer(), Some(Sanitizer::Text));
}

#[test]
fn post_section_is_post_only() {
    let site = admin_site();
    let registry = MetaboxRegistry::with_defaults(&site);

    let post_schema = registry.schema_for("post", &site).unwrap();
    assert_eq!(post_schema.sections().len(), 9);
    assert_eq!(post_schema.sections().last().unwrap().id, "oceanwp_mb_post");

    for content_type in ["page", "product", "oceanwp_library"] {
        let schema = registry.schema_for(content_type, &site).unwrap();
        assert_eq!(schema.sections().len(), 8, "{content_type}");
        assert!(schema.section("oceanwp_mb_post").is_none());
        assert!(schema.field("ocean_link_format_target").is_none());
    }
}

#[test]
fn section_tab_order() {
    let site = admin_site();
    let registry = MetaboxRegistry::with_defaults(&site);
    let schema = registry.schema_for("post", &site).unwrap();

    let ids: Vec<&str> = schema.sections().iter().map(|s| s.id.as_str()).collect();
    assert_eq!(
        ids,
        [
            "oceanwp_mb_main",
            "oceanwp_mb_shortcodes",
            "oceanwp_mb_header",
            "oceanwp_mb_logo",
            "oceanwp_mb_menu",
            "oceanwp_mb_title",
            "oceanwp_mb_breadcrumbs",
            "oceanwp_mb_footer",
            "oceanwp_mb_post",
        ]
    );
}

#[test]
fn storage_keys_unique_per_content_type() {
    let site = admin_site();
    let registry = MetaboxRegistry::with_defaults(&site);
    let schema = registry.schema_for("post", &site).unwrap();

    let mut keys = HashSet::new();
    for field in schema.fields() {
        assert!(keys.insert(field.key.as_str()), "duplicate {}", field.key);
    }
    let mut setting_keys = HashSet::new();
    for field in schema.fields() {
        for setting in &field.settings {
            assert!(
                setting_keys.insert(setting.key.as_str()),
                "duplicate setting {}",
                setting.key
            );
        }
    }
}

#[test]
fn empty_host_lookups_are_sentinel_only() {
    let site = admin_site();
    assert_eq!(
        resolve_lookup(LookupKind::Menus, &site),
        vec![Choice::new("", "Default")]
    );

    let schema = MetaboxRegistry::with_defaults(&site)
        .schema_for("page", &site)
        .unwrap();
    let menu = schema.field("ocean_header_custom_menu").unwrap();
    let Some(Choices::Static { options }) = &menu.choices else {
        panic!("expected resolved choices");
    };
    assert_eq!(options, &vec![Choice::new("", "Default")]);
}

#[test]
fn manager_label_follows_branding() {
    let site = admin_site();
    let config = MetaboxConfig {
        brand: "Acme Theme".into(),
        ..MetaboxConfig::default()
    };
    let registry = MetaboxRegistry::register(config, ocean_control_table(), &site);
    let schema = registry.schema_for("page", &site).unwrap();
    assert_eq!(schema.manager().label, "Acme Theme Settings");
    assert_eq!(schema.manager().id, "oceanwp_mb_settings");
}

#[test]
fn template_resolution_with_and_without_registration() {
    let bare = oceanmeta_controls::ControlTable::new();
    assert_eq!(
        bare.resolve_template("select"),
        TemplateSource::FrameworkDefault
    );

    let table = ocean_control_table();
    assert_eq!(
        table.resolve_template("select"),
        TemplateSource::Registered("controls/select/template.php".into())
    );
    assert_eq!(
        table.resolve_template("typography"),
        TemplateSource::Registered("controls/typography/template.php".into())
    );
}

#[test_log::test]
fn asset_gate_block_editor_override() {
    let site = admin_site();

    let registry = MetaboxRegistry::with_defaults(&site);
    let screen = ScreenContext::new("post-new.php", "post", true);
    assert!(registry.assets_for(&screen).is_none());

    let config = MetaboxConfig {
        block_editor_assets: true,
        ..MetaboxConfig::default()
    };
    let registry = MetaboxRegistry::register(config, ocean_control_table(), &site);
    let assets = registry.assets_for(&screen).unwrap();
    assert_eq!(assets.len(), 6);
    assert!(assets.iter().any(|a| a.handle == "oceanwp-metabox-script"));
}

#[test]
fn assets_denied_without_capability() {
    let site = BareSite { can_manage: false };
    let registry = MetaboxRegistry::with_defaults(&site);
    let screen = ScreenContext::new("post.php", "post", false);
    assert!(registry.assets_for(&screen).is_none());
}

#[test]
fn typography_persists_seven_slots() {
    let site = admin_site();
    let registry = MetaboxRegistry::with_defaults(&site);
    let schema = registry.schema_for("page", &site).unwrap();

    let typo = schema.field("ocean_menu_typo").unwrap();
    assert_eq!(typo.settings.len(), 7);

    let mut store = MemoryMetaStore::new();
    save_submission(
        &schema,
        &mut store,
        "11",
        &[
            ("ocean_menu_typo_font_size", "14px"),
            ("ocean_menu_typo_transform", "Uppercase"),
        ],
    );
    assert_eq!(
        store.get("11", "ocean_menu_typo_font_size").as_deref(),
        Some("14px")
    );
    assert_eq!(
        store.get("11", "ocean_menu_typo_transform").as_deref(),
        Some("uppercase")
    );
}

#[test]
fn schema_serializes_for_the_framework_boundary() {
    let site = admin_site();
    let registry = MetaboxRegistry::with_defaults(&site);
    let schema = registry.schema_for("post", &site).unwrap();

    let json = serde_json::to_value(&schema).unwrap();
    assert_eq!(json["manager"]["id"], "oceanwp_mb_settings");
    assert_eq!(json["sections"][0]["icon"], "dashicons-admin-generic");

    let layout = json["fields"]
        .as_array()
        .unwrap()
        .iter()
        .find(|f| f["key"] == "ocean_post_layout")
        .unwrap();
    assert_eq!(layout["control"], "select");
    assert_eq!(layout["settings"][0]["sanitizer"], "key");
    assert_eq!(layout["choices"]["kind"], "static");
}

#[test]
fn end_to_end_save_round_trip() {
    let site = admin_site();
    let registry = MetaboxRegistry::with_defaults(&site);
    let schema = registry.schema_for("post", &site).unwrap();
    let mut store = MemoryMetaStore::new();

    let sanitized = save_submission(
        &schema,
        &mut store,
        "99",
        &[
            ("ocean_post_title", "Hello <script>alert(1)</script><em>World</em>"),
            ("ocean_post_title_height", "480.9"),
            ("ocean_link_format_target", "blank"),
            ("ocean_breadcrumbs_color", "zzz"),
        ],
    );

    assert_eq!(
        store.get("99", "ocean_post_title").as_deref(),
        Some("Hello <em>World</em>")
    );
    assert_eq!(store.get("99", "ocean_post_title_height").as_deref(), Some("480"));
    assert_eq!(
        store.get("99", "ocean_link_format_target").as_deref(),
        Some("blank")
    );
    // Invalid color degrades to empty and stays unset.
    assert!(store.get("99", "ocean_breadcrumbs_color").is_none());
    assert_eq!(sanitized["ocean_breadcrumbs_color"], "");
}

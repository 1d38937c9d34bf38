//! Registry configuration.
//!
//! Explicit parameters the embedding host supplies: supported content
//! types, the capability gating registration, theme branding, and the
//! asset-gate overrides.

use serde::{Deserialize, Serialize};

/// Configuration the embedding host supplies at registry construction.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MetaboxConfig {
    /// Theme branding used in the metabox label ("<brand> Settings").
    pub brand: String,
    /// Content types the metabox attaches to.
    pub post_types: Vec<String>,
    /// Capability required to edit the settings.
    pub capability: String,
    /// Content types whose edit screens load the metabox assets;
    /// `None` means the same list as `post_types`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub asset_post_types: Option<Vec<String>>,
    /// Load assets on the block-editor screen as well.
    #[serde(default)]
    pub block_editor_assets: bool,
    /// Serve unminified asset variants.
    #[serde(default)]
    pub script_debug: bool,
}

impl Default for MetaboxConfig {
    fn default() -> Self {
        Self {
            brand: "OceanWP".into(),
            post_types: vec![
                "post".into(),
                "page".into(),
                "product".into(),
                "oceanwp_library".into(),
                "elementor_library".into(),
                "ae_global_templates".into(),
            ],
            capability: "manage_options".into(),
            asset_post_types: None,
            block_editor_assets: false,
            script_debug: false,
        }
    }
}

impl MetaboxConfig {
    /// The post-type list the asset gate checks against.
    pub fn asset_post_types(&self) -> &[String] {
        self.asset_post_types.as_deref().unwrap_or(&self.post_types)
    }

    pub fn supports(&self, post_type: &str) -> bool {
        self.post_types.iter().any(|t| t == post_type)
    }
}

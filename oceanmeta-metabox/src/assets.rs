//! Edit-screen asset gate and manifest.
//!
//! Assets load only on the classic create/edit screens of supported content
//! types; the block-editor screen is excluded unless the config override is
//! set.

use serde::Serialize;

use crate::config::MetaboxConfig;

/// The admin screen a request is rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScreenContext {
    /// Admin page hook, e.g. `post.php` or `post-new.php`.
    pub hook: String,
    /// Content type of the item being edited, when known.
    pub post_type: Option<String>,
    /// Whether the screen is the visual block editor.
    pub block_editor: bool,
}

impl ScreenContext {
    pub fn new(hook: impl Into<String>, post_type: impl Into<String>, block_editor: bool) -> Self {
        Self {
            hook: hook.into(),
            post_type: Some(post_type.into()),
            block_editor,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum AssetKind {
    Style,
    Script,
}

/// One style or script handle to enqueue on the edit screen.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Asset {
    pub handle: String,
    pub kind: AssetKind,
    pub path: String,
    pub deps: Vec<String>,
}

impl Asset {
    fn style(handle: &str, path: String) -> Self {
        Self {
            handle: handle.into(),
            kind: AssetKind::Style,
            path,
            deps: Vec::new(),
        }
    }

    fn script(handle: &str, path: String, deps: &[&str]) -> Self {
        Self {
            handle: handle.into(),
            kind: AssetKind::Script,
            path,
            deps: deps.iter().map(|d| d.to_string()).collect(),
        }
    }
}

/// Whether the metabox assets load on this screen.
pub fn should_load_assets(screen: &ScreenContext, config: &MetaboxConfig) -> bool {
    if screen.hook != "post.php" && screen.hook != "post-new.php" {
        return false;
    }
    let Some(post_type) = &screen.post_type else {
        return false;
    };
    if !config.asset_post_types().iter().any(|t| t == post_type) {
        return false;
    }
    if screen.block_editor && !config.block_editor_assets {
        return false;
    }
    true
}

/// The styles and scripts the edit screen enqueues, minified unless
/// `script_debug` is set.
pub fn edit_screen_assets(config: &MetaboxConfig) -> Vec<Asset> {
    let min = if config.script_debug { "" } else { ".min" };
    vec![
        Asset::style(
            "oceanwp-butterbean",
            format!("controls/assets/css/butterbean{min}.css"),
        ),
        Asset::script(
            "oceanwp-butterbean",
            format!("controls/assets/js/butterbean{min}.js"),
            &["butterbean"],
        ),
        Asset::script(
            "oceanwp-metabox-script",
            "assets/js/metabox.min.js".into(),
            &["jquery"],
        ),
        // Namespaced select2 handle to avoid plugin conflicts.
        Asset::script(
            "oceanwp-select2",
            "controls/assets/js/select2.full.min.js".into(),
            &["jquery"],
        ),
        Asset::style("select2", "controls/assets/css/select2.min.css".into()),
        Asset::script(
            "wp-color-picker-alpha",
            "controls/assets/js/wp-color-picker-alpha.js".into(),
            &["wp-color-picker"],
        ),
    ]
}

//! Ocean per-content settings metabox.
//!
//! Declares the full admin-editable settings surface attached to content
//! records (pages, posts, products, library templates): nine labeled
//! sections of fields rendered through a pluggable form-control framework,
//! the custom control kinds that framework needs registered, and the
//! edit-screen asset gate.
//!
//! The [`MetaboxRegistry`] is an explicit object constructed once per
//! request — host integration points (site data queries, the per-content
//! metadata store, capability checks) are injected traits, and everything
//! the host may vary is an explicit [`MetaboxConfig`] parameter.
//!
//! ```rust,ignore
//! let registry = MetaboxRegistry::with_defaults(&site);
//! if let Some(schema) = registry.schema_for("post", &site) {
//!     // hand the schema to the rendering framework
//! }
//! ```

pub mod assets;
pub mod catalog;
pub mod config;
pub mod host;
pub mod registry;

pub use assets::{Asset, AssetKind, ScreenContext};
pub use catalog::ocean_control_table;
pub use config::MetaboxConfig;
pub use host::{HostError, MemoryMetaStore, MetaStore, SiteData};
pub use registry::{resolve_lookup, save_submission, MetaboxRegistry};

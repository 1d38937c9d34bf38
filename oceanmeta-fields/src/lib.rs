//! Schema vocabulary for the oceanmeta settings metabox.
//!
//! `oceanmeta-fields` is a standalone, schema-only crate: it describes the
//! sections, fields, control kinds, choice lists, and sanitizers of an
//! admin-editable settings surface. It knows nothing about the Ocean field
//! catalog or the host CMS — consumers declare their own fields and hand the
//! assembled [`Schema`] to whatever renders the edit form.
//!
//! # Architecture
//!
//! - **Schema-only**: owns field definitions, not field values
//! - **Explicit invariants**: duplicate field or setting keys are build
//!   errors, not silent map overwrites
//! - **Closed sanitizer set**: every sanitizer is a total function from raw
//!   submitted string to cleaned string, resolved at schema-construction time

pub mod error;
pub mod sanitize;
pub mod schema;
pub mod types;

pub use error::{FieldsError, Result};
pub use sanitize::Sanitizer;
pub use schema::{Schema, SchemaBuilder};
pub use types::{
    Choice, Choices, ControlKind, FieldDef, LookupKind, ManagerDef, NumberAttrs, SectionDef,
    SettingDef,
};

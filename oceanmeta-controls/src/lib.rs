//! Control kind table for the oceanmeta settings metabox.
//!
//! Maps a control kind name to the renderer implementation the framework
//! instantiates and the template path it loads. Built-in kinds render with
//! the framework default template unless an override is registered; custom
//! kinds always resolve to their registered template.

pub mod table;

pub use table::{ControlTable, ControlType, TemplateSource};

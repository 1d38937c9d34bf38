//! Schema container — ordered sections and fields with key invariants.
//!
//! A [`SchemaBuilder`] collects declarations in registration order; `build()`
//! enforces the invariants the source framework left to silent map
//! overwrites: section ids, field keys, and setting storage keys are each
//! unique across the schema.

use indexmap::IndexMap;
use serde::Serialize;

use crate::error::{FieldsError, Result};
use crate::types::{FieldDef, ManagerDef, SectionDef, SettingDef};

/// An assembled settings schema for one content type.
#[derive(Debug, Clone, Serialize)]
pub struct Schema {
    manager: ManagerDef,
    sections: Vec<SectionDef>,
    fields: Vec<FieldDef>,
    #[serde(skip)]
    field_index: IndexMap<String, usize>,
    #[serde(skip)]
    setting_index: IndexMap<String, (usize, usize)>,
}

impl Schema {
    pub fn builder(manager: ManagerDef) -> SchemaBuilder {
        SchemaBuilder {
            manager,
            sections: Vec::new(),
            fields: Vec::new(),
        }
    }

    pub fn manager(&self) -> &ManagerDef {
        &self.manager
    }

    /// Sections in registration order.
    pub fn sections(&self) -> &[SectionDef] {
        &self.sections
    }

    /// Fields in registration order, across all sections.
    pub fn fields(&self) -> &[FieldDef] {
        &self.fields
    }

    pub fn field(&self, key: &str) -> Option<&FieldDef> {
        self.field_index.get(key).map(|&i| &self.fields[i])
    }

    pub fn section(&self, id: &str) -> Option<&SectionDef> {
        self.sections.iter().find(|s| s.id == id)
    }

    /// Resolve a storage key to its owning field and setting.
    pub fn setting(&self, key: &str) -> Option<(&FieldDef, &SettingDef)> {
        self.setting_index.get(key).map(|&(f, s)| {
            let field = &self.fields[f];
            (field, &field.settings[s])
        })
    }

    /// Ordered sections, each with its ordered fields.
    pub fn sections_with_fields(&self) -> Vec<(&SectionDef, Vec<&FieldDef>)> {
        self.sections
            .iter()
            .map(|section| {
                let fields = self
                    .fields
                    .iter()
                    .filter(|f| f.section == section.id)
                    .collect();
                (section, fields)
            })
            .collect()
    }
}

/// Collects sections and fields, validates on `build()`.
pub struct SchemaBuilder {
    manager: ManagerDef,
    sections: Vec<SectionDef>,
    fields: Vec<FieldDef>,
}

impl SchemaBuilder {
    pub fn section(mut self, section: SectionDef) -> Self {
        self.sections.push(section);
        self
    }

    pub fn sections(mut self, sections: impl IntoIterator<Item = SectionDef>) -> Self {
        self.sections.extend(sections);
        self
    }

    pub fn field(mut self, field: FieldDef) -> Self {
        self.fields.push(field);
        self
    }

    pub fn fields(mut self, fields: impl IntoIterator<Item = FieldDef>) -> Self {
        self.fields.extend(fields);
        self
    }

    pub fn build(self) -> Result<Schema> {
        let mut section_ids: IndexMap<&str, ()> = IndexMap::new();
        for section in &self.sections {
            if section_ids.insert(section.id.as_str(), ()).is_some() {
                return Err(FieldsError::DuplicateSection {
                    id: section.id.clone(),
                });
            }
        }

        let mut field_index = IndexMap::new();
        let mut setting_index = IndexMap::new();
        for (f, field) in self.fields.iter().enumerate() {
            if !section_ids.contains_key(field.section.as_str()) {
                return Err(FieldsError::UnknownSection {
                    field: field.key.clone(),
                    section: field.section.clone(),
                });
            }
            if field_index.insert(field.key.clone(), f).is_some() {
                return Err(FieldsError::DuplicateFieldKey {
                    key: field.key.clone(),
                });
            }
            for (s, setting) in field.settings.iter().enumerate() {
                if setting_index.insert(setting.key.clone(), (f, s)).is_some() {
                    return Err(FieldsError::DuplicateSettingKey {
                        key: setting.key.clone(),
                    });
                }
            }
        }

        tracing::debug!(
            manager = %self.manager.id,
            sections = self.sections.len(),
            fields = self.fields.len(),
            "schema assembled"
        );

        Ok(Schema {
            manager: self.manager,
            sections: self.sections,
            fields: self.fields,
            field_index,
            setting_index,
        })
    }
}

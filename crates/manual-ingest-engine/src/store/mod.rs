//! Ordered collection of manual records persisted as a JSON array.
//!
//! Records are held as raw JSON values so entries written by other tools
//! survive a load/save cycle untouched. Only the `id` field is interpreted.

use std::fs;
use std::path::Path;

use serde::Serialize;
use serde_json::{Serializer, Value, ser::PrettyFormatter};

use crate::models::ManualDocument;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to serialize manual collection: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Outcome of merging one record into the collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Upsert {
    Replaced(usize),
    Appended(usize),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ManualStore {
    records: Vec<Value>,
}

impl ManualStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads the collection at `path`.
    ///
    /// A missing file is an empty collection. So is an unreadable or
    /// malformed one, which is logged and then overwritten on save.
    pub fn load(path: &Path) -> Self {
        if !path.exists() {
            return Self::new();
        }

        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) => {
                log::warn!("Could not read {}: {e}; starting empty", path.display());
                return Self::new();
            }
        };

        Self::from_json(&content).unwrap_or_else(|| {
            log::warn!(
                "{} is not a JSON array of records; starting empty",
                path.display()
            );
            Self::new()
        })
    }

    /// Parses a JSON array of records. Returns `None` for anything else.
    pub fn from_json(content: &str) -> Option<Self> {
        match serde_json::from_str(content) {
            Ok(Value::Array(records)) => Some(Self { records }),
            _ => None,
        }
    }

    /// Replaces the record sharing the manual's id, or appends a new one.
    pub fn upsert(&mut self, manual: &ManualDocument) -> Result<Upsert, StoreError> {
        let value = serde_json::to_value(manual)?;

        let found = self
            .records
            .iter()
            .position(|record| record_id(record) == Some(manual.id.as_str()));

        Ok(match found {
            Some(index) => {
                self.records[index] = value;
                Upsert::Replaced(index)
            }
            None => {
                self.records.push(value);
                Upsert::Appended(self.records.len() - 1)
            }
        })
    }

    pub fn get(&self, id: &str) -> Option<&Value> {
        self.records
            .iter()
            .find(|record| record_id(record) == Some(id))
    }

    pub fn records(&self) -> &[Value] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Pretty JSON with four-space indentation; non-ASCII text is kept as is.
    pub fn to_json(&self) -> Result<String, StoreError> {
        let mut out = Vec::new();
        let formatter = PrettyFormatter::with_indent(b"    ");
        let mut serializer = Serializer::with_formatter(&mut out, formatter);
        self.records.serialize(&mut serializer)?;
        // serde_json only ever writes valid UTF-8.
        Ok(String::from_utf8_lossy(&out).into_owned())
    }

    /// Writes the collection, creating parent directories as needed.
    pub fn save(&self, path: &Path) -> Result<(), StoreError> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, self.to_json()?)?;
        Ok(())
    }
}

fn record_id(record: &Value) -> Option<&str> {
    record.get("id").and_then(Value::as_str)
}

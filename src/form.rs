use crate::error::{FilterError, Result};
use crate::source::{FieldSource, InputTypeResolver};
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::io::{self, Read};
use std::path::Path;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct FormSnapshot {
    #[serde(default)]
    pub fields: Vec<SnapshotField>,
    /// Input identifier to declared data type.
    #[serde(default)]
    pub inputs: HashMap<String, String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SnapshotField {
    pub name: String,
    #[serde(default)]
    pub value: String,
    #[serde(default)]
    pub inputs: Vec<String>,
}

impl FormSnapshot {
    pub fn from_yaml(content: &str) -> Result<Self> {
        serde_yaml::from_str(content).map_err(|e| FilterError::Snapshot(e.to_string()))
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| FilterError::Snapshot(format!("{}: {}", path.display(), e)))?;
        Self::from_yaml(&content)
    }

    pub fn from_stdin() -> Result<Self> {
        let mut content = String::new();
        io::stdin()
            .lock()
            .read_to_string(&mut content)
            .map_err(|e| FilterError::Snapshot(format!("stdin: {}", e)))?;
        Self::from_yaml(&content)
    }

    fn field(&self, name: &str) -> Option<&SnapshotField> {
        self.fields.iter().find(|f| f.name == name)
    }
}

impl FieldSource for FormSnapshot {
    fn field_count(&self) -> usize {
        self.fields.len()
    }

    fn field_name(&self, index: usize) -> Option<&str> {
        self.fields.get(index).map(|f| f.name.as_str())
    }

    fn field_value(&self, name: &str) -> Option<&str> {
        self.field(name).map(|f| f.value.as_str())
    }

    fn bound_inputs(&self, name: &str) -> Vec<&str> {
        self.field(name)
            .map(|f| f.inputs.iter().map(String::as_str).collect())
            .unwrap_or_default()
    }
}

impl InputTypeResolver for FormSnapshot {
    fn data_type(&self, input: &str) -> Option<&str> {
        self.inputs.get(input).map(String::as_str)
    }
}

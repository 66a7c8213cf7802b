use crate::cursor::CELL_START_INDEX;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

pub const DEFAULT_OPTIONS_NAME: &str = "docsync.options.json";

#[derive(Error, Debug)]
pub enum OptionsError {
    #[error("Failed to read options: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid options JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Unit text lengths are counted in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LengthUnit {
    /// UTF-16 code units, how the replay target numbers positions
    #[default]
    Utf16,
    /// Unicode scalar values
    Chars,
}

impl LengthUnit {
    pub fn measure(self, text: &str) -> usize {
        match self {
            LengthUnit::Utf16 => text.encode_utf16().count(),
            LengthUnit::Chars => text.chars().count(),
        }
    }
}

/// Options for request compilation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompileOptions {
    /// Body index the first request inserts at
    #[serde(default = "default_start_index")]
    pub start_index: usize,

    #[serde(default)]
    pub length_unit: LengthUnit,

    /// Also emit paragraph style updates
    #[serde(default)]
    pub paragraph_styles: bool,
}

fn default_start_index() -> usize {
    CELL_START_INDEX
}

impl Default for CompileOptions {
    fn default() -> Self {
        Self {
            start_index: default_start_index(),
            length_unit: LengthUnit::default(),
            paragraph_styles: false,
        }
    }
}

impl CompileOptions {
    pub fn from_json(json: &str) -> Result<Self, OptionsError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load options from a JSON file, falling back to defaults when absent
    pub fn load(path: &Path) -> Result<Self, OptionsError> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            Self::from_json(&content)
        } else {
            Ok(Self::default())
        }
    }

    pub fn with_start_index(mut self, start_index: usize) -> Self {
        self.start_index = start_index;
        self
    }
}

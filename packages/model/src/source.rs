use crate::document::Document;
use crate::result::ModelResult;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

/// Something that produces a document model to compile
///
/// Converting markup into a document (an import service, an export from a
/// document store) happens behind this trait; implementations hand back a
/// tree whose inline object references are already resolved.
pub trait DocumentSource {
    fn load(&self) -> ModelResult<Document>;
}

/// Reads a document previously fetched and saved as JSON
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl DocumentSource for JsonFileSource {
    fn load(&self) -> ModelResult<Document> {
        let file = File::open(&self.path)?;
        Document::from_reader(BufReader::new(file))
    }
}

/// In-memory source for testing
pub struct StaticSource {
    pub document: Document,
}

impl StaticSource {
    pub fn new(document: Document) -> Self {
        Self { document }
    }
}

impl DocumentSource for StaticSource {
    fn load(&self) -> ModelResult<Document> {
        Ok(self.document.clone())
    }
}

//! # Docsync Compiler
//!
//! Compiles a document model into a flat, ordered list of positional edit
//! requests that rebuild the document when replayed against an empty target.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │ model: document tree + inline object table  │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ compiler: walk elements in document order   │
//! │  - paragraphs → insertText / updateTextStyle│
//! │    / insertInlineImage                      │
//! │  - tables → insertTable, then each cell     │
//! │    compiled in its own coordinate space     │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ sink: replays {"requests": [...]} in order  │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## Coordinate spaces
//!
//! Every request carries an absolute index. The body is one space starting
//! at the configured start index; each table cell is its own space starting
//! at 1, addressed by the table's start index plus row and column. Text
//! advances the cursor by its length, an inline object by 1 and a whole
//! table by 1 in the space it was inserted into.
//!
//! Tables inside cells are rejected, unknown element kinds are skipped and
//! counted in [`CompileStats`].
//!
//! ## Usage
//!
//! ```rust,ignore
//! use docsync_compiler::{compile_document, CompileOptions};
//! use docsync_model::Document;
//!
//! let document = Document::from_json(&exported_json)?;
//! let compilation = compile_document(&document, &CompileOptions::default())?;
//! let body = compilation.into_batch().to_json()?;
//! ```

mod compiler;
mod cursor;
mod error;
mod options;
mod request;
mod sink;
mod sync;

pub use compiler::{compile_document, CompileStats, Compilation, RequestCompiler};
pub use cursor::{Cursor, CELL_START_INDEX, INLINE_OBJECT_UNITS, TABLE_UNITS};
pub use error::{CompileError, CompileResult};
pub use options::{CompileOptions, LengthUnit, OptionsError, DEFAULT_OPTIONS_NAME};
pub use request::{
    BatchUpdate, CellAddress, InsertInlineImageRequest, InsertTableRequest, InsertTextRequest,
    Location, Range, Request, UpdateParagraphStyleRequest, UpdateTextStyleRequest, ALL_FIELDS,
};
pub use sink::{RecordingSink, ReplaySink};
pub use sync::{sync, SyncError, SyncReport};

#[cfg(test)]
mod tests;

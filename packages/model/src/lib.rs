//! # Document Model
//!
//! Read-only tree of a rich document: paragraphs made of styled text runs
//! and inline objects, and tables whose cells each hold their own list of
//! block elements. Deserializes from the JSON representation a document
//! service returns, so an exported document can be compiled as-is.

pub mod document;
pub mod elements;
pub mod error;
pub mod result;
pub mod source;
pub mod style;

pub use document::*;
pub use elements::*;
pub use error::*;
pub use result::*;
pub use source::*;
pub use style::*;

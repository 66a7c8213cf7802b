//! Edit requests in the batch-update wire shape.
//!
//! Each request is serialized externally tagged with a camelCase key
//! (`{"insertText": {...}}`) so a list of them can be handed to the replay
//! side without further translation.

use docsync_model::{ParagraphStyle, TextStyle};
use serde::{Deserialize, Serialize};

/// Field mask that replaces every attribute present in the supplied style
pub const ALL_FIELDS: &str = "*";

/// Identifies the table cell a coordinate space belongs to
///
/// Serialized flattened into a location or range:
/// `{"tableStartLocation": {"index": 3}, "rowIndex": 0, "columnIndex": 1}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CellAddress {
    #[serde(rename = "tableStartLocation", with = "index_location")]
    pub table_start_index: usize,
    pub row_index: usize,
    pub column_index: usize,
}

impl CellAddress {
    pub fn new(table_start_index: usize, row_index: usize, column_index: usize) -> Self {
        Self {
            table_start_index,
            row_index,
            column_index,
        }
    }
}

mod index_location {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    #[derive(Serialize, Deserialize)]
    struct IndexLocation {
        index: usize,
    }

    pub fn serialize<S: Serializer>(index: &usize, serializer: S) -> Result<S::Ok, S::Error> {
        IndexLocation { index: *index }.serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<usize, D::Error> {
        Ok(IndexLocation::deserialize(deserializer)?.index)
    }
}

/// Insertion point, in the body or inside a cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    pub index: usize,
    #[serde(flatten)]
    pub cell: Option<CellAddress>,
}

impl Location {
    pub fn new(index: usize, cell: Option<CellAddress>) -> Self {
        Self { index, cell }
    }
}

/// Half-open range `[start_index, end_index)`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Range {
    pub start_index: usize,
    pub end_index: usize,
    #[serde(flatten)]
    pub cell: Option<CellAddress>,
}

impl Range {
    pub fn new(start_index: usize, end_index: usize, cell: Option<CellAddress>) -> Self {
        Self {
            start_index,
            end_index,
            cell,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InsertTextRequest {
    pub location: Location,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTextStyleRequest {
    pub range: Range,
    pub text_style: TextStyle,
    pub fields: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InsertInlineImageRequest {
    pub location: Location,
    pub uri: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InsertTableRequest {
    pub rows: usize,
    pub columns: usize,
    pub location: Location,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateParagraphStyleRequest {
    pub range: Range,
    pub paragraph_style: ParagraphStyle,
    pub fields: String,
}

/// One positional edit, replayed in order against the target document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Request {
    InsertText(InsertTextRequest),
    UpdateTextStyle(UpdateTextStyleRequest),
    InsertInlineImage(InsertInlineImageRequest),
    InsertTable(InsertTableRequest),
    UpdateParagraphStyle(UpdateParagraphStyleRequest),
}

impl Request {
    pub fn insert_text(location: Location, text: impl Into<String>) -> Self {
        Request::InsertText(InsertTextRequest {
            location,
            text: text.into(),
        })
    }

    /// Restyle `range` replacing every attribute present in `style`
    pub fn update_text_style(range: Range, style: TextStyle) -> Self {
        Request::UpdateTextStyle(UpdateTextStyleRequest {
            range,
            text_style: style,
            fields: ALL_FIELDS.to_string(),
        })
    }

    pub fn insert_inline_image(location: Location, uri: impl Into<String>) -> Self {
        Request::InsertInlineImage(InsertInlineImageRequest {
            location,
            uri: uri.into(),
        })
    }

    pub fn insert_table(location: Location, rows: usize, columns: usize) -> Self {
        Request::InsertTable(InsertTableRequest {
            rows,
            columns,
            location,
        })
    }

    pub fn update_paragraph_style(range: Range, style: ParagraphStyle) -> Self {
        let fields = style.field_mask();
        Request::UpdateParagraphStyle(UpdateParagraphStyleRequest {
            range,
            paragraph_style: style,
            fields,
        })
    }

    /// Wire name of the request kind
    pub fn kind(&self) -> &'static str {
        match self {
            Request::InsertText(_) => "insertText",
            Request::UpdateTextStyle(_) => "updateTextStyle",
            Request::InsertInlineImage(_) => "insertInlineImage",
            Request::InsertTable(_) => "insertTable",
            Request::UpdateParagraphStyle(_) => "updateParagraphStyle",
        }
    }

    /// Cell whose coordinate space this request addresses, `None` for the body
    pub fn cell(&self) -> Option<&CellAddress> {
        match self {
            Request::InsertText(r) => r.location.cell.as_ref(),
            Request::UpdateTextStyle(r) => r.range.cell.as_ref(),
            Request::InsertInlineImage(r) => r.location.cell.as_ref(),
            Request::InsertTable(r) => r.location.cell.as_ref(),
            Request::UpdateParagraphStyle(r) => r.range.cell.as_ref(),
        }
    }

    /// Insertion index, or the start of the styled range
    pub fn start_index(&self) -> usize {
        match self {
            Request::InsertText(r) => r.location.index,
            Request::UpdateTextStyle(r) => r.range.start_index,
            Request::InsertInlineImage(r) => r.location.index,
            Request::InsertTable(r) => r.location.index,
            Request::UpdateParagraphStyle(r) => r.range.start_index,
        }
    }

    pub fn is_insert(&self) -> bool {
        matches!(
            self,
            Request::InsertText(_) | Request::InsertInlineImage(_) | Request::InsertTable(_)
        )
    }
}

/// Body of one batch update: `{"requests": [...]}`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BatchUpdate {
    pub requests: Vec<Request>,
}

impl BatchUpdate {
    pub fn new(requests: Vec<Request>) -> Self {
        Self { requests }
    }

    pub fn len(&self) -> usize {
        self.requests.len()
    }

    pub fn is_empty(&self) -> bool {
        self.requests.is_empty()
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

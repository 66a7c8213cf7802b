use crate::style::{ParagraphStyle, TextStyle};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Keys that carry positions in the source document rather than naming an
/// element kind.
const POSITION_KEYS: &[&str] = &["startIndex", "endIndex"];

/// Block level node of a document body or of a table cell
///
/// The JSON shape selects the variant by which key is present
/// (`{"paragraph": {...}}`, `{"table": {...}}`). Anything else (section
/// breaks, tables of contents, kinds added later) becomes `Unsupported`
/// with the key recorded so it can be reported.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawStructuralElement", into = "RawStructuralElement")]
pub enum StructuralElement {
    Paragraph(Paragraph),
    Table(Table),
    Unsupported { kind: String },
}

impl StructuralElement {
    pub fn unsupported(kind: impl Into<String>) -> Self {
        Self::Unsupported { kind: kind.into() }
    }

    pub fn kind(&self) -> &str {
        match self {
            StructuralElement::Paragraph(_) => "paragraph",
            StructuralElement::Table(_) => "table",
            StructuralElement::Unsupported { kind } => kind,
        }
    }
}

impl From<Paragraph> for StructuralElement {
    fn from(paragraph: Paragraph) -> Self {
        StructuralElement::Paragraph(paragraph)
    }
}

impl From<Table> for StructuralElement {
    fn from(table: Table) -> Self {
        StructuralElement::Table(table)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawStructuralElement {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    paragraph: Option<Paragraph>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    table: Option<Table>,
    #[serde(flatten)]
    rest: Map<String, Value>,
}

impl From<RawStructuralElement> for StructuralElement {
    fn from(raw: RawStructuralElement) -> Self {
        if let Some(paragraph) = raw.paragraph {
            StructuralElement::Paragraph(paragraph)
        } else if let Some(table) = raw.table {
            StructuralElement::Table(table)
        } else {
            StructuralElement::Unsupported {
                kind: kind_of(&raw.rest),
            }
        }
    }
}

impl From<StructuralElement> for RawStructuralElement {
    fn from(element: StructuralElement) -> Self {
        match element {
            StructuralElement::Paragraph(paragraph) => Self {
                paragraph: Some(paragraph),
                ..Default::default()
            },
            StructuralElement::Table(table) => Self {
                table: Some(table),
                ..Default::default()
            },
            StructuralElement::Unsupported { kind } => Self {
                rest: unsupported_body(kind),
                ..Default::default()
            },
        }
    }
}

/// A run of block content sharing one paragraph style
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Paragraph {
    #[serde(default)]
    pub elements: Vec<ParagraphElement>,
    #[serde(default, skip_serializing_if = "ParagraphStyle::is_empty")]
    pub paragraph_style: ParagraphStyle,
}

impl Paragraph {
    pub fn new(elements: Vec<ParagraphElement>) -> Self {
        Self {
            elements,
            paragraph_style: ParagraphStyle::default(),
        }
    }

    /// Paragraph made of a single unstyled text run
    pub fn text(content: impl Into<String>) -> Self {
        Self::new(vec![ParagraphElement::text(content)])
    }

    /// Paragraph made of a single text run carrying `style`
    pub fn styled(content: impl Into<String>, style: TextStyle) -> Self {
        Self::new(vec![ParagraphElement::styled(content, style)])
    }

    pub fn with_style(mut self, style: ParagraphStyle) -> Self {
        self.paragraph_style = style;
        self
    }
}

/// Inline node inside a paragraph
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawParagraphElement", into = "RawParagraphElement")]
pub enum ParagraphElement {
    TextRun(TextRun),
    InlineObject(InlineObjectElement),
    Unsupported { kind: String },
}

impl ParagraphElement {
    pub fn text(content: impl Into<String>) -> Self {
        ParagraphElement::TextRun(TextRun::new(content))
    }

    pub fn styled(content: impl Into<String>, style: TextStyle) -> Self {
        ParagraphElement::TextRun(TextRun::new(content).with_style(style))
    }

    pub fn inline_object(object_id: impl Into<String>) -> Self {
        ParagraphElement::InlineObject(InlineObjectElement {
            inline_object_id: object_id.into(),
        })
    }

    pub fn unsupported(kind: impl Into<String>) -> Self {
        ParagraphElement::Unsupported { kind: kind.into() }
    }

    pub fn kind(&self) -> &str {
        match self {
            ParagraphElement::TextRun(_) => "textRun",
            ParagraphElement::InlineObject(_) => "inlineObjectElement",
            ParagraphElement::Unsupported { kind } => kind,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawParagraphElement {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    text_run: Option<TextRun>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    inline_object_element: Option<InlineObjectElement>,
    #[serde(flatten)]
    rest: Map<String, Value>,
}

impl From<RawParagraphElement> for ParagraphElement {
    fn from(raw: RawParagraphElement) -> Self {
        if let Some(run) = raw.text_run {
            ParagraphElement::TextRun(run)
        } else if let Some(object) = raw.inline_object_element {
            ParagraphElement::InlineObject(object)
        } else {
            ParagraphElement::Unsupported {
                kind: kind_of(&raw.rest),
            }
        }
    }
}

impl From<ParagraphElement> for RawParagraphElement {
    fn from(element: ParagraphElement) -> Self {
        match element {
            ParagraphElement::TextRun(run) => Self {
                text_run: Some(run),
                ..Default::default()
            },
            ParagraphElement::InlineObject(object) => Self {
                inline_object_element: Some(object),
                ..Default::default()
            },
            ParagraphElement::Unsupported { kind } => Self {
                rest: unsupported_body(kind),
                ..Default::default()
            },
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextRun {
    #[serde(default)]
    pub content: String,
    #[serde(default, skip_serializing_if = "TextStyle::is_empty")]
    pub text_style: TextStyle,
}

impl TextRun {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            text_style: TextStyle::default(),
        }
    }

    pub fn with_style(mut self, style: TextStyle) -> Self {
        self.text_style = style;
        self
    }
}

/// Reference to an entry of `Document::inline_objects`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InlineObjectElement {
    pub inline_object_id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Table {
    #[serde(rename = "rows")]
    pub row_count: usize,
    #[serde(rename = "columns")]
    pub column_count: usize,
    #[serde(rename = "tableRows", default)]
    pub rows: Vec<TableRow>,
}

impl Table {
    /// Build a table from its rows; the declared size is taken from the grid
    pub fn new(rows: Vec<TableRow>) -> Self {
        let column_count = rows.first().map(|row| row.cells.len()).unwrap_or(0);
        Self {
            row_count: rows.len(),
            column_count,
            rows,
        }
    }

    pub fn cell(&self, row: usize, column: usize) -> Option<&TableCell> {
        self.rows.get(row).and_then(|r| r.cells.get(column))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TableRow {
    #[serde(rename = "tableCells", default)]
    pub cells: Vec<TableCell>,
}

impl TableRow {
    pub fn new(cells: Vec<TableCell>) -> Self {
        Self { cells }
    }
}

/// A table cell holds its own little document
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TableCell {
    #[serde(default)]
    pub content: Vec<StructuralElement>,
}

impl TableCell {
    pub fn new(content: Vec<StructuralElement>) -> Self {
        Self { content }
    }

    /// Cell holding one unstyled paragraph
    pub fn text(content: impl Into<String>) -> Self {
        Self::new(vec![Paragraph::text(content).into()])
    }
}

fn kind_of(rest: &Map<String, Value>) -> String {
    rest.keys()
        .find(|key| !POSITION_KEYS.contains(&key.as_str()))
        .cloned()
        .unwrap_or_else(|| "unknown".to_string())
}

fn unsupported_body(kind: String) -> Map<String, Value> {
    let mut rest = Map::new();
    rest.insert(kind, Value::Object(Map::new()));
    rest
}

use crate::*;
use docsync_model::{
    Document, InlineObject, Paragraph, ParagraphElement, ParagraphStyle, StructuralElement, Table,
    TableCell, TableRow, TextStyle,
};
use serde_json::json;

fn compile(document: &Document) -> Compilation {
    compile_document(document, &CompileOptions::default()).expect("Failed to compile")
}

fn texts(requests: &[Request]) -> Vec<&str> {
    requests
        .iter()
        .filter_map(|request| match request {
            Request::InsertText(insert) => Some(insert.text.as_str()),
            _ => None,
        })
        .collect()
}

fn grid(cells: &[&[&str]]) -> Table {
    Table::new(
        cells
            .iter()
            .map(|row| TableRow::new(row.iter().map(|text| TableCell::text(*text)).collect()))
            .collect(),
    )
}

#[test]
fn test_paragraph_then_table_scenario() {
    let document = Document::new(vec![
        Paragraph::styled("Hi", TextStyle::bold()).into(),
        grid(&[&["X"]]).into(),
    ]);

    let compilation = compile(&document);

    assert_eq!(
        serde_json::to_value(&compilation.requests).unwrap(),
        json!([
            { "insertText": { "location": { "index": 1 }, "text": "Hi" } },
            {
                "updateTextStyle": {
                    "range": { "startIndex": 1, "endIndex": 3 },
                    "textStyle": { "bold": true },
                    "fields": "*"
                }
            },
            { "insertTable": { "rows": 1, "columns": 1, "location": { "index": 3 } } },
            {
                "insertText": {
                    "location": {
                        "index": 1,
                        "tableStartLocation": { "index": 3 },
                        "rowIndex": 0,
                        "columnIndex": 0
                    },
                    "text": "X"
                }
            }
        ])
    );
    assert_eq!(compilation.end_index, 4);
}

#[test]
fn test_cells_emitted_row_major() {
    let document = Document::new(vec![grid(&[&["a", "b"], &["c", "d"]]).into()]);

    let compilation = compile(&document);

    assert_eq!(texts(&compilation.requests), vec!["a", "b", "c", "d"]);

    let addresses: Vec<(usize, usize)> = compilation.requests[1..]
        .iter()
        .map(|request| {
            let cell = request.cell().expect("Cell request without address");
            assert_eq!(cell.table_start_index, 1);
            (cell.row_index, cell.column_index)
        })
        .collect();
    assert_eq!(addresses, vec![(0, 0), (0, 1), (1, 0), (1, 1)]);
}

#[test]
fn test_nested_table_rejected() {
    let inner = grid(&[&["inner"]]);
    let outer = Table::new(vec![TableRow::new(vec![
        TableCell::text("ok"),
        TableCell::new(vec![inner.into()]),
    ])]);
    let document = Document::new(vec![Paragraph::text("before").into(), outer.into()]);

    let err = compile_document(&document, &CompileOptions::default()).unwrap_err();

    assert_eq!(
        err,
        CompileError::NestedTable {
            table_start_index: 7,
            row_index: 0,
            column_index: 1,
        }
    );
}

#[test]
fn test_table_in_cell_location_rejected() {
    let options = CompileOptions::default();
    let objects = Default::default();
    let compiler = RequestCompiler::new(&objects, &options);
    let address = CellAddress::new(5, 2, 3);

    let err = compiler
        .compile(&[grid(&[&["x"]]).into()], Some(address), 1)
        .unwrap_err();

    assert_eq!(
        err,
        CompileError::NestedTable {
            table_start_index: 5,
            row_index: 2,
            column_index: 3,
        }
    );
}

#[test]
fn test_unknown_element_between_paragraphs() {
    let document = Document::new(vec![
        Paragraph::text("ab").into(),
        StructuralElement::unsupported("sectionBreak"),
        Paragraph::text("cd").into(),
    ]);

    let compilation = compile(&document);

    assert_eq!(
        compilation.requests,
        vec![
            Request::insert_text(Location::new(1, None), "ab"),
            Request::insert_text(Location::new(3, None), "cd"),
        ]
    );
    assert_eq!(compilation.end_index, 5);
    assert_eq!(compilation.stats.skipped_elements, 1);
}

#[test]
fn test_unknown_paragraph_element_skipped() {
    let document = Document::new(vec![Paragraph::new(vec![
        ParagraphElement::text("a"),
        ParagraphElement::unsupported("pageBreak"),
        ParagraphElement::text("b"),
    ])
    .into()]);

    let compilation = compile(&document);

    assert_eq!(compilation.requests[1].start_index(), 2);
    assert_eq!(compilation.end_index, 3);
    assert_eq!(compilation.stats.skipped_inline, 1);
    assert_eq!(compilation.stats.skipped(), 1);
}

#[test]
fn test_paragraph_length_accounting() {
    let document = Document::new(vec![Paragraph::new(vec![
        ParagraphElement::text("abc"),
        ParagraphElement::inline_object("img1"),
        ParagraphElement::styled("de", TextStyle::new().with("italic", true)),
        ParagraphElement::inline_object("img2"),
    ])
    .into()])
    .with_inline_object("img1", InlineObject::image("https://example.com/1.png"))
    .with_inline_object("img2", InlineObject::image("https://example.com/2.png"));

    let options = CompileOptions::default().with_start_index(10);
    let compilation = compile_document(&document, &options).unwrap();

    assert_eq!(compilation.end_index, 10 + 3 + 2 + 2);

    let starts: Vec<(&str, usize)> = compilation
        .requests
        .iter()
        .map(|request| (request.kind(), request.start_index()))
        .collect();
    assert_eq!(
        starts,
        vec![
            ("insertText", 10),
            ("insertInlineImage", 13),
            ("insertText", 14),
            ("updateTextStyle", 14),
            ("insertInlineImage", 16),
        ]
    );
    assert_eq!(compilation.stats.inline_images, 2);
    assert_eq!(compilation.stats.text_runs, 2);
}

#[test]
fn test_table_costs_one_unit() {
    let long_cell = TableCell::new(vec![
        Paragraph::text("a fairly long first paragraph\n").into(),
        Paragraph::text("and another one\n").into(),
    ]);
    let table = Table::new(vec![
        TableRow::new(vec![long_cell.clone(), TableCell::text("x")]),
        TableRow::new(vec![TableCell::text("y"), long_cell]),
    ]);
    let document = Document::new(vec![table.into(), Paragraph::text("after").into()]);

    let compilation = compile(&document);

    let last = compilation.requests.last().unwrap();
    assert_eq!(last, &Request::insert_text(Location::new(2, None), "after"));
    assert_eq!(compilation.end_index, 2 + 5);
    assert_eq!(compilation.stats.tables, 1);
    assert_eq!(compilation.stats.cells, 4);
}

#[test]
fn test_cells_start_at_one() {
    let document = Document::new(vec![
        Paragraph::text("lead\n").into(),
        grid(&[&["a much longer first cell", "b"]]).into(),
    ]);

    let compilation = compile(&document);

    let cell_starts: Vec<usize> = compilation
        .requests
        .iter()
        .filter(|request| request.cell().is_some())
        .map(Request::start_index)
        .collect();
    assert_eq!(cell_starts, vec![1, 1]);
    assert_eq!(compilation.end_index, 7);
}

#[test]
fn test_inline_image_in_cell_carries_address() {
    let cell = TableCell::new(vec![Paragraph::new(vec![
        ParagraphElement::text("pic: "),
        ParagraphElement::inline_object("img"),
    ])
    .into()]);
    let document = Document::new(vec![Table::new(vec![TableRow::new(vec![cell])]).into()])
        .with_inline_object("img", InlineObject::image("https://example.com/pic.png"));

    let compilation = compile(&document);

    assert_eq!(
        compilation.requests[2],
        Request::insert_inline_image(
            Location::new(6, Some(CellAddress::new(1, 0, 0))),
            "https://example.com/pic.png"
        )
    );
}

#[test]
fn test_missing_inline_object() {
    let document = Document::new(vec![Paragraph::new(vec![
        ParagraphElement::text("see "),
        ParagraphElement::inline_object("kix.gone"),
    ])
    .into()]);

    let err = compile_document(&document, &CompileOptions::default()).unwrap_err();

    assert_eq!(err, CompileError::missing_resource("kix.gone"));
    assert_eq!(err.to_string(), "Inline object 'kix.gone' not found");
}

#[test]
fn test_inline_object_without_uri() {
    let document = Document::new(vec![Paragraph::new(vec![ParagraphElement::inline_object(
        "drawing",
    )])
    .into()])
    .with_inline_object("drawing", InlineObject::default());

    let err = compile_document(&document, &CompileOptions::default()).unwrap_err();

    assert_eq!(err, CompileError::missing_content_uri("drawing"));
}

#[test]
fn test_table_smaller_than_declared() {
    let mut table = grid(&[&["a", "b"]]);
    table.row_count = 2;
    let document = Document::new(vec![table.into()]);

    let err = compile_document(&document, &CompileOptions::default()).unwrap_err();

    assert_eq!(
        err,
        CompileError::MissingCell {
            table_start_index: 1,
            row_index: 1,
            column_index: 0,
        }
    );
}

#[test]
fn test_unstyled_run_has_no_style_request() {
    let document = Document::new(vec![Paragraph::text("plain").into()]);

    let compilation = compile(&document);

    assert_eq!(compilation.requests.len(), 1);
    assert_eq!(compilation.requests[0].kind(), "insertText");
}

#[test]
fn test_style_passed_through_with_all_fields() {
    let style = TextStyle::new()
        .with("bold", true)
        .with("fontSize", json!({ "magnitude": 14, "unit": "PT" }))
        .with("link", json!({ "url": "https://example.com" }));
    let document = Document::new(vec![Paragraph::styled("link", style.clone()).into()]);

    let compilation = compile(&document);

    let Request::UpdateTextStyle(update) = &compilation.requests[1] else {
        panic!("Expected style update, got {:?}", compilation.requests[1]);
    };
    assert_eq!(update.text_style, style);
    assert_eq!(update.fields, ALL_FIELDS);
    assert_eq!(update.range, Range::new(1, 5, None));
}

#[test]
fn test_text_measured_in_utf16_units() {
    let document = Document::new(vec![
        Paragraph::styled("😀x", TextStyle::bold()).into(),
        Paragraph::text("y").into(),
    ]);

    let compilation = compile(&document);

    assert_eq!(compilation.requests[1].start_index(), 1);
    let Request::UpdateTextStyle(update) = &compilation.requests[1] else {
        panic!("Expected style update");
    };
    assert_eq!(update.range.end_index, 4);
    assert_eq!(compilation.requests[2].start_index(), 4);
}

#[test]
fn test_text_measured_in_chars() {
    let document = Document::new(vec![Paragraph::text("😀x").into(), Paragraph::text("y").into()]);
    let options = CompileOptions {
        length_unit: LengthUnit::Chars,
        ..Default::default()
    };

    let compilation = compile_document(&document, &options).unwrap();

    assert_eq!(compilation.requests[1].start_index(), 3);
    assert_eq!(compilation.end_index, 4);
}

#[test]
fn test_paragraph_styles_off_by_default() {
    let document = Document::new(vec![
        Paragraph::text("Title\n").with_style(ParagraphStyle::named("HEADING_1")).into(),
    ]);

    let compilation = compile(&document);

    assert_eq!(compilation.requests.len(), 1);
}

#[test]
fn test_paragraph_styles_follow_content() {
    let document = Document::new(vec![
        Paragraph::text("Title\n").with_style(ParagraphStyle::named("HEADING_1")).into(),
        Paragraph::new(vec![]).with_style(ParagraphStyle::named("HEADING_2")).into(),
        grid(&[&["cell\n"]]).into(),
    ]);
    let options = CompileOptions {
        paragraph_styles: true,
        ..Default::default()
    };

    let compilation = compile_document(&document, &options).unwrap();

    assert_eq!(
        serde_json::to_value(&compilation.requests[1]).unwrap(),
        json!({
            "updateParagraphStyle": {
                "range": { "startIndex": 1, "endIndex": 7 },
                "paragraphStyle": { "namedStyleType": "HEADING_1" },
                "fields": "namedStyleType"
            }
        })
    );
    // The empty HEADING_2 paragraph covers no range and emits nothing
    assert_eq!(compilation.requests[2].kind(), "insertTable");
    assert_eq!(compilation.requests.len(), 4);
}

#[test]
fn test_stats_include_cell_content() {
    let table = Table::new(vec![TableRow::new(vec![
        TableCell::new(vec![
            Paragraph::text("a").into(),
            StructuralElement::unsupported("tableOfContents"),
        ]),
        TableCell::new(vec![Paragraph::new(vec![
            ParagraphElement::text("b"),
            ParagraphElement::unsupported("horizontalRule"),
        ])
        .into()]),
    ])]);
    let document = Document::new(vec![StructuralElement::unsupported("sectionBreak"), table.into()]);

    let stats = compile(&document).stats;

    assert_eq!(
        stats,
        CompileStats {
            text_runs: 2,
            inline_images: 0,
            tables: 1,
            cells: 2,
            skipped_elements: 2,
            skipped_inline: 1,
        }
    );
}

#[test]
fn test_empty_document() {
    let compilation = compile(&Document::default());

    assert!(compilation.requests.is_empty());
    assert_eq!(compilation.end_index, 1);
    assert!(compilation.into_batch().is_empty());
}

#[test]
fn test_batch_envelope() {
    let document = Document::new(vec![Paragraph::text("Hi").into()]);

    let json = compile(&document).into_batch().to_json().unwrap();

    assert_eq!(
        json,
        r#"{"requests":[{"insertText":{"location":{"index":1},"text":"Hi"}}]}"#
    );
}

use crate::cursor::{Cursor, INLINE_OBJECT_UNITS, TABLE_UNITS};
use crate::error::{CompileError, CompileResult};
use crate::options::CompileOptions;
use crate::request::{BatchUpdate, CellAddress, Request};
use docsync_model::{
    Document, InlineObject, InlineObjectElement, Paragraph, ParagraphElement, StructuralElement,
    Table, TextRun,
};
use std::collections::BTreeMap;
use tracing::{debug, info, instrument, trace, warn};

/// Counters collected while compiling, including everything that was skipped
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CompileStats {
    pub text_runs: usize,
    pub inline_images: usize,
    pub tables: usize,
    pub cells: usize,
    /// Block elements of a kind the compiler does not handle
    pub skipped_elements: usize,
    /// Paragraph elements of a kind the compiler does not handle
    pub skipped_inline: usize,
}

impl CompileStats {
    pub fn skipped(&self) -> usize {
        self.skipped_elements + self.skipped_inline
    }

    fn absorb(&mut self, other: &CompileStats) {
        self.text_runs += other.text_runs;
        self.inline_images += other.inline_images;
        self.tables += other.tables;
        self.cells += other.cells;
        self.skipped_elements += other.skipped_elements;
        self.skipped_inline += other.skipped_inline;
    }
}

/// Requests for one element list, in the order they must be replayed
#[derive(Debug, Clone, PartialEq)]
pub struct Compilation {
    pub requests: Vec<Request>,
    /// Cursor position after the last element, in the space that was compiled
    pub end_index: usize,
    pub stats: CompileStats,
}

impl Compilation {
    pub fn into_batch(self) -> BatchUpdate {
        BatchUpdate::new(self.requests)
    }
}

/// What a single element contributed
enum Emission<'e> {
    Emitted(usize),
    Skipped(&'e str),
}

/// State for one coordinate space
struct Context {
    cursor: Cursor,
    requests: Vec<Request>,
    stats: CompileStats,
}

impl Context {
    fn new(cursor: Cursor) -> Self {
        Self {
            cursor,
            requests: Vec::new(),
            stats: CompileStats::default(),
        }
    }

    fn push(&mut self, request: Request) {
        self.requests.push(request);
    }

    fn finish(self) -> Compilation {
        Compilation {
            requests: self.requests,
            end_index: self.cursor.index(),
            stats: self.stats,
        }
    }
}

/// Turns element lists into positional edit requests
///
/// Holds only borrowed, read-only inputs; every `compile` call builds its
/// own cursor, so one compiler can serve any number of calls.
pub struct RequestCompiler<'a> {
    inline_objects: &'a BTreeMap<String, InlineObject>,
    options: &'a CompileOptions,
}

impl<'a> RequestCompiler<'a> {
    pub fn new(
        inline_objects: &'a BTreeMap<String, InlineObject>,
        options: &'a CompileOptions,
    ) -> Self {
        Self {
            inline_objects,
            options,
        }
    }

    pub fn for_document(document: &'a Document, options: &'a CompileOptions) -> Self {
        Self::new(&document.inline_objects, options)
    }

    /// Compile `elements` into the coordinate space `location` (the body when
    /// `None`), inserting from `start_index`.
    pub fn compile(
        &self,
        elements: &[StructuralElement],
        location: Option<CellAddress>,
        start_index: usize,
    ) -> CompileResult<Compilation> {
        self.compile_with(elements, Cursor::new(start_index, location))
    }

    #[instrument(
        level = "debug",
        skip_all,
        fields(start_index = cursor.index(), nested = cursor.is_nested(), elements = elements.len())
    )]
    fn compile_with(
        &self,
        elements: &[StructuralElement],
        cursor: Cursor,
    ) -> CompileResult<Compilation> {
        let mut ctx = Context::new(cursor);

        for element in elements {
            match self.emit_element(element, &mut ctx)? {
                Emission::Emitted(count) => {
                    trace!(kind = element.kind(), count, "Emitted element");
                }
                Emission::Skipped(kind) => {
                    debug!(kind = %kind, index = ctx.cursor.index(), "Skipping unsupported element");
                    ctx.stats.skipped_elements += 1;
                }
            }
        }

        Ok(ctx.finish())
    }

    fn emit_element<'e>(
        &self,
        element: &'e StructuralElement,
        ctx: &mut Context,
    ) -> CompileResult<Emission<'e>> {
        match element {
            StructuralElement::Paragraph(paragraph) => self.emit_paragraph(paragraph, ctx),
            StructuralElement::Table(table) => self.emit_table(table, ctx),
            StructuralElement::Unsupported { kind } => Ok(Emission::Skipped(kind)),
        }
    }

    fn emit_paragraph<'e>(
        &self,
        paragraph: &'e Paragraph,
        ctx: &mut Context,
    ) -> CompileResult<Emission<'e>> {
        let start = ctx.cursor.index();
        let emitted_before = ctx.requests.len();

        for element in &paragraph.elements {
            match element {
                ParagraphElement::TextRun(run) => self.emit_text_run(run, ctx),
                ParagraphElement::InlineObject(object) => self.emit_inline_object(object, ctx)?,
                ParagraphElement::Unsupported { kind } => {
                    debug!(kind = %kind, index = ctx.cursor.index(), "Skipping unsupported paragraph element");
                    ctx.stats.skipped_inline += 1;
                }
            }
        }

        let style = &paragraph.paragraph_style;
        if self.options.paragraph_styles && !style.is_empty() && ctx.cursor.index() > start {
            let range = ctx.cursor.range_from(start);
            ctx.push(Request::update_paragraph_style(range, style.clone()));
        }

        Ok(Emission::Emitted(ctx.requests.len() - emitted_before))
    }

    fn emit_text_run(&self, run: &TextRun, ctx: &mut Context) {
        let length = self.options.length_unit.measure(&run.content);

        ctx.push(Request::insert_text(ctx.cursor.here(), run.content.as_str()));
        if !run.text_style.is_empty() {
            // Must follow the insert: the range only exists once the text does
            let range = ctx.cursor.span(length);
            ctx.push(Request::update_text_style(range, run.text_style.clone()));
        }

        ctx.cursor.advance(length);
        ctx.stats.text_runs += 1;
    }

    fn emit_inline_object(
        &self,
        element: &InlineObjectElement,
        ctx: &mut Context,
    ) -> CompileResult<()> {
        let object_id = element.inline_object_id.as_str();
        let object = self
            .inline_objects
            .get(object_id)
            .ok_or_else(|| CompileError::missing_resource(object_id))?;
        let uri = object
            .content_uri()
            .ok_or_else(|| CompileError::missing_content_uri(object_id))?;

        ctx.push(Request::insert_inline_image(ctx.cursor.here(), uri));
        ctx.cursor.advance(INLINE_OBJECT_UNITS);
        ctx.stats.inline_images += 1;

        Ok(())
    }

    fn emit_table<'e>(&self, table: &'e Table, ctx: &mut Context) -> CompileResult<Emission<'e>> {
        if let Some(enclosing) = ctx.cursor.location() {
            return Err(CompileError::NestedTable {
                table_start_index: enclosing.table_start_index,
                row_index: enclosing.row_index,
                column_index: enclosing.column_index,
            });
        }

        let emitted_before = ctx.requests.len();
        let table_start = ctx.cursor.index();
        debug!(
            index = table_start,
            rows = table.row_count,
            columns = table.column_count,
            "Emitting table"
        );

        ctx.push(Request::insert_table(
            ctx.cursor.here(),
            table.row_count,
            table.column_count,
        ));

        // Row-major: every cell of row 0, then row 1, ...
        for row_index in 0..table.row_count {
            for column_index in 0..table.column_count {
                let cell = table
                    .cell(row_index, column_index)
                    .ok_or(CompileError::MissingCell {
                        table_start_index: table_start,
                        row_index,
                        column_index,
                    })?;

                let address = ctx.cursor.cell_address(row_index, column_index);
                let compiled = self.compile_with(&cell.content, ctx.cursor.with_location(address))?;

                ctx.requests.extend(compiled.requests);
                ctx.stats.absorb(&compiled.stats);
                ctx.stats.cells += 1;
            }
        }

        ctx.cursor.advance(TABLE_UNITS);
        ctx.stats.tables += 1;

        Ok(Emission::Emitted(ctx.requests.len() - emitted_before))
    }
}

/// Compile a whole document body into replayable requests
#[instrument(skip_all, fields(document_id = document.document_id.as_deref().unwrap_or_default()))]
pub fn compile_document(
    document: &Document,
    options: &CompileOptions,
) -> CompileResult<Compilation> {
    let compilation = RequestCompiler::for_document(document, options).compile(
        document.content(),
        None,
        options.start_index,
    )?;

    let stats = &compilation.stats;
    if stats.skipped() > 0 {
        warn!(
            skipped_elements = stats.skipped_elements,
            skipped_inline = stats.skipped_inline,
            "Skipped unsupported elements"
        );
    }

    info!(
        requests = compilation.requests.len(),
        end_index = compilation.end_index,
        tables = stats.tables,
        "Compiled document"
    );

    Ok(compilation)
}

//! Word document writer backed by docx-rs.

use std::fs;
use std::path::Path;

use docx_rs::{
    read_docx, Docx, Paragraph, Run, RunFonts, Style, StyleType, Table, TableCell, TableRow,
};

use super::{DocumentError, DocumentWriter};

/// Style id for section heading paragraphs (14pt Times New Roman).
pub const SECTION_STYLE_ID: &str = "SchemaSection";

/// Style id applied to every emitted table (12pt).
pub const TABLE_STYLE_ID: &str = "SchemaTable";

// Font sizes are half-points in OOXML.
const SECTION_FONT_SIZE: usize = 28;
const TABLE_FONT_SIZE: usize = 24;
const SECTION_FONT_NAME: &str = "Times New Roman";

/// Buffers rendered content and builds the `.docx` on [`DocxWriter::finish`].
///
/// Rows are collected per table so a table's full shape is known before it is
/// added to the document.
pub struct DocxWriter {
    base: Docx,
    blocks: Vec<Block>,
    pending: Option<PendingTable>,
}

enum Block {
    Heading(String),
    Table(PendingTable),
}

struct PendingTable {
    columns: usize,
    rows: Vec<Vec<String>>,
}

impl DocxWriter {
    /// Start a fresh document.
    pub fn create() -> Self {
        Self {
            base: Docx::new(),
            blocks: Vec::new(),
            pending: None,
        }
    }

    /// Load an existing document so new sections are appended after its
    /// current content.
    pub fn open(path: &Path) -> Result<Self, DocumentError> {
        let buf = fs::read(path)?;
        let base = read_docx(&buf)?;

        Ok(Self {
            base,
            blocks: Vec::new(),
            pending: None,
        })
    }

    fn flush_pending(&mut self) {
        if let Some(table) = self.pending.take() {
            self.blocks.push(Block::Table(table));
        }
    }

    /// Build the document and persist it to `path`.
    pub fn finish(mut self, path: &Path) -> Result<(), DocumentError> {
        self.flush_pending();

        let mut docx = self
            .base
            .add_style(
                Style::new(SECTION_STYLE_ID, StyleType::Paragraph)
                    .name("Schema Section")
                    .size(SECTION_FONT_SIZE)
                    .fonts(RunFonts::new().ascii(SECTION_FONT_NAME)),
            )
            .add_style(
                Style::new(TABLE_STYLE_ID, StyleType::Table)
                    .name("Schema Table")
                    .size(TABLE_FONT_SIZE),
            );

        for block in self.blocks {
            docx = match block {
                Block::Heading(text) => docx.add_paragraph(
                    Paragraph::new()
                        .add_run(Run::new().add_text(text))
                        .style(SECTION_STYLE_ID),
                ),
                Block::Table(pending) => docx.add_table(build_table(pending)),
            };
        }

        let file = fs::File::create(path)?;
        docx.build().pack(file)?;
        Ok(())
    }
}

impl DocumentWriter for DocxWriter {
    fn append_section_heading(&mut self, text: &str) {
        self.flush_pending();
        self.blocks.push(Block::Heading(text.to_string()));
    }

    fn begin_table(&mut self, columns: usize) {
        self.flush_pending();
        self.pending = Some(PendingTable {
            columns,
            rows: Vec::new(),
        });
    }

    fn append_row(&mut self, mut cells: Vec<String>) {
        if let Some(pending) = &mut self.pending {
            // every row carries the table's full shape
            cells.resize(pending.columns, String::new());
            pending.rows.push(cells);
        }
    }
}

fn build_table(pending: PendingTable) -> Table {
    let rows = pending
        .rows
        .into_iter()
        .map(|cells| {
            TableRow::new(
                cells
                    .into_iter()
                    .map(|text| {
                        TableCell::new()
                            .add_paragraph(Paragraph::new().add_run(Run::new().add_text(text)))
                    })
                    .collect(),
            )
        })
        .collect();

    Table::new(rows).style(TABLE_STYLE_ID)
}

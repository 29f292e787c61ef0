//! Document output.
//!
//! [`DocumentWriter`] is the seam between the renderer and the Word file
//! format: the renderer appends headings and rows, the writer owns document
//! structure, styling, and persistence. [`DocxWriter`] is the production
//! implementation; tests record the calls instead.

mod conflict;
mod docx;

pub use conflict::{ensure_docx_extension, ConflictChoice};
pub use docx::DocxWriter;

/// Errors raised while reading or writing the output document.
#[derive(Debug, thiserror::Error)]
pub enum DocumentError {
    /// Failed to build or pack the document.
    #[error("failed to write document: {0}")]
    Write(#[from] docx_rs::DocxError),

    /// Failed to parse an existing document for append mode.
    #[error("failed to read existing document: {0}")]
    Read(#[from] docx_rs::ReaderError),

    /// Filesystem failure.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to pack the document archive.
    #[error("failed to pack document: {0}")]
    Pack(#[from] zip::result::ZipError),
}

/// Receives rendered document content.
///
/// Appends are infallible in-memory operations; persistence happens once, at
/// the end of the run, so no partial document is ever left on disk after an
/// error.
pub trait DocumentWriter {
    /// Append a section heading paragraph, styled distinctly from table
    /// cells.
    fn append_section_heading(&mut self, text: &str);

    /// Start a new table with the given column count. Subsequent rows belong
    /// to this table until the next heading or table begins.
    fn begin_table(&mut self, columns: usize);

    /// Append one row of cell texts to the current table.
    fn append_row(&mut self, cells: Vec<String>);
}

//! Rendering-decision logic.
//!
//! [`Layout`] resolves a [`RenderConfig`] into the concrete column layout
//! once per run; [`DocumentRenderer`] walks the schema model under that
//! layout and the locale catalog, emitting headings and rows to a
//! [`crate::document::DocumentWriter`].

mod plan;
mod renderer;

pub use plan::{Caption, CellRule, Layout};
pub use renderer::{key_label, DocumentRenderer};

use crate::locale::Language;

/// Rendering configuration, externally supplied and immutable per run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderConfig {
    /// Emit a caption row at the top of each table.
    pub include_headers: bool,
    /// Add a dedicated nullable column (4 columns instead of 3).
    pub include_nullable_column: bool,
    /// Render the nullable column as localized Yes/No instead of `+`/`-`.
    /// Only meaningful when `include_nullable_column` is set.
    pub nullable_natural: bool,
    /// Emit a section heading paragraph per table.
    pub include_sections: bool,
    /// Document language.
    pub language: Language,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            include_headers: false,
            include_nullable_column: false,
            nullable_natural: false,
            include_sections: false,
            language: Language::English,
        }
    }
}

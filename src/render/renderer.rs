//! Document renderer.
//!
//! Walks tables and columns under a [`Layout`] and the label catalog,
//! emitting an optional section heading, an optional caption row, and one
//! row per column to a [`DocumentWriter`].

use super::plan::{Caption, CellRule, Layout};
use super::RenderConfig;
use crate::document::DocumentWriter;
use crate::locale::Language;
use crate::schema::{Column, Table};

/// The auto-increment marker some catalogs append to type names. Kept in the
/// schema model, stripped from rendered cells.
const IDENTITY_MARKER: &str = "identity";

/// Emits the schema model into a document.
pub struct DocumentRenderer {
    config: RenderConfig,
    layout: Layout,
}

impl DocumentRenderer {
    /// Build a renderer for one configuration. The layout is resolved here,
    /// once, and reused for every table.
    pub fn new(config: RenderConfig) -> Self {
        let layout = Layout::resolve(&config);
        Self { config, layout }
    }

    /// The resolved layout.
    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    /// Render every table into `writer`.
    pub fn render<W: DocumentWriter + ?Sized>(&self, tables: &[Table], writer: &mut W) {
        for table in tables {
            self.render_table(table, writer);
        }
    }

    fn render_table<W: DocumentWriter + ?Sized>(&self, table: &Table, writer: &mut W) {
        if self.config.include_sections {
            writer.append_section_heading(&table.name);
        }

        writer.begin_table(self.layout.column_count);

        if let Some(captions) = &self.layout.header_captions {
            writer.append_row(
                captions
                    .iter()
                    .map(|caption| self.caption_text(*caption).to_string())
                    .collect(),
            );
        }

        for column in &table.columns {
            writer.append_row(self.data_row(column));
        }
    }

    /// Build the cell texts for one column's row.
    fn data_row(&self, column: &Column) -> Vec<String> {
        let labels = self.config.language.labels();

        let mut cells = Vec::with_capacity(self.layout.column_count);
        cells.push(column.name.clone());
        cells.push(column.display_type.replace(IDENTITY_MARKER, ""));

        for rule in &self.layout.cell_rules {
            cells.push(match rule {
                CellRule::NullableWord => {
                    (if column.is_nullable { labels.yes } else { labels.no }).to_string()
                }
                CellRule::NullableSign => {
                    (if column.is_nullable { "+" } else { "-" }).to_string()
                }
                CellRule::KeyLabel => key_label(
                    self.config.language,
                    column.is_primary_key,
                    column.is_foreign_key,
                ),
            });
        }

        cells
    }

    fn caption_text(&self, caption: Caption) -> &'static str {
        let labels = self.config.language.labels();
        match caption {
            Caption::Name => labels.header_name,
            Caption::DataType => labels.header_datatype,
            Caption::Nullable => labels.header_nullable,
            Caption::KeyType => labels.header_keytype,
        }
    }
}

/// The localized text describing a column's key membership.
///
/// A column with neither key renders as an empty string. A column with both
/// renders as `"{Primary}, {Foreign}"`, where the second term is lowercased
/// for the locales that demand it (see
/// [`Language::lowercases_second_key_term`]).
pub fn key_label(language: Language, is_primary: bool, is_foreign: bool) -> String {
    let labels = language.labels();

    match (is_primary, is_foreign) {
        (false, false) => String::new(),
        (true, false) => labels.primary.to_string(),
        (false, true) => labels.foreign.to_string(),
        (true, true) => {
            if language.lowercases_second_key_term() {
                format!("{}, {}", labels.primary, labels.foreign.to_lowercase())
            } else {
                format!("{}, {}", labels.primary, labels.foreign)
            }
        }
    }
}

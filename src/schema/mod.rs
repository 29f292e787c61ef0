//! Schema model construction.
//!
//! Turns raw catalog records into the ordered [`Table`]/[`Column`] model the
//! renderer consumes: canonical display types, nullability, and reconciled
//! primary/foreign key membership.

mod format;
mod introspect;
mod keys;

pub use format::format_type;
pub use introspect::{IntrospectError, SchemaIntrospector};
pub use keys::KeyIndex;

/// One table column, immutable once the introspector hands it out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    /// Column name, unique within its table.
    pub name: String,
    /// Canonical type representation, e.g. `varchar(50)` or `int identity`.
    ///
    /// A pure function of (type name, size, decimal digits); the `identity`
    /// marker is kept here and only stripped at render time.
    pub display_type: String,
    /// Whether the column accepts NULL.
    pub is_nullable: bool,
    /// Whether the column is part of the table's primary key.
    pub is_primary_key: bool,
    /// Whether the column participates in a foreign key. Independent of
    /// `is_primary_key`; a column may be both.
    pub is_foreign_key: bool,
}

/// A table with its columns in catalog enumeration order, never re-sorted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    /// Table name.
    pub name: String,
    /// Columns in catalog order.
    pub columns: Vec<Column>,
}

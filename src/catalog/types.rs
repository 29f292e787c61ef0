//! Raw catalog record types.

/// One column descriptor as reported by the database catalog.
///
/// This is the wire-level view of a column, before type canonicalization and
/// key reconciliation produce a [`crate::schema::Column`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnDescriptor {
    /// Column name.
    pub name: String,
    /// Database type name, e.g. `varchar` or `int identity`.
    pub type_name: String,
    /// Size qualifier (character length, or precision for numerics).
    pub column_size: Option<i32>,
    /// Scale for decimal types.
    pub decimal_digits: Option<i32>,
    /// Catalog nullability flag. Exactly `"YES"` means nullable.
    pub nullable: String,
}

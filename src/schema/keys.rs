//! Primary/foreign key membership for one table.

use std::collections::HashSet;

use crate::catalog::{Catalog, CatalogError};

/// Membership test over a table's primary-key and foreign-key column lists.
///
/// A column may satisfy both tests. Names appearing in neither list are the
/// common case, and duplicate names within one list have no effect.
#[derive(Debug, Clone, Default)]
pub struct KeyIndex {
    primary: HashSet<String>,
    foreign: HashSet<String>,
}

impl KeyIndex {
    /// Build an index from the two key column lists.
    pub fn new(
        primary: impl IntoIterator<Item = String>,
        foreign: impl IntoIterator<Item = String>,
    ) -> Self {
        Self {
            primary: primary.into_iter().collect(),
            foreign: foreign.into_iter().collect(),
        }
    }

    /// Fetch both key lists for `table` and build the index.
    pub async fn load<C: Catalog + ?Sized>(
        catalog: &C,
        table: &str,
    ) -> Result<Self, CatalogError> {
        let primary = catalog.list_primary_key_columns(table).await?;
        let foreign = catalog.list_foreign_key_columns(table).await?;
        Ok(Self::new(primary, foreign))
    }

    /// Whether `column` is part of the primary key.
    pub fn is_primary(&self, column: &str) -> bool {
        self.primary.contains(column)
    }

    /// Whether `column` participates in a foreign key.
    pub fn is_foreign(&self, column: &str) -> bool {
        self.foreign.contains(column)
    }
}

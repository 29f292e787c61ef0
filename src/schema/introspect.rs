//! Schema introspection.
//!
//! Produces the ordered [`Table`]/[`Column`] model from a [`Catalog`].
//! Catalog calls are strictly sequential: one table at a time, and within a
//! table, column enumeration completes before the key-membership queries
//! begin.

use super::format::format_type;
use super::keys::KeyIndex;
use super::{Column, Table};
use crate::catalog::{Catalog, CatalogError};

/// Errors raised during introspection.
#[derive(Debug, thiserror::Error)]
pub enum IntrospectError {
    /// A requested table does not exist. Carries the full list of valid
    /// table names.
    #[error("table '{table}' not found in database. Available tables: {}", .available.join(", "))]
    TableNotFound {
        /// The name that was requested.
        table: String,
        /// Every table the database knows, in catalog order.
        available: Vec<String>,
    },

    /// A catalog call failed; propagated unchanged, no retry.
    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

/// Builds the schema model by orchestrating catalog calls.
pub struct SchemaIntrospector<'a, C: Catalog + ?Sized> {
    catalog: &'a C,
}

impl<'a, C: Catalog + ?Sized> SchemaIntrospector<'a, C> {
    pub fn new(catalog: &'a C) -> Self {
        Self { catalog }
    }

    /// Introspect a single table.
    ///
    /// Fails with [`IntrospectError::TableNotFound`] if `table` is not among
    /// the database's known tables.
    pub async fn introspect(&self, table: &str) -> Result<Vec<Column>, IntrospectError> {
        let known = self.catalog.list_tables().await?;
        if !known.iter().any(|name| name == table) {
            return Err(IntrospectError::TableNotFound {
                table: table.to_string(),
                available: known,
            });
        }

        self.introspect_known(table).await
    }

    /// Introspect several tables, or every table the database knows.
    ///
    /// `requested` is a comma-separated list of table names; surrounding
    /// whitespace per entry is ignored. Every requested name must exist,
    /// otherwise the whole batch fails with [`IntrospectError::TableNotFound`]
    /// before any introspection is performed. When `requested` is `None`,
    /// all tables are introspected in the order the catalog reports them.
    pub async fn introspect_all(
        &self,
        requested: Option<&str>,
    ) -> Result<Vec<Table>, IntrospectError> {
        let known = self.catalog.list_tables().await?;

        let selected: Vec<String> = match requested {
            None => known.clone(),
            Some(list) => {
                let names: Vec<String> =
                    list.split(',').map(|name| name.trim().to_string()).collect();

                for name in &names {
                    if !known.iter().any(|known_name| known_name == name) {
                        return Err(IntrospectError::TableNotFound {
                            table: name.clone(),
                            available: known,
                        });
                    }
                }

                names
            }
        };

        let mut tables = Vec::with_capacity(selected.len());
        for name in selected {
            let columns = self.introspect_known(&name).await?;
            tracing::debug!(table = %name, columns = columns.len(), "introspected table");
            tables.push(Table { name, columns });
        }

        Ok(tables)
    }

    /// Introspect a table already known to exist.
    ///
    /// Two passes: columns are constructed first, then key membership is
    /// filled in. Key queries are keyed by table, not by column, and must not
    /// block column construction.
    async fn introspect_known(&self, table: &str) -> Result<Vec<Column>, IntrospectError> {
        let descriptors = self.catalog.list_columns(table).await?;

        let mut columns: Vec<Column> = descriptors
            .into_iter()
            .map(|descriptor| Column {
                name: descriptor.name,
                display_type: format_type(
                    &descriptor.type_name,
                    descriptor.column_size,
                    descriptor.decimal_digits,
                ),
                is_nullable: descriptor.nullable == "YES",
                is_primary_key: false,
                is_foreign_key: false,
            })
            .collect();

        let keys = KeyIndex::load(self.catalog, table).await?;
        for column in &mut columns {
            column.is_primary_key = keys.is_primary(&column.name);
            column.is_foreign_key = keys.is_foreign(&column.name);
        }

        Ok(columns)
    }
}

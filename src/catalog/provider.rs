//! Catalog trait definition.
//!
//! The trait abstracts over different ways of fetching schema metadata. The
//! production implementation queries SQL Server directly; tests implement it
//! in memory.
//!
//! All list results preserve the order the catalog reports. Key membership is
//! queried per table, not per column, which is why the column and key calls
//! are separate operations.

use async_trait::async_trait;

use super::error::CatalogError;
use super::types::ColumnDescriptor;

/// Result type for catalog operations.
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Trait for fetching schema metadata from a database.
#[async_trait]
pub trait Catalog: Send + Sync {
    /// List the names of every table known to the database, in catalog order.
    async fn list_tables(&self) -> CatalogResult<Vec<String>>;

    /// List the column descriptors of a table, in catalog enumeration order.
    async fn list_columns(&self, table: &str) -> CatalogResult<Vec<ColumnDescriptor>>;

    /// List the column names of the table's primary key, in key order.
    async fn list_primary_key_columns(&self, table: &str) -> CatalogResult<Vec<String>>;

    /// List the column names participating in any foreign key of the table.
    async fn list_foreign_key_columns(&self, table: &str) -> CatalogResult<Vec<String>>;
}

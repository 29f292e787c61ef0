//! # schemadoc
//!
//! Generates localized Word documentation for SQL Server database schemas.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │                 SQL Server catalog                       │
//! │   (INFORMATION_SCHEMA, sys.indexes, sys.foreign_keys)    │
//! └─────────────────────────────────────────────────────────┘
//!                          │
//!                          ▼ [catalog]
//! ┌─────────────────────────────────────────────────────────┐
//! │        Catalog trait (tables, columns, PK/FK lists)      │
//! └─────────────────────────────────────────────────────────┘
//!                          │
//!                          ▼ [schema]
//! ┌─────────────────────────────────────────────────────────┐
//! │      SchemaIntrospector → ordered Table/Column model     │
//! └─────────────────────────────────────────────────────────┘
//!                          │
//!                          ▼ [render + locale]
//! ┌─────────────────────────────────────────────────────────┐
//! │   DocumentRenderer (Layout + localized labels) → rows    │
//! └─────────────────────────────────────────────────────────┘
//!                          │
//!                          ▼ [document]
//! ┌─────────────────────────────────────────────────────────┐
//! │           DocumentWriter → .docx on disk                 │
//! └─────────────────────────────────────────────────────────┘
//! ```

pub mod catalog;
pub mod config;
pub mod document;
pub mod locale;
pub mod render;
pub mod schema;

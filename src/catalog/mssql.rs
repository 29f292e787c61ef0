//! SQL Server catalog implementation using tiberius.

use async_trait::async_trait;
use tiberius::{AuthMethod, Client, Config, EncryptionLevel, ToSql};
use tokio::net::TcpStream;
use tokio::sync::Mutex;
use tokio_util::compat::{Compat, TokioAsyncWriteCompatExt};

use super::error::CatalogError;
use super::provider::{Catalog, CatalogResult};
use super::types::ColumnDescriptor;
use crate::config::ConnectionConfig;

/// Catalog backed by a live SQL Server connection.
///
/// The tiberius client requires `&mut self` per query, so it sits behind an
/// async mutex; catalog calls are issued strictly sequentially anyway.
pub struct MssqlCatalog {
    client: Mutex<Client<Compat<TcpStream>>>,
}

impl MssqlCatalog {
    /// Open a connection to the server described by `config`.
    #[tracing::instrument(skip(config), fields(host = %config.host, database = %config.database))]
    pub async fn connect(config: &ConnectionConfig) -> Result<Self, CatalogError> {
        tracing::debug!("connecting to SQL Server at {}:{}", config.host, config.port);

        let mut tds = Config::new();
        tds.host(&config.host);
        tds.port(config.port);
        tds.database(&config.database);
        tds.encryption(EncryptionLevel::Required);

        if config.trust_cert {
            tds.trust_cert();
        }

        match (&config.username, &config.password) {
            (Some(user), Some(pass)) => {
                tds.authentication(AuthMethod::sql_server(user, pass));
            }
            (Some(user), None) => {
                tds.authentication(AuthMethod::sql_server(user, ""));
            }
            (None, _) => {
                return Err(CatalogError::AuthenticationFailed(
                    "no username configured (set --user or SCHEMADOC_DB_USER)".to_string(),
                ));
            }
        }

        let tcp = TcpStream::connect(tds.get_addr())
            .await
            .map_err(|e| CatalogError::ConnectionFailed(e.to_string()))?;
        tcp.set_nodelay(true)?;

        let client = Client::connect(tds, tcp.compat_write())
            .await
            .map_err(|e| CatalogError::ConnectionFailed(e.to_string()))?;

        tracing::debug!("connected");

        Ok(Self {
            client: Mutex::new(client),
        })
    }

    /// Run a query returning a single string column.
    async fn query_names(&self, sql: &str, params: &[&dyn ToSql]) -> CatalogResult<Vec<String>> {
        let mut client = self.client.lock().await;
        let rows = client.query(sql, params).await?.into_first_result().await?;

        Ok(rows
            .iter()
            .filter_map(|row| row.get::<&str, usize>(0).map(|s| s.to_string()))
            .collect())
    }
}

#[async_trait]
impl Catalog for MssqlCatalog {
    #[tracing::instrument(skip(self))]
    async fn list_tables(&self) -> CatalogResult<Vec<String>> {
        self.query_names("SELECT TABLE_NAME FROM INFORMATION_SCHEMA.TABLES", &[])
            .await
    }

    #[tracing::instrument(skip(self))]
    async fn list_columns(&self, table: &str) -> CatalogResult<Vec<ColumnDescriptor>> {
        // The ` identity` suffix reproduces what ODBC drivers report for
        // auto-increment columns; the renderer strips it from display text.
        let sql = "SELECT
                c.COLUMN_NAME,
                c.DATA_TYPE + CASE
                    WHEN COLUMNPROPERTY(
                        OBJECT_ID(QUOTENAME(c.TABLE_SCHEMA) + '.' + QUOTENAME(c.TABLE_NAME)),
                        c.COLUMN_NAME, 'IsIdentity') = 1
                    THEN ' identity' ELSE '' END AS type_name,
                CAST(COALESCE(c.CHARACTER_MAXIMUM_LENGTH, c.NUMERIC_PRECISION,
                              c.DATETIME_PRECISION) AS INT) AS column_size,
                CAST(c.NUMERIC_SCALE AS INT) AS decimal_digits,
                c.IS_NULLABLE
             FROM INFORMATION_SCHEMA.COLUMNS c
             WHERE c.TABLE_NAME = @P1
             ORDER BY c.ORDINAL_POSITION";

        let mut client = self.client.lock().await;
        let rows = client.query(sql, &[&table]).await?.into_first_result().await?;

        Ok(rows
            .iter()
            .map(|row| ColumnDescriptor {
                name: row.get::<&str, usize>(0).unwrap_or_default().to_string(),
                type_name: row.get::<&str, usize>(1).unwrap_or_default().to_string(),
                column_size: row.get::<i32, usize>(2),
                decimal_digits: row.get::<i32, usize>(3),
                nullable: row.get::<&str, usize>(4).unwrap_or_default().to_string(),
            })
            .collect())
    }

    #[tracing::instrument(skip(self))]
    async fn list_primary_key_columns(&self, table: &str) -> CatalogResult<Vec<String>> {
        self.query_names(
            "SELECT c.name
             FROM sys.indexes i
             INNER JOIN sys.index_columns ic
                 ON i.object_id = ic.object_id AND i.index_id = ic.index_id
             INNER JOIN sys.columns c
                 ON ic.object_id = c.object_id AND ic.column_id = c.column_id
             INNER JOIN sys.tables t ON i.object_id = t.object_id
             WHERE t.name = @P1 AND i.is_primary_key = 1
             ORDER BY ic.key_ordinal",
            &[&table],
        )
        .await
    }

    #[tracing::instrument(skip(self))]
    async fn list_foreign_key_columns(&self, table: &str) -> CatalogResult<Vec<String>> {
        self.query_names(
            "SELECT COL_NAME(fkc.parent_object_id, fkc.parent_column_id) AS column_name
             FROM sys.foreign_keys fk
             INNER JOIN sys.foreign_key_columns fkc
                 ON fk.object_id = fkc.constraint_object_id
             INNER JOIN sys.tables t ON fk.parent_object_id = t.object_id
             WHERE t.name = @P1
             ORDER BY fk.name, fkc.constraint_column_id",
            &[&table],
        )
        .await
    }
}

//! schemadoc CLI - Generate localized Word documentation for a SQL Server
//! database schema.
//!
//! Usage:
//!   schemadoc --server db.internal --database sales -o sales-schema.docx
//!   schemadoc -s localhost -d master -t "Orders, Customers" -l ru --headers
//!
//! Connection values fall back to the `[connection]` section of
//! schemadoc.toml, then to `SCHEMADOC_DB_*` environment variables.

use std::env;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use schemadoc::catalog::MssqlCatalog;
use schemadoc::config::{ConnectionConfig, Settings, SettingsError};
use schemadoc::document::{ensure_docx_extension, ConflictChoice, DocxWriter};
use schemadoc::locale::Language;
use schemadoc::render::{DocumentRenderer, RenderConfig};
use schemadoc::schema::SchemaIntrospector;

#[derive(Parser)]
#[command(name = "schemadoc")]
#[command(about = "Generates localized Word documentation for SQL Server database schemas")]
#[command(version)]
struct Cli {
    /// Output file (a .docx suffix is added when missing)
    #[arg(short, long, default_value = "output.docx")]
    output: PathBuf,

    /// Server hostname
    #[arg(short, long)]
    server: Option<String>,

    /// Database name
    #[arg(short, long)]
    database: Option<String>,

    /// Server port
    #[arg(long)]
    port: Option<u16>,

    /// Username
    #[arg(short, long)]
    user: Option<String>,

    /// Password
    #[arg(long)]
    password: Option<String>,

    /// Trust the server certificate
    #[arg(long)]
    trust_cert: bool,

    /// Comma-separated tables to document (default: every table)
    #[arg(short, long)]
    tables: Option<String>,

    /// Document language (en, ru, de)
    #[arg(short, long, default_value = "en", value_parser = Language::parse)]
    language: Language,

    /// Include header rows in tables
    #[arg(short = 'H', long)]
    headers: bool,

    /// Include a nullable column
    #[arg(short = 'N', long)]
    nullable_column: bool,

    /// Render the nullable column as localized Yes/No instead of +/-
    #[arg(short = 'n', long)]
    nullable_natural: bool,

    /// Emit a section heading per table
    #[arg(short = 'S', long)]
    sections: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    run(Cli::parse()).await
}

async fn run(cli: Cli) -> ExitCode {
    let settings = match Settings::load() {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("Configuration error: {e}");
            return ExitCode::FAILURE;
        }
    };

    let connection = match resolve_connection(&cli, &settings) {
        Ok(connection) => connection,
        Err(e) => {
            eprintln!("Configuration error: {e}");
            return ExitCode::FAILURE;
        }
    };

    let output = ensure_docx_extension(cli.output.clone());

    // The overwrite/append/abort decision is made once, before any catalog
    // work. Abort leaves the existing file untouched.
    let mut writer = if output.exists() {
        match prompt_conflict(&output) {
            Ok(ConflictChoice::Append) => match DocxWriter::open(&output) {
                Ok(writer) => writer,
                Err(e) => {
                    eprintln!("Error reading '{}': {e}", output.display());
                    return ExitCode::FAILURE;
                }
            },
            Ok(ConflictChoice::Overwrite) => DocxWriter::create(),
            Ok(ConflictChoice::Abort) => {
                println!("Exiting...");
                return ExitCode::SUCCESS;
            }
            Err(e) => {
                eprintln!("Error reading answer: {e}");
                return ExitCode::FAILURE;
            }
        }
    } else {
        DocxWriter::create()
    };

    let catalog = match MssqlCatalog::connect(&connection).await {
        Ok(catalog) => catalog,
        Err(e) => {
            eprintln!("Connection error: {e}");
            return ExitCode::FAILURE;
        }
    };

    let introspector = SchemaIntrospector::new(&catalog);
    let tables = match introspector.introspect_all(cli.tables.as_deref()).await {
        Ok(tables) => tables,
        Err(e) => {
            eprintln!("Introspection error: {e}");
            return ExitCode::FAILURE;
        }
    };

    let config = RenderConfig {
        include_headers: cli.headers,
        include_nullable_column: cli.nullable_column,
        nullable_natural: cli.nullable_natural,
        include_sections: cli.sections,
        language: cli.language,
    };
    DocumentRenderer::new(config).render(&tables, &mut writer);

    if let Err(e) = writer.finish(&output) {
        eprintln!("Error writing '{}': {e}", output.display());
        return ExitCode::FAILURE;
    }

    println!("Document saved to {}", output.display());
    ExitCode::SUCCESS
}

/// Merge connection values: CLI flags win over the settings file, which wins
/// over `SCHEMADOC_DB_*` environment variables, which win over defaults
/// (localhost:1433, database `master`).
fn resolve_connection(cli: &Cli, settings: &Settings) -> Result<ConnectionConfig, SettingsError> {
    let file = settings.connection.clone().unwrap_or_default();
    let file_password = file.resolved_password()?;
    let env_config = ConnectionConfig::from_env().ok();

    let host = cli
        .server
        .clone()
        .or(file.host)
        .or_else(|| env_config.as_ref().map(|c| c.host.clone()))
        .unwrap_or_else(|| "localhost".to_string());
    let database = cli
        .database
        .clone()
        .or(file.database)
        .or_else(|| env_config.as_ref().map(|c| c.database.clone()))
        .unwrap_or_else(|| "master".to_string());
    let port = cli
        .port
        .or(file.port)
        .or_else(|| env_config.as_ref().map(|c| c.port))
        .unwrap_or(1433);
    let username = cli
        .user
        .clone()
        .or(file.username)
        .or_else(|| env_config.as_ref().and_then(|c| c.username.clone()))
        .or_else(|| env::var("SCHEMADOC_DB_USER").ok());
    let password = cli
        .password
        .clone()
        .or(file_password)
        .or_else(|| env_config.as_ref().and_then(|c| c.password.clone()))
        .or_else(|| env::var("SCHEMADOC_DB_PASSWORD").ok());

    Ok(ConnectionConfig {
        host,
        port,
        database,
        username,
        password,
        trust_cert: cli.trust_cert || file.trust_cert,
    })
}

fn prompt_conflict(path: &Path) -> io::Result<ConflictChoice> {
    print!("{} already exists. Overwrite? [y/a/n]: ", path.display());
    io::stdout().flush()?;

    let mut answer = String::new();
    io::stdin().read_line(&mut answer)?;
    Ok(ConflictChoice::from_answer(&answer))
}

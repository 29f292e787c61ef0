//! Localized label catalog.
//!
//! A fixed language → label table for the three supported languages. The
//! table is an immutable mapping constructed once at startup, not mutable
//! process-wide state.

use std::collections::HashMap;

use once_cell::sync::Lazy;

/// Error type for language selection.
#[derive(Debug, thiserror::Error)]
pub enum LanguageError {
    #[error("Unsupported language: {0}. Supported: en, ru, de")]
    Unsupported(String),
}

/// Supported document languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    English,
    Russian,
    German,
}

impl Language {
    /// All supported languages.
    pub const ALL: [Language; 3] = [Language::English, Language::Russian, Language::German];

    /// Parse a language code.
    ///
    /// This is the validation surface for the `--language` flag; it runs at
    /// argument-parsing time, before any database connection is attempted.
    pub fn parse(code: &str) -> Result<Self, LanguageError> {
        match code {
            "en" => Ok(Language::English),
            "ru" => Ok(Language::Russian),
            "de" => Ok(Language::German),
            other => Err(LanguageError::Unsupported(other.to_string())),
        }
    }

    /// The language code.
    pub fn code(&self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Russian => "ru",
            Language::German => "de",
        }
    }

    /// The label set for this language.
    pub fn labels(&self) -> &'static Labels {
        &LABELS[self]
    }

    /// Whether the Foreign term is lowercased when it follows the Primary
    /// term in a combined key label.
    ///
    /// This is a fixed convention of the observed locales, not a derivable
    /// grammar rule: English keeps both terms capitalized, Russian and German
    /// lowercase the second term.
    pub fn lowercases_second_key_term(&self) -> bool {
        match self {
            Language::English => false,
            Language::Russian | Language::German => true,
        }
    }
}

/// Label strings for one language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Labels {
    /// Key label for a primary key column.
    pub primary: &'static str,
    /// Key label for a foreign key column.
    pub foreign: &'static str,
    /// Header caption for the column-name column.
    pub header_name: &'static str,
    /// Header caption for the data-type column.
    pub header_datatype: &'static str,
    /// Header caption for the nullable column.
    pub header_nullable: &'static str,
    /// Header caption for the key-type column.
    pub header_keytype: &'static str,
    /// Natural-language word for a nullable column.
    pub yes: &'static str,
    /// Natural-language word for a non-nullable column.
    pub no: &'static str,
}

static LABELS: Lazy<HashMap<Language, Labels>> = Lazy::new(|| {
    HashMap::from([
        (
            Language::English,
            Labels {
                primary: "Primary",
                foreign: "Foreign",
                header_name: "Column Name",
                header_datatype: "Data Type",
                header_nullable: "Nullable?",
                header_keytype: "Key Type",
                yes: "Yes",
                no: "No",
            },
        ),
        (
            Language::Russian,
            Labels {
                primary: "Первичный",
                foreign: "Внешний",
                header_name: "Имя колонки",
                header_datatype: "Тип данных",
                header_nullable: "Принимает NULL?",
                header_keytype: "Тип ключа",
                yes: "Да",
                no: "Нет",
            },
        ),
        (
            Language::German,
            Labels {
                primary: "Primär",
                foreign: "Fremd",
                header_name: "Spaltenname",
                header_datatype: "Datentyp",
                header_nullable: "Zulässig NULL?",
                header_keytype: "Schlüsseltyp",
                yes: "Ja",
                no: "Nein",
            },
        ),
    ])
});

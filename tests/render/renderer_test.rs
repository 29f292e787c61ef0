use schemadoc::document::DocumentWriter;
use schemadoc::locale::Language;
use schemadoc::render::{key_label, DocumentRenderer, RenderConfig};
use schemadoc::schema::{Column, Table};

#[derive(Debug, PartialEq, Eq)]
enum Event {
    Heading(String),
    Table(usize),
    Row(Vec<String>),
}

#[derive(Default)]
struct RecordingWriter {
    events: Vec<Event>,
}

impl RecordingWriter {
    fn rows(&self) -> Vec<Vec<String>> {
        self.events
            .iter()
            .filter_map(|event| match event {
                Event::Row(cells) => Some(cells.clone()),
                _ => None,
            })
            .collect()
    }
}

impl DocumentWriter for RecordingWriter {
    fn append_section_heading(&mut self, text: &str) {
        self.events.push(Event::Heading(text.to_string()));
    }

    fn begin_table(&mut self, columns: usize) {
        self.events.push(Event::Table(columns));
    }

    fn append_row(&mut self, cells: Vec<String>) {
        self.events.push(Event::Row(cells));
    }
}

fn column(
    name: &str,
    display_type: &str,
    nullable: bool,
    primary: bool,
    foreign: bool,
) -> Column {
    Column {
        name: name.to_string(),
        display_type: display_type.to_string(),
        is_nullable: nullable,
        is_primary_key: primary,
        is_foreign_key: foreign,
    }
}

fn orders() -> Table {
    Table {
        name: "Orders".to_string(),
        columns: vec![
            column("OrderID", "int", false, true, false),
            column("CustomerID", "int", true, false, true),
        ],
    }
}

fn render(config: RenderConfig, tables: &[Table]) -> RecordingWriter {
    let mut writer = RecordingWriter::default();
    DocumentRenderer::new(config).render(tables, &mut writer);
    writer
}

#[test]
fn layout_is_resolved_once_per_renderer() {
    let renderer = DocumentRenderer::new(RenderConfig {
        include_nullable_column: true,
        ..RenderConfig::default()
    });
    assert_eq!(renderer.layout().column_count, 4);
}

#[test]
fn english_three_column_rows() {
    let writer = render(RenderConfig::default(), &[orders()]);

    assert_eq!(writer.events[0], Event::Table(3));
    assert_eq!(
        writer.rows(),
        vec![
            vec!["OrderID".to_string(), "int".to_string(), "Primary".to_string()],
            vec!["CustomerID".to_string(), "int".to_string(), "Foreign".to_string()],
        ]
    );
}

#[test]
fn russian_natural_four_column_rows() {
    let config = RenderConfig {
        include_nullable_column: true,
        nullable_natural: true,
        language: Language::Russian,
        ..RenderConfig::default()
    };
    let writer = render(config, &[orders()]);

    assert_eq!(writer.events[0], Event::Table(4));
    assert_eq!(
        writer.rows(),
        vec![
            vec![
                "OrderID".to_string(),
                "int".to_string(),
                "Нет".to_string(),
                "Первичный".to_string(),
            ],
            vec![
                "CustomerID".to_string(),
                "int".to_string(),
                "Да".to_string(),
                "Внешний".to_string(),
            ],
        ]
    );
}

#[test]
fn sign_variant_uses_plus_and_minus() {
    let config = RenderConfig {
        include_nullable_column: true,
        ..RenderConfig::default()
    };
    let writer = render(config, &[orders()]);

    let rows = writer.rows();
    assert_eq!(rows[0][2], "-");
    assert_eq!(rows[1][2], "+");
}

#[test]
fn fourth_column_is_always_populated() {
    let table = Table {
        name: "Misc".to_string(),
        columns: vec![
            column("Plain", "int", true, false, false),
            column("Both", "int", false, true, true),
        ],
    };
    let config = RenderConfig {
        include_nullable_column: true,
        ..RenderConfig::default()
    };
    let writer = render(config, &[table]);

    let rows = writer.rows();
    assert_eq!(rows[0].len(), 4);
    // no key membership renders as an empty string, never a missing cell
    assert_eq!(rows[0][3], "");
    assert_eq!(rows[1][3], "Primary, Foreign");
}

#[test]
fn identity_marker_never_reaches_the_document() {
    let table = Table {
        name: "Orders".to_string(),
        columns: vec![column("OrderID", "int identity", false, true, false)],
    };
    let writer = render(RenderConfig::default(), &[table]);

    let rows = writer.rows();
    // only the marker is removed; the remainder is untouched
    assert_eq!(rows[0][1], "int ");
    assert!(!rows[0][1].contains("identity"));
}

#[test]
fn header_row_is_localized_and_comes_first() {
    let config = RenderConfig {
        include_headers: true,
        language: Language::German,
        ..RenderConfig::default()
    };
    let writer = render(config, &[orders()]);

    assert_eq!(
        writer.events[1],
        Event::Row(vec![
            "Spaltenname".to_string(),
            "Datentyp".to_string(),
            "Schlüsseltyp".to_string(),
        ])
    );
}

#[test]
fn header_row_with_nullable_column() {
    let config = RenderConfig {
        include_headers: true,
        include_nullable_column: true,
        ..RenderConfig::default()
    };
    let writer = render(config, &[orders()]);

    assert_eq!(
        writer.events[1],
        Event::Row(vec![
            "Column Name".to_string(),
            "Data Type".to_string(),
            "Nullable?".to_string(),
            "Key Type".to_string(),
        ])
    );
}

#[test]
fn no_header_row_without_the_switch() {
    let writer = render(RenderConfig::default(), &[orders()]);
    assert_eq!(writer.rows().len(), 2);
}

#[test]
fn sections_emit_one_heading_per_table() {
    let config = RenderConfig {
        include_sections: true,
        ..RenderConfig::default()
    };
    let second = Table {
        name: "Customers".to_string(),
        columns: vec![column("CustomerID", "int", false, true, false)],
    };
    let writer = render(config, &[orders(), second]);

    assert_eq!(writer.events[0], Event::Heading("Orders".to_string()));
    assert!(writer
        .events
        .contains(&Event::Heading("Customers".to_string())));
}

#[test]
fn no_heading_placeholder_without_sections() {
    let writer = render(RenderConfig::default(), &[orders()]);
    assert!(!writer
        .events
        .iter()
        .any(|event| matches!(event, Event::Heading(_))));
}

#[test]
fn key_labels_per_locale() {
    assert_eq!(key_label(Language::English, false, false), "");
    assert_eq!(key_label(Language::English, true, false), "Primary");
    assert_eq!(key_label(Language::English, false, true), "Foreign");
    assert_eq!(key_label(Language::English, true, true), "Primary, Foreign");

    // the second term is lowercased for ru/de, the first stays capitalized
    assert_eq!(key_label(Language::Russian, true, true), "Первичный, внешний");
    assert_eq!(key_label(Language::German, true, true), "Primär, fremd");
    assert_eq!(key_label(Language::Russian, true, false), "Первичный");
    assert_eq!(key_label(Language::German, false, true), "Fremd");
}

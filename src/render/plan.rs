//! Layout resolution.

use super::RenderConfig;

/// Caption key for a header cell. The localized text comes from the label
/// catalog at render time, so a layout is locale-independent and can be
/// reused across tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Caption {
    Name,
    DataType,
    Nullable,
    KeyType,
}

/// Fill rule for a data cell beyond the fixed name/type slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellRule {
    /// Localized yes/no word keyed by nullability.
    NullableWord,
    /// `+` if nullable, `-` otherwise.
    NullableSign,
    /// The localized key label; empty when the column has no key membership.
    KeyLabel,
}

/// Concrete column layout for one configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    /// Number of columns in every emitted table: 4 with the nullable column,
    /// 3 without.
    pub column_count: usize,
    /// Caption keys for the header row, present only when headers are
    /// requested. Length always matches `column_count`.
    pub header_captions: Option<Vec<Caption>>,
    /// Fill rules for the data slots after name and type, in slot order.
    pub cell_rules: Vec<CellRule>,
}

impl Layout {
    /// Resolve a configuration into a layout. Pure, no I/O; computed once
    /// per run.
    pub fn resolve(config: &RenderConfig) -> Self {
        let column_count = if config.include_nullable_column { 4 } else { 3 };

        let cell_rules = if config.include_nullable_column {
            let nullable_rule = if config.nullable_natural {
                CellRule::NullableWord
            } else {
                CellRule::NullableSign
            };
            // The key label is never lost: it moves to the fourth slot.
            vec![nullable_rule, CellRule::KeyLabel]
        } else {
            vec![CellRule::KeyLabel]
        };

        let header_captions = config.include_headers.then(|| {
            if config.include_nullable_column {
                vec![
                    Caption::Name,
                    Caption::DataType,
                    Caption::Nullable,
                    Caption::KeyType,
                ]
            } else {
                vec![Caption::Name, Caption::DataType, Caption::KeyType]
            }
        });

        Layout {
            column_count,
            header_captions,
            cell_rules,
        }
    }
}

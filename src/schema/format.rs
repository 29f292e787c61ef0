//! Canonical display strings for column types.

/// Types rendered with precision and scale: `decimal(18,2)`.
const DECIMAL_PRECISION_TYPES: [&str; 2] = ["decimal", "numeric"];

/// Types rendered with a size qualifier: `varchar(50)`.
///
/// `decimal` and `numeric` are absent on purpose; the precision rule above
/// takes priority.
const SIZE_QUALIFIED_TYPES: [&str; 9] = [
    "binary",
    "char",
    "datetime2",
    "datetimeoffset",
    "nchar",
    "nvarchar",
    "time",
    "varbinary",
    "varchar",
];

/// Map a raw type descriptor to its canonical display string.
///
/// Operates on the resolved type *name* as reported by the catalog, never on
/// numeric type codes. Same inputs always produce the same string. A type in
/// one of the qualified sets whose size (or digits) is missing falls back to
/// the bare type name.
pub fn format_type(type_name: &str, column_size: Option<i32>, decimal_digits: Option<i32>) -> String {
    if DECIMAL_PRECISION_TYPES.contains(&type_name) {
        if let (Some(size), Some(digits)) = (column_size, decimal_digits) {
            return format!("{type_name}({size},{digits})");
        }
    } else if SIZE_QUALIFIED_TYPES.contains(&type_name) {
        if let Some(size) = column_size {
            return format!("{type_name}({size})");
        }
    }

    type_name.to_string()
}

use schemadoc::schema::format_type;

#[test]
fn decimal_precision_types_carry_size_and_digits() {
    insta::assert_snapshot!(format_type("decimal", Some(18), Some(2)), @"decimal(18,2)");
    insta::assert_snapshot!(format_type("numeric", Some(10), Some(0)), @"numeric(10,0)");
}

#[test]
fn size_qualified_types_carry_size_only() {
    insta::assert_snapshot!(format_type("varchar", Some(50), None), @"varchar(50)");
    insta::assert_snapshot!(format_type("nvarchar", Some(255), Some(0)), @"nvarchar(255)");
    insta::assert_snapshot!(format_type("datetime2", Some(27), Some(7)), @"datetime2(27)");

    for type_name in [
        "binary",
        "char",
        "datetime2",
        "datetimeoffset",
        "nchar",
        "nvarchar",
        "time",
        "varbinary",
        "varchar",
    ] {
        assert_eq!(
            format_type(type_name, Some(8), Some(3)),
            format!("{type_name}(8)")
        );
    }
}

#[test]
fn precision_rule_wins_over_size_rule() {
    // decimal digits are never dropped for the precision types, even though
    // a size is present
    assert_eq!(format_type("decimal", Some(9), Some(4)), "decimal(9,4)");
    assert_eq!(format_type("numeric", Some(9), Some(4)), "numeric(9,4)");
}

#[test]
fn other_types_pass_through_unchanged() {
    for type_name in ["int", "bigint", "bit", "date", "datetime", "float", "xml"] {
        assert_eq!(format_type(type_name, Some(4), Some(0)), type_name);
    }
}

#[test]
fn identity_suffix_is_preserved_by_the_formatter() {
    // stripping the marker is the renderer's job, not the formatter's
    assert_eq!(format_type("int identity", Some(10), Some(0)), "int identity");
}

#[test]
fn missing_qualifiers_fall_back_to_the_bare_name() {
    assert_eq!(format_type("varchar", None, None), "varchar");
    assert_eq!(format_type("decimal", Some(18), None), "decimal");
    assert_eq!(format_type("decimal", None, Some(2)), "decimal");
}

#[test]
fn same_inputs_same_string() {
    let first = format_type("varchar", Some(50), None);
    let second = format_type("varchar", Some(50), None);
    assert_eq!(first, second);
}

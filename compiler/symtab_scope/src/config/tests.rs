use super::*;

#[test]
fn defaults() {
    let config = SymtabConfig::default();
    assert_eq!(config.field_layout, FieldLayout::PerClass);
    assert_eq!(config.indent_width, 4);
    assert_eq!(config.path_separator, ".");
}

#[test]
fn with_constructors_keep_other_defaults() {
    let config = SymtabConfig::with_field_layout(FieldLayout::Inherited);
    assert_eq!(config.field_layout, FieldLayout::Inherited);
    assert_eq!(config.indent_width, INDENT_WIDTH);

    let config = SymtabConfig::with_path_separator("::");
    assert_eq!(config.path_separator, "::");
    assert_eq!(config.field_layout, FieldLayout::PerClass);
}

#[test]
fn indent_scales_with_level() {
    let config = SymtabConfig::with_indent_width(2);
    assert_eq!(config.indent(0), "");
    assert_eq!(config.indent(3), "      ");
}

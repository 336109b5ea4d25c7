//! Symbol table configuration.

/// Default spaces per nesting level in rendered scope trees.
pub const INDENT_WIDTH: usize = 4;

/// Default separator between scope names in qualified names.
pub const PATH_SEPARATOR: &str = ".";

/// How field slots are numbered in classes with a superclass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FieldLayout {
    /// Every class numbers its own fields from 0, independent of its
    /// superclass.
    #[default]
    PerClass,
    /// A class's first field follows the fields visible through its
    /// superclass, so inherited fields keep their slots in the subclass.
    Inherited,
}

/// Configuration for a [`SymbolTable`](crate::SymbolTable).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SymtabConfig {
    /// Field slot numbering across inheritance.
    /// Defaults to `PerClass`.
    pub field_layout: FieldLayout,

    /// Indentation size in spaces for rendered scope trees.
    /// Defaults to 4 spaces.
    pub indent_width: usize,

    /// Separator used by qualified names.
    /// Defaults to `"."`.
    pub path_separator: &'static str,
}

impl Default for SymtabConfig {
    fn default() -> Self {
        Self {
            field_layout: FieldLayout::PerClass,
            indent_width: INDENT_WIDTH,
            path_separator: PATH_SEPARATOR,
        }
    }
}

impl SymtabConfig {
    /// Create a new config with the specified field layout.
    pub fn with_field_layout(field_layout: FieldLayout) -> Self {
        Self {
            field_layout,
            ..Default::default()
        }
    }

    /// Create a new config with the specified indent width.
    pub fn with_indent_width(indent_width: usize) -> Self {
        Self {
            indent_width,
            ..Default::default()
        }
    }

    /// Create a new config with the specified path separator.
    pub fn with_path_separator(path_separator: &'static str) -> Self {
        Self {
            path_separator,
            ..Default::default()
        }
    }

    /// Indentation string for the given nesting level.
    pub fn indent(&self, level: usize) -> String {
        " ".repeat(self.indent_width * level)
    }
}

#[cfg(test)]
mod tests;

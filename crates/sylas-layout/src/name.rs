//! Layout naming conventions

use sylas_route::shared::{base_name, strip_extension};

pub use sylas_route::DEFAULT_LAYOUT;

/// Converts a layout file name into its layout name
///
/// The extension is stripped; `index` (any case) maps to `default`. No other
/// case or kebab transformation is applied.
///
/// ```
/// use sylas_layout::normalize_layout_name;
///
/// assert_eq!(normalize_layout_name("default.tsx"), "default");
/// assert_eq!(normalize_layout_name("Index.jsx"), "default");
/// assert_eq!(normalize_layout_name("AdminShell.tsx"), "AdminShell");
/// ```
pub fn normalize_layout_name(file_name: &str) -> String {
    let stem = strip_extension(file_name);
    if stem.eq_ignore_ascii_case("index") {
        DEFAULT_LAYOUT.to_string()
    } else {
        stem.to_string()
    }
}

/// Derives the layout name for a layout file path
///
/// Like [`normalize_layout_name`] on the path's base name, except that an
/// empty stem also maps to `default`.
pub fn layout_name_for_file(file: &str) -> String {
    let name = normalize_layout_name(base_name(file));
    if name.is_empty() {
        DEFAULT_LAYOUT.to_string()
    } else {
        name
    }
}

/// `default` or the empty name both select the default layout
pub fn is_default_layout(layout_name: &str) -> bool {
    layout_name.is_empty() || layout_name == DEFAULT_LAYOUT
}

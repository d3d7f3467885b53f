//! Layout records and lookup

use std::fmt;
use sylas_route::{ModuleGlobs, SharedLoader};

use crate::name::{layout_name_for_file, DEFAULT_LAYOUT};

/// A discovered layout file
#[derive(Clone)]
pub struct LayoutRecord {
    pub name: String,
    pub file: String,
    pub loader: SharedLoader,
}

impl fmt::Debug for LayoutRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LayoutRecord")
            .field("name", &self.name)
            .field("file", &self.file)
            .finish_non_exhaustive()
    }
}

/// Builds one record per distinct layout name
///
/// When two files derive the same name the later one wins; it takes over the
/// earlier record's position.
///
/// ```
/// use sylas_layout::generate_layouts;
/// use sylas_route::module::loader;
/// use sylas_route::{ModuleGlobs, PageModule};
///
/// let layout = loader(|| async { Ok(PageModule::new(())) });
/// let globs = ModuleGlobs::new()
///     .with("layouts/index.tsx", layout.clone())
///     .with("layouts/admin.tsx", layout);
///
/// let names: Vec<String> = generate_layouts(&globs).into_iter().map(|l| l.name).collect();
/// assert_eq!(names, vec!["default", "admin"]);
/// ```
pub fn generate_layouts(modules: &ModuleGlobs) -> Vec<LayoutRecord> {
    let mut records: Vec<LayoutRecord> = Vec::with_capacity(modules.len());

    for (file, loader) in modules.iter() {
        let record = LayoutRecord {
            name: layout_name_for_file(file),
            file: file.to_string(),
            loader: loader.clone(),
        };

        match records.iter_mut().find(|existing| existing.name == record.name) {
            Some(existing) => {
                tracing::debug!(
                    name = %record.name,
                    replaced = %existing.file,
                    by = %record.file,
                    "layout name collision"
                );
                *existing = record;
            }
            None => records.push(record),
        }
    }

    records
}

/// Finds the loader of the layout called `layout_name`
///
/// Returns `None` when no such layout exists; callers usually render the page
/// without a wrapper in that case.
pub fn get_layout_loader(layouts: &[LayoutRecord], layout_name: &str) -> Option<SharedLoader> {
    layouts
        .iter()
        .find(|layout| layout.name == layout_name)
        .map(|layout| layout.loader.clone())
}

/// Loader of the `default` layout
pub fn get_default_layout_loader(layouts: &[LayoutRecord]) -> Option<SharedLoader> {
    get_layout_loader(layouts, DEFAULT_LAYOUT)
}

/// Owned collection of layout records with name lookup
#[derive(Clone, Default)]
pub struct LayoutRegistry {
    layouts: Vec<LayoutRecord>,
}

impl LayoutRegistry {
    pub fn new(modules: &ModuleGlobs) -> Self {
        Self {
            layouts: generate_layouts(modules),
        }
    }

    /// Record for `layout_name`; the empty name means `default`
    pub fn get(&self, layout_name: &str) -> Option<&LayoutRecord> {
        let name = if layout_name.is_empty() {
            DEFAULT_LAYOUT
        } else {
            layout_name
        };
        self.layouts.iter().find(|layout| layout.name == name)
    }

    pub fn loader(&self, layout_name: &str) -> Option<SharedLoader> {
        self.get(layout_name).map(|layout| layout.loader.clone())
    }

    pub fn has_default(&self) -> bool {
        self.get(DEFAULT_LAYOUT).is_some()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.layouts.iter().map(|layout| layout.name.as_str())
    }

    pub fn records(&self) -> &[LayoutRecord] {
        &self.layouts
    }

    pub fn len(&self) -> usize {
        self.layouts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.layouts.is_empty()
    }
}

impl fmt::Debug for LayoutRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.names()).finish()
    }
}

impl From<Vec<LayoutRecord>> for LayoutRegistry {
    fn from(layouts: Vec<LayoutRecord>) -> Self {
        Self { layouts }
    }
}

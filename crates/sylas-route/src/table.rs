//! Route table construction

use std::fmt;

use crate::meta::{MetaLoader, PageMeta};
use crate::module::{ModuleGlobs, SharedLoader};
use crate::options::RouteBuildOptions;
use crate::path::{create_root_matchers, normalize_path};
use crate::route::{build_route_name, classify_route, compare_routes, RouteKind};

/// One resolved route
#[derive(Clone)]
pub struct RouteRecord {
    /// Canonical route path like `/blog/:id`
    pub path: String,
    /// Source file the route came from (identity key, never re-parsed)
    pub file: String,
    /// Kebab-case name derived from `path`
    pub name: String,
    pub loader: SharedLoader,
    /// Filled in by batch extraction
    pub meta: Option<PageMeta>,
    /// Set once extraction ran, even when it found no metadata
    pub meta_extracted: bool,
    pub meta_loader: Option<MetaLoader>,
}

impl RouteRecord {
    /// Creates a record with a deferred metadata loader over `loader`
    pub fn new(
        path: impl Into<String>,
        file: impl Into<String>,
        name: impl Into<String>,
        loader: SharedLoader,
    ) -> Self {
        Self {
            path: path.into(),
            file: file.into(),
            name: name.into(),
            meta_loader: Some(MetaLoader::new(loader.clone())),
            loader,
            meta: None,
            meta_extracted: false,
        }
    }

    /// Returns an extracted copy carrying `meta`; `self` is left untouched
    pub fn with_meta(&self, meta: Option<PageMeta>) -> Self {
        Self {
            meta,
            meta_extracted: true,
            ..self.clone()
        }
    }

    /// Drops the deferred metadata loader
    pub fn without_meta_loader(mut self) -> Self {
        self.meta_loader = None;
        self
    }

    pub fn kind(&self) -> RouteKind {
        classify_route(&self.path)
    }

    /// Extracted metadata, or a fresh run of the deferred loader when this
    /// record was never extracted
    pub async fn resolve_meta(&self) -> Option<PageMeta> {
        if self.meta_extracted {
            return self.meta.clone();
        }
        self.load_meta().await
    }

    /// Runs the deferred metadata loader, if any
    pub async fn load_meta(&self) -> Option<PageMeta> {
        match &self.meta_loader {
            Some(meta_loader) => meta_loader.load().await,
            None => None,
        }
    }
}

impl fmt::Debug for RouteRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RouteRecord")
            .field("path", &self.path)
            .field("file", &self.file)
            .field("name", &self.name)
            .field("meta", &self.meta)
            .field("meta_extracted", &self.meta_extracted)
            .finish_non_exhaustive()
    }
}

/// Sorts routes in place: class, then path length, then current order
pub fn sort_routes(routes: &mut [RouteRecord]) {
    routes.sort_by(|a, b| compare_routes(&a.path, &b.path));
}

/// Builds the sorted route table from discovered page modules
///
/// Every record gets a deferred metadata loader; nothing is loaded here.
/// The table is sorted once; adding routes means building a new table.
///
/// ```
/// use sylas_route::{generate_file_routes, ModuleGlobs, PageModule, RouteBuildOptions};
/// use sylas_route::module::loader;
///
/// let page = loader(|| async { Ok(PageModule::new(())) });
/// let globs = ModuleGlobs::new()
///     .with("pages/docs/[...slug].tsx", page.clone())
///     .with("pages/blog/[id].tsx", page.clone())
///     .with("pages/index.tsx", page);
///
/// let routes = generate_file_routes(&globs, &RouteBuildOptions::default());
/// let paths: Vec<&str> = routes.iter().map(|r| r.path.as_str()).collect();
/// assert_eq!(paths, vec!["/", "/blog/:id", "/docs/:slug/*"]);
/// ```
pub fn generate_file_routes(modules: &ModuleGlobs, options: &RouteBuildOptions) -> Vec<RouteRecord> {
    let root_matchers = create_root_matchers(&options.roots());

    let mut routes: Vec<RouteRecord> = modules
        .iter()
        .map(|(file, loader)| {
            let path = normalize_path(file, &root_matchers, options);
            let name = build_route_name(file, &path, options.kebab_keep_digits);
            RouteRecord::new(path, file, name, loader.clone())
        })
        .collect();

    sort_routes(&mut routes);

    tracing::debug!(routes = routes.len(), "generated file routes");
    routes
}

/// Finds a route by its source file
pub fn route_by_file<'a>(routes: &'a [RouteRecord], file: &str) -> Option<&'a RouteRecord> {
    routes.iter().find(|route| route.file == file)
}

/// Finds the first route with the given name
pub fn route_by_name<'a>(routes: &'a [RouteRecord], name: &str) -> Option<&'a RouteRecord> {
    routes.iter().find(|route| route.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::module::{loader, PageModule};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    fn page() -> SharedLoader {
        loader(|| async { Ok(PageModule::new(())) })
    }

    #[test]
    fn test_with_meta_leaves_original() {
        let route = RouteRecord::new("/about", "pages/about.tsx", "about", page());
        let updated = route.with_meta(Some(PageMeta::new().with_title("About")));
        assert!(route.meta.is_none());
        assert!(!route.meta_extracted);
        assert!(updated.meta_extracted);
        assert_eq!(updated.meta.unwrap().title(), Some("About"));
        assert_eq!(updated.path, "/about");
    }

    #[test]
    fn test_sort_is_stable_for_ties() {
        let mut routes = vec![
            RouteRecord::new("/b/:id", "pages/b/[id].tsx", "b-id", page()),
            RouteRecord::new("/a/:id", "pages/a/[id].tsx", "a-id", page()),
            RouteRecord::new("/z", "pages/z.tsx", "z", page()),
        ];
        sort_routes(&mut routes);
        let files: Vec<&str> = routes.iter().map(|r| r.file.as_str()).collect();
        assert_eq!(files, vec!["pages/z.tsx", "pages/b/[id].tsx", "pages/a/[id].tsx"]);
    }

    #[test]
    fn test_lookup_helpers() {
        let routes = vec![
            RouteRecord::new("/", "pages/index.tsx", "index", page()),
            RouteRecord::new("/about", "pages/about.tsx", "about", page()),
        ];
        assert_eq!(route_by_file(&routes, "pages/about.tsx").unwrap().path, "/about");
        assert_eq!(route_by_name(&routes, "index").unwrap().file, "pages/index.tsx");
        assert!(route_by_name(&routes, "missing").is_none());
    }

    #[tokio::test]
    async fn test_resolve_meta_skips_loader_once_extracted() {
        let loads = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&loads);
        let counting = loader(move || {
            counter.fetch_add(1, Ordering::SeqCst);
            async { Ok(PageModule::new(())) }
        });

        let fresh = RouteRecord::new("/about", "pages/about.tsx", "about", counting);
        assert_eq!(fresh.resolve_meta().await, None);
        assert_eq!(loads.load(Ordering::SeqCst), 1);

        let extracted = fresh.with_meta(None);
        assert_eq!(extracted.resolve_meta().await, None);
        assert_eq!(extracted.resolve_meta().await, None);
        assert_eq!(loads.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_load_meta_without_loader() {
        let route = RouteRecord::new("/", "pages/index.tsx", "index", page()).without_meta_loader();
        assert_eq!(route.load_meta().await, None);
        assert_eq!(route.kind(), RouteKind::Static);
    }
}

//! Route table and layouts assembled from one configuration

use std::sync::Arc;
use sylas_layout::LayoutRegistry;
use sylas_route::{
    batch_extract_route_meta, generate_file_routes, route_by_file, route_by_name, ExtractOptions,
    ModuleGlobs, RouteBuildOptions, RouteRecord, SharedLoader,
};

use crate::config::SylasConfig;
use crate::navigation::LayoutSelector;

/// Page routes plus layouts for one project
///
/// # Examples
///
/// ```
/// use sylas::{FileRouter, SylasConfig};
/// use sylas_route::module::loader;
/// use sylas_route::{ModuleGlobs, PageModule};
///
/// let module = loader(|| async { Ok(PageModule::new(())) });
/// let pages = ModuleGlobs::new()
///     .with("pages/index.tsx", module.clone())
///     .with("pages/blog/[id].tsx", module.clone());
/// let layouts = ModuleGlobs::new().with("layouts/index.tsx", module);
///
/// let router = FileRouter::new(SylasConfig::default(), &pages, &layouts);
/// assert_eq!(router.paths(), vec!["/", "/blog/:id"]);
/// assert!(router.layouts().has_default());
/// ```
#[derive(Debug, Clone)]
pub struct FileRouter {
    config: SylasConfig,
    routes: Vec<RouteRecord>,
    layouts: Arc<LayoutRegistry>,
}

impl FileRouter {
    /// Builds with the options from `config.router`
    pub fn new(config: SylasConfig, pages: &ModuleGlobs, layouts: &ModuleGlobs) -> Self {
        let options = config.router.to_build_options();
        Self::with_options(config, &options, pages, layouts)
    }

    /// Builds with explicit options, e.g. to add a segment mapper
    pub fn with_options(
        config: SylasConfig,
        options: &RouteBuildOptions,
        pages: &ModuleGlobs,
        layouts: &ModuleGlobs,
    ) -> Self {
        let routes = generate_file_routes(pages, options);
        let layouts = LayoutRegistry::new(layouts);
        tracing::info!(routes = routes.len(), layouts = layouts.len(), "file router ready");

        Self {
            config,
            routes,
            layouts: Arc::new(layouts),
        }
    }

    pub fn config(&self) -> &SylasConfig {
        &self.config
    }

    /// Routes in priority order
    pub fn routes(&self) -> &[RouteRecord] {
        &self.routes
    }

    pub fn paths(&self) -> Vec<&str> {
        self.routes.iter().map(|route| route.path.as_str()).collect()
    }

    pub fn layouts(&self) -> &LayoutRegistry {
        &self.layouts
    }

    /// First route whose pattern is exactly `path`
    pub fn route(&self, path: &str) -> Option<&RouteRecord> {
        self.routes.iter().find(|route| route.path == path)
    }

    pub fn route_by_file(&self, file: &str) -> Option<&RouteRecord> {
        route_by_file(&self.routes, file)
    }

    pub fn route_by_name(&self, name: &str) -> Option<&RouteRecord> {
        route_by_name(&self.routes, name)
    }

    /// Loader of the named layout; empty means `default`
    pub fn layout_loader(&self, layout_name: &str) -> Option<SharedLoader> {
        self.layouts.loader(layout_name)
    }

    /// Loads metadata for every route and stores it on the records
    pub async fn extract_meta(&mut self, options: ExtractOptions) {
        self.routes = batch_extract_route_meta(&self.routes, options).await;
    }

    /// Navigation selector over this router's layouts, titled from the config
    pub fn selector(&self) -> LayoutSelector {
        LayoutSelector::new(Arc::clone(&self.layouts), self.config.title.clone())
    }
}

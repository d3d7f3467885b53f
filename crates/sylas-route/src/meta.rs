//! Page metadata: declaration, lazy extraction and batch extraction
//!
//! Metadata is read from a module's exports, preferring the call-style
//! `definePageMeta` export over a plain `pageMeta` object. Failures never
//! propagate: they are logged and recorded as "no metadata".

use futures::FutureExt;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;
use std::panic::AssertUnwindSafe;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::task::JoinSet;

use crate::module::{Export, ModuleLoader, SharedLoader, DEFINE_PAGE_META, PAGE_META};
use crate::RouteRecord;

/// Layout name used when a page does not declare one
pub const DEFAULT_LAYOUT: &str = "default";

/// Declared page options: `title`, `layout` and arbitrary extension fields
///
/// # Examples
///
/// ```
/// use sylas_route::PageMeta;
///
/// let meta = PageMeta::new().with_title("Dashboard").with_layout("admin").with("auth", true);
/// assert_eq!(meta.title(), Some("Dashboard"));
/// assert_eq!(meta.layout_name(), "admin");
/// assert_eq!(meta.get("auth"), Some(&serde_json::json!(true)));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PageMeta(Map<String, Value>);

impl PageMeta {
    pub fn new() -> Self {
        Self::default()
    }

    /// Accepts a JSON object; anything else is rejected
    pub fn from_value(value: Value) -> Result<Self, MetaError> {
        match value {
            Value::Object(map) => Ok(Self(map)),
            other => Err(MetaError::Shape(json_kind(&other))),
        }
    }

    pub fn with_title(self, title: impl Into<String>) -> Self {
        self.with("title", title.into())
    }

    pub fn with_layout(self, layout: impl Into<String>) -> Self {
        self.with("layout", layout.into())
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Declared title, if it is a string
    pub fn title(&self) -> Option<&str> {
        self.0.get("title").and_then(Value::as_str)
    }

    /// Declared layout, if it is a string
    pub fn layout(&self) -> Option<&str> {
        self.0.get("layout").and_then(Value::as_str)
    }

    /// Declared layout or [`DEFAULT_LAYOUT`]
    pub fn layout_name(&self) -> &str {
        self.layout().unwrap_or(DEFAULT_LAYOUT)
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    pub fn into_value(self) -> Value {
        Value::Object(self.0)
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Why metadata could not be extracted
#[derive(Debug, thiserror::Error)]
pub enum MetaError {
    #[error("module load failed: {0:#}")]
    Load(anyhow::Error),
    #[error("definePageMeta() failed: {0:#}")]
    Call(anyhow::Error),
    #[error("page metadata must be an object, found {0}")]
    Shape(&'static str),
}

/// Loads a module and reads its metadata exports, reporting failures
///
/// - `definePageMeta` (callable) wins; `null` from it means "no metadata"
/// - otherwise an object-valued `pageMeta` export is used
/// - otherwise `Ok(None)`
pub async fn try_extract_page_meta(loader: &dyn ModuleLoader) -> Result<Option<PageMeta>, MetaError> {
    let module = loader.load().await.map_err(MetaError::Load)?;

    if let Some(Export::Call(call)) = module.export(DEFINE_PAGE_META) {
        let value = call().await.map_err(MetaError::Call)?;
        if value.is_null() {
            return Ok(None);
        }
        return PageMeta::from_value(value).map(Some);
    }

    match module.export(PAGE_META) {
        Some(Export::Value(Value::Object(map))) => Ok(Some(PageMeta(map.clone()))),
        _ => Ok(None),
    }
}

/// Loads a module and reads its metadata; failures are logged and yield `None`
pub async fn extract_page_meta(loader: &dyn ModuleLoader) -> Option<PageMeta> {
    match try_extract_page_meta(loader).await {
        Ok(meta) => meta,
        Err(err) => {
            tracing::warn!(error = %err, "extract page meta failed");
            None
        }
    }
}

/// Deferred metadata accessor attached to every built route
#[derive(Clone)]
pub struct MetaLoader {
    loader: SharedLoader,
}

impl MetaLoader {
    pub fn new(loader: SharedLoader) -> Self {
        Self { loader }
    }

    /// Loads the module and extracts its metadata; never fails
    pub async fn load(&self) -> Option<PageMeta> {
        extract_page_meta(self.loader.as_ref()).await
    }
}

impl fmt::Debug for MetaLoader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("MetaLoader(..)")
    }
}

/// Batch extraction settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExtractOptions {
    /// Run several extractions at once (default: true)
    pub parallel: bool,
    /// Maximum in-flight extractions in parallel mode (default: 10, min 1)
    pub concurrency: usize,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            parallel: true,
            concurrency: 10,
        }
    }
}

impl ExtractOptions {
    pub fn serial() -> Self {
        Self {
            parallel: false,
            ..Self::default()
        }
    }

    pub fn parallel(concurrency: usize) -> Self {
        Self {
            parallel: true,
            concurrency,
        }
    }
}

/// Runs one route's extraction inside the calling task
///
/// A panicking loader only blanks this route's slot. Dropping the returned
/// future drops the loader with it, so a cancelled batch leaves nothing running.
async fn extract_route(route: &RouteRecord) -> Option<PageMeta> {
    let meta_loader = route.meta_loader.as_ref()?;

    match AssertUnwindSafe(meta_loader.load()).catch_unwind().await {
        Ok(meta) => meta,
        Err(panic) => {
            let reason = panic
                .downcast_ref::<&str>()
                .map(|s| s.to_string())
                .or_else(|| panic.downcast_ref::<String>().cloned())
                .unwrap_or_else(|| "unknown panic".to_string());
            tracing::warn!(path = %route.path, error = %reason, "batch extract route meta panicked");
            None
        }
    }
}

/// Extracts metadata for every route, returning new records in input order
///
/// Serial mode awaits each route in table order. Parallel mode starts
/// `min(concurrency, routes.len())` workers that claim route indices from a
/// shared cursor until it is exhausted; each result lands in the slot of its
/// originating route, whatever the completion order. Dropping the returned
/// future cancels every loader still in flight.
///
/// ```
/// use sylas_route::{batch_extract_route_meta, generate_file_routes, ExtractOptions, ModuleGlobs, PageModule, RouteBuildOptions};
/// use sylas_route::module::loader;
///
/// # #[tokio::main]
/// # async fn main() {
/// let globs = ModuleGlobs::new().with(
///     "pages/about.tsx",
///     loader(|| async {
///         Ok(PageModule::new(()).with_page_meta(serde_json::json!({ "title": "About" })))
///     }),
/// );
/// let routes = generate_file_routes(&globs, &RouteBuildOptions::default());
/// let routes = batch_extract_route_meta(&routes, ExtractOptions::default()).await;
/// assert_eq!(routes[0].meta.as_ref().and_then(|m| m.title()), Some("About"));
/// # }
/// ```
pub async fn batch_extract_route_meta(routes: &[RouteRecord], options: ExtractOptions) -> Vec<RouteRecord> {
    if !options.parallel {
        let mut results = Vec::with_capacity(routes.len());
        for route in routes {
            let meta = extract_route(route).await;
            results.push(route.with_meta(meta));
        }
        return results;
    }

    let workers = options.concurrency.max(1).min(routes.len());
    let shared = Arc::new(routes.to_vec());
    let cursor = Arc::new(AtomicUsize::new(0));
    let mut set = JoinSet::new();

    for _ in 0..workers {
        let shared = Arc::clone(&shared);
        let cursor = Arc::clone(&cursor);
        set.spawn(async move {
            let mut finished = Vec::new();
            loop {
                let index = cursor.fetch_add(1, Ordering::Relaxed);
                let Some(route) = shared.get(index) else {
                    break;
                };
                finished.push((index, extract_route(route).await));
            }
            finished
        });
    }

    let mut slots: Vec<Option<PageMeta>> = vec![None; routes.len()];
    while let Some(joined) = set.join_next().await {
        match joined {
            Ok(finished) => {
                for (index, meta) in finished {
                    slots[index] = meta;
                }
            }
            Err(err) => tracing::warn!(error = %err, "metadata worker stopped"),
        }
    }

    tracing::debug!(routes = routes.len(), workers, "extracted route metadata");

    routes
        .iter()
        .zip(slots)
        .map(|(route, meta)| route.with_meta(meta))
        .collect()
}

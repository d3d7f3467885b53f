//! Lazily-loaded page modules and the file → loader mapping
//!
//! The host's module system is opaque: a loader is any async, zero-argument
//! operation that yields a [`PageModule`]. This crate only looks at the
//! module's named exports when extracting page metadata.

use anyhow::Result;
use async_trait::async_trait;
use std::any::Any;
use std::collections::HashMap;
use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// Name of the call-style metadata export
pub const DEFINE_PAGE_META: &str = "definePageMeta";

/// Name of the plain-object metadata export
pub const PAGE_META: &str = "pageMeta";

/// Async loader for one module
#[async_trait]
pub trait ModuleLoader: Send + Sync {
    /// Load the module; may be called more than once
    async fn load(&self) -> Result<PageModule>;
}

#[async_trait]
impl<F, Fut> ModuleLoader for F
where
    F: Fn() -> Fut + Send + Sync,
    Fut: Future<Output = Result<PageModule>> + Send + 'static,
{
    async fn load(&self) -> Result<PageModule> {
        (self)().await
    }
}

/// Shared handle to a loader; cloned into route and layout records
pub type SharedLoader = Arc<dyn ModuleLoader>;

/// Wraps a closure as a [`SharedLoader`]
///
/// ```
/// use sylas_route::module::{loader, PageModule};
///
/// let page = loader(|| async { Ok(PageModule::new("Home")) });
/// # let _ = page;
/// ```
pub fn loader<F, Fut>(f: F) -> SharedLoader
where
    F: Fn() -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<PageModule>> + Send + 'static,
{
    Arc::new(f)
}

/// Zero-argument async callable export (e.g. `definePageMeta`)
pub type MetaCall = Arc<dyn Fn() -> BoxFuture<'static, Result<serde_json::Value>> + Send + Sync>;

/// A named export of a loaded module
#[derive(Clone)]
pub enum Export {
    /// Plain value export
    Value(serde_json::Value),
    /// Callable export, awaited when invoked
    Call(MetaCall),
}

impl fmt::Debug for Export {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Export::Value(value) => f.debug_tuple("Value").field(value).finish(),
            Export::Call(_) => f.write_str("Call(..)"),
        }
    }
}

/// A loaded module: its primary `default` export plus named exports
#[derive(Clone)]
pub struct PageModule {
    pub default: Arc<dyn Any + Send + Sync>,
    pub exports: HashMap<String, Export>,
}

impl PageModule {
    pub fn new<T: Any + Send + Sync>(default: T) -> Self {
        Self {
            default: Arc::new(default),
            exports: HashMap::new(),
        }
    }

    /// Adds a plain `pageMeta` export
    pub fn with_page_meta(self, meta: serde_json::Value) -> Self {
        self.with_export(PAGE_META, Export::Value(meta))
    }

    /// Adds a call-style `definePageMeta` export
    pub fn with_define_page_meta<F, Fut>(self, f: F) -> Self
    where
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<serde_json::Value>> + Send + 'static,
    {
        let call: MetaCall =
            Arc::new(move || -> BoxFuture<'static, Result<serde_json::Value>> { Box::pin(f()) });
        self.with_export(DEFINE_PAGE_META, Export::Call(call))
    }

    pub fn with_export(mut self, name: impl Into<String>, export: Export) -> Self {
        self.exports.insert(name.into(), export);
        self
    }

    pub fn export(&self, name: &str) -> Option<&Export> {
        self.exports.get(name)
    }

    /// Downcasts the default export
    pub fn default_as<T: Any>(&self) -> Option<&T> {
        self.default.downcast_ref::<T>()
    }
}

impl fmt::Debug for PageModule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PageModule")
            .field("exports", &self.exports)
            .finish_non_exhaustive()
    }
}

/// Insertion-ordered file → loader mapping
///
/// Re-inserting an existing file replaces its loader without moving it, so
/// iteration order always reflects first discovery.
#[derive(Clone, Default)]
pub struct ModuleGlobs {
    entries: Vec<(String, SharedLoader)>,
    /// file → position in `entries`
    index: HashMap<String, usize>,
}

impl ModuleGlobs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, file: impl Into<String>, loader: SharedLoader) {
        let file = file.into();
        match self.index.get(&file) {
            Some(&position) => self.entries[position].1 = loader,
            None => {
                self.index.insert(file.clone(), self.entries.len());
                self.entries.push((file, loader));
            }
        }
    }

    /// Builder form of [`insert`](Self::insert)
    pub fn with(mut self, file: impl Into<String>, loader: SharedLoader) -> Self {
        self.insert(file, loader);
        self
    }

    /// Merges another mapping; its entries win on conflicts
    pub fn extend(&mut self, other: ModuleGlobs) {
        for (file, loader) in other.entries {
            self.insert(file, loader);
        }
    }

    pub fn get(&self, file: &str) -> Option<&SharedLoader> {
        self.index.get(file).map(|&position| &self.entries[position].1)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &SharedLoader)> {
        self.entries.iter().map(|(file, loader)| (file.as_str(), loader))
    }

    pub fn files(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(file, _)| file.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl fmt::Debug for ModuleGlobs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.files()).finish()
    }
}

impl<S: Into<String>> FromIterator<(S, SharedLoader)> for ModuleGlobs {
    fn from_iter<I: IntoIterator<Item = (S, SharedLoader)>>(iter: I) -> Self {
        let mut globs = ModuleGlobs::new();
        for (file, loader) in iter {
            globs.insert(file, loader);
        }
        globs
    }
}

impl IntoIterator for ModuleGlobs {
    type Item = (String, SharedLoader);
    type IntoIter = std::vec::IntoIter<(String, SharedLoader)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

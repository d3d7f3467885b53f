//! Navigation-time layout selection and document titles
//!
//! Every navigation starts a new selection. Metadata and layout lookups are
//! asynchronous, so an older selection can finish after a newer one started;
//! its result comes back as [`Selection::Stale`] and must not be applied.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use sylas_layout::LayoutRegistry;
use sylas_route::{PageMeta, RouteRecord, SharedLoader};

/// Title used when neither the page nor the route name provides one
pub const DEFAULT_TITLE: &str = "Sylas Template";

/// Document title for a page
///
/// 1. `meta.title` when present and a string
/// 2. `"{route_name} | {default_title}"` when the route has a name
/// 3. `default_title`
///
/// ```
/// use sylas::resolve_title;
/// use sylas_route::PageMeta;
///
/// let meta = PageMeta::new().with_title("Dashboard");
/// assert_eq!(resolve_title(Some(&meta), "admin", "Site"), "Dashboard");
/// assert_eq!(resolve_title(None, "admin", "Site"), "admin | Site");
/// assert_eq!(resolve_title(None, "", "Site"), "Site");
/// ```
pub fn resolve_title(meta: Option<&PageMeta>, route_name: &str, default_title: &str) -> String {
    if let Some(title) = meta.and_then(PageMeta::title) {
        return title.to_string();
    }
    if route_name.is_empty() {
        default_title.to_string()
    } else {
        format!("{} | {}", route_name, default_title)
    }
}

/// Identifies one navigation; only the latest token is current
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionToken(u64);

impl SelectionToken {
    pub fn generation(self) -> u64 {
        self.0
    }
}

/// Layout and title chosen for a route
#[derive(Clone)]
pub struct ResolvedLayout {
    /// Requested layout name (`default` when the page names none)
    pub layout_name: String,
    /// `None` when no such layout exists; render the page unwrapped
    pub layout: Option<SharedLoader>,
    pub title: String,
    pub meta: Option<PageMeta>,
}

impl fmt::Debug for ResolvedLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResolvedLayout")
            .field("layout_name", &self.layout_name)
            .field("layout", &self.layout.is_some())
            .field("title", &self.title)
            .field("meta", &self.meta)
            .finish()
    }
}

#[derive(Debug, Clone)]
pub enum Selection {
    Current(ResolvedLayout),
    /// A newer navigation started while this one was resolving
    Stale,
}

impl Selection {
    pub fn is_stale(&self) -> bool {
        matches!(self, Selection::Stale)
    }

    pub fn current(self) -> Option<ResolvedLayout> {
        match self {
            Selection::Current(resolved) => Some(resolved),
            Selection::Stale => None,
        }
    }
}

/// Picks the layout for each navigation and discards superseded results
///
/// Cloning shares the generation counter, so clones see each other's
/// navigations.
#[derive(Clone)]
pub struct LayoutSelector {
    layouts: Arc<LayoutRegistry>,
    default_title: Arc<str>,
    generation: Arc<AtomicU64>,
}

impl LayoutSelector {
    pub fn new(layouts: Arc<LayoutRegistry>, default_title: impl Into<String>) -> Self {
        Self {
            layouts,
            default_title: Arc::from(default_title.into()),
            generation: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Starts a navigation, superseding every earlier token
    pub fn begin(&self) -> SelectionToken {
        SelectionToken(self.generation.fetch_add(1, Ordering::SeqCst) + 1)
    }

    pub fn is_current(&self, token: SelectionToken) -> bool {
        self.generation.load(Ordering::SeqCst) == token.0
    }

    /// Starts a navigation to `route` and resolves it
    pub async fn select(&self, route: &RouteRecord) -> Selection {
        let token = self.begin();
        self.resolve(token, route).await
    }

    /// Resolves `route` under an already issued token
    ///
    /// Uses the route's extracted metadata when it has been extracted,
    /// otherwise runs its deferred metadata loader.
    pub async fn resolve(&self, token: SelectionToken, route: &RouteRecord) -> Selection {
        let meta = route.resolve_meta().await;

        if !self.is_current(token) {
            tracing::debug!(route = %route.path, generation = token.0, "discarding stale layout selection");
            return Selection::Stale;
        }

        let layout_name = meta
            .as_ref()
            .map(|meta| meta.layout_name().to_string())
            .unwrap_or_else(|| sylas_layout::DEFAULT_LAYOUT.to_string());
        let layout = self.layouts.loader(&layout_name);
        if layout.is_none() {
            tracing::debug!(route = %route.path, layout = %layout_name, "layout not found");
        }

        Selection::Current(ResolvedLayout {
            title: resolve_title(meta.as_ref(), &route.name, &self.default_title),
            layout_name,
            layout,
            meta,
        })
    }
}

impl fmt::Debug for LayoutSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LayoutSelector")
            .field("layouts", &self.layouts)
            .field("default_title", &self.default_title)
            .field("generation", &self.generation.load(Ordering::SeqCst))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_resolve_title_ignores_non_string() {
        let meta = PageMeta::new().with("title", json!(42));
        assert_eq!(resolve_title(Some(&meta), "home", DEFAULT_TITLE), "home | Sylas Template");
    }

    #[test]
    fn test_tokens_supersede() {
        let selector = LayoutSelector::new(Arc::new(LayoutRegistry::default()), DEFAULT_TITLE);
        let first = selector.begin();
        assert!(selector.is_current(first));

        let second = selector.clone().begin();
        assert!(!selector.is_current(first));
        assert!(selector.is_current(second));
        assert!(second.generation() > first.generation());
    }
}

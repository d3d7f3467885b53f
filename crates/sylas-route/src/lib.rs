//! # Sylas Route
//!
//! Turns discovered page files into a deterministic, priority-ordered route
//! table:
//! - Static routes (`pages/about.tsx` → `/about`)
//! - Dynamic parameters (`pages/blog/[id].tsx` → `/blog/:id`)
//! - Optional parameters (`pages/posts/[id?].tsx` → `/posts/:id?`)
//! - Catch-all routes (`pages/docs/[...slug].tsx` → `/docs/:slug/*`)
//! - Route groups (`pages/(shop)/cart.tsx` → `/cart`)
//! - Index collapsing (`pages/user/index.tsx` → `/user`)
//!
//! ## Ordering
//!
//! Static routes sort before dynamic ones, dynamic before catch-all. Within a
//! class shorter paths come first and ties keep discovery order. Length is a
//! heuristic for specificity, not a proof of it.
//!
//! ## Metadata
//!
//! Each route carries a deferred [`MetaLoader`]. Building the table never
//! loads a module; [`batch_extract_route_meta`] loads them later with bounded
//! concurrency and tolerates individual failures.
//!
//! ## Example
//!
//! ```
//! use sylas_route::{generate_file_routes, ModuleGlobs, PageModule, RouteBuildOptions};
//! use sylas_route::module::loader;
//!
//! let page = loader(|| async { Ok(PageModule::new(())) });
//! let globs = ModuleGlobs::new()
//!     .with("pages/user/[id].tsx", page.clone())
//!     .with("pages/user/index.tsx", page);
//!
//! let routes = generate_file_routes(&globs, &RouteBuildOptions::default());
//! assert_eq!(routes[0].path, "/user");
//! assert_eq!(routes[1].path, "/user/:id");
//! assert_eq!(routes[1].name, "user-id");
//! ```

pub mod meta;
pub mod module;
pub mod options;
pub mod path;
pub mod route;
pub mod shared;
mod table;

// Re-export commonly used types
pub use meta::{
    batch_extract_route_meta, extract_page_meta, try_extract_page_meta, ExtractOptions, MetaError,
    MetaLoader, PageMeta, DEFAULT_LAYOUT,
};
pub use module::{Export, ModuleGlobs, ModuleLoader, PageModule, SharedLoader};
pub use options::{RouteBuildOptions, SegmentContext, SegmentMapper, DEFAULT_PAGE_ROOTS};
pub use path::{create_root_matchers, normalize_path};
pub use route::{
    build_route_name, classify_route, compare_routes, parse_param_segment, ParsedSegment,
    RouteKind, SegmentParser,
};
pub use shared::{to_absolute_path, to_absolute_paths, to_kebab};
pub use table::{generate_file_routes, route_by_file, route_by_name, sort_routes, RouteRecord};

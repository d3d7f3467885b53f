//! # Sylas
//!
//! File-convention routing for page modules:
//! - [`FileRouter`] builds the priority-ordered route table and the layout
//!   registry from discovered modules
//! - [`LayoutSelector`] picks a layout and title per navigation and drops
//!   results superseded by a newer navigation
//! - [`SylasConfig`] reads `sylas.toml`; [`logging::init`] installs the
//!   tracing subscriber it describes
//!
//! ## Example
//!
//! ```
//! use sylas::{FileRouter, SylasConfig};
//! use sylas_route::module::loader;
//! use sylas_route::{ModuleGlobs, PageModule};
//! use serde_json::json;
//!
//! # #[tokio::main]
//! # async fn main() {
//! let admin = loader(|| async {
//!     Ok(PageModule::new(()).with_page_meta(json!({ "layout": "admin", "title": "Admin" })))
//! });
//! let layout = loader(|| async { Ok(PageModule::new(())) });
//!
//! let router = FileRouter::new(
//!     SylasConfig::default(),
//!     &ModuleGlobs::new().with("pages/admin/index.tsx", admin),
//!     &ModuleGlobs::new().with("layouts/admin.tsx", layout),
//! );
//!
//! let selection = router.selector().select(&router.routes()[0]).await;
//! let resolved = selection.current().unwrap();
//! assert_eq!(resolved.layout_name, "admin");
//! assert!(resolved.layout.is_some());
//! assert_eq!(resolved.title, "Admin");
//! # }
//! ```

mod app;
pub mod config;
pub mod logging;
pub mod navigation;

pub use app::FileRouter;
pub use config::{LayoutConfig, LogFormat, LoggingConfig, RouterConfig, SylasConfig, CONFIG_FILE};
pub use navigation::{
    resolve_title, LayoutSelector, ResolvedLayout, Selection, SelectionToken, DEFAULT_TITLE,
};

pub use sylas_layout;
pub use sylas_route;

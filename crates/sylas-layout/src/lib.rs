//! # Sylas Layout
//!
//! Resolves named layout wrappers by file convention:
//! - `layouts/default.tsx` → `default`
//! - `layouts/index.tsx` → `default`
//! - `layouts/admin.tsx` → `admin`
//!
//! A page selects its layout through the `layout` field of its metadata;
//! pages without one use `default`. A missing layout is not an error, the
//! lookup simply returns `None`.
//!
//! ## Example
//!
//! ```
//! use sylas_layout::{generate_layouts, get_layout_loader};
//! use sylas_route::module::loader;
//! use sylas_route::{ModuleGlobs, PageModule};
//!
//! let layout = loader(|| async { Ok(PageModule::new(())) });
//! let layouts = generate_layouts(
//!     &ModuleGlobs::new()
//!         .with("layouts/index.tsx", layout.clone())
//!         .with("layouts/admin.tsx", layout),
//! );
//!
//! assert!(get_layout_loader(&layouts, "default").is_some());
//! assert!(get_layout_loader(&layouts, "admin").is_some());
//! assert!(get_layout_loader(&layouts, "missing").is_none());
//! ```

mod name;
mod resolver;

pub use name::{is_default_layout, layout_name_for_file, normalize_layout_name, DEFAULT_LAYOUT};
pub use resolver::{
    generate_layouts, get_default_layout_loader, get_layout_loader, LayoutRecord, LayoutRegistry,
};

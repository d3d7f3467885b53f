//! Route build options and the segment-mapper hook

use std::fmt;
use std::sync::Arc;

use crate::route::SegmentParser;

/// Default page roots stripped from discovered file paths
pub const DEFAULT_PAGE_ROOTS: &[&str] = &["pages"];

/// Position of a segment inside the path being normalized
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SegmentContext {
    /// Zero-based segment index
    pub index: usize,
    /// Number of segments after group/index filtering
    pub total_segments: usize,
    pub is_first: bool,
    pub is_last: bool,
    /// All remaining segments joined with `/` (no leading slash)
    pub full_path: String,
}

/// Caller-supplied segment override
///
/// Returning `None` or an empty string falls through to the default rules.
pub type SegmentMapper = Arc<dyn Fn(&str, &SegmentContext) -> Option<String> + Send + Sync>;

/// Options for turning file paths into routes
///
/// # Examples
///
/// ```
/// use sylas_route::RouteBuildOptions;
///
/// let options = RouteBuildOptions::default()
///     .page_roots(["pages", "app-pages"])
///     .kebab_keep_digits(true);
///
/// assert_eq!(options.roots(), vec!["pages", "app-pages"]);
/// assert!(options.remove_index);
/// ```
#[derive(Clone)]
pub struct RouteBuildOptions {
    /// Page directory aliases; empty means [`DEFAULT_PAGE_ROOTS`]
    pub page_roots: Vec<String>,
    pub segment_mapper: Option<SegmentMapper>,
    /// Keep digits when kebab-casing static segments (default: false)
    pub kebab_keep_digits: bool,
    /// Drop a trailing `index` segment (default: true)
    pub remove_index: bool,
    /// Keep letter case of static segments (default: false)
    pub case_sensitive: bool,
    /// Recognize `[...slug]` segments (default: true)
    pub enable_catch_all: bool,
    /// Parser used for bracket segments; `None` uses the process-wide one
    pub segment_parser: Option<Arc<SegmentParser>>,
}

impl Default for RouteBuildOptions {
    fn default() -> Self {
        Self {
            page_roots: Vec::new(),
            segment_mapper: None,
            kebab_keep_digits: false,
            remove_index: true,
            case_sensitive: false,
            enable_catch_all: true,
            segment_parser: None,
        }
    }
}

impl fmt::Debug for RouteBuildOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RouteBuildOptions")
            .field("page_roots", &self.page_roots)
            .field("segment_mapper", &self.segment_mapper.is_some())
            .field("kebab_keep_digits", &self.kebab_keep_digits)
            .field("remove_index", &self.remove_index)
            .field("case_sensitive", &self.case_sensitive)
            .field("enable_catch_all", &self.enable_catch_all)
            .finish_non_exhaustive()
    }
}

impl RouteBuildOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn page_roots<I, S>(mut self, roots: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.page_roots = roots.into_iter().map(Into::into).collect();
        self
    }

    pub fn segment_mapper<F>(mut self, mapper: F) -> Self
    where
        F: Fn(&str, &SegmentContext) -> Option<String> + Send + Sync + 'static,
    {
        self.segment_mapper = Some(Arc::new(mapper));
        self
    }

    pub fn kebab_keep_digits(mut self, keep: bool) -> Self {
        self.kebab_keep_digits = keep;
        self
    }

    pub fn remove_index(mut self, remove: bool) -> Self {
        self.remove_index = remove;
        self
    }

    pub fn case_sensitive(mut self, sensitive: bool) -> Self {
        self.case_sensitive = sensitive;
        self
    }

    pub fn enable_catch_all(mut self, enable: bool) -> Self {
        self.enable_catch_all = enable;
        self
    }

    pub fn with_segment_parser(mut self, parser: Arc<SegmentParser>) -> Self {
        self.segment_parser = Some(parser);
        self
    }

    /// Effective page roots (falls back to the defaults when none are set)
    pub fn roots(&self) -> Vec<&str> {
        if self.page_roots.is_empty() {
            DEFAULT_PAGE_ROOTS.to_vec()
        } else {
            self.page_roots.iter().map(String::as_str).collect()
        }
    }

    /// Parser used for bracket segments
    pub fn parser(&self) -> &SegmentParser {
        match &self.segment_parser {
            Some(parser) => parser,
            None => SegmentParser::global(),
        }
    }
}

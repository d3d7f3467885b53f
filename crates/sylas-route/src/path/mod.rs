/// Path normalization: file path → canonical route path
///
/// All functions are **pure** given their inputs; the only state touched is
/// the segment parser's memo cache.
///
/// # Pipeline
///
/// 1. `\` → `/`, strip trailing `.ext`
/// 2. strip the first matching page root (or leading `./`, `../`)
/// 3. split, drop empty and `(group)` segments
/// 4. drop a trailing `index` (optional)
/// 5. map each segment: custom mapper → parameter → static
/// 6. join with `/`, prefix `/`

use once_cell::sync::Lazy;
use regex::{Regex, RegexBuilder};

use crate::options::{RouteBuildOptions, SegmentContext, SegmentMapper};
use crate::route::pattern::{map_param_segment, SegmentParser};
use crate::shared::{hyphenate, to_kebab};

static EXTENSION_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"\.[a-zA-Z0-9]+$").unwrap());

static LEADING_RELATIVE_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[./\\]*").unwrap());

/// Route groups organize files without affecting the path: `(admin)`
static ROUTE_GROUP_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\(.+\)$").unwrap());

/// Compiles page roots into case-insensitive prefix matchers
///
/// Each root matches as `^[./\\]*<root>[\\/]`. Roots are literal text.
///
/// ```
/// use sylas_route::path::create_root_matchers;
///
/// let matchers = create_root_matchers(&["pages", "app-pages"]);
/// assert!(matchers[0].is_match("./Pages/about"));
/// assert!(matchers[1].is_match("app-pages/about"));
/// ```
pub fn create_root_matchers<S: AsRef<str>>(page_roots: &[S]) -> Vec<Regex> {
    page_roots
        .iter()
        .filter_map(|root| {
            let pattern = format!(r"^[./\\]*{}[\\/]", regex::escape(root.as_ref()));
            match RegexBuilder::new(&pattern).case_insensitive(true).build() {
                Ok(regex) => Some(regex),
                Err(err) => {
                    tracing::warn!(root = root.as_ref(), error = %err, "skipping unusable page root");
                    None
                }
            }
        })
        .collect()
}

/// Whether a segment is a route-group marker like `(marketing)`
pub fn is_route_group(segment: &str) -> bool {
    ROUTE_GROUP_REGEX.is_match(segment)
}

/// Splits a raw file path into the segments that contribute to the route
///
/// ```
/// use sylas_route::path::{create_root_matchers, process_path_segments};
///
/// let matchers = create_root_matchers(&["pages"]);
/// assert_eq!(process_path_segments("pages/user/profile.tsx", &matchers, true), vec!["user", "profile"]);
/// assert_eq!(process_path_segments("pages/user/index.tsx", &matchers, true), vec!["user"]);
/// assert_eq!(process_path_segments("pages/(shop)/cart.tsx", &matchers, true), vec!["cart"]);
/// ```
pub fn process_path_segments(raw: &str, root_matchers: &[Regex], remove_index: bool) -> Vec<String> {
    let unified = raw.replace('\\', "/");
    let processed = EXTENSION_REGEX.replace(&unified, "");

    let relative = match root_matchers.iter().find(|m| m.is_match(&processed)) {
        Some(matcher) => matcher.replace(&processed, ""),
        None => LEADING_RELATIVE_REGEX.replace(&processed, ""),
    };

    let mut segments: Vec<String> = relative
        .split('/')
        .filter(|s| !s.is_empty())
        .filter(|s| !is_route_group(s))
        .map(str::to_string)
        .collect();

    if remove_index
        && segments
            .last()
            .is_some_and(|last| last.eq_ignore_ascii_case("index"))
    {
        segments.pop();
    }

    segments
}

/// Renders a static segment
///
/// ```
/// use sylas_route::path::map_static_segment;
///
/// assert_eq!(map_static_segment("UserProfile", false, false), "user-profile");
/// assert_eq!(map_static_segment("UserProfile", false, true), "User-Profile");
/// assert_eq!(map_static_segment("user_profile", false, false), "user-profile");
/// ```
pub fn map_static_segment(segment: &str, kebab_keep_digits: bool, case_sensitive: bool) -> String {
    if case_sensitive {
        hyphenate(segment, kebab_keep_digits)
    } else {
        to_kebab(segment, kebab_keep_digits)
    }
}

/// Runs the caller's mapper; empty results count as "no override"
pub fn map_custom_segment(
    segment: &str,
    mapper: Option<&SegmentMapper>,
    ctx: &SegmentContext,
) -> Option<String> {
    mapper
        .and_then(|map| map(segment, ctx))
        .filter(|custom| !custom.is_empty())
}

/// Maps one segment: custom mapper > parameter > static
pub fn map_segment_to_path_part(
    segment: &str,
    ctx: &SegmentContext,
    options: &RouteBuildOptions,
    parser: &SegmentParser,
) -> String {
    if let Some(custom) = map_custom_segment(segment, options.segment_mapper.as_ref(), ctx) {
        return custom;
    }

    match parser.parse(segment, options.enable_catch_all) {
        Some(parsed) => map_param_segment(&parsed),
        None => map_static_segment(segment, options.kebab_keep_digits, options.case_sensitive),
    }
}

/// Maps every segment, giving each its positional context
pub fn build_normalized_segments<S: AsRef<str>>(
    segments: &[S],
    options: &RouteBuildOptions,
) -> Vec<String> {
    let parser = options.parser();
    let total_segments = segments.len();
    let full_path = segments
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<_>>()
        .join("/");

    segments
        .iter()
        .enumerate()
        .map(|(index, segment)| {
            let ctx = SegmentContext {
                index,
                total_segments,
                is_first: index == 0,
                is_last: index + 1 == total_segments,
                full_path: full_path.clone(),
            };
            map_segment_to_path_part(segment.as_ref(), &ctx, options, parser)
        })
        .collect()
}

/// Normalizes a file path into its route path
///
/// # Examples
///
/// ```
/// use sylas_route::path::{create_root_matchers, normalize_path};
/// use sylas_route::RouteBuildOptions;
///
/// let options = RouteBuildOptions::default();
/// let matchers = create_root_matchers(&options.roots());
///
/// assert_eq!(normalize_path("pages/index.tsx", &matchers, &options), "/");
/// assert_eq!(normalize_path("pages/user/[id].tsx", &matchers, &options), "/user/:id");
/// assert_eq!(normalize_path("pages/docs/[...slug].tsx", &matchers, &options), "/docs/:slug/*");
/// ```
pub fn normalize_path(raw: &str, root_matchers: &[Regex], options: &RouteBuildOptions) -> String {
    let segments = process_path_segments(raw, root_matchers, options.remove_index);

    if segments.is_empty() {
        return "/".to_string();
    }

    format!("/{}", build_normalized_segments(&segments, options).join("/"))
}

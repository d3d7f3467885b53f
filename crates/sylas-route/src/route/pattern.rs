/// Parameter grammar for bracketed path segments
///
/// A segment is a parameter only when its whole text is a bracket pair whose
/// body matches `[...]name[?][:type]`. Anything else is static text.

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

/// Whole segment wrapped in one bracket pair: `[body]`
static PARAM_SEGMENT_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\[(.+)\]$").unwrap());

/// Body grammar: optional `...`, name, optional `?`, optional `:type`
static PARAM_DETAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^(?P<catch>\.\.\.)?(?P<name>[a-zA-Z0-9_]+)(?P<optional>\?)?(?::(?P<type>[a-zA-Z0-9_]+))?$",
    )
    .unwrap()
});

static GLOBAL_PARSER: Lazy<SegmentParser> = Lazy::new(SegmentParser::new);

/// A classified parameter segment
///
/// # Examples
///
/// ```
/// use sylas_route::route::pattern::{ParsedSegment, SegmentParser};
///
/// let parser = SegmentParser::new();
/// let parsed = parser.parse("[id?]", true).unwrap();
/// assert_eq!(parsed.name, "id");
/// assert!(parsed.optional);
/// assert!(!parsed.catch_all);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedSegment {
    /// Parameter name
    pub name: String,
    /// `[id?]`
    pub optional: bool,
    /// `[...slug]`
    pub catch_all: bool,
    /// Type annotation from `[id:number]`
    pub kind: Option<String>,
}

/// Memoizing segment classifier
///
/// The cache is keyed by `(segment, catch_all_enabled)` and never evicts; the
/// key space is bounded by the distinct segments of the discovered files.
#[derive(Debug, Default)]
pub struct SegmentParser {
    cache: RwLock<HashMap<(String, bool), Option<ParsedSegment>>>,
}

impl SegmentParser {
    /// Creates a parser with an empty cache
    pub fn new() -> Self {
        Self::default()
    }

    /// Process-wide parser shared by the free functions of this crate
    pub fn global() -> &'static SegmentParser {
        &GLOBAL_PARSER
    }

    /// Classifies `segment`, returning `None` when it is not a parameter
    ///
    /// A catch-all segment is reported as "not a parameter" when
    /// `catch_all_enabled` is false, so it falls through to static handling.
    ///
    /// ```
    /// use sylas_route::route::pattern::SegmentParser;
    ///
    /// let parser = SegmentParser::new();
    /// assert!(parser.parse("[...slug]", true).unwrap().catch_all);
    /// assert_eq!(parser.parse("[...slug]", false), None);
    /// assert_eq!(parser.parse("[my-id]", true), None);
    /// assert_eq!(parser.parse("about", true), None);
    /// ```
    pub fn parse(&self, segment: &str, catch_all_enabled: bool) -> Option<ParsedSegment> {
        let key = (segment.to_string(), catch_all_enabled);

        if let Some(hit) = self
            .cache
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&key)
        {
            return hit.clone();
        }

        let parsed = classify_param(segment, catch_all_enabled);
        self.cache
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key, parsed.clone());
        parsed
    }

    /// Number of memoized entries
    pub fn cached_len(&self) -> usize {
        self.cache
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }
}

/// Uncached classification
fn classify_param(segment: &str, catch_all_enabled: bool) -> Option<ParsedSegment> {
    let body = PARAM_SEGMENT_REGEX.captures(segment)?.get(1)?.as_str();
    let caps = PARAM_DETAIL_REGEX.captures(body)?;

    let catch_all = caps.name("catch").is_some();
    if catch_all && !catch_all_enabled {
        return None;
    }

    Some(ParsedSegment {
        name: caps.name("name")?.as_str().to_string(),
        optional: caps.name("optional").is_some(),
        catch_all,
        kind: caps.name("type").map(|m| m.as_str().to_string()),
    })
}

/// Classifies a segment through the process-wide parser
pub fn parse_param_segment(segment: &str, catch_all_enabled: bool) -> Option<ParsedSegment> {
    SegmentParser::global().parse(segment, catch_all_enabled)
}

/// Renders a parameter segment into route syntax
///
/// Precedence: catch-all (`:name/*`) > optional (`:name?`) > required (`:name`).
///
/// ```
/// use sylas_route::route::pattern::{map_param_segment, ParsedSegment};
///
/// let slug = ParsedSegment { name: "slug".into(), optional: true, catch_all: true, kind: None };
/// assert_eq!(map_param_segment(&slug), ":slug/*");
/// ```
pub fn map_param_segment(parsed: &ParsedSegment) -> String {
    if parsed.catch_all {
        format!(":{}/*", parsed.name)
    } else if parsed.optional {
        format!(":{}?", parsed.name)
    } else {
        format!(":{}", parsed.name)
    }
}

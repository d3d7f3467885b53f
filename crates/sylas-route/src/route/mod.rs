/// Route module for file-convention routing
///
/// Contains the pure pieces of route resolution:
/// - `pattern` - bracket-parameter grammar and its memoizing parser
/// - `priority` - specificity classes and the table ordering
/// - `name` - kebab-case route names

pub mod name;
pub mod pattern;
pub mod priority;

// Re-export commonly used types
pub use name::build_route_name;
pub use pattern::{map_param_segment, parse_param_segment, ParsedSegment, SegmentParser};
pub use priority::{classify_route, compare_routes, RouteKind};

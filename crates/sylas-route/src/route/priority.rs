/// Specificity classes and the ordering used to sort a route table
///
/// Lower class = matched first. Within a class, shorter paths come first.
/// Path length is only a proxy for specificity: `/user/:id` and `/user-name`
/// land in different classes, but two dynamic routes of equal length are left
/// in discovery order regardless of which one is "more specific".

use std::cmp::Ordering;

/// Specificity class of a resolved route path
///
/// # Priority Order
///
/// 1. **Static** → 0
/// 2. **Dynamic** → 1
/// 3. **CatchAll** → 2
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum RouteKind {
    /// Only static segments
    Static = 0,
    /// At least one `:param` segment
    Dynamic = 1,
    /// At least one segment ending in `*`
    CatchAll = 2,
}

impl RouteKind {
    /// Numeric priority (0 = highest)
    pub fn priority(self) -> u8 {
        self as u8
    }
}

/// Classifies a resolved route path
///
/// ```
/// use sylas_route::{classify_route, RouteKind};
///
/// assert_eq!(classify_route("/user/profile"), RouteKind::Static);
/// assert_eq!(classify_route("/user/:id"), RouteKind::Dynamic);
/// assert_eq!(classify_route("/user/:slug/*"), RouteKind::CatchAll);
/// ```
pub fn classify_route(path: &str) -> RouteKind {
    let segments = || path.split('/').filter(|s| !s.is_empty());

    if segments().any(|s| s.ends_with('*')) {
        RouteKind::CatchAll
    } else if segments().any(|s| s.starts_with(':')) {
        RouteKind::Dynamic
    } else {
        RouteKind::Static
    }
}

/// Total order over route paths: class first, then ascending length
///
/// Equal results leave the relative order to the (stable) sort.
///
/// ```
/// use sylas_route::compare_routes;
/// use std::cmp::Ordering;
///
/// assert_eq!(compare_routes("/about", "/:id"), Ordering::Less);
/// assert_eq!(compare_routes("/a/:id", "/:id"), Ordering::Greater);
/// assert_eq!(compare_routes("/a", "/b"), Ordering::Equal);
/// ```
pub fn compare_routes(a: &str, b: &str) -> Ordering {
    classify_route(a)
        .cmp(&classify_route(b))
        .then_with(|| a.chars().count().cmp(&b.chars().count()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_root_is_static() {
        assert_eq!(classify_route("/"), RouteKind::Static);
    }

    #[test]
    fn test_catch_all_wins_over_dynamic() {
        assert_eq!(classify_route("/:lang/docs/:slug/*"), RouteKind::CatchAll);
    }

    #[test]
    fn test_optional_param_is_dynamic() {
        assert_eq!(classify_route("/posts/:id?"), RouteKind::Dynamic);
    }

    #[test]
    fn test_priority_values() {
        assert_eq!(RouteKind::Static.priority(), 0);
        assert_eq!(RouteKind::Dynamic.priority(), 1);
        assert_eq!(RouteKind::CatchAll.priority(), 2);
    }

    #[test]
    fn test_compare_class_before_length() {
        assert_eq!(
            compare_routes("/a/very/long/static/path", "/:id"),
            Ordering::Less
        );
        assert_eq!(compare_routes("/:slug/*", "/a/b/:id"), Ordering::Greater);
    }

    #[test]
    fn test_compare_is_antisymmetric() {
        let paths = ["/", "/about", "/:id", "/blog/:id", "/docs/:slug/*", "/x"];
        for a in paths {
            for b in paths {
                assert_eq!(compare_routes(a, b), compare_routes(b, a).reverse());
            }
        }
    }

    #[test]
    fn test_length_heuristic_is_preserved() {
        // `/user-name` is static, so it sorts first even though it is longer
        assert_eq!(compare_routes("/user-name", "/user/:id"), Ordering::Less);
        // equal class and equal length tie
        assert_eq!(compare_routes("/user/:id", "/post/:id"), Ordering::Equal);
    }
}

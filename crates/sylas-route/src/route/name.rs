//! Route name derivation

use once_cell::sync::Lazy;
use regex::Regex;

use crate::shared::{base_name, strip_extension, to_kebab};

static PARAM_MARKERS: Lazy<Regex> = Lazy::new(|| Regex::new(r"[:*]+").unwrap());

static SLASH_RUNS: Lazy<Regex> = Lazy::new(|| Regex::new(r"/+").unwrap());

/// Builds a kebab-case name from a resolved route path
///
/// Falls back to the file's base name (extension stripped) when the path
/// yields nothing, which is the case for `/`. Names are not guaranteed
/// unique: `/blog/:id` and `/blog/id` both become `blog-id`.
///
/// ```
/// use sylas_route::build_route_name;
///
/// assert_eq!(build_route_name("pages/user/[id].tsx", "/user/:id", false), "user-id");
/// assert_eq!(build_route_name("pages/user/profile.tsx", "/user/profile", false), "user-profile");
/// assert_eq!(build_route_name("pages/index.tsx", "/", false), "index");
/// ```
pub fn build_route_name(file: &str, path: &str, kebab_keep_digits: bool) -> String {
    let trimmed = path.strip_prefix('/').unwrap_or(path);
    let unmarked = PARAM_MARKERS.replace_all(trimmed, "");
    let joined = SLASH_RUNS.replace_all(&unmarked, "-");

    if !joined.is_empty() {
        return to_kebab(&joined, kebab_keep_digits);
    }

    to_kebab(strip_extension(base_name(file)), kebab_keep_digits)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_from_catch_all() {
        assert_eq!(
            build_route_name("pages/docs/[...slug].tsx", "/docs/:slug/*", false),
            "docs-slug"
        );
    }

    #[test]
    fn test_name_from_optional() {
        assert_eq!(build_route_name("pages/posts/[id?].tsx", "/posts/:id?", false), "posts-id");
    }

    #[test]
    fn test_name_keeps_digits_when_asked() {
        assert_eq!(build_route_name("pages/v2/api.tsx", "/v2/api", true), "v2-api");
        assert_eq!(build_route_name("pages/v2/api.tsx", "/v2/api", false), "v-api");
    }

    #[test]
    fn test_name_falls_back_to_file() {
        assert_eq!(build_route_name("pages/Home.tsx", "/", false), "home");
        assert_eq!(build_route_name("src/pages/index.tsx", "/", false), "index");
    }

    #[test]
    fn test_name_collisions_are_possible() {
        let a = build_route_name("pages/blog/[id].tsx", "/blog/:id", false);
        let b = build_route_name("pages/blog/id.tsx", "/blog/id", false);
        assert_eq!(a, b);
    }
}

//! Integration tests for sylas-route
//!
//! Covers path normalization, route ordering and naming through the public
//! API, using the page layout of a typical application.

use pretty_assertions::assert_eq;
use rstest::rstest;
use sylas_route::module::loader;
use sylas_route::*;

fn page() -> SharedLoader {
    loader(|| async { Ok(PageModule::new(())) })
}

fn globs(files: &[&str]) -> ModuleGlobs {
    files.iter().map(|file| (*file, page())).collect()
}

fn normalize(raw: &str) -> String {
    let options = RouteBuildOptions::default();
    normalize_path(raw, &create_root_matchers(&options.roots()), &options)
}

#[rstest]
#[case("pages/index.tsx", "/")]
#[case("pages/user/index.tsx", "/user")]
#[case("pages/blog/[id].tsx", "/blog/:id")]
#[case("pages/docs/[...slug].tsx", "/docs/:slug/*")]
#[case("pages/posts/[id?].tsx", "/posts/:id?")]
#[case("pages/admin/settings.tsx", "/admin/settings")]
#[case("pages/Home.tsx", "/home")]
#[case("pages/(auth)/login.tsx", "/login")]
#[case("./pages/about/index.jsx", "/about")]
fn test_normalize_defaults(#[case] file: &str, #[case] expected: &str) {
    assert_eq!(normalize(file), expected);
}

#[rstest]
#[case("pages/[bad-name].tsx")]
#[case("pages/(group)/[id]/[[...x]].tsx")]
#[case("pages/a(b)/c[d.tsx")]
#[case("pages/(only)/index.tsx")]
#[case("elsewhere/[...rest].tsx")]
fn test_normalized_paths_are_clean(#[case] file: &str) {
    let path = normalize(file);
    assert!(path.starts_with('/'), "{path}");
    for forbidden in ['[', ']', '(', ')'] {
        assert!(!path.contains(forbidden), "{path} contains {forbidden}");
    }
}

#[test]
fn test_multiple_page_roots() {
    let options = RouteBuildOptions::default().page_roots(["pages", "app-pages"]);
    let routes = generate_file_routes(
        &globs(&["app-pages/settings.tsx", "pages/about.tsx"]),
        &options,
    );
    let paths: Vec<&str> = routes.iter().map(|r| r.path.as_str()).collect();
    assert_eq!(paths, vec!["/about", "/settings"]);
}

#[test]
fn test_case_sensitive_and_digits() {
    let options = RouteBuildOptions::default()
        .case_sensitive(true)
        .kebab_keep_digits(true);
    let routes = generate_file_routes(&globs(&["pages/UserProfile/Step2.tsx"]), &options);
    assert_eq!(routes[0].path, "/User-Profile/Step2");
    assert_eq!(routes[0].name, "user-profile-step2");
}

#[test]
fn test_segment_mapper_overrides() {
    let options = RouteBuildOptions::default().segment_mapper(|segment, _| {
        (segment == "Home").then(|| "welcome".to_string())
    });
    let routes = generate_file_routes(&globs(&["pages/Home.tsx"]), &options);
    assert_eq!(routes[0].path, "/welcome");
    assert_eq!(routes[0].name, "welcome");
}

#[test]
fn test_table_order_follows_class_then_length() {
    let routes = generate_file_routes(
        &globs(&[
            "pages/docs/[...slug].tsx",
            "pages/blog/[id].tsx",
            "pages/admin/settings.tsx",
            "pages/[lang]/[page].tsx",
            "pages/index.tsx",
            "pages/about/index.tsx",
            "pages/login.tsx",
        ]),
        &RouteBuildOptions::default(),
    );
    let paths: Vec<&str> = routes.iter().map(|r| r.path.as_str()).collect();
    assert_eq!(
        paths,
        vec![
            "/",
            "/about",
            "/login",
            "/admin/settings",
            "/blog/:id",
            "/:lang/:page",
            "/docs/:slug/*",
        ]
    );

    for pair in routes.windows(2) {
        assert!(pair[0].kind() <= pair[1].kind());
    }
}

#[test]
fn test_equal_keys_keep_discovery_order() {
    let routes = generate_file_routes(
        &globs(&["pages/bbb.tsx", "pages/aaa.tsx", "pages/ccc.tsx"]),
        &RouteBuildOptions::default(),
    );
    let files: Vec<&str> = routes.iter().map(|r| r.file.as_str()).collect();
    assert_eq!(files, vec!["pages/bbb.tsx", "pages/aaa.tsx", "pages/ccc.tsx"]);
}

#[test]
fn test_resorting_sorted_table_is_noop() {
    let routes = generate_file_routes(
        &globs(&[
            "pages/[x].tsx",
            "pages/a.tsx",
            "pages/[...all].tsx",
            "pages/b/[y].tsx",
            "pages/c.tsx",
        ]),
        &RouteBuildOptions::default(),
    );
    let before: Vec<String> = routes.iter().map(|r| r.file.clone()).collect();

    let mut resorted = routes.clone();
    sort_routes(&mut resorted);
    let after: Vec<String> = resorted.iter().map(|r| r.file.clone()).collect();

    assert_eq!(before, after);
}

#[test]
fn test_non_terminal_catch_all_is_kept() {
    assert_eq!(normalize("pages/[...path]/edit.tsx"), "/:path/*/edit");
    assert_eq!(classify_route("/:path/*/edit"), RouteKind::CatchAll);
}

#[test]
fn test_route_names() {
    let routes = generate_file_routes(
        &globs(&["pages/index.tsx", "pages/blog/[id].tsx", "pages/docs/[...slug].tsx"]),
        &RouteBuildOptions::default(),
    );
    let names: Vec<&str> = routes.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["index", "blog-id", "docs-slug"]);
}

#[test]
fn test_kebab_examples() {
    assert_eq!(to_kebab("UserProfile", false), "user-profile");
    assert_eq!(to_kebab("User123", false), "user");
    assert_eq!(to_kebab("User123", true), "user123");
}

#[test]
fn test_duplicate_paths_are_not_merged() {
    let routes = generate_file_routes(
        &globs(&["pages/about.tsx", "pages/about/index.tsx"]),
        &RouteBuildOptions::default(),
    );
    assert_eq!(routes.len(), 2);
    assert!(routes.iter().all(|r| r.path == "/about"));
    assert_eq!(routes[0].file, "pages/about.tsx");
}

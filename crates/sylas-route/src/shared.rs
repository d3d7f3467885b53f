/// String helpers shared by route and layout resolution
///
/// All functions are **pure**: same input → same output, no side effects.

use once_cell::sync::Lazy;
use regex::Regex;

static CAMEL_BOUNDARY: Lazy<Regex> = Lazy::new(|| Regex::new(r"([a-z])([A-Z])").unwrap());

static WORD_SEPARATORS: Lazy<Regex> = Lazy::new(|| Regex::new(r"[_\s]+").unwrap());

static DISALLOWED_WITH_DIGITS: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^a-zA-Z0-9-]").unwrap());

static DISALLOWED_NO_DIGITS: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^a-zA-Z-]").unwrap());

static HYPHEN_RUNS: Lazy<Regex> = Lazy::new(|| Regex::new(r"-+").unwrap());

/// Rewrites word boundaries to hyphens without touching letter case
///
/// 1. `camelCase` boundaries → `camel-Case`
/// 2. underscores and whitespace → `-`
/// 3. disallowed characters removed (digits kept only when `keep_digits`)
/// 4. hyphen runs collapsed, leading/trailing hyphens trimmed
///
/// # Examples
///
/// ```
/// use sylas_route::shared::hyphenate;
///
/// assert_eq!(hyphenate("UserProfile", false), "User-Profile");
/// assert_eq!(hyphenate("user_profile", false), "user-profile");
/// ```
pub fn hyphenate(value: &str, keep_digits: bool) -> String {
    if value.is_empty() {
        return String::new();
    }

    let split = CAMEL_BOUNDARY.replace_all(value, "${1}-${2}");
    let split = WORD_SEPARATORS.replace_all(&split, "-");

    let disallowed = if keep_digits {
        &*DISALLOWED_WITH_DIGITS
    } else {
        &*DISALLOWED_NO_DIGITS
    };
    let cleaned = disallowed.replace_all(&split, "");

    HYPHEN_RUNS
        .replace_all(&cleaned, "-")
        .trim_matches('-')
        .to_string()
}

/// Converts any casing style to lowercase kebab-case
///
/// # Examples
///
/// ```
/// use sylas_route::to_kebab;
///
/// assert_eq!(to_kebab("camelCase", false), "camel-case");
/// assert_eq!(to_kebab("Mixed_Case Name", false), "mixed-case-name");
/// assert_eq!(to_kebab("User123", false), "user");
/// assert_eq!(to_kebab("User123", true), "user123");
/// assert_eq!(to_kebab("  multiple---spaces ", false), "multiple-spaces");
/// ```
pub fn to_kebab(value: &str, keep_digits: bool) -> String {
    hyphenate(value, keep_digits).to_lowercase()
}

/// Converts a relative glob or path into an absolute one (leading `/`)
///
/// Every leading `./` and `../` is removed before the `/` is prepended.
/// Paths that already start with `/` are returned unchanged.
///
/// ```
/// use sylas_route::to_absolute_path;
///
/// assert_eq!(to_absolute_path("./pages/**"), "/pages/**");
/// assert_eq!(to_absolute_path("../../pages/**"), "/pages/**");
/// assert_eq!(to_absolute_path("/pages/**"), "/pages/**");
/// ```
pub fn to_absolute_path(path: &str) -> String {
    if path.starts_with('/') {
        return path.to_string();
    }

    let mut cleaned = path;
    loop {
        if let Some(rest) = cleaned.strip_prefix("./") {
            cleaned = rest;
        } else if let Some(rest) = cleaned.strip_prefix("../") {
            cleaned = rest;
        } else {
            break;
        }
    }

    format!("/{}", cleaned)
}

/// Batch form of [`to_absolute_path`]
pub fn to_absolute_paths<S: AsRef<str>>(paths: &[S]) -> Vec<String> {
    paths.iter().map(|p| to_absolute_path(p.as_ref())).collect()
}

/// Returns the final `/`-separated component of a path
pub fn base_name(file: &str) -> &str {
    file.rsplit('/').next().unwrap_or(file)
}

/// Strips the last `.ext` suffix, if any
pub fn strip_extension(name: &str) -> &str {
    match name.rfind('.') {
        Some(dot) if dot + 1 < name.len() => &name[..dot],
        _ => name,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_kebab_camel_and_pascal() {
        assert_eq!(to_kebab("UserProfile", false), "user-profile");
        assert_eq!(to_kebab("camelCase", false), "camel-case");
        assert_eq!(to_kebab("PascalCase", false), "pascal-case");
    }

    #[test]
    fn test_to_kebab_digits() {
        assert_eq!(to_kebab("User123", false), "user");
        assert_eq!(to_kebab("User123", true), "user123");
        assert_eq!(to_kebab("v2Api", true), "v2api");
    }

    #[test]
    fn test_to_kebab_separators() {
        assert_eq!(to_kebab("snake_case", false), "snake-case");
        assert_eq!(to_kebab("space case", false), "space-case");
        assert_eq!(to_kebab("--edge--", false), "edge");
        assert_eq!(to_kebab("", false), "");
    }

    #[test]
    fn test_to_kebab_strips_punctuation() {
        assert_eq!(to_kebab("[id]", false), "id");
        assert_eq!(to_kebab("hello.world", false), "helloworld");
    }

    #[test]
    fn test_hyphenate_keeps_case() {
        assert_eq!(hyphenate("UserProfile", false), "User-Profile");
        assert_eq!(hyphenate("API_Keys2", true), "API-Keys2");
    }

    #[test]
    fn test_to_absolute_path() {
        assert_eq!(to_absolute_path("./pages/**"), "/pages/**");
        assert_eq!(to_absolute_path("../pages/**"), "/pages/**");
        assert_eq!(to_absolute_path("../../pages/**"), "/pages/**");
        assert_eq!(to_absolute_path("./../layouts/*.tsx"), "/layouts/*.tsx");
        assert_eq!(to_absolute_path("/pages/**"), "/pages/**");
        assert_eq!(to_absolute_path("pages/**"), "/pages/**");
    }

    #[test]
    fn test_to_absolute_paths() {
        let out = to_absolute_paths(&["./pages/**", "/app-pages/**"]);
        assert_eq!(out, vec!["/pages/**".to_string(), "/app-pages/**".to_string()]);
    }

    #[test]
    fn test_base_name_and_extension() {
        assert_eq!(base_name("pages/blog/[id].tsx"), "[id].tsx");
        assert_eq!(base_name("index.tsx"), "index.tsx");
        assert_eq!(strip_extension("[id].tsx"), "[id]");
        assert_eq!(strip_extension("archive.tar.gz"), "archive.tar");
        assert_eq!(strip_extension("README"), "README");
    }
}

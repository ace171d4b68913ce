/// File role classification
///
/// Decides, from a file name alone, whether a file takes part in routing and
/// which role it plays. Never touches the file system or file contents.
use std::fmt;

use serde::{Deserialize, Serialize};

/// Extensions a route file may carry
pub const SUPPORTED_EXTENSIONS: &[&str] = &["ts", "tsx", "js", "jsx", "mjs", "mts", "cjs", "cts"];

/// Role of a convention-named file in the route tree
///
/// # Examples
///
/// ```
/// use rhtmx_manifest::{classify, RouteRole};
///
/// assert_eq!(classify("page.tsx"), Some(RouteRole::Page));
/// assert_eq!(classify("index.js"), Some(RouteRole::Page));
/// assert_eq!(classify("route.ts"), Some(RouteRole::ApiRoute));
/// assert_eq!(classify("not-found.tsx"), Some(RouteRole::NotFound));
/// assert_eq!(classify("page.test.ts"), None);
/// assert_eq!(classify("button.tsx"), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RouteRole {
    /// `page.*` or `index.*`
    Page,
    /// `route.*`
    ApiRoute,
    /// `layout.*`
    Layout,
    /// `middleware.*`
    Middleware,
    /// `loading.*`
    Loading,
    /// `error.*`
    Error,
    /// `not-found.*`
    NotFound,
}

impl RouteRole {
    /// Whether files of this role become dispatchable routes
    pub fn is_route(self) -> bool {
        matches!(self, RouteRole::Page | RouteRole::ApiRoute)
    }

    /// Whether files of this role wrap a subtree of routes
    pub fn is_boundary(self) -> bool {
        !self.is_route()
    }

    pub fn as_str(self) -> &'static str {
        match self {
            RouteRole::Page => "page",
            RouteRole::ApiRoute => "apiRoute",
            RouteRole::Layout => "layout",
            RouteRole::Middleware => "middleware",
            RouteRole::Loading => "loading",
            RouteRole::Error => "error",
            RouteRole::NotFound => "notFound",
        }
    }

    /// Maps an extension-less base name to its role
    ///
    /// Only exact names match: `page.server` is not a page.
    pub fn from_base_name(name: &str) -> Option<Self> {
        match name {
            "page" | "index" => Some(RouteRole::Page),
            "route" => Some(RouteRole::ApiRoute),
            "layout" => Some(RouteRole::Layout),
            "middleware" => Some(RouteRole::Middleware),
            "loading" => Some(RouteRole::Loading),
            "error" => Some(RouteRole::Error),
            "not-found" => Some(RouteRole::NotFound),
            _ => None,
        }
    }
}

impl fmt::Display for RouteRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A file name that passed classification, split into its parts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classified<'a> {
    pub role: RouteRole,
    /// Base name without extension
    pub name: &'a str,
    /// Extension without the dot, as written
    pub extension: &'a str,
}

/// Classifies a file name against the built-in extension allow-list
pub fn classify(file_name: &str) -> Option<RouteRole> {
    classify_with(file_name, SUPPORTED_EXTENSIONS).map(|c| c.role)
}

/// Classifies a file name against a caller-supplied extension allow-list
///
/// Extensions are compared case-insensitively and may be given with or
/// without a leading dot. Base names are compared exactly.
///
/// Returns `None` for:
/// - names without an extension, or with an extension not in `extensions`
/// - test and spec files (`page.test.ts`, `route.spec.js`)
/// - type declaration files (`page.d.ts`)
/// - any base name outside the route conventions
///
/// # Examples
///
/// ```
/// use rhtmx_manifest::classify::classify_with;
/// use rhtmx_manifest::RouteRole;
///
/// let c = classify_with("layout.tsx", &["tsx"]).unwrap();
/// assert_eq!(c.role, RouteRole::Layout);
/// assert_eq!(c.name, "layout");
/// assert_eq!(c.extension, "tsx");
///
/// assert!(classify_with("layout.js", &["tsx"]).is_none());
/// ```
pub fn classify_with<'a, S: AsRef<str>>(file_name: &'a str, extensions: &[S]) -> Option<Classified<'a>> {
    let (name, extension) = file_name.rsplit_once('.')?;

    if name.is_empty() || extension.is_empty() {
        return None;
    }

    let allowed = extensions
        .iter()
        .any(|ext| ext.as_ref().trim_start_matches('.').eq_ignore_ascii_case(extension));
    if !allowed || is_excluded_variant(name) {
        return None;
    }

    RouteRole::from_base_name(name).map(|role| Classified {
        role,
        name,
        extension,
    })
}

/// Test, spec and type-declaration files never route, whatever they are named
fn is_excluded_variant(name: &str) -> bool {
    name.ends_with(".test") || name.ends_with(".spec") || name.ends_with(".d")
}

/// Whether an extension is in the built-in allow-list
pub fn is_supported_extension(extension: &str) -> bool {
    let extension = extension.trim_start_matches('.');
    SUPPORTED_EXTENSIONS
        .iter()
        .any(|supported| supported.eq_ignore_ascii_case(extension))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_every_role() {
        assert_eq!(classify("page.tsx"), Some(RouteRole::Page));
        assert_eq!(classify("index.ts"), Some(RouteRole::Page));
        assert_eq!(classify("route.ts"), Some(RouteRole::ApiRoute));
        assert_eq!(classify("layout.jsx"), Some(RouteRole::Layout));
        assert_eq!(classify("middleware.mjs"), Some(RouteRole::Middleware));
        assert_eq!(classify("loading.tsx"), Some(RouteRole::Loading));
        assert_eq!(classify("error.tsx"), Some(RouteRole::Error));
        assert_eq!(classify("not-found.tsx"), Some(RouteRole::NotFound));
    }

    #[test]
    fn test_classify_rejects_tests_and_declarations() {
        assert_eq!(classify("page.test.ts"), None);
        assert_eq!(classify("page.spec.tsx"), None);
        assert_eq!(classify("route.test.js"), None);
        assert_eq!(classify("page.d.ts"), None);
        assert_eq!(classify("layout.d.mts"), None);
    }

    #[test]
    fn test_classify_requires_exact_base_name() {
        assert_eq!(classify("page.server.ts"), None);
        assert_eq!(classify("pages.tsx"), None);
        assert_eq!(classify("Page.tsx"), None);
        assert_eq!(classify("_layout.tsx"), None);
    }

    #[test]
    fn test_classify_rejects_unknown_extensions() {
        assert_eq!(classify("page.rs"), None);
        assert_eq!(classify("page.css"), None);
        assert_eq!(classify("page"), None);
        assert_eq!(classify(".tsx"), None);
        assert_eq!(classify("page."), None);
    }

    #[test]
    fn test_classify_extension_case_insensitive() {
        assert_eq!(classify("page.TSX"), Some(RouteRole::Page));
    }

    #[test]
    fn test_classify_with_dotted_extensions() {
        let c = classify_with("route.ts", &[".ts".to_string()]).unwrap();
        assert_eq!(c.role, RouteRole::ApiRoute);
        assert!(classify_with("route.tsx", &[".ts"]).is_none());
    }

    #[test]
    fn test_role_predicates() {
        assert!(RouteRole::Page.is_route());
        assert!(RouteRole::ApiRoute.is_route());
        assert!(RouteRole::Layout.is_boundary());
        assert!(!RouteRole::NotFound.is_route());
        assert_eq!(RouteRole::NotFound.to_string(), "notFound");
    }

    #[test]
    fn test_is_supported_extension() {
        assert!(is_supported_extension("tsx"));
        assert!(is_supported_extension(".mjs"));
        assert!(!is_supported_extension("rs"));
    }
}

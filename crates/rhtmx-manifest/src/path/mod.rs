/// Path utilities for route-source relative paths and directory keys
///
/// All functions are **pure**: same input, same output, no file system access.
///
/// Two string forms are used throughout the crate:
/// - *relative paths* like `dashboard/(auth)/page.tsx`: slash-separated, no
///   leading slash, relative to the route-source root
/// - *directory keys* like `/dashboard/(auth)`: the directory a file lives in,
///   with a leading slash; the root directory is `/`
use std::borrow::Cow;
use std::path::Path;

pub mod hierarchy;
pub use hierarchy::DirHierarchy;

/// Checks whether a relative path is already in canonical form
///
/// # Rules
///
/// - Must not be empty
/// - Must not start or end with `/`
/// - Must not contain `//`, `\`, or `.` / `..` components
///
/// # Examples
///
/// ```
/// use rhtmx_manifest::path::is_normalized;
///
/// assert!(is_normalized("page.tsx"));
/// assert!(is_normalized("users/[id]/page.tsx"));
///
/// assert!(!is_normalized(""));
/// assert!(!is_normalized("/users/page.tsx"));
/// assert!(!is_normalized("users//page.tsx"));
/// assert!(!is_normalized("users\\page.tsx"));
/// assert!(!is_normalized("./page.tsx"));
/// ```
pub fn is_normalized(path: &str) -> bool {
    !path.is_empty()
        && !path.starts_with('/')
        && !path.ends_with('/')
        && !path.contains('\\')
        && path.split('/').all(|c| !c.is_empty() && c != "." && c != "..")
}

/// Normalizes a relative path to forward slashes with no empty or `.` parts
///
/// Returns `Cow::Borrowed` when the input is already canonical.
///
/// # Examples
///
/// ```
/// use rhtmx_manifest::path::normalize_relative;
/// use std::borrow::Cow;
///
/// assert!(matches!(normalize_relative("a/page.tsx"), Cow::Borrowed("a/page.tsx")));
/// assert_eq!(normalize_relative("a\\b\\page.tsx"), "a/b/page.tsx");
/// assert_eq!(normalize_relative("./a//page.tsx"), "a/page.tsx");
/// assert_eq!(normalize_relative("/"), "");
/// ```
pub fn normalize_relative(path: &str) -> Cow<'_, str> {
    if is_normalized(path) {
        return Cow::Borrowed(path);
    }

    let normalized = path
        .replace('\\', "/")
        .split('/')
        .filter(|c| !c.is_empty() && *c != ".")
        .collect::<Vec<_>>()
        .join("/");

    Cow::Owned(normalized)
}

/// Converts a path under `root` into a normalized relative path
///
/// Returns `None` when `path` is not inside `root` or is not valid UTF-8.
pub fn relative_to(path: &Path, root: &Path) -> Option<String> {
    let relative = path.strip_prefix(root).ok()?;
    let relative = relative.to_str()?;
    let normalized = normalize_relative(relative);
    if normalized.is_empty() {
        None
    } else {
        Some(normalized.into_owned())
    }
}

/// Directory components of a relative file path, root to immediate parent
///
/// # Examples
///
/// ```
/// use rhtmx_manifest::path::dir_components;
///
/// assert_eq!(dir_components("(shop)/cart/page.tsx"), vec!["(shop)", "cart"]);
/// assert!(dir_components("page.tsx").is_empty());
/// ```
pub fn dir_components(relative_path: &str) -> Vec<&str> {
    let mut components: Vec<&str> = relative_path.split('/').filter(|c| !c.is_empty()).collect();
    components.pop();
    components
}

/// Directory key of the directory holding a relative file path
///
/// # Examples
///
/// ```
/// use rhtmx_manifest::path::dir_key;
///
/// assert_eq!(dir_key("page.tsx"), "/");
/// assert_eq!(dir_key("dashboard/(auth)/layout.tsx"), "/dashboard/(auth)");
/// ```
pub fn dir_key(relative_path: &str) -> String {
    key_from_components(&dir_components(relative_path))
}

/// Joins directory components into a directory key
pub fn key_from_components<S: AsRef<str>>(components: &[S]) -> String {
    if components.is_empty() {
        return "/".to_string();
    }
    components.iter().fold(String::new(), |mut key, c| {
        key.push('/');
        key.push_str(c.as_ref());
        key
    })
}

/// Number of components in a directory key (`/` is depth 0)
pub fn key_depth(key: &str) -> usize {
    key.split('/').filter(|c| !c.is_empty()).count()
}

/// Whether `ancestor` is `key` itself or one of its ancestor directories
///
/// Compares whole components, so `/dash` is not an ancestor of `/dashboard`.
pub fn is_ancestor_key(ancestor: &str, key: &str) -> bool {
    DirHierarchy::new(key).any(|k| k == ancestor)
}

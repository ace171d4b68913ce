/// Lazy iterator over a directory key and its ancestors
///
/// For key `/a/(g)/b`, yields: `/a/(g)/b` → `/a/(g)` → `/a` → `/`
///
/// Deepest first, so `find_map` returns the closest match and stops there.
/// Route-group components are ordinary components here: `/(auth)` is an
/// ancestor of `/(auth)/login` and never of `/(marketing)/login`.
///
/// # Performance
///
/// - **Allocations**: zero (yields slices of the input)
/// - **Complexity**: O(depth)
///
/// # Examples
///
/// ```
/// use rhtmx_manifest::path::DirHierarchy;
///
/// let keys: Vec<&str> = DirHierarchy::new("/a/(g)/b").collect();
/// assert_eq!(keys, vec!["/a/(g)/b", "/a/(g)", "/a", "/"]);
/// ```
#[derive(Debug, Clone)]
pub struct DirHierarchy<'a> {
    current: Option<&'a str>,
}

impl<'a> DirHierarchy<'a> {
    /// Starts at `key` itself
    ///
    /// An empty key is treated as the root.
    pub fn new(key: &'a str) -> Self {
        let key = if key.is_empty() { "/" } else { key };
        Self { current: Some(key) }
    }
}

impl<'a> Iterator for DirHierarchy<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.current?;

        self.current = match current.rfind('/') {
            _ if current == "/" => None,
            Some(0) => Some("/"),
            Some(slash) => Some(&current[..slash]),
            None => None,
        };

        Some(current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hierarchy_from_nested_key() {
        let keys: Vec<&str> = DirHierarchy::new("/a/b/c").collect();
        assert_eq!(keys, vec!["/a/b/c", "/a/b", "/a", "/"]);
    }

    #[test]
    fn test_hierarchy_from_root() {
        let keys: Vec<&str> = DirHierarchy::new("/").collect();
        assert_eq!(keys, vec!["/"]);

        let keys: Vec<&str> = DirHierarchy::new("").collect();
        assert_eq!(keys, vec!["/"]);
    }

    #[test]
    fn test_hierarchy_keeps_groups() {
        let keys: Vec<&str> = DirHierarchy::new("/(shop)/[id]").collect();
        assert_eq!(keys, vec!["/(shop)/[id]", "/(shop)", "/"]);
    }

    #[test]
    fn test_hierarchy_short_circuit() {
        let mut iter = DirHierarchy::new("/a/b/c/d");
        assert_eq!(iter.find(|&k| k == "/a/b"), Some("/a/b"));
        assert_eq!(iter.next(), Some("/a"));
    }
}

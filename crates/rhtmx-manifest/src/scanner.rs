//! Route tree scanner
//!
//! Walks the route-source directory, classifies every file, and sorts the
//! recognized ones into per-role lists. File listing goes through the
//! [`FileSource`] trait so virtual trees scan exactly like real ones.

use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};
use walkdir::WalkDir;

use crate::classify::{classify_with, is_supported_extension, RouteRole};
use crate::error::ManifestError;
use crate::path::{normalize_relative, relative_to};
use crate::route::segment::{classify_component, PathComponent};

/// One recognized route file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScannedFile {
    /// Slash-separated path relative to the route-source root
    pub relative_path: String,
    /// Location on disk, as listed by the [`FileSource`]
    pub absolute_path: PathBuf,
    /// Base name without extension (`page`, `layout`, ...)
    pub name: String,
    /// Lowercase extension without the dot
    pub extension: String,
    pub role: RouteRole,
    /// Whether any ancestor directory is a route group
    pub is_in_group: bool,
    /// Route groups crossed, outermost first
    pub groups: Vec<String>,
}

/// Scan configuration
///
/// # Examples
///
/// ```
/// use rhtmx_manifest::ScanOptions;
///
/// let options = ScanOptions::default().with_extensions(["tsx", "ts"]);
/// assert!(options.validate().is_ok());
/// assert!(options.is_excluded_dir("node_modules"));
/// assert!(options.is_excluded_dir(".git"));
/// assert!(!options.is_excluded_dir("dashboard"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanOptions {
    /// File extensions to consider, without the dot
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,

    /// Directory names never descended into (hidden directories always are)
    #[serde(default = "default_exclude_dirs")]
    pub exclude_dirs: Vec<String>,

    /// Skip `_`-prefixed private directories
    #[serde(default = "default_true")]
    pub skip_private_dirs: bool,
}

pub(crate) fn default_extensions() -> Vec<String> {
    ["ts", "tsx", "js", "jsx"].iter().map(|s| s.to_string()).collect()
}

pub(crate) fn default_exclude_dirs() -> Vec<String> {
    [
        "node_modules",
        "bower_components",
        "jspm_packages",
        "dist",
        "build",
        "out",
        "coverage",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

fn default_true() -> bool {
    true
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            extensions: default_extensions(),
            exclude_dirs: default_exclude_dirs(),
            skip_private_dirs: true,
        }
    }
}

impl ScanOptions {
    /// Replaces the extension list
    pub fn with_extensions<I, S>(mut self, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.extensions = extensions.into_iter().map(Into::into).collect();
        self
    }

    /// Adds a directory name to skip
    pub fn with_excluded_dir(mut self, name: impl Into<String>) -> Self {
        self.exclude_dirs.push(name.into());
        self
    }

    pub fn with_private_dirs(mut self, skip: bool) -> Self {
        self.skip_private_dirs = skip;
        self
    }

    /// Checks the caller contract
    ///
    /// # Errors
    ///
    /// - [`ManifestError::EmptyExtensions`] when no extension is listed
    /// - [`ManifestError::UnsupportedExtension`] for extensions outside the
    ///   supported allow-list
    pub fn validate(&self) -> Result<(), ManifestError> {
        if self.extensions.is_empty() {
            return Err(ManifestError::EmptyExtensions);
        }

        match self.extensions.iter().find(|ext| !is_supported_extension(ext)) {
            Some(ext) => Err(ManifestError::UnsupportedExtension(
                ext.trim_start_matches('.').to_string(),
            )),
            None => Ok(()),
        }
    }

    /// Whether a directory with this name is outside the route tree
    pub fn is_excluded_dir(&self, name: &str) -> bool {
        name.starts_with('.')
            || (self.skip_private_dirs && name.starts_with('_'))
            || self.exclude_dirs.iter().any(|excluded| excluded == name)
    }
}

/// A file listed by a [`FileSource`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    /// Path relative to the scanned root, any separator style
    pub relative_path: String,
    pub absolute_path: PathBuf,
}

/// Lists the files under a route-source root
///
/// Implementations may use `options` to prune excluded directories early;
/// the scanner filters every listed path again either way.
pub trait FileSource {
    /// # Errors
    ///
    /// Any error means "nothing to scan": the scanner turns it into an empty
    /// [`ScanResult`].
    fn list_files(&self, root: &Path, options: &ScanOptions) -> io::Result<Vec<SourceFile>>;
}

/// Lists files from the real file system with `walkdir`
#[derive(Debug, Clone, Copy, Default)]
pub struct FsSource;

impl FileSource for FsSource {
    fn list_files(&self, root: &Path, options: &ScanOptions) -> io::Result<Vec<SourceFile>> {
        let root = fs::canonicalize(root)?;
        if !root.is_dir() {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("{} is not a directory", root.display()),
            ));
        }

        let walker = WalkDir::new(&root)
            .follow_links(false)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|entry| {
                entry.depth() == 0
                    || !entry.file_type().is_dir()
                    || entry
                        .file_name()
                        .to_str()
                        .map_or(true, |name| !options.is_excluded_dir(name))
            });

        let mut files = Vec::new();
        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) => {
                    warn!("Skipping unreadable route entry: {}", err);
                    continue;
                }
            };

            if !entry.file_type().is_file() {
                continue;
            }

            match relative_to(entry.path(), &root) {
                Some(relative_path) => files.push(SourceFile {
                    relative_path,
                    absolute_path: entry.into_path(),
                }),
                None => debug!("Skipping non UTF-8 path {:?}", entry.path()),
            }
        }

        Ok(files)
    }
}

/// Lists a fixed set of relative paths, joined onto the scanned root
///
/// For virtual trees (bundler plugins, tests).
///
/// ```
/// use rhtmx_manifest::scanner::{MemorySource, Scanner};
/// use rhtmx_manifest::ScanOptions;
///
/// let source = MemorySource::new(["page.tsx", "blog/[slug]/page.tsx", "blog/notes.md"]);
/// let scanner = Scanner::with_source(ScanOptions::default(), source).unwrap();
/// let result = scanner.scan("/app");
/// assert_eq!(result.routes.len(), 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    files: Vec<String>,
}

impl MemorySource {
    pub fn new<I, S>(files: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            files: files.into_iter().map(Into::into).collect(),
        }
    }
}

impl FileSource for MemorySource {
    fn list_files(&self, root: &Path, _options: &ScanOptions) -> io::Result<Vec<SourceFile>> {
        Ok(self
            .files
            .iter()
            .map(|file| {
                let relative_path = normalize_relative(file).into_owned();
                SourceFile {
                    absolute_path: root.join(&relative_path),
                    relative_path,
                }
            })
            .collect())
    }
}

/// Recognized files grouped by role
///
/// Pages and API routes share `routes`. Each list is sorted by relative path,
/// but consumers must not depend on that order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanResult {
    pub routes: Vec<ScannedFile>,
    pub layouts: Vec<ScannedFile>,
    pub middleware: Vec<ScannedFile>,
    pub loading: Vec<ScannedFile>,
    pub errors: Vec<ScannedFile>,
    pub not_found: Vec<ScannedFile>,
}

impl ScanResult {
    /// Files recorded for a role (pages and API routes share one list)
    pub fn files(&self, role: RouteRole) -> &[ScannedFile] {
        match role {
            RouteRole::Page | RouteRole::ApiRoute => &self.routes,
            RouteRole::Layout => &self.layouts,
            RouteRole::Middleware => &self.middleware,
            RouteRole::Loading => &self.loading,
            RouteRole::Error => &self.errors,
            RouteRole::NotFound => &self.not_found,
        }
    }

    /// Every recognized file, in list order
    pub fn iter(&self) -> impl Iterator<Item = &ScannedFile> {
        self.routes
            .iter()
            .chain(&self.layouts)
            .chain(&self.middleware)
            .chain(&self.loading)
            .chain(&self.errors)
            .chain(&self.not_found)
    }

    pub fn len(&self) -> usize {
        self.iter().count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn push(&mut self, file: ScannedFile) {
        let list = match file.role {
            RouteRole::Page | RouteRole::ApiRoute => &mut self.routes,
            RouteRole::Layout => &mut self.layouts,
            RouteRole::Middleware => &mut self.middleware,
            RouteRole::Loading => &mut self.loading,
            RouteRole::Error => &mut self.errors,
            RouteRole::NotFound => &mut self.not_found,
        };
        list.push(file);
    }

    fn sort(&mut self) {
        for list in [
            &mut self.routes,
            &mut self.layouts,
            &mut self.middleware,
            &mut self.loading,
            &mut self.errors,
            &mut self.not_found,
        ] {
            list.sort_by(|a, b| a.relative_path.cmp(&b.relative_path));
        }
    }
}

/// Scans route-source trees with fixed options
pub struct Scanner<S = FsSource> {
    options: ScanOptions,
    source: S,
}

impl Scanner<FsSource> {
    /// Scanner over the real file system
    ///
    /// # Errors
    ///
    /// Returns [`ManifestError`] when `options` fail [`ScanOptions::validate`].
    pub fn new(options: ScanOptions) -> Result<Self, ManifestError> {
        Self::with_source(options, FsSource)
    }
}

impl<S: FileSource> Scanner<S> {
    /// Scanner over a custom file source
    pub fn with_source(options: ScanOptions, source: S) -> Result<Self, ManifestError> {
        options.validate()?;
        Ok(Self { options, source })
    }

    pub fn options(&self) -> &ScanOptions {
        &self.options
    }

    /// Scans `root` and returns every recognized route file
    ///
    /// A missing or unreadable root yields an empty result.
    pub fn scan(&self, root: impl AsRef<Path>) -> ScanResult {
        let root = root.as_ref();
        debug!("Scanning route tree {:?}", root);

        let files = match self.source.list_files(root, &self.options) {
            Ok(files) => files,
            Err(err) => {
                debug!("Route tree {:?} not readable ({}), treating as empty", root, err);
                return ScanResult::default();
            }
        };

        let mut result = ScanResult::default();
        for file in files {
            if let Some(scanned) = self.scan_file(file) {
                result.push(scanned);
            }
        }
        result.sort();

        info!(
            routes = result.routes.len(),
            layouts = result.layouts.len(),
            middleware = result.middleware.len(),
            "Scanned route tree {:?}",
            root
        );
        result
    }

    fn scan_file(&self, file: SourceFile) -> Option<ScannedFile> {
        let relative_path = normalize_relative(&file.relative_path).into_owned();
        let (dirs, file_name) = match relative_path.rsplit_once('/') {
            Some((dirs, file_name)) => (dirs.split('/').collect::<Vec<_>>(), file_name),
            None => (Vec::new(), relative_path.as_str()),
        };

        if let Some(excluded) = dirs.iter().find(|dir| self.options.is_excluded_dir(dir)) {
            debug!("Skipping {} under excluded directory {}", relative_path, excluded);
            return None;
        }

        let classified = classify_with(file_name, &self.options.extensions)?;

        let groups: Vec<String> = dirs
            .iter()
            .filter_map(|dir| match classify_component(dir) {
                Ok(PathComponent::Group(name)) => Some(name),
                _ => None,
            })
            .collect();

        Some(ScannedFile {
            name: classified.name.to_string(),
            extension: classified.extension.to_ascii_lowercase(),
            role: classified.role,
            is_in_group: !groups.is_empty(),
            groups,
            absolute_path: file.absolute_path,
            relative_path,
        })
    }
}

/// Scans `root` from the real file system
///
/// # Errors
///
/// Only for invalid `options`; an unreadable tree is an empty result.
pub fn scan(root: impl AsRef<Path>, options: &ScanOptions) -> Result<ScanResult, ManifestError> {
    Ok(Scanner::new(options.clone())?.scan(root))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn memory_scan(files: &[&str]) -> ScanResult {
        Scanner::with_source(ScanOptions::default(), MemorySource::new(files.iter().copied()))
            .unwrap()
            .scan("/app")
    }

    #[test]
    fn test_default_options_valid() {
        assert!(ScanOptions::default().validate().is_ok());
    }

    #[test]
    fn test_empty_extensions_rejected() {
        let options = ScanOptions::default().with_extensions(Vec::<String>::new());
        assert_eq!(options.validate(), Err(ManifestError::EmptyExtensions));
        assert!(Scanner::new(options).is_err());
    }

    #[test]
    fn test_unsupported_extension_rejected() {
        let options = ScanOptions::default().with_extensions(["tsx", ".rs"]);
        assert_eq!(
            options.validate(),
            Err(ManifestError::UnsupportedExtension("rs".to_string()))
        );
    }

    #[test]
    fn test_scan_sorts_files_by_role() {
        let result = memory_scan(&[
            "page.tsx",
            "layout.tsx",
            "middleware.ts",
            "api/users/route.ts",
            "dashboard/loading.tsx",
            "dashboard/error.tsx",
            "not-found.tsx",
            "components/button.tsx",
        ]);

        assert_eq!(result.routes.len(), 2);
        assert_eq!(result.layouts.len(), 1);
        assert_eq!(result.middleware.len(), 1);
        assert_eq!(result.loading.len(), 1);
        assert_eq!(result.errors.len(), 1);
        assert_eq!(result.not_found.len(), 1);
        assert_eq!(result.len(), 7);

        assert_eq!(result.routes[0].relative_path, "api/users/route.ts");
        assert_eq!(result.routes[0].role, RouteRole::ApiRoute);
        assert_eq!(result.routes[1].relative_path, "page.tsx");
    }

    #[test]
    fn test_scan_records_groups() {
        let result = memory_scan(&["(shop)/(cart)/checkout/page.tsx", "about/page.tsx"]);

        // `(` sorts before letters
        let about = &result.routes[1];
        assert_eq!(about.relative_path, "about/page.tsx");
        assert!(!about.is_in_group);
        assert!(about.groups.is_empty());

        let checkout = &result.routes[0];
        assert!(checkout.is_in_group);
        assert_eq!(checkout.groups, vec!["shop", "cart"]);
        assert_eq!(checkout.name, "page");
        assert_eq!(checkout.extension, "tsx");
        assert_eq!(checkout.absolute_path, Path::new("/app/(shop)/(cart)/checkout/page.tsx"));
    }

    #[test]
    fn test_scan_excludes_tests_and_dependency_dirs() {
        let result = memory_scan(&[
            "page.test.ts",
            "users/page.spec.tsx",
            "node_modules/pkg/page.tsx",
            ".next/server/page.js",
            "_components/page.tsx",
            "dist/page.js",
            "types/page.d.ts",
        ]);
        assert!(result.is_empty());
    }

    #[test]
    fn test_private_dirs_can_be_enabled() {
        let options = ScanOptions::default().with_private_dirs(false);
        let result = Scanner::with_source(options, MemorySource::new(["_drafts/page.tsx"]))
            .unwrap()
            .scan("/app");
        assert_eq!(result.routes.len(), 1);
    }

    #[test]
    fn test_scan_respects_extension_list() {
        let options = ScanOptions::default().with_extensions(["tsx"]);
        let result = Scanner::with_source(options, MemorySource::new(["page.tsx", "a/page.js"]))
            .unwrap()
            .scan("/app");
        assert_eq!(result.routes.len(), 1);
        assert_eq!(result.routes[0].relative_path, "page.tsx");
    }

    #[test]
    fn test_scan_normalizes_backslashes() {
        let result = memory_scan(&["blog\\[slug]\\page.tsx"]);
        assert_eq!(result.routes[0].relative_path, "blog/[slug]/page.tsx");
    }

    #[test]
    fn test_missing_root_is_empty() {
        let scanner = Scanner::new(ScanOptions::default()).unwrap();
        let result = scanner.scan("/definitely/not/a/route/root");
        assert!(result.is_empty());
    }

    #[test]
    fn test_files_by_role() {
        let result = memory_scan(&["layout.tsx", "page.tsx"]);
        assert_eq!(result.files(RouteRole::Layout).len(), 1);
        assert_eq!(result.files(RouteRole::ApiRoute).len(), 1);
        assert!(result.files(RouteRole::Error).is_empty());
    }
}

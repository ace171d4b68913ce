//! Boundary resolution
//!
//! Finds the layouts, middleware, error, not-found and loading files that
//! apply to a route. A boundary applies when its directory is the route's
//! directory or one of its ancestors, compared component by component with
//! route groups kept verbatim. That comparison is what isolates groups: a
//! layout in `(auth)/` is never an ancestor of `(marketing)/login/page.tsx`.

use std::collections::BTreeMap;
use std::path::Path;

use crate::classify::RouteRole;
use crate::path::{dir_key, DirHierarchy};
use crate::scanner::{ScanResult, ScannedFile};

/// Boundary files of one role, keyed by directory
///
/// # Examples
///
/// ```
/// use rhtmx_manifest::resolver::BoundaryIndex;
/// use rhtmx_manifest::scanner::{MemorySource, Scanner};
/// use rhtmx_manifest::{RouteRole, ScanOptions};
///
/// let source = MemorySource::new(["error.tsx", "dashboard/error.tsx", "dashboard/page.tsx"]);
/// let scan = Scanner::with_source(ScanOptions::default(), source).unwrap().scan("/app");
///
/// let index = BoundaryIndex::from_files(RouteRole::Error, &scan.errors);
/// let nearest = index.nearest("dashboard/stats/page.tsx").unwrap();
/// assert_eq!(nearest.relative_path, "dashboard/error.tsx");
/// ```
#[derive(Debug, Clone)]
pub struct BoundaryIndex<'a> {
    role: RouteRole,
    by_dir: BTreeMap<String, &'a ScannedFile>,
    /// Directories defining the role more than once, every file included
    duplicates: BTreeMap<String, Vec<&'a ScannedFile>>,
}

impl<'a> BoundaryIndex<'a> {
    /// Indexes `files` by directory
    ///
    /// When one directory holds several files (`layout.tsx` and `layout.js`),
    /// the smallest relative path wins and the directory is reported by
    /// [`BoundaryIndex::duplicates`].
    pub fn from_files(role: RouteRole, files: &'a [ScannedFile]) -> Self {
        let mut sorted: Vec<&'a ScannedFile> = files.iter().collect();
        sorted.sort_by(|a, b| a.relative_path.cmp(&b.relative_path));

        let mut grouped: BTreeMap<String, Vec<&'a ScannedFile>> = BTreeMap::new();
        for file in sorted {
            grouped.entry(dir_key(&file.relative_path)).or_default().push(file);
        }

        let by_dir = grouped
            .iter()
            .map(|(dir, files)| (dir.clone(), files[0]))
            .collect();
        let duplicates = grouped.into_iter().filter(|(_, files)| files.len() > 1).collect();

        Self {
            role,
            by_dir,
            duplicates,
        }
    }

    pub fn role(&self) -> RouteRole {
        self.role
    }

    pub fn is_empty(&self) -> bool {
        self.by_dir.is_empty()
    }

    /// Directory key → winning boundary file
    pub fn entries(&self) -> &BTreeMap<String, &'a ScannedFile> {
        &self.by_dir
    }

    pub fn duplicates(&self) -> &BTreeMap<String, Vec<&'a ScannedFile>> {
        &self.duplicates
    }

    /// Closest boundary for a route file, if any directory up the chain has one
    pub fn nearest(&self, route_relative_path: &str) -> Option<&'a ScannedFile> {
        let key = dir_key(route_relative_path);
        DirHierarchy::new(&key).find_map(|dir| self.by_dir.get(dir).copied())
    }

    /// Every applicable boundary for a route file, root first
    pub fn chain(&self, route_relative_path: &str) -> Vec<&'a ScannedFile> {
        let key = dir_key(route_relative_path);
        let mut chain: Vec<&'a ScannedFile> = DirHierarchy::new(&key)
            .filter_map(|dir| self.by_dir.get(dir).copied())
            .collect();
        chain.reverse();
        chain
    }

    /// Directory key → absolute path, the manifest's map form
    pub fn to_path_map(&self) -> BTreeMap<String, String> {
        self.by_dir
            .iter()
            .map(|(dir, file)| (dir.clone(), display_path(&file.absolute_path)))
            .collect()
    }
}

/// Every boundary that applies to one route
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolvedBoundaries {
    /// Absolute paths, outermost first
    pub layouts: Vec<String>,
    /// Absolute paths, outermost first
    pub middleware: Vec<String>,
    pub error: Option<String>,
    pub not_found: Option<String>,
    pub loading: Option<String>,
}

/// All boundary indexes for one scan
#[derive(Debug, Clone)]
pub struct BoundaryResolver<'a> {
    pub layouts: BoundaryIndex<'a>,
    pub middleware: BoundaryIndex<'a>,
    pub errors: BoundaryIndex<'a>,
    pub not_found: BoundaryIndex<'a>,
    pub loading: BoundaryIndex<'a>,
}

impl<'a> BoundaryResolver<'a> {
    pub fn from_scan(scan: &'a ScanResult) -> Self {
        Self {
            layouts: BoundaryIndex::from_files(RouteRole::Layout, &scan.layouts),
            middleware: BoundaryIndex::from_files(RouteRole::Middleware, &scan.middleware),
            errors: BoundaryIndex::from_files(RouteRole::Error, &scan.errors),
            not_found: BoundaryIndex::from_files(RouteRole::NotFound, &scan.not_found),
            loading: BoundaryIndex::from_files(RouteRole::Loading, &scan.loading),
        }
    }

    /// Indexes in a fixed order, for passes over every role
    pub fn indexes(&self) -> [&BoundaryIndex<'a>; 5] {
        [
            &self.layouts,
            &self.middleware,
            &self.errors,
            &self.not_found,
            &self.loading,
        ]
    }

    pub fn resolve(&self, route_relative_path: &str) -> ResolvedBoundaries {
        let paths = |files: Vec<&ScannedFile>| -> Vec<String> {
            files.iter().map(|f| display_path(&f.absolute_path)).collect()
        };
        let path = |file: Option<&ScannedFile>| file.map(|f| display_path(&f.absolute_path));

        ResolvedBoundaries {
            layouts: paths(self.layouts.chain(route_relative_path)),
            middleware: paths(self.middleware.chain(route_relative_path)),
            error: path(self.errors.nearest(route_relative_path)),
            not_found: path(self.not_found.nearest(route_relative_path)),
            loading: path(self.loading.nearest(route_relative_path)),
        }
    }
}

/// Nearest error boundary for a route file
pub fn resolve_error_boundary(route_relative_path: &str, error_boundaries: &[ScannedFile]) -> Option<String> {
    nearest_path(RouteRole::Error, route_relative_path, error_boundaries)
}

/// Nearest not-found boundary for a route file
pub fn resolve_not_found_boundary(
    route_relative_path: &str,
    not_found_boundaries: &[ScannedFile],
) -> Option<String> {
    nearest_path(RouteRole::NotFound, route_relative_path, not_found_boundaries)
}

/// Nearest loading file for a route file
pub fn resolve_loading_boundary(route_relative_path: &str, loading: &[ScannedFile]) -> Option<String> {
    nearest_path(RouteRole::Loading, route_relative_path, loading)
}

/// Layouts wrapping a route file, outermost first
pub fn resolve_layouts(route_relative_path: &str, layouts: &[ScannedFile]) -> Vec<String> {
    chain_paths(RouteRole::Layout, route_relative_path, layouts)
}

/// Middleware applying to a route file, outermost first
pub fn resolve_middleware(route_relative_path: &str, middleware: &[ScannedFile]) -> Vec<String> {
    chain_paths(RouteRole::Middleware, route_relative_path, middleware)
}

fn nearest_path(role: RouteRole, route_relative_path: &str, files: &[ScannedFile]) -> Option<String> {
    BoundaryIndex::from_files(role, files)
        .nearest(route_relative_path)
        .map(|f| display_path(&f.absolute_path))
}

fn chain_paths(role: RouteRole, route_relative_path: &str, files: &[ScannedFile]) -> Vec<String> {
    BoundaryIndex::from_files(role, files)
        .chain(route_relative_path)
        .iter()
        .map(|f| display_path(&f.absolute_path))
        .collect()
}

pub(crate) fn display_path(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}

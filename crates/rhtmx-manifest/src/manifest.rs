//! Route manifest building
//!
//! Turns a [`ScanResult`] into the [`RouteManifest`] handed to the request
//! dispatcher: parsed routes with their boundaries, sorted by priority, plus
//! every problem found along the way. Building never fails; problems land in
//! `errors` (manifest must not be dispatched) or `warnings`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;
use tracing::{info, warn};

use crate::classify::RouteRole;
use crate::error::SegmentError;
use crate::path::{dir_key, is_ancestor_key};
use crate::resolver::{display_path, BoundaryIndex, BoundaryResolver};
use crate::route::parser::{parse_file_path, pattern_shape, ParsedPath};
use crate::route::segment::{RouteSegment, SegmentKind};
use crate::scanner::{ScanResult, ScannedFile};

/// Routes nested deeper than this draw a [`DiagnosticKind::DeepNesting`] warning
pub const DEFAULT_MAX_DEPTH_WARNING: usize = 12;

/// HTTP methods a route can answer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
    Get,
    Head,
    Post,
    Put,
    Patch,
    Delete,
    Options,
}

impl HttpMethod {
    pub const ALL: [HttpMethod; 7] = [
        HttpMethod::Get,
        HttpMethod::Head,
        HttpMethod::Post,
        HttpMethod::Put,
        HttpMethod::Patch,
        HttpMethod::Delete,
        HttpMethod::Options,
    ];

    /// Methods a route file of `role` covers
    ///
    /// Pages render on GET and HEAD. API route modules are not inspected, so
    /// they are assumed to cover every method.
    pub fn coverage(role: RouteRole) -> Vec<HttpMethod> {
        match role {
            RouteRole::Page => vec![HttpMethod::Get, HttpMethod::Head],
            RouteRole::ApiRoute => HttpMethod::ALL.to_vec(),
            _ => Vec::new(),
        }
    }
}

/// One dispatchable route
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteEntry {
    /// Dispatch pattern like `/users/:id`
    pub url_pattern: String,
    /// Path relative to the route-source root
    pub file_path: String,
    pub absolute_path: String,
    /// `Page` or `ApiRoute`
    pub role: RouteRole,
    pub segments: Vec<RouteSegment>,
    /// Route groups crossed, outermost first
    pub groups: Vec<String>,
    pub methods: Vec<HttpMethod>,
    /// Outermost first
    pub layouts: Vec<String>,
    /// Outermost first
    pub middleware: Vec<String>,
    pub error_boundary: Option<String>,
    pub not_found_boundary: Option<String>,
    pub loading_boundary: Option<String>,
    /// Lower dispatches first
    pub priority: usize,
}

impl RouteEntry {
    /// Dispatch pattern with parameter names erased
    pub fn shape(&self) -> String {
        pattern_shape(&self.segments)
    }

    pub fn params(&self) -> Vec<&str> {
        self.segments.iter().filter_map(RouteSegment::param_name).collect()
    }

    /// Whether two routes answer at least one common method
    pub fn overlaps_methods(&self, other: &RouteEntry) -> bool {
        self.methods.iter().any(|m| other.methods.contains(m))
    }

    fn segment_kinds(&self) -> Vec<SegmentKind> {
        self.segments.iter().map(RouteSegment::kind).collect()
    }
}

/// What a diagnostic is about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DiagnosticKind {
    /// Bad bracket or group syntax in a directory name
    InvalidSegment,
    /// A catch-all directory has more segments below it
    CatchAllNotLast,
    /// One route names the same parameter twice
    DuplicateParam,
    /// Several routes answer the same URLs
    PatternConflict,
    /// One directory defines the same boundary role twice
    DuplicateBoundary,
    /// A boundary file with no route beneath it
    UnusedBoundary,
    /// A route nested unusually deep
    DeepNesting,
}

/// A problem found while building the manifest
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteDiagnostic {
    pub kind: DiagnosticKind,
    pub message: String,
    /// Relative paths of every file involved
    pub files: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,
}

impl RouteDiagnostic {
    fn from_segment_error(file_path: &str, err: &SegmentError) -> Self {
        let kind = match err {
            SegmentError::Malformed { .. } => DiagnosticKind::InvalidSegment,
            SegmentError::CatchAllNotLast { .. } => DiagnosticKind::CatchAllNotLast,
            SegmentError::DuplicateParam { .. } => DiagnosticKind::DuplicateParam,
        };
        Self {
            kind,
            message: format!("{}: {}", file_path, err),
            files: vec![file_path.to_string()],
            pattern: None,
        }
    }

    fn conflict(entries: &[&RouteEntry]) -> Self {
        let files: Vec<String> = entries.iter().map(|e| e.file_path.clone()).collect();
        let patterns: Vec<&str> = entries.iter().map(|e| e.url_pattern.as_str()).collect();
        Self {
            kind: DiagnosticKind::PatternConflict,
            message: format!(
                "conflicting routes {} match the same URLs ({})",
                files.join(", "),
                patterns.join(" vs ")
            ),
            pattern: entries.first().map(|e| e.url_pattern.clone()),
            files,
        }
    }

    fn duplicate_boundary(role: RouteRole, dir: &str, files: &[&ScannedFile]) -> Self {
        let files: Vec<String> = files.iter().map(|f| f.relative_path.clone()).collect();
        Self {
            kind: DiagnosticKind::DuplicateBoundary,
            message: format!("directory {} defines {} more than once: {}", dir, role, files.join(", ")),
            files,
            pattern: None,
        }
    }

    fn unused_boundary(role: RouteRole, file: &ScannedFile) -> Self {
        Self {
            kind: DiagnosticKind::UnusedBoundary,
            message: format!("{} {} has no routes beneath it", role, file.relative_path),
            files: vec![file.relative_path.clone()],
            pattern: None,
        }
    }

    fn deep_nesting(entry: &RouteEntry, limit: usize) -> Self {
        Self {
            kind: DiagnosticKind::DeepNesting,
            message: format!(
                "route {} is nested {} segments deep (more than {})",
                entry.file_path,
                entry.segments.len(),
                limit
            ),
            files: vec![entry.file_path.clone()],
            pattern: Some(entry.url_pattern.clone()),
        }
    }
}

impl fmt::Display for RouteDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// The compiled route table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteManifest {
    /// Sorted by priority, most specific first
    pub routes: Vec<RouteEntry>,
    /// Directory key → absolute path
    pub layouts: BTreeMap<String, String>,
    pub middleware: BTreeMap<String, String>,
    pub error_boundaries: BTreeMap<String, String>,
    pub not_found_boundaries: BTreeMap<String, String>,
    pub loading: BTreeMap<String, String>,
    /// Any entry here means the manifest must not be dispatched
    pub errors: Vec<RouteDiagnostic>,
    pub warnings: Vec<RouteDiagnostic>,
    pub generated_at: DateTime<Utc>,
    pub root_dir: String,
}

impl RouteManifest {
    /// Whether the manifest is safe to hand to a dispatcher
    pub fn is_dispatchable(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn route_by_pattern(&self, pattern: &str) -> Option<&RouteEntry> {
        self.routes.iter().find(|r| r.url_pattern == pattern)
    }

    /// Entries built from one route file (empty when the file was rejected)
    pub fn routes_for_file(&self, relative_path: &str) -> Vec<&RouteEntry> {
        self.routes.iter().filter(|r| r.file_path == relative_path).collect()
    }

    pub fn errors_of(&self, kind: DiagnosticKind) -> impl Iterator<Item = &RouteDiagnostic> {
        self.errors.iter().filter(move |d| d.kind == kind)
    }

    pub fn warnings_of(&self, kind: DiagnosticKind) -> impl Iterator<Item = &RouteDiagnostic> {
        self.warnings.iter().filter(move |d| d.kind == kind)
    }

    /// Same routes and diagnostics, ignoring provenance
    pub fn content_eq(&self, other: &RouteManifest) -> bool {
        self.routes == other.routes && self.errors == other.errors && self.warnings == other.warnings
    }

    /// # Errors
    ///
    /// Only if serialization itself fails, which plain data does not do.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// Builds [`RouteManifest`]s from scan results
///
/// # Examples
///
/// ```
/// use rhtmx_manifest::scanner::{MemorySource, Scanner};
/// use rhtmx_manifest::{ManifestBuilder, ScanOptions};
///
/// let source = MemorySource::new([
///     "layout.tsx",
///     "users/new/page.tsx",
///     "users/[id]/page.tsx",
/// ]);
/// let scan = Scanner::with_source(ScanOptions::default(), source).unwrap().scan("/app");
/// let manifest = ManifestBuilder::new().build(&scan, "/app");
///
/// assert!(manifest.is_dispatchable());
/// assert_eq!(manifest.routes[0].url_pattern, "/users/new");
/// assert_eq!(manifest.routes[1].url_pattern, "/users/:id");
/// assert_eq!(manifest.routes[1].layouts, vec!["/app/layout.tsx".to_string()]);
/// ```
#[derive(Debug, Clone)]
pub struct ManifestBuilder {
    max_depth_warning: usize,
}

impl Default for ManifestBuilder {
    fn default() -> Self {
        Self {
            max_depth_warning: DEFAULT_MAX_DEPTH_WARNING,
        }
    }
}

impl ManifestBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_depth_warning(mut self, max_depth: usize) -> Self {
        self.max_depth_warning = max_depth;
        self
    }

    pub fn build(&self, scan: &ScanResult, root_dir: impl AsRef<Path>) -> RouteManifest {
        let resolver = BoundaryResolver::from_scan(scan);
        let mut errors = Vec::new();
        let mut warnings = Vec::new();

        for index in resolver.indexes() {
            for (dir, files) in index.duplicates() {
                errors.push(RouteDiagnostic::duplicate_boundary(index.role(), dir, files));
            }
        }

        let mut route_files: Vec<&ScannedFile> = scan.routes.iter().filter(|f| f.role.is_route()).collect();
        route_files.sort_by(|a, b| a.relative_path.cmp(&b.relative_path));

        let mut routes = Vec::with_capacity(route_files.len());
        for file in &route_files {
            match parse_file_path(&file.relative_path) {
                Ok(parsed) => {
                    let entry = route_entry(file, parsed, &resolver);
                    if entry.segments.len() > self.max_depth_warning {
                        warnings.push(RouteDiagnostic::deep_nesting(&entry, self.max_depth_warning));
                    }
                    routes.push(entry);
                }
                Err(err) => errors.push(RouteDiagnostic::from_segment_error(&file.relative_path, &err)),
            }
        }

        errors.extend(detect_conflicts(&routes));
        routes.sort_by(compare_entries);

        let route_dirs: Vec<String> = routes.iter().map(|r| dir_key(&r.file_path)).collect();
        for index in resolver.indexes() {
            warnings.extend(unused_boundaries(index, &route_dirs));
        }

        for diagnostic in &errors {
            warn!("Route manifest error: {}", diagnostic);
        }

        let root_dir = display_path(root_dir.as_ref());
        info!(
            routes = routes.len(),
            errors = errors.len(),
            warnings = warnings.len(),
            "Built route manifest for {}",
            root_dir
        );

        RouteManifest {
            routes,
            layouts: resolver.layouts.to_path_map(),
            middleware: resolver.middleware.to_path_map(),
            error_boundaries: resolver.errors.to_path_map(),
            not_found_boundaries: resolver.not_found.to_path_map(),
            loading: resolver.loading.to_path_map(),
            errors,
            warnings,
            generated_at: Utc::now(),
            root_dir,
        }
    }
}

/// Builds a manifest with default settings
pub fn build_manifest(scan: &ScanResult, root_dir: impl AsRef<Path>) -> RouteManifest {
    ManifestBuilder::new().build(scan, root_dir)
}

fn route_entry(file: &ScannedFile, parsed: ParsedPath, resolver: &BoundaryResolver<'_>) -> RouteEntry {
    let boundaries = resolver.resolve(&file.relative_path);
    let priority = parsed.priority();
    let url_pattern = parsed.pattern();

    RouteEntry {
        url_pattern,
        file_path: file.relative_path.clone(),
        absolute_path: display_path(&file.absolute_path),
        role: file.role,
        segments: parsed.segments,
        groups: parsed.groups,
        methods: HttpMethod::coverage(file.role),
        layouts: boundaries.layouts,
        middleware: boundaries.middleware,
        error_boundary: boundaries.error,
        not_found_boundary: boundaries.not_found,
        loading_boundary: boundaries.loading,
        priority,
    }
}

/// Priority, then segment kinds position by position, then pattern, then path
fn compare_entries(a: &RouteEntry, b: &RouteEntry) -> Ordering {
    a.priority
        .cmp(&b.priority)
        .then_with(|| a.segment_kinds().cmp(&b.segment_kinds()))
        .then_with(|| a.url_pattern.cmp(&b.url_pattern))
        .then_with(|| a.file_path.cmp(&b.file_path))
}

/// Groups routes that answer the same URLs on a shared method
///
/// Identical shapes conflict. An optional catch-all also conflicts with the
/// route at its zero-segment form: `/docs/*slug?` already answers `/docs`.
fn detect_conflicts(routes: &[RouteEntry]) -> Vec<RouteDiagnostic> {
    let mut by_shape: BTreeMap<String, Vec<&RouteEntry>> = BTreeMap::new();
    for route in routes {
        by_shape.entry(route.shape()).or_default().push(route);
    }

    let mut conflicts = Vec::new();

    for group in by_shape.values().filter(|group| group.len() > 1) {
        let clashing: Vec<&RouteEntry> = group
            .iter()
            .copied()
            .filter(|route| {
                group
                    .iter()
                    .any(|other| !std::ptr::eq(*route, *other) && route.overlaps_methods(other))
            })
            .collect();
        if clashing.len() > 1 {
            conflicts.push(RouteDiagnostic::conflict(&clashing));
        }
    }

    for route in routes {
        let Some((RouteSegment::OptionalCatchAll { .. }, parent)) = route.segments.split_last() else {
            continue;
        };
        if let Some(others) = by_shape.get(&pattern_shape(parent)) {
            for other in others.iter().filter(|other| route.overlaps_methods(other)) {
                conflicts.push(RouteDiagnostic::conflict(&[route, *other]));
            }
        }
    }

    conflicts
}

fn unused_boundaries(index: &BoundaryIndex<'_>, route_dirs: &[String]) -> Vec<RouteDiagnostic> {
    index
        .entries()
        .iter()
        .filter(|(dir, _)| !route_dirs.iter().any(|route_dir| is_ancestor_key(dir, route_dir)))
        .map(|(_, file)| RouteDiagnostic::unused_boundary(index.role(), file))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scanner::{MemorySource, Scanner};
    use crate::ScanOptions;

    fn build(files: &[&str]) -> RouteManifest {
        let scan = Scanner::with_source(ScanOptions::default(), MemorySource::new(files.iter().copied()))
            .unwrap()
            .scan("/app");
        build_manifest(&scan, "/app")
    }

    fn patterns(manifest: &RouteManifest) -> Vec<&str> {
        manifest.routes.iter().map(|r| r.url_pattern.as_str()).collect()
    }

    #[test]
    fn test_empty_scan() {
        let manifest = build(&[]);
        assert!(manifest.routes.is_empty());
        assert!(manifest.layouts.is_empty());
        assert!(manifest.errors.is_empty());
        assert!(manifest.warnings.is_empty());
        assert!(manifest.is_dispatchable());
        assert_eq!(manifest.root_dir, "/app");
    }

    #[test]
    fn test_priority_order_static_dynamic_catch_all() {
        let manifest = build(&[
            "users/[...rest]/page.tsx",
            "users/[id]/page.tsx",
            "users/new/page.tsx",
        ]);
        assert_eq!(patterns(&manifest), vec!["/users/new", "/users/:id", "/users/*rest"]);
        assert!(manifest.routes[0].priority < manifest.routes[1].priority);
        assert!(manifest.routes[1].priority < manifest.routes[2].priority);
    }

    #[test]
    fn test_conflict_same_shape() {
        let manifest = build(&["products/[id]/page.tsx", "products/[slug]/page.tsx"]);

        assert_eq!(manifest.errors.len(), 1);
        let error = &manifest.errors[0];
        assert_eq!(error.kind, DiagnosticKind::PatternConflict);
        assert_eq!(
            error.files,
            vec!["products/[id]/page.tsx".to_string(), "products/[slug]/page.tsx".to_string()]
        );
        assert_eq!(manifest.routes.len(), 2);
        assert!(!manifest.is_dispatchable());
    }

    #[test]
    fn test_conflict_page_and_index_alias() {
        let manifest = build(&["about/page.tsx", "about/index.tsx"]);
        assert_eq!(manifest.errors_of(DiagnosticKind::PatternConflict).count(), 1);
    }

    #[test]
    fn test_conflict_page_and_api_route() {
        let manifest = build(&["api/page.tsx", "api/route.ts"]);
        assert_eq!(manifest.errors_of(DiagnosticKind::PatternConflict).count(), 1);
    }

    #[test]
    fn test_conflict_across_groups() {
        let manifest = build(&["(shop)/cart/page.tsx", "(checkout)/cart/page.tsx"]);
        assert_eq!(manifest.errors.len(), 1);
        assert_eq!(manifest.errors[0].pattern.as_deref(), Some("/cart"));
    }

    #[test]
    fn test_conflict_optional_catch_all_zero_form() {
        let manifest = build(&["docs/page.tsx", "docs/[[...slug]]/page.tsx"]);
        let conflicts: Vec<_> = manifest.errors_of(DiagnosticKind::PatternConflict).collect();
        assert_eq!(conflicts.len(), 1);
        assert_eq!(conflicts[0].files.len(), 2);
    }

    #[test]
    fn test_distinct_shapes_do_not_conflict() {
        let manifest = build(&["docs/[id]/page.tsx", "docs/[...slug]/page.tsx", "docs/page.tsx"]);
        assert!(manifest.errors.is_empty());
    }

    #[test]
    fn test_invalid_segment_excluded() {
        let manifest = build(&["docs/[...slug]/edit/page.tsx", "blog/[id/page.tsx", "ok/page.tsx"]);

        assert_eq!(patterns(&manifest), vec!["/ok"]);
        assert_eq!(manifest.errors.len(), 2);
        assert_eq!(manifest.errors[0].kind, DiagnosticKind::InvalidSegment);
        assert_eq!(manifest.errors[0].files, vec!["blog/[id/page.tsx".to_string()]);
        assert_eq!(manifest.errors[1].kind, DiagnosticKind::CatchAllNotLast);
    }

    #[test]
    fn test_duplicate_param_reported() {
        let manifest = build(&["[id]/posts/[id]/page.tsx"]);
        assert_eq!(manifest.errors[0].kind, DiagnosticKind::DuplicateParam);
        assert!(manifest.routes.is_empty());
    }

    #[test]
    fn test_duplicate_boundary_reported() {
        let manifest = build(&["layout.tsx", "layout.jsx", "page.tsx"]);
        let duplicates: Vec<_> = manifest.errors_of(DiagnosticKind::DuplicateBoundary).collect();
        assert_eq!(duplicates.len(), 1);
        assert_eq!(duplicates[0].files, vec!["layout.jsx".to_string(), "layout.tsx".to_string()]);
        assert_eq!(manifest.routes[0].layouts, vec!["/app/layout.jsx".to_string()]);
    }

    #[test]
    fn test_unused_boundary_warning() {
        let manifest = build(&["page.tsx", "admin/layout.tsx", "(auth)/error.tsx"]);
        let unused: Vec<_> = manifest.warnings_of(DiagnosticKind::UnusedBoundary).collect();
        assert_eq!(unused.len(), 2);
        assert!(manifest.is_dispatchable());
    }

    #[test]
    fn test_boundary_over_rejected_routes_is_unused() {
        let manifest = build(&["page.tsx", "docs/layout.tsx", "docs/[...slug]/edit/page.tsx"]);

        let unused: Vec<_> = manifest.warnings_of(DiagnosticKind::UnusedBoundary).collect();
        assert_eq!(unused.len(), 1);
        assert_eq!(unused[0].files, vec!["docs/layout.tsx".to_string()]);
    }

    #[test]
    fn test_ambiguous_static_names_rejected() {
        let manifest = build(&["users/[id]/page.tsx", "users/:id/page.tsx", "files/*/page.tsx"]);

        assert_eq!(patterns(&manifest), vec!["/users/:id"]);
        assert_eq!(manifest.routes[0].file_path, "users/[id]/page.tsx");
        assert_eq!(manifest.errors.len(), 2);
        assert!(manifest.errors.iter().all(|e| e.kind == DiagnosticKind::InvalidSegment));
    }

    #[test]
    fn test_deep_nesting_warning() {
        let scan = Scanner::with_source(
            ScanOptions::default(),
            MemorySource::new(["a/b/c/page.tsx", "a/page.tsx"]),
        )
        .unwrap()
        .scan("/app");
        let manifest = ManifestBuilder::new().with_max_depth_warning(2).build(&scan, "/app");

        let deep: Vec<_> = manifest.warnings_of(DiagnosticKind::DeepNesting).collect();
        assert_eq!(deep.len(), 1);
        assert_eq!(deep[0].pattern.as_deref(), Some("/a/b/c"));
    }

    #[test]
    fn test_entry_fields() {
        let manifest = build(&[
            "layout.tsx",
            "middleware.ts",
            "(shop)/layout.tsx",
            "(shop)/error.tsx",
            "not-found.tsx",
            "(shop)/products/[id]/loading.tsx",
            "(shop)/products/[id]/page.tsx",
        ]);
        let entry = manifest.route_by_pattern("/products/:id").unwrap();

        assert_eq!(entry.file_path, "(shop)/products/[id]/page.tsx");
        assert_eq!(entry.absolute_path, "/app/(shop)/products/[id]/page.tsx");
        assert_eq!(entry.role, RouteRole::Page);
        assert_eq!(entry.groups, vec!["shop".to_string()]);
        assert_eq!(entry.params(), vec!["id"]);
        assert_eq!(entry.methods, vec![HttpMethod::Get, HttpMethod::Head]);
        assert_eq!(
            entry.layouts,
            vec!["/app/layout.tsx".to_string(), "/app/(shop)/layout.tsx".to_string()]
        );
        assert_eq!(entry.middleware, vec!["/app/middleware.ts".to_string()]);
        assert_eq!(entry.error_boundary.as_deref(), Some("/app/(shop)/error.tsx"));
        assert_eq!(entry.not_found_boundary.as_deref(), Some("/app/not-found.tsx"));
        assert_eq!(
            entry.loading_boundary.as_deref(),
            Some("/app/(shop)/products/[id]/loading.tsx")
        );

        assert_eq!(manifest.layouts.len(), 2);
        assert_eq!(manifest.layouts["/(shop)"], "/app/(shop)/layout.tsx");
        assert_eq!(manifest.error_boundaries.len(), 1);
        assert_eq!(manifest.loading.len(), 1);
    }

    #[test]
    fn test_api_route_methods() {
        let manifest = build(&["api/users/route.ts"]);
        assert_eq!(manifest.routes[0].role, RouteRole::ApiRoute);
        assert_eq!(manifest.routes[0].methods, HttpMethod::ALL.to_vec());
    }

    #[test]
    fn test_json_uses_camel_case() {
        let manifest = build(&["blog/[slug]/page.tsx"]);
        let json: serde_json::Value = serde_json::from_str(&manifest.to_json().unwrap()).unwrap();

        let route = &json["routes"][0];
        assert_eq!(route["urlPattern"], "/blog/:slug");
        assert_eq!(route["segments"][1]["type"], "dynamic");
        assert_eq!(route["segments"][1]["name"], "slug");
        assert_eq!(route["methods"][0], "GET");
        assert!(json["notFoundBoundaries"].is_object());
        assert!(json["generatedAt"].is_string());
    }
}

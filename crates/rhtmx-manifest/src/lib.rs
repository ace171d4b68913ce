//! # RHTMX Manifest
//!
//! Compiles a directory of convention-named route files into a routing
//! manifest: one entry per page or API route, with its dispatch pattern,
//! typed segments, applicable boundaries and a priority for deterministic
//! dispatch order.
//!
//! ## File Conventions
//!
//! - `page.*` / `index.*` render a page, `route.*` handles API requests
//! - `layout.*` and `middleware.*` wrap every route below them
//! - `error.*`, `not-found.*` and `loading.*` apply from the closest directory up
//! - `[id]` is a dynamic segment, `[...slug]` a catch-all,
//!   `[[...slug]]` an optional catch-all
//! - `(group)` directories organize routes without adding a URL segment, and
//!   boundaries inside a group never reach routes outside it
//!
//! ## Pipeline
//!
//! 1. [`scanner`] walks the tree and [`classify`] assigns each file a role
//! 2. [`route`] parses directory names into segments and scores priorities
//! 3. [`resolver`] attaches layouts, middleware and boundaries to each route
//! 4. [`manifest`] sorts routes, detects conflicts, and records diagnostics
//!
//! Data problems in the tree never fail compilation. They are reported in
//! [`RouteManifest::errors`] (do not dispatch) or [`RouteManifest::warnings`].
//! Only an invalid [`ScanOptions`] returns `Err`.
//!
//! ## Example
//!
//! ```
//! use rhtmx_manifest::scanner::{MemorySource, Scanner};
//! use rhtmx_manifest::{build_manifest, ScanOptions};
//!
//! let source = MemorySource::new([
//!     "layout.tsx",
//!     "(marketing)/about/page.tsx",
//!     "blog/[slug]/page.tsx",
//!     "docs/[[...path]]/page.tsx",
//!     "api/health/route.ts",
//! ]);
//! let scan = Scanner::with_source(ScanOptions::default(), source)
//!     .unwrap()
//!     .scan("/site/app");
//! let manifest = build_manifest(&scan, "/site/app");
//!
//! assert!(manifest.is_dispatchable());
//! let patterns: Vec<&str> = manifest.routes.iter().map(|r| r.url_pattern.as_str()).collect();
//! assert_eq!(patterns, vec!["/api/health", "/about", "/blog/:slug", "/docs/*path?"]);
//! ```

use std::path::Path;

// ============================================================================
// Module Declarations
// ============================================================================

pub mod cache;
pub mod classify;
pub mod config;
pub mod error;
pub mod manifest;
pub mod path;
pub mod resolver;
pub mod route;
pub mod scanner;

pub use cache::ManifestCache;
pub use classify::{classify, classify_with, RouteRole, SUPPORTED_EXTENSIONS};
pub use config::{Config, RoutingConfig};
pub use error::{ManifestError, SegmentError};
pub use manifest::{
    build_manifest, DiagnosticKind, HttpMethod, ManifestBuilder, RouteDiagnostic, RouteEntry,
    RouteManifest,
};
pub use resolver::{BoundaryResolver, ResolvedBoundaries};
pub use route::{parse_path, parse_pattern, ParsedPath, RouteSegment, SegmentKind};
pub use scanner::{scan, FileSource, FsSource, ScanOptions, ScanResult, ScannedFile, Scanner};

/// Scans `root_dir` and builds its manifest with default builder settings
///
/// # Errors
///
/// Returns [`ManifestError`] only when `options` are invalid. A missing root
/// compiles to an empty manifest.
pub fn compile(root_dir: impl AsRef<Path>, options: &ScanOptions) -> Result<RouteManifest, ManifestError> {
    let root_dir = root_dir.as_ref();
    let scan = scan(root_dir, options)?;
    Ok(build_manifest(&scan, root_dir))
}

/// Like [`compile`], with scan options and builder settings from a [`Config`]
///
/// `project_root` is joined with the configured routes directory.
pub fn compile_with_config(
    project_root: impl AsRef<Path>,
    config: &Config,
) -> Result<RouteManifest, ManifestError> {
    let root_dir = config.routing.routes_path(project_root);
    let scan = scan(&root_dir, &config.routing.to_scan_options())?;
    Ok(config.routing.to_builder().build(&scan, &root_dir))
}

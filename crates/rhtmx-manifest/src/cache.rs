//! Caller-owned manifest cache
//!
//! Rescans on every lookup but only rebuilds the manifest when the set of
//! recognized files changed. Any change rebuilds from scratch.

use std::path::{Path, PathBuf};
use tracing::debug;

use crate::classify::RouteRole;
use crate::error::ManifestError;
use crate::manifest::{ManifestBuilder, RouteManifest};
use crate::scanner::{FileSource, FsSource, ScanOptions, ScanResult, Scanner};

/// Identity of a scan: the root plus every recognized file and its role
#[derive(Debug, Clone, PartialEq, Eq)]
struct Fingerprint {
    root: PathBuf,
    files: Vec<(String, RouteRole)>,
}

impl Fingerprint {
    fn of(root: &Path, scan: &ScanResult) -> Self {
        let mut files: Vec<(String, RouteRole)> = scan
            .iter()
            .map(|file| (file.relative_path.clone(), file.role))
            .collect();
        files.sort_by(|a, b| a.0.cmp(&b.0));
        Self {
            root: root.to_path_buf(),
            files,
        }
    }
}

#[derive(Debug)]
struct CachedManifest {
    fingerprint: Fingerprint,
    manifest: RouteManifest,
}

/// Holds the last manifest built for a route tree
///
/// # Examples
///
/// ```
/// use rhtmx_manifest::scanner::MemorySource;
/// use rhtmx_manifest::{ManifestCache, ScanOptions};
///
/// let source = MemorySource::new(["page.tsx", "about/page.tsx"]);
/// let mut cache = ManifestCache::with_source(ScanOptions::default(), source).unwrap();
///
/// let first = cache.get_or_build("/app").generated_at;
/// let second = cache.get_or_build("/app").generated_at;
/// assert_eq!(first, second);
/// ```
pub struct ManifestCache<S = FsSource> {
    scanner: Scanner<S>,
    builder: ManifestBuilder,
    cached: Option<CachedManifest>,
}

impl ManifestCache<FsSource> {
    /// # Errors
    ///
    /// Returns [`ManifestError`] when `options` fail validation.
    pub fn new(options: ScanOptions) -> Result<Self, ManifestError> {
        Self::with_source(options, FsSource)
    }
}

impl<S: FileSource> ManifestCache<S> {
    pub fn with_source(options: ScanOptions, source: S) -> Result<Self, ManifestError> {
        Ok(Self {
            scanner: Scanner::with_source(options, source)?,
            builder: ManifestBuilder::new(),
            cached: None,
        })
    }

    pub fn with_builder(mut self, builder: ManifestBuilder) -> Self {
        self.builder = builder;
        self.cached = None;
        self
    }

    /// Manifest for `root`, rebuilt only if the scanned files changed
    pub fn get_or_build(&mut self, root: impl AsRef<Path>) -> &RouteManifest {
        let root = root.as_ref();
        let scan = self.scanner.scan(root);
        let fingerprint = Fingerprint::of(root, &scan);

        match self.cached.take() {
            Some(cached) if cached.fingerprint == fingerprint => {
                debug!("Route manifest for {:?} unchanged, reusing", root);
                &self.cached.insert(cached).manifest
            }
            _ => {
                debug!("Route tree {:?} changed, rebuilding manifest", root);
                let manifest = self.builder.build(&scan, root);
                &self
                    .cached
                    .insert(CachedManifest {
                        fingerprint,
                        manifest,
                    })
                    .manifest
            }
        }
    }

    /// Last manifest built, without rescanning
    pub fn manifest(&self) -> Option<&RouteManifest> {
        self.cached.as_ref().map(|cached| &cached.manifest)
    }

    pub fn is_cached(&self) -> bool {
        self.cached.is_some()
    }

    /// Drops the cached manifest so the next lookup rebuilds
    pub fn invalidate(&mut self) {
        self.cached = None;
    }
}

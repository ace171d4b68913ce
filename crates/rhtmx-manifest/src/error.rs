//! Error types for route compilation
//!
//! Two families live here:
//! - [`ManifestError`]: the caller broke the contract (bad options). These are
//!   the only failures the compiler returns as `Err`.
//! - [`SegmentError`]: a directory name could not be parsed into a route
//!   segment. These never escape the builder; they are folded into
//!   `RouteManifest::errors`.

/// Precondition failures raised before any file is looked at
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ManifestError {
    /// `ScanOptions::extensions` was empty
    #[error("scan options must list at least one file extension")]
    EmptyExtensions,

    /// An extension outside the supported allow-list was requested
    #[error("unsupported route file extension: .{0}")]
    UnsupportedExtension(String),
}

/// Syntax errors in a single route path
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SegmentError {
    /// A directory name uses bracket or group syntax incorrectly
    #[error("malformed route segment `{component}`: {reason}")]
    Malformed { component: String, reason: String },

    /// A catch-all was followed by more path components
    #[error("catch-all segment `{component}` must be the last segment, found `{next}` after it")]
    CatchAllNotLast { component: String, next: String },

    /// The same parameter name appears twice in one route
    #[error("parameter `{name}` is used more than once in the same route")]
    DuplicateParam { name: String },
}

impl SegmentError {
    pub(crate) fn malformed(component: &str, reason: impl Into<String>) -> Self {
        SegmentError::Malformed {
            component: component.to_string(),
            reason: reason.into(),
        }
    }
}

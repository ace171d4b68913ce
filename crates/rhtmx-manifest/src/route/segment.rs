/// Route segment tokenizer
///
/// Turns one directory name into a typed [`PathComponent`]: either a route
/// group marker or a [`RouteSegment`]. All functions are **pure**.
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::SegmentError;

/// One URL-bearing path component of a route
///
/// # Examples
///
/// ```
/// use rhtmx_manifest::route::segment::{classify_component, PathComponent};
/// use rhtmx_manifest::RouteSegment;
///
/// assert_eq!(
///     classify_component("[id]").unwrap(),
///     PathComponent::Segment(RouteSegment::Dynamic { name: "id".into() })
/// );
/// assert_eq!(
///     classify_component("(shop)").unwrap(),
///     PathComponent::Group("shop".into())
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum RouteSegment {
    /// Literal text: `about`
    Static { value: String },
    /// Single-segment parameter: `[id]`
    Dynamic { name: String },
    /// One or more trailing segments: `[...slug]`
    CatchAll { name: String },
    /// Zero or more trailing segments: `[[...slug]]`
    OptionalCatchAll { name: String },
}

/// Segment kinds ordered from most to least specific
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SegmentKind {
    Static,
    Dynamic,
    CatchAll,
    OptionalCatchAll,
}

impl RouteSegment {
    pub fn kind(&self) -> SegmentKind {
        match self {
            RouteSegment::Static { .. } => SegmentKind::Static,
            RouteSegment::Dynamic { .. } => SegmentKind::Dynamic,
            RouteSegment::CatchAll { .. } => SegmentKind::CatchAll,
            RouteSegment::OptionalCatchAll { .. } => SegmentKind::OptionalCatchAll,
        }
    }

    /// Parameter name, `None` for static segments
    pub fn param_name(&self) -> Option<&str> {
        match self {
            RouteSegment::Static { .. } => None,
            RouteSegment::Dynamic { name }
            | RouteSegment::CatchAll { name }
            | RouteSegment::OptionalCatchAll { name } => Some(name),
        }
    }

    /// Whether this segment swallows the rest of the path
    pub fn is_catch_all(&self) -> bool {
        matches!(
            self,
            RouteSegment::CatchAll { .. } | RouteSegment::OptionalCatchAll { .. }
        )
    }

    /// Dispatch-pattern text with the parameter name erased
    ///
    /// Two routes whose segments share a shape match exactly the same URLs.
    pub fn shape(&self) -> &str {
        match self {
            RouteSegment::Static { value } => value,
            RouteSegment::Dynamic { .. } => ":",
            RouteSegment::CatchAll { .. } => "*",
            RouteSegment::OptionalCatchAll { .. } => "*?",
        }
    }
}

/// Renders the dispatch-pattern form: `about`, `:id`, `*slug`, `*slug?`
impl fmt::Display for RouteSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RouteSegment::Static { value } => f.write_str(value),
            RouteSegment::Dynamic { name } => write!(f, ":{}", name),
            RouteSegment::CatchAll { name } => write!(f, "*{}", name),
            RouteSegment::OptionalCatchAll { name } => write!(f, "*{}?", name),
        }
    }
}

/// A classified directory name
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathComponent {
    /// `(name)`: scopes boundaries, adds nothing to the URL
    Group(String),
    Segment(RouteSegment),
}

/// Classifies one directory name
///
/// # Parsing Rules (evaluated in order)
///
/// 1. **Group**: `(name)`
/// 2. **Optional catch-all**: `[[...name]]`
/// 3. **Catch-all**: `[...name]`
/// 4. **Dynamic**: `[name]`
/// 5. **Static**: anything without brackets
///
/// Parameter names may contain ASCII letters, digits, `_` and `-`.
///
/// # Errors
///
/// [`SegmentError::Malformed`] for unbalanced brackets or parentheses, empty
/// names, `[[name]]` without `...`, and stray brackets in static text.
pub fn classify_component(component: &str) -> Result<PathComponent, SegmentError> {
    if let Some(rest) = component.strip_prefix('(') {
        return parse_group(component, rest).map(PathComponent::Group);
    }

    if let Some(rest) = component.strip_prefix("[[") {
        let inner = rest
            .strip_suffix("]]")
            .ok_or_else(|| SegmentError::malformed(component, "unbalanced brackets"))?;
        let name = inner.strip_prefix("...").ok_or_else(|| {
            SegmentError::malformed(
                component,
                "double brackets are only valid for optional catch-all segments like [[...name]]",
            )
        })?;
        let name = validate_param_name(component, name)?;
        return Ok(PathComponent::Segment(RouteSegment::OptionalCatchAll { name }));
    }

    if let Some(rest) = component.strip_prefix('[') {
        let inner = rest
            .strip_suffix(']')
            .ok_or_else(|| SegmentError::malformed(component, "unbalanced brackets"))?;
        let segment = match inner.strip_prefix("...") {
            Some(name) => RouteSegment::CatchAll {
                name: validate_param_name(component, name)?,
            },
            None => RouteSegment::Dynamic {
                name: validate_param_name(component, inner)?,
            },
        };
        return Ok(PathComponent::Segment(segment));
    }

    if component.contains(['[', ']']) {
        return Err(SegmentError::malformed(
            component,
            "brackets must wrap the whole directory name",
        ));
    }

    if component.starts_with([':', '*']) {
        return Err(SegmentError::malformed(
            component,
            "static segments must not start with `:` or `*`",
        ));
    }

    Ok(PathComponent::Segment(RouteSegment::Static {
        value: component.to_string(),
    }))
}

fn parse_group(component: &str, rest: &str) -> Result<String, SegmentError> {
    let name = rest
        .strip_suffix(')')
        .ok_or_else(|| SegmentError::malformed(component, "unclosed route group"))?;

    if name.is_empty() {
        return Err(SegmentError::malformed(component, "empty route group name"));
    }
    if name.contains(['(', ')']) {
        return Err(SegmentError::malformed(
            component,
            "route groups take a single pair of parentheses",
        ));
    }

    Ok(name.to_string())
}

pub(crate) fn validate_param_name(component: &str, name: &str) -> Result<String, SegmentError> {
    if name.is_empty() {
        return Err(SegmentError::malformed(component, "empty parameter name"));
    }

    match name
        .chars()
        .find(|c| !(c.is_ascii_alphanumeric() || *c == '_' || *c == '-'))
    {
        Some(bad) => Err(SegmentError::malformed(
            component,
            format!("invalid character `{}` in parameter name", bad),
        )),
        None => Ok(name.to_string()),
    }
}

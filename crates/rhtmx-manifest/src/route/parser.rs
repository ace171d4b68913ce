/// Route path parsing and priority calculation
///
/// Pure parsers that turn a directory chain into typed segments, render the
/// dispatch pattern, and score routes for deterministic ordering.
/// All functions are **pure**: same input → same output, no side effects.
use super::segment::{classify_component, validate_param_name, PathComponent, RouteSegment, SegmentKind};
use crate::error::SegmentError;
use crate::path::{dir_components, normalize_relative};

/// Deepest route depth that still earns a depth bonus in [`calculate_priority`]
pub const MAX_DEPTH: usize = 64;

/// Result of parsing one route directory chain
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ParsedPath {
    /// URL-bearing segments, root first
    pub segments: Vec<RouteSegment>,
    /// Route groups crossed, outermost first
    pub groups: Vec<String>,
}

impl ParsedPath {
    /// Dispatch pattern like `/users/:id`
    pub fn pattern(&self) -> String {
        render_pattern(&self.segments)
    }

    /// Dispatch pattern with parameter names erased
    pub fn shape(&self) -> String {
        pattern_shape(&self.segments)
    }

    /// Parameter names in path order
    pub fn params(&self) -> Vec<&str> {
        self.segments.iter().filter_map(RouteSegment::param_name).collect()
    }

    /// Least specific segment kind in the route (`Static` for `/`)
    pub fn specificity(&self) -> SegmentKind {
        self.segments
            .iter()
            .map(RouteSegment::kind)
            .max()
            .unwrap_or(SegmentKind::Static)
    }

    pub fn dynamic_count(&self) -> usize {
        self.segments.iter().filter(|s| s.param_name().is_some()).count()
    }

    pub fn priority(&self) -> usize {
        calculate_priority(self.specificity(), self.segments.len(), self.dynamic_count())
    }
}

/// Fold accumulator for [`parse_path`]
///
/// Each step consumes the state and returns the next one, or the first error.
#[derive(Default)]
struct ParseState {
    parsed: ParsedPath,
    /// Directory name of a catch-all already seen
    catch_all: Option<String>,
}

impl ParseState {
    fn with_component(mut self, component: &str) -> Result<Self, SegmentError> {
        match classify_component(component)? {
            PathComponent::Group(name) => {
                self.parsed.groups.push(name);
                Ok(self)
            }
            PathComponent::Segment(segment) => {
                if let Some(catch_all) = self.catch_all.take() {
                    return Err(SegmentError::CatchAllNotLast {
                        component: catch_all,
                        next: component.to_string(),
                    });
                }
                self.with_segment(segment, component)
            }
        }
    }

    fn with_segment(mut self, segment: RouteSegment, component: &str) -> Result<Self, SegmentError> {
        if let Some(name) = segment.param_name() {
            if self.parsed.params().contains(&name) {
                return Err(SegmentError::DuplicateParam {
                    name: name.to_string(),
                });
            }
        }

        if segment.is_catch_all() {
            self.catch_all = Some(component.to_string());
        }

        self.parsed.segments.push(segment);
        Ok(self)
    }
}

/// Parses a directory chain into route segments and group names
///
/// The path is relative to the route-source root and names directories only;
/// use [`parse_file_path`] for a path that ends in a file name.
/// Backslashes and empty components are tolerated.
///
/// # Examples
///
/// ```
/// use rhtmx_manifest::route::parser::parse_path;
///
/// let parsed = parse_path("(shop)/products/[id]").unwrap();
/// assert_eq!(parsed.pattern(), "/products/:id");
/// assert_eq!(parsed.groups, vec!["shop".to_string()]);
///
/// let parsed = parse_path("docs/[[...slug]]").unwrap();
/// assert_eq!(parsed.pattern(), "/docs/*slug?");
///
/// assert!(parse_path("[...slug]/edit").is_err());
/// ```
///
/// # Errors
///
/// - [`SegmentError::Malformed`] for invalid bracket or group syntax
/// - [`SegmentError::CatchAllNotLast`] when a catch-all has segments after it
/// - [`SegmentError::DuplicateParam`] when a parameter name repeats
pub fn parse_path(relative_dir_path: &str) -> Result<ParsedPath, SegmentError> {
    normalize_relative(relative_dir_path)
        .split('/')
        .filter(|c| !c.is_empty())
        .try_fold(ParseState::default(), ParseState::with_component)
        .map(|state| state.parsed)
}

/// Parses the directory chain of a route file, ignoring the file name
///
/// ```
/// use rhtmx_manifest::route::parser::parse_file_path;
///
/// let parsed = parse_file_path("blog/[slug]/page.tsx").unwrap();
/// assert_eq!(parsed.pattern(), "/blog/:slug");
/// ```
pub fn parse_file_path(relative_file_path: &str) -> Result<ParsedPath, SegmentError> {
    let normalized = normalize_relative(relative_file_path);
    dir_components(&normalized)
        .into_iter()
        .try_fold(ParseState::default(), ParseState::with_component)
        .map(|state| state.parsed)
}

/// Renders segments as a dispatch pattern
///
/// Static → literal, dynamic → `:name`, catch-all → `*name`,
/// optional catch-all → `*name?`. No segments renders as `/`.
pub fn render_pattern(segments: &[RouteSegment]) -> String {
    if segments.is_empty() {
        return "/".to_string();
    }
    segments.iter().fold(String::new(), |mut pattern, segment| {
        pattern.push('/');
        pattern.push_str(&segment.to_string());
        pattern
    })
}

/// Renders segments with parameter names erased: `/users/:` , `/docs/*`
pub fn pattern_shape(segments: &[RouteSegment]) -> String {
    if segments.is_empty() {
        return "/".to_string();
    }
    segments.iter().fold(String::new(), |mut shape, segment| {
        shape.push('/');
        shape.push_str(segment.shape());
        shape
    })
}

/// Parses a rendered dispatch pattern back into segments
///
/// Inverse of [`render_pattern`] for every pattern it produces.
///
/// # Examples
///
/// ```
/// use rhtmx_manifest::route::parser::{parse_pattern, render_pattern};
///
/// let segments = parse_pattern("/docs/:version/*slug?").unwrap();
/// assert_eq!(render_pattern(&segments), "/docs/:version/*slug?");
/// ```
pub fn parse_pattern(pattern: &str) -> Result<Vec<RouteSegment>, SegmentError> {
    let parts: Vec<&str> = pattern.split('/').filter(|p| !p.is_empty()).collect();

    parts
        .iter()
        .enumerate()
        .map(|(idx, part)| {
            let segment = if let Some(rest) = part.strip_prefix('*') {
                match rest.strip_suffix('?') {
                    Some(name) => RouteSegment::OptionalCatchAll {
                        name: validate_param_name(part, name)?,
                    },
                    None => RouteSegment::CatchAll {
                        name: validate_param_name(part, rest)?,
                    },
                }
            } else if let Some(name) = part.strip_prefix(':') {
                RouteSegment::Dynamic {
                    name: validate_param_name(part, name)?,
                }
            } else {
                RouteSegment::Static {
                    value: part.to_string(),
                }
            };

            match parts.get(idx + 1) {
                Some(next) if segment.is_catch_all() => Err(SegmentError::CatchAllNotLast {
                    component: part.to_string(),
                    next: next.to_string(),
                }),
                _ => Ok(segment),
            }
        })
        .collect()
}

/// Calculates route priority for dispatch order (pure function)
///
/// Lower number = higher priority (matched first).
///
/// # Priority Order
///
/// 1. **Static routes** → 0+
/// 2. **Dynamic routes** → 10 000+
/// 3. **Catch-all routes** → 20 000+
/// 4. **Optional catch-all routes** → 30 000+
///
/// Within a class, deeper routes come first (`(MAX_DEPTH - depth) * 100`),
/// then routes with fewer parameters.
///
/// # Examples
///
/// ```
/// use rhtmx_manifest::route::parser::calculate_priority;
/// use rhtmx_manifest::route::segment::SegmentKind;
///
/// assert_eq!(calculate_priority(SegmentKind::Static, 2, 0), 6200);
/// assert_eq!(calculate_priority(SegmentKind::Dynamic, 2, 1), 16201);
/// assert_eq!(calculate_priority(SegmentKind::CatchAll, 2, 1), 26201);
/// ```
pub fn calculate_priority(specificity: SegmentKind, depth: usize, dynamic_count: usize) -> usize {
    let class_base = match specificity {
        SegmentKind::Static => 0,
        SegmentKind::Dynamic => 10_000,
        SegmentKind::CatchAll => 20_000,
        SegmentKind::OptionalCatchAll => 30_000,
    };

    class_base + (MAX_DEPTH - depth.min(MAX_DEPTH)) * 100 + dynamic_count.min(99)
}

/// Route path parsing
///
/// - [`segment`]: one directory name → group marker or typed segment
/// - [`parser`]: a directory chain → segments, groups, dispatch pattern, priority
pub mod parser;
pub mod segment;

pub use parser::{
    calculate_priority, parse_file_path, parse_path, parse_pattern, pattern_shape, render_pattern,
    ParsedPath,
};
pub use segment::{classify_component, PathComponent, RouteSegment, SegmentKind};

//! Line readers for directives and block markers.

mod block;
mod directive;

pub use block::{scan_marker, BlockMarker};
pub use directive::{trim_line_end, Directive};

//! Labeled segments and the plot command.
//!
//! Segments come from `START:END:LABEL` arguments or CSV segment lists; the
//! plot command extracts each one from a single decoded channel and renders
//! it.

pub mod command;
mod parser;
mod segment;

pub use command::plot_segments;
pub use parser::parse_segment_file;
pub use segment::Segment;

//! GABC text handling: header/content split, header rewrite, content
//! escaping, and intonation extraction.
//!
//! A GABC file is a header block (`name:value;` lines and `%` comments)
//! terminated by a `%%` line, followed by the notation itself.

mod escape;
mod header;
mod intonation;
mod split;

pub use escape::{
    contains_ambiguous_oe, escape_unicode, escape_unicode_line, remove_episemas,
    remove_episemas_line, transform_content, ContentOptions, UNICODE_ESCAPES,
};
pub use header::{annotation_line, provenance_line, rewrite_header};
pub use intonation::{extract_intonation, INTONATION_CADENCE, PSALM_VERSE_PLACEHOLDER};
pub use split::split_header_and_content;

/// Line separating the header block from the content block.
pub const HEADER_END_MARKER: &str = "%%";

//! Post content formatting.
//!
//! Turns the raw text an author types into display HTML. The accepted
//! markup is a deliberately small Markdown subset:
//!
//! - `escape`: HTML escaping for literal text
//! - `inline`: heading, `**strong**` and `` `code` `` substitutions
//! - `render`: the line scanner that builds paragraphs and fenced code
//!
//! ## Design Notes
//!
//! - **Single pass**: input is scanned line by line with two pieces of
//!   state, "inside a fence" and the pending paragraph
//! - **Pure**: the same input always yields byte-identical output; nothing
//!   is cached between calls
//! - **Total**: malformed input (an unterminated fence, stray `*` or
//!   `` ` ``) degrades to literal text instead of failing
//! - **Trust boundary**: only fenced code is escaped. Paragraph text
//!   passes through as-is, so output is only safe to embed for trusted
//!   authors

mod escape;
mod inline;
mod render;

pub use escape::escape_html;
pub use render::format_content_to_html;

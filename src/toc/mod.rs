//! Table of contents tree and its HTML rendering.
//!
//! Headings are inserted one at a time with [`Root::add_at`], then the
//! finished tree is rendered any number of times with [`Root::to_html`].

mod builder;
mod collect;
mod renderer;
mod types;

pub use collect::{build_toc_from_html, collect_headings};
pub use renderer::{DEFAULT_PREFIX, DEFAULT_SUFFIX};
pub use types::{Heading, HeadingEvent, Node, Root};

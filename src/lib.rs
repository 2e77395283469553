//! Table of contents building and rendering for static sites.
//!
//! Headings are placed into a [`toc::Root`] one at a time, in document order,
//! and the finished tree is rendered as nested `<ul>`/`<ol>` markup.
//!
//! ```
//! use rustyll_toc::toc::{Heading, Root};
//!
//! let mut toc = Root::new();
//! toc.add_at(Heading::new("Intro", "intro"), 0, 0);
//! toc.add_at(Heading::new("Setup", "setup"), 0, 1);
//!
//! let html = toc.to_html(1, None, false, Some(""), Some(""));
//! assert!(html.contains("<li><a href=\"#setup\">Setup</a></li>"));
//! ```

pub mod cli;
pub mod config;
pub mod input;
pub mod liquid;
pub mod markdown;
pub mod toc;
pub mod utils;

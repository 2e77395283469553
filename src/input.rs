use std::path::Path;
use log::debug;

use crate::markdown::markdown_to_html;
use crate::toc::{build_toc_from_html, HeadingEvent, Root};
use crate::utils::error::{BoxResult, TocError};
use crate::utils::fs::read_file;
use crate::utils::path::get_extension;

/// The kinds of file a table of contents can be built from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    Markdown,
    Html,
    /// JSON list of heading events
    JsonEvents,
    /// YAML list of heading events
    YamlEvents,
}

impl InputKind {
    /// Pick the input kind from a file extension
    pub fn from_path<P: AsRef<Path>>(path: P) -> BoxResult<InputKind> {
        let ext = get_extension(path.as_ref()).unwrap_or_default();
        match ext.as_str() {
            "md" | "markdown" | "mkd" => Ok(InputKind::Markdown),
            "html" | "htm" => Ok(InputKind::Html),
            "json" => Ok(InputKind::JsonEvents),
            "yml" | "yaml" => Ok(InputKind::YamlEvents),
            _ => Err(TocError::File(format!(
                "Unsupported input file: {}", path.as_ref().display()
            )).into()),
        }
    }
}

/// Read a file and build its table of contents
pub fn load_toc<P: AsRef<Path>>(path: P) -> BoxResult<Root> {
    let kind = InputKind::from_path(path.as_ref())?;
    debug!("Reading {} as {:?}", path.as_ref().display(), kind);
    let content = read_file(path.as_ref())?;
    toc_from_str(&content, kind)
}

/// Read a markdown or HTML file as HTML
pub fn load_html<P: AsRef<Path>>(path: P) -> BoxResult<String> {
    let kind = InputKind::from_path(path.as_ref())?;
    let content = read_file(path.as_ref())?;
    match kind {
        InputKind::Markdown => Ok(markdown_to_html(&content)),
        InputKind::Html => Ok(content),
        _ => Err(TocError::File(format!(
            "Expected a markdown or HTML page: {}", path.as_ref().display()
        )).into()),
    }
}

/// Build a table of contents from file contents of the given kind
pub fn toc_from_str(content: &str, kind: InputKind) -> BoxResult<Root> {
    let root = match kind {
        InputKind::Markdown => build_toc_from_html(&markdown_to_html(content)),
        InputKind::Html => build_toc_from_html(content),
        InputKind::JsonEvents | InputKind::YamlEvents => {
            Root::from_events(parse_events(content, kind)?)
        }
    };
    Ok(root)
}

/// Parse a list of heading events. Heading text in event files is plain
/// text, so it is escaped here before it reaches the markup.
fn parse_events(content: &str, kind: InputKind) -> BoxResult<Vec<HeadingEvent>> {
    let events: Vec<HeadingEvent> = match kind {
        InputKind::YamlEvents => serde_yaml::from_str(content)
            .map_err(|e| TocError::Parse(format!("Invalid YAML heading events: {}", e)))?,
        _ => serde_json::from_str(content)
            .map_err(|e| TocError::Parse(format!("Invalid JSON heading events: {}", e)))?,
    };

    Ok(events
        .into_iter()
        .map(|mut event| {
            event.heading.text = html_escape::encode_text(&event.heading.text).into_owned();
            event
        })
        .collect())
}

use crate::config::TocConfig;
use crate::toc::types::{Node, Root};

/// Written before the list when no prefix is given
pub const DEFAULT_PREFIX: &str = "<nav id=\"TableOfContents\">";

/// Written after the list when no suffix is given
pub const DEFAULT_SUFFIX: &str = "</nav>";

impl Root {
    /// Render the tree as nested HTML lists.
    ///
    /// Depths are 1-based: the top-level nodes sit at depth 1. Nodes above
    /// `start_level` are not emitted but their children are still walked.
    /// Nodes below `stop_level` are dropped along with everything under them;
    /// `None` renders every depth. A `None` prefix or suffix writes the
    /// default `<nav>` wrapper for that side, `Some("")` writes nothing.
    pub fn to_html(
        &self,
        start_level: usize,
        stop_level: Option<usize>,
        ordered: bool,
        prefix: Option<&str>,
        suffix: Option<&str>,
    ) -> String {
        let mut writer = TocWriter {
            html: String::new(),
            start_level,
            stop_level,
            ordered,
            wrote_list: false,
        };

        writer.html.push_str(prefix.unwrap_or(DEFAULT_PREFIX));
        writer.write_nodes(1, 0, &self.nodes);
        if !writer.wrote_list {
            writer.write_empty_list();
        }
        writer.html.push_str(suffix.unwrap_or(DEFAULT_SUFFIX));

        writer.html
    }

    /// Render the tree with the levels, list type and wrapper from `config`
    pub fn render(&self, config: &TocConfig) -> String {
        self.to_html(
            config.start_level,
            config.stop_level(),
            config.ordered,
            config.prefix.as_deref(),
            config.suffix.as_deref(),
        )
    }
}

struct TocWriter {
    html: String,
    start_level: usize,
    stop_level: Option<usize>,
    ordered: bool,
    wrote_list: bool,
}

impl TocWriter {
    fn list_tag(&self) -> &'static str {
        if self.ordered {
            "ol"
        } else {
            "ul"
        }
    }

    fn write_nodes(&mut self, level: usize, indent: usize, nodes: &[Node]) {
        if level < self.start_level {
            for node in nodes {
                self.write_nodes(level + 1, indent, &node.children);
            }
            return;
        }

        if self.stop_level.is_some_and(|stop| level > stop) {
            return;
        }

        if nodes.is_empty() {
            return;
        }

        self.wrote_list = true;
        self.html.push('\n');
        self.open_list(indent + 1);

        for node in nodes {
            self.write_node(level + 1, indent + 2, node);
        }

        self.close_list(indent + 1);
        self.push_indent(indent);
    }

    fn write_node(&mut self, level: usize, indent: usize, node: &Node) {
        self.push_indent(indent);
        self.html.push_str("<li>");

        if let Some(heading) = &node.heading {
            self.html.push_str(&format!("<a href=\"#{}\">{}</a>", heading.id, heading.text));
        }

        self.write_nodes(level, indent, &node.children);
        self.html.push_str("</li>\n");
    }

    fn write_empty_list(&mut self) {
        self.html.push('\n');
        self.open_list(1);
        self.close_list(1);
    }

    fn open_list(&mut self, indent: usize) {
        self.push_indent(indent);
        let tag = self.list_tag();
        self.html.push_str(&format!("<{}>\n", tag));
    }

    fn close_list(&mut self, indent: usize) {
        self.push_indent(indent);
        let tag = self.list_tag();
        self.html.push_str(&format!("</{}>\n", tag));
    }

    fn push_indent(&mut self, indent: usize) {
        for _ in 0..indent {
            self.html.push_str("  ");
        }
    }
}

use serde::{Serialize, Deserialize};

/// A single heading: the anchor id and the text shown for it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Heading {
    pub text: String,
    pub id: String,
}

impl Heading {
    pub fn new(text: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            id: id.into(),
        }
    }
}

/// One entry in the table of contents tree.
///
/// A node without a heading is a placeholder, synthesized to keep the path
/// from the root contiguous when a document skips heading levels.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Node {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub heading: Option<Heading>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Node>,
}

impl Node {
    pub fn new(heading: Heading) -> Self {
        Self {
            heading: Some(heading),
            children: Vec::new(),
        }
    }

    /// Create a heading-less node
    pub fn placeholder() -> Self {
        Self::default()
    }

    pub fn is_placeholder(&self) -> bool {
        self.heading.is_none()
    }
}

/// Table of contents tree: the ordered top-level nodes
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Root {
    #[serde(default)]
    pub nodes: Vec<Node>,
}

impl Root {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// All headings depth-first with their 1-based depth. Placeholders are skipped.
    pub fn headings(&self) -> Vec<(usize, &Heading)> {
        let mut out = Vec::new();
        for node in &self.nodes {
            collect_headings(node, 1, &mut out);
        }
        out
    }

    /// Anchor ids of every heading in document order
    pub fn identifiers(&self) -> Vec<&str> {
        self.headings()
            .into_iter()
            .map(|(_, heading)| heading.id.as_str())
            .collect()
    }
}

fn collect_headings<'a>(node: &'a Node, depth: usize, out: &mut Vec<(usize, &'a Heading)>) {
    if let Some(heading) = &node.heading {
        out.push((depth, heading));
    }
    for child in &node.children {
        collect_headings(child, depth + 1, out);
    }
}

/// A heading together with where it goes in the tree.
///
/// `row` selects the top-level slot, `level` is the zero-based depth within it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeadingEvent {
    #[serde(flatten)]
    pub heading: Heading,
    pub row: usize,
    pub level: usize,
}

impl HeadingEvent {
    pub fn new(heading: Heading, row: usize, level: usize) -> Self {
        Self { heading, row, level }
    }
}

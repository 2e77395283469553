use log::debug;

use crate::toc::types::{Heading, HeadingEvent, Node, Root};

impl Root {
    /// Place a heading in top-level slot `row` at depth `level`.
    ///
    /// Missing slots and missing intermediate levels are filled with
    /// placeholder nodes. Deeper headings always attach below the last child
    /// at each level of the slot.
    pub fn add_at(&mut self, heading: Heading, row: usize, level: usize) {
        while self.nodes.len() <= row {
            debug!("Synthesizing top-level placeholder at row {}", self.nodes.len());
            self.nodes.push(Node::placeholder());
        }

        let mut parent = &mut self.nodes[row];

        if level == 0 {
            parent.heading = Some(heading);
            return;
        }

        for depth in 1..level {
            if parent.children.is_empty() {
                debug!("Synthesizing placeholder at row {} depth {}", row, depth);
                parent.children.push(Node::placeholder());
            }
            let last = parent.children.len() - 1;
            parent = &mut parent.children[last];
        }

        parent.children.push(Node::new(heading));
    }

    /// Build a tree by inserting every event in order
    pub fn from_events<I>(events: I) -> Self
    where
        I: IntoIterator<Item = HeadingEvent>,
    {
        let mut root = Root::new();
        for event in events {
            root.add_at(event.heading, event.row, event.level);
        }
        root
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn count_placeholders(nodes: &[Node]) -> usize {
        nodes
            .iter()
            .map(|n| usize::from(n.is_placeholder()) + count_placeholders(&n.children))
            .sum()
    }

    #[test]
    fn test_contiguous_levels_need_no_placeholders() {
        let mut root = Root::new();
        root.add_at(Heading::new("Heading 1", "h1-1"), 0, 0);
        root.add_at(Heading::new("1-H2-1", "1-h2-1"), 0, 1);
        root.add_at(Heading::new("1-H2-2", "1-h2-2"), 0, 1);
        root.add_at(Heading::new("1-H3-1", "1-h2-2"), 0, 2);
        root.add_at(Heading::new("Heading 2", "h1-2"), 1, 0);

        assert_eq!(count_placeholders(&root.nodes), 0);
        assert_eq!(root.nodes.len(), 2);
        assert_eq!(root.nodes[0].children.len(), 2);
        assert_eq!(root.nodes[0].children[1].children.len(), 1);
        assert_eq!(
            root.nodes[0].children[1].children[0].heading,
            Some(Heading::new("1-H3-1", "1-h2-2"))
        );
        assert!(root.nodes[1].children.is_empty());
    }

    #[test]
    fn test_skipped_levels_are_synthesized() {
        let mut root = Root::new();
        root.add_at(Heading::new("Deep", "deep"), 0, 3);

        assert_eq!(count_placeholders(&root.nodes), 3);
        let mut node = &root.nodes[0];
        for _ in 0..2 {
            assert!(node.is_placeholder());
            assert_eq!(node.children.len(), 1);
            node = &node.children[0];
        }
        assert_eq!(node.children, vec![Node::new(Heading::new("Deep", "deep"))]);
    }

    #[test]
    fn test_missing_parent_and_duplicates() {
        let mut root = Root::new();
        root.add_at(Heading::new("H2", "h2"), 0, 1);
        root.add_at(Heading::new("H3", "h3"), 1, 2);
        root.add_at(Heading::new("H3", "h3"), 1, 2);

        assert_eq!(root.nodes.len(), 2);
        assert!(root.nodes[0].is_placeholder());
        assert_eq!(root.nodes[0].children, vec![Node::new(Heading::new("H2", "h2"))]);

        assert!(root.nodes[1].is_placeholder());
        assert_eq!(root.nodes[1].children.len(), 1);
        let grandparent = &root.nodes[1].children[0];
        assert!(grandparent.is_placeholder());
        assert_eq!(grandparent.children.len(), 2);
        assert_eq!(grandparent.children[0], grandparent.children[1]);
    }

    #[test]
    fn test_deeper_headings_follow_last_child() {
        let mut root = Root::new();
        root.add_at(Heading::new("A", "a"), 0, 0);
        root.add_at(Heading::new("A.1", "a-1"), 0, 1);
        root.add_at(Heading::new("A.2", "a-2"), 0, 1);
        root.add_at(Heading::new("A.2.1", "a-2-1"), 0, 2);

        assert!(root.nodes[0].children[0].children.is_empty());
        assert_eq!(root.nodes[0].children[1].children.len(), 1);
    }

    #[test]
    fn test_top_level_fills_placeholder_and_keeps_children() {
        let mut root = Root::new();
        root.add_at(Heading::new("Child", "child"), 0, 1);
        root.add_at(Heading::new("Parent", "parent"), 0, 0);

        assert_eq!(root.nodes[0].heading, Some(Heading::new("Parent", "parent")));
        assert_eq!(root.nodes[0].children.len(), 1);
    }

    #[test]
    fn test_skipped_rows_become_placeholders() {
        let mut root = Root::new();
        root.add_at(Heading::new("Third", "third"), 2, 0);

        assert_eq!(root.nodes.len(), 3);
        assert!(root.nodes[0].is_placeholder());
        assert!(root.nodes[1].is_placeholder());
        assert!(!root.nodes[2].is_placeholder());
    }

    #[test]
    fn test_from_events() {
        let events = vec![
            HeadingEvent::new(Heading::new("Intro", "intro"), 0, 0),
            HeadingEvent::new(Heading::new("Setup", "setup"), 0, 1),
        ];
        let root = Root::from_events(events);

        assert_eq!(root.identifiers(), vec!["intro", "setup"]);
    }
}

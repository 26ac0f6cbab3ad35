//! The editable surface: the node tree currently on screen and the live
//! selection inside it.
//!
//! The editor replaces the surface's children wholesale on every render,
//! which drops the live selection just like assigning `innerHTML` would.
//! The editing helpers (`type_text`, `delete_backward`) mutate the tree the
//! way a browser does before it fires an input event: in place inside a
//! text node when possible, otherwise by flattening to a single text node.

mod node;

use std::ops::Range;

pub use node::{
    node_at, node_at_mut, text_content, text_len, Element, Leaf, Node, NodePath, TextLeaves,
    TOKEN_CLASS,
};

use crate::editable::{capture, restore, BoundaryPoint, CaretSelection, NodeSelection};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Surface {
    nodes: Vec<Node>,
    selection: Option<NodeSelection>,
}

impl Surface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_nodes(nodes: Vec<Node>) -> Self {
        Self {
            nodes,
            selection: None,
        }
    }

    /// A surface holding `text` as a single unstyled text node
    pub fn from_text(text: &str) -> Self {
        Self::from_nodes(flat_nodes(text))
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Replace every child. The live selection does not survive.
    pub fn replace_children(&mut self, nodes: Vec<Node>) {
        self.nodes = nodes;
        self.selection = None;
    }

    pub fn text_content(&self) -> String {
        text_content(&self.nodes)
    }

    pub fn text_len(&self) -> usize {
        text_len(&self.nodes)
    }

    pub fn selection(&self) -> Option<&NodeSelection> {
        self.selection.as_ref()
    }

    pub fn set_selection(&mut self, selection: Option<NodeSelection>) {
        self.selection = selection;
    }

    /// The live selection as flat offsets, if there is one
    pub fn caret(&self) -> Option<CaretSelection> {
        self.selection
            .as_ref()
            .map(|selection| capture(&self.nodes, selection))
    }

    /// Place a collapsed caret at a flat offset
    pub fn set_caret(&mut self, offset: usize) {
        self.select(offset, offset);
    }

    /// Select the flat range between two offsets
    pub fn select(&mut self, start: usize, end: usize) {
        self.selection = Some(restore(&self.nodes, CaretSelection::new(start, end)));
    }

    /// Type `text` at the caret, replacing any selected text. Without a
    /// selection the text goes to the end.
    pub fn type_text(&mut self, text: &str) {
        let inserted = text.chars().count();

        if let Some(point) = self.collapsed_point() {
            if let Some(Node::Text(existing)) = node_at_mut(&mut self.nodes, &point.path) {
                let offset = point.offset.min(existing.chars().count());
                existing.insert_str(char_to_byte(existing, offset), text);
                self.selection = Some(NodeSelection::collapsed(BoundaryPoint::new(
                    point.path,
                    offset + inserted,
                )));
                return;
            }
        }

        let caret = self
            .caret()
            .unwrap_or_else(|| CaretSelection::collapsed(self.text_len()));
        self.splice(caret.start..caret.end, text);
    }

    /// Delete the selected text, or the character before a collapsed caret
    pub fn delete_backward(&mut self) {
        let Some(caret) = self.caret() else {
            return;
        };
        if !caret.is_collapsed() {
            self.splice(caret.start..caret.end, "");
            return;
        }
        if caret.start == 0 {
            return;
        }

        if let Some(point) = self.collapsed_point() {
            if let Some(Node::Text(existing)) = node_at_mut(&mut self.nodes, &point.path) {
                let offset = point.offset.min(existing.chars().count());
                if offset > 0 {
                    let from = char_to_byte(existing, offset - 1);
                    let to = char_to_byte(existing, offset);
                    existing.replace_range(from..to, "");
                    self.selection = Some(NodeSelection::collapsed(BoundaryPoint::new(
                        point.path,
                        offset - 1,
                    )));
                    return;
                }
            }
        }

        self.splice(caret.start - 1..caret.start, "");
    }

    fn collapsed_point(&self) -> Option<BoundaryPoint> {
        self.selection
            .as_ref()
            .filter(|selection| selection.is_collapsed())
            .map(|selection| selection.start.clone())
    }

    /// Replace a flat character range, flattening the surface
    fn splice(&mut self, range: Range<usize>, insert: &str) {
        let mut text = self.text_content();
        let from = char_to_byte(&text, range.start);
        let to = char_to_byte(&text, range.end);
        text.replace_range(from..to, insert);

        self.nodes = flat_nodes(&text);
        self.set_caret(range.start + insert.chars().count());
    }
}

fn flat_nodes(text: &str) -> Vec<Node> {
    if text.is_empty() {
        Vec::new()
    } else {
        vec![Node::text(text)]
    }
}

/// Convert a char offset to a byte offset, clamping to the end
fn char_to_byte(text: &str, char_offset: usize) -> usize {
    text.char_indices()
        .nth(char_offset)
        .map(|(byte, _)| byte)
        .unwrap_or(text.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syntax::{highlight, Vocabulary};

    fn highlighted(text: &str) -> Surface {
        Surface::from_nodes(highlight(text, &Vocabulary::parse("x")).into_nodes())
    }

    #[test]
    fn test_type_inside_text_node_keeps_structure() {
        let mut surface = highlighted("12+x");
        surface.set_caret(1);
        surface.type_text("5");

        assert_eq!(surface.text_content(), "152+x");
        assert_eq!(surface.caret(), Some(CaretSelection::collapsed(2)));
        // Still the number span, only its text grew
        assert_eq!(surface.nodes().len(), 3);
    }

    #[test]
    fn test_type_without_selection_appends() {
        let mut surface = highlighted("1+");
        surface.type_text("x");
        assert_eq!(surface.text_content(), "1+x");
        assert_eq!(surface.caret(), Some(CaretSelection::collapsed(3)));
    }

    #[test]
    fn test_type_over_selection_flattens() {
        let mut surface = highlighted("12+x");
        surface.select(1, 3);
        surface.type_text("*");

        assert_eq!(surface.text_content(), "1*x");
        assert_eq!(surface.nodes(), &[Node::text("1*x")]);
        assert_eq!(surface.caret(), Some(CaretSelection::collapsed(2)));
    }

    #[test]
    fn test_delete_backward() {
        let mut surface = highlighted("12+x");
        surface.set_caret(4);
        surface.delete_backward();
        assert_eq!(surface.text_content(), "12+");
        assert_eq!(surface.caret(), Some(CaretSelection::collapsed(3)));

        surface.set_caret(0);
        surface.delete_backward();
        assert_eq!(surface.text_content(), "12+");
    }

    #[test]
    fn test_delete_last_character_leaves_empty_text() {
        let mut surface = Surface::from_text("7");
        surface.set_caret(1);
        surface.delete_backward();
        assert_eq!(surface.text_content(), "");
        assert_eq!(surface.nodes(), &[Node::text("")]);
        assert_eq!(surface.caret(), Some(CaretSelection::collapsed(0)));
    }

    #[test]
    fn test_replace_children_drops_selection() {
        let mut surface = highlighted("1");
        surface.set_caret(1);
        surface.replace_children(Vec::new());
        assert!(surface.selection().is_none());
    }
}

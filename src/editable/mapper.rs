//! Offset mapping between flat caret offsets and node-relative positions.
//!
//! `capture` turns a live selection into flat offsets before a re-render;
//! `restore` places those offsets back into the freshly built tree. Both
//! count characters of text leaves in document order, so they agree on any
//! tree with the same text content regardless of its structure.

use super::caret::CaretSelection;
use super::selection::{BoundaryPoint, NodeSelection};
use crate::surface::{text_len, Node, TextLeaves};

/// Number of characters preceding `point` in document order.
///
/// Paths and offsets that run past the end of the tree clamp to the end of
/// the text they would follow.
pub fn flat_offset(nodes: &[Node], point: &BoundaryPoint) -> usize {
    let mut level = nodes;
    let mut consumed = 0;

    for (depth, &index) in point.path.iter().enumerate() {
        consumed += text_len(&level[..index.min(level.len())]);

        let Some(node) = level.get(index) else {
            return consumed;
        };

        match node {
            Node::Text(text) => {
                let len = text.chars().count();
                let is_last = depth + 1 == point.path.len();
                return consumed + if is_last { point.offset.min(len) } else { len };
            }
            Node::Element(element) => level = &element.children,
        }
    }

    // The path ended on an element (or the root): offset counts children
    consumed + text_len(&level[..point.offset.min(level.len())])
}

/// Convert a node-relative selection to flat offsets
pub fn capture(nodes: &[Node], selection: &NodeSelection) -> CaretSelection {
    let start = flat_offset(nodes, &selection.start);
    let end = flat_offset(nodes, &selection.end);
    CaretSelection::new(start, end)
}

/// Convert flat offsets to a node-relative selection in `nodes`.
///
/// Walks the text leaves once, pre-order. The first leaf whose inclusive
/// range `[consumed, consumed + len]` contains `start` receives the start
/// boundary; the end boundary is resolved from that leaf onwards. Offsets
/// past the last leaf clamp to its end. A tree without text leaves yields a
/// collapsed selection at the start of the root.
pub fn restore(nodes: &[Node], caret: CaretSelection) -> NodeSelection {
    let mut consumed = 0;
    let mut start: Option<BoundaryPoint> = None;
    let mut last_leaf: Option<BoundaryPoint> = None;

    for leaf in TextLeaves::new(nodes) {
        let len = leaf.len();
        let next = consumed + len;

        if start.is_none() && caret.start >= consumed && caret.start <= next {
            start = Some(BoundaryPoint::new(leaf.path.clone(), caret.start - consumed));
        }

        if let Some(start) = &start {
            if caret.end >= consumed && caret.end <= next {
                let end = BoundaryPoint::new(leaf.path, caret.end - consumed);
                return NodeSelection::new(start.clone(), end);
            }
        }

        consumed = next;
        last_leaf = Some(BoundaryPoint::new(leaf.path, len));
    }

    match last_leaf {
        Some(end_of_text) => {
            let start = start.unwrap_or_else(|| end_of_text.clone());
            NodeSelection::new(start, end_of_text)
        }
        None => NodeSelection::collapsed(BoundaryPoint::root(0)),
    }
}

/// Boundary point for a single flat offset
pub fn locate(nodes: &[Node], offset: usize) -> BoundaryPoint {
    restore(nodes, CaretSelection::collapsed(offset)).start
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::Element;
    use crate::syntax::TokenKind;

    /// `12 + x` as highlighted: number span, bare text, variable span
    fn tree() -> Vec<Node> {
        vec![
            Node::token(TokenKind::Number, "12"),
            Node::text(" + "),
            Node::token(TokenKind::Variable, "x"),
        ]
    }

    #[test]
    fn test_flat_offset_in_text_nodes() {
        let nodes = tree();
        assert_eq!(flat_offset(&nodes, &BoundaryPoint::new(vec![0, 0], 1)), 1);
        assert_eq!(flat_offset(&nodes, &BoundaryPoint::new(vec![1], 2)), 4);
        assert_eq!(flat_offset(&nodes, &BoundaryPoint::new(vec![2, 0], 1)), 6);
    }

    #[test]
    fn test_flat_offset_in_elements_counts_children() {
        let nodes = tree();
        assert_eq!(flat_offset(&nodes, &BoundaryPoint::root(0)), 0);
        assert_eq!(flat_offset(&nodes, &BoundaryPoint::root(2)), 5);
        assert_eq!(flat_offset(&nodes, &BoundaryPoint::root(3)), 6);
        assert_eq!(flat_offset(&nodes, &BoundaryPoint::new(vec![2], 1)), 6);
    }

    #[test]
    fn test_flat_offset_clamps_past_end() {
        let nodes = tree();
        assert_eq!(flat_offset(&nodes, &BoundaryPoint::root(99)), 6);
        assert_eq!(flat_offset(&nodes, &BoundaryPoint::new(vec![9, 0], 0)), 6);
        assert_eq!(flat_offset(&nodes, &BoundaryPoint::new(vec![1], 99)), 5);
    }

    #[test]
    fn test_restore_prefers_earlier_leaf_on_boundaries() {
        let nodes = tree();
        // Offset 2 is both the end of "12" and the start of " + "
        assert_eq!(locate(&nodes, 2), BoundaryPoint::new(vec![0, 0], 2));
        assert_eq!(locate(&nodes, 3), BoundaryPoint::new(vec![1], 1));
    }

    #[test]
    fn test_restore_range_across_leaves() {
        let nodes = tree();
        let sel = restore(&nodes, CaretSelection::new(1, 6));
        assert_eq!(sel.start, BoundaryPoint::new(vec![0, 0], 1));
        assert_eq!(sel.end, BoundaryPoint::new(vec![2, 0], 1));
    }

    #[test]
    fn test_restore_clamps_to_end_of_last_leaf() {
        let nodes = tree();
        let sel = restore(&nodes, CaretSelection::new(4, 40));
        assert_eq!(sel.start, BoundaryPoint::new(vec![1], 2));
        assert_eq!(sel.end, BoundaryPoint::new(vec![2, 0], 1));

        let sel = restore(&nodes, CaretSelection::collapsed(40));
        assert!(sel.is_collapsed());
        assert_eq!(sel.start, BoundaryPoint::new(vec![2, 0], 1));
    }

    #[test]
    fn test_restore_without_leaves() {
        let empty: Vec<Node> = Vec::new();
        assert_eq!(
            restore(&empty, CaretSelection::new(0, 3)),
            NodeSelection::collapsed(BoundaryPoint::root(0))
        );

        let only_elements = vec![Node::Element(Element::new("br"))];
        assert_eq!(locate(&only_elements, 1), BoundaryPoint::root(0));
    }

    #[test]
    fn test_capture_orders_reversed_boundaries() {
        let nodes = tree();
        let sel = NodeSelection::new(
            BoundaryPoint::new(vec![2, 0], 1),
            BoundaryPoint::new(vec![0, 0], 0),
        );
        assert_eq!(capture(&nodes, &sel), CaretSelection::new(0, 6));
    }

    #[test]
    fn test_round_trip_every_offset() {
        let nodes = tree();
        for start in 0..=6 {
            for end in start..=6 {
                let caret = CaretSelection::new(start, end);
                assert_eq!(capture(&nodes, &restore(&nodes, caret)), caret);
            }
        }
    }
}

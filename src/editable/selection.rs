//! Node-relative selection types.
//!
//! A boundary point names a position inside a node tree the way a browser
//! range does: a path to a node plus an offset. Inside a text node the
//! offset counts characters; inside an element (or at the root, where the
//! path is empty) it counts children.

use crate::surface::NodePath;

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct BoundaryPoint {
    pub path: NodePath,
    pub offset: usize,
}

impl BoundaryPoint {
    pub fn new(path: NodePath, offset: usize) -> Self {
        Self { path, offset }
    }

    /// A point directly inside the surface root, before child `offset`
    pub fn root(offset: usize) -> Self {
        Self {
            path: Vec::new(),
            offset,
        }
    }

    pub fn is_root(&self) -> bool {
        self.path.is_empty()
    }
}

/// A selection range between two boundary points, start first
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct NodeSelection {
    pub start: BoundaryPoint,
    pub end: BoundaryPoint,
}

impl NodeSelection {
    pub fn new(start: BoundaryPoint, end: BoundaryPoint) -> Self {
        Self { start, end }
    }

    /// A caret with no selected content
    pub fn collapsed(point: BoundaryPoint) -> Self {
        Self {
            start: point.clone(),
            end: point,
        }
    }

    pub fn is_collapsed(&self) -> bool {
        self.start == self.end
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collapsed_selection() {
        let sel = NodeSelection::collapsed(BoundaryPoint::new(vec![1, 0], 2));
        assert!(sel.is_collapsed());
        assert_eq!(sel.start.path, vec![1, 0]);
    }

    #[test]
    fn test_root_point() {
        let point = BoundaryPoint::root(0);
        assert!(point.is_root());
        assert_eq!(point, BoundaryPoint::default());
    }
}

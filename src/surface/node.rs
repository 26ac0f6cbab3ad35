//! Node tree for rendered formula content
//!
//! A minimal document model: elements carry a tag, style classes and
//! children; text nodes carry the characters. Only text nodes contribute to
//! the flat text of a tree.

use crate::syntax::TokenKind;

/// Child-index path from the surface root to a node
pub type NodePath = Vec<usize>;

/// Class carried by every highlighted token element
pub const TOKEN_CLASS: &str = "token";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Text(String),
    Element(Element),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub tag: String,
    pub classes: Vec<String>,
    pub children: Vec<Node>,
}

impl Element {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            classes: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.classes.push(class.into());
        self
    }

    pub fn with_child(mut self, child: Node) -> Self {
        self.children.push(child);
        self
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }
}

impl Node {
    pub fn text(text: impl Into<String>) -> Self {
        Node::Text(text.into())
    }

    /// A styled token element: `<span class="token KIND [ALIAS]">lexeme</span>`
    pub fn token(kind: TokenKind, lexeme: impl Into<String>) -> Self {
        let mut element = Element::new("span")
            .with_class(TOKEN_CLASS)
            .with_class(kind.name());
        if let Some(alias) = kind.alias() {
            element = element.with_class(alias);
        }
        Node::Element(element.with_child(Node::text(lexeme)))
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Node::Text(text) => Some(text),
            Node::Element(_) => None,
        }
    }

    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Node::Element(element) => Some(element),
            Node::Text(_) => None,
        }
    }

    /// Children of an element; text nodes have none
    pub fn children(&self) -> &[Node] {
        match self {
            Node::Element(element) => &element.children,
            Node::Text(_) => &[],
        }
    }

    /// Token kind of a highlighted element, read back from its classes
    pub fn token_kind(&self) -> Option<TokenKind> {
        let element = self.as_element()?;
        if !element.has_class(TOKEN_CLASS) {
            return None;
        }
        element
            .classes
            .iter()
            .find_map(|class| TokenKind::from_name(class))
    }

    /// Number of characters in all text below this node
    pub fn text_len(&self) -> usize {
        match self {
            Node::Text(text) => text.chars().count(),
            Node::Element(element) => text_len(&element.children),
        }
    }

    /// Append this node's text content to `out`
    pub fn append_text(&self, out: &mut String) {
        match self {
            Node::Text(text) => out.push_str(text),
            Node::Element(element) => {
                for child in &element.children {
                    child.append_text(out);
                }
            }
        }
    }
}

/// Total characters of text in a sequence of nodes
pub fn text_len(nodes: &[Node]) -> usize {
    nodes.iter().map(Node::text_len).sum()
}

/// Concatenated text content in document order
pub fn text_content(nodes: &[Node]) -> String {
    let mut out = String::new();
    for node in nodes {
        node.append_text(&mut out);
    }
    out
}

/// Resolve a path to a node
pub fn node_at<'a>(nodes: &'a [Node], path: &[usize]) -> Option<&'a Node> {
    let (&first, rest) = path.split_first()?;
    let mut node = nodes.get(first)?;
    for &index in rest {
        node = node.children().get(index)?;
    }
    Some(node)
}

/// Resolve a path to a node, mutably
pub fn node_at_mut<'a>(nodes: &'a mut [Node], path: &[usize]) -> Option<&'a mut Node> {
    let (&first, rest) = path.split_first()?;
    let mut node = nodes.get_mut(first)?;
    for &index in rest {
        node = match node {
            Node::Element(element) => element.children.get_mut(index)?,
            Node::Text(_) => return None,
        };
    }
    Some(node)
}

/// A text leaf found by [`TextLeaves`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Leaf<'a> {
    pub path: NodePath,
    pub text: &'a str,
}

impl Leaf<'_> {
    /// Length in characters
    pub fn len(&self) -> usize {
        self.text.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

/// Depth-first, pre-order iterator over text leaves
pub struct TextLeaves<'a> {
    stack: Vec<(&'a [Node], usize)>,
    path: NodePath,
}

impl<'a> TextLeaves<'a> {
    pub fn new(nodes: &'a [Node]) -> Self {
        Self {
            stack: vec![(nodes, 0)],
            path: Vec::new(),
        }
    }
}

impl<'a> Iterator for TextLeaves<'a> {
    type Item = Leaf<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let frame = self.stack.last_mut()?;
            let nodes: &'a [Node] = frame.0;
            let index = frame.1;

            if index >= nodes.len() {
                self.stack.pop();
                self.path.pop();
                continue;
            }
            frame.1 += 1;

            match &nodes[index] {
                Node::Text(text) => {
                    let mut path = self.path.clone();
                    path.push(index);
                    return Some(Leaf {
                        path,
                        text: text.as_str(),
                    });
                }
                Node::Element(element) => {
                    self.path.push(index);
                    self.stack.push((&element.children, 0));
                }
            }
        }
    }
}

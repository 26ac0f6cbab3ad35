//! Highlighted node tree
//!
//! Renders a token sequence into the nodes placed on the editable surface:
//! each classified token becomes a styled `span` holding one text node, and
//! each plain run becomes a bare text node. The tree's text content is
//! always exactly the input text.

use super::grammar::{Grammar, TokenKind, Vocabulary};
use super::render;
use super::tokenizer::{tokenize_with, Token};
use crate::surface::{self, Node, TextLeaves};

/// Styled structure rendered from one formula text
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderedTree {
    nodes: Vec<Node>,
}

impl RenderedTree {
    pub fn from_tokens(tokens: &[Token]) -> Self {
        let nodes = tokens
            .iter()
            .map(|token| match token.kind {
                TokenKind::Plain => Node::text(token.lexeme.as_str()),
                kind => Node::token(kind, token.lexeme.as_str()),
            })
            .collect();
        Self { nodes }
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn into_nodes(self) -> Vec<Node> {
        self.nodes
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Concatenated text of all leaves
    pub fn text(&self) -> String {
        surface::text_content(&self.nodes)
    }

    /// Text length in characters
    pub fn text_len(&self) -> usize {
        surface::text_len(&self.nodes)
    }

    pub fn leaves(&self) -> TextLeaves<'_> {
        TextLeaves::new(&self.nodes)
    }

    pub fn leaf_count(&self) -> usize {
        self.leaves().count()
    }

    /// Top-level nodes as `(kind, text)` pairs; bare text reads as `Plain`
    pub fn classified(&self) -> Vec<(TokenKind, String)> {
        self.nodes
            .iter()
            .map(|node| {
                let kind = node.token_kind().unwrap_or(TokenKind::Plain);
                let mut text = String::new();
                node.append_text(&mut text);
                (kind, text)
            })
            .collect()
    }

    /// Markup as produced for the page: `<span class="token number">2</span>`
    pub fn to_html(&self) -> String {
        render::to_html(&self.nodes)
    }
}

/// Highlight `text` with the grammar for `vocabulary`
pub fn highlight(text: &str, vocabulary: &Vocabulary) -> RenderedTree {
    highlight_with(&Grammar::new(vocabulary), text)
}

/// Highlight `text` with an already composed grammar
pub fn highlight_with(grammar: &Grammar, text: &str) -> RenderedTree {
    RenderedTree::from_tokens(&tokenize_with(grammar, text))
}

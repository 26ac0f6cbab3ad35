//! Serializers for rendered trees: HTML markup and ANSI-colored terminal text

use std::fmt::Write;

use super::grammar::TokenKind;
use crate::surface::Node;
use crate::theme::{Color, Theme};

/// Serialize nodes as HTML. Text is escaped; class lists are joined with
/// spaces.
pub fn to_html(nodes: &[Node]) -> String {
    let mut out = String::new();
    for node in nodes {
        write_html(node, &mut out);
    }
    out
}

fn write_html(node: &Node, out: &mut String) {
    match node {
        Node::Text(text) => escape_into(text, false, out),
        Node::Element(element) => {
            out.push('<');
            out.push_str(&element.tag);
            if !element.classes.is_empty() {
                out.push_str(" class=\"");
                escape_into(&element.classes.join(" "), true, out);
                out.push('"');
            }
            out.push('>');
            for child in &element.children {
                write_html(child, out);
            }
            out.push_str("</");
            out.push_str(&element.tag);
            out.push('>');
        }
    }
}

fn escape_into(text: &str, attribute: bool, out: &mut String) {
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' if attribute => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
}

/// Serialize nodes as 24-bit ANSI colored text using the theme's token
/// colors
pub fn to_ansi(nodes: &[Node], theme: &Theme) -> String {
    let mut out = String::new();
    for node in nodes {
        write_ansi(node, theme, TokenKind::Plain, &mut out);
    }
    out
}

fn write_ansi(node: &Node, theme: &Theme, inherited: TokenKind, out: &mut String) {
    match node {
        Node::Text(text) => paint(text, theme.color_for(inherited), out),
        Node::Element(element) => {
            let kind = node.token_kind().unwrap_or(inherited);
            for child in &element.children {
                write_ansi(child, theme, kind, out);
            }
        }
    }
}

fn paint(text: &str, color: Color, out: &mut String) {
    if text.is_empty() {
        return;
    }
    let _ = write!(
        out,
        "\x1b[38;2;{};{};{}m{}\x1b[0m",
        color.r, color.g, color.b, text
    );
}

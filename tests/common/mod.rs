//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use formula_input::model::{attributes, EditorMode, SymbolPalette};
use formula_input::syntax::{tokenize, TokenKind, Vocabulary};
use formula_input::{Page, Runtime};

/// Id of the backing store input used by every test page
pub const TARGET: &str = "formula";

/// Formulas exercising every token kind, whitespace and odd characters
pub const CORPUS: &[&str] = &[
    "",
    "x",
    "x*y+2",
    "true&&round(x)",
    "null == y",
    "sin(x) + cos(y) / tan(z)",
    "1.5e-3 >= -2",
    "[a, b] != (c)",
    "  spaced   out  ",
    "!(x <= 10) && false",
    "floor(ceil(round(1.25)))",
    "ünïcödé + x²",
    "x2 + y_1 + xy",
    "a < b > c == d",
    "##@@$$",
];

/// Mount an interactive editor over a page holding `value`
pub fn mount(value: &str, variables: &str) -> Runtime<Page> {
    mount_with_mode(EditorMode::Interactive, value, variables)
}

pub fn mount_with_mode(mode: EditorMode, value: &str, variables: &str) -> Runtime<Page> {
    let page = Page::new().with_input(TARGET, value);
    let attrs = attributes([("target-input", TARGET), ("variables", variables)]);
    Runtime::mount(mode, &attrs, page, default_palette()).unwrap()
}

pub fn default_palette() -> SymbolPalette {
    SymbolPalette::from_symbols(["+", "*", "(", ")", "&&", "round("])
}

/// `(kind, lexeme)` pairs for every classified (non-plain) token
pub fn classified(text: &str, variables: &str) -> Vec<(TokenKind, String)> {
    tokenize(text, &Vocabulary::parse(variables))
        .into_iter()
        .filter(|t| t.kind != TokenKind::Plain)
        .map(|t| (t.kind, t.lexeme))
        .collect()
}

pub fn pair(kind: TokenKind, lexeme: &str) -> (TokenKind, String) {
    (kind, lexeme.to_string())
}

//! Syntax highlighting for the formula language
//!
//! Provides the lexical grammar, the tokenizer and the highlighted node tree:
//! - Fixed token rules plus a per-render variable rule from the vocabulary
//! - Gapless tokenization (every character belongs to exactly one token)
//! - Rendering to nodes, HTML and ANSI
//!
//! ## Pipeline
//!
//! ```text
//! FormulaText + Vocabulary → Grammar → tokenize → Vec<Token>
//!                                   → RenderedTree → surface / HTML / ANSI
//! ```
//!
//! Everything here is a pure function of its inputs; the grammar is
//! recomposed for every render.

mod grammar;
mod highlight;
pub mod render;
mod tokenizer;

pub use grammar::{Grammar, Rule, TokenKind, Vocabulary, FUNCTION_NAMES};
pub use highlight::{highlight, highlight_with, RenderedTree};
pub use tokenizer::{tokenize, tokenize_with, Token};

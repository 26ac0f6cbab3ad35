//! Formula Input - caret-preserving formula highlighting
//!
//! This crate provides the core types and logic for a syntax-highlighted
//! formula editor implementing the Elm Architecture pattern: every keystroke
//! re-tokenizes the flat text, rebuilds the node tree and restores the caret.

pub mod cli;
pub mod commands;
pub mod config;
pub mod config_paths;
pub mod editable;
pub mod error;
pub mod host;
pub mod messages;
pub mod model;
pub mod runtime;
pub mod surface;
pub mod syntax;
pub mod theme;
pub mod tracing;
pub mod update;

// Re-export commonly used types
pub use commands::Cmd;
pub use config::EditorConfig;
pub use editable::{BoundaryPoint, CaretSelection, NodeSelection};
pub use error::EditorError;
pub use host::{ChangeEvent, Host, Page};
pub use messages::Msg;
pub use model::{EditorAttributes, EditorMode, FormulaEditor, SymbolPalette};
pub use runtime::Runtime;
pub use syntax::{highlight, tokenize, RenderedTree, Token, TokenKind, Vocabulary};
pub use theme::Theme;

//! Editor model - configuration, palette and per-editor state
//!
//! This module contains the state types following the Elm Architecture pattern.

pub mod attributes;
pub mod editor;
pub mod palette;

pub use attributes::{
    attribute, attributes, Attributes, EditorAttributes, EQUATION_SYMBOL, TARGET_INPUT, VARIABLES,
};
pub use editor::{CycleState, EditorMode, FormulaEditor};
pub use palette::{PaletteControl, SymbolPalette};

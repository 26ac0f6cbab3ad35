//! Symbol palette: buttons next to the editor that append a lexeme

use super::attributes::{attribute, attributes, Attributes, EQUATION_SYMBOL};
use crate::error::EditorError;

/// One clickable palette control
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaletteControl {
    pub attributes: Attributes,
}

impl PaletteControl {
    /// A control inserting `symbol`
    pub fn for_symbol(symbol: impl Into<String>) -> Self {
        let symbol: String = symbol.into();
        Self {
            attributes: attributes([(EQUATION_SYMBOL, symbol)]),
        }
    }

    pub fn symbol(&self) -> Option<&str> {
        attribute(&self.attributes, EQUATION_SYMBOL)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SymbolPalette {
    controls: Vec<PaletteControl>,
}

impl SymbolPalette {
    pub fn new(controls: Vec<PaletteControl>) -> Self {
        Self { controls }
    }

    /// A palette with one control per symbol, in order
    pub fn from_symbols<I, S>(symbols: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(symbols.into_iter().map(PaletteControl::for_symbol).collect())
    }

    pub fn controls(&self) -> &[PaletteControl] {
        &self.controls
    }

    /// The lexeme carried by control `index`
    pub fn symbol_at(&self, index: usize) -> Result<&str, EditorError> {
        let control = self
            .controls
            .get(index)
            .ok_or(EditorError::UnknownControl { control: index })?;
        control
            .symbol()
            .ok_or(EditorError::MissingSymbolAttribute { control: index })
    }
}

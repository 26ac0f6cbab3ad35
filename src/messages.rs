//! Message types for the Elm-style architecture
//!
//! All state changes flow through these message types.

use crate::model::EditorAttributes;

/// Events delivered to a formula editor
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// The editor was rendered into the page for the first time
    Mounted,
    /// The host re-rendered the editor (backing store may have changed)
    Updated,
    /// The editor element's configuration attributes changed
    AttributesChanged(EditorAttributes),
    /// The user mutated the editable surface
    Input,
    /// A palette control asked to insert a lexeme
    InsertSymbol(String),
    /// The editor was removed from the page
    Destroyed,
}

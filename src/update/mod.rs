//! Update functions for the Elm-style architecture
//!
//! All state transformations flow through these functions.

mod cycle;

use tracing::{debug, error};

use crate::commands::Cmd;
use crate::error::EditorError;
use crate::host::Host;
use crate::messages::Msg;
use crate::model::FormulaEditor;

pub use cycle::{handle_input, insert_symbol, reconcile, render_external};

/// Main update function - dispatches to the cycle handlers
///
/// Returns the side effect to run, if any. Messages that do not apply to the
/// editor's mode are ignored and yield `Ok(None)`.
pub fn update(
    editor: &mut FormulaEditor,
    host: &dyn Host,
    msg: Msg,
) -> Result<Option<Cmd>, EditorError> {
    if !editor.is_attached() {
        debug!("Dropping {:?}: editor is detached", msg);
        return Err(EditorError::Detached);
    }

    match msg {
        Msg::Mounted | Msg::Updated => render_external(editor, host),
        Msg::AttributesChanged(attributes) => {
            if !host.has_input(&attributes.target_input) {
                error!(
                    "Backing store '{}' not found, keeping previous attributes",
                    attributes.target_input
                );
                return Err(EditorError::BackingStoreNotFound {
                    id: attributes.target_input,
                });
            }
            editor.set_attributes(attributes);
            render_external(editor, host)
        }
        Msg::Input => Ok(handle_input(editor)),
        Msg::InsertSymbol(symbol) => Ok(insert_symbol(editor, &symbol)),
        Msg::Destroyed => {
            debug!("Detaching editor for '{}'", editor.target());
            editor.detach();
            Ok(None)
        }
    }
}

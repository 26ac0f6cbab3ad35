//! Runtime module - drives one editor against its host page
//!
//! The runtime owns the editor, the host and the symbol palette. Every user
//! or page event becomes a [`Msg`], goes through [`update`], and the
//! resulting [`Cmd`] is executed against the host.

use tracing::{debug, error};

use crate::commands::Cmd;
use crate::error::EditorError;
use crate::host::Host;
use crate::messages::Msg;
use crate::model::{Attributes, EditorAttributes, EditorMode, FormulaEditor, SymbolPalette};
use crate::update::update;

pub struct Runtime<H: Host> {
    editor: FormulaEditor,
    host: H,
    palette: SymbolPalette,
}

impl<H: Host> Runtime<H> {
    /// Attach an editor configured by `attributes` to `host` and render it
    pub fn mount(
        mode: EditorMode,
        attributes: &Attributes,
        host: H,
        palette: SymbolPalette,
    ) -> Result<Self, EditorError> {
        let attributes = EditorAttributes::from_attributes(attributes)
            .inspect_err(|e| error!("Cannot mount formula editor: {}", e))?;
        let editor = FormulaEditor::attach(mode, attributes, &host)?;

        let mut runtime = Self {
            editor,
            host,
            palette,
        };
        runtime.dispatch(Msg::Mounted)?;
        Ok(runtime)
    }

    pub fn editor(&self) -> &FormulaEditor {
        &self.editor
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn palette(&self) -> &SymbolPalette {
        &self.palette
    }

    pub fn into_host(self) -> H {
        self.host
    }

    /// Run one message through `update` and execute its command
    pub fn dispatch(&mut self, msg: Msg) -> Result<(), EditorError> {
        if let Some(cmd) = update(&mut self.editor, &self.host, msg)? {
            self.process_cmd(cmd)?;
        }
        Ok(())
    }

    fn process_cmd(&mut self, cmd: Cmd) -> Result<(), EditorError> {
        match cmd {
            Cmd::None => {}
            Cmd::SyncBackingStore { target, value } => {
                self.host
                    .set_input_value(&target, &value)
                    .inspect_err(|e| error!("Cannot sync backing store: {}", e))?;
                self.host.dispatch_change(&target)?;
            }
        }
        Ok(())
    }

    /// Type `text` at the caret, as a keyboard would, then run the cycle
    pub fn type_text(&mut self, text: &str) -> Result<(), EditorError> {
        self.edit_surface(|editor| editor.surface_mut().type_text(text))
    }

    /// Backspace at the caret, then run the cycle
    pub fn delete_backward(&mut self) -> Result<(), EditorError> {
        self.edit_surface(|editor| editor.surface_mut().delete_backward())
    }

    /// Place the live caret at a flat offset. No cycle runs.
    pub fn set_caret(&mut self, offset: usize) -> Result<(), EditorError> {
        self.select(offset, offset)
    }

    /// Select a flat range on the live surface. No cycle runs.
    pub fn select(&mut self, start: usize, end: usize) -> Result<(), EditorError> {
        self.ensure_attached()?;
        self.editor.surface_mut().select(start, end);
        Ok(())
    }

    /// Move focus off the surface, dropping the live selection
    pub fn blur(&mut self) -> Result<(), EditorError> {
        self.ensure_attached()?;
        self.editor.surface_mut().set_selection(None);
        Ok(())
    }

    /// Click palette control `index`
    pub fn click_symbol(&mut self, index: usize) -> Result<(), EditorError> {
        let symbol = self
            .palette
            .symbol_at(index)
            .inspect_err(|e| error!("Palette click ignored: {}", e))?
            .to_string();
        self.dispatch(Msg::InsertSymbol(symbol))
    }

    /// Change the backing store from outside the editor and re-render
    pub fn set_backing_value(&mut self, value: &str) -> Result<(), EditorError> {
        self.ensure_attached()?;
        let target = self.editor.target().to_string();
        self.host.set_input_value(&target, value)?;
        self.dispatch(Msg::Updated)
    }

    /// Apply a new attribute map to the editor element
    pub fn set_attributes(&mut self, attributes: &Attributes) -> Result<(), EditorError> {
        let attributes = EditorAttributes::from_attributes(attributes)?;
        self.dispatch(Msg::AttributesChanged(attributes))
    }

    pub fn destroy(&mut self) -> Result<(), EditorError> {
        self.dispatch(Msg::Destroyed)
    }

    fn edit_surface(&mut self, edit: impl FnOnce(&mut FormulaEditor)) -> Result<(), EditorError> {
        self.ensure_attached()?;
        if !self.editor.mode().is_interactive() {
            debug!("Surface of '{}' is not editable", self.editor.target());
            return Ok(());
        }
        edit(&mut self.editor);
        self.dispatch(Msg::Input)
    }

    fn ensure_attached(&self) -> Result<(), EditorError> {
        if self.editor.is_attached() {
            Ok(())
        } else {
            Err(EditorError::Detached)
        }
    }
}

//! Editor state - the formula text, its rendered surface and the caret

use tracing::{error, trace};

use super::attributes::EditorAttributes;
use crate::commands::Cmd;
use crate::editable::CaretSelection;
use crate::error::EditorError;
use crate::host::Host;
use crate::surface::Surface;
use crate::syntax::Vocabulary;

/// Whether the editor accepts user edits
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EditorMode {
    /// Editable surface: caret is captured and restored on every render
    #[default]
    Interactive,
    /// Read-only highlighted view of the backing store value
    DisplayOnly,
}

impl EditorMode {
    pub fn is_interactive(&self) -> bool {
        matches!(self, EditorMode::Interactive)
    }
}

/// Phase of the edit cycle
///
/// Every cycle runs `Idle → Capturing → Rendering → Restoring → Idle` inside
/// a single `update` call, so outside of it the editor is always `Idle`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CycleState {
    #[default]
    Idle,
    Capturing,
    Rendering,
    Restoring,
}

impl CycleState {
    /// The phase that must follow this one
    pub fn next(self) -> Self {
        match self {
            CycleState::Idle => CycleState::Capturing,
            CycleState::Capturing => CycleState::Rendering,
            CycleState::Rendering => CycleState::Restoring,
            CycleState::Restoring => CycleState::Idle,
        }
    }
}

/// One formula editor attached to a host page
#[derive(Debug, Clone)]
pub struct FormulaEditor {
    mode: EditorMode,
    attributes: EditorAttributes,
    surface: Surface,
    /// Flat formula text, the single source of truth for rendering
    text: String,
    /// Caret captured by the last cycle
    position: Option<CaretSelection>,
    state: CycleState,
    attached: bool,
}

impl FormulaEditor {
    /// Attach to `host`, failing fast when the backing store is missing.
    ///
    /// The surface stays empty until the first render (`Msg::Mounted`).
    pub fn attach(
        mode: EditorMode,
        attributes: EditorAttributes,
        host: &dyn Host,
    ) -> Result<Self, EditorError> {
        let Some(value) = host.input_value(&attributes.target_input) else {
            error!(
                "Backing store '{}' not found, editor not attached",
                attributes.target_input
            );
            return Err(EditorError::BackingStoreNotFound {
                id: attributes.target_input,
            });
        };

        Ok(Self {
            mode,
            text: value.to_string(),
            attributes,
            surface: Surface::new(),
            position: None,
            state: CycleState::Idle,
            attached: true,
        })
    }

    pub fn mode(&self) -> EditorMode {
        self.mode
    }

    pub fn attributes(&self) -> &EditorAttributes {
        &self.attributes
    }

    /// Id of the backing store element
    pub fn target(&self) -> &str {
        &self.attributes.target_input
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        &self.attributes.variables
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn position(&self) -> Option<CaretSelection> {
        self.position
    }

    pub fn cycle_state(&self) -> CycleState {
        self.state
    }

    pub fn is_attached(&self) -> bool {
        self.attached
    }

    pub fn surface(&self) -> &Surface {
        &self.surface
    }

    /// Mutable surface, for hosts emulating user edits
    pub fn surface_mut(&mut self) -> &mut Surface {
        &mut self.surface
    }

    pub(crate) fn set_attributes(&mut self, attributes: EditorAttributes) {
        self.attributes = attributes;
    }

    pub(crate) fn set_text(&mut self, text: String) {
        self.text = text;
    }

    pub(crate) fn set_position(&mut self, position: Option<CaretSelection>) {
        self.position = position;
    }

    pub(crate) fn transition(&mut self, next: CycleState) {
        trace!("cycle: {:?} → {:?}", self.state, next);
        debug_assert_eq!(next, self.state.next(), "cycle phase skipped");
        self.state = next;
    }

    /// Command pushing the current text to the backing store
    pub(crate) fn sync_cmd(&self) -> Cmd {
        Cmd::SyncBackingStore {
            target: self.attributes.target_input.clone(),
            value: self.text.clone(),
        }
    }

    /// Drop all state; later messages are rejected
    pub(crate) fn detach(&mut self) {
        self.surface = Surface::new();
        self.text.clear();
        self.position = None;
        self.state = CycleState::Idle;
        self.attached = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::Page;

    fn attributes() -> EditorAttributes {
        EditorAttributes::new("formula", Vocabulary::parse("x"))
    }

    #[test]
    fn test_attach_reads_backing_store() {
        let page = Page::new().with_input("formula", "x+1");
        let editor = FormulaEditor::attach(EditorMode::Interactive, attributes(), &page).unwrap();

        assert!(editor.is_attached());
        assert_eq!(editor.text(), "x+1");
        assert_eq!(editor.cycle_state(), CycleState::Idle);
        assert!(editor.surface().nodes().is_empty());
        assert_eq!(editor.position(), None);
    }

    #[test]
    fn test_cycle_phases_wrap_back_to_idle() {
        let mut state = CycleState::Idle;
        let mut seen = Vec::new();
        for _ in 0..4 {
            state = state.next();
            seen.push(state);
        }
        assert_eq!(
            seen,
            [
                CycleState::Capturing,
                CycleState::Rendering,
                CycleState::Restoring,
                CycleState::Idle,
            ]
        );
    }

    #[test]
    fn test_attach_without_backing_store_fails() {
        let page = Page::new().with_input("other", "");
        let err = FormulaEditor::attach(EditorMode::Interactive, attributes(), &page).unwrap_err();
        assert_eq!(
            err,
            EditorError::BackingStoreNotFound {
                id: "formula".to_string()
            }
        );
    }

    #[test]
    fn test_detach_clears_state() {
        let page = Page::new().with_input("formula", "1");
        let mut editor =
            FormulaEditor::attach(EditorMode::DisplayOnly, attributes(), &page).unwrap();
        editor.set_position(Some(CaretSelection::collapsed(1)));
        editor.detach();

        assert!(!editor.is_attached());
        assert_eq!(editor.text(), "");
        assert_eq!(editor.position(), None);
    }
}

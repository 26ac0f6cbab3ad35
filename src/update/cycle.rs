//! The edit cycle: capture the caret, re-render from flat text, restore

use tracing::{debug, error};

use crate::commands::Cmd;
use crate::editable::{restore, CaretSelection, NodeSelection};
use crate::error::EditorError;
use crate::host::Host;
use crate::model::{CycleState, FormulaEditor};
use crate::syntax::{highlight, RenderedTree, Vocabulary};
use crate::tracing::caret_diff;

/// Render `value` and place `previous` into the new tree.
///
/// Pure: the same inputs always give the same tree and selection. The
/// caret is clamped to the new text length.
pub fn reconcile(
    previous: Option<CaretSelection>,
    value: &str,
    vocabulary: &Vocabulary,
) -> (RenderedTree, Option<NodeSelection>) {
    let tree = highlight(value, vocabulary);
    let selection = previous.map(|caret| restore(tree.nodes(), caret));
    (tree, selection)
}

/// Re-render from the backing store value (`Mounted`, `Updated`)
pub fn render_external(
    editor: &mut FormulaEditor,
    host: &dyn Host,
) -> Result<Option<Cmd>, EditorError> {
    let Some(value) = host.input_value(editor.target()) else {
        error!("Backing store '{}' disappeared", editor.target());
        return Err(EditorError::BackingStoreNotFound {
            id: editor.target().to_string(),
        });
    };
    let value = value.to_string();

    editor.transition(CycleState::Capturing);
    // Display-only editors never carry a caret
    let previous = if editor.mode().is_interactive() {
        editor.position()
    } else {
        None
    };

    rerender(editor, value, previous);
    debug!(
        "external render of '{}': {} chars",
        editor.target(),
        editor.text().chars().count()
    );
    Ok(Some(editor.sync_cmd()))
}

/// The user edited the surface: rebuild it from its own text content
pub fn handle_input(editor: &mut FormulaEditor) -> Option<Cmd> {
    if !editor.mode().is_interactive() {
        debug!("Ignoring input on display-only editor '{}'", editor.target());
        return None;
    }

    let before = editor.position();
    editor.transition(CycleState::Capturing);
    // Focus may have left the surface since the last cycle
    let caret = editor.surface().caret().or(before);
    let text = editor.surface().text_content();

    rerender(editor, text, caret);
    log_cycle("input", editor, before);
    Some(editor.sync_cmd())
}

/// Append `symbol` to the formula, keeping the caret where it was
pub fn insert_symbol(editor: &mut FormulaEditor, symbol: &str) -> Option<Cmd> {
    if !editor.mode().is_interactive() {
        debug!("Ignoring symbol {:?} on display-only editor", symbol);
        return None;
    }

    let before = editor.position();
    editor.transition(CycleState::Capturing);
    // Clicking a palette control may have taken the live selection away
    let caret = editor.surface().caret().or(before);
    let text = format!("{}{}", editor.text(), symbol);

    rerender(editor, text, caret);
    log_cycle("insert symbol", editor, before);
    Some(editor.sync_cmd())
}

/// Rendering and Restoring phases, ending back in Idle
fn rerender(editor: &mut FormulaEditor, text: String, caret: Option<CaretSelection>) {
    editor.transition(CycleState::Rendering);
    let (tree, selection) = reconcile(caret, &text, editor.vocabulary());
    let len = tree.text_len();

    editor.set_text(text);
    editor.surface_mut().replace_children(tree.into_nodes());

    editor.transition(CycleState::Restoring);
    editor.surface_mut().set_selection(selection);
    editor.set_position(caret.map(|c| c.clamp_to(len)));

    editor.transition(CycleState::Idle);
}

fn log_cycle(kind: &str, editor: &FormulaEditor, before: Option<CaretSelection>) {
    match caret_diff(before, editor.position()) {
        Some(diff) => debug!("{} cycle: {:?}, {}", kind, editor.text(), diff),
        None => debug!("{} cycle: {:?}", kind, editor.text()),
    }
}

//! The page hosting an editor
//!
//! The editor touches the rest of the page only through its backing store:
//! an input element, looked up by id, whose value it writes and on which it
//! dispatches `change` events. [`Host`] is that seam; [`Page`] is the
//! in-memory implementation.

use std::collections::BTreeMap;

use crate::error::EditorError;

/// A `change` event as dispatched on a backing-store element
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeEvent {
    pub target: String,
    pub value: String,
    pub bubbles: bool,
}

pub trait Host {
    /// Current value of the input with `id`, `None` if there is no such input
    fn input_value(&self, id: &str) -> Option<&str>;

    fn set_input_value(&mut self, id: &str, value: &str) -> Result<(), EditorError>;

    /// Dispatch a bubbling `change` event on the input with `id`
    fn dispatch_change(&mut self, id: &str) -> Result<(), EditorError>;

    fn has_input(&self, id: &str) -> bool {
        self.input_value(id).is_some()
    }
}

/// In-memory page: input values by id plus a log of dispatched events
#[derive(Debug, Clone, Default)]
pub struct Page {
    inputs: BTreeMap<String, String>,
    events: Vec<ChangeEvent>,
}

impl Page {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`Page::insert_input`]
    pub fn with_input(mut self, id: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert_input(id, value);
        self
    }

    /// Add an input, or overwrite its value, without dispatching anything
    pub fn insert_input(&mut self, id: impl Into<String>, value: impl Into<String>) {
        self.inputs.insert(id.into(), value.into());
    }

    pub fn events(&self) -> &[ChangeEvent] {
        &self.events
    }

    pub fn take_events(&mut self) -> Vec<ChangeEvent> {
        std::mem::take(&mut self.events)
    }

    /// Number of change events dispatched on `id`
    pub fn change_count(&self, id: &str) -> usize {
        self.events.iter().filter(|e| e.target == id).count()
    }
}

impl Host for Page {
    fn input_value(&self, id: &str) -> Option<&str> {
        self.inputs.get(id).map(String::as_str)
    }

    fn set_input_value(&mut self, id: &str, value: &str) -> Result<(), EditorError> {
        let input = self
            .inputs
            .get_mut(id)
            .ok_or_else(|| EditorError::BackingStoreNotFound { id: id.to_string() })?;
        input.clear();
        input.push_str(value);
        Ok(())
    }

    fn dispatch_change(&mut self, id: &str) -> Result<(), EditorError> {
        let value = self
            .input_value(id)
            .ok_or_else(|| EditorError::BackingStoreNotFound { id: id.to_string() })?
            .to_string();
        tracing::trace!("change event on #{}: {:?}", id, value);
        self.events.push(ChangeEvent {
            target: id.to_string(),
            value,
            bubbles: true,
        });
        Ok(())
    }
}

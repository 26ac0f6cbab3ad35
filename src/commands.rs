//! Command types for the Elm-style architecture
//!
//! Commands represent side effects that should be performed after an update.

/// Side effects returned by `update` and executed by the runtime
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Cmd {
    /// No-op command
    #[default]
    None,
    /// Write `value` to the backing store `target`, then dispatch one
    /// bubbling `change` event on it
    SyncBackingStore { target: String, value: String },
}

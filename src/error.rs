//! Errors raised by the formula editor
//!
//! All of these are configuration-time problems: the editor has no transient
//! failures, so nothing here is retried.

/// Errors that can occur when attaching or driving an editor
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditorError {
    /// The editor element has no `target-input` attribute
    MissingTargetAttribute,
    /// `target-input` names an element the host page does not have
    BackingStoreNotFound { id: String },
    /// A palette control has no `equation-symbol` attribute
    MissingSymbolAttribute { control: usize },
    /// A palette click named a control that does not exist
    UnknownControl { control: usize },
    /// A message arrived after the editor was destroyed
    Detached,
}

impl std::fmt::Display for EditorError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingTargetAttribute => write!(f, "editor has no target-input attribute"),
            Self::BackingStoreNotFound { id } => {
                write!(f, "backing store element '{}' not found", id)
            }
            Self::MissingSymbolAttribute { control } => {
                write!(f, "palette control {} has no equation-symbol attribute", control)
            }
            Self::UnknownControl { control } => write!(f, "palette control {} does not exist", control),
            Self::Detached => write!(f, "editor is detached"),
        }
    }
}

impl std::error::Error for EditorError {}

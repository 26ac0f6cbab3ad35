//! Configuration attributes read from the page
//!
//! Attribute maps come from the host element's dataset. Keys are accepted
//! with or without the `data-` prefix (`target-input` or
//! `data-target-input`).

use std::collections::BTreeMap;

use crate::error::EditorError;
use crate::syntax::Vocabulary;

pub const TARGET_INPUT: &str = "target-input";
pub const VARIABLES: &str = "variables";
pub const EQUATION_SYMBOL: &str = "equation-symbol";

/// Raw attribute map of one element
pub type Attributes = BTreeMap<String, String>;

/// Look up an attribute by name, accepting the `data-` prefixed form
pub fn attribute<'a>(attributes: &'a Attributes, name: &str) -> Option<&'a str> {
    attributes
        .get(name)
        .or_else(|| attributes.get(&format!("data-{}", name)))
        .map(String::as_str)
}

/// Build an attribute map from pairs
pub fn attributes<I, K, V>(pairs: I) -> Attributes
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<String>,
{
    pairs
        .into_iter()
        .map(|(k, v)| (k.into(), v.into()))
        .collect()
}

/// Attributes of the editor element
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorAttributes {
    /// Id of the backing plain-value element
    pub target_input: String,
    /// Variable vocabulary for highlighting
    pub variables: Vocabulary,
}

impl EditorAttributes {
    pub fn new(target_input: impl Into<String>, variables: Vocabulary) -> Self {
        Self {
            target_input: target_input.into(),
            variables,
        }
    }

    /// Parse the editor element's attributes. `target-input` is required;
    /// a missing `variables` attribute means an empty vocabulary.
    pub fn from_attributes(attributes: &Attributes) -> Result<Self, EditorError> {
        let target_input = attribute(attributes, TARGET_INPUT)
            .map(str::trim)
            .filter(|id| !id.is_empty())
            .ok_or(EditorError::MissingTargetAttribute)?;

        let variables = attribute(attributes, VARIABLES)
            .map(Vocabulary::parse)
            .unwrap_or_default();

        Ok(Self::new(target_input, variables))
    }
}

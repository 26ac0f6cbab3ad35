//! Lexical grammar for the formula language
//!
//! A fixed table of token rules plus one rule composed per render from the
//! caller's variable vocabulary. Rules are listed in precedence order: the
//! first rule claims its matches before any later rule sees the text.

use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Built-in function names recognised by the `function` rule
pub const FUNCTION_NAMES: &[&str] = &["sin", "cos", "tan", "round", "ceil", "floor"];

const NUMBER_PATTERN: &str =
    r"-?(?-u:\b)[0-9]+(?:\.[0-9]+)?(?:[eE][+-]?[0-9]+)?(?-u:\b)";
const BOOLEAN_PATTERN: &str = r"(?-u:\b)(?:false|true)(?-u:\b)";
const NULL_PATTERN: &str = r"(?-u:\b)null(?-u:\b)";
const OPERATOR_PATTERN: &str = r"[=!><]=|&&|[*/+><^!]";
const PUNCTUATION_PATTERN: &str = r"[()\[\]]";

/// Classification of a lexical unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenKind {
    Variable,
    Number,
    Boolean,
    Null,
    Function,
    Operator,
    Punctuation,
    /// Fallback for characters no rule claims (including whitespace)
    Plain,
}

impl TokenKind {
    /// All kinds in precedence order
    pub const ALL: [TokenKind; 8] = [
        TokenKind::Variable,
        TokenKind::Number,
        TokenKind::Boolean,
        TokenKind::Null,
        TokenKind::Function,
        TokenKind::Operator,
        TokenKind::Punctuation,
        TokenKind::Plain,
    ];

    /// Stable lowercase name, also used as the primary CSS class
    pub const fn name(&self) -> &'static str {
        match self {
            TokenKind::Variable => "variable",
            TokenKind::Number => "number",
            TokenKind::Boolean => "boolean",
            TokenKind::Null => "null",
            TokenKind::Function => "function",
            TokenKind::Operator => "operator",
            TokenKind::Punctuation => "punctuation",
            TokenKind::Plain => "plain",
        }
    }

    /// Secondary style class (`null` is styled as a keyword)
    pub const fn alias(&self) -> Option<&'static str> {
        match self {
            TokenKind::Null => Some("keyword"),
            _ => None,
        }
    }

    /// Look up a kind by its name
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.name() == name)
    }
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A single grammar rule: every non-empty match of `pattern` becomes a
/// token of `kind`
#[derive(Debug, Clone)]
pub struct Rule {
    pub kind: TokenKind,
    pub pattern: Regex,
}

impl Rule {
    fn builtin(kind: TokenKind, pattern: &str) -> Self {
        let pattern = Regex::new(pattern)
            .unwrap_or_else(|e| panic!("built-in {} pattern is invalid: {}", kind, e));
        Self { kind, pattern }
    }
}

/// The fixed part of the grammar, compiled once per process
fn fixed_rules() -> &'static [Rule] {
    static RULES: OnceLock<Vec<Rule>> = OnceLock::new();
    RULES.get_or_init(|| {
        let functions = format!(r"(?-u:\b)(?:{})(?-u:\b)", FUNCTION_NAMES.join("|"));
        vec![
            Rule::builtin(TokenKind::Number, NUMBER_PATTERN),
            Rule::builtin(TokenKind::Boolean, BOOLEAN_PATTERN),
            Rule::builtin(TokenKind::Null, NULL_PATTERN),
            Rule::builtin(TokenKind::Function, &functions),
            Rule::builtin(TokenKind::Operator, OPERATOR_PATTERN),
            Rule::builtin(TokenKind::Punctuation, PUNCTUATION_PATTERN),
        ]
    })
}

/// Ordered set of variable names supplied by the host page
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct Vocabulary {
    names: Vec<String>,
}

impl Vocabulary {
    /// Build a vocabulary from names. Entries are trimmed; empty entries and
    /// repeats are dropped, keeping the first occurrence.
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut unique: Vec<String> = Vec::new();
        for name in names {
            let name = name.as_ref().trim();
            if !name.is_empty() && !unique.iter().any(|n| n == name) {
                unique.push(name.to_string());
            }
        }
        Self { names: unique }
    }

    /// Parse a comma-separated list, e.g. the `variables` attribute
    pub fn parse(list: &str) -> Self {
        Self::new(list.split(','))
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Names in configuration order
    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }

    /// Pattern source for the variable rule, `None` when the vocabulary is
    /// empty.
    ///
    /// Names are alternated longest first (ties keep configuration order) so
    /// that a name which is a prefix of another never shadows it. Names are
    /// inserted verbatim, without escaping.
    pub fn variable_pattern(&self) -> Option<String> {
        if self.names.is_empty() {
            return None;
        }

        let mut ordered: Vec<&str> = self.names.iter().map(String::as_str).collect();
        ordered.sort_by(|a, b| b.chars().count().cmp(&a.chars().count()));

        Some(format!(r"(?-u:\b)(?:{})(?-u:\b)", ordered.join("|")))
    }
}

impl From<Vec<String>> for Vocabulary {
    fn from(names: Vec<String>) -> Self {
        Self::new(names)
    }
}

impl From<Vocabulary> for Vec<String> {
    fn from(vocabulary: Vocabulary) -> Self {
        vocabulary.names
    }
}

/// The complete rule table for one render
#[derive(Debug, Clone)]
pub struct Grammar {
    rules: Vec<Rule>,
}

impl Grammar {
    /// Compose the grammar for a vocabulary. The variable rule, when present,
    /// takes precedence over every fixed rule.
    ///
    /// A vocabulary that does not form a valid pattern is logged and the
    /// variable rule is left out; highlighting still succeeds.
    pub fn new(vocabulary: &Vocabulary) -> Self {
        let fixed = fixed_rules();
        let mut rules = Vec::with_capacity(fixed.len() + 1);

        if let Some(source) = vocabulary.variable_pattern() {
            match Regex::new(&source) {
                Ok(pattern) => rules.push(Rule {
                    kind: TokenKind::Variable,
                    pattern,
                }),
                Err(e) => {
                    tracing::warn!(
                        "Variable vocabulary {:?} is not a valid pattern, skipping variable rule: {}",
                        vocabulary.names(),
                        e
                    );
                }
            }
        }

        rules.extend(fixed.iter().cloned());
        Self { rules }
    }

    /// Rules in precedence order
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn has_variable_rule(&self) -> bool {
        self.rules
            .first()
            .is_some_and(|rule| rule.kind == TokenKind::Variable)
    }
}

impl Default for Grammar {
    fn default() -> Self {
        Self::new(&Vocabulary::default())
    }
}

//! Formula tokenizer
//!
//! Splits flat text into a gapless sequence of classified tokens. Rules are
//! applied rule-major: each rule, in precedence order, scans every fragment
//! no earlier rule has claimed and splits it around its matches. Whatever is
//! left over at the end becomes `Plain`.

use std::ops::Range;

use serde::Serialize;

use super::grammar::{Grammar, Rule, TokenKind, Vocabulary};

/// A classified lexical unit. `span` is in character offsets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
    pub kind: TokenKind,
    pub lexeme: String,
    pub span: Range<usize>,
}

impl Token {
    pub fn len(&self) -> usize {
        self.span.end - self.span.start
    }

    pub fn is_empty(&self) -> bool {
        self.span.is_empty()
    }
}

/// Working state: byte ranges into the source, claimed or not
#[derive(Debug, Clone)]
enum Fragment {
    Unclaimed(Range<usize>),
    Claimed(TokenKind, Range<usize>),
}

/// Tokenize `text` with the grammar for `vocabulary`
pub fn tokenize(text: &str, vocabulary: &Vocabulary) -> Vec<Token> {
    tokenize_with(&Grammar::new(vocabulary), text)
}

/// Tokenize `text` with an already composed grammar
pub fn tokenize_with(grammar: &Grammar, text: &str) -> Vec<Token> {
    if text.is_empty() {
        return Vec::new();
    }

    let mut fragments = vec![Fragment::Unclaimed(0..text.len())];

    for rule in grammar.rules() {
        let mut next = Vec::with_capacity(fragments.len());
        for fragment in fragments {
            match fragment {
                Fragment::Unclaimed(range) => split_fragment(text, range, rule, &mut next),
                claimed => next.push(claimed),
            }
        }
        fragments = next;
    }

    let mut offset = 0;
    fragments
        .into_iter()
        .map(|fragment| {
            let (kind, range) = match fragment {
                Fragment::Unclaimed(range) => (TokenKind::Plain, range),
                Fragment::Claimed(kind, range) => (kind, range),
            };
            let lexeme = text[range].to_string();
            let len = lexeme.chars().count();
            let span = offset..offset + len;
            offset += len;
            Token { kind, lexeme, span }
        })
        .collect()
}

/// Split one unclaimed fragment around every match of `rule`.
///
/// After each match the remainder is searched as a fresh string, so word
/// boundaries at its start are judged without looking back at the match.
fn split_fragment(text: &str, range: Range<usize>, rule: &Rule, out: &mut Vec<Fragment>) {
    let mut start = range.start;

    while start < range.end {
        let rest = &text[start..range.end];
        let Some(found) = rule.pattern.find(rest) else {
            break;
        };
        if found.is_empty() {
            break;
        }

        if found.start() > 0 {
            out.push(Fragment::Unclaimed(start..start + found.start()));
        }
        out.push(Fragment::Claimed(
            rule.kind,
            start + found.start()..start + found.end(),
        ));
        start += found.end();
    }

    if start < range.end {
        out.push(Fragment::Unclaimed(start..range.end));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(text: &str, vocab: &str) -> Vec<(TokenKind, String)> {
        tokenize(text, &Vocabulary::parse(vocab))
            .into_iter()
            .map(|t| (t.kind, t.lexeme))
            .collect()
    }

    #[test]
    fn test_empty_input_has_no_tokens() {
        assert!(tokenize("", &Vocabulary::default()).is_empty());
    }

    #[test]
    fn test_unmatched_characters_group_into_plain_runs() {
        assert_eq!(
            kinds("ab 1", ""),
            vec![
                (TokenKind::Plain, "ab ".to_string()),
                (TokenKind::Number, "1".to_string()),
            ]
        );
    }

    #[test]
    fn test_negative_numbers_and_exponents() {
        assert_eq!(
            kinds("-1.5e+3", ""),
            vec![(TokenKind::Number, "-1.5e+3".to_string())]
        );
        assert_eq!(
            kinds("1-2", ""),
            vec![
                (TokenKind::Number, "1".to_string()),
                (TokenKind::Number, "-2".to_string()),
            ]
        );
        assert_eq!(kinds("2E5", ""), vec![(TokenKind::Number, "2E5".to_string())]);
    }

    #[test]
    fn test_digits_inside_words_are_not_numbers() {
        assert_eq!(kinds("x2", ""), vec![(TokenKind::Plain, "x2".to_string())]);
    }

    #[test]
    fn test_comparison_operators_are_single_tokens() {
        assert_eq!(
            kinds("1<=2!=3", ""),
            vec![
                (TokenKind::Number, "1".to_string()),
                (TokenKind::Operator, "<=".to_string()),
                (TokenKind::Number, "2".to_string()),
                (TokenKind::Operator, "!=".to_string()),
                (TokenKind::Number, "3".to_string()),
            ]
        );
    }

    #[test]
    fn test_spans_use_character_offsets() {
        let tokens = tokenize("é+1", &Vocabulary::default());
        assert_eq!(tokens[0].span, 0..1);
        assert_eq!(tokens[1].span, 1..2);
        assert_eq!(tokens[2].span, 2..3);
    }

    #[test]
    fn test_variable_beats_function_name() {
        assert_eq!(
            kinds("round", "round"),
            vec![(TokenKind::Variable, "round".to_string())]
        );
    }

    #[test]
    fn test_variable_requires_word_boundary() {
        assert_eq!(
            kinds("xy+x", "x"),
            vec![
                (TokenKind::Plain, "xy".to_string()),
                (TokenKind::Operator, "+".to_string()),
                (TokenKind::Variable, "x".to_string()),
            ]
        );
    }
}

//! Command-line argument parsing for the `formula` binary
//!
//! Supports:
//! - Highlighting a formula given as an argument or on stdin
//! - Variable vocabularies (overriding the config file)
//! - Token, JSON, HTML and ANSI output
//! - Locating a caret offset inside the rendered tree
//! - Listing the user and builtin themes

use clap::{Parser, ValueEnum};

use crate::config::EditorConfig;
use crate::editable::locate;
use crate::syntax::{highlight_with, render, tokenize_with, Grammar, Vocabulary};
use crate::theme::{Theme, ThemeInfo, ThemeSource};

/// Syntax highlighter for formula expressions
#[derive(Parser, Debug)]
#[command(name = "formula", version, about = "Syntax highlighter for formula expressions")]
pub struct CliArgs {
    /// Formula to highlight (read from stdin when omitted)
    #[arg(value_name = "FORMULA")]
    pub formula: Option<String>,

    /// Comma-separated variable names (defaults to the config file's list)
    #[arg(long, value_name = "NAMES")]
    pub variables: Option<String>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Tokens)]
    pub format: OutputFormat,

    /// Theme id for ANSI output
    #[arg(long, value_name = "ID")]
    pub theme: Option<String>,

    /// Also print where flat offset N lands in the rendered tree
    #[arg(long, value_name = "N")]
    pub caret: Option<usize>,

    /// List available themes and exit
    #[arg(long)]
    pub list_themes: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One token per line: kind, span, lexeme
    Tokens,
    /// Token list as JSON
    Json,
    /// Rendered tree as HTML
    Html,
    /// Rendered tree with terminal colors
    Ansi,
}

/// Everything needed to highlight one formula
#[derive(Debug, Clone)]
pub struct HighlightRequest {
    /// Formula text, `None` when it must come from stdin
    pub formula: Option<String>,
    pub vocabulary: Vocabulary,
    pub format: OutputFormat,
    pub theme: String,
    pub caret: Option<usize>,
}

impl CliArgs {
    /// Merge CLI args over the persisted configuration
    pub fn into_request(self, config: &EditorConfig) -> HighlightRequest {
        let vocabulary = match self.variables {
            Some(list) => Vocabulary::parse(&list),
            None => config.variables.clone(),
        };

        HighlightRequest {
            formula: self.formula,
            vocabulary,
            format: self.format,
            theme: self.theme.unwrap_or_else(|| config.theme.clone()),
            caret: self.caret,
        }
    }
}

/// Produce the output for `text` in the requested format
pub fn render_output(
    request: &HighlightRequest,
    text: &str,
    theme: &Theme,
) -> Result<String, String> {
    let grammar = Grammar::new(&request.vocabulary);
    let tree = highlight_with(&grammar, text);

    let mut out = match request.format {
        OutputFormat::Tokens => tokenize_with(&grammar, text)
            .iter()
            .map(|token| {
                format!(
                    "{:<12} {:>3}..{:<3} {:?}\n",
                    token.kind.name(),
                    token.span.start,
                    token.span.end,
                    token.lexeme
                )
            })
            .collect(),
        OutputFormat::Json => {
            let tokens = tokenize_with(&grammar, text);
            let mut json = serde_json::to_string_pretty(&tokens)
                .map_err(|e| format!("Failed to serialize tokens: {}", e))?;
            json.push('\n');
            json
        }
        OutputFormat::Html => format!("{}\n", render::to_html(tree.nodes())),
        OutputFormat::Ansi => format!("{}\n", render::to_ansi(tree.nodes(), theme)),
    };

    if let Some(offset) = request.caret {
        let point = locate(tree.nodes(), offset);
        out.push_str(&format!(
            "caret {} -> path {:?} offset {}\n",
            offset, point.path, point.offset
        ));
    }

    Ok(out)
}

/// One line per theme: id, source, display name
pub fn theme_listing(themes: &[ThemeInfo]) -> String {
    themes
        .iter()
        .map(|theme| {
            let source = match theme.source {
                ThemeSource::User => "user",
                ThemeSource::Builtin => "builtin",
            };
            format!("{:<16} {:<8} {}\n", theme.id, source, theme.name)
        })
        .collect()
}

/// Strip the trailing line break a shell pipe adds
pub fn trim_stdin(input: &str) -> &str {
    input
        .strip_suffix('\n')
        .map(|s| s.strip_suffix('\r').unwrap_or(s))
        .unwrap_or(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(format: OutputFormat, variables: &str) -> HighlightRequest {
        HighlightRequest {
            formula: None,
            vocabulary: Vocabulary::parse(variables),
            format,
            theme: "default-dark".to_string(),
            caret: None,
        }
    }

    #[test]
    fn test_cli_variables_override_config() {
        let config = EditorConfig {
            variables: Vocabulary::parse("a,b"),
            ..EditorConfig::default()
        };
        let args = CliArgs::parse_from(["formula", "x+1", "--variables", "x"]);
        let request = args.into_request(&config);
        assert_eq!(request.formula.as_deref(), Some("x+1"));
        assert_eq!(request.vocabulary.names(), &["x"]);
        assert_eq!(request.format, OutputFormat::Tokens);
        assert_eq!(request.theme, "default-dark");
    }

    #[test]
    fn test_config_variables_used_by_default() {
        let config = EditorConfig {
            variables: Vocabulary::parse("a,b"),
            ..EditorConfig::default()
        };
        let args = CliArgs::parse_from(["formula", "--format", "html", "--theme", "default-light"]);
        let request = args.into_request(&config);
        assert_eq!(request.formula, None);
        assert_eq!(request.vocabulary.names(), &["a", "b"]);
        assert_eq!(request.format, OutputFormat::Html);
        assert_eq!(request.theme, "default-light");
    }

    #[test]
    fn test_html_output() {
        let out = render_output(&request(OutputFormat::Html, "x"), "x<1", &Theme::default()).unwrap();
        assert_eq!(
            out,
            "<span class=\"token variable\">x</span>\
             <span class=\"token operator\">&lt;</span>\
             <span class=\"token number\">1</span>\n"
        );
    }

    #[test]
    fn test_tokens_output_lists_every_token() {
        let out =
            render_output(&request(OutputFormat::Tokens, ""), "1 + 2", &Theme::default()).unwrap();
        assert_eq!(out.lines().count(), 5);
        assert!(out.lines().next().unwrap().starts_with("number"));
    }

    #[test]
    fn test_json_output_parses() {
        let out = render_output(&request(OutputFormat::Json, ""), "null", &Theme::default()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value[0]["kind"], "null");
        assert_eq!(value[0]["lexeme"], "null");
    }

    #[test]
    fn test_caret_line() {
        let mut req = request(OutputFormat::Html, "");
        req.caret = Some(1);
        let out = render_output(&req, "12", &Theme::default()).unwrap();
        assert!(out.ends_with("caret 1 -> path [0, 0] offset 1\n"));
    }

    #[test]
    fn test_theme_listing() {
        let args = CliArgs::parse_from(["formula", "--list-themes"]);
        assert!(args.list_themes);

        let themes = [
            ThemeInfo {
                id: "mono".to_string(),
                name: "Mono".to_string(),
                source: ThemeSource::User,
            },
            ThemeInfo {
                id: "default-dark".to_string(),
                name: "Default Dark".to_string(),
                source: ThemeSource::Builtin,
            },
        ];
        let listing = theme_listing(&themes);
        let lines: Vec<&str> = listing.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("mono"));
        assert!(lines[0].contains(" user "));
        assert!(lines[1].ends_with("builtin  Default Dark"));
    }

    #[test]
    fn test_trim_stdin() {
        assert_eq!(trim_stdin("x+1\n"), "x+1");
        assert_eq!(trim_stdin("x+1\r\n"), "x+1");
        assert_eq!(trim_stdin("x+1"), "x+1");
    }
}

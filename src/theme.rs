//! Token color themes
//!
//! Provides YAML-based theming for highlighted output with compile-time
//! embedded themes and user-defined themes from the config directory.
//!
//! Theme loading priority:
//! 1. User config: `~/.config/formula-input/themes/{id}.yaml`
//! 2. Embedded: Built-in themes compiled into binary

use std::path::Path;

use serde::Deserialize;

use crate::syntax::TokenKind;

// Embed theme YAML files at compile time
pub const DEFAULT_DARK_YAML: &str = include_str!("../themes/dark.yaml");
pub const DEFAULT_LIGHT_YAML: &str = include_str!("../themes/light.yaml");

/// A built-in theme entry
pub struct BuiltinTheme {
    /// Stable identifier for config (e.g. "default-dark")
    pub id: &'static str,
    /// Embedded YAML content
    pub yaml: &'static str,
}

/// Registry of all built-in themes
pub const BUILTIN_THEMES: &[BuiltinTheme] = &[
    BuiltinTheme {
        id: "default-dark",
        yaml: DEFAULT_DARK_YAML,
    },
    BuiltinTheme {
        id: "default-light",
        yaml: DEFAULT_LIGHT_YAML,
    },
];

/// Where the theme came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeSource {
    /// User-defined theme in ~/.config/formula-input/themes/
    User,
    /// Built-in theme embedded in binary
    Builtin,
}

/// Information about an available theme
#[derive(Debug, Clone)]
pub struct ThemeInfo {
    pub id: String,
    pub name: String,
    pub source: ThemeSource,
}

/// Load a theme from a YAML file
pub fn from_file(path: &Path) -> Result<Theme, String> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| format!("Failed to read theme file {}: {}", path.display(), e))?;
    Theme::from_yaml(&content)
}

/// Load theme by id with priority: user → builtin
pub fn load_theme(id: &str) -> Result<Theme, String> {
    if let Some(user_dir) = crate::config_paths::themes_dir() {
        let user_path = user_dir.join(format!("{}.yaml", id));
        if user_path.exists() {
            tracing::info!("Loading user theme from {}", user_path.display());
            return from_file(&user_path);
        }
    }

    tracing::debug!("Loading builtin theme: {}", id);
    Theme::from_builtin(id)
}

/// List all available themes; user themes override builtins with the same id
pub fn list_available_themes() -> Vec<ThemeInfo> {
    let mut themes = Vec::new();
    let mut seen_ids = std::collections::HashSet::new();

    if let Some(user_dir) = crate::config_paths::themes_dir() {
        if let Ok(entries) = std::fs::read_dir(&user_dir) {
            for entry in entries.filter_map(|e| e.ok()) {
                let path = entry.path();
                if !path
                    .extension()
                    .is_some_and(|ext| ext == "yaml" || ext == "yml")
                {
                    continue;
                }
                if let Some(id) = path.file_stem().and_then(|s| s.to_str()) {
                    if seen_ids.insert(id.to_string()) {
                        let name = from_file(&path)
                            .map(|t| t.name)
                            .unwrap_or_else(|_| id.to_string());
                        themes.push(ThemeInfo {
                            id: id.to_string(),
                            name,
                            source: ThemeSource::User,
                        });
                    }
                }
            }
        }
    }

    for builtin in BUILTIN_THEMES {
        if seen_ids.insert(builtin.id.to_string()) {
            let name = Theme::from_yaml(builtin.yaml)
                .map(|t| t.name)
                .unwrap_or_else(|_| builtin.id.to_string());
            themes.push(ThemeInfo {
                id: builtin.id.to_string(),
                name,
                source: ThemeSource::Builtin,
            });
        }
    }

    themes
}

/// RGB color (0-255 per channel)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse from a "#RRGGBB" hex string
    pub fn from_hex(s: &str) -> Result<Self, String> {
        let s = s.trim_start_matches('#');
        if !s.is_ascii() || s.len() != 6 {
            return Err(format!("Invalid color format: {}", s));
        }
        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&s[range], 16).map_err(|e| e.to_string())
        };
        Ok(Color::rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }
}

/// Raw theme data as parsed from YAML
#[derive(Debug, Clone, Deserialize)]
pub struct ThemeData {
    pub version: u32,
    pub name: String,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    pub tokens: TokenThemeData,
}

/// Token colors (raw strings from YAML). Only `plain` is required; other
/// kinds fall back to it.
#[derive(Debug, Clone, Deserialize)]
pub struct TokenThemeData {
    pub plain: String,
    #[serde(default)]
    pub variable: Option<String>,
    #[serde(default)]
    pub number: Option<String>,
    #[serde(default)]
    pub boolean: Option<String>,
    #[serde(default)]
    pub null: Option<String>,
    #[serde(default)]
    pub function: Option<String>,
    #[serde(default)]
    pub operator: Option<String>,
    #[serde(default)]
    pub punctuation: Option<String>,
}

/// Resolved token colors
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenTheme {
    pub plain: Color,
    pub variable: Color,
    pub number: Color,
    pub boolean: Color,
    pub null: Color,
    pub function: Color,
    pub operator: Color,
    pub punctuation: Color,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    pub name: String,
    pub tokens: TokenTheme,
}

impl Theme {
    /// Load theme from YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self, String> {
        let data: ThemeData =
            serde_yaml::from_str(yaml).map_err(|e| format!("YAML parse error: {}", e))?;
        Self::from_data(data)
    }

    /// Load a built-in theme by id
    pub fn from_builtin(id: &str) -> Result<Self, String> {
        let entry = BUILTIN_THEMES
            .iter()
            .find(|t| t.id == id)
            .ok_or_else(|| format!("Unknown theme id: {}", id))?;
        Theme::from_yaml(entry.yaml)
    }

    /// Convert raw theme data to resolved theme
    pub fn from_data(data: ThemeData) -> Result<Self, String> {
        let raw = data.tokens;
        let plain = Color::from_hex(&raw.plain)?;
        let resolve = |value: &Option<String>| -> Result<Color, String> {
            value
                .as_deref()
                .map(Color::from_hex)
                .transpose()
                .map(|color| color.unwrap_or(plain))
        };

        Ok(Theme {
            name: data.name,
            tokens: TokenTheme {
                plain,
                variable: resolve(&raw.variable)?,
                number: resolve(&raw.number)?,
                boolean: resolve(&raw.boolean)?,
                null: resolve(&raw.null)?,
                function: resolve(&raw.function)?,
                operator: resolve(&raw.operator)?,
                punctuation: resolve(&raw.punctuation)?,
            },
        })
    }

    /// Color used to paint tokens of `kind`
    pub fn color_for(&self, kind: TokenKind) -> Color {
        let t = &self.tokens;
        match kind {
            TokenKind::Variable => t.variable,
            TokenKind::Number => t.number,
            TokenKind::Boolean => t.boolean,
            TokenKind::Null => t.null,
            TokenKind::Function => t.function,
            TokenKind::Operator => t.operator,
            TokenKind::Punctuation => t.punctuation,
            TokenKind::Plain => t.plain,
        }
    }

    /// Default dark theme (YAML-backed with Rust fallback)
    pub fn default_dark() -> Self {
        match Theme::from_yaml(DEFAULT_DARK_YAML) {
            Ok(theme) => theme,
            Err(_) => {
                let plain = Color::rgb(0xD4, 0xD4, 0xD4);
                Theme {
                    name: "Default Dark".to_string(),
                    tokens: TokenTheme {
                        plain,
                        variable: Color::rgb(0x9C, 0xDC, 0xFE),
                        number: Color::rgb(0xB5, 0xCE, 0xA8),
                        boolean: Color::rgb(0x56, 0x9C, 0xD6),
                        null: Color::rgb(0xC5, 0x86, 0xC0),
                        function: Color::rgb(0xDC, 0xDC, 0xAA),
                        operator: plain,
                        punctuation: Color::rgb(0xFF, 0xD7, 0x00),
                    },
                }
            }
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::default_dark()
    }
}

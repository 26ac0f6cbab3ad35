use formula_input::syntax::{highlight, render, TokenKind, Vocabulary};
use formula_input::theme::{
    from_file, list_available_themes, Color, Theme, BUILTIN_THEMES, DEFAULT_DARK_YAML,
    DEFAULT_LIGHT_YAML,
};

#[test]
fn test_color_from_hex() {
    assert_eq!(Color::from_hex("#9CDCFE").unwrap(), Color::rgb(0x9C, 0xDC, 0xFE));
    assert_eq!(Color::from_hex("1e1e1e").unwrap(), Color::rgb(0x1E, 0x1E, 0x1E));
}

#[test]
fn test_color_from_hex_rejects_garbage() {
    assert!(Color::from_hex("blue").is_err());
    assert!(Color::from_hex("#12345").is_err());
    assert!(Color::from_hex("#1E1E1E80").is_err());
}

#[test]
fn test_default_theme() {
    let theme = Theme::default_dark();
    assert_eq!(theme.name, "Default Dark");
    assert_eq!(Theme::default(), theme);
}

#[test]
fn test_builtin_yaml_parses() {
    assert_eq!(Theme::from_yaml(DEFAULT_DARK_YAML).unwrap().name, "Default Dark");
    assert_eq!(Theme::from_yaml(DEFAULT_LIGHT_YAML).unwrap().name, "Default Light");
    for builtin in BUILTIN_THEMES {
        assert!(Theme::from_builtin(builtin.id).is_ok(), "{}", builtin.id);
    }
}

#[test]
fn test_missing_colors_fall_back_to_plain() {
    let theme = Theme::from_builtin("default-light").unwrap();
    assert_eq!(
        theme.color_for(TokenKind::Punctuation),
        theme.color_for(TokenKind::Plain)
    );
}

#[test]
fn test_unknown_builtin_is_an_error() {
    assert!(Theme::from_builtin("solarized").is_err());
}

#[test]
fn test_theme_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("mono.yaml");
    std::fs::write(
        &path,
        "version: 1\nname: \"Mono\"\ntokens:\n  plain: \"#FFFFFF\"\n  number: \"#00FF00\"\n",
    )
    .unwrap();

    let theme = from_file(&path).unwrap();
    assert_eq!(theme.name, "Mono");
    assert_eq!(theme.color_for(TokenKind::Number), Color::rgb(0, 0xFF, 0));
    assert_eq!(theme.color_for(TokenKind::Variable), Color::rgb(0xFF, 0xFF, 0xFF));
}

#[test]
fn test_builtins_are_listed() {
    let themes = list_available_themes();
    for builtin in BUILTIN_THEMES {
        assert!(themes.iter().any(|t| t.id == builtin.id));
    }
}

#[test]
fn test_ansi_output_keeps_text() {
    let theme = Theme::default_dark();
    let tree = highlight("x + 1", &Vocabulary::parse("x"));
    let ansi = render::to_ansi(tree.nodes(), &theme);

    let number = theme.color_for(TokenKind::Number);
    assert!(ansi.contains(&format!(
        "\x1b[38;2;{};{};{}m1\x1b[0m",
        number.r, number.g, number.b
    )));
    let stripped: String = ansi
        .split('\x1b')
        .map(|chunk| chunk.split_once('m').map_or(chunk, |(_, rest)| rest))
        .collect();
    assert_eq!(stripped, "x + 1");
}

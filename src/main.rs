//! `formula` - highlight a formula expression from the command line

use std::io::{self, Read, Write};

use anyhow::{anyhow, Context, Result};
use clap::Parser;

use formula_input::cli::{render_output, theme_listing, trim_stdin, CliArgs};
use formula_input::config::EditorConfig;
use formula_input::theme::{list_available_themes, load_theme, Theme};

fn main() -> Result<()> {
    formula_input::tracing::init();

    let args = CliArgs::parse();
    if args.list_themes {
        io::stdout()
            .write_all(theme_listing(&list_available_themes()).as_bytes())
            .context("Failed to write output")?;
        return Ok(());
    }

    let config = EditorConfig::load();
    let request = args.into_request(&config);

    let text = match &request.formula {
        Some(text) => text.clone(),
        None => {
            let mut input = String::new();
            io::stdin()
                .read_to_string(&mut input)
                .context("Failed to read formula from stdin")?;
            trim_stdin(&input).to_string()
        }
    };

    let theme = load_theme(&request.theme).unwrap_or_else(|e| {
        tracing::warn!("Falling back to default theme: {}", e);
        Theme::default()
    });

    let output = render_output(&request, &text, &theme).map_err(|e| anyhow!(e))?;
    io::stdout()
        .write_all(output.as_bytes())
        .context("Failed to write output")?;

    Ok(())
}

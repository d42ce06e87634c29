use owo_colors::OwoColorize;
use std::env;
use std::io::{self, IsTerminal};

/// Presentation-only styling. Implementations must not change the visible
/// characters, only wrap them.
pub trait Colorizer {
    fn header(&self, text: &str) -> String;
    fn timestamp(&self, text: &str) -> String;
    fn muted(&self, text: &str) -> String;
    fn label(&self, text: &str) -> String;
}

pub struct PlainColorizer;

impl Colorizer for PlainColorizer {
    fn header(&self, text: &str) -> String {
        text.to_string()
    }

    fn timestamp(&self, text: &str) -> String {
        text.to_string()
    }

    fn muted(&self, text: &str) -> String {
        text.to_string()
    }

    fn label(&self, text: &str) -> String {
        text.to_string()
    }
}

pub struct AnsiColorizer;

impl Colorizer for AnsiColorizer {
    fn header(&self, text: &str) -> String {
        text.bold().to_string()
    }

    fn timestamp(&self, text: &str) -> String {
        text.cyan().to_string()
    }

    fn muted(&self, text: &str) -> String {
        text.dimmed().to_string()
    }

    fn label(&self, text: &str) -> String {
        text.green().bold().to_string()
    }
}

pub fn should_colorize(disabled: bool, is_terminal: bool, no_color_env: bool) -> bool {
    !disabled && is_terminal && !no_color_env
}

/// ANSI colors on an interactive stdout, plain text otherwise or when
/// `NO_COLOR` is set.
pub fn select_colorizer(disabled: bool) -> Box<dyn Colorizer> {
    let colorize = should_colorize(
        disabled,
        io::stdout().is_terminal(),
        env::var_os("NO_COLOR").is_some_and(|v| !v.is_empty()),
    );

    if colorize {
        Box::new(AnsiColorizer)
    } else {
        Box::new(PlainColorizer)
    }
}

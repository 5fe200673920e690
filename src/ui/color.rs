//! Color and formatting utilities for terminal output

use crate::core::status::Status;

pub struct Colors;

impl Colors {
    pub const RESET: &'static str = "\x1b[0m";
    pub const BOLD: &'static str = "\x1b[1m";
    pub const DIM: &'static str = "\x1b[2m";

    pub const BRIGHT_RED: &'static str = "\x1b[91m";
    pub const BRIGHT_GREEN: &'static str = "\x1b[92m";
    pub const BRIGHT_YELLOW: &'static str = "\x1b[93m";
    pub const BRIGHT_BLUE: &'static str = "\x1b[94m";
    pub const BRIGHT_CYAN: &'static str = "\x1b[96m";
    pub const BRIGHT_BLACK: &'static str = "\x1b[90m";
}

/// Apply color to text if terminal supports it
pub fn colorize(text: &str, color: &str) -> String {
    if supports_formatting() {
        format!("{}{}{}", color, text, Colors::RESET)
    } else {
        text.to_string()
    }
}

/// Bold, colored heading text
pub fn heading(text: &str, color: &str) -> String {
    if supports_formatting() {
        format!("{}{}{}{}", Colors::BOLD, color, text, Colors::RESET)
    } else {
        text.to_string()
    }
}

/// Terminal color for a classified metric
pub fn status_color(status: Status) -> &'static str {
    match status {
        Status::Pass => Colors::BRIGHT_GREEN,
        Status::Warning => Colors::BRIGHT_YELLOW,
        Status::Fail => Colors::BRIGHT_RED,
        Status::Unknown => Colors::BRIGHT_BLACK,
    }
}

/// Whether stdout should receive ANSI formatting.
///
/// `NO_COLOR` and `FORCE_COLOR=0` disable it, any other `FORCE_COLOR` enables
/// it, and otherwise it requires a terminal that is not `TERM=dumb`.
pub fn supports_formatting() -> bool {
    use std::env;
    use std::io::IsTerminal;

    if env::var_os("NO_COLOR").is_some() {
        return false;
    }
    if let Ok(force) = env::var("FORCE_COLOR") {
        return force != "0";
    }
    if cfg!(test) || !std::io::stdout().is_terminal() {
        return false;
    }

    !matches!(env::var("TERM").as_deref(), Ok("" | "dumb"))
}

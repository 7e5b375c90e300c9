//! Color and formatting utilities for terminal output

pub struct Colors;

impl Colors {
    pub const RESET: &'static str = "\x1b[0m";
    pub const BOLD: &'static str = "\x1b[1m";

    pub const GREEN: &'static str = "\x1b[32m";
    pub const BRIGHT_CYAN: &'static str = "\x1b[96m";
}

/// Apply color to text when `enabled`, independent of terminal detection
pub fn paint(text: &str, color: &str, enabled: bool) -> String {
    if enabled && !text.is_empty() {
        format!("{}{}{}", color, text, Colors::RESET)
    } else {
        text.to_string()
    }
}

/// Environment facts that decide whether the console report is colored
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TerminalEnv {
    pub no_color: bool,
    pub force_color: Option<String>,
    pub stdout_is_terminal: bool,
    pub term: Option<String>,
}

impl TerminalEnv {
    pub fn detect() -> Self {
        use std::io::IsTerminal;

        Self {
            no_color: std::env::var_os("NO_COLOR").is_some(),
            force_color: std::env::var("FORCE_COLOR").ok(),
            stdout_is_terminal: std::io::stdout().is_terminal(),
            term: std::env::var("TERM").ok(),
        }
    }

    /// `NO_COLOR` wins, then `FORCE_COLOR` (`0` disables), then a terminal
    /// stdout with a usable `TERM`
    pub fn allows_color(&self) -> bool {
        if self.no_color {
            return false;
        }
        if let Some(force) = self.force_color.as_deref() {
            return force != "0";
        }

        self.stdout_is_terminal
            && self
                .term
                .as_deref()
                .is_some_and(|term| !term.is_empty() && term != "dumb")
    }
}

/// Whether the report on stdout should be colored; always off in unit tests
pub fn supports_formatting() -> bool {
    !cfg!(test) && TerminalEnv::detect().allows_color()
}

//! Run configuration for git-sync.
//!
//! There is nothing to configure on the command line: the remote is fixed
//! and colour is decided from the environment. The resulting [`SyncConfig`]
//! is passed explicitly to the code that prints, so formatting never
//! depends on process-wide state.

use std::ffi::OsString;
use std::io::IsTerminal;

/// The only remote git-sync reconciles against.
pub const DEFAULT_REMOTE: &str = "origin";

/// When to emit ANSI colour codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorChoice {
    Always,
    Never,
    /// Colour only when standard output is a terminal.
    #[default]
    Auto,
}

impl ColorChoice {
    /// Decide from the value of `NO_COLOR`. Any non-empty value disables colour.
    pub fn from_no_color(value: Option<OsString>) -> Self {
        match value {
            Some(v) if !v.is_empty() => ColorChoice::Never,
            _ => ColorChoice::Auto,
        }
    }

    fn enabled(self, is_terminal: bool) -> bool {
        match self {
            ColorChoice::Always => true,
            ColorChoice::Never => false,
            ColorChoice::Auto => is_terminal,
        }
    }
}

/// Settings for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncConfig {
    pub remote: String,
    pub color: ColorChoice,
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            remote: DEFAULT_REMOTE.to_string(),
            color: ColorChoice::default(),
        }
    }
}

impl SyncConfig {
    /// Build the configuration from the process environment.
    pub fn from_env() -> Self {
        Self {
            color: ColorChoice::from_no_color(std::env::var_os("NO_COLOR")),
            ..Self::default()
        }
    }

    /// Palette for output written to standard output.
    pub fn stdout_palette(&self) -> Palette {
        self.palette(std::io::stdout().is_terminal())
    }

    pub fn palette(&self, is_terminal: bool) -> Palette {
        if self.color.enabled(is_terminal) {
            Palette::ansi()
        } else {
            Palette::plain()
        }
    }
}

/// Escape sequences used by the report lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub green: &'static str,
    pub light_green: &'static str,
    pub red: &'static str,
    pub light_red: &'static str,
    pub reset: &'static str,
}

impl Palette {
    pub fn ansi() -> Self {
        Self {
            green: "\x1b[32m",
            light_green: "\x1b[32;1m",
            red: "\x1b[31m",
            light_red: "\x1b[31;1m",
            reset: "\x1b[0m",
        }
    }

    pub fn plain() -> Self {
        Self {
            green: "",
            light_green: "",
            red: "",
            light_red: "",
            reset: "",
        }
    }
}

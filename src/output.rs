//! # Output Configuration
//!
//! Controls the appearance of CLI output. Colors follow the `--color`
//! flag and the usual environment conventions:
//! - `NO_COLOR` disables colors when set (per https://no-color.org/)
//! - `CLICOLOR=0` disables colors
//! - `CLICOLOR_FORCE=1` forces colors even without a TTY
//! - `TERM=dumb` disables colors

use std::env;

/// Output configuration for controlling colored output.
#[derive(Debug, Clone)]
pub struct OutputConfig {
    /// Whether styled output should be used.
    pub use_color: bool,
}

impl OutputConfig {
    /// Create an output configuration from the `--color` flag value
    /// ("always", "never", or "auto") and the environment.
    pub fn from_env_and_flag(color_flag: &str) -> Self {
        let use_color = match color_flag.to_lowercase().as_str() {
            "always" => true,
            "never" => false,
            _ => Self::detect_color_support(),
        };

        Self { use_color }
    }

    /// Auto-detection for `--color=auto`.
    fn detect_color_support() -> bool {
        // presence alone disables, even when empty
        if env::var_os("NO_COLOR").is_some() {
            return false;
        }
        if env::var("CLICOLOR").is_ok_and(|v| v == "0") {
            return false;
        }
        if env::var("CLICOLOR_FORCE").is_ok_and(|v| v != "0" && !v.is_empty()) {
            return true;
        }
        if env::var("TERM").is_ok_and(|v| v == "dumb") {
            return false;
        }

        console::Term::stdout().features().colors_supported()
    }

    /// Create a configuration with colors always enabled.
    #[cfg(test)]
    pub fn with_color() -> Self {
        Self { use_color: true }
    }

    /// Create a configuration with colors always disabled.
    #[cfg(test)]
    pub fn without_color() -> Self {
        Self { use_color: false }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self::from_env_and_flag("auto")
    }
}

// Styling is forced: the config owns the color decision, not
// console's TTY detection.

/// Style a success line (green when colors are on).
pub fn success(config: &OutputConfig, text: &str) -> String {
    if config.use_color {
        console::style(text).green().force_styling(true).to_string()
    } else {
        text.to_string()
    }
}

/// Style a warning line (yellow when colors are on).
pub fn warning(config: &OutputConfig, text: &str) -> String {
    if config.use_color {
        console::style(text).yellow().force_styling(true).to_string()
    } else {
        text.to_string()
    }
}

/// Style a failure line (red when colors are on).
pub fn failure(config: &OutputConfig, text: &str) -> String {
    if config.use_color {
        console::style(text).red().force_styling(true).to_string()
    } else {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_flag_always() {
        let config = OutputConfig::from_env_and_flag("always");
        assert!(config.use_color);
    }

    #[test]
    fn test_from_flag_never() {
        let config = OutputConfig::from_env_and_flag("never");
        assert!(!config.use_color);
    }

    #[test]
    fn test_flag_is_case_insensitive() {
        let config = OutputConfig::from_env_and_flag("NEVER");
        assert!(!config.use_color);
    }

    #[test]
    fn test_styles_pass_text_through_without_color() {
        let config = OutputConfig::without_color();
        assert_eq!(success(&config, "done"), "done");
        assert_eq!(warning(&config, "skipped"), "skipped");
        assert_eq!(failure(&config, "broken"), "broken");
    }

    #[test]
    fn test_styles_wrap_text_with_color() {
        let config = OutputConfig::with_color();
        let styled = success(&config, "done");
        assert!(styled.contains("done"));
        assert_ne!(styled, "done");
    }
}

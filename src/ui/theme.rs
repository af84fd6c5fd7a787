//! Color theme
//!
//! A pure palette value consumed by the widgets. It has no say in what is
//! shown, only how it looks.

use ratatui::style::Color;
use std::str::FromStr;

use crate::config::ThemeConfig;
use crate::log_debug;

#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub primary: Color,        // Focused borders, button, links
    pub secondary: Color,      // Selected card
    pub text: Color,
    pub text_secondary: Color, // Card details, hints
    pub error: Color,          // Error banner
    pub divider: Color,        // Unfocused borders
    pub title: Color,          // Title bar and card titles
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            primary: Color::Rgb(0xA0, 0xD2, 0xDB),        // Soft pastel cyan
            secondary: Color::Rgb(0xE5, 0xB4, 0xB4),      // Soft pastel coral
            text: Color::Rgb(0x55, 0x55, 0x55),
            text_secondary: Color::Rgb(0x77, 0x77, 0x77),
            error: Color::Rgb(0xF4, 0xC7, 0xC7),          // Pastel red
            divider: Color::Rgb(0xE0, 0xE0, 0xE0),
            title: Color::Rgb(0x44, 0x44, 0x44),
        }
    }
}

impl Theme {
    /// Default palette with any valid overrides from the config applied
    pub fn from_config(config: &ThemeConfig) -> Self {
        let base = Self::default();
        Self {
            primary: override_color("primary", config.primary.as_deref(), base.primary),
            secondary: override_color("secondary", config.secondary.as_deref(), base.secondary),
            text: override_color("text", config.text.as_deref(), base.text),
            text_secondary: override_color(
                "text_secondary",
                config.text_secondary.as_deref(),
                base.text_secondary,
            ),
            error: override_color("error", config.error.as_deref(), base.error),
            divider: override_color("divider", config.divider.as_deref(), base.divider),
            title: override_color("title", config.title.as_deref(), base.title),
        }
    }
}

fn override_color(key: &str, value: Option<&str>, fallback: Color) -> Color {
    let Some(value) = value else {
        return fallback;
    };
    match Color::from_str(value.trim()) {
        Ok(color) => color,
        Err(_) => {
            log_debug(&format!("Theme: invalid color '{}' for {}, using default", value, key));
            fallback
        }
    }
}

use ratatui::style::Color;

use crate::model::config::UiConfig;

/// Parsed color theme for the TUI
#[derive(Debug, Clone)]
pub struct Theme {
    pub background: Color,
    pub text: Color,
    pub text_bright: Color,
    pub dim: Color,
    /// Accent for the add button and days with open tasks
    pub accent: Color,
    /// Highlight for the active tab and selection
    pub highlight: Color,
    pub green: Color,
    pub yellow: Color,
    pub red: Color,
    pub selection_bg: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Theme {
            background: Color::Rgb(0x12, 0x12, 0x18),
            text: Color::Rgb(0xC8, 0xC8, 0xD4),
            text_bright: Color::Rgb(0xFF, 0xFF, 0xFF),
            dim: Color::Rgb(0x6B, 0x6B, 0x7A),
            accent: Color::Rgb(0xFF, 0x6B, 0x6B),
            highlight: Color::Rgb(0x63, 0x66, 0xF1),
            green: Color::Rgb(0x22, 0xC5, 0x5E),
            yellow: Color::Rgb(0xFA, 0xCC, 0x15),
            red: Color::Rgb(0xEF, 0x44, 0x44),
            selection_bg: Color::Rgb(0x2A, 0x2A, 0x3C),
        }
    }
}

/// Parse a hex color string like "#FF6B6B" into an RGB Color
fn parse_hex_color(hex: &str) -> Option<Color> {
    let hex = hex.strip_prefix('#')?;
    if hex.len() != 6 {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some(Color::Rgb(r, g, b))
}

impl Theme {
    /// Create a theme from the board config, falling back to defaults
    pub fn from_config(ui: &UiConfig) -> Self {
        let mut theme = Theme::default();

        for (key, value) in &ui.colors {
            if let Some(color) = parse_hex_color(value) {
                match key.as_str() {
                    "background" => theme.background = color,
                    "text" => theme.text = color,
                    "text_bright" => theme.text_bright = color,
                    "dim" => theme.dim = color,
                    "accent" => theme.accent = color,
                    "highlight" => theme.highlight = color,
                    "green" => theme.green = color,
                    "yellow" => theme.yellow = color,
                    "red" => theme.red = color,
                    "selection_bg" => theme.selection_bg = color,
                    _ => {}
                }
            }
        }

        theme
    }
}

use std::collections::HashMap;

use ratatui::style::Color;

use crate::model::UiConfig;

/// Parsed color theme for the TUI
#[derive(Debug, Clone)]
pub struct Theme {
    pub background: Color,
    pub text: Color,
    pub text_bright: Color,
    pub highlight: Color,
    pub dim: Color,
    pub green: Color,
    pub cyan: Color,
    pub yellow: Color,
    pub red: Color,
    pub selection_bg: Color,
    pub selection_border: Color,
    /// Per-tag colors
    pub tag_colors: HashMap<String, Color>,
}

impl Default for Theme {
    fn default() -> Self {
        let mut tag_colors = HashMap::new();
        tag_colors.insert("rust".into(), Color::Rgb(0xDE, 0xA5, 0x84));
        tag_colors.insert("react".into(), Color::Rgb(0x61, 0xDA, 0xFB));
        tag_colors.insert("next.js".into(), Color::Rgb(0xE8, 0xE8, 0xE8));
        tag_colors.insert("python".into(), Color::Rgb(0x37, 0x76, 0xAB));
        tag_colors.insert("typescript".into(), Color::Rgb(0x31, 0x78, 0xC6));
        tag_colors.insert("tailwind css".into(), Color::Rgb(0x38, 0xBD, 0xF8));
        tag_colors.insert("flask".into(), Color::Rgb(0x9F, 0x9F, 0x9F));
        tag_colors.insert("docker".into(), Color::Rgb(0x24, 0x96, 0xED));
        tag_colors.insert("aws".into(), Color::Rgb(0xFF, 0x99, 0x00));

        Theme {
            background: Color::Rgb(0x0A, 0x0E, 0x1A),
            text: Color::Rgb(0x9B, 0xA8, 0xC9),
            text_bright: Color::Rgb(0xF2, 0xF4, 0xFA),
            highlight: Color::Rgb(0x53, 0xC2, 0xFF),
            dim: Color::Rgb(0x5A, 0x64, 0x82),
            green: Color::Rgb(0x4E, 0xE1, 0x8A),
            cyan: Color::Rgb(0x46, 0xD4, 0xE0),
            yellow: Color::Rgb(0xF5, 0xD9, 0x4A),
            red: Color::Rgb(0xF2, 0x55, 0x55),
            selection_bg: Color::Rgb(0x14, 0x23, 0x3A),
            selection_border: Color::Rgb(0x53, 0xC2, 0xFF),
            tag_colors,
        }
    }
}

/// Parse a hex color string like "#FF4444" into an RGB Color
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
    /// Create a theme from the portfolio's UI config, falling back to defaults
    pub fn from_config(ui: &UiConfig) -> Self {
        let mut theme = Theme::default();

        // Apply color overrides from [ui.colors]
        for (key, value) in &ui.colors {
            if let Some(color) = parse_hex_color(value) {
                match key.as_str() {
                    "background" => theme.background = color,
                    "text" => theme.text = color,
                    "text_bright" => theme.text_bright = color,
                    "highlight" => theme.highlight = color,
                    "dim" => theme.dim = color,
                    "green" => theme.green = color,
                    "cyan" => theme.cyan = color,
                    "yellow" => theme.yellow = color,
                    "red" => theme.red = color,
                    "selection_bg" => theme.selection_bg = color,
                    "selection_border" => theme.selection_border = color,
                    _ => {}
                }
            }
        }

        // Apply tag color overrides from [ui.tag_colors]
        for (tag, value) in &ui.tag_colors {
            if let Some(color) = parse_hex_color(value) {
                theme.tag_colors.insert(tag.clone(), color);
            }
        }

        theme
    }

    /// Get the color for a tag chip, falling back to the text color.
    /// Lookup is case-insensitive so "React" and "react" match.
    pub fn tag_color(&self, tag: &str) -> Color {
        self.tag_colors
            .get(&tag.to_lowercase())
            .copied()
            .unwrap_or(self.text)
    }
}

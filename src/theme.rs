//! Centralized theme configuration for all UI components.
//!
//! All colors and styles are defined here. When adding or modifying UI
//! components:
//! - Add new colors to the appropriate module
//! - Use `theme::module::CONSTANT` in render files
//! - Do NOT hardcode `Color::*` values directly in render files
//!
//! The menu surface is the configurable part: `MenuTheme` starts from the
//! constants below and applies any named overrides from the `[theme]` config
//! section.

use ratatui::style::{Color, Modifier, Style};

use crate::config::ThemeConfig;

/// Core color palette - shared base colors.
pub mod palette {
    use super::*;

    // Text colors - softer than pure white
    pub const TEXT: Color = Color::Rgb(236, 236, 244);
    pub const TEXT_DIM: Color = Color::Rgb(90, 92, 119);
    pub const TEXT_MUTED: Color = Color::Rgb(130, 133, 158);

    // Background colors
    pub const BG_DARK: Color = Color::Rgb(26, 26, 46);
    pub const BG_SURFACE: Color = Color::Rgb(35, 35, 58);
    pub const BG_HIGHLIGHT: Color = Color::Rgb(55, 55, 85);

    // Semantic colors
    pub const WARNING: Color = Color::Rgb(255, 217, 61);
    pub const ERROR: Color = Color::Rgb(224, 108, 117);

    // Accents
    pub const CYAN: Color = Color::Rgb(0, 217, 255);
    pub const PINK: Color = Color::Rgb(255, 107, 157);

    pub const CURSOR: Style = Style::new().add_modifier(Modifier::REVERSED);
}

/// Input field styles
pub mod input {
    use super::*;

    pub const BORDER_FOCUSED: Color = palette::CYAN;
    pub const BORDER_UNFOCUSED: Color = palette::TEXT_DIM;
    pub const TITLE: Color = palette::TEXT_MUTED;
    pub const HINT: Color = palette::TEXT_DIM;
    pub const CURSOR: Style = Style::new().add_modifier(Modifier::REVERSED);
}

/// Suggestion menu styles - defaults for the configurable surface
pub mod menu {
    use super::*;

    pub const BACKGROUND: Color = palette::BG_SURFACE;
    pub const BORDER: Color = palette::TEXT_DIM;
    pub const HIGHLIGHT_BG: Color = palette::BG_HIGHLIGHT;
    pub const HIGHLIGHT_FG: Color = palette::TEXT;
    pub const HANDLE: Color = palette::TEXT;
    pub const AVATAR_PRESENT: Color = palette::CYAN;

    /// Fallback swatch colors for actors without an avatar URL
    pub const AVATAR_FALLBACK: [Color; 6] = [
        Color::Rgb(255, 184, 108),
        Color::Rgb(107, 203, 119),
        Color::Rgb(198, 120, 221),
        Color::Rgb(255, 107, 157),
        Color::Rgb(0, 217, 255),
        Color::Rgb(255, 217, 61),
    ];

    /// Horizontal padding inside the menu, in cells
    pub const PADDING: u16 = 1;
}

/// Resolved menu styling: the named style variables of the theming surface.
///
/// Purely cosmetic; nothing behavioral reads these.
#[derive(Debug, Clone)]
pub struct MenuTheme {
    pub background: Color,
    pub border: Color,
    pub highlight_bg: Color,
    pub highlight_fg: Color,
    pub handle: Color,
    pub avatar_present: Color,
    pub avatar_fallback: Vec<Color>,
    pub padding: u16,
}

impl Default for MenuTheme {
    fn default() -> Self {
        Self {
            background: menu::BACKGROUND,
            border: menu::BORDER,
            highlight_bg: menu::HIGHLIGHT_BG,
            highlight_fg: menu::HIGHLIGHT_FG,
            handle: menu::HANDLE,
            avatar_present: menu::AVATAR_PRESENT,
            avatar_fallback: menu::AVATAR_FALLBACK.to_vec(),
            padding: menu::PADDING,
        }
    }
}

impl MenuTheme {
    /// Build a theme from config overrides, keeping defaults for anything
    /// missing or unparseable.
    pub fn from_config(config: &ThemeConfig) -> Self {
        let mut theme = Self::default();

        apply_color(&mut theme.background, config.background.as_deref());
        apply_color(&mut theme.border, config.border.as_deref());
        apply_color(&mut theme.highlight_bg, config.hover.as_deref());
        apply_color(&mut theme.handle, config.handle.as_deref());

        if let Some(swatches) = &config.avatar_fallback {
            let parsed: Vec<Color> = swatches
                .iter()
                .filter_map(|s| parse_hex_color(s))
                .collect();
            if !parsed.is_empty() {
                theme.avatar_fallback = parsed;
            }
        }

        if let Some(padding) = config.padding {
            theme.padding = padding;
        }

        theme
    }

    /// Avatar cell color for an actor: accent when an avatar URL is present,
    /// otherwise a deterministic swatch derived from the handle.
    pub fn avatar_color(&self, handle: &str, has_avatar: bool) -> Color {
        if has_avatar {
            return self.avatar_present;
        }

        let sum: usize = handle.bytes().map(usize::from).sum();
        self.avatar_fallback[sum % self.avatar_fallback.len()]
    }
}

fn apply_color(slot: &mut Color, value: Option<&str>) {
    if let Some(color) = value.and_then(parse_hex_color) {
        *slot = color;
    }
}

/// Parse a `#rrggbb` hex string; anything else is ignored upstream
pub fn parse_hex_color(value: &str) -> Option<Color> {
    let hex = value.strip_prefix('#')?;
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }

    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some(Color::Rgb(r, g, b))
}

//! Theme definitions for tooltip overlays.

use gpui::{hsla, Global, Hsla, WindowAppearance};

/// Color palette for overlay rendering.
///
/// All colors use GPUI's `Hsla` type (Hue, Saturation, Lightness, Alpha).
#[derive(Debug, Clone)]
pub struct ThemeColors {
    /// Window background color.
    pub background: Hsla,
    /// Tooltip background.
    pub elevated_surface: Hsla,
    /// Primary text color.
    pub text: Hsla,
    /// Secondary/dimmed text.
    pub text_muted: Hsla,
    /// Accent text, used for the tooltip glyph.
    pub text_accent: Hsla,
    /// Tooltip border color.
    pub border: Hsla,
    /// Button background.
    pub accent: Hsla,
    /// Button hover state.
    pub accent_hover: Hsla,
}

impl ThemeColors {
    /// Create the dark theme color palette.
    ///
    /// Based on Catppuccin Mocha palette.
    pub fn dark() -> Self {
        Self {
            // #1e1e2e - Mocha Base
            background: hsla(240.0 / 360.0, 0.21, 0.15, 1.0),
            // #45475a - Mocha Surface1
            elevated_surface: hsla(233.0 / 360.0, 0.13, 0.31, 1.0),
            // #cdd6f4 - Mocha Text
            text: hsla(226.0 / 360.0, 0.64, 0.88, 1.0),
            // #a6adc8 - Mocha Subtext0
            text_muted: hsla(228.0 / 360.0, 0.24, 0.72, 1.0),
            // #fab387 - Mocha Peach
            text_accent: hsla(23.0 / 360.0, 0.92, 0.75, 1.0),
            // #11111b - Mocha Crust
            border: hsla(240.0 / 360.0, 0.23, 0.09, 1.0),
            // #89b4fa - Mocha Blue
            accent: hsla(217.0 / 360.0, 0.92, 0.76, 1.0),
            // #b4befe - Mocha Lavender
            accent_hover: hsla(232.0 / 360.0, 0.97, 0.85, 1.0),
        }
    }

    /// Create the light theme color palette.
    ///
    /// Based on Catppuccin Latte palette.
    pub fn light() -> Self {
        Self {
            // #eff1f5 - Latte Base
            background: hsla(220.0 / 360.0, 0.23, 0.95, 1.0),
            // #dce0e8 - Latte Surface1
            elevated_surface: hsla(220.0 / 360.0, 0.22, 0.90, 1.0),
            // #4c4f69 - Latte Text
            text: hsla(234.0 / 360.0, 0.16, 0.35, 1.0),
            // #6c6f85 - Latte Subtext0
            text_muted: hsla(233.0 / 360.0, 0.10, 0.47, 1.0),
            // #fe640b - Latte Peach
            text_accent: hsla(22.0 / 360.0, 0.99, 0.52, 1.0),
            // black, like a classic tooltip frame
            border: hsla(0.0, 0.0, 0.0, 1.0),
            // #1e66f5 - Latte Blue
            accent: hsla(220.0 / 360.0, 0.91, 0.54, 1.0),
            // #7287fd - Latte Lavender
            accent_hover: hsla(231.0 / 360.0, 0.97, 0.72, 1.0),
        }
    }
}

/// Theme configuration for the demo and its overlays.
#[derive(Debug, Clone)]
pub struct OvertipTheme {
    /// Theme identifier.
    pub name: String,
    /// GPUI appearance (Light/Dark).
    pub appearance: WindowAppearance,
    /// Color palette.
    pub colors: ThemeColors,
}

impl OvertipTheme {
    /// Create a new dark theme.
    pub fn dark() -> Self {
        Self {
            name: "dark".to_string(),
            appearance: WindowAppearance::Dark,
            colors: ThemeColors::dark(),
        }
    }

    /// Create a new light theme.
    pub fn light() -> Self {
        Self {
            name: "light".to_string(),
            appearance: WindowAppearance::Light,
            colors: ThemeColors::light(),
        }
    }

    /// Pick the palette matching the system appearance.
    pub fn for_appearance(appearance: WindowAppearance) -> Self {
        match appearance {
            WindowAppearance::Light | WindowAppearance::VibrantLight => Self::light(),
            WindowAppearance::Dark | WindowAppearance::VibrantDark => Self::dark(),
        }
    }
}

impl Default for OvertipTheme {
    fn default() -> Self {
        Self::dark()
    }
}

impl Global for OvertipTheme {}

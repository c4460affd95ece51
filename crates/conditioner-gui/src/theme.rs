//! Theme and styling for the control panel.
//!
//! Provides the light and dark palettes, including colors, spacing,
//! typography and rounding constants.

use eframe::egui::{Color32, CornerRadius, Margin, Shadow, Stroke, Style, Visuals};

use conditioner_types::ThemeMode;

/// Background of a faulted block indicator (`#B85757`).
pub const FAULT_COLOR: Color32 = Color32::from_rgb(0xB8, 0x57, 0x57);

/// Opacity levels for consistent transparency across the UI.
#[derive(Debug, Clone, Copy)]
pub struct Opacity {
    /// Hover states (50)
    pub hover: u8,
    /// Selections (70)
    pub strong: u8,
}

impl Default for Opacity {
    fn default() -> Self {
        Self {
            hover: 50,
            strong: 70,
        }
    }
}

/// Spacing constants on a 4px grid.
#[derive(Debug, Clone, Copy)]
pub struct Spacing {
    /// Extra small spacing (4px)
    pub xs: f32,
    /// Small spacing (8px)
    pub sm: f32,
    /// Medium spacing (16px)
    pub md: f32,
    /// Large spacing (24px)
    pub lg: f32,
    /// Card padding (16px)
    pub card_padding: f32,
}

impl Default for Spacing {
    fn default() -> Self {
        Self {
            xs: 4.0,
            sm: 8.0,
            md: 16.0,
            lg: 24.0,
            card_padding: 16.0,
        }
    }
}

/// Typography sizes.
#[derive(Debug, Clone, Copy)]
pub struct Typography {
    /// Caption/small text (11px)
    pub caption: f32,
    /// Body text (14px)
    pub body: f32,
    /// Heading (22px)
    pub heading: f32,
    /// Large readout text (35px)
    pub readout: f32,
}

impl Default for Typography {
    fn default() -> Self {
        Self {
            caption: 11.0,
            body: 14.0,
            heading: 22.0,
            readout: 35.0,
        }
    }
}

/// Corner radii.
#[derive(Debug, Clone, Copy)]
pub struct Rounding {
    pub sm: f32,
    pub md: f32,
}

impl Default for Rounding {
    fn default() -> Self {
        Self { sm: 4.0, md: 8.0 }
    }
}

/// Application color theme.
#[derive(Debug, Clone)]
pub struct Theme {
    pub mode: ThemeMode,
    // Background colors
    pub bg_primary: Color32,
    pub bg_secondary: Color32,
    pub bg_card: Color32,
    // Text colors
    pub text_primary: Color32,
    pub text_secondary: Color32,
    pub text_muted: Color32,
    pub text_on_accent: Color32,
    // Borders
    pub border: Color32,
    pub border_subtle: Color32,
    // Accent and block indicators
    pub accent: Color32,
    pub accent_hover: Color32,
    pub power_on: Color32,
    pub block_ok: Color32,
    pub block_fault: Color32,
    // Opacity levels
    pub opacity: Opacity,
    // Layout constants
    pub spacing: Spacing,
    pub typography: Typography,
    pub rounding: Rounding,
}

impl Theme {
    /// Dark theme with zinc backgrounds.
    pub fn dark() -> Self {
        Self {
            mode: ThemeMode::Dark,
            bg_primary: Color32::from_rgb(9, 9, 11),       // zinc-950
            bg_secondary: Color32::from_rgb(24, 24, 27),   // zinc-900
            bg_card: Color32::from_rgb(39, 39, 42),        // zinc-800
            text_primary: Color32::from_rgb(250, 250, 250), // zinc-50
            text_secondary: Color32::from_rgb(212, 212, 216), // zinc-300
            text_muted: Color32::from_rgb(161, 161, 170),  // zinc-400
            text_on_accent: Color32::WHITE,
            border: Color32::from_rgb(63, 63, 70),         // zinc-700
            border_subtle: Color32::from_rgb(39, 39, 42),  // zinc-800
            accent: Color32::from_rgb(59, 130, 246),       // blue-500
            accent_hover: Color32::from_rgb(96, 165, 250), // blue-400
            power_on: Color32::from_rgb(34, 197, 94),      // green-500
            block_ok: Color32::from_rgb(52, 52, 56),
            block_fault: FAULT_COLOR,
            opacity: Opacity::default(),
            spacing: Spacing::default(),
            typography: Typography::default(),
            rounding: Rounding::default(),
        }
    }

    /// Light theme with neutral backgrounds.
    pub fn light() -> Self {
        Self {
            mode: ThemeMode::Light,
            bg_primary: Color32::from_rgb(250, 250, 250),  // neutral-50
            bg_secondary: Color32::from_rgb(244, 244, 245), // zinc-100
            bg_card: Color32::from_rgb(255, 255, 255),
            text_primary: Color32::from_rgb(17, 24, 39),   // gray-900
            text_secondary: Color32::from_rgb(55, 65, 81), // gray-700
            text_muted: Color32::from_rgb(107, 114, 128),  // gray-500
            text_on_accent: Color32::WHITE,
            border: Color32::from_rgb(209, 213, 219),      // gray-300
            border_subtle: Color32::from_rgb(229, 231, 235), // gray-200
            accent: Color32::from_rgb(37, 99, 235),        // blue-600
            accent_hover: Color32::from_rgb(29, 78, 216),  // blue-700
            power_on: Color32::from_rgb(22, 163, 74),      // green-600
            block_ok: Color32::from_rgb(229, 231, 235),
            block_fault: FAULT_COLOR,
            opacity: Opacity::default(),
            spacing: Spacing::default(),
            typography: Typography::default(),
            rounding: Rounding::default(),
        }
    }

    /// Get theme for the specified mode.
    pub fn for_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Dark => Self::dark(),
            ThemeMode::Light => Self::light(),
        }
    }

    pub fn is_dark(&self) -> bool {
        self.mode == ThemeMode::Dark
    }

    /// Fill of a block indicator.
    pub fn block_color(&self, ok: bool) -> Color32 {
        if ok { self.block_ok } else { self.block_fault }
    }

    /// Create a background tint from a color with specified alpha.
    pub fn tint_bg(&self, color: Color32, alpha: u8) -> Color32 {
        Color32::from_rgba_unmultiplied(color.r(), color.g(), color.b(), alpha)
    }

    /// Get a card shadow for elevation effect.
    pub fn card_shadow(&self) -> Shadow {
        let alpha = if self.is_dark() { 50 } else { 30 };
        Shadow {
            offset: [0, 2],
            blur: 8,
            spread: 0,
            color: Color32::from_black_alpha(alpha),
        }
    }

    // -------------------------------------------------------------------------
    // egui Style integration
    // -------------------------------------------------------------------------

    /// Create egui Style from this theme.
    pub fn to_style(&self) -> Style {
        Style {
            visuals: self.to_visuals(),
            spacing: eframe::egui::style::Spacing {
                item_spacing: eframe::egui::vec2(self.spacing.sm, self.spacing.sm),
                window_margin: Margin::same(self.spacing.md as i8),
                button_padding: eframe::egui::vec2(12.0, 6.0),
                interact_size: eframe::egui::vec2(40.0, 24.0),
                ..Default::default()
            },
            ..Default::default()
        }
    }

    /// Create egui Visuals from this theme.
    pub fn to_visuals(&self) -> Visuals {
        let mut visuals = if self.is_dark() {
            Visuals::dark()
        } else {
            Visuals::light()
        };
        visuals.dark_mode = self.is_dark();

        visuals.panel_fill = self.bg_primary;
        visuals.window_fill = self.bg_secondary;
        visuals.extreme_bg_color = self.bg_card;
        visuals.faint_bg_color = self.bg_secondary;
        visuals.window_shadow = self.card_shadow();
        visuals.popup_shadow = self.card_shadow();

        visuals.widgets.noninteractive.bg_fill = self.bg_secondary;
        visuals.widgets.noninteractive.weak_bg_fill = self.bg_secondary;
        visuals.widgets.inactive.bg_fill = self.bg_card;
        visuals.widgets.inactive.weak_bg_fill = self.bg_card;
        visuals.widgets.hovered.bg_fill = self.accent_hover;
        visuals.widgets.hovered.weak_bg_fill = self.tint_bg(self.accent, self.opacity.hover);
        visuals.widgets.active.bg_fill = self.accent;
        visuals.widgets.active.weak_bg_fill = self.accent;

        visuals.selection.bg_fill = self.tint_bg(self.accent, self.opacity.strong);
        visuals.selection.stroke = Stroke::new(1.0, self.accent);

        visuals.widgets.noninteractive.fg_stroke = Stroke::new(1.0, self.text_primary);
        visuals.widgets.inactive.fg_stroke = Stroke::new(1.0, self.text_secondary);
        visuals.widgets.hovered.fg_stroke = Stroke::new(1.5, self.text_on_accent);
        visuals.widgets.active.fg_stroke = Stroke::new(1.5, self.text_on_accent);

        visuals.widgets.noninteractive.bg_stroke = Stroke::new(1.0, self.border_subtle);
        visuals.widgets.inactive.bg_stroke = Stroke::new(1.0, self.border);
        visuals.widgets.hovered.bg_stroke = Stroke::new(1.0, self.accent);
        visuals.widgets.active.bg_stroke = Stroke::new(1.5, self.accent);

        let rounding = CornerRadius::same(self.rounding.md as u8);
        visuals.widgets.noninteractive.corner_radius = rounding;
        visuals.widgets.inactive.corner_radius = rounding;
        visuals.widgets.hovered.corner_radius = rounding;
        visuals.widgets.active.corner_radius = rounding;

        visuals.error_fg_color = FAULT_COLOR;
        visuals
    }
}

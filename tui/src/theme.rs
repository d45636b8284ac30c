//! Color theme for the Sentinel terminal.
//!
//! Phosphor-terminal palette: neon green on near-black, red for elevated
//! risk.

use ratatui::style::{Color, Modifier, Style};

use sentinel_types::Severity;

mod colors {
    use super::Color;

    pub const BG: Color = Color::Rgb(3, 7, 3);
    pub const BG_PANEL: Color = Color::Rgb(8, 14, 8);

    pub const PHOSPHOR: Color = Color::Rgb(57, 255, 20);
    pub const PHOSPHOR_DIM: Color = Color::Rgb(34, 139, 34);
    pub const TEXT_MUTED: Color = Color::Rgb(96, 108, 96);

    pub const SUCCESS: Color = Color::Rgb(74, 222, 128);
    pub const WARNING: Color = Color::Rgb(230, 195, 132);
    pub const DANGER: Color = Color::Rgb(248, 81, 73);
}

/// Resolved palette used by the draw functions.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub bg: Color,
    pub bg_panel: Color,
    pub primary: Color,
    pub primary_dim: Color,
    pub text_muted: Color,
    pub success: Color,
    pub warning: Color,
    pub danger: Color,
}

pub const PALETTE: Palette = Palette {
    bg: colors::BG,
    bg_panel: colors::BG_PANEL,
    primary: colors::PHOSPHOR,
    primary_dim: colors::PHOSPHOR_DIM,
    text_muted: colors::TEXT_MUTED,
    success: colors::SUCCESS,
    warning: colors::WARNING,
    danger: colors::DANGER,
};

/// Style for the status badge of a finished report.
#[must_use]
pub fn badge_style(severity: Severity) -> Style {
    let color = match severity {
        Severity::Nominal => PALETTE.success,
        Severity::Elevated => PALETTE.danger,
        Severity::Unknown => PALETTE.warning,
    };
    Style::default().fg(color).add_modifier(Modifier::BOLD)
}

#[must_use]
pub fn panel_style() -> Style {
    Style::default().fg(PALETTE.primary).bg(PALETTE.bg_panel)
}

#[must_use]
pub fn border_style() -> Style {
    Style::default().fg(PALETTE.primary_dim)
}

#[must_use]
pub fn muted_style() -> Style {
    Style::default().fg(PALETTE.text_muted)
}

#[must_use]
pub fn title_style() -> Style {
    Style::default()
        .fg(PALETTE.primary)
        .add_modifier(Modifier::BOLD)
}

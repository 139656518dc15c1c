use catppuccin::PALETTE;
use clap::ValueEnum;
use ratatui::style::Color;

/// Light or dark rendering of the screen. Has no effect on data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub(crate) enum ThemeMode {
    #[default]
    Light,
    Dark,
}

/// Colors used by the skip selection screen.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Palette {
    pub base: Color,
    pub surface: Color,
    pub text: Color,
    pub subtext: Color,
    pub accent: Color,
    pub highlight: Color,
    pub success: Color,
    pub warning: Color,
    pub error: Color,
}

fn catppuccin_to_color(color: &catppuccin::Color) -> Color {
    Color::Rgb(color.rgb.r, color.rgb.g, color.rgb.b)
}

impl Palette {
    fn from_catppuccin(flavor: &catppuccin::Flavor) -> Self {
        let colors = &flavor.colors;
        Self {
            base: catppuccin_to_color(&colors.base),
            surface: catppuccin_to_color(&colors.surface1),
            text: catppuccin_to_color(&colors.text),
            subtext: catppuccin_to_color(&colors.subtext0),
            accent: catppuccin_to_color(&colors.mauve),
            highlight: catppuccin_to_color(&colors.lavender),
            success: catppuccin_to_color(&colors.green),
            warning: catppuccin_to_color(&colors.peach),
            error: catppuccin_to_color(&colors.red),
        }
    }
}

impl ThemeMode {
    pub(crate) const fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Icon shown on the theme toggle: the mode a press switches to.
    pub(crate) const fn toggle_icon(self) -> &'static str {
        match self {
            Self::Light => "☾",
            Self::Dark => "☀",
        }
    }

    pub(crate) fn palette(self) -> Palette {
        match self {
            Self::Light => Palette::from_catppuccin(&PALETTE.latte),
            Self::Dark => Palette::from_catppuccin(&PALETTE.mocha),
        }
    }
}

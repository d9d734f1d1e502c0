use ratatui::style::{Color, Modifier, Style};

/// Names accepted by [`Theme::from_name`]
pub const THEME_NAMES: &[&str] = &["dark", "light", "high-contrast"];

/// Application theme configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    pub name: String,

    /// Accent color for buttons
    pub primary: Color,

    /// Text colors
    pub text: Color,
    pub text_dim: Color,

    /// Background colors
    pub background: Color,
    pub background_alt: Color,

    /// Tint laid over content behind a modal
    pub backdrop: Color,

    /// Border color
    pub border: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

impl Theme {
    /// Look up a preset by name
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().replace('_', "-").as_str() {
            "dark" => Some(Self::dark()),
            "light" => Some(Self::light()),
            "high-contrast" => Some(Self::high_contrast()),
            _ => None,
        }
    }

    /// Create a dark theme
    pub fn dark() -> Self {
        Self {
            name: "dark".to_string(),
            primary: Color::Rgb(147, 51, 234),         // Purple

            text: Color::Rgb(248, 250, 252),           // Slate-50
            text_dim: Color::Rgb(148, 163, 184),       // Slate-400

            background: Color::Rgb(15, 23, 42),        // Slate-900
            background_alt: Color::Rgb(30, 41, 59),    // Slate-800
            backdrop: Color::Rgb(2, 6, 23),            // Slate-950

            border: Color::Rgb(71, 85, 105),           // Slate-600
        }
    }

    /// Create a light theme
    pub fn light() -> Self {
        Self {
            name: "light".to_string(),
            primary: Color::Rgb(0x67, 0x3A, 0xB7),

            text: Color::Rgb(0x20, 0x20, 0x20),
            text_dim: Color::Rgb(0x5F, 0x63, 0x68),

            background: Color::Rgb(0xFD, 0xFD, 0xFD),
            background_alt: Color::Rgb(0xF1, 0xF3, 0xF4),
            backdrop: Color::Rgb(0x9A, 0xA0, 0xA6),

            border: Color::Rgb(0xDA, 0xDD, 0xE1),
        }
    }

    /// Create a high contrast theme using the 16-color palette
    pub fn high_contrast() -> Self {
        Self {
            name: "high-contrast".to_string(),
            primary: Color::LightYellow,

            text: Color::White,
            text_dim: Color::Gray,

            background: Color::Black,
            background_alt: Color::Black,
            backdrop: Color::Black,

            border: Color::White,
        }
    }

    /// Base style for normal elements
    pub fn base_style(&self) -> Style {
        Style::default().fg(self.text).bg(self.background)
    }

    /// Style for the area behind a modal
    pub fn backdrop_style(&self) -> Style {
        Style::default()
            .bg(self.backdrop)
            .add_modifier(Modifier::DIM)
    }

    /// Style for a modal panel surface
    pub fn panel_style(&self) -> Style {
        Style::default().fg(self.text).bg(self.background_alt)
    }

    /// Style for borders
    pub fn border_style(&self) -> Style {
        Style::default().fg(self.border)
    }

    /// Style for titles
    pub fn title_style(&self) -> Style {
        Style::default()
            .fg(self.text)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for interactive buttons
    pub fn button_style(&self) -> Style {
        Style::default()
            .fg(self.primary)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for help text
    pub fn help_style(&self) -> Style {
        Style::default().fg(self.text_dim)
    }
}

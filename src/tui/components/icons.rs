//! Icon rendering
//!
//! Components never hard-code their icon glyphs. They ask an [`IconRenderer`]
//! for a span, passing an [`IconDirective`] describing how many cells the icon
//! may occupy and which color to draw it in.

use crate::utils::text::string;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Span;
use std::str::FromStr;
use thiserror::Error;

/// Icons a component may request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Icon {
    /// Dismiss / close affordance
    Close,
}

/// Sizing and coloring directive handed to an icon renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IconDirective {
    /// Number of terminal cells the icon occupies
    pub width: u16,
    /// Foreground color
    pub color: Color,
}

impl IconDirective {
    pub fn new(width: u16, color: Color) -> Self {
        Self { width, color }
    }
}

/// Draws icons for components
pub trait IconRenderer: Send + Sync {
    /// Glyph used for `icon`
    fn glyph(&self, icon: Icon) -> &'static str;

    /// Render `icon` centred in the directive's width
    fn render(&self, icon: Icon, directive: IconDirective) -> Span<'static> {
        let text = string::center(self.glyph(icon), usize::from(directive.width));
        Span::styled(
            text,
            Style::default()
                .fg(directive.color)
                .add_modifier(Modifier::BOLD),
        )
    }
}

/// Unicode glyph icons
#[derive(Debug, Clone, Copy, Default)]
pub struct GlyphIcons;

impl IconRenderer for GlyphIcons {
    fn glyph(&self, icon: Icon) -> &'static str {
        match icon {
            Icon::Close => "✕",
        }
    }
}

/// Plain ASCII icons for terminals without good unicode fonts
#[derive(Debug, Clone, Copy, Default)]
pub struct AsciiIcons;

impl IconRenderer for AsciiIcons {
    fn glyph(&self, icon: Icon) -> &'static str {
        match icon {
            Icon::Close => "x",
        }
    }
}

/// Icon set selectable from configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IconSet {
    #[default]
    Glyph,
    Ascii,
}

#[derive(Debug, Error)]
#[error("unknown icon set '{0}' (expected 'glyph' or 'ascii')")]
pub struct UnknownIconSet(pub String);

impl FromStr for IconSet {
    type Err = UnknownIconSet;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "glyph" | "unicode" => Ok(Self::Glyph),
            "ascii" => Ok(Self::Ascii),
            _ => Err(UnknownIconSet(s.to_string())),
        }
    }
}

impl IconSet {
    pub fn renderer(self) -> Box<dyn IconRenderer> {
        match self {
            Self::Glyph => Box::new(GlyphIcons),
            Self::Ascii => Box::new(AsciiIcons),
        }
    }
}

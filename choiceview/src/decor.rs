//! Style decorators: optional overrides supplied by the host, resolved into
//! concrete appearances with documented defaults.

use crate::types::{Color, TextAlign, TextStyle};

/// Default design tokens used whenever a decorator field is unset.
pub mod tokens {
    use crate::types::Color;

    /// Neutral gray used for choice and header text.
    pub const TEXT: Color = Color::rgb(170, 170, 170);
    /// Background applied to a highlighted cell.
    pub const HIGHLIGHT_BG: Color = Color::rgb(38, 79, 120);
    /// Text color applied to a highlighted cell.
    pub const HIGHLIGHT_TEXT: Color = Color::rgb(255, 255, 255);

    pub const ITEM_HEIGHT: u16 = 1;
    pub const ITEM_SPACING: u16 = 0;
    pub const SECTION_HEIGHT: u16 = 1;
    pub const SECTION_SPACING: u16 = 0;
    pub const TITLE_HEIGHT: u16 = 1;
    /// Gap between the title label and the list below it.
    pub const TITLE_GAP: u16 = 1;
}

/// Appearance overrides for a single choice cell.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ItemDecor {
    pub background: Option<Color>,
    pub text_color: Option<Color>,
    pub text_style: Option<TextStyle>,
    pub highlight_background: Option<Color>,
    pub highlight_text_color: Option<Color>,
}

impl ItemDecor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn background(mut self, color: Color) -> Self {
        self.background = Some(color);
        self
    }

    pub fn text_color(mut self, color: Color) -> Self {
        self.text_color = Some(color);
        self
    }

    pub fn text_style(mut self, style: TextStyle) -> Self {
        self.text_style = Some(style);
        self
    }

    pub fn highlight_background(mut self, color: Color) -> Self {
        self.highlight_background = Some(color);
        self
    }

    pub fn highlight_text_color(mut self, color: Color) -> Self {
        self.highlight_text_color = Some(color);
        self
    }

    /// Merge over the defaults: transparent background, neutral gray text,
    /// regular text style, token highlight colors.
    pub fn resolve(&self) -> ItemAppearance {
        ItemAppearance {
            background: self.background.clone().unwrap_or(Color::Transparent),
            text_color: self.text_color.clone().unwrap_or(tokens::TEXT),
            text_style: self.text_style.unwrap_or_default(),
            highlight_background: self
                .highlight_background
                .clone()
                .unwrap_or(tokens::HIGHLIGHT_BG),
            highlight_text_color: self
                .highlight_text_color
                .clone()
                .unwrap_or(tokens::HIGHLIGHT_TEXT),
        }
    }
}

/// Fully resolved cell appearance. Every field is concrete.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemAppearance {
    pub background: Color,
    pub text_color: Color,
    pub text_style: TextStyle,
    pub highlight_background: Color,
    pub highlight_text_color: Color,
}

impl Default for ItemAppearance {
    fn default() -> Self {
        ItemDecor::default().resolve()
    }
}

/// Appearance overrides for a section header.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HeaderDecor {
    pub background: Option<Color>,
    pub text_color: Option<Color>,
    pub text_style: Option<TextStyle>,
}

impl HeaderDecor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn background(mut self, color: Color) -> Self {
        self.background = Some(color);
        self
    }

    pub fn text_color(mut self, color: Color) -> Self {
        self.text_color = Some(color);
        self
    }

    pub fn text_style(mut self, style: TextStyle) -> Self {
        self.text_style = Some(style);
        self
    }

    /// Headers default to dim neutral text on a transparent background.
    pub fn resolve(&self) -> HeaderAppearance {
        HeaderAppearance {
            background: self.background.clone().unwrap_or(Color::Transparent),
            text_color: self.text_color.clone().unwrap_or(tokens::TEXT),
            text_style: self
                .text_style
                .unwrap_or_else(|| TextStyle::new().dim()),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct HeaderAppearance {
    pub background: Color,
    pub text_color: Color,
    pub text_style: TextStyle,
}

impl Default for HeaderAppearance {
    fn default() -> Self {
        HeaderDecor::default().resolve()
    }
}

/// Row metrics the list presenter sizes itself with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListMetrics {
    pub item_height: u16,
    pub item_spacing: u16,
    pub section_spacing: u16,
    pub section_height: u16,
}

impl Default for ListMetrics {
    fn default() -> Self {
        Self {
            item_height: tokens::ITEM_HEIGHT,
            item_spacing: tokens::ITEM_SPACING,
            section_spacing: tokens::SECTION_SPACING,
            section_height: tokens::SECTION_HEIGHT,
        }
    }
}

impl ListMetrics {
    /// Exact content height for the given counts, floored at zero. Used by
    /// the non-scrolling variant to size itself to its content.
    pub fn preferred_height(&self, items: usize, sections: usize) -> u16 {
        let items = items as i64;
        let sections = sections as i64;
        let total = self.item_height as i64 * items
            + self.item_spacing as i64 * (items - 1)
            + self.section_spacing as i64 * 2 * sections
            + self.section_height as i64 * sections;
        total.clamp(0, u16::MAX as i64) as u16
    }
}

/// Container-level decorator: title styling plus list metrics.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ViewDecor {
    pub title: Option<String>,
    pub title_height: Option<u16>,
    pub title_align: Option<TextAlign>,
    pub title_text_color: Option<Color>,
    pub title_text_style: Option<TextStyle>,
    pub item_height: Option<u16>,
    pub item_spacing: Option<u16>,
    pub section_spacing: Option<u16>,
    pub section_height: Option<u16>,
}

impl ViewDecor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn title_height(mut self, height: u16) -> Self {
        self.title_height = Some(height);
        self
    }

    pub fn title_align(mut self, align: TextAlign) -> Self {
        self.title_align = Some(align);
        self
    }

    pub fn title_text_color(mut self, color: Color) -> Self {
        self.title_text_color = Some(color);
        self
    }

    pub fn title_text_style(mut self, style: TextStyle) -> Self {
        self.title_text_style = Some(style);
        self
    }

    pub fn item_height(mut self, height: u16) -> Self {
        self.item_height = Some(height);
        self
    }

    pub fn item_spacing(mut self, spacing: u16) -> Self {
        self.item_spacing = Some(spacing);
        self
    }

    pub fn section_spacing(mut self, spacing: u16) -> Self {
        self.section_spacing = Some(spacing);
        self
    }

    pub fn section_height(mut self, height: u16) -> Self {
        self.section_height = Some(height);
        self
    }

    pub fn resolve(&self) -> ViewAppearance {
        ViewAppearance {
            title: self.title.clone().unwrap_or_default(),
            title_height: self.title_height.unwrap_or(tokens::TITLE_HEIGHT),
            title_align: self.title_align.unwrap_or(TextAlign::Center),
            title_text_color: self.title_text_color.clone().unwrap_or(tokens::TEXT),
            title_text_style: self
                .title_text_style
                .unwrap_or_else(|| TextStyle::new().bold()),
            metrics: ListMetrics {
                item_height: self.item_height.unwrap_or(tokens::ITEM_HEIGHT),
                item_spacing: self.item_spacing.unwrap_or(tokens::ITEM_SPACING),
                section_spacing: self.section_spacing.unwrap_or(tokens::SECTION_SPACING),
                section_height: self.section_height.unwrap_or(tokens::SECTION_HEIGHT),
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ViewAppearance {
    pub title: String,
    pub title_height: u16,
    pub title_align: TextAlign,
    pub title_text_color: Color,
    pub title_text_style: TextStyle,
    pub metrics: ListMetrics,
}

impl Default for ViewAppearance {
    fn default() -> Self {
        ViewDecor::default().resolve()
    }
}

impl ViewAppearance {
    /// A title label is only built for a non-empty title string.
    pub fn has_title(&self) -> bool {
        !self.title.is_empty()
    }
}

//! Theme module - padding, icon/text sizes and color tokens
//!
//! Layouts and widgets read everything visual through the [`Theme`] trait.
//! [`DefaultTheme`] carries the built-in dark palette; [`ThemeSettings`]
//! overlays configured values on top of it.

pub mod types;

use std::collections::HashMap;

use unicode_width::UnicodeWidthStr;

use crate::geometry::Size;

pub use types::{Color, ColorName, SizeName};

/// Horizontal advance of one text cell, relative to the text size
const TEXT_ADVANCE_RATIO: f32 = 0.6;
/// Line height relative to the text size
const TEXT_LINE_RATIO: f32 = 1.3;

/// Provider of theme tokens
pub trait Theme {
    /// Resolve a color token
    fn color(&self, name: ColorName) -> Color;

    /// Resolve a size token
    fn size(&self, name: SizeName) -> f32;

    /// Unit padding between grid cells and around content
    fn padding(&self) -> f32 {
        self.size(SizeName::Padding)
    }

    fn icon_inline_size(&self) -> f32 {
        self.size(SizeName::InlineIcon)
    }

    fn text_size(&self) -> f32 {
        self.size(SizeName::Text)
    }

    /// Measure a single line of text at the given size
    fn measure_text(&self, text: &str, text_size: f32) -> Size {
        let cells = UnicodeWidthStr::width(text) as f32;
        Size::new(
            cells * text_size * TEXT_ADVANCE_RATIO,
            text_size * TEXT_LINE_RATIO,
        )
    }
}

/// Built-in dark theme
#[derive(Clone, Copy, Debug, Default)]
pub struct DefaultTheme;

impl DefaultTheme {
    pub const PADDING: f32 = 4.0;
    pub const ICON_INLINE_SIZE: f32 = 20.0;
    pub const TEXT_SIZE: f32 = 14.0;
}

impl Theme for DefaultTheme {
    fn color(&self, name: ColorName) -> Color {
        match name {
            ColorName::Background => Color::rgb(0x14, 0x14, 0x15),
            ColorName::Button => Color::rgb(0x28, 0x29, 0x2e),
            ColorName::DisabledButton => Color::rgb(0x26, 0x26, 0x26),
            ColorName::Disabled => Color::rgba(0xff, 0xff, 0xff, 0x42),
            ColorName::Focus => Color::rgba(0x21, 0x96, 0xf3, 0x7f),
            ColorName::Foreground => Color::rgb(0xf3, 0xf3, 0xf3),
            ColorName::Hover => Color::rgba(0xff, 0xff, 0xff, 0x0f),
            ColorName::Pressed => Color::rgba(0xff, 0xff, 0xff, 0x66),
            ColorName::Primary => Color::rgb(0x21, 0x96, 0xf3),
            ColorName::Shadow => Color::rgba(0x00, 0x00, 0x00, 0x66),
        }
    }

    fn size(&self, name: SizeName) -> f32 {
        match name {
            SizeName::Padding => Self::PADDING,
            SizeName::InlineIcon => Self::ICON_INLINE_SIZE,
            SizeName::Text => Self::TEXT_SIZE,
        }
    }
}

/// Theme with overrides layered on [`DefaultTheme`]
#[derive(Clone, Debug, Default)]
pub struct ThemeSettings {
    colors: HashMap<ColorName, Color>,
    sizes: HashMap<SizeName, f32>,
}

impl ThemeSettings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Override a color token
    pub fn with_color(mut self, name: ColorName, color: Color) -> Self {
        self.colors.insert(name, color);
        self
    }

    /// Override a size token
    pub fn with_size(mut self, name: SizeName, value: f32) -> Self {
        self.sizes.insert(name, value);
        self
    }

    /// Shorthand for overriding the unit padding
    pub fn with_padding(self, padding: f32) -> Self {
        self.with_size(SizeName::Padding, padding)
    }
}

impl Theme for ThemeSettings {
    fn color(&self, name: ColorName) -> Color {
        self.colors
            .get(&name)
            .copied()
            .unwrap_or_else(|| DefaultTheme.color(name))
    }

    fn size(&self, name: SizeName) -> f32 {
        self.sizes
            .get(&name)
            .copied()
            .unwrap_or_else(|| DefaultTheme.size(name))
    }
}

//! Core theme types: Color and the named tokens a theme resolves

use std::fmt;

use crate::error::ColorParseError;

/// RGBA color (0.0-1.0 range, straight alpha)
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Default for Color {
    fn default() -> Self {
        Self::TRANSPARENT
    }
}

impl Color {
    pub const BLACK: Color = Color {
        r: 0.0,
        g: 0.0,
        b: 0.0,
        a: 1.0,
    };
    pub const WHITE: Color = Color {
        r: 1.0,
        g: 1.0,
        b: 1.0,
        a: 1.0,
    };
    pub const TRANSPARENT: Color = Color {
        r: 0.0,
        g: 0.0,
        b: 0.0,
        a: 0.0,
    };

    /// Create color from f32 values (0.0-1.0)
    pub fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self {
            r: r.clamp(0.0, 1.0),
            g: g.clamp(0.0, 1.0),
            b: b.clamp(0.0, 1.0),
            a: a.clamp(0.0, 1.0),
        }
    }

    /// Create color from RGB values (0-255)
    pub fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::rgba(r, g, b, 255)
    }

    /// Create color from RGBA values (0-255)
    pub fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self {
            r: r as f32 / 255.0,
            g: g as f32 / 255.0,
            b: b as f32 / 255.0,
            a: a as f32 / 255.0,
        }
    }

    /// Parse hex color string (#RGB, #RGBA, #RRGGBB, #RRGGBBAA)
    pub fn from_hex(hex: &str) -> Result<Self, ColorParseError> {
        let hex = hex.trim().trim_start_matches('#');
        let digits = hex
            .chars()
            .map(parse_hex_digit)
            .collect::<Result<Vec<u8>, _>>()?;

        match *digits.as_slice() {
            [r, g, b] => Ok(Self::rgb(r * 17, g * 17, b * 17)),
            [r, g, b, a] => Ok(Self::rgba(r * 17, g * 17, b * 17, a * 17)),
            [r1, r0, g1, g0, b1, b0] => Ok(Self::rgb(r1 << 4 | r0, g1 << 4 | g0, b1 << 4 | b0)),
            [r1, r0, g1, g0, b1, b0, a1, a0] => Ok(Self::rgba(
                r1 << 4 | r0,
                g1 << 4 | g0,
                b1 << 4 | b0,
                a1 << 4 | a0,
            )),
            _ => Err(ColorParseError::InvalidFormat(hex.to_string())),
        }
    }

    /// Convert to hex string (#RRGGBB or #RRGGBBAA if alpha < 1)
    pub fn to_hex(&self) -> String {
        let r = (self.r * 255.0).round() as u8;
        let g = (self.g * 255.0).round() as u8;
        let b = (self.b * 255.0).round() as u8;

        if (self.a - 1.0).abs() < 0.001 {
            format!("#{:02x}{:02x}{:02x}", r, g, b)
        } else {
            let a = (self.a * 255.0).round() as u8;
            format!("#{:02x}{:02x}{:02x}{:02x}", r, g, b, a)
        }
    }

    /// Create a color with modified alpha
    pub fn with_alpha(&self, alpha: f32) -> Self {
        Self {
            a: alpha.clamp(0.0, 1.0),
            ..*self
        }
    }

    /// Composite `over` on top of `self` (Porter-Duff source-over)
    pub fn blend_under(&self, over: &Color) -> Self {
        let src_a = over.a;
        let dst_a = self.a * (1.0 - src_a);
        let out_a = src_a + dst_a;
        if out_a <= 0.0 {
            return Color::TRANSPARENT;
        }

        let channel = |src: f32, dst: f32| (src * src_a + dst * dst_a) / out_a;
        Self::new(
            channel(over.r, self.r),
            channel(over.g, self.g),
            channel(over.b, self.b),
            out_a,
        )
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

fn parse_hex_digit(c: char) -> Result<u8, ColorParseError> {
    c.to_digit(16)
        .map(|d| d as u8)
        .ok_or(ColorParseError::InvalidDigit(c))
}

/// Color tokens a theme resolves
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ColorName {
    Background,
    Button,
    DisabledButton,
    Disabled,
    Focus,
    Foreground,
    Hover,
    Pressed,
    Primary,
    Shadow,
}

impl ColorName {
    /// Parse from a config key (`disabled-button` or `disabled_button`)
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().replace('-', "_").as_str() {
            "background" => Some(ColorName::Background),
            "button" => Some(ColorName::Button),
            "disabled_button" => Some(ColorName::DisabledButton),
            "disabled" => Some(ColorName::Disabled),
            "focus" => Some(ColorName::Focus),
            "foreground" => Some(ColorName::Foreground),
            "hover" => Some(ColorName::Hover),
            "pressed" => Some(ColorName::Pressed),
            "primary" => Some(ColorName::Primary),
            "shadow" => Some(ColorName::Shadow),
            _ => None,
        }
    }
}

/// Size tokens a theme resolves
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SizeName {
    /// Unit padding between cells and around content
    Padding,
    /// Side of an icon shown next to text
    InlineIcon,
    /// Body text size
    Text,
}

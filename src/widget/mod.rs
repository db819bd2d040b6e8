//! Widgets
//!
//! Widgets own the canvas objects they are drawn with and recompute their
//! geometry and colors whenever their state changes. Input arrives through
//! plain method calls (`tapped`, `mouse_in`, `focus_gained`, ...); nothing
//! here pumps events or draws.

pub mod button;

pub use button::{ButtonColors, CmButton, Shadow, ShadowLevel};

/// Widget rendering state, most significant first
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum WidgetState {
    #[default]
    Normal,
    Hovered,
    Focused,
    Disabled,
}

/// How prominent a button is
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ButtonImportance {
    #[default]
    Medium,
    /// Filled with the primary color
    High,
    /// No inset and a flatter shadow
    Low,
}

/// Horizontal alignment of a button's content
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ButtonAlign {
    #[default]
    Center,
    Leading,
    Trailing,
}

/// Which side of the label the icon sits on
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ButtonIconPlacement {
    #[default]
    LeadingText,
    TrailingText,
}

/// Pointer cursor a widget asks for while hovered
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Cursor {
    #[default]
    Default,
}

/// Keys a focused widget may react to
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyName {
    Space,
    /// Any key the widget ignores
    Other,
}

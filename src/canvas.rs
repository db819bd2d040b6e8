//! Canvas objects - the capability set layouts work against
//!
//! A layout only ever asks a child whether it is visible and what its
//! minimum size is, then moves and resizes it. The concrete primitives
//! here are what widgets compose themselves from.

use crate::geometry::{Position, Size};
use crate::theme::{Color, ColorName};

/// A visual child that can be placed by a layout
pub trait CanvasObject {
    fn visible(&self) -> bool;

    /// Smallest size the object can be drawn at
    fn min_size(&self) -> Size;

    /// Move the top-left corner relative to the parent
    fn move_to(&mut self, pos: Position);

    fn resize(&mut self, size: Size);
}

/// Filled rectangle
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Rectangle {
    pub fill_color: Color,
    pub position: Position,
    pub size: Size,
    pub hidden: bool,
}

impl Rectangle {
    pub fn new(fill_color: Color) -> Self {
        Self {
            fill_color,
            ..Default::default()
        }
    }
}

impl CanvasObject for Rectangle {
    fn visible(&self) -> bool {
        !self.hidden
    }

    fn min_size(&self) -> Size {
        Size::ZERO
    }

    fn move_to(&mut self, pos: Position) {
        self.position = pos;
    }

    fn resize(&mut self, size: Size) {
        self.size = size;
    }
}

/// Named icon resource
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Resource {
    pub name: String,
    /// Themed resources are recolored to match the foreground
    pub themed: bool,
}

impl Resource {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            themed: false,
        }
    }

    pub fn themed(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            themed: true,
        }
    }
}

/// How an icon image is tinted when drawn
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum IconTint {
    /// Drawn as provided (themed icons use the foreground color)
    #[default]
    Original,
    /// Themed icon drawn in the background color, for filled buttons
    Inverted,
    /// Drawn in the disabled color
    Disabled,
}

/// Icon image scaled to fit its bounds
#[derive(Clone, Debug, PartialEq)]
pub struct Image {
    pub resource: Resource,
    pub tint: IconTint,
    pub position: Position,
    pub size: Size,
    pub hidden: bool,
    min_size: Size,
}

impl Image {
    pub fn from_resource(resource: Resource) -> Self {
        Self {
            resource,
            tint: IconTint::Original,
            position: Position::ORIGIN,
            size: Size::ZERO,
            hidden: false,
            min_size: Size::ZERO,
        }
    }

    pub fn set_min_size(&mut self, size: Size) {
        self.min_size = size;
    }
}

impl CanvasObject for Image {
    fn visible(&self) -> bool {
        !self.hidden
    }

    fn min_size(&self) -> Size {
        self.min_size
    }

    fn move_to(&mut self, pos: Position) {
        self.position = pos;
    }

    fn resize(&mut self, size: Size) {
        self.size = size;
    }
}

/// Single line of centred text with an inset around it
#[derive(Clone, Debug, PartialEq)]
pub struct Text {
    pub text: String,
    pub color: ColorName,
    /// Measured size of the text itself, without inset
    pub measured: Size,
    /// Total padding added around the text (both sides summed)
    pub inset: Size,
    pub position: Position,
    pub size: Size,
    pub hidden: bool,
}

impl Text {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            color: ColorName::Foreground,
            measured: Size::ZERO,
            inset: Size::ZERO,
            position: Position::ORIGIN,
            size: Size::ZERO,
            hidden: false,
        }
    }
}

impl CanvasObject for Text {
    fn visible(&self) -> bool {
        !self.hidden
    }

    fn min_size(&self) -> Size {
        self.measured + self.inset
    }

    fn move_to(&mut self, pos: Position) {
        self.position = pos;
    }

    fn resize(&mut self, size: Size) {
        self.size = size;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_min_size_includes_inset() {
        let mut text = Text::new("OK");
        text.measured = Size::new(20.0, 18.0);
        text.inset = Size::new(8.0, 8.0);

        assert_eq!(text.min_size(), Size::new(28.0, 26.0));
    }

    #[test]
    fn test_primitives_move_and_resize() {
        let mut rect = Rectangle::new(Color::WHITE);
        rect.move_to(Position::new(2.0, 3.0));
        rect.resize(Size::new(10.0, 5.0));

        assert_eq!(rect.position, Position::new(2.0, 3.0));
        assert_eq!(rect.size, Size::new(10.0, 5.0));
        assert!(rect.visible());

        let mut image = Image::from_resource(Resource::themed("cancel"));
        image.set_min_size(Size::square(20.0));
        image.hidden = true;
        assert_eq!(image.min_size(), Size::square(20.0));
        assert!(!image.visible());
    }
}

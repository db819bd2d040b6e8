//! Horizontal box layout

use std::rc::Rc;

use crate::canvas::CanvasObject;
use crate::geometry::{Position, Size};
use crate::theme::Theme;

use super::Layout;

/// Lays out visible children left to right at their minimum widths
#[derive(Clone)]
pub struct HBoxLayout {
    theme: Rc<dyn Theme>,
}

impl HBoxLayout {
    pub fn new(theme: Rc<dyn Theme>) -> Self {
        Self { theme }
    }
}

impl Layout for HBoxLayout {
    fn layout(&self, objects: &mut [&mut dyn CanvasObject], size: Size) {
        let padding = self.theme.padding();
        let mut x = 0.0;
        for child in objects.iter_mut() {
            if !child.visible() {
                continue;
            }

            let width = child.min_size().width;
            child.move_to(Position::new(x, 0.0));
            child.resize(Size::new(width, size.height));
            x += width + padding;
        }
    }

    fn min_size(&self, objects: &[&mut dyn CanvasObject]) -> Size {
        let mut min = Size::ZERO;
        let mut visible = 0;
        for child in objects.iter().filter(|c| c.visible()) {
            let child_min = child.min_size();
            min.width += child_min.width;
            min.height = min.height.max(child_min.height);
            visible += 1;
        }

        if visible > 1 {
            min.width += self.theme.padding() * (visible - 1) as f32;
        }
        min
    }
}

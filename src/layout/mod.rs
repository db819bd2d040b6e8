//! Layouts - position and size canvas objects inside a container
//!
//! - [`WeightedGridLayout`]: grid where each child spans a weighted number
//!   of units along the wrapping axis
//! - [`HBoxLayout`]: children side by side at their minimum widths

pub mod hbox;
pub mod weighted_grid;

use crate::canvas::CanvasObject;
use crate::geometry::Size;

pub use hbox::HBoxLayout;
pub use weighted_grid::WeightedGridLayout;

/// Layout axis
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Orientation {
    #[default]
    Horizontal,
    Vertical,
}

/// Arranges a container's children
///
/// Passes are pure recomputations from the children's current state;
/// nothing is cached between calls.
pub trait Layout {
    /// Move and resize `objects` to fill `size`
    fn layout(&self, objects: &mut [&mut dyn CanvasObject], size: Size);

    /// Smallest container size that fits all visible `objects`
    fn min_size(&self, objects: &[&mut dyn CanvasObject]) -> Size;
}

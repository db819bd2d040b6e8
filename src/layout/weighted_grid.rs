//! Weighted grid layout
//!
//! Children are placed along a wrapping axis in units; each child occupies
//! as many units as its weight. A line holds `total_weight` units, after
//! which placement wraps to the next line along the flow axis.
//!
//! In horizontal orientation lines are rows and weights span columns; in
//! vertical orientation lines are columns and weights span rows.

use std::rc::Rc;

use crate::canvas::CanvasObject;
use crate::device::Device;
use crate::error::LayoutError;
use crate::geometry::{Position, Size};
use crate::theme::Theme;

use super::{Layout, Orientation};

/// How the grid picks its orientation
#[derive(Clone)]
enum Arrangement {
    /// Fixed columns, rows added as needed
    Columns,
    /// Fixed rows, columns added as needed
    Rows,
    /// Columns on a horizontal device, rows on a vertical one
    Adaptive(Rc<dyn Device>),
}

/// Grid layout with per-child weights
#[derive(Clone)]
pub struct WeightedGridLayout {
    weights: Vec<usize>,
    total_weight: usize,
    arrangement: Arrangement,
    theme: Rc<dyn Theme>,
}

impl std::fmt::Debug for WeightedGridLayout {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WeightedGridLayout")
            .field("weights", &self.weights)
            .field("total_weight", &self.total_weight)
            .field("adaptive", &self.is_adaptive())
            .field("vertical", &self.is_vertical())
            .finish()
    }
}

fn total_weight(weights: &[usize]) -> Result<usize, LayoutError> {
    if weights.is_empty() {
        return Err(LayoutError::EmptyWeights);
    }
    if let Some(index) = weights.iter().position(|&w| w == 0) {
        return Err(LayoutError::ZeroWeight { index });
    }
    weights
        .iter()
        .try_fold(0usize, |total, &w| total.checked_add(w))
        .ok_or(LayoutError::WeightOverflow)
}

/// Leading edge of cell `offset`
fn leading(cell: f32, padding: f32, offset: usize) -> f32 {
    (cell + padding) * offset as f32
}

/// Trailing edge of cell `offset`
fn trailing(cell: f32, padding: f32, offset: usize) -> f32 {
    leading(cell, padding, offset + 1) - padding
}

impl WeightedGridLayout {
    fn build(
        weights: Vec<usize>,
        arrangement: Arrangement,
        theme: Rc<dyn Theme>,
    ) -> Result<Self, LayoutError> {
        let total_weight = total_weight(&weights)?;
        Ok(Self {
            weights,
            total_weight,
            arrangement,
            theme,
        })
    }

    /// Grid arranged in weighted columns; rows depend on the children
    pub fn new(cols: Vec<usize>, theme: Rc<dyn Theme>) -> Result<Self, LayoutError> {
        Self::with_columns(cols, theme)
    }

    /// Grid with weighted columns that wraps to new rows when needed
    pub fn with_columns(cols: Vec<usize>, theme: Rc<dyn Theme>) -> Result<Self, LayoutError> {
        Self::build(cols, Arrangement::Columns, theme)
    }

    /// Grid with weighted rows that wraps to new columns when needed
    pub fn with_rows(rows: Vec<usize>, theme: Rc<dyn Theme>) -> Result<Self, LayoutError> {
        Self::build(rows, Arrangement::Rows, theme)
    }

    /// Grid that uses columns when the device is horizontal and rows when
    /// it is vertical
    pub fn adaptive(
        rowcols: Vec<usize>,
        theme: Rc<dyn Theme>,
        device: Rc<dyn Device>,
    ) -> Result<Self, LayoutError> {
        Self::build(rowcols, Arrangement::Adaptive(device), theme)
    }

    pub fn weights(&self) -> &[usize] {
        &self.weights
    }

    /// Units per line before wrapping
    pub fn total_weight(&self) -> usize {
        self.total_weight
    }

    pub fn is_adaptive(&self) -> bool {
        matches!(self.arrangement, Arrangement::Adaptive(_))
    }

    /// Whether the static axis is vertical (adaptive grids report false)
    pub fn is_vertical(&self) -> bool {
        matches!(self.arrangement, Arrangement::Rows)
    }

    /// Orientation for the current pass
    pub fn orientation(&self) -> Orientation {
        match &self.arrangement {
            Arrangement::Columns => Orientation::Horizontal,
            Arrangement::Rows => Orientation::Vertical,
            Arrangement::Adaptive(device) => {
                if device.orientation().is_horizontal() {
                    Orientation::Horizontal
                } else {
                    Orientation::Vertical
                }
            }
        }
    }

    /// Weight of the child at `index`
    ///
    /// Children past the end of the weight list reuse the weights from the
    /// start, so extra children wrap onto further lines and add to the line
    /// count for the whole grid.
    pub fn weight(&self, index: usize) -> usize {
        self.weights[index % self.weights.len()]
    }

    /// Number of lines needed for the visible children
    pub fn count_rows(&self, objects: &[&mut dyn CanvasObject]) -> usize {
        let units: usize = objects
            .iter()
            .enumerate()
            .filter(|(_, child)| child.visible())
            .map(|(i, _)| self.weight(i))
            .sum();

        units.div_ceil(self.total_weight)
    }

    /// Cells along (x, y) for the given line count
    fn cells(&self, orientation: Orientation, rows: usize) -> (f32, f32) {
        let total = self.total_weight as f32;
        let lines = rows as f32;
        match orientation {
            Orientation::Horizontal => (total, lines),
            Orientation::Vertical => (lines, total),
        }
    }
}

impl Layout for WeightedGridLayout {
    fn layout(&self, objects: &mut [&mut dyn CanvasObject], size: Size) {
        let rows = self.count_rows(objects);
        crate::log_fn!(
            "WeightedGridLayout::layout",
            "size={}x{} rows={}",
            size.width,
            size.height,
            rows
        );
        if rows == 0 {
            return;
        }

        if objects.len() != self.weights.len() {
            crate::log!(
                "WeightedGridLayout: {} children for {} weights",
                objects.len(),
                self.weights.len()
            );
        }

        let orientation = self.orientation();
        let padding = self.theme.padding();
        let (cells_x, cells_y) = self.cells(orientation, rows);

        let pad_width = (cells_x - 1.0) * padding;
        let pad_height = (cells_y - 1.0) * padding;
        let cell_width = (size.width - pad_width) / cells_x;
        let cell_height = (size.height - pad_height) / cells_y;

        let (mut row, mut col) = (0usize, 0usize);
        let mut index = 0usize;
        for (i, child) in objects.iter_mut().enumerate() {
            if !child.visible() {
                continue;
            }

            let span = self.weight(i);
            let (col_span, row_span) = match orientation {
                Orientation::Horizontal => (span, 1),
                Orientation::Vertical => (1, span),
            };

            let line_pos = match orientation {
                Orientation::Horizontal => col,
                Orientation::Vertical => row,
            };
            if line_pos + span > self.total_weight {
                crate::log!(
                    "WeightedGridLayout: child {} (span {}) crosses a line boundary",
                    i,
                    span
                );
            }

            let top_left = Position::new(
                leading(cell_width, padding, col),
                leading(cell_height, padding, row),
            );
            let bottom_right = Position::new(
                trailing(cell_width, padding, col + col_span - 1),
                trailing(cell_height, padding, row + row_span - 1),
            );
            crate::log!(
                "  [{}] {},{} - {},{}",
                i,
                top_left.x,
                top_left.y,
                bottom_right.x,
                bottom_right.y
            );

            child.move_to(top_left);
            child.resize(bottom_right - top_left);

            // Step unit by unit so a span straddling a wrap still lands the
            // cursor where the next child expects it.
            for _ in 0..span {
                index += 1;
                let wrapped = index % self.total_weight == 0;
                match (orientation, wrapped) {
                    (Orientation::Horizontal, true) => {
                        row += 1;
                        col = 0;
                    }
                    (Orientation::Horizontal, false) => col += 1,
                    (Orientation::Vertical, true) => {
                        col += 1;
                        row = 0;
                    }
                    (Orientation::Vertical, false) => row += 1,
                }
            }
        }
    }

    fn min_size(&self, objects: &[&mut dyn CanvasObject]) -> Size {
        let rows = self.count_rows(objects);
        if rows == 0 {
            return Size::ZERO;
        }

        // Per-unit minimum: height is shared out over the child's weight
        let mut unit = Size::ZERO;
        for (i, child) in objects.iter().enumerate() {
            if !child.visible() {
                continue;
            }
            let mut child_min = child.min_size();
            child_min.height /= self.weight(i) as f32;
            unit = unit.max(child_min);
        }

        let padding = self.theme.padding();
        let (cells_x, cells_y) = self.cells(self.orientation(), rows);
        let content = Size::new(unit.width * cells_x, unit.height * cells_y);

        content
            + Size::new(
                padding * (cells_x - 1.0).max(0.0),
                padding * (cells_y - 1.0).max(0.0),
            )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::device::{DeviceOrientation, SimulatedDevice};
    use crate::layout::testing::{objects, RecordingObject};
    use crate::theme::ThemeSettings;

    fn theme(padding: f32) -> Rc<dyn Theme> {
        Rc::new(ThemeSettings::new().with_padding(padding))
    }

    fn children(n: usize) -> Vec<RecordingObject> {
        (0..n)
            .map(|_| RecordingObject::new(Size::new(10.0, 10.0)))
            .collect()
    }

    #[test]
    fn test_total_weight_is_sum() {
        for weights in [vec![1], vec![1, 1, 2], vec![3, 5, 2, 7], vec![4; 6]] {
            let expected: usize = weights.iter().sum();
            let grid = WeightedGridLayout::new(weights.clone(), theme(0.0)).unwrap();
            assert_eq!(grid.total_weight(), expected);
            assert_eq!(grid.weights(), weights.as_slice());
        }
    }

    #[test]
    fn test_invalid_weights_rejected() {
        assert_eq!(
            WeightedGridLayout::new(vec![], theme(0.0)).unwrap_err(),
            LayoutError::EmptyWeights
        );
        assert_eq!(
            WeightedGridLayout::with_rows(vec![1, 0, 2], theme(0.0)).unwrap_err(),
            LayoutError::ZeroWeight { index: 1 }
        );
        assert_eq!(
            WeightedGridLayout::new(vec![usize::MAX, 1], theme(0.0)).unwrap_err(),
            LayoutError::WeightOverflow
        );
    }

    #[test]
    fn test_constructor_flags() {
        let device = Rc::new(SimulatedDevice::new(DeviceOrientation::Vertical));

        let cols = WeightedGridLayout::with_columns(vec![1], theme(0.0)).unwrap();
        let rows = WeightedGridLayout::with_rows(vec![1], theme(0.0)).unwrap();
        let adaptive = WeightedGridLayout::adaptive(vec![1], theme(0.0), device).unwrap();

        assert!(!cols.is_vertical() && !cols.is_adaptive());
        assert!(rows.is_vertical() && !rows.is_adaptive());
        assert!(!adaptive.is_vertical() && adaptive.is_adaptive());
    }

    #[test]
    fn test_count_rows_zero_when_nothing_visible() {
        let grid = WeightedGridLayout::new(vec![1, 1, 2], theme(0.0)).unwrap();
        let mut kids: Vec<_> = (0..3)
            .map(|_| RecordingObject::hidden(Size::new(10.0, 10.0)))
            .collect();

        assert_eq!(grid.count_rows(&objects(&mut kids)), 0);
        assert_eq!(grid.count_rows(&[]), 0);
    }

    #[test]
    fn test_count_rows_monotonic_as_children_appear() {
        let grid = WeightedGridLayout::new(vec![1, 2, 1], theme(0.0)).unwrap();
        let mut kids: Vec<_> = (0..9)
            .map(|_| RecordingObject::hidden(Size::new(10.0, 10.0)))
            .collect();

        let mut last = 0;
        for i in 0..kids.len() {
            kids[i].visible = true;
            let rows = grid.count_rows(&objects(&mut kids));
            assert!(rows >= last);
            last = rows;
        }
        // 9 children reuse weights 1,2,1 three times: 12 units over 4 per line
        assert_eq!(last, 3);
    }

    #[test]
    fn test_horizontal_spans() {
        let grid = WeightedGridLayout::new(vec![1, 1, 2], theme(0.0)).unwrap();
        let mut kids = children(3);

        grid.layout(&mut objects(&mut kids), Size::new(400.0, 100.0));

        assert_eq!(grid.count_rows(&objects(&mut kids)), 1);
        assert_eq!(kids[0].bounds(), (0.0, 0.0, 100.0, 100.0));
        assert_eq!(kids[1].bounds(), (100.0, 0.0, 200.0, 100.0));
        assert_eq!(kids[2].bounds(), (200.0, 0.0, 400.0, 100.0));
    }

    #[test]
    fn test_line_is_tiled_without_gaps() {
        let grid = WeightedGridLayout::new(vec![2, 1, 3, 2], theme(0.0)).unwrap();
        let mut kids = children(4);

        grid.layout(&mut objects(&mut kids), Size::new(800.0, 50.0));

        let mut edge = 0.0;
        let mut units = 0;
        for (i, kid) in kids.iter().enumerate() {
            let (x1, _, x2, _) = kid.bounds();
            assert_eq!(x1, edge);
            assert_eq!(x2 - x1, 100.0 * grid.weight(i) as f32);
            edge = x2;
            units += grid.weight(i);
        }
        assert_eq!(units, grid.total_weight());
        assert_eq!(edge, 800.0);
    }

    #[test]
    fn test_extra_children_reuse_weights_from_start() {
        let grid = WeightedGridLayout::new(vec![1, 1, 2], theme(0.0)).unwrap();
        let mut kids = children(4);

        assert_eq!(grid.weight(3), 1);
        assert_eq!(grid.count_rows(&objects(&mut kids)), 2);

        grid.layout(&mut objects(&mut kids), Size::new(400.0, 100.0));

        // The fifth unit opens a second row, so every row is half height
        assert_eq!(kids[0].bounds(), (0.0, 0.0, 100.0, 50.0));
        assert_eq!(kids[2].bounds(), (200.0, 0.0, 400.0, 50.0));
        assert_eq!(kids[3].calls, 2);
        assert_eq!(kids[3].bounds(), (0.0, 50.0, 100.0, 100.0));
    }

    #[test]
    fn test_hidden_child_is_untouched() {
        let grid = WeightedGridLayout::new(vec![1, 1, 2], theme(0.0)).unwrap();
        let mut kids = children(3);
        kids[1].visible = false;

        grid.layout(&mut objects(&mut kids), Size::new(400.0, 100.0));

        assert_eq!(kids[1].calls, 0);
        assert!(kids[1].position.is_none());
        assert_eq!(kids[0].bounds(), (0.0, 0.0, 100.0, 100.0));
        // The hidden child takes no slot, so the next one moves up
        assert_eq!(kids[2].bounds(), (100.0, 0.0, 300.0, 100.0));
    }

    #[test]
    fn test_hidden_child_matches_omitted_child() {
        let size = Size::new(500.0, 120.0);

        let with_hidden = WeightedGridLayout::new(vec![2, 1, 2], theme(5.0)).unwrap();
        let mut kids = children(3);
        kids[1].visible = false;
        with_hidden.layout(&mut objects(&mut kids), size);

        // Same total weight, hidden child removed from the input
        let omitted = WeightedGridLayout::new(vec![2, 2, 1], theme(5.0)).unwrap();
        let mut others = children(3);
        others[2].visible = false;
        omitted.layout(&mut objects(&mut others), size);

        assert_eq!(kids[0].bounds(), others[0].bounds());
        assert_eq!(kids[2].bounds(), others[1].bounds());
    }

    #[test]
    fn test_vertical_spans() {
        let grid = WeightedGridLayout::with_rows(vec![1, 2, 1], theme(0.0)).unwrap();
        let mut kids = children(3);

        grid.layout(&mut objects(&mut kids), Size::new(100.0, 400.0));

        assert_eq!(kids[0].bounds(), (0.0, 0.0, 100.0, 100.0));
        assert_eq!(kids[1].bounds(), (0.0, 100.0, 100.0, 300.0));
        assert_eq!(kids[2].bounds(), (0.0, 300.0, 100.0, 400.0));
    }

    #[test]
    fn test_padding_absorbed_by_spans_across_rows() {
        let grid = WeightedGridLayout::new(vec![1, 2, 1], theme(10.0)).unwrap();
        let mut kids = children(6);

        grid.layout(&mut objects(&mut kids), Size::new(400.0, 200.0));

        // cell width (400 - 3 * 10) / 4, cell height (200 - 10) / 2
        assert_eq!(kids[0].bounds(), (0.0, 0.0, 92.5, 95.0));
        assert_eq!(kids[1].bounds(), (102.5, 0.0, 297.5, 95.0));
        assert_eq!(kids[2].bounds(), (307.5, 0.0, 400.0, 95.0));
        assert_eq!(kids[3].bounds(), (0.0, 105.0, 92.5, 200.0));
        assert_eq!(kids[4].bounds(), (102.5, 105.0, 297.5, 200.0));
        assert_eq!(kids[5].bounds(), (307.5, 105.0, 400.0, 200.0));
    }

    #[test]
    fn test_vertical_wraps_into_columns() {
        let grid = WeightedGridLayout::with_rows(vec![1, 1], theme(0.0)).unwrap();
        let mut kids = children(4);

        grid.layout(&mut objects(&mut kids), Size::new(200.0, 100.0));

        assert_eq!(kids[0].bounds(), (0.0, 0.0, 100.0, 50.0));
        assert_eq!(kids[1].bounds(), (0.0, 50.0, 100.0, 100.0));
        assert_eq!(kids[2].bounds(), (100.0, 0.0, 200.0, 50.0));
        assert_eq!(kids[3].bounds(), (100.0, 50.0, 200.0, 100.0));
    }

    #[test]
    fn test_span_crossing_wrap_does_not_panic() {
        let grid = WeightedGridLayout::new(vec![2, 1], theme(0.0)).unwrap();
        let mut kids = children(4);
        kids[1].visible = false;

        grid.layout(&mut objects(&mut kids), Size::new(300.0, 200.0));

        // Child 2 starts in the last column and overhangs the line
        assert_eq!(kids[2].bounds(), (200.0, 0.0, 400.0, 100.0));
        // The cursor wrapped mid-span, so child 3 follows on the next row
        assert_eq!(kids[3].bounds(), (100.0, 100.0, 200.0, 200.0));
    }

    #[test]
    fn test_adaptive_follows_device() {
        let device = Rc::new(SimulatedDevice::new(DeviceOrientation::HorizontalLeft));
        let grid =
            WeightedGridLayout::adaptive(vec![1, 1], theme(0.0), device.clone()).unwrap();
        let mut kids = children(2);
        let size = Size::new(200.0, 200.0);

        assert_eq!(grid.orientation(), Orientation::Horizontal);
        grid.layout(&mut objects(&mut kids), size);
        assert_eq!(kids[1].bounds(), (100.0, 0.0, 200.0, 200.0));

        device.rotate(DeviceOrientation::Vertical);
        assert_eq!(grid.orientation(), Orientation::Vertical);
        grid.layout(&mut objects(&mut kids), size);
        assert_eq!(kids[1].bounds(), (0.0, 100.0, 200.0, 200.0));
    }

    #[test]
    fn test_layout_nothing_visible_is_noop() {
        let grid = WeightedGridLayout::new(vec![1, 1], theme(4.0)).unwrap();
        let mut kids: Vec<_> = (0..2)
            .map(|_| RecordingObject::hidden(Size::new(10.0, 10.0)))
            .collect();

        grid.layout(&mut objects(&mut kids), Size::new(100.0, 100.0));

        assert!(kids.iter().all(|k| k.calls == 0));
        assert_eq!(grid.min_size(&objects(&mut kids)), Size::ZERO);
    }

    #[test]
    fn test_min_size_horizontal() {
        let grid = WeightedGridLayout::new(vec![1, 1, 2], theme(4.0)).unwrap();
        let mut kids = vec![
            RecordingObject::new(Size::new(30.0, 20.0)),
            RecordingObject::new(Size::new(40.0, 10.0)),
            RecordingObject::new(Size::new(50.0, 60.0)),
        ];

        // Unit is (50, 30): the spanning child's height is split over 2
        let min = grid.min_size(&objects(&mut kids));
        assert_eq!(min, Size::new(50.0 * 4.0 + 3.0 * 4.0, 30.0));
    }

    #[test]
    fn test_min_size_vertical() {
        let grid = WeightedGridLayout::with_rows(vec![1, 1, 2], theme(4.0)).unwrap();
        let mut kids = vec![
            RecordingObject::new(Size::new(30.0, 20.0)),
            RecordingObject::new(Size::new(40.0, 10.0)),
            RecordingObject::new(Size::new(50.0, 60.0)),
        ];

        let min = grid.min_size(&objects(&mut kids));
        assert_eq!(min, Size::new(50.0, 30.0 * 4.0 + 3.0 * 4.0));
    }

    #[test]
    fn test_min_size_vertical_multiple_columns() {
        let grid = WeightedGridLayout::with_rows(vec![1, 1, 2], theme(4.0)).unwrap();
        let mut kids = vec![
            RecordingObject::new(Size::new(30.0, 20.0)),
            RecordingObject::new(Size::new(40.0, 10.0)),
            RecordingObject::new(Size::new(50.0, 60.0)),
            RecordingObject::new(Size::new(30.0, 20.0)),
            RecordingObject::new(Size::new(40.0, 10.0)),
            RecordingObject::new(Size::new(50.0, 60.0)),
        ];

        // 8 units over 4 per column: 2 columns, each 4 units tall
        assert_eq!(grid.count_rows(&objects(&mut kids)), 2);
        let min = grid.min_size(&objects(&mut kids));
        assert_eq!(min, Size::new(50.0 * 2.0 + 4.0, 30.0 * 4.0 + 3.0 * 4.0));
    }

    #[test]
    fn test_min_size_ignores_hidden() {
        let grid = WeightedGridLayout::new(vec![1, 1], theme(0.0)).unwrap();
        let mut kids = vec![
            RecordingObject::new(Size::new(30.0, 20.0)),
            RecordingObject::hidden(Size::new(500.0, 500.0)),
        ];

        assert_eq!(grid.min_size(&objects(&mut kids)), Size::new(60.0, 20.0));
    }

    #[test]
    fn test_min_size_scales_with_total_weight_and_rows() {
        let small = WeightedGridLayout::new(vec![1, 1], theme(2.0)).unwrap();
        let large = WeightedGridLayout::new(vec![1, 1, 1, 1], theme(2.0)).unwrap();
        let mut two = children(2);
        let mut four = children(4);
        let mut eight = children(8);

        let base = small.min_size(&objects(&mut two));
        let wide = large.min_size(&objects(&mut four));
        let tall = large.min_size(&objects(&mut eight));

        // Content doubles; only the fixed padding terms differ
        assert_eq!(wide.width - 3.0 * 2.0, 2.0 * (base.width - 2.0));
        assert_eq!(tall.width, wide.width);
        assert_eq!(tall.height - 2.0, 2.0 * wide.height);
    }
}

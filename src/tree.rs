//! Tree geometry and the spacing-constrained light placement.

use derive_builder::Builder;
use ratatui::style::Color;

use crate::constants::{tree, FRAMES_PER_BUCKET};

/// Static shape of the tree: an isoceles crown of `height` rows with its
/// apex at `(center_x, start_y)`, plus a small trunk directly below.
#[derive(Builder, Clone, Copy, Debug, PartialEq, Eq)]
pub struct TreeGeometry {
    pub center_x: i32,
    pub start_y: i32,
    pub height: u16,
}

impl TreeGeometry {
    /// Crown row `r` is `2r + 1` cells wide, centered on the apex.
    pub fn row_width(&self, row: u16) -> u16 {
        2 * row + 1
    }

    /// Screen x of column `col` within crown row `row`.
    pub fn cell_x(&self, row: u16, col: u16) -> i32 {
        self.center_x - row as i32 + col as i32
    }

    /// Screen y of crown row `row`.
    pub fn cell_y(&self, row: u16) -> i32 {
        self.start_y + row as i32
    }

    /// Screen y of the first trunk row.
    pub fn trunk_y(&self) -> i32 {
        self.start_y + self.height as i32
    }

    /// Position of the tree-topper star.
    pub fn topper(&self) -> (i32, i32) {
        (self.center_x, self.start_y - 1)
    }
}

/// One accepted light. `row`/`col` index into the crown grid, not the
/// screen; behavior and color derive from a per-light seed so they survive
/// the per-frame redraw unchanged.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Light {
    pub row: u16,
    pub col: u16,
}

impl Light {
    fn seed(&self) -> u32 {
        self.row as u32 * 31 + self.col as u32 * 17
    }

    /// 40% of lights stay on; the rest blink on a 2-second cycle with a
    /// per-light phase so they desynchronize.
    pub fn always_on(&self) -> bool {
        self.seed() % 10 < 4
    }

    pub fn lit(&self, frame: u32) -> bool {
        if self.always_on() {
            return true;
        }
        let phase = (frame + self.seed() % 20) % (2 * FRAMES_PER_BUCKET);
        phase < FRAMES_PER_BUCKET
    }

    /// Palette slot: the whole palette rotates once per second while each
    /// light keeps a fixed relative offset.
    pub fn color(&self, frame: u32) -> Color {
        let len = tree::LIGHT_PALETTE.len() as u32;
        let rotation = (frame / FRAMES_PER_BUCKET) % len;
        tree::LIGHT_PALETTE[((rotation + self.seed() % len) % len) as usize]
    }
}

/// Scatter lights across the crown, row-major and left to right.
///
/// The scan is an online greedy pass: a candidate cell is kept only if it
/// clears the last light accepted in its own row by more than 2 columns and
/// sits outside a 2-row/2-column Chebyshev zone around every light accepted
/// so far. Scan order is part of the contract, since it decides which of two
/// near-conflicting candidates wins. Placement depends only on the crown
/// grid, so callers may compute this once per scene.
///
/// Each accepted candidate costs a pass over the accepted set, so the whole
/// scan is O(n²) in the number of candidates; at crown sizes in the
/// hundreds of cells this is nothing.
pub fn place_lights(height: u16) -> Vec<Light> {
    let mut lights: Vec<Light> = Vec::new();

    for row in 0..height {
        // Drop a third of the rows outright for vertical sparsity.
        if (row as u32 * 73) % 3 == 0 {
            continue;
        }

        let mut last_col: i32 = -3;
        for col in 0..(2 * row + 1) {
            if (row as u32 * 97 + col as u32 * 53) % 10 >= 2 {
                continue;
            }
            if col as i32 - last_col <= 2 {
                continue;
            }
            let crowded = lights.iter().any(|prev| {
                let row_diff = row as i32 - prev.row as i32;
                let col_diff = (col as i32 - prev.col as i32).abs();
                row_diff <= 2 && col_diff <= 2
            });
            if crowded {
                continue;
            }

            last_col = col as i32;
            lights.push(Light { row, col });
        }
    }

    lights
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn geometry() -> TreeGeometry {
        TreeGeometryBuilder::default().center_x(40).start_y(4).height(14).build().unwrap()
    }

    #[test]
    fn crown_rows_widen_by_two() {
        let tree = geometry();
        for row in 0..tree.height {
            assert_eq!(tree.row_width(row), 2 * row + 1);
            // Centered: first and last cells sit symmetrically around the apex.
            assert_eq!(tree.cell_x(row, 0), 40 - row as i32);
            assert_eq!(tree.cell_x(row, tree.row_width(row) - 1), 40 + row as i32);
        }
    }

    #[test]
    fn trunk_sits_under_the_crown() {
        let tree = geometry();
        assert_eq!(tree.trunk_y(), 4 + 14);
        assert_eq!(tree.topper(), (40, 3));
    }

    #[test]
    fn placement_is_deterministic() {
        assert_eq!(place_lights(14), place_lights(14));
        assert_eq!(place_lights(20), place_lights(20));
    }

    #[test]
    fn placement_is_ordered_and_nonempty() {
        let lights = place_lights(14);
        assert!(!lights.is_empty());
        for pair in lights.windows(2) {
            let earlier = (pair[0].row, pair[0].col) < (pair[1].row, pair[1].col);
            assert!(earlier, "{:?} not in scan order", pair);
        }
    }

    #[test]
    fn no_pair_violates_the_exclusion_zone() {
        let lights = place_lights(20);
        for (i, a) in lights.iter().enumerate() {
            for b in &lights[i + 1..] {
                let row_diff = (a.row as i32 - b.row as i32).abs();
                let col_diff = (a.col as i32 - b.col as i32).abs();
                assert!(
                    !(row_diff <= 2 && col_diff <= 2),
                    "{a:?} and {b:?} are too close"
                );
                if a.row == b.row {
                    assert!(col_diff > 2, "{a:?} and {b:?} crowd the same row");
                }
            }
        }
    }

    #[test]
    fn every_third_row_is_dark() {
        for light in place_lights(20) {
            assert_ne!((light.row as u32 * 73) % 3, 0, "row {} should be skipped", light.row);
        }
    }

    #[test]
    fn lights_stay_inside_their_row() {
        for light in place_lights(20) {
            assert!(light.col < 2 * light.row + 1);
        }
    }

    #[test]
    fn always_on_lights_never_go_dark() {
        for light in place_lights(14) {
            if light.always_on() {
                for frame in 0..200 {
                    assert!(light.lit(frame));
                }
            } else {
                // Blinkers spend half of every 40-frame cycle dark.
                let on = (0..40).filter(|&f| light.lit(f)).count();
                assert_eq!(on, 20);
            }
        }
    }

    #[test]
    fn colors_rotate_once_per_second() {
        let light = Light { row: 5, col: 2 };
        assert_eq!(light.color(0), light.color(19));
        assert_ne!(light.color(0), light.color(20));
        // Full palette rotation brings the color back.
        assert_eq!(light.color(0), light.color(8 * 20));
    }
}

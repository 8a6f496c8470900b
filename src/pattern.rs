//! Deterministic decorative patterns.
//!
//! Scenes are redrawn from scratch every frame, so any detail that should
//! hold still between frames has to come from a pure function of position
//! and time, not from a random draw. Everything here hashes `(row, col)`
//! together with a coarse frame bucket; the pattern only shifts when the
//! bucket does.

use crate::constants::FRAMES_PER_BUCKET;

/// Coarse time index that advances once per second at the 50ms tick rate.
pub fn bucket(frame: u32) -> u32 {
    frame / FRAMES_PER_BUCKET
}

/// Fraction of the background that has faded in, over the first 30 frames.
pub fn fade_fraction(scene_frame: u32) -> f64 {
    (scene_frame as f64 / 30.0).min(1.0)
}

/// Whether a crown cell shows as a white sparkle instead of a green needle.
pub fn needle_sparkle(row: u16, col: u16, bucket: u32) -> bool {
    (row as u32 * 89 + col as u32 * 67 + bucket * 43) % 10 < 3
}

/// Bright phase of the drifting night-sky stars.
pub fn star_bright(frame: u32, index: i32) -> bool {
    (frame as i32 / 10 + index) % 3 == 0
}

/// Lit phase of a house window, keyed by the house position.
pub fn window_lit(frame: u32, house_x: i32) -> bool {
    (frame as i32 / 15 + house_x) % 2 == 0
}

/// Glitter on the top row of the snow ground.
pub fn ground_glitter(frame: u32, x: i32) -> bool {
    (x + frame as i32 / 5) % 7 == 0
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn fade_ramps_then_clamps() {
        assert_eq!(fade_fraction(0), 0.0);
        assert_eq!(fade_fraction(15), 0.5);
        assert_eq!(fade_fraction(30), 1.0);
        assert_eq!(fade_fraction(500), 1.0);
    }

    #[test]
    fn sparkle_stable_within_bucket() {
        // Every frame of one bucket must agree, so the crown does not
        // flicker between redraws.
        for row in 0..14u16 {
            for col in 0..(2 * row + 1) {
                let first = needle_sparkle(row, col, bucket(40));
                for frame in 40..60 {
                    assert_eq!(needle_sparkle(row, col, bucket(frame)), first);
                }
            }
        }
    }

    #[test]
    fn sparkle_density_is_roughly_thirty_percent() {
        let mut lit = 0;
        let mut total = 0;
        for row in 0..14u16 {
            for col in 0..(2 * row + 1) {
                total += 1;
                if needle_sparkle(row, col, 0) {
                    lit += 1;
                }
            }
        }
        let ratio = lit as f64 / total as f64;
        assert!(ratio > 0.15 && ratio < 0.45, "ratio {ratio}");
    }

    #[test]
    fn bucket_advances_once_per_second() {
        assert_eq!(bucket(0), 0);
        assert_eq!(bucket(19), 0);
        assert_eq!(bucket(20), 1);
        assert_eq!(bucket(199), 9);
    }
}

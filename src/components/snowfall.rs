use rand::prelude::*;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style, Stylize},
    widgets::StatefulWidget,
};

use crate::{canvas::Canvas, constants::snow};

/// One falling flake. Position is sub-cell; speed and glyph are drawn once
/// at creation and never change.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Snowflake {
    pub x: f64,
    pub y: f64,
    pub speed: f64,
    pub glyph: char,
}

/// The simulated flake field, shared by all three scenes. Advanced exactly
/// once per tick; renderers only read it.
#[derive(Debug)]
pub struct SnowfallState {
    flakes: Vec<Snowflake>,
}

impl SnowfallState {
    pub fn new(width: u16, height: u16, count: usize) -> Self {
        let mut rng = thread_rng();
        let flakes = (0..count)
            .map(|_| Snowflake {
                x: rng.gen_range(0.0..width as f64),
                y: rng.gen_range(0.0..height as f64),
                speed: rng.gen_range(snow::MIN_SPEED..snow::MAX_SPEED),
                glyph: snow::FLAKE_GLYPHS[rng.gen_range(0..snow::FLAKE_GLYPHS.len())],
            })
            .collect();
        Self { flakes }
    }

    #[cfg(test)]
    fn from_flakes(flakes: Vec<Snowflake>) -> Self {
        Self { flakes }
    }

    /// Fall plus a sway coupled to fall progress and flake identity, so no
    /// two flakes drift in step. Flakes leaving the bottom wrap back to the
    /// top at a fresh random column.
    pub fn advance(&mut self, width: u16, height: u16) {
        let mut rng = thread_rng();
        for (index, flake) in self.flakes.iter_mut().enumerate() {
            flake.y += flake.speed;
            flake.x += (flake.y * snow::DRIFT_FREQ + index as f64).sin() * snow::DRIFT_AMP;

            if flake.y > height as f64 {
                flake.y = 0.0;
                flake.x = rng.gen_range(0.0..width as f64);
            }
        }
    }

    pub fn flakes(&self) -> &[Snowflake] {
        &self.flakes
    }
}

/// Renders the flake field, with per-scene dressing: how many flakes, where
/// they stop (above a ground strip), and how their colors cycle.
#[derive(Debug)]
pub struct Snowfall<'a> {
    limit: Option<usize>,
    cutoff: Option<i32>,
    colors: &'a [Color],
    bg: Color,
    bold_step: Option<usize>,
}

impl Default for Snowfall<'_> {
    fn default() -> Self {
        Self { limit: None, cutoff: None, colors: &[Color::Gray], bg: Color::Reset, bold_step: None }
    }
}

impl<'a> Snowfall<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Only render the first `limit` flakes.
    pub fn limit(self, limit: usize) -> Self {
        Self { limit: Some(limit), ..self }
    }

    /// Hide flakes at or below this row (exclusive ground line).
    pub fn cutoff(self, cutoff: i32) -> Self {
        Self { cutoff: Some(cutoff), ..self }
    }

    /// Cycle flake foregrounds through `colors` by flake index.
    pub fn colors(self, colors: &'a [Color]) -> Self {
        Self { colors, ..self }
    }

    pub fn bg(self, bg: Color) -> Self {
        Self { bg, ..self }
    }

    /// Embolden every n-th flake.
    pub fn bold_step(self, step: usize) -> Self {
        Self { bold_step: Some(step), ..self }
    }
}

impl StatefulWidget for Snowfall<'_> {
    type State = SnowfallState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut SnowfallState) {
        let mut canvas = Canvas::new(buf, area);
        let count = self.limit.unwrap_or(state.flakes.len()).min(state.flakes.len());

        for (index, flake) in state.flakes[..count].iter().enumerate() {
            let x = flake.x as i32;
            let y = flake.y as i32;
            if let Some(cutoff) = self.cutoff {
                if y >= cutoff {
                    continue;
                }
            }

            let mut style = Style::default().fg(self.colors[index % self.colors.len()]).bg(self.bg);
            if let Some(step) = self.bold_step {
                if index % step == 0 {
                    style = style.bold();
                }
            }
            canvas.put(x, y, flake.glyph, style);
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::constants::{HEIGHT, WIDTH};

    #[test]
    fn creation_respects_the_contract() {
        let state = SnowfallState::new(WIDTH, HEIGHT, snow::FLAKE_COUNT);
        assert_eq!(state.flakes().len(), snow::FLAKE_COUNT);
        for flake in state.flakes() {
            assert!((0.0..WIDTH as f64).contains(&flake.x));
            assert!((0.0..HEIGHT as f64).contains(&flake.y));
            assert!((snow::MIN_SPEED..snow::MAX_SPEED).contains(&flake.speed));
            assert!(snow::FLAKE_GLYPHS.contains(&flake.glyph));
        }
    }

    #[test]
    fn advance_falls_by_speed_and_never_changes_it() {
        let mut state = SnowfallState::new(WIDTH, HEIGHT, snow::FLAKE_COUNT);
        let before: Vec<Snowflake> = state.flakes().to_vec();

        state.advance(WIDTH, HEIGHT);

        for (prev, next) in before.iter().zip(state.flakes()) {
            assert_eq!(next.speed, prev.speed);
            assert_eq!(next.glyph, prev.glyph);
            if next.y != 0.0 {
                assert_eq!(next.y, prev.y + prev.speed);
            }
        }
    }

    #[test]
    fn flakes_wrap_to_the_top() {
        let mut state = SnowfallState::from_flakes(vec![Snowflake {
            x: 12.0,
            y: HEIGHT as f64 + 1.0,
            speed: 0.3,
            glyph: '❄',
        }]);

        state.advance(WIDTH, HEIGHT);

        let flake = state.flakes()[0];
        assert_eq!(flake.y, 0.0);
        assert!((0.0..WIDTH as f64).contains(&flake.x));
        assert_eq!(flake.speed, 0.3);
    }
}

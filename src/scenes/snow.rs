use color_eyre::eyre::Result;
use rand::prelude::*;
use ratatui::{
    layout::Rect,
    style::{Style, Stylize},
    Frame,
};

use super::{Scene, SceneContext, SceneId};
use crate::{canvas::Canvas, components::snowfall::Snowfall, constants::snow, pattern};

/// Opening scene: the screen whites out under the falling snow, then the
/// title appears.
#[derive(Debug, Default)]
pub struct SnowScene;

impl SnowScene {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Scene for SnowScene {
    fn id(&self) -> SceneId {
        SceneId::Snow
    }

    fn draw(&mut self, f: &mut Frame<'_>, area: Rect, ctx: &mut SceneContext) -> Result<()> {
        {
            let mut canvas = Canvas::new(f.buffer_mut(), area);

            // One-shot fade-in, so a real random draw per cell is fine here;
            // once the fraction saturates every cell is painted.
            let fade = pattern::fade_fraction(ctx.clock.scene_frame);
            let mut rng = thread_rng();
            let sky = Style::default().bg(snow::SKY_COLOR);
            for y in 0..canvas.height() {
                for x in 0..canvas.width() {
                    if rng.gen::<f64>() < fade {
                        canvas.put(x, y, ' ', sky);
                    }
                }
            }
        }

        let flakes = Snowfall::new().colors(&[snow::FLAKE_COLOR]).bg(snow::SKY_COLOR);
        f.render_stateful_widget(flakes, area, ctx.snow);

        if ctx.clock.scene_frame > snow::TITLE_FRAME {
            let mut canvas = Canvas::new(f.buffer_mut(), area);
            let len = snow::TITLE_TEXT.chars().count() as i32;
            let start_x = (canvas.width() - len) / 2;
            let y = canvas.height() / 2 - 1;
            let style = Style::default().fg(snow::TITLE_COLOR).bg(snow::SKY_COLOR).bold();
            for (i, glyph) in snow::TITLE_TEXT.chars().enumerate() {
                canvas.put(start_x + i as i32, y, glyph, style);
            }
        }

        Ok(())
    }
}

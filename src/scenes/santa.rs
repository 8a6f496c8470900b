use color_eyre::eyre::Result;
use ratatui::{
    layout::Rect,
    style::{Color, Style, Stylize},
    Frame,
};

use super::{Scene, SceneContext, SceneId};
use crate::{canvas::Canvas, components::snowfall::Snowfall, constants::santa, pattern};

/// Night flyover: houses asleep under a starry sky while the convoy crosses
/// right to left.
#[derive(Debug, Default)]
pub struct SantaScene;

impl SantaScene {
    pub fn new() -> Self {
        Self::default()
    }

    fn draw_stars(&self, canvas: &mut Canvas, frame: u32) {
        let style = Style::default().fg(Color::White).bg(santa::SKY_COLOR);
        for i in 0..santa::STAR_COUNT {
            let x = (i * 7 + frame as i32 / 3) % canvas.width();
            let y = (i * 11) % (canvas.height() - 10);
            let glyph = if pattern::star_bright(frame, i) { '✦' } else { '·' };
            canvas.put(x, y, glyph, style);
        }
    }

    fn draw_ground(&self, canvas: &mut Canvas, frame: u32, ground_y: i32) {
        let style = Style::default().fg(Color::White).bg(santa::SKY_COLOR);
        for x in 0..canvas.width() {
            for dy in 0..santa::GROUND_HEIGHT {
                let glyph = if dy == 0 && pattern::ground_glitter(frame, x) { '❅' } else { '~' };
                canvas.put(x, ground_y + dy, glyph, style);
            }
        }
    }

    fn draw_houses(&self, canvas: &mut Canvas, frame: u32, ground_y: i32) {
        let roof = Style::default().fg(santa::ROOF_COLOR).bg(santa::SKY_COLOR);
        let wall = Style::default().fg(santa::WALL_COLOR).bg(santa::SKY_COLOR);
        let window = Style::default().fg(santa::WINDOW_COLOR).bg(santa::SKY_COLOR).bold();

        for &house_x in santa::HOUSE_XS.iter() {
            for (i, line) in santa::HOUSE_ROOF.iter().enumerate() {
                let y = ground_y - 6 + i as i32;
                for (j, glyph) in line.chars().enumerate() {
                    canvas.put(house_x + j as i32, y, glyph, roof);
                }
            }
            for (i, line) in santa::HOUSE_BODY.iter().enumerate() {
                let y = ground_y - 3 + i as i32;
                for (j, glyph) in line.chars().enumerate() {
                    let style = match glyph {
                        '[' | ']' if pattern::window_lit(frame, house_x) => window,
                        _ => wall,
                    };
                    canvas.put(house_x + j as i32, y, glyph, style);
                }
            }
        }
    }

    fn draw_convoy(&self, canvas: &mut Canvas, scene_frame: u32) {
        let santa_x = canvas.width() - (scene_frame as f64 * santa::CONVOY_SPEED) as i32;
        let santa_y = santa::CONVOY_Y
            + ((scene_frame as f64 * santa::BOB_FREQ).sin() * santa::BOB_AMP) as i32;

        let sky = Style::default().bg(santa::SKY_COLOR);

        // Reindeer lead on the left, then the sleigh, then Santa.
        for i in 0..santa::REINDEER_COUNT {
            canvas.put_str(santa_x - 12 + i * 3, santa_y, santa::REINDEER, sky);
        }
        canvas.put_str(santa_x + 2, santa_y, santa::SLEIGH, sky);
        canvas.put_str(santa_x + 4, santa_y, santa::SANTA, sky);

        // Sparkle trail behind the convoy, fading with distance.
        for i in 0..santa::TRAIL_LEN {
            let x = santa_x + 8 + i * 2;
            let y = santa_y + i % 2;
            let glyph = santa::TRAIL_GLYPHS[i as usize % santa::TRAIL_GLYPHS.len()];
            let brightness = santa::TRAIL_LEN - i;
            let style = if brightness > 7 {
                Style::default().fg(Color::Yellow).bg(santa::SKY_COLOR).bold()
            } else if brightness < 4 {
                Style::default().fg(santa::TRAIL_DIM_COLOR).bg(santa::SKY_COLOR)
            } else {
                Style::default().fg(Color::Yellow).bg(santa::SKY_COLOR)
            };
            canvas.put(x, y, glyph, style);
        }
    }
}

impl Scene for SantaScene {
    fn id(&self) -> SceneId {
        SceneId::Santa
    }

    fn draw(&mut self, f: &mut Frame<'_>, area: Rect, ctx: &mut SceneContext) -> Result<()> {
        let frame = ctx.clock.global_frame;
        let ground_y;
        {
            let mut canvas = Canvas::new(f.buffer_mut(), area);
            ground_y = canvas.height() - santa::GROUND_DEPTH as i32;

            canvas.fill(Style::default().bg(santa::SKY_COLOR));
            self.draw_stars(&mut canvas, frame);
            self.draw_ground(&mut canvas, frame, ground_y);
            self.draw_houses(&mut canvas, frame, ground_y);
            self.draw_convoy(&mut canvas, ctx.clock.scene_frame);
        }

        let flakes = Snowfall::new()
            .limit(santa::FLAKE_LIMIT)
            .cutoff(ground_y)
            .colors(&[Color::Gray])
            .bg(santa::SKY_COLOR);
        f.render_stateful_widget(flakes, area, ctx.snow);

        Ok(())
    }
}

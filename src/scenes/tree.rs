use color_eyre::eyre::Result;
use ratatui::{
    layout::Rect,
    style::{Color, Style, Stylize},
    Frame,
};

use super::{Scene, SceneContext, SceneId};
use crate::{
    canvas::Canvas,
    components::{caption::RainbowText, snowfall::Snowfall},
    constants::{tree, DEFAULT_NAME, HEIGHT, WIDTH},
    pattern,
    tree::{place_lights, Light, TreeGeometry, TreeGeometryBuilder},
};

/// Terminal scene: the tree itself, lit and captioned, under heavy snow.
pub struct TreeScene {
    name: String,
    geometry: TreeGeometry,
    // Placement depends only on the crown grid, which never changes within
    // the scene, so it is computed once and reused every frame.
    lights: Vec<Light>,
}

impl TreeScene {
    pub fn new(name: String) -> Self {
        let geometry = TreeGeometryBuilder::default()
            .center_x(WIDTH as i32 / 2)
            .start_y(tree::START_Y as i32)
            .height(HEIGHT - tree::GROUND_MARGIN)
            .build()
            .unwrap();
        let lights = place_lights(geometry.height);
        Self { name, geometry, lights }
    }

    /// The greeting always renders; a non-default name adds an `@name`
    /// line below it, shifted three palette slots out of phase.
    fn caption_lines(&self) -> Vec<(String, usize)> {
        if self.name == DEFAULT_NAME {
            vec![(DEFAULT_NAME.to_string(), 0)]
        } else {
            vec![(DEFAULT_NAME.to_string(), 0), (format!("@{}", self.name), 3)]
        }
    }

    fn draw_crown(&self, canvas: &mut Canvas, frame: u32) {
        let needle = Style::default().fg(tree::NEEDLE_COLOR).bg(Color::Black);
        let sparkle = Style::default().fg(tree::SPARKLE_COLOR).bg(Color::Black);
        let bucket = pattern::bucket(frame);

        for row in 0..self.geometry.height {
            for col in 0..self.geometry.row_width(row) {
                let style = if pattern::needle_sparkle(row, col, bucket) { sparkle } else { needle };
                canvas.put(
                    self.geometry.cell_x(row, col),
                    self.geometry.cell_y(row),
                    tree::NEEDLE_GLYPH,
                    style,
                );
            }
        }

        let trunk = Style::default().fg(tree::TRUNK_COLOR).bg(Color::Black);
        for dy in 0..tree::TRUNK_HEIGHT as i32 {
            let y = self.geometry.trunk_y() + dy;
            for (i, glyph) in tree::TRUNK_GLYPHS.iter().enumerate() {
                canvas.put(self.geometry.center_x - 1 + i as i32, y, *glyph, trunk);
            }
        }
    }

    fn draw_topper(&self, canvas: &mut Canvas, frame: u32) {
        let color = if (frame / 5) % 2 == 0 { tree::TOPPER_ALT_COLOR } else { tree::TOPPER_COLOR };
        let (x, y) = self.geometry.topper();
        canvas.put(x, y, tree::TOPPER_GLYPH, Style::default().fg(color).bg(Color::Black).bold());
    }

    fn draw_lights(&self, canvas: &mut Canvas, frame: u32) {
        for light in &self.lights {
            if !light.lit(frame) {
                continue;
            }
            let style = Style::default().fg(light.color(frame)).bg(Color::Black).bold();
            canvas.put(
                self.geometry.cell_x(light.row, light.col),
                self.geometry.cell_y(light.row),
                tree::LIGHT_GLYPH,
                style,
            );
        }
    }
}

impl Scene for TreeScene {
    fn id(&self) -> SceneId {
        SceneId::Tree
    }

    fn draw(&mut self, f: &mut Frame<'_>, area: Rect, ctx: &mut SceneContext) -> Result<()> {
        let frame = ctx.clock.global_frame;
        let ground_y;
        {
            let mut canvas = Canvas::new(f.buffer_mut(), area);
            ground_y = canvas.height() - 3;

            canvas.fill(Style::default().bg(Color::Black));

            let snow = Style::default().fg(Color::White).bg(Color::Black);
            for dy in 0..tree::GROUND_ROWS {
                for x in 0..canvas.width() {
                    canvas.put(x, ground_y + dy, '~', snow);
                }
            }
        }

        let flakes = Snowfall::new()
            .cutoff(ground_y)
            .colors(&tree::FLAKE_COLORS)
            .bold_step(tree::FLAKE_BOLD_STEP)
            .bg(Color::Black);
        f.render_stateful_widget(flakes, area, ctx.snow);

        {
            let mut canvas = Canvas::new(f.buffer_mut(), area);
            self.draw_crown(&mut canvas, frame);
            self.draw_topper(&mut canvas, frame);
            self.draw_lights(&mut canvas, frame);
        }

        let lines = self.caption_lines();
        let mut y = area.height.saturating_sub(lines.len() as u16);
        for (text, shift) in lines {
            let len = text.chars().count() as u16;
            let x = (area.width.saturating_sub(len)) / 2;
            let line = Rect { x: area.x + x, y: area.y + y, width: len, height: 1 };
            f.render_widget(RainbowText::new(&text, frame).shift(shift).bg(Color::Black), line);
            y += 1;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use ratatui::{backend::TestBackend, Terminal};

    use super::*;
    use crate::{components::snowfall::SnowfallState, director::SceneClock};

    fn render(name: &str) -> ratatui::buffer::Buffer {
        let mut terminal = Terminal::new(TestBackend::new(WIDTH, HEIGHT)).unwrap();
        let mut scene = TreeScene::new(name.to_string());
        // No flakes, so the frame is fully deterministic.
        let mut snow = SnowfallState::new(WIDTH, HEIGHT, 0);
        terminal
            .draw(|f| {
                let area = f.area();
                let mut ctx = SceneContext {
                    snow: &mut snow,
                    clock: SceneClock { global_frame: 242, scene_frame: 0 },
                };
                scene.draw(f, area, &mut ctx).unwrap();
            })
            .unwrap();
        terminal.backend().buffer().clone()
    }

    fn row_text(buf: &ratatui::buffer::Buffer, y: u16) -> String {
        (0..WIDTH).map(|x| buf[(x, y)].symbol().to_string()).collect()
    }

    #[test]
    fn default_name_renders_one_caption_line() {
        let buf = render(DEFAULT_NAME);
        assert!(row_text(&buf, HEIGHT - 1).contains("Merry Christmas"));
        assert!(!row_text(&buf, HEIGHT - 2).contains("Merry Christmas"));
    }

    #[test]
    fn custom_name_renders_two_caption_lines() {
        let buf = render("Rudolph");
        assert!(row_text(&buf, HEIGHT - 2).contains("Merry Christmas"));
        assert!(row_text(&buf, HEIGHT - 1).contains("@Rudolph"));
    }

    #[test]
    fn topper_and_trunk_are_in_place() {
        let buf = render(DEFAULT_NAME);
        assert_eq!(buf[(WIDTH / 2, tree::START_Y - 1)].symbol(), "★");
        // Trunk rows sit directly under the crown.
        let trunk_y = tree::START_Y + (HEIGHT - tree::GROUND_MARGIN);
        assert_eq!(row_text(&buf, trunk_y).trim(), "mWm");
    }

    #[test]
    fn crown_apex_is_a_needle() {
        let buf = render(DEFAULT_NAME);
        assert_eq!(buf[(WIDTH / 2, tree::START_Y)].symbol(), "*");
    }

    #[test]
    fn caption_lines_follow_the_sentinel_rule() {
        let scene = TreeScene::new(DEFAULT_NAME.to_string());
        assert_eq!(scene.caption_lines().len(), 1);

        let scene = TreeScene::new("Rudolph".to_string());
        let lines = scene.caption_lines();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[1].0, "@Rudolph");
    }
}

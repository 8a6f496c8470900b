use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style, Stylize},
    widgets::Widget,
};

use crate::{constants::tree, pattern};

/// One line of text whose characters cycle through the caption palette,
/// rotating once per second with a fixed per-character offset.
#[derive(Debug)]
pub struct RainbowText<'a> {
    text: &'a str,
    frame: u32,
    shift: usize,
    bg: Color,
}

impl<'a> RainbowText<'a> {
    pub fn new(text: &'a str, frame: u32) -> Self {
        Self { text, frame, shift: 0, bg: Color::Reset }
    }

    /// Extra palette offset, used to keep two stacked lines out of phase.
    pub fn shift(self, shift: usize) -> Self {
        Self { shift, ..self }
    }

    pub fn bg(self, bg: Color) -> Self {
        Self { bg, ..self }
    }
}

impl Widget for RainbowText<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let palette = &tree::CAPTION_PALETTE;
        let rotation = pattern::bucket(self.frame) as usize % palette.len();

        for (index, glyph) in self.text.chars().enumerate() {
            let x = area.x + index as u16;
            if x >= area.right() {
                break;
            }
            let color = palette[(rotation + index + self.shift) % palette.len()];
            if let Some(cell) = buf.cell_mut((x, area.y)) {
                cell.set_char(glyph).set_style(Style::default().fg(color).bg(self.bg).bold());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn render(text: &str, frame: u32) -> Buffer {
        let area = Rect::new(0, 0, 20, 1);
        let mut buf = Buffer::empty(area);
        RainbowText::new(text, frame).render(area, &mut buf);
        buf
    }

    #[test]
    fn characters_step_through_the_palette() {
        let buf = render("Merry", 0);
        assert_eq!(buf[(0, 0)].symbol(), "M");
        for i in 0..5u16 {
            assert_eq!(buf[(i, 0)].fg, tree::CAPTION_PALETTE[i as usize]);
        }
    }

    #[test]
    fn palette_rotates_once_per_second() {
        let before = render("Merry", 19);
        let after = render("Merry", 20);
        assert_eq!(before[(1, 0)].fg, tree::CAPTION_PALETTE[1]);
        assert_eq!(after[(1, 0)].fg, tree::CAPTION_PALETTE[2]);
    }
}

use ratatui::{buffer::Buffer, layout::Rect, style::Style};

/// Cell-addressed view of the logical grid.
///
/// Scenes draw in logical `(x, y)` coordinates; the canvas translates them
/// into the playfield's position inside the real terminal buffer and drops
/// anything out of bounds, so renderers never have to clip by hand.
pub struct Canvas<'a> {
    buf: &'a mut Buffer,
    area: Rect,
}

impl<'a> Canvas<'a> {
    pub fn new(buf: &'a mut Buffer, area: Rect) -> Self {
        Self { buf, area }
    }

    pub fn width(&self) -> i32 {
        self.area.width as i32
    }

    pub fn height(&self) -> i32 {
        self.area.height as i32
    }

    fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && x < self.width() && y >= 0 && y < self.height()
    }

    /// Paint every cell with a blank glyph in the given style.
    pub fn fill(&mut self, style: Style) {
        for y in 0..self.height() {
            for x in 0..self.width() {
                self.put(x, y, ' ', style);
            }
        }
    }

    /// Write one single-width glyph; silently dropped when out of bounds.
    pub fn put(&mut self, x: i32, y: i32, glyph: char, style: Style) {
        if !self.in_bounds(x, y) {
            return;
        }
        let pos = (self.area.x + x as u16, self.area.y + y as u16);
        if let Some(cell) = self.buf.cell_mut(pos) {
            cell.set_char(glyph).set_style(style);
        }
    }

    /// Write a string starting at `(x, y)`, clipped at the right edge.
    /// Wide glyphs (the emoji convoy) keep their width handling in ratatui.
    pub fn put_str(&mut self, x: i32, y: i32, text: &str, style: Style) {
        if y < 0 || y >= self.height() || x < 0 || x >= self.width() {
            return;
        }
        let max = (self.width() - x) as usize;
        let pos_x = self.area.x + x as u16;
        let pos_y = self.area.y + y as u16;
        self.buf.set_stringn(pos_x, pos_y, text, max, style);
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use ratatui::style::Color;

    use super::*;

    #[test]
    fn put_translates_and_clips() {
        let area = Rect::new(2, 1, 10, 5);
        let mut buf = Buffer::empty(Rect::new(0, 0, 20, 10));
        let mut canvas = Canvas::new(&mut buf, area);

        canvas.put(0, 0, 'A', Style::default().fg(Color::Red));
        canvas.put(-1, 0, 'B', Style::default());
        canvas.put(10, 0, 'C', Style::default());
        canvas.put(0, 5, 'D', Style::default());

        assert_eq!(buf[(2, 1)].symbol(), "A");
        for cell in buf.content().iter() {
            assert_ne!(cell.symbol(), "B");
            assert_ne!(cell.symbol(), "C");
            assert_ne!(cell.symbol(), "D");
        }
    }

    #[test]
    fn put_str_clips_at_the_right_edge() {
        let area = Rect::new(0, 0, 5, 1);
        let mut buf = Buffer::empty(area);
        let mut canvas = Canvas::new(&mut buf, area);

        canvas.put_str(3, 0, "abcdef", Style::default());
        assert_eq!(buf[(3, 0)].symbol(), "a");
        assert_eq!(buf[(4, 0)].symbol(), "b");
    }
}

use ratatui::style::Color;

/// Caption palette, rotated once per second with a per-character offset.
pub const CAPTION_PALETTE: [Color; 8] = [
    Color::Red,
    Color::Yellow,
    Color::Green,
    Color::Blue,
    Color::Rgb(128, 0, 128),
    Color::Rgb(255, 0, 255),
    Color::Rgb(255, 165, 0),
    Color::Rgb(255, 192, 203),
];

/// Tree-light palette. Each light keeps a fixed offset into this while the
/// whole palette rotates once per second.
pub const LIGHT_PALETTE: [Color; 8] = [
    Color::Red,
    Color::Blue,
    Color::Yellow,
    Color::Rgb(128, 0, 128),
    Color::Rgb(0, 128, 128),
    Color::Rgb(255, 0, 255),
    Color::Rgb(255, 165, 0),
    Color::Rgb(255, 192, 203),
];

pub const LIGHT_GLYPH: char = 'o';

pub const NEEDLE_GLYPH: char = '*';
pub const NEEDLE_COLOR: Color = Color::Green;
pub const SPARKLE_COLOR: Color = Color::White;

pub const TRUNK_GLYPHS: [char; 3] = ['m', 'W', 'm'];
pub const TRUNK_HEIGHT: u16 = 2;
pub const TRUNK_COLOR: Color = Color::Rgb(102, 56, 21);

pub const TOPPER_GLYPH: char = '★';
pub const TOPPER_COLOR: Color = Color::Yellow;
pub const TOPPER_ALT_COLOR: Color = Color::Rgb(255, 215, 0);

/// Apex row of the crown.
pub const START_Y: u16 = 4;
/// Rows reserved under the crown for the trunk and the snow ground.
pub const GROUND_MARGIN: u16 = 10;

pub const GROUND_ROWS: i32 = 2;

pub const FLAKE_COLORS: [Color; 3] = [Color::White, Color::Gray, Color::White];
pub const FLAKE_BOLD_STEP: usize = 3;

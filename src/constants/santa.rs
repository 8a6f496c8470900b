use ratatui::style::Color;

pub const SKY_COLOR: Color = Color::Rgb(0, 0, 128);

pub const STAR_COUNT: i32 = 40;

/// Rows of snow ground, measured up from the bottom of the grid.
pub const GROUND_DEPTH: u16 = 8;
pub const GROUND_HEIGHT: i32 = 3;

pub const HOUSE_XS: [i32; 4] = [10, 30, 55, 70];
pub const HOUSE_ROOF: [&str; 3] = ["  /\\  ", " /  \\ ", "/____\\"];
pub const HOUSE_BODY: [&str; 3] = ["|    |", "| [] |", "|    |"];
pub const ROOF_COLOR: Color = Color::Rgb(128, 0, 0);
pub const WALL_COLOR: Color = Color::Rgb(128, 128, 0);
pub const WINDOW_COLOR: Color = Color::Yellow;

/// The convoy crosses right to left at this many cells per frame.
pub const CONVOY_SPEED: f64 = 0.8;
pub const BOB_FREQ: f64 = 0.1;
pub const BOB_AMP: f64 = 1.5;
pub const CONVOY_Y: i32 = 5;

pub const REINDEER: &str = "🦌";
pub const REINDEER_COUNT: i32 = 4;
pub const SLEIGH: &str = "🛷";
pub const SANTA: &str = "🎅";

pub const TRAIL_GLYPHS: [char; 5] = ['✦', '✧', '⋆', '*', '·'];
pub const TRAIL_LEN: i32 = 10;
pub const TRAIL_DIM_COLOR: Color = Color::Rgb(128, 128, 0);

/// How many of the simulated flakes still fall in front of the night sky.
pub const FLAKE_LIMIT: usize = 25;

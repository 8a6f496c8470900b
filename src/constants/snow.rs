use ratatui::style::Color;

pub const FLAKE_COUNT: usize = 100;
pub const FLAKE_GLYPHS: [char; 6] = ['*', '·', '•', '❄', '❅', '❆'];

pub const MIN_SPEED: f64 = 0.2;
pub const MAX_SPEED: f64 = 0.5;

/// Horizontal drift: `x += sin(y * DRIFT_FREQ + index) * DRIFT_AMP`.
pub const DRIFT_FREQ: f64 = 0.1;
pub const DRIFT_AMP: f64 = 0.3;

/// The white background is fully faded in after this many scene frames.
pub const FADE_FRAMES: u32 = 30;

pub const TITLE_FRAME: u32 = 40;
pub const TITLE_TEXT: &str = "❄  Christmas Magic  ❄";
pub const TITLE_COLOR: Color = Color::Rgb(0, 0, 128);

pub const FLAKE_COLOR: Color = Color::Gray;
pub const SKY_COLOR: Color = Color::White;

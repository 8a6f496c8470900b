pub mod santa;
pub mod snow;
pub mod tree;

/// Logical simulation grid. The animation always runs in this space and is
/// centered inside the real terminal, whatever its size.
pub const WIDTH: u16 = 80;
pub const HEIGHT: u16 = 24;

/// Smallest terminal we are willing to start in.
pub const MIN_WIDTH: u16 = 50;
pub const MIN_HEIGHT: u16 = 25;

/// Ticks and frames both fire every 50ms.
pub const TICK_RATE: f64 = 20.0;
pub const FRAME_RATE: f64 = 20.0;

/// Scene length for the non-terminal scenes, in ticks (6 seconds).
pub const SCENE_FRAMES: u32 = 120;

/// One pattern bucket per second at the 50ms tick period.
pub const FRAMES_PER_BUCKET: u32 = 20;

/// Sentinel meaning "no personalized caption line".
pub const DEFAULT_NAME: &str = "Merry Christmas";

use color_eyre::eyre::Result;
use ratatui::{layout::Rect, Frame};

use crate::{components::snowfall::SnowfallState, director::SceneClock};

pub mod santa;
pub mod snow;
pub mod tree;

pub use crate::director::SceneId;

/// Everything a renderer reads: the flake field and the frame counters.
/// Scenes never mutate shared state beyond writing cells into the frame.
pub struct SceneContext<'a> {
    pub snow: &'a mut SnowfallState,
    pub clock: SceneClock,
}

pub trait Scene {
    fn id(&self) -> SceneId;

    fn draw(&mut self, f: &mut Frame<'_>, area: Rect, ctx: &mut SceneContext) -> Result<()>;
}

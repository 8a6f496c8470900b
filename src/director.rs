use serde::{Deserialize, Serialize};
use strum::Display;

use crate::constants::SCENE_FRAMES;

#[derive(Default, Debug, Copy, Clone, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
pub enum SceneId {
    #[default]
    Snow,
    Santa,
    Tree,
}

/// Frame counters threaded through every renderer. `global_frame` runs for
/// the process lifetime; `scene_frame` restarts on every transition.
#[derive(Default, Debug, Copy, Clone, PartialEq, Eq)]
pub struct SceneClock {
    pub global_frame: u32,
    pub scene_frame: u32,
}

/// Three-state scene machine: Snow → Santa → Tree, one-directional, with
/// Tree terminal. Exit is driven by the user, never by the director.
#[derive(Default, Debug, Clone)]
pub struct Director {
    scene: SceneId,
    clock: SceneClock,
}

impl Director {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn scene(&self) -> SceneId {
        self.scene
    }

    pub fn clock(&self) -> SceneClock {
        self.clock
    }

    /// Advance one tick: bump both counters, then check for a transition.
    pub fn advance(&mut self) {
        self.clock.global_frame += 1;
        self.clock.scene_frame += 1;

        match self.scene {
            SceneId::Snow if self.clock.scene_frame > SCENE_FRAMES => {
                self.transition(SceneId::Santa);
            },
            SceneId::Santa if self.clock.scene_frame > SCENE_FRAMES => {
                self.transition(SceneId::Tree);
            },
            _ => {},
        }
    }

    fn transition(&mut self, next: SceneId) {
        log::info!("scene {} -> {} at frame {}", self.scene, next, self.clock.global_frame);
        self.scene = next;
        self.clock.scene_frame = 0;
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn starts_on_snow() {
        let director = Director::new();
        assert_eq!(director.scene(), SceneId::Snow);
        assert_eq!(director.clock(), SceneClock { global_frame: 0, scene_frame: 0 });
    }

    #[test]
    fn follows_the_timetable() {
        let mut director = Director::new();

        for _ in 0..120 {
            director.advance();
        }
        assert_eq!(director.scene(), SceneId::Snow);

        director.advance();
        assert_eq!(director.scene(), SceneId::Santa);
        assert_eq!(director.clock().scene_frame, 0);
        assert_eq!(director.clock().global_frame, 121);

        for _ in 0..121 {
            director.advance();
        }
        assert_eq!(director.scene(), SceneId::Tree);
        assert_eq!(director.clock().scene_frame, 0);
        assert_eq!(director.clock().global_frame, 242);
    }

    #[test]
    fn tree_is_terminal() {
        let mut director = Director::new();
        for _ in 0..2000 {
            director.advance();
        }
        assert_eq!(director.scene(), SceneId::Tree);
        assert_eq!(director.clock().global_frame, 2000);
    }
}

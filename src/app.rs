use color_eyre::eyre::{bail, Result};
use ratatui::{
    layout::{Constraint, Layout},
    prelude::Rect,
};
use tokio::sync::mpsc::{self, UnboundedSender};

use crate::{
    action::Action,
    components::snowfall::SnowfallState,
    config::{key_event_to_string, Config},
    constants::{snow, HEIGHT, MIN_HEIGHT, MIN_WIDTH, WIDTH},
    director::Director,
    scenes::{santa::SantaScene, snow::SnowScene, tree::TreeScene, Scene, SceneContext},
    tui,
};

pub struct App {
    config: Config,
    tick_rate: f64,
    frame_rate: f64,
    should_quit: bool,
    director: Director,
    snowfall: SnowfallState,
    scenes: Vec<Box<dyn Scene>>,
}

impl App {
    pub fn new(name: String, tick_rate: f64, frame_rate: f64) -> Result<Self> {
        let config = Config::new()?;

        let scenes: Vec<Box<dyn Scene>> = vec![
            Box::new(SnowScene::new()),
            Box::new(SantaScene::new()),
            Box::new(TreeScene::new(name)),
        ];

        Ok(Self {
            config,
            tick_rate,
            frame_rate,
            should_quit: false,
            director: Director::new(),
            snowfall: SnowfallState::new(WIDTH, HEIGHT, snow::FLAKE_COUNT),
            scenes,
        })
    }

    pub async fn run(&mut self) -> Result<()> {
        let (action_tx, mut action_rx) = mpsc::unbounded_channel();

        let mut tui = tui::Tui::new()?;
        tui.tick_rate(self.tick_rate);
        tui.frame_rate(self.frame_rate);
        tui.enter()?;

        let size = tui.size()?;
        if size.width < MIN_WIDTH || size.height < MIN_HEIGHT {
            tui.exit()?;
            bail!(
                "Terminal too small! Need {}x{}, got {}x{}",
                MIN_WIDTH,
                MIN_HEIGHT,
                size.width,
                size.height
            );
        }

        loop {
            if let Some(e) = tui.next().await {
                match e {
                    tui::Event::Tick => action_tx.send(Action::Tick)?,
                    tui::Event::Render => action_tx.send(Action::Render)?,
                    tui::Event::Resize(x, y) => action_tx.send(Action::Resize(x, y))?,
                    tui::Event::Key(key) => {
                        if let Some(action) = self.config.keybindings.global.get(&key) {
                            log::info!("Got action: {action:?}");
                            action_tx.send(action.clone())?;
                        } else {
                            log::debug!("Unbound key: {}", key_event_to_string(&key));
                        }
                    },
                    _ => {},
                }
            }

            while let Ok(action) = action_rx.try_recv() {
                if action != Action::Tick && action != Action::Render {
                    log::debug!("{action:?}");
                }
                match action {
                    Action::Tick => {
                        // Simulation advances exactly once per tick, before
                        // the next render reads it.
                        self.snowfall.advance(WIDTH, HEIGHT);
                        self.director.advance();
                    },
                    Action::Quit => self.should_quit = true,
                    Action::Resize(w, h) => {
                        // The logical grid stays 80x24; only the backend
                        // buffer re-syncs to the new terminal.
                        tui.resize(Rect::new(0, 0, w, h))?;
                        self.render(&mut tui, &action_tx)?;
                    },
                    Action::Render => {
                        self.render(&mut tui, &action_tx)?;
                    },
                    _ => {},
                }
            }

            if self.should_quit {
                tui.stop()?;
                break;
            }
        }
        tui.exit()?;
        Ok(())
    }

    fn render(&mut self, tui: &mut tui::Tui, action_tx: &UnboundedSender<Action>) -> Result<()> {
        let id = self.director.scene();
        let clock = self.director.clock();
        let Self { scenes, snowfall, .. } = self;
        let scene = scenes.iter_mut().find(|s| s.id() == id).unwrap();

        tui.draw(|f| {
            let area = f.area();

            let [_, area, _] =
                Layout::vertical([Constraint::Fill(1), Constraint::Length(HEIGHT), Constraint::Fill(1)]).areas(area);
            let [_, area, _] =
                Layout::horizontal([Constraint::Fill(1), Constraint::Length(WIDTH), Constraint::Fill(1)]).areas(area);

            let mut ctx = SceneContext { snow: snowfall, clock };
            if let Err(e) = scene.draw(f, area, &mut ctx) {
                action_tx.send(Action::Error(format!("Failed to draw: {:?}", e))).unwrap();
            }
        })?;

        Ok(())
    }
}

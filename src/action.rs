use serde::Deserialize;
use strum::Display;

#[derive(Debug, Clone, PartialEq, Eq, Display, Deserialize)]
pub enum Action {
    Tick,
    Render,
    Resize(u16, u16),
    Quit,
    Error(String),
}

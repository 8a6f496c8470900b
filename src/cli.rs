use clap::Parser;

use crate::{constants::DEFAULT_NAME, utils::version};

#[derive(Parser, Debug)]
#[command(author, version = version(), about)]
pub struct Cli {
    /// Your name, shown under the greeting on the tree scene
    #[arg(short, long, default_value = DEFAULT_NAME)]
    pub name: String,
}

use crate::cli::run;

pub mod bridge;
pub mod cli;
pub mod clock;
mod config;
pub mod domain;
pub mod lastfm;
pub mod osc;
pub mod player;

fn main() -> anyhow::Result<()> {
    run()
}

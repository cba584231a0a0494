mod app;
mod banner;
mod cli;
mod commands;
mod config;
mod cv;
mod deck;
mod portfolio;
mod render;
mod theme;

use clap::Parser;

use cli::Cli;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    if cli.no_color {
        colored::control::set_override(false);
    }
    cli.run()
}

use colored::Colorize;

use crate::cli::ConfigCommands;
use crate::config::Config;

pub fn run(command: ConfigCommands, quiet: bool) -> anyhow::Result<()> {
    match command {
        ConfigCommands::Show => show(quiet),
        ConfigCommands::Set { key, value } => set(&key, &value, quiet),
    }
}

fn show(quiet: bool) -> anyhow::Result<()> {
    let config = Config::load_or_default();
    let defaults = config.defaults.clone().unwrap_or_default();

    let entry = |key: &str, value: Option<String>| {
        let rendered = match value {
            Some(v) => v.normal(),
            None => "(default)".dimmed(),
        };
        println!("  {} {rendered}", format!("{key}:").cyan());
    };

    println!("{}", "cvdeck configuration".bold());
    entry("defaults.theme", defaults.theme);
    entry("defaults.transition", defaults.transition);
    entry("defaults.start_mode", defaults.start_mode);
    entry(
        "defaults.auto_play",
        defaults.auto_play.map(|v| v.to_string()),
    );

    if !quiet {
        println!();
        println!("{} {}", "file:".dimmed(), Config::path()?.display());
    }
    Ok(())
}

fn set(key: &str, value: &str, quiet: bool) -> anyhow::Result<()> {
    let mut config = Config::load_or_default();
    config.set(key, value)?;
    let path = config.save()?;
    println!("{} {key} = {value}", "Set".green().bold());
    if !quiet {
        println!("{} {}", "Saved to".dimmed(), path.display());
    }
    Ok(())
}

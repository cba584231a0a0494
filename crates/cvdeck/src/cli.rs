use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::config::Config;
use crate::cv::Cv;
use crate::render::transition::TransitionKind;
use crate::theme::Theme;

#[derive(Parser)]
#[command(name = "cvdeck")]
#[command(author, version, about)]
#[command(long_about = "A CV and portfolio presentation tool.\n\n\
    Describe your CV in a YAML file and present it as a slide deck or a\n\
    scrolling portfolio page.\n\n\
    Examples:\n  \
    cvdeck                       Present the built-in sample CV (fullscreen)\n  \
    cvdeck my-cv.yaml            Present your own CV\n  \
    cvdeck --portfolio           Open the portfolio page instead\n  \
    cvdeck sample > my-cv.yaml   Write a starting template")]
#[command(propagate_version = true)]
#[command(args_conflicts_with_subcommands = true)]
pub struct Cli {
    /// CV file to present (YAML). Uses the built-in sample when omitted
    pub file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Open the scrolling portfolio page instead of the slide deck
    #[arg(long, global = false)]
    pub portfolio: bool,

    /// Launch in a window instead of fullscreen
    #[arg(long, global = false)]
    pub windowed: bool,

    /// Start on a specific slide (1-indexed)
    #[arg(long, global = false)]
    pub slide: Option<usize>,

    /// Start with auto-play enabled
    #[arg(long, global = false)]
    pub auto_play: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// View and modify configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Generate shell completions
    Completion {
        /// Target shell
        #[arg(value_enum)]
        shell: Shell,
    },

    /// Print the sample CV as YAML, as a template to edit
    Sample,

    /// Show version information
    Version,
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Display current configuration
    Show,

    /// Set a configuration value
    Set {
        /// Configuration key (e.g. defaults.theme, defaults.start_mode)
        key: String,

        /// Value to set
        value: String,
    },
}

#[derive(Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    Powershell,
}

impl Cli {
    pub fn run(mut self) -> anyhow::Result<()> {
        match self.command.take() {
            Some(Commands::Config { command }) => crate::commands::config::run(command, self.quiet),
            Some(Commands::Completion { shell }) => {
                crate::commands::completion::run(shell);
                Ok(())
            }
            Some(Commands::Sample) => crate::commands::sample::run(self.quiet),
            Some(Commands::Version) => {
                crate::banner::print_banner_with_version();
                Ok(())
            }
            None => self.launch(),
        }
    }

    fn launch(self) -> anyhow::Result<()> {
        let cv = match &self.file {
            Some(file) => {
                if !file.exists() {
                    anyhow::bail!("File not found: {}", file.display());
                }
                Cv::from_path(file)?
            }
            None => Cv::sample(),
        };

        let config = Config::load_or_default();
        let defaults = config.defaults.unwrap_or_default();

        let theme = Theme::from_name(defaults.theme.as_deref().unwrap_or("dark"));
        let transition =
            TransitionKind::from_name(defaults.transition.as_deref().unwrap_or("slide"));
        let auto_play = self.auto_play || defaults.auto_play.unwrap_or(false);

        // CLI flags beat config; config start_mode only applies when neither
        // --portfolio nor --slide was given.
        let start_mode = defaults.start_mode.as_deref();
        let portfolio =
            self.portfolio || (self.slide.is_none() && start_mode == Some("portfolio"));
        if portfolio {
            return crate::portfolio::run(cv, theme, self.windowed);
        }

        let start_slide = self
            .slide
            .or_else(|| start_mode.and_then(|m| m.parse::<usize>().ok()));
        crate::app::run(cv, theme, transition, self.windowed, start_slide, auto_play)
    }
}

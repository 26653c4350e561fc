mod app;
mod commands;
mod render;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use wordwizards_lib::vocabulary::YearGroup;

#[derive(Parser)]
#[command(name = "wordwizards-cli", about = "WordWizards vocabulary practice in the terminal", version)]
struct Cli {
    /// Config file (default: <config dir>/wordwizards/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Directory holding Year3.json ... Year6.json
    #[arg(long, global = true)]
    content_dir: Option<PathBuf>,

    /// Directory for progress data
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Seed for reproducible question order
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Output format
    #[arg(long, global = true, default_value = "plain")]
    format: OutputFormat,

    /// Disable ANSI colors
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Clone, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Plain,
    Json,
}

#[derive(Subcommand)]
enum Command {
    /// List the year groups with content
    Years,

    /// Learn words with flashcards, five at a time
    Flashcards {
        /// Year group (e.g. Y3, "Year 3")
        year: YearGroup,
    },

    /// Multiple-choice quiz on the words you have memorized
    Quiz {
        /// Year group (e.g. Y3, "Year 3")
        year: YearGroup,
    },

    /// Choose the word that fills the sentence
    Sentences {
        /// Year group (e.g. Y3, "Year 3")
        year: YearGroup,
    },

    /// Show how many words are memorized
    Progress {
        /// Only this year group
        year: Option<YearGroup>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let use_color = !cli.no_color && atty_check();

    let app = app::App::new(
        cli.config.as_deref(),
        cli.content_dir,
        cli.data_dir,
        cli.seed,
    )?;

    match cli.command {
        Command::Years => {
            commands::years::run(&app, &cli.format, use_color)?;
        }
        Command::Flashcards { year } => {
            commands::flashcards::run(&app, year, use_color).await?;
        }
        Command::Quiz { year } => {
            commands::quiz::run(&app, year, use_color).await?;
        }
        Command::Sentences { year } => {
            commands::sentences::run(&app, year, use_color).await?;
        }
        Command::Progress { year } => {
            commands::progress::run(&app, year, &cli.format, use_color).await?;
        }
    }

    Ok(())
}

/// Check if stdout is a terminal (for color support)
fn atty_check() -> bool {
    unsafe { libc_isatty(1) != 0 }
}

extern "C" {
    #[link_name = "isatty"]
    fn libc_isatty(fd: i32) -> i32;
}

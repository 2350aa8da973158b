use clap::Subcommand;
use std::path::PathBuf;

use hoiforge::mods::{GraphicalCulture, Rgb};
use hoiforge::settings::SettingsStore;

pub mod config;
pub mod country;
pub mod descriptor;
pub mod search;

#[derive(Subcommand)]
pub enum Commands {
    /// Show or change the stored game path
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Print the mod directory named by a .mod descriptor
    ModPath {
        /// The .mod descriptor file
        descriptor: PathBuf,
    },

    /// List the graphical cultures a country can use
    Cultures,

    /// Create a new country in a mod
    Country {
        /// Country tag, three letters (upper-cased automatically)
        #[arg(short, long)]
        tag: String,

        /// Country name, also used as the file name
        #[arg(short, long)]
        name: String,

        /// Map color as "R G B" or #rrggbb
        #[arg(short, long, default_value = "255 0 0")]
        color: Rgb,

        /// Graphical culture (see `hoiforge cultures`)
        #[arg(short = 'g', long, default_value = "western_european")]
        culture: GraphicalCulture,

        /// .mod descriptor of the target mod
        #[arg(short, long, conflicts_with = "mod_path", required_unless_present = "mod_path")]
        descriptor: Option<PathBuf>,

        /// Mod directory, when there is no descriptor at hand
        #[arg(short, long)]
        mod_path: Option<PathBuf>,
    },

    /// Find localisation lines containing some text
    Search {
        /// Text to look for (case-insensitive)
        query: String,

        /// Directory to search (default: <game path>/localisation)
        #[arg(short, long)]
        root: Option<PathBuf>,

        /// Print the results as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Print the settings file location and stored game path
    Show,

    /// Store the game installation directory
    SetGamePath {
        /// Hearts of Iron IV installation directory
        path: PathBuf,
    },
}

impl Commands {
    pub fn execute(&self, store: &SettingsStore) -> anyhow::Result<()> {
        match self {
            Commands::Config { command } => match command {
                ConfigCommands::Show => config::show(store),
                ConfigCommands::SetGamePath { path } => config::set_game_path(store, path),
            },
            Commands::ModPath { descriptor } => descriptor::execute(descriptor),
            Commands::Cultures => {
                country::list_cultures();
                Ok(())
            }
            Commands::Country {
                tag,
                name,
                color,
                culture,
                descriptor,
                mod_path,
            } => country::execute(
                tag,
                name,
                *color,
                *culture,
                descriptor.as_deref(),
                mod_path.as_deref(),
            ),
            Commands::Search { query, root, json } => {
                search::execute(store, query, root.as_deref(), *json)
            }
        }
    }
}

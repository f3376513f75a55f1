use std::path::PathBuf;

use clap::{Parser, Subcommand};

use lost_and_found::{Config, DEFAULT_ITEMS_FILE, DEFAULT_SCORES_FILE};

#[derive(Parser, Debug)]
#[command(name = "lost-and-found")]
#[command(author, version, about = "Campus lost and found tracker", long_about = None)]
pub struct Args {
    /// Items table (CSV)
    #[arg(long = "items-file", env = "LOST_FOUND_ITEMS_FILE", default_value = DEFAULT_ITEMS_FILE)]
    pub items_file: PathBuf,

    /// User scores table (CSV)
    #[arg(long = "scores-file", env = "LOST_FOUND_SCORES_FILE", default_value = DEFAULT_SCORES_FILE)]
    pub scores_file: PathBuf,

    /// Log filter (e.g. warn, debug, lost_and_found=debug)
    #[arg(long = "log-level", env = "LOST_FOUND_LOG", default_value = "warn")]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Report a lost item and print its id
    Report {
        #[arg(long)]
        name: String,
        #[arg(long, default_value = "")]
        location: String,
        #[arg(long, default_value = "")]
        description: String,
        #[arg(long, default_value = "")]
        reporter: String,
        /// Estimated value, free text
        #[arg(long, default_value = "")]
        value: String,
    },
    /// Mark a lost item as found
    Found {
        unique_id: String,
        #[arg(long)]
        finder: String,
    },
    /// Delete an item record
    Remove { unique_id: String },
    /// List items that have not been returned
    List,
    /// Credit points to a user
    Award {
        username: String,
        #[arg(allow_negative_numbers = true)]
        points: i128,
    },
    /// Show users ranked by score
    Scoreboard,
}

impl Args {
    pub fn config(&self) -> Config {
        Config {
            items_path: self.items_file.clone(),
            scores_path: self.scores_file.clone(),
        }
    }
}

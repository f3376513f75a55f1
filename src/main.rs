use std::error::Error;
use std::process;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use lost_and_found::{Error as TrackerError, ItemReport, Tracker};

mod cli;

use cli::{Args, Command};

fn main() {
    let args = Args::parse();
    setup_logging(&args.log_level);

    if let Err(err) = run(args) {
        eprintln!("Error: {}", err);
        process::exit(1);
    }
}

fn setup_logging(level: &str) {
    let filter = EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(args: Args) -> Result<(), Box<dyn Error>> {
    let tracker = Tracker::open(&args.config())?;

    match args.command {
        Command::Report {
            name,
            location,
            description,
            reporter,
            value,
        } => {
            let unique_id = tracker.report(ItemReport {
                name,
                location,
                description,
                reporter,
                value,
            })?;
            println!("{}", unique_id);
        }
        Command::Found { unique_id, finder } => {
            match tracker.mark_found(&unique_id, &finder) {
                Ok(()) => println!("Item marked as found."),
                Err(TrackerError::RecordNotFound { .. }) => println!("Item not found."),
                Err(err) => return Err(err.into()),
            }
        }
        Command::Remove { unique_id } => match tracker.remove(&unique_id) {
            Ok(()) => println!("Item successfully removed."),
            Err(TrackerError::RecordNotFound { .. }) => println!("Item not found."),
            Err(err) => return Err(err.into()),
        },
        Command::List => {
            println!("Unreturned Items:");
            for item in tracker.list_unreturned() {
                println!("{}", item);
            }
        }
        Command::Award { username, points } => {
            let award = tracker.award(&username, points)?;
            println!(
                "User '{}' score updated by {} points.",
                award.username, award.points
            );
        }
        Command::Scoreboard => {
            let ranked = tracker.ranked()?;
            println!("User Scoreboard:");
            for entry in ranked {
                println!("{}", entry);
            }
        }
    }
    Ok(())
}

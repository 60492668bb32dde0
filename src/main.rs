use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use thiserror::Error;

use mini_ini::{IniError, IniStore};

#[derive(Error, Debug)]
pub enum AppError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("INI store error: {0}")]
    Ini(#[from] IniError),
}

#[derive(Parser)]
#[command(name = "mini-ini")]
#[command(about = "Inspect and edit INI-style configuration files")]
struct Cli {
    /// Path to the INI file
    #[arg(short, long, default_value = "config.ini", env = "MINI_INI_FILE")]
    file: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the value for a key
    Get {
        /// Key to look up
        key: String,

        /// Group to look in (top-level values if not specified)
        #[arg(short, long)]
        group: Option<String>,

        /// Fallback printed when the group or key is missing
        #[arg(short, long)]
        default: Option<String>,
    },

    /// Set a value, creating the file and group as needed
    Set {
        /// Key to set
        key: String,

        /// Value text to store
        value: String,

        /// Group to write to (top-level if not specified)
        #[arg(short, long)]
        group: Option<String>,
    },

    /// Delete a value
    Del {
        /// Key to delete
        key: String,

        /// Group to delete from (top-level if not specified)
        #[arg(short, long)]
        group: Option<String>,
    },

    /// Delete a group and all its values
    DelGroup {
        /// Name of the group
        group: String,
    },

    /// List the keys of a group
    Keys {
        /// Group to list (top-level keys if not specified)
        #[arg(short, long)]
        group: Option<String>,
    },

    /// List all group names
    Groups,

    /// Print the whole file in serialized form
    Dump,
}

fn main() -> Result<ExitCode, AppError> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Get {
            key,
            group,
            default,
        } => {
            let store = IniStore::load(&cli.file)?;
            match store.try_get(group.as_deref(), &key) {
                Ok(text) => println!("{}", text),
                Err(miss) => match default {
                    Some(fallback) => println!("{}", fallback),
                    None => {
                        eprintln!("{}", miss);
                        return Ok(ExitCode::FAILURE);
                    }
                },
            }
            Ok(ExitCode::SUCCESS)
        }
        Commands::Set { key, value, group } => {
            let mut store = IniStore::load_or_new(&cli.file);
            store.set(group.as_deref(), &key, &value)?;
            store.save()?;
            match group {
                Some(name) => println!("Set '{}' in group '{}'", key, name),
                None => println!("Set '{}'", key),
            }
            Ok(ExitCode::SUCCESS)
        }
        Commands::Del { key, group } => {
            let mut store = IniStore::load(&cli.file)?;
            match store.delete_value(group.as_deref(), &key) {
                Ok(()) => {
                    store.save()?;
                    println!("Deleted '{}'", key);
                    Ok(ExitCode::SUCCESS)
                }
                Err(miss) => {
                    eprintln!("{}", miss);
                    Ok(ExitCode::FAILURE)
                }
            }
        }
        Commands::DelGroup { group } => {
            let mut store = IniStore::load(&cli.file)?;
            match store.delete_group(&group) {
                Ok(()) => {
                    store.save()?;
                    println!("Deleted group '{}'", group);
                    Ok(ExitCode::SUCCESS)
                }
                Err(miss) => {
                    eprintln!("{}", miss);
                    Ok(ExitCode::FAILURE)
                }
            }
        }
        Commands::Keys { group } => {
            let store = IniStore::load(&cli.file)?;
            match store.group(group.as_deref()) {
                Some(found) => {
                    for key in found.keys() {
                        println!("{}", key);
                    }
                    Ok(ExitCode::SUCCESS)
                }
                None => {
                    eprintln!("Group not found: {}", group.unwrap_or_default());
                    Ok(ExitCode::FAILURE)
                }
            }
        }
        Commands::Groups => {
            let store = IniStore::load(&cli.file)?;
            for group in store.groups() {
                if let Some(name) = group.name() {
                    println!("{}", name);
                }
            }
            Ok(ExitCode::SUCCESS)
        }
        Commands::Dump => {
            let store = IniStore::load(&cli.file)?;
            print!("{}", store.render());
            Ok(ExitCode::SUCCESS)
        }
    }
}

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(version, about = "Fetch and decode Clash of Clans API models")]
pub struct Cli {
    /// Log requests and other details
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Fetch one or more player profiles
    Player {
        /// Player tags, e.g. '#2PP'
        #[arg(required = true)]
        tags: Vec<String>,
    },
    /// Fetch a clan profile and its member list
    Clan {
        /// Clan tag, e.g. '#2PP'
        tag: String,
    },
    /// Decode a saved JSON response and print it back
    Decode {
        #[arg(short, long, value_enum, default_value_t = Kind::Player)]
        kind: Kind,
        file: PathBuf,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum Kind {
    Player,
    Clan,
}

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use evaluation::DEFAULT_WEIGHTS_FILE;
use search::DEFAULT_DEPTH;

pub const SELF_PLAY_GAMES: usize = 10;
pub const SELF_PLAY_DEPTH: u8 = 1;
pub const PLAY_GAMES: usize = 4;

#[derive(Parser, Debug)]
#[command(name = "Adept")]
#[command(author = "Jørgen Hanssen <jorgen@hanssen.io>")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Args {
    /// Learned piece weights, created on the first save.
    #[arg(short, long, default_value = DEFAULT_WEIGHTS_FILE)]
    pub weights: PathBuf,

    /// Log to a file at debug level instead of the terminal.
    #[arg(short, long)]
    pub log_file: Option<PathBuf>,

    /// Hide the self-play progress bar.
    #[arg(long)]
    pub no_progress: bool,

    /// Without a command, self-play runs first and then interactive play.
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Let the engine play itself and learn from every result.
    SelfPlay {
        #[arg(long, default_value_t = SELF_PLAY_GAMES)]
        games: usize,

        #[arg(long, default_value_t = SELF_PLAY_DEPTH)]
        depth: u8,

        /// Stop increasing a weight once it reaches this value.
        #[arg(long)]
        weight_cap: Option<i32>,
    },
    /// Play White against the engine from the terminal. Enter `quit` to
    /// leave; Ctrl-C ends the session after the next line you enter.
    Play {
        #[arg(long, default_value_t = PLAY_GAMES)]
        games: usize,

        #[arg(long, default_value_t = DEFAULT_DEPTH)]
        depth: u8,

        #[arg(long)]
        weight_cap: Option<i32>,
    },
}

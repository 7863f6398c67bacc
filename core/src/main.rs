mod args;
mod learning;

use args::{Args, Command, PLAY_GAMES, SELF_PLAY_DEPTH, SELF_PLAY_GAMES};
use clap::Parser;
use console::Console;
use evaluation::WeightStore;
use learning::{IncrementPolicy, Learner, UpdatePolicy, DEFAULT_STEP};
use log::{info, LevelFilter};
use search::DEFAULT_DEPTH;
use simplelog::{Config, SimpleLogger, WriteLogger};
use std::error::Error;
use std::fs::File;
use std::sync::atomic::Ordering;
use utils::ChessPosition;

fn main() -> Result<(), Box<dyn Error>> {
    let args = init()?;

    let store = WeightStore::new(&args.weights);
    let mut position = ChessPosition::new();

    match args.command {
        Some(Command::SelfPlay {
            games,
            depth,
            weight_cap,
        }) => {
            let mut learner = create_learner(store, weight_cap, !args.no_progress)?;
            learner.run_self_play(&mut position, games, depth)?;
            log_final_weights(&learner);
        }
        Some(Command::Play {
            games,
            depth,
            weight_cap,
        }) => {
            let mut learner = create_learner(store, weight_cap, !args.no_progress)?;
            learner.run_interactive(&mut position, &mut Console::stdio(), games, depth)?;
            log_final_weights(&learner);
        }
        None => {
            let mut learner = create_learner(store, None, !args.no_progress)?;
            learner.run_self_play(&mut position, SELF_PLAY_GAMES, SELF_PLAY_DEPTH)?;

            if !learner.stop_requested() {
                learner.run_interactive(
                    &mut position,
                    &mut Console::stdio(),
                    PLAY_GAMES,
                    DEFAULT_DEPTH,
                )?;
            }
            log_final_weights(&learner);
        }
    }

    Ok(())
}

fn create_learner(
    store: WeightStore,
    weight_cap: Option<i32>,
    show_progress: bool,
) -> Result<Learner<IncrementPolicy>, Box<dyn Error>> {
    let policy = IncrementPolicy::new(DEFAULT_STEP, weight_cap);
    let learner = Learner::new(store, policy)?.with_progress(show_progress);

    // First SIGINT stops between games, a second one exits right away
    let stop_flag = learner.stop_flag();
    ctrlc::set_handler(move || {
        if stop_flag.swap(true, Ordering::Relaxed) {
            std::process::exit(130);
        }
        info!("Received SIGINT, stopping... (press Ctrl-C again to exit now)");
    })?;

    Ok(learner)
}

fn log_final_weights<P: UpdatePolicy>(learner: &Learner<P>) {
    info!("Final weights: {:?}", learner.weights());
}

fn init() -> Result<Args, Box<dyn Error>> {
    let args = Args::parse();

    match &args.log_file {
        Some(log_file) => WriteLogger::init(
            LevelFilter::Debug,
            Config::default(),
            File::create(log_file)?,
        )?,
        None => SimpleLogger::init(LevelFilter::Info, Config::default())?,
    }

    Ok(args)
}

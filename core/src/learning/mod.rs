mod interactive;
mod policy;
mod progress;
mod self_play;

#[cfg(test)]
mod scripted;

pub use policy::{IncrementPolicy, UpdatePolicy, DEFAULT_STEP};

use std::io;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use evaluation::{Evaluator, HeuristicEvaluator, PieceWeights, WeightStore, WeightStoreError};
use log::info;
use search::{Engine, EngineConfig};
use utils::{GameResult, Rules};

#[derive(Debug, thiserror::Error)]
pub enum LearnError {
    #[error(transparent)]
    Store(#[from] WeightStoreError),
    #[error("console I/O failed: {0}")]
    Io(#[from] io::Error),
}

/// Plays games with the search engine and adapts the piece weights after
/// every finished one. Weights are written to the store as soon as they
/// change, so an interrupted session loses at most the game in progress.
pub struct Learner<P> {
    weights: PieceWeights,
    store: WeightStore,
    engine: Engine,
    policy: P,
    stop: Arc<AtomicBool>,
    show_progress: bool,
}

impl<P: UpdatePolicy> Learner<P> {
    /// Loads the weights from `store`; a missing file starts from defaults.
    pub fn new(store: WeightStore, policy: P) -> Result<Self, LearnError> {
        let weights = store.load()?;
        info!("Loaded weights from {}: {:?}", store.path().display(), weights);

        Ok(Self {
            weights,
            store,
            engine: Engine::default(),
            policy,
            stop: Arc::new(AtomicBool::new(false)),
            show_progress: true,
        })
    }

    pub fn with_progress(mut self, show_progress: bool) -> Self {
        self.show_progress = show_progress;
        self
    }

    pub fn weights(&self) -> &PieceWeights {
        &self.weights
    }

    #[cfg(test)]
    pub fn policy(&self) -> &P {
        &self.policy
    }

    /// Setting the flag stops the learner before its next game.
    pub fn stop_flag(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.stop)
    }

    pub fn stop_requested(&self) -> bool {
        self.stop.load(Ordering::Relaxed)
    }

    fn prepare_engine(&mut self, depth: u8, session: &str) {
        self.engine.configure(&EngineConfig::with_depth(depth));
        info!(
            "Starting {}: {} with {} evaluation",
            session,
            self.engine.name(),
            HeuristicEvaluator::new(&self.weights).name()
        );
    }

    fn engine_move<R: Rules>(&mut self, position: &mut R) -> Option<R::Move> {
        let evaluator = HeuristicEvaluator::new(&self.weights);
        self.engine.best_move(position, &evaluator)
    }

    fn finish_game(&mut self, result: GameResult) -> Result<(), LearnError> {
        self.policy.update(&mut self.weights, result);
        self.store.save(&self.weights)?;
        info!("Saved weights: {:?}", self.weights);
        Ok(())
    }
}

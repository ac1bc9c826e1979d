use std::sync::Arc;

use tokio::sync::RwLock;

use crate::application::ports::SemanticSplitter;
use crate::application::services::{BatchProcessor, SeparationEngine};

use super::SessionHistory;

#[derive(Clone)]
pub struct AppState {
    pub engine: Arc<SeparationEngine>,
    pub batch_processor: Arc<BatchProcessor>,
    pub splitter: Option<Arc<dyn SemanticSplitter>>,
    pub history: Arc<RwLock<SessionHistory>>,
}

impl AppState {
    pub fn new(
        engine: SeparationEngine,
        splitter: Option<Arc<dyn SemanticSplitter>>,
        batch_concurrency: usize,
        history_max_entries: usize,
    ) -> Self {
        let engine = Arc::new(engine);
        Self {
            batch_processor: Arc::new(BatchProcessor::new(
                Arc::clone(&engine),
                batch_concurrency,
            )),
            engine,
            splitter,
            history: Arc::new(RwLock::new(SessionHistory::new(history_max_entries))),
        }
    }

    pub fn splitter(&self) -> Option<&dyn SemanticSplitter> {
        self.splitter.as_deref()
    }
}

use std::sync::Arc;

use futures::stream::{self, StreamExt};

use crate::application::ports::{SemanticSplitter, WarningSink};
use crate::application::services::SeparationEngine;
use crate::domain::{BatchRecord, SeparationResult};

/// Runs the engine over an ordered sequence of texts. Up to `concurrency`
/// separations are in flight at once; results keep input order.
pub struct BatchProcessor {
    engine: Arc<SeparationEngine>,
    concurrency: usize,
}

impl BatchProcessor {
    pub fn new(engine: Arc<SeparationEngine>, concurrency: usize) -> Self {
        Self {
            engine,
            concurrency: concurrency.max(1),
        }
    }

    pub fn concurrency(&self) -> usize {
        self.concurrency
    }

    pub async fn process_all<S>(
        &self,
        texts: &[S],
        splitter: Option<&dyn SemanticSplitter>,
        sink: &dyn WarningSink,
    ) -> Vec<SeparationResult>
    where
        S: AsRef<str> + Sync,
    {
        self.process_records(texts, splitter)
            .await
            .into_iter()
            .map(|record| {
                for warning in &record.warnings {
                    sink.report(warning);
                }
                record.result
            })
            .collect()
    }

    #[tracing::instrument(skip_all, fields(total = texts.len(), concurrency = self.concurrency))]
    pub async fn process_records<S>(
        &self,
        texts: &[S],
        splitter: Option<&dyn SemanticSplitter>,
    ) -> Vec<BatchRecord>
    where
        S: AsRef<str> + Sync,
    {
        let engine = self.engine.as_ref();
        let pending: Vec<_> = texts
            .iter()
            .enumerate()
            .map(|(index, text)| separate_indexed(engine, index, text.as_ref(), splitter))
            .collect();

        let records: Vec<BatchRecord> = stream::iter(pending)
            .buffered(self.concurrency)
            .collect()
            .await;

        let degraded = records.iter().filter(|r| !r.warnings.is_empty()).count();
        tracing::info!(degraded = degraded, "Batch separation completed");

        records
    }
}

async fn separate_indexed(
    engine: &SeparationEngine,
    index: usize,
    text: &str,
    splitter: Option<&dyn SemanticSplitter>,
) -> BatchRecord {
    let outcome = engine.separate_with_outcome(text, splitter).await;
    BatchRecord {
        index,
        result: outcome.result,
        warnings: outcome.warnings,
    }
}

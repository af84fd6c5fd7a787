use std::sync::Arc;
use tokio::sync::mpsc;

use mapscout::api::SearchBackend;
use mapscout::model::{Listing, SearchRequest};

use crate::log_debug;

/// A submitted search handed to the worker
#[derive(Debug, Clone)]
pub struct ScrapeJob {
    pub id: u64,
    pub request: SearchRequest,
}

/// Settled result of one job
#[derive(Debug)]
pub struct ScrapeOutcome {
    pub id: u64,
    pub result: anyhow::Result<Vec<Listing>>,
}

/// Spawn the scrape worker
///
/// Each job runs on its own task so the UI loop only ever polls the
/// outcome channel. The controller guarantees at most one job in flight.
pub fn spawn_scrape_service<B>(
    backend: B,
) -> (
    mpsc::UnboundedSender<ScrapeJob>,
    mpsc::UnboundedReceiver<ScrapeOutcome>,
)
where
    B: SearchBackend + Send + Sync + 'static,
{
    let (job_tx, mut job_rx) = mpsc::unbounded_channel::<ScrapeJob>();
    let (outcome_tx, outcome_rx) = mpsc::unbounded_channel::<ScrapeOutcome>();
    let backend = Arc::new(backend);

    tokio::spawn(async move {
        while let Some(job) = job_rx.recv().await {
            let backend = Arc::clone(&backend);
            let outcome_tx = outcome_tx.clone();

            tokio::spawn(async move {
                log_debug(&format!(
                    "DEBUG [Scrape Service]: START #{} query={:?} total={}",
                    job.id, job.request.query, job.request.result_count
                ));

                let result = backend.scrape(&job.request).await;

                log_debug(&format!(
                    "DEBUG [Scrape Service]: END #{} success={}",
                    job.id,
                    result.is_ok()
                ));

                let _ = outcome_tx.send(ScrapeOutcome { id: job.id, result });
            });
        }
    });

    (job_tx, outcome_rx)
}

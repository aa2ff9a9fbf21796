// src/services/best_effort.rs
// DOCUMENTATION: Best-effort fan-in
// PURPOSE: Await a batch of fallible list futures together, turning each
// failure into an empty contribution instead of failing the batch

use futures::future::join_all;
use std::fmt::Display;
use std::future::Future;

/// Await every future at once and flatten the successful lists
/// DOCUMENTATION: The futures must already be constructed (issued) by the caller;
/// they are polled concurrently and awaited as one set. Failures are logged and
/// contribute nothing. Output order follows input order.
pub async fn collect_best_effort<I, F, T, E>(label: &str, futures: I) -> Vec<T>
where
    I: IntoIterator<Item = F>,
    F: Future<Output = Result<Vec<T>, E>>,
    E: Display,
{
    let outcomes = join_all(futures).await;
    let total = outcomes.len();

    let mut failed = 0;
    let mut items = Vec::new();
    for outcome in outcomes {
        match outcome {
            Ok(batch) => items.extend(batch),
            Err(e) => {
                failed += 1;
                log::warn!("{}: sub-request failed, treating as empty: {}", label, e);
            }
        }
    }

    if failed > 0 {
        log::info!("{}: {}/{} sub-requests failed", label, failed, total);
    }

    items
}

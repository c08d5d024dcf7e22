//! Per-item lookups for list pages.
//!
//! The project list and the applications list both need one extra request per
//! item before a card can be drawn. [`enrich_bounded`] runs those lookups with
//! at most `limit` in flight and returns the items in their original order.

use std::future::Future;

use futures::stream::{self, StreamExt};

/// Default number of concurrent per-item lookups.
pub const ENRICH_CONCURRENCY: usize = 4;

/// Pair every item with the result of `lookup(&item)`.
///
/// `lookup` must not borrow the item in the future it returns; copy the key
/// out first (`|p| client.my_application(p.id)`).
pub async fn enrich_bounded<T, U, F, Fut>(items: Vec<T>, limit: usize, lookup: F) -> Vec<(T, U)>
where
    F: Fn(&T) -> Fut,
    Fut: Future<Output = U>,
{
    stream::iter(items)
        .map(|item| {
            let pending = lookup(&item);
            async move { (item, pending.await) }
        })
        .buffered(limit.max(1))
        .collect()
        .await
}

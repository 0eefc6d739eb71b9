//! Enumerates the user-visible kinds of a datastore.

use tracing::{debug, instrument};

use super::kind_store::{KindStore, StoreResult};
use crate::models::kind::is_reserved_kind;

/// Page size requested from the store. Callers never see it.
pub const KIND_PAGE_SIZE: usize = 100;

/// Exhaust the kind scan and return every non-reserved kind in store order.
///
/// Any page failure aborts the scan; kinds collected so far are dropped.
#[instrument(name = "kinds.enumerate", skip(store))]
pub async fn enumerate_kinds(store: &dyn KindStore) -> StoreResult<Vec<String>> {
    let mut kinds = Vec::new();
    let mut cursor: Option<String> = None;
    let mut pages = 0usize;

    loop {
        let page = store.fetch_kinds(cursor.as_deref(), KIND_PAGE_SIZE).await?;
        pages += 1;

        kinds.extend(page.kinds.into_iter().filter(|kind| !is_reserved_kind(kind)));

        match page.next_cursor {
            Some(next) => cursor = Some(next),
            None => break,
        }
    }

    debug!(pages, kinds = kinds.len(), "kind scan complete");
    Ok(kinds)
}

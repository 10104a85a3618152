//! Offline order backfill.
//!
//! Visits every stored entity once, recomputes its order, and writes it
//! back. Rows are written one at a time with no batching; the first
//! storage failure stops the run.

use crate::error::{AclError, Result};
use crate::store::EntityStore;

/// Outcome of a completed backfill.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BackfillReport {
    /// Rows read and written back.
    pub scanned: usize,
    /// Rows whose stored order was wrong.
    pub changed: usize,
    /// Rows listed by `ids()` but gone by the time they were read.
    pub vanished: usize,
}

/// Recompute and persist the order of every row in `store`.
pub fn backfill_orders<S: EntityStore + ?Sized>(store: &mut S) -> Result<BackfillReport> {
    let ids = store.ids().map_err(AclError::List)?;
    tracing::info!(rows = ids.len(), "starting order backfill");

    let mut report = BackfillReport::default();
    for id in ids {
        let Some(mut entity) = store
            .get(id)
            .map_err(|source| AclError::Store { id, source })?
        else {
            tracing::warn!(%id, "entity disappeared during backfill");
            report.vanished += 1;
            continue;
        };

        let before = entity.order();
        if entity.recompute_order() {
            tracing::debug!(%id, before, after = entity.order(), "order changed");
            report.changed += 1;
        }

        store
            .put(id, &entity)
            .map_err(|source| AclError::Store { id, source })?;
        report.scanned += 1;
    }

    tracing::info!(
        scanned = report.scanned,
        changed = report.changed,
        vanished = report.vanished,
        "order backfill complete"
    );
    Ok(report)
}

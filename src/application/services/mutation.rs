use super::list_state::ListState;
use crate::application::ports::notifier::{NotificationKind, Notifier};
use crate::domain::entities::Identified;
use crate::domain::value_objects::RecordId;
use crate::shared::error::Result;
use std::future::Future;
use tokio::sync::RwLock;
use tracing::{debug, warn};

/// Terminal state of one optimistic mutation.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum MutationOutcome {
    /// The server confirmed the change; the optimistic write stands.
    Confirmed,
    /// The server rejected or the request failed; local state was reconciled.
    RolledBack,
    /// The mutation never started: unknown record id, or one already in
    /// flight for the same record.
    Ignored,
}

/// A single-field state change on one record, with everything needed to
/// undo it locally.
pub struct StatusToggle<T, V> {
    pub record_id: RecordId,
    pub new_value: V,
    pub read: fn(&T) -> V,
    pub write: fn(&mut T, V),
    pub success_message: String,
    pub failure_message: String,
}

/// Confirmed status transition: write the new value locally first, then
/// reconcile with the outcome of the confirmation request.
///
/// On success the record is evicted from the visible collection when the
/// active filter no longer admits it. On failure the field is restored to
/// exactly its pre-mutation value; no refetch happens. Either way the
/// in-flight marker is cleared and exactly one notification is emitted.
///
/// Failures never escape: they are logged and converted into a notification,
/// and the outcome reports what happened.
pub async fn confirm_status<T, V, S, E>(
    list: &RwLock<ListState<T>>,
    notifier: &dyn Notifier,
    toggle: StatusToggle<T, V>,
    send: S,
    should_evict: E,
) -> MutationOutcome
where
    T: Identified,
    V: Clone,
    S: Future<Output = Result<()>>,
    E: Fn(&T) -> bool,
{
    let previous = {
        let mut guard = list.write().await;
        if guard.is_in_flight(&toggle.record_id) {
            debug!(record_id = %toggle.record_id, "mutation already in flight, ignoring");
            return MutationOutcome::Ignored;
        }
        let new_value = toggle.new_value.clone();
        let Some(previous) = guard.apply_optimistic(&toggle.record_id, |record| {
            let previous = (toggle.read)(record);
            (toggle.write)(record, new_value);
            previous
        }) else {
            warn!(record_id = %toggle.record_id, "status change for unknown record, ignoring");
            return MutationOutcome::Ignored;
        };
        guard.begin(toggle.record_id.clone());
        previous
    };

    match send.await {
        Ok(()) => {
            notifier.notify(NotificationKind::Success, &toggle.success_message);
            let mut guard = list.write().await;
            guard.evict_if(&toggle.record_id, &should_evict);
            guard.finish(&toggle.record_id);
            MutationOutcome::Confirmed
        }
        Err(err) => {
            warn!(record_id = %toggle.record_id, error = %err, "status change rejected, rolling back");
            notifier.notify(NotificationKind::Error, &toggle.failure_message);
            let mut guard = list.write().await;
            guard.apply_optimistic(&toggle.record_id, |record| {
                (toggle.write)(record, previous);
            });
            guard.finish(&toggle.record_id);
            MutationOutcome::RolledBack
        }
    }
}

pub struct DeleteMessages {
    pub success: String,
    pub failure: String,
    pub refetch_failure: String,
}

/// Confirmed delete: the record stays visible (with its in-flight marker set
/// so the surface can disable that row's control) until the server confirms,
/// then it is removed. There is nothing to restore on failure, so the
/// reconciliation policy is a full collection refetch; if even the refetch
/// fails, the stale collection stays visible behind a generic notification.
pub async fn confirm_delete<T, S, R>(
    list: &RwLock<ListState<T>>,
    notifier: &dyn Notifier,
    record_id: RecordId,
    messages: DeleteMessages,
    send: S,
    refetch: R,
) -> MutationOutcome
where
    T: Identified,
    S: Future<Output = Result<()>>,
    R: Future<Output = Result<Vec<T>>>,
{
    {
        let mut guard = list.write().await;
        if guard.is_in_flight(&record_id) {
            debug!(record_id = %record_id, "delete already in flight, ignoring");
            return MutationOutcome::Ignored;
        }
        if !guard.contains(&record_id) {
            warn!(record_id = %record_id, "delete for unknown record, ignoring");
            return MutationOutcome::Ignored;
        }
        guard.begin(record_id.clone());
    }

    match send.await {
        Ok(()) => {
            notifier.notify(NotificationKind::Success, &messages.success);
            let mut guard = list.write().await;
            guard.remove(&record_id);
            guard.finish(&record_id);
            MutationOutcome::Confirmed
        }
        Err(err) => {
            warn!(record_id = %record_id, error = %err, "delete rejected, refetching collection");
            notifier.notify(NotificationKind::Error, &messages.failure);
            match refetch.await {
                Ok(records) => {
                    let mut guard = list.write().await;
                    guard.replace_all(records);
                    guard.finish(&record_id);
                }
                Err(refetch_err) => {
                    warn!(error = %refetch_err, "refetch after failed delete also failed");
                    notifier.notify(NotificationKind::Error, &messages.refetch_failure);
                    list.write().await.finish(&record_id);
                }
            }
            MutationOutcome::RolledBack
        }
    }
}

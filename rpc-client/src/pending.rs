//! Table of calls waiting for their response envelope.
use crate::{
    envelope::{Payload, Response},
    error::Error,
};
use dashmap::DashMap;
use serde_json::value::RawValue;
use std::{
    fmt::{Debug, Formatter},
    sync::atomic::{AtomicU64, Ordering},
};
use tokio::sync::oneshot;

pub type CallResult = Result<Box<RawValue>, Error>;

/// An envelope that came back for one call but carries the id of another.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Misrouted {
    /// Id of the call the envelope was received for.
    pub expected: u64,
    /// Id the envelope carries.
    pub found: u64,
}

/// Pending calls indexed by request id. Removing an entry is the only way to resolve a call,
/// so each call is resolved at most once.
pub struct PendingCalls {
    next_id: AtomicU64,
    calls: DashMap<u64, oneshot::Sender<CallResult>>,
}

impl Default for PendingCalls {
    fn default() -> Self {
        Self::new()
    }
}

impl Debug for PendingCalls {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PendingCalls")
            .field("next_id", &self.next_id.load(Ordering::Relaxed))
            .field("pending", &self.calls.len())
            .finish()
    }
}

impl PendingCalls {
    #[must_use]
    pub fn new() -> Self {
        Self { next_id: AtomicU64::new(0), calls: DashMap::new() }
    }

    /// Allocates a fresh id and registers a call under it.
    pub fn register(&self) -> (u64, oneshot::Receiver<CallResult>) {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let (sender, receiver) = oneshot::channel();
        self.calls.insert(id, sender);
        (id, receiver)
    }

    /// Delivers `response`, received for call `id`, returns `false` if `id` isn't pending.
    ///
    /// A `null` id answers `id`, servers send it when they couldn't read the request.
    ///
    /// # Errors
    /// Returns [`Misrouted`] if the envelope carries another id, no entry is touched then.
    pub fn resolve(&self, id: u64, response: Response) -> Result<bool, Misrouted> {
        match response.id {
            Some(found) if found != id => Err(Misrouted { expected: id, found }),
            _ => Ok(self.complete(id, response.payload)),
        }
    }

    /// Resolves call `id` with `payload`, returns `false` if it isn't pending.
    pub fn complete(&self, id: u64, payload: Payload) -> bool {
        self.deliver(id, payload.into_result().map_err(Error::Rpc))
    }

    /// Fails call `id`, returns `false` if it isn't pending.
    pub fn fail(&self, id: u64, error: Error) -> bool {
        self.deliver(id, Err(error))
    }

    /// Forgets call `id` without resolving it.
    pub fn cancel(&self, id: u64) -> bool {
        self.calls.remove(&id).is_some()
    }

    #[must_use]
    pub fn contains(&self, id: u64) -> bool {
        self.calls.contains_key(&id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.calls.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.calls.is_empty()
    }

    fn deliver(&self, id: u64, result: CallResult) -> bool {
        let Some((_, sender)) = self.calls.remove(&id) else {
            return false;
        };
        if sender.send(result).is_err() {
            log::trace!("request {id} was abandoned before its response arrived");
        }
        true
    }
}

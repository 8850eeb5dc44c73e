// Copyright 2019-2026 ChainSafe Systems
// SPDX-License-Identifier: Apache-2.0, MIT

// Contains the implementation of Message Pool component.
// The Message Pool holds signed messages that were submitted but not yet
// included in a block. Block production drains it, status queries read it.

use std::time::Duration;

use crate::message::SignedMessage;
use crate::message_pool::{config::MpoolConfig, errors::Error, msgpool::metrics};
use ahash::HashMap;
use cid::Cid;
use parking_lot::Mutex;
use prometheus_client::metrics::gauge::Gauge;
use tokio::sync::Notify;
use tokio::time::Instant;
use tokio_util::sync::CancellationToken;
use tracing::{debug, trace, warn};

/// Pending messages keyed by their own CID.
///
/// Every operation on the map runs under one lock. Waiters never hold the
/// lock while suspended: they sleep on a broadcast notification that each
/// `add` fires, and re-check the count on every wake.
///
/// The pool's size is reported through the `mpool_message_total` gauge. A
/// dropped pool withdraws whatever it still holds from the gauge.
#[derive(Debug)]
pub struct MessagePool {
    pending: Mutex<HashMap<Cid, SignedMessage>>,
    added: Notify,
    size: Gauge,
    config: MpoolConfig,
}

impl Default for MessagePool {
    fn default() -> Self {
        Self::new(MpoolConfig::default())
    }
}

impl Drop for MessagePool {
    fn drop(&mut self) {
        let remaining = self.pending.get_mut().len();
        self.size.dec_by(i64::try_from(remaining).unwrap_or(i64::MAX));
    }
}

impl MessagePool {
    pub fn new(config: MpoolConfig) -> Self {
        Self::with_size_gauge(config, metrics::MPOOL_MESSAGE_TOTAL.clone())
    }

    fn with_size_gauge(config: MpoolConfig, size: Gauge) -> Self {
        Self {
            pending: Default::default(),
            added: Notify::new(),
            size,
            config,
        }
    }

    pub fn config(&self) -> &MpoolConfig {
        &self.config
    }

    /// Adds a message under its CID and returns the CID. Adding a message that
    /// is already pending replaces it.
    pub fn add(&self, msg: SignedMessage) -> Cid {
        let cid = msg.cid();
        let size = {
            let mut pending = self.pending.lock();
            if pending.insert(cid, msg).is_none() {
                self.size.inc();
            }
            pending.len()
        };
        debug!(%cid, size, "Added message to pool");
        self.added.notify_waiters();
        cid
    }

    /// Removes a message. Removing a CID that is not pending does nothing.
    pub fn remove(&self, cid: &Cid) -> Option<SignedMessage> {
        let removed = self.pending.lock().remove(cid);
        if removed.is_some() {
            self.size.dec();
            debug!(%cid, "Removed message from pool");
        }
        removed
    }

    pub fn get(&self, cid: &Cid) -> Result<SignedMessage, Error> {
        self.pending
            .lock()
            .get(cid)
            .cloned()
            .ok_or(Error::NotFound(*cid))
    }

    pub fn contains(&self, cid: &Cid) -> bool {
        self.pending.lock().contains_key(cid)
    }

    /// CIDs of every pending message, in no particular order.
    pub fn list(&self) -> Vec<Cid> {
        self.pending.lock().keys().copied().collect()
    }

    /// Every pending message, in no particular order.
    pub fn pending(&self) -> Vec<SignedMessage> {
        self.pending.lock().values().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.pending.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.lock().is_empty()
    }

    /// Waits until at least `count` messages are pending, then returns the
    /// CIDs of all pending messages, which may be more than `count`.
    ///
    /// Returns at once when the pool already holds enough messages, even if
    /// `cancel` has fired. Fails with [`Error::Cancelled`] when `cancel` fires
    /// or the configured `max_wait` expires first.
    pub async fn wait_for_count(
        &self,
        count: usize,
        cancel: &CancellationToken,
    ) -> Result<Vec<Cid>, Error> {
        self.wait(count, cancel, None).await
    }

    /// Like [`MessagePool::wait_for_count`], giving up after `timeout`.
    pub async fn wait_for_count_timeout(
        &self,
        count: usize,
        timeout: Duration,
    ) -> Result<Vec<Cid>, Error> {
        self.wait(count, &CancellationToken::new(), Some(timeout))
            .await
    }

    async fn wait(
        &self,
        count: usize,
        cancel: &CancellationToken,
        timeout: Option<Duration>,
    ) -> Result<Vec<Cid>, Error> {
        // A limit too far out to be represented is no limit at all.
        let deadline = [timeout, self.config.max_wait]
            .into_iter()
            .flatten()
            .min()
            .and_then(|limit| Instant::now().checked_add(limit));

        loop {
            let notified = self.added.notified();
            tokio::pin!(notified);
            // Register before checking, so an add landing between the check
            // and the await below still wakes this waiter.
            notified.as_mut().enable();

            {
                let pending = self.pending.lock();
                if pending.len() >= count {
                    return Ok(pending.keys().copied().collect());
                }
                trace!(have = pending.len(), want = count, "Waiting for messages");
            }

            tokio::select! {
                _ = &mut notified => {}
                _ = cancel.cancelled() => {
                    warn!(want = count, "Waiting for messages was cancelled");
                    return Err(Error::Cancelled);
                }
                _ = sleep_until(deadline) => {
                    warn!(want = count, "Waiting for messages timed out");
                    return Err(Error::Cancelled);
                }
            }
        }
    }
}

async fn sleep_until(deadline: Option<Instant>) {
    match deadline {
        Some(deadline) => tokio::time::sleep_until(deadline).await,
        None => std::future::pending().await,
    }
}

//! Location subscription loop and notification seam.
//!
//! The location provider is modeled as an mpsc channel of samples rather
//! than an ambient callback: the provider owns the sender, [`run`] reduces
//! the sample sequence through the engine, and dropping the sender cancels
//! the subscription.
//!
//! At most one evaluation is in flight at a time. Bursts of queued samples
//! are collapsed to the newest one ([`drain_latest`]); [`SampleSlot`] offers
//! the equivalent single-slot mailbox for callback-driven providers.

use std::sync::mpsc::Receiver;
use std::sync::Mutex;

use log::{debug, info};

use crate::{GroveEngine, LocationSample};

/// Notification sink for organic-grove alerts.
///
/// Fire-and-forget: implementations own delivery and failure handling.
pub trait Notifier {
    fn notify(&mut self, title: &str, body: &str);
}

/// Notifier that writes alerts to the log.
#[derive(Debug, Default)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&mut self, title: &str, body: &str) {
        info!("{}: {}", title, body);
    }
}

/// Single-slot mailbox holding only the newest location sample.
///
/// `offer` overwrites any pending sample, so a consumer that takes between
/// evaluations never processes stale backlog.
#[derive(Debug, Default)]
pub struct SampleSlot {
    slot: Mutex<Option<LocationSample>>,
}

impl SampleSlot {
    /// Create an empty slot.
    pub fn new() -> Self {
        Self::default()
    }

    /// Put a sample into the slot, replacing any pending one.
    pub fn offer(&self, sample: LocationSample) {
        *self.lock() = Some(sample);
    }

    /// Take the pending sample, leaving the slot empty.
    pub fn take(&self) -> Option<LocationSample> {
        self.lock().take()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Option<LocationSample>> {
        // A poisoned slot only holds a Copy sample, safe to keep using.
        self.slot.lock().unwrap_or_else(|e| e.into_inner())
    }
}

/// Drain all queued samples, keeping only the newest.
pub fn drain_latest(samples: &Receiver<LocationSample>) -> Option<LocationSample> {
    let mut latest = None;
    while let Ok(sample) = samples.try_recv() {
        latest = Some(sample);
    }
    latest
}

/// Run the watcher loop until the sample channel closes.
///
/// Blocks on the next sample, collapses any backlog to the newest reading,
/// and hands it to the engine. Cancellation is dropping the sender.
pub fn run(engine: &mut GroveEngine, samples: &Receiver<LocationSample>, notifier: &mut dyn Notifier) {
    while let Ok(first) = samples.recv() {
        let sample = drain_latest(samples).unwrap_or(first);
        let effects = engine.handle_location(&sample, notifier);
        if !effects.is_empty() {
            debug!(
                "location ({:.5}, {:.5}) produced {} effect(s)",
                sample.latitude,
                sample.longitude,
                effects.len()
            );
        }
    }
}

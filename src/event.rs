//! Per-cycle event delivery and cooperative cancellation.
//!
//! The engines never embed timing delays: they produce a finite ordered
//! event stream, and a presentation layer chooses how (or whether) to
//! pace it. The sink is invoked synchronously in cycle order before the
//! next cycle begins, so a consumer forwarding events to another thread
//! observes non-decreasing cycles.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::models::{CycleEvent, TimelineEntry};

/// Receiver of per-cycle notifications.
///
/// Implemented for any `FnMut(&CycleEvent, u32)` closure, so a caller
/// can pass `|event, cycle| ...` directly.
pub trait EventSink {
    /// Called once per emitted event, in non-decreasing cycle order.
    fn notify(&mut self, event: &CycleEvent, cycle: u32);
}

impl<F> EventSink for F
where
    F: FnMut(&CycleEvent, u32),
{
    fn notify(&mut self, event: &CycleEvent, cycle: u32) {
        self(event, cycle)
    }
}

/// A sink that records every notification.
///
/// Useful for tests and for consumers that replay the stream at their
/// own pace after the run completes.
#[derive(Debug, Default)]
pub struct RecordingSink {
    /// Entries in notification order.
    pub entries: Vec<TimelineEntry>,
}

impl RecordingSink {
    /// Creates an empty recording sink.
    pub fn new() -> Self {
        Self::default()
    }
}

impl EventSink for RecordingSink {
    fn notify(&mut self, event: &CycleEvent, cycle: u32) {
        self.entries.push(TimelineEntry::new(event.clone(), cycle));
    }
}

/// Cooperative cancellation flag, cloneable across threads.
///
/// Engines check the token once per outer cycle iteration; a cancelled
/// run stops emitting further cycles and returns the partial result. A
/// cycle either completes fully (mutation and notification) or the loop
/// exits before starting it — no torn state is exposed.
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    flag: Arc<AtomicBool>,
}

impl CancelToken {
    /// Creates a fresh, uncancelled token.
    pub fn new() -> Self {
        Self::default()
    }

    /// Requests cancellation.
    pub fn cancel(&self) {
        self.flag.store(true, Ordering::Relaxed);
    }

    /// Whether cancellation has been requested.
    pub fn is_cancelled(&self) -> bool {
        self.flag.load(Ordering::Relaxed)
    }
}

/// Per-run options: an optional event sink and an optional cancel token.
#[derive(Default)]
pub struct RunOptions<'a> {
    /// Receiver of per-cycle notifications.
    pub sink: Option<&'a mut dyn EventSink>,
    /// Cooperative cancellation flag, checked once per cycle.
    pub cancel: Option<&'a CancelToken>,
}

impl<'a> RunOptions<'a> {
    /// Creates empty options (no sink, no cancellation).
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the event sink.
    pub fn with_sink(mut self, sink: &'a mut dyn EventSink) -> Self {
        self.sink = Some(sink);
        self
    }

    /// Sets the cancel token.
    pub fn with_cancel(mut self, cancel: &'a CancelToken) -> Self {
        self.cancel = Some(cancel);
        self
    }
}

/// Run-local timeline recorder shared by both engines.
///
/// Owns the growing timeline, forwards each event to the optional sink,
/// and exposes the cancellation check.
pub(crate) struct Trace<'a> {
    timeline: Vec<TimelineEntry>,
    sink: Option<&'a mut dyn EventSink>,
    cancel: Option<&'a CancelToken>,
}

impl<'a> Trace<'a> {
    pub(crate) fn new(
        sink: Option<&'a mut dyn EventSink>,
        cancel: Option<&'a CancelToken>,
    ) -> Self {
        Self {
            timeline: Vec::new(),
            sink,
            cancel,
        }
    }

    /// Appends an entry and notifies the sink, in that order.
    pub(crate) fn emit(&mut self, event: CycleEvent, cycle: u32) {
        if let Some(sink) = self.sink.as_deref_mut() {
            sink.notify(&event, cycle);
        }
        self.timeline.push(TimelineEntry::new(event, cycle));
    }

    pub(crate) fn cancelled(&self) -> bool {
        self.cancel.is_some_and(CancelToken::is_cancelled)
    }

    pub(crate) fn into_timeline(self) -> Vec<TimelineEntry> {
        self.timeline
    }
}

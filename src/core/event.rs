//! Purpose: Suppress event propagation and default handling without failing callers.
//! Exports: `EventHandle`, `stop_propagation`.
//! Role: Failure-tolerant boundary over host event objects.
//! Invariants: Each suppression call is attempted exactly once, regardless of the other's outcome.
//! Invariants: Failures are logged, never returned.

use crate::core::error::Result;
use tracing::warn;

pub trait EventHandle {
    fn stop_propagation(&self) -> Result<()>;

    fn prevent_default(&self) -> Result<()>;
}

impl<E: EventHandle + ?Sized> EventHandle for &E {
    fn stop_propagation(&self) -> Result<()> {
        (**self).stop_propagation()
    }

    fn prevent_default(&self) -> Result<()> {
        (**self).prevent_default()
    }
}

pub fn stop_propagation<E: EventHandle + ?Sized>(event: &E) {
    if let Err(err) = event.stop_propagation() {
        warn!(error = %err, "event stopPropagation failed");
    }
    if let Err(err) = event.prevent_default() {
        warn!(error = %err, "event preventDefault failed");
    }
}

#[cfg(test)]
mod tests {
    use super::stop_propagation;
    use crate::host::memory::MemoryEvent;

    #[test]
    fn calls_both_suppressors_once() {
        let ev = MemoryEvent::new();
        stop_propagation(&ev);
        assert_eq!(ev.stop_propagation_calls(), 1);
        assert_eq!(ev.prevent_default_calls(), 1);
    }

    #[test]
    fn failing_stop_still_prevents_default() {
        let ev = MemoryEvent::failing();
        stop_propagation(&ev);
        assert_eq!(ev.stop_propagation_calls(), 1);
        assert_eq!(ev.prevent_default_calls(), 1);
    }
}

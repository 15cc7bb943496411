//! Event sink boundary.
//!
//! Executor logic MUST NOT depend on obs::metrics directly.
//! All instrumentation flows through Event and EventSink; this module is
//! the only bridge between execution logic and the counter state.

use crate::obs::metrics;
use std::cell::RefCell;

thread_local! {
    static SINK_OVERRIDE: RefCell<Option<Box<dyn EventSink>>> = const { RefCell::new(None) };
}

///
/// ExecKind
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ExecKind {
    Delete,
    Lifecycle,
    Load,
    Save,
}

///
/// Event
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Event {
    ExecStart {
        kind: ExecKind,
        entity: &'static str,
    },
    ExecFinish {
        kind: ExecKind,
        entity: &'static str,
        rows: u64,
    },
    UniqueViolation {
        entity: &'static str,
    },
    SlugCollision {
        entity: &'static str,
    },
    BlockedDelete {
        entity: &'static str,
        blocking: u64,
    },
}

///
/// EventSink
///

pub trait EventSink {
    fn record(&self, event: Event);
}

///
/// CounterSink
/// Default process-local sink that writes into the counter state.
///

struct CounterSink;

impl EventSink for CounterSink {
    fn record(&self, event: Event) {
        metrics::bump(event);
    }
}

/// Record an event through the override sink, or the default counters.
pub fn record(event: Event) {
    let handled = SINK_OVERRIDE.with_borrow(|over| {
        over.as_ref().map(|sink| sink.record(event)).is_some()
    });

    if !handled {
        CounterSink.record(event);
    }
}

/// Install a sink override for the current thread; `None` restores the
/// default. Test support.
pub fn set_override(sink: Option<Box<dyn EventSink>>) {
    SINK_OVERRIDE.with_borrow_mut(|over| *over = sink);
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{cell::RefCell, rc::Rc};

    struct Capture(Rc<RefCell<Vec<Event>>>);

    impl EventSink for Capture {
        fn record(&self, event: Event) {
            self.0.borrow_mut().push(event);
        }
    }

    #[test]
    fn override_captures_events() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        set_override(Some(Box::new(Capture(Rc::clone(&seen)))));

        record(Event::UniqueViolation { entity: "archer" });
        set_override(None);

        assert_eq!(seen.borrow().len(), 1);
    }
}

use crate::obs::sink::{Event, ExecKind};
use std::cell::RefCell;

thread_local! {
    static COUNTERS: RefCell<Counters> = const { RefCell::new(Counters::new()) };
}

///
/// Counters
/// Process-local execution counters, queryable by operators and tests.
///

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Counters {
    pub saves: u64,
    pub loads: u64,
    pub deletes: u64,
    pub lifecycle_ops: u64,
    pub unique_violations: u64,
    pub slug_collisions: u64,
    pub blocked_deletes: u64,
}

impl Counters {
    const fn new() -> Self {
        Self {
            saves: 0,
            loads: 0,
            deletes: 0,
            lifecycle_ops: 0,
            unique_violations: 0,
            slug_collisions: 0,
            blocked_deletes: 0,
        }
    }
}

pub(crate) fn bump(event: Event) {
    COUNTERS.with_borrow_mut(|c| match event {
        Event::ExecFinish { kind, .. } => match kind {
            ExecKind::Save => c.saves += 1,
            ExecKind::Load => c.loads += 1,
            ExecKind::Delete => c.deletes += 1,
            ExecKind::Lifecycle => c.lifecycle_ops += 1,
        },
        Event::UniqueViolation { .. } => c.unique_violations += 1,
        Event::SlugCollision { .. } => c.slug_collisions += 1,
        Event::BlockedDelete { .. } => c.blocked_deletes += 1,
        Event::ExecStart { .. } => {}
    });
}

/// Current counter snapshot for this thread.
#[must_use]
pub fn snapshot() -> Counters {
    COUNTERS.with_borrow(|c| *c)
}

/// Reset counters. Test support.
pub fn reset() {
    COUNTERS.with_borrow_mut(|c| *c = Counters::new());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finish_events_bump_their_kind() {
        reset();
        bump(Event::ExecFinish {
            kind: ExecKind::Save,
            entity: "club",
            rows: 1,
        });
        bump(Event::SlugCollision { entity: "club" });

        let snap = snapshot();
        assert_eq!(snap.saves, 1);
        assert_eq!(snap.slug_collisions, 1);
    }
}

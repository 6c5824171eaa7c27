use std::rc::Rc;
use std::time::Duration;

use tracing::debug;

use super::host::{Document, Scheduler};
use super::walker::{translate_page, EngineShared};

/// Quiet window after the first mutation of a burst before the follow-up
/// run fires. Further mutations inside the window are coalesced into it.
pub const QUIET_WINDOW: Duration = Duration::from_millis(500);

/// Re-runs the walker over the whole document after structural mutations.
pub(crate) fn watch<D, S>(shared: &Rc<EngineShared<D, S>>)
where
    D: Document + 'static,
    S: Scheduler + 'static,
{
    let observer = Rc::clone(shared);
    shared
        .document
        .on_structural_change(Box::new(move || schedule_retrigger(&observer)));
}

fn schedule_retrigger<D, S>(shared: &Rc<EngineShared<D, S>>)
where
    D: Document + 'static,
    S: Scheduler + 'static,
{
    // At most one outstanding retrigger; a storm of mutations produces one
    // follow-up run, fired QUIET_WINDOW after the first mutation.
    if shared.retrigger_pending.get() {
        return;
    }
    shared.retrigger_pending.set(true);
    debug!("structural change observed, full re-translation scheduled");

    let fire = Rc::clone(shared);
    shared.scheduler.after_delay(
        QUIET_WINDOW,
        Box::new(move || {
            fire.retrigger_pending.set(false);
            // A run still in flight makes this a no-op; the reentrancy
            // guard inside translate_page decides.
            translate_page(&fire);
        }),
    );
}

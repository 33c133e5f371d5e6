use crate::Ticker;
use std::cell::Cell;
use std::rc::Rc;

/// Lets at most one submission be in flight at a time.
#[derive(Debug, Clone, Default)]
pub struct SubmissionGate {
    pending: Rc<Cell<bool>>,
}

impl SubmissionGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `None` while another submission still holds the gate.
    pub fn try_acquire(&self) -> Option<SubmissionGuard> {
        if self.pending.replace(true) {
            log::debug!("Submission ignored, previous request still pending");
            return None;
        }

        Some(SubmissionGuard {
            pending: Rc::clone(&self.pending),
        })
    }

    /// Handle a form submit. `prevent_default` always runs first, so the page
    /// never navigates; the ticker is read only once the gate is held.
    pub fn begin<P, R>(&self, prevent_default: P, read_ticker: R) -> Option<(SubmissionGuard, Ticker)>
    where
        P: FnOnce(),
        R: FnOnce() -> String,
    {
        prevent_default();
        let guard = self.try_acquire()?;
        Some((guard, Ticker::new(read_ticker())))
    }

    pub fn is_pending(&self) -> bool {
        self.pending.get()
    }
}

impl PartialEq for SubmissionGate {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.pending, &other.pending)
    }
}

/// Releases the gate on drop.
#[derive(Debug)]
pub struct SubmissionGuard {
    pending: Rc<Cell<bool>>,
}

impl Drop for SubmissionGuard {
    fn drop(&mut self) {
        self.pending.set(false);
    }
}

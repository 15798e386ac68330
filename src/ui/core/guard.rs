//! Short-lived lock on controls that were just activated.
//!
//! A guarded control ignores repeated activation for [`SOFT_GUARD_DURATION`]
//! and is rendered dimmed meanwhile. The request it started is never cancelled.

use crate::constants::SOFT_GUARD_DURATION;
use crate::dispatcher::IssueAction;
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Guarded controls: the report form's submit and each per-issue action
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Control {
    Submit,
    Issue(IssueAction, i64),
}

#[derive(Debug, Clone)]
pub struct SoftGuard {
    duration: Duration,
    activated: HashMap<Control, Instant>,
}

impl Default for SoftGuard {
    fn default() -> Self {
        Self::new(SOFT_GUARD_DURATION)
    }
}

impl SoftGuard {
    pub fn new(duration: Duration) -> Self {
        Self {
            duration,
            activated: HashMap::new(),
        }
    }

    /// Returns `false` while the control is still guarded from an earlier activation
    pub fn try_activate(&mut self, control: Control, now: Instant) -> bool {
        if self.is_guarded(control, now) {
            log::debug!("Guard: ignoring repeated activation of {:?}", control);
            return false;
        }
        self.activated.insert(control, now);
        true
    }

    pub fn is_guarded(&self, control: Control, now: Instant) -> bool {
        self.activated
            .get(&control)
            .is_some_and(|at| now.saturating_duration_since(*at) < self.duration)
    }

    /// Forget expired activations
    pub fn prune(&mut self, now: Instant) {
        let duration = self.duration;
        self.activated
            .retain(|_, at| now.saturating_duration_since(*at) < duration);
    }
}

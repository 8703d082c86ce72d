//! The navigation controller: single owner of the active section.
//!
//! Programmatic navigation (a menu jump, a search selection, an incoming
//! location fragment) activates the destination immediately and suppresses
//! the visibility tracker for a settle window, so the user's explicit choice
//! stays authoritative while the smooth scroll is in flight. Without the
//! window the tracker would watch the source section leave the band mid-
//! scroll and thrash the active section before the destination stabilizes.
//!
//! All timing is deadline-based: a repeated jump simply restarts the window
//! (last call wins) and an expired deadline needs no cleanup beyond the
//! comparison against "now".

use crate::registry::Registry;
use std::time::{Duration, Instant};
use tracing::warn;

/// A request to scroll the document pane to a section's anchor.
pub struct ScrollRequest {
    /// The validated destination section id.
    pub target_id: String,
}

/// Pending deep link, deferred so layout can settle before scrolling.
struct PendingFragment {
    id: String,
    due: Instant,
}

/// Owns the active section id and the tracking-suppression deadline.
pub struct NavController {
    active_id: String,
    suppress_until: Option<Instant>,
    pending: Option<PendingFragment>,
    settle: Duration,
    defer: Duration,
}

impl NavController {
    /// A controller with the given section active and tracking live.
    #[must_use]
    pub fn new(first_id: &str, settle: Duration, defer: Duration) -> Self {
        Self {
            active_id: first_id.to_string(),
            suppress_until: None,
            pending: None,
            settle,
            defer,
        }
    }

    /// The section every render surface highlights.
    #[must_use]
    pub fn active_id(&self) -> &str {
        &self.active_id
    }

    /// The current location fragment, `#<active id>`.
    ///
    /// Feeding this back through [`Self::handle_incoming_fragment`] on a
    /// fresh controller reproduces the same active section.
    #[must_use]
    pub fn fragment(&self) -> String {
        format!("#{}", self.active_id)
    }

    /// Whether tracker observations are currently ignored.
    #[must_use]
    pub fn is_suppressed(&self, now: Instant) -> bool {
        self.suppress_until.is_some_and(|until| now < until)
    }

    /// Jump to a section: activate it immediately, restart the suppression
    /// window, and return the scroll request for the shell to animate.
    ///
    /// Unknown ids are a no-op apart from a warning; the active section is
    /// left untouched.
    pub fn navigate_to(
        &mut self,
        registry: &Registry,
        id: &str,
        now: Instant,
    ) -> Option<ScrollRequest> {
        if !registry.contains(id) {
            warn!(%id, "ignoring navigation to unknown section");
            return None;
        }
        self.active_id = id.to_string();
        self.suppress_until = Some(now + self.settle);
        Some(ScrollRequest {
            target_id: id.to_string(),
        })
    }

    /// Accept a location fragment (`#id` or bare `id`) and schedule the jump
    /// after the deferral window.
    pub fn handle_incoming_fragment(&mut self, raw: &str, now: Instant) {
        let id = raw.trim().trim_start_matches('#');
        if id.is_empty() {
            return;
        }
        self.pending = Some(PendingFragment {
            id: id.to_string(),
            due: now + self.defer,
        });
    }

    /// Take the deferred fragment once its deadline has passed.
    ///
    /// The caller feeds the returned id to [`Self::navigate_to`]; keeping the
    /// two steps separate lets the shell resolve the anchor against the
    /// current layout.
    pub fn take_due_fragment(&mut self, now: Instant) -> Option<String> {
        if self.pending.as_ref().is_some_and(|p| now >= p.due) {
            self.pending.take().map(|p| p.id)
        } else {
            None
        }
    }

    /// Accept the tracker's published section; ignored while suppressed.
    pub fn record_observation(&mut self, id: &str, now: Instant) {
        if self.is_suppressed(now) {
            return;
        }
        if self.active_id != id {
            self.active_id = id.to_string();
        }
    }
}

#[cfg(test)]
#[path = "tests/nav.rs"]
mod tests;

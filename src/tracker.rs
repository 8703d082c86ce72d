//! The visibility tracker: decides which section is "most in view".
//!
//! Sections are observed against a tracking band, a sub-region of the
//! document pane that excludes a few rows at the top (the header allowance)
//! and the bottom portion of the pane. The band biases activation toward
//! sections that have just scrolled under the header, which matches reading
//! order far better than largest-visible-area heuristics for tall sections.
//!
//! Observation is fire-and-forget: a registered section with no anchor in the
//! layout is skipped (warned once), and a batch in which nothing intersects
//! the band changes nothing, so the active section never flickers while the
//! reader is between sections.

use crate::document::SectionSpan;
use crate::registry::Registry;
use std::collections::HashSet;
use tracing::warn;

/// The sub-region of the pane used to decide which sections are "in view".
#[derive(Clone, Copy)]
pub struct Band {
    /// Rows excluded at the top of the pane.
    pub top: usize,
    /// Percentage of the pane excluded at the bottom.
    pub bottom_percent: usize,
}

impl Band {
    /// The band's row range within a pane of the given height.
    ///
    /// Returns `(first, end)` pane-relative rows; empty panes yield an empty
    /// range.
    #[must_use]
    pub fn rows(&self, pane_height: usize) -> (usize, usize) {
        let keep = 100_usize.saturating_sub(self.bottom_percent);
        let end = pane_height * keep / 100;
        (self.top.min(end), end)
    }
}

/// Publishes the section most in view, given the current scroll position.
pub struct ViewTracker {
    missing_warned: HashSet<String>,
}

impl ViewTracker {
    /// A tracker with no observations yet.
    #[must_use]
    pub fn new() -> Self {
        Self {
            missing_warned: HashSet::new(),
        }
    }

    /// Runs one observation batch and returns the section to activate.
    ///
    /// `spans` is the document's section geometry, `scroll` the pane's first
    /// visible document row. Among the sections intersecting the band, the
    /// one whose top edge is closest to the pane top wins; operation sections
    /// are mapped to their group's overview id before being returned. `None`
    /// means "no change": nothing intersected the band.
    pub fn observe(
        &mut self,
        registry: &Registry,
        spans: &[SectionSpan<'_>],
        scroll: usize,
        pane_height: usize,
        band: Band,
    ) -> Option<String> {
        self.check_integrity(registry, spans);

        let (band_top, band_end) = band.rows(pane_height);
        if band_top >= band_end {
            return None;
        }

        let mut best: Option<(usize, &str)> = None;
        for span in spans {
            if !registry.contains(span.id) {
                continue;
            }
            let intersects =
                span.start < scroll + band_end && span.end > scroll + band_top;
            if !intersects {
                continue;
            }
            let distance = span.start.abs_diff(scroll);
            if best.is_none_or(|(d, _)| distance < d) {
                best = Some((distance, span.id));
            }
        }

        best.map(|(_, id)| registry.menu_target(id).to_string())
    }

    /// Warns once per registered section that has no rendered anchor.
    fn check_integrity(&mut self, registry: &Registry, spans: &[SectionSpan<'_>]) {
        for section in registry.sections() {
            let present = spans.iter().any(|s| s.id == section.id);
            if !present && self.missing_warned.insert(section.id.clone()) {
                warn!(id = %section.id, "registered section has no anchor; it will never be observed");
            }
        }
    }
}

impl Default for ViewTracker {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "tests/tracker.rs"]
mod tests;

//! The core state machine bridging the document, the tracker and the input
//! loop.
//!
//! A TUI needs a single source of truth that can be interrogated and mutated
//! as the reader scrolls and jumps. All active-section writes funnel through
//! the navigation controller here, so the sidebar, the "on this page" list
//! and the search overlay can never disagree about where the reader is.

use crate::config::Config;
use crate::content::{self, NavGroup, Operation};
use crate::document::Layout;
use crate::nav::NavController;
use crate::registry::{Registry, RegistryError};
use crate::scroll::ScrollState;
use crate::search::{SearchEntry, SearchIndex};
use crate::tracker::{Band, ViewTracker};
use std::time::Instant;

#[derive(PartialEq)]
/// Determines which UI screen renders and how input is interpreted.
pub enum View {
    /// The three-column document browser.
    Browse,
    /// The search overlay on top of the browser.
    Search,
}

/// Central application state read by the renderer and driven by the loop.
pub struct AppState {
    /// Every registered section and group, in reading order.
    pub registry: Registry,
    /// The rendered document at the current wrap width.
    pub layout: Layout,
    /// Owner of the active section and suppression window.
    pub nav: NavController,
    /// Document pane scroll position.
    pub scroll: ScrollState,
    /// Flattened search targets.
    pub index: SearchIndex,
    /// Active UI screen determining input handling.
    pub view: View,
    /// Live query text while the search overlay is open.
    pub query: String,
    /// Selected row in the search results.
    pub selected: usize,
    config: Config,
    band: Band,
    tracker: ViewTracker,
    groups: Vec<NavGroup>,
    operations: Vec<Operation>,
    pane_height: usize,
}

impl AppState {
    /// Builds the whole pipeline: content tables, layout, registry, search
    /// index, controller.
    ///
    /// # Errors
    ///
    /// Returns a [`RegistryError`] when the content tables fail the anchor
    /// integrity check; callers report it before the terminal is acquired.
    pub fn new(config: Config) -> Result<Self, RegistryError> {
        let groups = content::nav_groups();
        let operations = content::operations();
        let layout = Layout::build(&groups, &operations, config.wrap_width);
        let registry = Registry::build(&groups, &operations, &layout)?;
        let index = SearchIndex::build(&groups, &operations);
        let nav = NavController::new(registry.first_id(), config.settle(), config.defer());
        let band = Band {
            top: config.band_top,
            bottom_percent: config.band_bottom_percent,
        };
        Ok(Self {
            registry,
            layout,
            nav,
            scroll: ScrollState::new(),
            index,
            view: View::Browse,
            query: String::new(),
            selected: 0,
            config,
            band,
            tracker: ViewTracker::new(),
            groups,
            operations,
            pane_height: 0,
        })
    }

    /// Rebuilds the layout when the pane's text width changes.
    pub fn ensure_layout(&mut self, text_width: usize) {
        let width = text_width.min(self.config.wrap_width).max(24);
        if self.layout.width() != width {
            self.layout = Layout::build(&self.groups, &self.operations, width);
        }
    }

    /// Records the document pane height from the last draw.
    pub fn set_pane_height(&mut self, height: usize) {
        self.pane_height = height;
    }

    /// One cooperative step: advance the scroll animation, fire a deferred
    /// deep link, and run a tracker observation unless suppressed.
    pub fn tick(&mut self, now: Instant) {
        self.scroll.tick(now);
        if let Some(id) = self.nav.take_due_fragment(now) {
            self.navigate(&id, now);
        }
        if !self.nav.is_suppressed(now) {
            let spans = self.layout.spans();
            if let Some(id) = self.tracker.observe(
                &self.registry,
                &spans,
                self.scroll.offset(),
                self.pane_height,
                self.band,
            ) {
                self.nav.record_observation(&id, now);
            }
        }
    }

    /// Jump to a section: validates, activates, and starts the smooth scroll.
    pub fn navigate(&mut self, id: &str, now: Instant) {
        if let Some(request) = self.nav.navigate_to(&self.registry, id, now) {
            if let Some(row) = self.layout.anchor_row(&request.target_id) {
                self.scroll
                    .animate_to(row, self.max_scroll(), now, self.config.scroll_duration());
            }
        }
    }

    /// Hand an incoming `--at` fragment to the controller.
    pub fn handle_incoming_fragment(&mut self, raw: &str, now: Instant) {
        self.nav.handle_incoming_fragment(raw, now);
    }

    /// Manual scroll; the tracker keeps publishing while the reader drives.
    pub fn scroll_by(&mut self, delta: isize) {
        let max = self.max_scroll();
        self.scroll.scroll_by(delta, max);
    }

    /// Manual jump to the top or bottom of the document.
    pub fn scroll_to_edge(&mut self, bottom: bool) {
        let max = self.max_scroll();
        let row = if bottom { max } else { 0 };
        self.scroll.jump_to(row, max);
    }

    /// Rows of one page for `PageUp`/`PageDown`.
    #[must_use]
    pub fn page(&self) -> isize {
        isize::try_from(self.pane_height.max(1)).unwrap_or(isize::MAX)
    }

    /// Jump to the menu section after the active one.
    pub fn next_section(&mut self, now: Instant) {
        if let Some(id) = self.registry.next_menu_id(self.nav.active_id()) {
            let id = id.to_string();
            self.navigate(&id, now);
        }
    }

    /// Jump to the menu section before the active one.
    pub fn prev_section(&mut self, now: Instant) {
        if let Some(id) = self.registry.prev_menu_id(self.nav.active_id()) {
            let id = id.to_string();
            self.navigate(&id, now);
        }
    }

    /// Open the search overlay with a fresh query.
    pub fn open_search(&mut self) {
        self.view = View::Search;
        self.query.clear();
        self.selected = 0;
    }

    /// Close the overlay, discarding the query.
    pub fn close_search(&mut self) {
        self.view = View::Browse;
        self.query.clear();
        self.selected = 0;
    }

    /// Ranked results for the live query.
    #[must_use]
    pub fn search_results(&self) -> Vec<&SearchEntry> {
        self.index.filter(&self.query)
    }

    /// Append to the query, resetting the selection.
    pub fn push_query(&mut self, c: char) {
        self.query.push(c);
        self.selected = 0;
    }

    /// Delete the last query character, resetting the selection.
    pub fn pop_query(&mut self) {
        self.query.pop();
        self.selected = 0;
    }

    /// Move the result selection, clamped to the result count.
    pub fn move_selection(&mut self, down: bool) {
        let len = self.search_results().len();
        if len == 0 {
            self.selected = 0;
            return;
        }
        if down {
            self.selected = (self.selected + 1).min(len - 1);
        } else {
            self.selected = self.selected.saturating_sub(1);
        }
    }

    /// Navigate to the selected result and close the overlay.
    pub fn choose_selected(&mut self, now: Instant) {
        let target = self
            .search_results()
            .get(self.selected)
            .map(|entry| entry.id.clone());
        if let Some(id) = target {
            self.navigate(&id, now);
        }
        self.close_search();
    }

    fn max_scroll(&self) -> usize {
        self.layout.height().saturating_sub(self.pane_height)
    }
}

#[cfg(test)]
#[path = "tests/app_state.rs"]
mod tests;

//! The scroll primitive: the pane's offset and the in-flight smooth scroll.
//!
//! Animations are pure functions of the current instant so the event loop
//! never blocks on them; each tick samples the eased position and the
//! animation is dropped once its duration has elapsed. Manual scrolling
//! cancels whatever animation is in flight.

use std::time::{Duration, Instant};

/// An in-flight smooth scroll between two document rows.
struct Animation {
    from: f64,
    to: f64,
    started: Instant,
    duration: Duration,
}

impl Animation {
    /// Eased offset at `now` (cubic ease-out).
    fn offset_at(&self, now: Instant) -> f64 {
        let elapsed = now.saturating_duration_since(self.started);
        if elapsed >= self.duration || self.duration.is_zero() {
            return self.to;
        }
        let t = elapsed.as_secs_f64() / self.duration.as_secs_f64();
        let eased = 1.0 - (1.0 - t).powi(3);
        (self.to - self.from).mul_add(eased, self.from)
    }

    fn finished(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.started) >= self.duration
    }
}

/// The document pane's scroll position.
pub struct ScrollState {
    offset: f64,
    animation: Option<Animation>,
}

impl ScrollState {
    /// A pane scrolled to the top with nothing in flight.
    #[must_use]
    pub fn new() -> Self {
        Self {
            offset: 0.0,
            animation: None,
        }
    }

    /// Current offset as a whole row.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn offset(&self) -> usize {
        self.offset.round().max(0.0) as usize
    }

    /// Whether a smooth scroll is still in flight.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    /// Manual scroll by a row delta, cancelling any animation.
    #[allow(clippy::cast_precision_loss)]
    pub fn scroll_by(&mut self, delta: isize, max: usize) {
        self.animation = None;
        let target = max_signed(self.offset()).saturating_add(delta);
        self.offset = target.clamp(0, max_signed(max)) as f64;
    }

    /// Jump straight to a row, cancelling any animation.
    #[allow(clippy::cast_precision_loss)]
    pub fn jump_to(&mut self, row: usize, max: usize) {
        self.animation = None;
        self.offset = row.min(max) as f64;
    }

    /// Start a smooth scroll toward a row, replacing any animation.
    #[allow(clippy::cast_precision_loss)]
    pub fn animate_to(&mut self, row: usize, max: usize, now: Instant, duration: Duration) {
        self.animation = Some(Animation {
            from: self.offset,
            to: row.min(max) as f64,
            started: now,
            duration,
        });
    }

    /// Advance the animation, dropping it once it has settled.
    pub fn tick(&mut self, now: Instant) {
        if let Some(animation) = &self.animation {
            self.offset = animation.offset_at(now);
            if animation.finished(now) {
                self.animation = None;
            }
        }
    }
}

impl Default for ScrollState {
    fn default() -> Self {
        Self::new()
    }
}

fn max_signed(value: usize) -> isize {
    isize::try_from(value).unwrap_or(isize::MAX)
}

#[cfg(test)]
#[path = "tests/scroll.rs"]
mod tests;

//! Scroll Effects
//!
//! Maps successive scroll offsets to the header and back-to-top state.

use crate::config::{BACK_TO_TOP_AFTER, HEADER_HIDE_AFTER, HEADER_SCROLLED_AT};

/// Presentation derived from one scroll offset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScrollEffects {
    /// Header gets `is-scrolled`
    pub scrolled: bool,
    /// Header slides out of view
    pub header_hidden: bool,
    /// Back-to-top gets `is-visible`
    pub back_to_top: bool,
}

/// Remembers the previous offset so direction can be told apart
#[derive(Debug, Clone, Copy, Default)]
pub struct ScrollTracker {
    last_y: f64,
}

impl ScrollTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn update(&mut self, y: f64) -> ScrollEffects {
        let effects = ScrollEffects {
            scrolled: y > HEADER_SCROLLED_AT,
            header_hidden: y > HEADER_HIDE_AFTER && y > self.last_y,
            back_to_top: y > BACK_TO_TOP_AFTER,
        };
        self.last_y = y;
        effects
    }
}

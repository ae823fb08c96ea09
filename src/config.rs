//! Site Constants
//!
//! Storage keys, thresholds and delays used across features.

/// Storage key holding the theme tag (`light` / `dark`)
pub const THEME_KEY: &str = "jc-theme";
/// Storage key holding the JSON-encoded cart
pub const CART_KEY: &str = "jc-cart";

/// Header gets `is-scrolled` past this offset (px)
pub const HEADER_SCROLLED_AT: f64 = 24.0;
/// Header may hide on downward scroll only past this offset (px)
pub const HEADER_HIDE_AFTER: f64 = 100.0;
/// Back-to-top control becomes visible past this offset (px)
pub const BACK_TO_TOP_AFTER: f64 = 500.0;

/// Loading screen: delay before the `loaded` class, then before removal
pub const LOADING_FADE_DELAY_MS: u32 = 1_000;
pub const LOADING_REMOVE_DELAY_MS: u32 = 500;

/// Toast timeline
pub const TOAST_SHOW_DELAY_MS: u32 = 10;
pub const TOAST_VISIBLE_MS: u32 = 3_000;
pub const TOAST_FADE_MS: u32 = 300;

/// Delay before a submitted contact form is cleared
pub const FORM_RESET_DELAY_MS: u32 = 3_000;

/// Minimum trimmed lengths (in characters)
pub const NAME_MIN_CHARS: usize = 2;
pub const MESSAGE_MIN_CHARS: usize = 10;

/// Log records kept in memory
pub const LOG_CAPACITY: usize = 200;

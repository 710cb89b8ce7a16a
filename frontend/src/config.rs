use log::Level;

/// Address every inquiry is handed off to.
pub const INQUIRY_DESTINATION: &str = "signal@zerobridge.studio";

/// Header switches to its compact look once the page is scrolled past this.
pub const SCROLL_THRESHOLD_PX: f64 = 50.0;

/// Clearance for the fixed header when jumping to an anchor.
pub const ANCHOR_OFFSET_PX: f64 = 80.0;

pub const REVEAL_THRESHOLD: f64 = 0.1;
pub const REVEAL_DURATION_MS: u32 = 1000;
pub const REVEAL_EASING: &str = "ease-out";
pub const REVEAL_OFFSET_PX: u32 = 40;

pub const CLOCK_TICK_MS: u32 = 1000;
pub const AUTOPLAY_RETRY_MS: u32 = 1000;

pub const HERO_VIDEO_URL: &str = "https://cdn.jsdelivr.net/gh/aamir-bash/assets/hero.mp4";

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug  // Verbose console output when running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

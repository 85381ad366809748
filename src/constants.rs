// Web shell tuning: DOM hooks and the click voice.

// Element the wheel is rendered on and receives pointer events from
pub const WHEEL_ELEMENT_ID: &str = "wheel";

// Click voice routing: noise -> band-pass -> gain -> destination
pub const CLICK_FILTER_HZ: f32 = 2800.0;
pub const CLICK_FILTER_Q: f32 = 0.6;
pub const CLICK_GAIN: f32 = 0.18;

// Clicks closer together than this (audio-clock seconds) are dropped
pub const CLICK_MIN_GAP_SEC: f64 = 0.004;

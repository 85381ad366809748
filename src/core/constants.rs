use std::f64::consts::PI;

// Motion tuning shared by the drag and coast paths. Angles in radians,
// velocities in radians per millisecond, times in milliseconds.

// Ticks
pub const TICK_SPACING: f64 = PI / 12.0; // 15 degrees between clicks

// Coasting
pub const FRICTION: f64 = 0.92; // velocity ratio kept per nominal frame
pub const NOMINAL_FRAME_MS: f64 = 16.0; // frame length the friction ratio is expressed against
pub const COAST_START_MIN_VELOCITY: f64 = 0.0006; // below this a coast never starts
pub const COAST_STOP_VELOCITY: f64 = 0.0004; // coasting ends once |velocity| falls to this

// Drag
pub const RELEASE_MIN_VELOCITY: f64 = 0.0006; // release speed needed to hand off to coasting

// Elapsed time is clamped to this before dividing or decaying by it
pub const MIN_FRAME_DT_MS: f64 = 1.0;

pub mod angle;
pub mod click;
pub mod constants;
pub mod drag;
pub mod inertia;
pub mod motion;
pub mod sink;
pub mod ticks;

pub use angle::*;
pub use constants::*;
pub use drag::*;
pub use inertia::*;
pub use motion::*;
pub use sink::*;
pub use ticks::*;

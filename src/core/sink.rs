//! Seams between the motion core and whatever hosts it.

/// Reflects the wheel angle (radians, unbounded) visually.
pub trait RenderSink {
    fn render(&mut self, angle: f64);
}

/// Plays one percussive click. Implementations drop the click silently when
/// audio is unavailable.
pub trait AudioSink {
    fn click(&mut self);
}

/// Identifies one requested frame so a stale callback can be recognised.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FrameHandle(pub i32);

/// Display-aligned frame timer. The host calls back into the wheel with the
/// handle returned here and the frame timestamp in milliseconds.
pub trait FrameScheduler {
    fn request_frame(&mut self) -> FrameHandle;
    fn cancel_frame(&mut self, handle: FrameHandle);
}

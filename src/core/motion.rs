use super::sink::{AudioSink, RenderSink};
use super::ticks::{TickAccumulator, TickBurst};

/// Result of one angle update.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AngleStep {
    pub delta: f64,
    pub ticks: TickBurst,
}

/// The wheel's single source of truth: accumulated angle, current angular
/// velocity and the tick residual. Only the active drag or coast writes it.
#[derive(Clone, Debug, Default)]
pub struct MotionState {
    angle: f64,
    velocity: f64,
    ticks: TickAccumulator,
}

impl MotionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Total rotation in radians since start, not wrapped.
    #[inline]
    pub fn angle(&self) -> f64 {
        self.angle
    }

    /// Radians per millisecond, signed.
    #[inline]
    pub fn velocity(&self) -> f64 {
        self.velocity
    }

    #[inline]
    pub fn set_velocity(&mut self, velocity: f64) {
        self.velocity = velocity;
    }

    #[inline]
    pub fn tick_residual(&self) -> f64 {
        self.ticks.residual()
    }

    /// Moves the wheel to `next`, renders it, and plays one click per tick
    /// the movement crossed. Rendering and tick evaluation always happen
    /// together.
    pub fn apply_angle<R, A>(&mut self, next: f64, render: &mut R, audio: &mut A) -> AngleStep
    where
        R: RenderSink + ?Sized,
        A: AudioSink + ?Sized,
    {
        let delta = next - self.angle;
        self.angle = next;
        render.render(next);
        let ticks = self.ticks.accumulate(delta);
        for _ in 0..ticks.count {
            audio.click();
        }
        if !ticks.is_empty() {
            log::trace!("[wheel] {} tick(s) {:?}", ticks.count, ticks.direction);
        }
        AngleStep { delta, ticks }
    }
}

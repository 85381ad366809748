//! Post-release coasting under frame-rate independent friction.

use super::constants::{
    COAST_START_MIN_VELOCITY, COAST_STOP_VELOCITY, FRICTION, MIN_FRAME_DT_MS, NOMINAL_FRAME_MS,
};
use super::motion::MotionState;
use super::sink::{AudioSink, FrameHandle, FrameScheduler, RenderSink};

#[derive(Clone, Copy, Debug, PartialEq)]
enum Phase {
    Idle,
    Coasting {
        last_frame_ms: f64,
        pending: FrameHandle,
    },
}

/// What a delivered frame did.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CoastFrame {
    /// Not the frame we are waiting for (cancelled, duplicate or idle).
    Ignored,
    /// Wheel advanced and another frame was requested.
    Continued { delta: f64 },
    /// Wheel advanced for the last time; velocity is now zero.
    Stopped { delta: f64 },
}

/// Velocity multiplier for `dt_ms` of coasting.
#[inline]
pub fn decay_factor(dt_ms: f64) -> f64 {
    FRICTION.powf(dt_ms / NOMINAL_FRAME_MS)
}

#[derive(Clone, Debug)]
pub struct InertiaSimulator {
    phase: Phase,
}

impl Default for InertiaSimulator {
    fn default() -> Self {
        Self::new()
    }
}

impl InertiaSimulator {
    pub fn new() -> Self {
        Self { phase: Phase::Idle }
    }

    #[inline]
    pub fn is_coasting(&self) -> bool {
        matches!(self.phase, Phase::Coasting { .. })
    }

    /// Frame the simulator is currently waiting on, if any.
    #[inline]
    pub fn pending_frame(&self) -> Option<FrameHandle> {
        match self.phase {
            Phase::Coasting { pending, .. } => Some(pending),
            Phase::Idle => None,
        }
    }

    /// Begins coasting at `velocity` unless it is too slow to bother.
    /// Returns whether a coast is now running.
    pub fn start<S>(&mut self, velocity: f64, now_ms: f64, scheduler: &mut S) -> bool
    where
        S: FrameScheduler + ?Sized,
    {
        if velocity.abs() < COAST_START_MIN_VELOCITY {
            return false;
        }
        self.stop(scheduler);
        let pending = scheduler.request_frame();
        self.phase = Phase::Coasting {
            last_frame_ms: now_ms,
            pending,
        };
        log::debug!("[coast] start velocity={:.5} rad/ms", velocity);
        true
    }

    /// Cancels any scheduled frame. Safe to call while idle.
    pub fn stop<S>(&mut self, scheduler: &mut S)
    where
        S: FrameScheduler + ?Sized,
    {
        if let Phase::Coasting { pending, .. } = self.phase {
            scheduler.cancel_frame(pending);
            self.phase = Phase::Idle;
            log::debug!("[coast] cancelled");
        }
    }

    /// Advances one simulation frame if `handle` is the frame we asked for.
    pub fn frame<R, A, S>(
        &mut self,
        handle: FrameHandle,
        now_ms: f64,
        motion: &mut MotionState,
        render: &mut R,
        audio: &mut A,
        scheduler: &mut S,
    ) -> CoastFrame
    where
        R: RenderSink + ?Sized,
        A: AudioSink + ?Sized,
        S: FrameScheduler + ?Sized,
    {
        let last_frame_ms = match self.phase {
            Phase::Coasting {
                last_frame_ms,
                pending,
            } if pending == handle => last_frame_ms,
            _ => return CoastFrame::Ignored,
        };

        let dt = (now_ms - last_frame_ms).max(MIN_FRAME_DT_MS);
        let velocity = motion.velocity();
        let next_angle = motion.angle() + velocity * dt;
        let velocity = velocity * decay_factor(dt);
        motion.set_velocity(velocity);

        let step = motion.apply_angle(next_angle, render, audio);
        log::trace!(
            "[coast] dt={:.1}ms angle={:.4} velocity={:.5}",
            dt,
            next_angle,
            velocity
        );

        if velocity.abs() > COAST_STOP_VELOCITY {
            let pending = scheduler.request_frame();
            self.phase = Phase::Coasting {
                last_frame_ms: now_ms,
                pending,
            };
            CoastFrame::Continued { delta: step.delta }
        } else {
            motion.set_velocity(0.0);
            self.phase = Phase::Idle;
            log::debug!("[coast] settled at angle={:.4}", next_angle);
            CoastFrame::Stopped { delta: step.delta }
        }
    }
}

//! Pointer gestures in, wheel motion out.
//!
//! `DragController` owns the motion state, the coasting simulator and the
//! three output collaborators. A drag and a coast never run at the same
//! time: pointer-down cancels the coast before anything else happens, and a
//! coast only starts from a release.

use glam::DVec2;

use super::angle::{normalize_delta, pointer_angle};
use super::constants::{MIN_FRAME_DT_MS, RELEASE_MIN_VELOCITY};
use super::inertia::{CoastFrame, InertiaSimulator};
use super::motion::{AngleStep, MotionState};
use super::sink::{AudioSink, FrameHandle, FrameScheduler, RenderSink};

/// One pointer reading: where the pointer is, where the wheel's center is
/// at that moment, and when it happened (milliseconds).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerSample {
    pub position: DVec2,
    pub center: DVec2,
    pub time_ms: f64,
}

impl PointerSample {
    pub fn new(position: DVec2, center: DVec2, time_ms: f64) -> Self {
        Self {
            position,
            center,
            time_ms,
        }
    }

    #[inline]
    pub fn angle(&self) -> f64 {
        pointer_angle(self.position, self.center)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
struct DragSession {
    last_pointer_angle: f64,
    last_time_ms: f64,
}

/// How a pointer-up or cancel was handled.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Release {
    /// No drag was active; nothing changed.
    Ignored,
    /// Drag ended slowly; the wheel rests where it is.
    Rest,
    /// Drag ended fast enough to keep spinning.
    Coasting,
}

impl Release {
    /// Whether a drag actually ended, i.e. pointer capture should be released.
    #[inline]
    pub fn ended_drag(self) -> bool {
        !matches!(self, Release::Ignored)
    }
}

pub struct DragController<R, A, S> {
    motion: MotionState,
    inertia: InertiaSimulator,
    session: Option<DragSession>,
    render: R,
    audio: A,
    scheduler: S,
}

impl<R, A, S> DragController<R, A, S>
where
    R: RenderSink,
    A: AudioSink,
    S: FrameScheduler,
{
    /// Builds an idle wheel at angle zero and renders it once.
    pub fn new(render: R, audio: A, scheduler: S) -> Self {
        let mut controller = Self {
            motion: MotionState::new(),
            inertia: InertiaSimulator::new(),
            session: None,
            render,
            audio,
            scheduler,
        };
        controller
            .motion
            .apply_angle(0.0, &mut controller.render, &mut controller.audio);
        controller
    }

    #[inline]
    pub fn motion(&self) -> &MotionState {
        &self.motion
    }

    #[inline]
    pub fn is_dragging(&self) -> bool {
        self.session.is_some()
    }

    #[inline]
    pub fn is_coasting(&self) -> bool {
        self.inertia.is_coasting()
    }

    pub fn render_sink(&self) -> &R {
        &self.render
    }

    pub fn audio_sink(&self) -> &A {
        &self.audio
    }

    pub fn audio_sink_mut(&mut self) -> &mut A {
        &mut self.audio
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    /// Starts a drag, cancelling any coast first. A second pointer-down
    /// while already dragging restarts the session from the new sample.
    pub fn on_pointer_down(&mut self, sample: PointerSample) {
        self.inertia.stop(&mut self.scheduler);
        self.session = Some(DragSession {
            last_pointer_angle: sample.angle(),
            last_time_ms: sample.time_ms,
        });
        log::debug!("[drag] begin at angle={:.4}", self.motion.angle());
    }

    /// Rotates the wheel by the pointer's angular step. Returns `None` when
    /// no drag is active.
    pub fn on_pointer_move(&mut self, sample: PointerSample) -> Option<AngleStep> {
        let session = self.session.as_mut()?;

        let pointer_angle = sample.angle();
        let delta = normalize_delta(pointer_angle - session.last_pointer_angle);
        session.last_pointer_angle = pointer_angle;

        let dt = (sample.time_ms - session.last_time_ms).max(MIN_FRAME_DT_MS);
        session.last_time_ms = sample.time_ms;

        let next = self.motion.angle() + delta;
        let step = self
            .motion
            .apply_angle(next, &mut self.render, &mut self.audio);
        self.motion.set_velocity(delta / dt);
        Some(step)
    }

    /// Ends the drag and decides whether to coast.
    pub fn on_pointer_up(&mut self, time_ms: f64) -> Release {
        if self.session.take().is_none() {
            return Release::Ignored;
        }
        let velocity = self.motion.velocity();
        if velocity.abs() > RELEASE_MIN_VELOCITY
            && self.inertia.start(velocity, time_ms, &mut self.scheduler)
        {
            Release::Coasting
        } else {
            log::debug!("[drag] end at rest velocity={:.5}", velocity);
            Release::Rest
        }
    }

    /// Pointer cancel ends a drag exactly like a release.
    pub fn on_pointer_cancel(&mut self, time_ms: f64) -> Release {
        self.on_pointer_up(time_ms)
    }

    /// Delivers a scheduled frame to the coasting simulator.
    pub fn on_frame(&mut self, handle: FrameHandle, now_ms: f64) -> CoastFrame {
        self.inertia.frame(
            handle,
            now_ms,
            &mut self.motion,
            &mut self.render,
            &mut self.audio,
            &mut self.scheduler,
        )
    }
}

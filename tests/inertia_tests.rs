// Host-side tests for motion state updates and post-release coasting.

use clickwheel::core::{
    decay_factor, AudioSink, CoastFrame, FrameHandle, FrameScheduler, InertiaSimulator,
    MotionState, RenderSink, FRICTION, TICK_SPACING,
};

#[derive(Default)]
struct Angles(Vec<f64>);

impl RenderSink for Angles {
    fn render(&mut self, angle: f64) {
        self.0.push(angle);
    }
}

#[derive(Default)]
struct Clicks(usize);

impl AudioSink for Clicks {
    fn click(&mut self) {
        self.0 += 1;
    }
}

#[derive(Default)]
struct Frames {
    next: i32,
    requested: Vec<FrameHandle>,
    cancelled: Vec<FrameHandle>,
}

impl FrameScheduler for Frames {
    fn request_frame(&mut self) -> FrameHandle {
        self.next += 1;
        let h = FrameHandle(self.next);
        self.requested.push(h);
        h
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        self.cancelled.push(handle);
    }
}

struct Rig {
    motion: MotionState,
    inertia: InertiaSimulator,
    angles: Angles,
    clicks: Clicks,
    frames: Frames,
}

impl Rig {
    fn new() -> Self {
        Self {
            motion: MotionState::new(),
            inertia: InertiaSimulator::new(),
            angles: Angles::default(),
            clicks: Clicks::default(),
            frames: Frames::default(),
        }
    }

    fn coast(&mut self, velocity: f64, now_ms: f64) -> bool {
        self.motion.set_velocity(velocity);
        self.inertia.start(velocity, now_ms, &mut self.frames)
    }

    fn frame(&mut self, handle: FrameHandle, now_ms: f64) -> CoastFrame {
        self.inertia.frame(
            handle,
            now_ms,
            &mut self.motion,
            &mut self.angles,
            &mut self.clicks,
            &mut self.frames,
        )
    }

    /// Runs pending frames 16ms apart until the coast stops.
    fn run_to_rest(&mut self, mut now_ms: f64) -> Vec<f64> {
        let mut velocities = Vec::new();
        while let Some(h) = self.inertia.pending_frame() {
            now_ms += 16.0;
            self.frame(h, now_ms);
            velocities.push(self.motion.velocity());
            assert!(velocities.len() < 10_000, "coast never settled");
        }
        velocities
    }
}

#[test]
fn apply_angle_reports_delta_and_clicks() {
    let mut motion = MotionState::new();
    let mut angles = Angles::default();
    let mut clicks = Clicks::default();
    let step = motion.apply_angle(2.5 * TICK_SPACING, &mut angles, &mut clicks);
    assert!((step.delta - 2.5 * TICK_SPACING).abs() < 1e-12);
    assert_eq!(step.ticks.count, 2);
    assert_eq!(clicks.0, 2);
    assert_eq!(angles.0, vec![2.5 * TICK_SPACING]);
    assert!((motion.tick_residual() - 0.5 * TICK_SPACING).abs() < 1e-9);
}

#[test]
fn apply_angle_does_not_wrap() {
    let mut motion = MotionState::new();
    let mut angles = Angles::default();
    let mut clicks = Clicks::default();
    for i in 1..=30 {
        motion.apply_angle(f64::from(i), &mut angles, &mut clicks);
    }
    assert_eq!(motion.angle(), 30.0);
}

#[test]
fn decay_factor_is_friction_per_nominal_frame() {
    assert!((decay_factor(16.0) - FRICTION).abs() < 1e-12);
    assert!((decay_factor(32.0) - FRICTION * FRICTION).abs() < 1e-12);
    // Two 8ms frames decay as much as one 16ms frame
    assert!((decay_factor(8.0) * decay_factor(8.0) - decay_factor(16.0)).abs() < 1e-12);
}

#[test]
fn slow_velocity_never_starts_coasting() {
    let mut rig = Rig::new();
    assert!(!rig.coast(0.0003, 0.0));
    assert!(!rig.inertia.is_coasting());
    assert!(rig.frames.requested.is_empty());
}

#[test]
fn release_scenario_stops_after_eleven_frames() {
    let mut rig = Rig::new();
    assert!(rig.coast(0.001, 0.0));
    let velocities = rig.run_to_rest(0.0);
    assert_eq!(velocities.len(), 11);
    for (n, v) in velocities.iter().take(10).enumerate() {
        let expected = 0.001 * FRICTION.powi(n as i32 + 1);
        assert!((v - expected).abs() < 1e-12, "frame {n}: {v} vs {expected}");
    }
    assert_eq!(rig.motion.velocity(), 0.0);
    assert!(!rig.inertia.is_coasting());
}

#[test]
fn coasting_velocity_decays_monotonically() {
    let mut rig = Rig::new();
    rig.coast(-0.02, 100.0);
    let mut prev = 0.02;
    let mut now = 100.0;
    while let Some(h) = rig.inertia.pending_frame() {
        now += 16.0;
        rig.frame(h, now);
        let speed = rig.motion.velocity().abs();
        assert!(speed <= prev);
        prev = speed;
    }
    assert!(rig.motion.angle() < 0.0);
    assert!(rig.clicks.0 > 0);
}

#[test]
fn coasting_advances_by_velocity_times_dt() {
    let mut rig = Rig::new();
    rig.coast(0.01, 0.0);
    let h = rig.inertia.pending_frame().unwrap();
    let out = rig.frame(h, 20.0);
    match out {
        CoastFrame::Continued { delta } => assert!((delta - 0.2).abs() < 1e-12),
        other => panic!("unexpected {other:?}"),
    }
    assert!((rig.motion.velocity() - 0.01 * decay_factor(20.0)).abs() < 1e-15);
}

#[test]
fn zero_or_negative_frame_time_is_clamped_to_one_ms() {
    let mut rig = Rig::new();
    rig.coast(0.01, 50.0);
    let h = rig.inertia.pending_frame().unwrap();
    // Frame timestamp earlier than the start time
    let out = rig.frame(h, 40.0);
    match out {
        CoastFrame::Continued { delta } => assert!((delta - 0.01).abs() < 1e-12),
        other => panic!("unexpected {other:?}"),
    }
    assert!(rig.motion.velocity().is_finite());
}

#[test]
fn stale_or_cancelled_frames_are_ignored() {
    let mut rig = Rig::new();
    rig.coast(0.01, 0.0);
    let h = rig.inertia.pending_frame().unwrap();
    assert_eq!(rig.frame(FrameHandle(h.0 + 100), 16.0), CoastFrame::Ignored);

    rig.inertia.stop(&mut rig.frames);
    assert_eq!(rig.frames.cancelled, vec![h]);
    let angle = rig.motion.angle();
    assert_eq!(rig.frame(h, 32.0), CoastFrame::Ignored);
    assert_eq!(rig.motion.angle(), angle);
}

#[test]
fn stop_while_idle_is_a_no_op() {
    let mut rig = Rig::new();
    rig.inertia.stop(&mut rig.frames);
    rig.inertia.stop(&mut rig.frames);
    assert!(rig.frames.cancelled.is_empty());
    assert!(!rig.inertia.is_coasting());
}

#[test]
fn restarting_a_coast_cancels_the_previous_frame() {
    let mut rig = Rig::new();
    rig.coast(0.01, 0.0);
    let first = rig.inertia.pending_frame().unwrap();
    rig.coast(0.02, 5.0);
    let second = rig.inertia.pending_frame().unwrap();
    assert_ne!(first, second);
    assert_eq!(rig.frames.cancelled, vec![first]);
    assert_eq!(rig.frame(first, 16.0), CoastFrame::Ignored);
}

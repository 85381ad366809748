//! Turns continuous rotation into evenly spaced click events.

use super::constants::TICK_SPACING;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Spin {
    Clockwise,
    CounterClockwise,
}

/// Ticks produced by a single `accumulate` call. All ticks in a burst share
/// the direction of the delta that produced them.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TickBurst {
    pub count: u32,
    pub direction: Spin,
}

impl TickBurst {
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }
}

#[derive(Clone, Debug)]
pub struct TickAccumulator {
    residual: f64,
    spacing: f64,
}

impl Default for TickAccumulator {
    fn default() -> Self {
        Self::new()
    }
}

impl TickAccumulator {
    pub fn new() -> Self {
        Self {
            residual: 0.0,
            spacing: TICK_SPACING,
        }
    }

    /// Rotation carried over towards the next tick, in radians.
    #[inline]
    pub fn residual(&self) -> f64 {
        self.residual
    }

    #[inline]
    pub fn spacing(&self) -> f64 {
        self.spacing
    }

    /// Adds `delta` and spends whole tick spacings from the residual.
    ///
    /// The spending direction is fixed once per call from the sign of
    /// `delta`. While the residual stays under one spacing between calls,
    /// crossing the threshold is only possible in that direction.
    pub fn accumulate(&mut self, delta: f64) -> TickBurst {
        self.residual += delta;
        let direction = if delta < 0.0 {
            Spin::CounterClockwise
        } else {
            Spin::Clockwise
        };
        // Whole spacings by division; an exact multiple must count fully.
        let whole = (self.residual.abs() / self.spacing).floor();
        if whole < 1.0 || !whole.is_finite() {
            return TickBurst {
                count: 0,
                direction,
            };
        }
        let step = match direction {
            Spin::Clockwise => self.spacing,
            Spin::CounterClockwise => -self.spacing,
        };
        self.residual -= step * whole;
        TickBurst {
            count: whole as u32,
            direction,
        }
    }
}

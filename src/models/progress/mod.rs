// Step progress model
// Static snapshot shown by the progress ring and the goal/achievement cards

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StepProgress {
    /// Steps walked so far
    pub current: u32,
    /// Daily step target
    pub goal: u32,
    /// Days the goal has been reached
    pub streak_days: u32,
}

impl Default for StepProgress {
    fn default() -> Self {
        Self {
            current: 2400,
            goal: 5000,
            streak_days: 20,
        }
    }
}

impl StepProgress {
    pub fn new(current: u32, goal: u32, streak_days: u32) -> Self {
        Self {
            current,
            goal,
            streak_days,
        }
    }

    /// Share of the goal reached, clamped to `[0, 1]`. A zero goal counts as no progress.
    pub fn fraction(&self) -> f32 {
        if self.goal == 0 {
            return 0.0;
        }
        (self.current as f32 / self.goal as f32).clamp(0.0, 1.0)
    }

    pub fn remaining(&self) -> u32 {
        self.goal.saturating_sub(self.current)
    }

    pub fn goal_reached(&self) -> bool {
        self.goal > 0 && self.current >= self.goal
    }
}

/// Fixed geometry of the progress ring.
///
/// The circumference is derived once at construction and reused for every
/// frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RingGeometry {
    pub radius: f32,
    pub stroke_width: f32,
    /// Side length of the square canvas the ring is drawn in
    pub canvas_size: f32,
    circumference: f32,
}

impl RingGeometry {
    pub const RADIUS: f32 = 70.0;
    pub const STROKE_WIDTH: f32 = 10.0;
    pub const CANVAS_SIZE: f32 = 154.0;

    pub fn new(radius: f32, stroke_width: f32, canvas_size: f32) -> Self {
        Self {
            radius,
            stroke_width,
            canvas_size,
            circumference: 2.0 * std::f32::consts::PI * radius,
        }
    }

    pub fn standard() -> Self {
        Self::new(Self::RADIUS, Self::STROKE_WIDTH, Self::CANVAS_SIZE)
    }

    pub fn circumference(&self) -> f32 {
        self.circumference
    }

    /// Length of the visible arc for the given progress.
    pub fn arc_length(&self, progress: &StepProgress) -> f32 {
        self.circumference * progress.fraction()
    }

    /// Angle swept by the visible arc, in radians.
    pub fn sweep_radians(&self, progress: &StepProgress) -> f32 {
        if self.radius <= 0.0 {
            return 0.0;
        }
        self.arc_length(progress) / self.radius
    }
}

impl Default for RingGeometry {
    fn default() -> Self {
        Self::standard()
    }
}

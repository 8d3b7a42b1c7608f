//! Gesture-driven bottom sheet with multiple snap points.
//!
//! The sheet rests at one of a fixed set of snap points, each a fraction of
//! the screen height measured from the bottom. Releasing a drag moves the
//! sheet one snap point in the drag direction when the drag was long or fast
//! enough, otherwise it springs back to where it was.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Drag distance in pixels that commits a snap change.
pub const DISTANCE_THRESHOLD: f32 = 100.0;

/// Release velocity in pixels per millisecond that commits a snap change.
pub const VELOCITY_THRESHOLD: f32 = 0.5;

/// Resting positions of the sheet, as fractions of screen height.
///
/// Serialized as a plain list and validated on load like [`SnapPoints::new`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<f32>", into = "Vec<f32>")]
pub struct SnapPoints {
    points: Vec<f32>,
}

impl SnapPoints {
    /// Create snap points from strictly increasing fractions in `(0, 1]`.
    pub fn new(points: Vec<f32>) -> Result<Self, SheetError> {
        if points.is_empty() {
            return Err(SheetError::EmptySnapPoints);
        }
        if let Some(&bad) = points.iter().find(|p| !(**p > 0.0 && **p <= 1.0)) {
            return Err(SheetError::OutOfRange(bad));
        }
        if points.windows(2).any(|w| w[0] >= w[1]) {
            return Err(SheetError::NotAscending);
        }
        Ok(Self { points })
    }

    /// Fraction of screen height for a snap index.
    pub fn get(&self, index: usize) -> Option<f32> {
        self.points.get(index).copied()
    }

    /// Number of snap points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always false; snap points are never empty.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

impl TryFrom<Vec<f32>> for SnapPoints {
    type Error = SheetError;

    fn try_from(points: Vec<f32>) -> Result<Self, Self::Error> {
        Self::new(points)
    }
}

impl From<SnapPoints> for Vec<f32> {
    fn from(snap_points: SnapPoints) -> Self {
        snap_points.points
    }
}

impl Default for SnapPoints {
    fn default() -> Self {
        Self {
            points: vec![0.25, 0.5, 0.9],
        }
    }
}

/// Where the sheet is resting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SheetState {
    /// Off screen
    #[default]
    Closed,
    /// Resting at a snap index
    Snapped(usize),
}

/// Bottom sheet state machine.
#[derive(Debug, Clone)]
pub struct BottomSheet {
    snap_points: SnapPoints,
    state: SheetState,
    /// Whether dragging down from the lowest snap point closes the sheet
    dismissible: bool,
}

impl BottomSheet {
    /// Create a closed sheet.
    pub fn new(snap_points: SnapPoints, dismissible: bool) -> Self {
        Self {
            snap_points,
            state: SheetState::Closed,
            dismissible,
        }
    }

    /// Current state.
    pub fn state(&self) -> SheetState {
        self.state
    }

    /// Snap points of this sheet.
    pub fn snap_points(&self) -> &SnapPoints {
        &self.snap_points
    }

    /// Check if the sheet is visible.
    pub fn is_open(&self) -> bool {
        self.state != SheetState::Closed
    }

    /// Open the sheet at the lowest snap point.
    pub fn open(&mut self) -> SheetState {
        if self.state == SheetState::Closed {
            self.state = SheetState::Snapped(0);
        }
        self.state
    }

    /// Close the sheet.
    pub fn close(&mut self) -> SheetState {
        self.state = SheetState::Closed;
        self.state
    }

    /// Move directly to a snap index.
    pub fn snap_to(&mut self, index: usize) -> Result<SheetState, SheetError> {
        if index >= self.snap_points.len() {
            return Err(SheetError::InvalidIndex(index));
        }
        self.state = SheetState::Snapped(index);
        Ok(self.state)
    }

    /// Resolve a drag release.
    ///
    /// Positive distance and velocity point down the screen. The velocity
    /// decides the direction when it passes its threshold, otherwise the
    /// distance does.
    pub fn release(&mut self, drag_distance: f32, velocity: f32) -> SheetState {
        let SheetState::Snapped(index) = self.state else {
            return self.state;
        };

        let fast = velocity.abs() > VELOCITY_THRESHOLD;
        let far = drag_distance.abs() > DISTANCE_THRESHOLD;
        if !fast && !far {
            return self.state;
        }

        let upward = if fast { velocity < 0.0 } else { drag_distance < 0.0 };

        self.state = if upward {
            SheetState::Snapped((index + 1).min(self.snap_points.len() - 1))
        } else if index > 0 {
            SheetState::Snapped(index - 1)
        } else if self.dismissible {
            SheetState::Closed
        } else {
            SheetState::Snapped(0)
        };

        tracing::debug!(
            "Sheet release (distance {:.0}px, velocity {:.2}px/ms) -> {:?}",
            drag_distance,
            velocity,
            self.state
        );
        self.state
    }

    /// Offset of the sheet's top edge from the top of the screen in pixels.
    pub fn offset_for(&self, state: SheetState, screen_height: f32) -> f32 {
        match state {
            SheetState::Closed => screen_height,
            SheetState::Snapped(index) => {
                let fraction = self.snap_points.get(index).unwrap_or(0.0);
                screen_height * (1.0 - fraction)
            }
        }
    }

    /// Spring animation from `from_offset` to the resting offset of `state`.
    pub fn animation_to(
        &self,
        state: SheetState,
        from_offset: f32,
        screen_height: f32,
    ) -> SpringAnimation {
        SpringAnimation::new(from_offset, self.offset_for(state, screen_height))
    }
}

/// Damped spring moving a position towards a target.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringAnimation {
    /// Current position in pixels
    pub position: f32,
    /// Current velocity in pixels per second
    pub velocity: f32,
    /// Resting position in pixels
    pub target: f32,
    /// Spring constant
    pub stiffness: f32,
    /// Damping coefficient
    pub damping: f32,
    /// Mass of the moving sheet
    pub mass: f32,
}

impl SpringAnimation {
    /// Distance and speed below which the spring is considered at rest.
    const REST_THRESHOLD: f32 = 0.5;

    /// Create a spring at rest at `position` heading for `target`.
    pub fn new(position: f32, target: f32) -> Self {
        Self {
            position,
            velocity: 0.0,
            target,
            stiffness: 300.0,
            damping: 30.0,
            mass: 1.0,
        }
    }

    /// Start with an initial velocity (e.g. the release velocity).
    pub fn with_velocity(mut self, velocity: f32) -> Self {
        self.velocity = velocity;
        self
    }

    /// Advance the simulation by `dt` seconds and return the new position.
    pub fn step(&mut self, dt: f32) -> f32 {
        let displacement = self.position - self.target;
        let force = -self.stiffness * displacement - self.damping * self.velocity;
        let acceleration = force / self.mass;

        self.velocity += acceleration * dt;
        self.position += self.velocity * dt;
        self.position
    }

    /// Check if the spring has come to rest at its target.
    pub fn is_settled(&self) -> bool {
        (self.position - self.target).abs() < Self::REST_THRESHOLD
            && self.velocity.abs() < Self::REST_THRESHOLD
    }
}

/// Bottom sheet configuration errors.
#[derive(Debug, Error, PartialEq)]
pub enum SheetError {
    #[error("At least one snap point is required")]
    EmptySnapPoints,

    #[error("Snap point {0} is outside (0, 1]")]
    OutOfRange(f32),

    #[error("Snap points must be strictly increasing")]
    NotAscending,

    #[error("Snap index {0} does not exist")]
    InvalidIndex(usize),
}

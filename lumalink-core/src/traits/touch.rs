//! Touch input trait and edge detection

/// Errors that can occur reading the touch controller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TouchError {
    /// Bus transaction failed
    Bus,
}

/// A touch coordinate in panel pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TouchPoint {
    pub x: u16,
    pub y: u16,
}

/// Panel contact state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TouchState {
    #[default]
    Released,
    Pressed,
}

impl TouchState {
    /// Contact state implied by a polled point
    pub fn of(point: Option<TouchPoint>) -> Self {
        match point {
            Some(_) => Self::Pressed,
            None => Self::Released,
        }
    }
}

/// Trait for touch controllers
pub trait TouchInput {
    /// Poll the first contact point, `None` when nothing touches the panel
    fn point(&mut self) -> Result<Option<TouchPoint>, TouchError>;

    /// Poll the current contact state
    fn state(&mut self) -> Result<TouchState, TouchError> {
        self.point().map(TouchState::of)
    }
}

/// Turns polled touch states into press/release edges
#[derive(Debug, Clone, Default)]
pub struct EdgeDetector {
    last: TouchState,
}

impl EdgeDetector {
    pub const fn new() -> Self {
        Self {
            last: TouchState::Released,
        }
    }

    /// Feed a polled state, returning the new state on a change
    pub fn update(&mut self, state: TouchState) -> Option<TouchState> {
        if state == self.last {
            return None;
        }
        self.last = state;
        Some(state)
    }

    /// Last observed state
    pub fn state(&self) -> TouchState {
        self.last
    }
}

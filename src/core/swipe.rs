//! # Swipe Gesture
//!
//! Deterministic drag state for the topmost card.
//!
//! ```text
//!   Idle ──start──▶ Dragging(offset) ──release──▶ Dismiss   (|offset| > 100)
//!    ▲                  │    ▲                  └▶ SnapBack  (otherwise)
//!    └──────────────────┘    └─ move(offset)
//!         cancel
//! ```
//!
//! Offsets are in drag units. The TUI converts terminal columns and key
//! presses into units, so the threshold stays the same whatever the input.

/// A release must move the card strictly further than this to dismiss it.
pub const DISMISS_THRESHOLD: i32 = 100;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SwipeState {
    #[default]
    Idle,
    Dragging { offset: i32 },
}

/// What a released drag resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeOutcome {
    Dismiss,
    SnapBack,
}

/// Dismiss iff `|offset| > DISMISS_THRESHOLD`.
pub fn classify(offset: i32) -> SwipeOutcome {
    if offset.unsigned_abs() > DISMISS_THRESHOLD.unsigned_abs() {
        SwipeOutcome::Dismiss
    } else {
        SwipeOutcome::SnapBack
    }
}

impl SwipeState {
    /// Live horizontal offset of the top card. Zero when idle.
    pub fn offset(&self) -> i32 {
        match self {
            SwipeState::Idle => 0,
            SwipeState::Dragging { offset } => *offset,
        }
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self, SwipeState::Dragging { .. })
    }

    /// True while dragging past the threshold, i.e. releasing now would dismiss.
    pub fn would_dismiss(&self) -> bool {
        self.is_dragging() && classify(self.offset()) == SwipeOutcome::Dismiss
    }

    pub fn start(&mut self) {
        if !self.is_dragging() {
            *self = SwipeState::Dragging { offset: 0 };
        }
    }

    /// Updates the offset of an ongoing drag. Ignored when idle.
    pub fn move_to(&mut self, offset: i32) {
        if let SwipeState::Dragging { offset: current } = self {
            *current = offset;
        }
    }

    /// Ends the drag and resets the offset. `None` if no drag was in progress.
    pub fn release(&mut self) -> Option<SwipeOutcome> {
        let outcome = match self {
            SwipeState::Idle => None,
            SwipeState::Dragging { offset } => Some(classify(*offset)),
        };
        *self = SwipeState::Idle;
        outcome
    }

    pub fn cancel(&mut self) {
        *self = SwipeState::Idle;
    }
}

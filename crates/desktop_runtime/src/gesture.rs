//! Press/drag/release state machine shared by icon drags and title-bar drags.
//!
//! The tracker is pure: callers feed it pointer coordinates and it decides when a press has
//! travelled far enough to become a drag. DOM listener bookkeeping lives in the components layer.

use crate::model::Point;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GesturePhase {
    #[default]
    Idle,
    /// Pointer is down but has not moved past the threshold.
    Pressed { origin: Point, grab_offset: Point },
    Dragging { grab_offset: Point },
}

/// How a finished gesture resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureOutcome {
    Click,
    Drag,
}

/// A forwarded move while dragging.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DragUpdate {
    pub pointer: Point,
    /// New anchor position: pointer minus grab offset.
    pub position: Point,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GestureTracker {
    phase: GesturePhase,
    threshold_px: i32,
}

impl GestureTracker {
    pub fn new(threshold_px: i32) -> Self {
        Self {
            phase: GesturePhase::Idle,
            threshold_px: threshold_px.max(0),
        }
    }

    pub fn phase(&self) -> GesturePhase {
        self.phase
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.phase, GesturePhase::Dragging { .. })
    }

    /// Arms the tracker for a primary press on an object anchored at `anchor`.
    ///
    /// Returns `false`, leaving the tracker idle, for multi-click presses.
    pub fn press(&mut self, pointer: Point, anchor: Point, click_count: u32) -> bool {
        if click_count > 1 {
            self.phase = GesturePhase::Idle;
            return false;
        }
        self.phase = GesturePhase::Pressed {
            origin: pointer,
            grab_offset: pointer - anchor,
        };
        true
    }

    /// Feeds a pointer move. Returns the new anchor position once the gesture is a drag.
    pub fn update(&mut self, pointer: Point) -> Option<DragUpdate> {
        let grab_offset = match self.phase {
            GesturePhase::Idle => return None,
            GesturePhase::Pressed {
                origin,
                grab_offset,
            } => {
                let threshold = i64::from(self.threshold_px);
                if pointer.distance_sq(origin) < threshold * threshold {
                    return None;
                }
                self.phase = GesturePhase::Dragging { grab_offset };
                grab_offset
            }
            GesturePhase::Dragging { grab_offset } => grab_offset,
        };
        Some(DragUpdate {
            pointer,
            position: pointer - grab_offset,
        })
    }

    /// Ends the gesture. Returns `None` when nothing was pressed.
    pub fn release(&mut self) -> Option<GestureOutcome> {
        match std::mem::take(&mut self.phase) {
            GesturePhase::Idle => None,
            GesturePhase::Pressed { .. } => Some(GestureOutcome::Click),
            GesturePhase::Dragging { .. } => Some(GestureOutcome::Drag),
        }
    }

    pub fn cancel(&mut self) {
        self.phase = GesturePhase::Idle;
    }
}

impl Default for GestureTracker {
    fn default() -> Self {
        Self::new(crate::config::DEFAULT_DRAG_THRESHOLD_PX)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn small_moves_stay_a_click() {
        let mut tracker = GestureTracker::new(4);
        assert!(tracker.press(Point::new(100, 100), Point::new(90, 90), 1));
        assert_eq!(tracker.update(Point::new(102, 102)), None);
        assert_eq!(tracker.release(), Some(GestureOutcome::Click));
        assert_eq!(tracker.phase(), GesturePhase::Idle);
    }

    #[test]
    fn threshold_distance_starts_the_drag() {
        let mut tracker = GestureTracker::new(4);
        tracker.press(Point::new(100, 100), Point::new(90, 90), 1);

        let update = tracker.update(Point::new(104, 100));
        assert_eq!(
            update,
            Some(DragUpdate {
                pointer: Point::new(104, 100),
                position: Point::new(94, 90),
            })
        );
        assert!(tracker.is_dragging());

        // Once dragging, even tiny moves are forwarded.
        assert_eq!(
            tracker.update(Point::new(105, 100)).map(|u| u.position),
            Some(Point::new(95, 90))
        );
        assert_eq!(tracker.release(), Some(GestureOutcome::Drag));
    }

    #[test]
    fn multi_click_press_never_arms() {
        let mut tracker = GestureTracker::new(4);
        assert!(!tracker.press(Point::new(0, 0), Point::new(0, 0), 2));
        assert_eq!(tracker.update(Point::new(50, 50)), None);
        assert_eq!(tracker.release(), None);
    }

    #[test]
    fn cancel_returns_to_idle_from_any_phase() {
        let mut tracker = GestureTracker::new(4);
        tracker.press(Point::new(0, 0), Point::new(0, 0), 1);
        tracker.update(Point::new(20, 0));
        tracker.cancel();
        assert_eq!(tracker.phase(), GesturePhase::Idle);
        assert_eq!(tracker.release(), None);
    }

    #[test]
    fn zero_threshold_drags_on_first_move() {
        let mut tracker = GestureTracker::new(0);
        tracker.press(Point::new(5, 5), Point::new(0, 0), 1);
        assert!(tracker.update(Point::new(5, 5)).is_some());
    }
}

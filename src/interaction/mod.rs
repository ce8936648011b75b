use serde::{Deserialize, Serialize};

use crate::core::Point;

/// Public pointer/hover state exposed to host applications.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct HoverState {
    /// Last pointer position in canvas pixels, `None` once the pointer left.
    pub cursor: Option<Point>,
    /// Index of the record whose marker is under the pointer.
    pub hovered_marker: Option<usize>,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct InteractionState {
    hover: HoverState,
}

impl InteractionState {
    #[must_use]
    pub fn hover(self) -> HoverState {
        self.hover
    }

    #[must_use]
    pub fn hovered_marker(self) -> Option<usize> {
        self.hover.hovered_marker
    }

    pub fn on_pointer_move(&mut self, x: f64, y: f64) {
        self.hover.cursor = Some(Point::new(x, y));
    }

    pub fn on_pointer_click(&mut self, x: f64, y: f64) {
        self.hover.cursor = Some(Point::new(x, y));
    }

    pub fn on_pointer_leave(&mut self) {
        self.hover = HoverState::default();
    }

    /// Updates the hovered marker; returns `true` when it changed.
    pub fn set_hovered_marker(&mut self, marker: Option<usize>) -> bool {
        if self.hover.hovered_marker == marker {
            return false;
        }
        self.hover.hovered_marker = marker;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leave_clears_cursor_and_hover() {
        let mut state = InteractionState::default();
        state.on_pointer_move(10.0, 20.0);
        assert!(state.set_hovered_marker(Some(3)));
        assert!(!state.set_hovered_marker(Some(3)));
        state.on_pointer_leave();
        assert_eq!(state.hover(), HoverState::default());
    }

    #[test]
    fn click_moves_the_cursor() {
        let mut state = InteractionState::default();
        state.on_pointer_click(1.0, 1.0);
        state.on_pointer_click(2.0, 2.0);
        assert_eq!(state.hover().cursor, Some(Point::new(2.0, 2.0)));
    }
}

use serde::{Deserialize, Serialize};

use crate::core::field::{Axis, Field};

/// Current `(X, Y)` field pair. Starts at each axis' first choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    pub x: Field,
    pub y: Field,
}

impl Default for Selection {
    fn default() -> Self {
        Self {
            x: Axis::X.default_choice(),
            y: Axis::Y.default_choice(),
        }
    }
}

impl Selection {
    #[must_use]
    pub const fn new(x: Field, y: Field) -> Self {
        Self { x, y }
    }

    #[must_use]
    pub fn get(self, axis: Axis) -> Field {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
        }
    }

    /// Stores `field` on its own axis and returns the field it replaced.
    pub fn replace(&mut self, field: Field) -> Field {
        let slot = match field.axis() {
            Axis::X => &mut self.x,
            Axis::Y => &mut self.y,
        };
        std::mem::replace(slot, field)
    }
}

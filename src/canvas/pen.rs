//! Pointer input → strokes.
//!
//! # States
//! ```text
//! Idle ──down──▶ Drawing ──up / leave──▶ Idle
//!                  │  ▲
//!                  └──┘ move: paint segment last → point
//! ```
//!
//! The stroke color is captured on pointer-down, so picking another color
//! mid-stroke or afterwards never changes pixels already on the surface.

use serde::{Deserialize, Serialize};

use crate::canvas::color::Color;
use crate::canvas::surface::{DrawingSurface, Point};

/// A pointer event delivered by the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PointerEvent {
    Down { x: i32, y: i32 },
    Move { x: i32, y: i32 },
    Up,
    Leave,
}

/// Current stroke state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrokeState {
    Idle,
    Drawing { last: Point, color: Color },
}

/// Pen tool: selected color, brush size and the stroke in progress.
#[derive(Debug, Clone)]
pub struct Pen {
    color: Color,
    line_width: u32,
    state: StrokeState,
}

impl Pen {
    pub fn new(color: Color, line_width: u32) -> Self {
        Self {
            color,
            line_width: line_width.max(1),
            state: StrokeState::Idle,
        }
    }

    pub fn color(&self) -> Color {
        self.color
    }

    /// Select the color for the next stroke.
    pub fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    pub fn line_width(&self) -> u32 {
        self.line_width
    }

    pub fn state(&self) -> StrokeState {
        self.state
    }

    pub fn is_drawing(&self) -> bool {
        matches!(self.state, StrokeState::Drawing { .. })
    }

    /// Abandon any stroke in progress.
    pub fn reset(&mut self) {
        self.state = StrokeState::Idle;
    }

    /// Apply one pointer event. Returns true if pixels were painted.
    pub fn handle(&mut self, event: PointerEvent, surface: &mut DrawingSurface) -> bool {
        match (event, self.state) {
            (PointerEvent::Down { x, y }, _) => {
                self.state = StrokeState::Drawing {
                    last: Point::new(x, y),
                    color: self.color,
                };
                false
            }
            (PointerEvent::Move { x, y }, StrokeState::Drawing { last, color }) => {
                let point = Point::new(x, y);
                surface.draw_line(last, point, color, self.line_width);
                self.state = StrokeState::Drawing { last: point, color };
                true
            }
            (PointerEvent::Move { .. }, StrokeState::Idle) => false,
            (PointerEvent::Up | PointerEvent::Leave, _) => {
                self.state = StrokeState::Idle;
                false
            }
        }
    }
}

impl Default for Pen {
    fn default() -> Self {
        Self::new(Color::BLACK, 1)
    }
}

use serde::{Deserialize, Serialize};

use crate::core::ScreenPoint;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum InteractionMode {
    #[default]
    Idle,
    Dragging,
}

/// Pointer button as reported by the host (`0` primary, `1` auxiliary, `2` secondary).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PointerButton {
    Primary,
    Auxiliary,
    Secondary,
    Other(u8),
}

impl PointerButton {
    #[must_use]
    pub fn from_index(index: u8) -> Self {
        match index {
            0 => Self::Primary,
            1 => Self::Auxiliary,
            2 => Self::Secondary,
            other => Self::Other(other),
        }
    }
}

/// Current and previous position of a repeated pointer event.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct PositionHistory {
    pub last: Option<ScreenPoint>,
    pub previous: Option<ScreenPoint>,
}

impl PositionHistory {
    fn record(&mut self, position: ScreenPoint) {
        self.previous = self.last;
        self.last = Some(position);
    }
}

/// Pointer and key bookkeeping owned by the plot.
///
/// Only the navigation handlers mutate this; rendering sees its effect through
/// the resulting plot area.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct NavigationState {
    mode: InteractionMode,
    drag_anchor: Option<ScreenPoint>,
    last_pointer: Option<ScreenPoint>,
    pointer_down: PositionHistory,
    pointer_up: PositionHistory,
    last_button: Option<PointerButton>,
    last_key_code: Option<u32>,
}

impl NavigationState {
    #[must_use]
    pub fn mode(&self) -> InteractionMode {
        self.mode
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.mode == InteractionMode::Dragging
    }

    /// Pointer position captured when the current drag started.
    #[must_use]
    pub fn drag_anchor(&self) -> Option<ScreenPoint> {
        self.drag_anchor
    }

    #[must_use]
    pub fn last_pointer(&self) -> Option<ScreenPoint> {
        self.last_pointer
    }

    #[must_use]
    pub fn pointer_down_history(&self) -> PositionHistory {
        self.pointer_down
    }

    #[must_use]
    pub fn pointer_up_history(&self) -> PositionHistory {
        self.pointer_up
    }

    #[must_use]
    pub fn last_button(&self) -> Option<PointerButton> {
        self.last_button
    }

    #[must_use]
    pub fn last_key_code(&self) -> Option<u32> {
        self.last_key_code
    }

    pub fn on_pointer_down(&mut self, position: ScreenPoint, button: PointerButton) {
        self.mode = InteractionMode::Dragging;
        self.drag_anchor = Some(position);
        self.last_pointer = Some(position);
        self.pointer_down.record(position);
        self.last_button = Some(button);
    }

    pub fn on_pointer_move(&mut self, position: ScreenPoint) {
        self.last_pointer = Some(position);
    }

    pub fn on_pointer_up(&mut self, position: Option<ScreenPoint>) {
        self.mode = InteractionMode::Idle;
        self.drag_anchor = None;
        if let Some(position) = position {
            self.last_pointer = Some(position);
            self.pointer_up.record(position);
        }
    }

    /// Restarts the current drag from the last pointer position.
    pub fn rebase_drag_anchor(&mut self) {
        if self.is_dragging() {
            self.drag_anchor = self.last_pointer;
        }
    }

    pub fn on_key(&mut self, code: u32) {
        self.last_key_code = Some(code);
    }
}

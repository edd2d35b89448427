// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Keyboard bindings.
//!
//! Keys are matched on `KeyboardEvent.key` values:
//!
//! | Key | Action |
//! |-----|--------|
//! | `+` | zoom in at the center |
//! | `-` | zoom out at the center |
//! | `=` | reset to the initial view box |
//! | `ArrowUp`, `ArrowDown`, `ArrowLeft`, `ArrowRight` | pan by one step |
//! | the configured modifier (`Alt`) | arm drag-to-pan while held |
//!
//! ```
//! use understory_svg_nav::{KeyAction, NavCommand, NavConfig, PanDirection};
//!
//! let config = NavConfig::default();
//! assert_eq!(
//!     KeyAction::classify("ArrowLeft", &config),
//!     KeyAction::Command(NavCommand::Pan(PanDirection::Left)),
//! );
//! assert_eq!(KeyAction::classify("Alt", &config), KeyAction::Modifier);
//! assert_eq!(KeyAction::classify("x", &config), KeyAction::Other);
//! ```

use kurbo::Vec2;

use crate::config::NavConfig;

/// Direction of a step pan.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PanDirection {
    /// Toward smaller y.
    Up,
    /// Toward larger y.
    Down,
    /// Toward smaller x.
    Left,
    /// Toward larger x.
    Right,
}

impl PanDirection {
    /// Pan ratio for one step of size `step`.
    #[must_use]
    pub fn ratio(self, step: f64) -> Vec2 {
        match self {
            Self::Up => Vec2::new(0.0, -step),
            Self::Down => Vec2::new(0.0, step),
            Self::Left => Vec2::new(-step, 0.0),
            Self::Right => Vec2::new(step, 0.0),
        }
    }
}

/// View box command, issued from a key or an overlay button.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NavCommand {
    /// Zoom in one step at the center.
    ZoomIn,
    /// Zoom out one step at the center.
    ZoomOut,
    /// Restore the initial view box.
    Reset,
    /// Pan one step.
    Pan(PanDirection),
}

impl NavCommand {
    /// Looks up the command bound to `key`.
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        Some(match key {
            "+" => Self::ZoomIn,
            "-" => Self::ZoomOut,
            "=" => Self::Reset,
            "ArrowUp" => Self::Pan(PanDirection::Up),
            "ArrowDown" => Self::Pan(PanDirection::Down),
            "ArrowLeft" => Self::Pan(PanDirection::Left),
            "ArrowRight" => Self::Pan(PanDirection::Right),
            _ => return None,
        })
    }
}

/// What a key means to the dispatcher.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum KeyAction {
    /// A command for the active navigator.
    Command(NavCommand),
    /// The drag modifier; broadcast to every navigator.
    Modifier,
    /// Not a navigation key.
    Other,
}

impl KeyAction {
    /// Classifies a `KeyboardEvent.key` value.
    #[must_use]
    pub fn classify(key: &str, config: &NavConfig) -> Self {
        if config.modifier().matches(key) {
            return Self::Modifier;
        }
        NavCommand::from_key(key).map_or(Self::Other, Self::Command)
    }
}

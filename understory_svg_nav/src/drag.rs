// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drag-to-pan phases.
//!
//! ## Usage
//!
//! 1) Pressing the modifier moves [`DragPhase::Idle`] to [`DragPhase::Armed`].
//! 2) A primary-button press while armed starts [`DragPhase::Dragging`] with a
//!    [`DragAnchor`] recording the pointer and the view box at that moment.
//! 3) Each move computes the panned view box from the anchor with
//!    [`DragAnchor::pan_to`]; moves never accumulate error.
//! 4) Pointer release returns to `Armed`; releasing the modifier returns to
//!    `Idle` from any phase.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::{Point, Size};
//! use understory_svg_nav::ViewBox;
//! use understory_svg_nav::drag::DragAnchor;
//!
//! let anchor = DragAnchor {
//!     start: Point::new(100.0, 100.0),
//!     view_box: ViewBox::new(0.0, 0.0, 50.0, 50.0),
//! };
//!
//! // Dragging right by half the rendered width moves the view left by half
//! // its width.
//! let panned = anchor.pan_to(Point::new(200.0, 100.0), Size::new(200.0, 200.0));
//! assert_eq!(panned, Some(ViewBox::new(-25.0, 0.0, 50.0, 50.0)));
//! ```

use kurbo::{Point, Size};

use crate::view_box::ViewBox;

/// Pointer and view box captured when a drag starts.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragAnchor {
    /// Pointer position at drag start, in client pixels.
    pub start: Point,
    /// View box at drag start.
    pub view_box: ViewBox,
}

impl DragAnchor {
    /// Returns the view box for the pointer at `pos` over a graphic rendered
    /// at `rendered` pixels.
    ///
    /// Returns `None` when the rendered size is empty or the result would not
    /// be a valid view box.
    #[must_use]
    pub fn pan_to(&self, pos: Point, rendered: Size) -> Option<ViewBox> {
        if !(rendered.width > 0.0 && rendered.height > 0.0) {
            return None;
        }
        let displacement = pos - self.start;
        let vb = self.view_box;
        let next = ViewBox::new(
            vb.x - displacement.x / rendered.width * vb.width,
            vb.y - displacement.y / rendered.height * vb.height,
            vb.width,
            vb.height,
        );
        next.is_valid().then_some(next)
    }
}

/// Drag lifecycle of one navigator.
///
/// The modifier is held exactly when the phase is not [`DragPhase::Idle`].
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub enum DragPhase {
    /// Modifier not held.
    #[default]
    Idle,
    /// Modifier held, no button pressed.
    Armed,
    /// Modifier held and primary button pressed.
    Dragging(DragAnchor),
}

impl DragPhase {
    /// Returns `true` while the drag modifier is held.
    #[must_use]
    pub fn modifier_held(&self) -> bool {
        !matches!(self, Self::Idle)
    }

    /// Returns `true` while a drag is in progress.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        matches!(self, Self::Dragging(_))
    }

    /// Returns the anchor of the drag in progress.
    #[must_use]
    pub fn anchor(&self) -> Option<&DragAnchor> {
        match self {
            Self::Dragging(anchor) => Some(anchor),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Size};

    use super::{DragAnchor, DragPhase};
    use crate::view_box::ViewBox;

    fn anchor() -> DragAnchor {
        DragAnchor {
            start: Point::new(10.0, 20.0),
            view_box: ViewBox::new(5.0, 5.0, 40.0, 20.0),
        }
    }

    #[test]
    fn pan_to_is_relative_to_start() {
        let rendered = Size::new(400.0, 200.0);
        let vb = anchor().pan_to(Point::new(110.0, 70.0), rendered).unwrap();
        // 100px of 400 is a quarter of the width; 50px of 200 a quarter of the height.
        assert_eq!(vb, ViewBox::new(-5.0, 0.0, 40.0, 20.0));

        // Returning to the start restores the snapshot.
        let back = anchor().pan_to(Point::new(10.0, 20.0), rendered).unwrap();
        assert_eq!(back, anchor().view_box);
    }

    #[test]
    fn pan_to_rejects_empty_rendered_size() {
        assert_eq!(anchor().pan_to(Point::new(50.0, 50.0), Size::ZERO), None);
        assert_eq!(
            anchor().pan_to(Point::new(50.0, 50.0), Size::new(100.0, 0.0)),
            None
        );
    }

    #[test]
    fn pan_to_rejects_non_finite_result() {
        assert_eq!(
            anchor().pan_to(Point::new(f64::NAN, 0.0), Size::new(100.0, 100.0)),
            None
        );
    }

    #[test]
    fn phase_queries() {
        assert!(!DragPhase::Idle.modifier_held());
        assert!(DragPhase::Armed.modifier_held());
        assert!(!DragPhase::Armed.is_dragging());
        let dragging = DragPhase::Dragging(anchor());
        assert!(dragging.modifier_held());
        assert!(dragging.is_dragging());
        assert_eq!(dragging.anchor(), Some(&anchor()));
        assert_eq!(DragPhase::Armed.anchor(), None);
    }
}

// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::view_box::ViewBox;

/// Visual state of a navigator's host.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct Presentation {
    /// The pointer is over the host.
    pub hovered: bool,
    /// Armed, hovered, and not dragging: a press would start a drag.
    pub grab_ready: bool,
    /// A drag is in progress.
    pub dragging: bool,
}

/// Where a navigator renders its state.
///
/// The DOM backend writes the `viewBox` attribute and toggles host classes;
/// tests record the calls. `()` discards everything, for headless use.
pub trait Surface {
    /// Writes the current view box onto the graphic.
    fn set_view_box(&mut self, view_box: ViewBox);

    /// Updates hover and cursor affordances.
    fn set_presentation(&mut self, presentation: Presentation);
}

impl Surface for () {
    fn set_view_box(&mut self, _view_box: ViewBox) {}

    fn set_presentation(&mut self, _presentation: Presentation) {}
}

impl<S: Surface + ?Sized> Surface for &mut S {
    fn set_view_box(&mut self, view_box: ViewBox) {
        (**self).set_view_box(view_box);
    }

    fn set_presentation(&mut self, presentation: Presentation) {
        (**self).set_presentation(presentation);
    }
}

// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Rect, Vec2};

use crate::config::NavConfig;
use crate::drag::{DragAnchor, DragPhase};
use crate::keys::NavCommand;
use crate::surface::{Presentation, Surface};
use crate::view_box::{DEFAULT_EXTENT, ViewBox};

/// Pointer button, as reported by `PointerEvent.button`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PointerButton {
    /// Usually the left button.
    Primary,
    /// Usually the wheel button.
    Auxiliary,
    /// Usually the right button.
    Secondary,
    /// Any other button index.
    Other(i16),
}

impl PointerButton {
    /// Maps a DOM `button` index.
    #[must_use]
    pub fn from_index(index: i16) -> Self {
        match index {
            0 => Self::Primary,
            1 => Self::Auxiliary,
            2 => Self::Secondary,
            other => Self::Other(other),
        }
    }
}

/// Pan/zoom controller for one graphic.
///
/// A `Navigator` owns the graphic's initial and current view box and its
/// drag phase. Every mutation renders through its [`Surface`] before
/// returning. Mutations that would leave the view box non-finite or
/// degenerate are ignored and return `false`; otherwise zoom is unbounded.
///
/// ```
/// use understory_svg_nav::{NavConfig, Navigator, ViewBox};
///
/// let mut nav = Navigator::new(ViewBox::new(0.0, 0.0, 100.0, 50.0), (), &NavConfig::default());
/// nav.zoom_at_center(0.5);
/// assert_eq!(nav.view_box(), ViewBox::new(25.0, 12.5, 50.0, 25.0));
/// nav.pan(0.5, 0.0);
/// assert_eq!(nav.view_box().x, 50.0);
/// nav.reset();
/// assert_eq!(nav.view_box(), nav.initial_view_box());
/// ```
#[derive(Debug)]
pub struct Navigator<S> {
    surface: S,
    initial: ViewBox,
    current: ViewBox,
    phase: DragPhase,
    hovered: bool,
    zoom_in_factor: f64,
    zoom_out_factor: f64,
    pan_step: f64,
}

impl<S: Surface> Navigator<S> {
    /// Creates a navigator and renders `initial` onto `surface`.
    ///
    /// An invalid `initial` is replaced by a default square view box.
    pub fn new(initial: ViewBox, surface: S, config: &NavConfig) -> Self {
        let initial = if initial.is_valid() {
            initial
        } else {
            log::debug!("invalid initial view box {initial:?}; using default");
            ViewBox::from_size(DEFAULT_EXTENT, DEFAULT_EXTENT)
        };
        let mut nav = Self {
            surface,
            initial,
            current: initial,
            phase: DragPhase::Idle,
            hovered: false,
            zoom_in_factor: config.zoom_in_factor(),
            zoom_out_factor: config.zoom_factor(),
            pan_step: config.pan_step(),
        };
        nav.surface.set_view_box(initial);
        nav.surface.set_presentation(nav.presentation());
        nav
    }

    /// Current view box.
    #[must_use]
    pub fn view_box(&self) -> ViewBox {
        self.current
    }

    /// View box captured at construction; [`Navigator::reset`] restores it.
    #[must_use]
    pub fn initial_view_box(&self) -> ViewBox {
        self.initial
    }

    /// Current drag phase.
    #[must_use]
    pub fn phase(&self) -> &DragPhase {
        &self.phase
    }

    /// Returns `true` while the pointer is over the host.
    #[must_use]
    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    /// Returns `true` while the drag modifier is held.
    #[must_use]
    pub fn is_armed(&self) -> bool {
        self.phase.modifier_held()
    }

    /// Returns `true` while a drag is in progress.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.phase.is_dragging()
    }

    /// Presentation derived from hover and drag state.
    #[must_use]
    pub fn presentation(&self) -> Presentation {
        let dragging = self.phase.is_dragging();
        Presentation {
            hovered: self.hovered,
            grab_ready: self.phase.modifier_held() && self.hovered && !dragging,
            dragging,
        }
    }

    /// Shared access to the rendering surface.
    #[must_use]
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Exclusive access to the rendering surface.
    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// Shifts the view box by a fraction of its current size.
    pub fn pan(&mut self, dx_ratio: f64, dy_ratio: f64) -> bool {
        let delta = Vec2::new(
            dx_ratio * self.current.width,
            dy_ratio * self.current.height,
        );
        self.commit(self.current.translated(delta))
    }

    /// Scales the view box by `factor`, keeping the point at fractional
    /// position `(px, py)` of the rendered graphic fixed.
    ///
    /// `factor < 1` zooms in; `factor > 1` zooms out.
    pub fn zoom_at_point(&mut self, px: f64, py: f64, factor: f64) -> bool {
        if !(factor.is_finite() && factor > 0.0) {
            return false;
        }
        self.commit(self.current.scaled_about(Point::new(px, py), factor))
    }

    /// Scales the view box by `factor` about its center.
    pub fn zoom_at_center(&mut self, factor: f64) -> bool {
        self.zoom_at_point(0.5, 0.5, factor)
    }

    /// Restores the initial view box.
    ///
    /// Returns `true` if the view box changed.
    pub fn reset(&mut self) -> bool {
        let changed = self.current != self.initial;
        self.current = self.initial;
        self.surface.set_view_box(self.current);
        changed
    }

    /// Runs a keyboard or overlay command.
    pub fn apply(&mut self, command: NavCommand) -> bool {
        log::trace!("navigator command {command:?}");
        match command {
            NavCommand::ZoomIn => self.zoom_at_center(self.zoom_in_factor),
            NavCommand::ZoomOut => self.zoom_at_center(self.zoom_out_factor),
            NavCommand::Reset => self.reset(),
            NavCommand::Pan(direction) => {
                let ratio = direction.ratio(self.pan_step);
                self.pan(ratio.x, ratio.y)
            }
        }
    }

    /// Records whether the drag modifier is held.
    ///
    /// Releasing the modifier ends any drag immediately. Pressing it again
    /// while dragging (key repeat) keeps the drag.
    pub fn set_modifier_held(&mut self, held: bool) {
        if held {
            if self.phase == DragPhase::Idle {
                self.phase = DragPhase::Armed;
            }
        } else {
            if self.phase.is_dragging() {
                log::debug!("drag cancelled by modifier release");
            }
            self.phase = DragPhase::Idle;
        }
        self.surface.set_presentation(self.presentation());
    }

    /// The pointer entered the host.
    pub fn pointer_enter(&mut self) {
        self.hovered = true;
        self.surface.set_presentation(self.presentation());
    }

    /// The pointer left the host; any drag is cancelled.
    pub fn pointer_leave(&mut self) {
        self.hovered = false;
        self.end_drag();
    }

    /// A pointer button was pressed at `pos` (client pixels).
    ///
    /// Returns `true` when a drag started; the caller should then capture the
    /// pointer for the host and suppress the default action.
    pub fn pointer_down(&mut self, button: PointerButton, pos: Point) -> bool {
        if button != PointerButton::Primary || self.phase != DragPhase::Armed {
            return false;
        }
        self.phase = DragPhase::Dragging(DragAnchor {
            start: pos,
            view_box: self.current,
        });
        log::debug!("drag started at {pos:?}");
        self.surface.set_presentation(self.presentation());
        true
    }

    /// The pointer moved to `pos` while the graphic is rendered in `bounds`
    /// (both client pixels).
    ///
    /// Returns `true` if the view box changed.
    pub fn pointer_move(&mut self, pos: Point, bounds: Rect) -> bool {
        let Some(anchor) = self.phase.anchor() else {
            return false;
        };
        match anchor.pan_to(pos, bounds.size()) {
            Some(next) => {
                self.current = next;
                self.surface.set_view_box(next);
                true
            }
            None => false,
        }
    }

    /// A pointer button was released.
    ///
    /// Returns `true` if a drag ended; the caller should release pointer
    /// capture.
    pub fn pointer_up(&mut self) -> bool {
        self.end_drag()
    }

    /// The pointer was cancelled or lost capture.
    pub fn pointer_cancel(&mut self) {
        self.end_drag();
    }

    /// A wheel event at `pos` over a graphic rendered in `bounds`.
    ///
    /// Negative `delta_y` (toward the viewer) zooms in, positive zooms out,
    /// zero does nothing. Returns `true` if the view box changed.
    pub fn wheel(&mut self, pos: Point, bounds: Rect, delta_y: f64) -> bool {
        let Some(fraction) = fraction_in(pos, bounds) else {
            return false;
        };
        let factor = if delta_y < 0.0 {
            self.zoom_in_factor
        } else if delta_y > 0.0 {
            self.zoom_out_factor
        } else {
            return false;
        };
        self.zoom_at_point(fraction.x, fraction.y, factor)
    }

    fn end_drag(&mut self) -> bool {
        let was_dragging = self.phase.is_dragging();
        if was_dragging {
            self.phase = DragPhase::Armed;
            log::debug!("drag ended at {:?}", self.current);
        }
        self.surface.set_presentation(self.presentation());
        was_dragging
    }

    fn commit(&mut self, next: ViewBox) -> bool {
        if !next.is_valid() {
            log::debug!("rejected view box {next:?}");
            return false;
        }
        self.current = next;
        self.surface.set_view_box(next);
        true
    }
}

fn fraction_in(pos: Point, bounds: Rect) -> Option<Point> {
    let width = bounds.width();
    let height = bounds.height();
    if !(width > 0.0 && height > 0.0) {
        return None;
    }
    Some(Point::new(
        (pos.x - bounds.x0) / width,
        (pos.y - bounds.y0) / height,
    ))
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use kurbo::{Point, Rect};

    use super::{Navigator, PointerButton};
    use crate::config::NavConfig;
    use crate::drag::DragPhase;
    use crate::keys::{NavCommand, PanDirection};
    use crate::surface::{Presentation, Surface};
    use crate::view_box::ViewBox;

    #[derive(Debug, Default)]
    struct Recorder {
        view_boxes: Vec<ViewBox>,
        presentations: Vec<Presentation>,
    }

    impl Surface for Recorder {
        fn set_view_box(&mut self, view_box: ViewBox) {
            self.view_boxes.push(view_box);
        }

        fn set_presentation(&mut self, presentation: Presentation) {
            self.presentations.push(presentation);
        }
    }

    fn nav(initial: ViewBox) -> Navigator<Recorder> {
        Navigator::new(initial, Recorder::default(), &NavConfig::default())
    }

    fn assert_close(a: ViewBox, b: ViewBox) {
        let eps = 1e-9;
        assert!(
            (a.x - b.x).abs() < eps
                && (a.y - b.y).abs() < eps
                && (a.width - b.width).abs() < eps
                && (a.height - b.height).abs() < eps,
            "{a:?} != {b:?}"
        );
    }

    #[test]
    fn construction_renders_initial_view_box() {
        let vb = ViewBox::new(10.0, 20.0, 100.0, 50.0);
        let nav = nav(vb);
        assert_eq!(nav.initial_view_box(), vb);
        assert_eq!(nav.view_box(), vb);
        assert_eq!(nav.surface().view_boxes, [vb]);
        assert_eq!(nav.phase(), &DragPhase::Idle);
    }

    #[test]
    fn invalid_initial_is_replaced() {
        let nav = nav(ViewBox::new(0.0, 0.0, -1.0, f64::NAN));
        assert_eq!(nav.view_box(), ViewBox::from_size(100.0, 100.0));
    }

    #[test]
    fn pan_scales_with_zoom() {
        let mut nav = nav(ViewBox::new(0.0, 0.0, 200.0, 100.0));
        assert!(nav.pan(0.1, -0.2));
        assert_close(nav.view_box(), ViewBox::new(20.0, -20.0, 200.0, 100.0));

        nav.zoom_at_center(0.5);
        let before = nav.view_box();
        nav.pan(0.1, 0.0);
        assert!((nav.view_box().x - (before.x + 10.0)).abs() < 1e-9);
    }

    #[test]
    fn pan_is_additive() {
        let start = ViewBox::new(3.0, 4.0, 120.0, 80.0);
        let mut split = nav(start);
        split.pan(0.3, 0.0);
        split.pan(0.45, 0.0);
        let mut whole = nav(start);
        whole.pan(0.75, 0.0);
        assert!((split.view_box().x - whole.view_box().x).abs() < 1e-9);
    }

    #[test]
    fn zoom_at_point_keeps_anchor_fixed() {
        let mut nav = nav(ViewBox::new(-40.0, 10.0, 300.0, 150.0));
        for (px, py, factor) in [(0.2, 0.7, 0.5), (1.0, 0.0, 3.0), (0.5, 0.5, 1.15)] {
            let fraction = Point::new(px, py);
            let before = nav.view_box().point_at(fraction);
            assert!(nav.zoom_at_point(px, py, factor));
            let after = nav.view_box().point_at(fraction);
            assert!((before.x - after.x).abs() < 1e-9);
            assert!((before.y - after.y).abs() < 1e-9);
        }
    }

    #[test]
    fn zoom_at_center_inverse_restores() {
        let vb = ViewBox::new(12.0, -7.5, 640.0, 480.0);
        let mut nav = nav(vb);
        for factor in [1.15, 0.3, 7.0] {
            nav.zoom_at_center(factor);
            nav.zoom_at_center(1.0 / factor);
            assert_close(nav.view_box(), vb);
        }
    }

    #[test]
    fn zoom_rejects_bad_factors() {
        let vb = ViewBox::new(0.0, 0.0, 10.0, 10.0);
        let mut nav = nav(vb);
        assert!(!nav.zoom_at_center(0.0));
        assert!(!nav.zoom_at_center(-2.0));
        assert!(!nav.zoom_at_center(f64::NAN));
        assert!(!nav.zoom_at_center(f64::INFINITY));
        assert!(!nav.zoom_at_center(f64::MAX));
        assert_eq!(nav.view_box(), vb);
        assert_eq!(nav.surface().view_boxes.len(), 1);
    }

    #[test]
    fn zoom_is_unbounded() {
        let mut nav = nav(ViewBox::from_size(100.0, 100.0));
        for _ in 0..200 {
            assert!(nav.zoom_at_center(1.15));
        }
        assert!(nav.view_box().width > 1e12);
        assert!(nav.view_box().is_valid());
    }

    #[test]
    fn reset_restores_snapshot_exactly() {
        let vb = ViewBox::new(10.0, 20.0, 100.0, 50.0);
        let mut nav = nav(vb);
        nav.pan(0.37, 0.11);
        nav.zoom_at_point(0.13, 0.9, 0.77);
        nav.apply(NavCommand::ZoomOut);
        nav.apply(NavCommand::Pan(PanDirection::Left));
        assert!(nav.reset());
        assert_eq!(nav.view_box(), vb);
        assert_eq!(nav.surface().view_boxes.last(), Some(&vb));
        assert!(!nav.reset());
    }

    #[test]
    fn commands_use_configured_steps() {
        let mut nav = nav(ViewBox::from_size(100.0, 100.0));
        nav.apply(NavCommand::Pan(PanDirection::Down));
        assert_close(nav.view_box(), ViewBox::new(0.0, 12.0, 100.0, 100.0));
        nav.apply(NavCommand::ZoomIn);
        assert!((nav.view_box().width - 100.0 / 1.15).abs() < 1e-9);
        nav.apply(NavCommand::ZoomOut);
        assert!((nav.view_box().width - 100.0).abs() < 1e-9);
    }

    #[test]
    fn zoom_steps_follow_config() {
        let config = NavConfig::default().with_zoom_factor(0.5);
        let mut nav = Navigator::new(ViewBox::from_size(100.0, 80.0), (), &config);
        assert!(nav.apply(NavCommand::ZoomIn));
        assert_eq!(nav.view_box(), ViewBox::new(25.0, 20.0, 50.0, 40.0));
        assert!(nav.wheel(Point::new(10.0, 10.0), Rect::new(0.0, 0.0, 20.0, 20.0), 3.0));
        assert_eq!(nav.view_box(), ViewBox::new(0.0, 0.0, 100.0, 80.0));
        assert!(nav.wheel(Point::ZERO, Rect::new(0.0, 0.0, 20.0, 20.0), -3.0));
        assert_eq!(nav.view_box(), ViewBox::new(0.0, 0.0, 50.0, 40.0));
    }

    #[test]
    fn drag_pans_relative_to_snapshot() {
        let mut nav = nav(ViewBox::new(0.0, 0.0, 80.0, 40.0));
        let bounds = Rect::new(100.0, 100.0, 500.0, 300.0);
        nav.pointer_enter();
        nav.set_modifier_held(true);
        assert!(nav.presentation().grab_ready);

        assert!(nav.pointer_down(PointerButton::Primary, Point::new(200.0, 200.0)));
        assert!(nav.is_dragging());
        assert!(!nav.presentation().grab_ready);
        assert!(nav.presentation().dragging);

        // 40px of a 400px-wide host, 20px of a 200px-high host.
        assert!(nav.pointer_move(Point::new(240.0, 220.0), bounds));
        assert_close(nav.view_box(), ViewBox::new(-8.0, -4.0, 80.0, 40.0));
        assert!(nav.pointer_move(Point::new(160.0, 200.0), bounds));
        assert_close(nav.view_box(), ViewBox::new(8.0, 0.0, 80.0, 40.0));

        assert!(nav.pointer_up());
        assert_eq!(nav.phase(), &DragPhase::Armed);
        assert!(!nav.pointer_move(Point::new(0.0, 0.0), bounds));
        assert_close(nav.view_box(), ViewBox::new(8.0, 0.0, 80.0, 40.0));
    }

    #[test]
    fn modifier_release_stops_drag() {
        let mut nav = nav(ViewBox::from_size(100.0, 100.0));
        let bounds = Rect::new(0.0, 0.0, 100.0, 100.0);
        nav.set_modifier_held(true);
        nav.pointer_down(PointerButton::Primary, Point::ZERO);
        nav.set_modifier_held(true);
        assert!(nav.is_dragging());

        nav.set_modifier_held(false);
        assert_eq!(nav.phase(), &DragPhase::Idle);
        assert!(!nav.pointer_move(Point::new(50.0, 50.0), bounds));
        assert_eq!(nav.view_box(), ViewBox::from_size(100.0, 100.0));
        assert!(!nav.pointer_up());
    }

    #[test]
    fn press_requires_modifier_and_primary_button() {
        let mut nav = nav(ViewBox::from_size(100.0, 100.0));
        assert!(!nav.pointer_down(PointerButton::Primary, Point::ZERO));
        nav.set_modifier_held(true);
        assert!(!nav.pointer_down(PointerButton::Secondary, Point::ZERO));
        assert!(!nav.pointer_down(PointerButton::from_index(4), Point::ZERO));
        assert!(nav.pointer_down(PointerButton::from_index(0), Point::ZERO));
        assert!(!nav.pointer_down(PointerButton::Primary, Point::ZERO));
    }

    #[test]
    fn leave_and_cancel_end_drag() {
        let mut nav = nav(ViewBox::from_size(100.0, 100.0));
        nav.pointer_enter();
        nav.set_modifier_held(true);
        nav.pointer_down(PointerButton::Primary, Point::ZERO);
        nav.pointer_cancel();
        assert_eq!(nav.phase(), &DragPhase::Armed);

        nav.pointer_down(PointerButton::Primary, Point::ZERO);
        nav.pointer_leave();
        assert_eq!(nav.phase(), &DragPhase::Armed);
        assert_eq!(
            nav.surface().presentations.last(),
            Some(&Presentation::default())
        );
    }

    #[test]
    fn wheel_zooms_at_cursor() {
        let mut nav = nav(ViewBox::from_size(100.0, 100.0));
        let bounds = Rect::new(50.0, 50.0, 250.0, 250.0);
        let cursor = Point::new(100.0, 200.0);
        let fraction = Point::new(0.25, 0.75);
        let before = nav.view_box().point_at(fraction);

        assert!(nav.wheel(cursor, bounds, -120.0));
        assert!(nav.view_box().width < 100.0);
        let after = nav.view_box().point_at(fraction);
        assert!((before.x - after.x).abs() < 1e-9);
        assert!((before.y - after.y).abs() < 1e-9);

        assert!(nav.wheel(cursor, bounds, 120.0));
        assert!((nav.view_box().width - 100.0).abs() < 1e-9);

        assert!(!nav.wheel(cursor, bounds, 0.0));
        assert!(!nav.wheel(cursor, Rect::new(0.0, 0.0, 0.0, 10.0), -1.0));
    }
}

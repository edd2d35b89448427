// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Routing of hover and keyboard input across adopted graphics.
//!
//! A [`Dispatcher`] owns one [`Navigator`] per adopted graphic and an
//! [`ActiveSlot`] naming the graphic under the pointer. Pan, zoom, and reset
//! keys reach only the active navigator. Keys pressed while no graphic is
//! hovered belong to the page. A modifier press over a graphic arms all of
//! them, so a graphic is already armed when the pointer moves on to it;
//! a modifier release always reaches every navigator.
//!
//! ```
//! use understory_svg_nav::{ActiveSlot, Dispatcher, GraphicSource, KeyResponse, NavConfig};
//!
//! let mut dispatcher = Dispatcher::new(NavConfig::default(), ActiveSlot::default());
//! let a = dispatcher.adopt(&GraphicSource { view_box: Some("0 0 100 100"), ..Default::default() }, ());
//! let b = dispatcher.adopt(&GraphicSource { view_box: Some("0 0 100 100"), ..Default::default() }, ());
//!
//! // Nothing hovered: navigation keys are left to the page.
//! assert_eq!(dispatcher.key_down("ArrowRight"), KeyResponse::Ignored);
//!
//! dispatcher.pointer_enter(a);
//! assert_eq!(dispatcher.key_down("ArrowRight"), KeyResponse::Handled);
//! assert_eq!(dispatcher.navigator(a).unwrap().view_box().x, 12.0);
//! assert_eq!(dispatcher.navigator(b).unwrap().view_box().x, 0.0);
//! ```

use alloc::vec::Vec;

use crate::config::NavConfig;
use crate::keys::{KeyAction, NavCommand};
use crate::navigator::Navigator;
use crate::surface::Surface;
use crate::view_box::{GraphicSource, ViewBox};

/// Index of a navigator within its [`Dispatcher`], in adoption order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NavigatorId(pub usize);

/// Which navigator, if any, the pointer is over.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ActiveSlot {
    current: Option<NavigatorId>,
}

impl ActiveSlot {
    /// Currently active navigator.
    #[must_use]
    pub fn get(&self) -> Option<NavigatorId> {
        self.current
    }

    /// Makes `id` active.
    pub fn enter(&mut self, id: NavigatorId) {
        self.current = Some(id);
    }

    /// Clears the slot if it still names `id`.
    ///
    /// Returns `true` if the slot was cleared.
    pub fn leave(&mut self, id: NavigatorId) -> bool {
        if self.current == Some(id) {
            self.current = None;
            true
        } else {
            false
        }
    }
}

/// Whether the caller should suppress the key's default action.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum KeyResponse {
    /// The key was consumed by a navigator.
    Handled,
    /// The key should keep its default behavior.
    Ignored,
}

/// Owns the adopted navigators and routes input to them.
#[derive(Debug)]
pub struct Dispatcher<S> {
    config: NavConfig,
    navigators: Vec<Navigator<S>>,
    active: ActiveSlot,
}

impl<S: Surface> Dispatcher<S> {
    /// Creates an empty dispatcher that tracks hover in `active`.
    pub fn new(config: NavConfig, active: ActiveSlot) -> Self {
        Self {
            config,
            navigators: Vec::new(),
            active,
        }
    }

    /// Configuration shared by every navigator.
    #[must_use]
    pub fn config(&self) -> &NavConfig {
        &self.config
    }

    /// Resolves the initial view box of a graphic and adopts it.
    pub fn adopt(&mut self, source: &GraphicSource<'_>, surface: S) -> NavigatorId {
        self.adopt_view_box(ViewBox::resolve(source), surface)
    }

    /// Adopts a graphic whose initial view box is already known.
    pub fn adopt_view_box(&mut self, initial: ViewBox, surface: S) -> NavigatorId {
        let id = NavigatorId(self.navigators.len());
        let nav = Navigator::new(initial, surface, &self.config);
        log::debug!("adopted graphic {} with view box {}", id.0, nav.view_box());
        self.navigators.push(nav);
        id
    }

    /// Number of adopted graphics.
    #[must_use]
    pub fn len(&self) -> usize {
        self.navigators.len()
    }

    /// Returns `true` if no graphic has been adopted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.navigators.is_empty()
    }

    /// Navigators in adoption order.
    #[must_use]
    pub fn navigators(&self) -> &[Navigator<S>] {
        &self.navigators
    }

    /// Looks up a navigator.
    #[must_use]
    pub fn navigator(&self, id: NavigatorId) -> Option<&Navigator<S>> {
        self.navigators.get(id.0)
    }

    /// Looks up a navigator for pointer, wheel, or overlay input.
    pub fn navigator_mut(&mut self, id: NavigatorId) -> Option<&mut Navigator<S>> {
        self.navigators.get_mut(id.0)
    }

    /// The active slot.
    #[must_use]
    pub fn active(&self) -> ActiveSlot {
        self.active
    }

    /// The active navigator.
    pub fn active_navigator_mut(&mut self) -> Option<&mut Navigator<S>> {
        let id = self.active.get()?;
        self.navigators.get_mut(id.0)
    }

    /// The pointer entered the host of `id`.
    pub fn pointer_enter(&mut self, id: NavigatorId) {
        let Some(nav) = self.navigators.get_mut(id.0) else {
            return;
        };
        self.active.enter(id);
        nav.pointer_enter();
    }

    /// The pointer left the host of `id`.
    pub fn pointer_leave(&mut self, id: NavigatorId) {
        let Some(nav) = self.navigators.get_mut(id.0) else {
            return;
        };
        self.active.leave(id);
        nav.pointer_leave();
    }

    /// Routes a key press.
    ///
    /// Ignored entirely while no graphic is hovered.
    pub fn key_down(&mut self, key: &str) -> KeyResponse {
        if self.active.get().is_none() {
            return KeyResponse::Ignored;
        }
        match KeyAction::classify(key, &self.config) {
            KeyAction::Command(command) => self.run_active(command),
            KeyAction::Modifier => {
                self.broadcast_modifier(true);
                KeyResponse::Ignored
            }
            KeyAction::Other => KeyResponse::Ignored,
        }
    }

    /// Routes a key release.
    pub fn key_up(&mut self, key: &str) -> KeyResponse {
        if self.config.modifier().matches(key) {
            self.broadcast_modifier(false);
        }
        KeyResponse::Ignored
    }

    /// Treats the modifier as released everywhere, for when the key-up will
    /// never arrive (the window lost focus).
    pub fn release_modifier(&mut self) {
        self.broadcast_modifier(false);
    }

    fn run_active(&mut self, command: NavCommand) -> KeyResponse {
        match self.active_navigator_mut() {
            Some(nav) => {
                nav.apply(command);
                KeyResponse::Handled
            }
            None => KeyResponse::Ignored,
        }
    }

    fn broadcast_modifier(&mut self, held: bool) {
        for nav in &mut self.navigators {
            nav.set_modifier_held(held);
        }
    }
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Rect};

    use super::{ActiveSlot, Dispatcher, KeyResponse, NavigatorId};
    use crate::config::{ModifierKey, NavConfig};
    use crate::drag::DragPhase;
    use crate::navigator::PointerButton;
    use crate::view_box::{GraphicSource, ViewBox};

    fn two() -> (Dispatcher<()>, NavigatorId, NavigatorId) {
        let mut dispatcher = Dispatcher::new(NavConfig::default(), ActiveSlot::default());
        let a = dispatcher.adopt_view_box(ViewBox::from_size(100.0, 100.0), ());
        let b = dispatcher.adopt_view_box(ViewBox::from_size(100.0, 100.0), ());
        (dispatcher, a, b)
    }

    #[test]
    fn active_slot_leave_only_clears_self() {
        let mut slot = ActiveSlot::default();
        slot.enter(NavigatorId(0));
        slot.enter(NavigatorId(1));
        assert!(!slot.leave(NavigatorId(0)));
        assert_eq!(slot.get(), Some(NavigatorId(1)));
        assert!(slot.leave(NavigatorId(1)));
        assert_eq!(slot.get(), None);
    }

    #[test]
    fn adopt_resolves_and_orders() {
        let mut dispatcher = Dispatcher::new(NavConfig::default(), ActiveSlot::default());
        let a = dispatcher.adopt(
            &GraphicSource {
                view_box: Some("10 20 100 50"),
                ..GraphicSource::default()
            },
            (),
        );
        let b = dispatcher.adopt(
            &GraphicSource {
                width: Some("200"),
                height: Some("100"),
                ..GraphicSource::default()
            },
            (),
        );
        assert_eq!((a, b), (NavigatorId(0), NavigatorId(1)));
        assert_eq!(dispatcher.len(), 2);
        assert_eq!(
            dispatcher.navigator(a).unwrap().initial_view_box(),
            ViewBox::new(10.0, 20.0, 100.0, 50.0)
        );
        assert_eq!(
            dispatcher.navigator(b).unwrap().view_box(),
            ViewBox::from_size(200.0, 100.0)
        );
    }

    #[test]
    fn keys_reach_only_active() {
        let (mut dispatcher, a, b) = two();
        dispatcher.pointer_enter(a);
        assert_eq!(dispatcher.key_down("ArrowDown"), KeyResponse::Handled);
        assert_eq!(dispatcher.key_down("-"), KeyResponse::Handled);
        assert_ne!(
            dispatcher.navigator(a).unwrap().view_box(),
            ViewBox::from_size(100.0, 100.0)
        );
        assert_eq!(
            dispatcher.navigator(b).unwrap().view_box(),
            ViewBox::from_size(100.0, 100.0)
        );

        assert_eq!(dispatcher.key_down("="), KeyResponse::Handled);
        assert_eq!(
            dispatcher.navigator(a).unwrap().view_box(),
            ViewBox::from_size(100.0, 100.0)
        );
        assert_eq!(dispatcher.key_down("q"), KeyResponse::Ignored);
    }

    #[test]
    fn stale_leave_keeps_new_active() {
        let (mut dispatcher, a, b) = two();
        dispatcher.pointer_enter(a);
        dispatcher.pointer_enter(b);
        dispatcher.pointer_leave(a);
        assert_eq!(dispatcher.active().get(), Some(b));
        assert!(!dispatcher.navigator(a).unwrap().is_hovered());
        dispatcher.pointer_leave(b);
        assert_eq!(dispatcher.active().get(), None);
        assert_eq!(dispatcher.key_down("+"), KeyResponse::Ignored);
    }

    #[test]
    fn modifier_is_broadcast() {
        let (mut dispatcher, a, b) = two();
        dispatcher.pointer_enter(a);
        assert_eq!(dispatcher.key_down("Alt"), KeyResponse::Ignored);
        assert!(dispatcher.navigator(a).unwrap().is_armed());
        assert!(dispatcher.navigator(b).unwrap().is_armed());

        dispatcher.key_up("Alt");
        assert!(!dispatcher.navigator(a).unwrap().is_armed());
        assert!(!dispatcher.navigator(b).unwrap().is_armed());
    }

    #[test]
    fn modifier_without_hover_arms_nothing() {
        let (mut dispatcher, a, b) = two();
        assert_eq!(dispatcher.key_down("Alt"), KeyResponse::Ignored);
        assert_eq!(dispatcher.navigator(a).unwrap().phase(), &DragPhase::Idle);
        assert_eq!(dispatcher.navigator(b).unwrap().phase(), &DragPhase::Idle);

        // Still unarmed once the pointer arrives; the press happened elsewhere.
        dispatcher.pointer_enter(b);
        assert!(!dispatcher.navigator(b).unwrap().is_armed());
    }

    #[test]
    fn modifier_release_reaches_unhovered() {
        let (mut dispatcher, a, b) = two();
        dispatcher.pointer_enter(a);
        dispatcher.key_down("Alt");
        dispatcher.pointer_leave(a);
        assert!(dispatcher.navigator(b).unwrap().is_armed());

        dispatcher.key_up("Alt");
        assert!(!dispatcher.navigator(a).unwrap().is_armed());
        assert!(!dispatcher.navigator(b).unwrap().is_armed());
    }

    #[test]
    fn modifier_release_cancels_drag() {
        let (mut dispatcher, a, _) = two();
        dispatcher.pointer_enter(a);
        dispatcher.key_down("Alt");
        let nav = dispatcher.navigator_mut(a).unwrap();
        assert!(nav.pointer_down(PointerButton::Primary, Point::ZERO));

        dispatcher.release_modifier();
        let nav = dispatcher.navigator_mut(a).unwrap();
        assert_eq!(nav.phase(), &DragPhase::Idle);
        assert!(!nav.pointer_move(Point::new(10.0, 10.0), Rect::new(0.0, 0.0, 100.0, 100.0)));
    }

    #[test]
    fn custom_modifier() {
        let config = NavConfig::default().with_modifier(ModifierKey::Control);
        let mut dispatcher = Dispatcher::new(config, ActiveSlot::default());
        let a = dispatcher.adopt_view_box(ViewBox::from_size(10.0, 10.0), ());
        dispatcher.pointer_enter(a);
        dispatcher.key_down("Alt");
        assert!(!dispatcher.navigator(a).unwrap().is_armed());
        dispatcher.key_down("Control");
        assert!(dispatcher.navigator(a).unwrap().is_armed());
        dispatcher.key_up("Alt");
        assert!(dispatcher.navigator(a).unwrap().is_armed());
    }

    #[test]
    fn unknown_ids_are_ignored() {
        let (mut dispatcher, _, _) = two();
        dispatcher.pointer_enter(NavigatorId(7));
        assert_eq!(dispatcher.active().get(), None);
        dispatcher.pointer_leave(NavigatorId(7));
        assert!(dispatcher.navigator(NavigatorId(7)).is_none());
    }
}

// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_svg_nav --heading-base-level=0

//! Understory SVG Nav: headless pan/zoom navigation over SVG view boxes.
//!
//! This crate models interactive navigation of an inline vector graphic by
//! rewriting its `viewBox`, never its content. It provides:
//! - [`ViewBox`]: the visible window, with strict parsing and the attribute
//!   formatting, plus [`ViewBox::resolve`] for initial sizing with fallbacks.
//! - [`Navigator`]: pan, zoom about a point, reset, the drag-to-pan state
//!   machine ([`drag::DragPhase`]) and wheel zoom for one graphic.
//! - [`Dispatcher`]: one navigator per adopted graphic, an explicit
//!   [`ActiveSlot`] tracking hover, and keyboard routing.
//!
//! It does **not** touch the DOM. Rendering goes through the [`Surface`]
//! trait; `understory_svg_nav_web` implements it for browser elements and
//! wires the event listeners.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Rect};
//! use understory_svg_nav::{
//!     ActiveSlot, Dispatcher, GraphicSource, NavConfig, PointerButton, ViewBox,
//! };
//!
//! let mut dispatcher = Dispatcher::new(NavConfig::default(), ActiveSlot::default());
//! let id = dispatcher.adopt(
//!     &GraphicSource { view_box: Some("0 0 400 200"), ..Default::default() },
//!     (),
//! );
//!
//! // Alt + drag across a 400x200 px rendering.
//! let bounds = Rect::new(0.0, 0.0, 400.0, 200.0);
//! dispatcher.pointer_enter(id);
//! dispatcher.key_down("Alt");
//! let nav = dispatcher.navigator_mut(id).unwrap();
//! nav.pointer_down(PointerButton::Primary, Point::new(100.0, 100.0));
//! nav.pointer_move(Point::new(200.0, 100.0), bounds);
//! assert_eq!(nav.view_box(), ViewBox::new(-100.0, 0.0, 400.0, 200.0));
//!
//! // Scroll toward the viewer over the center to zoom in.
//! nav.pointer_up();
//! nav.wheel(Point::new(200.0, 100.0), bounds, -1.0);
//! assert!(nav.view_box().width < 400.0);
//! ```
//!
//! ## Design notes
//!
//! - Zoom is unbounded. Operations that would produce a non-finite or
//!   non-positive view box are ignored instead.
//! - Drag moves are computed from the snapshot taken at drag start, so long
//!   drags do not accumulate error.
//! - Pan ratios are fractions of the current view box, so a key press moves
//!   the same share of the visible area at any zoom level.
//!
//! This crate is `no_std`.

#![no_std]

extern crate alloc;

mod config;
mod dispatch;
pub mod drag;
mod keys;
mod navigator;
mod surface;
mod view_box;

pub use config::{
    DEFAULT_ENABLE_CLASS, DEFAULT_PAN_STEP, DEFAULT_ZOOM_FACTOR, ModifierKey, NavConfig,
};
pub use dispatch::{ActiveSlot, Dispatcher, KeyResponse, NavigatorId};
pub use keys::{KeyAction, NavCommand, PanDirection};
pub use navigator::{Navigator, PointerButton};
pub use surface::{Presentation, Surface};
pub use view_box::{DEFAULT_EXTENT, GraphicSource, ParseViewBoxError, ViewBox};

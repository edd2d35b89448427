// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use understory_svg_nav::{
    ActiveSlot, Dispatcher, KeyResponse, NavCommand, NavConfig, Navigator, NavigatorId,
    PointerButton,
};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    Document, Element, Event, HtmlElement, KeyboardEvent, MouseEvent, PointerEvent, WheelEvent,
    Window,
};

use crate::listen::{listen, listen_active};
use crate::overlay;
use crate::report::warn_on_err;
use crate::style::{ADOPTED_ATTR, STYLESHEET, graphic_selector};
use crate::surface::{DomSurface, GraphicAttributes, client_point};

/// Attribute marking the injected `<style>` element.
const STYLE_MARKER_ATTR: &str = "data-svg-nav";

type Shared = Rc<RefCell<Dispatcher<DomSurface>>>;

/// Handle to the installed navigation.
///
/// Listeners keep their own references, so dropping the handle does not
/// uninstall anything.
pub struct SvgNav {
    dispatcher: Shared,
}

impl fmt::Debug for SvgNav {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SvgNav")
            .field("graphics", &self.len())
            .finish_non_exhaustive()
    }
}

impl SvgNav {
    /// Number of adopted graphics.
    pub fn len(&self) -> usize {
        self.dispatcher.borrow().len()
    }

    /// Returns `true` if no graphic carried the marker class.
    pub fn is_empty(&self) -> bool {
        self.dispatcher.borrow().is_empty()
    }

    /// Shared dispatcher, for driving navigators from outside the listeners.
    pub fn dispatcher(&self) -> Rc<RefCell<Dispatcher<DomSurface>>> {
        Rc::clone(&self.dispatcher)
    }
}

/// Adopts every marked graphic in the current document.
///
/// Graphics adopted by an earlier call are skipped, so calling this again
/// only picks up graphics added since. Each call returns its own handle.
pub fn install(config: NavConfig) -> Result<SvgNav, JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no global window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("window has no document"))?;
    install_in(&window, &document, config)
}

/// Adopts every marked graphic in `document`, with key listeners on `window`.
pub fn install_in(
    window: &Window,
    document: &Document,
    config: NavConfig,
) -> Result<SvgNav, JsValue> {
    if config.inject_styles() {
        inject_styles(document)?;
    }
    let graphics = find_graphics(document, config.enable_class())?;
    let dispatcher: Shared = Rc::new(RefCell::new(Dispatcher::new(
        config,
        ActiveSlot::default(),
    )));

    for graphic in graphics {
        if let Err(err) = adopt(document, &dispatcher, graphic) {
            log::warn!("skipping graphic: {err:?}");
        }
    }
    if dispatcher.borrow().is_empty() {
        log::debug!("no new graphics to adopt");
        return Ok(SvgNav { dispatcher });
    }
    listen_window(window, &dispatcher)?;

    let nav = SvgNav { dispatcher };
    log::info!("svg navigation enabled on {} graphic(s)", nav.len());
    Ok(nav)
}

fn find_graphics(document: &Document, class: &str) -> Result<Vec<Element>, JsValue> {
    let nodes = document.query_selector_all(&graphic_selector(class))?;
    Ok((0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect())
}

fn inject_styles(document: &Document) -> Result<(), JsValue> {
    if document
        .query_selector(&format!("style[{STYLE_MARKER_ATTR}]"))?
        .is_some()
    {
        return Ok(());
    }
    let Some(head) = document.head() else {
        return Ok(());
    };
    let style = document.create_element("style")?;
    style.set_attribute(STYLE_MARKER_ATTR, "")?;
    style.set_text_content(Some(STYLESHEET));
    head.append_child(&style)?;
    Ok(())
}

fn adopt(document: &Document, dispatcher: &Shared, graphic: Element) -> Result<NavigatorId, JsValue> {
    let attributes = GraphicAttributes::read(&graphic);
    let surface = DomSurface::wrap(document, graphic)?;
    surface.graphic().set_attribute(ADOPTED_ATTR, "")?;
    let host = surface.host().clone();
    let id = dispatcher.borrow_mut().adopt(&attributes.source(), surface);

    let config = dispatcher.borrow().config().clone();
    let run_on = Rc::clone(dispatcher);
    let overlay = overlay::build(
        document,
        &config,
        Rc::new(move |command: NavCommand| {
            with_navigator(&run_on, id, |nav| nav.apply(command));
        }),
    )?;
    host.append_child(&overlay)?;
    listen_host(&host, dispatcher, id)?;
    Ok(id)
}

fn with_navigator<R>(
    dispatcher: &Shared,
    id: NavigatorId,
    f: impl FnOnce(&mut Navigator<DomSurface>) -> R,
) -> Option<R> {
    dispatcher.borrow_mut().navigator_mut(id).map(f)
}

fn listen_host(host: &HtmlElement, dispatcher: &Shared, id: NavigatorId) -> Result<(), JsValue> {
    let d = Rc::clone(dispatcher);
    listen(host, "mouseenter", move |_: MouseEvent| {
        d.borrow_mut().pointer_enter(id);
    })?;

    let d = Rc::clone(dispatcher);
    listen(host, "mouseleave", move |_: MouseEvent| {
        d.borrow_mut().pointer_leave(id);
    })?;

    let d = Rc::clone(dispatcher);
    listen_active(host, "wheel", move |event: WheelEvent| {
        event.prevent_default();
        with_navigator(&d, id, |nav| {
            let bounds = nav.surface().bounds();
            nav.wheel(client_point(&event), bounds, event.delta_y())
        });
    })?;

    let d = Rc::clone(dispatcher);
    let capture_host = host.clone();
    listen(host, "pointerdown", move |event: PointerEvent| {
        let button = PointerButton::from_index(event.button());
        let started = with_navigator(&d, id, |nav| nav.pointer_down(button, client_point(&event)))
            .unwrap_or(false);
        if started {
            event.prevent_default();
            warn_on_err(
                capture_host.set_pointer_capture(event.pointer_id()),
                "capturing pointer",
            );
        }
    })?;

    let d = Rc::clone(dispatcher);
    listen(host, "pointermove", move |event: PointerEvent| {
        with_navigator(&d, id, |nav| {
            if !nav.is_dragging() {
                return false;
            }
            let bounds = nav.surface().bounds();
            nav.pointer_move(client_point(&event), bounds)
        });
    })?;

    let d = Rc::clone(dispatcher);
    let capture_host = host.clone();
    listen(host, "pointerup", move |event: PointerEvent| {
        let ended = with_navigator(&d, id, Navigator::pointer_up).unwrap_or(false);
        if ended {
            warn_on_err(
                capture_host.release_pointer_capture(event.pointer_id()),
                "releasing pointer capture",
            );
        }
    })?;

    for kind in ["pointercancel", "lostpointercapture"] {
        let d = Rc::clone(dispatcher);
        listen(host, kind, move |_: PointerEvent| {
            with_navigator(&d, id, Navigator::pointer_cancel);
        })?;
    }
    Ok(())
}

fn listen_window(window: &Window, dispatcher: &Shared) -> Result<(), JsValue> {
    let d = Rc::clone(dispatcher);
    listen(window, "keydown", move |event: KeyboardEvent| {
        let response = d.borrow_mut().key_down(&event.key());
        if response == KeyResponse::Handled {
            event.prevent_default();
        }
    })?;

    let d = Rc::clone(dispatcher);
    listen(window, "keyup", move |event: KeyboardEvent| {
        d.borrow_mut().key_up(&event.key());
    })?;

    // Key-up events are not delivered once the window loses focus.
    let d = Rc::clone(dispatcher);
    listen(window, "blur", move |_: Event| {
        d.borrow_mut().release_modifier();
    })?;
    Ok(())
}

// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::fmt;

use kurbo::{Point, Rect, Size};
use understory_svg_nav::{GraphicSource, Presentation, Surface, ViewBox};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlElement, MouseEvent};

use crate::report::warn_on_err;
use crate::style::{DRAGGING_CLASS, GRAB_READY_CLASS, HOST_CLASS, HOVER_CLASS};

/// Raw attributes of a graphic, read before it is wrapped.
#[derive(Debug, Default)]
pub(crate) struct GraphicAttributes {
    view_box: Option<String>,
    width: Option<String>,
    height: Option<String>,
    rendered: Size,
}

impl GraphicAttributes {
    pub(crate) fn read(graphic: &Element) -> Self {
        Self {
            view_box: graphic.get_attribute("viewBox"),
            width: graphic.get_attribute("width"),
            height: graphic.get_attribute("height"),
            rendered: Size::new(
                f64::from(graphic.client_width()),
                f64::from(graphic.client_height()),
            ),
        }
    }

    pub(crate) fn source(&self) -> GraphicSource<'_> {
        GraphicSource {
            view_box: self.view_box.as_deref(),
            width: self.width.as_deref(),
            height: self.height.as_deref(),
            rendered: self.rendered,
        }
    }
}

/// DOM rendering target: an `svg` element and the host wrapped around it.
pub struct DomSurface {
    graphic: Element,
    host: HtmlElement,
}

impl fmt::Debug for DomSurface {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("DomSurface { .. }")
    }
}

impl DomSurface {
    /// Wraps `graphic` in a new host element at its current position.
    pub fn wrap(document: &Document, graphic: Element) -> Result<Self, JsValue> {
        let parent = graphic
            .parent_node()
            .ok_or_else(|| JsValue::from_str("graphic has no parent node"))?;
        let host = document.create_element("div")?.dyn_into::<HtmlElement>()?;
        host.set_class_name(HOST_CLASS);
        parent.insert_before(&host, Some(&graphic))?;
        host.append_child(&graphic)?;
        Ok(Self { graphic, host })
    }

    /// The adopted `svg` element.
    pub fn graphic(&self) -> &Element {
        &self.graphic
    }

    /// The host wrapped around the graphic.
    pub fn host(&self) -> &HtmlElement {
        &self.host
    }

    /// The graphic's rendered bounding box, in client pixels.
    pub fn bounds(&self) -> Rect {
        let rect = self.graphic.get_bounding_client_rect();
        Rect::from_origin_size((rect.left(), rect.top()), (rect.width(), rect.height()))
    }
}

impl Surface for DomSurface {
    fn set_view_box(&mut self, view_box: ViewBox) {
        warn_on_err(
            self.graphic
                .set_attribute("viewBox", &view_box.to_string()),
            "setting viewBox",
        );
    }

    fn set_presentation(&mut self, presentation: Presentation) {
        let classes = self.host.class_list();
        for (class, on) in [
            (HOVER_CLASS, presentation.hovered),
            (GRAB_READY_CLASS, presentation.grab_ready),
            (DRAGGING_CLASS, presentation.dragging),
        ] {
            warn_on_err(classes.toggle_with_force(class, on), "toggling host class");
        }
    }
}

/// Client position of a mouse, pointer, or wheel event.
pub(crate) fn client_point(event: &MouseEvent) -> Point {
    Point::new(f64::from(event.client_x()), f64::from(event.client_y()))
}

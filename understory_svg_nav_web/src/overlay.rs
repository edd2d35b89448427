// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Overlay controls: reset and help buttons, and the optional pad.

#![cfg_attr(
    not(target_arch = "wasm32"),
    allow(dead_code, reason = "the DOM builder is only compiled for wasm32")
)]

use understory_svg_nav::{ModifierKey, NavCommand, PanDirection};

pub(crate) const ICON_RESET: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="1.5" stroke-linecap="round" stroke-linejoin="round"><path d="M3 7V5a2 2 0 0 1 2-2h2"/><path d="M17 3h2a2 2 0 0 1 2 2v2"/><path d="M21 17v2a2 2 0 0 1-2 2h-2"/><path d="M7 21H5a2 2 0 0 1-2-2v-2"/><circle cx="12" cy="12" r="1"/><path d="M18.944 12.33a1 1 0 0 0 0-.66 7.5 7.5 0 0 0-13.888 0 1 1 0 0 0 0 .66 7.5 7.5 0 0 0 13.888 0"/></svg>"#;

pub(crate) const ICON_HELP: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="1.5" stroke-linecap="round" stroke-linejoin="round"><circle cx="12" cy="12" r="10"/><path d="M9.09 9a3 3 0 0 1 5.83 1c0 2-3 3-3 3"/><path d="M12 17h.01"/></svg>"#;

/// One cell of the 3x3 directional pad. Spacers have no command.
#[derive(Clone, Copy, Debug)]
pub(crate) struct PadCell {
    pub(crate) label: &'static str,
    pub(crate) title: &'static str,
    pub(crate) command: Option<NavCommand>,
}

const fn cell(label: &'static str, title: &'static str, command: NavCommand) -> PadCell {
    PadCell {
        label,
        title,
        command: Some(command),
    }
}

const SPACER: PadCell = PadCell {
    label: "",
    title: "",
    command: None,
};

/// Pad cells in row-major order.
pub(crate) const PAD: [PadCell; 9] = [
    cell("\u{FF0B}", "Zoom in", NavCommand::ZoomIn),
    cell("\u{27F2}", "Reset (=)", NavCommand::Reset),
    cell("\u{FF0D}", "Zoom out", NavCommand::ZoomOut),
    cell("\u{2190}", "Pan left", NavCommand::Pan(PanDirection::Left)),
    cell("\u{2191}", "Pan up", NavCommand::Pan(PanDirection::Up)),
    cell("\u{2192}", "Pan right", NavCommand::Pan(PanDirection::Right)),
    SPACER,
    cell("\u{2193}", "Pan down", NavCommand::Pan(PanDirection::Down)),
    SPACER,
];

/// Tooltip markup describing the bindings for `modifier`.
pub(crate) fn help_html(modifier: ModifierKey) -> String {
    let modifier = modifier.key_name().to_ascii_lowercase();
    format!(
        "<p><strong>Pan</strong>: {modifier}+mouse or arrow keys</p>\
         <p><strong>Zoom</strong>: mouse wheel or '+'/'-'</p>\
         <p><strong>Reset view</strong>: icon or '='</p>"
    )
}

#[cfg(target_arch = "wasm32")]
pub(crate) use dom::build;

#[cfg(target_arch = "wasm32")]
mod dom {
    use std::rc::Rc;

    use understory_svg_nav::{NavCommand, NavConfig};
    use wasm_bindgen::{JsCast, JsValue};
    use web_sys::{Document, Event, HtmlButtonElement, HtmlElement};

    use super::{ICON_HELP, ICON_RESET, PAD, help_html};
    use crate::listen::listen;
    use crate::style::{
        BUTTON_CLASS, CONTROLS_CLASS, HELP_WRAP_CLASS, OVERLAY_CLASS, PAD_CLASS, TOOLTIP_CLASS,
    };

    fn div(document: &Document, class: &str) -> Result<HtmlElement, JsValue> {
        let el = document.create_element("div")?.dyn_into::<HtmlElement>()?;
        el.set_class_name(class);
        Ok(el)
    }

    fn button(
        document: &Document,
        title: &str,
        on_click: Option<Rc<dyn Fn()>>,
    ) -> Result<HtmlButtonElement, JsValue> {
        let btn = document
            .create_element("button")?
            .dyn_into::<HtmlButtonElement>()?;
        btn.set_class_name(BUTTON_CLASS);
        btn.set_type("button");
        btn.set_title(title);
        if let Some(on_click) = on_click {
            listen(&btn, "click", move |event: Event| {
                event.prevent_default();
                on_click();
            })?;
        }
        Ok(btn)
    }

    /// Builds the overlay; `run` executes a command on the owning navigator.
    pub(crate) fn build(
        document: &Document,
        config: &NavConfig,
        run: Rc<dyn Fn(NavCommand)>,
    ) -> Result<HtmlElement, JsValue> {
        let overlay = div(document, OVERLAY_CLASS)?;
        let controls = div(document, CONTROLS_CLASS)?;

        let reset_run = Rc::clone(&run);
        let reset = button(
            document,
            "Reset view",
            Some(Rc::new(move || reset_run(NavCommand::Reset))),
        )?;
        reset.set_inner_html(ICON_RESET);
        controls.append_child(&reset)?;

        if config.control_pad() {
            let pad = div(document, PAD_CLASS)?;
            for cell in PAD {
                let on_click = cell.command.map(|command| {
                    let run = Rc::clone(&run);
                    Rc::new(move || run(command)) as Rc<dyn Fn()>
                });
                let btn = button(document, cell.title, on_click)?;
                btn.set_text_content(Some(cell.label));
                if cell.command.is_none() {
                    btn.style().set_property("visibility", "hidden")?;
                    btn.set_tab_index(-1);
                    btn.set_attribute("aria-hidden", "true")?;
                }
                pad.append_child(&btn)?;
            }
            controls.append_child(&pad)?;
        }

        let help_wrap = div(document, HELP_WRAP_CLASS)?;
        let help = button(document, "Help", None)?;
        help.set_inner_html(ICON_HELP);
        let tooltip = div(document, TOOLTIP_CLASS)?;
        tooltip.set_inner_html(&help_html(config.modifier()));
        help_wrap.append_child(&help)?;
        help_wrap.append_child(&tooltip)?;
        controls.append_child(&help_wrap)?;

        overlay.append_child(&controls)?;
        Ok(overlay)
    }
}

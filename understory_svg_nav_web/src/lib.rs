// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_svg_nav_web --heading-base-level=0

//! Browser backend for `understory_svg_nav`.
//!
//! When targeting `wasm32`, this crate adopts every inline `<svg>` carrying
//! the marker class (`svg-nav-enabled` by default) and makes it navigable:
//!
//! - mouse wheel zooms at the cursor;
//! - `Alt` + drag pans;
//! - while the pointer is over a graphic, `+`/`-` zoom, the arrow keys pan,
//!   and `=` resets;
//! - an overlay offers a reset button, a help tooltip, and optionally a
//!   directional pad.
//!
//! Each graphic is wrapped in a `div.svg-nav-host`; only its `viewBox`
//! attribute is ever rewritten.
//!
//! # Usage
//!
//! With the default `start` feature the module installs itself with
//! [`understory_svg_nav::NavConfig::default`] when it is instantiated. Without
//! it, call `install` from Rust or `installSvgNav` from JavaScript once the
//! document is parsed.
//!
//! ```no_run
//! #[cfg(target_arch = "wasm32")]
//! fn enable() -> Result<(), wasm_bindgen::JsValue> {
//!     use understory_svg_nav::NavConfig;
//!
//!     let nav = understory_svg_nav_web::install(NavConfig::default().with_control_pad(true))?;
//!     assert!(!nav.is_empty());
//!     Ok(())
//! }
//! ```
//!
//! Notes:
//! - Graphics are discovered when `install` runs. Running it again adopts
//!   only graphics added since; adopted graphics carry `data-svg-nav-adopted`.
//! - Drags capture the pointer on the host, so a drag that leaves one
//!   graphic never moves another.
//! - Listeners live for the lifetime of the document.

pub mod style;

mod overlay;
mod report;

#[cfg(target_arch = "wasm32")]
mod install;
#[cfg(target_arch = "wasm32")]
mod listen;
#[cfg(target_arch = "wasm32")]
mod surface;

#[cfg(target_arch = "wasm32")]
pub use install::{SvgNav, install, install_in};
#[cfg(target_arch = "wasm32")]
pub use surface::DomSurface;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::wasm_bindgen;

/// Routes `log` output to the browser console and panics to `console.error`.
///
/// Safe to call more than once.
#[cfg(target_arch = "wasm32")]
pub fn init_logging() {
    console_error_panic_hook::set_once();
    let level = if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    };
    // Fails only if a logger is already installed.
    let _ = console_log::init_with_level(level);
}

/// Installs navigation with the default configuration when the module loads.
#[cfg(all(target_arch = "wasm32", feature = "start"))]
#[wasm_bindgen(start)]
pub fn start() -> Result<(), wasm_bindgen::JsValue> {
    init_logging();
    install(understory_svg_nav::NavConfig::default())?;
    Ok(())
}

/// JavaScript entry point for builds without the `start` feature.
///
/// Returns the number of newly adopted graphics. Graphics that are already
/// navigable are skipped, so with `start` enabled this only picks up
/// graphics added after the module loaded.
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(js_name = installSvgNav)]
pub fn install_svg_nav(control_pad: bool) -> Result<u32, wasm_bindgen::JsValue> {
    init_logging();
    let config = understory_svg_nav::NavConfig::default().with_control_pad(control_pad);
    let nav = install(config)?;
    Ok(u32::try_from(nav.len()).unwrap_or(u32::MAX))
}

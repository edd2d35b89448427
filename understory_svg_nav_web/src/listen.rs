// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Event listener registration.
//!
//! Listeners live as long as the document, so their closures are leaked
//! once registered.

use js_sys::Function;
use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::convert::FromWasmAbi;
use web_sys::{AddEventListenerOptions, EventTarget};

pub(crate) fn listen<E, F>(target: &EventTarget, kind: &str, handler: F) -> Result<(), JsValue>
where
    E: FromWasmAbi + 'static,
    F: FnMut(E) + 'static,
{
    let closure = Closure::<dyn FnMut(E)>::new(handler);
    target.add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref::<Function>())?;
    closure.forget();
    Ok(())
}

/// Like [`listen`], but allows the handler to call `preventDefault`.
///
/// Browsers register `wheel` listeners on some targets as passive by default.
pub(crate) fn listen_active<E, F>(
    target: &EventTarget,
    kind: &str,
    handler: F,
) -> Result<(), JsValue>
where
    E: FromWasmAbi + 'static,
    F: FnMut(E) + 'static,
{
    let closure = Closure::<dyn FnMut(E)>::new(handler);
    let options = AddEventListenerOptions::new();
    options.set_passive(false);
    target.add_event_listener_with_callback_and_add_event_listener_options(
        kind,
        closure.as_ref().unchecked_ref::<Function>(),
        &options,
    )?;
    closure.forget();
    Ok(())
}

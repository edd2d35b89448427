// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Class names, selectors, and the default stylesheet.

/// Wrapper inserted around every adopted graphic.
pub const HOST_CLASS: &str = "svg-nav-host";
/// Host class while the pointer is over it.
pub const HOVER_CLASS: &str = "svg-nav-hover";
/// Host class while a press would start a drag.
pub const GRAB_READY_CLASS: &str = "svg-nav-grab-ready";
/// Host class while dragging.
pub const DRAGGING_CLASS: &str = "svg-nav-dragging";
/// Overlay container positioned over the graphic.
pub const OVERLAY_CLASS: &str = "svg-nav-overlay";
/// Button group inside the overlay.
pub const CONTROLS_CLASS: &str = "svg-nav-controls";
/// Directional pad inside the controls.
pub const PAD_CLASS: &str = "svg-nav-pad";
/// Every overlay button.
pub const BUTTON_CLASS: &str = "svg-nav-btn";
/// Wrapper of the help button and its tooltip.
pub const HELP_WRAP_CLASS: &str = "svg-nav-help-wrap";
/// Help tooltip.
pub const TOOLTIP_CLASS: &str = "svg-nav-tooltip";

/// Attribute set on every adopted graphic.
pub const ADOPTED_ATTR: &str = "data-svg-nav-adopted";

/// Selector for marked graphics that have not been adopted yet.
///
/// Excluding adopted graphics keeps repeated installs from wrapping a
/// graphic twice.
pub fn graphic_selector(enable_class: &str) -> String {
    format!("svg.{enable_class}:not([{ADOPTED_ATTR}])")
}

/// Stylesheet injected once per document unless disabled in the config.
pub const STYLESHEET: &str = r#".svg-nav-host {
  position: relative;
  display: inline-block;
  max-width: 100%;
}
.svg-nav-host > svg {
  display: block;
  max-width: 100%;
}
.svg-nav-overlay {
  position: absolute;
  top: 0.25rem;
  right: 0.25rem;
  opacity: 0;
  transition: opacity 120ms ease-in-out;
  pointer-events: none;
}
.svg-nav-host.svg-nav-hover .svg-nav-overlay {
  opacity: 1;
  pointer-events: auto;
}
.svg-nav-controls {
  display: flex;
  gap: 0.25rem;
  align-items: flex-start;
}
.svg-nav-pad {
  display: grid;
  grid-template-columns: repeat(3, 1.75rem);
  gap: 0.125rem;
}
.svg-nav-btn {
  width: 1.75rem;
  height: 1.75rem;
  padding: 0.25rem;
  border: 1px solid rgba(0, 0, 0, 0.2);
  border-radius: 0.25rem;
  background: rgba(255, 255, 255, 0.9);
  color: inherit;
  cursor: pointer;
  line-height: 1;
}
.svg-nav-btn svg {
  width: 100%;
  height: 100%;
}
.svg-nav-help-wrap {
  position: relative;
}
.svg-nav-tooltip {
  display: none;
  position: absolute;
  top: 100%;
  right: 0;
  margin-top: 0.25rem;
  padding: 0.5rem 0.75rem;
  border-radius: 0.25rem;
  background: rgba(0, 0, 0, 0.85);
  color: #fff;
  font-size: 0.8rem;
  white-space: nowrap;
}
.svg-nav-tooltip p {
  margin: 0.125rem 0;
}
.svg-nav-help-wrap:hover .svg-nav-tooltip {
  display: block;
}
.svg-nav-host.svg-nav-grab-ready {
  cursor: grab;
}
.svg-nav-host.svg-nav-dragging {
  cursor: grabbing;
  user-select: none;
}
"#;

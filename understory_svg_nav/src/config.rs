// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Class that opts an `svg` element into navigation.
pub const DEFAULT_ENABLE_CLASS: &str = "svg-nav-enabled";

/// Scale applied per zoom step; zooming in uses its reciprocal.
pub const DEFAULT_ZOOM_FACTOR: f64 = 1.15;

/// Fraction of the current view box moved per pan key press.
pub const DEFAULT_PAN_STEP: f64 = 0.12;

/// Key that arms drag-to-pan while held.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum ModifierKey {
    /// `Alt` (`Option` on macOS).
    #[default]
    Alt,
    /// `Control`.
    Control,
    /// `Shift`.
    Shift,
    /// `Meta` (`Command` on macOS).
    Meta,
}

impl ModifierKey {
    /// Returns the `KeyboardEvent.key` value for this modifier.
    #[must_use]
    pub fn key_name(self) -> &'static str {
        match self {
            Self::Alt => "Alt",
            Self::Control => "Control",
            Self::Shift => "Shift",
            Self::Meta => "Meta",
        }
    }

    /// Returns `true` if `key` names this modifier.
    #[must_use]
    pub fn matches(self, key: &str) -> bool {
        key == self.key_name()
    }
}

/// Navigation settings shared by every adopted graphic.
///
/// Setters reject values that would break the view box invariants and keep
/// the previous value instead.
#[derive(Clone, Debug, PartialEq)]
pub struct NavConfig {
    enable_class: &'static str,
    zoom_factor: f64,
    pan_step: f64,
    modifier: ModifierKey,
    control_pad: bool,
    inject_styles: bool,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            enable_class: DEFAULT_ENABLE_CLASS,
            zoom_factor: DEFAULT_ZOOM_FACTOR,
            pan_step: DEFAULT_PAN_STEP,
            modifier: ModifierKey::default(),
            control_pad: false,
            inject_styles: true,
        }
    }
}

impl NavConfig {
    /// Sets the class that marks graphics for adoption.
    ///
    /// The class is used verbatim in a selector, so it must be a plain CSS
    /// identifier: ASCII letters, digits, `-` and `_`, not starting with a
    /// digit or with `-` followed by a digit.
    #[must_use]
    pub fn with_enable_class(mut self, class: &'static str) -> Self {
        if is_css_identifier(class) {
            self.enable_class = class;
        }
        self
    }

    /// Sets the per-step zoom factor. Must be finite, positive, and not `1`.
    ///
    /// Factors below one are inverted so that the stored value always zooms
    /// out.
    #[must_use]
    pub fn with_zoom_factor(mut self, factor: f64) -> Self {
        if factor.is_finite() && factor > 0.0 && factor != 1.0 {
            self.zoom_factor = if factor < 1.0 { 1.0 / factor } else { factor };
        }
        self
    }

    /// Sets the pan step as a fraction of the view box. Must be finite and positive.
    #[must_use]
    pub fn with_pan_step(mut self, step: f64) -> Self {
        if step.is_finite() && step > 0.0 {
            self.pan_step = step;
        }
        self
    }

    /// Sets the key that arms drag-to-pan.
    #[must_use]
    pub fn with_modifier(mut self, modifier: ModifierKey) -> Self {
        self.modifier = modifier;
        self
    }

    /// Shows the directional control pad in the overlay.
    #[must_use]
    pub fn with_control_pad(mut self, enabled: bool) -> Self {
        self.control_pad = enabled;
        self
    }

    /// Controls whether the default stylesheet is injected.
    #[must_use]
    pub fn with_injected_styles(mut self, enabled: bool) -> Self {
        self.inject_styles = enabled;
        self
    }

    /// Class that marks graphics for adoption.
    #[must_use]
    pub fn enable_class(&self) -> &'static str {
        self.enable_class
    }

    /// Zoom-out factor per step (always greater than one).
    #[must_use]
    pub fn zoom_factor(&self) -> f64 {
        self.zoom_factor
    }

    /// Zoom-in factor per step, the reciprocal of [`NavConfig::zoom_factor`].
    #[must_use]
    pub fn zoom_in_factor(&self) -> f64 {
        1.0 / self.zoom_factor
    }

    /// Pan step as a fraction of the view box.
    #[must_use]
    pub fn pan_step(&self) -> f64 {
        self.pan_step
    }

    /// Key that arms drag-to-pan.
    #[must_use]
    pub fn modifier(&self) -> ModifierKey {
        self.modifier
    }

    /// Whether the overlay includes the directional control pad.
    #[must_use]
    pub fn control_pad(&self) -> bool {
        self.control_pad
    }

    /// Whether the default stylesheet is injected.
    #[must_use]
    pub fn inject_styles(&self) -> bool {
        self.inject_styles
    }
}

fn is_css_identifier(s: &str) -> bool {
    let bytes = s.as_bytes();
    let starts_ok = match bytes {
        [] | [b'-'] => false,
        [b'-', second, ..] => !second.is_ascii_digit(),
        [first, ..] => !first.is_ascii_digit(),
    };
    starts_ok
        && bytes
            .iter()
            .all(|b| b.is_ascii_alphanumeric() || *b == b'-' || *b == b'_')
}

#[cfg(test)]
mod tests {
    use super::{ModifierKey, NavConfig, is_css_identifier};

    #[test]
    fn defaults() {
        let config = NavConfig::default();
        assert_eq!(config.enable_class(), "svg-nav-enabled");
        assert_eq!(config.zoom_factor(), 1.15);
        assert_eq!(config.pan_step(), 0.12);
        assert_eq!(config.modifier(), ModifierKey::Alt);
        assert!(!config.control_pad());
        assert!(config.inject_styles());
    }

    #[test]
    fn invalid_values_keep_previous() {
        let config = NavConfig::default()
            .with_zoom_factor(f64::NAN)
            .with_zoom_factor(0.0)
            .with_zoom_factor(1.0)
            .with_pan_step(-0.5)
            .with_pan_step(f64::INFINITY)
            .with_enable_class("two words")
            .with_enable_class("");
        assert_eq!(config, NavConfig::default());
    }

    #[test]
    fn enable_class_must_be_selector_safe() {
        for bad in ["a.b", "x]", "#id", "svg nav", "1st", "-2x", "-", "é"] {
            assert!(!is_css_identifier(bad), "{bad:?}");
            assert_eq!(
                NavConfig::default().with_enable_class(bad).enable_class(),
                "svg-nav-enabled"
            );
        }
        for good in ["pan-zoom", "_nav", "-x", "--custom", "nav2"] {
            assert_eq!(NavConfig::default().with_enable_class(good).enable_class(), good);
        }
    }

    #[test]
    fn zoom_factor_is_normalized_above_one() {
        let config = NavConfig::default().with_zoom_factor(0.5);
        assert_eq!(config.zoom_factor(), 2.0);
        assert_eq!(config.zoom_in_factor(), 0.5);
    }

    #[test]
    fn modifier_matches_key_name() {
        assert!(ModifierKey::Alt.matches("Alt"));
        assert!(!ModifierKey::Alt.matches("Control"));
        assert!(ModifierKey::Meta.matches("Meta"));
    }
}

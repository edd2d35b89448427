// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;
use core::str::FromStr;

use kurbo::{Point, Rect, Size, Vec2};

/// Edge length used when neither attributes nor layout provide a size.
pub const DEFAULT_EXTENT: f64 = 100.0;

/// Visible window into a graphic's user coordinate space.
///
/// This is the value of an SVG `viewBox` attribute: an origin plus a size.
/// A `ViewBox` produced by this crate always has finite components and a
/// strictly positive width and height.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewBox {
    /// Minimum x of the visible region.
    pub x: f64,
    /// Minimum y of the visible region.
    pub y: f64,
    /// Width of the visible region.
    pub width: f64,
    /// Height of the visible region.
    pub height: f64,
}

impl ViewBox {
    /// Creates a view box from its four components.
    ///
    /// No validation is performed; see [`ViewBox::is_valid`].
    #[must_use]
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Creates a view box at the origin with the given size.
    #[must_use]
    pub const fn from_size(width: f64, height: f64) -> Self {
        Self::new(0.0, 0.0, width, height)
    }

    /// Returns `true` if all components are finite and the size is positive.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.x.is_finite()
            && self.y.is_finite()
            && self.width.is_finite()
            && self.height.is_finite()
            && self.width > 0.0
            && self.height > 0.0
    }

    /// Returns the origin (minimum corner).
    #[must_use]
    pub fn origin(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Returns the size.
    #[must_use]
    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Returns the view box as a rectangle in user space.
    #[must_use]
    pub fn to_rect(&self) -> Rect {
        Rect::from_origin_size(self.origin(), self.size())
    }

    /// Creates a view box covering `rect`.
    #[must_use]
    pub fn from_rect(rect: Rect) -> Self {
        let rect = rect.abs();
        Self::new(rect.x0, rect.y0, rect.width(), rect.height())
    }

    /// Maps a fractional position inside the view box to user space.
    ///
    /// `(0, 0)` is the minimum corner and `(1, 1)` the maximum corner.
    #[must_use]
    pub fn point_at(&self, fraction: Point) -> Point {
        Point::new(
            self.x + self.width * fraction.x,
            self.y + self.height * fraction.y,
        )
    }

    /// Returns this view box shifted by `delta` user units.
    #[must_use]
    pub fn translated(&self, delta: Vec2) -> Self {
        Self::new(self.x + delta.x, self.y + delta.y, self.width, self.height)
    }

    /// Returns this view box scaled by `factor` about a fractional anchor.
    ///
    /// The user-space point at `fraction` maps to the same fraction of the
    /// scaled box.
    #[must_use]
    pub fn scaled_about(&self, fraction: Point, factor: f64) -> Self {
        let anchor = self.point_at(fraction);
        let width = self.width * factor;
        let height = self.height * factor;
        Self::new(
            anchor.x - width * fraction.x,
            anchor.y - height * fraction.y,
            width,
            height,
        )
    }

    /// Resolves the initial view box for a graphic.
    ///
    /// Precedence:
    /// 1. the declared `viewBox`, if it parses and is valid;
    /// 2. per axis, the `width`/`height` attribute, then the rendered size,
    ///    then [`DEFAULT_EXTENT`], with the origin at `(0, 0)`.
    ///
    /// This never fails.
    #[must_use]
    pub fn resolve(source: &GraphicSource<'_>) -> Self {
        if let Some(declared) = source.view_box {
            match declared.parse::<Self>() {
                Ok(view_box) => return view_box,
                Err(err) => log::debug!("ignoring viewBox {declared:?}: {err}"),
            }
        }
        let width = positive_attr(source.width)
            .or_else(|| positive(source.rendered.width))
            .unwrap_or(DEFAULT_EXTENT);
        let height = positive_attr(source.height)
            .or_else(|| positive(source.rendered.height))
            .unwrap_or(DEFAULT_EXTENT);
        log::debug!("resolved view box from size: {width} x {height}");
        Self::from_size(width, height)
    }
}

fn positive(value: f64) -> Option<f64> {
    (value.is_finite() && value > 0.0).then_some(value)
}

fn positive_attr(value: Option<&str>) -> Option<f64> {
    value?.trim().parse::<f64>().ok().and_then(positive)
}

/// Writes the `viewBox` attribute form: `"{x} {y} {width} {height}"`.
impl fmt::Display for ViewBox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // `+ 0.0` folds negative zero so it prints as `0`.
        write!(
            f,
            "{} {} {} {}",
            self.x + 0.0,
            self.y + 0.0,
            self.width + 0.0,
            self.height + 0.0
        )
    }
}

/// Strict parser for the `viewBox` attribute form.
///
/// Components are separated by any run of whitespace. Components after the
/// fourth are ignored.
impl FromStr for ViewBox {
    type Err = ParseViewBoxError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split_whitespace();
        let mut values = [0.0_f64; 4];
        for (index, slot) in values.iter_mut().enumerate() {
            let part = parts
                .next()
                .ok_or(ParseViewBoxError::MissingComponent { index })?;
            let value = part
                .parse::<f64>()
                .map_err(|_| ParseViewBoxError::InvalidNumber { index })?;
            if !value.is_finite() {
                return Err(ParseViewBoxError::NonFinite { index });
            }
            *slot = value;
        }
        let [x, y, width, height] = values;
        if width <= 0.0 || height <= 0.0 {
            return Err(ParseViewBoxError::NonPositiveSize);
        }
        Ok(Self::new(x, y, width, height))
    }
}

/// Attributes and layout of a graphic, as read before adoption.
#[derive(Clone, Copy, Debug, Default)]
pub struct GraphicSource<'a> {
    /// Raw `viewBox` attribute, if present.
    pub view_box: Option<&'a str>,
    /// Raw `width` attribute, if present.
    pub width: Option<&'a str>,
    /// Raw `height` attribute, if present.
    pub height: Option<&'a str>,
    /// Rendered size in CSS pixels; zero when not laid out.
    pub rendered: Size,
}

/// Error returned by [`ViewBox::from_str`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParseViewBoxError {
    /// Fewer than four components were present.
    MissingComponent {
        /// Index of the first missing component.
        index: usize,
    },
    /// A component is not a number.
    InvalidNumber {
        /// Index of the offending component.
        index: usize,
    },
    /// A component is infinite or NaN.
    NonFinite {
        /// Index of the offending component.
        index: usize,
    },
    /// Width or height is zero or negative.
    NonPositiveSize,
}

impl fmt::Display for ParseViewBoxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingComponent { index } => {
                write!(f, "view box is missing component {index}")
            }
            Self::InvalidNumber { index } => {
                write!(f, "view box component {index} is not a number")
            }
            Self::NonFinite { index } => write!(f, "view box component {index} is not finite"),
            Self::NonPositiveSize => f.write_str("view box width and height must be positive"),
        }
    }
}

impl core::error::Error for ParseViewBoxError {}

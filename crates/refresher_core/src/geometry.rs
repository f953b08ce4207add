//! Geometry for scroll containers
//!
//! Coordinates follow the usual scroll-view convention: y grows downward and
//! `content_offset.y == 0` is the natural rest position when there is no top
//! inset. Scrolling further into the content increases the offset.

use serde::{Deserialize, Serialize};

/// 2D point
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const ZERO: Point = Point { x: 0.0, y: 0.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Same point with a different vertical coordinate
    pub fn with_y(self, y: f32) -> Self {
        Self { x: self.x, y }
    }
}

/// 2D size
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub const ZERO: Size = Size {
        width: 0.0,
        height: 0.0,
    };

    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// 2D rectangle
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub origin: Point,
    pub size: Size,
}

impl Rect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            origin: Point::new(x, y),
            size: Size::new(width, height),
        }
    }

    pub fn y(&self) -> f32 {
        self.origin.y
    }

    pub fn height(&self) -> f32 {
        self.size.height
    }

    /// Bottom edge (origin + height)
    pub fn max_y(&self) -> f32 {
        self.origin.y + self.size.height
    }
}

/// Padding around scrollable content
///
/// A scroll container adds its insets to the scrollable area, so a bottom
/// inset of 50 lets the user scroll 50 points past the end of the content.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EdgeInsets {
    pub top: f32,
    pub left: f32,
    pub bottom: f32,
    pub right: f32,
}

impl EdgeInsets {
    pub const ZERO: EdgeInsets = EdgeInsets {
        top: 0.0,
        left: 0.0,
        bottom: 0.0,
        right: 0.0,
    };

    pub const fn new(top: f32, left: f32, bottom: f32, right: f32) -> Self {
        Self {
            top,
            left,
            bottom,
            right,
        }
    }

    pub fn uniform(inset: f32) -> Self {
        Self::new(inset, inset, inset, inset)
    }

    /// Same insets with a different bottom edge
    pub fn with_bottom(self, bottom: f32) -> Self {
        Self { bottom, ..self }
    }
}

//! Axis-aligned rectangle primitive and its algebra.
//!
//! Coordinates are `f64` with the origin at the lower-left corner. Width and
//! height are validated to be non-negative at every mutation site; everything
//! else (intersection, union, center, area, aspect ratio) is pure.

/// Geometry-level error.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum GeometryError {
    /// A negative width or height was supplied.
    InvalidDimension {
        /// The rejected value.
        value: f64,
    },
    /// Aspect ratio requested on a rectangle with zero height.
    DegenerateAspectRatio,
}

/// Axis-aligned rectangle: position of the lower-left corner plus extent.
///
/// Equality is structural (all four fields). Two rectangles that merely touch
/// along an edge do **not** intersect — all overlap tests use strict
/// inequalities, so tightly packed layouts report zero-area contact as
/// overlap-free.
///
/// # Example
///
/// ```
/// use rectcloud::Rectangle;
///
/// let a = Rectangle::new(0.0, 0.0, 10.0, 10.0).unwrap();
/// let b = Rectangle::new(10.0, 0.0, 5.0, 5.0).unwrap();
///
/// assert!(!a.intersects(&b)); // edge contact only
/// assert_eq!(a.union(&b), Rectangle::new(0.0, 0.0, 15.0, 10.0).unwrap());
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Default)]
pub struct Rectangle {
    x: f64,
    y: f64,
    w: f64,
    h: f64,
}

impl Rectangle {
    /// The zero rectangle at the origin.
    pub const ZERO: Self = Self {
        x: 0.0,
        y: 0.0,
        w: 0.0,
        h: 0.0,
    };

    /// Create a rectangle, rejecting negative extents.
    pub fn new(x: f64, y: f64, w: f64, h: f64) -> Result<Self, GeometryError> {
        if w < 0.0 {
            return Err(GeometryError::InvalidDimension { value: w });
        }
        if h < 0.0 {
            return Err(GeometryError::InvalidDimension { value: h });
        }
        Ok(Self { x, y, w, h })
    }

    /// Construct from components already known to be valid (`w ≥ 0`, `h ≥ 0`).
    pub(crate) const fn from_parts(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self { x, y, w, h }
    }

    /// X coordinate of the left edge.
    pub fn x(&self) -> f64 {
        self.x
    }

    /// Y coordinate of the bottom edge.
    pub fn y(&self) -> f64 {
        self.y
    }

    /// Width.
    pub fn w(&self) -> f64 {
        self.w
    }

    /// Height.
    pub fn h(&self) -> f64 {
        self.h
    }

    /// X coordinate of the right edge (`x + w`).
    pub fn right(&self) -> f64 {
        self.x + self.w
    }

    /// Y coordinate of the top edge (`y + h`).
    pub fn top(&self) -> f64 {
        self.y + self.h
    }

    /// Move the left edge.
    pub fn set_x(&mut self, x: f64) {
        self.x = x;
    }

    /// Move the bottom edge.
    pub fn set_y(&mut self, y: f64) {
        self.y = y;
    }

    /// Move the lower-left corner.
    pub fn set_position(&mut self, x: f64, y: f64) {
        self.x = x;
        self.y = y;
    }

    /// Shift by an offset.
    pub fn translate(&mut self, dx: f64, dy: f64) {
        self.x += dx;
        self.y += dy;
    }

    /// Set the width. Rejects negative values without touching the rectangle.
    pub fn set_w(&mut self, w: f64) -> Result<(), GeometryError> {
        if w < 0.0 {
            return Err(GeometryError::InvalidDimension { value: w });
        }
        self.w = w;
        Ok(())
    }

    /// Set the height. Rejects negative values without touching the rectangle.
    pub fn set_h(&mut self, h: f64) -> Result<(), GeometryError> {
        if h < 0.0 {
            return Err(GeometryError::InvalidDimension { value: h });
        }
        self.h = h;
        Ok(())
    }

    /// Center point.
    pub fn center(&self) -> (f64, f64) {
        (self.x + self.w / 2.0, self.y + self.h / 2.0)
    }

    /// Area (`w · h`).
    pub fn area(&self) -> f64 {
        self.w * self.h
    }

    /// Whether the area is zero.
    pub fn is_empty(&self) -> bool {
        self.area() == 0.0
    }

    /// Aspect ratio `w / h`. Fails for a zero-height rectangle instead of
    /// returning a meaningless value.
    pub fn aspect_ratio(&self) -> Result<f64, GeometryError> {
        if self.h == 0.0 {
            return Err(GeometryError::DegenerateAspectRatio);
        }
        Ok(self.w / self.h)
    }

    /// Separating-axis overlap test with strict inequalities: rectangles that
    /// only share an edge or a corner do not intersect.
    pub fn intersects(&self, other: &Rectangle) -> bool {
        !(self.x >= other.right()
            || other.x >= self.right()
            || self.y >= other.top()
            || other.y >= self.top())
    }

    /// Overlap rectangle, or [`Rectangle::ZERO`] when [`intersects`] is false.
    ///
    /// [`intersects`]: Self::intersects
    pub fn intersection(&self, other: &Rectangle) -> Rectangle {
        if !self.intersects(other) {
            return Rectangle::ZERO;
        }
        let x = self.x.max(other.x);
        let y = self.y.max(other.y);
        Rectangle {
            x,
            y,
            w: self.right().min(other.right()) - x,
            h: self.top().min(other.top()) - y,
        }
    }

    /// Smallest rectangle containing both.
    pub fn union(&self, other: &Rectangle) -> Rectangle {
        let x = self.x.min(other.x);
        let y = self.y.min(other.y);
        Rectangle {
            x,
            y,
            w: self.right().max(other.right()) - x,
            h: self.top().max(other.top()) - y,
        }
    }
}

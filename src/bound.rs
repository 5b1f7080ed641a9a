//! Open-ended extents for free regions.
//!
//! Free space discovered around the cloud can extend without limit in one or
//! more directions. Instead of a large sentinel magnitude (which silently
//! misbehaves under ordinary arithmetic), edges are tagged values: a finite
//! coordinate or an explicit infinity. Infinite bounds absorb any finite
//! offset, same-side infinities compare equal, and a finite value always
//! orders between [`Bound::NegInf`] and [`Bound::PosInf`].

use core::cmp::Ordering;

use crate::geom::rubberband_1d;
use crate::rect::Rectangle;

/// One edge of a possibly open-ended extent.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Bound {
    /// Open towards negative infinity.
    NegInf,
    /// A finite edge coordinate.
    Finite(f64),
    /// Open towards positive infinity.
    PosInf,
}

impl Bound {
    /// Shift by a finite offset. Infinite bounds absorb the offset.
    pub fn offset(self, delta: f64) -> Bound {
        match self {
            Bound::Finite(v) => Bound::Finite(v + delta),
            open => open,
        }
    }

    /// Mirror through the origin.
    pub fn negated(self) -> Bound {
        match self {
            Bound::NegInf => Bound::PosInf,
            Bound::Finite(v) => Bound::Finite(-v),
            Bound::PosInf => Bound::NegInf,
        }
    }

    /// The finite coordinate, if any.
    pub fn finite(self) -> Option<f64> {
        match self {
            Bound::Finite(v) => Some(v),
            _ => None,
        }
    }
}

impl PartialOrd for Bound {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (Bound::NegInf, Bound::NegInf) | (Bound::PosInf, Bound::PosInf) => {
                Some(Ordering::Equal)
            }
            (Bound::NegInf, _) | (_, Bound::PosInf) => Some(Ordering::Less),
            (_, Bound::NegInf) | (Bound::PosInf, _) => Some(Ordering::Greater),
            (Bound::Finite(a), Bound::Finite(b)) => a.partial_cmp(b),
        }
    }
}

/// A 1-D extent, possibly open on either end.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Span {
    /// Lower edge; [`Bound::NegInf`] when open downwards.
    pub lo: Bound,
    /// Upper edge; [`Bound::PosInf`] when open upwards.
    pub hi: Bound,
}

impl Span {
    /// Closed span over `[lo, hi]`.
    pub fn finite(lo: f64, hi: f64) -> Span {
        Span {
            lo: Bound::Finite(lo),
            hi: Bound::Finite(hi),
        }
    }

    /// Span open on both ends.
    pub fn open() -> Span {
        Span {
            lo: Bound::NegInf,
            hi: Bound::PosInf,
        }
    }

    /// Mirror through the origin (swaps and negates the edges).
    pub fn negated(self) -> Span {
        Span {
            lo: self.hi.negated(),
            hi: self.lo.negated(),
        }
    }

    /// Strict-overlap intersection with the closed interval `[lo, hi]`.
    /// Returns the finite overlap, or `None` when the extents merely touch
    /// or are disjoint.
    pub(crate) fn clamp(&self, lo: f64, hi: f64) -> Option<(f64, f64)> {
        let clo = match self.lo {
            Bound::Finite(v) => v.max(lo),
            Bound::NegInf => lo,
            Bound::PosInf => return None,
        };
        let chi = match self.hi {
            Bound::Finite(v) => v.min(hi),
            Bound::PosInf => hi,
            Bound::NegInf => return None,
        };
        if chi > clo { Some((clo, chi)) } else { None }
    }

    /// Rubberband an extent of length `len` towards `target` within this
    /// span. Open ends never clamp; a span open on both ends centers on the
    /// target.
    pub(crate) fn rubberband(&self, target: f64, len: f64) -> f64 {
        if let Bound::Finite(lo) = self.lo {
            if let Bound::Finite(hi) = self.hi {
                return rubberband_1d(target, lo, hi, len);
            }
            if target < lo + len / 2.0 {
                return lo;
            }
        } else if let Bound::Finite(hi) = self.hi {
            if target > hi - len / 2.0 {
                return hi - len;
            }
        }
        target - len / 2.0
    }
}

/// A free region whose edges may be open-ended.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Region {
    /// Horizontal extent.
    pub x: Span,
    /// Vertical extent.
    pub y: Span,
}

impl Region {
    /// The closed region covering exactly `r`.
    pub fn from_rect(r: &Rectangle) -> Region {
        Region {
            x: Span::finite(r.x(), r.right()),
            y: Span::finite(r.y(), r.top()),
        }
    }

    /// Strict-overlap intersection with a rectangle. Returns
    /// [`Rectangle::ZERO`] when the region and the rectangle merely touch or
    /// are disjoint.
    pub fn intersection(&self, r: &Rectangle) -> Rectangle {
        match (
            self.x.clamp(r.x(), r.right()),
            self.y.clamp(r.y(), r.top()),
        ) {
            (Some((x0, x1)), Some((y0, y1))) => {
                Rectangle::from_parts(x0, y0, x1 - x0, y1 - y0)
            }
            _ => Rectangle::ZERO,
        }
    }

    /// Rubberband a rectangle of `size`'s dimensions towards `target`,
    /// clamped per axis by the region's finite edges.
    pub fn rubberband(&self, target: (f64, f64), size: &Rectangle) -> Rectangle {
        Rectangle::from_parts(
            self.x.rubberband(target.0, size.w()),
            self.y.rubberband(target.1, size.h()),
            size.w(),
            size.h(),
        )
    }
}

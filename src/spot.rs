//! Directional free-space search.
//!
//! For a rectangle about to join the cloud, each of the four cardinal
//! directions is scanned for maximal free regions ("spots") adjacent to the
//! existing members. The walk runs over a direction-local frame where *depth*
//! increases outward and *side* is the perpendicular axis — one search
//! implementation serves all four directions through an exact coordinate
//! transform, the same device used for the sorted-view keys.
//!
//! Per direction the search has three phases:
//!
//! 1. **Seeds** — members are walked farthest-out first while coverage stamps
//!    accumulate on the side axis; every gap a member exposes in the outward
//!    skyline yields one seed at the gap midpoint.
//! 2. **Probe** — the occupied rectangle is cut at the seed depth; a probe of
//!    the incoming rectangle's dimensions is positioned in the outward half
//!    by minimal displacement, constrained by the tightest side gap around
//!    the seed.
//! 3. **Trim** — the nearest member blocking the probe outward bounds the
//!    spot's depth (none leaves it open-ended), and a final side pass against
//!    the depth-limited band fixes the side extents, again rejecting gaps the
//!    rectangle cannot fit.

use alloc::vec::Vec;

use crate::bound::{Bound, Region, Span};
use crate::geom::rubberband_1d;
use crate::rect::Rectangle;

/// A cardinal search direction.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Towards positive x.
    Right,
    /// Towards negative x.
    Left,
    /// Towards positive y.
    Up,
    /// Towards negative y.
    Down,
}

impl Direction {
    /// All four directions, in search order.
    pub const ALL: [Direction; 4] = [
        Direction::Right,
        Direction::Left,
        Direction::Up,
        Direction::Down,
    ];

    /// The edge coordinate the sorted view for this direction orders by
    /// (ascending): left edge, bottom edge, right edge, top edge.
    pub(crate) fn sort_edge(self, r: &Rectangle) -> f64 {
        match self {
            Direction::Right => r.right(),
            Direction::Left => r.x(),
            Direction::Up => r.top(),
            Direction::Down => r.y(),
        }
    }

    /// Whether the farthest-out member sits at the back of the ascending
    /// sorted view for this direction.
    pub(crate) fn outward_is_descending(self) -> bool {
        matches!(self, Direction::Right | Direction::Up)
    }

    /// Cache slot of this direction's sorted view.
    pub(crate) fn index(self) -> usize {
        match self {
            Direction::Right => 0,
            Direction::Left => 1,
            Direction::Up => 2,
            Direction::Down => 3,
        }
    }

    /// Transform into the direction-local frame: depth increases outward,
    /// side is the perpendicular axis. Negations are exact, so the transform
    /// round-trips without drift.
    fn to_local(self, r: &Rectangle) -> LocalRect {
        match self {
            Direction::Right => LocalRect {
                d0: r.x(),
                d1: r.right(),
                s0: r.y(),
                s1: r.top(),
            },
            Direction::Left => LocalRect {
                d0: -r.right(),
                d1: -r.x(),
                s0: r.y(),
                s1: r.top(),
            },
            Direction::Up => LocalRect {
                d0: r.y(),
                d1: r.top(),
                s0: r.x(),
                s1: r.right(),
            },
            Direction::Down => LocalRect {
                d0: -r.top(),
                d1: -r.y(),
                s0: r.x(),
                s1: r.right(),
            },
        }
    }

    /// Map a local (depth, side) region back into world coordinates.
    fn region_from_local(self, depth: Span, side: Span) -> Region {
        match self {
            Direction::Right => Region { x: depth, y: side },
            Direction::Left => Region {
                x: depth.negated(),
                y: side,
            },
            Direction::Up => Region { x: side, y: depth },
            Direction::Down => Region {
                x: side,
                y: depth.negated(),
            },
        }
    }

    /// Extent of `r` along the depth axis.
    fn depth_len(self, r: &Rectangle) -> f64 {
        match self {
            Direction::Right | Direction::Left => r.w(),
            Direction::Up | Direction::Down => r.h(),
        }
    }

    /// Extent of `r` along the side axis.
    fn side_len(self, r: &Rectangle) -> f64 {
        match self {
            Direction::Right | Direction::Left => r.h(),
            Direction::Up | Direction::Down => r.w(),
        }
    }
}

/// A rectangle in the direction-local frame.
#[derive(Copy, Clone, Debug, PartialEq)]
struct LocalRect {
    d0: f64,
    d1: f64,
    s0: f64,
    s1: f64,
}

impl LocalRect {
    /// Strict-inequality overlap test (edge contact does not count).
    fn intersects(&self, other: &LocalRect) -> bool {
        self.d0 < other.d1 && other.d0 < self.d1 && self.s0 < other.s1 && other.s0 < self.s1
    }
}

/// A free-space search starting point, in direction-local coordinates:
/// `depth` is the outward-facing edge of the member that exposed the notch,
/// `pivot` the notch midpoint on the perpendicular axis.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Seed {
    /// Depth of the cut, along the search direction.
    pub depth: f64,
    /// Notch midpoint on the perpendicular axis.
    pub pivot: f64,
}

/// Seeds and accepted spots for one direction; carried in
/// [`PlacementFailure`](crate::CloudError::PlacementFailure) diagnostics.
#[derive(Clone, Debug, PartialEq)]
pub struct DirectionTrace {
    /// The direction searched.
    pub direction: Direction,
    /// Every seed the skyline walk produced.
    pub seeds: Vec<Seed>,
    /// Accepted spots, de-duplicated within the direction.
    pub spots: Vec<Region>,
}

/// Run the free-space search for one direction.
///
/// `outward` lists member indices farthest-out first for `direction` (the
/// cloud derives it from its sorted views).
pub(crate) fn spots_for(
    rect: &Rectangle,
    occ: &Rectangle,
    members: &[Rectangle],
    outward: &[usize],
    direction: Direction,
) -> DirectionTrace {
    let locals: Vec<LocalRect> = members.iter().map(|m| direction.to_local(m)).collect();
    let occ_l = direction.to_local(occ);
    let r_d = direction.depth_len(rect);
    let r_s = direction.side_len(rect);

    let seeds = seed_points(outward.iter().map(|&i| locals[i]));
    let mut spots: Vec<Region> = Vec::new();
    for seed in &seeds {
        if let Some((depth, side)) = spot_for_seed(r_d, r_s, &occ_l, &locals, *seed) {
            let region = direction.region_from_local(depth, side);
            if !spots.contains(&region) {
                spots.push(region);
            }
        }
    }
    DirectionTrace {
        direction,
        seeds,
        spots,
    }
}

/// Walk members farthest-out first and emit one seed per skyline notch.
///
/// Coverage stamps record the side intervals already explained by members
/// farther out; each uncovered sub-interval a member exposes is a notch, and
/// its midpoint becomes a seed at that member's outward edge.
fn seed_points(outward_members: impl Iterator<Item = LocalRect>) -> Vec<Seed> {
    // Disjoint, ascending by lower edge.
    let mut stamps: Vec<(f64, f64)> = Vec::new();
    let mut seeds = Vec::new();
    for m in outward_members {
        if m.s1 <= m.s0 {
            continue;
        }
        let mut cursor = m.s0;
        for &(stamp_lo, stamp_hi) in stamps.iter() {
            if stamp_hi <= cursor {
                continue;
            }
            if stamp_lo >= m.s1 {
                break;
            }
            if stamp_lo > cursor {
                seeds.push(Seed {
                    depth: m.d1,
                    pivot: (cursor + stamp_lo.min(m.s1)) / 2.0,
                });
            }
            cursor = cursor.max(stamp_hi);
            if cursor >= m.s1 {
                break;
            }
        }
        if cursor < m.s1 {
            seeds.push(Seed {
                depth: m.d1,
                pivot: (cursor + m.s1) / 2.0,
            });
        }
        cover(&mut stamps, m.s0, m.s1);
    }
    seeds
}

/// Merge `[lo, hi]` into the stamp list, keeping it disjoint and sorted.
fn cover(stamps: &mut Vec<(f64, f64)>, lo: f64, hi: f64) {
    let mut lo = lo;
    let mut hi = hi;
    stamps.retain(|&(stamp_lo, stamp_hi)| {
        if stamp_hi < lo || stamp_lo > hi {
            true
        } else {
            lo = lo.min(stamp_lo);
            hi = hi.max(stamp_hi);
            false
        }
    });
    let pos = stamps.partition_point(|&(stamp_lo, _)| stamp_lo < lo);
    stamps.insert(pos, (lo, hi));
}

/// Tightest free gap around `pivot` on the side axis.
#[derive(Copy, Clone, Debug, PartialEq)]
enum Gap {
    /// No members constrain either side.
    Open,
    /// Pivot below the lowest member; the gap is open downwards.
    Below { upper: f64 },
    /// Pivot above the highest member; the gap is open upwards.
    Above { lower: f64 },
    /// Pivot between two members.
    Between { lower: f64, upper: f64 },
}

/// Locate the tightest gap enclosing `pivot` among `sorted` (ascending by
/// lower side edge, bisected on that edge). `None` when a member already
/// occupies the pivot coordinate.
fn enclosing_gap(sorted: &[LocalRect], pivot: f64) -> Option<Gap> {
    let i = sorted.partition_point(|m| m.s0 <= pivot);
    let mut lower: Option<f64> = None;
    for m in &sorted[..i] {
        lower = Some(match lower {
            Some(l) => l.max(m.s1),
            None => m.s1,
        });
    }
    if let Some(l) = lower {
        if l > pivot {
            return None;
        }
    }
    let upper = sorted.get(i).map(|m| m.s0);
    Some(match (lower, upper) {
        (None, None) => Gap::Open,
        (None, Some(upper)) => Gap::Below { upper },
        (Some(lower), None) => Gap::Above { lower },
        (Some(lower), Some(upper)) => Gap::Between { lower, upper },
    })
}

/// Grow one seed into a spot, in local coordinates: `Some((depth, side))`
/// spans, or `None` when no free space fitting the rectangle exists here.
fn spot_for_seed(
    r_d: f64,
    r_s: f64,
    occ: &LocalRect,
    locals: &[LocalRect],
    seed: Seed,
) -> Option<(Span, Span)> {
    let cut = seed.depth;
    let pivot = seed.pivot;

    // Seed on the outer boundary: everything beyond the occupied rectangle
    // is free in this direction.
    if cut >= occ.d1 {
        return Some((
            Span {
                lo: Bound::Finite(occ.d1),
                hi: Bound::PosInf,
            },
            Span::open(),
        ));
    }

    // Outward half of the occupied rectangle, cut at the seed depth.
    let sel = LocalRect {
        d0: cut,
        d1: occ.d1,
        s0: occ.s0,
        s1: occ.s1,
    };
    let selection: Vec<LocalRect> = locals
        .iter()
        .copied()
        .filter(|m| m.intersects(&sel))
        .collect();

    // Sideways trim: members inside the restrictor band (as deep as the
    // incoming rectangle, flush against the cut) constrain where a probe of
    // the rectangle's side extent can sit.
    let restrictor = LocalRect {
        d0: cut,
        d1: cut + r_d,
        s0: sel.s0,
        s1: sel.s1,
    };
    let mut sideways: Vec<LocalRect> = selection
        .iter()
        .copied()
        .filter(|m| m.intersects(&restrictor))
        .collect();
    sideways.sort_by(|a, b| a.s0.total_cmp(&b.s0));

    let probe_s0 = match enclosing_gap(&sideways, pivot)? {
        Gap::Open => rubberband_1d(pivot, sel.s0, sel.s1, r_s),
        Gap::Below { upper } => pivot + (r_s / 2.0).min(upper - pivot) - r_s,
        Gap::Above { lower } => pivot - (r_s / 2.0).min(pivot - lower),
        Gap::Between { lower, upper } => {
            if upper - lower < r_s {
                return None;
            }
            rubberband_1d(pivot, lower, upper, r_s)
        }
    };
    let probe = LocalRect {
        d0: cut,
        d1: sel.d1,
        s0: probe_s0,
        s1: probe_s0 + r_s,
    };

    // Depth trim: the nearest member blocking the probe outward caps the
    // spot; none leaves it open-ended.
    let mut depth_hi = Bound::PosInf;
    for m in selection.iter().filter(|m| m.intersects(&probe)) {
        if Bound::Finite(m.d0) < depth_hi {
            depth_hi = Bound::Finite(m.d0);
        }
    }
    if let Bound::Finite(far) = depth_hi {
        // Too shallow: the rectangle would spill past the cut or into the
        // blocker.
        if far - cut < r_d {
            return None;
        }
    }

    // Final side trim against the depth-limited band.
    let mut banded: Vec<LocalRect> = selection
        .iter()
        .copied()
        .filter(|m| Bound::Finite(m.d0) < depth_hi)
        .collect();
    banded.sort_by(|a, b| a.s0.total_cmp(&b.s0));

    let side = match enclosing_gap(&banded, pivot)? {
        Gap::Open => Span::open(),
        Gap::Below { upper } => Span {
            lo: Bound::NegInf,
            hi: Bound::Finite(upper),
        },
        Gap::Above { lower } => Span {
            lo: Bound::Finite(lower),
            hi: Bound::PosInf,
        },
        Gap::Between { lower, upper } => {
            if upper - lower < r_s {
                return None;
            }
            Span::finite(lower, upper)
        }
    };

    Some((
        Span {
            lo: Bound::Finite(cut),
            hi: depth_hi,
        },
        side,
    ))
}

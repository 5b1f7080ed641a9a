//! Candidate scoring and selection.
//!
//! Every spot yields exactly one candidate: the incoming rectangle
//! rubberbanded towards the cloud's center within the spot's overlap with the
//! occupied rectangle (or within the spot itself when they do not overlap).
//! Scores combine how well a candidate fills its local gap with how cheaply
//! and true-to-ratio it grows the bounding shape; the highest score wins.

use alloc::vec::Vec;

use num_traits::Float;
use ordered_float::OrderedFloat;

use crate::bound::Region;
use crate::rect::Rectangle;

/// A positioned copy of the incoming rectangle, with the gap it was placed
/// into.
#[derive(Copy, Clone, Debug, PartialEq)]
pub(crate) struct Candidate {
    /// The rectangle at its candidate position.
    pub(crate) rect: Rectangle,
    /// The spot's overlap with the occupied rectangle; zero when the spot
    /// lies entirely outside it.
    intsec: Rectangle,
}

/// Build the candidate for one spot.
///
/// The leeway for rubberbanding is the spot's overlap with the occupied
/// rectangle when that overlap can hold the rectangle; otherwise the spot
/// itself, whose open ends leave the matching axes unclamped.
pub(crate) fn candidate(spot: &Region, rect: &Rectangle, occ: &Rectangle) -> Candidate {
    let intsec = spot.intersection(occ);
    let holds = intsec.w() >= rect.w() && intsec.h() >= rect.h();
    let placed = if !intsec.is_empty() && holds {
        crate::geom::rubberband(occ.center(), &intsec, rect)
    } else {
        spot.rubberband(occ.center(), rect)
    };
    Candidate {
        rect: placed,
        intsec,
    }
}

/// Score one candidate against the occupied rectangle.
///
/// Two additive terms:
///
/// - `inside * usage` when any of the candidate lands in its gap, where
///   `inside` is the fraction of the candidate inside the gap and `usage` the
///   fraction of the gap the candidate fills;
/// - `((1 - inside) / excess_ratio) / 10^ratio_dist` when any of it does not,
///   where `excess_ratio` is the newly claimed area outside the occupied
///   rectangle relative to the occupied area, and `ratio_dist` the deviation
///   of the grown bounding shape's aspect ratio from the target.
///
/// A candidate that grows the bounding shape without claiming any new area
/// has `excess_ratio == 0` and scores infinite; such snug placements win
/// outright, and ties among them fall to the positional tie-break in
/// [`select`].
pub(crate) fn score(cand: &Candidate, occ: &Rectangle, target_ratio: f64) -> f64 {
    let in_gap = cand.rect.intersection(&cand.intsec);
    let inside = in_gap.area() / cand.rect.area();
    let mut score = 0.0;
    if inside > 0.0 {
        let usage = in_gap.area() / cand.intsec.area();
        score += inside * usage;
    }
    if inside < 1.0 {
        let union = cand.rect.union(occ);
        let excess =
            union.area() - cand.rect.area() - occ.area() + cand.rect.intersection(occ).area();
        let excess_ratio = excess / occ.area();
        // The union inherits the occupied rectangle's positive height.
        let ratio_dist = Float::abs(union.w() / union.h() - target_ratio);
        score += ((1.0 - inside) / excess_ratio) / Float::powf(10.0, ratio_dist);
    }
    score
}

/// Pick the winning position: ascending sort by `(score, x, y)`, last entry
/// wins. The positional keys make equal scores deterministic.
pub(crate) fn select(
    candidates: &[Candidate],
    occ: &Rectangle,
    target_ratio: f64,
) -> Option<Rectangle> {
    let mut rated: Vec<(OrderedFloat<f64>, OrderedFloat<f64>, OrderedFloat<f64>, usize)> =
        candidates
            .iter()
            .enumerate()
            .map(|(i, c)| {
                (
                    OrderedFloat(score(c, occ, target_ratio)),
                    OrderedFloat(c.rect.x()),
                    OrderedFloat(c.rect.y()),
                    i,
                )
            })
            .collect();
    rated.sort();
    rated.last().map(|&(_, _, _, i)| candidates[i].rect)
}

//! The rectangle cloud: a growing, overlap-free collection.
//!
//! Members are placed one at a time. Each [`add`](RectangleCloud::add) runs
//! the free-space search over all four directions, scores every candidate
//! position, and keeps the best one; the collection then normalizes itself so
//! no member sits at a negative coordinate. Derived state (the occupied
//! bounding rectangle and the four edge-sorted views) is computed lazily and
//! invalidated on every mutation.

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::mem;

use crate::rate;
use crate::rect::Rectangle;
use crate::spot::{self, Direction, DirectionTrace};

/// Collection-level error.
#[derive(Clone, Debug, PartialEq)]
pub enum CloudError {
    /// Occupied-rectangle or sorted-view query on a cloud with no members.
    EmptyCollectionQuery,
    /// The search produced no candidate position at all. This cannot happen
    /// for a rectangle with positive finite dimensions and indicates a bug;
    /// the diagnostic carries the full search state for the report.
    PlacementFailure(Box<PlacementDiagnostic>),
}

/// Search state captured when placement finds no candidate.
#[derive(Clone, Debug, PartialEq)]
pub struct PlacementDiagnostic {
    /// The rectangle that could not be placed.
    pub rect: Rectangle,
    /// The occupied rectangle at the time of the failure.
    pub occupied: Rectangle,
    /// Seeds and spots per direction.
    pub traces: Vec<DirectionTrace>,
}

/// Lazily derived views over the member list.
#[derive(Clone, Debug, Default)]
struct Cache {
    occupied: Option<Rectangle>,
    /// Member indices ascending by the direction's sort edge, one slot per
    /// [`Direction::index`].
    by_edge: [Option<Vec<usize>>; 4],
}

impl Cache {
    fn invalidate(&mut self) {
        *self = Cache::default();
    }
}

/// An overlap-free collection of rectangles growing around a target aspect
/// ratio.
///
/// Placed members' geometry is owned by the cloud: positions returned by
/// [`get_rectangles`](Self::get_rectangles) are only valid until the next
/// mutating call, which may translate the whole collection.
///
/// # Example
///
/// ```
/// use rectcloud::{Rectangle, RectangleCloud};
///
/// let mut cloud = RectangleCloud::default();
/// cloud.add(Rectangle::new(10.0, 10.0, 10.0, 10.0).unwrap()).unwrap();
/// // The first member always lands at the origin.
/// assert_eq!(cloud.get_rectangles()[0], Rectangle::new(0.0, 0.0, 10.0, 10.0).unwrap());
///
/// cloud.add(Rectangle::new(5.0, 10.0, 5.0, 10.0).unwrap()).unwrap();
/// // A matching-height rectangle snugs against the right edge.
/// assert_eq!(cloud.get_rectangles()[1], Rectangle::new(10.0, 0.0, 5.0, 10.0).unwrap());
/// ```
#[derive(Clone, Debug)]
pub struct RectangleCloud {
    rects: Vec<Rectangle>,
    ratio: f64,
    cache: Cache,
}

impl Default for RectangleCloud {
    /// An empty cloud targeting a square bounding shape.
    fn default() -> Self {
        RectangleCloud::new(Vec::new(), 1.0)
    }
}

impl RectangleCloud {
    /// Create a cloud over `rects`, taken at their current positions, aiming
    /// for `target_ratio` (width over height) as it grows.
    pub fn new(rects: Vec<Rectangle>, target_ratio: f64) -> Self {
        RectangleCloud {
            rects,
            ratio: target_ratio,
            cache: Cache::default(),
        }
    }

    /// The target aspect ratio.
    pub fn ratio(&self) -> f64 {
        self.ratio
    }

    /// Change the target aspect ratio for subsequent placements.
    pub fn set_ratio(&mut self, ratio: f64) {
        self.ratio = ratio;
    }

    /// All members, in insertion order.
    pub fn get_rectangles(&self) -> &[Rectangle] {
        &self.rects
    }

    /// Member at `index`, if any.
    pub fn get(&self, index: usize) -> Option<&Rectangle> {
        self.rects.get(index)
    }

    /// Number of members.
    pub fn len(&self) -> usize {
        self.rects.len()
    }

    /// Whether the cloud has no members.
    pub fn is_empty(&self) -> bool {
        self.rects.is_empty()
    }

    /// Smallest rectangle containing every member.
    pub fn occupied_rect(&mut self) -> Result<Rectangle, CloudError> {
        if self.rects.is_empty() {
            return Err(CloudError::EmptyCollectionQuery);
        }
        Ok(self.occupied_cached())
    }

    /// Members ascending by the edge facing `direction`: left edge for
    /// [`Direction::Left`], bottom for [`Direction::Down`], right for
    /// [`Direction::Right`], top for [`Direction::Up`]. Ties keep insertion
    /// order.
    pub fn sorted_by(&mut self, direction: Direction) -> Result<Vec<Rectangle>, CloudError> {
        if self.rects.is_empty() {
            return Err(CloudError::EmptyCollectionQuery);
        }
        let order = self.order_for(direction).to_vec();
        Ok(order.into_iter().map(|i| self.rects[i]).collect())
    }

    /// Members strictly overlapping `probe` (edge contact excluded).
    pub fn members_intersecting(&self, probe: &Rectangle) -> Vec<Rectangle> {
        self.rects
            .iter()
            .copied()
            .filter(|m| m.intersects(probe))
            .collect()
    }

    /// Shift every member by an offset.
    pub fn translate(&mut self, dx: f64, dy: f64) {
        for r in &mut self.rects {
            r.translate(dx, dy);
        }
        self.cache.invalidate();
    }

    /// Place `rect` into the cloud and append it, returning its index.
    ///
    /// The incoming position is ignored; placement is fully automatic. A
    /// zero-area rectangle is appended where it sits, and the first member
    /// always lands at the origin. After placement the whole collection is
    /// translated, if needed, so every coordinate is non-negative.
    pub fn add(&mut self, mut rect: Rectangle) -> Result<usize, CloudError> {
        if self.rects.is_empty() || rect.is_empty() {
            if !rect.is_empty() {
                rect.set_position(0.0, 0.0);
            }
            self.rects.push(rect);
            self.cache.invalidate();
            return Ok(self.rects.len() - 1);
        }

        rect.set_position(0.0, 0.0);
        if self.rects.iter().all(Rectangle::is_empty) {
            // Only zero-area members so far; even spread apart they yield no
            // seeds, so nothing constrains placement.
            self.rects.push(rect);
            self.cache.invalidate();
            return Ok(self.rects.len() - 1);
        }
        let occ = self.occupied_cached();

        let mut candidates = Vec::new();
        let mut traces = Vec::with_capacity(Direction::ALL.len());
        for direction in Direction::ALL {
            let outward = self.outward_order(direction);
            let trace = spot::spots_for(&rect, &occ, &self.rects, &outward, direction);
            for region in &trace.spots {
                let cand = rate::candidate(region, &rect, &occ);
                if !candidates.contains(&cand) {
                    candidates.push(cand);
                }
            }
            traces.push(trace);
        }

        let Some(placed) = rate::select(&candidates, &occ, self.ratio) else {
            return Err(CloudError::PlacementFailure(Box::new(PlacementDiagnostic {
                rect,
                occupied: occ,
                traces,
            })));
        };
        rect.set_position(placed.x(), placed.y());
        self.rects.push(rect);

        // Normalize away negative coordinates introduced by the placement.
        let dx = if rect.x() < 0.0 { -rect.x() } else { 0.0 };
        let dy = if rect.y() < 0.0 { -rect.y() } else { 0.0 };
        if dx != 0.0 || dy != 0.0 {
            for r in &mut self.rects {
                r.translate(dx, dy);
            }
        }
        self.cache.invalidate();
        Ok(self.rects.len() - 1)
    }

    /// Re-pack all members from scratch, in insertion order.
    ///
    /// Equivalent to adding the same members in the same order to a fresh
    /// cloud. On [`CloudError::PlacementFailure`] (a bug signal) the cloud is
    /// left with the members placed up to the failure.
    pub fn arrange(&mut self) -> Result<(), CloudError> {
        let members = mem::take(&mut self.rects);
        self.cache.invalidate();
        for r in members {
            self.add(r)?;
        }
        Ok(())
    }

    fn occupied_cached(&mut self) -> Rectangle {
        if let Some(occ) = self.cache.occupied {
            return occ;
        }
        let occ = match self.rects.split_first() {
            Some((first, rest)) => rest.iter().fold(*first, |acc, r| acc.union(r)),
            None => Rectangle::ZERO,
        };
        self.cache.occupied = Some(occ);
        occ
    }

    fn order_for(&mut self, direction: Direction) -> &[usize] {
        let slot = direction.index();
        if self.cache.by_edge[slot].is_none() {
            let mut order: Vec<usize> = (0..self.rects.len()).collect();
            order.sort_by(|&a, &b| {
                direction
                    .sort_edge(&self.rects[a])
                    .total_cmp(&direction.sort_edge(&self.rects[b]))
            });
            self.cache.by_edge[slot] = Some(order);
        }
        self.cache.by_edge[slot].as_deref().unwrap_or(&[])
    }

    /// Member indices farthest-out first for `direction`.
    fn outward_order(&mut self, direction: Direction) -> Vec<usize> {
        let mut order = self.order_for(direction).to_vec();
        if direction.outward_is_descending() {
            order.reverse();
        }
        order
    }
}

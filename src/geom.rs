//! Free placement helpers: distance, recentering, and the rubberband
//! minimal-displacement rule.

use num_traits::Float;

use crate::rect::{GeometryError, Rectangle};

/// Euclidean distance between two points.
pub fn distance(p: (f64, f64), q: (f64, f64)) -> f64 {
    let dx = p.0 - q.0;
    let dy = p.1 - q.1;
    Float::sqrt(dx * dx + dy * dy)
}

/// Aspect ratio the bounding shape would have if `added` joined `base`:
/// the aspect ratio of their union.
pub fn new_ratio(base: &Rectangle, added: &Rectangle) -> Result<f64, GeometryError> {
    base.union(added).aspect_ratio()
}

/// Place `movable` so its center coincides with the center of `anchor`.
pub fn center(movable: &Rectangle, anchor: &Rectangle) -> Rectangle {
    let (cx, cy) = anchor.center();
    Rectangle::from_parts(
        cx - movable.w() / 2.0,
        cy - movable.h() / 2.0,
        movable.w(),
        movable.h(),
    )
}

/// One axis of the rubberband rule: position an extent of length `len` as
/// close to `target` as the `[lo, hi]` interval allows.
pub(crate) fn rubberband_1d(target: f64, lo: f64, hi: f64, len: f64) -> f64 {
    if target < lo + len / 2.0 {
        lo
    } else if target > hi - len / 2.0 {
        hi - len
    } else {
        target - len / 2.0
    }
}

/// Minimal-displacement placement: center a rectangle of `size`'s dimensions
/// on `target`, clamped per axis so it stays inside `leeway`.
///
/// As long as `size` fits inside `leeway` on both axes, the result is fully
/// contained in `leeway` for every target point, including points far outside
/// it; a target that is already an admissible center is returned unchanged.
///
/// # Example
///
/// ```
/// use rectcloud::{Rectangle, rubberband};
///
/// let size = Rectangle::new(0.0, 0.0, 10.0, 10.0).unwrap();
/// let leeway = Rectangle::new(10.0, 0.0, 30.0, 15.0).unwrap();
/// let placed = rubberband((20.0, 20.0), &leeway, &size);
/// // Centered on the axis where it fits, clamped on the other.
/// assert_eq!(placed, Rectangle::new(15.0, 5.0, 10.0, 10.0).unwrap());
/// ```
pub fn rubberband(target: (f64, f64), leeway: &Rectangle, size: &Rectangle) -> Rectangle {
    Rectangle::from_parts(
        rubberband_1d(target.0, leeway.x(), leeway.right(), size.w()),
        rubberband_1d(target.1, leeway.y(), leeway.top(), size.h()),
        size.w(),
        size.h(),
    )
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    fn rect(x: f64, y: f64, w: f64, h: f64) -> Rectangle {
        Rectangle::new(x, y, w, h).unwrap()
    }

    // ── distance ────────────────────────────────────────────────────────

    #[test]
    fn distance_is_euclidean() {
        assert_relative_eq!(
            distance((10.0, 20.0), (35.0, 12.0)),
            689.0_f64.sqrt(),
            max_relative = 1e-12
        );
        assert_eq!(distance((3.0, 4.0), (3.0, 4.0)), 0.0);
    }

    // ── new_ratio / center ──────────────────────────────────────────────

    #[test]
    fn new_ratio_is_union_aspect() {
        let base = rect(0.0, 0.0, 10.0, 10.0);
        let added = rect(10.0, 0.0, 10.0, 10.0);
        assert_eq!(new_ratio(&base, &added), Ok(2.0));
    }

    #[test]
    fn center_places_midpoints_together() {
        let movable = rect(100.0, 100.0, 10.0, 20.0);
        let anchor = rect(0.0, 0.0, 40.0, 40.0);
        let centered = center(&movable, &anchor);
        assert_eq!(centered, rect(15.0, 10.0, 10.0, 20.0));
        assert_eq!(centered.center(), anchor.center());
    }

    // ── rubberband ──────────────────────────────────────────────────────

    #[test]
    fn rubberband_centers_where_it_fits() {
        let size = rect(0.0, 0.0, 10.0, 10.0);
        let leeway = rect(0.0, 0.0, 100.0, 100.0);
        assert_eq!(rubberband((50.0, 50.0), &leeway, &size), rect(45.0, 45.0, 10.0, 10.0));
    }

    #[test]
    fn rubberband_mixed_center_and_clamp() {
        let size = rect(0.0, 0.0, 10.0, 10.0);
        let leeway = rect(10.0, 0.0, 30.0, 15.0);
        assert_eq!(rubberband((20.0, 20.0), &leeway, &size), rect(15.0, 5.0, 10.0, 10.0));
    }

    #[test]
    fn rubberband_clamps_to_low_edges() {
        let size = rect(0.0, 0.0, 10.0, 10.0);
        let leeway = rect(10.0, 10.0, 30.0, 30.0);
        assert_eq!(
            rubberband((-100.0, -100.0), &leeway, &size),
            rect(10.0, 10.0, 10.0, 10.0)
        );
    }

    #[test]
    fn rubberband_clamps_to_high_edges() {
        let size = rect(0.0, 0.0, 10.0, 10.0);
        let leeway = rect(10.0, 10.0, 30.0, 30.0);
        assert_eq!(
            rubberband((100.0, 100.0), &leeway, &size),
            rect(30.0, 30.0, 10.0, 10.0)
        );
    }

    #[test]
    fn rubberband_containment_for_any_target() {
        let size = rect(0.0, 0.0, 7.0, 3.0);
        let leeway = rect(-5.0, 2.0, 20.0, 9.0);
        let targets = [
            (-50.0, -50.0),
            (0.0, 0.0),
            (5.0, 6.5),
            (14.9, 11.0),
            (80.0, -3.0),
            (2.0, 1000.0),
        ];
        for t in targets {
            let placed = rubberband(t, &leeway, &size);
            assert!(placed.x() >= leeway.x(), "target {t:?}");
            assert!(placed.y() >= leeway.y(), "target {t:?}");
            assert!(placed.right() <= leeway.right(), "target {t:?}");
            assert!(placed.top() <= leeway.top(), "target {t:?}");
        }
    }

    #[test]
    fn rubberband_is_idempotent_on_admissible_centers() {
        let size = rect(0.0, 0.0, 10.0, 10.0);
        let leeway = rect(0.0, 0.0, 100.0, 100.0);
        let first = rubberband((40.0, 60.0), &leeway, &size);
        let again = rubberband(first.center(), &leeway, &first);
        assert_eq!(first, again);
    }
}

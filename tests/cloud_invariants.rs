//! End-to-end invariants of cloud placement.
//!
//! Every sequence of adds must leave the collection overlap-free, anchored at
//! non-negative coordinates, with an occupied rectangle spanning exactly the
//! extreme member edges, and fully deterministic.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rectcloud::{CloudError, Rectangle, RectangleCloud};

fn rect(x: f64, y: f64, w: f64, h: f64) -> Rectangle {
    Rectangle::new(x, y, w, h).unwrap()
}

fn assert_overlap_free(members: &[Rectangle]) {
    for (i, a) in members.iter().enumerate() {
        for b in &members[i + 1..] {
            assert!(!a.intersects(b), "{a:?} overlaps {b:?}");
        }
    }
}

fn assert_normalized(members: &[Rectangle]) {
    for r in members {
        assert!(r.x() >= 0.0 && r.y() >= 0.0, "negative member {r:?}");
    }
}

fn occupied_by_hand(members: &[Rectangle]) -> Rectangle {
    let (first, rest) = members.split_first().unwrap();
    rest.iter().fold(*first, |acc, r| acc.union(r))
}

#[test]
fn growing_cloud_stays_consistent() {
    let sizes = [
        (10.0, 10.0),
        (5.0, 10.0),
        (10.0, 10.0),
        (10.0, 25.0),
        (10.0, 5.0),
        (40.0, 8.0),
        (2.0, 30.0),
        (12.0, 12.0),
    ];
    let mut cloud = RectangleCloud::default();
    for (w, h) in sizes {
        cloud.add(rect(0.0, 0.0, w, h)).unwrap();
        assert_overlap_free(cloud.get_rectangles());
        assert_normalized(cloud.get_rectangles());
        assert_eq!(
            cloud.occupied_rect(),
            Ok(occupied_by_hand(cloud.get_rectangles()))
        );
    }
    assert_eq!(cloud.len(), sizes.len());
}

#[test]
fn identical_runs_produce_identical_clouds() {
    let build = || -> Result<RectangleCloud, CloudError> {
        let mut cloud = RectangleCloud::new(Vec::new(), 1.5);
        for (i, (w, h)) in [(7.0, 3.0), (3.0, 7.0), (5.0, 5.0), (20.0, 2.0), (2.0, 20.0)]
            .into_iter()
            .enumerate()
        {
            if i == 3 {
                cloud.set_ratio(0.8);
            }
            cloud.add(rect(0.0, 0.0, w, h))?;
        }
        Ok(cloud)
    };
    let a = build().unwrap();
    let b = build().unwrap();
    assert_eq!(a.get_rectangles(), b.get_rectangles());
}

#[test]
fn arrange_is_equivalent_to_fresh_adds() {
    let mut rng = ChaCha8Rng::seed_from_u64(7);
    let mut cloud = RectangleCloud::default();
    for _ in 0..20 {
        let w = rng.gen_range(1..=30) as f64;
        let h = rng.gen_range(1..=30) as f64;
        cloud.add(rect(0.0, 0.0, w, h)).unwrap();
    }

    let mut repacked = cloud.clone();
    repacked.arrange().unwrap();

    let mut fresh = RectangleCloud::default();
    for r in cloud.get_rectangles() {
        fresh.add(*r).unwrap();
    }
    assert_eq!(repacked.get_rectangles(), fresh.get_rectangles());

    // Re-packing an already re-packed cloud changes nothing.
    let again = {
        let mut c = repacked.clone();
        c.arrange().unwrap();
        c
    };
    assert_eq!(again.get_rectangles(), repacked.get_rectangles());
}

#[test]
fn random_clouds_hold_the_invariants() {
    for (seed, ratio) in [(1, 0.5), (2, 1.0), (3, 2.0)] {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut cloud = RectangleCloud::new(Vec::new(), ratio);
        for step in 0..30 {
            let w = rng.gen_range(1..=40) as f64;
            let h = rng.gen_range(1..=40) as f64;
            cloud.add(rect(0.0, 0.0, w, h)).unwrap();
            let occupied = cloud.occupied_rect();
            let members = cloud.get_rectangles();
            assert_overlap_free(members);
            assert_normalized(members);
            assert_eq!(
                occupied,
                Ok(occupied_by_hand(members)),
                "seed {seed} step {step}"
            );
        }
    }
}

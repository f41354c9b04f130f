use lorentz_core::*;
use proptest::prelude::*;

// Golden: worked example, v = 0.6 gives gamma = 1.25, (1, 1) -> (0.5, 0.5).
#[test]
fn golden_boost_point_six() {
    let p = StVector::new(1.0, 1.0);
    let q = boost_about(p, 0.6, StVector::new(0.0, 0.0)).unwrap();
    assert!(
        q.approx_eq(StVector::new(0.5, 0.5), 1e-12),
        "expected (0.5, 0.5), got ({}, {})",
        q.t,
        q.x
    );
}

// Golden: the boost origin is a fixed point of boost_about.
#[test]
fn golden_origin_fixed_point() {
    let origin = StVector::new(2.5, -3.0);
    for v in [-0.9, -0.6, 0.0, 0.3, 0.99] {
        let q = boost_about(origin, v, origin).unwrap();
        assert!(
            q.approx_eq(origin, 1e-12),
            "origin moved under v={v}: ({}, {})",
            q.t,
            q.x
        );
    }
}

// Golden: identity boost leaves points alone.
#[test]
fn golden_zero_boost_identity() {
    let p = StVector::new(-1.75, 4.0);
    let q = boost(p, 0.0).unwrap();
    assert!(q.approx_eq(p, 0.0));
}

// Property: interval_sq of the displacement between two points is
// preserved by boost_about, for any common origin.
proptest! {
    #[test]
    fn prop_interval_invariance(
        v in -0.95_f64..0.95,
        pt in -10.0_f64..10.0, px in -10.0_f64..10.0,
        qt in -10.0_f64..10.0, qx in -10.0_f64..10.0,
        ot in -5.0_f64..5.0, ox in -5.0_f64..5.0
    ) {
        let origin = StVector::new(ot, ox);
        let p = StVector::new(pt, px);
        let q = StVector::new(qt, qx);
        let pp = boost_about(p, v, origin).unwrap();
        let qp = boost_about(q, v, origin).unwrap();
        let before = (q - p).interval_sq();
        let after = (qp - pp).interval_sq();
        prop_assert!((after - before).abs() < 1e-7,
            "interval drifted: before={before}, after={after}");
    }
}

// Property: boosting by v then -v about the same origin is the identity.
proptest! {
    #[test]
    fn prop_round_trip(
        v in -0.95_f64..0.95,
        t in -10.0_f64..10.0, x in -10.0_f64..10.0,
        ot in -5.0_f64..5.0, ox in -5.0_f64..5.0
    ) {
        let origin = StVector::new(ot, ox);
        let p = StVector::new(t, x);
        let there = boost_about(p, v, origin).unwrap();
        let back = boost_about(there, -v, origin).unwrap();
        prop_assert!(back.approx_eq(p, 1e-8),
            "round trip failed: ({}, {}) -> ({}, {})", p.t, p.x, back.t, back.x);
    }
}

// Property: Boost::apply_about agrees with the free function.
proptest! {
    #[test]
    fn prop_boost_struct_matches_free_fn(
        v in -0.95_f64..0.95,
        t in -10.0_f64..10.0, x in -10.0_f64..10.0
    ) {
        let b = Boost::new(v).unwrap();
        let p = StVector::new(t, x);
        let origin = StVector::new(1.0, -1.0);
        let via_struct = b.apply_about(p, origin);
        let via_fn = boost_about(p, v, origin).unwrap();
        prop_assert!(via_struct.approx_eq(via_fn, 1e-12));
    }
}

// Property: inverse undoes a Boost exactly to tolerance.
proptest! {
    #[test]
    fn prop_boost_inverse(
        v in -0.95_f64..0.95,
        t in -10.0_f64..10.0, x in -10.0_f64..10.0
    ) {
        let b = Boost::new(v).unwrap();
        let p = StVector::new(t, x);
        let back = b.inverse().apply(b.apply(p));
        prop_assert!(back.approx_eq(p, 1e-8));
    }
}

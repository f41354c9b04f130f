use lorentz_core::*;
use proptest::prelude::*;

// Golden: 0.6 (+) 0.6 = 1.2 / 1.36 = 15/17.
#[test]
fn golden_velocity_addition() {
    let v = compose_velocity(0.6, 0.6).unwrap();
    assert!(
        (v - 15.0 / 17.0).abs() < 1e-12,
        "expected 15/17 = 0.882352941..., got {v}"
    );
}

// Golden: two sequential boosts about a shared origin equal one boost by
// the composed velocity.
#[test]
fn golden_sequential_boosts_compose() {
    let origin = StVector::new(1.0, 2.0);
    let p = StVector::new(3.0, -2.0);
    let twice = boost_about(boost_about(p, 0.6, origin).unwrap(), 0.6, origin).unwrap();
    let v12 = compose_velocity(0.6, 0.6).unwrap();
    let once = boost_about(p, v12, origin).unwrap();
    assert!(
        twice.approx_eq(once, 1e-9),
        "composition mismatch: seq=({}, {}), single=({}, {})",
        twice.t,
        twice.x,
        once.t,
        once.x
    );
}

// Property: composition law across random sub-luminal velocities and origins.
proptest! {
    #[test]
    fn prop_composition_law(
        v1 in -0.9_f64..0.9,
        v2 in -0.9_f64..0.9,
        t in -10.0_f64..10.0, x in -10.0_f64..10.0,
        ot in -5.0_f64..5.0, ox in -5.0_f64..5.0
    ) {
        let origin = StVector::new(ot, ox);
        let p = StVector::new(t, x);
        let seq = boost_about(boost_about(p, v1, origin).unwrap(), v2, origin).unwrap();
        let v12 = compose_velocity(v1, v2).unwrap();
        let single = boost_about(p, v12, origin).unwrap();
        prop_assert!(seq.approx_eq(single, 1e-6),
            "seq=({}, {}), single=({}, {})", seq.t, seq.x, single.t, single.x);
    }
}

// Property: composed velocity of two sub-luminal velocities stays sub-luminal.
proptest! {
    #[test]
    fn prop_composition_subluminal(v1 in -0.999_f64..0.999, v2 in -0.999_f64..0.999) {
        let v = compose_velocity(v1, v2).unwrap();
        prop_assert!(v.abs() < 1.0, "composed velocity escaped: {v}");
    }
}

// Property: Boost::then matches compose_velocity.
proptest! {
    #[test]
    fn prop_boost_then(v1 in -0.9_f64..0.9, v2 in -0.9_f64..0.9) {
        let b = Boost::new(v1).unwrap().then(&Boost::new(v2).unwrap());
        let v = compose_velocity(v1, v2).unwrap();
        prop_assert!((b.velocity() - v).abs() < 1e-12);
    }
}

#[test]
fn composition_rejects_luminal_input() {
    assert_eq!(
        compose_velocity(1.0, 0.5),
        Err(RelativityError::InvalidBoostVelocity(1.0))
    );
    assert_eq!(
        compose_velocity(0.5, -1.2),
        Err(RelativityError::InvalidBoostVelocity(-1.2))
    );
}

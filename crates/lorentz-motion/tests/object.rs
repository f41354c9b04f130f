use lorentz_core::{Boost, StVector};
use lorentz_geom::LorentzTransform;
use lorentz_motion::*;
use proptest::prelude::*;

fn v(t: f64, x: f64) -> StVector {
    StVector::new(t, x)
}

#[test]
fn golden_trajectory_queries() {
    // Left end at x = 1 at t = 0, moving at 0.5, length 2.
    let obj = MovingObject::new(0.0, 1.0, 0.5, 2.0).unwrap();
    assert!((obj.left_pos(4.0).unwrap() - 3.0).abs() < 1e-12);
    assert!((obj.right_pos(4.0).unwrap() - 5.0).abs() < 1e-12);
    assert!((obj.center_pos(4.0).unwrap() - 4.0).abs() < 1e-12);
    assert!((obj.length().unwrap() - 2.0).abs() < 1e-12);
    assert!(obj.has_extent().unwrap());
    assert!((obj.velocity().unwrap() - 0.5).abs() < 1e-12);
    assert_eq!(obj.time_for_left_pos(3.0).unwrap(), Crossing::At(4.0));
    assert_eq!(obj.positions_at(4.0).unwrap(), (3.0, 5.0));
}

// Golden (spec-critical): a stationary object at x0 = 2 is at x = 2 for
// all time, and never at x = 3.
#[test]
fn golden_stationary_crossings() {
    let obj = MovingObject::new(0.0, 2.0, 0.0, 0.0).unwrap();
    assert_eq!(obj.time_for_left_pos(2.0).unwrap(), Crossing::Always);
    assert_eq!(
        obj.time_for_left_pos(3.0),
        Err(MotionError::UndefinedCrossing)
    );
}

// Golden: length contraction, both directions. A rod of rest length 1,
// viewed from a frame moving at 0.8 past it, measures 1 * sqrt(1 - 0.8^2)
// = 0.6; boosting a rod of lab-frame length 0.6 at velocity 0.8 into its
// rest frame recovers length 1.
#[test]
fn golden_length_contraction() {
    let rest_rod = MovingObject::new(0.0, 0.0, 0.0, 1.0).unwrap();
    let boost = Boost::new(0.8).unwrap();
    let moving = rest_rod.transformed(&boost, v(0.0, 0.0));
    assert!(
        (moving.velocity().unwrap() - (-0.8)).abs() < 1e-9,
        "boosting a rest rod by +0.8 makes it move at -0.8 in the new frame"
    );
    assert!(
        (moving.length().unwrap() - 0.6).abs() < 1e-9,
        "contracted length should be 0.6, got {}",
        moving.length().unwrap()
    );

    let lab_rod = MovingObject::new(0.0, 0.0, 0.8, 0.6).unwrap();
    let at_rest = lab_rod.transformed(&boost, v(0.0, 0.0));
    assert!(at_rest.velocity().unwrap().abs() < 1e-9);
    assert!(
        (at_rest.length().unwrap() - 1.0).abs() < 1e-9,
        "rest length should be 1.0, got {}",
        at_rest.length().unwrap()
    );
}

// Golden: velocity re-derives through frame changes by the relativistic
// subtraction rule, not the Galilean one.
#[test]
fn golden_velocity_rederived_after_boost() {
    let obj = MovingObject::new(0.0, 0.0, 0.5, 0.0).unwrap();
    let boost = Boost::new(0.8).unwrap();
    let seen = obj.transformed(&boost, v(0.0, 0.0));
    // (0.5 - 0.8) / (1 - 0.5 * 0.8) = -0.5
    assert!((seen.velocity().unwrap() - (-0.5)).abs() < 1e-9);
}

// Golden: a superluminal object is constructible, and a sub-luminal frame
// change can push its worldline onto a simultaneity line, where velocity
// is surfaced as undefined rather than coerced.
#[test]
fn golden_superluminal_to_infinite_velocity() {
    let signal = MovingObject::new(0.0, 0.0, 2.0, 0.0).unwrap();
    assert!((signal.velocity().unwrap() - 2.0).abs() < 1e-12);

    // v_frame * v_obj = 1 exactly: the transformed direction is (0, _).
    let boost = Boost::new(0.5).unwrap();
    let flat = signal.transformed(&boost, v(0.0, 0.0));
    assert_eq!(flat.velocity(), Err(MotionError::InfiniteVelocity));
    assert!(flat.left_pos(1.0).is_err());
}

#[test]
fn construction_rejects_bad_parameters() {
    assert_eq!(
        MovingObject::new(0.0, 0.0, 0.0, -1.0),
        Err(MotionError::NegativeLength(-1.0))
    );
    assert!(MovingObject::new(0.0, 0.0, f64::INFINITY, 0.0).is_err());
    assert!(MovingObject::new(0.0, 0.0, 0.0, f64::NAN).is_err());
}

// Property: trajectory queries agree with the closed-form kinematics.
proptest! {
    #[test]
    fn prop_positions_match_formula(
        t0 in -5.0_f64..5.0, x0 in -5.0_f64..5.0,
        velocity in -3.0_f64..3.0, length in 0.0_f64..4.0,
        t in -10.0_f64..10.0
    ) {
        let obj = MovingObject::new(t0, x0, velocity, length).unwrap();
        let left = obj.left_pos(t).unwrap();
        let right = obj.right_pos(t).unwrap();
        prop_assert!((left - (x0 + velocity * (t - t0))).abs() < 1e-7);
        prop_assert!((right - left - length).abs() < 1e-7);
    }
}

// Property: for a moving object, the crossing time inverts the position
// query.
proptest! {
    #[test]
    fn prop_crossing_inverts_position(
        t0 in -5.0_f64..5.0, x0 in -5.0_f64..5.0,
        velocity in 0.1_f64..3.0,
        x in -10.0_f64..10.0
    ) {
        let obj = MovingObject::new(t0, x0, velocity, 0.0).unwrap();
        match obj.time_for_left_pos(x).unwrap() {
            Crossing::At(t) => {
                let back = obj.left_pos(t).unwrap();
                prop_assert!((back - x).abs() < 1e-6,
                    "left_pos(time_for_left_pos({x})) = {back}");
            }
            Crossing::Always => prop_assert!(false, "moving object reported Always"),
        }
    }
}

// Property: length is invariant along the worldline (any query time).
proptest! {
    #[test]
    fn prop_length_time_independent(
        velocity in -0.9_f64..0.9, length in 0.01_f64..4.0,
        t in -20.0_f64..20.0
    ) {
        let obj = MovingObject::new(0.0, 0.0, velocity, length).unwrap();
        let (left, right) = obj.positions_at(t).unwrap();
        prop_assert!((right - left - length).abs() < 1e-7);
    }
}

use lorentz_core::StVector;
use lorentz_geom::*;

fn v(t: f64, x: f64) -> StVector {
    StVector::new(t, x)
}

#[test]
fn zero_direction_rejected_at_construction() {
    assert_eq!(
        Line::new(v(0.0, 0.0), v(1.0, 1.0)),
        Err(GeomError::DegenerateDirection(0.0, 0.0))
    );
    assert!(Ray::new(v(0.0, 0.0), v(1.0, 1.0)).is_err());
    // Sub-tolerance components count as zero.
    assert!(Line::new(v(1e-15, -1e-14), v(0.0, 0.0)).is_err());
}

#[test]
fn same_line_requires_parallel_anchor_displacement() {
    let a = Line::new(v(1.0, 1.0), v(0.0, 0.0)).unwrap();
    let same = Line::new(v(2.0, 2.0), v(5.0, 5.0)).unwrap();
    let shifted = Line::new(v(1.0, 1.0), v(0.0, 1.0)).unwrap();
    assert!(a.same_line_as(&same));
    assert!(!a.same_line_as(&shifted));
}

#[test]
fn ribbon_requires_parallel_boundaries() {
    let a = Line::new(v(1.0, 0.5), v(0.0, 0.0)).unwrap();
    let parallel = Line::new(v(2.0, 1.0), v(0.0, 3.0)).unwrap();
    let skew = Line::new(v(1.0, -0.5), v(0.0, 3.0)).unwrap();
    assert!(Ribbon::new(a, parallel).is_ok());
    assert!(matches!(
        Ribbon::new(a, skew),
        Err(GeomError::MismatchedDirections { .. })
    ));
}

#[test]
fn half_ribbon_rejects_antiparallel_rays() {
    let fwd = Ray::new(v(1.0, 1.0), v(0.0, 0.0)).unwrap();
    let fwd2 = Ray::new(v(2.0, 2.0), v(0.0, 1.0)).unwrap();
    let back = Ray::new(v(-1.0, -1.0), v(0.0, 1.0)).unwrap();
    assert!(HalfRibbon::new(fwd, fwd2).is_ok());
    assert!(matches!(
        HalfRibbon::new(fwd, back),
        Err(GeomError::MismatchedDirections {
            same_orientation_required: true
        })
    ));
}

#[test]
fn ribbon_membership_by_line_constant() {
    // Strip between the stationary worldlines x = 0 and x = 2.
    let ribbon = Ribbon::new(Line::fixed_space(0.0), Line::fixed_space(2.0)).unwrap();
    assert!(ribbon.contains(v(10.0, 1.0)));
    assert!(ribbon.contains(v(-3.0, 0.0))); // boundary included
    assert!(ribbon.contains(v(0.0, 2.0)));
    assert!(!ribbon.contains(v(0.0, 2.5)));
    assert!(!ribbon.contains(v(0.0, -0.1)));
}

#[test]
fn half_ribbon_membership_respects_the_cut() {
    // Forward-in-time strip between x = 0 and x = 1, starting at t = 0.
    let r1 = Ray::new(v(1.0, 0.0), v(0.0, 0.0)).unwrap();
    let r2 = Ray::new(v(1.0, 0.0), v(0.0, 1.0)).unwrap();
    let hr = HalfRibbon::new(r1, r2).unwrap();
    assert!(hr.contains(v(2.0, 0.5)));
    assert!(hr.contains(v(0.0, 0.5))); // on the cut edge
    assert!(!hr.contains(v(-1.0, 0.5))); // before the cut
    assert!(!hr.contains(v(2.0, 1.5))); // outside the strip
}

#[test]
fn collection_preserves_order_and_ownership() {
    let mut c = Collection::new();
    c.push(Figure::Point(v(0.0, 0.0)));
    c.push(Item::new(Figure::Line(Line::fixed_time(1.0))).with_tag("now"));
    c.push(Figure::Point(v(2.0, 2.0)));
    assert_eq!(c.len(), 3);
    assert_eq!(c.get(1).and_then(|i| i.tag.as_deref()), Some("now"));
    let popped = c.pop().unwrap();
    assert!(matches!(popped.figure, Figure::Point(p) if p.approx_eq(v(2.0, 2.0), 0.0)));
    assert_eq!(c.len(), 2);
}

#[test]
fn style_map_is_ordered_and_opaque() {
    let style = StyleMap::new()
        .with("zorder", StyleValue::Number(2.0))
        .with("color", StyleValue::Color([1.0, 0.0, 0.0, 1.0]))
        .with("label", StyleValue::Text("rod".into()));
    let keys: Vec<&str> = style.iter().map(|(k, _)| k.as_str()).collect();
    assert_eq!(keys, ["color", "label", "zorder"]);
    assert_eq!(
        style.get("color"),
        Some(&StyleValue::Color([1.0, 0.0, 0.0, 1.0]))
    );
}

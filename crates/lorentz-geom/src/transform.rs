//! Lorentz transforms over shapes.
//!
//! The boost is linear, so an anchor-plus-direction shape transforms by
//! boosting the anchor as a point (about the origin) and the direction as
//! a pure displacement (no origin shift: a direction has no location).
//! Parallel boundaries stay parallel for free, and a Ray's orientation is
//! carried verbatim; see the shape docs for why that matters.

use lorentz_core::{Boost, StVector};

use crate::shapes::{
    Collection, Figure, HalfRibbon, Item, Line, PointGroup, Ray, Ribbon, Segment,
};

/// The one capability every shape shares: boost about an origin, either
/// mutating in place or producing an independent copy. `transformed` deep
/// clones first and shares no state with the source, so many different
/// boosts may be applied to one frozen source concurrently.
pub trait LorentzTransform {
    fn transform_in_place(&mut self, boost: &Boost, origin: StVector);

    fn transformed(&self, boost: &Boost, origin: StVector) -> Self
    where
        Self: Sized + Clone,
    {
        let mut copy = self.clone();
        copy.transform_in_place(boost, origin);
        copy
    }
}

impl LorentzTransform for StVector {
    fn transform_in_place(&mut self, boost: &Boost, origin: StVector) {
        *self = boost.apply_about(*self, origin);
    }
}

impl LorentzTransform for Line {
    fn transform_in_place(&mut self, boost: &Boost, origin: StVector) {
        self.set_point(boost.apply_about(self.point(), origin));
        self.set_dir(boost.apply(self.dir()));
    }
}

impl LorentzTransform for Ray {
    fn transform_in_place(&mut self, boost: &Boost, origin: StVector) {
        self.set_point(boost.apply_about(self.point(), origin));
        // Direction transforms as-is; no re-orientation even if its time
        // component changes sign in the new frame.
        self.set_dir(boost.apply(self.dir()));
    }
}

impl LorentzTransform for Segment {
    fn transform_in_place(&mut self, boost: &Boost, origin: StVector) {
        self.a = boost.apply_about(self.a, origin);
        self.b = boost.apply_about(self.b, origin);
    }
}

impl LorentzTransform for Ribbon {
    fn transform_in_place(&mut self, boost: &Boost, origin: StVector) {
        for line in self.lines_mut() {
            line.transform_in_place(boost, origin);
        }
    }
}

impl LorentzTransform for HalfRibbon {
    fn transform_in_place(&mut self, boost: &Boost, origin: StVector) {
        for ray in self.rays_mut() {
            ray.transform_in_place(boost, origin);
        }
    }
}

impl LorentzTransform for PointGroup {
    fn transform_in_place(&mut self, boost: &Boost, origin: StVector) {
        for p in &mut self.points {
            *p = boost.apply_about(*p, origin);
        }
    }
}

impl LorentzTransform for Figure {
    fn transform_in_place(&mut self, boost: &Boost, origin: StVector) {
        match self {
            Figure::Point(p) => p.transform_in_place(boost, origin),
            Figure::Line(l) => l.transform_in_place(boost, origin),
            Figure::Ray(r) => r.transform_in_place(boost, origin),
            Figure::Segment(s) => s.transform_in_place(boost, origin),
            Figure::Ribbon(r) => r.transform_in_place(boost, origin),
            Figure::HalfRibbon(h) => h.transform_in_place(boost, origin),
            Figure::Points(g) => g.transform_in_place(boost, origin),
            Figure::Group(c) => c.transform_in_place(boost, origin),
        }
    }
}

impl LorentzTransform for Item {
    fn transform_in_place(&mut self, boost: &Boost, origin: StVector) {
        // Tag and style ride along untouched.
        self.figure.transform_in_place(boost, origin);
    }
}

impl LorentzTransform for Collection {
    fn transform_in_place(&mut self, boost: &Boost, origin: StVector) {
        for item in self.items_mut() {
            item.transform_in_place(boost, origin);
        }
    }
}

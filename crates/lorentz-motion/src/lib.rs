#![doc = r#"lorentz-motion: uniformly-moving physical objects over lorentz-geom.

This crate provides:
- MovingObject: a possibly-extended object with start time, start
  position, velocity and length, backed by a Line (zero length) or a
  Ribbon (positive length) and queried through the intersection solver
- TimeInterval: a duration that may start at different times at different
  positions (nonzero unit delay)
- positions_at: the occupied position interval of any figure at one
  instant
- st_grid: a collection of grid worldlines and simultaneity lines for
  diagram backgrounds

Every derived quantity (velocity, length, end positions) is recomputed on
demand from the backing shape, so the answers stay correct after the
shape has been boosted into another frame. Objects may be superluminal;
only frame boost velocities are constrained, and that constraint lives in
lorentz-core.
"#]

use lorentz_core::{Scalar, StVector};
use lorentz_geom::{
    intersect, Collection, Figure, GeomError, IntersectError, Item, Line, LorentzTransform,
    Ribbon, StyleMap, DIR_EPS, PARALLEL_EPS,
};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum MotionError {
    #[error("object length must be non-negative, got {0}")]
    NegativeLength(Scalar),

    #[error("object velocity must be finite, got {0}")]
    NonFiniteVelocity(Scalar),

    #[error("stationary object never reaches the requested position")]
    UndefinedCrossing,

    #[error("worldline direction has zero time component; velocity is undefined in this frame")]
    InfiniteVelocity,

    #[error("boundary direction has zero position component; unit delay is undefined")]
    UndefinedDelay,

    #[error("grid spacing must be positive, got {0}")]
    NonPositiveSpacing(Scalar),

    #[error(transparent)]
    Geom(#[from] GeomError),

    #[error(transparent)]
    Intersect(#[from] IntersectError),
}

/// When an object reaches a position: at one time, or at every time (a
/// stationary object asked about its own position).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Crossing {
    At(Scalar),
    Always,
}

impl Crossing {
    /// The single crossing time, if there is one.
    #[inline]
    pub fn time(self) -> Option<Scalar> {
        match self {
            Crossing::At(t) => Some(t),
            Crossing::Always => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Worldline {
    Line(Line),
    Strip(Ribbon),
}

/// An object moving at constant velocity, with optional spatial extent.
///
/// `left_start_pos` is the position of the object's left end at
/// t = `start_time`; the right end sits `length` further along x. The
/// parameters are consumed into the backing worldline at construction and
/// never cached, so a transformed object reports frame-correct values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MovingObject {
    shape: Worldline,
}

impl MovingObject {
    pub fn new(
        start_time: Scalar,
        left_start_pos: Scalar,
        velocity: Scalar,
        length: Scalar,
    ) -> Result<Self, MotionError> {
        if !velocity.is_finite() {
            return Err(MotionError::NonFiniteVelocity(velocity));
        }
        if !(length >= 0.0) {
            return Err(MotionError::NegativeLength(length));
        }
        let left = Line::from_velocity(velocity, StVector::new(start_time, left_start_pos));
        let shape = if length == 0.0 {
            Worldline::Line(left)
        } else {
            Worldline::Strip(Ribbon::parallel_to(
                left,
                StVector::new(start_time, left_start_pos + length),
            ))
        };
        Ok(Self { shape })
    }

    /// Worldline of the object's left end.
    pub fn left(&self) -> &Line {
        match &self.shape {
            Worldline::Line(l) => l,
            Worldline::Strip(r) => r.first(),
        }
    }

    /// Worldline of the object's right end (the left end again for a
    /// zero-length object).
    pub fn right(&self) -> &Line {
        match &self.shape {
            Worldline::Line(l) => l,
            Worldline::Strip(r) => r.second(),
        }
    }

    fn center_line(&self) -> Line {
        match &self.shape {
            Worldline::Line(l) => *l,
            Worldline::Strip(r) => {
                let mid = (r.first().point() + r.second().point()) * 0.5;
                r.first().parallel_through(mid)
            }
        }
    }

    /// The backing shape as a figure, for insertion into collections.
    pub fn figure(&self) -> Figure {
        match &self.shape {
            Worldline::Line(l) => Figure::Line(*l),
            Worldline::Strip(r) => Figure::Ribbon(*r),
        }
    }

    /// Current velocity, re-derived from the (possibly transformed)
    /// worldline direction. A zero time component means the worldline has
    /// become a simultaneity line, a state only reachable through
    /// intermediate superluminal-boost computations; it is surfaced, not
    /// coerced.
    pub fn velocity(&self) -> Result<Scalar, MotionError> {
        let dir = self.left().dir();
        if dir.t.abs() < DIR_EPS {
            return Err(MotionError::InfiniteVelocity);
        }
        Ok(dir.x / dir.t)
    }

    fn pos_at_time(line: &Line, t: Scalar) -> Result<Scalar, MotionError> {
        match intersect(&line.carrier(), &Line::fixed_time(t).carrier()) {
            Ok(p) => Ok(p.x),
            Err(IntersectError::ParallelLines | IntersectError::CoincidentLines) => {
                Err(MotionError::InfiniteVelocity)
            }
            Err(e) => Err(e.into()),
        }
    }

    fn time_for_pos(line: &Line, x: Scalar) -> Result<Crossing, MotionError> {
        match intersect(&line.carrier(), &Line::fixed_space(x).carrier()) {
            Ok(p) => Ok(Crossing::At(p.t)),
            Err(IntersectError::CoincidentLines) => Ok(Crossing::Always),
            Err(IntersectError::ParallelLines) => Err(MotionError::UndefinedCrossing),
            Err(e) => Err(e.into()),
        }
    }

    pub fn left_pos(&self, t: Scalar) -> Result<Scalar, MotionError> {
        Self::pos_at_time(self.left(), t)
    }

    pub fn right_pos(&self, t: Scalar) -> Result<Scalar, MotionError> {
        Self::pos_at_time(self.right(), t)
    }

    pub fn center_pos(&self, t: Scalar) -> Result<Scalar, MotionError> {
        Ok((self.left_pos(t)? + self.right_pos(t)?) / 2.0)
    }

    /// Time at which the left end reaches `x`; `Crossing::Always` for a
    /// stationary object already there, `UndefinedCrossing` for a
    /// stationary object that never gets there.
    pub fn time_for_left_pos(&self, x: Scalar) -> Result<Crossing, MotionError> {
        Self::time_for_pos(self.left(), x)
    }

    pub fn time_for_right_pos(&self, x: Scalar) -> Result<Crossing, MotionError> {
        Self::time_for_pos(self.right(), x)
    }

    pub fn time_for_center_pos(&self, x: Scalar) -> Result<Crossing, MotionError> {
        Self::time_for_pos(&self.center_line(), x)
    }

    /// Length measured in this frame: separation of the two ends at one
    /// instant. Time-independent for uniform motion.
    pub fn length(&self) -> Result<Scalar, MotionError> {
        match &self.shape {
            Worldline::Line(_) => Ok(0.0),
            Worldline::Strip(r) => {
                let t = r.first().point().t;
                Ok(Self::pos_at_time(r.second(), t)? - Self::pos_at_time(r.first(), t)?)
            }
        }
    }

    pub fn has_extent(&self) -> Result<bool, MotionError> {
        Ok(self.length()? != 0.0)
    }

    /// Occupied position interval at time `t`, closed `[left, right]`.
    pub fn positions_at(&self, t: Scalar) -> Result<(Scalar, Scalar), MotionError> {
        let left = self.left_pos(t)?;
        let right = self.right_pos(t)?;
        Ok(if left <= right {
            (left, right)
        } else {
            (right, left)
        })
    }
}

impl LorentzTransform for MovingObject {
    fn transform_in_place(&mut self, boost: &lorentz_core::Boost, origin: StVector) {
        match &mut self.shape {
            Worldline::Line(l) => l.transform_in_place(boost, origin),
            Worldline::Strip(r) => r.transform_in_place(boost, origin),
        }
    }
}

/// A time interval that may begin at different times at different
/// positions: starts at `start_time` at x = `start_pos`, lasts
/// `duration`, and is delayed by `unit_delay` per unit of x. Zero delay
/// is a plain simultaneity band.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeInterval {
    strip: Ribbon,
}

impl TimeInterval {
    pub fn new(
        start_time: Scalar,
        duration: Scalar,
        unit_delay: Scalar,
        start_pos: Scalar,
    ) -> Result<Self, MotionError> {
        let dir = StVector::new(unit_delay, 1.0);
        let start = Line::new(dir, StVector::new(start_time, start_pos))?;
        Ok(Self {
            strip: Ribbon::parallel_to(start, StVector::new(start_time + duration, start_pos)),
        })
    }

    /// Boundary marking the start of the interval across space.
    pub fn start(&self) -> &Line {
        self.strip.first()
    }

    /// Boundary marking the end of the interval across space.
    pub fn end(&self) -> &Line {
        self.strip.second()
    }

    pub fn figure(&self) -> Figure {
        Figure::Ribbon(self.strip)
    }

    fn time_at_pos(line: &Line, x: Scalar) -> Result<Scalar, MotionError> {
        match intersect(&line.carrier(), &Line::fixed_space(x).carrier()) {
            Ok(p) => Ok(p.t),
            Err(IntersectError::ParallelLines | IntersectError::CoincidentLines) => {
                Err(MotionError::UndefinedCrossing)
            }
            Err(e) => Err(e.into()),
        }
    }

    pub fn start_time_at(&self, x: Scalar) -> Result<Scalar, MotionError> {
        Self::time_at_pos(self.start(), x)
    }

    pub fn end_time_at(&self, x: Scalar) -> Result<Scalar, MotionError> {
        Self::time_at_pos(self.end(), x)
    }

    /// Interval duration, position-independent for parallel boundaries.
    pub fn duration(&self) -> Result<Scalar, MotionError> {
        let x = self.start().point().x;
        Ok(Self::time_at_pos(self.end(), x)? - Self::time_at_pos(self.start(), x)?)
    }

    pub fn has_extent(&self) -> Result<bool, MotionError> {
        Ok(self.duration()? != 0.0)
    }

    /// Delay between interval starts one unit of x apart; zero means
    /// simultaneity in this frame.
    pub fn unit_delay(&self) -> Result<Scalar, MotionError> {
        let dir = self.start().dir();
        if dir.x.abs() < DIR_EPS {
            return Err(MotionError::UndefinedDelay);
        }
        Ok(dir.t / dir.x)
    }
}

impl LorentzTransform for TimeInterval {
    fn transform_in_place(&mut self, boost: &lorentz_core::Boost, origin: StVector) {
        self.strip.transform_in_place(boost, origin);
    }
}

#[inline]
fn instant_tol(t: Scalar) -> Scalar {
    PARALLEL_EPS * 1.0_f64.max(t.abs())
}

fn merge_interval(
    acc: Option<(Scalar, Scalar)>,
    next: Option<(Scalar, Scalar)>,
) -> Option<(Scalar, Scalar)> {
    match (acc, next) {
        (None, i) | (i, None) => i,
        (Some((a0, a1)), Some((b0, b1))) => Some((a0.min(b0), a1.max(b1))),
    }
}

/// Occupied position interval of a figure at time `t`, or `None` when the
/// figure does not exist at that instant (e.g. a ray before its start).
/// An unbounded cross-section (a simultaneity line at exactly `t`) is
/// reported with infinite endpoints.
pub fn positions_at(figure: &Figure, t: Scalar) -> Option<(Scalar, Scalar)> {
    let now = Line::fixed_time(t);
    let point_interval = |x: Scalar| Some((x, x));
    match figure {
        Figure::Point(p) => {
            if (p.t - t).abs() <= instant_tol(t) {
                point_interval(p.x)
            } else {
                None
            }
        }
        Figure::Line(line) => match intersect(&line.carrier(), &now.carrier()) {
            Ok(p) => point_interval(p.x),
            Err(IntersectError::CoincidentLines) => {
                Some((Scalar::NEG_INFINITY, Scalar::INFINITY))
            }
            Err(_) => None,
        },
        Figure::Ray(ray) => match intersect(&ray.carrier(), &now.carrier()) {
            Ok(p) => point_interval(p.x),
            Err(IntersectError::CoincidentLines) => {
                // The ray lies inside this instant: half-infinite interval
                // from its anchor, extending the way its direction points.
                if ray.dir().x >= 0.0 {
                    Some((ray.point().x, Scalar::INFINITY))
                } else {
                    Some((Scalar::NEG_INFINITY, ray.point().x))
                }
            }
            Err(_) => None,
        },
        Figure::Segment(seg) => match seg.carrier() {
            Ok(carrier) => match intersect(&carrier, &now.carrier()) {
                Ok(p) => point_interval(p.x),
                Err(IntersectError::CoincidentLines) => {
                    Some((seg.a.x.min(seg.b.x), seg.a.x.max(seg.b.x)))
                }
                Err(_) => None,
            },
            Err(_) => {
                if (seg.a.t - t).abs() <= instant_tol(t) {
                    point_interval(seg.a.x)
                } else {
                    None
                }
            }
        },
        Figure::Ribbon(ribbon) => {
            let hits: Vec<Scalar> = [ribbon.first(), ribbon.second()]
                .iter()
                .filter_map(|l| intersect(&l.carrier(), &now.carrier()).ok().map(|p| p.x))
                .collect();
            match hits.as_slice() {
                [a, b] => Some((a.min(*b), a.max(*b))),
                [a] => point_interval(*a),
                _ => {
                    // Both boundaries parallel to the instant: the strip
                    // either covers this time entirely or not at all, and
                    // membership does not depend on x here.
                    if ribbon.contains(StVector::new(t, 0.0)) {
                        Some((Scalar::NEG_INFINITY, Scalar::INFINITY))
                    } else {
                        None
                    }
                }
            }
        }
        Figure::HalfRibbon(hr) => {
            let mut hits: Vec<Scalar> = [hr.first(), hr.second()]
                .iter()
                .filter_map(|r| intersect(&r.carrier(), &now.carrier()).ok().map(|p| p.x))
                .collect();
            // Where only one ray crosses, the cut edge bounds the other
            // side of the cross-section.
            if let Ok(cut) = hr.anchor_edge().carrier() {
                if let Ok(p) = intersect(&cut, &now.carrier()) {
                    hits.push(p.x);
                }
            }
            let lo = hits.iter().copied().fold(Scalar::INFINITY, Scalar::min);
            let hi = hits.iter().copied().fold(Scalar::NEG_INFINITY, Scalar::max);
            if hits.is_empty() {
                None
            } else {
                Some((lo, hi))
            }
        }
        Figure::Points(group) => {
            let xs: Vec<Scalar> = group
                .points
                .iter()
                .filter(|p| (p.t - t).abs() <= instant_tol(t))
                .map(|p| p.x)
                .collect();
            if xs.is_empty() {
                None
            } else {
                let lo = xs.iter().copied().fold(Scalar::INFINITY, Scalar::min);
                let hi = xs.iter().copied().fold(Scalar::NEG_INFINITY, Scalar::max);
                Some((lo, hi))
            }
        }
        Figure::Group(collection) => collection
            .iter()
            .fold(None, |acc, item| {
                merge_interval(acc, positions_at(&item.figure, t))
            }),
    }
}

/// Spacetime grid lines for a diagram background, in deterministic order:
/// constant-t lines ascending, constant-x lines ascending, then the two
/// axes through `origin` when in range.
#[allow(clippy::too_many_arguments)]
pub fn st_grid(
    tlim: (Scalar, Scalar),
    xlim: (Scalar, Scalar),
    origin: StVector,
    t_spacing: Scalar,
    x_spacing: Scalar,
    axis_style: StyleMap,
    grid_style: StyleMap,
) -> Result<Collection, MotionError> {
    if !(t_spacing > 0.0) {
        return Err(MotionError::NonPositiveSpacing(t_spacing));
    }
    if !(x_spacing > 0.0) {
        return Err(MotionError::NonPositiveSpacing(x_spacing));
    }

    let mut grid = Collection::new();
    let down = ((tlim.0 - origin.t) / t_spacing).ceil() as i64;
    let up = ((tlim.1 - origin.t) / t_spacing).floor() as i64;
    for step in down..=up {
        if step != 0 {
            let line = Line::fixed_time(origin.t + step as Scalar * t_spacing);
            grid.push(Item::new(Figure::Line(line)).with_style(grid_style.clone()));
        }
    }
    let left = ((xlim.0 - origin.x) / x_spacing).ceil() as i64;
    let right = ((xlim.1 - origin.x) / x_spacing).floor() as i64;
    for step in left..=right {
        if step != 0 {
            let line = Line::fixed_space(origin.x + step as Scalar * x_spacing);
            grid.push(Item::new(Figure::Line(line)).with_style(grid_style.clone()));
        }
    }

    if origin.t >= tlim.0 && origin.t <= tlim.1 {
        grid.push(Item::new(Figure::Line(Line::fixed_time(origin.t))).with_style(axis_style.clone()));
    }
    if origin.x >= xlim.0 && origin.x <= xlim.1 {
        grid.push(Item::new(Figure::Line(Line::fixed_space(origin.x))).with_style(axis_style));
    }
    Ok(grid)
}

//! Primitive spacetime shapes and the Figure sum type.
//!
//! Every shape is an anchor/direction record (or a list of points); the
//! transform and intersection machinery live in sibling modules. A zero
//! direction is rejected at construction so downstream solvers never see
//! one.

use lorentz_core::{Scalar, StVector};

use crate::error::GeomError;
use crate::intersect::{parallel_within, Carrier, ParamDomain};
use crate::style::StyleMap;

/// Absolute tolerance below which a direction component counts as zero.
/// Directions are caller-supplied construction inputs, typically of order
/// one, so an absolute threshold is appropriate here (unlike the scaled
/// epsilon used for intersection determinants).
pub const DIR_EPS: Scalar = 1e-12;

#[inline]
fn direction_is_zero(d: StVector) -> bool {
    d.t.abs() < DIR_EPS && d.x.abs() < DIR_EPS
}

/// An infinite line {point + s * dir : s in R}.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Line {
    dir: StVector,
    point: StVector,
}

impl Line {
    pub fn new(dir: StVector, point: StVector) -> Result<Self, GeomError> {
        if direction_is_zero(dir) {
            return Err(GeomError::DegenerateDirection(dir.t, dir.x));
        }
        Ok(Self { dir, point })
    }

    /// Worldline of a point moving at `v` (any real, superluminal allowed)
    /// through `point`. Direction (1, v) is nonzero by construction.
    #[inline]
    pub fn from_velocity(v: Scalar, point: StVector) -> Self {
        Self {
            dir: StVector::new(1.0, v),
            point,
        }
    }

    /// The simultaneity line t = `time`.
    #[inline]
    pub fn fixed_time(time: Scalar) -> Self {
        Self {
            dir: StVector::new(0.0, 1.0),
            point: StVector::new(time, 0.0),
        }
    }

    /// The stationary worldline x = `position`.
    #[inline]
    pub fn fixed_space(position: Scalar) -> Self {
        Self {
            dir: StVector::new(1.0, 0.0),
            point: StVector::new(0.0, position),
        }
    }

    #[inline]
    pub fn dir(&self) -> StVector {
        self.dir
    }

    #[inline]
    pub fn point(&self) -> StVector {
        self.point
    }

    /// Point at parameter `s`.
    #[inline]
    pub fn at(&self, s: Scalar) -> StVector {
        self.point + self.dir * s
    }

    /// A line parallel to this one through a different anchor, sharing the
    /// direction vector exactly.
    #[inline]
    pub fn parallel_through(&self, point: StVector) -> Line {
        Line {
            dir: self.dir,
            point,
        }
    }

    /// True iff the two records describe the same geometric line:
    /// parallel directions and an anchor displacement parallel to them.
    pub fn same_line_as(&self, other: &Line) -> bool {
        parallel_within(self.dir, other.dir) && parallel_within(self.dir, other.point - self.point)
    }

    #[inline]
    pub fn carrier(&self) -> Carrier {
        Carrier {
            anchor: self.point,
            dir: self.dir,
            domain: ParamDomain::Full,
        }
    }

    pub(crate) fn set_dir(&mut self, dir: StVector) {
        self.dir = dir;
    }

    pub(crate) fn set_point(&mut self, point: StVector) {
        self.point = point;
    }
}

/// A half-infinite line {point + s * dir : s >= 0}.
///
/// The sign of `dir` is semantically significant: a boost never flips it,
/// even when the transformed direction runs backward in the new frame's
/// time. That is what lets superluminal-signal worldlines keep their
/// "emitted here, received there" reading across frames.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    dir: StVector,
    point: StVector,
}

impl Ray {
    pub fn new(dir: StVector, point: StVector) -> Result<Self, GeomError> {
        if direction_is_zero(dir) {
            return Err(GeomError::DegenerateDirection(dir.t, dir.x));
        }
        Ok(Self { dir, point })
    }

    #[inline]
    pub fn dir(&self) -> StVector {
        self.dir
    }

    #[inline]
    pub fn point(&self) -> StVector {
        self.point
    }

    #[inline]
    pub fn at(&self, s: Scalar) -> StVector {
        self.point + self.dir * s
    }

    /// The full line this ray lies on.
    #[inline]
    pub fn full_line(&self) -> Line {
        Line {
            dir: self.dir,
            point: self.point,
        }
    }

    #[inline]
    pub fn carrier(&self) -> Carrier {
        Carrier {
            anchor: self.point,
            dir: self.dir,
            domain: ParamDomain::Half,
        }
    }

    pub(crate) fn set_dir(&mut self, dir: StVector) {
        self.dir = dir;
    }

    pub(crate) fn set_point(&mut self, point: StVector) {
        self.point = point;
    }
}

/// A finite segment {a + s * (b - a) : s in [0, 1]}.
///
/// Coincident endpoints are permitted (a degenerate segment is a point and
/// still transforms and samples), but such a segment has no carrier.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub a: StVector,
    pub b: StVector,
}

impl Segment {
    #[inline]
    pub fn new(a: StVector, b: StVector) -> Self {
        Self { a, b }
    }

    #[inline]
    pub fn dir(&self) -> StVector {
        self.b - self.a
    }

    pub fn carrier(&self) -> Result<Carrier, GeomError> {
        let dir = self.dir();
        if direction_is_zero(dir) {
            return Err(GeomError::DegenerateDirection(dir.t, dir.x));
        }
        Ok(Carrier {
            anchor: self.a,
            dir,
            domain: ParamDomain::Unit,
        })
    }
}

/// The closed strip between two parallel lines.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ribbon {
    lines: [Line; 2],
}

impl Ribbon {
    pub fn new(first: Line, second: Line) -> Result<Self, GeomError> {
        if !parallel_within(first.dir, second.dir) {
            return Err(GeomError::MismatchedDirections {
                same_orientation_required: false,
            });
        }
        Ok(Self {
            lines: [first, second],
        })
    }

    /// Strip bounded by `line` and its parallel through `point`, sharing one
    /// direction vector exactly.
    #[inline]
    pub fn parallel_to(line: Line, point: StVector) -> Self {
        Self {
            lines: [line, line.parallel_through(point)],
        }
    }

    #[inline]
    pub fn first(&self) -> &Line {
        &self.lines[0]
    }

    #[inline]
    pub fn second(&self) -> &Line {
        &self.lines[1]
    }

    /// Both boundaries describe the same geometric line.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.lines[0].same_line_as(&self.lines[1])
    }

    /// Strip membership. Lines of direction (dt, dx) satisfy
    /// dx * t - dt * x = k; the point's constant must fall between the two
    /// boundary constants.
    pub fn contains(&self, p: StVector) -> bool {
        let d = self.lines[0].dir;
        let constant = |q: StVector| d.x * q.t - d.t * q.x;
        let (k0, k1) = (constant(self.lines[0].point), constant(self.lines[1].point));
        let (lo, hi) = if k0 <= k1 { (k0, k1) } else { (k1, k0) };
        let kp = constant(p);
        let tol = DIR_EPS * 1.0_f64.max(lo.abs()).max(hi.abs()).max(kp.abs());
        kp >= lo - tol && kp <= hi + tol
    }

    pub(crate) fn lines_mut(&mut self) -> &mut [Line; 2] {
        &mut self.lines
    }
}

/// The region between two parallel, same-oriented rays.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HalfRibbon {
    rays: [Ray; 2],
}

impl HalfRibbon {
    pub fn new(first: Ray, second: Ray) -> Result<Self, GeomError> {
        // Parallel is not enough: anti-parallel rays sweep mismatched
        // half-planes, so componentwise signs must agree too.
        if !parallel_within(first.dir, second.dir)
            || first.dir.t * second.dir.t < 0.0
            || first.dir.x * second.dir.x < 0.0
        {
            return Err(GeomError::MismatchedDirections {
                same_orientation_required: true,
            });
        }
        Ok(Self {
            rays: [first, second],
        })
    }

    #[inline]
    pub fn first(&self) -> &Ray {
        &self.rays[0]
    }

    #[inline]
    pub fn second(&self) -> &Ray {
        &self.rays[1]
    }

    /// The full ribbon this half-ribbon is cut from.
    #[inline]
    pub fn full_ribbon(&self) -> Ribbon {
        Ribbon {
            lines: [self.rays[0].full_line(), self.rays[1].full_line()],
        }
    }

    /// The segment joining the two anchors (the "cut" edge).
    #[inline]
    pub fn anchor_edge(&self) -> Segment {
        Segment::new(self.rays[0].point, self.rays[1].point)
    }

    /// Membership: inside the parallel strip, and on the non-negative
    /// parameter side of the anchor cut. The side test picks the normal to
    /// the anchor separation that points against the ray direction, then
    /// requires the anchor-to-point displacement not to lead out that way.
    pub fn contains(&self, p: StVector) -> bool {
        if !self.full_ribbon().contains(p) {
            return false;
        }
        let d = self.rays[0].dir;
        // Displacement from the anchor along the ray direction must be
        // non-negative in the dot product sense (cf. a ray's own domain
        // check), measured against either anchor via the outward normal of
        // the cut edge.
        let sep = self.rays[1].point - self.rays[0].point;
        let candidates = [StVector::new(-sep.x, sep.t), StVector::new(sep.x, -sep.t)];
        let dot = |a: StVector, b: StVector| a.t * b.t + a.x * b.x;
        // When the rays coincide, sep is zero or parallel; either candidate
        // works, so take the first non-outward-failing one.
        let normal = if dot(candidates[0], d) <= 0.0 {
            candidates[0]
        } else {
            candidates[1]
        };
        let disp = self.rays[0].point - p;
        let scale = 1.0_f64
            .max(disp.t.abs().max(disp.x.abs()))
            .max(normal.t.abs().max(normal.x.abs()));
        dot(disp, normal) >= -DIR_EPS * scale * scale
    }

    pub(crate) fn rays_mut(&mut self) -> &mut [Ray; 2] {
        &mut self.rays
    }
}

/// Display intent for a PointGroup; opaque styling metadata, not geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointMode {
    Points,
    Polyline,
    Polygon,
}

/// An ordered run of points with a display mode.
#[derive(Debug, Clone, PartialEq)]
pub struct PointGroup {
    pub points: Vec<StVector>,
    pub mode: PointMode,
}

impl PointGroup {
    #[inline]
    pub fn new(points: Vec<StVector>, mode: PointMode) -> Self {
        Self { points, mode }
    }

    /// Two-point polyline.
    #[inline]
    pub fn segment(a: StVector, b: StVector) -> Self {
        Self::new(vec![a, b], PointMode::Polyline)
    }

    /// Filled polygon over the given vertices.
    #[inline]
    pub fn polygon(points: Vec<StVector>) -> Self {
        Self::new(points, PointMode::Polygon)
    }
}

/// Closed sum of every geometric shape; all operations dispatch by match
/// so a new variant cannot be half-supported.
#[derive(Debug, Clone, PartialEq)]
pub enum Figure {
    Point(StVector),
    Line(Line),
    Ray(Ray),
    Segment(Segment),
    Ribbon(Ribbon),
    HalfRibbon(HalfRibbon),
    Points(PointGroup),
    Group(Collection),
}

/// A figure plus pass-through metadata. The tag and style map never
/// participate in geometry; they ride along through transforms and clones
/// unexamined.
#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    pub figure: Figure,
    pub tag: Option<String>,
    pub style: StyleMap,
}

impl Item {
    #[inline]
    pub fn new(figure: Figure) -> Self {
        Self {
            figure,
            tag: None,
            style: StyleMap::new(),
        }
    }

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = Some(tag.into());
        self
    }

    pub fn with_style(mut self, style: StyleMap) -> Self {
        self.style = style;
        self
    }
}

impl From<Figure> for Item {
    fn from(figure: Figure) -> Self {
        Item::new(figure)
    }
}

/// An ordered aggregate of styled figures, owned exclusively. Ordering
/// governs nothing geometric but is preserved: sampling and diagnostics
/// observe it.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Collection {
    items: Vec<Item>,
}

impl Collection {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_items(items: Vec<Item>) -> Self {
        Self { items }
    }

    #[inline]
    pub fn push(&mut self, item: impl Into<Item>) {
        self.items.push(item.into());
    }

    #[inline]
    pub fn pop(&mut self) -> Option<Item> {
        self.items.pop()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&Item> {
        self.items.get(index)
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Item> {
        self.items.iter()
    }

    pub(crate) fn items_mut(&mut self) -> &mut [Item] {
        &mut self.items
    }
}

impl std::ops::Index<usize> for Collection {
    type Output = Item;
    #[inline]
    fn index(&self, index: usize) -> &Item {
        &self.items[index]
    }
}

impl<'a> IntoIterator for &'a Collection {
    type Item = &'a Item;
    type IntoIter = std::slice::Iter<'a, Item>;
    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl IntoIterator for Collection {
    type Item = Item;
    type IntoIter = std::vec::IntoIter<Item>;
    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl FromIterator<Item> for Collection {
    fn from_iter<I: IntoIterator<Item = Item>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

//! Renderer-facing sampling: reduce figures to clipped vertex runs.
//!
//! The renderer pulls data through `sample` and never mutates geometry.
//! Infinite shapes are clipped against the view box by intersecting their
//! carriers with the four boundary lines; region shapes become polygons
//! whose vertices are gathered from boundary crossings and box corners,
//! then ordered by angle about their centroid.

use lorentz_core::{Scalar, StVector};

use crate::intersect::{intersect, Carrier, ParamDomain};
use crate::shapes::{Collection, Figure, HalfRibbon, Item, PointMode, Ribbon, DIR_EPS};
use crate::style::StyleMap;

/// Axis-aligned view box: (min, max) in time and in position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub t: (Scalar, Scalar),
    pub x: (Scalar, Scalar),
}

/// Tolerance for in-bounds checks and vertex dedup while clipping.
const CLIP_EPS: Scalar = 1e-9;

impl Bounds {
    #[inline]
    pub fn new(t: (Scalar, Scalar), x: (Scalar, Scalar)) -> Self {
        Self { t, x }
    }

    pub fn contains(&self, p: StVector) -> bool {
        let tol_t = CLIP_EPS * 1.0_f64.max(self.t.0.abs()).max(self.t.1.abs());
        let tol_x = CLIP_EPS * 1.0_f64.max(self.x.0.abs()).max(self.x.1.abs());
        p.t >= self.t.0 - tol_t
            && p.t <= self.t.1 + tol_t
            && p.x >= self.x.0 - tol_x
            && p.x <= self.x.1 + tol_x
    }

    fn corners(&self) -> [StVector; 4] {
        [
            StVector::new(self.t.0, self.x.0),
            StVector::new(self.t.0, self.x.1),
            StVector::new(self.t.1, self.x.0),
            StVector::new(self.t.1, self.x.1),
        ]
    }

    /// The four sides of the box as full-line carriers.
    fn edges(&self) -> [Carrier; 4] {
        let full = |anchor, dir| Carrier {
            anchor,
            dir,
            domain: ParamDomain::Full,
        };
        [
            full(StVector::new(self.t.0, 0.0), StVector::new(0.0, 1.0)),
            full(StVector::new(self.t.1, 0.0), StVector::new(0.0, 1.0)),
            full(StVector::new(0.0, self.x.0), StVector::new(1.0, 0.0)),
            full(StVector::new(0.0, self.x.1), StVector::new(1.0, 0.0)),
        ]
    }
}

/// What a sampled vertex run represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SampleKind {
    /// Disconnected point(s).
    Point,
    /// Vertices joined in order.
    Polyline,
    /// Closed filled region.
    Polygon,
}

/// One renderable element with its pass-through metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct Sampled {
    pub kind: SampleKind,
    pub vertices: Vec<StVector>,
    pub tag: Option<String>,
    pub style: StyleMap,
}

fn push_unique(points: &mut Vec<StVector>, p: StVector) {
    let tol = CLIP_EPS * 1.0_f64.max(p.t.abs()).max(p.x.abs());
    if !points.iter().any(|q| q.approx_eq(p, tol)) {
        points.push(p);
    }
}

fn sort_by_t_then_x(points: &mut [StVector]) {
    points.sort_by(|a, b| {
        (a.t, a.x)
            .partial_cmp(&(b.t, b.x))
            .unwrap_or(std::cmp::Ordering::Equal)
    });
}

/// Crossings of a carrier with the view box sides, restricted to the
/// carrier's own domain and to points inside the box.
fn boundary_crossings(carrier: &Carrier, bounds: &Bounds) -> Vec<StVector> {
    let mut points = Vec::new();
    for edge in bounds.edges() {
        // A carrier parallel to one pair of sides crosses the other pair;
        // out-of-domain crossings are simply not part of the shape.
        if let Ok(p) = intersect(carrier, &edge) {
            if bounds.contains(p) {
                push_unique(&mut points, p);
            }
        }
    }
    points
}

/// Emit a clipped line-like run: two or more crossings form a polyline
/// (extreme points only), a single touch is a point, none is out of frame.
fn emit_clipped(
    mut points: Vec<StVector>,
    tag: &Option<String>,
    style: &StyleMap,
    out: &mut Vec<Sampled>,
) {
    sort_by_t_then_x(&mut points);
    match points.len() {
        0 => {}
        1 => out.push(Sampled {
            kind: SampleKind::Point,
            vertices: points,
            tag: tag.clone(),
            style: style.clone(),
        }),
        _ => out.push(Sampled {
            kind: SampleKind::Polyline,
            vertices: vec![points[0], points[points.len() - 1]],
            tag: tag.clone(),
            style: style.clone(),
        }),
    }
}

/// Polygon vertices for a region shape: candidate points filtered by
/// membership, ordered by angle about the centroid.
fn region_vertices<F>(candidates: Vec<StVector>, inside: F) -> Vec<StVector>
where
    F: Fn(StVector) -> bool,
{
    let mut vertices: Vec<StVector> = Vec::new();
    for p in candidates {
        if inside(p) {
            push_unique(&mut vertices, p);
        }
    }
    if vertices.len() < 3 {
        return vertices;
    }
    let n = vertices.len() as Scalar;
    let centroid = vertices
        .iter()
        .fold(StVector::default(), |acc, &p| acc + p)
        * (1.0 / n);
    vertices.sort_by(|a, b| {
        let aa = (a.t - centroid.t).atan2(a.x - centroid.x);
        let ab = (b.t - centroid.t).atan2(b.x - centroid.x);
        aa.partial_cmp(&ab).unwrap_or(std::cmp::Ordering::Equal)
    });
    vertices
}

fn emit_region(
    vertices: Vec<StVector>,
    tag: &Option<String>,
    style: &StyleMap,
    out: &mut Vec<Sampled>,
) {
    let kind = match vertices.len() {
        0 => return,
        1 => SampleKind::Point,
        2 => SampleKind::Polyline,
        _ => SampleKind::Polygon,
    };
    out.push(Sampled {
        kind,
        vertices,
        tag: tag.clone(),
        style: style.clone(),
    });
}

fn ribbon_candidates(ribbon: &Ribbon, bounds: &Bounds) -> Vec<StVector> {
    let mut candidates = Vec::new();
    for line in [ribbon.first(), ribbon.second()] {
        for p in boundary_crossings(&line.carrier(), bounds) {
            push_unique(&mut candidates, p);
        }
    }
    for corner in bounds.corners() {
        push_unique(&mut candidates, corner);
    }
    candidates
}

fn half_ribbon_candidates(hr: &HalfRibbon, bounds: &Bounds) -> Vec<StVector> {
    let mut candidates = Vec::new();
    for ray in [hr.first(), hr.second()] {
        for p in boundary_crossings(&ray.carrier(), bounds) {
            push_unique(&mut candidates, p);
        }
        if bounds.contains(ray.point()) {
            push_unique(&mut candidates, ray.point());
        }
    }
    // The cut edge between the two anchors is a hard boundary too.
    if let Ok(cut) = hr.anchor_edge().carrier() {
        for p in boundary_crossings(&cut, bounds) {
            push_unique(&mut candidates, p);
        }
    }
    for corner in bounds.corners() {
        push_unique(&mut candidates, corner);
    }
    candidates
}

/// Merge styles for nested collections: entries set on the enclosing item
/// override the child's own, matching how the original forwarded draw
/// options down through composite draws.
fn merge_style(parent: &StyleMap, child: &StyleMap) -> StyleMap {
    child
        .iter()
        .chain(parent.iter())
        .map(|(k, v)| (k.clone(), v.clone()))
        .collect()
}

fn sample_figure(
    figure: &Figure,
    bounds: &Bounds,
    tag: &Option<String>,
    style: &StyleMap,
    out: &mut Vec<Sampled>,
) {
    match figure {
        Figure::Point(p) => {
            if bounds.contains(*p) {
                out.push(Sampled {
                    kind: SampleKind::Point,
                    vertices: vec![*p],
                    tag: tag.clone(),
                    style: style.clone(),
                });
            }
        }
        Figure::Line(line) => {
            emit_clipped(boundary_crossings(&line.carrier(), bounds), tag, style, out);
        }
        Figure::Ray(ray) => {
            let mut points = boundary_crossings(&ray.carrier(), bounds);
            if bounds.contains(ray.point()) {
                push_unique(&mut points, ray.point());
            }
            emit_clipped(points, tag, style, out);
        }
        Figure::Segment(seg) => match seg.carrier() {
            Ok(carrier) => {
                let mut points = boundary_crossings(&carrier, bounds);
                for endpoint in [seg.a, seg.b] {
                    if bounds.contains(endpoint) {
                        push_unique(&mut points, endpoint);
                    }
                }
                emit_clipped(points, tag, style, out);
            }
            // Zero-length segment: just a point.
            Err(_) => {
                if bounds.contains(seg.a) {
                    out.push(Sampled {
                        kind: SampleKind::Point,
                        vertices: vec![seg.a],
                        tag: tag.clone(),
                        style: style.clone(),
                    });
                }
            }
        },
        Figure::Ribbon(ribbon) => {
            if ribbon.is_degenerate() {
                emit_clipped(
                    boundary_crossings(&ribbon.first().carrier(), bounds),
                    tag,
                    style,
                    out,
                );
                return;
            }
            let vertices = region_vertices(ribbon_candidates(ribbon, bounds), |p| {
                bounds.contains(p) && ribbon.contains(p)
            });
            emit_region(vertices, tag, style, out);
        }
        Figure::HalfRibbon(hr) => {
            let vertices = region_vertices(half_ribbon_candidates(hr, bounds), |p| {
                bounds.contains(p) && hr.contains(p)
            });
            emit_region(vertices, tag, style, out);
        }
        Figure::Points(group) => {
            let kind = match group.mode {
                PointMode::Points => SampleKind::Point,
                PointMode::Polyline => SampleKind::Polyline,
                PointMode::Polygon => SampleKind::Polygon,
            };
            let vertices: Vec<StVector> = match group.mode {
                // Scatter points are individually culled; connected runs
                // pass through whole so the renderer keeps their topology.
                PointMode::Points => group
                    .points
                    .iter()
                    .copied()
                    .filter(|p| bounds.contains(*p))
                    .collect(),
                _ => group.points.clone(),
            };
            if !vertices.is_empty() {
                out.push(Sampled {
                    kind,
                    vertices,
                    tag: tag.clone(),
                    style: style.clone(),
                });
            }
        }
        Figure::Group(collection) => {
            if collection.is_empty() {
                log::warn!("nothing to sample: empty collection");
                return;
            }
            for item in collection {
                let merged = merge_style(style, &item.style);
                let child_tag = item.tag.clone().or_else(|| tag.clone());
                sample_figure(&item.figure, bounds, &child_tag, &merged, out);
            }
        }
    }
}

/// Sample one styled figure into renderable elements clipped to `bounds`.
/// Style maps and tags are propagated unexamined.
pub fn sample(item: &Item, bounds: &Bounds) -> Vec<Sampled> {
    let mut out = Vec::new();
    sample_figure(&item.figure, bounds, &item.tag, &item.style, &mut out);
    out
}

enum Extent {
    Empty,
    Finite(Scalar, Scalar),
    Unbounded,
}

impl Extent {
    fn merge(self, other: Extent) -> Extent {
        match (self, other) {
            (Extent::Unbounded, _) | (_, Extent::Unbounded) => Extent::Unbounded,
            (Extent::Empty, e) | (e, Extent::Empty) => e,
            (Extent::Finite(a0, a1), Extent::Finite(b0, b1)) => {
                Extent::Finite(a0.min(b0), a1.max(b1))
            }
        }
    }

    fn over_points(points: &[StVector]) -> Extent {
        points.iter().fold(Extent::Empty, |acc, p| {
            acc.merge(Extent::Finite(p.t, p.t))
        })
    }
}

fn figure_time_extent(figure: &Figure) -> Extent {
    // A carrier with a nonzero time component runs unbounded in time; a
    // Ray is unbounded on one side only, which is still unbounded for an
    // animation-duration consumer.
    let line_like = |dir: StVector, anchor: StVector| {
        if dir.t.abs() < DIR_EPS {
            Extent::Finite(anchor.t, anchor.t)
        } else {
            Extent::Unbounded
        }
    };
    match figure {
        Figure::Point(p) => Extent::Finite(p.t, p.t),
        Figure::Line(l) => line_like(l.dir(), l.point()),
        Figure::Ray(r) => line_like(r.dir(), r.point()),
        Figure::Segment(s) => Extent::over_points(&[s.a, s.b]),
        Figure::Ribbon(r) => line_like(r.first().dir(), r.first().point())
            .merge(line_like(r.second().dir(), r.second().point())),
        Figure::HalfRibbon(h) => line_like(h.first().dir(), h.first().point())
            .merge(line_like(h.second().dir(), h.second().point())),
        Figure::Points(g) => Extent::over_points(&g.points),
        Figure::Group(c) => c.iter().fold(Extent::Empty, |acc, item| {
            acc.merge(figure_time_extent(&item.figure))
        }),
    }
}

/// The time span a collection occupies, for external animation-duration
/// logic. `None` means no finite answer exists: either some member is
/// unbounded in time, or the collection is empty.
pub fn bounding_time_extent(collection: &Collection) -> Option<(Scalar, Scalar)> {
    let extent = collection.iter().fold(Extent::Empty, |acc, item| {
        acc.merge(figure_time_extent(&item.figure))
    });
    match extent {
        Extent::Finite(lo, hi) => Some((lo, hi)),
        Extent::Empty | Extent::Unbounded => None,
    }
}

#![doc = r#"lorentz-gradient: color-gradient figure builders over lorentz-geom.

This crate provides:
- Rgba: a renderer-agnostic color with linear interpolation
- gradient_line: an infinite line whose color transitions between two
  points, built as a monochromatic tail ray, finitely many colored
  segments, and a monochromatic head ray
- longitudinal_gradient_ribbon: a strip whose color transitions along
  its infinite direction (tail half-ribbon, polygons, head half-ribbon)
- lateral_gradient_ribbon: a strip whose color transitions across its
  finite direction, as a stack of overlapping ribbons

The pieces are plain figures in a Collection, so the whole gradient
boosts like anything else and its colors ride along as opaque style
metadata. Colors land under the "color" key for stroked pieces and
"facecolor" (with "edgecolor" forced off) for filled ones.
"#]

use lorentz_core::{Scalar, StVector};
use lorentz_geom::{
    Collection, Figure, GeomError, HalfRibbon, Item, Line, PointGroup, Ray, Ribbon, Segment,
    StyleMap, StyleValue,
};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum GradientError {
    #[error("a gradient needs at least one division")]
    ZeroDivisions,

    #[error(transparent)]
    Geom(#[from] GeomError),
}

/// An RGBA color with components nominally in [0, 1]. Out-of-range
/// values arise transiently while extrapolating a gradient and are
/// detected with `is_valid`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba(pub [Scalar; 4]);

impl Rgba {
    pub const fn new(r: Scalar, g: Scalar, b: Scalar, a: Scalar) -> Self {
        Self([r, g, b, a])
    }

    #[inline]
    pub fn is_valid(self) -> bool {
        self.0.iter().all(|c| (0.0..=1.0).contains(c))
    }

    /// Unclamped linear interpolation; `u` outside [0, 1] extrapolates.
    #[inline]
    pub fn lerp(self, other: Rgba, u: Scalar) -> Rgba {
        let mut out = self.0;
        for (c, o) in out.iter_mut().zip(other.0) {
            *c += u * (o - *c);
        }
        Rgba(out)
    }
}

impl From<Rgba> for StyleValue {
    fn from(color: Rgba) -> Self {
        StyleValue::Color(color.0)
    }
}

/// A linear gradient between two points: parameter 0 is `p1`/`c1`,
/// parameter 1 is `p2`/`c2`, any other value extrapolates along the
/// same line.
#[derive(Clone, Copy)]
struct ColorGrad {
    p1: StVector,
    p2: StVector,
    c1: Rgba,
    c2: Rgba,
}

impl ColorGrad {
    fn point_at(&self, u: Scalar) -> StVector {
        self.p1 + (self.p2 - self.p1) * u
    }

    fn color_at(&self, u: Scalar) -> Rgba {
        self.c1.lerp(self.c2, u)
    }
}

/// Extends a gradient backward and forward in division-sized steps for
/// as long as the extrapolated color stays in range, so the transition
/// spans as much of the figure as the colors allow. Returns the widened
/// gradient and the new division count covering it.
fn extrapolated(grad: ColorGrad, divisions: u32) -> (ColorGrad, u32) {
    // A flat gradient never leaves the valid range; nothing to extend.
    if grad.c1 == grad.c2 {
        return (grad, divisions);
    }
    let d = Scalar::from(divisions);
    let mut back = 0u32;
    while grad.color_at(-Scalar::from(back + 1) / d).is_valid() {
        back += 1;
    }
    let mut fwd = 0u32;
    while grad.color_at(1.0 + Scalar::from(fwd + 1) / d).is_valid() {
        fwd += 1;
    }
    let lo = -Scalar::from(back) / d;
    let hi = 1.0 + Scalar::from(fwd) / d;
    let widened = ColorGrad {
        p1: grad.point_at(lo),
        p2: grad.point_at(hi),
        c1: grad.color_at(lo),
        c2: grad.color_at(hi),
    };
    (widened, divisions + back + fwd)
}

/// Copies a style map minus the keys a gradient builder owns, so caller
/// styling cannot fight the per-piece colors.
fn without_keys(style: &StyleMap, keys: &[&str]) -> StyleMap {
    style
        .iter()
        .filter(|(k, _)| !keys.contains(&k.as_str()))
        .map(|(k, v)| (k.clone(), v.clone()))
        .collect()
}

fn stroked(figure: Figure, base: &StyleMap, color: Rgba) -> Item {
    Item::new(figure).with_style(base.clone().with("color", color.into()))
}

fn filled(figure: Figure, base: &StyleMap, color: Rgba, edge_off: bool) -> Item {
    let mut style = base.clone().with("facecolor", color.into());
    if edge_off {
        style.insert("edgecolor", StyleValue::Text("none".into()));
    }
    Item::new(figure).with_style(style)
}

/// A line through `p1` and `p2` whose color transitions from `c1` at
/// `p1` to `c2` at `p2`: a monochromatic ray before the transition,
/// `divisions` segments sampled at their midpoints, and a monochromatic
/// ray after it. With `extrapolate`, the transition is first widened
/// until the colors run out of range.
pub fn gradient_line(
    p1: StVector,
    p2: StVector,
    c1: Rgba,
    c2: Rgba,
    divisions: u32,
    extrapolate: bool,
    style: &StyleMap,
) -> Result<Collection, GradientError> {
    if divisions == 0 {
        return Err(GradientError::ZeroDivisions);
    }
    let base = without_keys(style, &["color"]);
    let grad = ColorGrad { p1, p2, c1, c2 };
    let (grad, divisions) = if extrapolate {
        extrapolated(grad, divisions)
    } else {
        (grad, divisions)
    };

    let dir = grad.p2 - grad.p1;
    let d = Scalar::from(divisions);
    let mut out = Collection::new();
    out.push(stroked(
        Figure::Ray(Ray::new(-dir, grad.p1)?),
        &base,
        grad.c1,
    ));
    for i in 0..divisions {
        let a = grad.point_at(Scalar::from(i) / d);
        let b = grad.point_at(Scalar::from(i + 1) / d);
        let mid = grad.color_at((Scalar::from(i) + 0.5) / d);
        out.push(stroked(Figure::Segment(Segment::new(a, b)), &base, mid));
    }
    out.push(stroked(Figure::Ray(Ray::new(dir, grad.p2)?), &base, grad.c2));
    Ok(out)
}

/// A strip whose color transitions along its infinite direction. Each
/// edge runs through its own pair of endpoints; the transition goes
/// from `c1` at the first endpoints to `c2` at the second. Interior
/// polygons overlap by half a division, and the tail half-ribbon is
/// anchored half a division in, so sampled output has no hairline gaps
/// between pieces.
pub fn longitudinal_gradient_ribbon(
    edge1: (StVector, StVector),
    edge2: (StVector, StVector),
    c1: Rgba,
    c2: Rgba,
    divisions: u32,
    extrapolate: bool,
    style: &StyleMap,
) -> Result<Collection, GradientError> {
    if divisions == 0 {
        return Err(GradientError::ZeroDivisions);
    }
    let base = without_keys(style, &["color", "facecolor", "edgecolor"]);
    let g1 = ColorGrad {
        p1: edge1.0,
        p2: edge1.1,
        c1,
        c2,
    };
    let (g1, divisions) = if extrapolate {
        extrapolated(g1, divisions)
    } else {
        (g1, divisions)
    };
    // The second edge widens against the already-widened colors, so the
    // two edges stay in step; its colors are discarded in favor of the
    // first edge's.
    let g2 = ColorGrad {
        p1: edge2.0,
        p2: edge2.1,
        c1: g1.c1,
        c2: g1.c2,
    };
    let g2 = if extrapolate {
        extrapolated(g2, divisions).0
    } else {
        g2
    };

    let dir1 = g1.p2 - g1.p1;
    let dir2 = g2.p2 - g2.p1;
    let d = Scalar::from(divisions);
    let mut out = Collection::new();

    let tail = HalfRibbon::new(
        Ray::new(-dir1, g1.point_at(1.0 / (2.0 * d)))?,
        Ray::new(-dir2, g2.point_at(1.0 / (2.0 * d)))?,
    )?;
    out.push(filled(Figure::HalfRibbon(tail), &base, g1.c1, true));

    for i in 0..divisions {
        let lo = Scalar::from(i) / d;
        let hi = (Scalar::from(i) + 1.5) / d;
        let polygon = PointGroup::polygon(vec![
            g1.point_at(lo),
            g1.point_at(hi),
            g2.point_at(hi),
            g2.point_at(lo),
        ]);
        let mid = g1.color_at((Scalar::from(i) + 0.5) / d);
        out.push(filled(Figure::Points(polygon), &base, mid, false));
    }

    let head = HalfRibbon::new(Ray::new(dir1, g1.p2)?, Ray::new(dir2, g2.p2)?)?;
    out.push(filled(Figure::HalfRibbon(head), &base, g1.c2, true));
    Ok(out)
}

/// A strip whose color transitions across its finite direction, from
/// `c1` on the edge through `p1` to `c2` on the edge through `p2`,
/// built as `divisions` ribbons each overlapping the next by half a
/// division (the last is capped at `p2`).
pub fn lateral_gradient_ribbon(
    dir: StVector,
    p1: StVector,
    p2: StVector,
    c1: Rgba,
    c2: Rgba,
    divisions: u32,
    style: &StyleMap,
) -> Result<Collection, GradientError> {
    if divisions == 0 {
        return Err(GradientError::ZeroDivisions);
    }
    let base = without_keys(style, &["color", "facecolor", "edgecolor"]);
    let grad = ColorGrad { p1, p2, c1, c2 };
    let d = Scalar::from(divisions);
    let mut out = Collection::new();
    for i in 0..divisions {
        let start = grad.point_at(Scalar::from(i) / d);
        let end = grad.point_at(((Scalar::from(i) + 1.5) / d).min(1.0));
        let strip = Ribbon::new(Line::new(dir, start)?, Line::new(dir, end)?)?;
        let mid = grad.color_at((Scalar::from(i) + 0.5) / d);
        out.push(filled(Figure::Ribbon(strip), &base, mid, true));
    }
    Ok(out)
}

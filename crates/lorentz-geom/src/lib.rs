#![doc = r#"lorentz-geom: spacetime shapes for (1+1)-dimensional relativity.

Built on lorentz-core, this crate provides:
- Primitive shapes: Line, Ray, Segment, Ribbon, HalfRibbon, PointGroup,
  gathered in the closed Figure sum type
- LorentzTransform: in-place and copy-producing boosts over every shape
- An intersection solver over (anchor, direction, parameter-domain)
  carriers with degenerate-case detection
- Collection: an ordered, exclusively-owned aggregate of styled figures
- Renderer-facing sampling: clip shapes to an axis-aligned view box and
  report polylines/points/polygons with their opaque style metadata

Geometry is pure data; nothing here draws, animates, or performs I/O.
"#]

mod error;
mod intersect;
mod sample;
mod shapes;
mod style;
mod transform;

pub use error::{GeomError, IntersectError};
pub use intersect::{intersect, Carrier, ParamDomain, PARALLEL_EPS};
pub use sample::{bounding_time_extent, sample, Bounds, SampleKind, Sampled};
pub use shapes::{
    Collection, Figure, HalfRibbon, Item, Line, PointGroup, PointMode, Ray, Ribbon, Segment,
    DIR_EPS,
};
pub use style::{StyleMap, StyleValue};
pub use transform::LorentzTransform;

//! Axis-aligned bounds for spatial-localizer queries.
//!
//! Positions are embedded in 3D; lower-dimensional meshes pad the unused
//! axes with zero, so a planar mesh and a probe point agree on `z = 0`.

/// A spatial position, always carried as an xyz triple.
pub type Position = [f64; 3];

/// Axis-aligned bounding box with inclusive bounds.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoundingBox {
    pub min: Position,
    pub max: Position,
}

impl BoundingBox {
    /// Box spanning `min..=max` per axis.
    #[inline]
    pub fn new(min: Position, max: Position) -> Self {
        BoundingBox { min, max }
    }

    /// Box of half-width `tolerance` centered on `position`.
    ///
    /// A zero tolerance yields the degenerate box `[position, position]`,
    /// which still intersects the boxes of cells whose boundary passes
    /// through the position.
    #[inline]
    pub fn around(position: Position, tolerance: f64) -> Self {
        let mut min = position;
        let mut max = position;
        for axis in 0..3 {
            min[axis] -= tolerance;
            max[axis] += tolerance;
        }
        BoundingBox { min, max }
    }

    /// Smallest box enclosing all `points`; `None` for an empty input.
    pub fn enclosing<I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = Position>,
    {
        let mut points = points.into_iter();
        let first = points.next()?;
        let mut bbox = BoundingBox {
            min: first,
            max: first,
        };
        for point in points {
            for axis in 0..3 {
                bbox.min[axis] = bbox.min[axis].min(point[axis]);
                bbox.max[axis] = bbox.max[axis].max(point[axis]);
            }
        }
        Some(bbox)
    }

    /// Whether `position` lies inside the box (boundary included).
    pub fn contains(&self, position: Position) -> bool {
        (0..3).all(|axis| self.min[axis] <= position[axis] && position[axis] <= self.max[axis])
    }

    /// Whether the two boxes overlap (touching counts).
    pub fn intersects(&self, other: &BoundingBox) -> bool {
        (0..3).all(|axis| self.min[axis] <= other.max[axis] && other.min[axis] <= self.max[axis])
    }
}

use crate::geom::Point3;

use std::iter::FromIterator;

/// Flat, ordered vertex data `x0, y0, z0, x1, y1, z1, ...` ready to be uploaded
/// as a point-cloud position buffer.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PointCloud {
    positions: Vec<f32>,
}

impl PointCloud {
    pub fn new() -> Self {
        PointCloud { positions: Vec::new() }
    }

    /// Reserves room for `point_count` points.
    pub fn with_capacity(point_count: usize) -> Self {
        PointCloud { positions: Vec::with_capacity(point_count.saturating_mul(3)) }
    }

    pub fn push(&mut self, point: Point3) {
        self.positions.extend_from_slice(&[point.x, point.y, point.z]);
    }

    /// Returns the amount of points, not the amount of floats.
    pub fn len(&self) -> usize {
        self.positions.len() / 3
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn as_slice(&self) -> &[f32] {
        &self.positions
    }

    pub fn into_vec(self) -> Vec<f32> {
        self.positions
    }

    /// Iterates over the stored points in insertion order.
    pub fn points<'a>(&'a self) -> impl Iterator<Item = Point3> + 'a {
        self.positions
            .chunks_exact(3)
            .map(|xyz| Point3::new(xyz[0], xyz[1], xyz[2]))
    }
}

impl FromIterator<Point3> for PointCloud {
    fn from_iter<I>(iter: I) -> Self
        where I: IntoIterator<Item = Point3>
    {
        let iter = iter.into_iter();
        let mut cloud = PointCloud::new();
        // Size hints can be far larger than memory, reserve only what fits
        let _ = cloud.positions.try_reserve(iter.size_hint().0.saturating_mul(3));
        cloud.extend(iter);
        cloud
    }
}

impl Extend<Point3> for PointCloud {
    fn extend<I>(&mut self, iter: I)
        where I: IntoIterator<Item = Point3>
    {
        for point in iter {
            self.push(point);
        }
    }
}

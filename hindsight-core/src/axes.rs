//! Equal-scale limits of 3-D plots.
use ndarray::{Array2, Axis};

/// Limits of the three axes of a 3-D plot.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AxisLimits {
    /// Limits of the X axis.
    pub x: (f32, f32),

    /// Limits of the Y axis.
    pub y: (f32, f32),

    /// Limits of the Z axis.
    pub z: (f32, f32),
}

impl AxisLimits {
    /// Constructs [`AxisLimits`].
    pub fn new(x: (f32, f32), y: (f32, f32), z: (f32, f32)) -> Self {
        Self { x, y, z }
    }

    /// Bounding box of the first three columns of the given point matrices.
    ///
    /// Returns `None` if there are no points or the points have fewer than three coordinates.
    pub fn from_points(points: &[&Array2<f32>]) -> Option<Self> {
        let mut lo = [f32::INFINITY; 3];
        let mut hi = [f32::NEG_INFINITY; 3];
        let mut any = false;

        for m in points.iter().filter(|m| m.ncols() >= 3) {
            for row in m.axis_iter(Axis(0)) {
                any = true;
                for i in 0..3 {
                    lo[i] = lo[i].min(row[i]);
                    hi[i] = hi[i].max(row[i]);
                }
            }
        }

        match any {
            true => Some(Self::new((lo[0], hi[0]), (lo[1], hi[1]), (lo[2], hi[2]))),
            false => None,
        }
    }

    /// Re-centers every axis around its midpoint with a common half range.
    ///
    /// The bounding box becomes a cube: the half range is half the largest of the three axis
    /// spans, so spheres look like spheres. Degenerate input collapses to points and is
    /// returned as is.
    pub fn equalize(&self) -> Self {
        let span = |(a, b): (f32, f32)| (b - a).abs();
        let middle = |(a, b): (f32, f32)| 0.5 * (a + b);
        let radius = 0.5 * span(self.x).max(span(self.y)).max(span(self.z));
        let recenter = |l: (f32, f32)| (middle(l) - radius, middle(l) + radius);

        Self {
            x: recenter(self.x),
            y: recenter(self.y),
            z: recenter(self.z),
        }
    }
}

#[cfg(test)]
mod test {
    use super::AxisLimits;
    use ndarray::array;

    #[test]
    fn test_equalize_centered() {
        let limits = AxisLimits::new((-1.0, 1.0), (-2.0, 2.0), (-3.0, 3.0)).equalize();
        assert_eq!(limits, AxisLimits::new((-3.0, 3.0), (-3.0, 3.0), (-3.0, 3.0)));
    }

    #[test]
    fn test_equalize_keeps_midpoints() {
        let limits = AxisLimits::new((0.0, 1.0), (10.0, 14.0), (-1.0, 0.0)).equalize();
        assert_eq!(limits.x, (-1.5, 2.5));
        assert_eq!(limits.y, (10.0, 14.0));
        assert_eq!(limits.z, (-2.5, 1.5));
    }

    #[test]
    fn test_equalize_reversed_limits() {
        let limits = AxisLimits::new((1.0, -1.0), (0.0, 0.0), (0.0, 0.0)).equalize();
        assert_eq!(limits.x, (-1.0, 1.0));
        assert_eq!(limits.y, (-1.0, 1.0));
    }

    #[test]
    fn test_equalize_degenerate() {
        let limits = AxisLimits::new((2.0, 2.0), (2.0, 2.0), (2.0, 2.0));
        assert_eq!(limits.equalize(), limits);
    }

    #[test]
    fn test_from_points() {
        let a = array![[0.0, 1.0, 2.0], [1.0, -1.0, 0.5]];
        let b = array![[3.0, 0.0, 0.0]];
        let limits = AxisLimits::from_points(&[&a, &b]).unwrap();
        assert_eq!(limits, AxisLimits::new((0.0, 3.0), (-1.0, 1.0), (0.0, 2.0)));
        assert!(AxisLimits::from_points(&[]).is_none());
    }
}

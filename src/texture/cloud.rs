use crate::math::Point3;

/// A set of points summarised by its extremes.
pub trait PointCloud {
    /// The points to fit textures against.
    fn extreme_points(&self) -> Vec<Point3>;
}

/// The points of a set that are extreme along each world axis.
///
/// Holds, in order, the points with minimum and maximum X, then Y, then Z.
/// Ties keep the first point seen.
#[derive(Debug, Clone, PartialEq)]
pub struct Cloud {
    extremes: Vec<Point3>,
}

impl Cloud {
    /// Collects the axis extremes of `points`. An empty input gives an empty
    /// cloud.
    pub fn new(points: impl IntoIterator<Item = Point3>) -> Self {
        let mut iter = points.into_iter();
        let Some(first) = iter.next() else {
            return Self {
                extremes: Vec::new(),
            };
        };

        let mut extremes = [first; 6];
        for point in iter {
            for axis in 0..3 {
                if point[axis] < extremes[axis * 2][axis] {
                    extremes[axis * 2] = point;
                }
                if point[axis] > extremes[axis * 2 + 1][axis] {
                    extremes[axis * 2 + 1] = point;
                }
            }
        }
        Self {
            extremes: extremes.to_vec(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.extremes.is_empty()
    }
}

impl PointCloud for Cloud {
    fn extreme_points(&self) -> Vec<Point3> {
        self.extremes.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(x: f64, y: f64, z: f64) -> Point3 {
        Point3::new(x, y, z)
    }

    #[test]
    fn keeps_axis_extremes() {
        let cloud = Cloud::new([
            p(0.0, 0.0, 0.0),
            p(5.0, 1.0, 1.0),
            p(1.0, -3.0, 2.0),
            p(2.0, 2.0, 9.0),
            p(1.0, 1.0, 1.0),
        ]);
        assert_eq!(
            cloud.extreme_points(),
            vec![
                p(0.0, 0.0, 0.0),
                p(5.0, 1.0, 1.0),
                p(1.0, -3.0, 2.0),
                p(2.0, 2.0, 9.0),
                p(0.0, 0.0, 0.0),
                p(2.0, 2.0, 9.0),
            ]
        );
    }

    #[test]
    fn empty_input() {
        let cloud = Cloud::new(std::iter::empty());
        assert!(cloud.is_empty());
        assert!(cloud.extreme_points().is_empty());
    }
}

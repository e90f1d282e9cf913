/// Rounding tolerance of the cosine argument in [`Point::pllp`].
///
/// A degenerate (flat) triangle may produce an argument slightly outside
/// `[-1, 1]`, which is clamped back instead of being rejected.
pub const COS_EPS: f64 = 1e-12;

/// A point-like memory layout for planar coordinates.
pub trait Point: Sized {
    /// Create a point from coordinates.
    fn point(x: f64, y: f64) -> Self;
    /// X coordinate.
    fn x(&self) -> f64;
    /// Y coordinate.
    fn y(&self) -> f64;

    /// Distance to another point.
    fn dist(&self, rhs: &Self) -> f64 {
        (rhs.x() - self.x()).hypot(rhs.y() - self.y())
    }

    /// Direction angle of the edge from this point to `rhs`.
    fn angle_to(&self, rhs: &Self) -> f64 {
        f64::atan2(rhs.y() - self.y(), rhs.x() - self.x())
    }

    /// Point, length, absolute angle.
    fn pla(&self, d0: f64, a0: f64) -> Self {
        Self::point(self.x() + d0 * a0.cos(), self.y() + d0 * a0.sin())
    }

    /// Point, length, angle relative to the edge from this point to `rhs`.
    fn plap(&self, d0: f64, a0: f64, rhs: &Self) -> Self {
        self.pla(d0, self.angle_to(rhs) + a0)
    }

    /// Point, length, length, point.
    ///
    /// Return the apex `p2` of the triangle `self`-`rhs`-`p2` where
    /// `|self p2| = d0` and `|rhs p2| = d1`, taken counter-clockwise from the
    /// edge `self -> rhs`. Swap the points (and lengths) for the other apex.
    ///
    /// Return `None` if the three lengths cannot form a triangle.
    fn pllp(&self, d0: f64, d1: f64, rhs: &Self) -> Option<Self> {
        let d2 = self.dist(rhs);
        if !(d0.is_finite() && d1.is_finite() && d2.is_finite()) {
            return None;
        }
        if d0 <= 0. || d1 <= 0. || d2 <= 0. {
            return None;
        }
        let c = (d1 * d1 - d0 * d0 - d2 * d2) / (-2. * d0 * d2);
        if !(-1. - COS_EPS..=1. + COS_EPS).contains(&c) {
            return None;
        }
        Some(self.plap(d0, c.clamp(-1., 1.).acos(), rhs))
    }
}

impl Point for [f64; 2] {
    #[inline(always)]
    fn point(x: f64, y: f64) -> Self {
        [x, y]
    }
    #[inline(always)]
    fn x(&self) -> f64 {
        self[0]
    }
    #[inline(always)]
    fn y(&self) -> f64 {
        self[1]
    }
}

impl Point for (f64, f64) {
    #[inline(always)]
    fn point(x: f64, y: f64) -> Self {
        (x, y)
    }
    #[inline(always)]
    fn x(&self) -> f64 {
        self.0
    }
    #[inline(always)]
    fn y(&self) -> f64 {
        self.1
    }
}

use super::SegmentKind;
use crate::{Config, Point, Ref, Result};

/// A joint closed by two links.
///
/// The output `p2` is the apex of the triangle with `|p0 p2| = len0` and
/// `|p1 p2| = len1`, counter-clockwise from the edge `p0 -> p1`. Swap
/// `p0`/`p1` together with `len0`/`len1` to pick the mirrored apex.
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Passive {
    /// First base point
    pub p0: Ref,
    /// Second base point
    pub p1: Ref,
    /// Link length of `p0`-`p2`
    pub len0: Ref,
    /// Link length of `p1`-`p2`
    pub len1: Ref,
    /// Output point
    pub p2: Ref,
}

/// Input values of a [`Passive`].
#[derive(Clone, Debug, PartialEq)]
pub struct PassiveInput {
    /// First base point
    pub p0: [f64; 2],
    /// Second base point
    pub p1: [f64; 2],
    /// Link length of `p0`-`p2`
    pub len0: f64,
    /// Link length of `p1`-`p2`
    pub len1: f64,
}

impl Passive {
    /// Create a new instance.
    pub fn new<S: Into<String>>(p0: S, p1: S, len0: S, len1: S, p2: S) -> Self {
        Self {
            p0: p0.into(),
            p1: p1.into(),
            len0: len0.into(),
            len1: len1.into(),
            p2: p2.into(),
        }
    }

    /// The same triangle with the mirrored apex.
    pub fn mirror(&self) -> Self {
        Self {
            p0: self.p1.clone(),
            p1: self.p0.clone(),
            len0: self.len1.clone(),
            len1: self.len0.clone(),
            p2: self.p2.clone(),
        }
    }
}

impl SegmentKind for Passive {
    type Input = PassiveInput;
    type Output = [f64; 2];

    fn target(&self) -> &str {
        &self.p2
    }

    fn is_ready(&self, cfg: &Config) -> bool {
        cfg.has_point(&self.p2)
    }

    fn gather_input(&self, cfg: &Config) -> Result<Option<Self::Input>> {
        let len0 = cfg.length_strict(&self.len0)?;
        let len1 = cfg.length_strict(&self.len1)?;
        // Base points are usually the outputs of other segments
        let (Some(p0), Some(p1)) = (cfg.point(&self.p0), cfg.point(&self.p1)) else {
            return Ok(None);
        };
        Ok(Some(PassiveInput { p0, p1, len0, len1 }))
    }

    fn solve(&self, input: Self::Input) -> Option<Self::Output> {
        let PassiveInput { p0, p1, len0, len1 } = input;
        p0.pllp(len0, len1, &p1)
    }

    fn commit(&self, cfg: &mut Config, output: Self::Output) {
        cfg.set_point(self.p2.clone(), output);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    const CASES: [([f64; 2], [f64; 2], f64, f64); 4] = [
        ([0., 0.], [4., 0.], 3., 2.),
        ([1., -2.], [-3., 5.], 6., 4.5),
        ([0., 0.], [1., 1.], 1., 1.),
        ([2., 2.], [2., 7.], 0.5, 4.9),
    ];

    #[test]
    fn triangle_law() {
        let s = Passive::new("p0", "p1", "l0", "l1", "p2");
        for (p0, p1, len0, len1) in CASES {
            let p2 = s.solve(PassiveInput { p0, p1, len0, len1 }).unwrap();
            assert_abs_diff_eq!(p0.dist(&p2), len0, epsilon = 1e-9);
            assert_abs_diff_eq!(p1.dist(&p2), len1, epsilon = 1e-9);
        }
    }

    #[test]
    fn swap_symmetry() {
        let s = Passive::new("p0", "p1", "l0", "l1", "p2");
        for (p0, p1, len0, len1) in CASES {
            let a = s.solve(PassiveInput { p0, p1, len0, len1 }).unwrap();
            let b = s.solve(PassiveInput { p0: p1, p1: p0, len0: len1, len1: len0 }).unwrap();
            // Reflect `a` across the line p0-p1
            let [dx, dy] = [p1[0] - p0[0], p1[1] - p0[1]];
            let t = ((a[0] - p0[0]) * dx + (a[1] - p0[1]) * dy) / (dx * dx + dy * dy);
            let foot = [p0[0] + t * dx, p0[1] + t * dy];
            assert_abs_diff_eq!(2. * foot[0] - a[0], b[0], epsilon = 1e-9);
            assert_abs_diff_eq!(2. * foot[1] - a[1], b[1], epsilon = 1e-9);
        }
    }

    #[test]
    fn counter_clockwise_apex() {
        let s = Passive::new("p0", "p1", "l0", "l1", "p2");
        let input = PassiveInput { p0: [0., 0.], p1: [4., 0.], len0: 3., len1: 2. };
        assert!(s.solve(input).unwrap()[1] > 0.);
        assert_eq!(s.mirror().mirror(), s);
    }

    #[test]
    fn pending_points() {
        let s = Passive::new("p0", "p1", "l0", "l1", "p2");
        let mut cfg = Config::new();
        cfg.set_length("l0", 1.);
        cfg.set_length("l1", 1.);
        cfg.set_point("p1", [1., 0.]);
        assert_eq!(s.gather_input(&cfg), Ok(None));
        cfg.set_point("p0", [0., 0.]);
        assert!(s.gather_input(&cfg).unwrap().is_some());
    }
}

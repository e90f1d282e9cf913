use super::SegmentKind;
use crate::{Config, Point, Ref, Result};

/// A driven joint.
///
/// The output `p2` is placed at length `len` from `p0`, rotated by the drive
/// angle `theta` from the edge `p0 -> p1`.
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Motor {
    /// Pivot point
    pub p0: Ref,
    /// Reference edge end point
    pub p1: Ref,
    /// Drive angle
    pub theta: Ref,
    /// Driver link length
    pub len: Ref,
    /// Output point
    pub p2: Ref,
}

/// Input values of a [`Motor`].
#[derive(Clone, Debug, PartialEq)]
pub struct MotorInput {
    /// Pivot point
    pub p0: [f64; 2],
    /// Reference edge end point
    pub p1: [f64; 2],
    /// Drive angle
    pub theta: f64,
    /// Driver link length
    pub len: f64,
}

impl Motor {
    /// Create a new instance.
    pub fn new<S: Into<String>>(p0: S, p1: S, theta: S, len: S, p2: S) -> Self {
        Self {
            p0: p0.into(),
            p1: p1.into(),
            theta: theta.into(),
            len: len.into(),
            p2: p2.into(),
        }
    }
}

impl SegmentKind for Motor {
    type Input = MotorInput;
    type Output = [f64; 2];

    fn target(&self) -> &str {
        &self.p2
    }

    fn is_ready(&self, cfg: &Config) -> bool {
        cfg.has_point(&self.p2)
    }

    fn gather_input(&self, cfg: &Config) -> Result<Option<Self::Input>> {
        let theta = cfg.angle_strict(&self.theta)?;
        let len = cfg.length_strict(&self.len)?;
        let (Some(p0), Some(p1)) = (cfg.point(&self.p0), cfg.point(&self.p1)) else {
            return Ok(None);
        };
        Ok(Some(MotorInput { p0, p1, theta, len }))
    }

    fn solve(&self, input: Self::Input) -> Option<Self::Output> {
        let MotorInput { p0, p1, theta, len } = input;
        Some(p0.plap(len, theta, &p1))
    }

    fn commit(&self, cfg: &mut Config, output: Self::Output) {
        cfg.set_point(self.p2.clone(), output);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn input(theta: f64, len: f64) -> MotorInput {
        MotorInput { p0: [1., 1.], p1: [3., 2.], theta, len }
    }

    #[test]
    fn driven_joint() {
        let m = Motor::new("p0", "p1", "a", "l", "p2");
        for (theta, len) in [(0.7, 2.5), (-1.2, 0.3), (3., 10.)] {
            let p2 = m.solve(input(theta, len)).unwrap();
            assert_eq!(m.solve(input(theta, len)), Some(p2));
            let [p0, p1]: [[f64; 2]; 2] = [[1., 1.], [3., 2.]];
            assert_abs_diff_eq!(p0.dist(&p2), len, epsilon = 1e-12);
            let a = p0.angle_to(&p2) - p0.angle_to(&p1);
            assert_abs_diff_eq!(a.sin(), theta.sin(), epsilon = 1e-12);
            assert_abs_diff_eq!(a.cos(), theta.cos(), epsilon = 1e-12);
        }
    }

    #[test]
    fn pending_points() {
        let m = Motor::new("p0", "p1", "a", "l", "p2");
        let mut cfg = Config::new();
        cfg.set_angle("a", 0.);
        cfg.set_length("l", 1.);
        cfg.set_point("p0", [0., 0.]);
        assert_eq!(m.gather_input(&cfg), Ok(None));
        cfg.set_point("p1", [1., 0.]);
        assert!(m.gather_input(&cfg).unwrap().is_some());
        assert!(!m.is_ready(&cfg));
        m.commit(&mut cfg, [1., 0.]);
        assert!(m.is_ready(&cfg));
    }
}

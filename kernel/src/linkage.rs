//! Linkage description and its resolution.
use crate::{forward_all, Config, Ref, Result, Segment};
use std::collections::HashMap;

/// Static description of a planar linkage.
///
/// + Anchor points are ground-truth positions and never computed.
/// + Lengths are the fixed link lengths.
/// + Segments are the joints to be computed, in any order.
///
/// The drive angles are supplied on each [`Linkage::forward()`] call.
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "serde", serde(default))]
#[derive(Clone, Debug, PartialEq, Default)]
pub struct Linkage {
    /// Anchor points
    pub points: HashMap<Ref, [f64; 2]>,
    /// Link lengths
    pub lengths: HashMap<Ref, f64>,
    /// Segments
    pub segments: Vec<Segment>,
}

impl Linkage {
    /// Create an empty linkage.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build with an anchor point.
    pub fn with_point(mut self, name: impl Into<Ref>, p: [f64; 2]) -> Self {
        self.add_point(name, p);
        self
    }

    /// Build with a link length.
    pub fn with_length(mut self, name: impl Into<Ref>, len: f64) -> Self {
        self.add_length(name, len);
        self
    }

    /// Build with a segment.
    pub fn with_segment(mut self, seg: impl Into<Segment>) -> Self {
        self.add_segment(seg);
        self
    }

    /// Build with a motor segment. See [`Segment::motor()`].
    pub fn motor<S: Into<String>>(self, p0: S, p1: S, theta: S, len: S, p2: S) -> Self {
        self.with_segment(Segment::motor(p0, p1, theta, len, p2))
    }

    /// Build with a passive segment. See [`Segment::passive()`].
    pub fn passive<S: Into<String>>(self, p0: S, p1: S, len0: S, len1: S, p2: S) -> Self {
        self.with_segment(Segment::passive(p0, p1, len0, len1, p2))
    }

    /// Add an anchor point.
    pub fn add_point(&mut self, name: impl Into<Ref>, p: [f64; 2]) {
        self.points.insert(name.into(), p);
    }

    /// Add a link length.
    pub fn add_length(&mut self, name: impl Into<Ref>, len: f64) {
        self.lengths.insert(name.into(), len);
    }

    /// Add a segment.
    pub fn add_segment(&mut self, seg: impl Into<Segment>) {
        self.segments.push(seg.into());
    }

    /// Output points of the segments, in segment order.
    pub fn joints(&self) -> Vec<&str> {
        use crate::SegmentKind as _;
        self.segments.iter().map(|s| s.target()).collect()
    }

    /// A fresh store seeded with the anchors, the lengths and the angles.
    pub fn seed<I, S>(&self, angles: I) -> Config
    where
        I: IntoIterator<Item = (S, f64)>,
        S: Into<Ref>,
    {
        Config {
            points: self.points.clone(),
            lengths: self.lengths.clone(),
            angles: angles.into_iter().map(|(k, a)| (k.into(), a)).collect(),
        }
    }

    /// Resolve every joint with the drive angles.
    ///
    /// Return the resolved configuration, including the anchors, the lengths
    /// and the angles.
    pub fn forward<I, S>(&self, angles: I) -> Result<Config>
    where
        I: IntoIterator<Item = (S, f64)>,
        S: Into<Ref>,
    {
        let mut cfg = self.seed(angles);
        forward_all(&self.segments, &mut cfg)?;
        Ok(cfg)
    }

    /// Resolve the linkage once per angle of a single drive.
    ///
    /// Every item is a separated run with its own store.
    pub fn forward_iter<'a, I>(
        &'a self,
        drive: &'a str,
        iter: I,
    ) -> impl Iterator<Item = Result<Config>> + 'a
    where
        I: IntoIterator<Item = f64>,
        I::IntoIter: 'a,
    {
        iter.into_iter().map(move |a| self.forward([(drive, a)]))
    }

    /// Trajectory of the `target` joint in the range of the `drive` angle.
    ///
    /// The angles where the linkage cannot be assembled are skipped, other
    /// errors are returned.
    pub fn curve_in(
        &self,
        drive: &str,
        target: &str,
        start: f64,
        end: f64,
        res: usize,
    ) -> Result<Vec<[f64; 2]>> {
        let mut curve = Vec::with_capacity(res);
        for cfg in self.forward_iter(drive, linspace(start, end, res)) {
            match cfg {
                Ok(cfg) => curve.extend(cfg.point(target)),
                Err(e) if e.is_geometry() => continue,
                Err(e) => return Err(e),
            }
        }
        Ok(curve)
    }

    /// Trajectory of the `target` joint in a full turn of the `drive` angle.
    pub fn curve(&self, drive: &str, target: &str, res: usize) -> Result<Vec<[f64; 2]>> {
        self.curve_in(drive, target, 0., std::f64::consts::TAU, res)
    }
}

/// Resolve a linkage with the drive angles. See [`Linkage::forward()`].
pub fn forward_linkage<I, S>(linkage: &Linkage, angles: I) -> Result<Config>
where
    I: IntoIterator<Item = (S, f64)>,
    S: Into<Ref>,
{
    linkage.forward(angles)
}

fn linspace(start: f64, end: f64, res: usize) -> impl Iterator<Item = f64> {
    let step = (end - start) / res as f64;
    (0..res).map(move |n| start + n as f64 * step)
}

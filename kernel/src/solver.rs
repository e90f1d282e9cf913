//! Fixed-point resolution of the segment graph.
//!
//! The segments are not required to be sorted by dependency. The solver
//! sweeps the list repeatedly and resolves every segment whose input points
//! are known, until a sweep makes no progress.
use crate::{Config, Error, Result, SegmentKind};
use std::collections::HashSet;

/// Outcome of one segment step.
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub enum Step {
    /// The output was already in the store.
    Ready,
    /// The output was computed and written.
    Solved,
    /// An input point is not known yet.
    Pending,
}

impl Step {
    /// Return true if the segment is resolved after this step.
    pub fn is_resolved(&self) -> bool {
        matches!(self, Self::Ready | Self::Solved)
    }
}

/// Forward one segment.
///
/// The `index` is only used to report [`Error::Geometry`].
pub fn forward_segment<K>(index: usize, seg: &K, cfg: &mut Config) -> Result<Step>
where
    K: SegmentKind + ?Sized,
{
    if seg.is_ready(cfg) {
        return Ok(Step::Ready);
    }
    let Some(input) = seg.gather_input(cfg)? else {
        return Ok(Step::Pending);
    };
    let output = seg.solve(input).ok_or_else(|| Error::Geometry {
        index,
        target: seg.target().to_string(),
    })?;
    seg.commit(cfg, output);
    log::trace!("segment {index} solved `{}`", seg.target());
    Ok(Step::Solved)
}

/// Forward all segments in any order.
///
/// Return [`Error::Duplicate`] if two segments compute the same point, and
/// [`Error::Unresolved`] with the stalled segment indices if a sweep makes no
/// progress before every segment is resolved.
pub fn forward_all<K: SegmentKind>(segs: &[K], cfg: &mut Config) -> Result<()> {
    let mut targets = HashSet::with_capacity(segs.len());
    for (index, seg) in segs.iter().enumerate() {
        if !targets.insert(seg.target()) {
            let target = seg.target().to_string();
            return Err(Error::Duplicate { target, index });
        }
    }
    let mut resolved = vec![false; segs.len()];
    let mut count = 0;
    let mut sweep = 0;
    while count < segs.len() {
        sweep += 1;
        let last = count;
        for (i, seg) in segs.iter().enumerate() {
            if !resolved[i] && forward_segment(i, seg, cfg)?.is_resolved() {
                resolved[i] = true;
                count += 1;
            }
        }
        log::debug!("sweep {sweep}: {count}/{} segments resolved", segs.len());
        if count == last {
            let indices = (0..segs.len()).filter(|&i| !resolved[i]).collect::<Vec<_>>();
            log::debug!("stalled at sweep {sweep}, unresolved: {indices:?}");
            return Err(Error::Unresolved { indices });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Segment;

    fn seed() -> Config {
        let mut cfg = Config::new();
        cfg.set_point("p0", [0., 0.]);
        cfg.set_point("p1", [1., 0.]);
        cfg.set_length("l", 1.);
        cfg.set_angle("a", 0.5);
        cfg
    }

    #[test]
    fn step_states() {
        let mut cfg = seed();
        let s = Segment::motor("p0", "p1", "a", "l", "p2");
        assert_eq!(forward_segment(0, &s, &mut cfg), Ok(Step::Solved));
        let p2 = cfg.point("p2");
        assert_eq!(forward_segment(0, &s, &mut cfg), Ok(Step::Ready));
        assert_eq!(cfg.point("p2"), p2);
        let s = Segment::motor("p3", "p1", "a", "l", "p4");
        assert_eq!(forward_segment(1, &s, &mut cfg), Ok(Step::Pending));
    }

    #[test]
    fn empty_list() {
        let mut cfg = seed();
        assert_eq!(forward_all::<Segment>(&[], &mut cfg), Ok(()));
        assert_eq!(cfg, seed());
    }

    #[test]
    fn circular_dependency() {
        let mut cfg = seed();
        let segs = [
            Segment::motor("p0", "p1", "a", "l", "p2"),
            Segment::passive("p3", "p4", "l", "l", "p5"),
            Segment::passive("p5", "p2", "l", "l", "p3"),
            Segment::passive("p0", "p3", "l", "l", "p4"),
        ];
        let err = forward_all(&segs, &mut cfg).unwrap_err();
        assert_eq!(err, Error::Unresolved { indices: vec![1, 2, 3] });
        assert!(cfg.has_point("p2"));
    }

    #[test]
    fn duplicate_targets() {
        let segs = [
            Segment::motor("p0", "p1", "a", "l", "p2"),
            Segment::passive("p0", "p1", "l", "l", "p2"),
        ];
        for segs in [segs.clone(), [segs[1].clone(), segs[0].clone()]] {
            let mut cfg = seed();
            let err = forward_all(&segs, &mut cfg).unwrap_err();
            assert_eq!(err, Error::Duplicate { target: "p2".to_string(), index: 1 });
            assert!(!cfg.has_point("p2"));
        }
    }

    #[test]
    fn resweep_is_stable() {
        let mut cfg = seed();
        let segs = [
            Segment::passive("p2", "p1", "l", "l", "p3"),
            Segment::motor("p0", "p1", "a", "l", "p2"),
        ];
        forward_all(&segs, &mut cfg).unwrap();
        let first = cfg.clone();
        forward_all(&segs, &mut cfg).unwrap();
        assert_eq!(cfg, first);
    }
}

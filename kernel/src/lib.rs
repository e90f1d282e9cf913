//! Linkage kernel resolves the joint positions of planar linkage mechanisms.
//!
//! A [`Linkage`] is a set of anchor points, link lengths and [`Segment`]s.
//! Each segment computes one joint from points that are either anchors or the
//! outputs of other segments, so the segments form a dependency graph. The
//! [solver](forward_all) resolves the graph without requiring a sorted list.
//!
//! ```
//! use linkage::Linkage;
//! use std::f64::consts::FRAC_PI_2;
//!
//! let linkage = Linkage::new()
//!     .with_point("p0", [0., 0.])
//!     .with_point("p1", [1., 0.])
//!     .with_length("l0", 1.)
//!     .with_length("l1", 1.)
//!     .passive("p2", "p1", "l1", "l1", "p3")
//!     .motor("p0", "p1", "theta", "l0", "p2");
//! let cfg = linkage.forward([("theta", FRAC_PI_2)]).unwrap();
//! let [x, y] = cfg.point("p3").unwrap();
//! assert!((x - 1.).abs() < 1e-9 && (y - 1.).abs() < 1e-9);
//! ```
#![cfg_attr(doc_cfg, feature(doc_cfg))]
pub use crate::{config::*, error::*, linkage::*, point::*, segment::*, solver::*};

mod config;
mod error;
mod linkage;
mod point;
pub mod segment;
mod solver;

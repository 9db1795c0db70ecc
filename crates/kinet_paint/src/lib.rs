//! Kinet 2D Geometry
//!
//! Points, paths, curved transition construction, and arc-length sampling.
//!
//! # Features
//!
//! - **Paths**: command-based 2D paths with a consuming builder
//! - **Arc Construction**: curved point-to-point transition paths with a
//!   guaranteed minimum bulge
//! - **Path Measurement**: flatten-once arc-length sampling for fetching the
//!   point at a fractional progress along a path

pub mod arc;
pub mod measure;
pub mod path;

pub use arc::{arc_between, MIN_BOUND_DIST};
pub use measure::PathMeasure;
pub use path::{Path, PathBuilder, PathCommand, Point};

//! Court geometry
//!
//! This module provides:
//! - Canvas constants (logical size, margins, gaps)
//! - The 10-point control mesh and its clamp pipeline
//! - Zone derivation (junctions, quads, centroids) and hit testing

pub mod constants;
pub mod mesh;
pub mod zone;

pub use mesh::{clamp_to_canvas, CanvasPos, ControlPointId, Mesh};
pub use zone::{
    all_zone_quads, centroid, point_in_quad, seam_junctions, zone_at, zone_centroid, zone_quad,
    SeamJunctions, Zone, ZoneQuad,
};

//! Court canvas constants
//!
//! All geometry runs in one fixed logical coordinate space so that saved
//! meshes stay valid regardless of the host's physical resolution.

// ============================================================
// Canvas
// ============================================================
pub mod canvas {
    /// Logical canvas width (x axis, net edge to net edge)
    pub const WIDTH: f32 = 1000.0;

    /// Logical canvas height (y axis, net edge y=0 down to baseline)
    pub const HEIGHT: f32 = 1400.0;
}

// ============================================================
// Lane seams (the two near-vertical column dividers)
// ============================================================
pub mod seam {
    /// Minimum distance of a seam endpoint from the left/right edges
    pub const SIDE_MARGIN: f32 = 60.0;

    /// Minimum horizontal distance between seam A and seam B, enforced
    /// at the top edge and the bottom edge independently
    pub const MIN_GAP: f32 = 120.0;
}

// ============================================================
// Attack line (the horizontal front/back divider)
// ============================================================
pub mod attack {
    /// Minimum distance of the attack line from the net edge and baseline
    pub const EDGE_MARGIN: f32 = 140.0;
}

// ============================================================
// Derived junctions (seam x attack-line intersections)
// ============================================================
pub mod junction {
    /// Minimum horizontal distance kept between the two junctions
    pub const MIN_GAP: f32 = 60.0;

    /// Determinant magnitude below which two lines count as parallel
    pub const INTERSECT_EPSILON: f32 = 1e-4;
}

// ============================================================
// Hit testing
// ============================================================
pub mod hit {
    /// Added to the edge-slope denominator in the ray-cast parity test
    /// so near-horizontal edges never divide by zero
    pub const EDGE_EPSILON: f32 = f32::EPSILON;
}
